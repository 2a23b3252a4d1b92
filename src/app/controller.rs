//! Drag-Controller: Gesten-Zustandsmaschine mit entkoppeltem Repaint.

use std::time::Instant;

use glam::Vec2;

use super::events::{CursorIcon, EventResponse, PointerEvent, PointerKind};
use super::picking;
use crate::core::{screen_to_ndc, solve_line_offset, solve_node_position, Diagram, Ray};
use crate::shared::{DragOptions, DragTarget, SceneView};

/// Zustandsmaschine für das Ziehen von Diagramm-Elementen.
///
/// Idle ⇄ Dragging: ein Press mit Gesten-Modifier und Raycast-Treffer
/// startet die Geste, ein Release beendet sie. Move-Events lösen nie direkt
/// einen Solve aus; sie setzen nur einen Repaint-Wunsch, den der Host-Timer
/// über [`DragController::poll`] mit der konfigurierten Periode abarbeitet.
/// So entsteht höchstens ein Repaint pro Intervall, plus ein garantierter
/// finaler Repaint beim Release.
///
/// Der Host registriert Move/Release-Listener nur solange
/// [`DragController::is_dragging`] gilt und betreibt in dieser Zeit den
/// Poll-Timer; ein verspäteter `poll` nach Gesten-Ende ist garantiert ein
/// No-op.
#[derive(Debug)]
pub struct DragController {
    options: DragOptions,
    /// Controller komplett stummschalten (z.B. während Bulk-Updates des Hosts)
    enabled: bool,
    /// Zuletzt bekannte Zeigerposition in NDC
    pointer_ndc: Vec2,
    /// Aktuell gezogenes Element; `None` = Idle
    dragged: Option<DragTarget>,
    /// Zeitstempel des ältesten unbearbeiteten Repaint-Wunschs
    repaint_request: Option<Instant>,
    cursor: CursorIcon,
}

impl DragController {
    /// Erstellt einen neuen Controller im Idle-Zustand
    pub fn new(options: DragOptions) -> Self {
        Self {
            options,
            enabled: true,
            pointer_ndc: Vec2::ZERO,
            dragged: None,
            repaint_request: None,
            cursor: CursorIcon::Default,
        }
    }

    /// Gibt `true` zurück, solange eine Geste aktiv ist
    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }

    /// Aktuell gezogenes Element (für Host-Diagnose)
    pub fn dragged(&self) -> Option<DragTarget> {
        self.dragged
    }

    /// Cursor-Affordanz, die der Host anzeigen soll
    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    /// Schaltet den Controller frei oder stumm.
    /// Beim Stummschalten wird eine laufende Geste sofort beendet.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled && self.dragged.is_some() {
            self.end_drag();
        }
    }

    /// Gibt zurück ob der Controller Events verarbeitet
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Zentraler Event-Einstieg für Press/Move/Release.
    ///
    /// `now` ist der Zeitpunkt des Events nach der Uhr des Hosts; alle
    /// Debounce-Entscheidungen rechnen gegen dieselbe Uhr wie `poll`.
    pub fn handle_event(
        &mut self,
        event: &PointerEvent,
        diagram: &mut Diagram,
        scene: &mut dyn SceneView,
        now: Instant,
    ) -> EventResponse {
        if !self.enabled {
            return EventResponse::ignored();
        }

        match event.kind {
            PointerKind::Press => self.drag_start(event, scene),
            PointerKind::Move => self.drag_over(event, now),
            PointerKind::Release => self.drop(event, diagram, scene),
        }
    }

    /// Periodischer Tick des Host-Timers während einer Geste.
    ///
    /// Führt den ausstehenden Repaint aus, sobald er älter als das
    /// konfigurierte Intervall ist. Ohne aktive Geste oder ohne
    /// Repaint-Wunsch: No-op.
    pub fn poll(&mut self, diagram: &mut Diagram, scene: &mut dyn SceneView, now: Instant) {
        if self.dragged.is_none() {
            return;
        }
        let Some(requested) = self.repaint_request else {
            return;
        };

        if now.duration_since(requested) > self.options.repaint_interval() {
            self.repaint(diagram, scene);
        }
    }

    // ── Drag-Start ──────────────────────────────────────────────

    fn drag_start(&mut self, event: &PointerEvent, scene: &mut dyn SceneView) -> EventResponse {
        if !event.modifiers.has(self.options.gesture_modifier) {
            return EventResponse::ignored();
        }

        self.pointer_ndc = screen_to_ndc(event.screen_pos, &event.canvas);
        let ray = self.pick_ray(scene);

        // Kein Treffer → Geste kommt nicht zustande, Event läuft normal weiter
        let Some(hit) = picking::pick_nearest(&ray, scene, &self.options) else {
            return EventResponse::ignored();
        };

        log::debug!(
            "Drag gestartet: {:?} (Distanz {:.3})",
            hit.target,
            hit.distance
        );
        self.dragged = Some(hit.target);
        self.repaint_request = None;
        self.cursor = CursorIcon::Move;

        EventResponse::consumed()
    }

    // ── Drag-Over ───────────────────────────────────────────────

    fn drag_over(&mut self, event: &PointerEvent, now: Instant) -> EventResponse {
        if self.dragged.is_none() {
            return EventResponse::ignored();
        }

        self.pointer_ndc = screen_to_ndc(event.screen_pos, &event.canvas);
        // Debounce: ein bereits ausstehender Wunsch behält seinen Zeitstempel,
        // sonst würde kontinuierliches Ziehen den Repaint endlos verschieben
        self.repaint_request.get_or_insert(now);

        EventResponse::consumed()
    }

    // ── Drop ────────────────────────────────────────────────────

    fn drop(
        &mut self,
        event: &PointerEvent,
        diagram: &mut Diagram,
        scene: &mut dyn SceneView,
    ) -> EventResponse {
        if self.dragged.is_none() {
            return EventResponse::ignored();
        }

        // Finaler Repaint immer mit den Release-Koordinaten, nicht mit dem
        // letzten gepollten Stand
        self.pointer_ndc = screen_to_ndc(event.screen_pos, &event.canvas);
        self.repaint(diagram, scene);
        self.end_drag();

        EventResponse::consumed()
    }

    fn end_drag(&mut self) {
        log::debug!("Drag beendet");
        self.dragged = None;
        self.repaint_request = None;
        self.cursor = CursorIcon::Default;
    }

    // ── Repaint (Solve + Redraw) ────────────────────────────────

    /// Löst die Constraint-Geometrie für das gezogene Element und stößt die
    /// abhängigen visuellen Updates an.
    fn repaint(&mut self, diagram: &mut Diagram, scene: &mut dyn SceneView) {
        let Some(target) = self.dragged else {
            return;
        };

        let ray = self.pick_ray(scene);
        match target {
            DragTarget::Line(line_id) => Self::repaint_line(line_id, &ray, diagram, scene),
            DragTarget::Node(node_id) => Self::repaint_node(node_id, &ray, diagram, scene),
        }

        self.repaint_request = None;
    }

    fn repaint_line(line_id: u64, ray: &Ray, diagram: &mut Diagram, scene: &mut dyn SceneView) {
        let Some(line) = diagram.line(line_id).copied() else {
            return;
        };

        let center = scene.line_center(&line);
        let Some(offset) = solve_line_offset(&line, center, ray) else {
            log::trace!("Singuläre Linien-Geometrie, Update übersprungen");
            return;
        };

        diagram.set_line_curve(line_id, offset);

        let settings = scene.settings();
        scene.update_lines(&settings);
        scene.update_arrowheads(&settings);
    }

    fn repaint_node(node_id: u64, ray: &Ray, diagram: &mut Diagram, scene: &mut dyn SceneView) {
        let Some(node) = diagram.node(node_id).copied() else {
            return;
        };

        let Some(new_position) = solve_node_position(node.position, ray) else {
            log::trace!("Singuläre Node-Geometrie, Update übersprungen");
            return;
        };

        diagram.update_node_position(node_id, new_position);

        let settings = scene.settings();
        scene.update_nodes(&settings);
        scene.update_highlights(&settings);
        scene.update_labels(&settings);
        scene.update_lines(&settings);
        scene.update_arrowheads(&settings);
        scene.render();
    }

    fn pick_ray(&self, scene: &dyn SceneView) -> Ray {
        scene.camera().pick_ray(self.pointer_ndc)
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(DragOptions::default())
    }
}
