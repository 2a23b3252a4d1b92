//! `SceneView`-Vertrag: die Renderer-Seite des Diagramms aus Sicht des Controllers.

use glam::Vec3;

use crate::core::{Camera3D, DiagramLine, Ray};

/// Globale Stil-Einstellungen der Szene (`userData` des Renderers).
///
/// Der Controller liest sie, überschreibt die Linienbreite temporär für den
/// Pick-Raycast und stellt sie danach wieder her.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneSettings {
    /// Globale Linienbreite in Pixeln
    pub line_width: f32,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self { line_width: 7.0 }
    }
}

/// Referenz auf ein ziehbares Element im Diagramm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// Linie, identifiziert über ihre Diagramm-ID
    Line(u64),
    /// Node, identifiziert über seine Diagramm-ID
    Node(u64),
}

/// Einzelner Treffer eines Raycasts gegen pickbare Objekte
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// Getroffenes Element
    pub target: DragTarget,
    /// Distanz vom Ray-Ursprung zum Schnittpunkt
    pub distance: f32,
}

/// Vertrag des externen Diagramm-/Rendering-Kollaborateurs.
///
/// Alle `update_*`-Operationen zeichnen einen visuellen Aspekt aus dem
/// aktuellen Datenmodell neu; sie sind synchron und idempotent. Ein Frame
/// wird erst durch `render()` sichtbar.
pub trait SceneView {
    /// Aktuelle globale Stil-Einstellungen
    fn settings(&self) -> SceneSettings;

    /// Kamera für Ray-Konstruktion und Projektion
    fn camera(&self) -> &Camera3D;

    /// Aktueller 3D-Mittelpunkt, der die Kurven-Ebene einer Linie definiert
    fn line_center(&self, line: &DiagramLine) -> Vec3;

    /// Raycast gegen alle pickbaren Linien und Nodes.
    ///
    /// `line_precision` ist der Toleranz-Schwellwert für das Picken dünner
    /// Linien. Die Reihenfolge der Treffer ist nicht garantiert; der
    /// Hit-Test-Adapter sortiert nach Distanz.
    fn raycast(&self, ray: &Ray, line_precision: f32) -> Vec<PickHit>;

    /// Baut die Linien-Geometrie aus dem Datenmodell neu auf
    fn update_lines(&mut self, settings: &SceneSettings);
    /// Baut die Pfeilspitzen neu auf
    fn update_arrowheads(&mut self, settings: &SceneSettings);
    /// Baut die Node-Darstellung neu auf
    fn update_nodes(&mut self, settings: &SceneSettings);
    /// Baut die Hervorhebungen neu auf
    fn update_highlights(&mut self, settings: &SceneSettings);
    /// Baut die Beschriftungen neu auf
    fn update_labels(&mut self, settings: &SceneSettings);
    /// Zeichnet einen Frame aus dem aktuellen Szenen-Zustand
    fn render(&mut self);
}
