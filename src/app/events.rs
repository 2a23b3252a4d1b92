//! Pointer-Event-Typen: der minimale Press/Move/Release-Vertrag zum Host.

use glam::Vec2;

use crate::core::CanvasRect;
use crate::shared::GestureModifier;

/// Art des Pointer-Events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Taste gedrückt
    Press,
    /// Zeiger bewegt
    Move,
    /// Taste losgelassen
    Release,
}

/// Modifier-Tasten zum Zeitpunkt des Events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift gedrückt
    pub shift: bool,
    /// Alt gedrückt
    pub alt: bool,
    /// Strg bzw. Cmd gedrückt
    pub ctrl: bool,
}

impl Modifiers {
    /// Prüft ob der konfigurierte Gesten-Modifier gedrückt ist
    pub fn has(&self, modifier: GestureModifier) -> bool {
        match modifier {
            GestureModifier::Shift => self.shift,
            GestureModifier::Alt => self.alt,
            GestureModifier::Ctrl => self.ctrl,
        }
    }
}

/// Roh-Pointer-Event aus dem Eventsystem des Hosts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Art des Events
    pub kind: PointerKind,
    /// Zeigerposition in Screen-Pixeln
    pub screen_pos: Vec2,
    /// Bounding-Rect des Canvas in Screen-Pixeln
    pub canvas: CanvasRect,
    /// Modifier-Zustand
    pub modifiers: Modifiers,
}

/// Antwort des Controllers an den Host.
///
/// `consumed` ist nur gesetzt, wenn das Event Teil einer Geste war; nur dann
/// darf der Host Default-Handling und Propagation unterdrücken. Gewöhnliche
/// Klicks laufen unverändert durch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventResponse {
    /// Event wurde von der Geste verbraucht
    pub consumed: bool,
}

impl EventResponse {
    /// Event verbraucht: Host soll Default-Handling unterdrücken
    pub fn consumed() -> Self {
        Self { consumed: true }
    }

    /// Event ignoriert: Host behandelt es normal weiter
    pub fn ignored() -> Self {
        Self { consumed: false }
    }
}

/// Cursor-Affordanz, die der Host anzeigen soll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorIcon {
    /// Normaler Zeiger
    #[default]
    Default,
    /// Verschiebe-Cursor während einer aktiven Geste
    Move,
}
