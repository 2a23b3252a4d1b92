//! Zentrale Konfiguration für den Drag-Controller.
//!
//! `DragOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use std::time::Duration;

use serde::{Deserialize, Serialize};

// ── Picking ─────────────────────────────────────────────────────────

/// Linienbreite (Pixel), auf die alle Linien für den Pick-Raycast
/// temporär verschmälert werden.
pub const PICK_LINE_WIDTH: f32 = 1.0;
/// Toleranz-Schwellwert des Raycasters für das Picken von Linien.
pub const PICK_LINE_PRECISION: f32 = 0.01;

// ── Repaint ─────────────────────────────────────────────────────────

/// Debounce-Fenster und Poll-Periode für Repaints während eines Drags (ms).
pub const REPAINT_INTERVAL_MS: u64 = 100;

/// Modifier-Taste, die eine Drag-Geste scharfschaltet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GestureModifier {
    /// Shift-Taste (Standard)
    #[default]
    Shift,
    /// Alt-Taste
    Alt,
    /// Strg- bzw. Cmd-Taste
    Ctrl,
}

/// Alle zur Laufzeit änderbaren Controller-Optionen.
/// Wird als `diagram3d_dnd.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DragOptions {
    /// Linienbreite für den Pick-Raycast (Pixel)
    pub pick_line_width: f32,
    /// Toleranz-Schwellwert für das Linien-Picking
    pub pick_line_precision: f32,
    /// Debounce-Fenster und Poll-Periode für Repaints (ms)
    pub repaint_interval_ms: u64,
    /// Modifier-Taste für die Drag-Geste
    #[serde(default)]
    pub gesture_modifier: GestureModifier,
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            pick_line_width: PICK_LINE_WIDTH,
            pick_line_precision: PICK_LINE_PRECISION,
            repaint_interval_ms: REPAINT_INTERVAL_MS,
            gesture_modifier: GestureModifier::default(),
        }
    }
}

impl DragOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("diagram3d_dnd"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("diagram3d_dnd.toml")
    }

    /// Gibt das Repaint-Intervall als `Duration` zurück.
    pub fn repaint_interval(&self) -> Duration {
        Duration::from_millis(self.repaint_interval_ms)
    }
}
