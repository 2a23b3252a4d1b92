//! Pick-Ray und exakte Ebenen-Schnitt-Berechnung über ein 3×3-Gleichungssystem.

use glam::{Mat3, Vec3};

/// Schwellwert für die Singularitäts-Erkennung der 3×3-Determinante.
const DEGENERATE_DET_EPSILON: f32 = 1e-6;

/// Strahl von der Kamera durch einen Bildschirmpunkt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ursprung des Strahls (Kamera-Position)
    pub origin: Vec3,
    /// Normalisierte Richtung
    pub direction: Vec3,
}

impl Ray {
    /// Erstellt einen neuen Ray
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Gibt den Punkt bei Parameter `t` zurück
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Schnittpunkt des Rays mit der Ebene, die von `u` und `v` aufgespannt
    /// wird und durch `anchor` verläuft.
    ///
    /// Löst `origin - anchor = a·u + b·v + t·direction` über die Inverse der
    /// Spalten-Matrix [u v direction]; der Schnittpunkt ist
    /// `origin + direction·(-t)`. Bei (nahezu) singulärer Matrix — Ray
    /// parallel zur Ebene oder degenerierte Spannvektoren — gibt es keinen
    /// stabilen Schnittpunkt und das Ergebnis ist `None`.
    pub fn intersect_span_plane(&self, u: Vec3, v: Vec3, anchor: Vec3) -> Option<Vec3> {
        let m = Mat3::from_cols(u, v, self.direction);
        if m.determinant().abs() < DEGENERATE_DET_EPSILON {
            return None;
        }

        let s = m.inverse() * (self.origin - anchor);
        Some(self.point_at(-s.z))
    }
}
