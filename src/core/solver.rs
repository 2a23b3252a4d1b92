//! Geometrische Solver für das Ziehen von Linien und Nodes.
//!
//! Beide Solver schneiden den Pick-Ray mit einer element-spezifischen
//! Constraint-Ebene über dasselbe 3×3-Gleichungssystem (`Ray::intersect_span_plane`).
//! Degenerierte Geometrie (Ray parallel zur Ebene, kollineare Spannvektoren,
//! Null-Sehne) liefert `None`; der Aufrufer behält dann den letzten Zustand.

use glam::Vec3;

use super::{DiagramLine, Ray};

/// Berechnet den neuen Kurven-Offset einer gezogenen Linie.
///
/// Die Constraint-Ebene wird von `start - center` und `end - center`
/// aufgespannt. Der Offset ist die vorzeichenbehaftete senkrechte Auslenkung
/// des Ray-Schnittpunkts von der Sehne, normiert auf die quadrierte
/// Sehnenlänge:
///
/// `cross(intersection - start, end - start) · n̂ / |end - start|²`
///
/// Das Vorzeichen folgt der Normalen-Konvention
/// `n̂ = normalize(cross(start - center, end - center))`.
pub fn solve_line_offset(line: &DiagramLine, center: Vec3, ray: &Ray) -> Option<f32> {
    let center2start = line.start - center;
    let center2end = line.end - center;

    let intersection = ray.intersect_span_plane(center2start, center2end, Vec3::ZERO)?;

    let plane_normal = center2start.cross(center2end).try_normalize()?;
    let start2intersection = intersection - line.start;
    let start2end = line.end - line.start;
    let chord_sq = start2end.length_squared();
    if chord_sq < f32::EPSILON {
        return None;
    }

    Some(start2intersection.cross(start2end).dot(plane_normal) / chord_sq)
}

/// Berechnet die neue Position eines gezogenen Nodes.
///
/// Der Node gleitet in der Ebene durch seine aktuelle Position, die normal
/// zur Blickrichtung Kamera→Node orientiert ist — er folgt damit dem Cursor
/// frei über die bildschirmzugewandte Ebene. Die Ebene wird aus der
/// In-Plane-Komponente des Nodes (Position minus Projektion auf die
/// Kamera-Richtung) und deren Kreuzprodukt mit dem Kamera-Ortsvektor
/// aufgespannt.
pub fn solve_node_position(node_position: Vec3, ray: &Ray) -> Option<Vec3> {
    let origin_len_sq = ray.origin.length_squared();
    if origin_len_sq < f32::EPSILON {
        return None;
    }

    let projection = ray.origin * (ray.origin.dot(node_position) / origin_len_sq);
    let inplane = node_position - projection;
    let normal = inplane.cross(ray.origin).try_normalize()?;

    ray.intersect_span_plane(inplane, normal, projection)
}
