//! Hit-Test-Adapter: ein Raycast-Durchlauf mit temporär verschmälerten Linien.

use crate::core::Ray;
use crate::shared::{DragOptions, PickHit, SceneView};

/// Castet den Ray gegen alle pickbaren Elemente und gibt den nächsten
/// Treffer zurück.
///
/// Gerenderte Linien-Geometrie ist bei normaler Strichbreite unzuverlässig
/// pickbar; für den einen Raycast-Durchlauf werden alle Linien auf die
/// Pick-Breite verschmälert und danach sofort wiederhergestellt. Zwischen
/// Verschmälern und Wiederherstellen wird kein `render()` aufgerufen — der
/// schmale Zustand wird nie gezeichnet.
pub(crate) fn pick_nearest(
    ray: &Ray,
    scene: &mut dyn SceneView,
    options: &DragOptions,
) -> Option<PickHit> {
    let saved = scene.settings();
    let mut narrowed = saved;
    narrowed.line_width = options.pick_line_width;

    scene.update_lines(&narrowed);
    let mut hits = scene.raycast(ray, options.pick_line_precision);
    scene.update_lines(&saved);

    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits.into_iter().next()
}
