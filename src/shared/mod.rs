//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält den `SceneView`-Vertrag zwischen Controller und externem Renderer
//! sowie die Laufzeit-Optionen.

pub mod options;
pub mod scene;

pub use options::{DragOptions, GestureModifier};
pub use scene::{DragTarget, PickHit, SceneSettings, SceneView};
