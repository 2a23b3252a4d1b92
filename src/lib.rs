//! Diagram3D Drag-and-Drop Library.
//! Gesten-, Pick- und Solver-Logik als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{CursorIcon, DragController, EventResponse, Modifiers, PointerEvent, PointerKind};
pub use core::{
    screen_to_ndc, Camera3D, CanvasRect, Diagram, DiagramLine, DiagramNode, LineStyle, Ray,
};
pub use shared::{DragOptions, DragTarget, GestureModifier, PickHit, SceneSettings, SceneView};
