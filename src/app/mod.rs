//! Application-Layer: Drag-Controller, Pointer-Events und Hit-Test.

pub mod controller;
pub mod events;
mod picking;

pub use crate::shared::{DragTarget, PickHit};
pub use controller::DragController;
pub use events::{CursorIcon, EventResponse, Modifiers, PointerEvent, PointerKind};
