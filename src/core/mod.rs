//! Core-Domänentypen: Diagramm, Kamera, Ray und geometrische Solver.

pub mod camera;
pub mod diagram;
pub mod ray;
pub mod solver;

pub use camera::{screen_to_ndc, Camera3D, CanvasRect};
pub use diagram::{Diagram, DiagramLine, DiagramNode, LineStyle};
pub use ray::Ray;
pub use solver::{solve_line_offset, solve_node_position};
