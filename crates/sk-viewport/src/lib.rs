//! Scene Kit viewport
//!
//! Camera and transform gizmo for the scene-editing core: gizmo hit-testing,
//! gizmo geometry generation and the drag state machine that turns mouse
//! motion into translation, rotation and scale edits.

pub mod camera;
pub mod config;
pub mod constants;
pub mod gizmo;

pub use camera::{Camera, CameraView};
pub use config::{CameraConfig, ConfigError, EditorConfig, GizmoColors, GizmoConfig};
pub use gizmo::{
    Axis, DragSession, GizmoController, GizmoFrame, GizmoGeometry, GizmoMode, GizmoPart, LineVertex,
    TipVertex, build_gizmo_geometry,
};
