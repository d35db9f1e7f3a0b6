//! Scene Kit editor
//!
//! Host-facing facade over the scene-editing core. An [`Editor`] owns the
//! object store, orbit camera, transform gizmo and input routing, and turns
//! framebuffer-pixel mouse events into selection, gizmo drags and camera
//! orbiting. Each frame the host asks for a [`DrawList`] and renders it.

pub mod editor;
pub mod input;

pub use editor::{DrawItem, DrawList, Editor, SharedEditor, create_shared_editor};
pub use input::{InputCoordinator, Modifiers, MouseButton};

pub use sk_core::{ObjectId, PrimitiveKind, PrimitiveShape, SceneError, ShapeKind, Transform};
pub use sk_viewport::{EditorConfig, GizmoMode};
