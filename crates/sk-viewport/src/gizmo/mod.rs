//! Transform gizmo
//!
//! Hit-testing, geometry generation and the drag state machine for the
//! translate/rotate/scale gizmo attached to the selected object. The gizmo
//! is oriented by the object's own axes.

mod drag;
mod geometry;
mod hit_test;

pub use drag::{DragSession, GizmoController};
pub use geometry::{GizmoGeometry, LineVertex, TipVertex, build_gizmo_geometry};
pub use hit_test::{pick_part, pick_rotate, pick_translate_scale};

use glam::Vec3;
use serde::{Deserialize, Serialize};
use sk_core::Transform;

/// Active gizmo mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GizmoMode {
    /// No gizmo is shown or hit-tested
    None,
    /// Drag shafts to move along an axis
    #[default]
    Translate,
    /// Drag rings to rotate about an axis
    Rotate,
    /// Drag shafts or tips to scale along an axis
    Scale,
}

/// Gizmo axis in the object's local frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Local X
    X,
    /// Local Y
    Y,
    /// Local Z
    Z,
}

impl Axis {
    /// All axes in index order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Column index into a basis
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Unit vector in local space
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

/// Grabbable part of the gizmo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GizmoPart {
    /// Axis shaft
    Move(Axis),
    /// Billboarded square at the end of a shaft
    Tip(Axis),
    /// Rotation ring around an axis
    Rotate(Axis),
}

impl GizmoPart {
    /// Axis this part acts along
    pub fn axis(self) -> Axis {
        match self {
            GizmoPart::Move(axis) | GizmoPart::Tip(axis) | GizmoPart::Rotate(axis) => axis,
        }
    }
}

/// Origin and orthonormal axes the gizmo is drawn and picked in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoFrame {
    /// World position of the gizmo center
    pub origin: Vec3,
    /// Normalized object-local axes in world space
    pub basis: [Vec3; 3],
}

impl GizmoFrame {
    /// Frame of an object with the given transform
    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            origin: transform.position,
            basis: transform.world_basis(),
        }
    }

    /// World direction of an axis
    pub fn axis(&self, axis: Axis) -> Vec3 {
        self.basis[axis.index()]
    }
}
