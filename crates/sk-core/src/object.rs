//! Scene objects and their identifiers

use std::fmt;
use std::num::NonZeroU64;

use glam::Mat4;
use serde::{Deserialize, Serialize};

use crate::bounds::BoundingBox;
use crate::shape::ShapeKind;
use crate::transform::Transform;

/// Unique, nonzero object identifier. Absence is `Option<ObjectId>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(NonZeroU64);

impl ObjectId {
    /// `None` for the reserved value 0
    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(Self)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A placed shape in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Object {
    pub id: ObjectId,
    pub shape: ShapeKind,
    pub transform: Transform,
    /// Bounds of the mesh in object space, before the transform
    pub local_bounds: BoundingBox,
}

impl Object {
    pub fn model_matrix(&self) -> Mat4 {
        self.transform.model_matrix()
    }

    /// Conservative world-space bounds used for picking
    pub fn world_bounds(&self) -> BoundingBox {
        self.local_bounds.transform(&self.model_matrix())
    }
}
