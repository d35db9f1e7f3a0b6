//! Scene Kit core
//!
//! Scene model and geometry for the scene-editing core: object storage,
//! the transform model, ray picking and the projection helpers shared with
//! the gizmo subsystem.
//!
//! # Module Structure
//!
//! ```text
//! sk-core/
//! ├── constants.rs     # Unit mesh sizes, tessellation, tolerances
//! ├── error.rs         # SceneError
//! ├── object.rs        # ObjectId, Object
//! ├── transform.rs     # Transform (T·R·S, XYZ Euler degrees)
//! ├── shape.rs         # PrimitiveKind, PrimitiveShape, ShapeKind
//! ├── bounds.rs        # BoundingBox
//! ├── geometry.rs      # Rays, plane intersection, pixel projection
//! ├── store.rs         # ObjectStore (CRUD, selection, ray picking)
//! ├── mesh/            # Custom mesh import (raw buffers, OBJ)
//! └── primitive/       # Unit meshes for every primitive kind
//! ```

pub mod bounds;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod object;
pub mod primitive;
pub mod shape;
pub mod store;
pub mod transform;

pub use bounds::BoundingBox;
pub use error::SceneError;
pub use geometry::Ray;
pub use mesh::{CustomMesh, MeshBuffers, MeshError};
pub use object::{Object, ObjectId};
pub use shape::{
    ConeParams, CubeParams, CustomMeshIndex, CylinderParams, DiscParams, PlaneParams,
    PrimitiveKind, PrimitiveShape, PrismParams, ShapeKind, SphereParams, TorusParams,
};
pub use store::{MeshSource, ObjectStore};
pub use transform::Transform;
