//! Scene errors

use crate::mesh::MeshError;
use crate::object::ObjectId;

/// Errors returned by object store operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum SceneError {
    #[error("Object not found: {0}")]
    NotFound(ObjectId),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Out of memory while allocating an object")]
    OutOfMemory,
    #[error(transparent)]
    Mesh(#[from] MeshError),
}
