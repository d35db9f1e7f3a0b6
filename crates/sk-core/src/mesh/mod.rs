//! Custom mesh import (raw buffers, OBJ)

mod normals;
mod obj;

use glam::Vec3;

use crate::bounds::BoundingBox;

pub use normals::{triangle_normal, vertex_normals};
pub use obj::{load_obj, load_obj_from_bytes};

/// Errors that can occur while importing a mesh
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Empty mesh: no geometry found")]
    EmptyMesh,
    #[error("Invalid indices: {0}")]
    InvalidIndices(String),
    #[error("Invalid normals: {0}")]
    InvalidNormals(String),
}

/// Triangle buffers as read from a file, one normal per position
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffers {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

/// Imported triangle mesh owned by the object store
#[derive(Debug, Clone, PartialEq)]
pub struct CustomMesh {
    pub positions: Vec<[f32; 3]>,
    /// Unit normal per position
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
    pub local_bounds: BoundingBox,
}

impl CustomMesh {
    /// Validate raw buffers and build a mesh with smooth vertex normals,
    /// optionally normalized to a unit box centered on the origin.
    pub fn from_raw(positions: Vec<[f32; 3]>, indices: Vec<u32>, normalize: bool) -> Result<Self, MeshError> {
        validate(&positions, &indices)?;
        let normals = vertex_normals(&positions, &indices);
        Ok(Self::build(positions, normals, indices, normalize))
    }

    /// Like [`CustomMesh::from_raw`] but keeps caller-supplied normals,
    /// which must match the position count.
    pub fn from_buffers(buffers: MeshBuffers, normalize: bool) -> Result<Self, MeshError> {
        let MeshBuffers {
            positions,
            normals,
            indices,
        } = buffers;
        validate(&positions, &indices)?;
        if normals.len() != positions.len() {
            return Err(MeshError::InvalidNormals(format!(
                "{} normals for {} vertices",
                normals.len(),
                positions.len()
            )));
        }
        let normals = normals
            .into_iter()
            .map(|n| Vec3::from(n).try_normalize().map_or([0.0, 1.0, 0.0], |v| v.to_array()))
            .collect();
        Ok(Self::build(positions, normals, indices, normalize))
    }

    fn build(mut positions: Vec<[f32; 3]>, normals: Vec<[f32; 3]>, indices: Vec<u32>, normalize: bool) -> Self {
        // Uniform scale and translation leave normals unchanged
        if normalize {
            normalize_to_unit(&mut positions);
        }
        let local_bounds = BoundingBox::from_points(positions.iter().copied().map(Vec3::from));
        Self {
            positions,
            normals,
            indices,
            local_bounds,
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

fn validate(positions: &[[f32; 3]], indices: &[u32]) -> Result<(), MeshError> {
    if positions.is_empty() {
        return Err(MeshError::EmptyMesh);
    }
    if indices.len() < 3 || indices.len() % 3 != 0 {
        return Err(MeshError::InvalidIndices(format!(
            "index count {} is not a positive multiple of 3",
            indices.len()
        )));
    }
    if let Some(&bad) = indices.iter().find(|&&i| i as usize >= positions.len()) {
        return Err(MeshError::InvalidIndices(format!(
            "index {} out of range for {} vertices",
            bad,
            positions.len()
        )));
    }
    Ok(())
}

/// Recenter on the AABB center and scale uniformly so the largest extent
/// becomes 1. Degenerate (single point) meshes are only recentered.
pub fn normalize_to_unit(positions: &mut [[f32; 3]]) {
    let bbox = BoundingBox::from_points(positions.iter().copied().map(Vec3::from));
    if !bbox.is_valid() {
        return;
    }

    let center = bbox.center();
    let extent = bbox.size().max_element();
    let scale = if extent > f32::EPSILON { 1.0 / extent } else { 1.0 };

    for p in positions.iter_mut() {
        *p = ((Vec3::from(*p) - center) * scale).to_array();
    }
}
