//! Torus mesh generation

use super::{MeshData, ring_dir, segment_angle};

/// Torus lying in the XZ plane
///
/// # Arguments
/// * `major_radius` - Distance from the center to the tube center
/// * `minor_radius` - Tube radius
pub fn generate_torus_mesh(
    major_radius: f32,
    minor_radius: f32,
    major_segments: u32,
    minor_segments: u32,
) -> MeshData {
    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();

    for i in 0..=major_segments {
        let [dx, dz] = ring_dir(segment_angle(i, major_segments));
        for j in 0..=minor_segments {
            let (sin_t, cos_t) = segment_angle(j, minor_segments).sin_cos();
            let ring = major_radius + minor_radius * cos_t;
            vertices.push([ring * dx, minor_radius * sin_t, ring * dz]);
            normals.push([cos_t * dx, sin_t, cos_t * dz]);
        }
    }

    let row = minor_segments + 1;
    for i in 0..major_segments {
        for j in 0..minor_segments {
            let a = i * row + j;
            let b = a + row;
            indices.extend_from_slice(&[a, b, b + 1, a, b + 1, a + 1]);
        }
    }

    (vertices, normals, indices)
}
