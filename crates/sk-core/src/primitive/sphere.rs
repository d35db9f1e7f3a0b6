//! UV sphere mesh generation

use std::f32::consts::PI;

use super::{MeshData, ring_dir, segment_angle};

/// UV sphere with poles on the Y axis
///
/// # Arguments
/// * `stacks` - Latitude bands from pole to pole
/// * `slices` - Longitude segments around Y
pub fn generate_sphere_mesh(radius: f32, stacks: u32, slices: u32) -> MeshData {
    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();

    for stack in 0..=stacks {
        let theta = stack as f32 / stacks as f32 * PI;
        let (sin_t, cos_t) = theta.sin_cos();

        for slice in 0..=slices {
            let [dx, dz] = ring_dir(segment_angle(slice, slices));
            let n = [sin_t * dx, cos_t, sin_t * dz];
            vertices.push([radius * n[0], radius * n[1], radius * n[2]]);
            normals.push(n);
        }
    }

    let row = slices + 1;
    for stack in 0..stacks {
        for slice in 0..slices {
            let upper = stack * row + slice;
            let lower = upper + row;
            // Skip the zero-area triangles collapsed onto the poles
            if stack != 0 {
                indices.extend_from_slice(&[lower, upper + 1, upper]);
            }
            if stack != stacks - 1 {
                indices.extend_from_slice(&[lower, lower + 1, upper + 1]);
            }
        }
    }

    (vertices, normals, indices)
}
