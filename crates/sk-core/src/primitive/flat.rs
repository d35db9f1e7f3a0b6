//! Zero-thickness meshes lying in the XZ plane, facing +Y

use super::{MeshData, ring_dir, segment_angle};

const UP: [f32; 3] = [0.0, 1.0, 0.0];

/// Rectangle spanning `width` along X and `depth` along Z
pub fn generate_plane_mesh(width: f32, depth: f32) -> MeshData {
    let (hx, hz) = (width / 2.0, depth / 2.0);
    let vertices = vec![[-hx, 0.0, hz], [hx, 0.0, hz], [hx, 0.0, -hz], [-hx, 0.0, -hz]];
    let normals = vec![UP; 4];
    let indices = vec![0, 1, 2, 0, 2, 3];
    (vertices, normals, indices)
}

/// Triangle-fan disc
pub fn generate_disc_mesh(radius: f32, segments: u32) -> MeshData {
    let mut vertices = vec![[0.0, 0.0, 0.0]];
    let mut normals = vec![UP];
    let mut indices = Vec::with_capacity(segments as usize * 3);

    for i in 0..=segments {
        let [x, z] = ring_dir(segment_angle(i, segments));
        vertices.push([radius * x, 0.0, radius * z]);
        normals.push(UP);
    }
    for i in 1..=segments {
        indices.extend_from_slice(&[0, i, i + 1]);
    }

    (vertices, normals, indices)
}
