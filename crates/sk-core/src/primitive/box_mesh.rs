//! Cube mesh generation

use super::MeshData;

/// Axis-aligned cube with the given edge length.
///
/// 24 vertices (4 per face, flat normals), 12 triangles
pub fn generate_box_mesh(edge: f32) -> MeshData {
    let h = edge / 2.0;
    let mut vertices = Vec::with_capacity(24);
    let mut normals = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for axis in 0..3 {
        // (u, v, axis) is a right-handed frame
        let u = (axis + 1) % 3;
        let v = (axis + 2) % 3;

        for sign in [1.0f32, -1.0] {
            let mut normal = [0.0; 3];
            normal[axis] = sign;

            // Corners in (u, v) order, reversed on the negative side
            let mut quad = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];
            if sign < 0.0 {
                quad.reverse();
            }

            let base = vertices.len() as u32;
            for (cu, cv) in quad {
                let mut p = [0.0; 3];
                p[axis] = sign * h;
                p[u] = cu * h;
                p[v] = cv * h;
                vertices.push(p);
                normals.push(normal);
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
    }

    (vertices, normals, indices)
}
