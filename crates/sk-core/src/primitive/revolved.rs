//! Cylinder and cone meshes around the Y axis

use super::{MeshData, ring_dir, segment_angle};

/// Cylinder centered on the origin with capped ends
pub fn generate_cylinder_mesh(radius: f32, height: f32, segments: u32) -> MeshData {
    let y0 = -height / 2.0;
    let y1 = height / 2.0;
    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();

    // Side: bottom/top vertex pairs
    for i in 0..=segments {
        let [dx, dz] = ring_dir(segment_angle(i, segments));
        let n = [dx, 0.0, dz];
        vertices.push([radius * dx, y0, radius * dz]);
        vertices.push([radius * dx, y1, radius * dz]);
        normals.extend_from_slice(&[n, n]);
    }
    for i in 0..segments {
        let b = i * 2;
        indices.extend_from_slice(&[b, b + 2, b + 3, b, b + 3, b + 1]);
    }

    push_cap(&mut vertices, &mut normals, &mut indices, radius, y1, segments, true);
    push_cap(&mut vertices, &mut normals, &mut indices, radius, y0, segments, false);

    (vertices, normals, indices)
}

/// Cone with its base at `-height/2` and apex at `+height/2`
pub fn generate_cone_mesh(radius: f32, height: f32, segments: u32) -> MeshData {
    let y0 = -height / 2.0;
    let y1 = height / 2.0;
    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();

    // Side normal tilts up by the slope of the mantle
    let slant = (height * height + radius * radius).sqrt();
    let (n_out, n_up) = (height / slant, radius / slant);

    // One apex vertex per segment so each gets its own normal
    for i in 0..segments {
        let a0 = segment_angle(i, segments);
        let a1 = segment_angle(i + 1, segments);
        let mid = ring_dir((a0 + a1) * 0.5);
        let base = vertices.len() as u32;

        for dir in [ring_dir(a0), ring_dir(a1)] {
            vertices.push([radius * dir[0], y0, radius * dir[1]]);
            normals.push([n_out * dir[0], n_up, n_out * dir[1]]);
        }
        vertices.push([0.0, y1, 0.0]);
        normals.push([n_out * mid[0], n_up, n_out * mid[1]]);

        indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    push_cap(&mut vertices, &mut normals, &mut indices, radius, y0, segments, false);

    (vertices, normals, indices)
}

/// Triangle-fan cap facing +Y (`up`) or -Y
fn push_cap(
    vertices: &mut Vec<[f32; 3]>,
    normals: &mut Vec<[f32; 3]>,
    indices: &mut Vec<u32>,
    radius: f32,
    y: f32,
    segments: u32,
    up: bool,
) {
    let normal = [0.0, if up { 1.0 } else { -1.0 }, 0.0];
    let center = vertices.len() as u32;
    vertices.push([0.0, y, 0.0]);
    normals.push(normal);

    for i in 0..=segments {
        let [dx, dz] = ring_dir(segment_angle(i, segments));
        vertices.push([radius * dx, y, radius * dz]);
        normals.push(normal);
    }

    for i in 1..=segments {
        let (a, b) = (center + i, center + i + 1);
        if up {
            indices.extend_from_slice(&[center, a, b]);
        } else {
            indices.extend_from_slice(&[center, b, a]);
        }
    }
}
