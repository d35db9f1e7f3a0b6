//! Prism mesh with flat-shaded sides

use super::{MeshData, ring_dir, segment_angle};

/// Regular prism around the Y axis. `radius` is the circumradius of the
/// cross-section.
pub fn generate_prism_mesh(radius: f32, height: f32, sides: u32) -> MeshData {
    let sides = sides.max(3);
    let y0 = -height / 2.0;
    let y1 = height / 2.0;
    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();

    // First corner points at -Z
    let corner = |k: u32| {
        let [x, z] = ring_dir(segment_angle(k, sides) + std::f32::consts::FRAC_PI_2);
        [radius * x, radius * z]
    };

    for k in 0..sides {
        let [ax, az] = corner(k);
        let [bx, bz] = corner(k + 1);
        let [nx, nz] = ring_dir(
            (segment_angle(k, sides) + segment_angle(k + 1, sides)) * 0.5
                + std::f32::consts::FRAC_PI_2,
        );
        let n = [nx, 0.0, nz];
        let base = vertices.len() as u32;
        vertices.extend_from_slice(&[[ax, y0, az], [bx, y0, bz], [bx, y1, bz], [ax, y1, az]]);
        normals.extend_from_slice(&[n; 4]);
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    for (y, ny) in [(y1, 1.0f32), (y0, -1.0)] {
        let base = vertices.len() as u32;
        for k in 0..sides {
            let [x, z] = corner(k);
            vertices.push([x, y, z]);
            normals.push([0.0, ny, 0.0]);
        }
        for k in 1..sides - 1 {
            if ny > 0.0 {
                indices.extend_from_slice(&[base, base + k, base + k + 1]);
            } else {
                indices.extend_from_slice(&[base, base + k + 1, base + k]);
            }
        }
    }

    (vertices, normals, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangular_prism_counts() {
        let (vertices, _, indices) = generate_prism_mesh(0.5, 1.0, 3);
        // 3 side quads + 2 triangular caps
        assert_eq!(vertices.len(), 3 * 4 + 2 * 3);
        assert_eq!(indices.len(), (3 * 2 + 2) * 3);
    }

    #[test]
    fn test_sides_clamped() {
        let (vertices, _, _) = generate_prism_mesh(0.5, 1.0, 1);
        assert_eq!(vertices.len(), 3 * 4 + 2 * 3);
    }
}
