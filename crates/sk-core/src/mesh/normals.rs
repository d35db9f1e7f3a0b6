//! Normal generation for meshes that arrive without them

use glam::Vec3;

/// Fallback for vertices that touch only degenerate triangles
const FALLBACK_NORMAL: [f32; 3] = [0.0, 1.0, 0.0];

/// Unit normal of a counter-clockwise triangle, `None` when degenerate
pub fn triangle_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Option<Vec3> {
    (v1 - v0).cross(v2 - v0).try_normalize()
}

/// Smooth per-vertex normals: the area-weighted sum of the normals of every
/// triangle sharing the vertex. Indices must already be in range.
pub fn vertex_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut sums = vec![Vec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let (v0, v1, v2) = (
            Vec3::from(positions[a]),
            Vec3::from(positions[b]),
            Vec3::from(positions[c]),
        );
        // Unnormalized cross product weights by twice the triangle area
        let weighted = (v1 - v0).cross(v2 - v0);
        sums[a] += weighted;
        sums[b] += weighted;
        sums[c] += weighted;
    }

    sums.into_iter()
        .map(|n| n.try_normalize().map_or(FALLBACK_NORMAL, |v| v.to_array()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_triangle_normal_ccw() {
        let n = triangle_normal(Vec3::ZERO, Vec3::X, Vec3::Y).unwrap();
        assert_eq!(n, Vec3::Z);
        assert!(triangle_normal(Vec3::ZERO, Vec3::X, Vec3::X * 2.0).is_none());
    }

    #[test]
    fn test_flat_quad_normals() {
        let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]];
        let normals = vertex_normals(&positions, &[0, 1, 2, 0, 2, 3]);
        assert_eq!(normals.len(), 4);
        for n in normals {
            assert_eq!(n, [0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn test_shared_edge_is_averaged() {
        // Two faces folded 90 degrees along the X axis
        let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let normals = vertex_normals(&positions, &[0, 1, 2, 0, 3, 1]);
        let shared = Vec3::from(normals[0]);
        assert_relative_eq!(shared.length(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(shared.z, shared.y, epsilon = 1e-6);
    }

    #[test]
    fn test_unused_vertex_gets_fallback() {
        let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [9.0, 9.0, 9.0]];
        let normals = vertex_normals(&positions, &[0, 1, 2]);
        assert_eq!(normals[3], FALLBACK_NORMAL);
    }
}
