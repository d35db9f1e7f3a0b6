//! Unit meshes for the primitive kinds
//!
//! Every mesh is authored at unit size, centered on the origin with Y up.
//! Objects reuse these meshes and get their dimensions from the transform
//! scale. Front faces wind counter-clockwise.

mod box_mesh;
mod flat;
mod prism;
mod revolved;
mod sphere;
mod torus;

use std::f32::consts::TAU;

use crate::constants::{tessellation, unit};
use crate::shape::PrimitiveKind;

pub use box_mesh::generate_box_mesh;
pub use flat::{generate_disc_mesh, generate_plane_mesh};
pub use prism::generate_prism_mesh;
pub use revolved::{generate_cone_mesh, generate_cylinder_mesh};
pub use sphere::generate_sphere_mesh;
pub use torus::generate_torus_mesh;

/// Mesh data: vertices, normals, and triangle indices
pub type MeshData = (Vec<[f32; 3]>, Vec<[f32; 3]>, Vec<u32>);

/// Canonical mesh for a primitive kind
pub fn unit_mesh(kind: PrimitiveKind) -> MeshData {
    let r = unit::RADIUS;
    let h = unit::HEIGHT;
    match kind {
        PrimitiveKind::Cube => generate_box_mesh(unit::CUBE_EDGE),
        PrimitiveKind::Sphere => generate_sphere_mesh(
            r,
            tessellation::SPHERE_STACKS,
            tessellation::SPHERE_SLICES,
        ),
        PrimitiveKind::Torus => generate_torus_mesh(
            unit::TORUS_MAJOR,
            unit::TORUS_MINOR,
            tessellation::TORUS_MAJOR_SEGMENTS,
            tessellation::TORUS_MINOR_SEGMENTS,
        ),
        PrimitiveKind::Plane => generate_plane_mesh(1.0, 1.0),
        PrimitiveKind::Cone => generate_cone_mesh(r, h, tessellation::ROUND_SEGMENTS),
        PrimitiveKind::Cylinder => generate_cylinder_mesh(r, h, tessellation::ROUND_SEGMENTS),
        PrimitiveKind::Prism => generate_prism_mesh(r, h, tessellation::PRISM_SIDES),
        PrimitiveKind::Circle => generate_disc_mesh(r, tessellation::DISC_SEGMENTS),
    }
}

/// Point on the unit circle in the XZ plane. Increasing angle turns
/// counter-clockwise when seen from +Y.
pub(crate) fn ring_dir(angle: f32) -> [f32; 2] {
    [angle.cos(), -angle.sin()]
}

pub(crate) fn segment_angle(i: u32, segments: u32) -> f32 {
    i as f32 / segments as f32 * TAU
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::BoundingBox;
    use glam::Vec3;

    fn bounds_of(vertices: &[[f32; 3]]) -> BoundingBox {
        BoundingBox::from_points(vertices.iter().copied().map(Vec3::from))
    }

    #[test]
    fn test_every_kind_is_well_formed() {
        for kind in PrimitiveKind::ALL {
            let (vertices, normals, indices) = unit_mesh(kind);
            assert!(!vertices.is_empty(), "{}", kind.name());
            assert_eq!(vertices.len(), normals.len(), "{}", kind.name());
            assert_eq!(indices.len() % 3, 0, "{}", kind.name());
            assert!(
                indices.iter().all(|&i| (i as usize) < vertices.len()),
                "{}",
                kind.name()
            );
            for n in &normals {
                let len = Vec3::from(*n).length();
                assert!((len - 1.0).abs() < 1e-4, "{}: normal length {}", kind.name(), len);
            }
        }
    }

    #[test]
    fn test_meshes_fit_local_bounds() {
        for kind in PrimitiveKind::ALL {
            let (vertices, _, _) = unit_mesh(kind);
            let mesh = bounds_of(&vertices);
            let local = kind.local_bounds();
            let eps = Vec3::splat(1e-4);
            assert!(
                mesh.min.cmpge(local.min - eps).all() && mesh.max.cmple(local.max + eps).all(),
                "{} mesh {:?} exceeds {:?}",
                kind.name(),
                mesh,
                local
            );
        }
    }

    #[test]
    fn test_cube_dimensions() {
        let (vertices, _, indices) = generate_box_mesh(2.0);
        assert_eq!(vertices.len(), 24);
        assert_eq!(indices.len(), 36);
        assert_eq!(bounds_of(&vertices).size(), Vec3::splat(2.0));
    }

    #[test]
    fn test_flat_kinds_have_no_thickness() {
        for kind in [PrimitiveKind::Plane, PrimitiveKind::Circle] {
            let (vertices, _, _) = unit_mesh(kind);
            assert!(vertices.iter().all(|v| v[1] == 0.0), "{}", kind.name());
        }
    }

    #[test]
    fn test_front_faces_point_outward() {
        // For closed convex shapes every triangle's geometric normal points
        // away from the origin
        for kind in [
            PrimitiveKind::Cube,
            PrimitiveKind::Sphere,
            PrimitiveKind::Cone,
            PrimitiveKind::Cylinder,
            PrimitiveKind::Prism,
        ] {
            let (vertices, _, indices) = unit_mesh(kind);
            for tri in indices.chunks_exact(3) {
                let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| Vec3::from(vertices[i as usize]));
                let n = (b - a).cross(c - a);
                if n.length_squared() < 1e-12 {
                    continue;
                }
                let centroid = (a + b + c) / 3.0;
                assert!(n.dot(centroid) > 0.0, "{} has an inward face", kind.name());
            }
        }
    }
}
