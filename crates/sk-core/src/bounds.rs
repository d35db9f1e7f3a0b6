//! Axis-aligned bounds used for picking and framing

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::geometry::Ray;

/// Axis-aligned bounding box. Flat shapes have zero extent on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Inverted box that any point expands into
    pub fn empty() -> Self {
        Self {
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
        }
    }

    pub fn symmetric(half_extents: Vec3) -> Self {
        Self {
            min: -half_extents,
            max: half_extents,
        }
    }

    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        points.into_iter().fold(Self::empty(), |bbox, p| Self {
            min: bbox.min.min(p),
            max: bbox.max.max(p),
        })
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn is_valid(&self) -> bool {
        self.min.cmple(self.max).all()
    }

    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// World-aligned box enclosing all eight transformed corners.
    /// Looser than the true extent under rotation.
    pub fn transform(&self, matrix: &Mat4) -> BoundingBox {
        BoundingBox::from_points(self.corners().map(|c| matrix.transform_point3(c)))
    }

    /// Slab test. Returns the entry parameter, or the exit parameter when
    /// the ray starts inside. Hits behind the origin are rejected.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let inv = ray.direction.recip();
        let t0 = (self.min - ray.origin) * inv;
        let t1 = (self.max - ray.origin) * inv;

        let t_near = t0.min(t1).max_element();
        let t_far = t0.max(t1).min_element();

        if t_far < t_near.max(0.0) {
            return None;
        }
        Some(if t_near > 0.0 { t_near } else { t_far })
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_points() {
        let bbox = BoundingBox::from_points([
            Vec3::new(-1.0, 0.0, 2.0),
            Vec3::new(3.0, -2.0, 1.0),
            Vec3::new(0.0, 4.0, -1.0),
        ]);
        assert_eq!(bbox.min, Vec3::new(-1.0, -2.0, -1.0));
        assert_eq!(bbox.max, Vec3::new(3.0, 4.0, 2.0));
        assert!(bbox.is_valid());
        assert!(!BoundingBox::empty().is_valid());
    }

    #[test]
    fn test_contains_point() {
        let bbox = BoundingBox::symmetric(Vec3::splat(0.5));
        assert!(bbox.contains_point(Vec3::ZERO));
        assert!(bbox.contains_point(Vec3::splat(0.5)));
        assert!(!bbox.contains_point(Vec3::new(0.6, 0.0, 0.0)));
    }

    #[test]
    fn test_transform_translate_scale() {
        let bbox = BoundingBox::symmetric(Vec3::splat(0.5));
        let m = Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0)) * Mat4::from_scale(Vec3::splat(2.0));
        let t = bbox.transform(&m);
        assert_eq!(t.min, Vec3::new(9.0, -1.0, -1.0));
        assert_eq!(t.max, Vec3::new(11.0, 1.0, 1.0));
    }

    #[test]
    fn test_transform_rotation_grows() {
        let bbox = BoundingBox::symmetric(Vec3::splat(0.5));
        let t = bbox.transform(&Mat4::from_rotation_y(std::f32::consts::FRAC_PI_4));
        assert_relative_eq!(t.max.x, 0.5 * 2f32.sqrt(), epsilon = 1e-5);
        assert_relative_eq!(t.max.y, 0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_ray_hit_front() {
        let bbox = BoundingBox::symmetric(Vec3::splat(0.5));
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        assert_relative_eq!(bbox.intersect_ray(&ray).unwrap(), 4.5);
    }

    #[test]
    fn test_ray_from_inside_uses_exit() {
        let bbox = BoundingBox::symmetric(Vec3::splat(0.5));
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert_relative_eq!(bbox.intersect_ray(&ray).unwrap(), 0.5);
    }

    #[test]
    fn test_ray_behind_and_miss() {
        let bbox = BoundingBox::symmetric(Vec3::splat(0.5));
        let behind = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!(bbox.intersect_ray(&behind).is_none());
        let beside = Ray::new(Vec3::new(2.0, 0.0, 5.0), Vec3::NEG_Z);
        assert!(bbox.intersect_ray(&beside).is_none());
    }

    #[test]
    fn test_ray_hits_flat_box() {
        let plane = BoundingBox::symmetric(Vec3::new(0.5, 0.0, 0.5));
        let ray = Ray::new(Vec3::new(0.1, 3.0, 0.1), Vec3::NEG_Y);
        assert_relative_eq!(plane.intersect_ray(&ray).unwrap(), 3.0);
    }
}
