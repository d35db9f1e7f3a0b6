//! Projection and intersection helpers shared by picking and the gizmo.
//!
//! Pixel coordinates have their origin at the top-left corner with Y
//! growing downward. Projection matrices follow the OpenGL clip convention
//! (NDC depth in `[-1, 1]`).

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::constants::PARALLEL_EPSILON;

/// Half-line with a normalized direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Pixel to normalized device coordinates
pub fn pixel_to_ndc(pixel: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        2.0 * pixel.x / viewport.x - 1.0,
        -(2.0 * pixel.y / viewport.y - 1.0),
    )
}

fn unproject(inv_view_proj: &Mat4, ndc: Vec2, depth: f32) -> Vec3 {
    let p = *inv_view_proj * Vec4::new(ndc.x, ndc.y, depth, 1.0);
    if p.w.abs() > f32::EPSILON {
        p.truncate() / p.w
    } else {
        p.truncate()
    }
}

/// World-space ray through a pixel, starting on the near plane.
///
/// A degenerate matrix yields a zero direction, which every intersection
/// helper treats as a miss.
pub fn screen_ray(pixel: Vec2, viewport: Vec2, inv_view_proj: &Mat4) -> Ray {
    let ndc = pixel_to_ndc(pixel, viewport);
    let near = unproject(inv_view_proj, ndc, -1.0);
    let far = unproject(inv_view_proj, ndc, 1.0);
    Ray::new(near, far - near)
}

/// Ray-plane intersection point. Misses when the ray runs parallel to the
/// plane or the plane lies behind the ray origin.
pub fn intersect_ray_plane(ray: &Ray, plane_point: Vec3, plane_normal: Vec3) -> Option<Vec3> {
    let denom = plane_normal.dot(ray.direction);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = (plane_point - ray.origin).dot(plane_normal) / denom;
    if t < 0.0 {
        return None;
    }
    Some(ray.at(t))
}

/// Project a world point to pixels. `None` when the point is behind the
/// camera (clip w ≤ 0).
pub fn world_to_pixel(world: Vec3, view_proj: &Mat4, viewport: Vec2) -> Option<Vec2> {
    let clip = *view_proj * world.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }

    let ndc = clip.truncate() / clip.w;
    Some(Vec2::new(
        (ndc.x * 0.5 + 0.5) * viewport.x,
        (1.0 - (ndc.y * 0.5 + 0.5)) * viewport.y,
    ))
}

/// Distance from `p` to segment `ab`, all in pixels
pub fn dist_point_to_segment_px(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// World units covered by one pixel at view depth `view_z`
/// (sign ignored) under a vertical field of view in radians.
pub fn world_per_pixel_at_view_z(view_z: f32, fov_y: f32, viewport_height: f32) -> f32 {
    2.0 * (fov_y * 0.5).tan() * view_z.abs() / viewport_height.max(1.0)
}
