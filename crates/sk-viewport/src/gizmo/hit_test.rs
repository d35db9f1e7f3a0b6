//! Gizmo hit-testing
//!
//! Shafts and tips are tested in pixel space so the pick radius matches
//! their constant on-screen size. Rings are tested in world space on each
//! ring plane, with the pixel tolerance converted at the hit depth.

use glam::Vec2;
use sk_core::geometry::{dist_point_to_segment_px, intersect_ray_plane};

use super::{Axis, GizmoFrame, GizmoMode, GizmoPart};
use crate::camera::CameraView;
use crate::config::GizmoConfig;

/// Part under the cursor for the given mode
pub fn pick_part(
    mode: GizmoMode,
    view: &CameraView,
    frame: &GizmoFrame,
    mouse: Vec2,
    config: &GizmoConfig,
) -> Option<GizmoPart> {
    match mode {
        GizmoMode::None => None,
        GizmoMode::Translate | GizmoMode::Scale => pick_translate_scale(view, frame, mouse, config),
        GizmoMode::Rotate => pick_rotate(view, frame, mouse, config),
    }
}

/// Tips take priority over shafts; within each group the closest axis wins
pub fn pick_translate_scale(
    view: &CameraView,
    frame: &GizmoFrame,
    mouse: Vec2,
    config: &GizmoConfig,
) -> Option<GizmoPart> {
    let origin_px = view.project(frame.origin)?;

    let endpoints: Vec<(Axis, Vec2)> = Axis::ALL
        .into_iter()
        .filter_map(|axis| {
            let end = frame.origin + frame.axis(axis) * config.axis_length;
            view.project(end).map(|px| (axis, px))
        })
        .collect();

    let closest = |max_dist: f32, dist: &dyn Fn(Vec2) -> f32| {
        endpoints
            .iter()
            .map(|&(axis, end_px)| (axis, dist(end_px)))
            .filter(|&(_, d)| d <= max_dist)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(axis, _)| axis)
    };

    if let Some(axis) = closest(config.tip_pick_radius_px(), &|end_px| mouse.distance(end_px)) {
        return Some(GizmoPart::Tip(axis));
    }

    closest(config.shaft_pick_radius_px(), &|end_px| {
        dist_point_to_segment_px(mouse, origin_px, end_px)
    })
    .map(GizmoPart::Move)
}

/// Ring whose radius best matches the cursor's distance from the origin
/// on that ring's plane
pub fn pick_rotate(
    view: &CameraView,
    frame: &GizmoFrame,
    mouse: Vec2,
    config: &GizmoConfig,
) -> Option<GizmoPart> {
    let ray = view.ray(mouse);
    let tolerance_px = config.ring_pick_radius_px();

    Axis::ALL
        .into_iter()
        .filter_map(|axis| {
            let hit = intersect_ray_plane(&ray, frame.origin, frame.axis(axis))?;
            let error = (hit.distance(frame.origin) - config.ring_radius).abs();
            let tolerance = tolerance_px * view.world_per_pixel(view.view_z(hit));
            (error <= tolerance).then_some((axis, error))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(axis, _)| GizmoPart::Rotate(axis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Mat4, Vec3};

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    fn front_view() -> CameraView {
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        let proj = Mat4::perspective_rh_gl(45f32.to_radians(), 800.0 / 600.0, 0.1, 100.0);
        CameraView::new(view, proj, 45.0, VIEWPORT)
    }

    fn oblique_view() -> CameraView {
        let view = Mat4::look_at_rh(Vec3::new(3.0, 2.5, 4.0), Vec3::ZERO, Vec3::Y);
        let proj = Mat4::perspective_rh_gl(45f32.to_radians(), 800.0 / 600.0, 0.1, 100.0);
        CameraView::new(view, proj, 45.0, VIEWPORT)
    }

    fn identity_frame() -> GizmoFrame {
        GizmoFrame {
            origin: Vec3::ZERO,
            basis: [Vec3::X, Vec3::Y, Vec3::Z],
        }
    }

    #[test]
    fn test_shaft_midpoint_hits_move() {
        let view = front_view();
        let config = GizmoConfig::default();
        let mid = view.project(Vec3::new(0.5, 0.0, 0.0)).unwrap();
        let part = pick_translate_scale(&view, &identity_frame(), mid, &config);
        assert_eq!(part, Some(GizmoPart::Move(Axis::X)));

        let up = view.project(Vec3::new(0.0, 0.5, 0.0)).unwrap();
        let part = pick_translate_scale(&view, &identity_frame(), up, &config);
        assert_eq!(part, Some(GizmoPart::Move(Axis::Y)));
    }

    #[test]
    fn test_tip_beats_shaft() {
        let view = front_view();
        let config = GizmoConfig::default();
        let end = view.project(Vec3::X).unwrap();
        let part = pick_translate_scale(&view, &identity_frame(), end - Vec2::new(2.0, 0.0), &config);
        assert_eq!(part, Some(GizmoPart::Tip(Axis::X)));
    }

    #[test]
    fn test_miss_away_from_gizmo() {
        let view = front_view();
        let config = GizmoConfig::default();
        let part = pick_translate_scale(&view, &identity_frame(), Vec2::new(700.0, 100.0), &config);
        assert_eq!(part, None);
    }

    #[test]
    fn test_slack_widens_shaft() {
        let view = front_view();
        let mid = view.project(Vec3::new(0.5, 0.0, 0.0)).unwrap();
        let cursor = mid + Vec2::new(0.0, 4.0);
        let mut config = GizmoConfig::default();
        assert_eq!(
            pick_translate_scale(&view, &identity_frame(), cursor, &config),
            Some(GizmoPart::Move(Axis::X))
        );
        config.pick_slack_px = 0.0;
        assert_eq!(pick_translate_scale(&view, &identity_frame(), cursor, &config), None);
    }

    #[test]
    fn test_closest_shaft_wins() {
        let view = oblique_view();
        let config = GizmoConfig {
            line_width_px: 200.0,
            ..Default::default()
        };
        let near_z = view.project(Vec3::new(0.0, 0.0, 0.4)).unwrap();
        assert_eq!(
            pick_translate_scale(&view, &identity_frame(), near_z, &config),
            Some(GizmoPart::Move(Axis::Z))
        );
    }

    #[test]
    fn test_ring_hit() {
        let view = oblique_view();
        let config = GizmoConfig::default();
        // Off the X and Z axes so only the Y ring passes through it
        let p = Vec3::new(0.6, 0.0, 0.8) * config.ring_radius;
        let px = view.project(p).unwrap();
        assert_eq!(
            pick_rotate(&view, &identity_frame(), px, &config),
            Some(GizmoPart::Rotate(Axis::Y))
        );
    }

    /// Radial error and allowed tolerance of a cursor against one ring plane
    fn ring_fit(view: &CameraView, normal: Vec3, px: Vec2, config: &GizmoConfig) -> (f32, f32) {
        let hit = intersect_ray_plane(&view.ray(px), Vec3::ZERO, normal).unwrap();
        let error = (hit.length() - config.ring_radius).abs();
        let tolerance = config.ring_pick_radius_px() * view.world_per_pixel(view.view_z(hit));
        (error, tolerance)
    }

    #[test]
    fn test_smallest_ring_error_wins_near_crossing() {
        let view = oblique_view();
        let config = GizmoConfig::default();

        // The X and Z rings cross at (0, r, 0); nudge the cursor toward each
        let on_x = view.project(Vec3::new(0.0, 1.0, 0.02) * config.ring_radius).unwrap();
        let on_z = view.project(Vec3::new(0.02, 1.0, 0.0) * config.ring_radius).unwrap();

        for px in [on_x, on_z] {
            for normal in [Vec3::X, Vec3::Z] {
                let (error, tolerance) = ring_fit(&view, normal, px, &config);
                assert!(error <= tolerance, "both rings must qualify");
            }
        }

        assert_eq!(
            pick_rotate(&view, &identity_frame(), on_x, &config),
            Some(GizmoPart::Rotate(Axis::X))
        );
        assert_eq!(
            pick_rotate(&view, &identity_frame(), on_z, &config),
            Some(GizmoPart::Rotate(Axis::Z))
        );
    }

    #[test]
    fn test_ring_miss_inside() {
        let view = oblique_view();
        let config = GizmoConfig::default();
        let px = view.project(Vec3::new(0.3, 0.0, 0.3)).unwrap();
        assert_eq!(pick_rotate(&view, &identity_frame(), px, &config), None);
    }

    #[test]
    fn test_none_mode_never_hits() {
        let view = front_view();
        let config = GizmoConfig::default();
        let mid = view.project(Vec3::new(0.5, 0.0, 0.0)).unwrap();
        assert_eq!(pick_part(GizmoMode::None, &view, &identity_frame(), mid, &config), None);
    }

    #[test]
    fn test_behind_camera_misses() {
        let view = front_view();
        let frame = GizmoFrame {
            origin: Vec3::new(0.0, 0.0, 10.0),
            basis: [Vec3::X, Vec3::Y, Vec3::Z],
        };
        let config = GizmoConfig::default();
        assert_eq!(
            pick_translate_scale(&view, &frame, Vec2::new(400.0, 300.0), &config),
            None
        );
    }
}
