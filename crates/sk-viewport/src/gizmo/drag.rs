//! Drag state machine
//!
//! Idle → Dragging on a successful hit at press, back to Idle on release.
//! A [`DragSession`] freezes the gizmo frame and the part at press time and
//! carries the per-frame integrator state (last axis coordinate or last
//! angle). Frames where the ray misses the frozen plane leave both the
//! object and the session untouched.

use std::f32::consts::{PI, TAU};

use glam::{Mat3, Vec2, Vec3};
use sk_core::geometry::intersect_ray_plane;
use sk_core::{ObjectId, ObjectStore, Ray, Transform};

use super::geometry::{GizmoGeometry, build_gizmo_geometry};
use super::hit_test::pick_part;
use super::{Axis, GizmoFrame, GizmoMode, GizmoPart};
use crate::camera::CameraView;
use crate::config::GizmoConfig;

/// Below this length a cross product is treated as degenerate
const DEGENERATE_EPSILON: f32 = 1e-4;

/// What a drag edits
#[derive(Debug, Clone, Copy, PartialEq)]
enum DragKind {
    Translate,
    Scale,
    Rotate,
}

/// Integrator state of a drag
#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    /// Translate or scale along a frozen axis
    Linear {
        axis: Vec3,
        plane_normal: Vec3,
        /// Coordinate of the last hit along `axis`, relative to the origin
        last_coord: f32,
    },
    /// Rotate about a frozen ring normal
    Angular {
        normal: Vec3,
        tangent: Vec3,
        binormal: Vec3,
        /// Signed in-plane angle of the last hit, radians
        last_angle: f32,
    },
}

/// State of one drag from press to release
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    object: ObjectId,
    part: GizmoPart,
    kind: DragKind,
    frame: GizmoFrame,
    start_transform: Transform,
    state: DragState,
}

impl DragSession {
    /// Object being edited
    pub fn object(&self) -> ObjectId {
        self.object
    }

    /// Part grabbed at press time
    pub fn part(&self) -> GizmoPart {
        self.part
    }

    /// Gizmo frame frozen at press time
    pub fn frame(&self) -> &GizmoFrame {
        &self.frame
    }

    /// Object transform before the drag started
    pub fn start_transform(&self) -> &Transform {
        &self.start_transform
    }
}

/// Owns the gizmo mode, hover state and the active drag session
#[derive(Debug, Clone, Default)]
pub struct GizmoController {
    mode: GizmoMode,
    config: GizmoConfig,
    hovered: Option<GizmoPart>,
    session: Option<DragSession>,
}

impl GizmoController {
    /// Create a controller in translate mode
    pub fn new(config: GizmoConfig) -> Self {
        let mut controller = Self::default();
        controller.set_config(config);
        controller
    }

    /// Active mode
    pub fn mode(&self) -> GizmoMode {
        self.mode
    }

    /// Switch mode. An active drag is ended first.
    pub fn set_mode(&mut self, mode: GizmoMode) {
        if mode != self.mode {
            self.end_drag();
            self.hovered = None;
            self.mode = mode;
            tracing::debug!("Gizmo mode set to {:?}", mode);
        }
    }

    /// Current configuration
    pub fn config(&self) -> &GizmoConfig {
        &self.config
    }

    /// Replace the configuration. A non-positive or non-finite scale floor
    /// is replaced by the default floor.
    pub fn set_config(&mut self, mut config: GizmoConfig) {
        if config.validate().is_err() {
            tracing::warn!("Invalid scale floor {}, using default", config.scale_floor);
            config.scale_floor = config.effective_scale_floor();
        }
        self.config = config;
    }

    /// Whether a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Active drag session
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Part under the cursor as of the last hover update
    pub fn hovered(&self) -> Option<GizmoPart> {
        self.hovered
    }

    /// Part to draw highlighted: the dragged part, else the hovered one
    pub fn highlighted(&self) -> Option<GizmoPart> {
        self.session.as_ref().map(|s| s.part).or(self.hovered)
    }

    /// Frame of the selected object, if it is live and the gizmo is shown
    fn selected_frame(&self, store: &ObjectStore) -> Option<(ObjectId, GizmoFrame)> {
        if self.mode == GizmoMode::None {
            return None;
        }
        let object = store.selected_object()?;
        Some((object.id, GizmoFrame::from_transform(&object.transform)))
    }

    /// Gizmo part of the selected object under the cursor
    pub fn hit_test(&self, store: &ObjectStore, view: &CameraView, mouse: Vec2) -> Option<GizmoPart> {
        let (_, frame) = self.selected_frame(store)?;
        pick_part(self.mode, view, &frame, mouse, &self.config)
    }

    /// Refresh the hovered part. Ignored while dragging.
    pub fn update_hover(&mut self, store: &ObjectStore, view: &CameraView, mouse: Vec2) {
        if self.session.is_none() {
            self.hovered = self.hit_test(store, view, mouse);
        }
    }

    /// Start a drag if the cursor is over a gizmo part. Returns whether a
    /// drag started.
    pub fn begin_drag(&mut self, store: &ObjectStore, view: &CameraView, mouse: Vec2) -> bool {
        if self.session.is_some() {
            return true;
        }
        let Some((object, frame)) = self.selected_frame(store) else {
            return false;
        };
        let Some(part) = pick_part(self.mode, view, &frame, mouse, &self.config) else {
            return false;
        };
        let Ok(start_transform) = store.transform(object) else {
            return false;
        };

        let kind = match self.mode {
            GizmoMode::Rotate => DragKind::Rotate,
            GizmoMode::Scale => DragKind::Scale,
            _ => DragKind::Translate,
        };
        let ray = view.ray(mouse);
        let axis = frame.axis(part.axis());

        let state = match kind {
            DragKind::Rotate => begin_angular(&ray, &frame, axis),
            DragKind::Translate | DragKind::Scale => begin_linear(&ray, &frame, axis, view),
        };
        let Some(state) = state else {
            tracing::trace!("Gizmo press on {:?} missed the drag plane", part);
            return false;
        };

        tracing::debug!("Begin {:?} drag on {} ({:?})", kind, object, part);
        self.hovered = None;
        self.session = Some(DragSession {
            object,
            part,
            kind,
            frame,
            start_transform,
            state,
        });
        true
    }

    /// Apply mouse motion to the dragged object. Returns whether the
    /// transform changed this frame.
    pub fn update_drag(&mut self, store: &mut ObjectStore, view: &CameraView, mouse: Vec2) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let Some(object) = store.get_mut(session.object) else {
            tracing::debug!("Dragged object {} disappeared, ending drag", session.object);
            self.session = None;
            return false;
        };

        let ray = view.ray(mouse);
        let transform = &mut object.transform;
        let origin = session.frame.origin;
        let index = session.part.axis().index();

        match &mut session.state {
            DragState::Linear {
                axis,
                plane_normal,
                last_coord,
            } => {
                let Some(hit) = intersect_ray_plane(&ray, origin, *plane_normal) else {
                    return false;
                };
                let coord = (hit - origin).dot(*axis);
                let delta = coord - *last_coord;
                *last_coord = coord;

                if session.kind == DragKind::Scale {
                    transform.scale[index] =
                        apply_scale_delta(transform.scale[index], delta, self.config.effective_scale_floor());
                } else {
                    transform.position += *axis * delta;
                }
            }
            DragState::Angular {
                normal,
                tangent,
                binormal,
                last_angle,
            } => {
                let Some(hit) = intersect_ray_plane(&ray, origin, *normal) else {
                    return false;
                };
                let Some(angle) = plane_angle(hit - origin, *tangent, *binormal) else {
                    return false;
                };
                let delta = wrap_radians(angle - *last_angle);
                *last_angle = angle;

                let rotated = transform.rotation_matrix() * local_axis_rotation(session.part.axis(), delta);
                transform.set_rotation_from_matrix(&rotated);
            }
        }

        tracing::trace!("Drag update on {}: {:?}", session.object, object.transform);
        true
    }

    /// Finish the drag. No-op when idle.
    pub fn end_drag(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::debug!("End drag on {}", session.object);
        }
    }

    /// Abandon the drag, restoring the object's transform from press time
    pub fn cancel_drag(&mut self, store: &mut ObjectStore) {
        if let Some(session) = self.session.take() {
            if store.set_transform(session.object, session.start_transform).is_ok() {
                tracing::debug!("Cancelled drag on {}", session.object);
            }
        }
    }

    /// Geometry for the selected object's gizmo this frame
    pub fn geometry(&self, store: &ObjectStore) -> Option<GizmoGeometry> {
        let (_, frame) = self.selected_frame(store)?;
        Some(build_gizmo_geometry(self.mode, &frame, &self.config, self.highlighted()))
    }
}

fn begin_linear(ray: &Ray, frame: &GizmoFrame, axis: Vec3, view: &CameraView) -> Option<DragState> {
    let plane_normal = drag_plane_normal(axis, view.forward, view.up)?;
    let hit = intersect_ray_plane(ray, frame.origin, plane_normal)?;
    Some(DragState::Linear {
        axis,
        plane_normal,
        last_coord: (hit - frame.origin).dot(axis),
    })
}

fn begin_angular(ray: &Ray, frame: &GizmoFrame, normal: Vec3) -> Option<DragState> {
    let hit = intersect_ray_plane(ray, frame.origin, normal)?;
    let (tangent, binormal) = plane_basis(normal);
    let last_angle = plane_angle(hit - frame.origin, tangent, binormal)?;
    Some(DragState::Angular {
        normal,
        tangent,
        binormal,
        last_angle,
    })
}

/// Normal of the plane that contains `axis` and faces the camera as much
/// as possible. Falls back to the camera up vector when the axis points
/// along the view direction.
pub(crate) fn drag_plane_normal(axis: Vec3, forward: Vec3, up: Vec3) -> Option<Vec3> {
    let mut side = axis.cross(forward);
    if side.length() < DEGENERATE_EPSILON {
        side = axis.cross(up);
    }
    if side.length() < DEGENERATE_EPSILON {
        return None;
    }
    side.cross(axis).try_normalize()
}

/// Tangent and binormal spanning the plane of `normal`
pub(crate) fn plane_basis(normal: Vec3) -> (Vec3, Vec3) {
    let reference = if normal.dot(Vec3::Y).abs() > 0.99 { Vec3::Z } else { Vec3::Y };
    let tangent = reference.cross(normal).normalize();
    let binormal = normal.cross(tangent);
    (tangent, binormal)
}

/// Signed angle of `v` in the plane, `None` at the center
fn plane_angle(v: Vec3, tangent: Vec3, binormal: Vec3) -> Option<f32> {
    let (x, y) = (v.dot(tangent), v.dot(binormal));
    if x * x + y * y < f32::EPSILON {
        return None;
    }
    Some(y.atan2(x))
}

/// Wrap into `[-π, π]`
fn wrap_radians(angle: f32) -> f32 {
    angle - TAU * ((angle + PI) / TAU).floor()
}

pub(crate) fn local_axis_rotation(axis: Axis, angle: f32) -> Mat3 {
    match axis {
        Axis::X => Mat3::from_rotation_x(angle),
        Axis::Y => Mat3::from_rotation_y(angle),
        Axis::Z => Mat3::from_rotation_z(angle),
    }
}

/// Multiplicative scale step, clamped to the floor
pub(crate) fn apply_scale_delta(scale: f32, delta: f32, floor: f32) -> f32 {
    (scale * (1.0 + delta)).max(floor)
}
