//! Host-facing editor facade

use std::path::Path;
use std::sync::Arc;

use glam::{Mat4, Vec2};
use parking_lot::Mutex;

use sk_core::{ObjectId, ObjectStore, PrimitiveShape, SceneError, ShapeKind, Transform};
use sk_viewport::{Camera, CameraView, ConfigError, EditorConfig, GizmoController, GizmoGeometry, GizmoMode};

use crate::input::{InputCoordinator, Modifiers, MouseButton};

/// One object to draw this frame
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub id: ObjectId,
    pub shape: ShapeKind,
    pub model: Mat4,
    pub selected: bool,
}

/// Everything the renderer needs for a frame, in id order
#[derive(Debug, Clone)]
pub struct DrawList {
    pub view_proj: Mat4,
    pub items: Vec<DrawItem>,
    /// Present when a live object is selected and the gizmo mode is not None
    pub gizmo: Option<GizmoGeometry>,
}

/// Scene, camera, gizmo and input routing behind one API.
///
/// All coordinates are framebuffer pixels with the origin at the top left;
/// the host applies any device-pixel-ratio correction before calling in.
#[derive(Debug)]
pub struct Editor {
    store: ObjectStore,
    camera: Camera,
    gizmo: GizmoController,
    input: InputCoordinator,
    viewport: Vec2,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl Editor {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            store: ObjectStore::new(),
            camera: Camera::new(&config.camera),
            gizmo: GizmoController::new(config.gizmo.clone()),
            input: InputCoordinator::new(),
            viewport: Vec2::new(800.0, 600.0),
        }
    }

    /// Create an editor from a RON config file
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = EditorConfig::load(path)?;
        Ok(Self::new(&config))
    }

    pub fn store(&self) -> &ObjectStore {
        &self.store
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn gizmo(&self) -> &GizmoController {
        &self.gizmo
    }

    /// Framebuffer size in pixels
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Resize the framebuffer. Dimensions are clamped to at least one pixel.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Vec2::new(width.max(1) as f32, height.max(1) as f32);
    }

    /// Camera snapshot for the current viewport
    pub fn view(&self) -> CameraView {
        self.camera.view(self.viewport)
    }

    // ========== Objects ==========

    pub fn create_object(
        &mut self,
        shape: impl Into<PrimitiveShape>,
        transform: Transform,
        requested_id: Option<ObjectId>,
    ) -> Result<ObjectId, SceneError> {
        self.store.create(shape, transform, requested_id).map(|object| object.id)
    }

    pub fn create_from_raw_mesh(
        &mut self,
        positions: &[[f32; 3]],
        indices: &[u32],
        normalize: bool,
    ) -> Result<ObjectId, SceneError> {
        self.store.create_from_raw_mesh(positions, indices, normalize)
    }

    pub fn load_obj(&mut self, path: impl AsRef<Path>, normalize: bool) -> Result<ObjectId, SceneError> {
        self.store.load_obj(path, normalize)
    }

    /// Delete an object, ending any drag on it
    pub fn delete_object(&mut self, id: ObjectId) -> Result<(), SceneError> {
        self.store.delete(id)?;
        if self.gizmo.session().is_some_and(|s| s.object() == id) {
            self.gizmo.end_drag();
        }
        Ok(())
    }

    /// Remove every object
    pub fn clear(&mut self) {
        self.gizmo.end_drag();
        self.store.clear();
    }

    pub fn selection(&self) -> Option<ObjectId> {
        self.store.selection()
    }

    /// Select an object. Liveness is not checked; a dangling selection
    /// simply shows no gizmo.
    pub fn set_selection(&mut self, id: Option<ObjectId>) {
        if id != self.store.selection() {
            self.gizmo.end_drag();
        }
        self.store.set_selection(id);
    }

    pub fn transform(&self, id: ObjectId) -> Result<Transform, SceneError> {
        self.store.transform(id)
    }

    pub fn set_transform(&mut self, id: ObjectId, transform: Transform) -> Result<(), SceneError> {
        self.store.set_transform(id, transform)
    }

    // ========== Gizmo ==========

    pub fn gizmo_mode(&self) -> GizmoMode {
        self.gizmo.mode()
    }

    pub fn set_gizmo_mode(&mut self, mode: GizmoMode) {
        self.gizmo.set_mode(mode);
    }

    /// Whether a gizmo drag owns the mouse
    pub fn is_dragging_gizmo(&self) -> bool {
        self.gizmo.is_dragging()
    }

    /// Nearest object under a pixel
    pub fn ray_pick(&self, pixel: Vec2) -> Option<ObjectId> {
        let view = self.view();
        self.store.ray_pick(pixel, &view.inv_view_proj, self.viewport)
    }

    /// Pick under a pixel and make the result the selection. A miss clears
    /// it; a changed selection ends any drag in progress.
    pub fn hit_test_select(&mut self, pixel: Vec2) -> Option<ObjectId> {
        let picked = self.ray_pick(pixel);
        tracing::debug!("Picked {:?}", picked);
        self.set_selection(picked);
        picked
    }

    // ========== Input ==========

    pub fn on_mouse_move(&mut self, x: f32, y: f32) {
        let mouse = Vec2::new(x, y);
        let view = self.view();

        if self.gizmo.is_dragging() {
            self.input.track(mouse);
            self.gizmo.update_drag(&mut self.store, &view, mouse);
            return;
        }

        if let Some(delta) = self.input.orbit_delta(mouse) {
            self.camera.orbit(delta.x, delta.y);
            return;
        }

        self.gizmo.update_hover(&self.store, &view, mouse);
    }

    pub fn on_mouse_button(&mut self, button: MouseButton, down: bool, modifiers: Modifiers) {
        self.input.on_mouse_button(button, down, modifiers);
        if button != MouseButton::Left {
            return;
        }

        if !down {
            self.gizmo.end_drag();
            return;
        }
        if self.input.is_orbiting() {
            return;
        }

        let mouse = self.input.last_mouse();
        let view = self.view();
        if !self.gizmo.begin_drag(&self.store, &view, mouse) {
            self.hit_test_select(mouse);
        }
    }

    /// Scroll wheel changes the orbit radius
    pub fn on_scroll(&mut self, _dx: f32, dy: f32) {
        self.camera.zoom(dy);
    }

    pub fn on_modifiers(&mut self, modifiers: Modifiers) {
        self.input.set_modifiers(modifiers);
    }

    /// Abort any drag, restoring the dragged object, and forget held
    /// buttons and modifiers
    pub fn on_focus_lost(&mut self) {
        if self.gizmo.is_dragging() {
            tracing::debug!("Focus lost during gizmo drag");
        }
        self.gizmo.cancel_drag(&mut self.store);
        self.input.reset();
    }

    // ========== Output ==========

    /// What to draw this frame
    pub fn draw_list(&self) -> DrawList {
        let selection = self.store.selection();
        let items = self
            .store
            .objects()
            .map(|object| DrawItem {
                id: object.id,
                shape: object.shape,
                model: object.model_matrix(),
                selected: selection == Some(object.id),
            })
            .collect();

        DrawList {
            view_proj: self.view().view_proj,
            items,
            gizmo: self.gizmo.geometry(&self.store),
        }
    }
}

pub type SharedEditor = Arc<Mutex<Editor>>;

/// Create a new shared editor
pub fn create_shared_editor(config: &EditorConfig) -> SharedEditor {
    Arc::new(Mutex::new(Editor::new(config)))
}
