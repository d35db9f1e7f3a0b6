//! Object store: owns every object, the custom mesh table and the selection

use std::collections::HashMap;
use std::path::Path;

use glam::{Mat4, Vec2};

use crate::error::SceneError;
use crate::geometry::screen_ray;
use crate::mesh::{self, CustomMesh};
use crate::object::{Object, ObjectId};
use crate::shape::{CustomMeshIndex, PrimitiveKind, PrimitiveShape, ShapeKind};
use crate::transform::Transform;

/// Mesh an object is drawn with, resolved from its [`ShapeKind`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeshSource<'a> {
    /// Shared unit mesh, see [`crate::primitive::unit_mesh`]
    Unit(PrimitiveKind),
    Custom(&'a CustomMesh),
}

/// Scene object storage and selection
#[derive(Debug)]
pub struct ObjectStore {
    objects: HashMap<ObjectId, Object>,
    /// `None` marks a slot freed by deleting its object
    custom_meshes: Vec<Option<CustomMesh>>,
    free_mesh_slots: Vec<usize>,
    selection: Option<ObjectId>,
    next_id: u64,
}

impl Default for ObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectStore {
    pub fn new() -> Self {
        Self {
            objects: HashMap::new(),
            custom_meshes: Vec::new(),
            free_mesh_slots: Vec::new(),
            selection: None,
            next_id: 1,
        }
    }

    /// Create a primitive object.
    ///
    /// Zero scale components of `transform` become 1 before the shape
    /// parameters are applied. With `requested_id` of `None` a fresh id is
    /// generated; a requested id that is already live is rejected.
    pub fn create(
        &mut self,
        shape: impl Into<PrimitiveShape>,
        transform: Transform,
        requested_id: Option<ObjectId>,
    ) -> Result<&Object, SceneError> {
        let shape = shape.into();
        let kind = shape.kind();

        let mut transform = transform.with_nonzero_scale();
        transform.scale *= shape.scale_factors();

        let object = self.insert(
            ShapeKind::Primitive(kind),
            transform,
            kind.local_bounds(),
            requested_id,
        )?;
        tracing::info!("Created {} {}", kind.name(), object.id);
        Ok(object)
    }

    /// Create an object from raw triangle buffers. Invalid buffers leave the
    /// store untouched.
    pub fn create_from_raw_mesh(
        &mut self,
        positions: &[[f32; 3]],
        indices: &[u32],
        normalize: bool,
    ) -> Result<ObjectId, SceneError> {
        let mesh = CustomMesh::from_raw(positions.to_vec(), indices.to_vec(), normalize)
            .map_err(|e| {
                tracing::warn!("Rejected raw mesh: {}", e);
                SceneError::InvalidParameter(e.to_string())
            })?;
        self.insert_custom(mesh)
    }

    /// Import an OBJ file as a new custom-mesh object
    pub fn load_obj(&mut self, path: impl AsRef<Path>, normalize: bool) -> Result<ObjectId, SceneError> {
        let path = path.as_ref();
        let buffers = mesh::load_obj(path).inspect_err(|e| {
            tracing::warn!("Failed to load OBJ {:?}: {}", path, e);
        })?;
        let mesh = CustomMesh::from_buffers(buffers, normalize)?;
        self.insert_custom(mesh)
    }

    fn insert_custom(&mut self, mesh: CustomMesh) -> Result<ObjectId, SceneError> {
        let bounds = mesh.local_bounds;
        let triangles = mesh.triangle_count();

        let reused = self.free_mesh_slots.pop();
        let slot = match reused {
            Some(slot) => {
                self.custom_meshes[slot] = Some(mesh);
                slot
            }
            None => {
                self.custom_meshes
                    .try_reserve(1)
                    .map_err(|_| SceneError::OutOfMemory)?;
                self.custom_meshes.push(Some(mesh));
                self.custom_meshes.len() - 1
            }
        };
        let index = CustomMeshIndex(slot);

        match self.insert(ShapeKind::Custom(index), Transform::default(), bounds, None) {
            Ok(object) => {
                let id = object.id;
                tracing::info!("Created custom mesh {} ({} triangles)", id, triangles);
                Ok(id)
            }
            Err(e) => {
                if reused.is_some() {
                    self.custom_meshes[slot] = None;
                    self.free_mesh_slots.push(slot);
                } else {
                    self.custom_meshes.pop();
                }
                Err(e)
            }
        }
    }

    fn insert(
        &mut self,
        shape: ShapeKind,
        transform: Transform,
        local_bounds: crate::bounds::BoundingBox,
        requested_id: Option<ObjectId>,
    ) -> Result<&Object, SceneError> {
        let id = match requested_id {
            Some(id) if self.objects.contains_key(&id) => {
                tracing::warn!("Requested id {} is already in use", id);
                return Err(SceneError::InvalidParameter(format!("id {} is already in use", id)));
            }
            Some(id) => id,
            None => self.generate_id()?,
        };

        self.objects
            .try_reserve(1)
            .map_err(|_| SceneError::OutOfMemory)?;

        Ok(self.objects.entry(id).or_insert(Object {
            id,
            shape,
            transform,
            local_bounds,
        }))
    }

    fn generate_id(&mut self) -> Result<ObjectId, SceneError> {
        loop {
            let id = ObjectId::new(self.next_id).ok_or(SceneError::OutOfMemory)?;
            self.next_id = self.next_id.checked_add(1).ok_or(SceneError::OutOfMemory)?;
            if !self.objects.contains_key(&id) {
                return Ok(id);
            }
        }
    }

    pub fn get(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(&id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.objects.get_mut(&id)
    }

    /// All objects in ascending id order
    pub fn objects(&self) -> impl Iterator<Item = &Object> {
        let mut objects: Vec<&Object> = self.objects.values().collect();
        objects.sort_unstable_by_key(|o| o.id);
        objects.into_iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Remove an object, clearing the selection if it pointed at it. A custom
    /// mesh is released with its object and its slot reused by later imports.
    pub fn delete(&mut self, id: ObjectId) -> Result<(), SceneError> {
        let object = self.objects.remove(&id).ok_or(SceneError::NotFound(id))?;
        if let ShapeKind::Custom(index) = object.shape {
            if let Some(slot) = self.custom_meshes.get_mut(index.0) {
                *slot = None;
                self.free_mesh_slots.push(index.0);
            }
        }
        if self.selection == Some(id) {
            self.selection = None;
        }
        tracing::info!("Deleted object {}", id);
        Ok(())
    }

    /// Remove everything and restart id generation at 1
    pub fn clear(&mut self) {
        self.objects.clear();
        self.custom_meshes.clear();
        self.free_mesh_slots.clear();
        self.selection = None;
        self.next_id = 1;
        tracing::info!("Scene cleared");
    }

    pub fn selection(&self) -> Option<ObjectId> {
        self.selection
    }

    /// Set the selected id. Liveness is not checked.
    pub fn set_selection(&mut self, id: Option<ObjectId>) {
        self.selection = id;
    }

    /// Selected object, if the selection refers to a live object
    pub fn selected_object(&self) -> Option<&Object> {
        self.selection.and_then(|id| self.objects.get(&id))
    }

    pub fn transform(&self, id: ObjectId) -> Result<Transform, SceneError> {
        self.objects
            .get(&id)
            .map(|o| o.transform)
            .ok_or(SceneError::NotFound(id))
    }

    pub fn set_transform(&mut self, id: ObjectId, transform: Transform) -> Result<(), SceneError> {
        let object = self.objects.get_mut(&id).ok_or(SceneError::NotFound(id))?;
        object.transform = transform;
        Ok(())
    }

    pub fn custom_mesh(&self, index: CustomMeshIndex) -> Option<&CustomMesh> {
        self.custom_meshes.get(index.0).and_then(Option::as_ref)
    }

    /// Resolve a shape to the mesh it is drawn with. `None` for a custom
    /// index with no mesh behind it.
    pub fn mesh_for(&self, shape: ShapeKind) -> Option<MeshSource<'_>> {
        match shape {
            ShapeKind::Primitive(kind) => Some(MeshSource::Unit(kind)),
            ShapeKind::Custom(index) => self.custom_mesh(index).map(MeshSource::Custom),
        }
    }

    /// Nearest object whose world bounds the ray through `pixel` enters
    pub fn ray_pick(&self, pixel: Vec2, inv_view_proj: &Mat4, viewport: Vec2) -> Option<ObjectId> {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return None;
        }
        let ray = screen_ray(pixel, viewport, inv_view_proj);

        self.objects
            .values()
            .filter_map(|o| o.world_bounds().intersect_ray(&ray).map(|t| (o.id, t)))
            .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
            .map(|(id, _)| id)
    }
}
