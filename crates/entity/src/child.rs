use framecore_camera::Camera;
use framecore_collision::{Collider, CollisionSide};
use framecore_common::EntityId;
use framecore_common::math::translation;
use glam::{Mat4, Vec3};

use crate::copy::{CopyDescriptor, CopySet};
use crate::draw::DrawCall;
use crate::handle::{MaterialHandle, MeshHandle};

/// Geometry attached to an entity. The mesh itself lives with the draw layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryBinding {
    pub mesh: MeshHandle,
    pub vertex_count: u32,
    pub texture_coord_count: usize,
    pub normal_count: usize,
}

/// A positioned, renderable entity.
#[derive(Debug, Clone)]
pub struct Child {
    id: EntityId,
    position: Vec3,
    velocity: Vec3,
    gravity: f32,
    model: Mat4,
    geometry: Option<GeometryBinding>,
    material: Option<MaterialHandle>,
    collider: Option<Collider>,
    group: String,
    specific_render_distance: f32,
    copies: CopySet,
}

impl Default for Child {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl Child {
    pub fn new(position: Vec3) -> Self {
        Self {
            id: EntityId::new(),
            position,
            velocity: Vec3::ZERO,
            gravity: 0.0,
            model: translation(position),
            geometry: None,
            material: None,
            collider: None,
            group: String::new(),
            specific_render_distance: 0.0,
            copies: CopySet::new(),
        }
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_collider(mut self, collider: Collider) -> Self {
        self.collider = Some(collider);
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.gravity = gravity;
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn set_group(&mut self, group: impl Into<String>) {
        self.group = group.into();
    }

    pub fn collider(&self) -> Option<&Collider> {
        self.collider.as_ref()
    }

    pub fn set_collider(&mut self, collider: Option<Collider>) {
        self.collider = collider;
    }

    /// Per-entity culling distance. Zero means "use the global distance".
    pub fn specific_render_distance(&self) -> f32 {
        self.specific_render_distance
    }

    pub fn set_specific_render_distance(&mut self, distance: f32) {
        self.specific_render_distance = distance;
    }

    pub fn model_matrix(&self) -> &Mat4 {
        &self.model
    }

    pub fn geometry(&self) -> Option<&GeometryBinding> {
        self.geometry.as_ref()
    }

    pub fn material(&self) -> Option<MaterialHandle> {
        self.material
    }

    pub fn attach_mesh(&mut self, mesh: MeshHandle, vertex_count: u32) {
        tracing::debug!(entity = %self.id.short(), mesh = mesh.0, vertex_count, "mesh attached");
        self.geometry = Some(GeometryBinding {
            mesh,
            vertex_count,
            texture_coord_count: 0,
            normal_count: 0,
        });
    }

    pub fn attach_material(&mut self, material: MaterialHandle) {
        self.material = Some(material);
    }

    /// Attach UV data (pairs) to the mesh.
    ///
    /// # Panics
    /// If no mesh has been attached yet.
    pub fn attach_texture_coords(&mut self, coords: &[f32]) {
        let Some(geometry) = self.geometry.as_mut() else {
            panic!("entity {}: texture coordinates attached before a mesh", self.id.0);
        };
        geometry.texture_coord_count = coords.len() / 2;
    }

    /// Attach normal data (triples) to the mesh.
    ///
    /// # Panics
    /// If no mesh has been attached yet.
    pub fn attach_normals(&mut self, normals: &[f32]) {
        let Some(geometry) = self.geometry.as_mut() else {
            panic!("entity {}: normals attached before a mesh", self.id.0);
        };
        geometry.normal_count = normals.len() / 3;
    }

    /// Apply gravity, integrate one step of velocity, then render.
    pub fn update(&mut self, camera: &dyn Camera, _delta_time: f64) -> DrawCall {
        self.velocity.y -= self.gravity;
        self.position += self.velocity;
        self.render(camera)
    }

    /// Rebuild the model matrix from the current position.
    pub fn render(&mut self, camera: &dyn Camera) -> DrawCall {
        self.model = translation(self.position);
        DrawCall {
            entity: self.id,
            view: *camera.view_matrix(),
            model: self.model,
            mesh: self.geometry.map(|g| g.mesh),
            material: self.material,
            instanced: false,
        }
    }

    /// Draw call for one copy. The entity's own model matrix is left alone.
    pub fn render_copy(&self, copy: &CopyDescriptor, camera: &dyn Camera) -> DrawCall {
        DrawCall {
            entity: self.id,
            view: *camera.view_matrix(),
            model: copy.model_matrix(),
            mesh: self.geometry.map(|g| g.mesh),
            material: Some(copy.material),
            instanced: true,
        }
    }

    pub fn add_copy(&mut self, copy: CopyDescriptor) {
        self.copies.add(copy);
    }

    pub fn copies(&self) -> &[CopyDescriptor] {
        self.copies.copies()
    }

    pub fn current_copies(&self) -> &[CopyDescriptor] {
        self.copies.current()
    }

    pub fn remove_current_copies(&mut self) {
        self.copies.clear_current();
    }

    pub fn refresh_current_copies<F>(&mut self, keep: F) -> usize
    where
        F: FnMut(&CopyDescriptor) -> bool,
    {
        self.copies.refresh(keep)
    }

    pub fn copy_count(&self) -> usize {
        self.copies.len()
    }

    pub fn enable_copying(&mut self) {
        self.copies.enable();
    }

    pub fn disable_copying(&mut self) {
        self.copies.disable();
    }

    pub fn copying_enabled(&self) -> bool {
        self.copies.is_enabled()
    }

    pub fn copy_set(&self) -> &CopySet {
        &self.copies
    }

    /// Side of contact with `other`, or `None` when either lacks a collider.
    pub fn collision_side(&self, other: &Child) -> CollisionSide {
        match (&self.collider, &other.collider) {
            (Some(mine), Some(theirs)) => {
                mine.check(self.position, self.velocity, other.position, theirs)
            }
            _ => CollisionSide::None,
        }
    }

    pub fn check_collision(&self, other: &Child) -> i32 {
        self.collision_side(other).code()
    }

    pub fn check_collision_raw(
        &self,
        other_x: f32,
        other_y: f32,
        other_collider: Option<&Collider>,
    ) -> i32 {
        match (&self.collider, other_collider) {
            (Some(mine), Some(theirs)) => mine
                .check_raw(self.position, self.velocity, other_x, other_y, theirs)
                .code(),
            _ => 0,
        }
    }
}
