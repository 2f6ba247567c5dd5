/*
 * Scene Module
 *
 * The scene graph holds the set of renderable objects drawn each frame.
 * A GalaxyPoints renderable pairs the generated particle buffers (geometry)
 * with the point material settings used to draw them.
 */

use log::debug;

use crate::generator::ParticleBuffers;

// Handle for one attached renderable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blending {
    Normal,
    Additive,
}

// Point rendering settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointsMaterial {
    pub size: f32,
    pub size_attenuation: bool,
    pub depth_write: bool,
    pub blending: Blending,
    pub vertex_colors: bool,
}

impl PointsMaterial {
    // Material used for every galaxy
    pub fn galaxy(size: f32) -> Self {
        Self {
            size,
            size_attenuation: true,
            depth_write: false,
            blending: Blending::Additive,
            vertex_colors: true,
        }
    }
}

// Geometry plus material; owns the particle buffers until disposed
#[derive(Debug)]
pub struct GalaxyPoints {
    pub geometry: ParticleBuffers,
    pub material: PointsMaterial,
}

impl GalaxyPoints {
    pub fn new(geometry: ParticleBuffers, material: PointsMaterial) -> Self {
        Self { geometry, material }
    }

    pub fn particle_count(&self) -> usize {
        self.geometry.len()
    }

    // Releases the geometry and material. Consumes the renderable
    pub fn dispose(self) {
        debug!(
            "Disposing galaxy of {} particles ({} bytes)",
            self.particle_count(),
            self.geometry.byte_size()
        );
        drop(self);
    }
}

// Add/remove boundary the lifecycle manager and renderer talk to
pub trait SceneGraph {
    fn attach(&mut self, points: GalaxyPoints) -> ObjectId;

    // Removes the object and hands its ownership back to the caller
    fn detach(&mut self, id: ObjectId) -> Option<GalaxyPoints>;

    fn get(&self, id: ObjectId) -> Option<&GalaxyPoints>;

    fn objects(&self) -> Box<dyn Iterator<Item = &GalaxyPoints> + '_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<(ObjectId, GalaxyPoints)>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SceneGraph for Scene {
    fn attach(&mut self, points: GalaxyPoints) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.objects.push((id, points));
        id
    }

    fn detach(&mut self, id: ObjectId) -> Option<GalaxyPoints> {
        let index = self.objects.iter().position(|(object_id, _)| *object_id == id)?;
        Some(self.objects.remove(index).1)
    }

    fn get(&self, id: ObjectId) -> Option<&GalaxyPoints> {
        self.objects
            .iter()
            .find(|(object_id, _)| *object_id == id)
            .map(|(_, points)| points)
    }

    fn objects(&self) -> Box<dyn Iterator<Item = &GalaxyPoints> + '_> {
        Box::new(self.objects.iter().map(|(_, points)| points))
    }

    fn len(&self) -> usize {
        self.objects.len()
    }
}
