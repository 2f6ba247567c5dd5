/*
 * Camera Module
 *
 * This module defines the PerspectiveCamera struct that looks at the galaxy.
 * It provides the view and projection transforms used to place particles
 * on screen. The projection is cached and must be recomputed after the
 * aspect ratio or field of view changes.
 */

use nannou::prelude::*;

use crate::config::AppConfig;

pub struct PerspectiveCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            position: Vec3::Z,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: fov_y_degrees.to_radians(),
            aspect,
            near,
            far,
            projection: Mat4::IDENTITY,
        };
        camera.recompute_projection();
        camera
    }

    pub fn from_config(config: &AppConfig, aspect: f32) -> Self {
        let mut camera = Self::new(config.fov_y_degrees, aspect, config.near, config.far);
        camera.position = config.initial_camera_position;
        camera
    }

    // Rebuild the cached projection after aspect or fov changes
    pub fn recompute_projection(&mut self) {
        self.projection = Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far);
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }
}
