/*
 * Orbit Controls Module
 *
 * Rotates the camera around its target with mouse drags and dollies it with
 * the mouse wheel. Input only accumulates deltas; `update` applies them once
 * per frame and, with damping enabled, lets the motion decay toward rest.
 */

use std::f32::consts::PI;

use nannou::prelude::*;

use crate::camera::PerspectiveCamera;
use crate::config::AppConfig;

// Keeps the camera off the poles where the up vector degenerates
const POLE_EPSILON: f32 = 1e-6;

pub struct OrbitControls {
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub is_dragging: bool,
    pub last_cursor_pos: Vec2,
    // Pending rotation (azimuth, polar) in radians
    delta_theta: f32,
    delta_phi: f32,
    scale: f32,
}

impl OrbitControls {
    pub fn new() -> Self {
        Self {
            enable_damping: false,
            damping_factor: 0.05,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            is_dragging: false,
            last_cursor_pos: Vec2::ZERO,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            enable_damping: config.enable_damping,
            damping_factor: config.damping_factor,
            min_distance: config.min_distance,
            max_distance: config.far * 0.5,
            ..Self::new()
        }
    }

    // Start dragging the camera
    pub fn start_drag(&mut self, position: Vec2) {
        self.last_cursor_pos = position;
        self.is_dragging = true;
    }

    // Rotate by the cursor movement; a full viewport height turns the camera once around
    pub fn drag(&mut self, position: Vec2, viewport_height: f32) {
        if !self.is_dragging || viewport_height <= 0.0 {
            return;
        }

        let delta = position - self.last_cursor_pos;
        if delta.length_squared() > 0.0 {
            let per_pixel = 2.0 * PI * self.rotate_speed / viewport_height;
            self.delta_theta -= delta.x * per_pixel;
            // nannou's y axis points up, so dragging up tilts the camera down
            self.delta_phi += delta.y * per_pixel;
            self.last_cursor_pos = position;
        }
    }

    // End dragging
    pub fn end_drag(&mut self) {
        self.is_dragging = false;
    }

    // Positive scroll moves the camera toward the target
    pub fn zoom(&mut self, scroll: f32) {
        let step = 0.95_f32.powf(self.zoom_speed * scroll.abs());
        if scroll > 0.0 {
            self.scale *= step;
        } else if scroll < 0.0 {
            self.scale /= step;
        }
    }

    // Applies one step of pending motion to the camera
    pub fn update(&mut self, camera: &mut PerspectiveCamera) {
        let offset = camera.position - camera.target;
        let radius = offset.length();
        if radius <= 0.0 {
            return;
        }

        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        let factor = if self.enable_damping { self.damping_factor } else { 1.0 };
        theta += self.delta_theta * factor;
        phi = (phi + self.delta_phi * factor).clamp(POLE_EPSILON, PI - POLE_EPSILON);
        let radius = (radius * self.scale).clamp(self.min_distance, self.max_distance);

        camera.position = camera.target
            + vec3(
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
                radius * phi.sin() * theta.cos(),
            );

        if self.enable_damping {
            self.delta_theta *= 1.0 - self.damping_factor;
            self.delta_phi *= 1.0 - self.damping_factor;
        } else {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
        }
        self.scale = 1.0;
    }
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new()
    }
}
