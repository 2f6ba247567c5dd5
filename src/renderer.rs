/*
 * Renderer Module
 *
 * This module handles the rendering of the galaxy.
 * `render` projects every attached particle through the camera into a list
 * of screen-space point sprites, and `draw` submits them to nannou as one
 * mesh of quads.
 *
 * Matching the point material:
 * - Sprite size shrinks with view depth when size attenuation is enabled
 * - Colors come from the per-particle color buffer when vertex colors are enabled
 * - Additive blending with no depth writes, so draw order does not matter
 */

use nannou::prelude::*;

use crate::camera::PerspectiveCamera;
use crate::culling::{self, CullStats};
use crate::scene::{Blending, SceneGraph};

// Output boundary driven by the render loop and the resize handler
pub trait Renderer {
    fn render<S: SceneGraph + ?Sized>(&mut self, scene: &S, camera: &PerspectiveCamera);

    fn set_output_size(&mut self, width: f32, height: f32);

    fn set_pixel_density_cap(&mut self, ratio: f32);
}

// One projected particle in window points, origin at the window center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub center: Vec2,
    pub half_size: f32,
    pub color: Rgb,
}

pub struct PointRenderer {
    width: f32,
    height: f32,
    pixel_density: f32,
    blending: Blending,
    sprites: Vec<Sprite>,
    stats: CullStats,
}

impl PointRenderer {
    pub fn new(width: f32, height: f32, pixel_density: f32) -> Self {
        Self {
            width,
            height,
            pixel_density,
            blending: Blending::Additive,
            sprites: Vec::new(),
            stats: CullStats::default(),
        }
    }

    pub fn output_size(&self) -> Vec2 {
        vec2(self.width, self.height)
    }

    pub fn pixel_density(&self) -> f32 {
        self.pixel_density
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn stats(&self) -> CullStats {
        self.stats
    }

    // Submit the sprites prepared by the last render
    pub fn draw(&self, draw: &Draw) {
        if self.sprites.is_empty() {
            return;
        }

        let blend = match self.blending {
            Blending::Additive => BLEND_ADD,
            Blending::Normal => BLEND_NORMAL,
        };

        let vertices = self.sprites.iter().flat_map(|sprite| {
            let Sprite { center, half_size: h, color } = *sprite;
            let c = rgba(color.red, color.green, color.blue, 1.0);
            let bl = pt3(center.x - h, center.y - h, 0.0);
            let br = pt3(center.x + h, center.y - h, 0.0);
            let tr = pt3(center.x + h, center.y + h, 0.0);
            let tl = pt3(center.x - h, center.y + h, 0.0);
            [(bl, c), (br, c), (tr, c), (bl, c), (tr, c), (tl, c)]
        });

        draw.color_blend(blend).mesh().points_colored(vertices);
    }
}

impl Renderer for PointRenderer {
    fn render<S: SceneGraph + ?Sized>(&mut self, scene: &S, camera: &PerspectiveCamera) {
        self.sprites.clear();
        self.stats = CullStats::default();

        let view = camera.view();
        let projection = camera.projection();
        let half_width = self.width * 0.5;
        let half_height = self.height * 0.5;
        // At least one physical pixel across
        let min_half_size = 0.5 / self.pixel_density.max(1.0);

        for points in scene.objects() {
            let material = points.material;
            self.blending = material.blending;

            for (position, color) in points.geometry.iter() {
                self.stats.total += 1;

                let view_position = view.transform_point3(position);
                let ndc = match culling::clip_to_ndc(projection * view_position.extend(1.0)) {
                    Some(ndc) => ndc,
                    None => continue,
                };

                let diameter = if material.size_attenuation {
                    material.size * half_height / -view_position.z
                } else {
                    material.size
                };

                self.sprites.push(Sprite {
                    center: vec2(ndc.x * half_width, ndc.y * half_height),
                    half_size: (diameter * 0.5).max(min_half_size),
                    color: if material.vertex_colors { color } else { Rgb::new(1.0, 1.0, 1.0) },
                });
            }
        }

        self.stats.visible = self.sprites.len();
    }

    fn set_output_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    fn set_pixel_density_cap(&mut self, ratio: f32) {
        self.pixel_density = ratio;
    }
}
