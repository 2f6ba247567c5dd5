/*
 * Galaxy Generator Module
 *
 * Maps a GalaxyParams to per-particle position and color buffers.
 *
 * Each particle is placed on one of `branches` spiral arms (round-robin by
 * index), at a radius drawn uniformly from [0, radius). The arm is twisted by
 * `spin` radians per unit radius and every axis receives an independent signed
 * jitter whose magnitude is a uniform sample raised to `randomness_power`,
 * so higher powers keep most particles tight to the arm with sparse outliers.
 * Colors fade from `inside_color` at the center to `outside_color` at the rim.
 *
 * Generation is not reproducible unless a seeded random source is passed to
 * `generate_with`.
 */

use std::f32::consts::TAU;

use nannou::color::Rgb;
use nannou::prelude::*;
use rand::Rng;

use crate::params::GalaxyParams;

// Two parallel flat buffers of `3 * count` floats: xyz positions and rgb colors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleBuffers {
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
}

impl ParticleBuffers {
    pub fn with_capacity(count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(count * 3),
            colors: Vec::with_capacity(count * 3),
        }
    }

    // Number of particles
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn position(&self, i: usize) -> Vec3 {
        let i3 = i * 3;
        vec3(self.positions[i3], self.positions[i3 + 1], self.positions[i3 + 2])
    }

    pub fn color(&self, i: usize) -> Rgb {
        let i3 = i * 3;
        Rgb::new(self.colors[i3], self.colors[i3 + 1], self.colors[i3 + 2])
    }

    // Iterate over (position, color) pairs
    pub fn iter(&self) -> impl Iterator<Item = (Vec3, Rgb)> + '_ {
        self.positions
            .chunks_exact(3)
            .zip(self.colors.chunks_exact(3))
            .map(|(p, c)| (vec3(p[0], p[1], p[2]), Rgb::new(c[0], c[1], c[2])))
    }

    // Heap bytes held by both buffers
    pub fn byte_size(&self) -> usize {
        (self.positions.capacity() + self.colors.capacity()) * std::mem::size_of::<f32>()
    }

    fn push(&mut self, position: Vec3, color: Rgb) {
        self.positions.extend_from_slice(&[position.x, position.y, position.z]);
        self.colors.extend_from_slice(&[color.red, color.green, color.blue]);
    }
}

// Angle of the spiral arm particle `i` belongs to. Zero arms behave as one
pub fn branch_angle(i: usize, branches: u32) -> f32 {
    let branches = branches.max(1) as usize;
    (i % branches) as f32 / branches as f32 * TAU
}

// Signed jitter for one axis. A negative exponent would blow a zero draw up
// to infinity, so the exponent is floored at zero
fn jitter<R: Rng + ?Sized>(rng: &mut R, params: &GalaxyParams, radius: f32) -> f32 {
    let sign = if rng.gen::<f32>() < 0.5 { 1.0 } else { -1.0 };
    let power = params.randomness_power.max(0.0);
    rng.gen::<f32>().powf(power) * sign * params.randomness * radius
}

fn mix(inside: Rgb, outside: Rgb, t: f32) -> Rgb {
    Rgb::new(
        inside.red + (outside.red - inside.red) * t,
        inside.green + (outside.green - inside.green) * t,
        inside.blue + (outside.blue - inside.blue) * t,
    )
}

// Generates a galaxy using an entropy-seeded random source
pub fn generate(params: &GalaxyParams) -> ParticleBuffers {
    generate_with(params, &mut rand::thread_rng())
}

// Generates a galaxy drawing every random sample from `rng`
pub fn generate_with<R: Rng + ?Sized>(params: &GalaxyParams, rng: &mut R) -> ParticleBuffers {
    let mut buffers = ParticleBuffers::with_capacity(params.count);

    for i in 0..params.count {
        let radius = rng.gen::<f32>() * params.radius;
        let angle = branch_angle(i, params.branches) + radius * params.spin;

        let random_x = jitter(rng, params, radius);
        let random_y = jitter(rng, params, radius);
        let random_z = jitter(rng, params, radius);

        let position = vec3(
            angle.cos() * radius + random_x,
            random_y,
            angle.sin() * radius + random_z,
        );

        let t = if params.radius > 0.0 {
            (radius / params.radius).clamp(0.0, 1.0)
        } else {
            0.0
        };
        buffers.push(position, mix(params.inside_color, params.outside_color, t));
    }

    buffers
}
