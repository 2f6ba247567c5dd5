/*
 * Culling Module
 *
 * View-frustum culling for projected particles. Only particles whose clip
 * coordinates fall inside the view volume are turned into sprites.
 */

use nannou::prelude::*;

// Clip-space position to normalized device coordinates, or None when the
// point lies behind the camera or outside the view volume
pub fn clip_to_ndc(clip: Vec4) -> Option<Vec3> {
    if clip.w <= 0.0 {
        return None;
    }

    let ndc = clip.truncate() / clip.w;
    let inside = ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0 && (0.0..=1.0).contains(&ndc.z);
    inside.then(|| ndc)
}

// Counts gathered while culling one frame
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CullStats {
    pub total: usize,
    pub visible: usize,
}

impl CullStats {
    // Percentage of particles skipped
    pub fn efficiency(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            (1.0 - self.visible as f32 / self.total as f32) * 100.0
        }
    }
}
