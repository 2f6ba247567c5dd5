/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and other debug information to be displayed in the UI.
 *
 * Includes metrics for:
 * - FPS (frames per second)
 * - Frame time
 * - Drawn and culled particle counts
 * - Time spent in the last regeneration
 */

use std::time::Duration;

use nannou::prelude::*;

use crate::culling::CullStats;

// Debug information to display
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub cull_stats: CullStats,
    pub generation: u64,
    pub generation_time: Duration,
    pub pixel_density: f32,
    pub camera_position: Vec3,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            cull_stats: CullStats::default(),
            generation: 0,
            generation_time: Duration::ZERO,
            pixel_density: 1.0,
            camera_position: Vec3::ZERO,
        }
    }
}
