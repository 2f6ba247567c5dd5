/*
 * Render Loop Module
 *
 * Per-frame driver. Each tick moves the camera along its drifting orbit,
 * lets the orbit controls integrate their damping, and issues one render.
 * In the app nannou's update callback calls `tick` once per frame for as long
 * as the window lives; `run_until` drives the same tick with an explicit
 * clock and stop condition.
 *
 * Resize handling is separate from the tick cadence and only runs when the
 * viewport size changes.
 */

use log::debug;

use crate::camera::PerspectiveCamera;
use crate::config::AppConfig;
use crate::controls::OrbitControls;
use crate::renderer::Renderer;
use crate::scene::SceneGraph;

const ORBIT_RATE: f32 = 0.5;
const ORBIT_DISTANCE: f32 = 7.0;
const WOBBLE_RATE: f32 = 0.32;

// Camera x coordinate at `elapsed` seconds: a slow orbit whose distance
// wobbles with a slower secondary oscillation
pub fn camera_orbit_x(elapsed: f32) -> f32 {
    (elapsed * ORBIT_RATE).cos() * (ORBIT_DISTANCE + (elapsed * WOBBLE_RATE).sin())
}

// The camera and the controls bound to it
pub struct CameraRig {
    pub camera: PerspectiveCamera,
    pub controls: OrbitControls,
}

impl CameraRig {
    pub fn new(camera: PerspectiveCamera, controls: OrbitControls) -> Self {
        Self { camera, controls }
    }

    pub fn from_config(config: &AppConfig, aspect: f32) -> Self {
        Self::new(
            PerspectiveCamera::from_config(config, aspect),
            OrbitControls::from_config(config),
        )
    }
}

pub struct RenderLoop {
    pub auto_orbit: bool,
    frame: u64,
    elapsed: f32,
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderLoop {
    pub fn new() -> Self {
        Self {
            auto_orbit: true,
            frame: 0,
            elapsed: 0.0,
        }
    }

    // Frames rendered so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    // Advances one frame at `elapsed` seconds since start
    pub fn tick<S, R>(&mut self, elapsed: f32, scene: &S, rig: &mut CameraRig, renderer: &mut R)
    where
        S: SceneGraph + ?Sized,
        R: Renderer + ?Sized,
    {
        self.elapsed = elapsed;

        if self.auto_orbit {
            rig.camera.position.x = camera_orbit_x(elapsed);
        }

        rig.controls.update(&mut rig.camera);
        renderer.render(scene, &rig.camera);

        self.frame += 1;
    }

    // Ticks with times from `clock` until `stop` returns true for the
    // current frame count. Returns the number of frames run
    pub fn run_until<C, P, S, R>(
        &mut self,
        mut clock: C,
        mut stop: P,
        scene: &S,
        rig: &mut CameraRig,
        renderer: &mut R,
    ) -> u64
    where
        C: FnMut() -> f32,
        P: FnMut(u64) -> bool,
        S: SceneGraph + ?Sized,
        R: Renderer + ?Sized,
    {
        let start = self.frame;
        while !stop(self.frame) {
            self.tick(clock(), scene, rig, renderer);
        }
        self.frame - start
    }
}

// Applies a viewport size change. Zero-area sizes (minimized windows) are
// ignored. Returns whether anything changed
pub fn resize<R: Renderer + ?Sized>(
    width: f32,
    height: f32,
    device_pixel_ratio: f32,
    max_pixel_density: f32,
    camera: &mut PerspectiveCamera,
    renderer: &mut R,
) -> bool {
    if width <= 0.0 || height <= 0.0 {
        debug!("Ignoring resize to {width}x{height}");
        return false;
    }

    camera.aspect = width / height;
    camera.recompute_projection();

    renderer.set_output_size(width, height);
    renderer.set_pixel_density_cap(device_pixel_ratio.min(max_pixel_density));

    debug!("Resized to {width}x{height} at pixel density {device_pixel_ratio}");
    true
}
