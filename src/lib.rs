/*
 * Galaxy Generator - Module Definitions
 *
 * This file defines the module structure for the galaxy generator.
 * The generator, lifecycle manager and render loop are independent of the
 * window; app, ui and input wire them into nannou.
 */

// Re-export key components for easier access
pub use app::Model;
pub use camera::PerspectiveCamera;
pub use config::AppConfig;
pub use controls::OrbitControls;
pub use error::{GalaxyError, GalaxyResult};
pub use generator::{generate, generate_with, ParticleBuffers};
pub use lifecycle::GalaxyLifecycleManager;
pub use params::GalaxyParams;
pub use render_loop::{camera_orbit_x, CameraRig, RenderLoop};
pub use renderer::{PointRenderer, Renderer};
pub use scene::{GalaxyPoints, ObjectId, PointsMaterial, Scene, SceneGraph};

// Define modules
pub mod app;
pub mod camera;
pub mod config;
pub mod controls;
pub mod culling;
pub mod debug;
pub mod error;
pub mod generator;
pub mod input;
pub mod lifecycle;
pub mod params;
pub mod render_loop;
pub mod renderer;
pub mod scene;
pub mod ui;
