/*
 * Application Module
 *
 * This module defines the main application model for the galaxy viewer.
 * It wires the parameter panel, the lifecycle manager, the camera rig and
 * the point renderer into nannou's model/update/view callbacks.
 *
 * nannou runs update and view on one thread, so regeneration never overlaps
 * a frame tick.
 */

use log::{error, info, warn};
use nannou::prelude::*;
use nannou_egui::Egui;

use crate::config::AppConfig;
use crate::debug::DebugInfo;
use crate::input;
use crate::lifecycle::GalaxyLifecycleManager;
use crate::params::{CommitTracker, GalaxyParams};
use crate::render_loop::{self, CameraRig, RenderLoop};
use crate::renderer::PointRenderer;
use crate::scene::Scene;
use crate::ui;

// Main model for the application
pub struct Model {
    pub config: AppConfig,
    pub params: GalaxyParams,
    pub commits: CommitTracker,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub galaxy: GalaxyLifecycleManager<Scene>,
    pub rig: CameraRig,
    pub renderer: PointRenderer,
    pub render_loop: RenderLoop,
    pub mouse_position: Vec2,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let config = AppConfig::from_env().unwrap_or_else(|e| {
        warn!("{e}, falling back to the default configuration");
        AppConfig::default()
    });

    // Size the window relative to the primary monitor
    let monitor = app.primary_monitor().expect("Failed to get primary monitor");
    let monitor_size = monitor.size();
    let window_width = monitor_size.width as f32 * config.window_fraction;
    let window_height = monitor_size.height as f32 * config.window_fraction;

    let window_id = app
        .new_window()
        .title("Galaxy Generator")
        .size(window_width as u32, window_height as u32)
        .view(view)
        .resized(resized)
        .mouse_moved(input::mouse_moved)
        .mouse_pressed(input::mouse_pressed)
        .mouse_released(input::mouse_released)
        .mouse_wheel(input::mouse_wheel)
        .raw_event(input::raw_window_event)
        .build()
        .expect("Failed to build the main window");

    let window = app.window(window_id).expect("Main window closed during setup");
    let egui = Egui::from_window(&window);

    let rect = window.rect();
    let pixel_density = window.scale_factor().min(config.max_pixel_density);
    let rig = CameraRig::from_config(&config, rect.w() / rect.h());
    let renderer = PointRenderer::new(rect.w(), rect.h(), pixel_density);

    let params = config.initial_params().unwrap_or_else(|e| {
        warn!("{e}, falling back to the default colors");
        GalaxyParams::default()
    });
    let mut commits = CommitTracker::default();
    let mut galaxy = GalaxyLifecycleManager::new(Scene::new(), config.seed);
    if let Some(seed) = config.seed {
        info!("Using fixed seed {seed}");
    }

    galaxy.regenerate(&params);
    commits.take_snapshot(&params);

    Model {
        config,
        params,
        commits,
        egui,
        debug_info: DebugInfo::default(),
        galaxy,
        rig,
        renderer,
        render_loop: RenderLoop::new(),
        mouse_position: Vec2::ZERO,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let response = ui::update_ui(
        &mut model.egui,
        &mut model.params,
        &mut model.commits,
        &mut model.render_loop.auto_orbit,
        &model.debug_info,
    );

    if response.commit || response.regenerate {
        model.galaxy.regenerate(&model.params);
    }

    model.render_loop.tick(
        app.time,
        model.galaxy.scene(),
        &mut model.rig,
        &mut model.renderer,
    );

    model.debug_info.cull_stats = model.renderer.stats();
    model.debug_info.generation = model.galaxy.generation();
    model.debug_info.generation_time = model.galaxy.last_generation_time();
    model.debug_info.pixel_density = model.renderer.pixel_density();
    model.debug_info.camera_position = model.rig.camera.position;
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    model.renderer.draw(&draw);

    if let Err(e) = draw.to_frame(app, &frame) {
        error!("Failed to draw galaxy: {e:?}");
    }
    if let Err(e) = model.egui.draw_to_frame(&frame) {
        error!("Failed to draw UI: {e:?}");
    }
}

// Keep the camera aspect and renderer output in step with the window
pub fn resized(app: &App, model: &mut Model, size: Vec2) {
    let device_pixel_ratio = app.main_window().scale_factor();
    render_loop::resize(
        size.x,
        size.y,
        device_pixel_ratio,
        model.config.max_pixel_density,
        &mut model.rig.camera,
        &mut model.renderer,
    );
}
