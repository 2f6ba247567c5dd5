/*
 * Input Module
 *
 * This module handles user input events for the galaxy viewer.
 * Mouse drags rotate the camera around the galaxy and the wheel dollies it.
 * Presses that land on the egui panel are left to the UI.
 */

use nannou::prelude::*;
use nannou::winit::event::{MouseButton, MouseScrollDelta, TouchPhase};

use crate::app::Model;

// Mouse moved event handler
pub fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    if model.rig.controls.is_dragging {
        model.rig.controls.drag(pos, app.window_rect().h());
    }

    // Always update the stored mouse position
    model.mouse_position = pos;
}

// Mouse pressed event handler
pub fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left && !model.egui.ctx().is_pointer_over_area() {
        model.rig.controls.start_drag(model.mouse_position);
    }
}

// Mouse released event handler
pub fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.rig.controls.end_drag();
    }
}

// Mouse wheel event handler for dollying
pub fn mouse_wheel(_app: &App, model: &mut Model, delta: MouseScrollDelta, _phase: TouchPhase) {
    if model.egui.ctx().is_pointer_over_area() {
        return;
    }

    match delta {
        MouseScrollDelta::LineDelta(_, y) => model.rig.controls.zoom(y),
        // Pixel deltas come from trackpads and are much finer grained
        MouseScrollDelta::PixelDelta(pos) => model.rig.controls.zoom(pos.y as f32 * 0.01),
    }
}

// Pass raw window events to egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
