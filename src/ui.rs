/*
 * UI Module
 *
 * This module contains the "Galaxy parameters" panel built with nannou_egui.
 * Sliders follow the min/max/step table in the params module. Values are
 * edited live, but a regeneration is only requested once an edit is
 * finished: the pointer has been released and no text field holds focus.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::{
    CommitTracker, GalaxyParams, ParamControl, COUNT, RADIUS, RANDOMNESS, RANDOMNESS_POWER,
    SIZE, SPIN,
};

// What the panel asked for this frame
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct UiResponse {
    // Edited values were committed and the galaxy must be rebuilt
    pub commit: bool,
    // Re-roll the galaxy with unchanged parameters
    pub regenerate: bool,
}

fn f32_slider<'a>(value: &'a mut f32, control: &ParamControl, label: &str) -> egui::Slider<'a> {
    egui::Slider::new(value, GalaxyParams::get_f32_range(control))
        .step_by(control.step)
        .text(label)
}

fn color_row(ui: &mut egui::Ui, color: &mut nannou::color::Rgb, label: &str) {
    let mut rgb = [color.red, color.green, color.blue];
    ui.horizontal(|ui| {
        ui.color_edit_button_rgb(&mut rgb);
        ui.label(label);
    });
    *color = nannou::color::Rgb::new(rgb[0], rgb[1], rgb[2]);
}

// Update the UI and report whether the galaxy should be rebuilt
pub fn update_ui(
    egui: &mut Egui,
    params: &mut GalaxyParams,
    commits: &mut CommitTracker,
    auto_orbit: &mut bool,
    debug_info: &DebugInfo,
) -> UiResponse {
    let mut response = UiResponse::default();

    let ctx = egui.begin_frame();

    egui::Window::new("Galaxy parameters")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.add(
                egui::Slider::new(&mut params.count, GalaxyParams::get_count_range())
                    .step_by(COUNT.step)
                    .text("count"),
            );
            ui.add(f32_slider(&mut params.size, &SIZE, "size"));
            ui.add(f32_slider(&mut params.radius, &RADIUS, "radius"));
            ui.add(egui::Slider::new(&mut params.branches, GalaxyParams::get_branches_range()).text("branches"));
            ui.add(f32_slider(&mut params.spin, &SPIN, "spin"));
            ui.add(f32_slider(&mut params.randomness, &RANDOMNESS, "randomness"));
            ui.add(f32_slider(&mut params.randomness_power, &RANDOMNESS_POWER, "randomnessPower"));
            color_row(ui, &mut params.inside_color, "insideColor");
            color_row(ui, &mut params.outside_color, "outsideColor");

            ui.separator();

            if ui.button("Regenerate").clicked() {
                response.regenerate = true;
            }
            ui.checkbox(auto_orbit, "Auto orbit");

            ui.collapsing("Performance", |ui| {
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
                ui.label(format!("Particles: {}", debug_info.cull_stats.total));
                ui.label(format!("Drawn: {}", debug_info.cull_stats.visible));
                ui.label(format!("Culled: {:.1}%", debug_info.cull_stats.efficiency()));
                ui.label(format!(
                    "Generation #{} took {:.2} ms",
                    debug_info.generation,
                    debug_info.generation_time.as_secs_f64() * 1000.0
                ));
                ui.label(format!("Pixel density: {:.1}", debug_info.pixel_density));
                let p = debug_info.camera_position;
                ui.label(format!("Camera: ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z));
            });
        });

    // An edit is finished once nothing is being dragged or typed into
    let editing = ctx.input().pointer.any_down() || ctx.wants_keyboard_input();
    response.commit = should_commit(editing, commits, params);

    response
}

// Commit the edited values once the edit is finished. Committed values are
// clamped into their domains first, so the galaxy is never rebuilt from an
// out-of-range set
pub fn should_commit(editing: bool, commits: &mut CommitTracker, params: &mut GalaxyParams) -> bool {
    if editing {
        return false;
    }

    *params = params.clamped();
    if !commits.detect_changes(params) {
        return false;
    }

    commits.take_snapshot(params);
    true
}
