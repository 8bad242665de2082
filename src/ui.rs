/*
 * UI Module
 *
 * This module contains functions for creating and updating the user
 * interface using nannou_egui. It provides controls for adjusting
 * simulation parameters. Parameter change detection is handled by the
 * SimulationParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;

// Update the UI and return whether particles should be reset, whether the
// population size changed, and whether any UI change occurred
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    debug_info: &DebugInfo,
) -> (bool, bool, bool) {
    let mut should_reset_particles = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Particles", |ui| {
                ui.add(
                    egui::Slider::new(
                        &mut params.num_particles,
                        SimulationParams::get_num_particles_range(),
                    )
                    .text("Number of Particles"),
                );

                if ui.button("Reset Particles").clicked() {
                    should_reset_particles = true;
                }

                ui.add(
                    egui::Slider::new(
                        &mut params.travel_distance,
                        SimulationParams::get_travel_distance_range(),
                    )
                    .text("Travel Distance"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.min_travel_time,
                        SimulationParams::get_travel_time_range(),
                    )
                    .text("Min Travel Time (s)"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.max_travel_time,
                        SimulationParams::get_travel_time_range(),
                    )
                    .text("Max Travel Time (s)"),
                );
            });

            ui.collapsing("Connections", |ui| {
                ui.add(
                    egui::Slider::new(
                        &mut params.connection_distance,
                        SimulationParams::get_connection_distance_range(),
                    )
                    .text("Connection Distance"),
                );
                ui.label(format!("Active Connections: {}", debug_info.connection_count));
            });

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    // The travel-time sliders move independently; keep the range valid
    if params.min_travel_time > params.max_travel_time {
        params.max_travel_time = params.min_travel_time;
    }

    // Detect parameter changes
    let (_, num_particles_changed, ui_changed) = params.detect_changes();

    (should_reset_particles, num_particles_changed, ui_changed)
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    particle_count: usize,
) {
    // Create a background panel in the top-left corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;
    let panel_height = line_height * 5.0 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    // Draw the background panel
    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    // Draw each line of text
    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!(
            "Frame time: {:.2} ms",
            debug_info.frame_time.as_secs_f64() * 1000.0
        ),
        format!("Particles: {}", particle_count),
        format!("Connections: {}", debug_info.connection_count),
        format!("Respawned: {}", debug_info.respawned_last_frame),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Position the text with a fixed offset from the left edge
        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
