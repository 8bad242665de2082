/*
 * Renderer Module
 *
 * This module draws one frame of the constellation: the connection lines
 * first so the particles sit on top of them, then the particles as white
 * circles, then the optional debug overlay and the egui controls.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::ui;
use crate::{LINE_WEIGHT, PARTICLE_RADIUS};

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();

    // Deep-teal background behind white points and lines
    draw.background().color(rgb(1u8, 48u8, 63u8));

    // Connection lines, faded by distance. Opacity is stored raw on the
    // line node and clamped here; pairs near the connection threshold
    // come out at or below zero and simply do not show.
    for (start, end, opacity) in model.display.lines() {
        let alpha = opacity.clamp(0.0, 1.0);
        draw.line()
            .start(start)
            .end(end)
            .weight(LINE_WEIGHT)
            .color(rgba(1.0, 1.0, 1.0, alpha));
    }

    // Particles
    for position in model.display.points() {
        draw.ellipse()
            .xy(position)
            .radius(PARTICLE_RADIUS)
            .color(WHITE);
    }

    // Draw debug info if enabled
    if model.params.show_debug {
        ui::draw_debug_info(
            &draw,
            &model.debug_info,
            app.window_rect(),
            model.scene.particles.len(),
        );
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}
