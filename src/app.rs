/*
 * Application Module
 *
 * This module defines the main application model and logic for the
 * constellation animation. It wires the nannou frame callback to the
 * simulation: the display list's interpolation clock advances first, then
 * the scene runs its teardown / respawn / reconnect cycle against the
 * freshly interpolated positions.
 */

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::debug::DebugInfo;
use crate::display::DisplayList;
use crate::params::SimulationParams;
use crate::renderer;
use crate::scene::Scene;
use crate::ui;

// Main model for the application
pub struct Model {
    pub scene: Scene,
    pub display: DisplayList,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Get the primary monitor's dimensions
    let monitor = app.primary_monitor().expect("Failed to get primary monitor");
    let monitor_size = monitor.size();

    // Calculate window size based on monitor size (80% of monitor size)
    let window_width = monitor_size.width as f32 * 0.8;
    let window_height = monitor_size.height as f32 * 0.8;

    // Create the main window with dynamic size
    let window_id = app
        .new_window()
        .title("Constellation Particles")
        .size(window_width as u32, window_height as u32)
        .view(renderer::view)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    // Get the window
    let window = app.window(window_id).unwrap();

    // Create the UI
    let egui = Egui::from_window(&window);

    // Create simulation parameters
    let params = SimulationParams::default();

    // The simulation bounds match the window, centered on the origin
    let bounds = Rect::from_w_h(window_width, window_height);

    // Place the initial population
    let mut display = DisplayList::new();
    let mut scene = Scene::new(bounds);
    let mut rng = rand::thread_rng();
    scene.populate(&mut display, &params, &mut rng);

    Model {
        scene,
        display,
        params,
        egui,
        debug_info: DebugInfo::default(),
    }
}

// Update the model, called once per frame
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    // Update UI and check if the population needs to be rebuilt
    let (should_reset, num_particles_changed, _ui_changed) =
        ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    let mut rng = rand::thread_rng();

    if should_reset || num_particles_changed {
        model
            .scene
            .reset(&mut model.display, &model.params, &mut rng);
    }

    // Only advance the animation if the simulation is not paused
    if !model.params.pause_simulation {
        model.display.advance(update.since_last.as_secs_f32());
        model
            .scene
            .update(&mut model.display, &model.params, &mut rng);
    }

    model.debug_info.connection_count = model.scene.connections.len();
    model.debug_info.respawned_last_frame = model.scene.respawned_last_frame;
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
