/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the constellation animation. These parameters
 * can be modified through the UI. It also provides methods for parameter
 * change detection and management to improve separation of concerns.
 */

// Parameters for the simulation that can be adjusted via UI
pub struct SimulationParams {
    pub num_particles: usize,
    pub connection_distance: f32,
    pub travel_distance: f32,
    pub edge_offset: f32,
    pub min_travel_time: f32,
    pub max_travel_time: f32,
    pub show_debug: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
struct ParamSnapshot {
    num_particles: usize,
    connection_distance: f32,
    travel_distance: f32,
    edge_offset: f32,
    min_travel_time: f32,
    max_travel_time: f32,
    show_debug: bool,
    pause_simulation: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_particles: 30,
            connection_distance: 250.0,
            travel_distance: 1500.0,
            edge_offset: 1.0,
            // Travel times in seconds; each spawn draws uniformly from
            // this range
            min_travel_time: 20.0,
            max_travel_time: 40.0,
            show_debug: false,
            pause_simulation: false,
            previous_values: None,
        }
    }
}

impl SimulationParams {
    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            num_particles: self.num_particles,
            connection_distance: self.connection_distance,
            travel_distance: self.travel_distance,
            edge_offset: self.edge_offset,
            min_travel_time: self.min_travel_time,
            max_travel_time: self.max_travel_time,
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
        });
    }

    // Check if any parameters have changed since the last snapshot.
    // Returns (should_reset_particles, num_particles_changed, any_ui_changed)
    pub fn detect_changes(&self) -> (bool, bool, bool) {
        let mut num_particles_changed = false;
        let mut ui_changed = false;

        if let Some(prev) = &self.previous_values {
            if self.num_particles != prev.num_particles {
                num_particles_changed = true;
                ui_changed = true;
            }

            if self.connection_distance != prev.connection_distance
                || self.travel_distance != prev.travel_distance
                || self.edge_offset != prev.edge_offset
                || self.min_travel_time != prev.min_travel_time
                || self.max_travel_time != prev.max_travel_time
                || self.show_debug != prev.show_debug
                || self.pause_simulation != prev.pause_simulation
            {
                ui_changed = true;
            }
        }

        // The first element is set by the UI when the reset button is clicked
        (false, num_particles_changed, ui_changed)
    }

    // Get parameter ranges for UI sliders
    pub fn get_num_particles_range() -> std::ops::RangeInclusive<usize> {
        1..=100
    }

    pub fn get_connection_distance_range() -> std::ops::RangeInclusive<f32> {
        50.0..=500.0
    }

    pub fn get_travel_distance_range() -> std::ops::RangeInclusive<f32> {
        500.0..=3000.0
    }

    pub fn get_travel_time_range() -> std::ops::RangeInclusive<f32> {
        5.0..=60.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_effect() {
        let params = SimulationParams::default();
        assert_eq!(params.num_particles, 30);
        assert!((params.connection_distance - 250.0).abs() < f32::EPSILON);
        assert!((params.travel_distance - 1500.0).abs() < f32::EPSILON);
        assert!(params.min_travel_time <= params.max_travel_time);
    }

    #[test]
    fn test_change_detection_tracks_population_size() {
        let mut params = SimulationParams::default();
        params.take_snapshot();
        params.num_particles = 45;

        let (_, num_changed, ui_changed) = params.detect_changes();
        assert!(num_changed);
        assert!(ui_changed);
    }

    #[test]
    fn test_no_changes_without_snapshot_or_edits() {
        let mut params = SimulationParams::default();
        let (_, num_changed, ui_changed) = params.detect_changes();
        assert!(!num_changed);
        assert!(!ui_changed);

        params.take_snapshot();
        let (_, num_changed, ui_changed) = params.detect_changes();
        assert!(!num_changed);
        assert!(!ui_changed);
    }
}
