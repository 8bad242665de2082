/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance
 * metrics and simulation counters to be displayed in the UI.
 */

use std::time::Duration;

// Debug information to display
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub connection_count: usize,
    pub respawned_last_frame: usize,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            connection_count: 0,
            respawned_last_frame: 0,
        }
    }
}
