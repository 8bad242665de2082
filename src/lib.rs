/*
 * Constellation Particle Animation - Module Definitions
 *
 * This file defines the module structure for the constellation animation.
 * It organizes the code into logical components for better maintainability.
 */

// Re-export key components for easier access
pub use connections::ConnectionSet;
pub use display::DisplayList;
pub use particle::{Particle, ParticleId};
pub use params::SimulationParams;
pub use debug::DebugInfo;
pub use scene::Scene;
pub use app::Model;

// Define modules
pub mod particle;
pub mod connections;
pub mod scene;
pub mod spawn;
pub mod display;
pub mod geometry;
pub mod params;
pub mod debug;
pub mod app;
pub mod ui;
pub mod renderer;

// Constants
pub const PARTICLE_RADIUS: f32 = 3.0;
pub const LINE_WEIGHT: f32 = 1.0;
