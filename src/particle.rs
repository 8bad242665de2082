/*
 * Particle Module
 *
 * This module defines the Particle struct, the leaf entity of the
 * animation. A particle owns the point node it renders through and knows
 * nothing about the rest of the simulation; its position is written by
 * the display list's interpolation clock, never directly by the scene
 * (except implicitly at spawn).
 */

use nannou::prelude::*;

use crate::display::{DisplayList, PointId};
use crate::geometry;

// Identity of a spawned particle, unique across the life of the scene.
// Respawning always mints a fresh id, so a stale id never aliases the
// replacement particle.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ParticleId(pub u64);

pub struct Particle {
    pub id: ParticleId,
    node: PointId,
}

impl Particle {
    // Create the particle's point node and start it drifting towards its
    // travel target
    pub fn spawn(
        display: &mut DisplayList,
        id: ParticleId,
        position: Point2,
        target: Point2,
        travel_time: f32,
    ) -> Self {
        let node = display.create_point(position);
        display.move_point(node, target, travel_time);
        Self { id, node }
    }

    // Release the point node. Consumes the particle so the handle cannot
    // be used afterwards.
    pub fn despawn(self, display: &mut DisplayList) {
        display.destroy_point(self.node);
    }

    pub fn position(&self, display: &DisplayList) -> Point2 {
        display.point_position(self.node)
    }

    // Redirect the particle towards a new target over travel_time seconds
    pub fn move_to(&self, display: &mut DisplayList, target: Point2, travel_time: f32) {
        display.move_point(self.node, target, travel_time);
    }

    pub fn distance_to(&self, other: &Particle, display: &DisplayList) -> f32 {
        geometry::distance(self.position(display), other.position(display))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_creates_node_and_schedules_travel() {
        let mut display = DisplayList::new();
        let particle = Particle::spawn(
            &mut display,
            ParticleId(1),
            pt2(0.0, 0.0),
            pt2(100.0, 0.0),
            10.0,
        );

        assert_eq!(display.point_count(), 1);
        display.advance(5.0);
        let position = particle.position(&display);
        assert!((position.x - 50.0).abs() < 1e-4);
        assert!(position.y.abs() < 1e-4);
    }

    #[test]
    fn test_despawn_releases_node() {
        let mut display = DisplayList::new();
        let particle = Particle::spawn(
            &mut display,
            ParticleId(1),
            pt2(0.0, 0.0),
            pt2(1.0, 1.0),
            1.0,
        );
        particle.despawn(&mut display);
        assert_eq!(display.point_count(), 0);
    }

    #[test]
    fn test_distance_between_particles() {
        let mut display = DisplayList::new();
        let a = Particle::spawn(&mut display, ParticleId(1), pt2(0.0, 0.0), pt2(0.0, 0.0), 0.0);
        let b = Particle::spawn(&mut display, ParticleId(2), pt2(30.0, 40.0), pt2(30.0, 40.0), 0.0);
        assert!((a.distance_to(&b, &display) - 50.0).abs() < 1e-4);
    }
}
