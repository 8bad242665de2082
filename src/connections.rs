/*
 * Connection Registry Module
 *
 * Connections are transient: the scene clears the whole registry at the
 * start of every update and re-derives links from current distances.
 * Each link is stored exactly once, keyed by the unordered pair of
 * particle identities, and owns the line node it created, so a link and
 * its rendered line always die together.
 */

use std::collections::HashMap;

use crate::display::{DisplayList, LineId};
use crate::particle::{Particle, ParticleId};

// Unordered pair of particle identities
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
struct PairKey(ParticleId, ParticleId);

impl PairKey {
    fn new(a: ParticleId, b: ParticleId) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }
}

pub struct ConnectionSet {
    links: HashMap<PairKey, LineId>,
}

impl ConnectionSet {
    pub fn new() -> Self {
        Self {
            links: HashMap::new(),
        }
    }

    // Line alpha falls off with distance. The renderer clamps the value
    // to [0, 1] at draw time; it goes non-positive at 250 units, so links
    // approaching the default connection threshold fade out rather than
    // popping.
    pub fn line_opacity(distance: f32) -> f32 {
        50.0 / distance - 0.2
    }

    // Link two particles with a rendered line from the initiator to its
    // peer. A pre-existing link for the pair is replaced along with its
    // line node.
    pub fn connect(&mut self, display: &mut DisplayList, from: &Particle, to: &Particle) {
        let start = from.position(display);
        let end = to.position(display);
        let opacity = Self::line_opacity(from.distance_to(to, display));
        let line = display.create_line(start, end, opacity);
        if let Some(old) = self.links.insert(PairKey::new(from.id, to.id), line) {
            display.destroy_line(old);
        }
    }

    pub fn is_connected(&self, a: ParticleId, b: ParticleId) -> bool {
        self.links.contains_key(&PairKey::new(a, b))
    }

    // Destroy every owned line node and forget all links
    pub fn clear(&mut self, display: &mut DisplayList) {
        for (_, line) in self.links.drain() {
            display.destroy_line(line);
        }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl Default for ConnectionSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nannou::prelude::*;

    fn particle_at(display: &mut DisplayList, id: u64, position: Point2) -> Particle {
        Particle::spawn(display, ParticleId(id), position, position, 0.0)
    }

    #[test]
    fn test_opacity_formula() {
        assert!((ConnectionSet::line_opacity(100.0) - 0.3).abs() < 1e-6);
        assert!((ConnectionSet::line_opacity(50.0) - 0.8).abs() < 1e-6);
        assert!(ConnectionSet::line_opacity(250.0).abs() < 1e-6);
        // Beyond the default threshold the value is negative (invisible
        // once clamped by the renderer)
        assert!(ConnectionSet::line_opacity(500.0) < 0.0);
    }

    #[test]
    fn test_connect_is_symmetric_and_owns_one_line() {
        let mut display = DisplayList::new();
        let a = particle_at(&mut display, 1, pt2(0.0, 0.0));
        let b = particle_at(&mut display, 2, pt2(50.0, 0.0));

        let mut connections = ConnectionSet::new();
        connections.connect(&mut display, &a, &b);

        assert!(connections.is_connected(a.id, b.id));
        assert!(connections.is_connected(b.id, a.id));
        assert_eq!(connections.len(), 1);
        assert_eq!(display.line_count(), 1);

        let (start, end, opacity) = display.lines().next().unwrap();
        assert!(start.distance(pt2(0.0, 0.0)) < 1e-4);
        assert!(end.distance(pt2(50.0, 0.0)) < 1e-4);
        assert!((opacity - 0.8).abs() < 1e-5);
    }

    #[test]
    fn test_reconnecting_a_pair_does_not_leak_lines() {
        let mut display = DisplayList::new();
        let a = particle_at(&mut display, 1, pt2(0.0, 0.0));
        let b = particle_at(&mut display, 2, pt2(10.0, 0.0));

        let mut connections = ConnectionSet::new();
        connections.connect(&mut display, &a, &b);
        connections.connect(&mut display, &b, &a);

        assert_eq!(connections.len(), 1);
        assert_eq!(display.line_count(), 1);
    }

    #[test]
    fn test_clear_destroys_all_lines() {
        let mut display = DisplayList::new();
        let a = particle_at(&mut display, 1, pt2(0.0, 0.0));
        let b = particle_at(&mut display, 2, pt2(10.0, 0.0));
        let c = particle_at(&mut display, 3, pt2(0.0, 10.0));

        let mut connections = ConnectionSet::new();
        connections.connect(&mut display, &a, &b);
        connections.connect(&mut display, &a, &c);
        connections.connect(&mut display, &b, &c);
        assert_eq!(display.line_count(), 3);

        connections.clear(&mut display);
        assert!(connections.is_empty());
        assert!(!connections.is_connected(a.id, b.id));
        assert_eq!(display.line_count(), 0);
    }
}
