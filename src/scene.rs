/*
 * Scene Module
 *
 * The simulation controller. Owns the particle population, the bounds
 * rectangle, and the connection registry, and drives the per-frame
 * cycle in a fixed order:
 *
 *   1. Teardown   - destroy every connection from the previous frame
 *   2. Respawn    - replace every particle that has left the bounds
 *   3. Reconnect  - rebuild the proximity graph from current distances
 *
 * The population size is invariant across updates: a departed particle
 * is replaced in place at its index, so the respawn scan never skips or
 * double-processes an entry.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::connections::ConnectionSet;
use crate::display::DisplayList;
use crate::geometry;
use crate::params::SimulationParams;
use crate::particle::{Particle, ParticleId};
use crate::spawn;

pub struct Scene {
    pub particles: Vec<Particle>,
    pub connections: ConnectionSet,
    pub bounds: Rect,
    pub respawned_last_frame: usize,
    next_id: u64,
}

impl Scene {
    pub fn new(bounds: Rect) -> Self {
        Self {
            particles: Vec::new(),
            connections: ConnectionSet::new(),
            bounds,
            respawned_last_frame: 0,
            next_id: 0,
        }
    }

    // Frame-zero placement: positions uniform over the whole bounds,
    // travel directions unconstrained
    pub fn populate(
        &mut self,
        display: &mut DisplayList,
        params: &SimulationParams,
        rng: &mut impl Rng,
    ) {
        for _ in 0..params.num_particles {
            let (position, target) = spawn::scatter_spawn(self.bounds, params.travel_distance, rng);
            let particle = self.spawn_particle(display, position, target, params, rng);
            self.particles.push(particle);
        }
    }

    // Tear everything down and place a fresh initial population
    pub fn reset(
        &mut self,
        display: &mut DisplayList,
        params: &SimulationParams,
        rng: &mut impl Rng,
    ) {
        self.connections.clear(display);
        for particle in self.particles.drain(..) {
            particle.despawn(display);
        }
        self.populate(display, params, rng);
    }

    // One simulation step, run once per rendered frame
    pub fn update(
        &mut self,
        display: &mut DisplayList,
        params: &SimulationParams,
        rng: &mut impl Rng,
    ) {
        self.connections.clear(display);
        self.respawn_departed(display, params, rng);
        self.connect_close_pairs(display, params);
    }

    fn spawn_particle(
        &mut self,
        display: &mut DisplayList,
        position: Point2,
        target: Point2,
        params: &SimulationParams,
        rng: &mut impl Rng,
    ) -> Particle {
        let id = ParticleId(self.next_id);
        self.next_id += 1;
        let travel_time = rng.gen_range(params.min_travel_time..=params.max_travel_time);
        Particle::spawn(display, id, position, target, travel_time)
    }

    // Replace every particle that has drifted out of the bounds with an
    // edge-spawned one, in place at the same index
    fn respawn_departed(
        &mut self,
        display: &mut DisplayList,
        params: &SimulationParams,
        rng: &mut impl Rng,
    ) {
        self.respawned_last_frame = 0;
        for i in 0..self.particles.len() {
            let position = self.particles[i].position(display);
            if geometry::strictly_inside(position, self.bounds) {
                continue;
            }
            let (position, target) =
                spawn::edge_spawn(self.bounds, params.edge_offset, params.travel_distance, rng);
            let fresh = self.spawn_particle(display, position, target, params, rng);
            let departed = std::mem::replace(&mut self.particles[i], fresh);
            departed.despawn(display);
            self.respawned_last_frame += 1;
        }
    }

    // Walk each particle's neighbors in ascending distance order and link
    // every pair closer than the connection threshold. The registry keys
    // links by unordered pair, so the first of the two scans to reach a
    // pair becomes the initiator and owns the line; the second scan sees
    // the pair as already connected.
    fn connect_close_pairs(&mut self, display: &mut DisplayList, params: &SimulationParams) {
        let count = self.particles.len();
        let mut order: Vec<usize> = Vec::with_capacity(count);
        for i in 0..count {
            let anchor = self.particles[i].position(display);

            order.clear();
            order.extend(0..count);
            order.sort_by(|&a, &b| {
                let da = geometry::distance(self.particles[a].position(display), anchor);
                let db = geometry::distance(self.particles[b].position(display), anchor);
                da.total_cmp(&db)
            });

            for &j in &order {
                // The sorted list puts the particle itself first at
                // distance zero; a self-link is never wanted
                if j == i {
                    continue;
                }
                let from = &self.particles[i];
                let to = &self.particles[j];
                if from.distance_to(to, display) < params.connection_distance
                    && !self.connections.is_connected(from.id, to.id)
                {
                    self.connections.connect(display, from, to);
                }
            }
        }
    }
}
