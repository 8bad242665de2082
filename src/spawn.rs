/*
 * Spawn Module
 *
 * Placement logic for new particles. Respawned particles sit flush
 * against a randomly chosen screen edge (inset by the configured offset)
 * and receive a travel target on a circle of radius travel_distance
 * around the origin, with the angle drawn from the half-plane facing
 * away from that edge so the particle crosses the visible area instead
 * of leaving immediately. The initial population is scattered uniformly
 * over the whole bounds with an unconstrained travel direction.
 */

use nannou::prelude::*;
use rand::Rng;
use std::f32::consts::PI;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScreenEdge {
    Left,
    Right,
    Top,
    Bottom,
}

impl ScreenEdge {
    pub const ALL: [ScreenEdge; 4] = [
        ScreenEdge::Left,
        ScreenEdge::Right,
        ScreenEdge::Top,
        ScreenEdge::Bottom,
    ];
}

// Point at radial distance r from the origin
pub fn target_position(r: f32, angle: f32) -> Point2 {
    pt2(r * angle.cos(), r * angle.sin())
}

// Spawn position against a random edge plus an inward-biased travel target
pub fn edge_spawn(
    bounds: Rect,
    offset: f32,
    travel_distance: f32,
    rng: &mut impl Rng,
) -> (Point2, Point2) {
    let edge = ScreenEdge::ALL[rng.gen_range(0..ScreenEdge::ALL.len())];
    spawn_at_edge(edge, bounds, offset, travel_distance, rng)
}

// Spawn position against the given edge. The free coordinate is drawn
// uniformly over the full span of that edge; the target angle covers the
// half-plane pointing into the scene (Left edge launches rightward,
// Top edge launches downward, and so on).
pub fn spawn_at_edge(
    edge: ScreenEdge,
    bounds: Rect,
    offset: f32,
    travel_distance: f32,
    rng: &mut impl Rng,
) -> (Point2, Point2) {
    let (position, angle) = match edge {
        ScreenEdge::Left => (
            pt2(
                bounds.left() + offset,
                rng.gen_range(bounds.bottom()..bounds.top()),
            ),
            rng.gen_range(-PI / 2.0..PI / 2.0),
        ),
        ScreenEdge::Right => (
            pt2(
                bounds.right() - offset,
                rng.gen_range(bounds.bottom()..bounds.top()),
            ),
            rng.gen_range(PI / 2.0..3.0 * PI / 2.0),
        ),
        ScreenEdge::Top => (
            pt2(
                rng.gen_range(bounds.left()..bounds.right()),
                bounds.top() - offset,
            ),
            rng.gen_range(-PI..0.0),
        ),
        ScreenEdge::Bottom => (
            pt2(
                rng.gen_range(bounds.left()..bounds.right()),
                bounds.bottom() + offset,
            ),
            rng.gen_range(0.0..PI),
        ),
    };
    (position, target_position(travel_distance, angle))
}

// Initial placement: uniform over the whole bounds, any travel direction
pub fn scatter_spawn(bounds: Rect, travel_distance: f32, rng: &mut impl Rng) -> (Point2, Point2) {
    let position = pt2(
        rng.gen_range(bounds.left()..bounds.right()),
        rng.gen_range(bounds.bottom()..bounds.top()),
    );
    let angle = rng.gen_range(0.0..2.0 * PI);
    (position, target_position(travel_distance, angle))
}
