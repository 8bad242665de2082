/*
 * Geometry Helpers Module
 *
 * Small helpers shared by the scene controller and the connection
 * registry: Euclidean distance and the bounds-containment test that
 * decides when a particle has left the viewport.
 */

use nannou::prelude::*;

// Euclidean distance between two positions
#[inline]
pub fn distance(a: Point2, b: Point2) -> f32 {
    a.distance(b)
}

// True iff the point lies strictly inside the rectangle, tested
// independently on each axis. A particle sitting exactly on the boundary
// counts as departed.
#[inline]
pub fn strictly_inside(point: Point2, bounds: Rect) -> bool {
    point.x > bounds.left()
        && point.x < bounds.right()
        && point.y > bounds.bottom()
        && point.y < bounds.top()
}
