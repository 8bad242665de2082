/*
 * Display List Module
 *
 * This module owns the renderable state of the animation: point nodes for
 * particles and line nodes for connections. It is also the animation
 * clock's home: move_point schedules a time-boxed linear interpolation of
 * a point towards a target, and advance() steps every active interpolation
 * once per frame. Scheduling a new move supersedes the previous one and
 * restarts from wherever the point currently sits.
 *
 * Handles index into slot vectors with a free list, so destroying a node
 * and creating a new one reuses storage instead of growing without bound.
 */

use nannou::prelude::*;

// Handle to a point node, owned by exactly one particle
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PointId(usize);

// Handle to a line node, owned by exactly one connection
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LineId(usize);

// A time-boxed linear interpolation towards a target position
struct Tween {
    from: Point2,
    to: Point2,
    duration: f32,
    elapsed: f32,
}

struct PointNode {
    position: Point2,
    tween: Option<Tween>,
}

struct LineNode {
    start: Point2,
    end: Point2,
    opacity: f32,
}

pub struct DisplayList {
    points: Vec<Option<PointNode>>,
    lines: Vec<Option<LineNode>>,
    free_points: Vec<usize>,
    free_lines: Vec<usize>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            lines: Vec::new(),
            free_points: Vec::new(),
            free_lines: Vec::new(),
        }
    }

    pub fn create_point(&mut self, position: Point2) -> PointId {
        let node = PointNode {
            position,
            tween: None,
        };
        match self.free_points.pop() {
            Some(slot) => {
                self.points[slot] = Some(node);
                PointId(slot)
            }
            None => {
                self.points.push(Some(node));
                PointId(self.points.len() - 1)
            }
        }
    }

    pub fn destroy_point(&mut self, id: PointId) {
        if self.points[id.0].take().is_some() {
            self.free_points.push(id.0);
        }
    }

    pub fn point_position(&self, id: PointId) -> Point2 {
        self.points[id.0]
            .as_ref()
            .expect("point handle used after destroy")
            .position
    }

    // Schedule a linear interpolation from the point's current position
    // towards target over the given duration in seconds. Fire-and-forget:
    // a later call replaces any interpolation still in flight.
    pub fn move_point(&mut self, id: PointId, target: Point2, duration: f32) {
        let node = self.points[id.0]
            .as_mut()
            .expect("point handle used after destroy");
        node.tween = Some(Tween {
            from: node.position,
            to: target,
            duration,
            elapsed: 0.0,
        });
    }

    pub fn create_line(&mut self, start: Point2, end: Point2, opacity: f32) -> LineId {
        let node = LineNode {
            start,
            end,
            opacity,
        };
        match self.free_lines.pop() {
            Some(slot) => {
                self.lines[slot] = Some(node);
                LineId(slot)
            }
            None => {
                self.lines.push(Some(node));
                LineId(self.lines.len() - 1)
            }
        }
    }

    pub fn destroy_line(&mut self, id: LineId) {
        if self.lines[id.0].take().is_some() {
            self.free_lines.push(id.0);
        }
    }

    // Step every active interpolation by dt seconds. Points with no
    // scheduled move keep their position; a finished interpolation snaps
    // the point onto its target and is dropped.
    pub fn advance(&mut self, dt: f32) {
        for slot in &mut self.points {
            let Some(node) = slot else { continue };
            let Some(tween) = &mut node.tween else {
                continue;
            };

            tween.elapsed += dt;
            let t = if tween.duration > 0.0 {
                (tween.elapsed / tween.duration).min(1.0)
            } else {
                1.0
            };
            node.position = tween.from.lerp(tween.to, t);
            if t >= 1.0 {
                node.tween = None;
            }
        }
    }

    pub fn points(&self) -> impl Iterator<Item = Point2> + '_ {
        self.points
            .iter()
            .filter_map(|slot| slot.as_ref().map(|node| node.position))
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point2, Point2, f32)> + '_ {
        self.lines
            .iter()
            .filter_map(|slot| slot.as_ref().map(|node| (node.start, node.end, node.opacity)))
    }

    pub fn point_count(&self) -> usize {
        self.points.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn line_count(&self) -> usize {
        self.lines.iter().filter(|slot| slot.is_some()).count()
    }
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point2, b: Point2) -> bool {
        a.distance(b) < 1e-4
    }

    #[test]
    fn test_create_and_query_point() {
        let mut display = DisplayList::new();
        let p = display.create_point(pt2(10.0, -4.0));
        assert!(close(display.point_position(p), pt2(10.0, -4.0)));
        assert_eq!(display.point_count(), 1);
    }

    #[test]
    fn test_interpolation_reaches_midpoint_at_half_duration() {
        let mut display = DisplayList::new();
        let p = display.create_point(pt2(0.0, 0.0));
        display.move_point(p, pt2(100.0, 50.0), 10.0);

        display.advance(5.0);
        assert!(close(display.point_position(p), pt2(50.0, 25.0)));
    }

    #[test]
    fn test_interpolation_clamps_at_target() {
        let mut display = DisplayList::new();
        let p = display.create_point(pt2(0.0, 0.0));
        display.move_point(p, pt2(60.0, 0.0), 2.0);

        display.advance(100.0);
        assert!(close(display.point_position(p), pt2(60.0, 0.0)));

        // The finished move no longer influences the point
        display.advance(1.0);
        assert!(close(display.point_position(p), pt2(60.0, 0.0)));
    }

    #[test]
    fn test_rescheduling_restarts_from_current_position() {
        let mut display = DisplayList::new();
        let p = display.create_point(pt2(0.0, 0.0));
        display.move_point(p, pt2(100.0, 0.0), 10.0);
        display.advance(5.0);

        // Halfway through, redirect to a new target; motion restarts from
        // (50, 0) with the full new duration ahead of it
        display.move_point(p, pt2(50.0, 80.0), 4.0);
        display.advance(2.0);
        assert!(close(display.point_position(p), pt2(50.0, 40.0)));
    }

    #[test]
    fn test_zero_duration_move_jumps_on_next_tick() {
        let mut display = DisplayList::new();
        let p = display.create_point(pt2(3.0, 3.0));
        display.move_point(p, pt2(-9.0, 12.0), 0.0);
        display.advance(0.0);
        assert!(close(display.point_position(p), pt2(-9.0, 12.0)));
    }

    #[test]
    fn test_destroyed_slots_are_reused() {
        let mut display = DisplayList::new();
        let a = display.create_point(pt2(1.0, 1.0));
        let _b = display.create_point(pt2(2.0, 2.0));
        display.destroy_point(a);
        assert_eq!(display.point_count(), 1);

        let c = display.create_point(pt2(3.0, 3.0));
        assert_eq!(display.point_count(), 2);
        assert!(close(display.point_position(c), pt2(3.0, 3.0)));
        // The freed slot was handed back out
        assert_eq!(c, a);
    }

    #[test]
    fn test_line_lifecycle() {
        let mut display = DisplayList::new();
        let l = display.create_line(pt2(0.0, 0.0), pt2(10.0, 0.0), 0.5);
        assert_eq!(display.line_count(), 1);

        let (start, end, opacity) = display.lines().next().unwrap();
        assert!(close(start, pt2(0.0, 0.0)));
        assert!(close(end, pt2(10.0, 0.0)));
        assert!((opacity - 0.5).abs() < 1e-6);

        display.destroy_line(l);
        assert_eq!(display.line_count(), 0);
    }
}
