/*
 * Constellation Particle Animation
 *
 * A fixed population of points drifts across the window while lines are
 * drawn each frame between particles that are close to one another.
 * Particles that leave the window respawn against a random edge with a
 * travel target biased back into the scene.
 */

use constellation::app;

fn main() {
    nannou::app(app::model).update(app::update).run();
}
