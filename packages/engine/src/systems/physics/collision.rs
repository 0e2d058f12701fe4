use crate::domain::{Container, SimulationConfig};
use crate::systems::particles::Particle;

/// Wall stage: clamp into the box and bounce.
///
/// The four walls are tested independently, so a capsule jammed in a corner
/// can bounce off two of them in the same tick. Only the floor applies
/// friction. Returns the number of wall contacts.
#[inline(always)]
pub fn resolve_walls(particles: &mut [Particle], container: &Container, config: &SimulationConfig) -> u32 {
    let bounce = config.restitution;
    let mut hits = 0u32;

    for p in particles.iter_mut() {
        let r = p.radius;

        // Left
        if p.position.x - r < 0.0 {
            p.position.x = r;
            p.velocity.x = -p.velocity.x * bounce;
            hits += 1;
        }
        // Right
        if p.position.x + r > container.width {
            p.position.x = container.width - r;
            p.velocity.x = -p.velocity.x * bounce;
            hits += 1;
        }
        // Floor
        if p.position.y + r > container.height {
            p.position.y = container.height - r;
            p.velocity.y = -p.velocity.y * bounce;
            p.velocity.x *= 1.0 - config.friction;
            hits += 1;
        }
        // Ceiling
        if p.position.y - r < 0.0 {
            p.position.y = r;
            p.velocity.y = -p.velocity.y * bounce;
            hits += 1;
        }
    }

    hits
}

/// Position-only clamp, run after pair resolution.
///
/// Pair pushes can shove a capsule through a wall after `resolve_walls` has
/// already run; this puts it back without touching velocity.
#[inline(always)]
pub fn contain(particles: &mut [Particle], container: &Container) {
    for p in particles.iter_mut() {
        let (min_x, max_x) = container.x_range(p.radius);
        let (min_y, max_y) = container.y_range(p.radius);
        p.position.x = p.position.x.max(min_x).min(max_x);
        p.position.y = p.position.y.max(min_y).min(max_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::particles::Vec2;

    fn capsule(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
        let mut p = Particle::at_rest(0, Vec2::new(x, y), 20.0);
        p.velocity = Vec2::new(vx, vy);
        p
    }

    #[test]
    fn floor_clamps_bounces_and_applies_friction() {
        let container = Container::default();
        let config = SimulationConfig::default();
        let mut particles = [capsule(140.0, 305.0, 5.0, 10.0)];

        let hits = resolve_walls(&mut particles, &container, &config);

        let p = particles[0];
        assert_eq!(hits, 1);
        assert_eq!(p.position.y, 300.0);
        assert!((p.velocity.y + 6.0).abs() < 1e-5);
        assert!((p.velocity.x - 5.0 * 0.98).abs() < 1e-5);
    }

    #[test]
    fn ceiling_has_no_friction() {
        let container = Container::default();
        let config = SimulationConfig::default();
        let mut particles = [capsule(140.0, 10.0, 5.0, -10.0)];

        resolve_walls(&mut particles, &container, &config);

        let p = particles[0];
        assert_eq!(p.position.y, 20.0);
        assert!((p.velocity.y - 6.0).abs() < 1e-5);
        assert_eq!(p.velocity.x, 5.0);
    }

    #[test]
    fn corner_fires_two_walls() {
        let container = Container::default();
        let config = SimulationConfig::default();
        let mut particles = [capsule(275.0, 318.0, 4.0, 4.0)];

        let hits = resolve_walls(&mut particles, &container, &config);

        let p = particles[0];
        assert_eq!(hits, 2);
        assert_eq!(p.position, Vec2::new(260.0, 300.0));
        assert!(p.velocity.x < 0.0);
        assert!(p.velocity.y < 0.0);
    }

    #[test]
    fn touching_a_wall_exactly_is_not_a_hit() {
        let container = Container::default();
        let config = SimulationConfig::default();
        let mut particles = [capsule(20.0, 300.0, -1.0, 1.0)];

        let hits = resolve_walls(&mut particles, &container, &config);

        assert_eq!(hits, 0);
        assert_eq!(particles[0].velocity, Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn contain_moves_position_only() {
        let container = Container::default();
        let mut particles = [capsule(-5.0, 400.0, -3.0, 7.0)];

        contain(&mut particles, &container);

        assert_eq!(particles[0].position, Vec2::new(20.0, 300.0));
        assert_eq!(particles[0].velocity, Vec2::new(-3.0, 7.0));
    }
}
