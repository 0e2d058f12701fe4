use crate::domain::{Container, SimulationConfig};
use crate::systems::particles::Particle;

use super::collision::{contain, resolve_walls};
use super::forces::integrate;
use super::pairs::resolve_pairs;
use super::types::StepReport;

/// Advance every capsule by exactly one tick.
///
/// Order matters: walls and pairs must see post-integration positions.
/// 1. integrate (gravity, damping, move)
/// 2. walls (clamp + bounce, floor friction)
/// 3. pairs (ascending Gauss-Seidel separation + impulse)
/// 4. contain (position-only clamp, undoes pair pushes through walls)
///
/// Pure function of its arguments; no state is kept between calls.
pub fn step_particles(
    particles: &mut [Particle],
    container: &Container,
    config: &SimulationConfig,
) -> StepReport {
    let mut report = StepReport::default();
    if particles.is_empty() {
        return report;
    }

    integrate(particles, config);
    report.wall_hits = resolve_walls(particles, container, config);
    resolve_pairs(particles, &mut report);
    contain(particles, container);

    #[cfg(debug_assertions)]
    for p in particles.iter() {
        assert_finite_vec!(p.position, "position of capsule {}", p.index);
        assert_finite_vec!(p.velocity, "velocity of capsule {}", p.index);
    }

    report
}
