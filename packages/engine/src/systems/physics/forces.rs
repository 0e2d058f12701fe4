use crate::domain::SimulationConfig;
use crate::systems::particles::Particle;

/// Integration stage: gravity, drag, then explicit Euler position update.
///
/// Gravity lands before damping so a resting capsule still feels the full
/// 0.8 pull next to the floor.
#[inline(always)]
pub fn integrate(particles: &mut [Particle], config: &SimulationConfig) {
    for p in particles.iter_mut() {
        p.velocity.y += config.gravity;
        p.velocity.x *= config.damping;
        p.velocity.y *= config.damping;
        p.position += p.velocity;
    }
}
