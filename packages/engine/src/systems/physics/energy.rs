use crate::systems::particles::Particle;

/// Σ ½|v|² over all capsules (unit mass)
pub fn kinetic_energy(particles: &[Particle]) -> f32 {
    particles.iter().map(Particle::kinetic_energy).sum()
}

pub fn max_speed(particles: &[Particle]) -> f32 {
    particles.iter().map(Particle::speed).fold(0.0, f32::max)
}

/// True once every capsule moves slower than `threshold` per tick.
/// An empty box is trivially settled.
///
/// Resting capsules keep a small floor bounce (gravity in, restitution
/// out), so the threshold must sit above that residual, not at zero.
pub fn is_settled(particles: &[Particle], threshold: f32) -> bool {
    particles.iter().all(|p| p.speed() < threshold)
}
