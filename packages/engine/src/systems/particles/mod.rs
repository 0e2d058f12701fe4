//! Particles - capsule state and the store that owns it
//!
//! Leaf module: knows nothing about physics. The stepper in `systems::physics`
//! is the only writer once a population exists.

mod particle;
mod store;
mod vec2;

pub use particle::Particle;
pub use store::ParticleStore;
pub use vec2::Vec2;
