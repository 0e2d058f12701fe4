//! Systems - particle state and the physics that moves it.

pub mod particles;
pub mod physics;
