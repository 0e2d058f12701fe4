//! Capsule Engine - settling physics for the gacha box, in WASM
//!
//! A handful of round capsules fall under gravity into a closed box, bounce
//! off the walls and push each other apart until they come to rest. The
//! browser calls one tick per animation frame and paints the result.
//!
//! Architecture:
//! - core/        - safety and logging macros, RNG
//! - domain/      - container, config, palette
//! - systems/     - particle store and physics stepper
//! - simulation/  - orchestration, phases, rendering seam, JS facade

// Macros must be declared first so every later module can use them.
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("capsule engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{ColorTag, Container, SimulationConfig};
pub use simulation::{CapsuleBox, FrameOutcome, ParticleView, Phase, Renderer, SimulationCore};
pub use systems::particles::{Particle, ParticleStore, Vec2};
pub use systems::physics::{step_particles, StepReport};
