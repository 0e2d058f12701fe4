//! Simulation - the capsule box as the host sees it
//!
//! SimulationCore only orchestrates:
//! - population lifecycle (reinitialize when the name count changes)
//! - the Settling/Shaking switch (physics suspended while shaking)
//! - one physics tick per frame, then a render snapshot
//!
//! The physics itself lives in systems/physics, particle state in
//! systems/particles. Nothing here touches a view; renderers pull snapshots.

use crate::domain::{Container, SimulationConfig};
use crate::systems::particles::{Particle, ParticleStore};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "phase/phase.rs"]
mod phase;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "render/renderer.rs"]
mod renderer;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::CapsuleBox;
pub use perf_stats::PerfStats;
pub use phase::Phase;
pub use render_extract::RENDER_STRIDE;
pub use renderer::{ParticleView, RecordingRenderer, Renderer};
pub use step::FrameOutcome;

use perf_timer::PerfTimer;

/// The simulation core
pub struct SimulationCore {
    store: ParticleStore,
    container: Container,
    config: SimulationConfig,
    phase: Phase,

    // State
    frame: u64,

    // Packed [x, y, radius, color] per capsule, refreshed after every change
    render_buffer: Vec<f32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Create an empty box. Fails if the config is invalid or a single
    /// capsule cannot fit inside the container.
    pub fn new(container: Container, config: SimulationConfig) -> Result<Self, String> {
        init::create_simulation_core(container, config)
    }

    /// Reference 280x320 box with default physics
    pub fn with_defaults() -> Self {
        init::create_default_core()
    }

    pub fn container(&self) -> Container { self.container }

    pub fn config(&self) -> &SimulationConfig { &self.config }

    pub fn phase(&self) -> Phase { self.phase }

    /// Number of ticks actually simulated since the box was created
    pub fn frame(&self) -> u64 { self.frame }

    pub fn particle_count(&self) -> usize { self.store.len() }

    /// Read-only capsule state. Only valid between ticks.
    pub fn particles(&self) -> &[Particle] { self.store.get() }

    /// Replace the config. The config is fixed per run, so this restarts
    /// the run with the same number of capsules.
    pub fn set_config(&mut self, config: SimulationConfig) -> Result<(), String> {
        settings::set_config(self, config)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Match the population to the host's name count.
    ///
    /// An unchanged count keeps the current (settled) capsules; any change
    /// throws the whole population away and respawns it.
    /// Returns true if the population was rebuilt.
    pub fn set_particle_count(&mut self, count: usize) -> bool {
        commands::set_particle_count(self, count)
    }

    /// Respawn the current population from scratch
    pub fn reset(&mut self) {
        commands::respawn(self)
    }

    /// Drop every capsule
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Level-triggered shaking flag from the host. Returns the phase after the update.
    pub fn set_shaking(&mut self, shaking: bool) -> Phase {
        phase::set_shaking(self, shaking)
    }

    /// One physics tick, if the box is settling. Returns true if a tick ran.
    pub fn step(&mut self) -> bool {
        step::step(self)
    }

    /// Per-frame entry for the host loop: sample the shaking flag, then tick.
    pub fn frame_tick(&mut self, shaking: bool) -> FrameOutcome {
        step::frame_tick(self, shaking)
    }

    /// Host loop convenience: `frame_tick` then hand the snapshot to `renderer`.
    pub fn run_frame<R: Renderer + ?Sized>(&mut self, shaking: bool, renderer: &mut R) -> FrameOutcome {
        let outcome = self.frame_tick(shaking);
        self.render(renderer);
        outcome
    }

    /// Feed the current state to a renderer
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        render_extract::render(self, renderer)
    }

    /// Total kinetic energy of the box
    pub fn kinetic_energy(&self) -> f32 {
        crate::systems::physics::kinetic_energy(self.store.get())
    }

    /// Every capsule slower than `config.settle_threshold()`
    pub fn is_settled(&self) -> bool {
        crate::systems::physics::is_settled(self.store.get(), self.config.settle_threshold())
    }

    /// Pointer to the packed render buffer (for JS rendering)
    pub fn render_ptr(&self) -> *const f32 {
        self.render_buffer.as_ptr()
    }

    /// Render buffer length in f32 elements
    pub fn render_len(&self) -> usize {
        self.render_buffer.len()
    }

    pub fn render_buffer(&self) -> &[f32] {
        &self.render_buffer
    }

    fn refresh_render_buffer(&mut self) {
        render_extract::refresh(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
