use crate::systems::physics::{kinetic_energy, max_speed, step_particles, StepReport};

use super::{PerfTimer, SimulationCore};

/// What a frame callback did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// One physics tick ran
    Stepped(StepReport),
    /// Shaking phase, physics suspended
    Suspended,
    /// Nothing to simulate
    Empty,
}

pub(super) fn frame_tick(sim: &mut SimulationCore, shaking: bool) -> FrameOutcome {
    sim.set_shaking(shaking);
    if !sim.phase.is_simulating() {
        return FrameOutcome::Suspended;
    }
    if sim.store.is_empty() {
        return FrameOutcome::Empty;
    }
    FrameOutcome::Stepped(tick(sim))
}

pub(super) fn step(sim: &mut SimulationCore) -> bool {
    if !sim.phase.is_simulating() || sim.store.is_empty() {
        return false;
    }
    tick(sim);
    true
}

fn tick(sim: &mut SimulationCore) -> StepReport {
    let perf_on = sim.perf_enabled;
    let start = if perf_on { Some(PerfTimer::start()) } else { None };

    let report = step_particles(sim.store.particles_mut(), &sim.container, &sim.config);
    sim.frame += 1;
    sim.refresh_render_buffer();

    if let Some(start) = start {
        let stats = &mut sim.perf_stats;
        stats.reset();
        stats.step_ms = start.elapsed_ms();
        stats.pair_checks = report.pair_checks;
        stats.contacts = report.contacts;
        stats.impulses = report.impulses;
        stats.coincident = report.coincident;
        stats.wall_hits = report.wall_hits;
        stats.kinetic_energy = kinetic_energy(sim.store.get());
        stats.max_speed = max_speed(sim.store.get());
        stats.particle_count = sim.store.len() as u32;
        stats.frame = sim.frame;
    }

    report
}
