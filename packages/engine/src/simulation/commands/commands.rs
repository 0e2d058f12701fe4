use super::SimulationCore;

/// Pair resolution is O(n²) with no broad phase; past this it starts eating the frame budget.
const CROWD_WARN_COUNT: usize = 64;

pub(super) fn set_particle_count(sim: &mut SimulationCore, count: usize) -> bool {
    if count == sim.store.len() {
        return false;
    }
    respawn_with(sim, count);
    true
}

pub(super) fn respawn(sim: &mut SimulationCore) {
    let count = sim.store.len();
    respawn_with(sim, count);
}

fn respawn_with(sim: &mut SimulationCore, count: usize) {
    let previous = sim.store.len();
    if count > CROWD_WARN_COUNT {
        console_warn!(
            "capsule box: {} capsules, pair checks grow quadratically (warn above {})",
            count,
            CROWD_WARN_COUNT
        );
    }
    sim.store.initialize(count, &sim.container, &sim.config);
    sim.refresh_render_buffer();
    console_log!("capsule box: respawned {} capsules (was {})", count, previous);
}

pub(super) fn clear(sim: &mut SimulationCore) {
    sim.store.clear();
    sim.refresh_render_buffer();
}
