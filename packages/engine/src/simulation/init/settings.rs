use crate::domain::SimulationConfig;

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn set_config(sim: &mut SimulationCore, config: SimulationConfig) -> Result<(), String> {
    config.validate()?;
    if !sim.container.fits(config.radius) {
        return Err(format!(
            "container {}x{} cannot hold a capsule of radius {}",
            sim.container.width, sim.container.height, config.radius
        ));
    }
    sim.config = config;
    super::commands::respawn(sim);
    Ok(())
}

pub(super) fn enable_perf_metrics(sim: &mut SimulationCore, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(sim: &SimulationCore) -> PerfStats {
    sim.perf_stats.clone()
}
