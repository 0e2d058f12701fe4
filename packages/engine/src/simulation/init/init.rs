use crate::domain::{Container, SimulationConfig};
use crate::systems::particles::ParticleStore;

use super::perf_stats::PerfStats;
use super::{Phase, SimulationCore};

pub(super) fn create_simulation_core(
    container: Container,
    config: SimulationConfig,
) -> Result<SimulationCore, String> {
    config.validate()?;
    if !container.fits(config.radius) {
        return Err(format!(
            "container {}x{} cannot hold a capsule of radius {}",
            container.width, container.height, config.radius
        ));
    }
    Ok(build(container, config))
}

pub(super) fn create_default_core() -> SimulationCore {
    build(Container::default(), SimulationConfig::default())
}

fn build(container: Container, config: SimulationConfig) -> SimulationCore {
    SimulationCore {
        store: ParticleStore::new(),
        container,
        config,
        phase: Phase::Settling,
        frame: 0,
        render_buffer: Vec::new(),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
