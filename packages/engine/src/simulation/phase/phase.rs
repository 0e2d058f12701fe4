use super::SimulationCore;

/// What drives the capsules this frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    /// Physics runs once per frame
    #[default]
    Settling,
    /// Host plays its jitter animation, physics is suspended
    Shaking,
}

impl Phase {
    #[inline]
    pub fn from_shaking(shaking: bool) -> Self {
        if shaking { Phase::Shaking } else { Phase::Settling }
    }

    #[inline]
    pub fn is_simulating(self) -> bool {
        self == Phase::Settling
    }
}

pub(super) fn set_shaking(sim: &mut SimulationCore, shaking: bool) -> Phase {
    let next = Phase::from_shaking(shaking);
    match (sim.phase, next) {
        (Phase::Settling, Phase::Shaking) => {
            console_log!("capsule box: shaking, physics suspended");
        }
        (Phase::Shaking, Phase::Settling) => {
            // Shaking is not simulated; whatever motion the capsules had
            // before it is stale. Resume from rest where they were left.
            sim.store.reset_velocities();
            console_log!("capsule box: settling from last positions");
        }
        _ => {}
    }
    sim.phase = next;
    next
}
