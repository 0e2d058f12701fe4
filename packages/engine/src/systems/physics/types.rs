/// Counters from a single tick, fed into perf stats
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Unordered pairs examined
    pub pair_checks: u32,
    /// Pairs that were overlapping and got pushed apart
    pub contacts: u32,
    /// Contacts that were also approaching and got an impulse
    pub impulses: u32,
    /// Pairs skipped because their centers coincided
    pub coincident: u32,
    /// Wall bounces (a corner counts twice)
    pub wall_hits: u32,
}
