use wasm_bindgen::prelude::*;

/// Snapshot of the last simulated tick (zeros when perf is off)
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) pair_checks: u32,
    pub(super) contacts: u32,
    pub(super) impulses: u32,
    pub(super) coincident: u32,
    pub(super) wall_hits: u32,
    pub(super) kinetic_energy: f32,
    pub(super) max_speed: f32,
    pub(super) particle_count: u32,
    pub(super) frame: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn pair_checks(&self) -> u32 { self.pair_checks }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn impulses(&self) -> u32 { self.impulses }
    #[wasm_bindgen(getter)]
    pub fn coincident(&self) -> u32 { self.coincident }
    #[wasm_bindgen(getter)]
    pub fn wall_hits(&self) -> u32 { self.wall_hits }
    #[wasm_bindgen(getter)]
    pub fn kinetic_energy(&self) -> f32 { self.kinetic_energy }
    #[wasm_bindgen(getter)]
    pub fn max_speed(&self) -> f32 { self.max_speed }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}
