use wasm_bindgen::prelude::*;

use crate::domain::{ColorTag, Container, SimulationConfig};

use super::perf_stats::PerfStats;
use super::render_extract::{self, RENDER_STRIDE};
use super::{FrameOutcome, SimulationCore};

/// JS handle to one capsule box.
///
/// Host loop, once per `requestAnimationFrame`:
/// ```text
/// box.set_particle_count(names.length)
/// box.frame(isShaking)
/// read box.render_ptr() / box.render_len() and paint
/// ```
#[wasm_bindgen]
pub struct CapsuleBox {
    core: SimulationCore,
}

#[wasm_bindgen]
impl CapsuleBox {
    /// Box of the given size with default physics
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<CapsuleBox, JsValue> {
        let container = Container::new(width, height).map_err(|e| JsValue::from_str(&e))?;
        let core = SimulationCore::new(container, SimulationConfig::default())
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    /// Box with physics read from a JSON object (missing keys use defaults)
    #[wasm_bindgen(js_name = withConfigJson)]
    pub fn with_config_json(width: f32, height: f32, json: &str) -> Result<CapsuleBox, JsValue> {
        let container = Container::new(width, height).map_err(|e| JsValue::from_str(&e))?;
        let config = SimulationConfig::from_json(json).map_err(|e| JsValue::from_str(&e))?;
        let core = SimulationCore::new(container, config).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.container().width }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.container().height }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    /// Ticks simulated so far
    #[wasm_bindgen(getter)]
    pub fn frame_count(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn shaking(&self) -> bool { !self.core.phase().is_simulating() }

    /// Replace the physics config and respawn
    pub fn load_config(&mut self, json: &str) -> Result<(), JsValue> {
        let config = SimulationConfig::from_json(json).map_err(|e| JsValue::from_str(&e))?;
        self.core.set_config(config).map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Returns true if the capsules were respawned
    pub fn set_particle_count(&mut self, count: u32) -> bool {
        self.core.set_particle_count(count as usize)
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Returns true while physics is suspended
    pub fn set_shaking(&mut self, shaking: bool) -> bool {
        !self.core.set_shaking(shaking).is_simulating()
    }

    /// One frame: sample the shaking flag, tick if settling.
    /// Returns true if a physics tick ran.
    pub fn frame(&mut self, shaking: bool) -> bool {
        matches!(self.core.frame_tick(shaking), FrameOutcome::Stepped(_))
    }

    /// Tick once regardless of the frame clock (no-op while shaking)
    pub fn step(&mut self) -> bool {
        self.core.step()
    }

    pub fn kinetic_energy(&self) -> f32 {
        self.core.kinetic_energy()
    }

    pub fn is_settled(&self) -> bool {
        self.core.is_settled()
    }

    /// Pointer to packed `[x, y, radius, color]` f32 quadruples (for JS rendering).
    /// Invalidated by a respawn.
    pub fn render_ptr(&self) -> *const f32 {
        self.core.render_ptr()
    }

    /// Render buffer length in f32 elements
    pub fn render_len(&self) -> usize {
        self.core.render_len()
    }

    pub fn render_stride(&self) -> usize {
        RENDER_STRIDE
    }

    /// Owned copy of the centers, `[x0, y0, x1, y1, ...]`
    pub fn positions(&self) -> Vec<f32> {
        render_extract::positions(&self.core)
    }

    /// CSS color for a capsule's color tag
    pub fn color_hex(&self, tag: u8) -> String {
        ColorTag(tag).hex()
    }
}

impl CapsuleBox {
    /// Native access to the wrapped core
    pub fn core(&self) -> &SimulationCore {
        &self.core
    }
}
