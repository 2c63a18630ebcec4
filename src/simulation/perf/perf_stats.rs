use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) render_ms: f64,
    pub(super) steps: u32,
    pub(super) bodies: u32,
    pub(super) draw_calls: u32,
    pub(super) skipped_draws: u32,
    pub(super) frames: u64,
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
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn steps(&self) -> u32 { self.steps }
    #[wasm_bindgen(getter)]
    pub fn bodies(&self) -> u32 { self.bodies }
    #[wasm_bindgen(getter)]
    pub fn draw_calls(&self) -> u32 { self.draw_calls }
    #[wasm_bindgen(getter)]
    pub fn skipped_draws(&self) -> u32 { self.skipped_draws }
    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> u64 { self.frames }
}
