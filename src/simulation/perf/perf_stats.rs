use wasm_bindgen::prelude::*;

/// Snapshot of the last tick. All zeros while perf metrics are disabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) tick_ms: f64,
    pub(super) map_ms: f64,
    pub(super) resolve_ms: f64,
    pub(super) agents: u32,
    pub(super) draws_emitted: u32,
    pub(super) suppressed_out_of_view: u32,
    pub(super) suppressed_occupied: u32,
    pub(super) morph: f32,
    pub(super) speed: f32,
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
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    #[wasm_bindgen(getter)]
    pub fn map_ms(&self) -> f64 { self.map_ms }
    #[wasm_bindgen(getter)]
    pub fn resolve_ms(&self) -> f64 { self.resolve_ms }
    #[wasm_bindgen(getter)]
    pub fn agents(&self) -> u32 { self.agents }
    #[wasm_bindgen(getter)]
    pub fn draws_emitted(&self) -> u32 { self.draws_emitted }
    #[wasm_bindgen(getter)]
    pub fn suppressed_out_of_view(&self) -> u32 { self.suppressed_out_of_view }
    #[wasm_bindgen(getter)]
    pub fn suppressed_occupied(&self) -> u32 { self.suppressed_occupied }
    #[wasm_bindgen(getter)]
    pub fn morph(&self) -> f32 { self.morph }
    #[wasm_bindgen(getter)]
    pub fn speed(&self) -> f32 { self.speed }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}
