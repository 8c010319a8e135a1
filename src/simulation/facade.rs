use wasm_bindgen::prelude::*;

use crate::domain::{FixedMetrics, GlyphMetrics, VortexConfig};

use super::frame_clock::FrameClock;
use super::morph::MorphPhase;
use super::perf_stats::PerfStats;
use super::surface::backing_size;
use super::VortexCore;

/// Host glyph measurement through a JS callback `(fontPx, glyph) => width`,
/// typically wrapping `CanvasRenderingContext2D.measureText`.
struct JsGlyphMetrics<'a> {
    measure: &'a js_sys::Function,
}

impl GlyphMetrics for JsGlyphMetrics<'_> {
    fn glyph_width(&self, font_px: f32, glyph: char) -> f32 {
        self.measure
            .call2(
                &JsValue::NULL,
                &JsValue::from_f64(font_px as f64),
                &JsValue::from_str(&glyph.to_string()),
            )
            .ok()
            .and_then(|v| v.as_f64())
            .map(|w| w as f32)
            .unwrap_or(0.0)
    }
}

#[wasm_bindgen]
pub struct Vortex {
    core: VortexCore,
    clock: FrameClock,
}

#[wasm_bindgen]
impl Vortex {
    /// Create an engine from an optional JSON config (camelCase keys, all optional).
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<Vortex, JsValue> {
        let config = match config_json {
            Some(json) => VortexConfig::from_json(&json).map_err(|e| JsValue::from_str(&e))?,
            None => VortexConfig::default(),
        };
        Ok(Self::from_config(config))
    }

    #[wasm_bindgen(js_name = withDefaults)]
    pub fn with_defaults() -> Vortex {
        Self::from_config(VortexConfig::default())
    }

    /// Recompute the grid. `glyph_width`, when given, is the host-measured
    /// width of the reference glyph at the configured font size.
    pub fn resize(&mut self, width: f32, height: f32, glyph_width: Option<f32>) {
        match glyph_width {
            Some(w) => self.core.resize_with_metrics(width, height, &FixedMetrics(w)),
            None => self.core.resize(width, height),
        }
    }

    /// Recompute the grid, measuring glyphs through `measure(fontPx, glyph)`.
    #[wasm_bindgen(js_name = resizeMeasured)]
    pub fn resize_measured(&mut self, width: f32, height: f32, measure: &js_sys::Function) {
        let metrics = JsGlyphMetrics { measure };
        self.core.resize_with_metrics(width, height, &metrics);
    }

    /// Advance one frame with host-measured time. Returns the draw count.
    pub fn tick(&mut self, elapsed_ms: f64, dt_seconds: f32) -> usize {
        self.core.tick(elapsed_ms, dt_seconds).len()
    }

    /// Advance one frame from a `performance.now()` timestamp using the built-in
    /// clock (dt clamped to `maxDtSeconds`). Returns the draw count.
    pub fn frame(&mut self, now_ms: f64) -> usize {
        let (elapsed, dt) = self.clock.advance(now_ms);
        self.tick(elapsed, dt)
    }

    /// Restart the built-in clock (boot delay and morph replay from `now_ms`).
    pub fn restart(&mut self, now_ms: f64) {
        self.clock.restart(now_ms);
    }

    // === GRID ===

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { self.core.cols() }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.core.rows() }

    #[wasm_bindgen(getter)]
    pub fn view_cols(&self) -> u32 { self.core.grid().view_cols() }

    #[wasm_bindgen(getter)]
    pub fn view_rows(&self) -> u32 { self.core.grid().view_rows() }

    #[wasm_bindgen(getter)]
    pub fn cell_width(&self) -> f32 { self.core.grid().cell_width() }

    #[wasm_bindgen(getter)]
    pub fn cell_height(&self) -> f32 { self.core.grid().cell_height() }

    #[wasm_bindgen(getter)]
    pub fn agent_count(&self) -> usize { self.core.agent_count() }

    #[wasm_bindgen(getter)]
    pub fn max_theta(&self) -> f32 { self.core.max_theta() }

    // === CLOCK ===

    #[wasm_bindgen(getter)]
    pub fn frame_count(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn morph(&self) -> f32 { self.core.morph() }

    #[wasm_bindgen(getter)]
    pub fn speed(&self) -> f32 { self.core.speed() }

    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> MorphPhase { self.core.phase() }

    // === DRAW LIST ===

    /// Number of draws of the last tick.
    pub fn draw_count(&self) -> usize { self.core.draw_count() }

    /// Pointer to `Float32Array` view of interleaved x, y (length `2 * draw_count`).
    pub fn draw_xy_ptr(&self) -> *const f32 { self.core.draw_xy_ptr() }

    /// Pointer to `Uint32Array` view of glyph code points (length `draw_count`).
    pub fn draw_glyph_ptr(&self) -> *const u32 { self.core.draw_glyph_ptr() }

    pub fn draw_list_json(&self) -> String { self.core.draw_list_json() }

    // === STYLE ===

    /// CSS font shorthand for `ctx.font`.
    pub fn font_css(&self) -> String { self.core.config().font_css() }

    pub fn fill_style(&self) -> String { self.core.config().fill_style.clone() }

    pub fn glyph_line(&self) -> String { self.core.glyph_line().as_string() }

    /// `[width, height]` of the canvas backing store for a device pixel ratio.
    pub fn backing_size(&self, device_pixel_ratio: f32) -> Vec<u32> {
        let vp = self.core.viewport();
        let (w, h) = backing_size(vp.width, vp.height, device_pixel_ratio);
        vec![w, h]
    }

    // === SETTINGS ===

    pub fn set_words(&mut self, words: Vec<String>) {
        self.core.set_words(words);
    }

    pub fn set_base_speed(&mut self, speed: f32) {
        self.core.set_base_speed(speed);
    }

    pub fn set_boot_delay_ms(&mut self, ms: f64) {
        self.core.set_boot_delay_ms(ms);
    }

    pub fn set_center(&mut self, x: f32, y: f32) {
        self.core.set_center(x, y);
    }

    pub fn config_json(&self) -> String { self.core.config().to_json() }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}

impl Vortex {
    pub fn from_config(config: VortexConfig) -> Self {
        let core = VortexCore::new(config);
        let clock = FrameClock::new(core.config().max_dt_seconds);
        Self { core, clock }
    }

    pub fn core(&self) -> &VortexCore {
        &self.core
    }
}
