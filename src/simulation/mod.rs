//! VortexCore - grid-snapped spiral text animation
//!
//! Orchestration only:
//! - init/     construction, resize/layout, seeding, runtime settings
//! - step/     per-frame morph clock, agent advance + mapping, occupancy resolution
//! - render/   draw list and the flat transfer buffers handed to JS
//! - perf/     opt-in per-tick timings
//! - clock/    host timestamp -> (elapsed, dt) conversion
//!
//! All per-agent state lives in engine-owned SoA arrays indexed by agent id.
//! The host only ever reads draw instructions back.

use crate::domain::{GlyphLine, GlyphMetrics, MonospaceMetrics, Viewport, VortexConfig};
use crate::spatial::{CellGrid, OccupancyMask};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/layout.rs"]
mod layout;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/morph.rs"]
mod morph;
#[path = "step/advance.rs"]
mod advance;
#[path = "step/step.rs"]
mod step;
#[path = "render/draw_list.rs"]
mod draw_list;
#[path = "render/surface.rs"]
mod surface;
#[path = "clock/frame_clock.rs"]
mod frame_clock;
mod facade;

pub use draw_list::DrawInstruction;
pub use facade::Vortex;
pub use frame_clock::FrameClock;
pub use morph::{morph_at, morph_raw, phase_at, MorphPhase};
pub use perf_stats::PerfStats;
pub use surface::backing_size;

use advance::AgentArrays;
use draw_list::RenderBuffers;
use perf_timer::PerfTimer;

/// The animation engine
pub struct VortexCore {
    config: VortexConfig,
    line: GlyphLine,
    viewport: Viewport,
    grid: CellGrid,
    agents: AgentArrays,
    occupancy: OccupancyMask,
    render: RenderBuffers,

    // State
    frame: u64,
    elapsed_ms: f64,
    morph: f32,
    speed: f32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl VortexCore {
    /// Create an engine. It has no agents until the first `resize`.
    pub fn new(config: VortexConfig) -> Self {
        init::create_vortex_core(config)
    }

    pub fn from_config_json(json: &str) -> Result<Self, String> {
        let config = VortexConfig::from_json(json)?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &VortexConfig { &self.config }

    pub fn viewport(&self) -> &Viewport { &self.viewport }

    pub fn grid(&self) -> &CellGrid { &self.grid }

    pub fn glyph_line(&self) -> &GlyphLine { &self.line }

    /// Home grid columns.
    pub fn cols(&self) -> u32 { self.grid.cols() }

    /// Home grid rows (`rowsVisible`).
    pub fn rows(&self) -> u32 { self.grid.rows() }

    /// Number of agents (`min(cols * rows, capacity)`).
    pub fn agent_count(&self) -> usize { self.agents.len() }

    pub fn max_theta(&self) -> f32 { self.viewport.max_theta }

    pub fn frame(&self) -> u64 { self.frame }

    /// Eased morph factor of the last tick.
    pub fn morph(&self) -> f32 { self.morph }

    /// Angular speed (rad/s) of the last tick.
    pub fn speed(&self) -> f32 { self.speed }

    /// Current angle of every agent, by index.
    pub fn angles(&self) -> &[f64] { self.agents.angles() }

    /// Home `(col, row)` of agent `i`.
    pub fn home_of(&self, i: usize) -> Option<(u32, u32)> { self.agents.home_of(i) }

    /// Recompute the grid for a new viewport using the default monospace metrics.
    pub fn resize(&mut self, width: f32, height: f32) {
        layout::resize(self, width, height, &MonospaceMetrics::default());
    }

    /// Recompute the grid, widening cells if the host's glyphs would not fit.
    pub fn resize_with_metrics(&mut self, width: f32, height: f32, metrics: &dyn GlyphMetrics) {
        layout::resize(self, width, height, metrics);
    }

    /// Advance one frame and return the draws in agent-index order.
    pub fn tick(&mut self, elapsed_ms: f64, dt_seconds: f32) -> &[DrawInstruction] {
        step::tick(self, elapsed_ms, dt_seconds);
        self.render.draws()
    }

    /// Draws produced by the last tick.
    pub fn draws(&self) -> &[DrawInstruction] { self.render.draws() }

    pub fn draw_count(&self) -> usize { self.render.len() }

    /// Pointer to interleaved `[x0, y0, x1, y1, ...]` of the last tick (for JS).
    pub fn draw_xy_ptr(&self) -> *const f32 { self.render.xy_ptr() }

    /// Pointer to glyph code points of the last tick (for JS).
    pub fn draw_glyph_ptr(&self) -> *const u32 { self.render.glyph_ptr() }

    pub fn draw_list_json(&self) -> String { self.render.to_json() }

    /// Elapsed time passed to the last tick.
    pub fn elapsed_ms(&self) -> f64 { self.elapsed_ms }

    /// Morph phase as of the last tick.
    pub fn phase(&self) -> MorphPhase {
        phase_at(self.elapsed_ms, self.config.boot_delay_ms)
    }

    // === SETTINGS ===

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn set_words(&mut self, words: Vec<String>) {
        settings::set_words(self, words);
    }

    pub fn set_base_speed(&mut self, speed: f32) {
        settings::set_base_speed(self, speed);
    }

    pub fn set_boot_delay_ms(&mut self, ms: f64) {
        settings::set_boot_delay_ms(self, ms);
    }

    /// Move the spiral origin; relayouts at the current viewport size.
    pub fn set_center(&mut self, x: f32, y: f32) {
        settings::set_center(self, x, y);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
