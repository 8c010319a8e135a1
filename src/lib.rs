//! Vortex Engine - grid-snapped spiral text animation in WASM
//!
//! Text starts as flat rows, then morphs into a spiral that flows endlessly
//! inward-to-outward. Every glyph is snapped to a cell lattice and each cell
//! holds at most one glyph per frame, so the text stays legible.
//!
//! The engine never touches a rendering surface: the host calls `resize` and
//! `tick` and paints the returned `(x, y, glyph)` draws however it likes
//! (canvas `fillText`, positioned DOM nodes, a terminal raster...).
//!
//! Architecture:
//! - core/        - Utility macros, logging, easing math
//! - domain/      - Config, glyph line, viewport
//! - spatial/     - Cell lattice and per-frame occupancy
//! - simulation/  - Engine orchestration and the JS facade

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("🌀 Vortex WASM Engine initialized!");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{FixedMetrics, GlyphLine, GlyphMetrics, MonospaceMetrics, Viewport, VortexConfig};
pub use simulation::{
    backing_size, DrawInstruction, FrameClock, MorphPhase, PerfStats, Vortex, VortexCore,
};
pub use spatial::{CellGrid, OccupancyMask};
