use wasm_bindgen::prelude::*;

use crate::core::math::{clamp01, ease_in_out_cubic};
use crate::domain::MORPH_DURATION_MS;

/// Shared morph clock state. Every agent follows the same global clock.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MorphPhase {
    /// Boot delay still running: flat rows.
    FlatHome = 0,
    /// Easing from rows to spiral.
    Morphing = 1,
    /// Morph complete: full spiral at cruising speed.
    SpiralCruise = 2,
}

/// Linear morph progress, `clamp01((elapsed - boot) / duration)`.
#[inline]
pub fn morph_raw(elapsed_ms: f64, boot_delay_ms: f64) -> f32 {
    clamp01(((elapsed_ms - boot_delay_ms) / MORPH_DURATION_MS) as f32)
}

/// Eased morph factor in `[0, 1]`.
#[inline]
pub fn morph_at(elapsed_ms: f64, boot_delay_ms: f64) -> f32 {
    ease_in_out_cubic(morph_raw(elapsed_ms, boot_delay_ms))
}

pub fn phase_at(elapsed_ms: f64, boot_delay_ms: f64) -> MorphPhase {
    if !(elapsed_ms >= boot_delay_ms) {
        MorphPhase::FlatHome
    } else if morph_raw(elapsed_ms, boot_delay_ms) >= 1.0 {
        MorphPhase::SpiralCruise
    } else {
        MorphPhase::Morphing
    }
}
