use crate::domain::{GlyphLine, VortexConfig};

use super::layout;
use super::perf_stats::PerfStats;
use super::VortexCore;

pub(super) fn enable_perf_metrics(core: &mut VortexCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(core: &VortexCore) -> PerfStats {
    core.perf_stats.clone()
}

pub(super) fn set_words(core: &mut VortexCore, words: Vec<String>) {
    core.config.words = words;
    core.line = GlyphLine::from_config(&core.config);
}

pub(super) fn set_base_speed(core: &mut VortexCore, speed: f32) {
    core.config = VortexConfig { base_speed: speed, ..core.config.clone() }.sanitized();
}

pub(super) fn set_boot_delay_ms(core: &mut VortexCore, ms: f64) {
    core.config = VortexConfig { boot_delay_ms: ms, ..core.config.clone() }.sanitized();
}

pub(super) fn set_center(core: &mut VortexCore, x: f32, y: f32) {
    core.config = VortexConfig { center_x: x, center_y: y, ..core.config.clone() }.sanitized();
    layout::relayout(core);
}
