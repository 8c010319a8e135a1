use crate::domain::{GlyphMetrics, Viewport, REFERENCE_GLYPH};
use crate::spatial::{CellGrid, OccupancyMask};

use super::advance::AgentArrays;
use super::{RenderBuffers, VortexCore};

/// Rebuild viewport, grid, agents and per-frame buffers for a new size.
///
/// Everything is built first and swapped in at the end, so the previous
/// arrays are discarded whole and never observed half-resized.
pub(super) fn resize(core: &mut VortexCore, width: f32, height: f32, metrics: &dyn GlyphMetrics) {
    let cell_w = fitted_cell_width(core.config.cell_width, core.config.font_size, metrics);
    rebuild(core, width, height, cell_w);
}

/// Relayout at the current size, keeping any cell widening already applied.
pub(super) fn relayout(core: &mut VortexCore) {
    let (w, h) = (core.viewport.width, core.viewport.height);
    let cell_w = core.grid.cell_width();
    rebuild(core, w, h, cell_w);
}

fn rebuild(core: &mut VortexCore, width: f32, height: f32, cell_w: f32) {
    let config = &core.config;

    let viewport = Viewport::new(
        width,
        height,
        config.center_x,
        config.center_y,
        config.radius_margin,
        config.spiral_spacing,
    );
    let grid = CellGrid::new(&viewport, cell_w, config.cell_height, config.rows_visible);

    let n = grid.home_slots().min(config.capacity as u64) as usize;
    let agents = AgentArrays::build(n, grid.cols(), viewport.max_theta as f64, config.seed);
    let occupancy = OccupancyMask::new(grid.view_size(), n);
    let render = RenderBuffers::with_capacity(n);

    console_log!(
        "vortex: resize {}x{} -> {}x{} home grid, {} agents, view {}x{}, cell {}x{}",
        viewport.width,
        viewport.height,
        grid.cols(),
        grid.rows(),
        n,
        grid.view_cols(),
        grid.view_rows(),
        grid.cell_width(),
        grid.cell_height()
    );

    core.viewport = viewport;
    core.grid = grid;
    core.agents = agents;
    core.occupancy = occupancy;
    core.render = render;
}

/// Widen the configured cell to fit the measured reference glyph.
fn fitted_cell_width(configured: f32, font_px: f32, metrics: &dyn GlyphMetrics) -> f32 {
    let measured = metrics.glyph_width(font_px, REFERENCE_GLYPH);
    if measured.is_finite() && measured > configured {
        let widened = measured.ceil();
        console_warn!(
            "vortex: cellWidth {} too narrow for {}px glyphs ({}), widened to {}",
            configured,
            font_px,
            measured,
            widened
        );
        widened
    } else {
        configured
    }
}
