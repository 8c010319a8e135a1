use crate::domain::{GlyphLine, Viewport, VortexConfig};
use crate::spatial::{CellGrid, OccupancyMask};

use super::advance::AgentArrays;
use super::perf_stats::PerfStats;
use super::RenderBuffers;
use super::VortexCore;

pub(super) fn create_vortex_core(config: VortexConfig) -> VortexCore {
    let config = config.sanitized();
    let line = GlyphLine::from_config(&config);
    let viewport = Viewport::new(
        1.0,
        1.0,
        config.center_x,
        config.center_y,
        config.radius_margin,
        config.spiral_spacing,
    );
    let grid = CellGrid::new(&viewport, config.cell_width, config.cell_height, config.rows_visible);

    console_log!(
        "vortex: engine created (line of {} glyphs, capacity {})",
        line.len(),
        config.capacity
    );

    VortexCore {
        line,
        viewport,
        grid,
        agents: AgentArrays::empty(),
        occupancy: OccupancyMask::new(0, 0),
        render: RenderBuffers::with_capacity(0),
        frame: 0,
        elapsed_ms: 0.0,
        morph: 0.0,
        speed: 0.0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        config,
    }
}
