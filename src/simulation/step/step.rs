use super::advance::{advance_and_map, MapContext, NO_CELL};
use super::morph::morph_at;
use super::{DrawInstruction, PerfTimer, VortexCore};

/// One animation frame.
///
/// 1. morph + speed from the shared clock
/// 2. advance every agent and map it to a lattice cell (may run in parallel)
/// 3. resolve occupancy in index order: the lowest index claiming a cell wins,
///    later agents on the same cell are skipped for this frame only
pub(super) fn tick(core: &mut VortexCore, elapsed_ms: f64, dt_seconds: f32) {
    let perf_on = core.perf_enabled;
    let mut timer = if perf_on { Some(PerfTimer::start()) } else { None };

    let elapsed_ms = if elapsed_ms.is_finite() { elapsed_ms } else { 0.0 };
    let dt = if dt_seconds.is_finite() { dt_seconds.max(0.0) } else { 0.0 };

    let morph = morph_at(elapsed_ms, core.config.boot_delay_ms);
    let speed = core.config.speed_at(morph);
    core.elapsed_ms = elapsed_ms;
    core.morph = morph;
    core.speed = speed;

    // === MAP PASS ===
    {
        let delta = speed as f64 * dt as f64;
        let spacing = core.config.spiral_spacing;
        let ctx = MapContext::new(&core.grid, &core.viewport, spacing, morph, delta);
        advance_and_map(&mut core.agents, &ctx);
    }
    let map_ms = timer.as_mut().map(PerfTimer::lap).unwrap_or(0.0);

    // === RESOLVE PASS ===
    core.occupancy.clear();
    core.render.clear();

    let rate = core.config.glyph_cycle_rate;
    let mut out_of_view = 0u32;
    let mut occupied = 0u32;

    for (i, &cell) in core.agents.cells().iter().enumerate() {
        if cell == NO_CELL {
            out_of_view += 1;
            continue;
        }
        if !core.occupancy.try_claim(cell) {
            occupied += 1;
            continue;
        }
        let (c, r) = core.grid.coords(cell);
        let (x, y) = core.grid.cell_center(c, r);
        let glyph = core.line.glyph_at(i, elapsed_ms, rate);
        core.render.push(DrawInstruction { x, y, glyph });
    }
    let resolve_ms = timer.as_mut().map(PerfTimer::lap).unwrap_or(0.0);

    core.frame += 1;

    if let Some(t) = timer {
        let stats = &mut core.perf_stats;
        stats.reset();
        stats.tick_ms = t.elapsed_ms();
        stats.map_ms = map_ms;
        stats.resolve_ms = resolve_ms;
        stats.agents = core.agents.len() as u32;
        stats.draws_emitted = core.render.len() as u32;
        stats.suppressed_out_of_view = out_of_view;
        stats.suppressed_occupied = occupied;
        stats.morph = morph;
        stats.speed = speed;
        stats.frame = core.frame;
    }
}
