use std::collections::HashSet;

use super::advance::{wrap_angle, MapContext, NO_CELL};
use super::*;
use crate::domain::FixedMetrics;

fn scenario_config() -> VortexConfig {
    VortexConfig {
        cell_width: 12.0,
        cell_height: 36.0,
        rows_visible: 2,
        spiral_spacing: 4.2,
        center_x: 0.5,
        center_y: 0.5,
        ..VortexConfig::default()
    }
}

fn morph_done_ms(core: &VortexCore) -> f64 {
    core.config.boot_delay_ms + crate::domain::MORPH_DURATION_MS
}

#[test]
fn new_core_has_no_agents_until_resize() {
    let mut core = VortexCore::new(scenario_config());
    assert_eq!(core.agent_count(), 0);
    assert!(core.tick(0.0, 0.016).is_empty());
    assert_eq!(core.frame(), 1);
}

#[test]
fn resize_swaps_every_buffer_to_the_new_size() {
    let mut core = VortexCore::new(scenario_config());
    core.resize(200.0, 100.0);
    assert_eq!(core.agents.len(), 32);
    assert_eq!(core.agents.cells().len(), 32);
    assert_eq!(core.occupancy.len(), core.grid.view_size());

    core.resize(400.0, 100.0);
    assert_eq!(core.agents.len(), 66);
    assert_eq!(core.agents.cells().len(), 66);
    assert_eq!(core.occupancy.len(), 34 * 3);
}

#[test]
fn flat_frame_draws_every_agent_at_home() {
    let mut core = VortexCore::new(scenario_config());
    core.resize(200.0, 100.0);
    let draws = core.tick(0.0, 0.0).to_vec();

    assert_eq!(core.morph(), 0.0);
    assert_eq!(draws.len(), 32);
    for (i, d) in draws.iter().enumerate() {
        let (col, row) = core.home_of(i).unwrap();
        assert_eq!((d.x, d.y), core.grid.home_center(col, row));
    }
}

#[test]
fn occupancy_matches_emitted_draws() {
    let mut core = VortexCore::new(VortexConfig::default());
    core.resize(800.0, 600.0);
    let t = morph_done_ms(&core);
    core.tick(t, 0.016);

    assert_eq!(core.occupancy.count(), core.draw_count());
    let cells: HashSet<usize> = core
        .agents
        .cells()
        .iter()
        .filter(|&&c| c != NO_CELL)
        .map(|&c| c as usize)
        .collect();
    assert_eq!(cells.len(), core.draw_count());
}

#[test]
fn lowest_index_wins_a_contested_cell() {
    let mut core = VortexCore::new(VortexConfig::default());
    core.resize(800.0, 600.0);
    let t = morph_done_ms(&core);
    core.tick(t, 0.0);

    let mut winner_of = std::collections::HashMap::new();
    for (i, &c) in core.agents.cells().iter().enumerate() {
        if c != NO_CELL {
            winner_of.entry(c).or_insert(i);
        }
    }
    let mut winners: Vec<usize> = winner_of.values().copied().collect();
    winners.sort_unstable();

    let rate = core.config.glyph_cycle_rate;
    let expected: Vec<char> = winners.iter().map(|&i| core.line.glyph_at(i, t, rate)).collect();
    let actual: Vec<char> = core.draws().iter().map(|d| d.glyph).collect();
    assert_eq!(actual, expected);
}

#[test]
fn large_grids_map_like_a_sequential_pass() {
    let mut core = VortexCore::new(VortexConfig { rows_visible: 80, ..VortexConfig::default() });
    core.resize(1920.0, 1080.0);
    assert_eq!(core.agent_count(), 12_000);

    let before = core.agents.angles().to_vec();
    let t = morph_done_ms(&core) - 300.0;
    let dt = 0.016f32;
    core.tick(t, dt);

    let morph = core.morph();
    let delta = core.speed() as f64 * dt as f64;
    let spacing = core.config.spiral_spacing;
    let ctx = MapContext::new(&core.grid, &core.viewport, spacing, morph, delta);
    for i in (0..before.len()).step_by(97) {
        let a = wrap_angle(before[i] + delta, core.viewport.max_theta as f64);
        assert_eq!(core.agents.angles()[i], a);

        let (col, row) = core.agents.home_of(i).unwrap();
        let (sx, sy) = ctx.spiral_point(a);
        let (hx, hy) = core.grid.home_center(col, row);
        let x = crate::core::math::mix(hx, sx, morph);
        let y = crate::core::math::mix(hy, sy, morph);
        let expected = core.grid.snap(x, y).map(|(c, r)| core.grid.index(c, r)).unwrap_or(NO_CELL);
        assert_eq!(core.agents.cells()[i], expected);
    }
}

#[test]
fn glyph_width_widens_cells() {
    let mut core = VortexCore::new(scenario_config());
    core.resize_with_metrics(200.0, 100.0, &FixedMetrics(19.3));
    assert_eq!(core.grid.cell_width(), 20.0);
    assert_eq!(core.cols(), 10);
    assert_eq!(core.config.cell_width, 12.0);
}

#[test]
fn set_center_keeps_widened_cells() {
    let mut core = VortexCore::new(scenario_config());
    core.resize_with_metrics(200.0, 100.0, &FixedMetrics(19.3));
    core.set_center(0.25, 0.75);
    assert_eq!(core.grid.cell_width(), 20.0);
    assert_eq!(core.viewport.center_x, 50.0);
    assert_eq!(core.viewport.center_y, 75.0);
}

#[test]
fn relayout_reuses_the_fitted_width() {
    let mut core = VortexCore::new(scenario_config());
    core.resize_with_metrics(200.0, 100.0, &FixedMetrics(19.3));
    core.config.cell_width = 30.0;
    core.set_center(0.5, 0.5);
    assert_eq!(core.grid.cell_width(), 20.0);
}

#[test]
fn tight_spiral_keeps_every_agent_moving() {
    let config = VortexConfig { spiral_spacing: 0.01, ..VortexConfig::default() };
    let mut core = VortexCore::new(config);
    core.resize(1920.0, 1080.0);
    assert!(core.viewport.max_theta > 100_000.0);

    let before = core.agents.angles().to_vec();
    core.tick(0.0, 0.016);
    let max_theta = core.viewport.max_theta as f64;
    let delta = core.speed() as f64 * 0.016f32 as f64;
    let stuck = before
        .iter()
        .zip(core.agents.angles())
        .filter(|&(&a, &b)| a + delta < max_theta && b <= a)
        .count();
    assert_eq!(stuck, 0);
}

#[test]
fn huge_viewport_work_is_bounded_by_capacity() {
    let config = VortexConfig {
        capacity: 100,
        cell_width: 1.0,
        cell_height: 1.0,
        font_size: 1.0,
        ..VortexConfig::default()
    };
    let mut core = VortexCore::new(config);
    core.resize(1.0e7, 1.0e7);
    assert_eq!(core.agent_count(), 100);
    assert!(!core.occupancy.is_dense());
    assert_eq!(core.occupancy.len(), core.grid.view_size());

    core.tick(0.0, 0.016);
    assert!(core.draw_count() <= 100);
    assert_eq!(core.occupancy.count(), core.draw_count());
}

#[test]
fn perf_stats_account_for_every_agent() {
    let mut core = VortexCore::new(VortexConfig::default());
    core.enable_perf_metrics(true);
    core.resize(640.0, 480.0);
    core.tick(0.0, 0.016);

    let stats = core.get_perf_stats();
    assert_eq!(stats.agents(), core.agent_count() as u32);
    assert_eq!(
        stats.draws_emitted() + stats.suppressed_out_of_view() + stats.suppressed_occupied(),
        stats.agents()
    );
    // 40 rows x 36px do not fit in 480px, so some home rows are off-view.
    assert!(stats.suppressed_out_of_view() > 0);
    assert!(stats.tick_ms() >= 0.0);

    core.enable_perf_metrics(false);
    assert_eq!(core.get_perf_stats().agents(), 0);
}

#[test]
fn nan_inputs_do_not_poison_state() {
    let mut core = VortexCore::new(scenario_config());
    core.resize(200.0, 100.0);
    let before = core.agents.angles().to_vec();
    core.tick(f64::NAN, f32::NAN);
    assert_eq!(core.agents.angles(), &before[..]);
    core.tick(0.0, -1.0);
    assert_eq!(core.agents.angles(), &before[..]);
    assert_eq!(core.draw_count(), 32);
}
