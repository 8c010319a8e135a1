//! Agent arrays and the per-agent advance + map pass.
//!
//! Each agent's update only touches its own slots, so this pass can run in
//! parallel. Occupancy is resolved afterwards, sequentially, in index order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::math::mix;
use crate::domain::Viewport;
use crate::spatial::CellGrid;

use super::random::next_unit;

/// Marks an agent whose snapped cell is outside the view this frame.
pub(crate) const NO_CELL: u64 = u64::MAX;

/// Below this many agents the parallel pass is not worth the dispatch.
#[cfg(feature = "parallel")]
const PARALLEL_MIN_AGENTS: usize = 4096;

/// Angular step between consecutive agents under seeded placement.
const SEEDED_INDEX_STEP: f64 = 0.005;

/// SoA agent storage - one slot per home cell, indexed by agent id.
///
/// Angles are `f64`: with a tight spiral `max_theta` reaches 1e5 rad, where an
/// `f32` can no longer absorb a single frame's advance.
pub(crate) struct AgentArrays {
    angle: Vec<f64>,
    home_col: Vec<u32>,
    home_row: Vec<u32>,
    /// Lattice cell each agent mapped to this frame (`NO_CELL` if none).
    cell: Vec<u64>,
}

impl AgentArrays {
    pub(crate) fn empty() -> Self {
        Self { angle: Vec::new(), home_col: Vec::new(), home_row: Vec::new(), cell: Vec::new() }
    }

    /// `n` agents on a `cols`-wide home grid, filled row-major, with angles
    /// spread over `[0, max_theta)`.
    pub(crate) fn build(n: usize, cols: u32, max_theta: f64, seed: Option<u32>) -> Self {
        let cols = cols.max(1);
        let mut home_col = Vec::with_capacity(n);
        let mut home_row = Vec::with_capacity(n);
        for i in 0..n {
            home_col.push(i as u32 % cols);
            home_row.push(i as u32 / cols);
        }

        let angle = match seed {
            None => even_angles(n, max_theta),
            Some(seed) => seeded_angles(n, max_theta, seed),
        };

        Self { angle, home_col, home_row, cell: vec![NO_CELL; n] }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.angle.len()
    }

    #[inline]
    pub(crate) fn angles(&self) -> &[f64] {
        &self.angle
    }

    #[inline]
    pub(crate) fn cells(&self) -> &[u64] {
        &self.cell
    }

    pub(crate) fn home_of(&self, i: usize) -> Option<(u32, u32)> {
        Some((*self.home_col.get(i)?, *self.home_row.get(i)?))
    }
}

/// Policy (a): `angle[i] = i * max_theta / n`, strictly increasing by index.
fn even_angles(n: usize, max_theta: f64) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let step = max_theta / n as f64;
    (0..n).map(|i| clamp_below(i as f64 * step, max_theta)).collect()
}

/// Policy (b): one random offset shared by all agents plus a small per-index step.
fn seeded_angles(n: usize, max_theta: f64, seed: u32) -> Vec<f64> {
    let mut state = seed;
    let offset = next_unit(&mut state) * std::f64::consts::TAU;
    (0..n)
        .map(|i| {
            let a = (offset + i as f64 * SEEDED_INDEX_STEP).rem_euclid(max_theta);
            clamp_below(a, max_theta)
        })
        .collect()
}

#[inline(always)]
fn clamp_below(a: f64, max_theta: f64) -> f64 {
    if a >= max_theta {
        0.0
    } else {
        a
    }
}

/// Wrap an advanced angle back into `[0, max_theta)`: the spiral refills from
/// the center instead of resetting.
#[inline(always)]
pub(crate) fn wrap_angle(a: f64, max_theta: f64) -> f64 {
    if a < max_theta {
        return a;
    }
    let w = if a - max_theta < max_theta { a - max_theta } else { a.rem_euclid(max_theta) };
    if w >= max_theta || !(w >= 0.0) {
        0.0
    } else {
        w
    }
}

/// Everything the map pass reads, shared by all agents for one frame.
pub(crate) struct MapContext<'a> {
    pub grid: &'a CellGrid,
    pub center_x: f32,
    pub center_y: f32,
    pub spacing: f32,
    pub max_theta: f64,
    pub morph: f32,
    /// Angle advance for this frame (`speed * dt`).
    pub delta: f64,
}

impl<'a> MapContext<'a> {
    pub(crate) fn new(
        grid: &'a CellGrid,
        viewport: &Viewport,
        spacing: f32,
        morph: f32,
        delta: f64,
    ) -> Self {
        Self {
            grid,
            center_x: viewport.center_x,
            center_y: viewport.center_y,
            spacing,
            max_theta: viewport.max_theta as f64,
            morph,
            delta,
        }
    }

    /// Spiral point for an angle: `r = B * theta`.
    #[inline(always)]
    pub(crate) fn spiral_point(&self, theta: f64) -> (f32, f32) {
        let r = self.spacing as f64 * theta;
        let x = self.center_x as f64 + r * theta.cos();
        let y = self.center_y as f64 + r * theta.sin();
        (x as f32, y as f32)
    }

    /// Advance one agent, then return the lattice cell its blended position snaps to.
    #[inline(always)]
    fn map_agent(&self, angle: &mut f64, col: u32, row: u32) -> u64 {
        let a = wrap_angle(*angle + self.delta, self.max_theta);
        *angle = a;

        let (sx, sy) = self.spiral_point(a);
        let (hx, hy) = self.grid.home_center(col, row);
        let x = mix(hx, sx, self.morph);
        let y = mix(hy, sy, self.morph);

        match self.grid.snap(x, y) {
            Some((c, r)) => self.grid.index(c, r),
            None => NO_CELL,
        }
    }
}

/// Advance every agent and record the cell it maps to.
pub(crate) fn advance_and_map(agents: &mut AgentArrays, ctx: &MapContext) {
    let AgentArrays { angle, home_col, home_row, cell } = agents;
    let (home_col, home_row) = (&*home_col, &*home_row);

    #[cfg(feature = "parallel")]
    {
        if angle.len() >= PARALLEL_MIN_AGENTS {
            angle
                .par_iter_mut()
                .zip(cell.par_iter_mut())
                .enumerate()
                .for_each(|(i, (a, c))| {
                    *c = ctx.map_agent(a, home_col[i], home_row[i]);
                });
            return;
        }
    }

    for i in 0..angle.len() {
        let c = ctx.map_agent(&mut angle[i], *fast!(home_col, [i]), *fast!(home_row, [i]));
        fast!(cell, [i] = c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn homes_fill_row_major() {
        let agents = AgentArrays::build(7, 3, 10.0, None);
        assert_eq!(agents.home_of(0), Some((0, 0)));
        assert_eq!(agents.home_of(2), Some((2, 0)));
        assert_eq!(agents.home_of(3), Some((0, 1)));
        assert_eq!(agents.home_of(6), Some((0, 2)));
        assert_eq!(agents.home_of(7), None);
    }

    #[test]
    fn even_angles_are_distinct_and_in_range() {
        let agents = AgentArrays::build(12_000, 100, 250.0, None);
        let angles = agents.angles();
        for w in angles.windows(2) {
            assert!(w[1] > w[0]);
        }
        assert!(angles.iter().all(|&a| (0.0..250.0).contains(&a)));
    }

    #[test]
    fn seeded_angles_are_deterministic() {
        let a = AgentArrays::build(500, 20, 80.0, Some(7));
        let b = AgentArrays::build(500, 20, 80.0, Some(7));
        let c = AgentArrays::build(500, 20, 80.0, Some(8));
        assert_eq!(a.angles(), b.angles());
        assert_ne!(a.angles(), c.angles());
        assert!(a.angles().iter().all(|&x| (0.0..80.0).contains(&x)));
    }

    #[test]
    fn wrap_subtracts_max_theta() {
        assert_eq!(wrap_angle(5.0, 10.0), 5.0);
        assert_eq!(wrap_angle(12.0, 10.0), 2.0);
        assert_eq!(wrap_angle(10.0, 10.0), 0.0);
        let far = wrap_angle(1234.5, 10.0);
        assert!((0.0..10.0).contains(&far));
    }

    #[test]
    fn tiny_steps_still_advance_on_a_tight_spiral() {
        let max_theta = 120_628.836;
        let agents = AgentArrays::build(6400, 80, max_theta, None);
        for &a in agents.angles() {
            let next = wrap_angle(a + 0.001536, max_theta);
            assert!(next > a || a + 0.001536 >= max_theta);
        }
    }
}
