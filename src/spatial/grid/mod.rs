//! CellGrid - the two lattices the engine works on
//!
//! Home grid:      `cols x rows` slots, one per agent, filled row-major.
//!                 This is the flat "text rows" layout shown before the morph.
//! Render lattice: `view_cols x view_rows` cells covering the viewport.
//!                 Every draw is snapped to one of these cell centers.
//!
//! Both share the same cell size, so a home slot is also a lattice cell
//! (shifted vertically by `row_offset` whole rows).

use crate::domain::Viewport;

mod indexing;

pub struct CellGrid {
    cell_w: f32,
    cell_h: f32,

    // Home grid
    cols: u32,
    rows: u32,
    /// Lattice row of home row 0 (may be negative when the block is taller than the view).
    row_offset: i32,

    // Render lattice
    view_cols: u32,
    view_rows: u32,
}

impl CellGrid {
    pub fn new(viewport: &Viewport, cell_w: f32, cell_h: f32, rows_visible: u32) -> Self {
        let cell_w = cell_w.max(1.0);
        let cell_h = cell_h.max(1.0);
        let rows = rows_visible.max(1);

        let cols = ((viewport.width / cell_w).floor() as u32).max(1);
        let view_cols = ((viewport.width / cell_w).ceil() as u32).max(1);
        let view_rows = ((viewport.height / cell_h).ceil() as u32).max(1);

        // Top of the flat block, centered on the spiral origin, snapped to whole rows.
        let block_top = viewport.center_y - (rows as f32) * cell_h / 2.0;
        let row_offset = (block_top / cell_h).round() as i32;

        Self { cell_w, cell_h, cols, rows, row_offset, view_cols, view_rows }
    }

    #[inline]
    pub fn cell_width(&self) -> f32 { self.cell_w }

    #[inline]
    pub fn cell_height(&self) -> f32 { self.cell_h }

    #[inline]
    pub fn cols(&self) -> u32 { self.cols }

    #[inline]
    pub fn rows(&self) -> u32 { self.rows }

    #[inline]
    pub fn row_offset(&self) -> i32 { self.row_offset }

    #[inline]
    pub fn view_cols(&self) -> u32 { self.view_cols }

    #[inline]
    pub fn view_rows(&self) -> u32 { self.view_rows }

    /// Number of home slots (`cols * rows`), before any capacity cap.
    #[inline]
    pub fn home_slots(&self) -> u64 {
        self.cols as u64 * self.rows as u64
    }

    /// Number of render lattice cells.
    #[inline]
    pub fn view_size(&self) -> u64 {
        self.view_cols as u64 * self.view_rows as u64
    }

    /// Pixel center of a home slot.
    #[inline]
    pub fn home_center(&self, col: u32, row: u32) -> (f32, f32) {
        let x = (col as f32 + 0.5) * self.cell_w;
        let y = ((row as i32 + self.row_offset) as f32 + 0.5) * self.cell_h;
        (x, y)
    }

    /// Pixel center of a render lattice cell.
    #[inline]
    pub fn cell_center(&self, col: u32, row: u32) -> (f32, f32) {
        ((col as f32 + 0.5) * self.cell_w, (row as f32 + 0.5) * self.cell_h)
    }
}
