use super::*;

impl CellGrid {
    /// Lattice index of a view cell (row-major).
    #[inline]
    pub fn index(&self, col: u32, row: u32) -> u64 {
        row as u64 * self.view_cols as u64 + col as u64
    }

    #[inline]
    pub fn coords(&self, idx: u64) -> (u32, u32) {
        let col = (idx % self.view_cols as u64) as u32;
        let row = (idx / self.view_cols as u64) as u32;
        (col, row)
    }

    #[inline]
    pub fn in_view(&self, col: i64, row: i64) -> bool {
        col >= 0 && col < self.view_cols as i64 && row >= 0 && row < self.view_rows as i64
    }

    /// Nearest lattice cell to a pixel position, or `None` when it falls
    /// outside the view (or the position is not finite).
    ///
    /// Cells are centered at `((c + 0.5) * w, (r + 0.5) * h)`, so the nearest
    /// center is `floor(x / w)`; draws are always emitted at those centers.
    #[inline]
    pub fn snap(&self, x: f32, y: f32) -> Option<(u32, u32)> {
        let cf = (x / self.cell_w).floor();
        let rf = (y / self.cell_h).floor();
        if !cf.is_finite() || !rf.is_finite() {
            return None;
        }
        let (col, row) = (cf as i64, rf as i64);
        if self.in_view(col, row) {
            Some((col as u32, row as u32))
        } else {
            None
        }
    }
}
