use super::*;

impl SpatialGrid {
    // === Cell lookup ===

    /// Row-major cell index of `p`, clamped per axis so positions outside
    /// the arena land in the nearest edge cell.
    #[inline]
    pub fn cell_index(&self, p: Vec2) -> usize {
        let cx = ((p.x - self.min_bound.x) / self.cell_size) as i64;
        let cy = ((p.y - self.min_bound.y) / self.cell_size) as i64;
        let cx = cx.clamp(0, self.grid_width as i64 - 1) as usize;
        let cy = cy.clamp(0, self.grid_height as i64 - 1) as usize;
        cy * self.grid_width + cx
    }

    #[inline]
    pub fn cell_coords(&self, idx: usize) -> (usize, usize) {
        (idx % self.grid_width, idx / self.grid_width)
    }

    #[inline]
    pub(super) fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && x < self.grid_width as i64 && y >= 0 && y < self.grid_height as i64
    }

    // === Narrow filter ===

    /// Squared-distance test with an x-axis early out.
    #[inline(always)]
    pub(super) fn close_enough(a: Vec2, b: Vec2, max_dist_sq: f32) -> bool {
        let dx = a.x - b.x;
        let dx2 = dx * dx;
        if dx2 > max_dist_sq {
            return false;
        }
        let dy = a.y - b.y;
        dx2 + dy * dy <= max_dist_sq
    }
}
