use super::*;

/// Forward half of the 8-neighbourhood: right, then the row above.
/// Visiting only these from every cell yields each neighbouring cell pair once.
const FORWARD_NEIGHBORS: [(i64, i64); 4] = [(1, 0), (-1, 1), (0, 1), (1, 1)];

impl SpatialGrid {
    /// Rebuild the candidate pair buffer from the current cell contents.
    ///
    /// Cells are scanned row-major. Within a cell each particle emits its
    /// same-cell pairs and then its forward-neighbour pairs before the next
    /// particle is visited. Pairs are kept when the centres are at most one
    /// diameter apart.
    pub fn generate_collision_pairs(&mut self, positions: &[Vec2]) -> &[(u32, u32)] {
        self.pairs.clear();
        let diameter = self.particle_radius * 2.0;
        let max_dist_sq = diameter * diameter;

        for y in 0..self.grid_height {
            for x in 0..self.grid_width {
                let cell = &self.cells[y * self.grid_width + x];

                for (k, &a) in cell.iter().enumerate() {
                    let pa = positions[a as usize];
                    for &b in &cell[k + 1..] {
                        if Self::close_enough(pa, positions[b as usize], max_dist_sq) {
                            self.pairs.push((a, b));
                        }
                    }

                    for &(ox, oy) in FORWARD_NEIGHBORS.iter() {
                        let nx = x as i64 + ox;
                        let ny = y as i64 + oy;
                        if !self.in_bounds(nx, ny) {
                            continue;
                        }
                        let neighbor = &self.cells[ny as usize * self.grid_width + nx as usize];
                        for &b in neighbor.iter() {
                            if Self::close_enough(pa, positions[b as usize], max_dist_sq) {
                                self.pairs.push((a, b));
                            }
                        }
                    }
                }
            }
        }

        &self.pairs
    }
}
