use super::*;

impl SpatialGrid {
    /// Full rebuild: empty every cell and insert all particles.
    pub fn init_cells(&mut self, positions: &[Vec2]) {
        self.clear();
        if self.particle_cells.len() < positions.len() {
            self.particle_cells.resize(positions.len(), UNASSIGNED);
        }

        for (i, &p) in positions.iter().enumerate() {
            let cell = self.cell_index(p);
            self.cells[cell].push(i as u32);
            self.particle_cells[i] = cell as u32;
        }
    }

    /// Incremental update: only particles whose cell changed are moved.
    /// Particles appended since the last pass start out unassigned.
    pub fn update_cells(&mut self, positions: &[Vec2]) {
        if self.particle_cells.len() < positions.len() {
            self.particle_cells.resize(positions.len(), UNASSIGNED);
        }

        for (i, &p) in positions.iter().enumerate() {
            let new_cell = self.cell_index(p) as u32;
            let old_cell = self.particle_cells[i];
            if new_cell == old_cell {
                continue;
            }

            let id = i as u32;
            if old_cell != UNASSIGNED {
                let list = &mut self.cells[old_cell as usize];
                if let Some(pos) = list.iter().position(|&e| e == id) {
                    list.remove(pos);
                }
            }
            self.cells[new_cell as usize].push(id);
            self.particle_cells[i] = new_cell;
        }
    }
}
