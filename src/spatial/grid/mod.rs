//! SpatialGrid - uniform-grid broad phase
//!
//! The arena is cut into square cells of `2.5 * radius`, so two touching
//! disks (centres at most `2 * radius` apart) always sit in the same cell or
//! in adjacent cells. Each cell keeps the indices of the particles inside it.
//!
//! The grid never owns particle data: it stores indices into the particle
//! store and must be invalidated whenever that store shrinks (clear/reset).
//!
//! Layout:
//!   cells[]           - per-cell particle index lists, row-major
//!   particle_cells[]  - per-particle cached cell, for incremental updates
//!   pairs[]           - candidate pairs from the last generate pass

use crate::core::Vec2;

mod indexing;
mod cells;
mod pairs;

/// Cell edge length in particle radii.
pub const CELL_SIZE_FACTOR: f32 = 2.5;
/// Initial per-cell capacity; a dense cell holds about this many disks.
const CELL_RESERVE: usize = 15;
/// Cache marker for particles not yet placed in any cell.
pub const UNASSIGNED: u32 = u32::MAX;

pub struct SpatialGrid {
    particle_radius: f32,
    cell_size: f32,
    min_bound: Vec2,
    max_bound: Vec2,
    grid_width: usize,
    grid_height: usize,
    /// Particle count the grid was last sized for.
    particle_count: usize,
    initialized: bool,

    cells: Vec<Vec<u32>>,
    particle_cells: Vec<u32>,
    pairs: Vec<(u32, u32)>,
}

impl SpatialGrid {
    pub fn new(particle_count: usize, particle_radius: f32, min_bound: Vec2, max_bound: Vec2) -> Self {
        let cell_size = particle_radius * CELL_SIZE_FACTOR;
        let grid_width = ((max_bound.x - min_bound.x) / cell_size) as usize + 1;
        let grid_height = ((max_bound.y - min_bound.y) / cell_size) as usize + 1;

        let mut cells = Vec::with_capacity(grid_width * grid_height);
        cells.resize_with(grid_width * grid_height, || Vec::with_capacity(CELL_RESERVE));

        Self {
            particle_radius,
            cell_size,
            min_bound,
            max_bound,
            grid_width,
            grid_height,
            particle_count,
            initialized: false,
            cells,
            particle_cells: vec![UNASSIGNED; particle_count],
            pairs: Vec::new(),
        }
    }

    #[inline]
    pub fn particle_radius(&self) -> f32 { self.particle_radius }

    #[inline]
    pub fn cell_size(&self) -> f32 { self.cell_size }

    /// (columns, rows)
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) { (self.grid_width, self.grid_height) }

    #[inline]
    pub fn bounds(&self) -> (Vec2, Vec2) { (self.min_bound, self.max_bound) }

    #[inline]
    pub fn particle_count(&self) -> usize { self.particle_count }

    #[inline]
    pub fn is_initialized(&self) -> bool { self.initialized }

    #[inline]
    pub fn cells(&self) -> &[Vec<u32>] { &self.cells }

    #[inline]
    pub fn particle_cells(&self) -> &[u32] { &self.particle_cells }

    #[inline]
    pub fn collision_pairs(&self) -> &[(u32, u32)] { &self.pairs }

    /// Force a full rebuild on the next `refresh`.
    /// Required whenever the particle store shrinks.
    pub fn invalidate(&mut self) {
        self.initialized = false;
    }

    /// Empty every cell, the pair list and the per-particle cache.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.clear();
        }
        self.pairs.clear();
        self.particle_cells.fill(UNASSIGNED);
    }

    /// True when the particle count moved more than 10% away from the size
    /// the grid was built for.
    pub fn needs_rebuild(&self, particle_count: usize) -> bool {
        let sized_for = self.particle_count as i64;
        (sized_for - particle_count as i64).abs() > sized_for / 10
    }

    /// Bring the grid in line with `positions`: full rebuild when never
    /// initialised or the count changed a lot, incremental update otherwise.
    /// Returns true when a full rebuild happened.
    pub fn refresh(&mut self, positions: &[Vec2]) -> bool {
        if !self.initialized || self.needs_rebuild(positions.len()) {
            self.particle_count = positions.len();
            self.init_cells(positions);
            self.initialized = true;
            crate::console_debug!("spatial grid rebuilt for {} particles", positions.len());
            true
        } else {
            self.update_cells(positions);
            false
        }
    }
}
