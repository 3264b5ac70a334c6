//! ParticleStore - structure-of-arrays particle state
//!
//! Every column holds one entry per particle and all columns always have the
//! same length. Indices are stable for the lifetime of a particle: there is
//! no per-index removal, only `clear`.
//!
//! Velocity is implicit (Verlet): `(position - prev_position) / dt`.

use crate::core::Vec2;

mod chunk;
mod stream;

pub use chunk::{partition_ranges, ParticleChunk};
pub use stream::ParticleStream;

#[derive(Default)]
pub struct ParticleStore {
    pub positions: Vec<Vec2>,
    pub prev_positions: Vec<Vec2>,
    /// Per-sub-step accumulator, zeroed after integration.
    pub accelerations: Vec<Vec2>,
    pub masses: Vec<f32>,
    pub temperatures: Vec<f32>,
    // Reserved columns, always 0 for now.
    pub densities: Vec<f32>,
    pub pressures: Vec<f32>,
}

impl ParticleStore {
    pub fn with_capacity(capacity: usize) -> Self {
        let mut store = Self::default();
        store.reserve(capacity);
        store
    }

    /// Append one particle. `velocity` is a per-step displacement: the
    /// previous position is set to `position - velocity`, so the first
    /// integration step carries it forward. Temperature starts at 0.
    pub fn add(&mut self, position: Vec2, velocity: Vec2, acceleration: Vec2, mass: f32) {
        self.positions.push(position);
        self.prev_positions.push(position - velocity);
        self.accelerations.push(acceleration);
        self.masses.push(mass);
        self.temperatures.push(0.0);
        self.densities.push(0.0);
        self.pressures.push(0.0);
    }

    pub fn clear(&mut self) {
        self.positions.clear();
        self.prev_positions.clear();
        self.accelerations.clear();
        self.masses.clear();
        self.temperatures.clear();
        self.densities.clear();
        self.pressures.clear();
    }

    pub fn reserve(&mut self, additional: usize) {
        self.positions.reserve(additional);
        self.prev_positions.reserve(additional);
        self.accelerations.reserve(additional);
        self.masses.reserve(additional);
        self.temperatures.reserve(additional);
        self.densities.reserve(additional);
        self.pressures.reserve(additional);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn velocity(&self, i: usize, dt: f32) -> Vec2 {
        (self.positions[i] - self.prev_positions[i]) / dt
    }

    /// Overwrite every particle's mass.
    pub fn set_uniform_mass(&mut self, mass: f32) {
        self.masses.fill(mass);
    }

    /// Split the mutable columns into disjoint views, one per range.
    ///
    /// `ranges` must be contiguous, ascending and start at 0 (as produced by
    /// [`partition_ranges`]). Masses are shared read-only.
    pub fn split_ranges(&mut self, ranges: &[std::ops::Range<usize>]) -> Vec<ParticleChunk<'_>> {
        let mut positions = self.positions.as_mut_slice();
        let mut prev_positions = self.prev_positions.as_mut_slice();
        let mut accelerations = self.accelerations.as_mut_slice();
        let mut temperatures = self.temperatures.as_mut_slice();
        let masses = self.masses.as_slice();

        let mut chunks = Vec::with_capacity(ranges.len());
        let mut consumed = 0usize;
        for range in ranges {
            debug_assert_eq!(range.start, consumed, "split_ranges: ranges must be contiguous");
            let len = range.end - range.start;

            let (p, rest) = std::mem::take(&mut positions).split_at_mut(len);
            positions = rest;
            let (pp, rest) = std::mem::take(&mut prev_positions).split_at_mut(len);
            prev_positions = rest;
            let (a, rest) = std::mem::take(&mut accelerations).split_at_mut(len);
            accelerations = rest;
            let (t, rest) = std::mem::take(&mut temperatures).split_at_mut(len);
            temperatures = rest;

            chunks.push(ParticleChunk {
                offset: range.start,
                positions: p,
                prev_positions: pp,
                accelerations: a,
                temperatures: t,
                masses: &masses[range.clone()],
            });
            consumed = range.end;
        }
        chunks
    }
}
