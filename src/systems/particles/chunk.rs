use std::ops::Range;

use crate::core::Vec2;

/// Disjoint mutable view over a contiguous run of particles.
pub struct ParticleChunk<'a> {
    /// Global index of the first particle in this view.
    pub offset: usize,
    pub positions: &'a mut [Vec2],
    pub prev_positions: &'a mut [Vec2],
    pub accelerations: &'a mut [Vec2],
    pub temperatures: &'a mut [f32],
    pub masses: &'a [f32],
}

impl ParticleChunk<'_> {
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Split `0..count` into `workers` contiguous ranges of equal size; the last
/// range absorbs the remainder. Empty ranges are dropped.
pub fn partition_ranges(count: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    let per_worker = count / workers;

    (0..workers)
        .map(|w| {
            let start = w * per_worker;
            let end = if w == workers - 1 { count } else { start + per_worker };
            start..end
        })
        .filter(|r| !r.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_covers(ranges: &[Range<usize>], count: usize) {
        let mut next = 0;
        for r in ranges {
            assert_eq!(r.start, next);
            assert!(r.end > r.start);
            next = r.end;
        }
        assert_eq!(next, count);
    }

    #[test]
    fn last_worker_takes_the_remainder() {
        let ranges = partition_ranges(10, 3);
        assert_eq!(ranges, vec![0..3, 3..6, 6..10]);
    }

    #[test]
    fn ranges_cover_exactly() {
        for count in [0usize, 1, 2, 7, 100, 17_001] {
            for workers in 1..=9 {
                assert_covers(&partition_ranges(count, workers), count);
            }
        }
    }

    #[test]
    fn fewer_particles_than_workers() {
        assert_eq!(partition_ranges(2, 4), vec![0..2]);
        assert!(partition_ranges(0, 4).is_empty());
        assert_eq!(partition_ranges(5, 0), vec![0..5]);
    }
}
