use crate::core::Vec2;

/// Deferred spawner: emits `total` particles at a fixed interval from one
/// origin. Inert for good once `spawned == total`.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleStream {
    pub active: bool,
    pub start_pos: Vec2,
    pub initial_velocity: Vec2,
    pub acceleration: Vec2,
    pub total: u32,
    pub spawned: u32,
    pub spawn_interval: f32,
    pub timer: f32,
    pub mass: f32,
}

impl ParticleStream {
    pub fn new(
        start_pos: Vec2,
        initial_velocity: Vec2,
        acceleration: Vec2,
        total: u32,
        spawn_rate: f32,
        mass: f32,
    ) -> Self {
        Self {
            active: true,
            start_pos,
            initial_velocity,
            acceleration,
            total,
            spawned: 0,
            spawn_interval: 1.0 / spawn_rate,
            timer: 0.0,
            mass,
        }
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.spawned >= self.total
    }

    /// Accumulate `dt` and return how many particles are due now.
    /// The caller appends that many particles at `start_pos`.
    pub fn advance(&mut self, dt: f32) -> usize {
        if !self.active || self.is_exhausted() {
            return 0;
        }

        self.timer += dt;
        let mut due = 0;
        while self.timer >= self.spawn_interval && self.spawned < self.total {
            self.spawned += 1;
            self.timer -= self.spawn_interval;
            due += 1;
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(total: u32, rate: f32) -> ParticleStream {
        ParticleStream::new(Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(0.0, -50.0), total, rate, 1.0)
    }

    #[test]
    fn emits_one_per_interval() {
        let mut s = stream(5, 10.0);
        for _ in 0..5 {
            assert_eq!(s.advance(0.1), 1);
        }
        assert!(s.is_exhausted());
        assert_eq!(s.advance(0.1), 0);
    }

    #[test]
    fn large_step_emits_several_and_keeps_remainder() {
        let mut s = stream(100, 4.0);
        assert_eq!(s.advance(1.1), 4);
        assert!((s.timer - 0.1).abs() < 1e-5);
    }

    #[test]
    fn never_exceeds_total() {
        let mut s = stream(3, 100.0);
        assert_eq!(s.advance(10.0), 3);
        assert_eq!(s.spawned, 3);
        assert_eq!(s.advance(10.0), 0);
    }

    #[test]
    fn inactive_stream_does_not_accumulate() {
        let mut s = stream(3, 10.0);
        s.active = false;
        assert_eq!(s.advance(1.0), 0);
        assert_eq!(s.timer, 0.0);
    }
}
