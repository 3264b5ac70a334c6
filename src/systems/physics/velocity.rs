use crate::core::Vec2;

/// Implicit velocity of one particle, clamped to `max_velocity`.
///
/// When the cap kicks in the previous position is rewritten so the stored
/// displacement matches the returned velocity.
#[inline(always)]
pub fn cap_velocity(position: Vec2, prev_position: &mut Vec2, dt: f32, max_velocity: f32) -> Vec2 {
    let velocity = (position - *prev_position) / dt;
    let speed_sq = velocity.length_squared();
    if speed_sq > max_velocity * max_velocity {
        let capped = velocity * (max_velocity / speed_sq.sqrt());
        *prev_position = position - capped * dt;
        capped
    } else {
        velocity
    }
}

/// Re-apply the cap to every particle. Returns how many were clamped.
pub fn cap_velocities(positions: &[Vec2], prev_positions: &mut [Vec2], dt: f32, max_velocity: f32) -> u32 {
    let mut clamped = 0u32;
    for (p, prev) in positions.iter().zip(prev_positions.iter_mut()) {
        let before = *prev;
        cap_velocity(*p, prev, dt, max_velocity);
        if *prev != before {
            clamped += 1;
        }
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slow_particles_are_untouched() {
        let mut prev = Vec2::new(0.0, 0.0);
        let v = cap_velocity(Vec2::new(1.0, 0.0), &mut prev, 0.1, 200.0);
        assert_eq!(v, Vec2::new(10.0, 0.0));
        assert_eq!(prev, Vec2::ZERO);
    }

    #[test]
    fn fast_particles_are_rescaled_along_their_direction() {
        let pos = Vec2::new(30.0, 40.0);
        let mut prev = Vec2::ZERO;
        let v = cap_velocity(pos, &mut prev, 0.1, 100.0);
        assert!((v.length() - 100.0).abs() < 1e-3);
        assert!((v.x / v.y - 0.75).abs() < 1e-5);
        assert!(((pos - prev) / 0.1 - v).length() < 1e-3);
    }

    #[test]
    fn bulk_cap_counts_clamped_particles() {
        let positions = [Vec2::new(100.0, 0.0), Vec2::new(0.1, 0.0)];
        let mut prev = [Vec2::ZERO; 2];
        assert_eq!(cap_velocities(&positions, &mut prev, 0.01, 200.0), 1);
        assert!((positions[0] - prev[0]).length() <= 2.0 + 1e-4);
    }
}
