use crate::domain::PhysicsConstants;

/// Temperature gaps at or below this are treated as equilibrium.
pub const MIN_EXCHANGE_DELTA: f32 = 0.01;

/// Which horizontal wall a particle touched during boundary resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WallContact {
    /// Heat source.
    Floor,
    /// Heat sink.
    Ceiling,
}

/// Ambient loss for one sub-step, then clamp into range.
#[inline(always)]
pub fn relax(temperature: f32, constants: &PhysicsConstants) -> f32 {
    (temperature - constants.thermal_dispersion)
        .clamp(constants.min_temperature, constants.max_temperature)
}

/// Floor contact adds one heat quantum, ceiling contact removes one.
#[inline(always)]
pub fn wall_contact(temperature: f32, wall: WallContact, constants: &PhysicsConstants) -> f32 {
    let quantum = constants.max_thermal_transfer;
    let t = match wall {
        WallContact::Floor => temperature + quantum,
        WallContact::Ceiling => temperature - quantum,
    };
    t.clamp(constants.min_temperature, constants.max_temperature)
}

/// Move up to `max_transfer` (and never more than half the gap) from the
/// hotter of `i`/`j` to the colder one. Returns the amount moved.
#[inline(always)]
pub fn exchange(temperatures: &mut [f32], i: usize, j: usize, max_transfer: f32) -> f32 {
    let ti = temperatures[i];
    let tj = temperatures[j];
    let delta = (ti - tj).abs();
    if delta <= MIN_EXCHANGE_DELTA {
        return 0.0;
    }

    let moved = max_transfer.min(delta * 0.5);
    if ti > tj {
        temperatures[i] -= moved;
        temperatures[j] += moved;
    } else {
        temperatures[j] -= moved;
        temperatures[i] += moved;
    }
    moved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exchange_flows_hot_to_cold_and_conserves() {
        let mut t = [100.0, 20.0];
        let moved = exchange(&mut t, 0, 1, 1.0);
        assert_eq!(moved, 1.0);
        assert_eq!(t, [99.0, 21.0]);

        let mut t = [20.0, 100.0];
        exchange(&mut t, 0, 1, 1.0);
        assert_eq!(t, [21.0, 99.0]);
    }

    #[test]
    fn exchange_never_overshoots() {
        let mut t = [10.5, 10.0];
        exchange(&mut t, 0, 1, 1.0);
        assert_eq!(t, [10.25, 10.25]);
    }

    #[test]
    fn tiny_gaps_are_ignored() {
        let mut t = [10.005, 10.0];
        assert_eq!(exchange(&mut t, 0, 1, 1.0), 0.0);
        assert_eq!(t, [10.005, 10.0]);
    }

    #[test]
    fn relax_and_walls_stay_in_range() {
        let c = PhysicsConstants::default();
        assert_eq!(relax(0.01, &c), 0.0);
        assert_eq!(relax(100.0, &c), 100.0 - c.thermal_dispersion);
        assert_eq!(wall_contact(399.5, WallContact::Floor, &c), 400.0);
        assert_eq!(wall_contact(0.5, WallContact::Ceiling, &c), 0.0);
        assert_eq!(wall_contact(10.0, WallContact::Floor, &c), 11.0);
    }
}
