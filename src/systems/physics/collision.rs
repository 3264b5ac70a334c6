use crate::core::Vec2;
use crate::systems::temperature::exchange;

use super::types::SubstepContext;

/// Separate overlapping pairs and exchange heat between them.
///
/// The overlap is split in inverse proportion to mass, so the heavier
/// particle moves less. Corrections where both sides would move less than
/// `min_displacement` are skipped together with the heat exchange. Pairs are
/// processed in the given order; earlier corrections are visible to later
/// pairs. Returns the number of pairs actually corrected.
pub fn resolve_collisions(
    positions: &mut [Vec2],
    temperatures: &mut [f32],
    masses: &[f32],
    pairs: &[(u32, u32)],
    ctx: &SubstepContext<'_>,
) -> u32 {
    let c = ctx.constants;
    let diameter = ctx.radius * 2.0;
    let diameter_sq = diameter * diameter;
    let mut resolved = 0u32;

    for &(a, b) in pairs {
        let (i, j) = (a as usize, b as usize);
        let delta = positions[i] - positions[j];
        let dist_sq = delta.length_squared();
        if !(dist_sq > 0.0 && dist_sq < diameter_sq) {
            continue;
        }

        let dist = dist_sq.sqrt();
        let normal = delta / dist;
        let overlap = diameter - dist;

        let total_mass = masses[i] + masses[j];
        let ds_i = normal * (overlap * masses[j] / total_mass);
        let ds_j = normal * (overlap * masses[i] / total_mass);
        if ds_i.length() < c.min_displacement && ds_j.length() < c.min_displacement {
            continue;
        }

        positions[i] += ds_i;
        positions[j] -= ds_j;
        exchange(temperatures, i, j, c.max_thermal_transfer);
        resolved += 1;
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Bounds, PhysicsConstants};
    use crate::systems::physics::types::Interaction;

    fn resolve(positions: &mut [Vec2], temps: &mut [f32], masses: &[f32]) -> u32 {
        let c = PhysicsConstants::default();
        let ctx = SubstepContext::new(&c, Interaction::default(), Bounds::centered(100.0, 100.0), 5.0, 0.01);
        resolve_collisions(positions, temps, masses, &[(0, 1)], &ctx)
    }

    #[test]
    fn equal_masses_split_overlap_evenly() {
        let mut p = [Vec2::new(-4.0, 0.0), Vec2::new(4.0, 0.0)];
        let mut t = [0.0, 0.0];
        assert_eq!(resolve(&mut p, &mut t, &[1.0, 1.0]), 1);
        assert!((p[0].x + 5.0).abs() < 1e-5);
        assert!((p[1].x - 5.0).abs() < 1e-5);
    }

    #[test]
    fn heavier_particle_moves_less() {
        let mut p = [Vec2::new(-4.0, 0.0), Vec2::new(4.0, 0.0)];
        let mut t = [0.0, 0.0];
        resolve(&mut p, &mut t, &[3.0, 1.0]);
        let moved_heavy = (p[0].x + 4.0).abs();
        let moved_light = (p[1].x - 4.0).abs();
        assert!((moved_heavy - 0.5).abs() < 1e-5);
        assert!((moved_light - 1.5).abs() < 1e-5);
    }

    #[test]
    fn coincident_and_separated_pairs_are_skipped() {
        let mut p = [Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0)];
        let mut t = [50.0, 0.0];
        assert_eq!(resolve(&mut p, &mut t, &[1.0, 1.0]), 0);
        assert_eq!(t, [50.0, 0.0]);

        let mut p = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)];
        assert_eq!(resolve(&mut p, &mut t, &[1.0, 1.0]), 0);
    }

    #[test]
    fn tiny_overlaps_are_ignored() {
        let mut p = [Vec2::new(0.0, 0.0), Vec2::new(9.995, 0.0)];
        let mut t = [50.0, 0.0];
        assert_eq!(resolve(&mut p, &mut t, &[1.0, 1.0]), 0);
        assert_eq!(p[1], Vec2::new(9.995, 0.0));
    }

    #[test]
    fn touching_pair_exchanges_heat() {
        let mut p = [Vec2::new(-4.0, 0.0), Vec2::new(4.0, 0.0)];
        let mut t = [50.0, 10.0];
        resolve(&mut p, &mut t, &[1.0, 1.0]);
        assert_eq!(t, [49.0, 11.0]);
    }
}
