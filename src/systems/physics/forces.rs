#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::Vec2;
use crate::systems::particles::{partition_ranges, ParticleChunk, ParticleStore};
use crate::systems::temperature::relax;

use super::types::{SubstepContext, NEAR_DISTANCE_SQ};
use super::velocity::cap_velocity;

/// Falloff used by the pointer force: `force / (1 + dist * POINTER_FALLOFF)`.
const POINTER_FALLOFF: f32 = 0.01;

/// External forces acting on one particle this sub-step, already divided by mass.
#[inline(always)]
fn external_acceleration(position: Vec2, inv_mass: f32, ctx: &SubstepContext<'_>) -> Vec2 {
    let c = ctx.constants;
    let mut acc = c.gravity;

    if ctx.interaction.center_pull {
        let to_center = ctx.center - position;
        if to_center.length_squared() > NEAR_DISTANCE_SQ {
            acc += to_center.normalized() * (c.center_pull_force * inv_mass);
        }
    }

    if let Some(sign) = ctx.interaction.pointer_sign() {
        let to_pointer = ctx.interaction.pointer - position;
        let dist_sq = to_pointer.length_squared();
        if dist_sq > NEAR_DISTANCE_SQ && dist_sq < c.pointer_max_distance_sq() {
            let magnitude = c.pointer_force / (1.0 + dist_sq.sqrt() * POINTER_FALLOFF) * sign;
            acc += to_pointer.normalized() * (magnitude * inv_mass);
        }
    }

    acc
}

/// Forces, velocity cap, drag, Verlet step and thermal relaxation for one
/// contiguous run of particles.
pub fn integrate_chunk(chunk: ParticleChunk<'_>, ctx: &SubstepContext<'_>) {
    let c = ctx.constants;
    let dt = ctx.sub_dt;
    let dt_sq = dt * dt;

    for k in 0..chunk.len() {
        let position = chunk.positions[k];
        let inv_mass = 1.0 / chunk.masses[k];

        let mut acc = chunk.accelerations[k] + external_acceleration(position, inv_mass, ctx);

        // Cap first so drag and heating see the clamped speed.
        let velocity = cap_velocity(position, &mut chunk.prev_positions[k], dt, c.max_velocity);
        acc -= velocity * (c.air_resistance * inv_mass);
        let heated = chunk.temperatures[k] + velocity.length() * c.air_resistance * c.kinetic_heating;

        let displacement = (position - chunk.prev_positions[k]) * c.damping;
        chunk.positions[k] = position + displacement + acc * dt_sq;
        chunk.prev_positions[k] = position;
        chunk.accelerations[k] = Vec2::ZERO;

        chunk.temperatures[k] = relax(heated, c);
    }
}

/// Run `integrate_chunk` over the whole store, split into `workers`
/// contiguous ranges. Particles are independent in this phase, so the
/// result does not depend on the worker count.
pub fn integrate_all(store: &mut ParticleStore, ctx: &SubstepContext<'_>, workers: usize) {
    let ranges = partition_ranges(store.len(), workers);
    let chunks = store.split_ranges(&ranges);

    #[cfg(feature = "parallel")]
    {
        if chunks.len() > 1 {
            chunks.into_par_iter().for_each(|chunk| integrate_chunk(chunk, ctx));
            return;
        }
    }

    for chunk in chunks {
        integrate_chunk(chunk, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Bounds, PhysicsConstants};
    use crate::systems::physics::types::{Interaction, POINTER_SENTINEL};

    fn still_constants() -> PhysicsConstants {
        PhysicsConstants {
            gravity: Vec2::ZERO,
            air_resistance: 0.0,
            thermal_dispersion: 0.0,
            ..PhysicsConstants::default()
        }
    }

    fn ctx<'a>(c: &'a PhysicsConstants, interaction: Interaction) -> SubstepContext<'a> {
        SubstepContext::new(c, interaction, Bounds::centered(1000.0, 1000.0), 3.5, 1.0 / 60.0)
    }

    fn single(position: Vec2, velocity: Vec2) -> ParticleStore {
        let mut store = ParticleStore::default();
        store.add(position, velocity, Vec2::ZERO, 1.0);
        store
    }

    #[test]
    fn free_particle_keeps_its_displacement() {
        let c = still_constants();
        let mut store = single(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.5));
        integrate_all(&mut store, &ctx(&c, Interaction::default()), 1);
        assert_eq!(store.positions[0], Vec2::new(1.0, 0.5));
        assert_eq!(store.prev_positions[0], Vec2::ZERO);
        assert_eq!(store.accelerations[0], Vec2::ZERO);
    }

    #[test]
    fn gravity_accelerates_downward() {
        let c = PhysicsConstants { air_resistance: 0.0, ..PhysicsConstants::default() };
        let mut store = single(Vec2::ZERO, Vec2::ZERO);
        let ctx = ctx(&c, Interaction::default());
        integrate_all(&mut store, &ctx, 1);
        let expected = c.gravity.y * ctx.sub_dt * ctx.sub_dt;
        assert!((store.positions[0].y - expected).abs() < 1e-6);
    }

    #[test]
    fn pointer_attracts_and_repels() {
        let c = still_constants();
        let pointer = Vec2::new(50.0, 0.0);

        let mut store = single(Vec2::ZERO, Vec2::ZERO);
        let attract = Interaction { pointer, primary: true, ..Interaction::default() };
        integrate_all(&mut store, &ctx(&c, attract), 1);
        assert!(store.positions[0].x > 0.0);

        let mut store = single(Vec2::ZERO, Vec2::ZERO);
        let repel = Interaction { pointer, secondary: true, ..Interaction::default() };
        integrate_all(&mut store, &ctx(&c, repel), 1);
        assert!(store.positions[0].x < 0.0);

        let mut store = single(Vec2::ZERO, Vec2::ZERO);
        let outside = Interaction { pointer: POINTER_SENTINEL, primary: true, ..Interaction::default() };
        integrate_all(&mut store, &ctx(&c, outside), 1);
        assert_eq!(store.positions[0], Vec2::ZERO);
    }

    #[test]
    fn pointer_beyond_range_is_ignored() {
        let c = still_constants();
        let far = Interaction { pointer: Vec2::new(400.0, 0.0), primary: true, ..Interaction::default() };
        let mut store = single(Vec2::ZERO, Vec2::ZERO);
        integrate_all(&mut store, &ctx(&c, far), 1);
        assert_eq!(store.positions[0], Vec2::ZERO);
    }

    #[test]
    fn center_pull_skips_particles_at_the_center() {
        let c = still_constants();
        let pull = Interaction { center_pull: true, ..Interaction::default() };

        let mut store = single(Vec2::ZERO, Vec2::ZERO);
        integrate_all(&mut store, &ctx(&c, pull), 1);
        assert_eq!(store.positions[0], Vec2::ZERO);

        let mut store = single(Vec2::new(0.0, 100.0), Vec2::ZERO);
        integrate_all(&mut store, &ctx(&c, pull), 1);
        assert!(store.positions[0].y < 100.0);
    }

    #[test]
    fn drag_heats_moving_particles() {
        let c = PhysicsConstants { gravity: Vec2::ZERO, thermal_dispersion: 0.0, ..PhysicsConstants::default() };
        let mut store = single(Vec2::ZERO, Vec2::new(1.0, 0.0));
        integrate_all(&mut store, &ctx(&c, Interaction::default()), 1);
        assert!(store.temperatures[0] > 0.0);
        assert!(store.positions[0].x < 1.0 + 1e-6);
    }

    #[test]
    fn worker_count_does_not_change_results() {
        let c = PhysicsConstants::default();
        let interaction = Interaction { pointer: Vec2::new(10.0, 10.0), primary: true, center_pull: true, ..Interaction::default() };
        let build = || {
            let mut store = ParticleStore::default();
            for i in 0..97 {
                let f = i as f32;
                store.add(Vec2::new(f * 3.0 - 100.0, (f * 0.7).sin() * 50.0), Vec2::new(0.1 * f, -0.05 * f), Vec2::ZERO, 1.0 + (i % 3) as f32);
            }
            store
        };

        let mut reference = build();
        integrate_all(&mut reference, &ctx(&c, interaction), 1);
        for workers in [2, 3, 8] {
            let mut store = build();
            integrate_all(&mut store, &ctx(&c, interaction), workers);
            assert_eq!(store.positions, reference.positions);
            assert_eq!(store.prev_positions, reference.prev_positions);
            assert_eq!(store.temperatures, reference.temperatures);
        }
    }
}
