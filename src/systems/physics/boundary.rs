use crate::core::Vec2;
use crate::systems::temperature::{wall_contact, WallContact};

use super::types::SubstepContext;

/// Push particles back inside the arena and reflect the normal velocity
/// component with restitution. The previous position is rewritten once per
/// particle, after all four walls, so the reflected velocity survives the
/// next integration step. Returns the number of particles that touched a wall.
pub fn resolve_boundaries(
    positions: &mut [Vec2],
    prev_positions: &mut [Vec2],
    temperatures: &mut [f32],
    ctx: &SubstepContext<'_>,
) -> u32 {
    let c = ctx.constants;
    let dt = ctx.sub_dt;
    let r = ctx.radius;
    let min = ctx.bounds.bottom_left;
    let max = ctx.bounds.top_right;
    let mut contacts = 0u32;

    for i in 0..positions.len() {
        let mut p = positions[i];
        let mut velocity = (p - prev_positions[i]) / dt;
        let mut hit = false;

        if p.x - r < min.x {
            p.x += min.x - (p.x - r);
            velocity.x = -velocity.x * c.restitution;
            hit = true;
        }
        if p.x + r > max.x {
            p.x -= (p.x + r) - max.x;
            velocity.x = -velocity.x * c.restitution;
            hit = true;
        }
        if p.y - r < min.y {
            p.y += min.y - (p.y - r);
            velocity.y = -velocity.y * c.restitution;
            temperatures[i] = wall_contact(temperatures[i], WallContact::Floor, c);
            hit = true;
        }
        if p.y + r > max.y {
            p.y -= (p.y + r) - max.y;
            velocity.y = -velocity.y * c.restitution;
            temperatures[i] = wall_contact(temperatures[i], WallContact::Ceiling, c);
            hit = true;
        }

        if hit {
            positions[i] = p;
            prev_positions[i] = p - velocity * dt;
            contacts += 1;
        }
    }

    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Bounds, PhysicsConstants};
    use crate::systems::physics::types::Interaction;

    const DT: f32 = 0.01;

    fn run(c: &PhysicsConstants, pos: Vec2, prev: Vec2, temp: f32) -> (Vec2, Vec2, f32, u32) {
        let ctx = SubstepContext::new(c, Interaction::default(), Bounds::centered(100.0, 100.0), 5.0, DT);
        let mut p = [pos];
        let mut pp = [prev];
        let mut t = [temp];
        let n = resolve_boundaries(&mut p, &mut pp, &mut t, &ctx);
        (p[0], pp[0], t[0], n)
    }

    #[test]
    fn floor_bounce_reflects_with_restitution_and_heats() {
        let c = PhysicsConstants::default();
        let (p, prev, t, n) = run(&c, Vec2::new(0.0, -47.0), Vec2::new(0.0, -46.0), 10.0);
        assert_eq!(n, 1);
        assert_eq!(p.y, -45.0);
        let vy = (p.y - prev.y) / DT;
        assert!((vy - 100.0 * c.restitution).abs() < 1e-2);
        assert_eq!(t, 10.0 + c.max_thermal_transfer);
    }

    #[test]
    fn ceiling_contact_cools() {
        let c = PhysicsConstants::default();
        let (p, _, t, _) = run(&c, Vec2::new(0.0, 48.0), Vec2::new(0.0, 47.0), 10.0);
        assert_eq!(p.y, 45.0);
        assert_eq!(t, 10.0 - c.max_thermal_transfer);
    }

    #[test]
    fn corner_hit_rewrites_previous_position_once() {
        let c = PhysicsConstants::default();
        let (p, prev, _, n) = run(&c, Vec2::new(-48.0, -48.0), Vec2::new(-47.0, -47.0), 0.0);
        assert_eq!(n, 1);
        assert_eq!(p, Vec2::new(-45.0, -45.0));
        let v = (p - prev) / DT;
        assert!((v.x - 80.0).abs() < 1e-2);
        assert!((v.y - 80.0).abs() < 1e-2);
    }

    #[test]
    fn interior_particles_are_untouched() {
        let c = PhysicsConstants::default();
        let (p, prev, t, n) = run(&c, Vec2::new(1.0, 2.0), Vec2::new(0.0, 2.0), 3.0);
        assert_eq!(n, 0);
        assert_eq!((p, prev, t), (Vec2::new(1.0, 2.0), Vec2::new(0.0, 2.0), 3.0));
    }
}
