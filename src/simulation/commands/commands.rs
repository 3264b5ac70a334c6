use rand::Rng;

use crate::core::Vec2;
use crate::domain::settings::ensure_grid_fits;
use crate::domain::{SpawnMode, SpawnSettings};
use crate::systems::particles::ParticleStream;
use crate::systems::physics::Interaction;

use super::init::rebuild_grid;
use super::SimulationCore;

/// Distance kept between bulk-spawned particles and the walls, in radii.
const BULK_INSET_RADII: f32 = 1.5;
/// Horizontal offset of every stream from the left wall in `reset_with`.
const STREAM_OFFSET_X: f32 = 10.0;
/// Vertical spacing between stacked streams, in radii.
const STREAM_SPACING_RADII: f32 = 5.0;

/// Collision response divides by mass, so it must be finite and positive.
fn usable_mass(mass: f32) -> bool {
    if mass.is_finite() && mass > 0.0 {
        return true;
    }
    crate::console_log!("ignoring particles with non-positive mass {}", mass);
    false
}

pub(super) fn add_particle(sim: &mut SimulationCore, position: Vec2, velocity: Vec2, acceleration: Vec2, mass: f32) {
    if !usable_mass(mass) {
        return;
    }
    sim.store.add(position, velocity, acceleration, mass);
}

pub(super) fn add_bulk_particles(sim: &mut SimulationCore, count: u32, velocity: Vec2, acceleration: Vec2, mass: f32) {
    if !usable_mass(mass) {
        return;
    }
    let inset = sim.particle_radius * BULK_INSET_RADII;
    let min = sim.bounds.bottom_left + Vec2::new(inset, inset);
    let max = sim.bounds.top_right - Vec2::new(inset, inset);

    sim.store.reserve(count as usize);
    for _ in 0..count {
        let position = Vec2::new(sample(&mut sim.rng, min.x, max.x), sample(&mut sim.rng, min.y, max.y));
        sim.store.add(position, velocity, acceleration, mass);
    }
    sim.grid.invalidate();

    crate::console_log!("added {} bulk particles ({} total)", count, sim.store.len());
}

/// Uniform sample in `[lo, hi)`; collapses to the midpoint when the arena is
/// narrower than the inset.
fn sample<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.random_range(lo..hi)
    } else {
        (lo + hi) * 0.5
    }
}

pub(super) fn add_particle_stream(
    sim: &mut SimulationCore,
    count: u32,
    spawn_rate: f32,
    velocity: Vec2,
    mass: f32,
    offset: Vec2,
) {
    if !(spawn_rate > 0.0) {
        crate::console_log!("ignoring stream with non-positive spawn rate {}", spawn_rate);
        return;
    }
    if !usable_mass(mass) {
        return;
    }

    let r = sim.particle_radius;
    let start = Vec2::new(
        sim.bounds.bottom_left.x + r + offset.x,
        sim.bounds.top_right.y - r - offset.y,
    );
    sim.streams.push(ParticleStream::new(start, velocity, sim.constants.gravity, count, spawn_rate, mass));
}

pub(super) fn clear_particles(sim: &mut SimulationCore) {
    sim.store.clear();
    sim.grid.invalidate();
}

pub(super) fn clear_streams(sim: &mut SimulationCore) {
    sim.streams.clear();
}

pub(super) fn reset(sim: &mut SimulationCore, particle_radius: f32) {
    clear_particles(sim);
    clear_streams(sim);

    let (w, h) = (sim.bounds.width(), sim.bounds.height());
    if particle_radius.is_finite() && particle_radius > 0.0 && ensure_grid_fits(w, h, particle_radius).is_ok() {
        sim.particle_radius = particle_radius;
    } else {
        crate::console_log!("keeping radius {}, {} is unusable", sim.particle_radius, particle_radius);
    }
    sim.interaction = Interaction::default();
    sim.camera = Vec2::ZERO;
    sim.frame = 0;
    rebuild_grid(sim);

    crate::console_debug!("reset with radius {}", sim.particle_radius);
}

pub(super) fn reset_with(sim: &mut SimulationCore, spawn: SpawnSettings) {
    let radius = sim.particle_radius;
    reset(sim, radius);

    match spawn.mode {
        SpawnMode::Bulk => {
            add_bulk_particles(sim, spawn.total, Vec2::ZERO, Vec2::ZERO, spawn.mass);
        }
        SpawnMode::Stream => {
            let streams = spawn.stream_count();
            let per_stream = spawn.total / streams;
            for i in 0..streams {
                let offset = Vec2::new(STREAM_OFFSET_X, STREAM_SPACING_RADII * radius * i as f32);
                add_particle_stream(sim, per_stream, spawn.stream_rate, spawn.stream_velocity, spawn.mass, offset);
            }
        }
    }
    sim.spawn = spawn;
}
