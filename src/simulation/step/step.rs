use crate::systems::physics::{
    cap_velocities, integrate_all, resolve_boundaries, resolve_collisions, SolveStats, SubstepContext,
};

use super::perf_timer::accumulate;
use super::streams::update_streams;
use super::{PerfTimer, SimulationCore};

pub(super) fn update(sim: &mut SimulationCore, frame_dt: f32) {
    if sim.paused {
        return;
    }
    if !frame_dt.is_finite() || frame_dt <= 0.0 {
        return;
    }

    let perf_on = sim.perf_enabled;
    if perf_on {
        sim.perf_stats.reset();
    }
    let frame_start = PerfTimer::start_if(perf_on);

    let mut stats = SolveStats::default();

    let t0 = PerfTimer::start_if(perf_on);
    stats.spawned = update_streams(sim, frame_dt);
    accumulate(t0, &mut sim.perf_stats.spawn_ms);

    let sub_dt = frame_dt / sim.substeps as f32;
    for _ in 0..sim.substeps {
        let sub = substep(sim, sub_dt, perf_on);
        stats.accumulate(&sub);
    }

    sim.last_stats = stats;
    sim.frame += 1;

    if perf_on {
        let p = &mut sim.perf_stats;
        p.candidate_pairs = stats.candidate_pairs;
        p.resolved_pairs = stats.resolved_pairs;
        p.grid_rebuilds = stats.grid_rebuilds;
        p.wall_contacts = stats.wall_contacts;
        p.spawned = stats.spawned;
        p.particle_count = sim.store.len() as u32;
        p.substeps = sim.substeps;
        p.workers = sim.workers;
        accumulate(frame_start, &mut p.frame_ms);
    }
}

/// One sub-step: integrate, walls, reindex, pairs, re-cap.
fn substep(sim: &mut SimulationCore, sub_dt: f32, perf_on: bool) -> SolveStats {
    let ctx = SubstepContext::new(&sim.constants, sim.interaction, sim.bounds, sim.particle_radius, sub_dt);
    let mut stats = SolveStats::default();

    let t0 = PerfTimer::start_if(perf_on);
    integrate_all(&mut sim.store, &ctx, sim.workers as usize);
    accumulate(t0, &mut sim.perf_stats.integrate_ms);

    let t0 = PerfTimer::start_if(perf_on);
    let store = &mut sim.store;
    stats.wall_contacts = resolve_boundaries(
        &mut store.positions,
        &mut store.prev_positions,
        &mut store.temperatures,
        &ctx,
    );
    accumulate(t0, &mut sim.perf_stats.boundary_ms);

    let t0 = PerfTimer::start_if(perf_on);
    if sim.grid.refresh(&sim.store.positions) {
        stats.grid_rebuilds += 1;
    }
    stats.candidate_pairs = sim.grid.generate_collision_pairs(&sim.store.positions).len() as u32;
    accumulate(t0, &mut sim.perf_stats.grid_ms);

    let t0 = PerfTimer::start_if(perf_on);
    let store = &mut sim.store;
    stats.resolved_pairs = resolve_collisions(
        &mut store.positions,
        &mut store.temperatures,
        &store.masses,
        sim.grid.collision_pairs(),
        &ctx,
    );
    cap_velocities(&store.positions, &mut store.prev_positions, sub_dt, ctx.constants.max_velocity);
    accumulate(t0, &mut sim.perf_stats.collisions_ms);

    stats
}
