use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::core::ConfigResult;
use crate::domain::{PhysicsConstants, SimulationSettings, SpawnSettings};
use crate::spatial::SpatialGrid;
use crate::systems::particles::ParticleStore;
use crate::systems::physics::{Interaction, SolveStats};

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn create_simulation_core(settings: SimulationSettings) -> ConfigResult<SimulationCore> {
    settings.validate()?;
    Ok(build_core(settings))
}

/// Defaults always validate.
pub(super) fn default_simulation_core() -> SimulationCore {
    build_core(SimulationSettings::default())
}

fn build_core(settings: SimulationSettings) -> SimulationCore {
    let bounds = settings.bounds();
    let capacity = settings.capacity as usize;
    let substeps = settings.substeps;
    let workers = settings.workers;

    crate::console_debug!(
        "simulation: {}x{} arena, radius {}, {} sub-steps, {} workers",
        bounds.width(),
        bounds.height(),
        settings.particle_radius,
        substeps,
        workers
    );

    SimulationCore {
        store: ParticleStore::with_capacity(capacity),
        grid: SpatialGrid::new(capacity, settings.particle_radius, bounds.bottom_left, bounds.top_right),
        streams: Vec::new(),

        constants: PhysicsConstants::default(),
        bounds,
        particle_radius: settings.particle_radius,
        substeps,
        workers,
        capacity,
        spawn: SpawnSettings::default(),

        interaction: Interaction::default(),
        paused: false,
        camera: crate::core::Vec2::ZERO,
        zoom: settings.zoom,

        frame: 0,
        rng: SmallRng::seed_from_u64(settings.seed),
        last_stats: SolveStats::default(),

        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

/// Fresh empty grid for the current arena and radius.
pub(super) fn rebuild_grid(sim: &mut SimulationCore) {
    sim.grid = SpatialGrid::new(
        sim.capacity,
        sim.particle_radius,
        sim.bounds.bottom_left,
        sim.bounds.top_right,
    );
}
