use crate::core::error::{ensure_positive, ConfigError, ConfigResult};
use crate::core::Vec2;
use crate::domain::settings::ensure_grid_fits;
use crate::domain::{Bounds, PhysicsConstants};

use super::init::rebuild_grid;
use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn set_physics_constants(sim: &mut SimulationCore, constants: PhysicsConstants) -> ConfigResult<()> {
    constants.validate()?;
    sim.constants = constants;
    Ok(())
}

pub(super) fn load_physics_constants_json(sim: &mut SimulationCore, json: &str) -> ConfigResult<()> {
    let constants = PhysicsConstants::from_json(json)?;
    sim.constants = constants;
    crate::console_log!("physics constants loaded");
    Ok(())
}

pub(super) fn set_gravity(sim: &mut SimulationCore, gravity: Vec2) -> ConfigResult<()> {
    if !gravity.x.is_finite() || !gravity.y.is_finite() {
        return Err(ConfigError::param("gravity must be finite"));
    }
    sim.constants.gravity = gravity;
    Ok(())
}

pub(super) fn set_substeps(sim: &mut SimulationCore, substeps: u32) {
    sim.substeps = substeps.max(1);
}

pub(super) fn set_workers(sim: &mut SimulationCore, workers: u32) {
    sim.workers = workers.max(1);
}

pub(super) fn set_arena_size(sim: &mut SimulationCore, width: f32, height: f32) -> ConfigResult<()> {
    ensure_positive("width", width)?;
    ensure_positive("height", height)?;
    ensure_grid_fits(width, height, sim.particle_radius)?;
    sim.bounds = Bounds::centered(width, height);
    sim.capacity = sim.capacity.max(sim.store.len());
    rebuild_grid(sim);
    Ok(())
}

pub(super) fn set_uniform_mass(sim: &mut SimulationCore, mass: f32) -> ConfigResult<()> {
    ensure_positive("mass", mass)?;
    sim.store.set_uniform_mass(mass);
    for stream in sim.streams.iter_mut() {
        stream.mass = mass;
    }
    sim.spawn.mass = mass;
    Ok(())
}

pub(super) fn enable_perf_metrics(sim: &mut SimulationCore, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
    }
}

pub(super) fn perf_stats(sim: &SimulationCore) -> PerfStats {
    sim.perf_stats.clone()
}
