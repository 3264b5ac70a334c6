//! Simulation - owns particle state and drives the per-frame solver
//!
//! `SimulationCore` is the Rust API; `Simulation` (facade.rs) wraps it for JS.
//!
//! Work is split by concern, each file operating on `&mut SimulationCore`:
//! - init/      - construction and configuration setters
//! - commands/  - population (add, bulk fill, streams, clear, reset)
//! - input/     - pointer, buttons, pause, camera, zoom
//! - step/      - stream spawning and the sub-step loop
//! - perf/      - timers and the per-frame perf snapshot
//!
//! Ownership: the spatial grid only stores indices into the particle store.
//! Whenever the store shrinks (clear/reset) the grid is invalidated and
//! rebuilt on the next sub-step.

use rand::rngs::SmallRng;

use crate::core::{ConfigResult, Vec2};
use crate::domain::{Bounds, PhysicsConstants, SimulationSettings, SpawnSettings};
use crate::spatial::SpatialGrid;
use crate::systems::particles::{ParticleStore, ParticleStream};
use crate::systems::physics::{Interaction, SolveStats};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "input/input.rs"]
mod input;
#[path = "step/streams.rs"]
mod streams;
#[path = "step/step.rs"]
mod step;
mod facade;

pub use facade::{AbiLayout, Simulation};
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

pub(crate) struct AbiLayoutData {
    pub(crate) positions_ptr: *const f32,
    pub(crate) positions_len_elements: usize,
    pub(crate) positions_len_bytes: usize,
    pub(crate) prev_positions_ptr: *const f32,
    pub(crate) prev_positions_len_elements: usize,
    pub(crate) prev_positions_len_bytes: usize,
    pub(crate) temperature_ptr: *const f32,
    pub(crate) temperature_len_elements: usize,
    pub(crate) temperature_len_bytes: usize,
    pub(crate) mass_ptr: *const f32,
    pub(crate) mass_len_elements: usize,
    pub(crate) mass_len_bytes: usize,
}

/// The simulation
pub struct SimulationCore {
    store: ParticleStore,
    grid: SpatialGrid,
    streams: Vec<ParticleStream>,

    // Configuration
    constants: PhysicsConstants,
    bounds: Bounds,
    particle_radius: f32,
    substeps: u32,
    workers: u32,
    /// Particle count the grid is sized for after a reset.
    capacity: usize,
    spawn: SpawnSettings,

    // Interaction / view
    interaction: Interaction,
    paused: bool,
    camera: Vec2,
    zoom: f32,

    // State
    frame: u64,
    rng: SmallRng,
    last_stats: SolveStats,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Create a simulation; fails when `settings` does not validate.
    pub fn new(settings: SimulationSettings) -> ConfigResult<Self> {
        init::create_simulation_core(settings)
    }

    /// 1000x1000 arena centred on the origin, 8 sub-steps, radius 3.5.
    pub fn with_defaults() -> Self {
        init::default_simulation_core()
    }

    // === Population ===

    /// Append one particle; `velocity` is a per-step displacement.
    /// Non-positive or non-finite masses are ignored.
    pub fn add_particle(&mut self, position: Vec2, velocity: Vec2, acceleration: Vec2, mass: f32) {
        commands::add_particle(self, position, velocity, acceleration, mass);
    }

    /// Scatter `count` particles uniformly over the arena, inset 1.5 radii from each wall.
    pub fn add_bulk_particles(&mut self, count: u32, velocity: Vec2, acceleration: Vec2, mass: f32) {
        commands::add_bulk_particles(self, count, velocity, acceleration, mass);
    }

    /// Register a stream anchored at the top-left corner, shifted by `offset`
    /// (x to the right, y downward).
    pub fn add_particle_stream(&mut self, count: u32, spawn_rate: f32, velocity: Vec2, mass: f32, offset: Vec2) {
        commands::add_particle_stream(self, count, spawn_rate, velocity, mass, offset);
    }

    pub fn clear_particles(&mut self) {
        commands::clear_particles(self);
    }

    pub fn clear_streams(&mut self) {
        commands::clear_streams(self);
    }

    /// Drop all particles and streams, reset input and camera, and rebuild
    /// an empty grid for `particle_radius`.
    pub fn reset(&mut self, particle_radius: f32) {
        commands::reset(self, particle_radius);
    }

    /// `reset` then repopulate according to `spawn`.
    pub fn reset_with(&mut self, spawn: SpawnSettings) {
        commands::reset_with(self, spawn);
    }

    // === Stepping ===

    /// Advance one frame: spawn due stream particles, then run all sub-steps.
    /// Does nothing while paused.
    pub fn update(&mut self, frame_dt: f32) {
        step::update(self, frame_dt);
    }

    /// Counters from the last non-paused `update`.
    pub fn last_stats(&self) -> SolveStats { self.last_stats }

    pub fn frame(&self) -> u64 { self.frame }

    // === Configuration ===

    pub fn physics_constants(&self) -> &PhysicsConstants { &self.constants }

    /// Replace the physics constants; rejected values leave the old ones in place.
    pub fn set_physics_constants(&mut self, constants: PhysicsConstants) -> ConfigResult<()> {
        settings::set_physics_constants(self, constants)
    }

    /// Replace the physics constants from JSON. Missing fields take defaults.
    pub fn load_physics_constants_json(&mut self, json: &str) -> ConfigResult<()> {
        settings::load_physics_constants_json(self, json)
    }

    pub fn physics_constants_json(&self) -> String {
        self.constants.to_json()
    }

    pub fn set_gravity(&mut self, gravity: Vec2) -> ConfigResult<()> {
        settings::set_gravity(self, gravity)
    }

    /// Values below 1 are raised to 1.
    pub fn set_substeps(&mut self, substeps: u32) {
        settings::set_substeps(self, substeps);
    }

    /// Worker count for the force phase. Values below 1 are raised to 1.
    pub fn set_workers(&mut self, workers: u32) {
        settings::set_workers(self, workers);
    }

    /// Resize the arena (re-centred on the origin) and rebuild the grid.
    pub fn set_arena_size(&mut self, width: f32, height: f32) -> ConfigResult<()> {
        settings::set_arena_size(self, width, height)
    }

    /// Overwrite the mass of every particle and of every stream's future spawns.
    pub fn set_uniform_mass(&mut self, mass: f32) -> ConfigResult<()> {
        settings::set_uniform_mass(self, mass)
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last frame perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::perf_stats(self)
    }

    // === Interaction / view ===

    /// Positions outside the arena are stored as the "no pointer" sentinel.
    pub fn set_pointer_position(&mut self, position: Vec2) {
        input::set_pointer_position(self, position);
    }

    pub fn pointer_position(&self) -> Vec2 { self.interaction.pointer }

    pub fn set_primary_pressed(&mut self, pressed: bool) {
        input::set_primary_pressed(self, pressed);
    }

    pub fn set_secondary_pressed(&mut self, pressed: bool) {
        input::set_secondary_pressed(self, pressed);
    }

    pub fn set_center_pull(&mut self, active: bool) {
        input::set_center_pull(self, active);
    }

    pub fn interaction(&self) -> Interaction { self.interaction }

    /// Returns the new paused state.
    pub fn toggle_pause(&mut self) -> bool {
        input::toggle_pause(self)
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool { self.paused }

    pub fn move_camera(&mut self, delta: Vec2) {
        input::move_camera(self, delta);
    }

    pub fn set_camera_position(&mut self, position: Vec2) {
        self.camera = position;
    }

    pub fn camera_position(&self) -> Vec2 { self.camera }

    pub fn set_zoom(&mut self, zoom: f32) {
        input::set_zoom(self, zoom);
    }

    pub fn zoom_by(&mut self, factor: f32) {
        input::zoom_by(self, factor);
    }

    pub fn zoom(&self) -> f32 { self.zoom }

    // === Read accessors ===

    pub fn positions(&self) -> &[Vec2] { &self.store.positions }

    pub fn prev_positions(&self) -> &[Vec2] { &self.store.prev_positions }

    pub fn temperatures(&self) -> &[f32] { &self.store.temperatures }

    pub fn masses(&self) -> &[f32] { &self.store.masses }

    pub fn particles(&self) -> &ParticleStore { &self.store }

    pub fn particle_count(&self) -> usize { self.store.len() }

    pub fn particle_radius(&self) -> f32 { self.particle_radius }

    pub fn bounds(&self) -> Bounds { self.bounds }

    pub fn sim_center(&self) -> Vec2 { self.bounds.center() }

    pub fn substeps(&self) -> u32 { self.substeps }

    pub fn workers(&self) -> u32 { self.workers }

    pub fn streams(&self) -> &[ParticleStream] { &self.streams }

    /// Number of registered streams, exhausted ones included.
    pub fn active_stream_count(&self) -> usize { self.streams.len() }

    pub fn spatial_grid(&self) -> &SpatialGrid { &self.grid }

    pub fn spawn_settings(&self) -> &SpawnSettings { &self.spawn }

    // === Render buffers ===

    /// Interleaved x,y pairs, `particle_count()` entries.
    pub fn positions_ptr(&self) -> *const f32 {
        self.store.positions.as_ptr() as *const f32
    }

    pub fn prev_positions_ptr(&self) -> *const f32 {
        self.store.prev_positions.as_ptr() as *const f32
    }

    pub fn temperature_ptr(&self) -> *const f32 {
        self.store.temperatures.as_ptr()
    }

    pub fn mass_ptr(&self) -> *const f32 {
        self.store.masses.as_ptr()
    }

    /// f32 elements in the positions buffer (2 per particle).
    pub fn positions_len_elements(&self) -> usize {
        self.store.len() * 2
    }

    pub fn positions_len_bytes(&self) -> usize {
        self.store.len() * std::mem::size_of::<Vec2>()
    }

    pub fn scalar_len_bytes(&self) -> usize {
        self.store.len() * std::mem::size_of::<f32>()
    }

    pub(crate) fn abi_layout_data(&self) -> AbiLayoutData {
        AbiLayoutData {
            positions_ptr: self.positions_ptr(),
            positions_len_elements: self.positions_len_elements(),
            positions_len_bytes: self.positions_len_bytes(),
            prev_positions_ptr: self.prev_positions_ptr(),
            prev_positions_len_elements: self.positions_len_elements(),
            prev_positions_len_bytes: self.positions_len_bytes(),
            temperature_ptr: self.temperature_ptr(),
            temperature_len_elements: self.store.len(),
            temperature_len_bytes: self.scalar_len_bytes(),
            mass_ptr: self.mass_ptr(),
            mass_len_elements: self.store.len(),
            mass_len_bytes: self.scalar_len_bytes(),
        }
    }
}

impl Default for SimulationCore {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
