//! Verlet Engine - substepped particle simulation in WASM
//!
//! Tens of thousands of equal-radius disks in a rectangular arena, advanced
//! with position Verlet over N sub-steps per frame. Collisions are found
//! through a uniform grid and resolved pairwise; temperature moves through
//! drag, wall contact and collisions.
//!
//! Architecture:
//! - core/        - math, errors, logging macros
//! - domain/      - bounds, physics constants, settings
//! - spatial/     - uniform-grid broad phase
//! - systems/     - particle store, physics phases, temperature
//! - simulation/  - SimulationCore + wasm facade

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Verlet engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{ConfigError, ConfigResult, Vec2};
pub use domain::{Bounds, PhysicsConstants, SimulationSettings, SpawnMode, SpawnSettings};
pub use simulation::{AbiLayout, PerfStats, Simulation, SimulationCore};
pub use spatial::SpatialGrid;
pub use systems::particles::{ParticleStore, ParticleStream};
pub use systems::physics::{Interaction, SolveStats};
