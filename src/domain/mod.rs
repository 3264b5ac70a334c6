//! Domain types: arena bounds, physics constants, settings.

pub mod bounds;
pub mod constants;
pub mod settings;

pub use bounds::Bounds;
pub use constants::PhysicsConstants;
pub use settings::{SimulationSettings, SpawnMode, SpawnSettings};
