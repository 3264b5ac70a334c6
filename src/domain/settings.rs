use serde::{Deserialize, Serialize};

use crate::core::error::{ensure_positive, ConfigError, ConfigResult};
use crate::core::Vec2;

use crate::spatial::CELL_SIZE_FACTOR;

use super::bounds::Bounds;

pub const DEFAULT_ARENA_SIZE: f32 = 1000.0;
pub const DEFAULT_SUBSTEPS: u32 = 8;
pub const DEFAULT_PARTICLE_RADIUS: f32 = 3.5;
pub const DEFAULT_CAPACITY: u32 = 17_000;
pub const DEFAULT_WORKERS: u32 = 2;
pub const DEFAULT_SEED: u64 = 0x5EED_1234;
pub const DEFAULT_ZOOM: f32 = 0.6;

pub const DEFAULT_STREAM_RATE: f32 = 18.0;
pub const DEFAULT_STREAM_VELOCITY: Vec2 = Vec2::new(200.0, 0.0);
/// Particles per stream before another stream is added in stream mode.
pub const PARTICLES_PER_STREAM: u32 = 1500;
pub const MAX_STREAMS: u32 = 10;
/// Largest broad-phase grid an arena/radius combination may ask for.
pub const MAX_GRID_CELLS: f32 = (1 << 20) as f32;

/// Reject arena/radius combinations whose grid would not fit in memory.
pub fn ensure_grid_fits(width: f32, height: f32, particle_radius: f32) -> ConfigResult<()> {
    let cell = particle_radius * CELL_SIZE_FACTOR;
    let cells = ((width / cell).floor() + 1.0) * ((height / cell).floor() + 1.0);
    if !(cells <= MAX_GRID_CELLS) {
        return Err(ConfigError::param(format!(
            "particleRadius {} is too small for a {}x{} arena",
            particle_radius, width, height
        )));
    }
    Ok(())
}

/// Arena, stepping and worker layout for one simulation instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationSettings {
    pub width: f32,
    pub height: f32,
    pub substeps: u32,
    pub particle_radius: f32,
    /// Expected particle count; pre-sizes the store and the grid cache.
    pub capacity: u32,
    pub workers: u32,
    pub seed: u64,
    pub zoom: f32,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_ARENA_SIZE,
            height: DEFAULT_ARENA_SIZE,
            substeps: DEFAULT_SUBSTEPS,
            particle_radius: DEFAULT_PARTICLE_RADIUS,
            capacity: DEFAULT_CAPACITY,
            workers: DEFAULT_WORKERS,
            seed: DEFAULT_SEED,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl SimulationSettings {
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let settings: SimulationSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::centered(self.width, self.height)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        ensure_positive("width", self.width)?;
        ensure_positive("height", self.height)?;
        ensure_positive("particleRadius", self.particle_radius)?;
        ensure_grid_fits(self.width, self.height, self.particle_radius)?;
        ensure_positive("zoom", self.zoom)?;
        if self.substeps == 0 {
            return Err(ConfigError::param("substeps must be >= 1"));
        }
        if self.workers == 0 {
            return Err(ConfigError::param("workers must be >= 1"));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpawnMode {
    /// Fill the arena at random in one go.
    Bulk,
    /// Feed particles in from the top-left through timed streams.
    Stream,
}

/// How to repopulate the arena after a reset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpawnSettings {
    pub mode: SpawnMode,
    pub total: u32,
    pub mass: f32,
    pub stream_rate: f32,
    pub stream_velocity: Vec2,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            mode: SpawnMode::Stream,
            total: DEFAULT_CAPACITY,
            mass: 1.0,
            stream_rate: DEFAULT_STREAM_RATE,
            stream_velocity: DEFAULT_STREAM_VELOCITY,
        }
    }
}

impl SpawnSettings {
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let spawn: SpawnSettings = serde_json::from_str(json)?;
        spawn.validate()?;
        Ok(spawn)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        ensure_positive("mass", self.mass)?;
        if self.mode == SpawnMode::Stream {
            ensure_positive("streamRate", self.stream_rate)?;
        }
        Ok(())
    }

    /// Number of streams used for `total` particles in stream mode.
    pub fn stream_count(&self) -> u32 {
        (self.total / PARTICLES_PER_STREAM).clamp(1, MAX_STREAMS)
    }
}
