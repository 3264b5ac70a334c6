//! Tunable physics constants
//!
//! One owned value per simulation, handed to the solver by reference each
//! frame. The UI may replace it between frames; the next sub-step sees the
//! new values.

use serde::{Deserialize, Serialize};

use crate::core::error::{ensure_positive, ConfigError, ConfigResult};
use crate::core::Vec2;

pub const DEFAULT_GRAVITY: Vec2 = Vec2::new(0.0, -50.0);
pub const DEFAULT_RESTITUTION: f32 = 0.8;
pub const DEFAULT_AIR_RESISTANCE: f32 = 0.005;
pub const DEFAULT_MAX_VELOCITY: f32 = 200.0;
pub const DEFAULT_MIN_DISPLACEMENT: f32 = 0.005;
pub const DEFAULT_DAMPING: f32 = 1.0;
pub const DEFAULT_CENTER_PULL_FORCE: f32 = 500.0;
pub const DEFAULT_POINTER_FORCE: f32 = 1000.0;
pub const DEFAULT_POINTER_MAX_DISTANCE: f32 = 200.0;
pub const DEFAULT_THERMAL_DISPERSION: f32 = 0.05;
pub const DEFAULT_MAX_THERMAL_TRANSFER: f32 = 1.0;
pub const DEFAULT_KINETIC_HEATING: f32 = 0.01;
pub const MIN_TEMPERATURE: f32 = 0.0;
pub const MAX_TEMPERATURE: f32 = 400.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicsConstants {
    pub gravity: Vec2,
    /// Fraction of the normal velocity kept after a wall bounce.
    pub restitution: f32,
    pub air_resistance: f32,
    pub max_velocity: f32,
    /// Pair corrections smaller than this on both sides are skipped.
    pub min_displacement: f32,
    /// Multiplier on the Verlet displacement term (1.0 = undamped).
    pub damping: f32,
    pub center_pull_force: f32,
    pub pointer_force: f32,
    pub pointer_max_distance: f32,
    /// Temperature lost by every particle each sub-step.
    pub thermal_dispersion: f32,
    /// Cap on heat moved by one collision; also the floor/ceiling heat quantum.
    pub max_thermal_transfer: f32,
    pub kinetic_heating: f32,
    pub min_temperature: f32,
    pub max_temperature: f32,
}

impl Default for PhysicsConstants {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            restitution: DEFAULT_RESTITUTION,
            air_resistance: DEFAULT_AIR_RESISTANCE,
            max_velocity: DEFAULT_MAX_VELOCITY,
            min_displacement: DEFAULT_MIN_DISPLACEMENT,
            damping: DEFAULT_DAMPING,
            center_pull_force: DEFAULT_CENTER_PULL_FORCE,
            pointer_force: DEFAULT_POINTER_FORCE,
            pointer_max_distance: DEFAULT_POINTER_MAX_DISTANCE,
            thermal_dispersion: DEFAULT_THERMAL_DISPERSION,
            max_thermal_transfer: DEFAULT_MAX_THERMAL_TRANSFER,
            kinetic_heating: DEFAULT_KINETIC_HEATING,
            min_temperature: MIN_TEMPERATURE,
            max_temperature: MAX_TEMPERATURE,
        }
    }
}

impl PhysicsConstants {
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let constants: PhysicsConstants = serde_json::from_str(json)?;
        constants.validate()?;
        Ok(constants)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    #[inline]
    pub fn max_velocity_sq(&self) -> f32 {
        self.max_velocity * self.max_velocity
    }

    #[inline]
    pub fn pointer_max_distance_sq(&self) -> f32 {
        self.pointer_max_distance * self.pointer_max_distance
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !self.gravity.x.is_finite() || !self.gravity.y.is_finite() {
            return Err(ConfigError::param("gravity must be finite"));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigError::param("restitution must be in [0, 1]"));
        }
        ensure_positive("maxVelocity", self.max_velocity)?;
        ensure_positive("damping", self.damping)?;
        ensure_positive("pointerMaxDistance", self.pointer_max_distance)?;
        for (name, value) in [
            ("airResistance", self.air_resistance),
            ("minDisplacement", self.min_displacement),
            ("centerPullForce", self.center_pull_force),
            ("pointerForce", self.pointer_force),
            ("thermalDispersion", self.thermal_dispersion),
            ("maxThermalTransfer", self.max_thermal_transfer),
            ("kineticHeating", self.kinetic_heating),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::param(format!("{} must be finite and >= 0", name)));
            }
        }
        if !(self.min_temperature < self.max_temperature) {
            return Err(ConfigError::param("minTemperature must be below maxTemperature"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(PhysicsConstants::default().validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() -> ConfigResult<()> {
        let c = PhysicsConstants::from_json(r#"{"restitution": 0.5, "gravity": {"x": 0, "y": -9.8}}"#)?;
        assert_eq!(c.restitution, 0.5);
        assert_eq!(c.gravity, Vec2::new(0.0, -9.8));
        assert_eq!(c.max_velocity, DEFAULT_MAX_VELOCITY);
        Ok(())
    }

    #[test]
    fn json_round_trip_preserves_values() -> ConfigResult<()> {
        let mut c = PhysicsConstants::default();
        c.air_resistance = 0.02;
        let back = PhysicsConstants::from_json(&c.to_json())?;
        assert_eq!(back, c);
        Ok(())
    }

    #[test]
    fn out_of_range_restitution_rejected() {
        let err = PhysicsConstants::from_json(r#"{"restitution": 1.5}"#).unwrap_err();
        assert!(err.to_string().contains("restitution"));
    }

    #[test]
    fn inverted_temperature_range_rejected() {
        let err = PhysicsConstants::from_json(r#"{"minTemperature": 500}"#).unwrap_err();
        assert!(err.to_string().contains("minTemperature"));
    }
}
