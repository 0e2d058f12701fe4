//! SimulationConfig - per-run physics and spawn-layout constants
//!
//! Loaded from JSON by the host (every field optional, missing ones fall
//! back to the defaults below) and validated once before a run starts.
//! The stepper trusts a validated config and never re-checks it.

use serde::{Deserialize, Serialize};

pub const DEFAULT_GRAVITY: f32 = 0.8;
pub const DEFAULT_DAMPING: f32 = 0.98;
pub const DEFAULT_RESTITUTION: f32 = 0.6;
pub const DEFAULT_FRICTION: f32 = 0.02;

/// Capsule radius (40px sprite)
pub const DEFAULT_RADIUS: f32 = 20.0;
/// Distance between spawn grid cells
pub const DEFAULT_SPACING: f32 = 60.0;
/// Spawn grid is capped at this many columns
pub const DEFAULT_COLUMNS: u32 = 4;
/// Max random offset added to each spawn cell, per axis
pub const DEFAULT_JITTER: f32 = 10.0;
pub const DEFAULT_SEED: u32 = 12345;
/// Speed under which a capsule counts as resting, on top of one tick of gravity
pub const DEFAULT_SETTLE_SPEED: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Added to vy every tick (units/tick²)
    pub gravity: f32,
    /// Multiplicative velocity decay per tick, both axes
    pub damping: f32,
    /// Fraction of normal velocity kept (and reversed) on wall contact
    pub restitution: f32,
    /// Extra vx loss on floor contact only
    pub friction: f32,

    pub radius: f32,
    pub spacing: f32,
    pub columns: u32,
    pub jitter: f32,
    pub seed: u32,
    pub settle_speed: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            damping: DEFAULT_DAMPING,
            restitution: DEFAULT_RESTITUTION,
            friction: DEFAULT_FRICTION,
            radius: DEFAULT_RADIUS,
            spacing: DEFAULT_SPACING,
            columns: DEFAULT_COLUMNS,
            jitter: DEFAULT_JITTER,
            seed: DEFAULT_SEED,
            settle_speed: DEFAULT_SETTLE_SPEED,
        }
    }
}

impl SimulationConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SimulationConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // Plain struct of numbers, serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Speed cut-off for `is_settled`.
    ///
    /// A capsule resting on the floor or on a neighbour picks up one tick of
    /// gravity before the clamp or the contact takes it back, so a resting
    /// pile never reads slower than `gravity`. The cut-off sits that far above
    /// `settle_speed`.
    pub fn settle_threshold(&self) -> f32 {
        self.settle_speed + self.gravity.abs()
    }

    /// Same physics, no random spawn offsets. Layout becomes a pure function of the count.
    pub fn without_jitter(mut self) -> Self {
        self.jitter = 0.0;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        let floats = [
            ("gravity", self.gravity),
            ("damping", self.damping),
            ("restitution", self.restitution),
            ("friction", self.friction),
            ("radius", self.radius),
            ("spacing", self.spacing),
            ("jitter", self.jitter),
            ("settle_speed", self.settle_speed),
        ];
        for (name, value) in floats {
            if !value.is_finite() {
                return Err(format!("{} must be finite, got {}", name, value));
            }
        }

        if self.damping <= 0.0 || self.damping > 1.0 {
            return Err(format!("damping must be in (0, 1], got {}", self.damping));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(format!("restitution must be in [0, 1], got {}", self.restitution));
        }
        if !(0.0..=1.0).contains(&self.friction) {
            return Err(format!("friction must be in [0, 1], got {}", self.friction));
        }
        if self.radius <= 0.0 {
            return Err(format!("radius must be positive, got {}", self.radius));
        }
        if self.spacing <= 0.0 {
            return Err(format!("spacing must be positive, got {}", self.spacing));
        }
        if self.columns == 0 {
            return Err("columns must be at least 1".to_string());
        }
        if self.jitter < 0.0 {
            return Err(format!("jitter must not be negative, got {}", self.jitter));
        }
        if self.settle_speed < 0.0 {
            return Err(format!("settle_speed must not be negative, got {}", self.settle_speed));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config = SimulationConfig::from_json("{}").unwrap();
        assert_eq!(config, SimulationConfig::default());
        assert_eq!(config.gravity, 0.8);
        assert_eq!(config.damping, 0.98);
        assert_eq!(config.restitution, 0.6);
        assert_eq!(config.friction, 0.02);
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let config = SimulationConfig::from_json(r#"{"gravity": 0.0, "jitter": 0}"#).unwrap();
        assert_eq!(config.gravity, 0.0);
        assert_eq!(config.jitter, 0.0);
        assert_eq!(config.damping, DEFAULT_DAMPING);
        assert_eq!(config.columns, DEFAULT_COLUMNS);
    }

    #[test]
    fn json_survives_a_trip_through_to_json() {
        let mut config = SimulationConfig::default();
        config.seed = 99;
        config.restitution = 0.25;
        let back = SimulationConfig::from_json(&config.to_json()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(SimulationConfig::from_json(r#"{"damping": 0}"#).is_err());
        assert!(SimulationConfig::from_json(r#"{"damping": 1.5}"#).is_err());
        assert!(SimulationConfig::from_json(r#"{"restitution": -0.1}"#).is_err());
        assert!(SimulationConfig::from_json(r#"{"friction": 2}"#).is_err());
        assert!(SimulationConfig::from_json(r#"{"radius": 0}"#).is_err());
        assert!(SimulationConfig::from_json(r#"{"columns": 0}"#).is_err());
        assert!(SimulationConfig::from_json(r#"{"jitter": -1}"#).is_err());
    }

    #[test]
    fn rejects_malformed_and_unknown_input() {
        assert!(SimulationConfig::from_json("not json").is_err());
        assert!(SimulationConfig::from_json(r#"{"gravty": 1.0}"#).is_err());
    }

    #[test]
    fn settle_threshold_allows_one_tick_of_gravity() {
        let config = SimulationConfig::default();
        assert!((config.settle_threshold() - 1.3).abs() < 1e-6);

        let mut floating = config;
        floating.gravity = 0.0;
        assert_eq!(floating.settle_threshold(), floating.settle_speed);
    }

    #[test]
    fn rejects_non_finite_values() {
        let mut config = SimulationConfig::default();
        config.gravity = f32::NAN;
        let err = config.validate().unwrap_err();
        assert!(err.contains("gravity"));
    }
}
