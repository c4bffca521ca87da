//! Tunable constants for a simulation run.
//!
//! [`SimConfig`] is fixed once the simulation starts. It deserializes from
//! JSON with every key optional, so a config file only needs the values it
//! overrides.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::color::Theme;
use crate::emitter::DEFAULT_SPREAD;
use crate::error::SimError;
use crate::particle::DEFAULT_MIN_DISTANCE;

/// Live particle count above which emission pauses.
const DEFAULT_MAX_PARTICLES: usize = 10_000;
/// Side of the square drawn for each particle, in pixels.
const DEFAULT_PARTICLE_SIZE: f64 = 2.0;
/// Particles spawned per emitter per tick.
const DEFAULT_EMISSION_RATE: usize = 10;
/// Upper bound on `emission_rate`; one batch must fit in memory.
pub const MAX_EMISSION_RATE: usize = 100_000;
/// Radius of the circles drawn for fields and emitters, in pixels.
const DEFAULT_OBJECT_SIZE: f64 = 4.0;
/// Mass given to newly placed fields at start and after a reset.
const DEFAULT_MASS: f64 = 200.0;
/// Amount added or removed by one mass adjustment.
const DEFAULT_MASS_STEP: f64 = 100.0;
/// Speed of the default emitter's particles.
const DEFAULT_EMITTER_SPEED: f64 = 2.0;
/// How far left of center the default emitter sits.
const DEFAULT_EMITTER_OFFSET: f64 = 150.0;
/// Frames advanced per tick.
const DEFAULT_TIME_STEP: f64 = 1.0;

/// Simulation tunables. Use [`Default`] for the stock values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub max_particles: usize,
    pub particle_size: f64,
    pub emission_rate: usize,
    pub object_size: f64,
    pub default_mass: f64,
    pub mass_step: f64,
    pub default_spread: f64,
    pub emitter_speed: f64,
    pub emitter_offset: f64,
    /// Integration step in frames. `1.0` ties physics speed to the refresh rate.
    pub time_step: f64,
    /// Lower bound on particle-to-field distance in the force law.
    pub min_distance: f64,
    pub theme: Theme,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_particles: DEFAULT_MAX_PARTICLES,
            particle_size: DEFAULT_PARTICLE_SIZE,
            emission_rate: DEFAULT_EMISSION_RATE,
            object_size: DEFAULT_OBJECT_SIZE,
            default_mass: DEFAULT_MASS,
            mass_step: DEFAULT_MASS_STEP,
            default_spread: DEFAULT_SPREAD,
            emitter_speed: DEFAULT_EMITTER_SPEED,
            emitter_offset: DEFAULT_EMITTER_OFFSET,
            time_step: DEFAULT_TIME_STEP,
            min_distance: DEFAULT_MIN_DISTANCE,
            theme: Theme::default(),
        }
    }
}

impl SimConfig {
    /// Parses a config from a JSON value, filling missing keys with defaults.
    pub fn from_json(value: &Value) -> Result<Self, SimError> {
        let config: SimConfig = serde_json::from_value(value.clone())
            .map_err(|e| SimError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every value the simulation relies on being usable.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.emission_rate > MAX_EMISSION_RATE {
            return Err(SimError::InvalidConfig(format!(
                "emission_rate must be at most {MAX_EMISSION_RATE}, got {}",
                self.emission_rate
            )));
        }
        positive("particle_size", self.particle_size)?;
        positive("object_size", self.object_size)?;
        positive("time_step", self.time_step)?;
        positive("min_distance", self.min_distance)?;
        finite("default_mass", self.default_mass)?;
        finite("mass_step", self.mass_step)?;
        finite("emitter_speed", self.emitter_speed)?;
        finite("emitter_offset", self.emitter_offset)?;
        finite("default_spread", self.default_spread)?;
        if self.default_spread < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "default_spread must not be negative, got {}",
                self.default_spread
            )));
        }
        Ok(())
    }

    /// Current values as a JSON object.
    pub fn params(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Schema describing every tunable: type, default, lower bound and purpose.
    pub fn param_schema() -> Value {
        json!({
            "max_particles": {
                "type": "integer",
                "default": DEFAULT_MAX_PARTICLES,
                "min": 0,
                "description": "Live particle count above which emission pauses"
            },
            "particle_size": {
                "type": "number",
                "default": DEFAULT_PARTICLE_SIZE,
                "min": 0.0,
                "description": "Side of the square drawn per particle, in pixels"
            },
            "emission_rate": {
                "type": "integer",
                "default": DEFAULT_EMISSION_RATE,
                "min": 0,
                "max": MAX_EMISSION_RATE,
                "description": "Particles spawned per emitter per tick"
            },
            "object_size": {
                "type": "number",
                "default": DEFAULT_OBJECT_SIZE,
                "min": 0.0,
                "description": "Radius of field and emitter circles, in pixels"
            },
            "default_mass": {
                "type": "number",
                "default": DEFAULT_MASS,
                "description": "Mass for newly placed fields at start and after reset"
            },
            "mass_step": {
                "type": "number",
                "default": DEFAULT_MASS_STEP,
                "description": "Change applied by one mass increase or decrease"
            },
            "default_spread": {
                "type": "number",
                "default": DEFAULT_SPREAD,
                "min": 0.0,
                "description": "Half-angle of the default emitter's cone, in radians"
            },
            "emitter_speed": {
                "type": "number",
                "default": DEFAULT_EMITTER_SPEED,
                "description": "Speed of particles from the default emitter"
            },
            "emitter_offset": {
                "type": "number",
                "default": DEFAULT_EMITTER_OFFSET,
                "description": "Distance left of center for the default emitter"
            },
            "time_step": {
                "type": "number",
                "default": DEFAULT_TIME_STEP,
                "min": 0.0,
                "description": "Frames advanced per tick; 1 locks physics to the refresh rate"
            },
            "min_distance": {
                "type": "number",
                "default": DEFAULT_MIN_DISTANCE,
                "min": 0.0,
                "description": "Distance clamp that keeps the force law finite near a field"
            },
            "theme": {
                "type": "object",
                "default": Theme::default(),
                "description": "Hex colors for background, particle, attractive, repulsive, neutral and emitter"
            }
        })
    }
}

fn finite(name: &str, value: f64) -> Result<(), SimError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidConfig(format!(
            "{name} must be finite, got {value}"
        )))
    }
}

fn positive(name: &str, value: f64) -> Result<(), SimError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidConfig(format!(
            "{name} must be positive, got {value}"
        )))
    }
}
