//! Reproducible description of a headless run.
//!
//! A [`Scene`] captures everything needed to replay a session: surface
//! size, config, RNG seed, tick budget and the user input with the tick each
//! event arrived before. The same scene fed to the same binary produces
//! bit-identical particles.

use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::error::SimError;
use crate::input::{ScheduledEvent, ScriptedInput};
use crate::scheduler::FixedFrames;
use crate::simulation::Simulation;
use crate::surface::RenderSurface;

/// Largest accepted surface side, in pixels.
pub const MAX_DIMENSION: usize = 16_384;

/// A replayable simulation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: usize,
    pub height: usize,
    pub seed: u64,
    pub ticks: u64,
    #[serde(default)]
    pub config: SimConfig,
    #[serde(default)]
    pub events: Vec<ScheduledEvent>,
}

impl Scene {
    /// A scene with default config, no events and zero ticks.
    pub fn new(width: usize, height: usize, seed: u64) -> Self {
        Self {
            width,
            height,
            seed,
            ticks: 0,
            config: SimConfig::default(),
            events: Vec::new(),
        }
    }

    /// Parses a scene from JSON text and validates it.
    pub fn from_json_str(text: &str) -> Result<Self, SimError> {
        let scene: Scene =
            serde_json::from_str(text).map_err(|e| SimError::InvalidConfig(e.to_string()))?;
        scene.validate()?;
        Ok(scene)
    }

    /// Checks that both sides are in `1..=MAX_DIMENSION` and the config is valid.
    pub fn validate(&self) -> Result<(), SimError> {
        let side = 1..=MAX_DIMENSION;
        if !(side.contains(&self.width) && side.contains(&self.height)) {
            return Err(SimError::InvalidDimensions);
        }
        self.config.validate()
    }

    /// Builds the simulation this scene starts from.
    pub fn build(&self) -> Result<Simulation, SimError> {
        self.validate()?;
        Simulation::new(
            self.width as f64,
            self.height as f64,
            self.config.clone(),
            self.seed,
        )
    }

    /// Builds the simulation and runs every tick against `surface`.
    pub fn play<S: RenderSurface + ?Sized>(&self, surface: &mut S) -> Result<Simulation, SimError> {
        let mut sim = self.build()?;
        let mut input = ScriptedInput::new(self.events.clone());
        let ran = sim.run(surface, &mut FixedFrames::new(self.ticks), &mut input);
        log::debug!("scene played {ran} ticks, {} events unused", input.remaining());
        Ok(sim)
    }
}
