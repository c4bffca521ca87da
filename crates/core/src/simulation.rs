//! The per-frame simulation loop.
//!
//! A [`Simulation`] owns all live state: particles, fields, emitters and the
//! mass used for the next placed field. Each [`Simulation::tick`] runs, in
//! order: emit, step (cull + forces + integrate), render. [`Simulation::run`]
//! repeats ticks for as long as a [`FrameScheduler`] grants frames, applying
//! user input between ticks.
//!
//! Step size is one frame (`time_step = 1.0`) by default, so simulated speed
//! is coupled to the refresh rate of whatever drives the scheduler.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use serde_json::{json, Value};

use crate::config::SimConfig;
use crate::emitter::Emitter;
use crate::error::SimError;
use crate::field::Field;
use crate::input::{InputEvent, InputSource};
use crate::particle::Particle;
use crate::render::draw_frame;
use crate::scheduler::FrameScheduler;
use crate::surface::RenderSurface;
use crate::vector::{Polar, Vector};

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TickStats {
    /// Index of the tick, starting at 0.
    pub tick: u64,
    pub emitted: usize,
    pub culled: usize,
    /// Particles alive after the step.
    pub live: usize,
}

/// Complete simulation state plus the loop that advances it.
pub struct Simulation {
    particles: Vec<Particle>,
    fields: Vec<Field>,
    emitters: Vec<Emitter>,
    mass: f64,
    config: SimConfig,
    rng: StdRng,
    ticks_run: u64,
}

impl Simulation {
    /// Creates a simulation for a `width` x `height` surface with the default
    /// emitter: `emitter_offset` left of center, aimed along +x at
    /// `emitter_speed`, with `default_spread`.
    ///
    /// Returns `SimError::InvalidDimensions` for non-positive or non-finite
    /// dimensions, or `SimError::InvalidConfig` if the config fails validation.
    pub fn new(width: f64, height: f64, config: SimConfig, seed: u64) -> Result<Self, SimError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(SimError::InvalidDimensions);
        }
        let mut sim = Self::empty(config, seed)?;
        let emitter = Emitter::new(
            Vector::new(width / 2.0 - sim.config.emitter_offset, height / 2.0),
            Vector::from_polar(0.0, sim.config.emitter_speed),
            sim.config.default_spread,
        );
        sim.add_emitter(emitter);
        Ok(sim)
    }

    /// Creates a simulation with no emitters, fields or particles.
    pub fn empty(config: SimConfig, seed: u64) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            particles: Vec::new(),
            fields: Vec::new(),
            emitters: Vec::new(),
            mass: config.default_mass,
            rng: StdRng::seed_from_u64(seed),
            config,
            ticks_run: 0,
        })
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn emitters(&self) -> &[Emitter] {
        &self.emitters
    }

    /// Mass the next placed field will get.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Number of ticks completed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks_run
    }

    pub fn add_emitter(&mut self, emitter: Emitter) {
        self.emitters.push(emitter);
    }

    /// Adds a field at `position` with the current placement mass.
    pub fn place_field(&mut self, position: Vector) {
        log::debug!(
            "field placed at ({}, {}) with mass {}",
            position.x,
            position.y,
            self.mass
        );
        self.fields.push(Field::new(position, self.mass));
    }

    /// Applies one user action. Runs between ticks, never during one.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PlaceField { x, y } => self.place_field(Vector::new(x, y)),
            InputEvent::IncreaseMass => {
                self.mass += self.config.mass_step;
                log::debug!("placement mass now {}", self.mass);
            }
            InputEvent::DecreaseMass => {
                self.mass -= self.config.mass_step;
                log::debug!("placement mass now {}", self.mass);
            }
            InputEvent::Reset => {
                log::debug!("reset: cleared {} fields", self.fields.len());
                self.fields.clear();
                self.mass = self.config.default_mass;
            }
        }
    }

    /// Spawns `emission_rate` particles per emitter, unless the live count
    /// already exceeds `max_particles`, in which case nothing is emitted.
    ///
    /// Returns the number of particles spawned.
    pub fn emit_particles(&mut self) -> usize {
        if self.particles.len() > self.config.max_particles {
            return 0;
        }
        let rate = self.config.emission_rate;
        let batch = rate.saturating_mul(self.emitters.len());
        self.particles.reserve(batch);
        for emitter in &self.emitters {
            for _ in 0..rate {
                self.particles.push(emitter.emit(&mut self.rng));
            }
        }
        batch
    }

    /// Drops particles outside `[0, width] x [0, height]` and advances the
    /// rest one step.
    ///
    /// Culling looks at each particle's position before this step moves it,
    /// so a particle that crosses the edge survives until the next call.
    /// Non-finite positions count as outside. Returns the number culled.
    pub fn step_particles(&mut self, width: f64, height: f64) -> usize {
        let fields = &self.fields;
        let min_distance = self.config.min_distance;
        let dt = self.config.time_step;
        let before = self.particles.len();
        self.particles.retain_mut(|p| {
            if !p.within(width, height) {
                return false;
            }
            p.compute_acceleration(fields, min_distance);
            p.integrate(dt);
            true
        });
        before - self.particles.len()
    }

    /// Runs one emit, step and render cycle against `surface`, whose
    /// dimensions are the culling bounds.
    pub fn tick<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) -> TickStats {
        let emitted = self.emit_particles();
        let culled = self.step_particles(surface.width(), surface.height());
        draw_frame(
            surface,
            &self.particles,
            &self.fields,
            &self.emitters,
            &self.config,
        );

        let stats = TickStats {
            tick: self.ticks_run,
            emitted,
            culled,
            live: self.particles.len(),
        };
        log::trace!(
            "tick {}: emitted {}, culled {}, live {}",
            stats.tick,
            stats.emitted,
            stats.culled,
            stats.live
        );
        self.ticks_run += 1;
        stats
    }

    /// Ticks until `scheduler` stops granting frames. Input polled from
    /// `input` is applied before each tick.
    ///
    /// Returns the number of ticks run.
    pub fn run<S, F, I>(&mut self, surface: &mut S, scheduler: &mut F, input: &mut I) -> u64
    where
        S: RenderSurface + ?Sized,
        F: FrameScheduler + ?Sized,
        I: InputSource + ?Sized,
    {
        let start = self.ticks_run;
        while scheduler.next_frame() {
            for event in input.poll(self.ticks_run) {
                self.handle_input(event);
            }
            self.tick(surface);
        }
        self.ticks_run - start
    }

    /// Snapshot of the counters, as JSON.
    pub fn summary(&self) -> Value {
        json!({
            "ticks": self.ticks_run,
            "particles": self.particles.len(),
            "fields": self.fields.len(),
            "emitters": self.emitters.len(),
            "mass": self.mass,
        })
    }
}
