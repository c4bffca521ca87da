#![deny(unsafe_code)]
//! Core types for the particle-fields simulation.
//!
//! Particles stream out of [`Emitter`]s, get pulled or pushed by
//! user-placed gravitational [`Field`]s, and are culled once they leave the
//! surface. [`Simulation`] owns that state and runs the per-frame loop
//! against abstract [`RenderSurface`], [`FrameScheduler`] and
//! [`InputSource`] collaborators.

pub mod color;
pub mod config;
pub mod emitter;
pub mod error;
pub mod field;
pub mod input;
pub mod particle;
pub mod render;
pub mod scene;
pub mod scheduler;
pub mod simulation;
pub mod surface;
pub mod vector;

pub use color::{Srgb, Theme};
pub use config::SimConfig;
pub use emitter::Emitter;
pub use error::SimError;
pub use field::{Field, FieldRole};
pub use input::{InputEvent, InputSource, NoInput, ScheduledEvent, ScriptedInput};
pub use particle::Particle;
pub use scene::{Scene, MAX_DIMENSION};
pub use scheduler::{FixedFrames, FrameScheduler};
pub use simulation::{Simulation, TickStats};
pub use surface::{DrawCommand, RecordingSurface, RenderSurface};
pub use vector::{Polar, Vector};
