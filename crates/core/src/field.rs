//! Gravitational point sources placed by the user.
//!
//! A [`Field`] sits at a fixed position and pulls (positive mass) or pushes
//! (negative mass) every particle. Its display role is always derived from
//! the sign of the mass, so only position and mass are stored.

use serde::{Deserialize, Serialize};

use crate::color::{Srgb, Theme};
use crate::vector::Vector;

/// How a field acts on particles, derived from the sign of its mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRole {
    Attractive,
    Repulsive,
    Neutral,
}

impl FieldRole {
    /// Classifies a mass: `> 0` attracts, `< 0` repels, `0` (or NaN) is neutral.
    pub fn from_mass(mass: f64) -> Self {
        if mass > 0.0 {
            FieldRole::Attractive
        } else if mass < 0.0 {
            FieldRole::Repulsive
        } else {
            FieldRole::Neutral
        }
    }

    /// The theme color used to draw a field with this role.
    pub fn color(self, theme: &Theme) -> Srgb {
        match self {
            FieldRole::Attractive => theme.attractive,
            FieldRole::Repulsive => theme.repulsive,
            FieldRole::Neutral => theme.neutral,
        }
    }
}

/// A fixed point source with signed mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    position: Vector,
    mass: f64,
}

impl Field {
    /// Creates a field at `position`. Any mass is accepted, including 0.
    pub fn new(position: Vector, mass: f64) -> Self {
        Self { position, mass }
    }

    pub fn position(&self) -> Vector {
        self.position
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn role(&self) -> FieldRole {
        FieldRole::from_mass(self.mass)
    }

    /// Replaces the mass; the role follows.
    pub fn set_mass(&mut self, mass: f64) {
        self.mass = mass;
    }

    /// Shorthand for `self.role().color(theme)`.
    pub fn draw_color(&self, theme: &Theme) -> Srgb {
        self.role().color(theme)
    }
}
