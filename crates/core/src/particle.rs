//! Point masses pushed around by fields.
//!
//! Each tick a particle first recomputes its acceleration from every field
//! ([`Particle::compute_acceleration`]), then advances with semi-implicit
//! Euler ([`Particle::integrate`]).

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::vector::Vector;

/// Default lower bound on particle-to-field distance in the force law.
pub const DEFAULT_MIN_DISTANCE: f64 = 1e-3;

/// A point mass with position, velocity and the acceleration derived for the
/// current tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vector,
    pub velocity: Vector,
    pub acceleration: Vector,
}

impl Particle {
    /// A particle with the given position and velocity and no acceleration yet.
    pub fn new(position: Vector, velocity: Vector) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vector::ZERO,
        }
    }

    /// Replaces the acceleration with the sum of all field contributions.
    ///
    /// Each field contributes `d * mass / r³` where `d` is the displacement
    /// from the particle to the field and `r = max(|d|, min_distance)`. That
    /// is an inverse-square pull of magnitude `mass / r²` along `d`. The clamp
    /// keeps the result finite when a field sits on top of the particle; an
    /// exactly coincident field contributes nothing since `d` is zero.
    pub fn compute_acceleration(&mut self, fields: &[Field], min_distance: f64) {
        self.acceleration = fields
            .iter()
            .map(|field| {
                let displacement = field.position() - self.position;
                let distance = displacement.length().max(min_distance);
                displacement * (field.mass() / (distance * distance * distance))
            })
            .fold(Vector::ZERO, |total, force| total + force);
    }

    /// Advances one step of `dt` frames: velocity first, then position from
    /// the updated velocity.
    ///
    /// `dt = 1.0` is the frame-locked default, so simulated speed follows the
    /// display refresh rate.
    pub fn integrate(&mut self, dt: f64) {
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;
    }

    /// Whether the particle lies inside `[0, width] x [0, height]`, edges included.
    pub fn within(&self, width: f64, height: f64) -> bool {
        let Vector { x, y } = self.position;
        (0.0..=width).contains(&x) && (0.0..=height).contains(&y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn at(x: f64, y: f64) -> Particle {
        Particle::new(Vector::new(x, y), Vector::ZERO)
    }

    #[test]
    fn no_fields_gives_zero_acceleration() {
        let mut p = Particle {
            position: Vector::new(5.0, 5.0),
            velocity: Vector::new(1.0, 1.0),
            acceleration: Vector::new(9.0, 9.0),
        };
        p.compute_acceleration(&[], DEFAULT_MIN_DISTANCE);
        assert_eq!(p.acceleration, Vector::ZERO);
    }

    #[test]
    fn single_field_along_x_matches_inverse_square() {
        let mut p = at(0.0, 0.0);
        p.compute_acceleration(
            &[Field::new(Vector::new(100.0, 0.0), 200.0)],
            DEFAULT_MIN_DISTANCE,
        );
        assert!((p.acceleration.x - 0.02).abs() < EPS, "{:?}", p.acceleration);
        assert!(p.acceleration.y.abs() < EPS);
    }

    #[test]
    fn negative_mass_pushes_away() {
        let mut p = at(0.0, 0.0);
        p.compute_acceleration(
            &[Field::new(Vector::new(10.0, 0.0), -50.0)],
            DEFAULT_MIN_DISTANCE,
        );
        assert!((p.acceleration.x + 0.5).abs() < EPS, "{:?}", p.acceleration);
    }

    #[test]
    fn zero_mass_field_exerts_nothing() {
        let mut p = at(1.0, 2.0);
        p.compute_acceleration(&[Field::new(Vector::new(4.0, 6.0), 0.0)], DEFAULT_MIN_DISTANCE);
        assert_eq!(p.acceleration, Vector::ZERO);
    }

    #[test]
    fn contributions_sum_across_fields() {
        let mut p = at(0.0, 0.0);
        let fields = [
            Field::new(Vector::new(10.0, 0.0), 100.0),
            Field::new(Vector::new(-10.0, 0.0), 100.0),
            Field::new(Vector::new(0.0, 20.0), 400.0),
        ];
        p.compute_acceleration(&fields, DEFAULT_MIN_DISTANCE);
        assert!(p.acceleration.x.abs() < EPS);
        assert!((p.acceleration.y - 1.0).abs() < EPS);
    }

    #[test]
    fn acceleration_is_replaced_not_accumulated() {
        let mut p = at(0.0, 0.0);
        let fields = [Field::new(Vector::new(100.0, 0.0), 200.0)];
        p.compute_acceleration(&fields, DEFAULT_MIN_DISTANCE);
        p.compute_acceleration(&fields, DEFAULT_MIN_DISTANCE);
        assert!((p.acceleration.x - 0.02).abs() < EPS);
    }

    #[test]
    fn coincident_field_stays_finite() {
        let mut p = at(50.0, 50.0);
        p.compute_acceleration(&[Field::new(Vector::new(50.0, 50.0), 200.0)], DEFAULT_MIN_DISTANCE);
        assert!(p.acceleration.is_finite());
        assert_eq!(p.acceleration, Vector::ZERO);
    }

    #[test]
    fn near_coincident_field_is_clamped() {
        let mut p = at(0.0, 0.0);
        let min_distance = 1.0;
        p.compute_acceleration(&[Field::new(Vector::new(0.5, 0.0), 10.0)], min_distance);
        // r is clamped to 1, so the contribution is 0.5 * 10 / 1.
        assert!((p.acceleration.x - 5.0).abs() < EPS);
    }

    #[test]
    fn integrate_updates_velocity_before_position() {
        let mut p = Particle {
            position: Vector::new(10.0, 10.0),
            velocity: Vector::new(1.0, 0.0),
            acceleration: Vector::new(0.5, 2.0),
        };
        p.integrate(1.0);
        assert_eq!(p.velocity, Vector::new(1.5, 2.0));
        assert_eq!(p.position, Vector::new(11.5, 12.0));
    }

    #[test]
    fn integrate_scales_with_dt() {
        let mut p = Particle {
            position: Vector::ZERO,
            velocity: Vector::new(2.0, 0.0),
            acceleration: Vector::new(2.0, 0.0),
        };
        p.integrate(0.5);
        assert_eq!(p.velocity, Vector::new(3.0, 0.0));
        assert_eq!(p.position, Vector::new(1.5, 0.0));
    }

    #[test]
    fn within_includes_edges() {
        assert!(at(0.0, 0.0).within(100.0, 50.0));
        assert!(at(100.0, 50.0).within(100.0, 50.0));
        assert!(!at(-0.1, 10.0).within(100.0, 50.0));
        assert!(!at(10.0, 50.1).within(100.0, 50.0));
        assert!(!at(f64::NAN, 10.0).within(100.0, 50.0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn force_magnitude_is_mass_over_distance_squared(
                d in 0.01_f64..1e3,
                mass in -1e4_f64..1e4,
                angle in -3.1_f64..3.1,
            ) {
                use crate::vector::Polar;
                let mut p = at(0.0, 0.0);
                let field = Field::new(Vector::from_polar(angle, d), mass);
                p.compute_acceleration(&[field], DEFAULT_MIN_DISTANCE);
                let expected = mass.abs() / (d * d);
                prop_assert!(
                    (p.acceleration.length() - expected).abs() <= 1e-9 * expected.max(1.0),
                    "got {} expected {expected}", p.acceleration.length()
                );
            }

            #[test]
            fn acceleration_is_always_finite(
                px in -1e3_f64..1e3,
                py in -1e3_f64..1e3,
                fx in -1e3_f64..1e3,
                fy in -1e3_f64..1e3,
                mass in -1e4_f64..1e4,
            ) {
                let mut p = at(px, py);
                let fields = [
                    Field::new(Vector::new(fx, fy), mass),
                    Field::new(Vector::new(px, py), mass),
                ];
                p.compute_acceleration(&fields, DEFAULT_MIN_DISTANCE);
                prop_assert!(p.acceleration.is_finite());
            }
        }
    }
}
