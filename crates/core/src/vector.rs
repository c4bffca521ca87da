//! 2D vector math on top of [`glam::DVec2`].
//!
//! Addition (`+`, `+=`) comes from glam; this module adds the polar helpers
//! the emitter and particles need. `from_polar` is named apart from glam's
//! inherent unit-vector `DVec2::from_angle`.

pub use glam::DVec2 as Vector;

/// Polar-coordinate helpers for [`Vector`].
pub trait Polar: Sized {
    /// Builds `(magnitude * cos(angle), magnitude * sin(angle))`.
    fn from_polar(angle: f64, magnitude: f64) -> Self;

    /// Euclidean length, always >= 0 (NaN in, NaN out).
    fn magnitude(self) -> f64;

    /// Direction as `atan2(y, x)` in `(-π, π]`.
    ///
    /// The zero vector has no direction; it returns 0 by convention.
    fn angle(self) -> f64;
}

impl Polar for Vector {
    fn from_polar(angle: f64, magnitude: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Vector::new(magnitude * cos, magnitude * sin)
    }

    fn magnitude(self) -> f64 {
        self.length()
    }

    fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-12;

    #[test]
    fn add_assign_mutates_receiver() {
        let mut v = Vector::new(1.0, 2.0);
        v += Vector::new(0.5, -4.0);
        assert_eq!(v, Vector::new(1.5, -2.0));
    }

    #[test]
    fn magnitude_of_3_4_is_5() {
        assert!((Vector::new(3.0, 4.0).magnitude() - 5.0).abs() < EPS);
        assert!((Vector::new(-3.0, -4.0).magnitude() - 5.0).abs() < EPS);
    }

    #[test]
    fn angle_covers_each_axis() {
        assert!(Vector::new(1.0, 0.0).angle().abs() < EPS);
        assert!((Vector::new(0.0, 1.0).angle() - FRAC_PI_2).abs() < EPS);
        assert!((Vector::new(-1.0, 0.0).angle() - PI).abs() < EPS);
        assert!((Vector::new(0.0, -1.0).angle() + FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn zero_vector_angle_is_zero() {
        assert_eq!(Vector::ZERO.angle(), 0.0);
    }

    #[test]
    fn from_polar_zero_points_along_x() {
        let v = Vector::from_polar(0.0, 2.0);
        assert_eq!(v, Vector::new(2.0, 0.0));
    }

    #[test]
    fn nan_propagates() {
        let v = Vector::new(f64::NAN, 1.0);
        assert!(v.magnitude().is_nan());
        assert!((v + Vector::ONE).x.is_nan());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn from_polar_round_trips_through_angle_and_magnitude(
                angle in -3.1_f64..3.1,
                magnitude in 0.001_f64..1e4,
            ) {
                let v = Vector::from_polar(angle, magnitude);
                prop_assert!((v.magnitude() - magnitude).abs() < 1e-9 * magnitude.max(1.0));
                prop_assert!((v.angle() - angle).abs() < 1e-9);
            }

            #[test]
            fn magnitude_is_never_negative(x in -1e6_f64..1e6, y in -1e6_f64..1e6) {
                prop_assert!(Vector::new(x, y).magnitude() >= 0.0);
            }
        }
    }
}
