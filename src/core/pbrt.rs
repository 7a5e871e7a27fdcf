//! Type definition of Float, otherwise constants and functions which
//! can be used almost everywhere else in the code.

// std
use std::f32::consts::PI;
use std::ops::{Add, Mul, Sub};

// see pbrt.h

pub type Float = f32;

/// Clamp the given value *val* to lie between the values *low* and *high*.
pub fn clamp_t<T>(val: T, low: T, high: T) -> T
where
    T: PartialOrd,
{
    if val < low {
        low
    } else if val > high {
        high
    } else {
        val
    }
}

/// Convert from angles expressed in degrees to radians.
pub fn radians(deg: Float) -> Float {
    (PI / 180.0) * deg
}

/// Convert from angles expressed in radians to degrees.
pub fn degrees(rad: Float) -> Float {
    (180.0 / PI) * rad
}

/// Interpolate linearly between two provided values.
pub fn lerp<S, T>(t: S, a: T, b: T) -> T
where
    S: num::One,
    S: Sub<S, Output = S>,
    S: Copy,
    T: Add<T, Output = T>,
    T: Mul<S, Output = T>,
{
    let one: S = num::One::one();
    a * (one - t) + b * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn clamp_inside_and_outside() {
        assert_eq!(clamp_t(0.5 as Float, 0.0, 1.0), 0.5);
        assert_eq!(clamp_t(-2.0 as Float, -1.0, 1.0), -1.0);
        assert_eq!(clamp_t(7, 0, 3), 3);
    }

    #[test]
    fn radians_degrees_round_trip() {
        assert!(approx_eq!(Float, radians(180.0), PI, ulps = 2));
        assert!(approx_eq!(Float, degrees(radians(37.5)), 37.5, epsilon = 1e-5));
    }

    #[test]
    fn lerp_end_points() {
        assert_eq!(lerp(0.0 as Float, 2.0 as Float, 6.0 as Float), 2.0);
        assert_eq!(lerp(1.0 as Float, 2.0 as Float, 6.0 as Float), 6.0);
        assert_eq!(lerp(0.25 as Float, 2.0 as Float, 6.0 as Float), 3.0);
    }
}
