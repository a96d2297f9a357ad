/*!
 * Angle units.
 *
 * `Degrees` and `Radian` are thin wrappers around an `f64` so the two units
 * cannot be mixed up by accident. Conversions never fail; non-finite values
 * pass straight through.
 */

use std::f64::consts::PI;
use std::fmt;
use std::ops::Neg;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

/// An angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Degrees(pub f64);

/// An angle in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Radian(pub f64);

/// Convert an angle from degrees to radians.
pub fn degrees_to_radian(angle: Degrees) -> Radian {
    Radian(angle.0 * (PI / 180.0))
}

/// Convert an angle from radians to degrees.
pub fn radian_to_degrees(radian: Radian) -> Degrees {
    Degrees(radian.0 * (180.0 / PI))
}

impl Radian {
    /// Cosine of the angle.
    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    /// Sine of the angle.
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }
}

impl From<Degrees> for Radian {
    fn from(angle: Degrees) -> Self {
        degrees_to_radian(angle)
    }
}
impl From<Radian> for Degrees {
    fn from(radian: Radian) -> Self {
        radian_to_degrees(radian)
    }
}

/// Shared impls for both angle newtypes.
macro_rules! impl_angle_unit {
    ($unit:ident, $suffix:expr) => {
        impl Neg for $unit {
            type Output = $unit;

            fn neg(self) -> $unit {
                $unit(-self.0)
            }
        }
        impl fmt::Display for $unit {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let precision = f.precision().unwrap_or(3);
                write!(f, "{:.*} {}", precision, self.0, $suffix)
            }
        }
        impl AbsDiffEq for $unit {
            type Epsilon = f64;

            fn default_epsilon() -> f64 {
                f64::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
                self.0.abs_diff_eq(&other.0, epsilon)
            }
        }
        impl RelativeEq for $unit {
            fn default_max_relative() -> f64 {
                f64::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
                self.0.relative_eq(&other.0, epsilon, max_relative)
            }
        }
        impl UlpsEq for $unit {
            fn default_max_ulps() -> u32 {
                f64::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
                self.0.ulps_eq(&other.0, epsilon, max_ulps)
            }
        }
    };
}

impl_angle_unit!(Degrees, "deg");
impl_angle_unit!(Radian, "rad");
