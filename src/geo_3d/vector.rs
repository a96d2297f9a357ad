use std::ops::{
    Add,
    Sub,
    Mul,
    Div,
    Neg,
    Index,
};
use std::fmt;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use strum::IntoEnumIterator;

use crate::crate_errors::{GeoResult, err_zero, err_non_finite};
use crate::geo_3d::{Axis3D, Radian};

/// A vector in 3D space.
/// Plain value type: every operation returns a new vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl Vector3D {
    /// Create a new vector.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3D{x, y, z}
    }

    /// Create a new zero vector.
    pub fn zero() -> Self {
        Vector3D{x: 0.0, y: 0.0, z: 0.0}
    }

    /// Construct an xhat vector.
    pub fn xhat() -> Self {
        Vector3D{x: 1.0, y: 0.0, z: 0.0}
    }

    /// Construct a yhat vector.
    pub fn yhat() -> Self {
        Vector3D{x: 0.0, y: 1.0, z: 0.0}
    }

    /// Construct a zhat vector.
    pub fn zhat() -> Self {
        Vector3D{x: 0.0, y: 0.0, z: 1.0}
    }

    /// Componentwise sum.
    pub fn add(self, other: &Vector3D) -> Vector3D {
        Vector3D{
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }

    /// Componentwise difference, `self - other`.
    pub fn subtract(self, other: &Vector3D) -> Vector3D {
        Vector3D{
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }

    /// Scale every component by `scalar`.
    pub fn multiply(self, scalar: f64) -> Vector3D {
        Vector3D{
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }

    /// Divide every component by `scalar`.
    /// Dividing by zero gives infinities or NaN, per component.
    pub fn divide(self, scalar: f64) -> Vector3D {
        Vector3D{
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }

    /// Get the dot product of two vectors.
    pub fn dot(self, other: &Vector3D) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Get the cross product of two vectors (right-hand rule).
    pub fn cross(self, other: &Vector3D) -> Vector3D {
        Vector3D{
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Get the magnitude squared of the vector.
    pub fn magnitude_sq(self) -> f64 {
        self.x*self.x + self.y*self.y + self.z*self.z
    }

    /// Get the magnitude of the vector.
    pub fn magnitude(self) -> f64 {
        self.magnitude_sq().sqrt()
    }

    /// Get the angle between two vectors, in `[0, pi]`.
    ///
    /// NaN if either vector has zero magnitude.
    pub fn angle_to(self, other: &Vector3D) -> Radian {
        let dot = self.dot(other);
        let mag = self.magnitude() * other.magnitude();
        // Rounding can push the cosine just outside [-1, 1]
        let cos_theta = (dot / mag).clamp(-1.0, 1.0);
        Radian(cos_theta.acos())
    }

    /// Get the vector projection of `self` onto `other`.
    pub fn project_onto(self, other: &Vector3D) -> Vector3D {
        let dot = self.dot(other);
        let scale = dot / other.magnitude().powi(2);
        other.multiply(scale)
    }

    /// Get the vector rejection of `self` from `other`.
    pub fn reject_from(self, other: &Vector3D) -> Vector3D {
        self - self.project_onto(other)
    }

    /// Get the Euclidean distance between two vectors.
    pub fn distance_to(self, other: &Vector3D) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2) + (other.z - self.z).powi(2)).sqrt()
    }

    /// Linear interpolation from `self` (t = 0) to `other` (t = 1).
    /// `t` outside `[0, 1]` extrapolates.
    pub fn lerp(self, other: &Vector3D, t: f64) -> Vector3D {
        Vector3D{
            x: (1.0 - t) * self.x + t * other.x,
            y: (1.0 - t) * self.y + t * other.y,
            z: (1.0 - t) * self.z + t * other.z,
        }
    }

    /// Rotate around a unit axis vector by an angle.
    pub fn rotate_around(self, axis: &Vector3D, angle: Radian) -> Vector3D {
        let c = angle.cos();
        let s = angle.sin();
        let cross = axis.cross(&self);

        self * c + cross * s + *axis * axis.dot(&self) * (1.0 - c)
    }

    /// Reflect a vector across the plane with the given normal.
    /// A zero normal leaves the vector unchanged.
    pub fn reflect_across(self, normal: &Vector3D) -> Vector3D {
        let normal = normal.normal();
        let dot = self.dot(&normal);
        Vector3D{
            x: self.x - 2.0 * dot * normal.x,
            y: self.y - 2.0 * dot * normal.y,
            z: self.z - 2.0 * dot * normal.z,
        }
    }

    /// Normalize and return a new vector.
    /// The zero vector normalizes to itself.
    pub fn normal(self) -> Vector3D {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Vector3D::zero();
        }
        Vector3D{
            x: self.x / mag,
            y: self.y / mag,
            z: self.z / mag,
        }
    }

    /// Like `normal`, but a zero or non-finite vector is an error.
    pub fn try_normal(self) -> GeoResult<Vector3D> {
        self.check_direction("self", "try_normal")?;
        Ok(self.normal())
    }

    /// Like `angle_to`, but zero or non-finite operands are an error.
    pub fn checked_angle_to(self, other: &Vector3D) -> GeoResult<Radian> {
        self.check_direction("self", "angle_to")?;
        other.check_direction("other", "angle_to")?;
        Ok(self.angle_to(other))
    }

    /// Like `project_onto`, but a zero or non-finite target is an error.
    pub fn checked_project_onto(self, other: &Vector3D) -> GeoResult<Vector3D> {
        if self.has_non_finite() {
            return err_non_finite("self", "project_onto");
        }
        other.check_direction("other", "project_onto")?;
        Ok(self.project_onto(other))
    }

    /// Get a single component.
    pub fn component(self, axis: Axis3D) -> f64 {
        match axis {
            Axis3D::X => self.x,
            Axis3D::Y => self.y,
            Axis3D::Z => self.z,
        }
    }

    /// Axis of the largest component by absolute value. Ties go to the earlier axis.
    pub fn dominant_axis(self) -> Axis3D {
        let mut best = Axis3D::X;
        for axis in Axis3D::iter() {
            if self[axis].abs() > self[best].abs() {
                best = axis;
            }
        }
        best
    }

    /// Check if any of the components are NaN.
    pub fn has_nan(self) -> bool {
        Axis3D::iter().any(|axis| self[axis].is_nan())
    }

    fn has_non_finite(self) -> bool {
        Axis3D::iter().any(|axis| !self[axis].is_finite())
    }

    fn check_direction(self, operand: &str, operation: &str) -> GeoResult<()> {
        if self.has_non_finite() {
            return err_non_finite(operand, operation);
        }
        if self.magnitude() == 0.0 {
            return err_zero(operand, operation);
        }
        Ok(())
    }
}
impl Add for Vector3D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector3D::add(self, &other)
    }
}
impl Sub for Vector3D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.subtract(&other)
    }
}
impl Mul<Vector3D> for f64 {
    type Output = Vector3D;

    fn mul(self, other: Vector3D) -> Vector3D {
        other.multiply(self)
    }
}
impl Mul<f64> for Vector3D {
    type Output = Vector3D;

    fn mul(self, other: f64) -> Vector3D {
        self.multiply(other)
    }
}
impl Div<f64> for Vector3D {
    type Output = Vector3D;

    fn div(self, other: f64) -> Vector3D {
        self.divide(other)
    }
}
impl Neg for Vector3D {
    type Output = Vector3D;

    fn neg(self) -> Vector3D {
        Vector3D{
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}
impl Index<Axis3D> for Vector3D {
    type Output = f64;

    fn index(&self, axis: Axis3D) -> &f64 {
        match axis {
            Axis3D::X => &self.x,
            Axis3D::Y => &self.y,
            Axis3D::Z => &self.z,
        }
    }
}
impl From<[f64; 3]> for Vector3D {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector3D{x, y, z}
    }
}
impl From<(f64, f64, f64)> for Vector3D {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vector3D{x, y, z}
    }
}
impl From<Vector3D> for [f64; 3] {
    fn from(vector: Vector3D) -> Self {
        [vector.x, vector.y, vector.z]
    }
}
impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*}, {:.*})", precision, self.x, precision, self.y, precision, self.z)
    }
}
impl AbsDiffEq for Vector3D {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        Axis3D::iter().all(|axis| self[axis].abs_diff_eq(&other[axis], epsilon))
    }
}
impl RelativeEq for Vector3D {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        Axis3D::iter().all(|axis| self[axis].relative_eq(&other[axis], epsilon, max_relative))
    }
}
impl UlpsEq for Vector3D {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        Axis3D::iter().all(|axis| self[axis].ulps_eq(&other[axis], epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    use approx::{assert_relative_eq, assert_abs_diff_eq};

    use crate::GeoError;

    const EPS: f64 = 1e-9;

    #[test]
    fn componentwise_arithmetic() {
        let v1 = Vector3D::new(1.0, 2.0, 3.0);
        let v2 = Vector3D::new(4.0, 5.0, 6.0);
        assert_eq!(v1.add(&v2), Vector3D::new(5.0, 7.0, 9.0));
        assert_eq!(v2.subtract(&v1), Vector3D::new(3.0, 3.0, 3.0));
        assert_eq!(v1.multiply(2.0), Vector3D::new(2.0, 4.0, 6.0));
        assert_eq!(Vector3D::new(2.0, 4.0, 6.0).divide(2.0), v1);

        // Operators agree with the named methods
        assert_eq!(v1 + v2, v1.add(&v2));
        assert_eq!(v2 - v1, v2.subtract(&v1));
        assert_eq!(2.0 * v1, v1 * 2.0);
        assert_eq!(v1 / 0.5, v1.divide(0.5));
        assert_eq!(-v1, Vector3D::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn divide_by_zero_is_ieee() {
        let v = Vector3D::new(1.0, -1.0, 0.0).divide(0.0);
        assert_eq!(v.x, f64::INFINITY);
        assert_eq!(v.y, f64::NEG_INFINITY);
        assert!(v.z.is_nan());
        assert!(v.has_nan());
    }

    #[test]
    fn dot_and_cross() {
        let v1 = Vector3D::new(1.0, 2.0, 3.0);
        let v2 = Vector3D::new(4.0, 5.0, 6.0);
        assert_relative_eq!(v1.dot(&v2), 32.0, epsilon = EPS);
        assert_relative_eq!(v1.cross(&v2), Vector3D::new(-3.0, 6.0, -3.0), epsilon = EPS);
        assert_eq!(Vector3D::xhat().cross(&Vector3D::yhat()), Vector3D::zhat());
    }

    #[test]
    fn magnitude_of_known_vector() {
        let v = Vector3D::new(1.0, 2.0, 2.0);
        assert_relative_eq!(v.magnitude(), 3.0, epsilon = EPS);
        assert_relative_eq!(v.magnitude_sq(), 9.0, epsilon = EPS);
    }

    #[test]
    fn angle_between_axes() {
        let angle = Vector3D::xhat().angle_to(&Vector3D::yhat());
        assert_relative_eq!(angle, Radian(PI / 2.0), epsilon = EPS);

        let v = Vector3D::new(0.3, -1.7, 2.9);
        assert_abs_diff_eq!(v.angle_to(&v), Radian(0.0), epsilon = 1e-7);
        assert_relative_eq!(v.angle_to(&-v), Radian(PI), epsilon = 1e-7);
    }

    #[test]
    fn angle_with_zero_vector_is_nan() {
        let v = Vector3D::new(1.0, 2.0, 3.0);
        assert!(v.angle_to(&Vector3D::zero()).is_nan());
        assert!(Vector3D::zero().angle_to(&v).is_nan());
    }

    #[test]
    fn projection_and_rejection() {
        let v1 = Vector3D::new(1.0, 2.0, 3.0);
        let v2 = Vector3D::new(4.0, 5.0, 6.0);
        let expected = Vector3D::new(1.662337662337662, 2.077922077922078, 2.4935064935064934);
        assert_relative_eq!(v1.project_onto(&v2), expected, epsilon = EPS);

        let rejection = v1.reject_from(&v2);
        assert_abs_diff_eq!(rejection.dot(&v2), 0.0, epsilon = EPS);
        assert_relative_eq!(rejection + v1.project_onto(&v2), v1, epsilon = EPS);
    }

    #[test]
    fn projection_onto_zero_is_nan() {
        let p = Vector3D::new(1.0, 2.0, 3.0).project_onto(&Vector3D::zero());
        assert!(p.has_nan());
    }

    #[test]
    fn distance_between_points() {
        let v1 = Vector3D::new(1.0, 2.0, 3.0);
        let v2 = Vector3D::new(4.0, 5.0, 6.0);
        assert_relative_eq!(v1.distance_to(&v2), 27.0_f64.sqrt(), epsilon = EPS);
        assert_relative_eq!(v1.distance_to(&v2), (v2 - v1).magnitude(), epsilon = EPS);
    }

    #[test]
    fn lerp_midpoint_and_extrapolation() {
        let v1 = Vector3D::new(1.0, 2.0, 3.0);
        let v2 = Vector3D::new(4.0, 5.0, 6.0);
        assert_relative_eq!(v1.lerp(&v2, 0.5), Vector3D::new(2.5, 3.5, 4.5), epsilon = EPS);
        assert_eq!(v1.lerp(&v2, 0.0), v1);
        assert_eq!(v1.lerp(&v2, 1.0), v2);
        assert_relative_eq!(v1.lerp(&v2, 2.0), Vector3D::new(7.0, 8.0, 9.0), epsilon = EPS);
    }

    #[test]
    fn reflect_across_plane() {
        let v = Vector3D::new(1.0, -1.0, 0.0);
        let reflected = v.reflect_across(&Vector3D::new(0.0, 1.0, 0.0));
        assert_relative_eq!(reflected, Vector3D::new(1.0, 1.0, 0.0), epsilon = EPS);

        // Normal length does not matter
        let reflected = v.reflect_across(&Vector3D::new(0.0, 7.5, 0.0));
        assert_relative_eq!(reflected, Vector3D::new(1.0, 1.0, 0.0), epsilon = EPS);
    }

    #[test]
    fn reflect_across_zero_normal_is_identity() {
        let v = Vector3D::new(1.0, -1.0, 4.0);
        assert_eq!(v.reflect_across(&Vector3D::zero()), v);
    }

    #[test]
    fn normal_of_known_vector() {
        let v = Vector3D::new(1.0, 2.0, 2.0);
        let expected = Vector3D::new(1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
        assert_relative_eq!(v.normal(), expected, epsilon = EPS);
        assert_eq!(Vector3D::zero().normal(), Vector3D::zero());
    }

    #[test]
    fn rotate_around_axis() {
        let rotated = Vector3D::xhat().rotate_around(&Vector3D::zhat(), Radian(PI / 2.0));
        assert_relative_eq!(rotated, Vector3D::yhat(), epsilon = EPS);

        let v = Vector3D::new(1.0, 2.0, 3.0);
        let axis = Vector3D::new(1.0, 1.0, 0.0).normal();
        let rotated = v.rotate_around(&axis, Radian(1.234));
        assert_relative_eq!(rotated.magnitude(), v.magnitude(), epsilon = EPS);
        assert_relative_eq!(rotated.dot(&axis), v.dot(&axis), epsilon = EPS);
    }

    #[test]
    fn checked_variants() {
        let v = Vector3D::new(1.0, 2.0, 2.0);
        assert_eq!(v.try_normal(), Ok(v.normal()));
        assert!(matches!(Vector3D::zero().try_normal(), Err(GeoError::ZeroMagnitude(_))));

        assert!(matches!(v.checked_angle_to(&Vector3D::zero()), Err(GeoError::ZeroMagnitude(_))));
        let nan = Vector3D::new(f64::NAN, 0.0, 0.0);
        assert!(matches!(v.checked_angle_to(&nan), Err(GeoError::NonFinite(_))));
        assert_eq!(v.checked_angle_to(&Vector3D::xhat()), Ok(v.angle_to(&Vector3D::xhat())));

        assert!(matches!(v.checked_project_onto(&Vector3D::zero()), Err(GeoError::ZeroMagnitude(_))));
        // Projecting the zero vector is fine
        assert_eq!(Vector3D::zero().checked_project_onto(&v), Ok(Vector3D::zero()));
    }

    #[test]
    fn components_by_axis() {
        let v = Vector3D::new(1.0, -5.0, 3.0);
        assert_eq!(v[Axis3D::Y], -5.0);
        assert_eq!(v.component(Axis3D::Z), 3.0);
        assert_eq!(v.dominant_axis(), Axis3D::Y);
        assert_eq!(Vector3D::new(2.0, 2.0, -2.0).dominant_axis(), Axis3D::X);

        let array: [f64; 3] = v.into();
        assert_eq!(Vector3D::from(array), v);
        assert_eq!(Vector3D::from((1.0, -5.0, 3.0)), v);
    }

    #[test]
    fn display_precision() {
        let v = Vector3D::new(1.0, 2.5, -1.0 / 3.0);
        assert_eq!(format!("{}", v), "(1.000, 2.500, -0.333)");
        assert_eq!(format!("{:.1}", v), "(1.0, 2.5, -0.3)");
    }
}
