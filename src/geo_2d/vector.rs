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
use crate::geo_2d::{Axis2D, Radian};

/// A vector in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}
impl Vector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Vector2D{x, y}
    }

    pub fn zero() -> Self {
        Vector2D{x: 0.0, y: 0.0}
    }

    pub fn xhat() -> Self {
        Vector2D{x: 1.0, y: 0.0}
    }

    pub fn yhat() -> Self {
        Vector2D{x: 0.0, y: 1.0}
    }

    pub fn add(self, other: &Vector2D) -> Vector2D {
        Vector2D{x: self.x + other.x, y: self.y + other.y}
    }

    pub fn subtract(self, other: &Vector2D) -> Vector2D {
        Vector2D{x: self.x - other.x, y: self.y - other.y}
    }

    pub fn multiply(self, scalar: f64) -> Vector2D {
        Vector2D{x: self.x * scalar, y: self.y * scalar}
    }

    /// Division by zero follows IEEE 754, per component.
    pub fn divide(self, scalar: f64) -> Vector2D {
        Vector2D{x: self.x / scalar, y: self.y / scalar}
    }

    pub fn dot(self, other: &Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Scalar cross product: the signed area of the parallelogram spanned by both vectors.
    /// Positive when `other` is counter-clockwise from `self`.
    pub fn cross(self, other: &Vector2D) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn magnitude_sq(self) -> f64 {
        self.x*self.x + self.y*self.y
    }

    pub fn magnitude(self) -> f64 {
        self.magnitude_sq().sqrt()
    }

    /// Unsigned angle between two vectors, in `[0, pi]`.
    /// NaN if either vector has zero magnitude.
    pub fn angle_to(self, other: &Vector2D) -> Radian {
        let dot = self.dot(other);
        let mag = self.magnitude() * other.magnitude();
        // clamp keeps acos defined under rounding, and lets NaN through
        let cos_theta = (dot / mag).clamp(-1.0, 1.0);
        Radian(cos_theta.acos())
    }

    /// Orthogonal projection of `self` onto `other`.
    pub fn project_onto(self, other: &Vector2D) -> Vector2D {
        let dot = self.dot(other);
        other.multiply(dot / other.magnitude().powi(2))
    }

    /// What is left of `self` after removing its projection onto `other`.
    pub fn reject_from(self, other: &Vector2D) -> Vector2D {
        self - self.project_onto(other)
    }

    pub fn distance_to(self, other: &Vector2D) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }

    /// Linear interpolation, unclamped.
    pub fn lerp(self, other: &Vector2D, t: f64) -> Vector2D {
        Vector2D{
            x: (1.0 - t) * self.x + t * other.x,
            y: (1.0 - t) * self.y + t * other.y,
        }
    }

    /// Rotate counter-clockwise by `angle`.
    pub fn rotate(self, angle: Radian) -> Vector2D {
        let c = angle.cos();
        let s = angle.sin();
        Vector2D{
            x: self.x * c - self.y * s,
            y: self.x * s + self.y * c,
        }
    }

    /// Rotate a quarter turn counter-clockwise, exactly.
    pub fn perpendicular(self) -> Vector2D {
        Vector2D{x: -self.y, y: self.x}
    }

    /// Reflect across the line with the given normal.
    /// A zero normal leaves the vector unchanged.
    pub fn reflect_across(self, normal: &Vector2D) -> Vector2D {
        let normal = normal.normal();
        let dot = self.dot(&normal);
        Vector2D{
            x: self.x - 2.0 * dot * normal.x,
            y: self.y - 2.0 * dot * normal.y,
        }
    }

    /// Unit vector in the same direction, or the zero vector if `self` is zero.
    pub fn normal(self) -> Vector2D {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Vector2D::zero();
        }
        Vector2D{x: self.x / mag, y: self.y / mag}
    }

    pub fn try_normal(self) -> GeoResult<Vector2D> {
        self.check_direction("self", "try_normal")?;
        Ok(self.normal())
    }

    pub fn checked_angle_to(self, other: &Vector2D) -> GeoResult<Radian> {
        self.check_direction("self", "angle_to")?;
        other.check_direction("other", "angle_to")?;
        Ok(self.angle_to(other))
    }

    pub fn checked_project_onto(self, other: &Vector2D) -> GeoResult<Vector2D> {
        if self.has_non_finite() {
            return err_non_finite("self", "project_onto");
        }
        other.check_direction("other", "project_onto")?;
        Ok(self.project_onto(other))
    }

    pub fn component(self, axis: Axis2D) -> f64 {
        self[axis]
    }

    /// Ties go to x.
    pub fn dominant_axis(self) -> Axis2D {
        if self.y.abs() > self.x.abs() {
            Axis2D::Y
        } else {
            Axis2D::X
        }
    }

    pub fn has_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    fn has_non_finite(self) -> bool {
        !(self.x.is_finite() && self.y.is_finite())
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
impl Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector2D::add(self, &other)
    }
}
impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.subtract(&other)
    }
}
impl Mul<Vector2D> for f64 {
    type Output = Vector2D;

    fn mul(self, other: Vector2D) -> Vector2D {
        other.multiply(self)
    }
}
impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, other: f64) -> Vector2D {
        self.multiply(other)
    }
}
impl Div<f64> for Vector2D {
    type Output = Vector2D;

    fn div(self, other: f64) -> Vector2D {
        self.divide(other)
    }
}
impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D{x: -self.x, y: -self.y}
    }
}
impl Index<Axis2D> for Vector2D {
    type Output = f64;

    fn index(&self, axis: Axis2D) -> &f64 {
        match axis {
            Axis2D::X => &self.x,
            Axis2D::Y => &self.y,
        }
    }
}
impl From<[f64; 2]> for Vector2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Vector2D{x, y}
    }
}
impl From<(f64, f64)> for Vector2D {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2D{x, y}
    }
}
impl From<Vector2D> for [f64; 2] {
    fn from(vector: Vector2D) -> Self {
        [vector.x, vector.y]
    }
}
impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*})", precision, self.x, precision, self.y)
    }
}
impl AbsDiffEq for Vector2D {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        Axis2D::iter().all(|axis| self[axis].abs_diff_eq(&other[axis], epsilon))
    }
}
impl RelativeEq for Vector2D {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        Axis2D::iter().all(|axis| self[axis].relative_eq(&other[axis], epsilon, max_relative))
    }
}
impl UlpsEq for Vector2D {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        Axis2D::iter().all(|axis| self[axis].ulps_eq(&other[axis], epsilon, max_ulps))
    }
}
