//! Small value types for 2D and 3D Euclidean vector arithmetic.
//!
//! `Vector2D` and `Vector3D` are plain `Copy` structs of `f64` components.
//! Every operation is a pure function that returns a new value; nothing is
//! mutated in place. Floating-point edge cases follow IEEE 754: dividing by a
//! zero scalar, or asking for the angle to a zero vector, yields infinities or
//! NaN rather than an error. The one exception is `normal()`, which maps the
//! zero vector to itself. Callers who prefer an error can use the `checked_*`
//! and `try_*` variants, which return a `GeoResult`.
//!
//! ```
//! use geovec::{Vector2D, Vector3D, Radian, degrees_to_radian, Degrees};
//!
//! let v = Vector2D::new(3.0, 4.0);
//! assert_eq!(v.magnitude(), 5.0);
//! assert_eq!(v.normal(), Vector2D::new(0.6, 0.8));
//!
//! let quarter: Radian = degrees_to_radian(Degrees(90.0));
//! let turned = Vector2D::xhat().rotate(quarter);
//! assert!((turned.y - 1.0).abs() < 1e-12);
//!
//! let a = Vector3D::new(1.0, 2.0, 3.0);
//! let b = Vector3D::new(4.0, 5.0, 6.0);
//! assert_eq!(a.cross(&b), Vector3D::new(-3.0, 6.0, -3.0));
//! ```

pub mod angle;
pub mod geo_2d;
pub mod geo_3d;
mod crate_errors;

pub use crate_errors::{
    GeoError,
    GeoResult,
    err_str,
};
pub use angle::{
    Degrees,
    Radian,
    degrees_to_radian,
    radian_to_degrees,
};
pub use geo_2d::Vector2D;
pub use geo_3d::Vector3D;
