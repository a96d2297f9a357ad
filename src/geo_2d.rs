mod vector;

pub use vector::Vector2D;
pub use crate::angle::{
    Degrees,
    Radian,
    degrees_to_radian,
    radian_to_degrees,
};

/// Component selector for a `Vector2D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(strum::EnumIter, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Axis2D {
    X,
    Y,
}
