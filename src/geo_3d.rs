mod vector;

pub use vector::Vector3D;
pub use crate::angle::{
    Degrees,
    Radian,
    degrees_to_radian,
    radian_to_degrees,
};

/// Component selector for a `Vector3D`.
/// Iterates in storage order: x, y, z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(strum::EnumIter, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Axis3D {
    X,
    Y,
    Z,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn axes_iterate_in_order() {
        let names: Vec<String> = Axis3D::iter().map(|axis| axis.to_string()).collect();
        assert_eq!(names, vec!["x", "y", "z"]);
    }
}
