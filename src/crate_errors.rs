/// Error-type enum for the `geovec` crate.
/// Only the checked operation variants return it; the plain operations follow IEEE 754.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoError {
    /// An operand had zero magnitude where a direction was required.
    ZeroMagnitude(String),
    /// An operand had a NaN or infinite component.
    NonFinite(String),
    StringOnly(String),
}
impl std::fmt::Display for GeoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoError::ZeroMagnitude(error) => write!(f, "! ZERO MAGNITUDE:\n- {}", error),
            GeoError::NonFinite(error) => write!(f, "! NON-FINITE COMPONENT:\n- {}", error),
            GeoError::StringOnly(error) => write!(f, "! GEOVEC ERROR:\n- {}", error),
        }
    }
}
impl std::error::Error for GeoError {}
impl From<String> for GeoError {
    fn from(error: String) -> Self {
        GeoError::StringOnly(error)
    }
}

/// Result type for the `geovec` crate.
pub type GeoResult<T> = std::result::Result<T, GeoError>;

/// Create a `GeoResult` with an `Err` from a string.
/// Shorthand to avoid writing `Err(crate::GeoError::StringOnly(error_str))`.
pub fn err_str<T>(error_str: &str) -> GeoResult<T> {
    Err(GeoError::StringOnly(error_str.to_string()))
}

/// Create a `GeoError::ZeroMagnitude` result naming the offending operand.
pub(crate) fn err_zero<T>(operand: &str, operation: &str) -> GeoResult<T> {
    Err(GeoError::ZeroMagnitude(format!("{} has zero magnitude in {}", operand, operation)))
}

/// Create a `GeoError::NonFinite` result naming the offending operand.
pub(crate) fn err_non_finite<T>(operand: &str, operation: &str) -> GeoResult<T> {
    Err(GeoError::NonFinite(format!("{} has a NaN or infinite component in {}", operand, operation)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_error_kind() {
        let err = err_zero::<()>("other", "angle_to").unwrap_err();
        assert_eq!(err.to_string(), "! ZERO MAGNITUDE:\n- other has zero magnitude in angle_to");

        let err = err_non_finite::<()>("self", "try_normal").unwrap_err();
        assert!(err.to_string().starts_with("! NON-FINITE COMPONENT:"));
    }

    #[test]
    fn string_errors_convert() {
        let err: GeoError = "bad input".to_string().into();
        assert_eq!(err, GeoError::StringOnly("bad input".to_string()));
        assert_eq!(err_str::<u8>("bad input"), Err(err));
    }
}
