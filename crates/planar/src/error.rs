//! Errors surfaced by shape construction and queries.

use thiserror::Error;

/// Failure kinds for every fallible operation in the crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// Indexed point/segment lookup at or past the stored count.
    #[error("index {index} out of range for shape with {len} elements")]
    IndexOutOfRange { index: usize, len: usize },

    /// Perimeter requested for a general (non-circular) ellipse.
    #[error("perimeter has no closed form for a general ellipse")]
    UnsupportedPerimeter,

    /// A polygon needs at least three vertices.
    #[error("polygon needs at least 3 points, got {got}")]
    TooFewPoints { got: usize },

    /// Ellipse semi-axis or circle radius that is not a finite positive number.
    #[error("{name} must be finite and > 0, got {value}")]
    InvalidAxis { name: &'static str, value: f64 },

    /// Tolerance that is not a finite non-negative number.
    #[error("tolerance must be finite and >= 0, got {value}")]
    InvalidTolerance { value: f64 },
}
