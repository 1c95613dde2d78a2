//! Error types for the profile argument layer.
//!
//! All fallible paths in this crate are argument problems: an axis that does
//! not exist at the given rank, a latitude outside the physical range, or
//! input arrays whose shapes cannot be broadcast against each other. The
//! numerical kernels themselves never fail; degenerate arithmetic (zero layer
//! thickness, zero stratification) propagates as non-finite values instead,
//! with the per-function policies documented on each diagnostic.

use thiserror::Error;

/// Errors raised while validating and coercing profile arguments.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    /// The requested axis does not exist for the broadcast rank of the
    /// inputs. Negative axes count from the end, NumPy style.
    #[error("axis {axis} is out of bounds for arrays of rank {ndim}")]
    AxisOutOfBounds { axis: isize, ndim: usize },

    /// A latitude sample lies outside [-90, 90] degrees north. Carries the
    /// first offending value.
    #[error("latitude {lat} degrees is outside the valid range [-90, 90]")]
    LatitudeOutOfRange { lat: f64 },

    /// The input shapes cannot be broadcast to a common shape.
    #[error("shapes {shapes:?} cannot be broadcast together")]
    IncompatibleShapes { shapes: Vec<Vec<usize>> },
}
