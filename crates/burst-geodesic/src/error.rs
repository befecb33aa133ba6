//! Error types for the geodesic mesh pipeline.

use thiserror::Error;

/// Result alias for fallible geodesic operations.
pub type GeodesicResult<T> = Result<T, GeodesicError>;

/// Errors from mesh generation and face shrinking.
///
/// Every variant is a precondition or degeneracy failure caught at the
/// stage boundary; no partial mesh is ever returned alongside one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeodesicError {
    /// Requested more subdivision rounds than the hard cap allows.
    #[error("subdivision level {requested} exceeds the maximum of {max}")]
    InvalidSubdivisions {
        /// The level the caller asked for.
        requested: u32,
        /// The highest supported level.
        max: u32,
    },

    /// Shrink factor outside `(0, 1]`.
    #[error("shrink factor {0} is outside (0, 1]")]
    InvalidShrinkFactor(f64),

    /// Scale that is not a finite positive number.
    #[error("scale {0} is not a finite positive number")]
    InvalidScale(f64),

    /// An edge midpoint averaged to (near) zero length, so it has no
    /// direction to re-normalize onto the sphere. Only reachable with
    /// malformed input vertices, never from this pipeline's own output.
    #[error("degenerate midpoint between vertices {a} and {b}")]
    DegenerateMidpoint {
        /// Smaller vertex index of the offending edge.
        a: u32,
        /// Larger vertex index of the offending edge.
        b: u32,
    },
}
