//! Error types for spatial

use thiserror::Error;

/// Errors raised when importing a transform from a foreign representation.
///
/// Composition, inversion and application never fail; only the checked
/// conversions produce these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("Not an affine matrix: bottom row is {bottom_row}, expected [0, 0, 0, 1]")]
    NotAffine { bottom_row: String },

    #[error("Rotation block is not a proper rotation (orthogonal with determinant +1)")]
    NotProperRotation,
}

/// Result type alias for spatial operations
pub type Result<T> = std::result::Result<T, TransformError>;
