//! Core rigid-body transform type for spatial
//!
//! This crate provides `RigidTransform`, an element of SE(3) stored as a
//! 3x3 rotation matrix plus a translation vector, together with the helpers
//! used to build rotations from an axis and an angle in degrees.
//!
//! ```rust
//! use spatial_core::{RigidTransformf, Vector3f};
//!
//! let mut t = RigidTransformf::rotation(&Vector3f::x(), 90.0);
//! t *= RigidTransformf::translation(&Vector3f::y(), 4.0);
//!
//! // Free vectors only rotate, points rotate and translate.
//! assert_eq!(t * Vector3f::y(), Vector3f::z());
//! assert_eq!(t ^ Vector3f::zeros(), Vector3f::new(0.0, 0.0, 4.0));
//! ```

pub mod point;
pub mod rotation;
pub mod traits;
pub mod transform;
pub mod error;

#[cfg(feature = "glam")]
pub mod glam_interop;

pub use point::*;
pub use rotation::*;
pub use traits::*;
pub use transform::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3, Matrix3, Matrix4, Matrix3xX, IsometryMatrix3, RealField};
