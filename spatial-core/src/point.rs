//! Point and vector type aliases

use nalgebra::{Matrix3xX, Point3, Vector3};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;

/// A column-wise block of 3-vectors, one point or vector per column.
pub type Points3<T> = Matrix3xX<T>;

/// A block of single precision columns
pub type Points3f = Points3<f32>;

/// A block of double precision columns
pub type Points3d = Points3<f64>;
