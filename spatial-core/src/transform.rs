//! Rigid-body transforms in 3D
//!
//! `RigidTransform` is the semidirect product SE(3) = SO(3) ⋉ R³: rotations
//! compose multiplicatively and translations compose affinely under the
//! rotation on the left.

use std::fmt;
use std::ops::{BitXor, Mul, MulAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use nalgebra::{
    convert, Matrix3, Matrix4, Point3, RealField, Rotation3, Scalar, Translation3, Vector3,
    IsometryMatrix3,
};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TransformError};
use crate::point::Points3;
use crate::rotation::{axis_angle_matrix, is_rotation_matrix};

/// A rotation followed by a translation.
///
/// The rotation block is assumed to be proper-orthogonal. This holds for every
/// value built through the constructors below as long as rotation axes have
/// unit norm; it is not re-checked afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidTransform<T: Scalar> {
    rotation: Matrix3<T>,
    translation: Vector3<T>,
}

/// Single precision rigid transform
pub type RigidTransformf = RigidTransform<f32>;

/// Double precision rigid transform
pub type RigidTransformd = RigidTransform<f64>;

impl<T: RealField + Copy> RigidTransform<T> {
    /// Create an identity transformation
    pub fn identity() -> Self {
        Self {
            rotation: Matrix3::identity(),
            translation: Vector3::zeros(),
        }
    }

    /// Create a transform from a rotation matrix and a translation.
    ///
    /// `rotation` is taken as is; use [`RigidTransform::from_homogeneous`] for
    /// a checked import.
    pub fn from_parts(rotation: Matrix3<T>, translation: Vector3<T>) -> Self {
        Self { rotation, translation }
    }

    /// Create a rotation of `angle_degrees` about `axis`.
    ///
    /// `axis` must have unit norm. A non-unit axis yields a transform whose
    /// rotation block is not orthogonal; no error is raised.
    pub fn rotation(axis: &Vector3<T>, angle_degrees: T) -> Self {
        #[cfg(debug_assertions)]
        {
            let tolerance = <T as AbsDiffEq>::default_epsilon().sqrt();
            if (axis.norm() - T::one()).abs() > tolerance {
                log::warn!(
                    "rotation axis {:?} is not unit length, the result is not a rotation",
                    axis
                );
            }
        }

        Self {
            rotation: axis_angle_matrix(axis, angle_degrees),
            translation: Vector3::zeros(),
        }
    }

    /// Create a translation by `distance * axis`. `axis` need not be unit length.
    pub fn translation(axis: &Vector3<T>, distance: T) -> Self {
        Self {
            rotation: Matrix3::identity(),
            translation: axis * distance,
        }
    }

    /// Create a translation by `axis` itself (distance 1)
    pub fn translation_along(axis: &Vector3<T>) -> Self {
        Self::translation(axis, T::one())
    }

    /// Get the inverse transformation.
    ///
    /// The rotation is orthogonal, so its inverse is its transpose.
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.transpose();
        let translation = -(rotation * self.translation);
        Self { rotation, translation }
    }

    /// Compose with another transformation: `other` is applied first, then `self`.
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            rotation: self.rotation * other.rotation,
            translation: self.rotation * other.translation + self.translation,
        }
    }

    /// Apply to a free vector: rotation only
    pub fn transform_vector(&self, vector: &Vector3<T>) -> Vector3<T> {
        self.rotation * vector
    }

    /// Apply to a point given by its coordinates: rotation then translation
    pub fn transform_point(&self, point: &Vector3<T>) -> Vector3<T> {
        self.rotation * point + self.translation
    }

    /// Apply [`RigidTransform::transform_vector`] to every column of `vectors`
    pub fn transform_vectors(&self, vectors: &Points3<T>) -> Points3<T> {
        self.map_columns(vectors, |v| self.transform_vector(v))
    }

    /// Apply [`RigidTransform::transform_point`] to every column of `points`
    pub fn transform_points(&self, points: &Points3<T>) -> Points3<T> {
        self.map_columns(points, |p| self.transform_point(p))
    }

    fn map_columns<F>(&self, cols: &Points3<T>, f: F) -> Points3<T>
    where
        F: Fn(&Vector3<T>) -> Vector3<T>,
    {
        let mut result = Points3::zeros(cols.ncols());
        for (mut dst, src) in result.column_iter_mut().zip(cols.column_iter()) {
            dst.copy_from(&f(&src.clone_owned()));
        }
        result
    }

    /// Get a copy of the rotation matrix
    pub fn rotation_matrix(&self) -> Matrix3<T> {
        self.rotation
    }

    /// Get a copy of the translation vector
    pub fn translation_vector(&self) -> Vector3<T> {
        self.translation
    }

    /// The equivalent 4x4 homogeneous matrix `[[R, t], [0, 0, 0, 1]]`
    pub fn to_homogeneous(&self) -> Matrix4<T> {
        let mut matrix = Matrix4::identity();
        matrix.fixed_view_mut::<3, 3>(0, 0).copy_from(&self.rotation);
        matrix.fixed_view_mut::<3, 1>(0, 3).copy_from(&self.translation);
        matrix
    }

    /// Import a homogeneous matrix, checking that it describes a rigid transform.
    ///
    /// The bottom row must be `[0, 0, 0, 1]` and the top-left block a proper
    /// rotation, both within `epsilon`.
    pub fn from_homogeneous(matrix: &Matrix4<T>, epsilon: T) -> Result<Self> {
        let bottom = matrix.fixed_view::<1, 4>(3, 0);
        let expected = [T::zero(), T::zero(), T::zero(), T::one()];
        if bottom.iter().zip(expected).any(|(&a, b)| (a - b).abs() > epsilon) {
            return Err(TransformError::NotAffine {
                bottom_row: format!("[{:?}, {:?}, {:?}, {:?}]", bottom[0], bottom[1], bottom[2], bottom[3]),
            });
        }

        let rotation = matrix.fixed_view::<3, 3>(0, 0).into_owned();
        if !is_rotation_matrix(&rotation, epsilon) {
            return Err(TransformError::NotProperRotation);
        }

        Ok(Self {
            rotation,
            translation: matrix.fixed_view::<3, 1>(0, 3).into_owned(),
        })
    }

    /// Check if this is approximately the identity transformation
    pub fn is_identity(&self, epsilon: T) -> bool {
        (self.rotation - Matrix3::identity()).norm() < epsilon && self.translation.norm() < epsilon
    }
}

impl<T: RealField + Copy> Default for RigidTransform<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: RealField + Copy> Mul for RigidTransform<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(&rhs)
    }
}

impl<'a, T: RealField + Copy> Mul<&'a RigidTransform<T>> for &'a RigidTransform<T> {
    type Output = RigidTransform<T>;

    fn mul(self, rhs: &'a RigidTransform<T>) -> Self::Output {
        self.compose(rhs)
    }
}

impl<T: RealField + Copy> MulAssign for RigidTransform<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.compose(&rhs);
    }
}

impl<'a, T: RealField + Copy> MulAssign<&'a RigidTransform<T>> for RigidTransform<T> {
    fn mul_assign(&mut self, rhs: &'a RigidTransform<T>) {
        *self = self.compose(rhs);
    }
}

impl<T: RealField + Copy> Mul<Vector3<T>> for RigidTransform<T> {
    type Output = Vector3<T>;

    fn mul(self, rhs: Vector3<T>) -> Self::Output {
        self.transform_vector(&rhs)
    }
}

impl<T: RealField + Copy> Mul<Point3<T>> for RigidTransform<T> {
    type Output = Point3<T>;

    fn mul(self, rhs: Point3<T>) -> Self::Output {
        Point3::from(self.transform_point(&rhs.coords))
    }
}

impl<'a, T: RealField + Copy> Mul<&'a Points3<T>> for RigidTransform<T> {
    type Output = Points3<T>;

    fn mul(self, rhs: &'a Points3<T>) -> Self::Output {
        self.transform_vectors(rhs)
    }
}

/// `t ^ p` treats the coordinates `p` as a point
impl<T: RealField + Copy> BitXor<Vector3<T>> for RigidTransform<T> {
    type Output = Vector3<T>;

    fn bitxor(self, rhs: Vector3<T>) -> Self::Output {
        self.transform_point(&rhs)
    }
}

impl<'a, T: RealField + Copy> BitXor<&'a Points3<T>> for RigidTransform<T> {
    type Output = Points3<T>;

    fn bitxor(self, rhs: &'a Points3<T>) -> Self::Output {
        self.transform_points(rhs)
    }
}

impl<T: RealField + Copy> From<RigidTransform<T>> for Matrix4<T> {
    fn from(transform: RigidTransform<T>) -> Self {
        transform.to_homogeneous()
    }
}

impl<T: RealField + Copy> TryFrom<Matrix4<T>> for RigidTransform<T> {
    type Error = TransformError;

    fn try_from(matrix: Matrix4<T>) -> Result<Self> {
        let epsilon = <T as AbsDiffEq>::default_epsilon() * convert::<f64, T>(1000.0);
        Self::from_homogeneous(&matrix, epsilon)
    }
}

impl<T: RealField + Copy> From<IsometryMatrix3<T>> for RigidTransform<T> {
    fn from(isometry: IsometryMatrix3<T>) -> Self {
        Self {
            rotation: isometry.rotation.into_inner(),
            translation: isometry.translation.vector,
        }
    }
}

impl<T: RealField + Copy> From<RigidTransform<T>> for IsometryMatrix3<T> {
    fn from(transform: RigidTransform<T>) -> Self {
        IsometryMatrix3::from_parts(
            Translation3::from(transform.translation),
            Rotation3::from_matrix_unchecked(transform.rotation),
        )
    }
}

impl<T: RealField + Copy> AbsDiffEq for RigidTransform<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        <T as AbsDiffEq>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.rotation.abs_diff_eq(&other.rotation, epsilon)
            && self.translation.abs_diff_eq(&other.translation, epsilon)
    }
}

impl<T: RealField + Copy> RelativeEq for RigidTransform<T> {
    fn default_max_relative() -> T {
        <T as RelativeEq>::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.rotation.relative_eq(&other.rotation, epsilon, max_relative)
            && self.translation.relative_eq(&other.translation, epsilon, max_relative)
    }
}

impl<T: RealField + Copy> UlpsEq for RigidTransform<T> {
    fn default_max_ulps() -> u32 {
        <T as UlpsEq>::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.rotation.ulps_eq(&other.rotation, epsilon, max_ulps)
            && self.translation.ulps_eq(&other.translation, epsilon, max_ulps)
    }
}

/// Debug rendering: the rotation rows with the translation appended on the right
impl<T: RealField + Copy + fmt::Display> fmt::Display for RigidTransform<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.rotation;
        for i in 0..3 {
            writeln!(
                f,
                "| {:10.5}  {:10.5}  {:10.5} |{:10.5}",
                r[(i, 0)],
                r[(i, 1)],
                r[(i, 2)],
                self.translation[i]
            )?;
        }
        Ok(())
    }
}
