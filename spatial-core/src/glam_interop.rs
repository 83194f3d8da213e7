//! glam interoperability
//!
//! This module provides conversions between rigid transforms and glam's
//! column-major homogeneous matrices, for handing transforms to renderers.

use glam::{DMat4, Mat4};
use nalgebra::Matrix4;

use crate::transform::{RigidTransformd, RigidTransformf};
use crate::Result;

impl From<RigidTransformf> for Mat4 {
    fn from(transform: RigidTransformf) -> Self {
        Mat4::from_cols_slice(transform.to_homogeneous().as_slice())
    }
}

impl From<RigidTransformd> for DMat4 {
    fn from(transform: RigidTransformd) -> Self {
        DMat4::from_cols_slice(transform.to_homogeneous().as_slice())
    }
}

impl RigidTransformf {
    /// Convert a glam matrix, checking that it is a rigid transform
    ///
    /// # Example
    ///
    /// ```
    /// use spatial_core::RigidTransformf;
    ///
    /// let m = glam::Mat4::from_rotation_z(0.3) * glam::Mat4::from_translation(glam::Vec3::X);
    /// let t = RigidTransformf::from_glam_mat4(&m, 1e-5).unwrap();
    /// assert!((glam::Mat4::from(t) - m).abs_diff_eq(glam::Mat4::ZERO, 1e-6));
    /// ```
    pub fn from_glam_mat4(matrix: &Mat4, epsilon: f32) -> Result<Self> {
        Self::from_homogeneous(&Matrix4::from_column_slice(&matrix.to_cols_array()), epsilon)
    }
}

impl RigidTransformd {
    /// Convert a double precision glam matrix, checking that it is a rigid transform
    pub fn from_glam_dmat4(matrix: &DMat4, epsilon: f64) -> Result<Self> {
        Self::from_homogeneous(&Matrix4::from_column_slice(&matrix.to_cols_array()), epsilon)
    }
}
