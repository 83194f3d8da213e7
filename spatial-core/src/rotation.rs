//! Axis-angle rotation helpers
//!
//! Rotations are built from a unit axis and an angle in degrees with the
//! closed form `R = u·uᵗ + cos(φ)·(I − u·uᵗ) + sin(φ)·[u]ₓ`
//! (Faux & Pratt, "Computational geometry for design and manufacture").

use nalgebra::{convert, Matrix3, RealField, Vector3};

/// Convert an angle from degrees to radians
pub fn radians<T: RealField + Copy>(degrees: T) -> T {
    degrees * T::pi() / convert::<f64, T>(180.0)
}

/// Sine and cosine of an angle given in degrees.
///
/// The angles 0, 90, 180 and 270 are matched by exact equality and return
/// exact literals, so rotations by quarter turns carry no round-off.
pub fn sin_cos_degrees<T: RealField + Copy>(angle: T) -> (T, T) {
    let zero = T::zero();
    let one = T::one();

    if angle == zero {
        (zero, one)
    } else if angle == convert::<f64, T>(90.0) {
        (one, zero)
    } else if angle == convert::<f64, T>(180.0) {
        (zero, -one)
    } else if angle == convert::<f64, T>(270.0) {
        (-one, zero)
    } else {
        let phi = radians(angle);
        (phi.sin(), phi.cos())
    }
}

/// Cross-product matrix `[u]ₓ`, so that `skew(u) * v == u.cross(&v)`
pub fn skew<T: RealField + Copy>(u: &Vector3<T>) -> Matrix3<T> {
    let zero = T::zero();
    Matrix3::new(
        zero, -u[2], u[1],
        u[2], zero, -u[0],
        -u[1], u[0], zero,
    )
}

/// Rotation matrix for a rotation of `angle_degrees` about `axis`.
///
/// `axis` must have unit norm. Any other axis produces a matrix that is not
/// orthogonal; this is not checked.
pub fn axis_angle_matrix<T: RealField + Copy>(axis: &Vector3<T>, angle_degrees: T) -> Matrix3<T> {
    let (s, c) = sin_cos_degrees(angle_degrees);

    let uut = axis * axis.transpose();
    let u = skew(axis);

    uut + (Matrix3::identity() - uut) * c + u * s
}

/// Check that `m` is orthogonal with determinant +1, within `epsilon`.
pub fn is_rotation_matrix<T: RealField + Copy>(m: &Matrix3<T>, epsilon: T) -> bool {
    let orthogonal = (m * m.transpose() - Matrix3::identity()).norm() <= epsilon;
    orthogonal && (m.determinant() - T::one()).abs() <= epsilon
}
