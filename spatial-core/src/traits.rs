//! Core traits for spatial

use nalgebra::{Point3, RealField, Vector3};

use crate::transform::RigidTransform;

/// Trait for objects that can be transformed in place
pub trait Transformable<T: RealField + Copy> {
    /// Apply a transformation to the object
    fn transform(&mut self, transform: &RigidTransform<T>);
}

/// Points move with the full rotation and translation.
impl<T: RealField + Copy> Transformable<T> for Point3<T> {
    fn transform(&mut self, transform: &RigidTransform<T>) {
        self.coords = transform.transform_point(&self.coords);
    }
}

/// Vectors are free: only the rotation applies.
impl<T: RealField + Copy> Transformable<T> for Vector3<T> {
    fn transform(&mut self, transform: &RigidTransform<T>) {
        *self = transform.transform_vector(self);
    }
}

impl<T: RealField + Copy, P: Transformable<T>> Transformable<T> for [P] {
    fn transform(&mut self, transform: &RigidTransform<T>) {
        for item in self.iter_mut() {
            item.transform(transform);
        }
    }
}

impl<T: RealField + Copy, P: Transformable<T>> Transformable<T> for Vec<P> {
    fn transform(&mut self, transform: &RigidTransform<T>) {
        self.as_mut_slice().transform(transform);
    }
}
