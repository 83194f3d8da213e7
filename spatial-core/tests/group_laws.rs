//! Group laws of rigid transforms on randomly drawn samples
//!
//! Generic angles go through trigonometry, so these checks use tolerances.

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spatial_core::{is_rotation_matrix, Matrix3, Points3, RigidTransformd, Vector3d};

const SAMPLES: usize = 64;
const EPS: f64 = 1e-10;

fn random_axis(rng: &mut StdRng) -> Vector3d {
    loop {
        let v = Vector3d::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let n = v.norm();
        if n > 1e-3 {
            return v / n;
        }
    }
}

fn random_transform(rng: &mut StdRng) -> RigidTransformd {
    let axis = random_axis(rng);
    let angle = rng.gen_range(-360.0..360.0);
    let shift = random_axis(rng);
    let distance = rng.gen_range(-10.0..10.0);
    RigidTransformd::rotation(&axis, angle) * RigidTransformd::translation(&shift, distance)
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5e3)
}

#[test]
fn test_identity_law() {
    let mut rng = rng();
    let id = RigidTransformd::identity();
    for _ in 0..SAMPLES {
        let t = random_transform(&mut rng);
        assert_relative_eq!(t * id, t, epsilon = EPS);
        assert_relative_eq!(id * t, t, epsilon = EPS);
    }
}

#[test]
fn test_inverse_law() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let t = random_transform(&mut rng);
        assert!((t * t.inverse()).is_identity(EPS));
        assert!((t.inverse() * t).is_identity(EPS));
        assert_relative_eq!(t.inverse().inverse(), t, epsilon = EPS);
    }
}

#[test]
fn test_associativity() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = random_transform(&mut rng);
        let b = random_transform(&mut rng);
        let c = random_transform(&mut rng);
        assert_relative_eq!((a * b) * c, a * (b * c), epsilon = EPS);
    }
}

#[test]
fn test_compose_assign_is_exact() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = random_transform(&mut rng);
        let b = random_transform(&mut rng);
        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
    }
}

#[test]
fn test_rotation_stays_orthogonal() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let axis = random_axis(&mut rng);
        let angle = rng.gen_range(-720.0..720.0);
        let r = RigidTransformd::rotation(&axis, angle).rotation_matrix();
        assert_relative_eq!(r * r.transpose(), Matrix3::identity(), epsilon = EPS);
        assert!(is_rotation_matrix(&r, EPS), "axis {axis:?}, angle {angle}");
    }

    // Composition keeps the rotation block orthogonal too.
    let t = (0..SAMPLES).fold(RigidTransformd::identity(), |acc, _| acc * random_transform(&mut rng));
    assert!(is_rotation_matrix(&t.rotation_matrix(), 1e-9));
}

#[test]
fn test_composition_acts_in_order() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = random_transform(&mut rng);
        let b = random_transform(&mut rng);
        let p = random_axis(&mut rng) * 3.0;
        assert_relative_eq!((a * b) ^ p, a ^ (b ^ p), epsilon = EPS);
        assert_relative_eq!((a * b) * p, a * (b * p), epsilon = EPS);
    }
}

#[test]
fn test_rigid_motion_preserves_distances() {
    let mut rng = rng();
    let t = random_transform(&mut rng);
    for _ in 0..SAMPLES {
        let p = random_axis(&mut rng) * 5.0;
        let q = random_axis(&mut rng) * 2.0;
        assert_relative_eq!(((t ^ p) - (t ^ q)).norm(), (p - q).norm(), epsilon = EPS);
        assert_relative_eq!((t * p).norm(), p.norm(), epsilon = EPS);
    }
}

#[test]
fn test_batch_columns_are_independent() {
    let mut rng = rng();
    let t = random_transform(&mut rng);
    let columns: Vec<Vector3d> = (0..SAMPLES).map(|_| random_axis(&mut rng) * 7.0).collect();
    let block = Points3::from_columns(columns.as_slice());

    let vectors = t.transform_vectors(&block);
    let points = t.transform_points(&block);
    assert_eq!(vectors.ncols(), SAMPLES);
    assert_eq!(points.ncols(), SAMPLES);

    for (i, col) in columns.iter().enumerate() {
        assert_eq!(vectors.column(i).clone_owned(), t.transform_vector(col));
        assert_eq!(points.column(i).clone_owned(), t.transform_point(col));
    }

    // A single column gives the same answer as the full block.
    let single = Points3::from_columns(&columns[3..4]);
    assert_eq!((t ^ &single).column(0), points.column(3));
}
