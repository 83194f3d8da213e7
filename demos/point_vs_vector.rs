//! Points and free vectors under the same transform
//!
//! A point moves with the full rotation and translation, a direction only
//! rotates. Batches of columns follow the same rules column by column.

use spatial_core::{Point3f, Points3f, RigidTransformf, Transformable, Vector3f};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let t = RigidTransformf::translation(&Vector3f::new(1.0, 0.0, 0.0), 5.0)
        * RigidTransformf::rotation(&Vector3f::z(), 90.0);
    println!("Transform:\n{t}");

    let v = Vector3f::new(1.0, 0.0, 0.0);
    println!("vector {:?} -> {:?}", v, t * v);
    println!("point  {:?} -> {:?}", v, t ^ v);

    let block = Points3f::from_columns(&[Vector3f::x(), Vector3f::y(), Vector3f::z()]);
    println!("batch as vectors:{}", t * &block);
    println!("batch as points:{}", t ^ &block);

    let mut cloud = vec![
        Point3f::new(0.0, 0.0, 0.0),
        Point3f::new(1.0, 1.0, 0.0),
        Point3f::new(0.0, 2.0, 1.0),
    ];
    cloud.transform(&t);
    for p in &cloud {
        println!("moved point: {p}");
    }

    Ok(())
}
