//! Basic usage example for spatial
//!
//! This example demonstrates fundamental operations:
//! - Building rotations and translations
//! - Composing and inverting transforms
//! - Exporting the homogeneous matrix

use spatial_core::{Matrix4, RigidTransformf, Vector3f};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("spatial Basic Usage Example");
    println!("===========================");

    let angle = 90.0;
    let delta = 4.0;

    // Rotate about each axis, then translate along each axis.
    let axes = [("X", Vector3f::x()), ("Y", Vector3f::y()), ("Z", Vector3f::z())];
    for (rot_name, rot_axis) in &axes {
        println!("\nRotation about {rot_name}:");
        for (trans_name, trans_axis) in &axes {
            let mut t = RigidTransformf::rotation(rot_axis, angle);
            t *= RigidTransformf::translation(trans_axis, delta);

            let rotated = t.rotation_matrix() * (trans_axis * delta);
            anyhow::ensure!(
                rotated == t.translation_vector(),
                "rotation about {rot_name} then translation along {trans_name} does not match"
            );
            println!(
                "- translate along {trans_name}: t = [{}, {}, {}]",
                rotated.x, rotated.y, rotated.z
            );
        }
    }

    let t = RigidTransformf::rotation(&Vector3f::z(), 30.0) * RigidTransformf::translation(&Vector3f::x(), 2.0);
    println!("\nComposed transform:\n{t}");
    println!("Inverse:\n{}", t.inverse());

    let m: Matrix4<f32> = t.into();
    println!("Homogeneous matrix:{m}");

    let back = RigidTransformf::try_from(m)?;
    log::info!("round trip through the homogeneous matrix: {:?}", back);
    println!("Identity after t * t^-1: {}", (t * t.inverse()).is_identity(1e-5));

    println!("\nExample completed successfully!");
    Ok(())
}
