//! Small geometry helpers built on top of `fixvec`.
//!
//! Run with `RUST_LOG=trace` to see the library's own log output as well.

use fixvec::{FixedVector, Vector2D, Vector3D};
use log::LevelFilter;

fn init_logger() {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Debug)
        .filter(Some("fixvec"), LevelFilter::Info)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Returns the angle between two vectors, in radians.
fn angle_between<const N: usize>(v1: FixedVector<f64, N>, v2: FixedVector<f64, N>) -> f64 {
    (v1.dot(v2) / (v1.magnitude() * v2.magnitude())).acos()
}

fn is_orthogonal(v1: Vector2D<f64>, v2: Vector2D<f64>) -> bool {
    v1.dot(v2) == 0.0
}

/// Decomposes `v` into a part parallel to `w` and a part orthogonal to it.
fn decompose(v: Vector2D<f64>, w: Vector2D<f64>) -> (Vector2D<f64>, Vector2D<f64>) {
    let parallel = w * (v.dot(w) / (w.magnitude() * w.magnitude()));
    let orthogonal = v - parallel;
    (parallel, orthogonal)
}

/// Returns the area of the parallelogram spanned by `v` and `w`.
fn area_parallelogram(v: Vector3D<f64>, w: Vector3D<f64>) -> f64 {
    v.cross(w).magnitude()
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let a = Vector2D::new(3.0, 4.0);
    let b = Vector2D::new(-4.0, 3.0);
    log::info!("angle between {a} and {b}: {:.4} rad", angle_between(a, b));
    log::info!("{a} and {b} orthogonal: {}", is_orthogonal(a, b));

    let (parallel, orthogonal) = decompose(Vector2D::new(2.0, 1.0), Vector2D::X);
    log::info!("decomposed along X: {parallel} + {orthogonal}");

    let v = Vector3D::new(1.0, 0.0, 0.0);
    let w = Vector3D::new(1.0, 2.0, 0.0);
    log::info!("angle between {v} and {w}: {:.4} rad", angle_between(v, w));
    log::info!("parallelogram spanned by {v} and {w}: area {}", area_parallelogram(v, w));

    let padded = FixedVector::<f64, 4>::from_values([1.0, 2.0]);
    log::info!("padded: {padded}, last element {}", padded.at(3)?);

    if let Err(e) = padded.at(4) {
        log::warn!("{e}");
    }

    Ok(())
}
