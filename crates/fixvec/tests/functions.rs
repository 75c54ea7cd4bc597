use std::f64::consts::PI;

use approx::assert_abs_diff_eq;
use fixvec::{functions::*, FixedVector, Vector2D, Vector3D};

fn init_logger() {
    env_logger::builder()
        .filter_module("fixvec", log::LevelFilter::Trace)
        .is_test(true)
        .try_init()
        .ok();
}

#[test]
fn make_vector_from_array() {
    let v = make_vector([1.0, 2.0, 3.0, 5.0, 2.0]);
    assert_eq!(v, FixedVector::from([1.0, 2.0, 3.0, 5.0, 2.0]));

    let v2 = make_vector([1.0, 5.0]);
    assert_eq!(v2, Vector2D::new(1.0, 5.0));
}

#[test]
fn make_vector_from_slice() {
    init_logger();

    let values = vec![1.0, 2.0, 3.0, 5.0, 2.0];
    let v: FixedVector<f64, 3> = make_vector_from(values.iter().copied());
    assert_eq!(v, [1.0, 2.0, 3.0]);

    let v2: Vector2D<f64> = make_vector_from([1.0]);
    assert_eq!(v2, Vector2D::new(1.0, 0.0));
}

#[test]
fn make_vector_exact_length() {
    let v: FixedVector<f64, 5> = make_vector_from([3.0, 5.0, 2.0, 3.5, 6.0]);
    assert_eq!(v[0], 3.0);
    assert_eq!(v[1], 5.0);
    assert_eq!(v[2], 2.0);
    assert_eq!(v[3], 3.5);
    assert_eq!(v[4], 6.0);
}

#[test]
fn make_vector_too_few() {
    init_logger();

    let v: FixedVector<f64, 5> = make_vector_from([3.0, 5.0, 2.0]);
    assert_eq!(v, [3.0, 5.0, 2.0, 0.0, 0.0]);
}

#[test]
fn make_vector_too_many() {
    init_logger();

    let v: FixedVector<f64, 5> = make_vector_from([3.0, 5.0, 2.0, 3.5, 6.0, 39.0, 2.0, 6.0]);
    assert_eq!(v, [3.0, 5.0, 2.0, 3.5, 6.0]);
}

#[test]
fn dot_2d() {
    let lhs = Vector2D::new(2.0, 5.0);
    let rhs = Vector2D::new(-3.0, -4.0);
    assert_eq!(dot(lhs, rhs), -26.0);
    assert_eq!(dot(rhs, lhs), dot(lhs, rhs));
}

#[test]
fn dot_3d() {
    let lhs = Vector3D::new(2.0, 5.0, 6.0);
    let rhs = Vector3D::new(-3.0, -4.0, 2.0);
    assert_eq!(dot(lhs, rhs), -14.0);
    assert_eq!(dot(rhs, lhs), dot(lhs, rhs));
}

#[test]
fn cross_product() {
    let v1 = Vector3D::new(2.0, 3.0, 5.0);
    let v2 = Vector3D::new(1.0, 2.0, 3.0);
    let res = Vector3D::new(-1.0, -1.0, 1.0);
    assert_eq!(cross(v1, v2), res);
    assert_eq!(cross(v2, v1), -res);
}

#[test]
fn magnitude() {
    assert_abs_diff_eq!(magn(Vector2D::new(4.612f64, -3.322)), 5.684, epsilon = 1e-3);
    assert_abs_diff_eq!(magn(Vector3D::new(4.612f64, -3.322, 2.552)), 6.230, epsilon = 1e-3);
}

#[test]
fn normalize_2d() {
    let v = normalize(Vector2D::new(3.0f64, 4.0));
    assert_eq!(v, Vector2D::new(0.6, 0.8));
}

#[test]
fn normalize_3d() {
    let v = normalize(Vector3D::new(2.0f64, -3.0, -6.0));
    assert_eq!(v, Vector3D::new(2.0 / 7.0, -3.0 / 7.0, -6.0 / 7.0));
}

#[test]
fn get_2d() {
    let v = Vector2D::new(3.0, 5.0);
    assert_eq!(x(&v), 3.0);
    assert_eq!(y(&v), 5.0);
}

#[test]
fn set_2d() {
    let mut v = Vector2D::<f64>::default();
    set_x(&mut v, 3.0);
    set_y(&mut v, 5.0);
    assert_eq!(x(&v), 3.0);
    assert_eq!(y(&v), 5.0);
}

#[test]
fn get_3d() {
    let v = Vector3D::new(3.0, 5.0, 6.0);
    assert_eq!(x(&v), 3.0);
    assert_eq!(y(&v), 5.0);
    assert_eq!(z(&v), 6.0);
}

#[test]
fn set_3d() {
    let mut v = Vector3D::<f64>::default();
    set_x(&mut v, 3.0);
    set_y(&mut v, 5.0);
    set_z(&mut v, 6.0);
    assert_eq!(x(&v), 3.0);
    assert_eq!(y(&v), 5.0);
    assert_eq!(z(&v), 6.0);
}

#[test]
fn angle_2d() {
    let cases: [(f64, f64, f64); 4] = [
        (4.5, 2.3, 0.472),
        (-3.4, 5.44, 2.129),
        (-0.35, -4.44, -1.649),
        (6.2, -3.0, -0.451),
    ];
    for (vx, vy, expected) in cases {
        assert_abs_diff_eq!(angle(&Vector2D::new(vx, vy)), expected, epsilon = 1e-3);
    }
}

#[test]
fn direction_angles_3d() {
    let v = Vector3D::new(-3.0f64, 2.0, -6.0);
    assert_abs_diff_eq!(alpha(&v), 2.014, epsilon = 1e-3);
    assert_abs_diff_eq!(beta(&v), 1.281, epsilon = 1e-3);
    assert_abs_diff_eq!(gamma(&v), 2.600, epsilon = 1e-3);
}

#[test]
fn rotate_2d() {
    let cases: [((f64, f64), f64, (f64, f64)); 8] = [
        ((1.0, 0.0), PI / 6.0, (0.866, 0.5)),
        ((1.0, 1.0), PI / 4.0, (0.0, 1.414)),
        ((1.732, 1.0), PI / 3.0, (0.0, 2.0)),
        ((0.0, 1.0), PI / 4.0, (-0.707, 0.707)),
        ((-1.0, 0.0), PI / 3.0, (-0.5, -0.866)),
        ((-0.5, -0.866), PI / 6.0, (0.0, -1.0)),
        ((0.0, -1.0), PI / 4.0, (0.707, -0.707)),
        ((0.707, -0.707), PI / 4.0, (1.0, 0.0)),
    ];
    for (input, radians, expected) in cases {
        let rotated = rotate(Vector2D::from(input), radians);
        assert_abs_diff_eq!(rotated, Vector2D::from(expected), epsilon = 1e-3);
    }
}

type Rotation3D = ((f64, f64, f64), f64, (f64, f64, f64));

fn check_rotations(rotation: fn(Vector3D<f64>, f64) -> Vector3D<f64>, cases: &[Rotation3D]) {
    for &(input, radians, expected) in cases {
        let rotated = rotation(Vector3D::from(input), radians);
        assert_abs_diff_eq!(rotated, Vector3D::from(expected), epsilon = 1e-3);
    }
}

#[test]
fn alpha_rotation() {
    check_rotations(
        rotate_alpha,
        &[
            ((3.0, 4.0, 0.0), PI / 2.0, (3.0, 0.0, 4.0)),
            ((3.0, 4.0, 0.0), -PI / 2.0, (3.0, 0.0, -4.0)),
            ((3.0, 2.8284, 2.8284), PI / 4.0, (3.0, 0.0, 4.0)),
            ((3.0, 2.8284, 2.8284), -PI / 4.0, (3.0, 4.0, 0.0)),
        ],
    );
}

#[test]
fn beta_rotation() {
    check_rotations(
        rotate_beta,
        &[
            ((4.0, 3.0, 0.0), PI / 2.0, (0.0, 3.0, -4.0)),
            ((4.0, 3.0, 0.0), -PI / 2.0, (0.0, 3.0, 4.0)),
            ((2.8284, 3.0, 2.8284), PI / 4.0, (4.0, 3.0, 0.0)),
            ((2.8284, 3.0, 2.8284), -PI / 4.0, (0.0, 3.0, 4.0)),
        ],
    );
}

#[test]
fn gamma_rotation() {
    check_rotations(
        rotate_gamma,
        &[
            ((1.0, 0.0, 3.0), PI / 6.0, (0.866, 0.5, 3.0)),
            ((1.0, 1.0, 3.0), PI / 4.0, (0.0, 1.414, 3.0)),
            ((1.732, 1.0, 3.0), PI / 3.0, (0.0, 2.0, 3.0)),
            ((0.0, 1.0, 3.0), PI / 4.0, (-0.707, 0.707, 3.0)),
            ((-1.0, 0.0, 3.0), PI / 3.0, (-0.5, -0.866, 3.0)),
            ((-0.5, -0.866, 3.0), PI / 6.0, (0.0, -1.0, 3.0)),
            ((0.0, -1.0, 3.0), PI / 4.0, (0.707, -0.707, 3.0)),
            ((0.707, -0.707, 3.0), PI / 4.0, (1.0, 0.0, 3.0)),
        ],
    );
}

#[test]
fn is_zero_vector() {
    let v: FixedVector<f64, 5> = make_vector_from([2.0, 5.0, 3.0]);
    assert!(!is_zero(&v));

    let v2: FixedVector<f64, 5> = make_vector_from([0.0]);
    assert!(is_zero(&v2));
}

#[test]
fn is_zero_zero_dimensions() {
    assert!(is_zero(&FixedVector::<f64, 0>::default()));
}
