#![allow(missing_docs)]
//! Behavioural tests for `Vec3`, including the 3D cross product.

use std::f32::consts::FRAC_PI_2;

use hako_math::{MathError, Vec3};

fn approx_eq(a: f32, b: f32) {
    let diff = (a - b).abs();
    assert!(diff <= 1e-6, "expected {b}, got {a} (diff {diff})");
}

#[test]
fn length_and_length_squared() {
    let v = Vec3::new(2.0, 3.0, 6.0);
    assert_eq!(v.length(), 7.0);
    assert_eq!(v.length_squared(), 49.0);
}

#[test]
fn componentwise_arithmetic() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-4.0, 5.0, 0.5);
    assert_eq!(a.add(&b), Vec3::new(-3.0, 7.0, 3.5));
    assert_eq!(a.sub(&b), Vec3::new(5.0, -3.0, 2.5));
    assert_eq!(a.scale(-1.0), a.neg());
    assert_eq!(a.add(&a.neg()), Vec3::ZERO);
}

#[test]
fn div_by_zero_scalar_is_domain_error() {
    let v = Vec3::ONE;
    assert_eq!(v.div(0.0), Err(MathError::DivisionByZero));
    assert_eq!(v.div(4.0), Ok(Vec3::new(0.25, 0.25, 0.25)));
}

#[test]
fn dot_product_is_symmetric() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(4.0, -5.0, 6.0);
    assert_eq!(a.dot(&b), 12.0);
    assert_eq!(a.dot(&b), b.dot(&a));
}

#[test]
fn cross_product_follows_right_hand_rule() {
    assert_eq!(Vec3::UNIT_X.cross(&Vec3::UNIT_Y), Vec3::UNIT_Z);
    assert_eq!(Vec3::UNIT_Y.cross(&Vec3::UNIT_Z), Vec3::UNIT_X);
    assert_eq!(Vec3::UNIT_Z.cross(&Vec3::UNIT_X), Vec3::UNIT_Y);
}

#[test]
fn cross_product_is_orthogonal_to_operands() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-2.0, 0.0, 5.0);
    let c = a.cross(&b);
    approx_eq(c.dot(&a), 0.0);
    approx_eq(c.dot(&b), 0.0);
    // Antisymmetric.
    assert_eq!(b.cross(&a), c.neg());
}

#[test]
fn angle_matches_the_2d_contract() {
    let angle = Vec3::UNIT_X.angle_to(&Vec3::UNIT_Z).unwrap();
    approx_eq(angle, FRAC_PI_2);
    assert_eq!(
        Vec3::UNIT_X.angle_to(&Vec3::ZERO),
        Err(MathError::DegenerateVector)
    );
}

#[test]
fn try_normalize_yields_unit_length() {
    let n = Vec3::new(0.0, 3.0, 4.0).try_normalize().unwrap();
    approx_eq(n.length(), 1.0);
    assert_eq!(n, Vec3::new(0.0, 0.6, 0.8));
}

#[test]
fn normalize_of_degenerate_input() {
    assert_eq!(
        Vec3::ZERO.try_normalize(),
        Err(MathError::DegenerateVector)
    );
    assert_eq!(
        Vec3::new(1e-12, -1e-12, 0.0).normalize_or_zero(),
        Vec3::ZERO
    );
}

#[test]
fn array_conversions_round_trip() {
    let v = Vec3::from([1.0, 2.0, 3.0]);
    assert_eq!((v.x(), v.y(), v.z()), (1.0, 2.0, 3.0));
    assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
}

#[test]
fn display_format_is_stable() {
    assert_eq!(Vec3::new(1.0, 2.5, -3.0).to_string(), "Vec3(1, 2.5, -3)");
}
