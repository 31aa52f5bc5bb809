use core::f32::consts::PI;

use math::{Acceleration, Gravity, Quaternion, Vector};

use crate::derive::*;

fn about_x(angle: f32) -> Quaternion {
    Quaternion::from_axis_angle(&Vector::new(1.0, 0.0, 0.0), angle)
}

fn about_z(angle: f32) -> Quaternion {
    Quaternion::from_axis_angle(&Vector::new(0.0, 0.0, 1.0), angle)
}

#[test]
fn identity_is_level() {
    let q = Quaternion::identity();
    let g = gravity(&q);

    assert!(g.approx_eq(&Gravity::new(0.0, 0.0, 1.0), 1e-6));
    let euler = euler_angles(&q);
    assert!(euler.approx_eq(&math::EulerAngle::zero(), 1e-6), "{:?}", euler);
    let ypr = yaw_pitch_roll(&q, &g);
    assert!(ypr.approx_eq(&math::YawPitchRoll::zero(), 1e-6), "{:?}", ypr);
}

#[test]
fn rolled_90_degrees() {
    let q = about_x(PI / 2.0);
    let g = gravity(&q);
    println!("{:?}", g);
    assert!(g.approx_eq(&Gravity::new(0.0, 1.0, 0.0), 1e-5));

    let euler = euler_angles(&q);
    assert!(libm::fabsf(euler.phi() + 90.0) < 0.01, "{:?}", euler);
    assert!(libm::fabsf(euler.psi()) < 0.01);
    assert!(libm::fabsf(euler.theta()) < 0.01);

    let ypr = yaw_pitch_roll(&q, &g);
    assert!(libm::fabsf(ypr.roll() - 90.0) < 0.01, "{:?}", ypr);
    assert!(libm::fabsf(ypr.pitch()) < 0.01);
}

#[test]
fn yaw_matches_psi() {
    let q = about_z(PI / 2.0);
    let ypr = yaw_pitch_roll(&q, &gravity(&q));
    let euler = euler_angles(&q);

    assert_eq!(ypr.yaw(), euler.psi());
    assert!(libm::fabsf(ypr.yaw() + 90.0) < 0.01, "{:?}", ypr);
}

#[test]
fn zero_gravity_has_no_tilt() {
    let ypr = yaw_pitch_roll(&Quaternion::identity(), &Gravity::zero());
    assert_eq!(ypr.pitch(), 0.0);
    assert_eq!(ypr.roll(), 0.0);
}

#[test]
fn pitch_over_the_pole_is_clamped() {
    // Norm ~1.06, close enough to be accepted but 2wy > 1.
    let q = Quaternion::new(0.75, 0.0, 0.75, 0.0);
    let euler = euler_angles(&q);
    assert!(!euler.theta().is_nan());
    assert!(libm::fabsf(euler.theta() + 90.0) < 0.01, "{:?}", euler);
}

#[test]
fn rotation_in_degrees_per_second() {
    let rate = rotation([131, -262, 13100]);
    assert!(rate.approx_eq(&math::Rotation::new(1.0, -2.0, 100.0), 1e-5));
}

#[test]
fn resting_device_has_no_linear_acceleration() {
    let g = gravity(&Quaternion::identity());
    let linear = linear_acceleration([0, 0, 8192], &g);
    assert_eq!(linear, Acceleration::zero());
}

#[test]
fn world_acceleration_rotates_counts() {
    let q = about_z(PI / 2.0);
    let g = gravity(&q);
    let linear = linear_acceleration([8192, 0, 8192], &g);
    assert!(linear.approx_eq(&Acceleration::new(1.0, 0.0, 0.0), 1e-5), "{:?}", linear);

    let world = world_acceleration(&q, &linear);
    println!("{:?}", world);
    assert!(world.approx_eq(&Acceleration::new(0.0, 1.0, 0.0), 0.001));

    // Quantized to whole counts.
    for value in world.to_array() {
        assert_eq!(libm::truncf(value * 8192.0), value * 8192.0);
    }
}

#[test]
fn world_acceleration_drops_sub_count_values() {
    let linear = Acceleration::new(0.00005, -0.00005, 0.0);
    let world = world_acceleration(&about_x(0.3), &linear);
    assert_eq!(world, Acceleration::zero());
}
