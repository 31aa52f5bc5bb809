use core::f32::consts::PI;

use crate::*;

#[test]
fn test_named_accessors() {
    let euler = EulerAngle::from_angles(10.0, 20.0, 30.0);
    assert_eq!((euler.psi(), euler.theta(), euler.phi()), (10.0, 20.0, 30.0));

    let ypr = YawPitchRoll::from_angles(-1.0, -2.0, -3.0);
    assert_eq!((ypr.yaw(), ypr.pitch(), ypr.roll()), (-1.0, -2.0, -3.0));
}

#[test]
fn test_rotate_keeps_kind() {
    let q = Quaternion::from_axis_angle(&Vector::new(0.0, 0.0, 1.0), PI / 2.0);
    let a = Acceleration::new(1.0, 0.0, 0.0);
    let rotated: Acceleration = a.rotate(&q);
    assert!(rotated.approx_eq(&Acceleration::new(0.0, 1.0, 0.0), 0.0001));
}

#[test]
fn test_cross_kind_arithmetic_goes_through_vector() {
    let accel = Acceleration::new(0.1, 0.2, 1.3);
    let gravity = Gravity::new(0.0, 0.0, 1.0);
    let linear = Acceleration::from(accel.vector() - gravity.vector());
    assert!(linear.approx_eq(&Acceleration::new(0.1, 0.2, 0.3), 1e-6));
}

#[test]
fn test_normalize_and_magnitude() {
    let g = Gravity::new(0.0, 3.0, 4.0);
    assert_eq!(g.magnitude(), 5.0);
    assert!(g.normalize().approx_eq(&Gravity::new(0.0, 0.6, 0.8), 1e-6));
    assert_eq!(Rotation::zero().to_array(), [0.0; 3]);
}
