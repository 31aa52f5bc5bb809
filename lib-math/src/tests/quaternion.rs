use core::f32::consts::PI;

use crate::*;

#[test]
fn test_rotate_vector_90_deg_x_axis() {
    // 90 degree rotation around the X-axis.
    let rotation_quat = Quaternion::from_axis_angle(&Vector::new(1.0, 0.0, 0.0), PI / 2.0);

    // +Y in device space should end up on +Z.
    let input_vector = Vector::new(0.0, 1.0, 0.0);
    let rotated_vector = rotation_quat.rotate(&input_vector);
    let expected_vector = Vector::new(0.0, 0.0, 1.0);

    println!("{:?}", rotated_vector);
    println!("{:?}", expected_vector);

    assert!(rotated_vector.approx_eq(&expected_vector, 0.0001));
}

#[test]
fn test_rotate_then_conjugate_round_trip() {
    let cases = [
        (Vector::new(1.0, 0.0, 0.0), 0.3),
        (Vector::new(0.0, 1.0, 1.0), PI / 3.0),
        (Vector::new(-2.0, 0.5, 1.5), -1.2),
        (Vector::new(0.2, -0.7, 0.1), PI),
    ];
    let v = Vector::new(0.25, -1.5, 3.0);

    for (axis, angle) in cases {
        let q = Quaternion::from_axis_angle(&axis, angle);
        let there = q.rotate(&v);
        let back = q.conjugate().rotate(&there);

        println!("{:?} -> {:?} -> {:?}", v, there, back);
        assert!(back.approx_eq(&v, 0.0001));
    }
}

#[test]
fn test_rotation_preserves_length() {
    let q = Quaternion::from_axis_angle(&Vector::new(1.0, 2.0, 3.0), 0.77);
    let v = Vector::new(3.0, -4.0, 12.0);
    let rotated = q.rotate(&v);
    assert!(libm::fabsf(rotated.magnitude() - 13.0) < 0.0001);
}

#[test]
fn test_identity_is_neutral() {
    let q = Quaternion::new(0.5, -0.5, 0.5, 0.5);
    assert!((Quaternion::identity() * q).approx_eq(&q, 1e-6));
    assert!((q * Quaternion::identity()).approx_eq(&q, 1e-6));
    assert_eq!(Quaternion::default(), Quaternion::identity());
}

#[test]
fn test_product_with_conjugate_is_squared_magnitude() {
    let q = Quaternion::new(0.9, 0.1, -0.3, 0.2);
    let product = q * q.conjugate();
    let expected = Quaternion::new(q.magnitude_squared(), 0.0, 0.0, 0.0);
    assert!(product.approx_eq(&expected, 1e-6));
}

#[test]
fn test_normalize() {
    let q = Quaternion::new(2.0, 0.0, 0.0, 0.0).normalize();
    assert!(q.approx_eq(&Quaternion::identity(), 1e-6));
    assert!(libm::fabsf(Quaternion::new(1.0, 2.0, 3.0, 4.0).normalize().magnitude() - 1.0) < 1e-6);

    // The zero quaternion is returned unchanged instead of turning into NaNs.
    let zero = Quaternion::new(0.0, 0.0, 0.0, 0.0);
    assert_eq!(zero.normalize(), zero);
}
