use crate::*;

#[test]
fn test_dot_product_orthogonal_vectors() {
    let v1 = Vector { x: 1.0, y: 0.0, z: 0.0 };
    let v2 = Vector { x: 0.0, y: 1.0, z: 0.0 };
    assert_eq!(v1.dot(&v2), 0.0);
}

#[test]
fn test_normalize_zero_vector() {
    let v = Vector::zero().normalize();
    assert!(v.approx_eq(&Vector::zero(), 1e-6));
}

#[test]
fn test_normalize_arbitrary_vector() {
    let v = Vector { x: 3.0, y: 0.0, z: -4.0 }.normalize();
    let expected = Vector { x: 0.6, y: 0.0, z: -0.8 };
    assert!(v.approx_eq(&expected, 1e-6));
}

#[test]
fn test_truncate_i16() {
    let v = Vector::new(1.9, -1.9, 40000.0);
    assert_eq!(v.truncate_i16(), [1, -1, i16::MAX]);
}

#[test]
fn test_from_raw_counts() {
    let v = Vector::from([8192i16, -16384, 0]) / 8192.0;
    assert!(v.approx_eq(&Vector::new(1.0, -2.0, 0.0), 1e-6));
}
