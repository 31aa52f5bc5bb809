use math::Quaternion;

use super::device::*;
use crate::*;

#[test]
fn decodes_quaternion_and_acceleration() {
    let packet = packet([0.5, -0.5, 0.25, -0.75], [8192, -8192, 123]);
    let decoded = decode(&packet).unwrap();

    println!("{:?}", decoded);
    assert_eq!(decoded.quaternion, Quaternion::new(0.5, -0.5, 0.25, -0.75));
    assert_eq!(decoded.accel, [8192, -8192, 123]);
}

#[test]
fn reads_the_high_word_of_each_field() {
    let mut packet = packet(IDENTITY, [0, 0, 0]);
    // Low words and the gyro block must not leak into the result.
    for offset in [2, 6, 10, 14, 16, 20, 24, 30, 34, 38] {
        packet[offset] = 0x7F;
        packet[offset + 1] = 0xFF;
    }
    let decoded = decode(&packet).unwrap();

    assert_eq!(decoded.quaternion, Quaternion::identity());
    assert_eq!(decoded.accel, [0, 0, 0]);
}

#[test]
fn z_component_uses_bytes_12_and_13() {
    let mut packet = vec![0u8; 42];
    packet[12] = 0x40;
    packet[11] = 0x7F;
    let decoded = decode(&packet).unwrap();
    assert_eq!(decoded.quaternion.z, 1.0);
    assert_eq!(decoded.quaternion.y, 0.0);
}

#[test]
fn short_packets_are_not_decoded() {
    assert_eq!(decode(&[0u8; 37]), None);
    assert!(decode(&[0u8; 38]).is_some());
}
