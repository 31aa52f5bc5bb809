use math::Quaternion;
use mpu6050::dmp::{ACCEL_OFFSETS, MIN_PACKET_SIZE, QUATERNION_OFFSETS};

use crate::QUATERNION_UNIT;

/// The parts of a DMP packet the attitude pipeline uses.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedPacket
{
    pub quaternion: Quaternion,

    /// Accelerometer reading in raw counts, see [`crate::GRAVITY_UNIT`].
    pub accel: [i16; 3],
}

#[inline]
fn read_i16(packet: &[u8], offset: usize) -> i16 {
    i16::from_be_bytes([packet[offset], packet[offset + 1]])
}

/// Decodes a MotionApps packet, returns `None` when the packet is too short to contain all
/// fields.
///
pub fn decode(packet: &[u8]) -> Option<DecodedPacket> {
    if packet.len() < MIN_PACKET_SIZE {
        return None;
    }

    let [w, x, y, z] = QUATERNION_OFFSETS.map(|offset| read_i16(packet, offset) as f32 / QUATERNION_UNIT);
    let accel = ACCEL_OFFSETS.map(|offset| read_i16(packet, offset));

    Some(DecodedPacket {
        quaternion: Quaternion::new(w, x, y, z),
        accel,
    })
}
