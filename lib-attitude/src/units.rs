//! Fixed point scales of the MPU6050 and its DMP firmware.

/// Raw accelerometer counts per g at the +-2g full scale range.
pub const ACCELERATION_UNIT: f32 = 16384.0;

/// Raw gyroscope counts per degree per second at the +-250 deg/s full scale range.
pub const ROTATION_UNIT: f32 = 131.0;

/// DMP quaternion components are Q14 fixed point.
pub const QUATERNION_UNIT: f32 = 16384.0;

/// Accelerometer counts per g as they appear in the DMP packet.
pub const GRAVITY_UNIT: f32 = 8192.0;

/// Temperature sensor counts per degree Celsius.
pub const TEMPERATURE_UNIT: f32 = 340.0;

/// Raw temperature reading at 0 degrees Celsius: -512 at 35 degrees, 340 counts per degree.
pub const TEMPERATURE_OFFSET: f32 = -12412.0;

#[inline]
pub fn temperature_celsius(raw: i16) -> f32 {
    (raw as f32 - TEMPERATURE_OFFSET) / TEMPERATURE_UNIT
}
