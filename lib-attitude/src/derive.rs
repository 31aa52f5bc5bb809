//! Formulas that turn a DMP quaternion and raw sensor counts into attitude quantities. All angles
//! are in degrees.

use math::{Acceleration, EulerAngle, Gravity, Quaternion, Rotation, Vector, YawPitchRoll, RAD_TO_DEG};

use crate::{GRAVITY_UNIT, ROTATION_UNIT};

pub fn rotation(raw_angular_rate: [i16; 3]) -> Rotation {
    Rotation::from(Vector::from(raw_angular_rate) / ROTATION_UNIT)
}

/// Heading, shared by the Euler angles (psi) and yaw.
///
pub fn heading(q: &Quaternion) -> f32 {
    RAD_TO_DEG * libm::atan2f(
        2.0 * q.x * q.y - 2.0 * q.w * q.z,
        2.0 * q.w * q.w + 2.0 * q.x * q.x - 1.0,
    )
}

pub fn euler_angles(q: &Quaternion) -> EulerAngle {
    // Slightly non-unit samples can push the sine just past 1.
    let sin_theta = (2.0 * q.x * q.z + 2.0 * q.w * q.y).clamp(-1.0, 1.0);
    let theta = -libm::asinf(sin_theta);
    let phi = libm::atan2f(
        2.0 * q.y * q.z - 2.0 * q.w * q.x,
        2.0 * q.w * q.w + 2.0 * q.z * q.z - 1.0,
    );
    EulerAngle::from_angles(heading(q), RAD_TO_DEG * theta, RAD_TO_DEG * phi)
}

pub fn gravity(q: &Quaternion) -> Gravity {
    Gravity::new(
        2.0 * (q.x * q.z - q.w * q.y),
        2.0 * (q.w * q.x + q.y * q.z),
        q.w * q.w - q.x * q.x - q.y * q.y + q.z * q.z,
    )
}

/// `atan(numerator / hypot)` that is 0 instead of NaN when both are zero.
///
fn tilt(numerator: f32, hypot: f32) -> f32 {
    if numerator == 0.0 && hypot == 0.0 {
        return 0.0;
    }
    RAD_TO_DEG * libm::atanf(numerator / hypot)
}

pub fn yaw_pitch_roll(q: &Quaternion, gravity: &Gravity) -> YawPitchRoll {
    let g = gravity;
    YawPitchRoll::from_angles(
        heading(q),
        tilt(g.x, libm::sqrtf(g.y * g.y + g.z * g.z)),
        tilt(g.y, libm::sqrtf(g.x * g.x + g.z * g.z)),
    )
}

/// Acceleration with gravity removed, still in the device frame.
///
pub fn linear_acceleration(raw_accel: [i16; 3], gravity: &Gravity) -> Acceleration {
    Acceleration::from(Vector::from(raw_accel) / GRAVITY_UNIT - gravity.vector())
}

/// Linear acceleration rotated into the world frame. The rotation happens on raw counts that are
/// truncated to i16 before and after rotating, the result therefore is quantized to 1/8192 g.
///
pub fn world_acceleration(q: &Quaternion, linear: &Acceleration) -> Acceleration {
    let counts = Vector::from((linear.vector() * GRAVITY_UNIT).truncate_i16());
    let rotated = q.rotate(&counts).truncate_i16();
    Acceleration::from(Vector::from(rotated) / GRAVITY_UNIT)
}
