use math::{Acceleration, EulerAngle, Gravity, Quaternion, Rotation, YawPitchRoll};

use crate::{derive, DerivedCache};

/// The last accepted sensor sample together with everything derived from it.
///
/// Derived quantities are computed on first access and then kept until the next accepted sample,
/// which is why the accessors take `&mut self`. They always return copies.
///
#[derive(Debug, Clone)]
pub struct Attitude
{
    quaternion: Quaternion,
    raw_acceleration: [i16; 3],
    raw_angular_rate: [i16; 3],
    cache: DerivedCache,
}

impl Attitude
{
    pub(crate) fn new() -> Self {
        Attitude {
            quaternion: Quaternion::identity(),
            raw_acceleration: [0; 3],
            raw_angular_rate: [0; 3],
            cache: DerivedCache::default(),
        }
    }

    /// Replaces the sample as a whole and drops every derived value.
    ///
    pub(crate) fn accept(&mut self, quaternion: Quaternion, raw_acceleration: [i16; 3], raw_angular_rate: [i16; 3]) {
        self.quaternion = quaternion;
        self.raw_acceleration = raw_acceleration;
        self.raw_angular_rate = raw_angular_rate;
        self.cache.invalidate_all();
    }

    pub fn quaternion(&self) -> Quaternion {
        self.quaternion
    }

    pub fn raw_acceleration(&self) -> [i16; 3] {
        self.raw_acceleration
    }

    pub fn raw_angular_rate(&self) -> [i16; 3] {
        self.raw_angular_rate
    }

    #[cfg(test)]
    pub(crate) fn cache(&self) -> &DerivedCache {
        &self.cache
    }

    /// Angular rate in degrees per second.
    pub fn rotation(&mut self) -> Rotation {
        let raw = self.raw_angular_rate;
        self.cache.rotation.get_or_compute(|| derive::rotation(raw))
    }

    pub fn euler_angles(&mut self) -> EulerAngle {
        let q = self.quaternion;
        self.cache.euler.get_or_compute(|| derive::euler_angles(&q))
    }

    pub fn gravity(&mut self) -> Gravity {
        let q = self.quaternion;
        self.cache.gravity.get_or_compute(|| derive::gravity(&q))
    }

    pub fn yaw_pitch_roll(&mut self) -> YawPitchRoll {
        if let Some(ypr) = self.cache.yaw_pitch_roll.get() {
            return ypr;
        }
        let q = self.quaternion;
        let gravity = self.gravity();
        self.cache.yaw_pitch_roll.get_or_compute(|| derive::yaw_pitch_roll(&q, &gravity))
    }

    /// Acceleration without gravity in the device frame, in g.
    pub fn linear_acceleration(&mut self) -> Acceleration {
        if let Some(linear) = self.cache.linear_acceleration.get() {
            return linear;
        }
        let raw = self.raw_acceleration;
        let gravity = self.gravity();
        self.cache.linear_acceleration.get_or_compute(|| derive::linear_acceleration(raw, &gravity))
    }

    /// Acceleration without gravity in the world frame, in g.
    pub fn world_acceleration(&mut self) -> Acceleration {
        if let Some(world) = self.cache.world_acceleration.get() {
            return world;
        }
        let q = self.quaternion;
        let linear = self.linear_acceleration();
        self.cache.world_acceleration.get_or_compute(|| derive::world_acceleration(&q, &linear))
    }
}
