use core::marker::PhantomData;
use crate::*;

/// Zero sized tags that give a [`Triple`] its meaning. They only exist at the type level so two
/// quantities with different meanings can not be mixed up by accident (subtracting an Euler angle
/// from an acceleration is a compile error), while all of them share one data layout.
///
pub mod kind {
    /// Angular rate around the x, y and z axes in degrees per second.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Rotation;

    /// Euler angles (psi, theta, phi) in degrees.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Euler;

    /// Direction of gravity in the device frame, in g.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Gravity;

    /// Yaw, pitch and roll in degrees.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct YawPitchRoll;

    /// Acceleration in g.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Acceleration;
}

/// Three floats tagged with what they mean.
///
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Triple<K>
{
    pub x: f32,
    pub y: f32,
    pub z: f32,
    kind: PhantomData<K>,
}

pub type Rotation = Triple<kind::Rotation>;
pub type EulerAngle = Triple<kind::Euler>;
pub type Gravity = Triple<kind::Gravity>;
pub type YawPitchRoll = Triple<kind::YawPitchRoll>;
pub type Acceleration = Triple<kind::Acceleration>;

impl<K> Triple<K>
{
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Triple { x, y, z, kind: PhantomData }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Drops the tag, use this to do arithmetic between quantities of different kinds.
    ///
    #[inline]
    pub const fn vector(&self) -> Vector {
        Vector::new(self.x, self.y, self.z)
    }

    pub fn magnitude(&self) -> f32 {
        self.vector().magnitude()
    }

    pub fn normalize(&self) -> Self {
        Self::from(self.vector().normalize())
    }

    /// Rotates the triple with the given quaternion, see [`Quaternion::rotate`].
    ///
    pub fn rotate(&self, q: &Quaternion) -> Self {
        Self::from(q.rotate(&self.vector()))
    }

    pub fn approx_eq(&self, other: &Self, tol: f32) -> bool {
        self.vector().approx_eq(&other.vector(), tol)
    }

    pub const fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl<K> From<Vector> for Triple<K> {
    fn from(v: Vector) -> Self {
        Triple::new(v.x, v.y, v.z)
    }
}

impl<K> From<[f32; 3]> for Triple<K> {
    fn from(values: [f32; 3]) -> Self {
        Triple::new(values[0], values[1], values[2])
    }
}

impl EulerAngle
{
    pub const fn from_angles(psi: f32, theta: f32, phi: f32) -> Self {
        Self::new(psi, theta, phi)
    }

    #[inline]
    pub const fn psi(&self) -> f32 { self.x }

    #[inline]
    pub const fn theta(&self) -> f32 { self.y }

    #[inline]
    pub const fn phi(&self) -> f32 { self.z }
}

impl YawPitchRoll
{
    pub const fn from_angles(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self::new(yaw, pitch, roll)
    }

    #[inline]
    pub const fn yaw(&self) -> f32 { self.x }

    #[inline]
    pub const fn pitch(&self) -> f32 { self.y }

    #[inline]
    pub const fn roll(&self) -> f32 { self.z }
}
