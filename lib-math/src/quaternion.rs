use core::ops::{Div, Mul};
use crate::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion
{
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl Quaternion
{
    /// Create a new quaternion with the given values.
    ///
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Quaternion { w, x, y, z }
    }

    /// Returns the identity quaternion (no rotation)
    ///
    pub const fn identity() -> Self {
        Quaternion { w: 1.0, x: 0.0, y: 0.0, z: 0.0 }
    }

    /// Embeds a vector as a pure quaternion, i.e. `[0, x, y, z]`.
    ///
    pub const fn pure(vector: &Vector) -> Self {
        Quaternion { w: 0.0, x: vector.x, y: vector.y, z: vector.z }
    }

    /// Rotation of `angle` radians around the given axis. The axis does not need to be normalized
    /// but must not be the zero vector.
    ///
    pub fn from_axis_angle(axis: &Vector, angle: f32) -> Self {
        let axis = axis.normalize();
        let half = angle * 0.5;
        let s = libm::sinf(half);
        Quaternion {
            w: libm::cosf(half),
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
        }
    }

    /// Squared magnitude, cheaper than `magnitude()` when only comparing against a band.
    ///
    #[inline]
    pub fn magnitude_squared(&self) -> f32 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Get the magnitude (Euclidean norm) of the quaternion.
    ///
    #[inline]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.magnitude_squared())
    }

    /// Normalize the quaternion to make it a unit quaternion.
    ///
    pub fn normalize(&self) -> Quaternion {
        let magnitude_2 = self.magnitude_squared();
        // Cannot normalize a quaternion with zero magnitude.
        if magnitude_2 == 0.0 {
            return *self;
        }
        *self / libm::sqrtf(magnitude_2)
    }

    pub fn conjugate(&self) -> Self {
        Quaternion {
            w: self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }

    /// Hamilton product `self * other`.
    ///
    pub fn multiply(&self, other: &Quaternion) -> Quaternion {
        Quaternion {
            w: self.w * other.w - self.x * other.x - self.y * other.y - self.z * other.z,
            x: self.w * other.x + self.x * other.w + self.y * other.z - self.z * other.y,
            y: self.w * other.y - self.x * other.z + self.y * other.w + self.z * other.x,
            z: self.w * other.z + self.x * other.y - self.y * other.x + self.z * other.w,
        }
    }

    /// Rotates a vector with the sandwich product `q * [0, v] * q^-1`. The conjugate is used as
    /// the inverse, so the quaternion is assumed to have (close to) unit length.
    ///
    pub fn rotate(&self, vector: &Vector) -> Vector {
        let rotated = self * Quaternion::pure(vector) * self.conjugate();
        Vector::new(rotated.x, rotated.y, rotated.z)
    }

    /// Approximate equality check with a given tolerance.
    ///
    pub fn approx_eq(&self, other: &Quaternion, tol: f32) -> bool {
        libm::fabsf(self.w - other.w) <= tol
            && libm::fabsf(self.x - other.x) <= tol
            && libm::fabsf(self.y - other.y) <= tol
            && libm::fabsf(self.z - other.z) <= tol
    }
}

impl Mul<Quaternion> for &Quaternion {
    type Output = Quaternion;
    fn mul(self, other: Quaternion) -> Self::Output {
        self.multiply(&other)
    }
}

impl Mul<Quaternion> for Quaternion {
    type Output = Quaternion;
    fn mul(self, other: Quaternion) -> Self::Output {
        self.multiply(&other)
    }
}

impl Div<f32> for Quaternion
{
    type Output = Self;

    fn div(self, other: f32) -> Self::Output {
        Quaternion {
            w: self.w / other,
            x: self.x / other,
            y: self.y / other,
            z: self.z / other,
        }
    }
}
