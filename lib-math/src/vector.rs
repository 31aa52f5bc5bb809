use core::ops::{Div, Mul, Sub};

/// Plain three component float vector, the common currency of the math crate. Quantities that
/// carry a physical meaning are wrapped in a [`crate::Triple`] instead.
///
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector
{
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<[f32; 3]> for Vector {
    fn from(values: [f32; 3]) -> Self {
        Self {
            x: values[0],
            y: values[1],
            z: values[2],
        }
    }
}

impl From<[i16; 3]> for Vector {
    fn from(values: [i16; 3]) -> Self {
        Self {
            x: values[0] as f32,
            y: values[1] as f32,
            z: values[2] as f32,
        }
    }
}

impl Vector
{
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector { x, y, z }
    }

    /// Returns a zero vector.
    ///
    pub const fn zero() -> Self {
        Vector { x: 0.0, y: 0.0, z: 0.0 }
    }

    /// Calculate the length/magnitude of the vector
    ///
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.dot(self))
    }

    /// Normalize the vector, a zero (or NaN) length vector normalizes to the zero vector.
    ///
    pub fn normalize(&self) -> Vector {
        let len = self.magnitude();
        if len == 0.0 || len.is_nan() {
            return Vector::zero();
        }
        *self / len
    }

    /// Take the dot product of two vectors.
    ///
    pub fn dot(&self, other: &Vector) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Truncates every component towards zero into a signed 16 bit count, saturating at the i16
    /// limits. This mirrors storing a float into a 16 bit sensor register.
    ///
    pub fn truncate_i16(&self) -> [i16; 3] {
        [self.x as i16, self.y as i16, self.z as i16]
    }

    /// Approximate equality check with a given tolerance.
    pub fn approx_eq(&self, other: &Vector, tol: f32) -> bool {
        libm::fabsf(self.x - other.x) <= tol
            && libm::fabsf(self.y - other.y) <= tol
            && libm::fabsf(self.z - other.z) <= tol
    }
}

impl Sub for Vector
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Vector {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Div<f32> for Vector
{
    type Output = Self;

    fn div(self, other: f32) -> Self::Output {
        Vector {
            x: self.x / other,
            y: self.y / other,
            z: self.z / other,
        }
    }
}

impl Mul<f32> for Vector
{
    type Output = Self;

    fn mul(self, other: f32) -> Self::Output {
        Vector {
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}
