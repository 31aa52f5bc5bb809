#![cfg_attr(not(test), no_std)]

pub mod config;
pub use config::*;

pub mod error;
pub use error::*;

pub mod device;
pub use device::*;

pub mod registers;

pub mod dmp;

pub mod mpu6050;
pub use mpu6050::*;

#[cfg(test)]
mod tests;

/// Default i2c address of the MPU 6050 chip.
///
pub const MPU6050_DEFAULT_I2C_ADDR: u8 = 0x68;

/// The default device ID of a MPU6050 chip.
///
pub const MPU6050_DEVICE_ID: u8 = 0x34;
