use core::{error::Error, fmt};

use mpu6050::{DeviceError, InitReason};

/// The wait inside the frame acquisition that ran out of patience.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stall
{
    /// Neither the ready flag nor enough queued bytes showed up.
    AwaitingReady,
    /// The status byte never reported data ready.
    AwaitingDataReady,
    /// Data ready was reported but a full packet never arrived in the queue.
    AwaitingFullPacket,
}

impl fmt::Display for Stall {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::AwaitingReady => write!(f, "waiting for the ready interrupt"),
            Self::AwaitingDataReady => write!(f, "waiting for the data ready status"),
            Self::AwaitingFullPacket => write!(f, "waiting for a full packet"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttitudeError<E>
{
    Initialization(InitReason),
    SensorTimeout(Stall),
    UnsupportedPacketSize(u16),
    Bus(E),
}

impl<E: fmt::Debug> Error for AttitudeError<E> {}

impl<E: fmt::Debug> fmt::Display for AttitudeError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Initialization(reason) => write!(f, "Sensor initialization failed ({}): {}", reason.code(), reason),
            Self::SensorTimeout(stall) => write!(f, "Sensor timed out {}", stall),
            Self::UnsupportedPacketSize(size) => write!(f, "Unsupported packet size: {} bytes", size),
            Self::Bus(err) => write!(f, "Bus error: {:?}", err),
        }
    }
}

impl<E> From<InitReason> for AttitudeError<E>
{
    fn from(reason: InitReason) -> Self {
        AttitudeError::Initialization(reason)
    }
}

impl<E> From<Stall> for AttitudeError<E>
{
    fn from(stall: Stall) -> Self {
        AttitudeError::SensorTimeout(stall)
    }
}

impl<E> From<DeviceError<E>> for AttitudeError<E>
{
    fn from(err: DeviceError<E>) -> Self {
        match err {
            DeviceError::Bus(err) => AttitudeError::Bus(err),
            DeviceError::Init(reason) => AttitudeError::Initialization(reason),
        }
    }
}
