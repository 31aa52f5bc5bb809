use core::{error::Error, fmt};

use attitude::AttitudeError;
use esp_hal::i2c::master::Error as I2cError;
use esp_hal::ledc::channel::Error as PwmError;


#[derive(Debug)]
pub enum AppError
{
    Sensor(AttitudeError<I2cError>),
    Propellers(PwmError),
}

impl Error for AppError {}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Sensor(err) => write!(f, "Sensor error: {}", err),
            Self::Propellers(err) => write!(f, "Propeller error: {:?}", err),
        }
    }
}

impl From<AttitudeError<I2cError>> for AppError
{
    fn from(err: AttitudeError<I2cError>) -> Self {
        AppError::Sensor(err)
    }
}

impl From<PwmError> for AppError
{
    fn from(err: PwmError) -> Self {
        AppError::Propellers(err)
    }
}
