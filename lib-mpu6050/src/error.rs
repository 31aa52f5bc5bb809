use core::{error::Error, fmt};

/// Why bringing up the motion processor failed. The numbering follows the return codes of the
/// `dmpInitialize()` routine that most MPU6050 code bases are derived from.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitReason
{
    /// The chip did not answer with the expected device id.
    NoConnection,
    /// Writing (or verifying) the DMP program into the chip's memory banks failed.
    MemoryLoad,
    /// Writing the DMP configuration set or one of its updates failed.
    ConfigUpdate,
    /// Anything else, e.g. a firmware image that does not fit the chip.
    Unexpected,
}

impl InitReason {
    pub fn code(&self) -> u8 {
        match self {
            Self::NoConnection => 0xFF,
            Self::MemoryLoad => 1,
            Self::ConfigUpdate => 2,
            Self::Unexpected => 3,
        }
    }
}

impl fmt::Display for InitReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NoConnection => write!(f, "device did not respond with the expected id"),
            Self::MemoryLoad => write!(f, "DMP memory load failed"),
            Self::ConfigUpdate => write!(f, "DMP configuration update failed"),
            Self::Unexpected => write!(f, "unexpected initialization failure"),
        }
    }
}

/// Error returned by the motion device, either the bus itself failed or the chip could not be
/// brought into a usable state.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceError<E>
{
    Bus(E),
    Init(InitReason),
}

impl<E: fmt::Debug> Error for DeviceError<E> {}

impl<E: fmt::Debug> fmt::Display for DeviceError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Bus(err) => write!(f, "Bus error: {:?}", err),
            Self::Init(reason) => write!(f, "Initialization error ({}): {}", reason.code(), reason),
        }
    }
}

impl<E> From<InitReason> for DeviceError<E>
{
    fn from(reason: InitReason) -> Self {
        DeviceError::Init(reason)
    }
}
