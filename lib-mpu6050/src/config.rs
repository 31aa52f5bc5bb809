
/// Source of the sensor's internal clock, written to the low bits of `PWR_MGMT_1`.
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockSource
{
    InternalOscillator = 0,
    GyroX = 1,
    GyroY = 2,
    GyroZ = 3,
}

/// DLPF (Digital Low Pass Filter) mode, this determines the highest frequency that is not filtered
/// out.
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DLPFMode {
    Bw256Hz = 0x00,
    Bw188Hz = 0x01,
    Bw98Hz = 0x02,
    Bw42Hz = 0x03,
    Bw20Hz = 0x04,
    Bw10Hz = 0x05,
    Bw5Hz = 0x06,
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GyroScaleRange
{
    #[default]
    D250 = 0,
    D500 = 1,
    D1000 = 2,
    D2000 = 3,
}

impl GyroScaleRange {

    /// Converts the given full scale range setting into the bits one would need to write into the
    /// `GYRO_CONFIG` register to configure the sensor to use that scale range.
    ///
    pub fn as_register(&self) -> u8 {
        (*self as u8) << 3
    }
}

/// The four auxiliary i2c slaves the MPU6050 can act as a master for. Every slave has a block of
/// three registers starting at `I2C_SLV0_ADDR`.
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum I2cSlave
{
    Slave0 = 0,
    Slave1 = 1,
    Slave2 = 2,
    Slave3 = 3,
}
