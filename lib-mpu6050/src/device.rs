use crate::DeviceError;

/// A motion processing device that fuses gyroscope and accelerometer readings on chip and queues
/// the results as fixed size packets in a hardware FIFO.
///
/// This is everything the attitude pipeline needs from the sensor. The [`crate::Mpu6050`] driver
/// implements it over i2c; tests implement it with scripted fakes.
///
pub trait MotionDevice
{
    type Error: core::fmt::Debug;

    /// Wakes the chip up and puts the raw sensors in a known configuration.
    fn initialize(&mut self) -> Result<(), Self::Error>;

    /// Checks if the device answers with the expected identity.
    fn test_connection(&mut self) -> bool;

    /// Loads and configures the sensor fusion firmware. The fusion itself stays disabled until
    /// [`MotionDevice::set_fusion_enabled`] is called.
    fn initialize_fusion(&mut self) -> Result<(), DeviceError<Self::Error>>;

    fn set_fusion_enabled(&mut self, enabled: bool) -> Result<(), Self::Error>;

    /// Number of bytes currently waiting in the hardware queue.
    fn queue_byte_count(&mut self) -> Result<u16, Self::Error>;

    /// Interrupt status byte, reading it clears the pending interrupt bits on the chip.
    fn status_byte(&mut self) -> Result<u8, Self::Error>;

    /// Drops everything in the hardware queue.
    fn reset_queue(&mut self) -> Result<(), Self::Error>;

    /// Pops exactly `buffer.len()` bytes from the hardware queue.
    fn read_queue_bytes(&mut self, buffer: &mut [u8]) -> Result<(), Self::Error>;

    /// Raw gyroscope registers (x, y, z), read directly instead of through the queue.
    fn read_raw_angular_rate(&mut self) -> Result<[i16; 3], Self::Error>;

    fn read_raw_temperature(&mut self) -> Result<i16, Self::Error>;

    /// Size in bytes of one packet produced by the loaded fusion firmware.
    fn expected_packet_size(&self) -> u16;
}
