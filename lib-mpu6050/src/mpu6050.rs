use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::{registers::*, ClockSource, DLPFMode, DeviceError, GyroScaleRange, I2cSlave, InitReason, MotionDevice, MPU6050_DEFAULT_I2C_ADDR, MPU6050_DEVICE_ID};
use crate::dmp::*;

/// Amount of FIFO bytes read per i2c transaction, matches the 32 byte buffer most i2c
/// peripherals (and the Arduino Wire library) have.
const FIFO_READ_CHUNK: usize = 32;

/// Driver for the MPU6050 running the MotionApps DMP firmware.
///
pub struct Mpu6050<'a, I, D>
{
    /// i2c channel that we actually use to communicate with the MPU6050 chip.
    i2c: I,

    /// Used for the settle times the chip needs after resets.
    delay: D,

    /// i2c address that chip is located at.
    address: u8,

    /// Firmware that `initialize_fusion` uploads.
    image: DmpImage<'a>,
}

impl<'a, I: I2c, D: DelayNs> Mpu6050<'a, I, D>
{
    /// Create a new MPU 6050 instance with the given I2C interface, nothing is sent to the chip
    /// until one of the methods is called.
    ///
    pub fn new(i2c: I, delay: D, image: DmpImage<'a>) -> Self {
        Mpu6050 {
            i2c,
            delay,
            address: MPU6050_DEFAULT_I2C_ADDR,
            image,
        }
    }

    /// Use a different i2c address, e.g. `0x69` when the AD0 pin is pulled high.
    ///
    pub fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Gives the bus and delay back.
    ///
    pub fn release(self) -> (I, D) {
        (self.i2c, self.delay)
    }

    /// Resets all registers to their defaults, the chip comes back up in sleep mode.
    ///
    pub fn reset(&mut self) -> Result<(), I::Error> {
        self.set_register_value(PWR_MGMT_1, PWR_MGMT_1_DEVICE_RESET)?;
        self.delay.delay_ms(30);
        Ok(())
    }

    pub fn set_sleep(&mut self, sleep: bool) -> Result<(), I::Error> {
        self.update_register(PWR_MGMT_1, PWR_MGMT_1_SLEEP, if sleep { PWR_MGMT_1_SLEEP } else { 0 })
    }

    pub fn set_clock_source(&mut self, source: ClockSource) -> Result<(), I::Error> {
        log::info!("Setting clock source={:?}", source);
        self.update_register(PWR_MGMT_1, PWR_MGMT_1_CLKSEL, source as u8)
    }

    pub fn set_gyro_scale(&mut self, scale: GyroScaleRange) -> Result<(), I::Error> {
        self.update_register(GYRO_CONFIG, 0b0001_1000, scale.as_register())
    }

    /// Set digital low-pass filter configuration
    ///
    pub fn set_dlpf_mode(&mut self, mode: DLPFMode) -> Result<(), I::Error> {
        self.update_register(CONFIG, 0b0000_0111, mode as u8)
    }

    /// Sets the sample rate based on the divider using the following formula:
    /// `1khz / (1 + divider) = sample_rate`
    ///
    /// For example: `1khz / (1 + 4) = 200 Hz`
    ///
    pub fn set_sample_rate_divider(&mut self, divider: u8) -> Result<(), I::Error> {
        self.set_register_value(SMPLRT_DIV, divider)
    }

    pub fn set_external_frame_sync(&mut self, sync: u8) -> Result<(), I::Error> {
        self.update_register(CONFIG, 0b0011_1000, (sync & 0b111) << 3)
    }

    /// Sets the i2c address at which the MPU6050 should expect to find the given slave.
    ///
    pub fn set_slave_address(&mut self, slave: I2cSlave, address: u8) -> Result<(), I::Error> {
        self.set_register_value(I2C_SLV0_ADDR + (slave as u8) * 3, address)
    }

    pub fn set_i2c_master_mode(&mut self, enable: bool) -> Result<(), I::Error> {
        log::info!("Setting I2C master mode enabled={}", enable);
        self.update_register(USER_CTRL, USER_CTRL_I2C_MST_EN, if enable { USER_CTRL_I2C_MST_EN } else { 0 })
    }

    pub fn reset_i2c_master(&mut self) -> Result<(), I::Error> {
        log::info!("Resetting I2C master mode");
        self.update_register(USER_CTRL, USER_CTRL_I2C_MST_RESET, USER_CTRL_I2C_MST_RESET)
    }

    pub fn set_fifo_enabled(&mut self, enabled: bool) -> Result<(), I::Error> {
        self.update_register(USER_CTRL, USER_CTRL_FIFO_EN, if enabled { USER_CTRL_FIFO_EN } else { 0 })
    }

    pub fn reset_dmp(&mut self) -> Result<(), I::Error> {
        log::debug!("Reset DMP");
        self.update_register(USER_CTRL, USER_CTRL_DMP_RESET, USER_CTRL_DMP_RESET)
    }

    /// Gets the device ID of this MPU6050 chip, practically speaking this just gets the contents
    /// of the `WHO_AM_I` register.
    ///
    pub fn get_device_id(&mut self) -> Result<u8, I::Error> {
        let value = self.get_register_value(WHO_AM_I)?;
        Ok((value & 0b0111_1110) >> 1)
    }

    /// Get the MPU hardware revision, practically this reads a magical undocumented byte in the
    /// MPU's memory whose location was found in the `i2cdevlib` C++ library.
    ///
    pub fn get_hardware_revision(&mut self) -> Result<u8, I::Error> {
        self.set_memory_bank(0x10, true, true)?;
        self.set_memory_start_address(0x06)?;
        let revision = self.get_register_value(DMP_MEM_R_W)?;
        self.set_memory_bank(0, false, false)?;
        Ok(revision)
    }

    pub fn get_register_value(&mut self, register: u8) -> Result<u8, I::Error> {
        let mut state = [ 0u8 ];
        self.i2c.write_read(self.address, &[ register ], &mut state)?;
        Ok(state[0])
    }

    pub fn set_register_value(&mut self, register: u8, value: u8) -> Result<(), I::Error> {
        self.i2c.write(self.address, &[ register, value ])
    }

    /// Reads a big endian 16 bit value from the register and the next register, i.e. to read
    /// `FIFO_COUNT_H` and `FIFO_COUNT_L` call this method with `FIFO_COUNT_H`.
    ///
    pub fn get_register_value_u16(&mut self, register: u8) -> Result<u16, I::Error> {
        let mut state = [ 0u8; 2 ];
        self.i2c.write_read(self.address, &[ register ], &mut state)?;
        Ok(u16::from_be_bytes(state))
    }

    /// Read-modify-write of the bits selected by `mask`.
    ///
    fn update_register(&mut self, register: u8, mask: u8, value: u8) -> Result<(), I::Error> {
        let state = self.get_register_value(register)?;
        self.set_register_value(register, (state & !mask) | (value & mask))
    }

    fn get_otp_bank_valid(&mut self) -> Result<bool, I::Error> {
        Ok(self.get_register_value(XG_OFFS_TC)? & 0b01 == 1)
    }

    fn set_otp_bank_valid(&mut self, valid: bool) -> Result<(), I::Error> {
        self.update_register(XG_OFFS_TC, 0b01, valid as u8)
    }

    fn set_memory_start_address(&mut self, address: u8) -> Result<(), I::Error> {
        self.set_register_value(DMP_MEM_START_ADDR, address)
    }

    fn set_memory_bank(&mut self, mut bank: u8, prefetch: bool, user_bank: bool) -> Result<(), I::Error> {
        bank &= 0x1F;
        if user_bank {
            bank |= BANK_SEL_USER;
        }
        if prefetch {
            bank |= BANK_SEL_PREFETCH;
        }
        self.set_register_value(DMP_BANK_SEL, bank)
    }

    /// Writes `data` into the DMP memory starting at the given bank and address, continuing into
    /// the next bank(s) when needed. With the `verify-firmware` feature every chunk is read back
    /// and a mismatch fails with `reason`.
    ///
    fn write_memory_block(&mut self, data: &[u8], bank: u8, address: u8, reason: InitReason) -> Result<(), DeviceError<I::Error>> {
        let start = bank as usize * DMP_MEMORY_BANK_SIZE as usize + address as usize;
        if start + data.len() > DMP_MEMORY_SIZE {
            log::error!("DMP block of {} bytes at bank {} address {} does not fit", data.len(), bank, address);
            return Err(DeviceError::Init(InitReason::Unexpected));
        }

        let mut written: usize = 0;
        let mut current_bank = bank;
        let mut current_address = address as u16;
        while written < data.len()
        {
            let remaining = data.len() - written;
            let left_in_bank = (DMP_MEMORY_BANK_SIZE - current_address) as usize;
            let chunk_size = usize::min(DMP_MEMORY_CHUNK_SIZE, usize::min(remaining, left_in_bank));
            let chunk = &data[written..written + chunk_size];

            self.set_memory_bank(current_bank, false, false).map_err(DeviceError::Bus)?;
            self.set_memory_start_address(current_address as u8).map_err(DeviceError::Bus)?;

            let mut message = [0u8; DMP_MEMORY_CHUNK_SIZE + 1];
            message[0] = DMP_MEM_R_W;
            message[1..=chunk_size].copy_from_slice(chunk);
            self.i2c.write(self.address, &message[..=chunk_size]).map_err(DeviceError::Bus)?;

            if cfg!(feature = "verify-firmware") {
                self.set_memory_bank(current_bank, false, false).map_err(DeviceError::Bus)?;
                self.set_memory_start_address(current_address as u8).map_err(DeviceError::Bus)?;
                let mut verify = [0u8; DMP_MEMORY_CHUNK_SIZE];
                self.i2c.write_read(self.address, &[ DMP_MEM_R_W ], &mut verify[..chunk_size]).map_err(DeviceError::Bus)?;
                if &verify[..chunk_size] != chunk {
                    log::error!("Verify of mem data failed: bank {}, address {}", current_bank, current_address);
                    return Err(DeviceError::Init(reason));
                }
            }

            written += chunk_size;
            current_address += chunk_size as u16;
            if current_address >= DMP_MEMORY_BANK_SIZE {
                log::debug!("Finished writing to bank: {}", current_bank);
                current_address = 0;
                current_bank += 1;
            }
        }

        Ok(())
    }

    /// Applies a DMP configuration blob, see [`ConfigRecords`] for the format.
    ///
    fn write_config_set(&mut self, config: &[u8]) -> Result<(), DeviceError<I::Error>> {
        for record in ConfigRecords::new(config) {
            match record {
                Ok(ConfigRecord::Write { bank, address, data }) => {
                    self.write_memory_block(data, bank, address, InitReason::ConfigUpdate)?;
                },
                Ok(ConfigRecord::Command { command: CONFIG_COMMAND_ENABLE_INTERRUPT, .. }) => {
                    self.set_register_value(INT_ENABLE, INT_ENABLE_DMP_CONFIG).map_err(DeviceError::Bus)?;
                },
                Ok(ConfigRecord::Command { command, .. }) => {
                    log::error!("Unknown DMP configuration command: {:#04x}", command);
                    return Err(DeviceError::Init(InitReason::ConfigUpdate));
                },
                Err(()) => {
                    log::error!("Truncated DMP configuration set");
                    return Err(DeviceError::Init(InitReason::ConfigUpdate));
                },
            }
        }
        Ok(())
    }

    /// Everything that has to happen before the firmware upload.
    ///
    fn prepare_dmp(&mut self) -> Result<(), I::Error> {
        self.reset()?;
        self.set_sleep(false)?;

        // Both of these are informational only.
        let revision = self.get_hardware_revision()?;
        log::info!("Hardware revision: {}", revision);
        let otp_bank_valid = self.get_otp_bank_valid()?;
        log::info!("OTP bank valid: {}", otp_bank_valid);

        // Set up some weird slave address stuff, no clue why this is done, there is no actual
        // slave device connected.
        self.set_slave_address(I2cSlave::Slave0, 0x7F)?;
        self.set_i2c_master_mode(false)?;
        self.set_slave_address(I2cSlave::Slave0, 0x68)?;
        self.reset_i2c_master()?;
        self.delay.delay_ms(20);
        Ok(())
    }

    /// Sensor configuration the DMP firmware expects, written between the configuration set and
    /// the updates.
    ///
    fn configure_dmp(&mut self) -> Result<(), I::Error> {
        self.set_clock_source(ClockSource::GyroZ)?;

        log::info!("Enabling DMP and FIFO_OFLOW interrupts");
        self.set_register_value(INT_ENABLE, INT_ENABLE_FIFO_OFLOW_DMP)?;

        self.set_sample_rate_divider(4)?;
        self.set_external_frame_sync(1)?;
        self.set_dlpf_mode(DLPFMode::Bw42Hz)?;
        self.set_gyro_scale(GyroScaleRange::D2000)?;

        self.set_register_value(DMP_CFG_1, 0x03)?;
        self.set_register_value(DMP_CFG_2, 0x00)?;
        self.set_otp_bank_valid(false)
    }

    fn finish_dmp(&mut self) -> Result<(), I::Error> {
        // Set motion detection thresholds.
        self.set_register_value(MOT_THR, 2)?;
        self.set_register_value(ZERO_MOT_THR, 156)?;
        self.set_register_value(MOT_DUR, 80)?;
        self.set_register_value(ZERO_MOT_DUR, 0)?;

        self.reset_queue()?;
        self.set_fifo_enabled(true)?;
        self.reset_dmp()?;
        self.set_fusion_enabled(false)?;
        self.reset_queue()?;

        // Clear interrupt flags.
        self.get_register_value(INT_STATUS)?;
        Ok(())
    }
}

impl<'a, I: I2c, D: DelayNs> MotionDevice for Mpu6050<'a, I, D>
{
    type Error = I::Error;

    fn initialize(&mut self) -> Result<(), I::Error> {
        log::info!("Configuring MPU6050");
        self.set_clock_source(ClockSource::GyroX)?;
        self.set_gyro_scale(GyroScaleRange::D250)?;
        // +-2g, the accelerometer full scale bits are all zero.
        self.set_register_value(ACCEL_CONFIG, 0x00)?;
        self.set_sleep(false)
    }

    /// Checks if the i2c connection with the MPU6050 chip is working as expected, practically
    /// speaking this function just checks if it can read the device ID and if the device ID is
    /// the expected value.
    ///
    fn test_connection(&mut self) -> bool {
        self.get_device_id().map(|id| id == MPU6050_DEVICE_ID).unwrap_or(false)
    }

    /// Initializes the DMP (Digital Motion Processor) so data can be read from the FIFO queue,
    /// this needs to be called each time the sensor boots up.
    ///
    /// Because the DMP part of the chip is mostly undocumented this follows the
    /// `MPU6050_6Axis_MotionApps20::dmpInitialize()` function in Jeff Rowberg's `i2cdevlib`.
    ///
    fn initialize_fusion(&mut self) -> Result<(), DeviceError<I::Error>> {
        let image = self.image;
        if (image.packet_size as usize) < MIN_PACKET_SIZE || (image.packet_size as usize) > MAX_PACKET_SIZE {
            log::error!("Unsupported DMP packet size: {}", image.packet_size);
            return Err(DeviceError::Init(InitReason::Unexpected));
        }

        self.prepare_dmp().map_err(DeviceError::Bus)?;

        log::info!("Writing DMP program ({} bytes)", image.program.len());
        self.write_memory_block(image.program, 0, 0, InitReason::MemoryLoad)?;

        log::info!("Writing DMP configuration ({} bytes)", image.config.len());
        self.write_config_set(image.config)?;

        self.configure_dmp().map_err(DeviceError::Bus)?;
        self.write_config_set(image.updates)?;
        self.finish_dmp().map_err(DeviceError::Bus)?;

        log::info!("Finished setting up DMP");
        Ok(())
    }

    fn set_fusion_enabled(&mut self, enabled: bool) -> Result<(), I::Error> {
        self.update_register(USER_CTRL, USER_CTRL_DMP_EN, if enabled { USER_CTRL_DMP_EN } else { 0 })
    }

    fn queue_byte_count(&mut self) -> Result<u16, I::Error> {
        self.get_register_value_u16(FIFO_COUNT_H)
    }

    fn status_byte(&mut self) -> Result<u8, I::Error> {
        self.get_register_value(INT_STATUS)
    }

    fn reset_queue(&mut self) -> Result<(), I::Error> {
        self.update_register(USER_CTRL, USER_CTRL_FIFO_RESET, USER_CTRL_FIFO_RESET)
    }

    fn read_queue_bytes(&mut self, buffer: &mut [u8]) -> Result<(), I::Error> {
        for chunk in buffer.chunks_mut(FIFO_READ_CHUNK) {
            self.i2c.write_read(self.address, &[ FIFO_R_W ], chunk)?;
        }
        Ok(())
    }

    fn read_raw_angular_rate(&mut self) -> Result<[i16; 3], I::Error> {
        let mut data = [ 0u8; 6 ];
        self.i2c.write_read(self.address, &[ GYRO_XOUT_H ], &mut data)?;
        Ok([
            i16::from_be_bytes([data[0], data[1]]),
            i16::from_be_bytes([data[2], data[3]]),
            i16::from_be_bytes([data[4], data[5]]),
        ])
    }

    fn read_raw_temperature(&mut self) -> Result<i16, I::Error> {
        let mut data = [ 0u8; 2 ];
        self.i2c.write_read(self.address, &[ TEMP_OUT_H ], &mut data)?;
        Ok(i16::from_be_bytes(data))
    }

    fn expected_packet_size(&self) -> u16 {
        self.image.packet_size
    }
}
