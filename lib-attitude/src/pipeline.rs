use math::{Acceleration, EulerAngle, Gravity, Quaternion, Rotation, YawPitchRoll};
use mpu6050::dmp::{MAX_PACKET_SIZE, MIN_PACKET_SIZE};
use mpu6050::{InitReason, MotionDevice};

use crate::*;

/// Counters of what happened to the packets read so far.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PipelineStats
{
    pub accepted: u32,
    pub rejected: u32,
    pub overflow_resets: u32,
}

/// Reads DMP packets from a motion device and keeps the attitude of the last good one.
///
pub struct AttitudeEstimator<'f, D: MotionDevice>
{
    device: D,
    acquisition: FrameAcquisition<'f>,
    attitude: Attitude,
    accepted: u32,
    rejected: u32,
}

impl<'f, D: MotionDevice> AttitudeEstimator<'f, D>
{
    /// Brings the device up, enables the sensor fusion and waits for the first packet, so the
    /// estimator always holds a sample once this returns.
    ///
    /// `ready` must be signalled by the device's data ready interrupt.
    ///
    pub fn start(mut device: D, ready: &'f ReadyFlag, config: AcquisitionConfig) -> Result<Self, AttitudeError<D::Error>> {
        log::info!("Initializing motion device");
        device.initialize().map_err(AttitudeError::Bus)?;

        if !device.test_connection() {
            log::error!("Motion device connection failed");
            return Err(InitReason::NoConnection.into());
        }
        log::info!("Motion device connection successful");

        log::info!("Initializing DMP");
        device.initialize_fusion()?;
        device.set_fusion_enabled(true).map_err(AttitudeError::Bus)?;

        // Reading the status clears interrupts that piled up during the setup.
        device.status_byte().map_err(AttitudeError::Bus)?;

        let packet_size = device.expected_packet_size();
        if (packet_size as usize) < MIN_PACKET_SIZE || (packet_size as usize) > MAX_PACKET_SIZE {
            log::error!("Unsupported DMP packet size: {}", packet_size);
            return Err(AttitudeError::UnsupportedPacketSize(packet_size));
        }
        log::info!("DMP ready, packet size {} bytes", packet_size);

        let mut estimator = AttitudeEstimator {
            device,
            acquisition: FrameAcquisition::new(ready, config, packet_size),
            attitude: Attitude::new(),
            accepted: 0,
            rejected: 0,
        };
        estimator.refresh()?;
        Ok(estimator)
    }

    /// Waits for the next packet and, if its quaternion is plausible, makes it the current
    /// sample. A rejected packet leaves the current sample (and everything derived from it)
    /// untouched.
    ///
    pub fn refresh(&mut self) -> Result<Verdict, AttitudeError<D::Error>> {
        let packet = self.acquisition.acquire(&mut self.device)?;
        let Some(decoded) = decode(packet) else {
            return Err(AttitudeError::UnsupportedPacketSize(packet.len() as u16));
        };

        let verdict = validate(decoded.quaternion);
        match verdict {
            Verdict::Accepted(quaternion) => {
                let rate = self.device.read_raw_angular_rate().map_err(AttitudeError::Bus)?;
                self.attitude.accept(quaternion, decoded.accel, rate);
                self.accepted += 1;
            },
            Verdict::Rejected { norm } => {
                log::debug!("Rejected quaternion with norm {}", norm);
                self.rejected += 1;
            },
        }
        Ok(verdict)
    }

    /// Current die temperature in degrees Celsius, read from the device on every call.
    ///
    pub fn temperature(&mut self) -> Result<f32, AttitudeError<D::Error>> {
        let raw = self.device.read_raw_temperature().map_err(AttitudeError::Bus)?;
        Ok(temperature_celsius(raw))
    }

    pub fn stats(&self) -> PipelineStats {
        PipelineStats {
            accepted: self.accepted,
            rejected: self.rejected,
            overflow_resets: self.acquisition.overflow_resets(),
        }
    }

    pub fn packet_size(&self) -> u16 {
        self.acquisition.packet_size()
    }

    pub fn attitude(&self) -> &Attitude {
        &self.attitude
    }

    pub fn quaternion(&self) -> Quaternion {
        self.attitude.quaternion()
    }

    pub fn rotation(&mut self) -> Rotation {
        self.attitude.rotation()
    }

    pub fn euler_angles(&mut self) -> EulerAngle {
        self.attitude.euler_angles()
    }

    pub fn gravity(&mut self) -> Gravity {
        self.attitude.gravity()
    }

    pub fn yaw_pitch_roll(&mut self) -> YawPitchRoll {
        self.attitude.yaw_pitch_roll()
    }

    pub fn linear_acceleration(&mut self) -> Acceleration {
        self.attitude.linear_acceleration()
    }

    pub fn world_acceleration(&mut self) -> Acceleration {
        self.attitude.world_acceleration()
    }

    /// Gives the device back, e.g. to put it to sleep.
    pub fn release(self) -> D {
        self.device
    }
}
