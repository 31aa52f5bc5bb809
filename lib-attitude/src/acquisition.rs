use core::sync::atomic::{AtomicBool, Ordering};

use mpu6050::dmp::MAX_PACKET_SIZE;
use mpu6050::registers::{FIFO_CAPACITY, INT_STATUS_DMP_INT, INT_STATUS_FIFO_OFLOW};
use mpu6050::MotionDevice;

use crate::{AttitudeError, Stall};

/// One bit hand-off between the sensor interrupt and the polling loop.
///
/// Only plain loads and stores are used so this also works on targets without compare-and-swap
/// (e.g. `riscv32imc`). A signal that arrives between [`ReadyFlag::is_set`] and
/// [`ReadyFlag::clear`] is lost, which is fine because the queue byte count is checked as well.
///
pub struct ReadyFlag(AtomicBool);

impl ReadyFlag
{
    pub const fn new() -> Self {
        ReadyFlag(AtomicBool::new(false))
    }

    /// Called from the interrupt handler.
    #[inline]
    pub fn signal(&self) {
        self.0.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    #[inline]
    pub fn clear(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for ReadyFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Upper bounds for the busy waits in [`FrameAcquisition::acquire`].
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcquisitionConfig
{
    /// Spin iterations allowed while waiting for the ready flag or a queued packet.
    pub ready_spin_limit: u32,

    /// Status checks allowed without seeing the data ready bit.
    pub status_cycle_limit: u32,

    /// Queue byte count queries allowed while waiting for a complete packet.
    pub fill_poll_limit: u32,
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        AcquisitionConfig {
            ready_spin_limit: 10_000_000,
            status_cycle_limit: 64,
            fill_poll_limit: 2_000,
        }
    }
}

/// Drains the sensor's hardware queue one packet at a time.
///
pub struct FrameAcquisition<'f>
{
    ready: &'f ReadyFlag,
    config: AcquisitionConfig,
    packet_size: u16,

    /// Bytes we believe are still queued on the device, lets a second queued packet be read
    /// without waiting for another interrupt.
    tracked_count: u16,

    /// Whole packets were left queued after the last read. Their data ready bit was cleared by
    /// the status read that preceded it.
    backlog: bool,

    buffer: [u8; MAX_PACKET_SIZE],
    overflow_resets: u32,
}

impl<'f> FrameAcquisition<'f>
{
    /// `packet_size` must not exceed [`MAX_PACKET_SIZE`], larger values are clamped.
    ///
    pub fn new(ready: &'f ReadyFlag, config: AcquisitionConfig, packet_size: u16) -> Self {
        FrameAcquisition {
            ready,
            config,
            packet_size: packet_size.min(MAX_PACKET_SIZE as u16),
            tracked_count: 0,
            backlog: false,
            buffer: [0; MAX_PACKET_SIZE],
            overflow_resets: 0,
        }
    }

    pub fn packet_size(&self) -> u16 {
        self.packet_size
    }

    pub fn overflow_resets(&self) -> u32 {
        self.overflow_resets
    }

    pub fn tracked_count(&self) -> u16 {
        self.tracked_count
    }

    /// Busy waits until one complete packet could be read from the device and returns it.
    ///
    /// An overflowing queue is reset and the wait starts over, the packets that were in it are
    /// lost. Complete packets still queued from an earlier batch are read without a new data
    /// ready bit, the status read that returned it has cleared it on the chip.
    ///
    pub fn acquire<D: MotionDevice>(&mut self, device: &mut D) -> Result<&[u8], AttitudeError<D::Error>> {
        let packet_size = self.packet_size;

        let mut cycles: u32 = 0;
        loop {
            self.wait_for_ready()?;
            self.ready.clear();

            let mut status = device.status_byte().map_err(AttitudeError::Bus)?;
            self.tracked_count = device.queue_byte_count().map_err(AttitudeError::Bus)?;

            if status & INT_STATUS_FIFO_OFLOW != 0 || self.tracked_count == FIFO_CAPACITY {
                log::warn!("FIFO overflow (status={:#04x}, count={}), resetting", status, self.tracked_count);
                device.reset_queue().map_err(AttitudeError::Bus)?;
                self.overflow_resets += 1;
                self.backlog = false;

                status = device.status_byte().map_err(AttitudeError::Bus)?;
                self.tracked_count = device.queue_byte_count().map_err(AttitudeError::Bus)?;
            }

            if status & INT_STATUS_DMP_INT != 0 {
                break;
            }
            if self.backlog && self.tracked_count >= packet_size {
                log::trace!("Draining queued packet, {} bytes left", self.tracked_count);
                break;
            }

            cycles += 1;
            if cycles >= self.config.status_cycle_limit {
                log::error!("No DMP data after {} status checks", cycles);
                return Err(Stall::AwaitingDataReady.into());
            }
        }

        // Should be a very short wait.
        let mut polls: u32 = 0;
        while self.tracked_count < packet_size {
            if polls >= self.config.fill_poll_limit {
                log::error!("FIFO stuck at {} of {} bytes", self.tracked_count, packet_size);
                return Err(Stall::AwaitingFullPacket.into());
            }
            self.tracked_count = device.queue_byte_count().map_err(AttitudeError::Bus)?;
            polls += 1;
        }

        let packet = &mut self.buffer[..packet_size as usize];
        device.read_queue_bytes(packet).map_err(AttitudeError::Bus)?;
        self.tracked_count -= packet_size;
        self.backlog = self.tracked_count >= packet_size;

        Ok(&self.buffer[..packet_size as usize])
    }

    fn wait_for_ready<E>(&self) -> Result<(), AttitudeError<E>> {
        let mut spins: u32 = 0;
        while !self.ready.is_set() && self.tracked_count < self.packet_size {
            if spins >= self.config.ready_spin_limit {
                log::error!("No ready signal after {} spins", spins);
                return Err(Stall::AwaitingReady.into());
            }
            spins += 1;
            core::hint::spin_loop();
        }
        Ok(())
    }
}
