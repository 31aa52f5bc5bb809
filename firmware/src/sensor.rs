use core::cell::RefCell;

use attitude::ReadyFlag;
use critical_section::Mutex;
use esp_hal::{gpio::Input, macros::handler};
use mpu6050::dmp::{DmpImage, DMP_PACKET_SIZE};

use crate::Global;

/// The pin the MPU6050 will pull up when it has a new data packet for us.
///
pub static SENSOR_READY_PIN: Global<Input> = Mutex::new(RefCell::new(None));

/// Does the MPU6050 have a new DMP packet for us? Set by the interrupt handler, consumed by the
/// attitude estimator.
///
pub static SENSOR_READY: ReadyFlag = ReadyFlag::new();

/// Interrupt handler for sensor ready pin, we only set the SENSOR_READY flag here to avoid
/// blocking important work done in the main loop by not actually getting and processing the main
/// data here.
///
#[handler]
pub fn on_sensor_ready() {
    critical_section::with(|cs| {
        if let Some(pin) = SENSOR_READY_PIN.borrow_ref_mut(cs).as_mut() {
            if pin.is_interrupt_set() {
                pin.clear_interrupt();
                SENSOR_READY.signal();
            }
        }
    });
}

/// InvenSense MotionApps v2.0 firmware, see `dmp/README.md` for how to obtain the blobs.
///
pub const MOTION_APPS_20: DmpImage<'static> = DmpImage {
    program: include_bytes!("../dmp/program.bin"),
    config: include_bytes!("../dmp/config.bin"),
    updates: include_bytes!("../dmp/updates.bin"),
    packet_size: DMP_PACKET_SIZE,
};
