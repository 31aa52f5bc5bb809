#![no_std]
#![no_main]

mod error;
mod sensor;

use core::cell::RefCell;

use attitude::{AcquisitionConfig, AttitudeError, AttitudeEstimator};
use critical_section::Mutex;
use error::AppError;
use esp_backtrace as _;
use esp_hal::{
    delay::Delay,
    gpio::{Event, Input, Io, Level, Output, Pull},
    i2c::master::I2c,
    ledc::{channel::{self, ChannelIFace}, timer::{self, TimerIFace}, LSGlobalClkSource, Ledc, LowSpeed},
    prelude::*,
};
use mpu6050::{MotionDevice, Mpu6050};
use propellers::{Propellers, SetDutyCycle};
use sensor::*;

pub type Global<T> = Mutex<RefCell<Option<T>>>;

/// Log the attitude once every this many packets, MotionApps v2.0 divides the 200 Hz sample rate
/// down to 100 packets per second.
const LOG_INTERVAL: u32 = 100;

/// Keeps the attitude up to date, returns on the first error that is not a stall. A stalled
/// sensor stops the propellers and the loop waits for it again.
///
fn fly<D, P>(estimator: &mut AttitudeEstimator<'_, D>, propellers: &mut Propellers<P>) -> Result<(), AppError>
where
    D: MotionDevice<Error = esp_hal::i2c::master::Error>,
    P: SetDutyCycle<Error = esp_hal::ledc::channel::Error>,
{
    let mut packets: u32 = 0;
    loop {
        match estimator.refresh() {
            Ok(_) => {},
            Err(AttitudeError::SensorTimeout(stall)) => {
                log::error!("Sensor stalled {}, stopping propellers", stall);
                propellers.stop_all()?;
                continue;
            },
            Err(err) => return Err(err.into()),
        }

        packets += 1;
        if packets % LOG_INTERVAL == 0 {
            let ypr = estimator.yaw_pitch_roll();
            let world = estimator.world_acceleration();
            log::info!(
                "ypr: {:.2} {:.2} {:.2}, world accel: {:.3} {:.3} {:.3}, throttle: {:?}",
                ypr.yaw(), ypr.pitch(), ypr.roll(),
                world.x, world.y, world.z,
                propellers.throttles(),
            );
            log::debug!("{:?}", estimator.stats());
        }
    }
}

#[entry]
fn main() -> ! {
    esp_println::logger::init_logger(log::LevelFilter::Info);

    let peripherals = esp_hal::init(esp_hal::Config::default());
    let mut io = Io::new(peripherals.GPIO, peripherals.IO_MUX);
    io.set_interrupt_handler(on_sensor_ready);


    // Propellers, driven by the LEDC peripheral with 8 bit duty cycles
    // ============================================================================================
    let mut ledc = Ledc::new(peripherals.LEDC);
    ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);
    let mut motor_timer = ledc.timer::<LowSpeed>(timer::Number::Timer0);
    motor_timer.configure(timer::config::Config {
        duty: timer::config::Duty::Duty8Bit,
        clock_source: timer::LSClockSource::APBClk,
        frequency: 24.kHz(),
    }).unwrap();

    let pins = [
        Output::new(io.pins.gpio4, Level::Low),
        Output::new(io.pins.gpio5, Level::Low),
        Output::new(io.pins.gpio6, Level::Low),
        Output::new(io.pins.gpio7, Level::Low),
    ];
    let numbers = [channel::Number::Channel0, channel::Number::Channel1, channel::Number::Channel2, channel::Number::Channel3];
    let mut channels = pins.into_iter().zip(numbers).map(|(pin, number)| {
        let mut channel = ledc.channel(number, pin);
        channel.configure(channel::config::Config {
            timer: &motor_timer,
            duty_pct: 0,
            pin_config: channel::config::PinConfig::PushPull,
        }).unwrap();
        channel
    });
    let channels = core::array::from_fn(|_| channels.next().unwrap());
    let mut propellers = Propellers::new(channels).unwrap();


    // Initialize I2C connection for the MPU6050
    // ============================================================================================
    let i2c = I2c::new(
        peripherals.I2C0,
        io.pins.gpio1,
        io.pins.gpio2,
        400.kHz()
    );


    // Setup an interrupt handler for the MPU6050 data ready interrupt pin
    // ============================================================================================
    let mut data_ready_pin = Input::new(io.pins.gpio0, Pull::Down);
    critical_section::with(|cs| {
        data_ready_pin.listen(Event::RisingEdge);
        SENSOR_READY_PIN.borrow_ref_mut(cs).replace(data_ready_pin);
    });


    // Bring up the DMP, without a working sensor there is nothing sensible left to do
    // ============================================================================================
    let mpu = Mpu6050::new(i2c, Delay::new(), MOTION_APPS_20);
    let mut estimator = match AttitudeEstimator::start(mpu, &SENSOR_READY, AcquisitionConfig::default()) {
        Ok(estimator) => estimator,
        Err(err) => {
            log::error!("{}", err);
            loop {}
        },
    };


    // Main program loop
    // ============================================================================================
    if let Err(err) = fly(&mut estimator, &mut propellers) {
        log::error!("{}", err);
        // Best effort, the error might have come from the propellers themselves.
        let _ = propellers.stop_all();
    }
    loop {}
}
