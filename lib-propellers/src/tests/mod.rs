use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::pwm::{Error, ErrorKind, ErrorType, SetDutyCycle};

use crate::*;

/// PWM channel with a 1000 step resolution, the duty cycle is shared with the test.
struct FakeChannel(Rc<Cell<u16>>);

impl ErrorType for FakeChannel {
    type Error = Infallible;
}

impl SetDutyCycle for FakeChannel {
    fn max_duty_cycle(&self) -> u16 {
        1000
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Infallible> {
        self.0.set(duty);
        Ok(())
    }
}

fn channels() -> ([FakeChannel; 4], [Rc<Cell<u16>>; 4]) {
    let _ = env_logger::builder().is_test(true).try_init();
    // Start at a non-zero duty to see that construction stops the motors.
    let duties: [Rc<Cell<u16>>; 4] = core::array::from_fn(|_| Rc::new(Cell::new(500)));
    (duties.clone().map(FakeChannel), duties)
}

fn read(duties: &[Rc<Cell<u16>>; 4]) -> [u16; 4] {
    duties.each_ref().map(|d| d.get())
}

#[test]
fn construction_stops_all_motors() {
    let (channels, duties) = channels();
    let propellers = Propellers::new(channels).unwrap();

    assert_eq!(read(&duties), [0; 4]);
    assert_eq!(propellers.throttles(), [0; 4]);
}

#[test]
fn levels_map_onto_duty_cycle() {
    let (channels, duties) = channels();
    let mut propellers = Propellers::new(channels).unwrap();

    propellers.set_speed(Propeller::P2, 255).unwrap();
    propellers.set_speed(Propeller::P4, 51).unwrap();

    assert_eq!(read(&duties), [0, 1000, 0, 200]);
    assert_eq!(propellers.throttle(Propeller::P2), 255);
    assert_eq!(propellers.throttle(Propeller::P4), 51);
    assert_eq!(propellers.throttle(Propeller::P1), 0);
}

#[test]
fn set_all_and_stop_all() {
    let (channels, duties) = channels();
    let mut propellers = Propellers::new(channels).unwrap();

    propellers.set_all(115).unwrap();
    assert_eq!(propellers.throttles(), [115; 4]);
    assert_eq!(read(&duties), [450; 4]);

    propellers.stop_all().unwrap();
    assert_eq!(propellers.throttles(), [0; 4]);
    assert_eq!(read(&duties), [0; 4]);
}

#[derive(Debug, PartialEq)]
struct Disconnected;

impl Error for Disconnected {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Channel that stops working once its budget of writes is used up.
struct FlakyChannel(Rc<Cell<u32>>);

impl ErrorType for FlakyChannel {
    type Error = Disconnected;
}

impl SetDutyCycle for FlakyChannel {
    fn max_duty_cycle(&self) -> u16 {
        255
    }

    fn set_duty_cycle(&mut self, _duty: u16) -> Result<(), Disconnected> {
        let budget = self.0.get();
        if budget == 0 {
            return Err(Disconnected);
        }
        self.0.set(budget - 1);
        Ok(())
    }
}

#[test]
fn failed_write_keeps_the_old_level() {
    let budget = Rc::new(Cell::new(6));
    let channels = core::array::from_fn(|_| FlakyChannel(budget.clone()));
    let mut propellers = Propellers::new(channels).unwrap();

    // Two writes left, P3 fails.
    assert_eq!(propellers.set_all(80), Err(Disconnected));
    assert_eq!(propellers.throttles(), [80, 80, 0, 0]);
}
