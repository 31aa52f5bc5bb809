#![cfg_attr(not(test), no_std)]

pub use embedded_hal::pwm::SetDutyCycle;

#[cfg(test)]
mod tests;

/// Highest speed level, a level maps linearly onto the duty cycle of the channel.
pub const MAX_LEVEL: u8 = 255;

/// The four propellers of the quad copter.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propeller
{
    P1 = 0,
    P2 = 1,
    P3 = 2,
    P4 = 3,
}

impl Propeller {
    pub const ALL: [Propeller; 4] = [Propeller::P1, Propeller::P2, Propeller::P3, Propeller::P4];

    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Owns the PWM channels of the four motor drivers. The levels that were last commanded are
/// remembered, the channels themselves are never read back.
///
pub struct Propellers<P: SetDutyCycle>
{
    channels: [P; 4],
    levels: [u8; 4],
}

impl<P: SetDutyCycle> Propellers<P>
{
    /// Takes the channels in [`Propeller::ALL`] order and stops every motor.
    ///
    pub fn new(channels: [P; 4]) -> Result<Self, P::Error> {
        let mut propellers = Propellers { channels, levels: [0; 4] };
        propellers.stop_all()?;
        Ok(propellers)
    }

    /// Sets the speed of a single propeller, 0 is off and [`MAX_LEVEL`] is full throttle.
    ///
    pub fn set_speed(&mut self, propeller: Propeller, level: u8) -> Result<(), P::Error> {
        let index = propeller.index();
        self.channels[index].set_duty_cycle_fraction(level as u16, MAX_LEVEL as u16)?;
        self.levels[index] = level;
        log::trace!("Propeller {:?} set to {}", propeller, level);
        Ok(())
    }

    pub fn set_all(&mut self, level: u8) -> Result<(), P::Error> {
        for propeller in Propeller::ALL {
            self.set_speed(propeller, level)?;
        }
        Ok(())
    }

    pub fn stop_all(&mut self) -> Result<(), P::Error> {
        log::debug!("Stopping all propellers");
        self.set_all(0)
    }

    /// Last level commanded for the propeller.
    pub fn throttle(&self, propeller: Propeller) -> u8 {
        self.levels[propeller.index()]
    }

    pub fn throttles(&self) -> [u8; 4] {
        self.levels
    }

    pub fn release(self) -> [P; 4] {
        self.channels
    }
}
