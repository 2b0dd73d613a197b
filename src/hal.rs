//! Output adapters over `embedded-hal` traits
//!
//! Lets any HAL providing PWM channels and a GPIO pin drive the controller.
//! Pin and PWM errors are dropped: the loop rewrites every output on the
//! next iteration and has nowhere to report them.

use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal::pwm::SetDutyCycle;

use crate::led::Led;
use crate::{ActuatorOutput, PwmOutput};

/// Two PWM channels, one per LED
pub struct PwmPair<L, R> {
    left: L,
    right: R,
}

impl<L: SetDutyCycle, R: SetDutyCycle> PwmPair<L, R> {
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    pub fn release(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L: SetDutyCycle, R: SetDutyCycle> PwmOutput for PwmPair<L, R> {
    fn set_channel_brightness(&mut self, led: Led, value: u8) {
        let value = u16::from(value);
        match led {
            Led::Left => {
                let _ = self.left.set_duty_cycle_fraction(value, u16::from(u8::MAX));
            }
            Led::Right => {
                let _ = self.right.set_duty_cycle_fraction(value, u16::from(u8::MAX));
            }
        }
    }
}

/// Vibration motor switched by a GPIO pin, active high
pub struct PinActuator<P> {
    pin: P,
}

impl<P: OutputPin> PinActuator<P> {
    pub const fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> ActuatorOutput for PinActuator<P> {
    fn set_actuator(&mut self, on: bool) {
        let _ = self.pin.set_state(PinState::from(on));
    }
}
