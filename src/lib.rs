#![no_std]

pub mod arbiter;
pub mod brightness;
pub mod config;
pub mod controller;
pub mod engine;
pub mod hal;
pub mod led;
pub mod mode;
pub mod rng;
pub mod startup;
pub mod tick;
pub mod touch;

pub use arbiter::{InputArbiter, InputEvent, InputEvents, KeyState, OverrideState};
pub use brightness::{BRIGHTNESS_TABLE, BrightnessIndex};
pub use controller::{Controller, StepResult};
pub use engine::AnimationEngine;
pub use led::{Led, LedFrame};
pub use mode::{ModeId, ModeSlot};
pub use rng::RandomSource;
pub use tick::{SharedTicks, TickSource};
pub use touch::{KEY_TOUCHED_MASK, Key, TouchSensor};
pub use embassy_time::Duration;

/// Abstract PWM output
///
/// Implement this trait to drive the two LED channels on a specific platform.
/// The written value is held by the hardware until the next call.
pub trait PwmOutput {
    /// Set the duty cycle of one LED channel (0-255)
    fn set_channel_brightness(&mut self, led: Led, value: u8);

    /// Write both channels of a frame
    fn write_frame(&mut self, frame: &LedFrame) {
        for led in Led::ALL {
            self.set_channel_brightness(led, frame[led]);
        }
    }
}

/// Abstract vibration motor output
pub trait ActuatorOutput {
    /// Switch the motor on or off
    fn set_actuator(&mut self, on: bool);
}
