//! Power-up announce pattern
//!
//! Runs once, before the main loop: light the left LED, then the right one,
//! then pulse the motor three times.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::config::{ANNOUNCE_LED_DELAY, ANNOUNCE_PULSE};
use crate::led::Led;
use crate::{ActuatorOutput, PwmOutput};

/// Brightness of an LED lit during the announce
pub const ANNOUNCE_BRIGHTNESS: u8 = 255;

/// A single step of the announce pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnounceStep {
    /// Light an LED at full brightness
    Light(Led),
    /// Switch the motor
    Actuator(bool),
    /// Busy-wait
    Wait(Duration),
}

pub const ANNOUNCE_SEQUENCE: [AnnounceStep; 15] = [
    AnnounceStep::Light(Led::Left),
    AnnounceStep::Wait(ANNOUNCE_LED_DELAY),
    AnnounceStep::Light(Led::Right),
    AnnounceStep::Actuator(true),
    AnnounceStep::Wait(ANNOUNCE_PULSE),
    AnnounceStep::Actuator(false),
    AnnounceStep::Wait(ANNOUNCE_PULSE),
    AnnounceStep::Actuator(true),
    AnnounceStep::Wait(ANNOUNCE_PULSE),
    AnnounceStep::Actuator(false),
    AnnounceStep::Wait(ANNOUNCE_PULSE),
    AnnounceStep::Actuator(true),
    AnnounceStep::Wait(ANNOUNCE_PULSE),
    AnnounceStep::Actuator(false),
    AnnounceStep::Wait(ANNOUNCE_PULSE),
];

/// Play [`ANNOUNCE_SEQUENCE`] on the outputs, blocking until done
pub fn announce<P, A, D>(pwm: &mut P, actuator: &mut A, delay: &mut D)
where
    P: PwmOutput + ?Sized,
    A: ActuatorOutput + ?Sized,
    D: DelayNs + ?Sized,
{
    #[cfg(feature = "esp32-log")]
    println!("[announce] start");

    for step in ANNOUNCE_SEQUENCE {
        match step {
            AnnounceStep::Light(led) => pwm.set_channel_brightness(led, ANNOUNCE_BRIGHTNESS),
            AnnounceStep::Actuator(on) => actuator.set_actuator(on),
            AnnounceStep::Wait(duration) => {
                #[allow(clippy::cast_possible_truncation)]
                let millis = duration.as_millis() as u32;
                delay.delay_ms(millis);
            }
        }
    }
}

/// Total time spent waiting in the announce
pub fn announce_duration() -> Duration {
    ANNOUNCE_SEQUENCE
        .iter()
        .fold(Duration::from_millis(0), |total, step| match step {
            AnnounceStep::Wait(duration) => total + *duration,
            _ => total,
        })
}
