//! Compile-time tuning of the device
//!
//! The device has no runtime configuration; every level, cadence and delay
//! lives here.

use embassy_time::Duration;

/// Idle brightness of an unlit channel
pub const DIM_FLOOR: u8 = 14;

/// Brightness of the lit channel in bounce mode
pub const BOUNCE_BRIGHT: u8 = 128;

/// Both channels while the mode key is held
pub const PENDING_TRANSITION: u8 = 184;

/// Both channels while the actuator key is held
pub const BUZZ_BRIGHTNESS: u8 = 255;

/// Twinkle starts when a draw in `0..TWINKLE_CHANCE` is zero
pub const TWINKLE_CHANCE: u16 = 500;

/// Twinkle fade advances only while `ticks % TWINKLE_CADENCE < TWINKLE_WINDOW`
pub const TWINKLE_CADENCE: u16 = 50;
pub const TWINKLE_WINDOW: u16 = 2;

/// Iterations between bounce swaps
pub const BOUNCE_PERIOD: u8 = 75;

/// Iterations between random redraws
pub const RANDOM_PERIOD: u8 = 150;

/// Random mode draws channel values in `0..RANDOM_CEILING`
pub const RANDOM_CEILING: u16 = 128;

/// Loop pacing
#[derive(Debug, Clone, Copy)]
pub struct LoopTimings {
    /// Delay after every iteration
    pub iteration: Duration,
    /// Extra delay in each measurement cycle that sees the mode key held
    pub mode_key_hold: Duration,
}

pub const LOOP_TIMINGS: LoopTimings = LoopTimings {
    iteration: Duration::from_millis(1),
    mode_key_hold: Duration::from_millis(5),
};

/// Delay between lighting the left and right LED at power-up
pub const ANNOUNCE_LED_DELAY: Duration = Duration::from_millis(200);

/// Half period of the power-up buzz pulses
pub const ANNOUNCE_PULSE: Duration = Duration::from_millis(50);
