//! Twinkle mode
//!
//! Both LEDs idle at the dim floor. Now and then one of them fades up through
//! the brightness table and back down again. Fade steps are paced by the tick
//! counter, not by the loop rate.

use super::Animation;
use crate::{
    brightness::BrightnessIndex,
    config::{DIM_FLOOR, TWINKLE_CADENCE, TWINKLE_CHANCE, TWINKLE_WINDOW},
    led::{Led, LedFrame},
    rng::RandomSource,
    tick::in_window,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwinkleDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwinkleMode {
    /// LED currently fading
    led: Led,
    /// Position of the next write in the brightness table
    position: BrightnessIndex,
    direction: TwinkleDirection,
    twinkling: bool,
}

impl TwinkleMode {
    pub const fn led(&self) -> Led {
        self.led
    }

    pub const fn position(&self) -> BrightnessIndex {
        self.position
    }

    pub const fn direction(&self) -> TwinkleDirection {
        self.direction
    }

    pub const fn is_twinkling(&self) -> bool {
        self.twinkling
    }

    /// Maybe start a twinkle on a randomly chosen LED
    fn try_start<R: RandomSource>(&mut self, rng: &mut R) {
        if rng.below(TWINKLE_CHANCE) != 0 {
            return;
        }
        self.twinkling = true;
        self.led = if rng.below(2) == 0 {
            Led::Left
        } else {
            Led::Right
        };
    }

    /// Write the current table level and move one step along the ramp
    fn step(&mut self, frame: &mut LedFrame) {
        frame[self.led] = self.position.level();
        match self.direction {
            TwinkleDirection::Ascending => {
                if self.position.is_top() {
                    self.direction = TwinkleDirection::Descending;
                } else {
                    self.position = self.position.up();
                }
            }
            TwinkleDirection::Descending => {
                if self.position.is_bottom() {
                    self.finish(frame);
                } else {
                    self.position = self.position.down();
                }
            }
        }
    }

    fn finish(&mut self, frame: &mut LedFrame) {
        self.twinkling = false;
        self.direction = TwinkleDirection::Ascending;
        self.position = BrightnessIndex::BOTTOM;
        frame.fill(DIM_FLOOR);
    }
}

impl Animation for TwinkleMode {
    fn enter(frame: &mut LedFrame) -> Self {
        frame.fill(DIM_FLOOR);
        Self {
            led: Led::Left,
            position: BrightnessIndex::BOTTOM,
            direction: TwinkleDirection::Ascending,
            twinkling: false,
        }
    }

    fn advance<R: RandomSource>(&mut self, ticks: u16, rng: &mut R, frame: &mut LedFrame) {
        if !self.twinkling {
            self.try_start(rng);
        }

        if self.twinkling && in_window(ticks, TWINKLE_CADENCE, TWINKLE_WINDOW) {
            self.step(frame);
        }
    }
}
