//! Random mode - both LEDs jump to new random levels every
//! [`RANDOM_PERIOD`] iterations

use super::Animation;
use crate::{
    config::{RANDOM_CEILING, RANDOM_PERIOD},
    led::{Led, LedFrame},
    rng::RandomSource,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomMode {
    /// Iterations since the last redraw, always below [`RANDOM_PERIOD`]
    elapsed: u8,
}

impl RandomMode {
    pub const fn elapsed(&self) -> u8 {
        self.elapsed
    }
}

impl Animation for RandomMode {
    /// Keeps whatever the frame shows until the first redraw
    fn enter(_frame: &mut LedFrame) -> Self {
        Self { elapsed: 0 }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn advance<R: RandomSource>(&mut self, _ticks: u16, rng: &mut R, frame: &mut LedFrame) {
        self.elapsed += 1;
        if self.elapsed < RANDOM_PERIOD {
            return;
        }
        self.elapsed = 0;
        for led in Led::ALL {
            let value = rng.below(RANDOM_CEILING);
            assert!(value < RANDOM_CEILING, "random source out of range");
            frame[led] = value as u8;
        }
    }
}
