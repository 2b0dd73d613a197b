//! Bounce mode - the lit LED alternates every [`BOUNCE_PERIOD`] iterations

use super::Animation;
use crate::{
    config::{BOUNCE_BRIGHT, BOUNCE_PERIOD, DIM_FLOOR},
    led::{Led, LedFrame},
    rng::RandomSource,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BounceMode {
    /// LED currently lit
    lit: Led,
    /// Iterations since the last swap, always below [`BOUNCE_PERIOD`]
    elapsed: u8,
}

impl BounceMode {
    pub const fn lit(&self) -> Led {
        self.lit
    }

    pub const fn elapsed(&self) -> u8 {
        self.elapsed
    }

    fn paint(&self, frame: &mut LedFrame) {
        frame[self.lit] = BOUNCE_BRIGHT;
        frame[self.lit.other()] = DIM_FLOOR;
    }
}

impl Animation for BounceMode {
    /// Paints the left LED lit right away, before the first swap
    fn enter(frame: &mut LedFrame) -> Self {
        let mode = Self {
            lit: Led::Left,
            elapsed: 0,
        };
        mode.paint(frame);
        mode
    }

    fn advance<R: RandomSource>(&mut self, _ticks: u16, _rng: &mut R, frame: &mut LedFrame) {
        self.elapsed += 1;
        if self.elapsed < BOUNCE_PERIOD {
            return;
        }
        self.elapsed = 0;
        self.lit = self.lit.other();
        self.paint(frame);
    }
}
