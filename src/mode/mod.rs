//! Animation modes with compile-time known variants
//!
//! The active mode and its state live in one [`ModeSlot`] enum, so switching
//! modes replaces the state wholesale. Each mode implements [`Animation`].

mod bounce;
mod random;
mod twinkle;

pub use bounce::BounceMode;
pub use random::RandomMode;
pub use twinkle::{TwinkleDirection, TwinkleMode};

use crate::{led::LedFrame, rng::RandomSource};

const MODE_NAME_TWINKLE: &str = "twinkle";
const MODE_NAME_BOUNCE: &str = "bounce";
const MODE_NAME_RANDOM: &str = "random";

const MODE_ID_TWINKLE: u8 = 0;
const MODE_ID_BOUNCE: u8 = 1;
const MODE_ID_RANDOM: u8 = 2;

pub trait Animation {
    /// Construct the mode's initial state, applying its entry rule to the frame
    fn enter(frame: &mut LedFrame) -> Self;

    /// Advance by one loop iteration and update the frame
    fn advance<R: RandomSource>(&mut self, ticks: u16, rng: &mut R, frame: &mut LedFrame);
}

/// Mode slot - enum containing the state of the active mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeSlot {
    /// Occasional fade up and down of a random LED
    Twinkle(TwinkleMode),
    /// Ping-pong between the two LEDs
    Bounce(BounceMode),
    /// Periodic random brightness on both LEDs
    Random(RandomMode),
}

/// Known mode ids, in cycling order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ModeId {
    #[default]
    Twinkle = MODE_ID_TWINKLE,
    Bounce = MODE_ID_BOUNCE,
    Random = MODE_ID_RANDOM,
}

impl ModeId {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_TWINKLE => Self::Twinkle,
            MODE_ID_BOUNCE => Self::Bounce,
            MODE_ID_RANDOM => Self::Random,
            _ => return None,
        })
    }

    /// Mode entered on the next mode-key release
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Twinkle => Self::Bounce,
            Self::Bounce => Self::Random,
            Self::Random => Self::Twinkle,
        }
    }

    /// Build the initial state of this mode, applying its entry rule
    pub fn to_slot(self, frame: &mut LedFrame) -> ModeSlot {
        match self {
            Self::Twinkle => ModeSlot::Twinkle(TwinkleMode::enter(frame)),
            Self::Bounce => ModeSlot::Bounce(BounceMode::enter(frame)),
            Self::Random => ModeSlot::Random(RandomMode::enter(frame)),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Twinkle => MODE_NAME_TWINKLE,
            Self::Bounce => MODE_NAME_BOUNCE,
            Self::Random => MODE_NAME_RANDOM,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_TWINKLE => Some(Self::Twinkle),
            MODE_NAME_BOUNCE => Some(Self::Bounce),
            MODE_NAME_RANDOM => Some(Self::Random),
            _ => None,
        }
    }
}

impl ModeSlot {
    /// Advance the active mode
    pub fn advance<R: RandomSource>(&mut self, ticks: u16, rng: &mut R, frame: &mut LedFrame) {
        match self {
            Self::Twinkle(mode) => mode.advance(ticks, rng, frame),
            Self::Bounce(mode) => mode.advance(ticks, rng, frame),
            Self::Random(mode) => mode.advance(ticks, rng, frame),
        }
    }

    /// Get the mode ID for external observation
    pub const fn id(&self) -> ModeId {
        match self {
            Self::Twinkle(_) => ModeId::Twinkle,
            Self::Bounce(_) => ModeId::Bounce,
            Self::Random(_) => ModeId::Random,
        }
    }
}
