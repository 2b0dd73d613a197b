//! LED channel identifiers and the per-iteration output frame

use core::ops::{Index, IndexMut};

/// One of the two PWM-dimmed LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Led {
    Left = 0,
    Right = 1,
}

impl Led {
    /// Both channels in output order
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];

    /// Returns the channel for a raw index, if any
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Left),
            1 => Some(Self::Right),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// The opposite channel
    pub const fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Brightness values for both channels
///
/// Owned by the animation engine and written to PWM once per iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedFrame([u8; 2]);

impl LedFrame {
    pub const fn new(left: u8, right: u8) -> Self {
        Self([left, right])
    }

    /// Frame with both channels at the same value
    pub const fn splat(value: u8) -> Self {
        Self([value, value])
    }

    /// Set both channels to the same value
    pub fn fill(&mut self, value: u8) {
        self.0 = [value, value];
    }

    pub const fn left(&self) -> u8 {
        self.0[0]
    }

    pub const fn right(&self) -> u8 {
        self.0[1]
    }

    pub const fn as_array(&self) -> [u8; 2] {
        self.0
    }
}

impl Index<Led> for LedFrame {
    type Output = u8;

    fn index(&self, led: Led) -> &u8 {
        &self.0[led.index()]
    }
}

impl IndexMut<Led> for LedFrame {
    fn index_mut(&mut self, led: Led) -> &mut u8 {
        &mut self.0[led.index()]
    }
}
