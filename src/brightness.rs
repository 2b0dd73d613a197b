//! Logarithmic brightness ramp used by the twinkle fade

/// Perceptually linear brightness levels, darkest first
pub const BRIGHTNESS_TABLE: [u8; 8] = [30, 43, 59, 78, 102, 137, 196, 255];

/// Highest valid index into [`BRIGHTNESS_TABLE`]
#[allow(clippy::cast_possible_truncation)]
pub const MAX_BRIGHTNESS_INDEX: u8 = (BRIGHTNESS_TABLE.len() - 1) as u8;

/// Position in the brightness table, always in `0..=7`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct BrightnessIndex(u8);

impl BrightnessIndex {
    pub const BOTTOM: Self = Self(0);
    pub const TOP: Self = Self(MAX_BRIGHTNESS_INDEX);

    /// Returns the index if it lies inside the table
    pub const fn new(index: u8) -> Option<Self> {
        if index <= MAX_BRIGHTNESS_INDEX {
            Some(Self(index))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn is_top(self) -> bool {
        self.0 == MAX_BRIGHTNESS_INDEX
    }

    pub const fn is_bottom(self) -> bool {
        self.0 == 0
    }

    /// Brightness value at this position
    pub const fn level(self) -> u8 {
        BRIGHTNESS_TABLE[self.0 as usize]
    }

    /// Next brighter position, saturating at the top
    #[must_use]
    pub const fn up(self) -> Self {
        if self.is_top() { self } else { Self(self.0 + 1) }
    }

    /// Next darker position, saturating at the bottom
    #[must_use]
    pub const fn down(self) -> Self {
        if self.is_bottom() { self } else { Self(self.0 - 1) }
    }
}
