//! Capacitive touch sensor interface

/// Bit set in a key's sensor state while the key is touched
pub const KEY_TOUCHED_MASK: u8 = 0x80;

/// Touch keys on the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Key {
    /// Advances the animation mode on release
    Mode = 0,
    /// Runs the vibration motor while held
    Actuator = 1,
}

impl Key {
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Mode),
            1 => Some(Self::Actuator),
            _ => None,
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Touch acquisition driver
///
/// Measurement is a multi-step hardware sequence. The loop starts (or
/// continues) it every iteration and only reads key states once the driver
/// reports it complete.
pub trait TouchSensor {
    /// Start or continue a measurement cycle. Must not block.
    fn begin_measurement(&mut self);

    /// True once the current measurement cycle has produced fresh states
    fn is_measurement_complete(&self) -> bool;

    /// Raw debounced state of a key
    fn sensor_state(&self, key: Key) -> u8;

    /// True if the key is touched in the last completed measurement
    fn is_key_touched(&self, key: Key) -> bool {
        self.sensor_state(key) & KEY_TOUCHED_MASK != 0
    }
}
