//! Input arbitration
//!
//! Turns touch sensor readings into override flags and edge events.

use heapless::Vec;

use crate::touch::{Key, TouchSensor};

/// Maximum events produced by one measurement: one edge per key
pub const MAX_EVENTS: usize = 2;

/// Debounced state of a single key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyState {
    #[default]
    Released,
    Held,
}

impl KeyState {
    pub const fn from_touched(touched: bool) -> Self {
        if touched { Self::Held } else { Self::Released }
    }

    pub const fn is_held(self) -> bool {
        matches!(self, Self::Held)
    }
}

/// Conditions that replace mode rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverrideState {
    /// Mode key is held; a mode change follows on release
    pub touched: bool,
    /// Actuator key is held; the motor runs
    pub buzzed: bool,
}

impl OverrideState {
    pub const fn is_active(self) -> bool {
        self.touched || self.buzzed
    }

    pub const fn key_state(self, key: Key) -> KeyState {
        match key {
            Key::Mode => KeyState::from_touched(self.touched),
            Key::Actuator => KeyState::from_touched(self.buzzed),
        }
    }
}

/// Key edges found in a measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Mode key went down; rendering shows the pending transition cue
    ModeKeyPressed,
    /// Mode key was released; advance to the next mode
    ModeAdvance,
    /// Actuator key went down; start the motor
    BuzzStart,
    /// Actuator key was released; stop the motor
    BuzzStop,
}

pub type InputEvents = Vec<InputEvent, MAX_EVENTS>;

/// Tracks key states across measurements and reports edges
#[derive(Debug, Clone, Default)]
pub struct InputArbiter {
    overrides: OverrideState,
}

impl InputArbiter {
    pub const fn new() -> Self {
        Self {
            overrides: OverrideState {
                touched: false,
                buzzed: false,
            },
        }
    }

    pub const fn overrides(&self) -> OverrideState {
        self.overrides
    }

    /// Drive the sensor and process a completed measurement (non-blocking)
    ///
    /// Returns `None` while the measurement is still running; the override
    /// flags are left as they were.
    pub fn poll<T: TouchSensor + ?Sized>(&mut self, sensor: &mut T) -> Option<InputEvents> {
        sensor.begin_measurement();
        if !sensor.is_measurement_complete() {
            return None;
        }

        let mut events = InputEvents::new();

        let mode_touched = sensor.is_key_touched(Key::Mode);
        match (self.overrides.key_state(Key::Mode), mode_touched) {
            (KeyState::Released, true) => {
                self.overrides.touched = true;
                push_event(&mut events, InputEvent::ModeKeyPressed);
            }
            (KeyState::Held, false) => {
                self.overrides.touched = false;
                push_event(&mut events, InputEvent::ModeAdvance);
            }
            _ => {}
        }

        let actuator_touched = sensor.is_key_touched(Key::Actuator);
        match (self.overrides.key_state(Key::Actuator), actuator_touched) {
            (KeyState::Released, true) => {
                self.overrides.buzzed = true;
                push_event(&mut events, InputEvent::BuzzStart);
            }
            (KeyState::Held, false) => {
                self.overrides.buzzed = false;
                push_event(&mut events, InputEvent::BuzzStop);
            }
            _ => {}
        }

        Some(events)
    }
}

/// At most one edge per key fits in [`MAX_EVENTS`]
fn push_event(events: &mut InputEvents, event: InputEvent) {
    let pushed = events.push(event);
    debug_assert!(pushed.is_ok(), "more than one edge per key in a measurement");
}
