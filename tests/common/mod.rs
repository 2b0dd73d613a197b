#![allow(dead_code)]

use std::collections::VecDeque;

use buzzybee::{ActuatorOutput, KEY_TOUCHED_MASK, Key, Led, PwmOutput, RandomSource, TouchSensor};

/// PWM output remembering the last value of each channel
#[derive(Debug, Default)]
pub struct RecordingPwm {
    pub channels: [u8; 2],
    pub writes: usize,
}

impl PwmOutput for RecordingPwm {
    fn set_channel_brightness(&mut self, led: Led, value: u8) {
        self.channels[led.index()] = value;
        self.writes += 1;
    }
}

/// Actuator remembering every switch
#[derive(Debug, Default)]
pub struct RecordingActuator {
    pub on: bool,
    pub history: Vec<bool>,
}

impl ActuatorOutput for RecordingActuator {
    fn set_actuator(&mut self, on: bool) {
        self.on = on;
        self.history.push(on);
    }
}

/// Touch sensor with directly settable keys
#[derive(Debug)]
pub struct MockTouch {
    pub complete: bool,
    pub mode: bool,
    pub actuator: bool,
    /// Bits reported besides the touched flag
    pub noise: u8,
    pub measurements: usize,
}

impl Default for MockTouch {
    fn default() -> Self {
        Self {
            complete: true,
            mode: false,
            actuator: false,
            noise: 0,
            measurements: 0,
        }
    }
}

impl TouchSensor for MockTouch {
    fn begin_measurement(&mut self) {
        self.measurements += 1;
    }

    fn is_measurement_complete(&self) -> bool {
        self.complete
    }

    fn sensor_state(&self, key: Key) -> u8 {
        let touched = match key {
            Key::Mode => self.mode,
            Key::Actuator => self.actuator,
        };
        let state = self.noise & !KEY_TOUCHED_MASK;
        if touched { state | KEY_TOUCHED_MASK } else { state }
    }
}

/// Random source replaying a script, then repeating a fallback value
#[derive(Debug)]
pub struct ScriptedRng {
    pub draws: VecDeque<u16>,
    pub fallback: u16,
    pub calls: usize,
}

impl ScriptedRng {
    pub fn new(draws: impl IntoIterator<Item = u16>, fallback: u16) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            fallback,
            calls: 0,
        }
    }

    /// Never starts a twinkle
    pub fn quiet() -> Self {
        Self::new([], 1)
    }
}

impl RandomSource for ScriptedRng {
    fn below(&mut self, bound: u16) -> u16 {
        self.calls += 1;
        self.draws.pop_front().unwrap_or(self.fallback) % bound
    }
}
