//! Main loop iteration
//!
//! Ties the animation engine and the input arbiter to the hardware outputs.
//! Portable: the caller provides the tick snapshot and does the sleeping,
//! or hands a tick source and a delay to [`Controller::run`].

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::arbiter::{InputArbiter, InputEvent, InputEvents, OverrideState};
use crate::config::{BUZZ_BRIGHTNESS, LOOP_TIMINGS, LoopTimings};
use crate::engine::AnimationEngine;
use crate::led::LedFrame;
use crate::mode::ModeId;
use crate::rng::RandomSource;
use crate::tick::TickSource;
use crate::touch::TouchSensor;
use crate::{ActuatorOutput, PwmOutput};

/// Result of a single loop iteration
#[derive(Debug, Clone)]
pub struct StepResult {
    /// Frame written to the PWM output
    pub frame: LedFrame,
    /// Key edges handled in this iteration
    pub events: InputEvents,
    /// True if the touch driver finished a measurement this iteration
    pub measured: bool,
    /// How long to wait before the next iteration
    pub sleep_duration: Duration,
}

/// Device controller
///
/// ```ignore
/// let mut controller = Controller::new(pwm, motor, touch, fastrand::Rng::with_seed(seed));
///
/// loop {
///     let result = controller.step(TICKS.ticks());
///     delay.delay_ms(result.sleep_duration.as_millis() as u32);
/// }
/// ```
pub struct Controller<P, A, T, R>
where
    P: PwmOutput,
    A: ActuatorOutput,
    T: TouchSensor,
    R: RandomSource,
{
    pwm: P,
    actuator: A,
    touch: T,
    rng: R,
    engine: AnimationEngine,
    arbiter: InputArbiter,
    timings: LoopTimings,
    actuator_on: bool,
}

impl<P, A, T, R> Controller<P, A, T, R>
where
    P: PwmOutput,
    A: ActuatorOutput,
    T: TouchSensor,
    R: RandomSource,
{
    /// Create a controller in twinkle mode
    ///
    /// Writes the dim floor to both channels and stops the motor.
    pub fn new(pwm: P, actuator: A, touch: T, rng: R) -> Self {
        Self::with_mode(pwm, actuator, touch, rng, ModeId::default())
    }

    /// Create a controller starting in `mode`
    pub fn with_mode(mut pwm: P, mut actuator: A, touch: T, rng: R, mode: ModeId) -> Self {
        let engine = AnimationEngine::new(mode);
        pwm.write_frame(&engine.frame());
        actuator.set_actuator(false);

        Self {
            pwm,
            actuator,
            touch,
            rng,
            engine,
            arbiter: InputArbiter::new(),
            timings: LOOP_TIMINGS,
            actuator_on: false,
        }
    }

    /// Run one loop iteration with the given tick snapshot
    ///
    /// 1. Renders the active mode, or the override cue
    /// 2. Polls the touch sensor and applies key edges
    /// 3. Writes the frame to the PWM output
    pub fn step(&mut self, ticks: u16) -> StepResult {
        self.engine.render(ticks, self.arbiter.overrides(), &mut self.rng);

        let polled = self.arbiter.poll(&mut self.touch);
        let measured = polled.is_some();
        let events = polled.unwrap_or_default();
        for event in &events {
            self.apply_event(*event);
        }
        // A mode entry may have repainted the frame while the motor runs
        if self.arbiter.overrides().buzzed {
            self.engine.fill(BUZZ_BRIGHTNESS);
        }

        let frame = self.engine.frame();
        self.pwm.write_frame(&frame);

        let mut sleep_duration = self.timings.iteration;
        if measured && self.arbiter.overrides().touched {
            sleep_duration += self.timings.mode_key_hold;
        }

        StepResult {
            frame,
            events,
            measured,
            sleep_duration,
        }
    }

    /// Run the loop forever, sampling `ticks` once per iteration
    pub fn run<S: TickSource, D: DelayNs>(mut self, ticks: &S, delay: &mut D) -> ! {
        loop {
            let result = self.step(ticks.ticks());
            #[allow(clippy::cast_possible_truncation)]
            let micros = result.sleep_duration.as_micros() as u32;
            delay.delay_us(micros);
        }
    }

    fn apply_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::ModeKeyPressed => {
                // Cue is drawn by the engine on the next render
            }
            InputEvent::ModeAdvance => {
                self.engine.next_mode();
            }
            InputEvent::BuzzStart => {
                #[cfg(feature = "esp32-log")]
                println!("[Controller] buzz start");
                self.set_actuator(true);
                self.engine.fill(BUZZ_BRIGHTNESS);
            }
            InputEvent::BuzzStop => {
                #[cfg(feature = "esp32-log")]
                println!("[Controller] buzz stop");
                self.set_actuator(false);
                self.engine.clear_to_floor();
            }
        }
    }

    fn set_actuator(&mut self, on: bool) {
        self.actuator.set_actuator(on);
        self.actuator_on = on;
    }

    pub const fn mode(&self) -> ModeId {
        self.engine.mode()
    }

    pub const fn overrides(&self) -> OverrideState {
        self.arbiter.overrides()
    }

    pub const fn is_actuator_on(&self) -> bool {
        self.actuator_on
    }

    /// Get a reference to the engine.
    pub const fn engine(&self) -> &AnimationEngine {
        &self.engine
    }

    pub const fn pwm(&self) -> &P {
        &self.pwm
    }

    pub const fn actuator(&self) -> &A {
        &self.actuator
    }

    /// Get a mutable reference to the touch sensor.
    pub fn touch_mut(&mut self) -> &mut T {
        &mut self.touch
    }
}
