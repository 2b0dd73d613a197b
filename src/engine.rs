#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::arbiter::OverrideState;
use crate::config::{BUZZ_BRIGHTNESS, DIM_FLOOR, PENDING_TRANSITION};
use crate::led::LedFrame;
use crate::mode::{ModeId, ModeSlot};
use crate::rng::RandomSource;

/// Animation engine - owns the active mode and the LED frame
#[derive(Debug, Clone)]
pub struct AnimationEngine {
    slot: ModeSlot,
    frame: LedFrame,
}

impl AnimationEngine {
    /// Create an engine running `mode`, starting from a dim frame
    pub fn new(mode: ModeId) -> Self {
        let mut frame = LedFrame::splat(DIM_FLOOR);
        let slot = mode.to_slot(&mut frame);
        Self { slot, frame }
    }

    /// Compute this iteration's frame
    ///
    /// Overrides take precedence over the active mode, which is left frozen
    /// while either one is in effect.
    pub fn render<R: RandomSource>(
        &mut self,
        ticks: u16,
        overrides: OverrideState,
        rng: &mut R,
    ) -> LedFrame {
        if overrides.buzzed {
            self.frame.fill(BUZZ_BRIGHTNESS);
        } else if overrides.touched {
            self.frame.fill(PENDING_TRANSITION);
        } else {
            self.slot.advance(ticks, rng, &mut self.frame);
        }
        self.frame
    }

    /// Switch to the next mode in the cycle
    pub fn next_mode(&mut self) -> ModeId {
        let next = self.slot.id().next();
        self.switch_mode(next);
        next
    }

    /// Enter `mode`, resetting its state
    pub fn switch_mode(&mut self, mode: ModeId) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[AnimationEngine.switch_mode] {} -> {}",
            self.slot.id().as_str(),
            mode.as_str()
        );
        self.slot = mode.to_slot(&mut self.frame);
    }

    /// Force both channels to the dim floor
    pub fn clear_to_floor(&mut self) {
        self.frame.fill(DIM_FLOOR);
    }

    /// Force both channels to `value`
    pub fn fill(&mut self, value: u8) {
        self.frame.fill(value);
    }

    pub const fn mode(&self) -> ModeId {
        self.slot.id()
    }

    pub const fn slot(&self) -> &ModeSlot {
        &self.slot
    }

    pub const fn frame(&self) -> LedFrame {
        self.frame
    }
}

impl Default for AnimationEngine {
    fn default() -> Self {
        Self::new(ModeId::default())
    }
}
