//! Periodic tick counter shared with the timer interrupt
//!
//! The counter is 16 bits wide, which is wider than the native access of
//! small 8-bit targets. Reads and writes therefore go through a critical
//! section instead of relying on the hardware to read it atomically.

use core::cell::Cell;

use critical_section::Mutex;

/// Read-only view of a monotonically increasing tick counter
pub trait TickSource {
    /// Current tick count (wraps at `u16::MAX`)
    fn ticks(&self) -> u16;
}

/// Tick counter written by an interrupt and read by the main loop
///
/// ```ignore
/// static TICKS: SharedTicks = SharedTicks::new();
///
/// #[interrupt]
/// fn TIMER0() {
///     TICKS.increment();
/// }
/// ```
pub struct SharedTicks {
    inner: Mutex<Cell<u16>>,
}

impl SharedTicks {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(0)),
        }
    }

    /// Advance the counter by one tick
    pub fn increment(&self) {
        critical_section::with(|cs| {
            let ticks = self.inner.borrow(cs);
            ticks.set(ticks.get().wrapping_add(1));
        });
    }
}

impl Default for SharedTicks {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for SharedTicks {
    fn ticks(&self) -> u16 {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }
}

impl<T: TickSource + ?Sized> TickSource for &T {
    fn ticks(&self) -> u16 {
        (**self).ticks()
    }
}

/// Returns true while `ticks` is inside the first `window` ticks of every
/// `cadence` ticks
pub const fn in_window(ticks: u16, cadence: u16, window: u16) -> bool {
    ticks % cadence < window
}
