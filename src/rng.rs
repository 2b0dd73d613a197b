//! Uniform random source used by the twinkle and random modes

/// Source of uniform random integers
///
/// Injected into the engine so tests can script the draws.
pub trait RandomSource {
    /// Uniform value in `0..bound`. `bound` is never zero.
    fn below(&mut self, bound: u16) -> u16;
}

impl RandomSource for fastrand::Rng {
    fn below(&mut self, bound: u16) -> u16 {
        debug_assert!(bound > 0);
        self.u16(..bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn below(&mut self, bound: u16) -> u16 {
        (**self).below(bound)
    }
}
