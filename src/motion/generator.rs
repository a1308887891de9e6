//! Step-frequency generation from a fixed-rate timer tick.

/// Cascaded tick counters that turn a fixed timer rate into step attempts.
///
/// The first stage fires every `timer_freq / (2 * frequency)` ticks, where
/// `frequency` comes from the acceleration profile. The second stage lets
/// every `speed / 2`-th of those through, applying the user speed divider.
#[derive(Debug, Clone, Default)]
pub struct StepTimer {
    /// Ticks since the last first-stage overflow.
    overflow: u32,

    /// Free-running second-stage counter.
    divider: u32,
}

impl StepTimer {
    /// Create a timer with both counters at zero.
    pub const fn new() -> Self {
        Self {
            overflow: 0,
            divider: 0,
        }
    }

    /// Restart the first stage. The second stage keeps running.
    #[inline]
    pub fn reset(&mut self) {
        self.overflow = 0;
    }

    /// Number of ticks since the first stage last overflowed.
    #[inline]
    pub fn overflow(&self) -> u32 {
        self.overflow
    }

    /// Advance by one timer tick.
    ///
    /// Returns `true` if a step should be attempted on this tick.
    /// `frequency` must be at least 1 and `speed` at least 2.
    pub fn poll(&mut self, timer_freq: u32, frequency: u16, speed: u16) -> bool {
        debug_assert!(frequency >= 1 && speed >= 2);

        let threshold = (timer_freq / (2 * u32::from(frequency))).saturating_sub(1);
        let count = self.overflow;
        self.overflow += 1;
        if count < threshold {
            return false;
        }
        self.overflow = 0;

        let count = self.divider;
        self.divider = self.divider.wrapping_add(1);
        count % u32::from(speed / 2) == 0
    }
}
