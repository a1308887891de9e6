//! Driver capability: the hardware side of the motion engine.
//!
//! The engine only ever asks a driver for one step in a logical direction,
//! or tells it the motor is idle. Pin layout, microstepping and power
//! management are the driver's business.

mod step_dir;
mod unipolar;

pub use step_dir::{NoPin, StepDirDriver, DEFAULT_PULSE_WIDTH_US};
pub use unipolar::{UnipolarDriver, HALF_STEP_SEQUENCE};

use crate::config::MotorConfig;

/// Hardware-facing stepper driver.
///
/// Called from interrupt context; implementations must not block for more
/// than a step pulse.
pub trait Driver {
    /// Issue one step in the outward direction.
    ///
    /// Returns `false` if the driver was not ready and no step was issued.
    fn step_outward(&mut self) -> bool;

    /// Issue one step in the inward direction.
    ///
    /// Returns `false` if the driver was not ready and no step was issued.
    fn step_inward(&mut self) -> bool;

    /// Called on every tick the motor is not moving.
    fn enter_idle(&mut self);
}

/// Counts consecutive idle ticks until the driver may power down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IdleTimeout {
    /// Ticks to wait, `None` to never power down.
    limit: Option<u32>,
    /// Idle ticks seen so far.
    elapsed: u32,
}

impl IdleTimeout {
    /// Never power down.
    pub const fn never() -> Self {
        Self {
            limit: None,
            elapsed: 0,
        }
    }

    /// Power down after `ticks` consecutive idle ticks.
    pub const fn after_ticks(ticks: u32) -> Self {
        Self {
            limit: Some(ticks),
            elapsed: 0,
        }
    }

    /// Timeout configured for a motor at the given timer rate.
    pub fn from_config(motor: &MotorConfig, timer_freq: u32) -> Self {
        match motor.sleep_timeout_ticks(timer_freq) {
            Some(ticks) => Self::after_ticks(ticks),
            None => Self::never(),
        }
    }

    /// Start counting again (the motor did something).
    #[inline]
    pub fn reset(&mut self) {
        self.elapsed = 0;
    }

    /// Count one idle tick. Returns `true` once the timeout has elapsed.
    #[inline]
    pub fn elapse(&mut self) -> bool {
        match self.limit {
            Some(limit) => {
                self.elapsed = self.elapsed.saturating_add(1);
                self.elapsed >= limit
            }
            None => false,
        }
    }
}

impl Default for IdleTimeout {
    fn default() -> Self {
        Self::never()
    }
}
