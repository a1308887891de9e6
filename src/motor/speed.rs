//! Runtime speed state.

use crate::error::{Error, MotorError, Result};

/// Speed divider applied after `init`.
pub const DEFAULT_SPEED_DIVIDER: u16 = 2;

/// Smallest divider the step generator accepts.
pub const MIN_SPEED_DIVIDER: u16 = 2;

/// User speed divider plus the profile-driven step frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RuntimeSpeed {
    /// User-facing divider; larger is slower.
    pub divider: u16,
    /// Step frequency for the next generator cycle, within the motor's limits.
    pub frequency: u16,
}

impl RuntimeSpeed {
    /// Default divider at the given frequency.
    pub const fn new(frequency: u16) -> Self {
        Self {
            divider: DEFAULT_SPEED_DIVIDER,
            frequency,
        }
    }

    /// Change the divider.
    ///
    /// # Errors
    ///
    /// Rejects dividers below [`MIN_SPEED_DIVIDER`], leaving the current one
    /// in place.
    pub fn set_divider(&mut self, divider: u16) -> Result<()> {
        if divider < MIN_SPEED_DIVIDER {
            return Err(Error::Motor(MotorError::InvalidSpeedDivider(divider)));
        }
        self.divider = divider;
        Ok(())
    }
}
