//! Driver step-size mode.

use core::fmt;

use crate::error::ConfigError;

/// Step-size mode of a STEP/DIR driver (1, 2 or 4 microsteps per step).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Microstepping {
    /// Full step.
    #[default]
    Full,
    /// Half step.
    Half,
    /// Quarter step.
    Quarter,
}

impl Microstepping {
    /// Create a mode from its divisor.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidMicrostepping` for anything but 1, 2 or 4.
    pub fn new(divisor: u8) -> Result<Self, ConfigError> {
        match divisor {
            1 => Ok(Self::Full),
            2 => Ok(Self::Half),
            4 => Ok(Self::Quarter),
            other => Err(ConfigError::InvalidMicrostepping(other)),
        }
    }

    /// Microsteps per full step.
    #[inline]
    pub const fn divisor(self) -> u8 {
        match self {
            Self::Full => 1,
            Self::Half => 2,
            Self::Quarter => 4,
        }
    }

    /// MS1..MS3 levels (A4988 and DRV8825 share this part of the table).
    #[inline]
    pub const fn mode_levels(self) -> [bool; 3] {
        match self {
            Self::Full => [false, false, false],
            Self::Half => [true, false, false],
            Self::Quarter => [false, true, false],
        }
    }
}

impl TryFrom<u8> for Microstepping {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Microstepping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1/{}", self.divisor())
    }
}
