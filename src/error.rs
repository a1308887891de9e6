//! Error types for focuser-motion.
//!
//! The motion engine itself never fails at runtime; errors come from
//! configuration and from rejected control-surface inputs.

use core::fmt;

use crate::motion::ProfileKind;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all focuser-motion operations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Motor control-surface error
    Motor(MotorError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Motor name not found in configuration
    MotorNotFound(heapless::String<32>),
    /// A required builder field was not provided
    MissingField(&'static str),
    /// Speed range is unusable (min must be >= 1 and <= max)
    InvalidSpeedRange {
        /// Minimum step frequency
        min: u16,
        /// Maximum step frequency
        max: u16,
    },
    /// Timer runs too slowly to reach the maximum step frequency
    TimerTooSlow {
        /// Timer interrupt frequency in Hz
        timer_freq: u32,
        /// Maximum step frequency
        max_speed: u16,
    },
    /// Ramp duration must be at least one step
    InvalidAccelDuration(u32),
    /// Microstepping must be 1, 2 or 4
    InvalidMicrostepping(u8),
    /// Configured acceleration profile differs from the compiled one
    ProfileMismatch {
        /// Profile named in the configuration
        configured: ProfileKind,
        /// Profile the engine was built with
        built: ProfileKind,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Motor control-surface errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorError {
    /// Speed divider below 2 would degenerate the step-rate division
    InvalidSpeedDivider(u16),
    /// Pin operation failed
    PinError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::MotorNotFound(name) => write!(f, "Motor '{}' not found", name),
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            ConfigError::InvalidSpeedRange { min, max } => {
                write!(f, "Invalid speed range: min ({}) must be >= 1 and <= max ({})", min, max)
            }
            ConfigError::TimerTooSlow { timer_freq, max_speed } => write!(
                f,
                "Timer frequency {} Hz cannot drive max speed {} (needs at least {} Hz)",
                timer_freq,
                max_speed,
                2 * u32::from(*max_speed)
            ),
            ConfigError::InvalidAccelDuration(v) => {
                write!(f, "Invalid acceleration duration: {}. Must be > 0", v)
            }
            ConfigError::InvalidMicrostepping(v) => {
                write!(f, "Invalid microstepping: {}. Must be 1, 2 or 4", v)
            }
            ConfigError::ProfileMismatch { configured, built } => write!(
                f,
                "Configured profile '{}' does not match compiled profile '{}'",
                configured, built
            ),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::InvalidSpeedDivider(v) => {
                write!(f, "Invalid speed divider: {}. Must be >= 2", v)
            }
            MotorError::PinError => write!(f, "GPIO pin operation failed"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_too_slow_message() {
        let err = Error::from(ConfigError::TimerTooSlow {
            timer_freq: 500,
            max_speed: 400,
        });
        let msg = format!("{}", err);
        assert!(msg.contains("800 Hz"));
    }
}
