//! Motor configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::limits::SpeedLimits;
use super::microstepping::Microstepping;
use crate::error::ConfigError;

/// Default idle time before the driver powers down, in seconds.
pub const DEFAULT_SLEEP_TIMEOUT_SECS: u16 = 15;

/// Complete motor configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct MotorConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Slowest step frequency, used at the ends of every ramp.
    pub min_speed: u16,

    /// Fastest step frequency.
    pub max_speed: u16,

    /// Swap which physical direction counts as outward.
    #[serde(default)]
    pub invert_direction: bool,

    /// Cut motor current after the idle timeout.
    #[serde(default = "default_sleep_when_idle")]
    pub sleep_when_idle: bool,

    /// Idle time before the driver powers down.
    #[serde(default = "default_sleep_timeout_secs")]
    pub sleep_timeout_secs: u16,

    /// Microsteps per full step on STEP/DIR drivers (1, 2 or 4).
    #[serde(default = "default_microstepping")]
    pub microstepping: u8,
}

fn default_sleep_when_idle() -> bool {
    true
}

fn default_sleep_timeout_secs() -> u16 {
    DEFAULT_SLEEP_TIMEOUT_SECS
}

fn default_microstepping() -> u8 {
    1
}

impl MotorConfig {
    /// Step-frequency limits for this motor.
    pub fn speed_limits(&self) -> SpeedLimits {
        SpeedLimits::new(self.min_speed, self.max_speed)
    }

    /// Idle timeout in timer ticks, or `None` if the motor never sleeps.
    pub fn sleep_timeout_ticks(&self, timer_freq: u32) -> Option<u32> {
        self.sleep_when_idle
            .then(|| u32::from(self.sleep_timeout_secs).saturating_mul(timer_freq))
    }

    /// Driver step-size mode.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidMicrostepping` unless `microstepping` is 1, 2 or 4.
    pub fn microstepping_mode(&self) -> Result<Microstepping, ConfigError> {
        Microstepping::new(self.microstepping)
    }
}
