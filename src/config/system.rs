//! System configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::accel::AccelConfig;
use super::motor::MotorConfig;

/// Default timer interrupt frequency in Hz.
pub const DEFAULT_TIMER_FREQ_HZ: u32 = 10_000;

/// Maximum number of motors a focuser drives.
pub const MAX_MOTORS: usize = 2;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct FocuserConfig {
    /// Rate of the timer interrupt that drives the step generator.
    #[serde(default = "default_timer_freq_hz")]
    pub timer_freq_hz: u32,

    /// Acceleration settings shared by all motors.
    #[serde(default, rename = "acceleration")]
    pub accel: AccelConfig,

    /// Named motor configurations.
    pub motors: FnvIndexMap<String<32>, MotorConfig, MAX_MOTORS>,
}

fn default_timer_freq_hz() -> u32 {
    DEFAULT_TIMER_FREQ_HZ
}

impl FocuserConfig {
    /// Get a motor configuration by name.
    pub fn motor(&self, name: &str) -> Option<&MotorConfig> {
        self.motors
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// List all motor names in declaration order.
    pub fn motor_names(&self) -> impl Iterator<Item = &str> {
        self.motors.keys().map(|s| s.as_str())
    }
}

impl Default for FocuserConfig {
    fn default() -> Self {
        Self {
            timer_freq_hz: DEFAULT_TIMER_FREQ_HZ,
            accel: AccelConfig::default(),
            motors: FnvIndexMap::new(),
        }
    }
}
