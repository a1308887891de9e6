//! Acceleration configuration from TOML.

use serde::Deserialize;

use crate::motion::{AccelSettings, ProfileKind, DEFAULT_ACCEL_DURATION, DEFAULT_ACCEL_MIN_STEPS};

/// Acceleration section of the configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AccelConfig {
    /// Expected profile. Checked against the compiled profile when set.
    #[serde(default)]
    pub profile: Option<ProfileKind>,

    /// Ramp length in steps.
    #[serde(default = "default_duration_steps")]
    pub duration_steps: u32,

    /// Moves shorter than this many steps skip the ramp.
    #[serde(default = "default_min_steps")]
    pub min_steps: u32,
}

fn default_duration_steps() -> u32 {
    DEFAULT_ACCEL_DURATION
}

fn default_min_steps() -> u32 {
    DEFAULT_ACCEL_MIN_STEPS
}

impl AccelConfig {
    /// Ramp settings for the motion engine.
    pub fn settings(&self) -> AccelSettings {
        AccelSettings::new(self.duration_steps, self.min_steps)
    }
}

impl Default for AccelConfig {
    fn default() -> Self {
        Self {
            profile: None,
            duration_steps: DEFAULT_ACCEL_DURATION,
            min_steps: DEFAULT_ACCEL_MIN_STEPS,
        }
    }
}
