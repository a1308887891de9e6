//! Configuration validation.

use crate::error::{ConfigError, Error, Result};
use crate::motion::AccelSettings;

use super::{FocuserConfig, MotorConfig, SpeedLimits};

/// Validate a focuser configuration.
///
/// Checks:
/// - Ramp duration is at least one step
/// - Every motor has `1 <= min_speed <= max_speed`
/// - The timer is fast enough for every motor's max speed
/// - Every motor's microstepping is 1, 2 or 4
pub fn validate_config(config: &FocuserConfig) -> Result<()> {
    validate_accel(&config.accel.settings())?;

    for (_name, motor) in config.motors.iter() {
        validate_motor(motor, config.timer_freq_hz)?;
    }

    Ok(())
}

fn validate_motor(config: &MotorConfig, timer_freq: u32) -> Result<()> {
    validate_speed_limits(&config.speed_limits(), timer_freq)?;
    config.microstepping_mode()?;
    Ok(())
}

/// Validate speed limits against the timer frequency.
///
/// Both cascaded divisions in the step generator need a divisor of at least
/// one, which holds when `min >= 1` and `2 * max <= timer_freq`.
pub fn validate_speed_limits(limits: &SpeedLimits, timer_freq: u32) -> Result<()> {
    if !limits.is_valid() {
        return Err(Error::Config(ConfigError::InvalidSpeedRange {
            min: limits.min,
            max: limits.max,
        }));
    }

    if timer_freq < 2 * u32::from(limits.max) {
        return Err(Error::Config(ConfigError::TimerTooSlow {
            timer_freq,
            max_speed: limits.max,
        }));
    }

    Ok(())
}

/// Validate ramp settings.
///
/// Any `min_steps` is accepted: with 0 or 1 every move is ramped, and a
/// zero-length ramp region normalizes to full progress.
pub fn validate_accel(settings: &AccelSettings) -> Result<()> {
    if settings.duration == 0 {
        return Err(Error::Config(ConfigError::InvalidAccelDuration(
            settings.duration,
        )));
    }

    Ok(())
}
