//! Engine parameters derived from configuration.

use heapless::String;

use super::limits::SpeedLimits;
use super::motor::MotorConfig;
use super::system::FocuserConfig;
use crate::motion::AccelSettings;

/// Fixed per-motor parameters the engine reads on every tick.
///
/// These are computed once at initialization and never change for the
/// lifetime of the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct MotorParams {
    /// Motor name for logging/debugging.
    pub name: String<32>,

    /// Step-frequency bounds.
    pub limits: SpeedLimits,

    /// Swap which physical direction counts as outward.
    pub invert_direction: bool,

    /// Timer interrupt frequency in Hz.
    pub timer_freq: u32,

    /// Ramp settings.
    pub accel: AccelSettings,
}

impl MotorParams {
    /// Derive engine parameters from one motor entry and the shared settings.
    pub fn from_config(motor: &MotorConfig, system: &FocuserConfig) -> Self {
        Self {
            name: motor.name.clone(),
            limits: motor.speed_limits(),
            invert_direction: motor.invert_direction,
            timer_freq: system.timer_freq_hz,
            accel: system.accel.settings(),
        }
    }

    /// Timer ticks between step attempts at `frequency`, before the speed
    /// divider is applied.
    #[inline]
    pub fn ticks_per_attempt(&self, frequency: u16) -> u32 {
        (self.timer_freq / (2 * u32::from(frequency.max(1)))).max(1)
    }
}
