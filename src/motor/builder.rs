//! Builder pattern for Stepper.

use core::marker::PhantomData;

use heapless::String;

use crate::config::{
    validate_accel, validate_speed_limits, FocuserConfig, MotorConfig, MotorParams, SpeedLimits,
    DEFAULT_TIMER_FREQ_HZ,
};
use crate::driver::Driver;
use crate::error::{ConfigError, Error, Result};
use crate::motion::{AccelProfile, AccelSettings, DefaultProfile, ProfileKind};

use super::stepper::Stepper;

/// Builder for creating Stepper instances.
pub struct StepperBuilder<D: Driver, P: AccelProfile = DefaultProfile> {
    driver: Option<D>,
    name: Option<String<32>>,
    limits: Option<SpeedLimits>,
    invert_direction: bool,
    timer_freq: u32,
    accel: AccelSettings,
    configured_profile: Option<ProfileKind>,
    _profile: PhantomData<fn() -> P>,
}

impl<D: Driver, P: AccelProfile> Default for StepperBuilder<D, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Driver, P: AccelProfile> StepperBuilder<D, P> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            driver: None,
            name: None,
            limits: None,
            invert_direction: false,
            timer_freq: DEFAULT_TIMER_FREQ_HZ,
            accel: AccelSettings::default(),
            configured_profile: None,
            _profile: PhantomData,
        }
    }

    /// Set the hardware driver.
    pub fn driver(mut self, driver: D) -> Self {
        self.driver = Some(driver);
        self
    }

    /// Set the motor name, truncated to 32 bytes on a character boundary.
    pub fn name(mut self, name: &str) -> Self {
        let mut truncated = String::new();
        for c in name.chars() {
            if truncated.push(c).is_err() {
                break;
            }
        }
        self.name = Some(truncated);
        self
    }

    /// Set the step-frequency bounds.
    pub fn speed_limits(mut self, limits: SpeedLimits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Set direction inversion.
    pub fn invert_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// Set the timer interrupt frequency in Hz.
    pub fn timer_freq(mut self, hz: u32) -> Self {
        self.timer_freq = hz;
        self
    }

    /// Set the ramp settings.
    pub fn accel(mut self, settings: AccelSettings) -> Self {
        self.accel = settings;
        self
    }

    /// Configure from a MotorConfig.
    pub fn from_motor_config(mut self, config: &MotorConfig) -> Self {
        self.name = Some(config.name.clone());
        self.limits = Some(config.speed_limits());
        self.invert_direction = config.invert_direction;
        self
    }

    /// Configure from FocuserConfig by motor name, including the shared
    /// timer and ramp settings.
    pub fn from_config(mut self, config: &FocuserConfig, motor_name: &str) -> Result<Self> {
        let motor_config = config.motor(motor_name).ok_or_else(|| {
            Error::Config(ConfigError::MotorNotFound(
                String::try_from(motor_name).unwrap_or_default(),
            ))
        })?;

        let params = MotorParams::from_config(motor_config, config);
        self.name = Some(params.name);
        self.limits = Some(params.limits);
        self.invert_direction = params.invert_direction;
        self.timer_freq = params.timer_freq;
        self.accel = params.accel;
        self.configured_profile = config.accel.profile;

        Ok(self)
    }

    /// Build the Stepper.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver or speed limits are missing, if the
    /// limits or ramp settings are invalid, or if the configuration names a
    /// different acceleration profile than `P`.
    pub fn build(self) -> Result<Stepper<D, P>> {
        let driver = self
            .driver
            .ok_or(Error::Config(ConfigError::MissingField("driver")))?;

        let limits = self
            .limits
            .ok_or(Error::Config(ConfigError::MissingField("speed_limits")))?;

        validate_speed_limits(&limits, self.timer_freq)?;
        validate_accel(&self.accel)?;

        if let Some(configured) = self.configured_profile {
            if configured != P::KIND {
                return Err(Error::Config(ConfigError::ProfileMismatch {
                    configured,
                    built: P::KIND,
                }));
            }
        }

        let name = self.name.unwrap_or_else(|| {
            let mut name = String::new();
            // "motor" always fits
            let _ = name.push_str("motor");
            name
        });

        let params = MotorParams {
            name,
            limits,
            invert_direction: self.invert_direction,
            timer_freq: self.timer_freq,
            accel: self.accel,
        };

        Ok(Stepper::new(driver, params))
    }
}
