//! Configuration module for focuser-motion.
//!
//! Provides types for loading and validating motor and acceleration
//! configuration from TOML files (with `std` feature) or pre-parsed data.

mod accel;
mod limits;
#[cfg(feature = "std")]
mod loader;
mod microstepping;
mod motor;
mod params;
mod system;
mod validation;

pub use accel::AccelConfig;
pub use limits::SpeedLimits;
pub use microstepping::Microstepping;
pub use motor::{MotorConfig, DEFAULT_SLEEP_TIMEOUT_SECS};
pub use params::MotorParams;
pub use system::{FocuserConfig, DEFAULT_TIMER_FREQ_HZ, MAX_MOTORS};
pub use validation::{validate_accel, validate_config, validate_speed_limits};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};
