//! # focuser-motion
//!
//! Interrupt-driven stepper motion engine for motorized focusers, with
//! embedded-hal 1.0 drivers.
//!
//! ## Features
//!
//! - **Interrupt safe**: every engine operation is one critical section, so
//!   the main loop and the timer interrupt never see a torn update
//! - **Acceleration profiles**: linear, trapezoid or smooth-step ramps,
//!   chosen at compile time with no per-tick branching
//! - **Two-stage step timing**: fixed-rate timer ticks divided down by the
//!   profile's step frequency and a user speed divider
//! - **Drivers**: STEP/DIR chips with a SLEEP line, and ULN2003-style
//!   unipolar half stepping
//! - **Configuration-driven**: motors and ramps described in TOML
//! - **no_std compatible**: core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use focuser_motion::{driver::{IdleTimeout, StepDirDriver}, Stepper};
//!
//! let config = focuser_motion::load_config("focuser.toml")?;
//! let motor = config.motor("main").unwrap();
//!
//! let driver = StepDirDriver::new(
//!     step_pin,
//!     dir_pin,
//!     sleep_pin,
//!     delay,
//!     IdleTimeout::from_config(motor, config.timer_freq_hz),
//! )
//! .with_mode_pins([ms1, ms2, ms3], motor.microstepping_mode()?);
//!
//! let stepper: Stepper<_> = Stepper::builder()
//!     .from_config(&config, "main")?
//!     .driver(driver)
//!     .build()?;
//!
//! stepper.init();
//! stepper.set_target_position(1200);
//! stepper.start_move();
//!
//! // From the timer interrupt:
//! stepper.tick();
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging for embedded targets
//! - `accel-linear`, `accel-trapezoid` (default), `accel-smoothstep`: Select
//!   the default acceleration profile; with none of them the engine runs at
//!   constant maximum speed

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

// Must come first so the logging macros are visible everywhere
#[macro_use]
mod fmt;

// Core modules
pub mod config;
pub mod driver;
pub mod error;
pub mod motion;
pub mod motor;

// Re-exports for ergonomic API
pub use config::{validate_config, FocuserConfig, MotorConfig, SpeedLimits};
pub use driver::Driver;
pub use error::{Error, Result};
pub use motion::{AccelProfile, DefaultProfile, ProfileKind};
pub use motor::{Direction, Focuser, MotionControl, MotorId, StepGenerator, Stepper};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
