//! Motion module for focuser-motion.
//!
//! Provides the acceleration profiles, their easing math, and the
//! tick-driven step-frequency generator.

pub mod ease;
mod generator;
mod profile;

pub use generator::StepTimer;
pub use profile::{
    AccelProfile, AccelSettings, DefaultProfile, EasePoints, Linear, NoAccel, ProfileKind,
    SmoothStep, Trapezoid, DEFAULT_ACCEL_DURATION, DEFAULT_ACCEL_MIN_STEPS,
};
