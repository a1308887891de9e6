//! Motor module for focuser-motion.
//!
//! Provides the per-motor motion engine, its control-surface traits and the
//! dual-motor focuser facade.

mod builder;
mod control;
mod position;
mod speed;
mod stepper;
mod system;

pub use builder::StepperBuilder;
pub use control::{MotionControl, StepGenerator};
pub use position::{Direction, PositionState};
pub use speed::{RuntimeSpeed, DEFAULT_SPEED_DIVIDER, MIN_SPEED_DIVIDER};
pub use stepper::Stepper;
pub use system::{Focuser, MotorId};
