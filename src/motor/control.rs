//! Control-surface traits.
//!
//! The protocol and UI layers only see [`MotionControl`]; the timer
//! interrupt only sees [`StepGenerator`].

use crate::driver::Driver;
use crate::error::Result;
use crate::motion::AccelProfile;

use super::stepper::Stepper;

/// Engine control surface for one motor.
///
/// Object safe, so a dual-motor front end can hand out `&dyn MotionControl`
/// for whichever motor is selected.
pub trait MotionControl {
    /// Motor name.
    fn name(&self) -> &str;

    /// Reset the speed divider and the tick counter.
    fn init(&self);

    /// Start stepping towards the target.
    fn start_move(&self);

    /// Stop immediately.
    fn halt(&self);

    /// Whether the motor is stepping towards its target.
    fn is_moving(&self) -> bool;

    /// Current position in steps.
    fn current_position(&self) -> u32;

    /// Declare the current position (the target follows).
    fn set_current_position(&self, position: u32);

    /// Target position in steps.
    fn target_position(&self) -> u32;

    /// Set a new target.
    fn set_target_position(&self, target: u32);

    /// User speed divider.
    fn speed(&self) -> u16;

    /// Set the user speed divider.
    fn set_speed(&self, divider: u16) -> Result<()>;
}

/// Timer-interrupt entry point.
pub trait StepGenerator {
    /// Run one timer tick.
    fn tick(&self);
}

impl<D: Driver, P: AccelProfile> MotionControl for Stepper<D, P> {
    fn name(&self) -> &str {
        Stepper::name(self)
    }

    fn init(&self) {
        Stepper::init(self)
    }

    fn start_move(&self) {
        Stepper::start_move(self)
    }

    fn halt(&self) {
        Stepper::halt(self)
    }

    fn is_moving(&self) -> bool {
        Stepper::is_moving(self)
    }

    fn current_position(&self) -> u32 {
        Stepper::current_position(self)
    }

    fn set_current_position(&self, position: u32) {
        Stepper::set_current_position(self, position)
    }

    fn target_position(&self) -> u32 {
        Stepper::target_position(self)
    }

    fn set_target_position(&self, target: u32) {
        Stepper::set_target_position(self, target)
    }

    fn speed(&self) -> u16 {
        Stepper::speed(self)
    }

    fn set_speed(&self, divider: u16) -> Result<()> {
        Stepper::set_speed(self, divider)
    }
}

impl<D: Driver, P: AccelProfile> StepGenerator for Stepper<D, P> {
    fn tick(&self) {
        Stepper::tick(self)
    }
}
