//! Dual-motor focuser facade.
//!
//! A focuser drives up to two motors that move independently. The UI
//! addresses one of them at a time; the timer interrupt ticks both.

use core::cell::Cell;

use critical_section::Mutex;

use super::control::{MotionControl, StepGenerator};

/// Which of the two motors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorId {
    /// First motor.
    #[default]
    Primary,
    /// Second motor.
    Secondary,
}

impl MotorId {
    /// The other motor.
    #[inline]
    pub fn toggle(self) -> Self {
        match self {
            MotorId::Primary => MotorId::Secondary,
            MotorId::Secondary => MotorId::Primary,
        }
    }
}

/// Two independent engines plus the UI's motor selection.
///
/// # Example
///
/// ```rust,ignore
/// use focuser_motion::motor::{Focuser, MotorId};
///
/// static FOCUSER: StaticCell<Focuser<MainStepper, AuxStepper>> = StaticCell::new();
/// let focuser = FOCUSER.init(Focuser::new(main, aux));
/// focuser.init();
///
/// // Main loop
/// focuser.select(MotorId::Secondary);
/// focuser.active_motor().set_target_position(1200);
/// focuser.active_motor().start_move();
///
/// // Timer interrupt
/// focuser.tick();
/// ```
pub struct Focuser<A, B> {
    primary: A,
    secondary: B,
    active: Mutex<Cell<MotorId>>,
}

impl<A, B> Focuser<A, B>
where
    A: MotionControl + StepGenerator,
    B: MotionControl + StepGenerator,
{
    /// Create a focuser with the primary motor selected.
    pub fn new(primary: A, secondary: B) -> Self {
        Self {
            primary,
            secondary,
            active: Mutex::new(Cell::new(MotorId::Primary)),
        }
    }

    /// Initialize both engines.
    pub fn init(&self) {
        self.primary.init();
        self.secondary.init();
    }

    /// Control surface of one motor.
    pub fn motor(&self, id: MotorId) -> &dyn MotionControl {
        match id {
            MotorId::Primary => &self.primary,
            MotorId::Secondary => &self.secondary,
        }
    }

    /// The primary engine.
    pub fn primary(&self) -> &A {
        &self.primary
    }

    /// The secondary engine.
    pub fn secondary(&self) -> &B {
        &self.secondary
    }

    /// Currently selected motor.
    pub fn active(&self) -> MotorId {
        critical_section::with(|cs| self.active.borrow(cs).get())
    }

    /// Select a motor.
    pub fn select(&self, id: MotorId) {
        critical_section::with(|cs| self.active.borrow(cs).set(id));
        debug!("selected {}", id);
    }

    /// Switch to the other motor and return it.
    pub fn toggle(&self) -> MotorId {
        let id = critical_section::with(|cs| {
            let active = self.active.borrow(cs);
            let id = active.get().toggle();
            active.set(id);
            id
        });
        debug!("selected {}", id);
        id
    }

    /// Control surface of the selected motor.
    pub fn active_motor(&self) -> &dyn MotionControl {
        self.motor(self.active())
    }

    /// Whether either motor is moving.
    pub fn is_any_moving(&self) -> bool {
        self.primary.is_moving() || self.secondary.is_moving()
    }

    /// Halt both motors.
    pub fn halt_all(&self) {
        self.primary.halt();
        self.secondary.halt();
    }

    /// Run one timer tick on both engines.
    pub fn tick(&self) {
        self.primary.tick();
        self.secondary.tick();
    }

    /// Consume the focuser and return both engines.
    pub fn release(self) -> (A, B) {
        (self.primary, self.secondary)
    }
}
