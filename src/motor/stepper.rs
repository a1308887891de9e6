//! The per-motor motion engine.
//!
//! A [`Stepper`] is shared between the main loop, which drives it through
//! the control surface, and the timer interrupt, which calls
//! [`Stepper::tick`]. Every operation runs inside one critical section, so
//! the interrupt never observes a half-applied update.

use core::cell::RefCell;
use core::marker::PhantomData;

use critical_section::Mutex;

use crate::config::MotorParams;
use crate::driver::Driver;
use crate::error::Result;
use crate::motion::{AccelProfile, DefaultProfile, ProfileKind, StepTimer};

use super::builder::StepperBuilder;
use super::position::{Direction, PositionState};
use super::speed::{RuntimeSpeed, DEFAULT_SPEED_DIVIDER};

/// Mutable engine state, only touched inside a critical section.
struct Engine<D> {
    driver: D,
    position: PositionState,
    speed: RuntimeSpeed,
    timer: StepTimer,
}

impl<D: Driver> Engine<D> {
    fn tick<P: AccelProfile>(&mut self, params: &MotorParams) {
        if !self.position.moving {
            self.driver.enter_idle();
            return;
        }

        if !self
            .timer
            .poll(params.timer_freq, self.speed.frequency, self.speed.divider)
        {
            return;
        }

        let Some(direction) = self.position.direction() else {
            self.position.halt();
            debug!("move complete at {}", self.position.current);
            return;
        };

        let physical = if params.invert_direction {
            direction.reverse()
        } else {
            direction
        };

        let issued = match physical {
            Direction::Outward => self.driver.step_outward(),
            Direction::Inward => self.driver.step_inward(),
        };

        // Not ready: retry on the next eligible tick
        if !issued {
            return;
        }

        self.position.advance(direction, P::ACCELERATED);
        if P::ACCELERATED {
            self.speed.frequency = P::frequency(&self.position, &params.limits, &params.accel);
        }
    }
}

/// Motion engine for one motor.
///
/// Generic over:
/// - `D`: the hardware driver (must implement [`Driver`])
/// - `P`: the acceleration profile (defaults to the one selected by the
///   `accel-*` features)
///
/// All methods take `&self`; the engine can live in a `static` shared with
/// the timer interrupt.
pub struct Stepper<D: Driver, P: AccelProfile = DefaultProfile> {
    /// Fixed parameters, read without locking.
    params: MotorParams,

    /// Everything the interrupt and the main loop both touch.
    engine: Mutex<RefCell<Engine<D>>>,

    _profile: PhantomData<fn() -> P>,
}

impl<D: Driver, P: AccelProfile> Stepper<D, P> {
    /// Create a builder for a new engine.
    pub fn builder() -> StepperBuilder<D, P> {
        StepperBuilder::new()
    }

    /// Create an engine from already validated parameters.
    pub(crate) fn new(driver: D, params: MotorParams) -> Self {
        let position = PositionState::new();
        let frequency = P::frequency(&position, &params.limits, &params.accel);

        Self {
            params,
            engine: Mutex::new(RefCell::new(Engine {
                driver,
                position,
                speed: RuntimeSpeed::new(frequency),
                timer: StepTimer::new(),
            })),
            _profile: PhantomData,
        }
    }

    fn with_engine<R>(&self, f: impl FnOnce(&mut Engine<D>) -> R) -> R {
        critical_section::with(|cs| f(&mut self.engine.borrow(cs).borrow_mut()))
    }

    /// Reset the speed divider to its default and restart the tick counter.
    pub fn init(&self) {
        self.with_engine(|engine| {
            engine.speed.divider = DEFAULT_SPEED_DIVIDER;
            engine.timer.reset();
        });
        info!("{} ready ({})", self.params.name.as_str(), P::KIND);
    }

    /// Start stepping towards the target. Does nothing to the target itself.
    pub fn start_move(&self) {
        let (target, frequency) = self.with_engine(|engine| {
            engine.timer.reset();
            engine.position.moving = true;
            (engine.position.target, engine.speed.frequency)
        });
        debug!(
            "{} moving to {}, first step in {} ticks",
            self.params.name.as_str(),
            target,
            self.params.ticks_per_attempt(frequency)
        );
    }

    /// Stop immediately. No step is issued after this returns.
    pub fn halt(&self) {
        let current = self.with_engine(|engine| {
            engine.position.halt();
            engine.position.current
        });
        debug!("{} halted at {}", self.params.name.as_str(), current);
    }

    /// Whether the engine is stepping towards its target.
    pub fn is_moving(&self) -> bool {
        self.with_engine(|engine| engine.position.moving)
    }

    /// Current position in steps.
    pub fn current_position(&self) -> u32 {
        self.with_engine(|engine| engine.position.current)
    }

    /// Declare the current position. The target follows, so there is no net
    /// motion left; the moving flag is untouched.
    pub fn set_current_position(&self, position: u32) {
        self.with_engine(|engine| engine.position.recalibrate(position));
    }

    /// Target position in steps.
    pub fn target_position(&self) -> u32 {
        self.with_engine(|engine| engine.position.target)
    }

    /// Set a new target and recompute the profile from the current position.
    pub fn set_target_position(&self, target: u32) {
        let position = self.with_engine(|engine| {
            engine.position.retarget::<P>(target, &self.params.accel);
            engine.speed.frequency =
                P::frequency(&engine.position, &self.params.limits, &self.params.accel);
            engine.position
        });
        debug!(
            "{} target {} (distance {}, easein {}, easeout {})",
            self.params.name.as_str(),
            target,
            position.distance,
            position.easein,
            position.easeout
        );
    }

    /// User speed divider.
    pub fn speed(&self) -> u16 {
        self.with_engine(|engine| engine.speed.divider)
    }

    /// Set the user speed divider (larger is slower).
    ///
    /// # Errors
    ///
    /// Returns `MotorError::InvalidSpeedDivider` for dividers below 2; the
    /// previous divider stays in effect.
    pub fn set_speed(&self, divider: u16) -> Result<()> {
        let result = self.with_engine(|engine| engine.speed.set_divider(divider));
        if result.is_err() {
            warn!("{} rejected speed divider {}", self.params.name.as_str(), divider);
        }
        result
    }

    /// Step frequency the generator is currently running at.
    pub fn step_frequency(&self) -> u16 {
        self.with_engine(|engine| engine.speed.frequency)
    }

    /// Consistent snapshot of the position state.
    pub fn position_state(&self) -> PositionState {
        self.with_engine(|engine| engine.position)
    }

    /// Run one timer tick. Call this from the timer interrupt.
    pub fn tick(&self) {
        self.with_engine(|engine| engine.tick::<P>(&self.params));
    }

    /// Run `f` with exclusive access to the driver.
    pub fn with_driver<R>(&self, f: impl FnOnce(&mut D) -> R) -> R {
        self.with_engine(|engine| f(&mut engine.driver))
    }

    /// Motor name.
    #[inline]
    pub fn name(&self) -> &str {
        self.params.name.as_str()
    }

    /// Fixed engine parameters.
    #[inline]
    pub fn params(&self) -> &MotorParams {
        &self.params
    }

    /// Acceleration profile compiled into this engine.
    #[inline]
    pub fn profile(&self) -> ProfileKind {
        P::KIND
    }

    /// Consume the engine and return its driver.
    pub fn release(self) -> D {
        self.engine.into_inner().into_inner().driver
    }
}
