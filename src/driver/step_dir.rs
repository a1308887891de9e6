//! STEP/DIR drivers (A4988, DRV8825 and compatibles).
//!
//! Generic over embedded-hal 1.0 pin types.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin, PinState};

use crate::config::Microstepping;
use crate::error::MotorError;
use crate::motor::Direction;

use super::{Driver, IdleTimeout};

/// Default STEP pulse width in microseconds.
pub const DEFAULT_PULSE_WIDTH_US: u32 = 2;

/// Placeholder for mode pins that are hardwired on the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPin;

impl ErrorType for NoPin {
    type Error = Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// STEP/DIR stepper driver with a SLEEP line.
///
/// Generic over:
/// - `STEP`: STEP pin type (must implement `OutputPin`)
/// - `DIR`: DIR pin type (must implement `OutputPin`)
/// - `SLEEP`: active-low SLEEP pin type (must implement `OutputPin`)
/// - `DELAY`: Delay provider for the pulse width (must implement `DelayNs`)
/// - `MS`: MS1..MS3 mode pin type, [`NoPin`] when the mode is hardwired
///
/// The driver starts asleep. The first step request after sleeping only
/// wakes the chip and reports "not ready"; the engine retries on its next
/// step attempt, which gives the charge pump time to come up.
pub struct StepDirDriver<STEP, DIR, SLEEP, DELAY, MS = NoPin>
where
    STEP: OutputPin,
    DIR: OutputPin,
    SLEEP: OutputPin,
    DELAY: DelayNs,
    MS: OutputPin,
{
    /// STEP pin (pulse to move one step).
    step_pin: STEP,

    /// DIR pin (high = outward).
    dir_pin: DIR,

    /// SLEEP pin (low = powered down).
    sleep_pin: SLEEP,

    /// Delay provider for step pulses.
    delay: DELAY,

    /// MS1..MS3, written on every wake-up.
    mode_pins: Option<[MS; 3]>,

    /// Step-size mode driven onto the mode pins.
    microstepping: Microstepping,

    /// Current direction (cached to avoid unnecessary pin writes).
    current_direction: Option<Direction>,

    /// Whether the chip is powered.
    awake: bool,

    /// Idle ticks before powering down.
    idle: IdleTimeout,

    /// STEP high time in microseconds.
    pulse_width_us: u32,
}

impl<STEP, DIR, SLEEP, DELAY> StepDirDriver<STEP, DIR, SLEEP, DELAY, NoPin>
where
    STEP: OutputPin,
    DIR: OutputPin,
    SLEEP: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new driver. The chip is considered asleep until the first step.
    pub fn new(
        step_pin: STEP,
        dir_pin: DIR,
        sleep_pin: SLEEP,
        delay: DELAY,
        idle: IdleTimeout,
    ) -> Self {
        Self {
            step_pin,
            dir_pin,
            sleep_pin,
            delay,
            mode_pins: None,
            microstepping: Microstepping::Full,
            current_direction: None,
            awake: false,
            idle,
            pulse_width_us: DEFAULT_PULSE_WIDTH_US,
        }
    }

    /// Attach MS1..MS3 and the step-size mode to drive on them.
    pub fn with_mode_pins<MS: OutputPin>(
        self,
        pins: [MS; 3],
        microstepping: Microstepping,
    ) -> StepDirDriver<STEP, DIR, SLEEP, DELAY, MS> {
        StepDirDriver {
            step_pin: self.step_pin,
            dir_pin: self.dir_pin,
            sleep_pin: self.sleep_pin,
            delay: self.delay,
            mode_pins: Some(pins),
            microstepping,
            current_direction: self.current_direction,
            awake: self.awake,
            idle: self.idle,
            pulse_width_us: self.pulse_width_us,
        }
    }
}

impl<STEP, DIR, SLEEP, DELAY, MS> StepDirDriver<STEP, DIR, SLEEP, DELAY, MS>
where
    STEP: OutputPin,
    DIR: OutputPin,
    SLEEP: OutputPin,
    DELAY: DelayNs,
    MS: OutputPin,
{
    /// Set the STEP pulse width.
    pub fn with_pulse_width(mut self, pulse_width_us: u32) -> Self {
        self.pulse_width_us = pulse_width_us;
        self
    }

    /// Whether the chip is currently powered.
    #[inline]
    pub fn is_awake(&self) -> bool {
        self.awake
    }

    /// Step-size mode written on wake-up.
    #[inline]
    pub fn microstepping(&self) -> Microstepping {
        self.microstepping
    }

    /// Release the pins and delay provider.
    pub fn release(self) -> (STEP, DIR, SLEEP, DELAY, Option<[MS; 3]>) {
        (self.step_pin, self.dir_pin, self.sleep_pin, self.delay, self.mode_pins)
    }

    fn step(&mut self, direction: Direction) -> bool {
        self.idle.reset();

        if !self.awake {
            if let Err(e) = self.wake() {
                warn!("driver wake failed: {}", e);
                return false;
            }
            self.awake = true;
            trace!("driver awake");
            return false;
        }

        if let Err(e) = self.set_direction(direction).and_then(|()| self.pulse()) {
            warn!("step failed: {}", e);
            return false;
        }

        true
    }

    fn wake(&mut self) -> Result<(), MotorError> {
        if let Some(pins) = self.mode_pins.as_mut() {
            for (pin, level) in pins.iter_mut().zip(self.microstepping.mode_levels()) {
                pin.set_state(PinState::from(level)).map_err(|_| MotorError::PinError)?;
            }
        }
        self.sleep_pin.set_high().map_err(|_| MotorError::PinError)
    }

    fn set_direction(&mut self, direction: Direction) -> Result<(), MotorError> {
        if self.current_direction == Some(direction) {
            return Ok(());
        }

        let level = match direction {
            Direction::Outward => PinState::High,
            Direction::Inward => PinState::Low,
        };
        self.dir_pin.set_state(level).map_err(|_| MotorError::PinError)?;

        self.current_direction = Some(direction);
        Ok(())
    }

    fn pulse(&mut self) -> Result<(), MotorError> {
        self.step_pin.set_high().map_err(|_| MotorError::PinError)?;
        self.delay.delay_us(self.pulse_width_us);
        self.step_pin.set_low().map_err(|_| MotorError::PinError)
    }
}

impl<STEP, DIR, SLEEP, DELAY, MS> Driver for StepDirDriver<STEP, DIR, SLEEP, DELAY, MS>
where
    STEP: OutputPin,
    DIR: OutputPin,
    SLEEP: OutputPin,
    DELAY: DelayNs,
    MS: OutputPin,
{
    fn step_outward(&mut self) -> bool {
        self.step(Direction::Outward)
    }

    fn step_inward(&mut self) -> bool {
        self.step(Direction::Inward)
    }

    fn enter_idle(&mut self) {
        if !self.awake || !self.idle.elapse() {
            return;
        }

        if self.sleep_pin.set_low().is_ok() {
            self.awake = false;
            debug!("driver asleep");
        }
    }
}
