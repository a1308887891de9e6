//! Unipolar drivers (ULN2003 and other Darlington arrays).

use embedded_hal::digital::{OutputPin, PinState};

use crate::error::MotorError;

use super::{Driver, IdleTimeout};

/// Coil pattern for each of the eight half-step phases (IN1..IN4).
pub const HALF_STEP_SEQUENCE: [[bool; 4]; 8] = [
    [true, false, false, false],
    [true, true, false, false],
    [false, true, false, false],
    [false, true, true, false],
    [false, false, true, false],
    [false, false, true, true],
    [false, false, false, true],
    [true, false, false, true],
];

/// Four-coil unipolar driver stepping in half steps.
///
/// Coils are driven directly, so there is no wake-up delay: a step after
/// power-down re-energizes the coils immediately.
pub struct UnipolarDriver<P: OutputPin> {
    /// Coil pins IN1..IN4.
    coils: [P; 4],

    /// Current index into `HALF_STEP_SEQUENCE`.
    phase: u8,

    /// Whether the coils are currently driven.
    energized: bool,

    /// Idle ticks before de-energizing.
    idle: IdleTimeout,
}

impl<P: OutputPin> UnipolarDriver<P> {
    /// Create a new driver at phase 0 with the coils off.
    pub fn new(coils: [P; 4], idle: IdleTimeout) -> Self {
        Self {
            coils,
            phase: 0,
            energized: false,
            idle,
        }
    }

    /// Current half-step phase (0..8).
    #[inline]
    pub fn phase(&self) -> u8 {
        self.phase
    }

    /// Whether the coils are currently driven.
    #[inline]
    pub fn is_energized(&self) -> bool {
        self.energized
    }

    /// Release the coil pins.
    pub fn release(self) -> [P; 4] {
        self.coils
    }

    fn advance(&mut self, phase: u8) -> bool {
        self.idle.reset();

        let pattern = HALF_STEP_SEQUENCE[usize::from(phase)];
        if let Err(e) = self.write(pattern) {
            warn!("coil write failed: {}", e);
            return false;
        }

        self.phase = phase;
        self.energized = true;
        true
    }

    fn write(&mut self, pattern: [bool; 4]) -> Result<(), MotorError> {
        for (pin, on) in self.coils.iter_mut().zip(pattern) {
            pin.set_state(PinState::from(on)).map_err(|_| MotorError::PinError)?;
        }
        Ok(())
    }
}

impl<P: OutputPin> Driver for UnipolarDriver<P> {
    fn step_outward(&mut self) -> bool {
        self.advance((self.phase + 1) % 8)
    }

    fn step_inward(&mut self) -> bool {
        self.advance((self.phase + 7) % 8)
    }

    fn enter_idle(&mut self) {
        if !self.energized || !self.idle.elapse() {
            return;
        }

        if self.write([false; 4]).is_ok() {
            self.energized = false;
            debug!("coils off");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };

    fn expect(states: &[bool]) -> PinMock {
        let transactions: Vec<PinTransaction> = states
            .iter()
            .map(|&on| PinTransaction::set(if on { PinState::High } else { PinState::Low }))
            .collect();
        PinMock::new(&transactions)
    }

    #[test]
    fn test_half_step_sequence_is_one_coil_change_per_step() {
        for i in 0..8 {
            let a = HALF_STEP_SEQUENCE[i];
            let b = HALF_STEP_SEQUENCE[(i + 1) % 8];
            let changes = a.iter().zip(b.iter()).filter(|(x, y)| x != y).count();
            assert_eq!(changes, 1);
        }
    }

    #[test]
    fn test_outward_inward_and_power_down() {
        // outward -> phase 1, outward -> phase 2, inward -> phase 1, then off
        let mut in1 = expect(&[true, false, true, false]);
        let mut in2 = expect(&[true, true, true, false]);
        let mut in3 = expect(&[false, false, false, false]);
        let mut in4 = expect(&[false, false, false, false]);

        let mut driver = UnipolarDriver::new(
            [in1.clone(), in2.clone(), in3.clone(), in4.clone()],
            IdleTimeout::after_ticks(1),
        );

        assert!(driver.step_outward());
        assert_eq!(driver.phase(), 1);
        assert!(driver.step_outward());
        assert_eq!(driver.phase(), 2);
        assert!(driver.step_inward());
        assert_eq!(driver.phase(), 1);
        assert!(driver.is_energized());

        driver.enter_idle();
        assert!(!driver.is_energized());
        driver.enter_idle();

        in1.done();
        in2.done();
        in3.done();
        in4.done();
    }

    #[test]
    fn test_inward_wraps_from_phase_zero() {
        let mut in1 = expect(&[true]);
        let mut in2 = expect(&[false]);
        let mut in3 = expect(&[false]);
        let mut in4 = expect(&[true]);

        let mut driver = UnipolarDriver::new(
            [in1.clone(), in2.clone(), in3.clone(), in4.clone()],
            IdleTimeout::never(),
        );

        assert!(driver.step_inward());
        assert_eq!(driver.phase(), 7);

        in1.done();
        in2.done();
        in3.done();
        in4.done();
    }
}
