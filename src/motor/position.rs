//! Position and move-progress tracking.

use crate::motion::{AccelProfile, AccelSettings};

/// Logical direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Towards higher positions.
    Outward,
    /// Towards lower positions.
    Inward,
}

impl Direction {
    /// Get the opposite direction.
    #[inline]
    pub fn reverse(self) -> Self {
        match self {
            Direction::Outward => Direction::Inward,
            Direction::Inward => Direction::Outward,
        }
    }
}

/// Position and profile bookkeeping for one motor.
///
/// `relative`, `distance`, `easein` and `easeout` are only maintained when
/// the engine runs an accelerated profile; they stay at zero otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PositionState {
    /// Steps from the reference zero.
    pub current: u32,
    /// Desired end position.
    pub target: u32,
    /// Whether the engine is stepping towards `target`.
    pub moving: bool,
    /// Steps completed since the target was last set.
    pub relative: u32,
    /// `|current - target|` when the target was last set.
    pub distance: u32,
    /// End of the ramp-up region, in steps into the move.
    pub easein: u32,
    /// Start of the ramp-down region, in steps into the move.
    pub easeout: u32,
}

impl PositionState {
    /// Stopped at zero.
    pub const fn new() -> Self {
        Self {
            current: 0,
            target: 0,
            moving: false,
            relative: 0,
            distance: 0,
            easein: 0,
            easeout: 0,
        }
    }

    /// Set a new target and restart the profile bookkeeping from the
    /// current position.
    pub fn retarget<P: AccelProfile>(&mut self, target: u32, settings: &AccelSettings) {
        self.target = target;

        if !P::ACCELERATED {
            return;
        }

        self.relative = 0;
        self.distance = self.current.abs_diff(target);

        let points = if self.distance >= settings.min_steps {
            P::ease_points(self.distance, settings)
        } else {
            Default::default()
        };
        self.easein = points.easein;
        self.easeout = points.easeout;
    }

    /// Direction towards the target, or `None` once it is reached.
    ///
    /// Decided by comparison so `current` never wraps.
    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        use core::cmp::Ordering;

        match self.target.cmp(&self.current) {
            Ordering::Greater => Some(Direction::Outward),
            Ordering::Less => Some(Direction::Inward),
            Ordering::Equal => None,
        }
    }

    /// Record one issued step.
    ///
    /// Only called with the direction returned by [`direction`](Self::direction).
    #[inline]
    pub fn advance(&mut self, direction: Direction, accelerated: bool) {
        match direction {
            Direction::Outward => self.current = self.current.saturating_add(1),
            Direction::Inward => self.current = self.current.saturating_sub(1),
        }

        if accelerated {
            self.relative = self.relative.saturating_add(1).min(self.distance);
        }
    }

    /// Declare the current position, cancelling any net motion.
    #[inline]
    pub fn recalibrate(&mut self, position: u32) {
        self.current = position;
        self.target = position;
    }

    /// Stop where we are.
    #[inline]
    pub fn halt(&mut self) {
        self.target = self.current;
        self.moving = false;
    }

    /// Steps left until the target.
    #[inline]
    pub fn remaining(&self) -> u32 {
        self.current.abs_diff(self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{Linear, NoAccel, Trapezoid};

    #[test]
    fn test_retarget_computes_profile() {
        let settings = AccelSettings::default();
        let mut pos = PositionState::new();
        pos.current = 100;

        pos.retarget::<Trapezoid>(1100, &settings);
        assert_eq!(pos.target, 1100);
        assert_eq!(pos.relative, 0);
        assert_eq!(pos.distance, 1000);
        assert_eq!(pos.easein, 250);
        assert_eq!(pos.easeout, 750);
    }

    #[test]
    fn test_retarget_inward() {
        let settings = AccelSettings::default();
        let mut pos = PositionState::new();
        pos.current = 500;

        pos.retarget::<Linear>(100, &settings);
        assert_eq!(pos.distance, 400);
        assert_eq!(pos.easein, 200);
        assert_eq!(pos.easeout, 200);
        assert_eq!(pos.direction(), Some(Direction::Inward));
    }

    #[test]
    fn test_retarget_below_threshold_clears_points() {
        let settings = AccelSettings::default();
        let mut pos = PositionState::new();

        pos.retarget::<Trapezoid>(1000, &settings);
        assert_eq!(pos.easein, 250);

        pos.retarget::<Trapezoid>(9, &settings);
        assert_eq!(pos.distance, 9);
        assert_eq!(pos.easein, 0);
        assert_eq!(pos.easeout, 0);
    }

    #[test]
    fn test_retarget_without_acceleration() {
        let settings = AccelSettings::default();
        let mut pos = PositionState::new();

        pos.retarget::<NoAccel>(1000, &settings);
        assert_eq!(pos.target, 1000);
        assert_eq!(pos.distance, 0);
        assert_eq!(pos.easein, 0);
    }

    #[test]
    fn test_advance_saturates_relative() {
        let settings = AccelSettings::default();
        let mut pos = PositionState::new();
        pos.retarget::<Linear>(2, &settings);

        pos.advance(Direction::Outward, true);
        pos.advance(Direction::Outward, true);
        pos.advance(Direction::Outward, true);
        assert_eq!(pos.current, 3);
        assert_eq!(pos.relative, 2);
    }

    #[test]
    fn test_direction_at_range_boundaries() {
        let mut pos = PositionState::new();
        pos.recalibrate(u32::MAX);
        assert_eq!(pos.direction(), None);

        pos.target = 0;
        assert_eq!(pos.direction(), Some(Direction::Inward));

        pos.recalibrate(0);
        pos.target = u32::MAX;
        assert_eq!(pos.direction(), Some(Direction::Outward));
        assert_eq!(pos.remaining(), u32::MAX);
    }

    #[test]
    fn test_halt_and_recalibrate() {
        let mut pos = PositionState::new();
        pos.current = 10;
        pos.target = 50;
        pos.moving = true;

        pos.halt();
        assert!(!pos.moving);
        assert_eq!(pos.target, 10);

        pos.target = 70;
        pos.moving = true;
        pos.recalibrate(3);
        assert_eq!(pos.current, 3);
        assert_eq!(pos.target, 3);
        assert!(pos.moving);
    }

    #[test]
    fn test_direction_reverse() {
        assert_eq!(Direction::Outward.reverse(), Direction::Inward);
        assert_eq!(Direction::Inward.reverse(), Direction::Outward);
    }
}
