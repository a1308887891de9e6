//! Step-frequency limits.

use libm::roundf;

use crate::motion::ease::lerp;

/// Per-motor step-frequency bounds.
///
/// Profiles interpolate between these; the generator never runs outside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedLimits {
    /// Slowest step frequency (start and end of a ramp).
    pub min: u16,
    /// Fastest step frequency.
    pub max: u16,
}

impl SpeedLimits {
    /// Create new speed limits.
    pub const fn new(min: u16, max: u16) -> Self {
        Self { min, max }
    }

    /// Check if limits are usable (1 <= min <= max).
    pub fn is_valid(&self) -> bool {
        self.min >= 1 && self.min <= self.max
    }

    /// Check if a frequency is within limits.
    pub fn contains(&self, frequency: u16) -> bool {
        frequency >= self.min && frequency <= self.max
    }

    /// Clamp a frequency into the limits.
    pub fn clamp(&self, frequency: u16) -> u16 {
        frequency.max(self.min).min(self.max)
    }

    /// Frequency at `fraction` of the way from `min` to `max`.
    ///
    /// Only meaningful for valid limits.
    pub fn interpolate(&self, fraction: f32) -> u16 {
        let f = lerp(self.min as f32, self.max as f32, fraction.clamp(0.0, 1.0));
        let frequency = self.clamp(roundf(f) as u16);
        debug_assert!(self.contains(frequency));
        frequency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_limits_validity() {
        assert!(SpeedLimits::new(25, 500).is_valid());
        assert!(SpeedLimits::new(100, 100).is_valid());
        assert!(!SpeedLimits::new(0, 500).is_valid());
        assert!(!SpeedLimits::new(600, 500).is_valid());
    }

    #[test]
    fn test_speed_limits_clamp() {
        let limits = SpeedLimits::new(25, 500);

        assert_eq!(limits.clamp(10), 25);
        assert_eq!(limits.clamp(250), 250);
        assert_eq!(limits.clamp(900), 500);
        assert!(limits.contains(25));
        assert!(!limits.contains(501));
    }

    #[test]
    fn test_interpolate() {
        let limits = SpeedLimits::new(25, 500);

        assert_eq!(limits.interpolate(0.0), 25);
        assert_eq!(limits.interpolate(1.0), 500);
        assert_eq!(limits.interpolate(0.5), 263);
        assert_eq!(limits.interpolate(-1.0), 25);
        assert_eq!(limits.interpolate(2.0), 500);
        assert_eq!(limits.interpolate(f32::NAN), 25);
    }
}
