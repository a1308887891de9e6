//! Acceleration profiles.
//!
//! A profile maps progress through a point-to-point move onto a step
//! frequency between a motor's minimum and maximum speed. Exactly one
//! profile is compiled into each engine as a type parameter, so the tick
//! path never branches on the algorithm.

use core::fmt;

use serde::Deserialize;

use super::ease::{normalize, smoothstep};
use crate::config::SpeedLimits;
use crate::motor::PositionState;

/// Default ramp length in steps.
pub const DEFAULT_ACCEL_DURATION: u32 = 250;

/// Default minimum move length for the ramp to apply.
pub const DEFAULT_ACCEL_MIN_STEPS: u32 = 10;

/// Identifies an acceleration algorithm in configuration and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    /// Constant maximum speed.
    None,
    /// Triangular ramp peaking at the midpoint.
    Linear,
    /// Linear ramps with a full-speed plateau.
    Trapezoid,
    /// S-curve ramps with a full-speed plateau.
    SmoothStep,
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProfileKind::None => "none",
            ProfileKind::Linear => "linear",
            ProfileKind::Trapezoid => "trapezoid",
            ProfileKind::SmoothStep => "smoothstep",
        };
        f.write_str(name)
    }
}

/// Ramp settings shared by every motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelSettings {
    /// Ramp length in steps (trapezoid and smooth-step).
    pub duration: u32,
    /// Moves shorter than this run at minimum speed without a ramp.
    pub min_steps: u32,
}

impl AccelSettings {
    /// Create ramp settings.
    pub const fn new(duration: u32, min_steps: u32) -> Self {
        Self {
            duration,
            min_steps,
        }
    }
}

impl Default for AccelSettings {
    fn default() -> Self {
        Self::new(DEFAULT_ACCEL_DURATION, DEFAULT_ACCEL_MIN_STEPS)
    }
}

/// Ramp breakpoints in steps-into-the-move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EasePoints {
    /// End of the ramp-up region.
    pub easein: u32,
    /// Start of the ramp-down region.
    pub easeout: u32,
}

impl EasePoints {
    /// Both breakpoints at the middle of the move (no plateau).
    #[inline]
    pub fn midpoint(distance: u32) -> Self {
        let half = distance / 2;
        Self {
            easein: half,
            easeout: half,
        }
    }

    /// Ramps of `duration` steps at each end, or the midpoint when the move
    /// is too short for a plateau.
    #[inline]
    pub fn plateau(distance: u32, duration: u32) -> Self {
        if distance < duration.saturating_mul(2) {
            Self::midpoint(distance)
        } else {
            Self {
                easein: duration,
                easeout: distance - duration,
            }
        }
    }
}

/// An acceleration algorithm.
pub trait AccelProfile {
    /// Which algorithm this is.
    const KIND: ProfileKind;

    /// Whether the engine keeps per-move bookkeeping for this profile.
    const ACCELERATED: bool = true;

    /// Breakpoints for a move of `distance` steps.
    fn ease_points(distance: u32, settings: &AccelSettings) -> EasePoints;

    /// Speed fraction in `0.0..=1.0` at the current progress.
    fn ramp(position: &PositionState, settings: &AccelSettings) -> f32;

    /// Step frequency for the next generator cycle.
    fn frequency(position: &PositionState, limits: &SpeedLimits, settings: &AccelSettings) -> u16 {
        if position.distance < settings.min_steps {
            limits.min
        } else {
            limits.interpolate(Self::ramp(position, settings))
        }
    }
}

/// No acceleration: every step at maximum speed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAccel;

/// Symmetric triangular profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

/// Linear ramps around a full-speed plateau.
#[derive(Debug, Clone, Copy, Default)]
pub struct Trapezoid;

/// Cubic Hermite ramps around a full-speed plateau.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmoothStep;

impl AccelProfile for NoAccel {
    const KIND: ProfileKind = ProfileKind::None;
    const ACCELERATED: bool = false;

    fn ease_points(_distance: u32, _settings: &AccelSettings) -> EasePoints {
        EasePoints::default()
    }

    fn ramp(_position: &PositionState, _settings: &AccelSettings) -> f32 {
        1.0
    }

    fn frequency(
        _position: &PositionState,
        limits: &SpeedLimits,
        _settings: &AccelSettings,
    ) -> u16 {
        limits.max
    }
}

impl AccelProfile for Linear {
    const KIND: ProfileKind = ProfileKind::Linear;

    fn ease_points(distance: u32, _settings: &AccelSettings) -> EasePoints {
        EasePoints::midpoint(distance)
    }

    fn ramp(position: &PositionState, _settings: &AccelSettings) -> f32 {
        let s = if position.relative <= position.easein {
            position.relative
        } else {
            position.distance.saturating_sub(position.relative)
        };
        normalize(s, position.easein)
    }
}

impl AccelProfile for Trapezoid {
    const KIND: ProfileKind = ProfileKind::Trapezoid;

    fn ease_points(distance: u32, settings: &AccelSettings) -> EasePoints {
        EasePoints::plateau(distance, settings.duration)
    }

    fn ramp(position: &PositionState, settings: &AccelSettings) -> f32 {
        let s = if position.relative <= position.easein {
            position.relative
        } else if position.relative >= position.easeout {
            position.distance.saturating_sub(position.relative)
        } else {
            settings.duration
        };
        normalize(s, settings.duration)
    }
}

impl AccelProfile for SmoothStep {
    const KIND: ProfileKind = ProfileKind::SmoothStep;

    fn ease_points(distance: u32, settings: &AccelSettings) -> EasePoints {
        EasePoints::plateau(distance, settings.duration)
    }

    fn ramp(position: &PositionState, _settings: &AccelSettings) -> f32 {
        let up = smoothstep(0, position.easein, position.relative);
        let down = smoothstep(position.easeout, position.distance, position.relative);
        up * (1.0 - down)
    }
}

#[cfg(any(
    all(feature = "accel-linear", feature = "accel-trapezoid"),
    all(feature = "accel-linear", feature = "accel-smoothstep"),
    all(feature = "accel-trapezoid", feature = "accel-smoothstep"),
))]
compile_error!("enable at most one of `accel-linear`, `accel-trapezoid`, `accel-smoothstep`");

/// Profile selected by the `accel-*` cargo features.
#[cfg(feature = "accel-linear")]
pub type DefaultProfile = Linear;

/// Profile selected by the `accel-*` cargo features.
#[cfg(feature = "accel-trapezoid")]
pub type DefaultProfile = Trapezoid;

/// Profile selected by the `accel-*` cargo features.
#[cfg(feature = "accel-smoothstep")]
pub type DefaultProfile = SmoothStep;

/// Profile selected by the `accel-*` cargo features.
#[cfg(not(any(
    feature = "accel-linear",
    feature = "accel-trapezoid",
    feature = "accel-smoothstep"
)))]
pub type DefaultProfile = NoAccel;
