//! Easing math shared by the acceleration profiles.
//!
//! Everything is computed in `f32` so the three profiles round the same way.

/// Map `value` in `0..=span` onto `0.0..=1.0`.
///
/// A zero span maps to `1.0`; values past the span saturate.
#[inline]
pub fn normalize(value: u32, span: u32) -> f32 {
    if span == 0 {
        return 1.0;
    }
    (value as f32 / span as f32).clamp(0.0, 1.0)
}

/// Linear interpolation between `a` and `b` at `t`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Cubic Hermite ease: 0 at or below `lo`, 1 at or above `hi`.
#[inline]
pub fn smoothstep(lo: u32, hi: u32, x: u32) -> f32 {
    if x <= lo {
        return 0.0;
    }
    if x >= hi {
        return 1.0;
    }
    let t = (x - lo) as f32 / (hi - lo) as f32;
    t * t * (3.0 - 2.0 * t)
}
