use crate::foundation::core::Vec2;

/// Linear interpolation between two values of the same type.
pub trait Lerp: Sized {
    /// Interpolate from `a` (at `t = 0`) to `b` (at `t = 1`). `t` is not clamped, so
    /// overshooting easings extrapolate past `b`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (*a as f64 + ((*b as f64 - *a as f64) * t)) as f32
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// Scalar shorthand for [`Lerp::lerp`].
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    <f64 as Lerp>::lerp(&a, &b, t)
}

/// Clamp into `[0, 1]`. NaN maps to 0.
pub fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Map `x` from `[in_min, in_max]` onto `[out_min, out_max]` without clamping.
///
/// A degenerate input range maps everything to `out_min`.
pub fn map_range(x: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let span = in_max - in_min;
    if span == 0.0 {
        return out_min;
    }
    lerp(out_min, out_max, (x - in_min) / span)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
