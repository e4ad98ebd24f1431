use std::f64::consts::{FRAC_PI_2, PI};

/// Easing curves mapping linear progress `[0, 1]` to eased progress.
///
/// Every curve returns exactly `0.0` at `t = 0` and `1.0` at `t = 1`. The back and elastic
/// variants overshoot past `1.0` inside the interval; that is what gives pop and bounce
/// effects their character.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Anticipating ease-in; dips below zero before accelerating.
    InBack {
        /// Overshoot amount (1.70158 is the classic value).
        overshoot: f64,
    },
    /// Overshooting ease-out; passes the target then settles back.
    OutBack {
        /// Overshoot amount (higher is bouncier).
        overshoot: f64,
    },
    /// Decaying oscillation around the target.
    OutElastic {
        /// Number of half-oscillations.
        bounciness: f64,
    },
}

impl Default for Ease {
    fn default() -> Self {
        Self::OutCubic
    }
}

impl Ease {
    /// `OutBack` with the overshoot used by pop entrances.
    pub const POP: Self = Self::OutBack { overshoot: 1.5 };

    /// Apply this easing function to normalized progress `t`, clamped into `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = crate::foundation::math::clamp01(t);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InBack { overshoot } => back(overshoot, t),
            Self::OutBack { overshoot } => 1.0 - back(overshoot, 1.0 - t),
            Self::OutElastic { bounciness } => 1.0 - elastic(bounciness, 1.0 - t),
        }
    }

    /// Return `true` for curves that may leave `[0, 1]` inside the interval.
    pub fn overshoots(self) -> bool {
        matches!(
            self,
            Self::InBack { .. } | Self::OutBack { .. } | Self::OutElastic { .. }
        )
    }
}

fn back(s: f64, t: f64) -> f64 {
    t * t * ((s + 1.0) * t - s)
}

fn elastic(bounciness: f64, t: f64) -> f64 {
    let p = bounciness * PI;
    1.0 - (t * FRAC_PI_2).cos().powi(3) * (t * p).cos()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
