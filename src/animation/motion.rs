//! Derived frame-driven values: slides, pops, reveals and periodic pulses.
//!
//! Each helper composes linearly on top of an eased value from
//! [`Timing::value`](crate::Timing::value), or (for the periodic helpers) on the frame itself.

use std::f64::consts::TAU;

use crate::{
    foundation::core::{FrameIndex, Vec2},
    foundation::error::{FramecraftError, FramecraftResult},
    foundation::math::{Lerp, clamp01, lerp, map_range},
};

/// Side of the frame an element enters from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Enters from the left edge.
    #[default]
    Left,
    /// Enters from the right edge.
    Right,
    /// Enters from above.
    Up,
    /// Enters from below.
    Down,
}

impl Direction {
    /// Offset at the start of the slide for a travel `distance` in pixels.
    pub fn start_offset(self, distance: f64) -> Vec2 {
        match self {
            Self::Left => Vec2::new(-distance, 0.0),
            Self::Right => Vec2::new(distance, 0.0),
            Self::Up => Vec2::new(0.0, -distance),
            Self::Down => Vec2::new(0.0, distance),
        }
    }
}

/// `lerp(start_offset, 0, value)` for an element entering from `from`.
pub fn slide_offset(from: Direction, distance: f64, value: f64) -> Vec2 {
    <Vec2 as Lerp>::lerp(&from.start_offset(distance), &Vec2::ZERO, value)
}

/// Scale for a pop entrance: `lerp(from_scale, to_scale, value)`.
pub fn scale_pop(from_scale: f64, to_scale: f64, value: f64) -> f64 {
    lerp(from_scale, to_scale, value)
}

/// Reveal direction for clip-inset animations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealDirection {
    /// Uncovers left to right.
    #[default]
    Left,
    /// Uncovers right to left.
    Right,
    /// Uncovers top to bottom.
    Up,
    /// Uncovers bottom to top.
    Down,
    /// Grows outwards from the center.
    Center,
}

/// Clip inset in percent of the element box, CSS `inset()` order.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Inset {
    /// Top inset percentage.
    pub top: f64,
    /// Right inset percentage.
    pub right: f64,
    /// Bottom inset percentage.
    pub bottom: f64,
    /// Left inset percentage.
    pub left: f64,
}

impl Inset {
    /// Nothing clipped.
    pub const NONE: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };
}

/// Clip inset for a reveal at eased `value`. The value is clamped so overshooting curves never
/// produce negative insets.
pub fn reveal_inset(direction: RevealDirection, value: f64) -> Inset {
    let hidden = 100.0 - clamp01(value) * 100.0;
    match direction {
        RevealDirection::Left => Inset {
            right: hidden,
            ..Inset::NONE
        },
        RevealDirection::Right => Inset {
            left: hidden,
            ..Inset::NONE
        },
        RevealDirection::Up => Inset {
            top: hidden,
            ..Inset::NONE
        },
        RevealDirection::Down => Inset {
            bottom: hidden,
            ..Inset::NONE
        },
        RevealDirection::Center => {
            let half = hidden / 2.0;
            Inset {
                top: half,
                right: half,
                bottom: half,
                left: half,
            }
        }
    }
}

/// Periodic oscillation between `min` and `max` with a fixed cycle length in frames.
///
/// The phase is computed from `frame % cycle`, so `sample(f) == sample(f + cycle)` holds
/// bit-for-bit.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pulse {
    /// Value at the trough of the wave.
    pub min: f64,
    /// Value at the crest of the wave.
    pub max: f64,
    /// Frames per full cycle. Must be > 0.
    pub cycle: u64,
}

impl Pulse {
    /// Create a validated pulse.
    pub fn new(min: f64, max: f64, cycle: u64) -> FramecraftResult<Self> {
        let pulse = Self { min, max, cycle };
        pulse.validate()?;
        Ok(pulse)
    }

    /// Reject a zero-length cycle.
    pub fn validate(&self) -> FramecraftResult<()> {
        if self.cycle == 0 {
            return Err(FramecraftError::animation("pulse cycle must be > 0"));
        }
        Ok(())
    }

    /// Value at `frame`.
    pub fn sample(&self, frame: FrameIndex) -> f64 {
        map_range(sine(frame, self.cycle), -1.0, 1.0, self.min, self.max)
    }
}

/// `(sin(2π·phase) + 1) / 2`, a 0→1→0 wave repeating every `cycle` frames.
///
/// A zero cycle is treated as a constant wave at its midpoint.
pub fn loop_wave(frame: FrameIndex, cycle: u64) -> f64 {
    (sine(frame, cycle) + 1.0) / 2.0
}

/// Pulse value `lerp(min, max, loop_wave(frame, cycle))`.
pub fn pulse(frame: FrameIndex, min: f64, max: f64, cycle: u64) -> f64 {
    lerp(min, max, loop_wave(frame, cycle))
}

/// Position within a repeating `cycle`-frame window, `(frame % cycle) / cycle`, in `[0, 1)`.
///
/// A zero cycle stays at phase 0.
pub fn wrap_phase(frame: FrameIndex, cycle: u64) -> f64 {
    if cycle == 0 {
        return 0.0;
    }
    (frame.0 % cycle) as f64 / cycle as f64
}

fn sine(frame: FrameIndex, cycle: u64) -> f64 {
    (TAU * wrap_phase(frame, cycle)).sin()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/motion.rs"]
mod tests;
