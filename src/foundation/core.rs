use crate::foundation::error::{FramecraftError, FramecraftResult};

pub use kurbo::{Affine, Vec2};

/// Absolute 0-based frame index supplied by the host renderer.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Half-open frame range `[start, end)` in timeline space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// Inclusive range start.
    pub start: FrameIndex,
    /// Exclusive range end.
    pub end: FrameIndex,
}

impl FrameRange {
    /// Create a validated range with `start <= end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> FramecraftResult<Self> {
        if start.0 > end.0 {
            return Err(FramecraftError::validation(
                "FrameRange start must be <= end",
            ));
        }
        Ok(Self { start, end })
    }

    /// Number of frames contained in the range.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// Return `true` when the range has no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// Return `true` when `f` is inside `[start, end)`.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }
}

/// A `(start, duration)` window over the frame timeline.
///
/// Used for scenes, nested sequences and chapter descriptors. `duration` is validated to be
/// non-zero wherever a span is accepted as configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameSpan {
    /// First frame covered by the span.
    pub start: u64,
    /// Number of frames covered by the span.
    pub duration: u64,
}

impl FrameSpan {
    /// Create a validated span with `duration > 0`.
    pub fn new(start: u64, duration: u64) -> FramecraftResult<Self> {
        let span = Self { start, duration };
        span.validate()?;
        Ok(span)
    }

    /// Reject zero-length spans.
    pub fn validate(self) -> FramecraftResult<()> {
        if self.duration == 0 {
            return Err(FramecraftError::validation("span duration must be > 0"));
        }
        if self.start.checked_add(self.duration).is_none() {
            return Err(FramecraftError::validation("span end overflows u64"));
        }
        Ok(())
    }

    /// Exclusive end frame.
    pub fn end(self) -> u64 {
        self.start.saturating_add(self.duration)
    }

    /// Return `true` when `frame` is inside `[start, start + duration)`.
    pub fn contains(self, frame: u64) -> bool {
        self.start <= frame && frame < self.end()
    }

    /// Convert to the equivalent half-open [`FrameRange`].
    pub fn to_range(self) -> FrameRange {
        FrameRange {
            start: FrameIndex(self.start),
            end: FrameIndex(self.end()),
        }
    }
}

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> FramecraftResult<Self> {
        let fps = Self { num, den };
        fps.validate()?;
        Ok(fps)
    }

    /// Reject zero numerator or denominator.
    pub fn validate(self) -> FramecraftResult<()> {
        if self.den == 0 {
            return Err(FramecraftError::validation("Fps den must be > 0"));
        }
        if self.num == 0 {
            return Err(FramecraftError::validation("Fps num must be > 0"));
        }
        Ok(())
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// 1080p canvas, the size the token scale is calibrated for.
    pub const HD: Self = Self {
        width: 1920,
        height: 1080,
    };
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
