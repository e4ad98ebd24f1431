use crate::{
    animation::ease::Ease,
    foundation::core::{FrameIndex, Fps},
    foundation::error::{FramecraftError, FramecraftResult},
    foundation::math::clamp01,
};

/// Delay, duration and easing of a one-shot animation, all in frames.
///
/// ```text
/// progress(f) = clamp((f - delay) / duration, 0, 1)
/// value(f)    = ease(progress(f))
/// ```
///
/// Frames before `delay` yield progress 0, frames at or after `delay + duration` yield 1. The
/// functions hold no state, so seeking to arbitrary frames in any order is safe.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timing {
    /// Frames before the animation starts.
    #[serde(default)]
    pub delay: u64,
    /// Frames over which the animation completes. Must be > 0.
    pub duration: u64,
    /// Easing applied to linear progress.
    #[serde(default)]
    pub ease: Ease,
}

impl Timing {
    /// Create a validated timing.
    pub fn new(delay: u64, duration: u64, ease: Ease) -> FramecraftResult<Self> {
        let timing = Self {
            delay,
            duration,
            ease,
        };
        timing.validate()?;
        Ok(timing)
    }

    /// Entrance timing with the default `OutCubic` curve and no delay.
    pub fn entrance(duration: u64) -> FramecraftResult<Self> {
        Self::new(0, duration, Ease::OutCubic)
    }

    /// Reject a zero duration.
    pub fn validate(&self) -> FramecraftResult<()> {
        if self.duration == 0 {
            return Err(FramecraftError::animation("timing duration must be > 0"));
        }
        Ok(())
    }

    /// Same timing starting `extra` frames later.
    pub fn delayed(self, extra: u64) -> Self {
        Self {
            delay: self.delay.saturating_add(extra),
            ..self
        }
    }

    /// Same timing with a different curve.
    pub fn with_ease(self, ease: Ease) -> Self {
        Self { ease, ..self }
    }

    /// First frame at which progress reaches 1.
    pub fn end_frame(&self) -> u64 {
        self.delay.saturating_add(self.duration)
    }

    /// Clamped linear progress at `frame`.
    ///
    /// A zero duration (only reachable by skipping [`Timing::validate`]) behaves as a step at
    /// `delay` instead of dividing by zero.
    pub fn progress(&self, frame: FrameIndex) -> f64 {
        progress(frame.0, self.delay, self.duration)
    }

    /// Eased value at `frame`. May leave `[0, 1]` for overshooting curves.
    pub fn value(&self, frame: FrameIndex) -> f64 {
        self.ease.apply(self.progress(frame))
    }
}

/// Clamped linear progress of `frame` through `[delay, delay + duration]`.
pub fn progress(frame: u64, delay: u64, duration: u64) -> f64 {
    if frame < delay {
        return 0.0;
    }
    if duration == 0 {
        return 1.0;
    }
    clamp01((frame - delay) as f64 / duration as f64)
}

/// Return `true` when `start <= frame < end`.
pub fn in_range(frame: FrameIndex, start: u64, end: u64) -> bool {
    start <= frame.0 && frame.0 < end
}

/// Progress through `[start, end)`: 0 before `start`, 1 at or after `end`.
pub fn range_progress(frame: FrameIndex, start: u64, end: u64) -> f64 {
    if frame.0 < start {
        return 0.0;
    }
    if frame.0 >= end {
        return 1.0;
    }
    (frame.0 - start) as f64 / (end - start) as f64
}

/// Fraction of a `total`-frame video elapsed at `frame`. Zero-length videos report 0.
pub fn video_progress(frame: FrameIndex, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    frame.0 as f64 / total as f64
}

/// Wall-clock seconds at `frame`.
pub fn current_time_secs(frame: FrameIndex, fps: Fps) -> f64 {
    fps.frames_to_secs(frame.0)
}

/// Elapsed time formatted as `M:SS`.
pub fn formatted_time(frame: FrameIndex, fps: Fps) -> String {
    let whole_secs = u128::from(frame.0) * u128::from(fps.den) / u128::from(fps.num.max(1));
    let minutes = whole_secs / 60;
    let seconds = whole_secs % 60;
    format!("{minutes}:{seconds:02}")
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timing.rs"]
mod tests;
