use crate::{
    foundation::core::FrameIndex,
    foundation::error::{FramecraftError, FramecraftResult},
};

/// Character-by-character text reveal.
///
/// The whole text takes `len * frames_per_char` frames to appear, so
/// `visible_chars(f) = floor(clamp((f - delay) / (len * frames_per_char), 0, 1) * len)`.
/// Lengths are counted in Unicode scalar values.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TypewriterTiming {
    /// Frames before the first character appears.
    pub delay: u64,
    /// Frames spent on each character. Must be finite and > 0.
    pub frames_per_char: f64,
    /// Frames per cursor blink half-period. Must be > 0.
    pub blink_period: u64,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            delay: 0,
            frames_per_char: 2.0,
            blink_period: 15,
        }
    }
}

impl TypewriterTiming {
    /// Create a validated timing with the default blink period.
    pub fn new(delay: u64, frames_per_char: f64) -> FramecraftResult<Self> {
        let timing = Self {
            delay,
            frames_per_char,
            ..Self::default()
        };
        timing.validate()?;
        Ok(timing)
    }

    /// Reject non-positive speeds and a zero blink period.
    pub fn validate(&self) -> FramecraftResult<()> {
        if !(self.frames_per_char.is_finite() && self.frames_per_char > 0.0) {
            return Err(FramecraftError::animation(
                "typewriter frames_per_char must be finite and > 0",
            ));
        }
        if self.blink_period == 0 {
            return Err(FramecraftError::animation(
                "typewriter blink_period must be > 0",
            ));
        }
        Ok(())
    }

    /// Number of characters of a `len`-character text visible at `frame`.
    pub fn visible_chars(&self, len: usize, frame: FrameIndex) -> usize {
        if len == 0 || frame.0 < self.delay {
            return 0;
        }
        // min(floor(e / k), len). Equal to floor(clamp(e / (len * k), 0, 1) * len) in exact
        // arithmetic; in f64 the clamped form can land one character short (len 7, k 0.2, e 1).
        let typed = (frame.0 - self.delay) as f64 / self.frames_per_char;
        (typed.floor() as usize).min(len)
    }

    /// Cursor blink phase at `frame`: `floor(frame / blink_period) % 2 == 0`.
    pub fn cursor_on(&self, frame: FrameIndex) -> bool {
        (frame.0 / self.blink_period.max(1)) % 2 == 0
    }

    /// Prefix of `text` visible at `frame`.
    pub fn visible_text<'a>(&self, text: &'a str, frame: FrameIndex) -> &'a str {
        let visible = self.visible_chars(text.chars().count(), frame);
        match text.char_indices().nth(visible) {
            Some((byte, _)) => &text[..byte],
            None => text,
        }
    }

    /// Full typing state of `text` at `frame`.
    pub fn state(&self, text: &str, frame: FrameIndex) -> TypewriterState {
        let len = text.chars().count();
        let visible = self.visible_chars(len, frame);
        TypewriterState {
            visible,
            complete: visible >= len,
            cursor_on: self.cursor_on(frame),
        }
    }
}

/// Snapshot of a typewriter at one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterState {
    /// Visible character count.
    pub visible: usize,
    /// Every character is visible; the cursor is no longer drawn.
    pub complete: bool,
    /// Blink phase; only meaningful while `!complete`.
    pub cursor_on: bool,
}

#[cfg(test)]
#[path = "../../tests/unit/animation/typewriter.rs"]
mod tests;
