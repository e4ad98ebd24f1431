use crate::{
    foundation::core::{Canvas, FrameIndex, Fps},
    theme::model::Theme,
};

/// Timing context of one evaluation, as supplied by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameCtx {
    /// Absolute frame in the composition.
    pub frame: FrameIndex,
    /// Frame relative to the enclosing scene or sequence.
    pub local_frame: FrameIndex,
    pub fps: Fps,
    /// Length of the enclosing scene or sequence in frames.
    pub duration: u64,
    pub canvas: Canvas,
}

impl FrameCtx {
    /// Root context for `frame` of a `duration`-frame composition.
    pub fn new(frame: FrameIndex, fps: Fps, duration: u64, canvas: Canvas) -> Self {
        Self {
            frame,
            local_frame: frame,
            fps,
            duration,
            canvas,
        }
    }

    /// Child context for a sequence starting `offset` frames into this one and lasting
    /// `duration` frames (or until the end of the parent).
    ///
    /// Returns `None` when the current frame falls outside the child window.
    pub fn shifted(self, offset: u64, duration: Option<u64>) -> Option<Self> {
        let local = self.local_frame.0.checked_sub(offset)?;
        let duration = duration.unwrap_or_else(|| self.duration.saturating_sub(offset));
        if local >= duration {
            return None;
        }
        Some(Self {
            local_frame: FrameIndex(local),
            duration,
            ..self
        })
    }

    /// Fraction of the enclosing window elapsed, in `[0, 1)`.
    pub fn progress(self) -> f64 {
        crate::animation::timing::video_progress(self.local_frame, self.duration)
    }
}

/// Everything a component needs to render one frame.
#[derive(Clone, Copy, Debug)]
pub struct RenderCtx<'a> {
    pub frame: FrameCtx,
    /// Active theme; `None` renders with global tokens.
    pub theme: Option<&'a Theme>,
}

impl<'a> RenderCtx<'a> {
    pub fn new(frame: FrameCtx, theme: Option<&'a Theme>) -> Self {
        Self { frame, theme }
    }

    /// Local frame used to sample animations.
    pub fn local_frame(&self) -> FrameIndex {
        self.frame.local_frame
    }

    /// Same theme, different timing.
    pub fn with_frame(self, frame: FrameCtx) -> Self {
        Self { frame, ..self }
    }

    /// Read one theme slot; `None` when no theme is active.
    pub fn themed<T>(&self, pick: impl FnOnce(&'a Theme) -> T) -> Option<T> {
        self.theme.map(pick)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/context.rs"]
mod tests;
