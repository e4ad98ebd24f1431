use crate::{
    animation::ease::Ease,
    animation::timing::Timing,
    foundation::core::{FrameIndex, Vec2},
    foundation::error::FramecraftResult,
    foundation::math::lerp,
};

/// Linearly increasing delays over a sequence of items.
///
/// Item `i` starts at `initial_delay + i * stagger_delay` and then runs the same timing as every
/// other item. Nothing is shared between items, so each one can be sampled on its own.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Stagger {
    /// Frames before the first item starts.
    pub initial_delay: u64,
    /// Frames between consecutive item starts.
    pub stagger_delay: u64,
    /// Per-item animation duration. Must be > 0.
    pub duration: u64,
    /// Per-item easing.
    pub ease: Ease,
}

impl Default for Stagger {
    fn default() -> Self {
        Self {
            initial_delay: 0,
            stagger_delay: 10,
            duration: 20,
            ease: Ease::OutCubic,
        }
    }
}

impl Stagger {
    /// Create a validated stagger with the default `OutCubic` curve.
    pub fn new(initial_delay: u64, stagger_delay: u64, duration: u64) -> FramecraftResult<Self> {
        let stagger = Self {
            initial_delay,
            stagger_delay,
            duration,
            ease: Ease::OutCubic,
        };
        stagger.validate()?;
        Ok(stagger)
    }

    /// Reject a zero per-item duration.
    pub fn validate(&self) -> FramecraftResult<()> {
        self.item_timing(0).validate()
    }

    /// Start frame of item `index`.
    pub fn effective_delay(&self, index: usize) -> u64 {
        let step = self.stagger_delay.saturating_mul(index as u64);
        self.initial_delay.saturating_add(step)
    }

    /// Start frames of the first `count` items.
    pub fn delays(&self, count: usize) -> Vec<u64> {
        (0..count).map(|i| self.effective_delay(i)).collect()
    }

    /// Timing of item `index`.
    pub fn item_timing(&self, index: usize) -> Timing {
        Timing {
            delay: self.effective_delay(index),
            duration: self.duration,
            ease: self.ease,
        }
    }

    /// Eased value of item `index` at `frame`.
    pub fn item_value(&self, index: usize, frame: FrameIndex) -> f64 {
        self.item_timing(index).value(frame)
    }
}

/// Entrance applied to each staggered item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaggerAnimation {
    /// Fade in while rising 30px.
    #[default]
    FadeIn,
    /// Fade in while rising 50px.
    SlideUp,
    /// Fade in while moving 50px leftwards into place.
    SlideLeft,
    /// Scale from zero with an overshooting pop.
    Pop,
    /// Items appear as-is.
    None,
}

/// Per-item visual state produced by a [`StaggerAnimation`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemMotion {
    /// Opacity, when the animation fades.
    pub opacity: Option<f64>,
    /// Translation offset in pixels.
    pub offset: Vec2,
    /// Uniform scale, when the animation scales.
    pub scale: Option<f64>,
}

impl ItemMotion {
    /// Resting state: no fade, offset or scale.
    pub const REST: Self = Self {
        opacity: None,
        offset: Vec2::ZERO,
        scale: None,
    };
}

impl StaggerAnimation {
    /// Visual state of item `index` of `stagger` at `frame`.
    ///
    /// `Pop` always uses `Ease::POP` regardless of the stagger's own curve.
    pub fn item_motion(self, stagger: &Stagger, index: usize, frame: FrameIndex) -> ItemMotion {
        let timing = stagger.item_timing(index);
        match self {
            Self::FadeIn => rising(timing.value(frame), Vec2::new(0.0, 30.0)),
            Self::SlideUp => rising(timing.value(frame), Vec2::new(0.0, 50.0)),
            Self::SlideLeft => rising(timing.value(frame), Vec2::new(50.0, 0.0)),
            Self::Pop => ItemMotion {
                scale: Some(timing.with_ease(Ease::POP).value(frame)),
                ..ItemMotion::REST
            },
            Self::None => ItemMotion::REST,
        }
    }
}

fn rising(value: f64, from: Vec2) -> ItemMotion {
    ItemMotion {
        opacity: Some(value),
        offset: Vec2::new(lerp(from.x, 0.0, value), lerp(from.y, 0.0, value)),
        scale: None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/stagger.rs"]
mod tests;
