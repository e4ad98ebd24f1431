//! Animation wrappers. Each samples its timing at the local frame and styles a container
//! around its children; none of them keep state between frames.

use crate::{
    animation::{
        ease::Ease,
        motion::{Direction, RevealDirection, reveal_inset, scale_pop, slide_offset},
        stagger::{Stagger, StaggerAnimation},
        timing::Timing,
        typewriter::TypewriterTiming,
    },
    components::{Component, Render, render_all, wrap},
    eval::context::RenderCtx,
    foundation::core::Vec2,
    foundation::error::{FramecraftError, FramecraftResult},
    foundation::math::lerp,
    node::model::{Style, StyleValue, TransformOp, VisualNode},
    theme::tokens::font_family,
};

/// Fade in while rising `y` pixels into place.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FadeIn {
    pub delay: u64,
    pub duration: u64,
    /// Starting vertical offset in pixels.
    pub y: f64,
    pub ease: Ease,
    pub children: Vec<Component>,
    pub style: Style,
}

impl Default for FadeIn {
    fn default() -> Self {
        Self {
            delay: 0,
            duration: 25,
            y: 30.0,
            ease: Ease::OutCubic,
            children: Vec::new(),
            style: Style::new(),
        }
    }
}

impl FadeIn {
    pub fn new(children: Vec<Component>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }

    pub fn delay(mut self, delay: u64) -> Self {
        self.delay = delay;
        self
    }

    pub fn timing(&self) -> Timing {
        Timing {
            delay: self.delay,
            duration: self.duration,
            ease: self.ease,
        }
    }
}

impl Render for FadeIn {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let v = self.timing().value(ctx.local_frame());
        let base = Style::new()
            .num("opacity", v)
            .transform(vec![TransformOp::Translate(Vec2::new(
                0.0,
                lerp(self.y, 0.0, v),
            ))]);
        Ok(wrap(base, &self.style, render_all(&self.children, ctx)?))
    }
}

/// Slide in from one side of the frame, optionally fading.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SlideIn {
    /// Side the element enters from.
    pub direction: Direction,
    pub delay: u64,
    pub duration: u64,
    pub distance: f64,
    pub fade: bool,
    pub ease: Ease,
    pub children: Vec<Component>,
    pub style: Style,
}

impl Default for SlideIn {
    fn default() -> Self {
        Self {
            direction: Direction::Left,
            delay: 0,
            duration: 25,
            distance: 100.0,
            fade: true,
            ease: Ease::OutCubic,
            children: Vec::new(),
            style: Style::new(),
        }
    }
}

impl SlideIn {
    pub fn new(direction: Direction, children: Vec<Component>) -> Self {
        Self {
            direction,
            children,
            ..Self::default()
        }
    }

    pub fn timing(&self) -> Timing {
        Timing {
            delay: self.delay,
            duration: self.duration,
            ease: self.ease,
        }
    }
}

impl Render for SlideIn {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let v = self.timing().value(ctx.local_frame());
        let offset = slide_offset(self.direction, self.distance, v);
        let base = Style::new()
            .num("opacity", if self.fade { v } else { 1.0 })
            .transform(vec![TransformOp::Translate(offset)]);
        Ok(wrap(base, &self.style, render_all(&self.children, ctx)?))
    }
}

/// Scale from `from_scale` to `to_scale` on an overshooting curve.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringPop {
    pub delay: u64,
    pub duration: u64,
    pub from_scale: f64,
    pub to_scale: f64,
    pub overshoot: f64,
    pub children: Vec<Component>,
    pub style: Style,
}

impl Default for SpringPop {
    fn default() -> Self {
        Self {
            delay: 0,
            duration: 20,
            from_scale: 0.0,
            to_scale: 1.0,
            overshoot: 1.5,
            children: Vec::new(),
            style: Style::new(),
        }
    }
}

impl SpringPop {
    pub fn new(children: Vec<Component>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }

    pub fn delay(mut self, delay: u64) -> Self {
        self.delay = delay;
        self
    }

    pub fn timing(&self) -> Timing {
        Timing {
            delay: self.delay,
            duration: self.duration,
            ease: Ease::OutBack {
                overshoot: self.overshoot,
            },
        }
    }
}

impl Render for SpringPop {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let v = self.timing().value(ctx.local_frame());
        let scale = scale_pop(self.from_scale, self.to_scale, v);
        // Scale is always emitted; a zero scale hides the element.
        let base = Style::new().set(
            "transform",
            StyleValue::Transform(vec![TransformOp::Scale(scale)]),
        );
        Ok(wrap(base, &self.style, render_all(&self.children, ctx)?))
    }
}

/// Uncover children with a growing clip inset.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Reveal {
    pub direction: RevealDirection,
    pub delay: u64,
    pub duration: u64,
    pub ease: Ease,
    pub children: Vec<Component>,
    pub style: Style,
}

impl Default for Reveal {
    fn default() -> Self {
        Self {
            direction: RevealDirection::Left,
            delay: 0,
            duration: 30,
            ease: Ease::OutCubic,
            children: Vec::new(),
            style: Style::new(),
        }
    }
}

impl Reveal {
    pub fn timing(&self) -> Timing {
        Timing {
            delay: self.delay,
            duration: self.duration,
            ease: self.ease,
        }
    }
}

impl Render for Reveal {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let inset = reveal_inset(self.direction, self.timing().value(ctx.local_frame()));
        let base = Style::new().set("clipPath", StyleValue::Inset(inset));
        Ok(wrap(base, &self.style, render_all(&self.children, ctx)?))
    }
}

/// Runs the same entrance on each child, `stagger_delay` frames apart.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StaggerGroup {
    #[serde(flatten)]
    pub stagger: Stagger,
    pub animation: StaggerAnimation,
    pub children: Vec<Component>,
    pub style: Style,
}

impl StaggerGroup {
    pub fn new(stagger: Stagger, animation: StaggerAnimation, children: Vec<Component>) -> Self {
        Self {
            stagger,
            animation,
            children,
            style: Style::new(),
        }
    }

    pub fn stagger(&self) -> Stagger {
        self.stagger
    }
}

impl Render for StaggerGroup {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let frame = ctx.local_frame();
        let mut items = Vec::with_capacity(self.children.len());
        for (index, child) in self.children.iter().enumerate() {
            let motion = self.animation.item_motion(&self.stagger, index, frame);
            let mut style = Style::new();
            if let Some(opacity) = motion.opacity {
                style = style.num("opacity", opacity);
            }
            let mut ops = Vec::new();
            if motion.offset != Vec2::ZERO {
                ops.push(TransformOp::Translate(motion.offset));
            }
            if let Some(scale) = motion.scale {
                ops.push(TransformOp::Scale(scale));
            }
            if !ops.is_empty() {
                style = style.set("transform", StyleValue::Transform(ops));
            }
            items.push(VisualNode::container(style).with_child(child.render(ctx)?));
        }
        Ok(VisualNode::container(self.style.clone()).with_children(items))
    }
}

/// Character-by-character text reveal with a blinking cursor.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Typewriter {
    pub text: String,
    pub delay: u64,
    /// Frames per character.
    pub speed: f64,
    pub cursor: bool,
    pub cursor_char: String,
    /// Monospace face with an underscore cursor.
    pub code: bool,
    pub style: Style,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self {
            text: String::new(),
            delay: 0,
            speed: 2.0,
            cursor: true,
            cursor_char: "|".to_owned(),
            code: false,
            style: Style::new(),
        }
    }
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self {
            cursor_char: "_".to_owned(),
            code: true,
            ..Self::new(text)
        }
    }

    pub fn timing(&self) -> TypewriterTiming {
        TypewriterTiming {
            delay: self.delay,
            frames_per_char: self.speed,
            ..TypewriterTiming::default()
        }
    }
}

impl Render for Typewriter {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let frame = ctx.local_frame();
        let timing = self.timing();
        let state = timing.state(&self.text, frame);

        let mut base = Style::new();
        if self.code {
            base = base.kw("fontFamily", font_family::MONO);
        }
        let mut node = VisualNode::text(
            timing.visible_text(&self.text, frame),
            base.merge(&self.style),
        );
        if self.cursor && !state.complete {
            let opacity = if state.cursor_on { 1.0 } else { 0.0 };
            node = node.with_child(VisualNode::text(
                &self.cursor_char,
                Style::new().num("opacity", opacity),
            ));
        }
        Ok(node)
    }
}

/// Shows its children only inside `[from, from + duration)` of the enclosing timeline, with
/// frames counted from `from`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Sequence {
    pub from: u64,
    /// Window length; until the end of the parent when unset.
    pub duration: Option<u64>,
    pub children: Vec<Component>,
    pub style: Style,
}

impl Sequence {
    pub fn new(from: u64, duration: Option<u64>, children: Vec<Component>) -> Self {
        Self {
            from,
            duration,
            children,
            style: Style::new(),
        }
    }

    pub fn validate(&self) -> FramecraftResult<()> {
        if self.duration == Some(0) {
            return Err(FramecraftError::validation("sequence duration must be > 0"));
        }
        Ok(())
    }
}

impl Render for Sequence {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let Some(frame) = ctx.frame.shifted(self.from, self.duration) else {
            return Ok(VisualNode::container(Style::new().kw("display", "none")));
        };
        let inner = ctx.with_frame(frame);
        let base = Style::new().kw("position", "absolute").px("inset", 0.0);
        Ok(wrap(base, &self.style, render_all(&self.children, &inner)?))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/animate.rs"]
mod tests;
