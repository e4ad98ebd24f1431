use crate::{
    animation::motion::{Pulse, wrap_phase},
    components::{Component, Render, layout::absolute_fill, render_all, wrap},
    eval::context::RenderCtx,
    foundation::error::{FramecraftError, FramecraftResult},
    foundation::math::map_range,
    node::model::{Style, VisualNode},
    theme::tokens::{gradients, radii},
};

/// Frames per full hue turn of an animated [`GradientBackground`] at speed 1.
const HUE_TURN_FRAMES: u64 = 300;

/// Radial glow whose alpha breathes between `min_opacity` and `max_opacity`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PulsingGlow {
    /// `r,g,b` triple without alpha.
    pub color: String,
    pub min_opacity: f64,
    pub max_opacity: f64,
    /// Frames per pulse. Must be > 0.
    pub cycle_duration: u64,
    /// Radius of the glow in percent of the frame.
    pub size: f64,
    pub x: f64,
    pub y: f64,
    pub style: Style,
}

impl Default for PulsingGlow {
    fn default() -> Self {
        Self {
            color: "0,212,255".to_owned(),
            min_opacity: 0.2,
            max_opacity: 0.5,
            cycle_duration: 60,
            size: 60.0,
            x: 50.0,
            y: 50.0,
            style: Style::new(),
        }
    }
}

impl PulsingGlow {
    pub fn pulse(&self) -> Pulse {
        Pulse {
            min: self.min_opacity,
            max: self.max_opacity,
            cycle: self.cycle_duration,
        }
    }
}

impl Render for PulsingGlow {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let alpha = self.pulse().sample(ctx.local_frame());
        let gradient = format!(
            "radial-gradient(circle at {}% {}%, rgba({},{alpha}) 0%, transparent {}%)",
            self.x, self.y, self.color, self.size
        );
        let style = Style::new()
            .kw("position", "absolute")
            .px("inset", 0.0)
            .kw("background", gradient)
            .kw("pointerEvents", "none")
            .merge(&self.style);
        Ok(VisualNode::container(style))
    }
}

/// Box-shadow glow around its children, optionally wobbling by ±5px.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GlowWrapper {
    pub color: String,
    pub blur: f64,
    pub spread: f64,
    pub animate: bool,
    pub children: Vec<Component>,
    pub style: Style,
}

impl Default for GlowWrapper {
    fn default() -> Self {
        Self {
            color: "rgba(0,212,255,0.5)".to_owned(),
            blur: 20.0,
            spread: 0.0,
            animate: false,
            children: Vec::new(),
            style: Style::new(),
        }
    }
}

impl GlowWrapper {
    /// Blur radius at `frame`.
    pub fn blur_at(&self, frame: u64) -> f64 {
        if !self.animate {
            return self.blur;
        }
        self.blur + map_range((frame as f64 * 0.1).sin(), -1.0, 1.0, -5.0, 5.0)
    }
}

impl Render for GlowWrapper {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let blur = self.blur_at(ctx.local_frame().0);
        let base = Style::new().kw(
            "boxShadow",
            format!("0 0 {blur}px {}px {}", self.spread, self.color),
        );
        Ok(wrap(base, &self.style, render_all(&self.children, ctx)?))
    }
}

/// Double text-shadow halo.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TextGlow {
    pub color: String,
    pub intensity: f64,
    pub children: Vec<Component>,
    pub style: Style,
}

impl Default for TextGlow {
    fn default() -> Self {
        Self {
            color: "#00d4ff".to_owned(),
            intensity: 20.0,
            children: Vec::new(),
            style: Style::new(),
        }
    }
}

impl Render for TextGlow {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let shadow = format!(
            "0 0 {}px {c}, 0 0 {}px {c}",
            self.intensity,
            self.intensity * 2.0,
            c = self.color
        );
        let base = Style::new().kw("textShadow", shadow);
        Ok(wrap(base, &self.style, render_all(&self.children, ctx)?))
    }
}

/// Full-frame gradient, optionally hue-rotating over time.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GradientBackground {
    /// Preset name (`purple_blue` or `purpleBlue`) or any CSS gradient.
    pub gradient: String,
    /// Hue turns per 300 frames; 0 holds still.
    pub animation_speed: f64,
    pub style: Style,
}

impl Default for GradientBackground {
    fn default() -> Self {
        Self {
            gradient: "purple_blue".to_owned(),
            animation_speed: 0.0,
            style: Style::new(),
        }
    }
}

impl GradientBackground {
    pub fn css(&self) -> &str {
        gradients::by_name(&self.gradient).unwrap_or(self.gradient.as_str())
    }

    /// Hue rotation in degrees at `ctx`'s frame.
    pub fn hue_shift(&self, ctx: &RenderCtx<'_>) -> f64 {
        if self.animation_speed <= 0.0 {
            return 0.0;
        }
        wrap_phase(ctx.local_frame(), HUE_TURN_FRAMES) * 360.0 * self.animation_speed
    }
}

impl Render for GradientBackground {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let hue = self.hue_shift(ctx);
        let mut style = absolute_fill().kw("background", self.css());
        if hue > 0.0 {
            style = style.kw("filter", format!("hue-rotate({hue}deg)"));
        }
        Ok(VisualNode::container(style.merge(&self.style)))
    }
}

/// Two-stop HSL gradient whose hue drifts through `hue_range` every `cycle` frames.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GradientShift {
    pub start_hue: f64,
    pub hue_range: f64,
    pub saturation: f64,
    pub lightness: f64,
    /// Must be > 0.
    pub cycle: u64,
    pub style: Style,
}

impl Default for GradientShift {
    fn default() -> Self {
        Self {
            start_hue: 220.0,
            hue_range: 60.0,
            saturation: 70.0,
            lightness: 60.0,
            cycle: 150,
            style: Style::new(),
        }
    }
}

impl GradientShift {
    pub fn validate(&self) -> FramecraftResult<()> {
        if self.cycle == 0 {
            return Err(FramecraftError::animation("gradient shift cycle must be > 0"));
        }
        Ok(())
    }

    pub fn hue(&self, ctx: &RenderCtx<'_>) -> f64 {
        self.start_hue + wrap_phase(ctx.local_frame(), self.cycle) * self.hue_range
    }
}

impl Render for GradientShift {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let hue = self.hue(ctx);
        let (s, l) = (self.saturation, self.lightness);
        let background = format!(
            "linear-gradient(135deg, hsl({hue}, {s}%, {l}%) 0%, hsl({}, {s}%, {}%) 100%)",
            hue + 60.0,
            l - 10.0
        );
        let style = absolute_fill().kw("background", background);
        Ok(VisualNode::container(style.merge(&self.style)))
    }
}

/// Static circular glow.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RadialGlow {
    /// `r,g,b` triple without alpha.
    pub color: String,
    pub cx: f64,
    pub cy: f64,
    pub size: f64,
    pub opacity: f64,
    pub style: Style,
}

impl Default for RadialGlow {
    fn default() -> Self {
        Self {
            color: "0,212,255".to_owned(),
            cx: 50.0,
            cy: 50.0,
            size: 60.0,
            opacity: 0.3,
            style: Style::new(),
        }
    }
}

impl Render for RadialGlow {
    fn render(&self, _ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let background = format!(
            "radial-gradient(circle at {}% {}%, rgba({},{}) 0%, transparent {}%)",
            self.cx, self.cy, self.color, self.opacity, self.size
        );
        let style = absolute_fill().kw("background", background);
        Ok(VisualNode::container(style.merge(&self.style)))
    }
}

/// Fractal-noise grain over the whole frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NoiseOverlay {
    pub opacity: f64,
    /// Reseed every 3 frames, cycling through 10 patterns.
    pub animate: bool,
    pub blend_mode: String,
    /// Turbulence base frequency.
    pub density: f64,
    pub style: Style,
}

impl Default for NoiseOverlay {
    fn default() -> Self {
        Self {
            opacity: 0.05,
            animate: false,
            blend_mode: "overlay".to_owned(),
            density: 0.65,
            style: Style::new(),
        }
    }
}

impl NoiseOverlay {
    pub fn film_grain() -> Self {
        Self {
            opacity: 0.08,
            animate: true,
            ..Self::default()
        }
    }

    pub fn subtle_texture() -> Self {
        Self {
            opacity: 0.03,
            ..Self::default()
        }
    }

    pub fn seed(&self, ctx: &RenderCtx<'_>) -> u64 {
        if self.animate {
            ctx.local_frame().0 / 3 % 10
        } else {
            0
        }
    }

    fn svg_url(&self, seed: u64) -> String {
        format!(
            "url(\"data:image/svg+xml,%3Csvg viewBox='0 0 400 400' \
             xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='noise'%3E\
             %3CfeTurbulence type='fractalNoise' baseFrequency='{}' numOctaves='3' \
             seed='{seed}' stitchTiles='stitch'/%3E%3C/filter%3E\
             %3Crect width='100%25' height='100%25' filter='url(%23noise)'/%3E%3C/svg%3E\")",
            self.density
        )
    }
}

impl Render for NoiseOverlay {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let style = absolute_fill()
            .kw("backgroundImage", self.svg_url(self.seed(ctx)))
            .kw("backgroundSize", "200px 200px")
            .num("opacity", self.opacity)
            .kw("mixBlendMode", self.blend_mode.as_str())
            .kw("pointerEvents", "none")
            .merge(&self.style);
        Ok(VisualNode::container(style))
    }
}

/// Darkened frame edges.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Vignette {
    pub intensity: f64,
    /// Clear center radius in percent.
    pub size: f64,
    pub color: String,
    pub style: Style,
}

impl Default for Vignette {
    fn default() -> Self {
        Self {
            intensity: 0.3,
            size: 70.0,
            color: "0,0,0".to_owned(),
            style: Style::new(),
        }
    }
}

impl Render for Vignette {
    fn render(&self, _ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let background = format!(
            "radial-gradient(ellipse at center, transparent {}%, rgba({},{}) 100%)",
            self.size, self.color, self.intensity
        );
        let style = absolute_fill()
            .kw("background", background)
            .kw("pointerEvents", "none")
            .merge(&self.style);
        Ok(VisualNode::container(style))
    }
}

/// Frosted-glass panel around its children.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GlassMorphism {
    pub blur: f64,
    pub opacity: f64,
    /// `r,g,b` of the fill and border.
    pub tint: String,
    pub border_opacity: f64,
    pub radius: Option<f64>,
    pub padding: f64,
    pub children: Vec<Component>,
    pub style: Style,
}

impl Default for GlassMorphism {
    fn default() -> Self {
        Self {
            blur: 10.0,
            opacity: 0.1,
            tint: "255,255,255".to_owned(),
            border_opacity: 0.2,
            radius: None,
            padding: 32.0,
            children: Vec::new(),
            style: Style::new(),
        }
    }
}

impl GlassMorphism {
    pub fn new(children: Vec<Component>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }

    pub fn dark(children: Vec<Component>) -> Self {
        Self {
            tint: "0,0,0".to_owned(),
            ..Self::new(children)
        }
    }
}

impl Render for GlassMorphism {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let blur = format!("blur({}px)", self.blur);
        let base = Style::new()
            .kw("background", format!("rgba({},{})", self.tint, self.opacity))
            .kw("backdropFilter", blur.as_str())
            .kw("WebkitBackdropFilter", blur)
            .kw(
                "border",
                format!("1px solid rgba({},{})", self.tint, self.border_opacity),
            )
            .px("borderRadius", self.radius.unwrap_or(radii::XL2))
            .px("padding", self.padding);
        Ok(wrap(base, &self.style, render_all(&self.children, ctx)?))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/effects.rs"]
mod tests;
