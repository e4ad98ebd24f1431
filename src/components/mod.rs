//! Declarative components.
//!
//! Every component is a plain props value rendered with [`Render::render`] into a fresh
//! [`VisualNode`] for the current frame. Animated props are sampled from the local frame in the
//! [`RenderCtx`]; nothing is remembered between frames.
//!
//! Colors, fonts and spacing resolve as `prop ?? theme ?? token`. The `style` prop present on
//! most components is merged last, so it overrides anything computed.

pub mod animate;
pub mod data;
pub mod effects;
pub mod layout;
pub mod navigation;
pub mod typography;
pub mod ui;

use crate::{
    eval::context::RenderCtx,
    foundation::error::FramecraftResult,
    node::model::{Style, VisualNode},
    theme::{model::Theme, resolve::resolve_from, tokens, tokens::TextStyle},
};

pub use animate::{FadeIn, Reveal, Sequence, SlideIn, SpringPop, StaggerGroup, Typewriter};
pub use data::{Badge, Counter, DataDisplay, ProgressBar, Stat};
pub use effects::{
    GlassMorphism, GlowWrapper, GradientBackground, GradientShift, NoiseOverlay, PulsingGlow,
    RadialGlow, TextGlow, Vignette,
};
pub use layout::{
    Container, ContentArea, CoverMedia, DualLayerMedia, FullBleed, Grid, Image, SafeArea, Span,
    Stack,
};
pub use navigation::{ChapterProgressBar, SectionIndicator};
pub use typography::{Caption, Code, Quote, Text, Title};
pub use ui::{Button, Card, Divider, Icon, List, Tag, TagGroup};

/// Produces the node tree of one frame.
pub trait Render {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode>;
}

/// Any component, tagged by `type` in JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    Title(Title),
    Text(Text),
    Caption(Caption),
    Code(Code),
    Quote(Quote),

    ProgressBar(ProgressBar),
    Counter(Counter),
    Badge(Badge),
    DataDisplay(DataDisplay),
    Stat(Stat),

    Card(Card),
    Button(Button),
    Tag(Tag),
    TagGroup(TagGroup),
    Divider(Divider),
    List(List),
    Icon(Icon),

    ChapterProgressBar(ChapterProgressBar),
    SectionIndicator(SectionIndicator),

    FullBleed(FullBleed),
    ContentArea(ContentArea),
    SafeArea(SafeArea),
    Stack(Stack),
    Grid(Grid),
    Container(Container),
    Span(Span),
    Image(Image),
    CoverMedia(CoverMedia),
    DualLayerMedia(DualLayerMedia),

    PulsingGlow(PulsingGlow),
    GlowWrapper(GlowWrapper),
    TextGlow(TextGlow),
    GradientBackground(GradientBackground),
    GradientShift(GradientShift),
    RadialGlow(RadialGlow),
    NoiseOverlay(NoiseOverlay),
    Vignette(Vignette),
    GlassMorphism(GlassMorphism),

    FadeIn(FadeIn),
    SlideIn(SlideIn),
    SpringPop(SpringPop),
    Reveal(Reveal),
    Stagger(StaggerGroup),
    Typewriter(Typewriter),
    Sequence(Sequence),
}

impl Component {
    fn as_render(&self) -> &dyn Render {
        match self {
            Self::Title(c) => c,
            Self::Text(c) => c,
            Self::Caption(c) => c,
            Self::Code(c) => c,
            Self::Quote(c) => c,
            Self::ProgressBar(c) => c,
            Self::Counter(c) => c,
            Self::Badge(c) => c,
            Self::DataDisplay(c) => c,
            Self::Stat(c) => c,
            Self::Card(c) => c,
            Self::Button(c) => c,
            Self::Tag(c) => c,
            Self::TagGroup(c) => c,
            Self::Divider(c) => c,
            Self::List(c) => c,
            Self::Icon(c) => c,
            Self::ChapterProgressBar(c) => c,
            Self::SectionIndicator(c) => c,
            Self::FullBleed(c) => c,
            Self::ContentArea(c) => c,
            Self::SafeArea(c) => c,
            Self::Stack(c) => c,
            Self::Grid(c) => c,
            Self::Container(c) => c,
            Self::Span(c) => c,
            Self::Image(c) => c,
            Self::CoverMedia(c) => c,
            Self::DualLayerMedia(c) => c,
            Self::PulsingGlow(c) => c,
            Self::GlowWrapper(c) => c,
            Self::TextGlow(c) => c,
            Self::GradientBackground(c) => c,
            Self::GradientShift(c) => c,
            Self::RadialGlow(c) => c,
            Self::NoiseOverlay(c) => c,
            Self::Vignette(c) => c,
            Self::GlassMorphism(c) => c,
            Self::FadeIn(c) => c,
            Self::SlideIn(c) => c,
            Self::SpringPop(c) => c,
            Self::Reveal(c) => c,
            Self::Stagger(c) => c,
            Self::Typewriter(c) => c,
            Self::Sequence(c) => c,
        }
    }

    /// Check timing props of this component and every descendant, including components
    /// embedded as data values.
    pub fn validate(&self) -> FramecraftResult<()> {
        match self {
            Self::ProgressBar(c) => c.timing().validate()?,
            Self::Counter(c) => c.timing().validate()?,
            Self::DataDisplay(c) => c.value.validate()?,
            Self::Stat(c) => c.value.validate()?,
            Self::ChapterProgressBar(c) => c.validate()?,
            Self::Grid(c) => c.validate()?,
            Self::PulsingGlow(c) => c.pulse().validate()?,
            Self::GradientShift(c) => c.validate()?,
            Self::FadeIn(c) => c.timing().validate()?,
            Self::SlideIn(c) => c.timing().validate()?,
            Self::SpringPop(c) => c.timing().validate()?,
            Self::Reveal(c) => c.timing().validate()?,
            Self::Stagger(c) => c.stagger().validate()?,
            Self::Typewriter(c) => c.timing().validate()?,
            Self::Sequence(c) => c.validate()?,
            _ => {}
        }
        for child in self.children() {
            child.validate()?;
        }
        Ok(())
    }

    /// Direct child components.
    pub fn children(&self) -> &[Component] {
        match self {
            Self::Card(c) => &c.children,
            Self::FullBleed(c) => &c.children,
            Self::ContentArea(c) => &c.children,
            Self::SafeArea(c) => &c.children,
            Self::Stack(c) => &c.children,
            Self::Grid(c) => &c.children,
            Self::Container(c) => &c.children,
            Self::GlowWrapper(c) => &c.children,
            Self::TextGlow(c) => &c.children,
            Self::GlassMorphism(c) => &c.children,
            Self::FadeIn(c) => &c.children,
            Self::SlideIn(c) => &c.children,
            Self::SpringPop(c) => &c.children,
            Self::Reveal(c) => &c.children,
            Self::Stagger(c) => &c.children,
            Self::Sequence(c) => &c.children,
            _ => &[],
        }
    }
}

impl Render for Component {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        self.as_render().render(ctx)
    }
}

macro_rules! component_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Component {
                fn from(c: $ty) -> Self {
                    Self::$variant(c)
                }
            }
        )*
    };
}

component_from!(
    Title(Title),
    Text(Text),
    Caption(Caption),
    Code(Code),
    Quote(Quote),
    ProgressBar(ProgressBar),
    Counter(Counter),
    Badge(Badge),
    DataDisplay(DataDisplay),
    Stat(Stat),
    Card(Card),
    Button(Button),
    Tag(Tag),
    TagGroup(TagGroup),
    Divider(Divider),
    List(List),
    Icon(Icon),
    ChapterProgressBar(ChapterProgressBar),
    SectionIndicator(SectionIndicator),
    FullBleed(FullBleed),
    ContentArea(ContentArea),
    SafeArea(SafeArea),
    Stack(Stack),
    Grid(Grid),
    Container(Container),
    Span(Span),
    Image(Image),
    CoverMedia(CoverMedia),
    DualLayerMedia(DualLayerMedia),
    PulsingGlow(PulsingGlow),
    GlowWrapper(GlowWrapper),
    TextGlow(TextGlow),
    GradientBackground(GradientBackground),
    GradientShift(GradientShift),
    RadialGlow(RadialGlow),
    NoiseOverlay(NoiseOverlay),
    Vignette(Vignette),
    GlassMorphism(GlassMorphism),
    FadeIn(FadeIn),
    SlideIn(SlideIn),
    SpringPop(SpringPop),
    Reveal(Reveal),
    Stagger(StaggerGroup),
    Typewriter(Typewriter),
    Sequence(Sequence),
);

/// Horizontal text alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

pub(crate) fn render_all(
    children: &[Component],
    ctx: &RenderCtx<'_>,
) -> FramecraftResult<Vec<VisualNode>> {
    children.iter().map(|c| c.render(ctx)).collect()
}

/// `explicit ?? theme.<slot> ?? fallback` for string-valued slots.
pub(crate) fn themed_str(
    ctx: &RenderCtx<'_>,
    explicit: Option<&str>,
    pick: impl FnOnce(&Theme) -> Option<&str>,
    fallback: &str,
) -> String {
    resolve_from(explicit, ctx.theme, pick, fallback).to_owned()
}

pub(crate) fn font_family(ctx: &RenderCtx<'_>) -> String {
    themed_str(
        ctx,
        None,
        |t| Some(t.typography.font_family.as_str()),
        tokens::font_family::SANS,
    )
}

pub(crate) fn text_color(ctx: &RenderCtx<'_>) -> String {
    themed_str(ctx, None, |t| Some(t.colors.text.as_str()), tokens::DEFAULT.text)
}

pub(crate) fn muted_color(ctx: &RenderCtx<'_>) -> String {
    themed_str(
        ctx,
        None,
        |t| Some(t.colors.text_muted.as_str()),
        tokens::DEFAULT.text_muted,
    )
}

pub(crate) fn accent_color(ctx: &RenderCtx<'_>, explicit: Option<&str>) -> String {
    themed_str(
        ctx,
        explicit,
        |t| Some(t.colors.accent.as_str()),
        tokens::DEFAULT.accent,
    )
}

/// Size, weight, line height, letter spacing and (for presets that carry one) font family.
pub(crate) fn text_style(ts: &TextStyle) -> Style {
    let style = Style::new()
        .px("fontSize", ts.font_size)
        .num("fontWeight", ts.font_weight)
        .num("lineHeight", ts.line_height)
        .px("letterSpacing", ts.letter_spacing);
    style.kw_opt("fontFamily", ts.font_family)
}

/// `#rrggbb` with a two-digit hex alpha appended. Other color syntaxes pass through unchanged.
pub(crate) fn tint(color: &str, alpha_hex: &str) -> String {
    if color.len() == 7 && color.starts_with('#') {
        format!("{color}{alpha_hex}")
    } else {
        color.to_owned()
    }
}

/// Container node wrapping already-rendered `children`, with `user` merged over `base`.
pub(crate) fn wrap(base: Style, user: &Style, children: Vec<VisualNode>) -> VisualNode {
    VisualNode::container(base.merge(user)).with_children(children)
}

#[cfg(test)]
#[path = "../../tests/unit/components/mod.rs"]
mod tests;
