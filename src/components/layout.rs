use crate::{
    components::{Component, Render, render_all, themed_str, wrap},
    eval::context::RenderCtx,
    foundation::error::{FramecraftError, FramecraftResult},
    node::model::{Style, VisualNode},
    theme::tokens::{self, content_width, spacing},
};

pub(crate) fn absolute_fill() -> Style {
    Style::new().kw("position", "absolute").px("inset", 0.0)
}

/// Edge-to-edge background layer.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FullBleed {
    /// Color or gradient; the theme background when unset.
    pub background: Option<String>,
    pub children: Vec<Component>,
    pub style: Style,
}

impl Render for FullBleed {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let bg = themed_str(
            ctx,
            self.background.as_deref(),
            |t| Some(t.colors.bg.as_str()),
            tokens::DEFAULT.bg,
        );
        let base = absolute_fill()
            .kw("overflow", "hidden")
            .px("padding", 0.0)
            .px("margin", 0.0)
            .kw("background", bg);
        Ok(wrap(base, &self.style, render_all(&self.children, ctx)?))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

impl VerticalAlign {
    fn as_flex(self) -> &'static str {
        match self {
            Self::Top => "flex-start",
            Self::Center => "center",
            Self::Bottom => "flex-end",
        }
    }
}

/// Centered content column bounded by the theme's content widths, leaving room for subtitles
/// at the bottom.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ContentArea {
    /// Minimum width as a fraction of the frame.
    pub min_width: Option<f64>,
    /// Maximum width as a fraction of the frame.
    pub max_width: Option<f64>,
    pub padding: Option<f64>,
    pub vertical_align: VerticalAlign,
    pub children: Vec<Component>,
    pub style: Style,
}

impl Render for ContentArea {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let theme = ctx.theme;
        let min = self
            .min_width
            .or(theme.map(|t| t.layout.min_content_width))
            .unwrap_or(content_width::MIN);
        let max = self
            .max_width
            .or(theme.map(|t| t.layout.max_content_width))
            .unwrap_or(content_width::MAX);
        let padding = self
            .padding
            .or(theme.map(|t| t.spacing.page))
            .unwrap_or(spacing::PAGE);
        let subtitle_margin = theme
            .map(|t| t.spacing.subtitle_margin)
            .unwrap_or(spacing::SUBTITLE_MARGIN);

        let inner = VisualNode::container(
            Style::new()
                .pct("width", 100.0)
                .pct("minWidth", min * 100.0)
                .pct("maxWidth", max * 100.0)
                .kw("display", "flex")
                .kw("flexDirection", "column")
                .kw("alignItems", "center"),
        )
        .with_children(render_all(&self.children, ctx)?);

        let base = absolute_fill()
            .kw("display", "flex")
            .kw("flexDirection", "column")
            .kw("alignItems", "center")
            .kw("justifyContent", self.vertical_align.as_flex())
            .px("padding", padding)
            .px("paddingBottom", padding + subtitle_margin);
        Ok(wrap(base, &self.style, vec![inner]))
    }
}

/// Padded full-frame column that keeps content clear of the subtitle band.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SafeArea {
    pub padding_top: f64,
    pub padding_horizontal: f64,
    /// Extra bottom padding on top of the subtitle margin.
    pub padding_bottom: f64,
    pub children: Vec<Component>,
    pub style: Style,
}

impl Default for SafeArea {
    fn default() -> Self {
        Self {
            padding_top: spacing::PAGE,
            padding_horizontal: spacing::PAGE,
            padding_bottom: 0.0,
            children: Vec::new(),
            style: Style::new(),
        }
    }
}

impl Render for SafeArea {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let base = absolute_fill()
            .px("paddingTop", self.padding_top)
            .px("paddingLeft", self.padding_horizontal)
            .px("paddingRight", self.padding_horizontal)
            .px(
                "paddingBottom",
                spacing::SUBTITLE_MARGIN + self.padding_bottom,
            )
            .kw("display", "flex")
            .kw("flexDirection", "column");
        Ok(wrap(base, &self.style, render_all(&self.children, ctx)?))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackDirection {
    Horizontal,
    #[default]
    Vertical,
}

/// Cross-axis alignment shared by stacks and grids.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossAlign {
    Start,
    #[default]
    Center,
    End,
    Stretch,
}

impl CrossAlign {
    fn as_flex(self) -> &'static str {
        match self {
            Self::Start => "flex-start",
            Self::Center => "center",
            Self::End => "flex-end",
            Self::Stretch => "stretch",
        }
    }

    fn as_grid(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
            Self::Stretch => "stretch",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Justify {
    #[default]
    Start,
    Center,
    End,
    Between,
    Around,
    Evenly,
}

impl Justify {
    fn as_flex(self) -> &'static str {
        match self {
            Self::Start => "flex-start",
            Self::Center => "center",
            Self::End => "flex-end",
            Self::Between => "space-between",
            Self::Around => "space-around",
            Self::Evenly => "space-evenly",
        }
    }
}

/// Flex row or column.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Stack {
    pub direction: StackDirection,
    pub gap: f64,
    pub align: CrossAlign,
    pub justify: Justify,
    pub wrap: bool,
    pub children: Vec<Component>,
    pub style: Style,
}

impl Default for Stack {
    fn default() -> Self {
        Self {
            direction: StackDirection::Vertical,
            gap: spacing::ELEMENT,
            align: CrossAlign::Center,
            justify: Justify::Start,
            wrap: false,
            children: Vec::new(),
            style: Style::new(),
        }
    }
}

impl Stack {
    pub fn vertical(children: Vec<Component>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }

    pub fn horizontal(children: Vec<Component>) -> Self {
        Self {
            direction: StackDirection::Horizontal,
            children,
            ..Self::default()
        }
    }

    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }
}

impl Render for Stack {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let base = Style::new()
            .kw("display", "flex")
            .kw(
                "flexDirection",
                match self.direction {
                    StackDirection::Vertical => "column",
                    StackDirection::Horizontal => "row",
                },
            )
            .px("gap", self.gap)
            .kw("alignItems", self.align.as_flex())
            .kw("justifyContent", self.justify.as_flex())
            .kw("flexWrap", if self.wrap { "wrap" } else { "nowrap" });
        Ok(wrap(base, &self.style, render_all(&self.children, ctx)?))
    }
}

/// Grid track definition: `n` equal fractions or a literal template.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Tracks {
    Count(u32),
    Template(String),
}

impl Tracks {
    fn template(&self) -> String {
        match self {
            Self::Count(n) => format!("repeat({n}, 1fr)"),
            Self::Template(t) => t.clone(),
        }
    }
}

/// CSS grid of equal cells.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Grid {
    pub columns: Tracks,
    pub rows: Option<Tracks>,
    pub gap: f64,
    pub row_gap: Option<f64>,
    pub column_gap: Option<f64>,
    pub align_items: CrossAlign,
    pub justify_items: CrossAlign,
    pub children: Vec<Component>,
    pub style: Style,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            columns: Tracks::Count(2),
            rows: None,
            gap: spacing::ELEMENT,
            row_gap: None,
            column_gap: None,
            align_items: CrossAlign::Center,
            justify_items: CrossAlign::Center,
            children: Vec::new(),
            style: Style::new(),
        }
    }
}

impl Grid {
    pub fn new(columns: u32, children: Vec<Component>) -> Self {
        Self {
            columns: Tracks::Count(columns),
            children,
            ..Self::default()
        }
    }

    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Reject zero-count tracks.
    pub fn validate(&self) -> FramecraftResult<()> {
        if self.columns == Tracks::Count(0) || self.rows == Some(Tracks::Count(0)) {
            return Err(FramecraftError::validation(
                "grid track count must be > 0",
            ));
        }
        Ok(())
    }
}

impl Render for Grid {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let rows = self.rows.as_ref().map(Tracks::template);
        let base = Style::new()
            .kw("display", "grid")
            .kw("gridTemplateColumns", self.columns.template())
            .kw_opt("gridTemplateRows", rows)
            .px("gap", self.gap)
            .px("rowGap", self.row_gap.unwrap_or(self.gap))
            .px("columnGap", self.column_gap.unwrap_or(self.gap))
            .kw("alignItems", self.align_items.as_grid())
            .kw("justifyItems", self.justify_items.as_grid())
            .pct("width", 100.0);
        Ok(wrap(base, &self.style, render_all(&self.children, ctx)?))
    }
}

/// Plain box: only the supplied style.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Container {
    pub children: Vec<Component>,
    pub style: Style,
}

impl Container {
    pub fn new(style: Style, children: Vec<Component>) -> Self {
        Self { children, style }
    }
}

impl Render for Container {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        Ok(wrap(Style::new(), &self.style, render_all(&self.children, ctx)?))
    }
}

/// Unstyled run of text.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::new(),
        }
    }
}

impl Render for Span {
    fn render(&self, _ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        Ok(VisualNode::text(&self.text, self.style.clone()))
    }
}

/// Host-resolved image. `cover` stretches it over its container, cropping to fill.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Image {
    pub src: String,
    pub cover: bool,
    pub style: Style,
}

impl Image {
    pub fn cover(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            cover: true,
            style: Style::new(),
        }
    }
}

impl Render for Image {
    fn render(&self, _ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let base = if self.cover {
            fill_frame(MediaFit::Cover)
        } else {
            Style::new()
        };
        Ok(VisualNode::image(&self.src, base.merge(&self.style)))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

impl MediaKind {
    /// Media node of this kind; videos carry `volume` in their style.
    fn node(self, src: &str, style: Style, volume: f64) -> VisualNode {
        match self {
            Self::Image => VisualNode::image(src, style),
            Self::Video => VisualNode::video(src, style.num("volume", volume)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaFit {
    #[default]
    Contain,
    Cover,
}

impl MediaFit {
    fn as_css(self) -> &'static str {
        match self {
            Self::Contain => "contain",
            Self::Cover => "cover",
        }
    }
}

fn fill_frame(fit: MediaFit) -> Style {
    absolute_fill()
        .pct("width", 100.0)
        .pct("height", 100.0)
        .kw("objectFit", fit.as_css())
}

/// Image or video cropped to fill the frame.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CoverMedia {
    pub src: String,
    pub media: MediaKind,
    /// Video only; muted by default.
    pub volume: f64,
    pub style: Style,
}

impl CoverMedia {
    pub fn new(src: impl Into<String>, media: MediaKind) -> Self {
        Self {
            src: src.into(),
            media,
            ..Self::default()
        }
    }
}

impl Render for CoverMedia {
    fn render(&self, _ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let style = fill_frame(MediaFit::Cover).merge(&self.style);
        Ok(self.media.node(&self.src, style, self.volume))
    }
}

/// Media shown whole over a blurred, enlarged copy of itself, so off-aspect sources leave no
/// bare bars.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DualLayerMedia {
    pub src: String,
    pub media: MediaKind,
    pub foreground_fit: MediaFit,
    pub blur_amount: f64,
    pub overlay_opacity: f64,
    /// `r,g,b` of the wash between the layers.
    pub overlay_color: String,
    pub volume: f64,
}

impl Default for DualLayerMedia {
    fn default() -> Self {
        Self {
            src: String::new(),
            media: MediaKind::Image,
            foreground_fit: MediaFit::Contain,
            blur_amount: 30.0,
            overlay_opacity: 0.3,
            overlay_color: "255,255,255".to_owned(),
            volume: 0.0,
        }
    }
}

impl DualLayerMedia {
    pub fn new(src: impl Into<String>, media: MediaKind) -> Self {
        Self {
            src: src.into(),
            media,
            ..Self::default()
        }
    }
}

impl Render for DualLayerMedia {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let backdrop = Style::new()
            .kw("position", "absolute")
            .pct("inset", -20.0)
            .pct("width", 140.0)
            .pct("height", 140.0)
            .kw("objectFit", "cover")
            .kw("filter", format!("blur({}px)", self.blur_amount));
        let overlay = absolute_fill().kw(
            "background",
            format!("rgba({},{})", self.overlay_color, self.overlay_opacity),
        );
        let layers = vec![
            self.media.node(&self.src, backdrop, self.volume),
            VisualNode::container(overlay),
            self.media
                .node(&self.src, fill_frame(self.foreground_fit), self.volume),
        ];
        let frame = FullBleed::default().render(ctx)?;
        Ok(frame.with_children(layers))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/layout.rs"]
mod tests;
