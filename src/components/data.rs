use crate::{
    animation::{
        counter::{NumberStyle, counter_value, format_number},
        ease::Ease,
        timing::Timing,
    },
    components::{
        Align, Component, Render, accent_color, font_family, muted_color, text_color, themed_str,
    },
    eval::context::RenderCtx,
    foundation::error::FramecraftResult,
    node::model::{Style, VisualNode},
    theme::tokens::{self, font_size, font_weight, radii},
};

const LABEL_ON_FILL: &str = "#fff";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelPosition {
    /// On the fill, right-aligned; hidden until the fill passes 10%.
    #[default]
    Inside,
    Outside,
    Above,
}

/// Bar filling to `value` percent with an `OutCubic` curve.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ProgressBar {
    /// Target fill in percent, clamped to `[0, 100]`.
    pub value: f64,
    pub orientation: Orientation,
    /// Bar height; 40 for horizontal bars and 200 for vertical ones when unset.
    pub height: Option<f64>,
    /// Horizontal bar width in pixels; full width when unset.
    pub width: Option<f64>,
    /// Vertical bar thickness.
    pub bar_width: f64,
    pub track_color: Option<String>,
    pub fill_color: Option<String>,
    pub show_label: bool,
    pub label_position: LabelPosition,
    pub delay: u64,
    pub duration: u64,
    pub radius: Option<f64>,
    pub style: Style,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self {
            value: 0.0,
            orientation: Orientation::Horizontal,
            height: None,
            width: None,
            bar_width: 40.0,
            track_color: None,
            fill_color: None,
            show_label: false,
            label_position: LabelPosition::Inside,
            delay: 0,
            duration: 30,
            radius: None,
            style: Style::new(),
        }
    }
}

impl ProgressBar {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    pub fn timing(&self) -> Timing {
        Timing {
            delay: self.delay,
            duration: self.duration,
            ease: Ease::OutCubic,
        }
    }

    /// Fill percentage at the context's local frame.
    pub fn progress(&self, ctx: &RenderCtx<'_>) -> f64 {
        self.value.clamp(0.0, 100.0) * self.timing().value(ctx.local_frame())
    }

    fn fill(&self, ctx: &RenderCtx<'_>) -> String {
        accent_color(ctx, self.fill_color.as_deref())
    }

    fn render_horizontal(&self, ctx: &RenderCtx<'_>) -> VisualNode {
        let progress = self.progress(ctx);
        let height = self.height.unwrap_or(40.0);
        let radius = self.radius.unwrap_or(radii::FULL);
        let inside = self.label_position == LabelPosition::Inside;

        let track_color = themed_str(
            ctx,
            self.track_color.as_deref(),
            |t| t.colors.border.as_deref(),
            "rgba(0,0,0,0.1)",
        );

        let label = || {
            let color = if inside {
                LABEL_ON_FILL.to_owned()
            } else {
                text_color(ctx)
            };
            let style = Style::new()
                .px("fontSize", height * 0.5)
                .num("fontWeight", font_weight::SEMIBOLD)
                .kw("color", color);
            VisualNode::text(format!("{}%", progress.round()), style)
        };

        let mut fill = VisualNode::container(
            Style::new()
                .pct("width", progress)
                .pct("height", 100.0)
                .kw("background", self.fill(ctx))
                .px("borderRadius", radius)
                .kw("display", "flex")
                .kw("alignItems", "center")
                .kw("justifyContent", "flex-end")
                .px("paddingRight", if inside { 16.0 } else { 0.0 }),
        );
        if self.show_label && inside && progress > 10.0 {
            fill = fill.with_child(label());
        }

        let mut track_style = Style::new();
        track_style = match self.width {
            Some(w) => track_style.px("width", w),
            None => track_style.pct("width", 100.0),
        };
        let track = VisualNode::container(
            track_style
                .px("height", height)
                .kw("background", track_color)
                .px("borderRadius", radius)
                .kw("overflow", "hidden")
                .kw("position", "relative"),
        )
        .with_child(fill);

        let mut root = VisualNode::container(self.style.clone());
        if self.show_label && self.label_position == LabelPosition::Above {
            root = root.with_child(
                VisualNode::container(
                    Style::new()
                        .px("marginBottom", 8.0)
                        .kw("textAlign", "right"),
                )
                .with_child(label()),
            );
        }
        root = root.with_child(track);
        if self.show_label && self.label_position == LabelPosition::Outside {
            root = root.with_child(
                VisualNode::container(Style::new().px("marginTop", 8.0)).with_child(label()),
            );
        }
        root
    }

    fn render_vertical(&self, ctx: &RenderCtx<'_>) -> VisualNode {
        let progress = self.progress(ctx);
        let radius = self.radius.unwrap_or(radii::FULL);
        let track = self
            .track_color
            .clone()
            .unwrap_or_else(|| "rgba(0,0,0,0.1)".to_owned());

        let fill = VisualNode::container(
            Style::new()
                .kw("position", "absolute")
                .px("bottom", 0.0)
                .px("left", 0.0)
                .px("right", 0.0)
                .pct("height", progress)
                .kw("background", self.fill(ctx))
                .px("borderRadius", radius),
        );
        let style = Style::new()
            .px("width", self.bar_width)
            .px("height", self.height.unwrap_or(200.0))
            .kw("background", track)
            .px("borderRadius", radius)
            .kw("overflow", "hidden")
            .kw("position", "relative")
            .merge(&self.style);
        VisualNode::container(style).with_child(fill)
    }
}

impl Render for ProgressBar {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        Ok(match self.orientation {
            Orientation::Horizontal => self.render_horizontal(ctx),
            Orientation::Vertical => self.render_vertical(ctx),
        })
    }
}

/// Number counting up from zero to `value`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Counter {
    pub value: f64,
    pub delay: u64,
    pub duration: u64,
    pub prefix: String,
    pub suffix: String,
    /// Fraction digits; ignored by [`NumberStyle::Compact`].
    pub decimals: usize,
    pub number_style: NumberStyle,
    pub ease: Ease,
    pub style: Style,
}

impl Default for Counter {
    fn default() -> Self {
        Self {
            value: 0.0,
            delay: 0,
            duration: 30,
            prefix: String::new(),
            suffix: String::new(),
            decimals: 0,
            number_style: NumberStyle::Grouped,
            ease: Ease::OutCubic,
            style: Style::new(),
        }
    }
}

impl Counter {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    /// `K`/`M`/`B` counter with linear progress.
    pub fn compact(value: f64) -> Self {
        Self {
            number_style: NumberStyle::Compact,
            ease: Ease::Linear,
            ..Self::new(value)
        }
    }

    pub fn percentage(value: f64) -> Self {
        Self {
            suffix: "%".to_owned(),
            ..Self::new(value)
        }
    }

    pub fn currency(value: f64, symbol: impl Into<String>) -> Self {
        Self {
            prefix: symbol.into(),
            ..Self::new(value)
        }
    }

    pub fn timing(&self) -> Timing {
        Timing {
            delay: self.delay,
            duration: self.duration,
            ease: self.ease,
        }
    }

    /// Display string at the context's local frame, prefix and suffix included.
    pub fn display(&self, ctx: &RenderCtx<'_>) -> String {
        let current = counter_value(self.value, self.timing().value(ctx.local_frame()));
        let number = format_number(current, self.decimals, self.number_style);
        format!("{}{number}{}", self.prefix, self.suffix)
    }
}

impl Render for Counter {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        Ok(VisualNode::text(self.display(ctx), self.style.clone()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    #[default]
    Default,
    Success,
    Warning,
    Error,
    Info,
    Outline,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl BadgeSize {
    fn font_size(self) -> f64 {
        match self {
            Self::Small => font_size::SMALL,
            Self::Medium => font_size::CAPTION,
            Self::Large => font_size::BODY,
        }
    }

    fn padding(self) -> &'static str {
        match self {
            Self::Small => "4px 12px",
            Self::Medium => "8px 16px",
            Self::Large => "12px 24px",
        }
    }
}

/// Inline status label.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Badge {
    pub text: String,
    pub variant: BadgeVariant,
    pub size: BadgeSize,
    pub background: Option<String>,
    pub color: Option<String>,
    /// Fully rounded ends.
    pub pill: bool,
    pub style: Style,
}

impl Default for Badge {
    fn default() -> Self {
        Self {
            text: String::new(),
            variant: BadgeVariant::Default,
            size: BadgeSize::Medium,
            background: None,
            color: None,
            pill: true,
            style: Style::new(),
        }
    }
}

impl Badge {
    pub fn new(text: impl Into<String>, variant: BadgeVariant) -> Self {
        Self {
            text: text.into(),
            variant,
            ..Self::default()
        }
    }

    /// `(background, text color, border)` for the variant under the active theme.
    fn palette(&self, ctx: &RenderCtx<'_>) -> (String, String, Option<String>) {
        let white = LABEL_ON_FILL.to_owned();
        match self.variant {
            BadgeVariant::Default => ("rgba(0,0,0,0.08)".to_owned(), text_color(ctx), None),
            BadgeVariant::Success => (
                themed_str(
                    ctx,
                    None,
                    |t| Some(t.colors.positive.as_str()),
                    tokens::DEFAULT.positive,
                ),
                white,
                None,
            ),
            BadgeVariant::Warning => (
                themed_str(
                    ctx,
                    None,
                    |t| t.colors.warning.as_deref(),
                    tokens::colors::WARNING,
                ),
                white,
                None,
            ),
            BadgeVariant::Error => (
                themed_str(
                    ctx,
                    None,
                    |t| Some(t.colors.negative.as_str()),
                    tokens::DEFAULT.negative,
                ),
                white,
                None,
            ),
            BadgeVariant::Info => (accent_color(ctx, None), white, None),
            BadgeVariant::Outline => {
                let accent = accent_color(ctx, None);
                let border = format!("2px solid {accent}");
                ("transparent".to_owned(), accent, Some(border))
            }
        }
    }
}

impl Render for Badge {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let (bg, fg, border) = self.palette(ctx);
        let style = Style::new()
            .kw("display", "inline-flex")
            .kw("alignItems", "center")
            .kw("justifyContent", "center")
            .px("fontSize", self.size.font_size())
            .kw("padding", self.size.padding())
            .kw("background", self.background.clone().unwrap_or(bg))
            .kw("color", self.color.clone().unwrap_or(fg))
            .kw("border", border.unwrap_or_else(|| "none".to_owned()))
            .px(
                "borderRadius",
                if self.pill { radii::FULL } else { radii::MD },
            )
            .num("fontWeight", font_weight::SEMIBOLD)
            .kw("whiteSpace", "nowrap")
            .merge(&self.style);
        Ok(VisualNode::text(&self.text, style))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSize {
    Hero,
    #[default]
    Large,
    Medium,
    Small,
}

impl DataSize {
    /// `(value, label)` font sizes.
    pub fn font_sizes(self) -> (f64, f64) {
        match self {
            Self::Hero => (font_size::DATA_HERO, font_size::BODY),
            Self::Large => (font_size::DATA_LARGE, font_size::CAPTION),
            Self::Medium => (font_size::DATA, font_size::CAPTION),
            Self::Small => (font_size::DATA_SMALL, font_size::SMALL),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelSide {
    Top,
    #[default]
    Bottom,
}

/// What a [`DataDisplay`] shows: fixed text or a component such as a [`Counter`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Text(String),
    Component(Box<Component>),
}

impl Default for DataValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<Counter> for DataValue {
    fn from(c: Counter) -> Self {
        Self::Component(Box::new(Component::Counter(c)))
    }
}

impl DataValue {
    /// Validates an embedded component; text is always valid.
    pub fn validate(&self) -> FramecraftResult<()> {
        match self {
            Self::Text(_) => Ok(()),
            Self::Component(c) => c.validate(),
        }
    }

    fn render_with(&self, style: Style, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        Ok(match self {
            Self::Text(t) => VisualNode::text(t, style),
            Self::Component(c) => VisualNode::container(style).with_child(c.render(ctx)?),
        })
    }
}

/// Large statistic with an optional label.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DataDisplay {
    pub value: DataValue,
    pub label: Option<String>,
    pub color: Option<String>,
    pub size: DataSize,
    pub label_position: LabelSide,
    pub align: Align,
    pub style: Style,
}

impl Default for DataDisplay {
    fn default() -> Self {
        Self {
            value: DataValue::default(),
            label: None,
            color: None,
            size: DataSize::Large,
            label_position: LabelSide::Bottom,
            align: Align::Center,
            style: Style::new(),
        }
    }
}

impl DataDisplay {
    pub fn new(value: impl Into<DataValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: Some(label.into()),
            ..Self::default()
        }
    }
}

impl Render for DataDisplay {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let (value_size, label_size) = self.size.font_sizes();
        let family = font_family(ctx);

        let value_style = Style::new()
            .px("fontSize", value_size)
            .num("fontWeight", font_weight::EXTRABOLD)
            .kw("color", accent_color(ctx, self.color.as_deref()))
            .num("lineHeight", 1.0)
            .kw("fontFamily", family.clone());
        let value = self.value.render_with(value_style, ctx)?;

        let label = self.label.as_ref().map(|text| {
            let top = self.label_position == LabelSide::Top;
            let style = Style::new()
                .px("fontSize", label_size)
                .num("fontWeight", font_weight::MEDIUM)
                .kw("color", muted_color(ctx))
                .px("marginTop", if top { 0.0 } else { 12.0 })
                .px("marginBottom", if top { 8.0 } else { 0.0 })
                .kw("fontFamily", family.clone());
            VisualNode::text(text, style)
        });

        let mut children = Vec::with_capacity(2);
        match self.label_position {
            LabelSide::Top => {
                children.extend(label);
                children.push(value);
            }
            LabelSide::Bottom => {
                children.push(value);
                children.extend(label);
            }
        }

        let style = Style::new()
            .kw("textAlign", self.align.as_css())
            .merge(&self.style);
        Ok(VisualNode::container(style).with_children(children))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Neutral,
}

impl Trend {
    pub fn arrow(self) -> Option<&'static str> {
        match self {
            Self::Up => Some("↑"),
            Self::Down => Some("↓"),
            Self::Neutral => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl StatSize {
    /// `(value, label and change)` font sizes.
    pub fn font_sizes(self) -> (f64, f64) {
        match self {
            Self::Small => (font_size::DATA_SMALL, font_size::SMALL),
            Self::Medium => (font_size::DATA, font_size::CAPTION),
            Self::Large => (font_size::DATA_LARGE, font_size::BODY),
        }
    }
}

/// KPI with a label and an optional change line colored by its trend.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Stat {
    pub value: DataValue,
    pub label: String,
    /// Preformatted delta such as `+12%`.
    pub change: Option<String>,
    pub trend: Trend,
    pub size: StatSize,
    pub style: Style,
}

impl Stat {
    pub fn new(value: impl Into<DataValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn change(mut self, change: impl Into<String>, trend: Trend) -> Self {
        self.change = Some(change.into());
        self.trend = trend;
        self
    }

    fn trend_color(&self, ctx: &RenderCtx<'_>) -> String {
        match self.trend {
            Trend::Up => themed_str(
                ctx,
                None,
                |t| Some(t.colors.positive.as_str()),
                tokens::DEFAULT.positive,
            ),
            Trend::Down => themed_str(
                ctx,
                None,
                |t| Some(t.colors.negative.as_str()),
                tokens::DEFAULT.negative,
            ),
            Trend::Neutral => muted_color(ctx),
        }
    }
}

impl Render for Stat {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let (value_size, small_size) = self.size.font_sizes();
        let family = font_family(ctx);

        let value_style = Style::new()
            .px("fontSize", value_size)
            .num("fontWeight", font_weight::EXTRABOLD)
            .kw("color", text_color(ctx))
            .num("lineHeight", 1.0)
            .kw("fontFamily", family.as_str());
        let mut children = vec![
            self.value.render_with(value_style, ctx)?,
            VisualNode::text(
                &self.label,
                Style::new()
                    .px("fontSize", small_size)
                    .kw("color", muted_color(ctx))
                    .px("marginTop", 8.0)
                    .kw("fontFamily", family.as_str()),
            ),
        ];

        if let Some(change) = &self.change {
            let mut line = VisualNode::container(
                Style::new()
                    .px("fontSize", small_size)
                    .num("fontWeight", font_weight::SEMIBOLD)
                    .kw("color", self.trend_color(ctx))
                    .px("marginTop", 8.0)
                    .kw("fontFamily", family.as_str()),
            );
            if let Some(arrow) = self.trend.arrow() {
                line = line.with_child(VisualNode::text(
                    arrow,
                    Style::new()
                        .px("marginRight", 4.0)
                        .px("fontSize", small_size * 0.8),
                ));
            }
            children.push(line.with_child(VisualNode::text(change, Style::new())));
        }

        let style = Style::new().kw("textAlign", "center").merge(&self.style);
        Ok(VisualNode::container(style).with_children(children))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/data.rs"]
mod tests;
