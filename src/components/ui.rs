//! Interface building blocks: cards, buttons, tags, dividers, lists and icons.
//!
//! Buttons are visual only; nothing here reacts to input.

use crate::{
    components::{
        Component, Render, accent_color, data::Orientation, font_family, render_all, text_color,
        themed_str, tint, wrap,
    },
    eval::context::RenderCtx,
    foundation::error::FramecraftResult,
    node::model::{Style, VisualNode},
    theme::tokens::{self, font_size, font_weight, radii, semantic_radii, shadows},
};

const GLASS_BACKGROUND: &str = "rgba(255,255,255,0.1)";
const GLASS_BORDER: &str = "1px solid rgba(255,255,255,0.2)";
const GLASS_SHADOW: &str = "0 8px 32px rgba(0,0,0,0.1)";
const GLASS_BLUR: &str = "blur(10px)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardVariant {
    /// Faint fill with a hairline border.
    #[default]
    Default,
    /// Card fill lifted by the theme's card shadow.
    Elevated,
    /// Transparent with an accent border.
    Outlined,
    /// Frosted translucent panel.
    Glass,
}

/// Padded panel grouping related content.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Card {
    pub variant: CardVariant,
    /// CSS padding shorthand.
    pub padding: String,
    pub background: Option<String>,
    pub radius: Option<f64>,
    pub children: Vec<Component>,
    pub style: Style,
}

impl Default for Card {
    fn default() -> Self {
        Self {
            variant: CardVariant::Default,
            padding: "36px 56px".to_owned(),
            background: None,
            radius: None,
            children: Vec::new(),
            style: Style::new(),
        }
    }
}

impl Card {
    pub fn new(variant: CardVariant, children: Vec<Component>) -> Self {
        Self {
            variant,
            children,
            ..Self::default()
        }
    }

    pub fn elevated(children: Vec<Component>) -> Self {
        Self::new(CardVariant::Elevated, children)
    }

    pub fn glass(children: Vec<Component>) -> Self {
        Self::new(CardVariant::Glass, children)
    }

    fn variant_style(&self, ctx: &RenderCtx<'_>) -> Style {
        let explicit = self.background.as_deref();
        match self.variant {
            CardVariant::Default => {
                let border = themed_str(
                    ctx,
                    None,
                    |t| t.colors.border.as_deref(),
                    tokens::colors::BORDER,
                );
                Style::new()
                    .kw(
                        "background",
                        themed_str(
                            ctx,
                            explicit,
                            |t| t.colors.bg_card.as_deref(),
                            tokens::colors::BG_CARD,
                        ),
                    )
                    .kw("border", format!("1px solid {border}"))
                    .kw("boxShadow", shadows::NONE)
            }
            CardVariant::Elevated => Style::new()
                .kw(
                    "background",
                    themed_str(
                        ctx,
                        explicit,
                        |t| t.colors.bg_card.as_deref(),
                        tokens::palette::WHITE,
                    ),
                )
                .kw("border", "none")
                .kw(
                    "boxShadow",
                    themed_str(ctx, None, |t| Some(t.shadows.card.as_str()), shadows::CARD),
                ),
            CardVariant::Outlined => Style::new()
                .kw("background", explicit.unwrap_or("transparent"))
                .kw("border", format!("2px solid {}", accent_color(ctx, None)))
                .kw("boxShadow", shadows::NONE),
            CardVariant::Glass => Style::new()
                .kw("background", explicit.unwrap_or(GLASS_BACKGROUND))
                .kw("border", GLASS_BORDER)
                .kw("backdropFilter", GLASS_BLUR)
                .kw("boxShadow", GLASS_SHADOW),
        }
    }
}

impl Render for Card {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let radius = self
            .radius
            .or(ctx.themed(|t| t.radii.card))
            .unwrap_or(semantic_radii::CARD);
        let base = Style::new()
            .kw("padding", self.padding.as_str())
            .px("borderRadius", radius)
            .merge(&self.variant_style(ctx));
        Ok(wrap(base, &self.style, render_all(&self.children, ctx)?))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    /// `(font size, padding, radius)`.
    fn metrics(self) -> (f64, &'static str, f64) {
        match self {
            Self::Small => (font_size::CAPTION, "12px 24px", radii::MD),
            Self::Medium => (font_size::BODY, "16px 32px", radii::LG),
            Self::Large => (font_size::SUBTITLE, "20px 48px", radii::XL),
        }
    }
}

/// Call-to-action pill with an optional leading icon.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Button {
    pub text: String,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub full_width: bool,
    pub icon: Option<String>,
    pub style: Style,
}

impl Button {
    pub fn new(text: impl Into<String>, variant: ButtonVariant) -> Self {
        Self {
            text: text.into(),
            variant,
            ..Self::default()
        }
    }

    fn variant_style(&self, ctx: &RenderCtx<'_>) -> Style {
        let accent = accent_color(ctx, None);
        match self.variant {
            ButtonVariant::Primary => Style::new()
                .kw("background", accent)
                .kw("color", tokens::palette::WHITE)
                .kw("border", "none")
                .kw("boxShadow", shadows::MD),
            ButtonVariant::Secondary => Style::new()
                .kw("background", "rgba(0,0,0,0.08)")
                .kw("color", text_color(ctx))
                .kw("border", "none"),
            ButtonVariant::Outline => Style::new()
                .kw("background", "transparent")
                .kw("border", format!("2px solid {accent}"))
                .kw("color", accent),
            ButtonVariant::Ghost => Style::new()
                .kw("background", "transparent")
                .kw("color", text_color(ctx))
                .kw("border", "none"),
        }
    }
}

impl Render for Button {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let (size, padding, radius) = self.size.metrics();
        let style = Style::new()
            .kw("display", "inline-flex")
            .kw("alignItems", "center")
            .kw("justifyContent", "center")
            .px("gap", 12.0)
            .num("fontWeight", font_weight::SEMIBOLD)
            .px("fontSize", size)
            .kw("padding", padding)
            .px("borderRadius", radius);
        let style = if self.full_width {
            style.pct("width", 100.0)
        } else {
            style.kw("width", "auto")
        };
        let style = style.merge(&self.variant_style(ctx)).merge(&self.style);

        let mut children = Vec::with_capacity(2);
        if let Some(icon) = &self.icon {
            children.push(VisualNode::text(icon, Style::new()));
        }
        children.push(VisualNode::text(&self.text, Style::new()));
        Ok(VisualNode::container(style).with_children(children))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl TagSize {
    fn metrics(self) -> (f64, &'static str) {
        match self {
            Self::Small => (font_size::SMALL, "4px 10px"),
            Self::Medium => (font_size::CAPTION, "6px 14px"),
            Self::Large => (font_size::BODY, "8px 18px"),
        }
    }
}

/// Compact keyword label on a faint accent fill.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Tag {
    pub text: String,
    pub background: Option<String>,
    pub color: Option<String>,
    pub size: TagSize,
    pub style: Style,
}

impl Tag {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

impl Render for Tag {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let accent = accent_color(ctx, None);
        let background = self
            .background
            .clone()
            .unwrap_or_else(|| tint(&accent, "20"));
        let color = self.color.clone().unwrap_or(accent);
        let (size, padding) = self.size.metrics();
        let style = Style::new()
            .kw("display", "inline-flex")
            .kw("alignItems", "center")
            .px("fontSize", size)
            .kw("padding", padding)
            .kw("background", background)
            .kw("color", color)
            .px("borderRadius", radii::MD)
            .num("fontWeight", font_weight::MEDIUM)
            .kw("whiteSpace", "nowrap")
            .merge(&self.style);
        Ok(VisualNode::text(&self.text, style))
    }
}

/// Wrapping row of same-styled tags.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TagGroup {
    pub tags: Vec<String>,
    pub gap: f64,
    pub size: TagSize,
    pub background: Option<String>,
    pub color: Option<String>,
    pub style: Style,
}

impl Default for TagGroup {
    fn default() -> Self {
        Self {
            tags: Vec::new(),
            gap: 12.0,
            size: TagSize::Medium,
            background: None,
            color: None,
            style: Style::new(),
        }
    }
}

impl Render for TagGroup {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let tags = self
            .tags
            .iter()
            .map(|text| {
                Tag {
                    text: text.clone(),
                    background: self.background.clone(),
                    color: self.color.clone(),
                    size: self.size,
                    style: Style::new(),
                }
                .render(ctx)
            })
            .collect::<FramecraftResult<Vec<_>>>()?;
        let base = Style::new()
            .kw("display", "flex")
            .kw("flexWrap", "wrap")
            .px("gap", self.gap);
        Ok(wrap(base, &self.style, tags))
    }
}

/// Thin separator line.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Divider {
    pub orientation: Orientation,
    pub thickness: f64,
    pub color: Option<String>,
    /// Draw in the theme accent instead of the border color.
    pub accent: bool,
    /// Gradient stops run along the line; overrides the solid color.
    pub gradient: Option<Vec<String>>,
    pub opacity: f64,
    /// Space on both sides across the line.
    pub margin: f64,
    pub style: Style,
}

impl Default for Divider {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            thickness: 1.0,
            color: None,
            accent: false,
            gradient: None,
            opacity: 1.0,
            margin: 24.0,
            style: Style::new(),
        }
    }
}

impl Divider {
    pub fn vertical() -> Self {
        Self {
            orientation: Orientation::Vertical,
            ..Self::default()
        }
    }

    /// Line fading in and out at both ends.
    pub fn gradient() -> Self {
        Self {
            gradient: Some(vec![
                "transparent".to_owned(),
                "rgba(0,0,0,0.1)".to_owned(),
                "transparent".to_owned(),
            ]),
            ..Self::default()
        }
    }

    fn background(&self, ctx: &RenderCtx<'_>) -> String {
        if let Some(stops) = &self.gradient {
            return format!("linear-gradient(90deg, {})", stops.join(", "));
        }
        if self.accent && self.color.is_none() {
            return accent_color(ctx, None);
        }
        themed_str(
            ctx,
            self.color.as_deref(),
            |t| t.colors.border.as_deref(),
            "rgba(0,0,0,0.1)",
        )
    }
}

impl Render for Divider {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let base = match self.orientation {
            Orientation::Horizontal => Style::new()
                .pct("width", 100.0)
                .px("height", self.thickness)
                .px("marginTop", self.margin)
                .px("marginBottom", self.margin),
            Orientation::Vertical => Style::new()
                .px("width", self.thickness)
                .pct("height", 100.0)
                .px("marginLeft", self.margin)
                .px("marginRight", self.margin),
        };
        let mut style = base.kw("background", self.background(ctx));
        if self.opacity < 1.0 {
            style = style.num("opacity", self.opacity);
        }
        Ok(VisualNode::container(style.merge(&self.style)))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStyle {
    #[default]
    Bullet,
    Number,
    Check,
    Emoji,
    None,
}

impl ListStyle {
    fn marker(self, index: usize) -> String {
        match self {
            Self::Bullet => "•".to_owned(),
            Self::Number => format!("{}.", index + 1),
            Self::Check => "✓".to_owned(),
            Self::Emoji => "→".to_owned(),
            Self::None => String::new(),
        }
    }
}

/// A list entry: plain text, or text with its own marker.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ListItem {
    Plain(String),
    Marked {
        text: String,
        #[serde(default)]
        icon: Option<String>,
    },
}

impl ListItem {
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Marked { text, .. } => text,
        }
    }

    pub fn icon(&self) -> Option<&str> {
        match self {
            Self::Plain(_) => None,
            Self::Marked { icon, .. } => icon.as_deref(),
        }
    }
}

impl From<&str> for ListItem {
    fn from(s: &str) -> Self {
        Self::Plain(s.to_owned())
    }
}

/// Vertical list with accent-colored markers.
///
/// An item's own icon wins over the list icon, which wins over the style's marker.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct List {
    pub items: Vec<ListItem>,
    pub list_style: ListStyle,
    pub icon: Option<String>,
    pub gap: f64,
    pub icon_size: f64,
    /// Theme body size when unset.
    pub text_size: Option<f64>,
    pub style: Style,
}

impl Default for List {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            list_style: ListStyle::Bullet,
            icon: None,
            gap: 24.0,
            icon_size: 40.0,
            text_size: None,
            style: Style::new(),
        }
    }
}

impl List {
    pub fn new(list_style: ListStyle, items: Vec<ListItem>) -> Self {
        Self {
            items,
            list_style,
            ..Self::default()
        }
    }

    /// Marker shown before item `index`; `None` for [`ListStyle::None`].
    pub fn marker(&self, index: usize) -> Option<String> {
        if self.list_style == ListStyle::None {
            return None;
        }
        let item = self.items.get(index)?;
        Some(match item.icon().or(self.icon.as_deref()) {
            Some(icon) => icon.to_owned(),
            None => self.list_style.marker(index),
        })
    }
}

impl Render for List {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let accent = accent_color(ctx, None);
        let text_size = self
            .text_size
            .or(ctx.themed(|t| t.typography.font_size.body))
            .unwrap_or(font_size::BODY);
        let text_style = Style::new()
            .px("fontSize", text_size)
            .num("fontWeight", font_weight::MEDIUM)
            .kw("color", text_color(ctx))
            .num("lineHeight", 1.4)
            .kw("fontFamily", font_family(ctx));
        let marker_width = if self.list_style == ListStyle::Number {
            60.0
        } else {
            40.0
        };

        let rows = self.items.iter().enumerate().map(|(index, item)| {
            let mut row = VisualNode::container(
                Style::new()
                    .kw("display", "flex")
                    .kw("alignItems", "flex-start")
                    .px("gap", 16.0),
            );
            if let Some(marker) = self.marker(index) {
                row = row.with_child(VisualNode::text(
                    marker,
                    Style::new()
                        .px("fontSize", self.icon_size)
                        .num("fontWeight", font_weight::BOLD)
                        .kw("color", accent.as_str())
                        .num("lineHeight", 1.0)
                        .px("minWidth", marker_width)
                        .kw("textAlign", "center"),
                ));
            }
            row.with_child(VisualNode::text(item.text(), text_style.clone()))
        });

        let base = Style::new()
            .kw("display", "flex")
            .kw("flexDirection", "column")
            .px("gap", self.gap);
        Ok(wrap(base, &self.style, rows.collect()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconSize {
    Small,
    #[default]
    Medium,
    Large,
    Xlarge,
}

impl IconSize {
    pub fn px(self) -> f64 {
        match self {
            Self::Small => 40.0,
            Self::Medium => 60.0,
            Self::Large => 80.0,
            Self::Xlarge => 120.0,
        }
    }
}

/// Emoji or glyph at a fixed size, optionally on a colored tile.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Icon {
    pub glyph: String,
    pub size: IconSize,
    pub custom_size: Option<f64>,
    pub background: Option<String>,
    pub rounded: bool,
    /// Round tile in a faint accent tint when no background is given.
    pub circle: bool,
    pub style: Style,
}

impl Icon {
    pub fn new(glyph: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
            ..Self::default()
        }
    }

    pub fn circle(glyph: impl Into<String>) -> Self {
        Self {
            circle: true,
            ..Self::new(glyph)
        }
    }
}

impl Render for Icon {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let size = self.custom_size.unwrap_or(self.size.px());
        let background = match &self.background {
            Some(bg) => Some(bg.clone()),
            None if self.circle => Some(tint(&accent_color(ctx, None), "15")),
            None => None,
        };
        let rounded = self.rounded || self.circle;

        let mut style = Style::new()
            .kw("display", "inline-flex")
            .kw("alignItems", "center")
            .kw("justifyContent", "center")
            .px("fontSize", size)
            .num("lineHeight", 1.0)
            .px("borderRadius", if rounded { radii::FULL } else { radii::LG });
        style = match background {
            Some(bg) => style
                .px("width", size * 1.5)
                .px("height", size * 1.5)
                .kw("background", bg),
            None => style
                .kw("width", "auto")
                .kw("height", "auto")
                .kw("background", "transparent"),
        };
        Ok(VisualNode::text(&self.glyph, style.merge(&self.style)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/ui.rs"]
mod tests;
