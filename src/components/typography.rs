use crate::{
    components::{
        Align, Render, accent_color, font_family, muted_color, text_color, text_style, themed_str,
    },
    eval::context::RenderCtx,
    foundation::error::FramecraftResult,
    node::model::{Style, VisualNode},
    theme::tokens::{self, TextStyle, font_size, font_weight, radii, text_styles},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleSize {
    Hero,
    Display,
    #[default]
    Large,
    Medium,
}

impl TitleSize {
    pub fn text_style(self) -> TextStyle {
        match self {
            Self::Hero => text_styles::HERO,
            Self::Display => text_styles::DISPLAY,
            Self::Large => text_styles::TITLE,
            Self::Medium => text_styles::SUBTITLE,
        }
    }
}

/// Heading text. Centered by default.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Title {
    pub text: String,
    pub size: TitleSize,
    pub color: Option<String>,
    pub align: Align,
    pub style: Style,
}

impl Default for Title {
    fn default() -> Self {
        Self {
            text: String::new(),
            size: TitleSize::Large,
            color: None,
            align: Align::Center,
            style: Style::new(),
        }
    }
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn hero(text: impl Into<String>) -> Self {
        Self {
            size: TitleSize::Hero,
            ..Self::new(text)
        }
    }

    pub fn subtitle(text: impl Into<String>) -> Self {
        Self {
            size: TitleSize::Medium,
            ..Self::new(text)
        }
    }
}

impl Render for Title {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let color = self.color.clone().unwrap_or_else(|| text_color(ctx));
        let style = text_style(&self.size.text_style())
            .kw("fontFamily", font_family(ctx))
            .kw("color", color)
            .kw("textAlign", self.align.as_css())
            .merge(&self.style);
        Ok(VisualNode::text(&self.text, style))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSize {
    #[default]
    Body,
    Small,
    Large,
}

impl TextSize {
    pub fn text_style(self) -> TextStyle {
        match self {
            Self::Body | Self::Large => text_styles::BODY,
            Self::Small => text_styles::BODY_SMALL,
        }
    }
}

/// Body copy. Left-aligned by default.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Text {
    pub text: String,
    pub size: TextSize,
    pub color: Option<String>,
    /// Use the theme's muted text color.
    pub muted: bool,
    /// Use the theme accent; an explicit color still wins.
    pub accent: bool,
    pub bold: bool,
    pub align: Align,
    pub style: Style,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn muted(mut self) -> Self {
        self.muted = true;
        self
    }

    pub fn accent(mut self) -> Self {
        self.accent = true;
        self
    }
}

impl Render for Text {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let color = match &self.color {
            Some(c) => c.clone(),
            None if self.accent => accent_color(ctx, None),
            None if self.muted => muted_color(ctx),
            None => text_color(ctx),
        };
        let mut style = text_style(&self.size.text_style())
            .kw("fontFamily", font_family(ctx))
            .kw("color", color)
            .kw("textAlign", self.align.as_css());
        if self.bold {
            style = style.num("fontWeight", tokens::font_weight::BOLD);
        }
        Ok(VisualNode::text(&self.text, style.merge(&self.style)))
    }
}

/// Small muted text. `label` turns it into an uppercase semibold label.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Caption {
    pub text: String,
    pub color: Option<String>,
    pub uppercase: bool,
    pub label: bool,
    pub align: Align,
    pub style: Style,
}

impl Default for Caption {
    fn default() -> Self {
        Self {
            text: String::new(),
            color: None,
            uppercase: false,
            label: false,
            align: Align::Center,
            style: Style::new(),
        }
    }
}

impl Caption {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Uppercase semibold label.
    pub fn label(text: impl Into<String>) -> Self {
        Self {
            label: true,
            ..Self::new(text)
        }
    }
}

impl Render for Caption {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let uppercase = self.uppercase || self.label;
        let color = self.color.clone().unwrap_or_else(|| muted_color(ctx));
        let mut style = text_style(&text_styles::CAPTION)
            .kw("fontFamily", font_family(ctx))
            .kw("color", color)
            .kw("textAlign", self.align.as_css())
            .kw("textTransform", if uppercase { "uppercase" } else { "none" })
            .px(
                "letterSpacing",
                if uppercase {
                    tokens::letter_spacing::WIDER
                } else {
                    tokens::letter_spacing::NORMAL
                },
            );
        if self.label {
            style = style.num("fontWeight", tokens::font_weight::SEMIBOLD);
        }
        Ok(VisualNode::text(&self.text, style.merge(&self.style)))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl CodeSize {
    fn font_size(self) -> f64 {
        match self {
            Self::Small => font_size::CAPTION,
            Self::Medium => font_size::BODY,
            Self::Large => font_size::SUBTITLE,
        }
    }
}

/// Monospace snippet, inline or as a padded block.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Code {
    pub code: String,
    pub block: bool,
    pub size: CodeSize,
    pub color: Option<String>,
    pub background: Option<String>,
    pub style: Style,
}

impl Code {
    pub fn inline(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }

    pub fn block(code: impl Into<String>) -> Self {
        Self {
            block: true,
            ..Self::inline(code)
        }
    }
}

impl Render for Code {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let size = self.size.font_size();
        let background = themed_str(
            ctx,
            self.background.as_deref(),
            |t| t.colors.bg_card.as_deref(),
            "rgba(0,0,0,0.05)",
        );
        let color = self.color.clone().unwrap_or_else(|| text_color(ctx));
        let style = Style::new()
            .kw("fontFamily", tokens::font_family::MONO)
            .kw("color", color)
            .kw("background", background);
        let style = if self.block {
            style
                .kw("display", "block")
                .px("fontSize", size)
                .kw("padding", "24px 32px")
                .px("borderRadius", radii::LG)
                .num("lineHeight", 1.6)
                .kw("whiteSpace", "pre-wrap")
        } else {
            style
                .kw("display", "inline")
                .px("fontSize", size * 0.9)
                .kw("padding", "4px 8px")
                .px("borderRadius", radii::SM)
        };
        Ok(VisualNode::text(&self.code, style.merge(&self.style)))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteVariant {
    #[default]
    Default,
    Large,
    Minimal,
}

impl QuoteVariant {
    /// `(font size, weight, italic)`.
    fn metrics(self) -> (f64, f64, bool) {
        match self {
            Self::Default => (font_size::SUBTITLE, font_weight::MEDIUM, true),
            Self::Large => (font_size::TITLE, font_weight::SEMIBOLD, false),
            Self::Minimal => (font_size::BODY, font_weight::NORMAL, true),
        }
    }
}

/// Pull quote with faint accent quote marks and an optional attribution line.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Quote {
    pub text: String,
    pub attribution: Option<String>,
    pub variant: QuoteVariant,
    pub show_quote_marks: bool,
    pub color: Option<String>,
    pub style: Style,
}

impl Default for Quote {
    fn default() -> Self {
        Self {
            text: String::new(),
            attribution: None,
            variant: QuoteVariant::Default,
            show_quote_marks: true,
            color: None,
            style: Style::new(),
        }
    }
}

impl Quote {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn by(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = Some(attribution.into());
        self
    }
}

impl Render for Quote {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let (size, weight, italic) = self.variant.metrics();
        let color = self.color.clone().unwrap_or_else(|| text_color(ctx));
        let mark = |glyph: &str| {
            VisualNode::text(
                glyph,
                Style::new()
                    .px("fontSize", size * 1.5)
                    .kw("color", accent_color(ctx, None))
                    .num("opacity", 0.3)
                    .num("lineHeight", 1.0),
            )
        };

        let mut line = VisualNode::container(
            Style::new()
                .px("fontSize", size)
                .num("fontWeight", weight)
                .kw("fontStyle", if italic { "italic" } else { "normal" })
                .kw("color", color)
                .num("lineHeight", 1.4)
                .kw("fontFamily", font_family(ctx)),
        );
        if self.show_quote_marks {
            line = line.with_child(mark("\u{201c}"));
        }
        line = line.with_child(VisualNode::text(&self.text, Style::new()));
        if self.show_quote_marks {
            line = line.with_child(mark("\u{201d}"));
        }

        let mut children = vec![line];
        if let Some(name) = &self.attribution {
            children.push(VisualNode::text(
                format!("\u{2014} {name}"),
                Style::new()
                    .px("marginTop", 24.0)
                    .px("fontSize", font_size::CAPTION)
                    .kw("color", muted_color(ctx))
                    .num("fontWeight", font_weight::MEDIUM)
                    .kw("fontFamily", font_family(ctx)),
            ));
        }
        let base = Style::new()
            .kw("display", "flex")
            .kw("flexDirection", "column");
        Ok(VisualNode::container(base.merge(&self.style)).with_children(children))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/typography.rs"]
mod tests;
