use crate::theme::tokens;

/// A complete theme: every slot has a value.
///
/// Build one from the default with [`create_theme`] or take a preset from
/// [`crate::theme::presets`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
    pub typography: ThemeTypography,
    pub spacing: ThemeSpacing,
    pub layout: ThemeLayout,
    pub shadows: ThemeShadows,
    pub radii: ThemeRadii,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub bg_card: Option<String>,
    pub text: String,
    pub text_muted: String,
    pub accent: String,
    pub accent_secondary: Option<String>,
    pub positive: String,
    pub negative: String,
    pub warning: Option<String>,
    pub border: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ThemeTypography {
    pub font_family: String,
    pub font_size: ThemeFontSizes,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ThemeFontSizes {
    pub hero: f64,
    pub title: f64,
    pub subtitle: f64,
    pub body: f64,
    pub caption: f64,
    pub data_large: f64,
    pub data: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ThemeSpacing {
    pub page: f64,
    pub section: f64,
    pub element: f64,
    pub tight: f64,
    pub subtitle_margin: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ThemeLayout {
    pub min_content_width: f64,
    pub max_content_width: f64,
    pub card_width: f64,
    pub subtitle_margin: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ThemeShadows {
    pub card: String,
    pub card_hover: String,
    pub glow: Option<String>,
    pub text: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ThemeRadii {
    pub card: f64,
    pub button: f64,
    pub badge: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_owned(),
            colors: ThemeColors {
                bg: tokens::DEFAULT.bg.to_owned(),
                bg_card: Some(tokens::colors::BG_CARD.to_owned()),
                text: tokens::DEFAULT.text.to_owned(),
                text_muted: tokens::DEFAULT.text_muted.to_owned(),
                accent: tokens::DEFAULT.accent.to_owned(),
                accent_secondary: None,
                positive: tokens::DEFAULT.positive.to_owned(),
                negative: tokens::DEFAULT.negative.to_owned(),
                warning: Some(tokens::colors::WARNING.to_owned()),
                border: Some(tokens::colors::BORDER.to_owned()),
            },
            typography: ThemeTypography {
                font_family: tokens::font_family::SANS.to_owned(),
                font_size: ThemeFontSizes {
                    hero: tokens::font_size::HERO,
                    title: tokens::font_size::TITLE,
                    subtitle: tokens::font_size::SUBTITLE,
                    body: tokens::font_size::BODY,
                    caption: tokens::font_size::CAPTION,
                    data_large: tokens::font_size::DATA_LARGE,
                    data: tokens::font_size::DATA,
                },
            },
            spacing: ThemeSpacing {
                page: tokens::spacing::PAGE,
                section: tokens::spacing::SECTION,
                element: tokens::spacing::ELEMENT,
                tight: tokens::spacing::TIGHT,
                subtitle_margin: tokens::spacing::SUBTITLE_MARGIN,
            },
            layout: ThemeLayout {
                min_content_width: tokens::content_width::MIN,
                max_content_width: tokens::content_width::MAX,
                card_width: tokens::fixed_width::CARD,
                subtitle_margin: tokens::spacing::SUBTITLE_MARGIN,
            },
            shadows: ThemeShadows {
                card: tokens::shadows::CARD.to_owned(),
                card_hover: tokens::shadows::CARD_HOVER.to_owned(),
                glow: Some(tokens::shadows::NONE.to_owned()),
                text: Some(tokens::shadows::NONE.to_owned()),
            },
            radii: ThemeRadii {
                card: tokens::semantic_radii::CARD,
                button: tokens::semantic_radii::BUTTON,
                badge: tokens::semantic_radii::BADGE,
            },
        }
    }
}

/// Partial theme. Every field is optional; `None` keeps the base value.
///
/// Sections merge one level deep: overriding `colors.accent` keeps every other color. The font
/// size table is replaced as a whole.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ThemeOverrides {
    pub colors: ColorOverrides,
    pub typography: TypographyOverrides,
    pub spacing: SpacingOverrides,
    pub layout: LayoutOverrides,
    pub shadows: ShadowOverrides,
    pub radii: RadiiOverrides,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ColorOverrides {
    pub bg: Option<String>,
    pub bg_card: Option<String>,
    pub text: Option<String>,
    pub text_muted: Option<String>,
    pub accent: Option<String>,
    pub accent_secondary: Option<String>,
    pub positive: Option<String>,
    pub negative: Option<String>,
    pub warning: Option<String>,
    pub border: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TypographyOverrides {
    pub font_family: Option<String>,
    pub font_size: Option<ThemeFontSizes>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpacingOverrides {
    pub page: Option<f64>,
    pub section: Option<f64>,
    pub element: Option<f64>,
    pub tight: Option<f64>,
    pub subtitle_margin: Option<f64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutOverrides {
    pub min_content_width: Option<f64>,
    pub max_content_width: Option<f64>,
    pub card_width: Option<f64>,
    pub subtitle_margin: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ShadowOverrides {
    pub card: Option<String>,
    pub card_hover: Option<String>,
    pub glow: Option<String>,
    pub text: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RadiiOverrides {
    pub card: Option<f64>,
    pub button: Option<f64>,
    pub badge: Option<f64>,
}

fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

fn set_opt<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

impl ThemeOverrides {
    /// Apply every present field on top of `base`.
    pub fn apply(self, base: &mut Theme) {
        let Self {
            colors,
            typography,
            spacing,
            layout,
            shadows,
            radii,
        } = self;

        let c = &mut base.colors;
        set(&mut c.bg, colors.bg);
        set_opt(&mut c.bg_card, colors.bg_card);
        set(&mut c.text, colors.text);
        set(&mut c.text_muted, colors.text_muted);
        set(&mut c.accent, colors.accent);
        set_opt(&mut c.accent_secondary, colors.accent_secondary);
        set(&mut c.positive, colors.positive);
        set(&mut c.negative, colors.negative);
        set_opt(&mut c.warning, colors.warning);
        set_opt(&mut c.border, colors.border);

        set(&mut base.typography.font_family, typography.font_family);
        set(&mut base.typography.font_size, typography.font_size);

        let s = &mut base.spacing;
        set(&mut s.page, spacing.page);
        set(&mut s.section, spacing.section);
        set(&mut s.element, spacing.element);
        set(&mut s.tight, spacing.tight);
        set(&mut s.subtitle_margin, spacing.subtitle_margin);

        let l = &mut base.layout;
        set(&mut l.min_content_width, layout.min_content_width);
        set(&mut l.max_content_width, layout.max_content_width);
        set(&mut l.card_width, layout.card_width);
        set(&mut l.subtitle_margin, layout.subtitle_margin);

        let sh = &mut base.shadows;
        set(&mut sh.card, shadows.card);
        set(&mut sh.card_hover, shadows.card_hover);
        set_opt(&mut sh.glow, shadows.glow);
        set_opt(&mut sh.text, shadows.text);

        set(&mut base.radii.card, radii.card);
        set(&mut base.radii.button, radii.button);
        set(&mut base.radii.badge, radii.badge);
    }
}

/// Default theme with `overrides` merged on top, renamed to `name`.
pub fn create_theme(name: impl Into<String>, overrides: ThemeOverrides) -> Theme {
    let mut theme = Theme::default();
    theme.name = name.into();
    overrides.apply(&mut theme);
    theme
}

impl Theme {
    /// CSS custom properties exposing the theme to host stylesheets, in a fixed order.
    pub fn css_variables(&self) -> Vec<(&'static str, String)> {
        vec![
            ("--color-bg", self.colors.bg.clone()),
            ("--color-text", self.colors.text.clone()),
            ("--color-text-muted", self.colors.text_muted.clone()),
            ("--color-accent", self.colors.accent.clone()),
            ("--color-positive", self.colors.positive.clone()),
            ("--color-negative", self.colors.negative.clone()),
            ("--font-family", self.typography.font_family.clone()),
            ("--spacing-page", px(self.spacing.page)),
            ("--spacing-section", px(self.spacing.section)),
            ("--spacing-element", px(self.spacing.element)),
            ("--radius-card", px(self.radii.card)),
            ("--radius-button", px(self.radii.button)),
            ("--shadow-card", self.shadows.card.clone()),
        ]
    }
}

fn px(v: f64) -> String {
    format!("{v}px")
}

#[cfg(test)]
#[path = "../../tests/unit/theme/model.rs"]
mod tests;
