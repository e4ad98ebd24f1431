use std::str::FromStr;

use crate::{
    foundation::error::{FramecraftError, FramecraftResult},
    theme::model::{
        ColorOverrides, RadiiOverrides, ShadowOverrides, Theme, ThemeOverrides, create_theme,
    },
};

/// Built-in theme presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    /// Pure white background, large titles, minimal layout.
    #[default]
    MinimalWhite,
    /// Dark background with neon accents and glows.
    DarkTech,
    /// Purple-blue gradient background with white text.
    GradientVibrant,
    /// Slate background with navy accents.
    CorporateBlue,
}

impl ThemeName {
    pub const ALL: [Self; 4] = [
        Self::MinimalWhite,
        Self::DarkTech,
        Self::GradientVibrant,
        Self::CorporateBlue,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MinimalWhite => "minimal-white",
            Self::DarkTech => "dark-tech",
            Self::GradientVibrant => "gradient-vibrant",
            Self::CorporateBlue => "corporate-blue",
        }
    }
}

impl FromStr for ThemeName {
    type Err = FramecraftError;

    /// Accepts kebab-case (`dark-tech`) and camelCase (`darkTech`) names.
    fn from_str(s: &str) -> FramecraftResult<Self> {
        match s {
            "minimal-white" | "minimalWhite" => Ok(Self::MinimalWhite),
            "dark-tech" | "darkTech" => Ok(Self::DarkTech),
            "gradient-vibrant" | "gradientVibrant" => Ok(Self::GradientVibrant),
            "corporate-blue" | "corporateBlue" => Ok(Self::CorporateBlue),
            other => Err(FramecraftError::validation(format!(
                "unknown theme preset '{other}'"
            ))),
        }
    }
}

/// Build the preset theme `name`.
pub fn get_theme(name: ThemeName) -> Theme {
    match name {
        ThemeName::MinimalWhite => minimal_white(),
        ThemeName::DarkTech => dark_tech(),
        ThemeName::GradientVibrant => gradient_vibrant(),
        ThemeName::CorporateBlue => corporate_blue(),
    }
}

/// Look up a preset by name, falling back to `minimal-white` on a miss.
pub fn theme_or_default(name: &str) -> Theme {
    match name.parse::<ThemeName>() {
        Ok(n) => get_theme(n),
        Err(_) => {
            tracing::debug!(name, "unknown theme preset, using minimal-white");
            minimal_white()
        }
    }
}

fn colors(c: [&str; 10]) -> ColorOverrides {
    let [
        bg,
        bg_card,
        text,
        text_muted,
        accent,
        accent_secondary,
        positive,
        negative,
        warning,
        border,
    ] = c.map(|s| Some(s.to_owned()));
    ColorOverrides {
        bg,
        bg_card,
        text,
        text_muted,
        accent,
        accent_secondary,
        positive,
        negative,
        warning,
        border,
    }
}

fn shadows(card: &str, card_hover: &str, glow: &str, text: &str) -> ShadowOverrides {
    ShadowOverrides {
        card: Some(card.to_owned()),
        card_hover: Some(card_hover.to_owned()),
        glow: Some(glow.to_owned()),
        text: Some(text.to_owned()),
    }
}

pub fn minimal_white() -> Theme {
    create_theme(
        ThemeName::MinimalWhite.as_str(),
        ThemeOverrides {
            colors: colors([
                "#ffffff",
                "rgba(0,0,0,0.03)",
                "#1a1a1a",
                "rgba(0,0,0,0.5)",
                "#2563eb",
                "#ea580c",
                "#059669",
                "#dc2626",
                "#ea580c",
                "rgba(0,0,0,0.06)",
            ]),
            shadows: shadows(
                "0 4px 12px rgba(0,0,0,0.08)",
                "0 8px 24px rgba(0,0,0,0.12)",
                "none",
                "none",
            ),
            ..ThemeOverrides::default()
        },
    )
}

pub fn dark_tech() -> Theme {
    create_theme(
        ThemeName::DarkTech.as_str(),
        ThemeOverrides {
            colors: colors([
                "#0a0a0f",
                "rgba(255,255,255,0.05)",
                "#ffffff",
                "rgba(255,255,255,0.6)",
                "#00d4ff",
                "#a855f7",
                "#22c55e",
                "#ef4444",
                "#fbbf24",
                "rgba(255,255,255,0.1)",
            ]),
            shadows: shadows(
                "0 4px 20px rgba(0,0,0,0.3)",
                "0 0 30px rgba(0,212,255,0.2)",
                "0 0 30px rgba(0,212,255,0.3)",
                "0 0 10px rgba(0,212,255,0.5)",
            ),
            ..ThemeOverrides::default()
        },
    )
}

pub fn gradient_vibrant() -> Theme {
    create_theme(
        ThemeName::GradientVibrant.as_str(),
        ThemeOverrides {
            colors: colors([
                crate::theme::tokens::gradients::PURPLE_BLUE,
                "rgba(255,255,255,0.9)",
                "#ffffff",
                "rgba(255,255,255,0.8)",
                "#ffd700",
                "#ffffff",
                "#22c55e",
                "#ef4444",
                "#fbbf24",
                "rgba(255,255,255,0.3)",
            ]),
            shadows: shadows(
                "0 8px 32px rgba(0,0,0,0.2)",
                "0 12px 48px rgba(0,0,0,0.25)",
                "0 0 40px rgba(255,255,255,0.2)",
                "0 2px 10px rgba(0,0,0,0.3)",
            ),
            ..ThemeOverrides::default()
        },
    )
}

pub fn corporate_blue() -> Theme {
    create_theme(
        ThemeName::CorporateBlue.as_str(),
        ThemeOverrides {
            colors: colors([
                "#f8fafc",
                "#ffffff",
                "#0f172a",
                "#64748b",
                "#1e40af",
                "#0ea5e9",
                "#059669",
                "#dc2626",
                "#d97706",
                "#e2e8f0",
            ]),
            shadows: shadows(
                "0 1px 3px rgba(0,0,0,0.1), 0 1px 2px rgba(0,0,0,0.06)",
                "0 4px 12px rgba(0,0,0,0.1)",
                "none",
                "none",
            ),
            radii: RadiiOverrides {
                card: Some(16.0),
                button: Some(12.0),
                badge: Some(9999.0),
            },
            ..ThemeOverrides::default()
        },
    )
}

#[cfg(test)]
#[path = "../../tests/unit/theme/presets.rs"]
mod tests;
