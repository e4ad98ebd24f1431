//! Global design tokens.
//!
//! Sizes are in pixels at a 1080p base; hosts that render at 4K scale the whole tree by 2.
//! Components fall back to these values when neither a prop nor the active theme supplies one.

/// Base color palette.
pub mod palette {
    pub const WHITE: &str = "#ffffff";
    pub const BLACK: &str = "#000000";

    pub const GRAY_50: &str = "#f9fafb";
    pub const GRAY_100: &str = "#f3f4f6";
    pub const GRAY_200: &str = "#e5e7eb";
    pub const GRAY_300: &str = "#d1d5db";
    pub const GRAY_400: &str = "#9ca3af";
    pub const GRAY_500: &str = "#6b7280";
    pub const GRAY_600: &str = "#4b5563";
    pub const GRAY_700: &str = "#374151";
    pub const GRAY_800: &str = "#1f2937";
    pub const GRAY_900: &str = "#111827";

    pub const BLUE_50: &str = "#eff6ff";
    pub const BLUE_100: &str = "#dbeafe";
    pub const BLUE_200: &str = "#bfdbfe";
    pub const BLUE_300: &str = "#93c5fd";
    pub const BLUE_400: &str = "#60a5fa";
    pub const BLUE_500: &str = "#3b82f6";
    pub const BLUE_600: &str = "#2563eb";
    pub const BLUE_700: &str = "#1d4ed8";
    pub const BLUE_800: &str = "#1e40af";
    pub const BLUE_900: &str = "#1e3a8a";

    pub const GREEN_50: &str = "#ecfdf5";
    pub const GREEN_100: &str = "#d1fae5";
    pub const GREEN_200: &str = "#a7f3d0";
    pub const GREEN_300: &str = "#6ee7b7";
    pub const GREEN_400: &str = "#34d399";
    pub const GREEN_500: &str = "#10b981";
    pub const GREEN_600: &str = "#059669";
    pub const GREEN_700: &str = "#047857";
    pub const GREEN_800: &str = "#065f46";
    pub const GREEN_900: &str = "#064e3b";

    pub const ORANGE_50: &str = "#fff7ed";
    pub const ORANGE_100: &str = "#ffedd5";
    pub const ORANGE_200: &str = "#fed7aa";
    pub const ORANGE_300: &str = "#fdba74";
    pub const ORANGE_400: &str = "#fb923c";
    pub const ORANGE_500: &str = "#f97316";
    pub const ORANGE_600: &str = "#ea580c";
    pub const ORANGE_700: &str = "#c2410c";
    pub const ORANGE_800: &str = "#9a3412";
    pub const ORANGE_900: &str = "#7c2d12";

    pub const RED_50: &str = "#fef2f2";
    pub const RED_100: &str = "#fee2e2";
    pub const RED_200: &str = "#fecaca";
    pub const RED_300: &str = "#fca5a5";
    pub const RED_400: &str = "#f87171";
    pub const RED_500: &str = "#ef4444";
    pub const RED_600: &str = "#dc2626";
    pub const RED_700: &str = "#b91c1c";
    pub const RED_800: &str = "#991b1b";
    pub const RED_900: &str = "#7f1d1d";

    pub const PURPLE_50: &str = "#faf5ff";
    pub const PURPLE_100: &str = "#f3e8ff";
    pub const PURPLE_200: &str = "#e9d5ff";
    pub const PURPLE_300: &str = "#d8b4fe";
    pub const PURPLE_400: &str = "#c084fc";
    pub const PURPLE_500: &str = "#a855f7";
    pub const PURPLE_600: &str = "#9333ea";
    pub const PURPLE_700: &str = "#7c3aed";
    pub const PURPLE_800: &str = "#6b21a8";
    pub const PURPLE_900: &str = "#581c87";

    pub const CYAN_50: &str = "#ecfeff";
    pub const CYAN_100: &str = "#cffafe";
    pub const CYAN_200: &str = "#a5f3fc";
    pub const CYAN_300: &str = "#67e8f9";
    pub const CYAN_400: &str = "#22d3ee";
    pub const CYAN_500: &str = "#06b6d4";
    pub const CYAN_600: &str = "#0891b2";
    pub const NEON_CYAN: &str = "#00d4ff";

    pub const GOLD: &str = "#ffd700";
    pub const AMBER_400: &str = "#fbbf24";
    pub const AMBER_500: &str = "#f59e0b";
}

/// Semantic colors used by components.
pub mod colors {
    use super::palette;

    pub const BG_LIGHT: &str = palette::WHITE;
    pub const BG_DARK: &str = "#0a0a0f";
    pub const BG_MUTED: &str = palette::GRAY_50;
    pub const BG_CARD: &str = "rgba(0,0,0,0.03)";
    pub const BG_CARD_DARK: &str = "rgba(255,255,255,0.05)";

    pub const TEXT_PRIMARY: &str = "#1a1a1a";
    pub const TEXT_SECONDARY: &str = "rgba(0,0,0,0.5)";
    pub const TEXT_PRIMARY_DARK: &str = palette::WHITE;
    pub const TEXT_SECONDARY_DARK: &str = "rgba(255,255,255,0.6)";

    pub const ACCENT: &str = palette::BLUE_600;
    pub const ACCENT_HOVER: &str = palette::BLUE_700;
    pub const ACCENT_LIGHT: &str = palette::BLUE_100;

    pub const POSITIVE: &str = palette::GREEN_600;
    pub const NEGATIVE: &str = palette::RED_600;
    pub const WARNING: &str = palette::ORANGE_600;
    pub const INFO: &str = palette::BLUE_600;

    pub const NEON_BLUE: &str = palette::NEON_CYAN;
    pub const NEON_PURPLE: &str = palette::PURPLE_500;
    pub const GOLD: &str = palette::GOLD;

    pub const BORDER: &str = "rgba(0,0,0,0.06)";
}

/// CSS gradient presets.
pub mod gradients {
    pub const PURPLE_BLUE: &str = "linear-gradient(135deg, #667eea 0%, #764ba2 100%)";
    pub const PINK_RED: &str = "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)";
    pub const BLUE_CYAN: &str = "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)";
    pub const ORANGE_YELLOW: &str = "linear-gradient(135deg, #f97316 0%, #fbbf24 100%)";
    pub const GREEN_TEAL: &str = "linear-gradient(135deg, #10b981 0%, #06b6d4 100%)";
    pub const DARK_PURPLE: &str = "linear-gradient(135deg, #1a1a2e 0%, #16213e 100%)";
    pub const MIDNIGHT: &str = "linear-gradient(135deg, #0f0c29 0%, #302b63 50%, #24243e 100%)";

    /// Preset by name, `snake_case` or `camelCase`.
    pub fn by_name(name: &str) -> Option<&'static str> {
        match name {
            "purple_blue" | "purpleBlue" => Some(PURPLE_BLUE),
            "pink_red" | "pinkRed" => Some(PINK_RED),
            "blue_cyan" | "blueCyan" => Some(BLUE_CYAN),
            "orange_yellow" | "orangeYellow" => Some(ORANGE_YELLOW),
            "green_teal" | "greenTeal" => Some(GREEN_TEAL),
            "dark_purple" | "darkPurple" => Some(DARK_PURPLE),
            "midnight" => Some(MIDNIGHT),
            _ => None,
        }
    }
}

pub mod font_family {
    pub const SANS: &str =
        r#"-apple-system, "SF Pro Display", "Noto Sans SC", "Helvetica Neue", sans-serif"#;
    pub const MONO: &str = r#""SF Mono", "Fira Code", "JetBrains Mono", Consolas, monospace"#;
    pub const SERIF: &str = r#"Georgia, "Times New Roman", serif"#;
}

pub mod font_size {
    pub const HERO: f64 = 100.0;
    pub const DISPLAY: f64 = 88.0;
    pub const TITLE: f64 = 80.0;
    pub const SUBTITLE: f64 = 56.0;
    pub const HEADING: f64 = 48.0;
    pub const BODY: f64 = 40.0;
    pub const BODY_SMALL: f64 = 36.0;
    pub const CAPTION: f64 = 32.0;
    pub const SMALL: f64 = 28.0;
    pub const MICRO: f64 = 24.0;
    pub const DATA_HERO: f64 = 140.0;
    pub const DATA_LARGE: f64 = 120.0;
    pub const DATA: f64 = 72.0;
    pub const DATA_SMALL: f64 = 56.0;
}

pub mod font_weight {
    pub const THIN: f64 = 100.0;
    pub const LIGHT: f64 = 300.0;
    pub const NORMAL: f64 = 400.0;
    pub const MEDIUM: f64 = 500.0;
    pub const SEMIBOLD: f64 = 600.0;
    pub const BOLD: f64 = 700.0;
    pub const EXTRABOLD: f64 = 800.0;
    pub const BLACK: f64 = 900.0;
}

pub mod line_height {
    pub const NONE: f64 = 1.0;
    pub const TIGHT: f64 = 1.1;
    pub const SNUG: f64 = 1.25;
    pub const NORMAL: f64 = 1.5;
    pub const RELAXED: f64 = 1.625;
    pub const LOOSE: f64 = 2.0;
}

/// Letter spacing in pixels.
pub mod letter_spacing {
    pub const TIGHTER: f64 = -3.0;
    pub const TIGHT: f64 = -2.0;
    pub const NORMAL: f64 = 0.0;
    pub const WIDE: f64 = 1.0;
    pub const WIDER: f64 = 2.0;
    pub const WIDEST: f64 = 4.0;
}

/// Combined size, weight, line height and letter spacing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: f64,
    pub font_weight: f64,
    pub line_height: f64,
    pub letter_spacing: f64,
    /// Overrides the theme font stack when set.
    pub font_family: Option<&'static str>,
}

impl TextStyle {
    const fn new(font_size: f64, font_weight: f64, line_height: f64, letter_spacing: f64) -> Self {
        Self {
            font_size,
            font_weight,
            line_height,
            letter_spacing,
            font_family: None,
        }
    }
}

/// Typography presets.
pub mod text_styles {
    use super::{TextStyle, font_family, font_size, font_weight, letter_spacing, line_height};

    pub const HERO: TextStyle = TextStyle::new(
        font_size::HERO,
        font_weight::EXTRABOLD,
        line_height::TIGHT,
        letter_spacing::TIGHT,
    );
    pub const DISPLAY: TextStyle = TextStyle::new(
        font_size::DISPLAY,
        font_weight::BOLD,
        line_height::TIGHT,
        letter_spacing::TIGHT,
    );
    pub const TITLE: TextStyle = TextStyle::new(
        font_size::TITLE,
        font_weight::EXTRABOLD,
        line_height::TIGHT,
        letter_spacing::TIGHT,
    );
    pub const SUBTITLE: TextStyle = TextStyle::new(
        font_size::SUBTITLE,
        font_weight::SEMIBOLD,
        line_height::SNUG,
        letter_spacing::NORMAL,
    );
    pub const HEADING: TextStyle = TextStyle::new(
        font_size::HEADING,
        font_weight::BOLD,
        line_height::SNUG,
        letter_spacing::NORMAL,
    );
    pub const BODY: TextStyle = TextStyle::new(
        font_size::BODY,
        font_weight::MEDIUM,
        line_height::NORMAL,
        letter_spacing::NORMAL,
    );
    pub const BODY_SMALL: TextStyle = TextStyle::new(
        font_size::BODY_SMALL,
        font_weight::NORMAL,
        line_height::NORMAL,
        letter_spacing::NORMAL,
    );
    pub const CAPTION: TextStyle = TextStyle::new(
        font_size::CAPTION,
        font_weight::MEDIUM,
        line_height::NORMAL,
        letter_spacing::NORMAL,
    );
    pub const DATA_HERO: TextStyle = TextStyle::new(
        font_size::DATA_HERO,
        font_weight::EXTRABOLD,
        line_height::NONE,
        letter_spacing::TIGHT,
    );
    pub const DATA_LARGE: TextStyle = TextStyle::new(
        font_size::DATA_LARGE,
        font_weight::EXTRABOLD,
        line_height::NONE,
        letter_spacing::TIGHT,
    );
    pub const DATA: TextStyle = TextStyle::new(
        font_size::DATA,
        font_weight::BOLD,
        line_height::NONE,
        letter_spacing::NORMAL,
    );
    pub const CODE: TextStyle = TextStyle {
        font_family: Some(font_family::MONO),
        ..TextStyle::new(
            font_size::BODY,
            font_weight::NORMAL,
            line_height::RELAXED,
            letter_spacing::NORMAL,
        )
    };
}

/// Semantic spacing in pixels.
pub mod spacing {
    pub const PAGE: f64 = 40.0;
    pub const PAGE_COMPACT: f64 = 30.0;
    pub const PAGE_WIDE: f64 = 50.0;
    pub const SECTION: f64 = 50.0;
    pub const SECTION_COMPACT: f64 = 30.0;
    pub const ELEMENT: f64 = 30.0;
    pub const ELEMENT_COMPACT: f64 = 20.0;
    pub const ELEMENT_WIDE: f64 = 40.0;
    pub const TIGHT: f64 = 16.0;
    pub const TIGHTER: f64 = 12.0;
    pub const TIGHTEST: f64 = 8.0;
    pub const LIST_GAP: f64 = 24.0;
    pub const CARD_GAP: f64 = 32.0;
    pub const GRID_GAP: f64 = 40.0;
    /// Bottom margin that keeps content clear of burned-in subtitles.
    pub const SUBTITLE_MARGIN: f64 = 100.0;
    pub const ICON_GAP: f64 = 12.0;
}

/// Content widths as fractions of the canvas width.
pub mod content_width {
    pub const MIN: f64 = 0.85;
    pub const MAX: f64 = 0.95;
    pub const NARROW: f64 = 0.7;
    pub const FULL: f64 = 1.0;
}

pub mod fixed_width {
    pub const CARD: f64 = 1000.0;
    pub const CARD_WIDE: f64 = 1400.0;
    pub const CARD_NARROW: f64 = 600.0;
    pub const MODAL: f64 = 800.0;
}

pub mod radii {
    pub const NONE: f64 = 0.0;
    pub const SM: f64 = 4.0;
    pub const BASE: f64 = 8.0;
    pub const MD: f64 = 12.0;
    pub const LG: f64 = 16.0;
    pub const XL: f64 = 20.0;
    pub const XL2: f64 = 24.0;
    pub const XL3: f64 = 32.0;
    pub const XL4: f64 = 40.0;
    /// Pills and circles.
    pub const FULL: f64 = 9999.0;
}

pub mod semantic_radii {
    use super::radii;

    pub const BUTTON: f64 = radii::LG;
    pub const CARD: f64 = radii::XL2;
    pub const BADGE: f64 = radii::FULL;
    pub const INPUT: f64 = radii::MD;
    pub const PROGRESS_BAR: f64 = radii::FULL;
}

pub mod shadows {
    pub const NONE: &str = "none";
    pub const SM: &str = "0 1px 2px rgba(0,0,0,0.05)";
    pub const BASE: &str = "0 1px 3px rgba(0,0,0,0.1), 0 1px 2px rgba(0,0,0,0.06)";
    pub const MD: &str = "0 4px 6px rgba(0,0,0,0.1), 0 2px 4px rgba(0,0,0,0.06)";
    pub const LG: &str = "0 10px 15px rgba(0,0,0,0.1), 0 4px 6px rgba(0,0,0,0.05)";
    pub const XL: &str = "0 20px 25px rgba(0,0,0,0.1), 0 10px 10px rgba(0,0,0,0.04)";
    pub const CARD: &str = "0 4px 12px rgba(0,0,0,0.08)";
    pub const CARD_HOVER: &str = "0 8px 24px rgba(0,0,0,0.12)";
    pub const CARD_ELEVATED: &str = "0 12px 32px rgba(0,0,0,0.15)";
    pub const INNER: &str = "inset 0 2px 4px rgba(0,0,0,0.06)";
}

/// Glow box-shadows for dark backgrounds.
pub mod glows {
    pub const SOFT: &str = "0 0 20px rgba(255,255,255,0.1)";
    pub const SOFT_BLUE: &str = "0 0 20px rgba(59,130,246,0.3)";
    pub const SOFT_CYAN: &str = "0 0 20px rgba(0,212,255,0.3)";
    pub const SOFT_PURPLE: &str = "0 0 20px rgba(168,85,247,0.3)";
    pub const NEON_BLUE: &str = "0 0 30px rgba(0,212,255,0.5), 0 0 60px rgba(0,212,255,0.2)";
    pub const NEON_PURPLE: &str = "0 0 30px rgba(168,85,247,0.5), 0 0 60px rgba(168,85,247,0.2)";
    pub const ACCENT: &str = "0 0 20px rgba(37,99,235,0.4)";
    pub const POSITIVE: &str = "0 0 20px rgba(5,150,105,0.4)";
    pub const NEGATIVE: &str = "0 0 20px rgba(220,38,38,0.4)";
}

pub mod text_shadows {
    pub const SM: &str = "0 1px 2px rgba(0,0,0,0.3)";
    pub const BASE: &str = "0 2px 4px rgba(0,0,0,0.4)";
    pub const LG: &str = "0 4px 8px rgba(0,0,0,0.5)";
    pub const OUTLINE: &str = "0 0 10px rgba(0,0,0,0.8), 0 0 20px rgba(0,0,0,0.6)";
    pub const GLOW: &str = "0 0 10px rgba(255,255,255,0.8), 0 0 20px rgba(255,255,255,0.4)";
    pub const NEON_BLUE: &str = "0 0 10px #00d4ff, 0 0 20px #00d4ff, 0 0 40px #00d4ff";
}

/// Color slots of a global token set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenColors {
    pub bg: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub accent: &'static str,
    pub positive: &'static str,
    pub negative: &'static str,
}

/// Light token set, the last-resort fallback for every component.
pub const DEFAULT: TokenColors = TokenColors {
    bg: colors::BG_LIGHT,
    text: colors::TEXT_PRIMARY,
    text_muted: colors::TEXT_SECONDARY,
    accent: colors::ACCENT,
    positive: colors::POSITIVE,
    negative: colors::NEGATIVE,
};

pub const DARK: TokenColors = TokenColors {
    bg: colors::BG_DARK,
    text: colors::TEXT_PRIMARY_DARK,
    text_muted: colors::TEXT_SECONDARY_DARK,
    accent: colors::NEON_BLUE,
    positive: palette::GREEN_500,
    negative: palette::RED_500,
};

pub const GRADIENT: TokenColors = TokenColors {
    bg: gradients::PURPLE_BLUE,
    text: palette::WHITE,
    text_muted: "rgba(255,255,255,0.8)",
    accent: palette::GOLD,
    positive: palette::GREEN_500,
    negative: palette::RED_500,
};

#[cfg(test)]
#[path = "../../tests/unit/theme/tokens.rs"]
mod tests;
