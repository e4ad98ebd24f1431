use super::*;

#[test]
fn semantic_colors_alias_palette() {
    assert_eq!(colors::ACCENT, palette::BLUE_600);
    assert_eq!(colors::POSITIVE, "#059669");
    assert_eq!(DEFAULT.bg, "#ffffff");
    assert_eq!(DARK.accent, "#00d4ff");
}

#[test]
fn text_styles_follow_scale() {
    assert_eq!(text_styles::HERO.font_size, 100.0);
    assert_eq!(text_styles::HERO.font_weight, 800.0);
    assert_eq!(text_styles::DATA_HERO.line_height, 1.0);
    assert_eq!(text_styles::CODE.font_family, Some(font_family::MONO));
    assert_eq!(text_styles::BODY.font_family, None);
}

#[test]
fn content_widths_are_ordered() {
    assert!(content_width::NARROW < content_width::MIN);
    assert!(content_width::MIN < content_width::MAX);
    assert!(content_width::MAX <= content_width::FULL);
}

#[test]
fn gradient_presets_resolve_by_either_case() {
    assert_eq!(gradients::by_name("purple_blue"), Some(gradients::PURPLE_BLUE));
    assert_eq!(gradients::by_name("blueCyan"), Some(gradients::BLUE_CYAN));
    assert_eq!(gradients::by_name("linear-gradient(red, blue)"), None);
}
