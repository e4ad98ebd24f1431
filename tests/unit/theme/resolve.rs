use super::*;
use crate::theme::presets::dark_tech;

#[test]
fn explicit_beats_theme_beats_fallback() {
    assert_eq!(resolve(Some(1), Some(2), 3), 1);
    assert_eq!(resolve(None, Some(2), 3), 2);
    assert_eq!(resolve::<i32>(None, None, 3), 3);
}

#[test]
fn resolve_from_reads_active_theme() {
    let theme = dark_tech();
    let accent = resolve_from(None, Some(&theme), |t| Some(t.colors.accent.as_str()), "#000");
    assert_eq!(accent, "#00d4ff");

    let explicit = resolve_from(
        Some("red"),
        Some(&theme),
        |t| Some(t.colors.accent.as_str()),
        "#000",
    );
    assert_eq!(explicit, "red");
}

#[test]
fn resolve_from_falls_back_on_missing_slot_or_theme() {
    let mut theme = dark_tech();
    theme.colors.warning = None;
    let warning = resolve_from(None, Some(&theme), |t| t.colors.warning.as_deref(), "#ea580c");
    assert_eq!(warning, "#ea580c");

    let page = resolve_from(None, None, |t: &Theme| Some(t.spacing.page), 40.0);
    assert_eq!(page, 40.0);
}
