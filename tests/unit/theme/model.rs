use super::*;

#[test]
fn default_theme_uses_global_tokens() {
    let t = Theme::default();
    assert_eq!(t.name, "default");
    assert_eq!(t.colors.accent, "#2563eb");
    assert_eq!(t.colors.border.as_deref(), Some("rgba(0,0,0,0.06)"));
    assert_eq!(t.spacing.subtitle_margin, 100.0);
    assert_eq!(t.radii.badge, 9999.0);
    assert_eq!(t.typography.font_size.data_large, 120.0);
}

#[test]
fn overrides_merge_one_level_deep() {
    let t = create_theme(
        "brand",
        ThemeOverrides {
            colors: ColorOverrides {
                accent: Some("#ff0066".to_owned()),
                ..ColorOverrides::default()
            },
            radii: RadiiOverrides {
                card: Some(8.0),
                ..RadiiOverrides::default()
            },
            ..ThemeOverrides::default()
        },
    );
    assert_eq!(t.name, "brand");
    assert_eq!(t.colors.accent, "#ff0066");
    assert_eq!(t.colors.text, "#1a1a1a");
    assert_eq!(t.radii.card, 8.0);
    assert_eq!(t.radii.button, 16.0);
}

#[test]
fn overrides_deserialize_from_partial_json() {
    let o: ThemeOverrides =
        serde_json::from_str(r##"{"colors":{"bg":"#000"},"spacing":{"page":64}}"##).unwrap();
    let t = create_theme("x", o);
    assert_eq!(t.colors.bg, "#000");
    assert_eq!(t.spacing.page, 64.0);
    assert_eq!(t.spacing.section, 50.0);
}

#[test]
fn css_variables_are_ordered_and_suffixed() {
    let vars = Theme::default().css_variables();
    assert_eq!(vars[0], ("--color-bg", "#ffffff".to_owned()));
    assert_eq!(vars.len(), 13);
    let page = vars.iter().find(|(k, _)| *k == "--spacing-page").unwrap();
    assert_eq!(page.1, "40px");
    let radius = vars.iter().find(|(k, _)| *k == "--radius-card").unwrap();
    assert_eq!(radius.1, "24px");
}
