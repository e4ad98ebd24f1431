use super::*;

#[test]
fn every_preset_round_trips_its_name() {
    for name in ThemeName::ALL {
        let theme = get_theme(name);
        assert_eq!(theme.name, name.as_str());
        assert_eq!(name.as_str().parse::<ThemeName>().unwrap(), name);
    }
}

#[test]
fn camel_case_names_are_accepted() {
    assert_eq!("darkTech".parse::<ThemeName>().unwrap(), ThemeName::DarkTech);
    assert!("neon".parse::<ThemeName>().is_err());
}

#[test]
fn unknown_names_fall_back_without_error() {
    assert_eq!(theme_or_default("does-not-exist"), minimal_white());
    assert_eq!(theme_or_default("dark-tech").colors.accent, "#00d4ff");
}

#[test]
fn preset_values() {
    let dark = dark_tech();
    assert_eq!(dark.colors.bg, "#0a0a0f");
    assert_eq!(dark.colors.accent_secondary.as_deref(), Some("#a855f7"));
    assert_eq!(dark.radii.card, 24.0);

    let corp = corporate_blue();
    assert_eq!(corp.radii.card, 16.0);
    assert_eq!(corp.radii.button, 12.0);

    let grad = gradient_vibrant();
    assert!(grad.colors.bg.starts_with("linear-gradient"));
    assert_eq!(grad.shadows.text.as_deref(), Some("0 2px 10px rgba(0,0,0,0.3)"));
}

#[test]
fn serde_uses_kebab_case() {
    let n: ThemeName = serde_json::from_str("\"gradient-vibrant\"").unwrap();
    assert_eq!(n, ThemeName::GradientVibrant);
}
