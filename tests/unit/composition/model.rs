use super::*;
use crate::components::{Sequence, Title};

fn scene(id: &str, start: u64, duration: u64) -> Scene {
    Scene {
        id: id.to_owned(),
        span: FrameSpan { start, duration },
        content: Title::new(id).into(),
    }
}

fn comp(scenes: Vec<Scene>) -> Composition {
    Composition {
        fps: Fps::new(30, 1).unwrap(),
        canvas: Canvas::HD,
        duration: 120,
        theme: None,
        background: None,
        scenes,
    }
}

#[test]
fn valid_composition_passes() {
    assert!(comp(vec![scene("a", 0, 60), scene("b", 60, 60)]).validate().is_ok());
}

#[test]
fn scenes_must_fit_the_duration() {
    let err = comp(vec![scene("a", 100, 30)]).validate().unwrap_err();
    assert!(err.to_string().contains("exceeds"), "{err}");
}

#[test]
fn scene_ids_are_unique_and_non_empty() {
    assert!(comp(vec![scene("a", 0, 10), scene("a", 10, 10)]).validate().is_err());
    assert!(comp(vec![scene(" ", 0, 10)]).validate().is_err());
}

#[test]
fn zero_length_scene_is_rejected() {
    assert!(comp(vec![scene("a", 0, 0)]).validate().is_err());
}

#[test]
fn nested_content_is_validated() {
    let mut s = scene("a", 0, 10);
    s.content = Sequence::new(0, Some(0), Vec::new()).into();
    assert!(comp(vec![s]).validate().is_err());
}

#[test]
fn components_inside_data_display_values_are_validated() {
    let display = |duration: u64| -> Component {
        serde_json::from_str(&format!(
            r#"{{ "type": "data_display", "label": "Users",
                 "value": {{ "type": "counter", "value": 1200, "duration": {duration} }} }}"#
        ))
        .unwrap()
    };

    let mut s = scene("kpi", 0, 60);
    s.content = display(30);
    assert!(comp(vec![s.clone()]).validate().is_ok());

    s.content = display(0);
    let err = comp(vec![s]).validate().unwrap_err();
    assert!(matches!(err, FramecraftError::Animation(_)), "{err}");
}

#[test]
fn zero_canvas_or_duration_is_rejected() {
    let mut c = comp(Vec::new());
    c.canvas = Canvas {
        width: 0,
        height: 1080,
    };
    assert!(c.validate().is_err());

    let mut c = comp(Vec::new());
    c.duration = 0;
    assert!(c.validate().is_err());
}

#[test]
fn theme_spec_accepts_preset_names_and_overrides() {
    let preset: ThemeSpec = serde_json::from_str(r#""dark-tech""#).unwrap();
    assert_eq!(preset.resolve().name, "dark-tech");

    let unknown = ThemeSpec::Preset("no-such-theme".to_owned());
    assert_eq!(unknown.resolve().name, "minimal-white");

    let custom: ThemeSpec = serde_json::from_str(
        r##"{ "name": "brand", "overrides": { "colors": { "accent": "#ff0066" } } }"##,
    )
    .unwrap();
    let theme = custom.resolve();
    assert_eq!(theme.name, "brand");
    assert_eq!(theme.colors.accent, "#ff0066");
}

#[test]
fn json_document_loads_and_validates() {
    let json = r#"{
        "fps": { "num": 30, "den": 1 },
        "canvas": { "width": 1920, "height": 1080 },
        "duration": 90,
        "theme": "corporate-blue",
        "scenes": [
            { "id": "intro", "span": { "start": 0, "duration": 90 },
              "content": { "type": "title", "text": "Quarterly review" } }
        ]
    }"#;
    let c = Composition::from_json_str(json).unwrap();
    assert_eq!(c.scenes.len(), 1);
    assert_eq!(c.resolved_theme().unwrap().name, "corporate-blue");
    assert!(c.scenes[0].span.contains(89));

    let again = Composition::from_json_str(&c.to_json_string_pretty().unwrap()).unwrap();
    assert_eq!(again, c);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = Composition::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, FramecraftError::Serde(_)));

    let invalid = r#"{ "fps": { "num": 30, "den": 1 },
        "canvas": { "width": 1920, "height": 1080 },
        "duration": 0, "scenes": [] }"#;
    let err = Composition::from_reader(invalid.as_bytes()).unwrap_err();
    assert!(matches!(err, FramecraftError::Validation(_)));
}
