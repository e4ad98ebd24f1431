use super::*;
use crate::{
    components::{Counter, FadeIn, Span, Title},
    composition::model::{Scene, ThemeSpec},
    foundation::core::{Canvas, Fps, FrameSpan},
    theme::presets::{ThemeName, get_theme},
};

fn scene(id: &str, start: u64, duration: u64, content: crate::components::Component) -> Scene {
    Scene {
        id: id.to_owned(),
        span: FrameSpan { start, duration },
        content,
    }
}

fn comp() -> Composition {
    Composition {
        fps: Fps::new(30, 1).unwrap(),
        canvas: Canvas::HD,
        duration: 120,
        theme: Some(ThemeSpec::Preset("dark-tech".to_owned())),
        background: None,
        scenes: vec![
            scene("intro", 0, 60, Title::new("Intro").into()),
            scene("count", 40, 80, Counter::new(100.0).into()),
        ],
    }
}

#[test]
fn root_is_canvas_sized_with_theme_background() {
    let node = Evaluator::eval_frame(&comp(), FrameIndex(0)).unwrap();
    assert_eq!(node.style.number("width"), Some(1920.0));
    assert_eq!(node.style.number("height"), Some(1080.0));
    assert_eq!(
        node.style.keyword("background"),
        Some(get_theme(ThemeName::DarkTech).colors.bg.as_str())
    );
}

#[test]
fn explicit_background_wins() {
    let mut c = comp();
    c.background = Some("#222".to_owned());
    let node = Evaluator::eval_frame(&c, FrameIndex(0)).unwrap();
    assert_eq!(node.style.keyword("background"), Some("#222"));

    c.theme = None;
    c.background = None;
    let node = Evaluator::eval_frame(&c, FrameIndex(0)).unwrap();
    assert_eq!(node.style.keyword("background"), Some(tokens::DEFAULT.bg));
}

#[test]
fn only_covering_scenes_render_in_order() {
    let c = comp();
    assert_eq!(Evaluator::eval_frame(&c, FrameIndex(10)).unwrap().children.len(), 1);
    let overlap = Evaluator::eval_frame(&c, FrameIndex(50)).unwrap();
    assert_eq!(overlap.children.len(), 2);
    assert_eq!(overlap.children[0].text.as_deref(), Some("Intro"));
    let tail = Evaluator::eval_frame(&c, FrameIndex(60)).unwrap();
    assert_eq!(tail.children.len(), 1);
}

#[test]
fn scenes_see_local_frames() {
    // The counter scene starts at 40; 30 frames later it has finished counting.
    let node = Evaluator::eval_frame(&comp(), FrameIndex(70)).unwrap();
    assert_eq!(node.children[0].text.as_deref(), Some("100"));
    let node = Evaluator::eval_frame(&comp(), FrameIndex(40)).unwrap();
    assert_eq!(node.children[1].text.as_deref(), Some("0"));
}

#[test]
fn out_of_range_frame_is_an_error() {
    let err = Evaluator::eval_frame(&comp(), FrameIndex(120)).unwrap_err();
    assert!(matches!(err, FramecraftError::Evaluation(_)));
}

#[test]
fn invalid_composition_is_rejected_before_rendering() {
    let mut c = comp();
    c.scenes.push(scene(
        "broken",
        0,
        10,
        FadeIn {
            duration: 0,
            ..FadeIn::default()
        }
        .into(),
    ));
    let err = Evaluator::eval_frame(&c, FrameIndex(0)).unwrap_err();
    assert!(!matches!(err, FramecraftError::Evaluation(_)));
}

#[test]
fn evaluation_is_order_independent() {
    let c = comp();
    let forward: Vec<_> = (0..120)
        .map(|f| Evaluator::eval_frame(&c, FrameIndex(f)).unwrap())
        .collect();
    for f in (0..120).rev().step_by(7) {
        assert_eq!(
            Evaluator::eval_frame(&c, FrameIndex(f)).unwrap(),
            forward[f as usize]
        );
    }
}

#[test]
fn empty_frame_still_has_a_root() {
    let mut c = comp();
    c.scenes = vec![scene("late", 100, 20, Span::new("x").into())];
    let node = Evaluator::eval_frame(&c, FrameIndex(0)).unwrap();
    assert!(node.children.is_empty());
}
