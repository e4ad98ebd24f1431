use super::*;
use crate::{
    animation::chapters::Chapter,
    eval::context::FrameCtx,
    foundation::core::{Canvas, FrameIndex, Fps},
};

fn timeline() -> ChapterTimeline {
    ChapterTimeline::new(vec![
        Chapter::new("intro", "Intro", 0, 60),
        Chapter::new("body", "Deep dive", 60, 120),
        Chapter::new("outro", "Wrap up", 200, 60),
    ])
    .unwrap()
}

/// Scene-local frame deliberately differs from the absolute one.
fn ctx_at(frame: u64) -> RenderCtx<'static> {
    let mut frame_ctx = FrameCtx::new(FrameIndex(frame), Fps::new(30, 1).unwrap(), 300, Canvas::HD);
    frame_ctx.local_frame = FrameIndex(0);
    RenderCtx::new(frame_ctx, None)
}

#[test]
fn segments_follow_the_absolute_frame() {
    let bar = ChapterProgressBar::new(timeline());
    let node = bar.render(&ctx_at(90)).unwrap();
    // three segments plus the overall line
    assert_eq!(node.children.len(), 4);

    let [intro, body, outro, _line] = &node.children[..] else {
        unreachable!()
    };
    assert_eq!(intro.style.keyword("background"), Some("#f3f4f6"));
    assert_eq!(body.style.keyword("background"), Some("#4f6ef7"));
    assert_eq!(outro.style.keyword("background"), Some("#f9fafb"));

    assert_eq!(body.children.len(), 2);
    assert_eq!(body.children[0].style.number("width"), Some(25.0));
    assert_eq!(body.children[1].text.as_deref(), Some("Deep dive"));
    assert_eq!(
        body.children[1].style.number("fontWeight"),
        Some(font_weight::BOLD)
    );
}

#[test]
fn segments_are_weighted_by_duration() {
    let node = ChapterProgressBar::new(timeline())
        .render(&ctx_at(0))
        .unwrap();
    assert_eq!(node.children[0].style.number("flex"), Some(60.0));
    assert_eq!(node.children[1].style.number("flex"), Some(120.0));
}

#[test]
fn gap_frames_have_no_active_segment() {
    let node = ChapterProgressBar::new(timeline())
        .render(&ctx_at(190))
        .unwrap();
    for segment in &node.children[..3] {
        assert_ne!(segment.style.keyword("background"), Some("#4f6ef7"));
        assert_eq!(segment.children.len(), 1);
    }
}

#[test]
fn overall_line_uses_total_frames() {
    let bar = ChapterProgressBar {
        total_frames: Some(400),
        ..ChapterProgressBar::new(timeline())
    };
    let node = bar.render(&ctx_at(100)).unwrap();
    let line = node.children.last().unwrap();
    assert_eq!(line.children[0].style.number("width"), Some(25.0));

    let past_end = ChapterProgressBar::new(timeline())
        .render(&ctx_at(299))
        .unwrap();
    let line = past_end.children.last().unwrap();
    assert_eq!(line.children[0].style.number("width"), Some(100.0));
}

#[test]
fn zero_total_frames_is_rejected() {
    let bar = ChapterProgressBar {
        total_frames: Some(0),
        ..ChapterProgressBar::default()
    };
    assert!(bar.validate().is_err());
}

#[test]
fn dots_stretch_the_current_section() {
    let node = SectionIndicator::new(4, 1, IndicatorVariant::Dots)
        .render(&ctx_at(0))
        .unwrap();
    let dots = &node.children[0].children;
    assert_eq!(dots.len(), 4);
    assert_eq!(dots[1].style.number("width"), Some(30.0));
    assert_eq!(dots[0].style.number("width"), Some(12.0));
}

#[test]
fn numbers_are_zero_padded() {
    let node = SectionIndicator::new(12, 2, IndicatorVariant::Numbers)
        .render(&ctx_at(0))
        .unwrap();
    assert_eq!(node.text_content(), "03/ 12");
}

#[test]
fn progress_variant_handles_empty_total() {
    let node = SectionIndicator::new(0, 0, IndicatorVariant::Progress)
        .render(&ctx_at(0))
        .unwrap();
    assert_eq!(node.children[0].children[0].style.number("width"), Some(0.0));

    let node = SectionIndicator::new(4, 1, IndicatorVariant::Progress)
        .render(&ctx_at(0))
        .unwrap();
    assert_eq!(node.children[0].children[0].style.number("width"), Some(50.0));
}
