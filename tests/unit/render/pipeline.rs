use super::*;
use crate::{
    components::{Counter, FadeIn, PulsingGlow, Title},
    composition::model::Scene,
    foundation::core::{Canvas, Fps, FrameSpan},
};

fn comp() -> Composition {
    Composition {
        fps: Fps::new(30, 1).unwrap(),
        canvas: Canvas::HD,
        duration: 150,
        theme: None,
        background: None,
        scenes: vec![
            Scene {
                id: "title".to_owned(),
                span: FrameSpan {
                    start: 0,
                    duration: 100,
                },
                content: FadeIn::new(vec![Title::new("Stats").into()]).into(),
            },
            Scene {
                id: "count".to_owned(),
                span: FrameSpan {
                    start: 50,
                    duration: 100,
                },
                content: Counter::new(999.0).into(),
            },
        ],
    }
}

fn range(start: u64, end: u64) -> FrameRange {
    FrameRange::new(FrameIndex(start), FrameIndex(end)).unwrap()
}

#[test]
fn sequential_render_returns_every_frame() {
    let (frames, stats) =
        render_frames(&comp(), range(0, 150), &RenderThreading::default()).unwrap();
    assert_eq!(frames.len(), 150);
    assert_eq!(stats.frames_total, 150);
    assert!(stats.frames_distinct < stats.frames_total);
    assert!(stats.frames_distinct > 1);
}

#[test]
fn parallel_matches_sequential() {
    let c = comp();
    let (seq, seq_stats) = render_frames(&c, range(10, 140), &RenderThreading::default()).unwrap();
    let threading = RenderThreading {
        parallel: true,
        chunk_size: 16,
        threads: Some(3),
    };
    let (par, par_stats) = render_frames(&c, range(10, 140), &threading).unwrap();
    assert_eq!(seq, par);
    assert_eq!(seq_stats, par_stats);
}

#[test]
fn zero_chunk_size_still_progresses() {
    let threading = RenderThreading {
        chunk_size: 0,
        ..RenderThreading::default()
    };
    let (frames, _) = render_frames(&comp(), range(0, 5), &threading).unwrap();
    assert_eq!(frames.len(), 5);
}

#[test]
fn static_frames_collapse_to_one_fingerprint() {
    let mut c = comp();
    c.scenes.truncate(1);
    // FadeIn finishes at frame 25; the rest of the scene is static.
    let (_, stats) = render_frames(&c, range(30, 100), &RenderThreading::default()).unwrap();
    assert_eq!(stats.frames_distinct, 1);
}

#[test]
fn bad_ranges_and_thread_counts_are_rejected() {
    let c = comp();
    let threading = RenderThreading::default();
    assert!(render_frames(&c, range(5, 5), &threading).is_err());
    assert!(render_frames(&c, range(100, 151), &threading).is_err());

    let zero_threads = RenderThreading {
        parallel: true,
        threads: Some(0),
        ..RenderThreading::default()
    };
    assert!(render_frames(&c, range(0, 10), &zero_threads).is_err());
}

#[test]
fn looping_glow_repeats_exactly() {
    let mut c = comp();
    c.scenes = vec![Scene {
        id: "glow".to_owned(),
        span: FrameSpan {
            start: 0,
            duration: 150,
        },
        content: PulsingGlow::default().into(),
    }];
    let (frames, stats) = render_frames(&c, range(0, 120), &RenderThreading::default()).unwrap();
    assert_eq!(frames[5], frames[65]);
    assert!(stats.frames_distinct <= 60);
}
