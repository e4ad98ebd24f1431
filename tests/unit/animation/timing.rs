use super::*;

fn linear(delay: u64, duration: u64) -> Timing {
    Timing::new(delay, duration, Ease::Linear).unwrap()
}

#[test]
fn delayed_linear_scenario() {
    let t = linear(10, 20);
    assert_eq!(t.progress(FrameIndex(0)), 0.0);
    assert_eq!(t.progress(FrameIndex(10)), 0.0);
    assert_eq!(t.progress(FrameIndex(20)), 0.5);
    assert_eq!(t.progress(FrameIndex(30)), 1.0);
    assert_eq!(t.progress(FrameIndex(40)), 1.0);
}

#[test]
fn frames_before_delay_are_zero_and_after_end_are_one() {
    let t = linear(7, 13);
    for f in 0..7 {
        assert_eq!(t.progress(FrameIndex(f)), 0.0);
    }
    for f in t.end_frame()..t.end_frame() + 50 {
        assert_eq!(t.progress(FrameIndex(f)), 1.0);
    }
}

#[test]
fn progress_is_non_decreasing() {
    for ease in [Ease::Linear, Ease::OutCubic, Ease::POP] {
        let t = Timing::new(3, 17, ease).unwrap();
        let mut prev = t.progress(FrameIndex(0));
        for f in 1..40 {
            let cur = t.progress(FrameIndex(f));
            assert!(cur >= prev);
            prev = cur;
        }
    }
}

#[test]
fn evaluation_is_idempotent_in_any_order() {
    let t = Timing::new(5, 25, Ease::POP).unwrap();
    let forward: Vec<f64> = (0..40).map(|f| t.value(FrameIndex(f))).collect();
    let backward: Vec<f64> = (0..40).rev().map(|f| t.value(FrameIndex(f))).collect();
    for (i, v) in forward.iter().enumerate() {
        assert_eq!(v.to_bits(), backward[39 - i].to_bits());
    }
}

#[test]
fn overshoot_value_exceeds_one_while_progress_stays_clamped() {
    let t = Timing::new(0, 20, Ease::POP).unwrap();
    let over = (0..20).any(|f| t.value(FrameIndex(f)) > 1.0);
    assert!(over);
    assert!((0..40).all(|f| (0.0..=1.0).contains(&t.progress(FrameIndex(f)))));
}

#[test]
fn zero_duration_is_rejected_but_sampling_is_a_step() {
    assert!(Timing::new(0, 0, Ease::Linear).is_err());
    let raw = Timing {
        delay: 4,
        duration: 0,
        ease: Ease::Linear,
    };
    assert!(raw.validate().is_err());
    assert_eq!(raw.progress(FrameIndex(3)), 0.0);
    assert_eq!(raw.progress(FrameIndex(4)), 1.0);
}

#[test]
fn delayed_shifts_start() {
    let t = linear(0, 10).delayed(5);
    assert_eq!(t.delay, 5);
    assert_eq!(t.progress(FrameIndex(10)), 0.5);
}

#[test]
fn range_helpers() {
    assert!(!in_range(FrameIndex(9), 10, 20));
    assert!(in_range(FrameIndex(10), 10, 20));
    assert!(!in_range(FrameIndex(20), 10, 20));
    assert_eq!(range_progress(FrameIndex(5), 10, 20), 0.0);
    assert_eq!(range_progress(FrameIndex(15), 10, 20), 0.5);
    assert_eq!(range_progress(FrameIndex(20), 10, 20), 1.0);
}

#[test]
fn video_time_helpers() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(video_progress(FrameIndex(45), 90), 0.5);
    assert_eq!(video_progress(FrameIndex(45), 0), 0.0);
    assert!((current_time_secs(FrameIndex(60), fps) - 2.0).abs() < 1e-12);
    assert_eq!(formatted_time(FrameIndex(0), fps), "0:00");
    assert_eq!(formatted_time(FrameIndex(30 * 75), fps), "1:15");
}

#[test]
fn timing_json_defaults() {
    let t: Timing = serde_json::from_str(r#"{"duration": 25}"#).unwrap();
    assert_eq!(t.delay, 0);
    assert_eq!(t.ease, Ease::OutCubic);
}
