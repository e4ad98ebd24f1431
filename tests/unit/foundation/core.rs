use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.len_frames(), 3);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn span_rejects_zero_duration() {
    assert!(FrameSpan::new(10, 0).is_err());
    assert!(FrameSpan::new(u64::MAX, 2).is_err());
}

#[test]
fn span_end_and_contains() {
    let s = FrameSpan::new(10, 20).unwrap();
    assert_eq!(s.end(), 30);
    assert!(!s.contains(9));
    assert!(s.contains(10));
    assert!(s.contains(29));
    assert!(!s.contains(30));
    assert_eq!(s.to_range().len_frames(), 20);
}

#[test]
fn fps_converts_frames_to_secs() {
    let fps = Fps::new(4, 1).unwrap();
    assert_eq!(fps.frame_duration_secs(), 0.25);
    assert_eq!(fps.frames_to_secs(90), 22.5);
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}
