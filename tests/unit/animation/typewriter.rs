use super::*;

#[test]
fn hi_at_two_frames_per_char() {
    let tw = TypewriterTiming::new(0, 2.0).unwrap();
    assert_eq!(tw.visible_chars(2, FrameIndex(0)), 0);
    assert_eq!(tw.visible_chars(2, FrameIndex(2)), 1);
    assert_eq!(tw.visible_chars(2, FrameIndex(4)), 2);
    assert_eq!(tw.visible_chars(2, FrameIndex(100)), 2);
    assert_eq!(tw.visible_text("Hi", FrameIndex(2)), "H");
}

#[test]
fn delay_holds_text_hidden() {
    let tw = TypewriterTiming::new(10, 1.0).unwrap();
    assert_eq!(tw.visible_text("hello", FrameIndex(9)), "");
    assert_eq!(tw.visible_text("hello", FrameIndex(13)), "hel");
}

#[test]
fn counts_unicode_scalars() {
    let tw = TypewriterTiming::new(0, 1.0).unwrap();
    assert_eq!(tw.visible_text("héllo", FrameIndex(2)), "hé");
    assert_eq!(tw.visible_text("你好世界", FrameIndex(3)), "你好世");
}

#[test]
fn fractional_speed_reveals_whole_characters_on_time() {
    // 1 / 0.2 is exactly 5 chars; the clamped-fraction form rounds to 4.
    let tw = TypewriterTiming::new(0, 0.2).unwrap();
    assert_eq!(tw.visible_chars(7, FrameIndex(1)), 5);
    assert_eq!(tw.visible_chars(7, FrameIndex(2)), 7);
}

#[test]
fn visible_count_is_monotonic() {
    let tw = TypewriterTiming::new(3, 1.5).unwrap();
    let mut prev = 0;
    for f in 0..60 {
        let v = tw.visible_chars(17, FrameIndex(f));
        assert!(v >= prev);
        assert!(v <= 17);
        prev = v;
    }
}

#[test]
fn empty_text_is_complete() {
    let tw = TypewriterTiming::default();
    let st = tw.state("", FrameIndex(0));
    assert_eq!(st.visible, 0);
    assert!(st.complete);
}

#[test]
fn cursor_blinks_every_fifteen_frames() {
    let tw = TypewriterTiming::default();
    assert!(tw.cursor_on(FrameIndex(0)));
    assert!(tw.cursor_on(FrameIndex(14)));
    assert!(!tw.cursor_on(FrameIndex(15)));
    assert!(tw.cursor_on(FrameIndex(30)));
}

#[test]
fn invalid_speed_or_blink_is_rejected() {
    assert!(TypewriterTiming::new(0, 0.0).is_err());
    assert!(TypewriterTiming::new(0, -1.0).is_err());
    assert!(TypewriterTiming::new(0, f64::NAN).is_err());
    let tw = TypewriterTiming {
        blink_period: 0,
        ..TypewriterTiming::default()
    };
    assert!(tw.validate().is_err());
}
