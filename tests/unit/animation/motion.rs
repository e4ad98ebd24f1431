use super::*;

#[test]
fn slide_starts_at_offset_and_settles_at_zero() {
    assert_eq!(
        slide_offset(Direction::Left, 100.0, 0.0),
        Vec2::new(-100.0, 0.0)
    );
    assert_eq!(slide_offset(Direction::Down, 40.0, 0.0), Vec2::new(0.0, 40.0));
    assert_eq!(slide_offset(Direction::Right, 100.0, 1.0), Vec2::ZERO);
    assert_eq!(
        slide_offset(Direction::Up, 100.0, 0.5),
        Vec2::new(0.0, -50.0)
    );
}

#[test]
fn scale_pop_extrapolates_with_overshoot() {
    assert_eq!(scale_pop(0.0, 1.0, 0.0), 0.0);
    assert_eq!(scale_pop(0.5, 1.0, 1.0), 1.0);
    assert!(scale_pop(0.0, 1.0, 1.1) > 1.0);
}

#[test]
fn reveal_insets_follow_direction() {
    assert_eq!(
        reveal_inset(RevealDirection::Left, 0.25),
        Inset {
            right: 75.0,
            ..Inset::NONE
        }
    );
    assert_eq!(
        reveal_inset(RevealDirection::Down, 0.0),
        Inset {
            bottom: 100.0,
            ..Inset::NONE
        }
    );
    let center = reveal_inset(RevealDirection::Center, 0.5);
    assert_eq!(center.top, 25.0);
    assert_eq!(center.left, 25.0);
    assert_eq!(reveal_inset(RevealDirection::Right, 1.0), Inset::NONE);
}

#[test]
fn reveal_clamps_overshoot() {
    assert_eq!(reveal_inset(RevealDirection::Up, 1.2), Inset::NONE);
}

#[test]
fn pulse_is_exactly_periodic() {
    for cycle in [1, 7, 60, 90] {
        for f in 0..200 {
            let a = pulse(FrameIndex(f), 0.2, 0.5, cycle);
            let b = pulse(FrameIndex(f + cycle), 0.2, 0.5, cycle);
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }
}

#[test]
fn pulse_stays_within_bounds() {
    for f in 0..120 {
        let v = pulse(FrameIndex(f), 0.2, 0.5, 60);
        assert!((0.2 - 1e-12..=0.5 + 1e-12).contains(&v));
    }
}

#[test]
fn loop_wave_starts_at_midpoint() {
    assert_eq!(loop_wave(FrameIndex(0), 60), 0.5);
    assert!((loop_wave(FrameIndex(15), 60) - 1.0).abs() < 1e-12);
    assert_eq!(loop_wave(FrameIndex(9), 0), 0.5);
}

#[test]
fn pulse_struct_validates_and_matches_free_function() {
    assert!(Pulse::new(0.0, 1.0, 0).is_err());
    let p = Pulse::new(0.2, 0.5, 60).unwrap();
    for f in [0, 13, 45, 61] {
        let a = p.sample(FrameIndex(f));
        let b = pulse(FrameIndex(f), 0.2, 0.5, 60);
        assert!((a - b).abs() < 1e-12);
    }
}

#[test]
fn wrap_phase_restarts_every_cycle() {
    assert_eq!(wrap_phase(FrameIndex(0), 150), 0.0);
    assert_eq!(wrap_phase(FrameIndex(75), 150), 0.5);
    assert_eq!(wrap_phase(FrameIndex(150), 150), 0.0);
    assert_eq!(wrap_phase(FrameIndex(225), 150), 0.5);
    assert_eq!(wrap_phase(FrameIndex(7), 0), 0.0);
}
