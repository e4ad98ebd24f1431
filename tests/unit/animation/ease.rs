use super::*;

const ALL: [Ease; 10] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InBack { overshoot: 1.5 },
    Ease::OutBack { overshoot: 1.5 },
    Ease::OutElastic { bounciness: 1.0 },
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?} at 1");
    }
}

#[test]
fn input_is_clamped() {
    for ease in ALL {
        assert_eq!(ease.apply(-4.0), ease.apply(0.0));
        assert_eq!(ease.apply(7.0), ease.apply(1.0));
    }
}

#[test]
fn monotonic_spot_check_for_plain_curves() {
    for ease in ALL.into_iter().filter(|e| !e.overshoots()) {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn out_back_overshoots_past_one() {
    let peak = (1..100)
        .map(|i| Ease::POP.apply(f64::from(i) / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
}

#[test]
fn in_back_dips_below_zero() {
    assert!(Ease::InBack { overshoot: 1.70158 }.apply(0.2) < 0.0);
}

#[test]
fn out_cubic_is_default() {
    assert_eq!(Ease::default(), Ease::OutCubic);
    assert_eq!(Ease::OutCubic.apply(0.5), 0.875);
}

#[test]
fn serde_accepts_unit_and_struct_variants() {
    let linear: Ease = serde_json::from_str("\"Linear\"").unwrap();
    assert_eq!(linear, Ease::Linear);
    let back: Ease = serde_json::from_str(r#"{"OutBack":{"overshoot":2.0}}"#).unwrap();
    assert_eq!(back, Ease::OutBack { overshoot: 2.0 });
}
