use scrollmotion_core::CounterSpec;

fn spec(target: u32, duration_ms: f64, suffix: &str) -> CounterSpec {
    CounterSpec {
        target,
        duration_ms,
        suffix: suffix.to_string(),
    }
}

/// Parse a displayed counter back into its numeric value, honoring the
/// K-suffix forms ("0.7K+", "9K+") and plain "123<suffix>" displays.
fn displayed_value(text: &str, suffix: &str) -> f64 {
    if let Some(k) = text.strip_suffix("K+") {
        k.parse::<f64>().unwrap() * 1000.0
    } else {
        text.strip_suffix(suffix).unwrap().parse::<f64>().unwrap()
    }
}

/// it should end on round(target/1000) + "K+" for every thousand-scale
/// target, for any duration
#[test]
fn final_text_thousand_scale() {
    for (target, expected) in [
        (1000u32, "1K+"),
        (1499, "1K+"),
        (1500, "2K+"),
        (9999, "10K+"),
        (10_000, "10K+"),
        (250_000, "250K+"),
    ] {
        for duration in [1.0, 500.0, 2000.0, 60_000.0] {
            let s = spec(target, duration, "");
            let (text, done) = s.frame_text(duration);
            assert!(done);
            assert_eq!(text, expected, "target={target} duration={duration}");
            // Well past the end the text stays pinned.
            assert_eq!(s.frame_text(duration * 10.0).0, expected);
        }
    }
}

/// it should end on target + suffix for sub-1000 targets
#[test]
fn final_text_sub_thousand() {
    for (target, suffix, expected) in [
        (5u32, "", "5"),
        (200, "+", "200+"),
        (999, "%", "999%"),
        (0, "", "0"),
    ] {
        let s = spec(target, 2000.0, suffix);
        let (text, done) = s.frame_text(2000.0);
        assert!(done);
        assert_eq!(text, expected);
    }
}

/// it should show a partial value halfway through, strictly below the target
#[test]
fn midpoint_frame_is_partial() {
    let s = spec(10_000, 2000.0, "");
    let (text, done) = s.frame_text(1000.0);
    assert!(!done);
    let value = displayed_value(&text, "");
    assert!(value < 10_000.0, "got {text}");
    assert!(value > 0.0, "got {text}");
}

/// it should never decrease across frames under a monotone clock
#[test]
fn displayed_value_is_monotone() {
    for target in [5u32, 200, 999, 1000, 10_000] {
        let s = spec(target, 2000.0, "");
        let mut last = -1.0f64;
        let mut elapsed = 0.0;
        while elapsed <= 2400.0 {
            let (text, _) = s.frame_text(elapsed);
            let value = displayed_value(&text, "");
            assert!(
                value >= last,
                "target={target} elapsed={elapsed}: {value} < {last}"
            );
            last = value;
            elapsed += 50.0;
        }
    }
}

/// it should keep one K-decimal while the running value is under 1000 and
/// drop it after
#[test]
fn intermediate_precision_quirk() {
    let s = spec(10_000, 2000.0, "");
    // 50ms in: eased value is a few hundred, shown with one decimal.
    let (early, _) = s.frame_text(50.0);
    assert_eq!(early, "0.7K+");
    // 300ms in: eased value is past 1000, shown whole.
    let (later, _) = s.frame_text(300.0);
    assert!(!later.contains('.'), "got {later}");
    assert!(later.ends_with("K+"));
}
