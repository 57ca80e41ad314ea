#![allow(dead_code)]
//! Counter animation: eased count-up with K-suffix formatting.

use serde::{Deserialize, Serialize};

use crate::ease::{clamp01, ease_out_cubic, lerp};

fn default_duration_ms() -> f64 {
    2000.0
}

/// Immutable description of one counter animation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CounterSpec {
    /// Final value counted up to.
    pub target: u32,
    /// Animation length in milliseconds.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: f64,
    /// Literal suffix appended to sub-1000 displays.
    #[serde(default)]
    pub suffix: String,
}

impl CounterSpec {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            duration_ms: default_duration_ms(),
            suffix: String::new(),
        }
    }

    /// Display text `elapsed_ms` after the animation started, plus whether
    /// this frame is the last. The final frame is computed from the exact
    /// target rather than the eased approximation, so accumulated rounding
    /// from intermediate frames never leaks into the end state.
    pub fn frame_text(&self, elapsed_ms: f64) -> (String, bool) {
        if self.duration_ms <= 0.0 {
            return (self.final_text(), true);
        }
        let progress = clamp01(elapsed_ms / self.duration_ms);
        if progress >= 1.0 {
            return (self.final_text(), true);
        }
        let eased = ease_out_cubic(progress);
        let current = lerp(0.0, self.target as f64, eased).round() as u32;
        (self.running_text(current), false)
    }

    /// Authoritative end-state text.
    pub fn final_text(&self) -> String {
        if self.target >= 1000 {
            format!("{}K+", (self.target as f64 / 1000.0).round() as u32)
        } else {
            format!("{}{}", self.target, self.suffix)
        }
    }

    /// Text for an in-flight value. Thousand-scale counters keep one decimal
    /// of K-precision until the running value itself passes 1000, then
    /// switch to whole-K display.
    fn running_text(&self, current: u32) -> String {
        if self.target >= 1000 {
            if current >= 1000 {
                format!("{:.0}K+", current as f64 / 1000.0)
            } else {
                format!("{:.1}K+", current as f64 / 1000.0)
            }
        } else {
            format!("{}{}", current, self.suffix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_target_counts_with_suffix() {
        let spec = CounterSpec {
            target: 200,
            duration_ms: 1000.0,
            suffix: "+".into(),
        };
        let (start, done) = spec.frame_text(0.0);
        assert_eq!(start, "0+");
        assert!(!done);
        let (end, done) = spec.frame_text(1000.0);
        assert_eq!(end, "200+");
        assert!(done);
    }

    #[test]
    fn thousand_scale_switches_precision_mid_flight() {
        let spec = CounterSpec {
            target: 10_000,
            duration_ms: 2000.0,
            suffix: String::new(),
        };
        // Early frame: running value below 1000 keeps one decimal.
        let (early, _) = spec.frame_text(50.0);
        assert!(early.ends_with("K+"), "got {early}");
        assert!(early.contains('.'), "got {early}");
        // Late frame: running value past 1000 drops the decimal.
        let (late, done) = spec.frame_text(1500.0);
        assert!(!done);
        assert!(late.ends_with("K+"));
        assert!(!late.contains('.'), "got {late}");
    }

    #[test]
    fn zero_duration_snaps_to_final() {
        let spec = CounterSpec {
            target: 1500,
            duration_ms: 0.0,
            suffix: String::new(),
        };
        assert_eq!(spec.frame_text(0.0), ("2K+".to_string(), true));
    }
}
