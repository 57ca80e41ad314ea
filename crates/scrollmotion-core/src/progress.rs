#![allow(dead_code)]
//! Progress bar fill specs.
//!
//! The fill width is applied as a single change once the bar's watch has
//! fired and the stagger delay has elapsed; any visual smoothing is the
//! host stylesheet's transition, not this crate's.

use serde::{Deserialize, Serialize};

/// Immutable description of one staggered fill.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProgressSpec {
    /// Target fill, percent of the bar's track.
    pub percent: f32,
    /// Pause between visibility crossing and the fill being applied.
    pub stagger_ms: f64,
}

/// Parse a markup-authored percent attribute. Absent or malformed values
/// fall back to 0 and are never an error.
pub fn parse_percent(raw: Option<&str>) -> f32 {
    let Some(raw) = raw else {
        return 0.0;
    };
    match raw.trim().parse::<f32>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            log::debug!("malformed fill percent {raw:?}, defaulting to 0");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integers() {
        assert_eq!(parse_percent(Some("75")), 75.0);
        assert_eq!(parse_percent(Some(" 40 ")), 40.0);
    }

    #[test]
    fn absent_or_malformed_defaults_to_zero() {
        assert_eq!(parse_percent(None), 0.0);
        assert_eq!(parse_percent(Some("")), 0.0);
        assert_eq!(parse_percent(Some("wide")), 0.0);
        assert_eq!(parse_percent(Some("NaN")), 0.0);
    }
}
