#![allow(dead_code)]
//! Core configuration for scrollmotion-core.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Margin applied to the host viewport when measuring visibility, in CSS
/// order (top, right, bottom, left), pixels. Negative values shrink the
/// effective viewport so elements must scroll further in before counting
/// as visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Margin {
    pub const ZERO: Margin = Margin {
        top: 0,
        right: 0,
        bottom: 0,
        left: 0,
    };
}

impl fmt::Display for Margin {
    /// CSS margin shorthand, e.g. "0px 0px -80px 0px".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

/// Configuration for watch thresholds and effect timing.
/// Hosts rarely need to override the defaults; partial overrides keep the
/// rest.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fraction of a reveal element that must be visible before it fades in.
    pub reveal_threshold: f32,
    /// Viewport margin the host applies when measuring reveal visibility.
    pub reveal_root_margin: Margin,
    /// Marker class added to revealed elements; stylesheets own the
    /// resulting transition.
    pub reveal_class: String,

    /// Fraction of a counter section that must be visible before its
    /// counters start.
    pub counter_threshold: f32,
    /// Pause between a counter group's section becoming visible and its
    /// counters starting.
    pub counter_group_delay_ms: f64,
    /// Counter animation length used when a manifest entry gives none.
    pub counter_duration_ms: f64,

    /// Fraction of a progress bar that must be visible before it fills.
    pub progress_threshold: f32,
    /// Pause between a bar becoming visible and its fill being applied.
    pub progress_stagger_ms: f64,

    /// Capacity hint for per-tick outputs.
    pub max_events_per_tick: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reveal_threshold: 0.1,
            reveal_root_margin: Margin {
                top: 0,
                right: 0,
                bottom: -80,
                left: 0,
            },
            reveal_class: "visible".to_string(),
            counter_threshold: 0.3,
            counter_group_delay_ms: 800.0,
            counter_duration_ms: 2000.0,
            progress_threshold: 0.3,
            progress_stagger_ms: 200.0,
            max_events_per_tick: 256,
        }
    }
}
