#![allow(dead_code)]
//! Declarative page wiring.
//!
//! A `PageManifest` describes which targets get which effect, so a host can
//! keep the wiring in data instead of an init sequence:
//!
//! ```json
//! {
//!   "reveals": ["card-1", "card-2"],
//!   "counter_groups": [{
//!     "section": "hero",
//!     "items": [
//!       { "target": "stat-clients",  "value": 10000 },
//!       { "target": "stat-products", "value": 200, "suffix": "+" }
//!     ]
//!   }],
//!   "progress_bars": [{ "target": "skill-rust", "percent": "75" }]
//! }
//! ```
//!
//! Omitted delays/durations fall back to the engine config; progress
//! percents are raw attribute text and default to 0 when malformed.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::watch::TargetHandle;

/// Errors produced while loading a page manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest parse error: {0}")]
    Parse(String),
    #[error("empty target handle in {0}")]
    EmptyTarget(&'static str),
    #[error("duplicate watched target '{0}'")]
    DuplicateTarget(String),
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PageManifest {
    #[serde(default)]
    pub reveals: Vec<TargetHandle>,
    #[serde(default)]
    pub counter_groups: Vec<CounterGroup>,
    #[serde(default)]
    pub progress_bars: Vec<ProgressBar>,
}

/// One watched section whose visibility starts a set of counters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CounterGroup {
    pub section: TargetHandle,
    /// Pause before the counters start; engine config default when omitted.
    #[serde(default)]
    pub delay_ms: Option<f64>,
    pub items: Vec<CounterItem>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CounterItem {
    pub target: TargetHandle,
    pub value: u32,
    #[serde(default)]
    pub duration_ms: Option<f64>,
    #[serde(default)]
    pub suffix: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProgressBar {
    pub target: TargetHandle,
    /// Raw attribute text as authored in markup ("75"); absent or malformed
    /// values fill to 0.
    #[serde(default)]
    pub percent: Option<String>,
}

impl PageManifest {
    /// Basic invariants: no empty handles, no target watched twice.
    /// Counter item targets are outputs, not watches, and may repeat.
    pub fn validate(&self) -> Result<(), ManifestError> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut check = |section: &'static str, handle: &str| -> Result<(), ManifestError> {
            if handle.is_empty() {
                return Err(ManifestError::EmptyTarget(section));
            }
            if !seen.insert(handle.to_string()) {
                return Err(ManifestError::DuplicateTarget(handle.to_string()));
            }
            Ok(())
        };
        for r in &self.reveals {
            check("reveals", r)?;
        }
        for g in &self.counter_groups {
            check("counter_groups", &g.section)?;
            for it in &g.items {
                if it.target.is_empty() {
                    return Err(ManifestError::EmptyTarget("counter item"));
                }
            }
        }
        for b in &self.progress_bars {
            check("progress_bars", &b.target)?;
        }
        Ok(())
    }
}

/// Parse and validate a page manifest from JSON text.
pub fn parse_page_manifest_json(s: &str) -> Result<PageManifest, ManifestError> {
    let manifest: PageManifest =
        serde_json::from_str(s).map_err(|e| ManifestError::Parse(e.to_string()))?;
    manifest.validate()?;
    Ok(manifest)
}
