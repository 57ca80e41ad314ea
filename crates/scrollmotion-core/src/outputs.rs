#![allow(dead_code)]
//! Output contracts from the core engine.
//!
//! Outputs carry the display mutations for this tick, keyed by stable string
//! TargetHandle, and a separate list of semantic events. Adapters apply
//! changes to the host document and may transport events to listeners.

use serde::{Deserialize, Serialize};

use crate::watch::TargetHandle;

/// One mutation the host must apply to a target this tick.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Change {
    pub target: TargetHandle,
    pub op: WriteOp,
}

/// The display mutations this core produces.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum WriteOp {
    /// Replace the element's text content.
    SetText(String),
    /// Set a bar's fill width, percent of its track.
    SetFillPercent(f32),
    /// Add a marker class; stylesheets own the resulting transition.
    AddClass(String),
}

/// Discrete semantic signals emitted during stepping.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CoreEvent {
    Revealed {
        target: TargetHandle,
    },
    CounterStarted {
        target: TargetHandle,
    },
    CounterFinished {
        target: TargetHandle,
        text: String,
    },
    ProgressApplied {
        target: TargetHandle,
        percent: f32,
    },
}

/// Outputs returned by Engine::update().
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub events: Vec<CoreEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: CoreEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }
}
