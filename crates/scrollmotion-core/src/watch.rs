#![allow(dead_code)]
//! One-shot visibility subscriptions.
//!
//! A `Watch` pairs a target handle with a visibility threshold. Hosts report
//! visible-area fractions through `Engine::update()`; `offer()` fires each
//! watch at most once, on the first sample that meets its threshold, then
//! drops it from the set. Samples for targets nobody watches are ignored,
//! and a target that never crosses its threshold simply never fires.

use serde::{Deserialize, Serialize};

use crate::ids::WatchId;

/// Opaque target handle (small string key chosen by the host, e.g. an
/// element id).
pub type TargetHandle = String;

/// Lifecycle of a single watch. Done is terminal; a re-registered target
/// gets a fresh watch with a fresh lifetime.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum WatchState {
    Observed,
    Done,
}

#[derive(Clone, Debug)]
pub struct Watch {
    pub id: WatchId,
    pub target: TargetHandle,
    pub threshold: f32,
    pub state: WatchState,
}

/// Set of live watches sharing one detector.
#[derive(Default, Debug)]
pub struct WatchSet {
    watches: Vec<Watch>,
}

impl WatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a target for visibility tracking under a caller-allocated id.
    pub fn observe(&mut self, id: WatchId, target: &str, threshold: f32) {
        self.watches.push(Watch {
            id,
            target: target.to_string(),
            threshold,
            state: WatchState::Observed,
        });
    }

    /// Drop a watch before it fires. No-op for unknown ids.
    pub fn unobserve(&mut self, id: WatchId) {
        self.watches.retain(|w| w.id != id);
    }

    /// Feed one host-reported visibility sample. Every observed watch on
    /// `target` whose threshold is met fires, is marked Done, and is
    /// deregistered before this returns, so later samples cannot re-fire it.
    pub fn offer(&mut self, target: &str, visible_fraction: f32) -> Vec<WatchId> {
        let mut fired = Vec::new();
        for w in self.watches.iter_mut() {
            if w.state == WatchState::Observed
                && w.target == target
                && visible_fraction >= w.threshold
            {
                w.state = WatchState::Done;
                fired.push(w.id);
            }
        }
        if !fired.is_empty() {
            self.watches.retain(|w| w.state == WatchState::Observed);
        }
        fired
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.watches.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.watches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_then_deregisters() {
        let mut set = WatchSet::new();
        set.observe(WatchId(0), "hero", 0.3);

        assert!(set.offer("hero", 0.1).is_empty());
        assert_eq!(set.offer("hero", 0.5), vec![WatchId(0)]);
        // Toggling visibility afterwards never re-fires.
        assert!(set.offer("hero", 0.0).is_empty());
        assert!(set.offer("hero", 1.0).is_empty());
        assert!(set.is_empty());
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut set = WatchSet::new();
        set.observe(WatchId(0), "bar", 0.3);
        assert_eq!(set.offer("bar", 0.3), vec![WatchId(0)]);
    }

    #[test]
    fn unknown_targets_are_ignored() {
        let mut set = WatchSet::new();
        set.observe(WatchId(0), "hero", 0.1);
        assert!(set.offer("missing", 1.0).is_empty());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn watches_are_independent() {
        let mut set = WatchSet::new();
        set.observe(WatchId(0), "a", 0.1);
        set.observe(WatchId(1), "b", 0.5);

        assert_eq!(set.offer("a", 0.2), vec![WatchId(0)]);
        assert_eq!(set.len(), 1);
        assert!(set.offer("b", 0.2).is_empty());
        assert_eq!(set.offer("b", 0.9), vec![WatchId(1)]);
    }

    #[test]
    fn unobserve_before_firing() {
        let mut set = WatchSet::new();
        set.observe(WatchId(7), "a", 0.1);
        set.unobserve(WatchId(7));
        assert!(set.offer("a", 1.0).is_empty());
    }
}
