#![allow(dead_code)]
//! Engine: registration of watched element sets and the per-frame step.
//!
//! Methods:
//! - new, observe_reveal, observe_counter, observe_counter_group,
//!   observe_progress, load_manifest, update
//!
//! `update(now_ms, inputs)` runs one cooperative frame: visibility samples
//! fire one-shot watches, due pending work is promoted (counter starts,
//! staggered fills), and active counters emit one text frame each. For a
//! given element, firing strictly precedes animation start and frames are
//! time-ordered; order across elements is unspecified. Once started, a
//! counter runs to completion; there is no cancellation and no timeout.

use hashbrown::HashMap;

use crate::config::Config;
use crate::counter::CounterSpec;
use crate::ids::{IdAllocator, WatchId};
use crate::inputs::Inputs;
use crate::manifest::PageManifest;
use crate::outputs::{Change, CoreEvent, Outputs, WriteOp};
use crate::progress::{parse_percent, ProgressSpec};
use crate::watch::{TargetHandle, WatchSet};

/// What a fired watch triggers.
#[derive(Clone, Debug)]
enum Trigger {
    Reveal {
        target: TargetHandle,
    },
    CounterGroup {
        delay_ms: f64,
        items: Vec<(TargetHandle, CounterSpec)>,
    },
    Progress {
        target: TargetHandle,
        spec: ProgressSpec,
    },
}

/// Work scheduled behind a fixed delay after a watch fired.
#[derive(Clone, Debug)]
enum Pending {
    CounterStart {
        target: TargetHandle,
        spec: CounterSpec,
        due_at: f64,
    },
    ProgressFill {
        target: TargetHandle,
        percent: f32,
        due_at: f64,
    },
}

impl Pending {
    fn due_at(&self) -> f64 {
        match self {
            Pending::CounterStart { due_at, .. } | Pending::ProgressFill { due_at, .. } => *due_at,
        }
    }
}

/// A counter mid-flight. Elapsed time is recomputed from the captured start
/// timestamp every frame, so missed frames never accumulate drift.
#[derive(Clone, Debug)]
struct CounterAnim {
    target: TargetHandle,
    spec: CounterSpec,
    started_at: f64,
}

/// Engine (core) with target handles fixed to String keys.
#[derive(Debug)]
pub struct Engine {
    cfg: Config,
    ids: IdAllocator,

    watches: WatchSet,
    triggers: HashMap<WatchId, Trigger>,
    pending: Vec<Pending>,
    counters: Vec<CounterAnim>,

    // Per-tick outputs
    outputs: Outputs,
}

impl Engine {
    /// Create a new engine with the given config.
    pub fn new(cfg: Config) -> Self {
        let outputs = Outputs {
            changes: Vec::with_capacity(cfg.max_events_per_tick),
            events: Vec::new(),
        };
        Self {
            cfg,
            ids: IdAllocator::new(),
            watches: WatchSet::new(),
            triggers: HashMap::new(),
            pending: Vec::new(),
            counters: Vec::new(),
            outputs,
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Watch an element and add the reveal marker class when it first
    /// becomes sufficiently visible.
    pub fn observe_reveal(&mut self, target: &str) -> WatchId {
        let id = self.ids.alloc_watch();
        self.watches.observe(id, target, self.cfg.reveal_threshold);
        self.triggers.insert(
            id,
            Trigger::Reveal {
                target: target.to_string(),
            },
        );
        log::debug!("watching reveal target '{target}'");
        id
    }

    /// Watch a counter element itself and count up as soon as it is visible.
    pub fn observe_counter(&mut self, target: &str, spec: CounterSpec) -> WatchId {
        self.observe_counter_group(target, 0.0, vec![(target.to_string(), spec)])
    }

    /// Watch one section element and, `delay_ms` after it becomes visible,
    /// start every counter in `items`.
    pub fn observe_counter_group(
        &mut self,
        section: &str,
        delay_ms: f64,
        items: Vec<(TargetHandle, CounterSpec)>,
    ) -> WatchId {
        let id = self.ids.alloc_watch();
        self.watches.observe(id, section, self.cfg.counter_threshold);
        self.triggers
            .insert(id, Trigger::CounterGroup { delay_ms, items });
        log::debug!("watching counter section '{section}'");
        id
    }

    /// Watch a progress bar and fill it to the percent encoded in
    /// `raw_percent` (markup attribute text; absent/malformed → 0) after
    /// the configured stagger delay.
    pub fn observe_progress(&mut self, target: &str, raw_percent: Option<&str>) -> WatchId {
        let spec = ProgressSpec {
            percent: parse_percent(raw_percent),
            stagger_ms: self.cfg.progress_stagger_ms,
        };
        let id = self.ids.alloc_watch();
        self.watches.observe(id, target, self.cfg.progress_threshold);
        self.triggers.insert(
            id,
            Trigger::Progress {
                target: target.to_string(),
                spec,
            },
        );
        id
    }

    /// Register everything a page manifest describes. Returns the watch ids
    /// in registration order (reveals, counter groups, progress bars).
    pub fn load_manifest(&mut self, manifest: &PageManifest) -> Vec<WatchId> {
        let mut ids = Vec::new();
        for target in &manifest.reveals {
            ids.push(self.observe_reveal(target));
        }
        for group in &manifest.counter_groups {
            let delay = group.delay_ms.unwrap_or(self.cfg.counter_group_delay_ms);
            let items = group
                .items
                .iter()
                .map(|it| {
                    (
                        it.target.clone(),
                        CounterSpec {
                            target: it.value,
                            duration_ms: it.duration_ms.unwrap_or(self.cfg.counter_duration_ms),
                            suffix: it.suffix.clone().unwrap_or_default(),
                        },
                    )
                })
                .collect();
            ids.push(self.observe_counter_group(&group.section, delay, items));
        }
        for bar in &manifest.progress_bars {
            ids.push(self.observe_progress(&bar.target, bar.percent.as_deref()));
        }
        ids
    }

    /// Drop a watch (and its trigger) before it fires.
    pub fn unobserve(&mut self, id: WatchId) {
        self.watches.unobserve(id);
        self.triggers.remove(&id);
    }

    /// Number of watches still waiting to fire.
    pub fn watch_count(&self) -> usize {
        self.watches.len()
    }

    /// Number of counters currently animating.
    pub fn active_counter_count(&self) -> usize {
        self.counters.len()
    }

    /// True once nothing can produce further output: no live watches, no
    /// pending delays, no counters mid-flight.
    pub fn is_settled(&self) -> bool {
        self.watches.is_empty() && self.pending.is_empty() && self.counters.is_empty()
    }

    fn dispatch(&mut self, id: WatchId, now_ms: f64) {
        let Some(trigger) = self.triggers.remove(&id) else {
            return;
        };
        match trigger {
            Trigger::Reveal { target } => {
                self.outputs.push_change(Change {
                    target: target.clone(),
                    op: WriteOp::AddClass(self.cfg.reveal_class.clone()),
                });
                self.outputs.push_event(CoreEvent::Revealed { target });
            }
            Trigger::CounterGroup { delay_ms, items } => {
                for (target, spec) in items {
                    self.pending.push(Pending::CounterStart {
                        target,
                        spec,
                        due_at: now_ms + delay_ms,
                    });
                }
            }
            Trigger::Progress { target, spec } => {
                self.pending.push(Pending::ProgressFill {
                    target,
                    percent: spec.percent,
                    due_at: now_ms + spec.stagger_ms,
                });
            }
        }
    }

    /// Run one frame at host timestamp `now_ms`, producing this tick's
    /// outputs.
    pub fn update(&mut self, now_ms: f64, inputs: Inputs) -> &Outputs {
        self.outputs.clear();

        // 1) Visibility crossings fire one-shot watches.
        for sample in &inputs.samples {
            let fired = self.watches.offer(&sample.target, sample.visible_fraction);
            for id in fired {
                self.dispatch(id, now_ms);
            }
        }

        // 2) Promote due pending work.
        let pending = std::mem::take(&mut self.pending);
        for p in pending {
            if p.due_at() > now_ms {
                self.pending.push(p);
                continue;
            }
            match p {
                Pending::CounterStart { target, spec, .. } => {
                    self.outputs.push_event(CoreEvent::CounterStarted {
                        target: target.clone(),
                    });
                    self.counters.push(CounterAnim {
                        target,
                        spec,
                        started_at: now_ms,
                    });
                }
                Pending::ProgressFill {
                    target, percent, ..
                } => {
                    self.outputs.push_change(Change {
                        target: target.clone(),
                        op: WriteOp::SetFillPercent(percent),
                    });
                    self.outputs
                        .push_event(CoreEvent::ProgressApplied { target, percent });
                }
            }
        }

        // 3) Advance active counters; finished ones emit the authoritative
        //    final frame and are removed.
        let mut idx = 0;
        while idx < self.counters.len() {
            let anim = &self.counters[idx];
            let (text, done) = anim.spec.frame_text(now_ms - anim.started_at);
            let target = anim.target.clone();
            self.outputs.push_change(Change {
                target: target.clone(),
                op: WriteOp::SetText(text.clone()),
            });
            if done {
                self.outputs
                    .push_event(CoreEvent::CounterFinished { target, text });
                self.counters.remove(idx);
            } else {
                idx += 1;
            }
        }

        &self.outputs
    }
}
