#![allow(dead_code)]
//! ScrollMotion core (host-agnostic)
//!
//! Coordinates one-shot visibility watches with the effects they trigger:
//! reveal marker classes, eased count-up counters, and staggered progress
//! fills. The host (a browser adapter, a test harness) owns real viewport
//! intersection and frame scheduling; it reports visibility samples and a
//! frame timestamp through `Engine::update()` and applies the returned
//! changes to its display tree.

pub mod config;
pub mod counter;
pub mod ease;
pub mod engine;
pub mod ids;
pub mod inputs;
pub mod manifest;
pub mod outputs;
pub mod progress;
pub mod watch;

// Re-exports for consumers (adapters)
pub use config::{Config, Margin};
pub use counter::CounterSpec;
pub use engine::Engine;
pub use ids::{IdAllocator, WatchId};
pub use inputs::{Inputs, VisibilitySample};
pub use manifest::{
    parse_page_manifest_json, CounterGroup, CounterItem, ManifestError, PageManifest, ProgressBar,
};
pub use outputs::{Change, CoreEvent, Outputs, WriteOp};
pub use progress::{parse_percent, ProgressSpec};
pub use watch::{TargetHandle, Watch, WatchSet, WatchState};
