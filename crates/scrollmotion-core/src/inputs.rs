#![allow(dead_code)]
//! Input contract for the core engine.
//!
//! Hosts build an `Inputs` from whatever their visibility machinery reported
//! since the last frame and pass it into `Engine::update()` together with
//! the frame timestamp. An element the host removed from its document simply
//! stops producing samples.

use serde::{Deserialize, Serialize};

use crate::watch::TargetHandle;

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Inputs {
    /// Visibility samples applied before stepping.
    #[serde(default)]
    pub samples: Vec<VisibilitySample>,
}

/// One host-reported visibility measurement.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VisibilitySample {
    pub target: TargetHandle,
    /// Fraction of the element's area inside the (margin-adjusted) viewport,
    /// 0..1.
    pub visible_fraction: f32,
}

impl VisibilitySample {
    pub fn new(target: &str, visible_fraction: f32) -> Self {
        Self {
            target: target.to_string(),
            visible_fraction,
        }
    }
}
