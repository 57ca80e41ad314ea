#![allow(dead_code)]
//! Identifiers and a simple allocator for watch registrations.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct WatchId(pub u32);

/// Monotonic allocator for WatchId.
/// Dense indices keep lookup tables compact; ids are opaque externally.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_watch: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_watch(&mut self) -> WatchId {
        let id = WatchId(self.next_watch);
        self.next_watch = self.next_watch.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
