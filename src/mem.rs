// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory postings for series that have not been persisted yet.
//!
//! The head block keeps its inverted index here: one sorted id list per
//! label pair, appended to as series are created. Appends normally arrive
//! in increasing id order and cost O(1); an out-of-order id (replayed
//! writes, restored snapshots) marks the store dirty, and `ensure_order`
//! repairs every list in one pass before readers attach.

use std::collections::HashMap;

use log::debug;

use crate::postings::{EmptyPostings, ListPostings, Postings};
use crate::types::{LabelPair, SeriesId};

/// Map from label pair to the sorted ids of the series carrying it.
#[derive(Debug, Default)]
pub struct MemPostings {
    m: HashMap<LabelPair, Vec<SeriesId>>,
    /// Some list took an out-of-order append since the last `ensure_order`.
    dirty: bool,
}

impl MemPostings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id` under every one of its label pairs.
    pub fn add(&mut self, id: SeriesId, pairs: impl IntoIterator<Item = LabelPair>) {
        for pair in pairs {
            let list = self.m.entry(pair).or_default();
            if let Some(&last) = list.last() {
                if last >= id {
                    debug!(
                        "series id {} appended after {}; postings unsorted until ensure_order",
                        id, last
                    );
                    self.dirty = true;
                }
            }
            list.push(id);
        }
    }

    /// Cursor over the series carrying `name=value`; empty for an unknown
    /// pair.
    ///
    /// Run [`ensure_order`](MemPostings::ensure_order) first if any add was
    /// out of order, otherwise the cursor walks an unsorted list.
    pub fn get(&self, name: &str, value: &str) -> Box<dyn Postings + '_> {
        match self.m.get(&LabelPair::new(name, value)) {
            Some(ids) => Box::new(ListPostings::new(ids)),
            None => Box::new(EmptyPostings),
        }
    }

    /// Number of distinct label pairs tracked.
    pub fn len(&self) -> usize {
        self.m.len()
    }

    pub fn is_empty(&self) -> bool {
        self.m.is_empty()
    }

    /// Restore the strictly-increasing invariant after out-of-order adds.
    ///
    /// Sorts and dedups every list. Cheap no-op when nothing is dirty.
    pub fn ensure_order(&mut self) {
        if !self.dirty {
            return;
        }
        for list in self.m.values_mut() {
            list.sort_unstable();
            list.dedup();
        }
        self.dirty = false;
    }
}
