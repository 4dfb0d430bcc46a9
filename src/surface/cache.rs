// SPDX-License-Identifier: MPL-2.0
//! LRU cache of decoded slides, keyed by slide number.
//!
//! Keeps the neighbours of the current slide decoded so stepping through a
//! single-frame deck does not flash a loading frame.

use super::loader::SlideImage;
use crate::config::DEFAULT_CACHED_SLIDES;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::sync::Arc;

pub struct SlideCache {
    entries: LruCache<usize, Arc<SlideImage>>,
    in_flight: HashSet<usize>,
    prefetch_count: usize,
}

impl SlideCache {
    #[must_use]
    pub fn new(capacity: usize, prefetch_count: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity)
            .or(NonZeroUsize::new(DEFAULT_CACHED_SLIDES))
            .unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            in_flight: HashSet::new(),
            prefetch_count,
        }
    }

    /// Returns the cached slide, marking it most recently used.
    pub fn get(&mut self, number: usize) -> Option<Arc<SlideImage>> {
        self.entries.get(&number).cloned()
    }

    #[must_use]
    pub fn contains(&self, number: usize) -> bool {
        self.entries.contains(&number)
    }

    pub fn insert(&mut self, number: usize, slide: Arc<SlideImage>) {
        self.in_flight.remove(&number);
        self.entries.put(number, slide);
    }

    /// Marks a load as started. Returns `false` if one is already running.
    pub fn begin_load(&mut self, number: usize) -> bool {
        self.in_flight.insert(number)
    }

    pub fn load_failed(&mut self, number: usize) {
        self.in_flight.remove(&number);
    }

    /// Slides around `current` that are neither cached nor loading, nearest first.
    #[must_use]
    pub fn prefetch_candidates(&self, current: usize, total: usize) -> Vec<usize> {
        let mut candidates = Vec::new();
        for distance in 1..=self.prefetch_count {
            let after = current + distance;
            if after <= total {
                candidates.push(after);
            }
            if let Some(before) = current.checked_sub(distance).filter(|&n| n >= 1) {
                candidates.push(before);
            }
        }
        candidates.retain(|n| !self.entries.contains(n) && !self.in_flight.contains(n));
        candidates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SlideCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHED_SLIDES, crate::config::DEFAULT_PREFETCH_COUNT)
    }
}
