// SPDX-License-Identifier: MPL-2.0
//! Rendering surface: what each slide position currently shows.
//!
//! The controller talks to the surface through [`SlideSurface`] only, so it
//! can be driven against a recording fake in tests. [`ImageSurface`] is the
//! implementation used by the application. In the single layout it owns one
//! frame that is re-pointed on every navigation; in strip layouts it owns one
//! frame per slide, all loaded up front.
//!
//! Loads are asynchronous. Every display load carries a generation number;
//! a completion whose generation no longer matches its frame was superseded
//! and is dropped (its pixels still go to the cache).

pub mod cache;
pub mod loader;

pub use cache::SlideCache;
pub use loader::{load_slide, load_slide_async, SlideImage};

use crate::deck::Deck;
use crate::error::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// Why a slide is being decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPurpose {
    /// Shown as soon as it completes, unless superseded.
    Display { generation: u64 },
    /// Decoded ahead of time into the cache.
    Prefetch,
}

/// A decode the application must run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub number: usize,
    pub path: PathBuf,
    pub purpose: LoadPurpose,
}

/// Content of one slide position.
#[derive(Debug, Clone)]
pub enum SlideFrame {
    Loading,
    Loaded(Arc<SlideImage>),
    /// Fallback frame; `reason` is the error text shown under the message.
    Failed { reason: String },
}

impl SlideFrame {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, SlideFrame::Loading)
    }
}

/// Where slides are rendered.
pub trait SlideSurface {
    /// Prepares the surface for `deck`. Returns the loads to start.
    fn attach(&mut self, deck: &Deck) -> Vec<LoadRequest>;

    /// Points the surface at slide `number`.
    ///
    /// Called on every successful transition, including re-selecting the
    /// current slide, which retries a failed load.
    fn show(&mut self, number: usize, path: PathBuf) -> Option<LoadRequest>;

    /// Background loads for the neighbours of `current` worth decoding now.
    fn prefetch(&mut self, deck: &Deck, current: usize) -> Vec<LoadRequest>;

    /// Applies a finished load. Returns `false` for superseded results.
    fn finish_load(&mut self, number: usize, purpose: LoadPurpose, result: Result<SlideImage>)
        -> bool;

    /// Sets the uniform scale slides are drawn at.
    fn apply_scale(&mut self, scale: f32);

    /// True once no frame is waiting for a load.
    fn all_settled(&self) -> bool;
}

#[derive(Debug, Clone)]
struct Slot {
    number: usize,
    frame: SlideFrame,
    generation: u64,
}

impl Slot {
    fn loading(number: usize, generation: u64) -> Self {
        Self {
            number,
            frame: SlideFrame::Loading,
            generation,
        }
    }
}

/// Image-backed surface used by the application.
pub struct ImageSurface {
    strip: bool,
    slots: Vec<Slot>,
    active: usize,
    next_generation: u64,
    scale: f32,
    cache: SlideCache,
}

impl ImageSurface {
    /// One frame, re-pointed on navigation.
    #[must_use]
    pub fn single(cache: SlideCache) -> Self {
        Self::new(false, cache)
    }

    /// One frame per slide.
    #[must_use]
    pub fn strip(cache: SlideCache) -> Self {
        Self::new(true, cache)
    }

    fn new(strip: bool, cache: SlideCache) -> Self {
        Self {
            strip,
            slots: Vec::new(),
            active: 1,
            next_generation: 0,
            scale: 1.0,
            cache,
        }
    }

    fn bump_generation(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }

    fn slot_index(&self, number: usize) -> Option<usize> {
        if self.strip {
            number.checked_sub(1).filter(|&i| i < self.slots.len())
        } else {
            self.slots.first().filter(|slot| slot.number == number).map(|_| 0)
        }
    }

    #[must_use]
    pub fn is_strip(&self) -> bool {
        self.strip
    }

    /// Slide the surface is pointed at.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Frame currently shown for `number`, if the surface holds one.
    #[must_use]
    pub fn frame(&self, number: usize) -> Option<&SlideFrame> {
        self.slot_index(number).map(|i| &self.slots[i].frame)
    }

    /// Every frame held, with its slide number, in display order.
    pub fn frames(&self) -> impl Iterator<Item = (usize, &SlideFrame)> {
        self.slots.iter().map(|slot| (slot.number, &slot.frame))
    }

    fn display_request(&mut self, index: usize, path: PathBuf) -> LoadRequest {
        let generation = self.bump_generation();
        let slot = &mut self.slots[index];
        slot.frame = SlideFrame::Loading;
        slot.generation = generation;
        LoadRequest {
            number: slot.number,
            path,
            purpose: LoadPurpose::Display { generation },
        }
    }
}

impl SlideSurface for ImageSurface {
    fn attach(&mut self, deck: &Deck) -> Vec<LoadRequest> {
        self.slots.clear();
        if !self.strip {
            return Vec::new();
        }

        let mut requests = Vec::with_capacity(deck.total());
        for number in deck.numbers() {
            let generation = self.bump_generation();
            self.slots.push(Slot::loading(number, generation));
            requests.push(LoadRequest {
                number,
                path: deck.source().resolve(number),
                purpose: LoadPurpose::Display { generation },
            });
        }
        requests
    }

    fn show(&mut self, number: usize, path: PathBuf) -> Option<LoadRequest> {
        self.active = number;

        if self.strip {
            let index = self.slot_index(number)?;
            return match self.slots[index].frame {
                SlideFrame::Failed { .. } => Some(self.display_request(index, path)),
                _ => None,
            };
        }

        if let Some(image) = self.cache.get(number) {
            let generation = self.bump_generation();
            self.slots = vec![Slot {
                number,
                frame: SlideFrame::Loaded(image),
                generation,
            }];
            return None;
        }

        self.slots = vec![Slot::loading(number, 0)];
        self.cache.begin_load(number);
        Some(self.display_request(0, path))
    }

    fn prefetch(&mut self, deck: &Deck, current: usize) -> Vec<LoadRequest> {
        if self.strip {
            return Vec::new();
        }
        let candidates = self.cache.prefetch_candidates(current, deck.total());
        candidates
            .into_iter()
            .filter(|&number| self.cache.begin_load(number))
            .map(|number| LoadRequest {
                number,
                path: deck.source().resolve(number),
                purpose: LoadPurpose::Prefetch,
            })
            .collect()
    }

    fn finish_load(
        &mut self,
        number: usize,
        purpose: LoadPurpose,
        result: Result<SlideImage>,
    ) -> bool {
        let result = result.map(Arc::new);
        match &result {
            Ok(image) => self.cache.insert(number, Arc::clone(image)),
            Err(err) => {
                self.cache.load_failed(number);
                tracing::warn!(slide = number, error = %err, "failed to load slide");
            }
        }

        let LoadPurpose::Display { generation } = purpose else {
            return false;
        };

        let Some(index) = self.slot_index(number) else {
            return false;
        };
        let slot = &mut self.slots[index];
        if slot.generation != generation {
            tracing::debug!(slide = number, generation, "dropping superseded load");
            return false;
        }

        slot.frame = match result {
            Ok(image) => SlideFrame::Loaded(image),
            Err(err) => SlideFrame::Failed {
                reason: err.to_string(),
            },
        };
        true
    }

    fn apply_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    fn all_settled(&self) -> bool {
        self.slots.iter().all(|slot| !slot.frame.is_loading())
    }
}
