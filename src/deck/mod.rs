// SPDX-License-Identifier: MPL-2.0
//! The slide deck: an ordered, fixed-size collection of slide resources.
//!
//! A deck knows how many slides it has, where each one lives on disk, and the
//! resolution the slides were authored for. Slide numbers are 1-based
//! everywhere in the crate.

pub mod jump;
pub mod navigation;

use crate::config::{DEFAULT_BASE_PATH, DEFAULT_EXTENSION, MAX_DISCOVERED_SLIDES};
use crate::error::{DeckError, Result};
use iced::Size;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

pub use navigation::{NavigationListener, NavigationState, ProgressMode, SlideChange};

/// Path template of the slide resources: `<base_path><number>.<extension>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSource {
    base_path: String,
    extension: String,
}

impl SlideSource {
    /// Creates a source from a path prefix and an extension.
    ///
    /// A leading dot on the extension is ignored.
    pub fn new(base_path: impl Into<String>, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        Self {
            base_path: base_path.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Builds a source from a CLI argument.
    ///
    /// A directory argument means `<dir>/page_`; anything else is used as the
    /// prefix verbatim.
    pub fn from_argument(arg: &str, extension: impl Into<String>) -> Self {
        let path = Path::new(arg);
        if path.is_dir() {
            let prefix = path.join("page_");
            Self::new(prefix.to_string_lossy().into_owned(), extension)
        } else {
            Self::new(arg, extension)
        }
    }

    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Resolves the resource of slide `number`.
    #[must_use]
    pub fn resolve(&self, number: usize) -> PathBuf {
        PathBuf::from(format!("{}{}.{}", self.base_path, number, self.extension))
    }

    /// Counts consecutive existing slides starting at 1.
    ///
    /// Stops at the first missing file or at [`MAX_DISCOVERED_SLIDES`].
    #[must_use]
    pub fn discover_total(&self) -> usize {
        (1..=MAX_DISCOVERED_SLIDES)
            .take_while(|&n| self.resolve(n).is_file())
            .count()
    }
}

impl Default for SlideSource {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PATH, DEFAULT_EXTENSION)
    }
}

/// The deck presented in this session.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    total: NonZeroUsize,
    source: SlideSource,
    design_size: Size,
}

impl Deck {
    /// Creates a deck of `total` slides.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] when `total` is zero.
    pub fn new(total: usize, source: SlideSource, design_size: Size) -> Result<Self> {
        let total = NonZeroUsize::new(total).ok_or(DeckError::Empty)?;
        Ok(Self {
            total,
            source,
            design_size,
        })
    }

    /// Creates a deck whose size is whatever is found on disk.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] when the first slide does not exist.
    pub fn discover(source: SlideSource, design_size: Size) -> Result<Self> {
        let total = source.discover_total();
        tracing::debug!(base = source.base_path(), total, "discovered deck");
        Self::new(total, source, design_size)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total.get()
    }

    #[must_use]
    pub fn total_non_zero(&self) -> NonZeroUsize {
        self.total
    }

    #[must_use]
    pub fn source(&self) -> &SlideSource {
        &self.source
    }

    /// Resolution every slide is authored for.
    #[must_use]
    pub fn design_size(&self) -> Size {
        self.design_size
    }

    /// Returns true if `number` names a slide of this deck.
    #[must_use]
    pub fn contains(&self, number: usize) -> bool {
        (1..=self.total()).contains(&number)
    }

    /// Validates a requested start slide.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::StartOutOfRange`] when `start` is not a slide of the deck.
    pub fn check_start(&self, start: usize) -> Result<usize> {
        if self.contains(start) {
            Ok(start)
        } else {
            Err(DeckError::StartOutOfRange {
                start,
                total: self.total(),
            }
            .into())
        }
    }

    /// Iterates over every slide number in order.
    pub fn numbers(&self) -> impl Iterator<Item = usize> {
        1..=self.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn design() -> Size {
        Size::new(1280.0, 720.0)
    }

    #[test]
    fn resolve_appends_number_and_extension() {
        let source = SlideSource::new("slides/page_", "html");
        assert_eq!(source.resolve(7), PathBuf::from("slides/page_7.html"));
    }

    #[test]
    fn extension_dot_is_optional() {
        let source = SlideSource::new("deck/s", ".png");
        assert_eq!(source.extension(), "png");
        assert_eq!(source.resolve(1), PathBuf::from("deck/s1.png"));
    }

    #[test]
    fn empty_deck_is_rejected() {
        let err = Deck::new(0, SlideSource::default(), design()).unwrap_err();
        assert!(matches!(err, crate::error::Error::Deck(DeckError::Empty)));
    }

    #[test]
    fn membership_is_bounded_by_total() {
        let deck = Deck::new(15, SlideSource::default(), design()).unwrap();
        assert!(!deck.contains(0));
        assert!(!deck.contains(16));
        assert!(deck.contains(15));
        assert_eq!(deck.numbers().count(), 15);
    }

    #[test]
    fn start_outside_deck_is_reported() {
        let deck = Deck::new(3, SlideSource::default(), design()).unwrap();
        assert_eq!(deck.check_start(3).unwrap(), 3);
        assert!(matches!(
            deck.check_start(4),
            Err(crate::error::Error::Deck(DeckError::StartOutOfRange { start: 4, total: 3 }))
        ));
    }

    #[test]
    fn discovery_stops_at_first_gap() {
        let dir = tempdir().expect("failed to create temp dir");
        for n in [1, 2, 3, 5] {
            fs::write(dir.path().join(format!("page_{n}.png")), b"x").unwrap();
        }

        let source = SlideSource::from_argument(&dir.path().to_string_lossy(), "png");
        let deck = Deck::discover(source, design()).unwrap();

        assert_eq!(deck.total(), 3);
    }

    #[test]
    fn discovery_without_first_slide_is_empty() {
        let dir = tempdir().expect("failed to create temp dir");
        let source = SlideSource::from_argument(&dir.path().to_string_lossy(), "png");
        assert!(Deck::discover(source, design()).is_err());
    }
}
