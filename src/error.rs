// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Svg(String),
    Config(String),
    Deck(DeckError),
}

/// Problems with the slide deck itself, as opposed to a single slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// The deck resolved to zero slides.
    Empty,

    /// The requested start slide is outside the deck.
    StartOutOfRange { start: usize, total: usize },
}

impl DeckError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DeckError::Empty => "error-deck-empty",
            DeckError::StartOutOfRange { .. } => "error-deck-start-out-of-range",
        }
    }
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::Empty => write!(f, "Deck contains no slides"),
            DeckError::StartOutOfRange { start, total } => {
                write!(f, "Start slide {} is outside 1..={}", start, total)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Deck(e) => write!(f, "Deck Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<DeckError> for Error {
    fn from(err: DeckError) -> Self {
        Error::Deck(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn deck_error_wraps_and_displays() {
        let err: Error = DeckError::StartOutOfRange { start: 20, total: 15 }.into();
        assert_eq!(format!("{}", err), "Deck Error: Start slide 20 is outside 1..=15");
    }

    #[test]
    fn deck_error_i18n_keys() {
        assert_eq!(DeckError::Empty.i18n_key(), "error-deck-empty");
        assert_eq!(
            DeckError::StartOutOfRange { start: 0, total: 1 }.i18n_key(),
            "error-deck-start-out-of-range"
        );
    }
}
