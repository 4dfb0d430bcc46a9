// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::{Config, LayoutMode, DEFAULT_EXTENSION};
use crate::controller;
use crate::deck::SlideSource;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Events produced by the views, or translated from native events.
    Deck(controller::Event),
    /// Native event forwarded by the subscription, with the window it came from.
    RawEvent {
        window: iced::window::Id,
        event: iced::Event,
    },
}

/// Runtime flags parsed from the command line.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Flags {
    /// Slide directory, or a path prefix such as `talk/page_`.
    pub deck: Option<String>,
    /// Number of slides; discovered from disk when absent.
    pub total: Option<usize>,
    /// Slide file extension.
    pub extension: Option<String>,
    /// Slide shown first (1-based).
    pub start: Option<usize>,
    pub layout: Option<LayoutMode>,
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_DECK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
}

impl Flags {
    /// Overrides `config` with every value given on the command line.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(extension) = &self.extension {
            config.deck.extension = Some(extension.clone());
        }
        if let Some(arg) = &self.deck {
            let extension = config
                .deck
                .extension
                .clone()
                .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
            let source = SlideSource::from_argument(arg, extension);
            config.deck.base_path = Some(source.base_path().to_string());
        }
        if let Some(total) = self.total {
            config.deck.total = Some(total);
        }
        if let Some(start) = self.start {
            config.deck.start = Some(start);
        }
        if let Some(layout) = self.layout {
            config.display.layout = Some(layout);
        }
        if let Some(lang) = &self.lang {
            config.general.language = Some(lang.clone());
        }
    }
}
