// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring between the controller and Iced.
//!
//! `App` owns the single [`DeckController`], the translations and the theme.
//! Boot reads the configuration, applies the CLI flags, opens the deck and
//! starts the controller; `update` forwards every message to the controller
//! and turns the resulting effects into tasks.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{
    self, Config, DEFAULT_CACHED_SLIDES, DEFAULT_DESIGN_HEIGHT, DEFAULT_DESIGN_WIDTH,
    DEFAULT_EXTENSION, DEFAULT_PREFETCH_COUNT, PROGRESS_BAR_HEIGHT, TOOLBAR_HEIGHT,
};
use crate::controller::{DeckController, Settings, TraceListener};
use crate::deck::{Deck, SlideSource};
use crate::error::{DeckError, Error};
use crate::i18n::fluent::I18n;
use crate::platform::{Capabilities, DesktopProbe};
use crate::surface::{ImageSurface, SlideCache};
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: f32 = DEFAULT_DESIGN_WIDTH;
pub const WINDOW_DEFAULT_HEIGHT: f32 = DEFAULT_DESIGN_HEIGHT + TOOLBAR_HEIGHT + PROGRESS_BAR_HEIGHT;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 320.0;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    /// `None` when the deck could not be opened; `fatal` says why.
    controller: Option<DeckController<ImageSurface>>,
    fatal: Option<String>,
    /// Translated warning for the toolbar status line.
    status: Option<String>,
    theme_mode: ThemeMode,
    /// Resolved once per mode change; `System` asks the desktop.
    dark: bool,
    window_id: Option<window::Id>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current", &self.controller.as_ref().map(|c| c.navigation().current()))
            .field("fatal", &self.fatal)
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced calls boot through `Fn`; the flags are cloned per call.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// A controller ready to start, with the warnings collected while building it.
struct Boot {
    controller: DeckController<ImageSurface>,
    warnings: Vec<String>,
}

/// Opens the deck described by `config`.
///
/// # Errors
///
/// Returns [`DeckError::Empty`] when the deck has no slides.
fn open_deck(config: &Config) -> crate::error::Result<Deck> {
    let design = design_size(config);
    let source = SlideSource::new(
        config
            .deck
            .base_path
            .clone()
            .unwrap_or_else(|| config::DEFAULT_BASE_PATH.to_string()),
        config
            .deck
            .extension
            .clone()
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string()),
    );

    match config.deck.total {
        Some(total) => Deck::new(total, source, design),
        None => Deck::discover(source, design),
    }
}

fn design_size(config: &Config) -> Size {
    Size::new(
        config.deck.design_width.unwrap_or(DEFAULT_DESIGN_WIDTH),
        config.deck.design_height.unwrap_or(DEFAULT_DESIGN_HEIGHT),
    )
}

/// Translated message for a deck or load error.
fn error_message(i18n: &I18n, error: &Error, pattern: &str) -> String {
    match error {
        Error::Deck(DeckError::StartOutOfRange { start, total }) => i18n.tr_with_args(
            "error-deck-start-out-of-range",
            &[("start", &start.to_string()), ("total", &total.to_string())],
        ),
        Error::Deck(err) => i18n.tr_with_args(err.i18n_key(), &[("pattern", pattern)]),
        other => other.to_string(),
    }
}

fn boot_controller(config: &Config, i18n: &I18n) -> Result<Boot, String> {
    let pattern = format!(
        "{}*.{}",
        config.deck.base_path.as_deref().unwrap_or(config::DEFAULT_BASE_PATH),
        config.deck.extension.as_deref().unwrap_or(DEFAULT_EXTENSION)
    );

    let deck = open_deck(config).map_err(|err| {
        tracing::error!(error = %err, pattern = %pattern, "cannot open deck");
        error_message(i18n, &err, &pattern)
    })?;

    let mut warnings = Vec::new();
    let requested = config.deck.start.unwrap_or(1);
    let start = deck.check_start(requested).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "starting on the first slide instead");
        warnings.push(error_message(i18n, &err, &pattern));
        1
    });

    let settings = Settings::from_config(config, deck.design_size());
    let cache = SlideCache::new(DEFAULT_CACHED_SLIDES, DEFAULT_PREFETCH_COUNT);
    let surface = if settings.layout.is_strip() {
        ImageSurface::strip(cache)
    } else {
        ImageSurface::single(cache)
    };
    let capabilities = Capabilities::resolve(&DesktopProbe {
        fullscreen_enabled: config.fullscreen.enabled.unwrap_or(true),
    });
    tracing::debug!(?capabilities, total = deck.total(), start, "deck opened");

    let mut controller = DeckController::new(
        deck,
        surface,
        settings,
        capabilities,
        start,
        Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
    );
    controller.add_listener(Box::new(TraceListener));

    Ok(Boot {
        controller,
        warnings,
    })
}

impl App {
    /// Initializes application state and starts loading the first slides.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) =
            config::load_with_override(flags.config_dir.as_ref().map(PathBuf::from));
        flags.apply_to(&mut config);

        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);
        let theme_mode = config.general.theme_mode;

        let mut warnings: Vec<String> = config_warning.iter().map(|key| i18n.tr(key)).collect();

        let (controller, fatal) = match boot_controller(&config, &i18n) {
            Ok(boot) => {
                warnings.extend(boot.warnings);
                (Some(boot.controller), None)
            }
            Err(message) => (None, Some(message)),
        };

        let mut app = App {
            i18n,
            controller,
            fatal,
            status: (!warnings.is_empty()).then(|| warnings.join(" · ")),
            theme_mode,
            dark: theme_mode.is_dark(),
            window_id: None,
        };

        let task = app.start();
        (app, task)
    }

    fn start(&mut self) -> Task<Message> {
        let Some(controller) = self.controller.as_mut() else {
            return Task::none();
        };
        let effects = controller.start();
        let mut ctx = update::UpdateContext {
            controller,
            window_id: &mut self.window_id,
            theme_mode: &mut self.theme_mode,
        };
        update::run_effects(&mut ctx, effects)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.controller {
            Some(controller) => {
                let navigation = controller.navigation();
                let counter = self.i18n.tr_with_args(
                    "slide-counter",
                    &[
                        ("current", &navigation.current().to_string()),
                        ("total", &navigation.total().to_string()),
                    ],
                );
                format!("{app_name} ({counter})")
            }
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn scheme(&self) -> ColorScheme {
        if self.dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let pending = self
            .controller
            .as_ref()
            .is_some_and(DeckController::needs_tick);
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(pending),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let Some(controller) = self.controller.as_mut() else {
            return Task::none();
        };
        let mode_before = self.theme_mode;

        let mut ctx = update::UpdateContext {
            controller,
            window_id: &mut self.window_id,
            theme_mode: &mut self.theme_mode,
        };

        let task = match message {
            Message::Deck(event) => update::handle_deck_event(&mut ctx, event),
            Message::RawEvent { window, event } => {
                update::handle_raw_event(&mut ctx, window, &event)
            }
        };

        if self.theme_mode != mode_before {
            self.dark = self.theme_mode.is_dark();
        }
        task
    }

    fn view(&self) -> Element<'_, Message> {
        match (&self.controller, &self.fatal) {
            (Some(controller), _) => view::view(
                view::ViewContext {
                    i18n: &self.i18n,
                    scheme: self.scheme(),
                    status: self.status.as_deref(),
                },
                controller,
            ),
            (None, Some(message)) => view::view_error(&self.i18n, message),
            (None, None) => view::view_error(&self.i18n, ""),
        }
    }
}
