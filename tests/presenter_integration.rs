// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests of the presenter against real slide files.
//!
//! The controller is driven the way the application drives it, except that
//! decode effects are executed synchronously.

use iced::keyboard::key::Named;
use iced::keyboard::{Key, Modifiers};
use iced::Size;
use iced_deck::config::{self, Config, LayoutMode};
use iced_deck::controller::{DeckController, Effect, Event, Settings};
use iced_deck::deck::{Deck, ProgressMode, SlideSource};
use iced_deck::platform::{Capabilities, DesktopProbe};
use iced_deck::surface::{load_slide, ImageSurface, SlideCache, SlideFrame};
use iced_deck::viewport::Axis;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const WINDOW: Size = Size::new(1280.0, 772.0);

fn write_slides(dir: &Path, count: usize) {
    for n in 1..=count {
        image_rs::RgbaImage::from_pixel(64, 36, image_rs::Rgba([200, 200, 200, 255]))
            .save(dir.join(format!("page_{n}.png")))
            .expect("failed to write slide");
    }
}

fn controller(deck: Deck, layout: LayoutMode) -> DeckController<ImageSurface> {
    let mut config = Config::default();
    config.display.layout = Some(layout);
    let settings = Settings::from_config(&config, deck.design_size());
    let surface = if layout.is_strip() {
        ImageSurface::strip(SlideCache::default())
    } else {
        ImageSurface::single(SlideCache::default())
    };
    let capabilities = Capabilities::resolve(&DesktopProbe {
        fullscreen_enabled: true,
    });
    DeckController::new(deck, surface, settings, capabilities, 1, WINDOW)
}

/// Runs every load effect synchronously and feeds the result back.
/// Returns the non-load effects that were produced along the way.
fn settle(controller: &mut DeckController<ImageSurface>, effects: Vec<Effect>) -> Vec<Effect> {
    let mut pending = effects;
    let mut others = Vec::new();
    while let Some(effect) = pending.pop() {
        match effect {
            Effect::Load(request) => {
                let result = load_slide(&request.path);
                pending.extend(controller.handle(Event::SlideLoaded {
                    number: request.number,
                    purpose: request.purpose,
                    result,
                }));
            }
            other => others.push(other),
        }
    }
    others
}

fn press(controller: &mut DeckController<ImageSurface>, named: Named) -> Vec<Effect> {
    let effects = controller.handle(Event::Key {
        key: Key::Named(named),
        modifiers: Modifiers::default(),
    });
    settle(controller, effects)
}

#[test]
fn fifteen_slide_walkthrough() {
    let dir = tempdir().expect("failed to create temp dir");
    write_slides(dir.path(), 15);
    let source = SlideSource::from_argument(&dir.path().to_string_lossy(), "png");
    let deck = Deck::discover(source, Size::new(1280.0, 720.0)).expect("deck should open");
    assert_eq!(deck.total(), 15);

    let mut presenter = controller(deck, LayoutMode::Single);
    let effects = presenter.start();
    settle(&mut presenter, effects);
    assert!(matches!(
        presenter.surface().frame(1),
        Some(SlideFrame::Loaded(_))
    ));

    press(&mut presenter, Named::ArrowLeft);
    assert_eq!(presenter.navigation().current(), 1);

    let effects = presenter.handle(Event::GoTo(15));
    settle(&mut presenter, effects);
    press(&mut presenter, Named::ArrowRight);
    assert_eq!(presenter.navigation().current(), 15);

    let effects = presenter.handle(Event::GoTo(7));
    settle(&mut presenter, effects);
    assert_eq!(presenter.navigation().current(), 7);
    assert!((presenter.progress() - 6.0 / 14.0).abs() < 1e-6);
    assert!((ProgressMode::Position.fraction(7, 15) - 7.0 / 15.0).abs() < 1e-6);
    assert!(matches!(
        presenter.surface().frame(7),
        Some(SlideFrame::Loaded(_))
    ));

    press(&mut presenter, Named::End);
    assert_eq!(presenter.navigation().current(), 15);
    press(&mut presenter, Named::Home);
    assert_eq!(presenter.navigation().current(), 1);
}

#[test]
fn missing_slide_shows_fallback_and_keeps_navigating() {
    let dir = tempdir().expect("failed to create temp dir");
    write_slides(dir.path(), 2);
    let source = SlideSource::from_argument(&dir.path().to_string_lossy(), "png");
    let deck = Deck::new(3, source, Size::new(1280.0, 720.0)).expect("deck should open");

    let mut presenter = controller(deck, LayoutMode::Single);
    let effects = presenter.start();
    settle(&mut presenter, effects);

    let effects = presenter.handle(Event::GoTo(3));
    settle(&mut presenter, effects);
    assert!(matches!(
        presenter.surface().frame(3),
        Some(SlideFrame::Failed { .. })
    ));

    press(&mut presenter, Named::ArrowLeft);
    assert_eq!(presenter.navigation().current(), 2);
    assert!(matches!(
        presenter.surface().frame(2),
        Some(SlideFrame::Loaded(_))
    ));
}

#[test]
fn strip_centers_once_every_slide_settled() {
    let dir = tempdir().expect("failed to create temp dir");
    write_slides(dir.path(), 4);
    let source = SlideSource::from_argument(&dir.path().to_string_lossy(), "png");
    // Slide 5 is missing; its failure must not stall the initial centering.
    let deck = Deck::new(5, source, Size::new(1280.0, 720.0)).expect("deck should open");

    let mut presenter = controller(deck, LayoutMode::Row);
    let effects = presenter.start();
    let others = settle(&mut presenter, effects);

    let centers: Vec<_> = others
        .iter()
        .filter(|effect| matches!(effect, Effect::ScrollTo { axis: Axis::Horizontal, .. }))
        .collect();
    assert_eq!(centers.len(), 1);
    assert!(presenter
        .surface()
        .frames()
        .all(|(_, frame)| !frame.is_loading()));
}

#[test]
fn config_round_trip_and_corrupt_file_warning() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.deck.total = Some(15);
    config.display.layout = Some(LayoutMode::Column);
    config::save_to_path(&config, &path).expect("config should save");
    let loaded = config::load_from_path(&path).expect("config should load");
    assert_eq!(loaded, config);

    fs::write(&path, "[display\nlayout = ").expect("failed to corrupt config");
    let (fallback, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(fallback, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}
