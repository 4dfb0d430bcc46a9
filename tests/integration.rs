// SPDX-License-Identifier: MPL-2.0
use iced_deck::config::{self, Config, LayoutMode, ScrollSync, DEFAULT_ZOOM_STEP_PERCENT};
use iced_deck::i18n::fluent::I18n;
use iced_deck::viewport::FitMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &config_path).expect("Failed to write initial config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("toolbar-overview"), "Overview");

    let mut french = loaded;
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &config_path).expect("Failed to write french config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("toolbar-overview"), "Vue d'ensemble");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_language_wins_over_config() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());

    let i18n = I18n::new(Some("en-US".to_string()), None, &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_partial_config_uses_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");
    std::fs::write(
        &config_path,
        "[deck]\ntotal = 15\n\n[display]\nlayout = \"row\"\nscroll_sync = \"highlight\"\n",
    )
    .expect("Failed to write config");

    let config = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(config.deck.total, Some(15));
    assert_eq!(config.display.layout, Some(LayoutMode::Row));
    assert_eq!(config.display.scroll_sync, Some(ScrollSync::Highlight));
    assert_eq!(config.display.fit_mode, None);
    assert_eq!(config.display.fit_mode.unwrap_or_default(), FitMode::Contain);
    assert_eq!(config.display.zoom_step, Some(DEFAULT_ZOOM_STEP_PERCENT));
}
