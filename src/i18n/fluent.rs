// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
    default_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Loads the embedded translations, then any `.ftl` file in `i18n_dir`
    /// (which replaces the embedded file of the same locale).
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            insert_bundle(&mut bundles, filename, source);
        }

        if let Some(dir) = i18n_dir {
            load_directory(&mut bundles, Path::new(&dir));
        }

        let mut available_locales: Vec<_> = bundles.keys().cloned().collect();
        available_locales.sort_by_key(ToString::to_string);

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE
            .parse()
            .unwrap_or_else(|_| LanguageIdentifier::default());
        let current_locale = resolve_locale(
            cli_lang,
            config.general.language.as_deref(),
            sys_locale::get_locale(),
            &available_locales,
        )
        .unwrap_or_else(|| default_locale.clone());

        tracing::debug!(locale = %current_locale, "selected UI locale");

        Self {
            bundles,
            available_locales,
            current_locale,
            default_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.to_string());
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        for locale in [&self.current_locale, &self.default_locale] {
            let Some(bundle) = self.bundles.get(locale) else {
                continue;
            };
            let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) else {
                continue;
            };
            let mut errors = vec![];
            let value = bundle.format_pattern(pattern, args, &mut errors);
            if errors.is_empty() {
                return value.to_string();
            }
        }
        format!("MISSING: {}", key)
    }
}

fn insert_bundle(
    bundles: &mut HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    filename: &str,
    source: String,
) {
    let Some(locale) = filename
        .strip_suffix(".ftl")
        .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
    else {
        return;
    };

    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((resource, errors)) => {
            tracing::warn!(file = filename, errors = errors.len(), "translation file has syntax errors");
            resource
        }
    };

    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(file = filename, errors = errors.len(), "duplicate translation keys");
    }
    bundles.insert(locale, bundle);
}

fn load_directory(
    bundles: &mut HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    dir: &Path,
) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(dir = %dir.display(), error = %err, "cannot read translation directory");
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !filename.ends_with(".ftl") {
            continue;
        }
        match fs::read_to_string(&path) {
            Ok(source) => insert_bundle(bundles, filename, source),
            Err(err) => tracing::warn!(file = filename, error = %err, "cannot read translation file"),
        }
    }
}

/// Picks the UI locale: CLI, then config, then the OS locale.
///
/// A candidate matches an available locale exactly, or by language alone
/// (`fr-CA` selects `fr`).
fn resolve_locale(
    cli_lang: Option<String>,
    config_lang: Option<&str>,
    os_lang: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    [cli_lang.as_deref(), config_lang, os_lang.as_deref()]
        .into_iter()
        .flatten()
        .filter_map(|candidate| candidate.parse::<LanguageIdentifier>().ok())
        .find_map(|candidate| match_available(&candidate, available))
}

fn match_available(
    candidate: &LanguageIdentifier,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    available
        .iter()
        .find(|locale| *locale == candidate)
        .or_else(|| {
            available
                .iter()
                .find(|locale| locale.language == candidate.language)
        })
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn cli_wins_over_config() {
        let lang = resolve_locale(Some("fr".into()), Some("en-US"), None, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn config_used_without_cli() {
        let lang = resolve_locale(None, Some("fr"), Some("en-US".into()), &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn os_locale_matches_by_language() {
        let lang = resolve_locale(None, None, Some("fr-CA".into()), &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn unknown_locales_fall_through() {
        let lang = resolve_locale(Some("de".into()), Some("zz"), None, &available());
        assert_eq!(lang, None);
    }

    #[test]
    fn embedded_translations_cover_both_locales() {
        let i18n = I18n::new(Some("fr".into()), None, &Config::default());
        assert_eq!(i18n.current_locale().to_string(), "fr");
        assert!(!i18n.tr("window-title").starts_with("MISSING"));

        let english = I18n::new(Some("en-US".into()), None, &Config::default());
        assert_eq!(
            english.tr_with_args("slide-counter", &[("current", "7"), ("total", "15")]),
            "7 / 15"
        );
    }

    #[test]
    fn missing_key_is_flagged() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn directory_override_replaces_embedded_locale() {
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::write(dir.path().join("en-US.ftl"), "window-title = Custom deck\n")
            .expect("failed to write ftl");

        let i18n = I18n::new(
            Some("en-US".into()),
            Some(dir.path().to_string_lossy().into_owned()),
            &Config::default(),
        );
        assert_eq!(i18n.tr("window-title"), "Custom deck");
    }
}
