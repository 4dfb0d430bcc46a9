// SPDX-License-Identifier: MPL-2.0
use iced_deck::app::{self, paths, Flags};
use iced_deck::config::LayoutMode;
use std::ffi::OsString;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `iced_deck=debug`).
const LOG_ENV: &str = "ICED_DECK_LOG";

const HELP: &str = "\
Usage: iced_deck [DECK_DIR_OR_PREFIX] [OPTIONS]

Presents the slides <prefix><n>.<ext>. A directory argument means <dir>/page_.

Options:
  --total N            Number of slides (discovered from disk when omitted)
  --ext EXT            Slide file extension (default: png)
  --start N            Slide shown first (default: 1)
  --layout MODE        single, row or column (default: single)
  --lang LOCALE        Interface language, e.g. en-US or fr
  --config-dir DIR     Directory holding settings.toml
  --i18n-dir DIR       Directory with extra Fluent .ftl translations
  -h, --help           Print this help
";

fn main() -> iced::Result {
    init_logging();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("iced_deck: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    tracing::debug!(?flags, "starting presenter");
    app::run(flags)
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second initialization only happens under test harnesses; ignore it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let total = args.opt_value_from_str("--total")?;
    let extension = args.opt_value_from_str("--ext")?;
    let start = args.opt_value_from_str("--start")?;
    let layout = args.opt_value_from_fn("--layout", |value| value.parse::<LayoutMode>())?;
    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let i18n_dir = args.opt_value_from_str("--i18n-dir")?;
    let deck = deck_argument(args.finish())?;

    Ok(Flags {
        deck,
        total,
        extension,
        start,
        layout,
        lang,
        config_dir,
        i18n_dir,
    })
}

/// Picks the deck from the arguments left after option parsing.
///
/// Anything that looks like an option was misspelled or unknown, and only
/// one deck can be presented.
fn deck_argument(free: Vec<OsString>) -> Result<Option<String>, pico_args::Error> {
    let mut free = free.into_iter();
    let deck = match free.next() {
        Some(arg) => arg.into_string().map_err(|_| pico_args::Error::NonUtf8Argument)?,
        None => return Ok(None),
    };

    let mut unused: Vec<String> = free
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    if deck.starts_with('-') {
        unused.insert(0, deck);
        return Err(pico_args::Error::UnusedArgsLeft(unused));
    }
    if !unused.is_empty() {
        return Err(pico_args::Error::UnusedArgsLeft(unused));
    }
    Ok(Some(deck))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(values.iter().map(OsString::from).collect())
    }

    #[test]
    fn deck_and_options_are_parsed() {
        let flags = parse_flags(args(&["--total", "15", "slides/page_", "--layout", "row"]))
            .expect("arguments should parse");
        assert_eq!(flags.deck.as_deref(), Some("slides/page_"));
        assert_eq!(flags.total, Some(15));
        assert_eq!(flags.layout, Some(LayoutMode::Row));
    }

    #[test]
    fn misspelled_option_is_not_taken_as_the_deck() {
        let err = parse_flags(args(&["--tottal", "15"])).unwrap_err();
        assert!(matches!(err, pico_args::Error::UnusedArgsLeft(ref left) if left[0] == "--tottal"));
    }

    #[test]
    fn second_deck_is_rejected() {
        let err = deck_argument(vec!["one/".into(), "two/".into()]).unwrap_err();
        assert!(matches!(err, pico_args::Error::UnusedArgsLeft(ref left) if left == &["two/"]));
        assert_eq!(deck_argument(Vec::new()).unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_deck_is_reported() {
        use std::os::unix::ffi::OsStringExt;

        let err = deck_argument(vec![OsString::from_vec(vec![0x66, 0x6f, 0xff])]).unwrap_err();
        assert!(matches!(err, pico_args::Error::NonUtf8Argument));
    }
}
