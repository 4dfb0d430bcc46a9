// SPDX-License-Identifier: MPL-2.0
//! Keyboard dispatch: maps key presses to presenter actions.

use crate::config::InputConfig;
use iced::keyboard::{key::Named, Key, Modifiers};

/// Everything a key press can ask the presenter to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Previous,
    Next,
    First,
    Last,
    ToggleFullscreen,
    ToggleTheme,
    TogglePrint,
    ToggleOverview,
    ToggleHelp,
    /// Closes the topmost overlay, or leaves fullscreen when none is open.
    Escape,
    ZoomIn,
    ZoomOut,
    ZoomReset,
}

/// Which optional key groups are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub theme: bool,
    pub print: bool,
    pub overview: bool,
    pub help: bool,
    pub zoom: bool,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            theme: true,
            print: true,
            overview: true,
            help: true,
            zoom: true,
        }
    }
}

impl KeyBindings {
    /// Reads the extras toggles; a missing toggle means enabled.
    #[must_use]
    pub fn from_config(input: &InputConfig) -> Self {
        Self {
            theme: input.theme_key.unwrap_or(true),
            print: input.print_key.unwrap_or(true),
            overview: input.overview_key.unwrap_or(true),
            help: input.help_key.unwrap_or(true),
            zoom: input.zoom_keys.unwrap_or(true),
        }
    }

    /// Resolves a key press.
    ///
    /// Returns `None` for keys the presenter does not claim and for chords
    /// involving Ctrl, Cmd or Alt. Shift is allowed since `?` and `+` need it.
    ///
    /// Keys typed into a focused text field never get here: the widget
    /// captures them and the event subscription drops captured key presses.
    #[must_use]
    pub fn dispatch(&self, key: &Key, modifiers: Modifiers) -> Option<Action> {
        if modifiers.control() || modifiers.logo() || modifiers.alt() {
            return None;
        }

        match key {
            Key::Named(named) => Self::dispatch_named(*named),
            Key::Character(c) => self.dispatch_character(c.as_str()),
            Key::Unidentified => None,
        }
    }

    fn dispatch_named(named: Named) -> Option<Action> {
        match named {
            Named::ArrowLeft | Named::ArrowUp | Named::PageUp => Some(Action::Previous),
            Named::ArrowRight | Named::ArrowDown | Named::PageDown | Named::Space => {
                Some(Action::Next)
            }
            Named::Home => Some(Action::First),
            Named::End => Some(Action::Last),
            Named::F11 => Some(Action::ToggleFullscreen),
            Named::Escape => Some(Action::Escape),
            _ => None,
        }
    }

    fn dispatch_character(&self, c: &str) -> Option<Action> {
        match c {
            "f" | "F" => Some(Action::ToggleFullscreen),
            " " => Some(Action::Next),
            "t" | "T" if self.theme => Some(Action::ToggleTheme),
            "p" | "P" if self.print => Some(Action::TogglePrint),
            "o" | "O" if self.overview => Some(Action::ToggleOverview),
            "?" if self.help => Some(Action::ToggleHelp),
            "+" | "=" if self.zoom => Some(Action::ZoomIn),
            "-" | "_" if self.zoom => Some(Action::ZoomOut),
            "0" if self.zoom => Some(Action::ZoomReset),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(n: Named) -> Key {
        Key::Named(n)
    }

    fn character(c: &str) -> Key {
        Key::Character(c.into())
    }

    fn press(bindings: &KeyBindings, key: &Key) -> Option<Action> {
        bindings.dispatch(key, Modifiers::default())
    }

    #[test]
    fn navigation_keys_are_claimed() {
        let bindings = KeyBindings::default();
        for n in [Named::ArrowLeft, Named::ArrowUp, Named::PageUp] {
            assert_eq!(press(&bindings, &named(n)), Some(Action::Previous));
        }
        for n in [Named::ArrowRight, Named::ArrowDown, Named::PageDown, Named::Space] {
            assert_eq!(press(&bindings, &named(n)), Some(Action::Next));
        }
        assert_eq!(press(&bindings, &named(Named::Home)), Some(Action::First));
        assert_eq!(press(&bindings, &named(Named::End)), Some(Action::Last));
    }

    #[test]
    fn extras_are_claimed_by_default() {
        let bindings = KeyBindings::default();
        assert_eq!(press(&bindings, &character("f")), Some(Action::ToggleFullscreen));
        assert_eq!(press(&bindings, &named(Named::F11)), Some(Action::ToggleFullscreen));
        assert_eq!(press(&bindings, &character("t")), Some(Action::ToggleTheme));
        assert_eq!(press(&bindings, &character("p")), Some(Action::TogglePrint));
        assert_eq!(press(&bindings, &character("o")), Some(Action::ToggleOverview));
        assert_eq!(press(&bindings, &character("?")), Some(Action::ToggleHelp));
        assert_eq!(press(&bindings, &character("=")), Some(Action::ZoomIn));
        assert_eq!(press(&bindings, &character("_")), Some(Action::ZoomOut));
        assert_eq!(press(&bindings, &character("0")), Some(Action::ZoomReset));
        assert_eq!(press(&bindings, &named(Named::Escape)), Some(Action::Escape));
    }

    #[test]
    fn disabled_extras_are_not_claimed() {
        let bindings = KeyBindings {
            theme: false,
            zoom: false,
            ..KeyBindings::default()
        };
        assert_eq!(press(&bindings, &character("t")), None);
        assert_eq!(press(&bindings, &character("+")), None);
        assert_eq!(press(&bindings, &character("o")), Some(Action::ToggleOverview));
    }

    #[test]
    fn unrelated_keys_pass_through() {
        let bindings = KeyBindings::default();
        assert_eq!(press(&bindings, &character("x")), None);
        assert_eq!(press(&bindings, &named(Named::Tab)), None);
    }

    #[test]
    fn command_and_alt_chords_are_ignored() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.dispatch(&character("f"), Modifiers::CTRL), None);
        assert_eq!(bindings.dispatch(&character("p"), Modifiers::LOGO), None);
        assert_eq!(bindings.dispatch(&named(Named::ArrowRight), Modifiers::ALT), None);
        assert_eq!(
            bindings.dispatch(&character("?"), Modifiers::SHIFT),
            Some(Action::ToggleHelp)
        );
    }

    #[test]
    fn config_toggles_default_to_enabled() {
        let input = InputConfig {
            help_key: Some(false),
            theme_key: None,
            ..InputConfig::default()
        };
        let bindings = KeyBindings::from_config(&input);
        assert!(!bindings.help);
        assert!(bindings.theme);
    }
}
