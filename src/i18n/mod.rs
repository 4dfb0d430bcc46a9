// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded at build time. A directory
//! passed with `--i18n-dir` can add locales or replace embedded ones.
//! The locale is chosen from the CLI, then the config file, then the
//! system settings, falling back to `en-US`.

pub mod fluent;
