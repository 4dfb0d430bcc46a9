// SPDX-License-Identifier: MPL-2.0
//! `iced_deck` is a slide-deck presenter built with the Iced GUI framework.
//!
//! A deck is a numbered series of pre-rendered slide files
//! (`<base-path><n>.<ext>`, raster or SVG). The presenter shows one slide
//! at a time or every slide in a scrollable strip, scales them from their
//! design resolution to the window, and navigates with buttons, keys,
//! swipes, scrolling, clicks or a typed slide number.
//!
//! The presenter logic lives in [`controller::DeckController`], which has no
//! Iced runtime dependency and is driven by plain events; [`app`] wires it
//! into an Iced application.

#![doc(html_root_url = "https://docs.rs/iced_deck/0.1.0")]

pub mod app;
pub mod config;
pub mod controller;
pub mod deck;
pub mod error;
pub mod i18n;
pub mod input;
pub mod platform;
pub mod surface;
pub mod ui;
pub mod viewport;

#[cfg(test)]
mod test_utils;
