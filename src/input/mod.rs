// SPDX-License-Identifier: MPL-2.0
//! Input recognition: keyboard dispatch, touch swipes and event debouncing.

pub mod debounce;
pub mod gesture;
pub mod keyboard;

pub use debounce::Debouncer;
pub use gesture::{Swipe, SwipeRecognizer};
pub use keyboard::{Action, KeyBindings};
