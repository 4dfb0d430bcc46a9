// SPDX-License-Identifier: MPL-2.0
//! Fullscreen state machine.
//!
//! Requests are fire-and-forget: `toggle` only describes what to ask the
//! window system for. The state flips when the window system reports the
//! new mode through [`FullscreenState::on_platform_change`], so a refused
//! request never leaves the presenter believing it is fullscreen.

use super::{Capabilities, FullscreenMethod};

/// A request to hand to the window system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenRequest {
    Enter(FullscreenMethod),
    Exit(FullscreenMethod),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FullscreenState {
    active: bool,
}

impl FullscreenState {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Request that switches to the opposite mode, if the platform allows it.
    #[must_use]
    pub fn toggle(&self, capabilities: &Capabilities) -> Option<FullscreenRequest> {
        match capabilities.fullscreen {
            FullscreenMethod::Unavailable => None,
            method if self.active => Some(FullscreenRequest::Exit(method)),
            method => Some(FullscreenRequest::Enter(method)),
        }
    }

    /// Request that leaves fullscreen; `None` when already windowed.
    #[must_use]
    pub fn exit(&self, capabilities: &Capabilities) -> Option<FullscreenRequest> {
        if self.active {
            self.toggle(capabilities)
        } else {
            None
        }
    }

    /// Records the mode reported by the window system. Returns whether it changed.
    pub fn on_platform_change(&mut self, active: bool) -> bool {
        let changed = self.active != active;
        self.active = active;
        if changed {
            tracing::debug!(active, "fullscreen state changed");
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW_MODE: Capabilities = Capabilities {
        fullscreen: FullscreenMethod::WindowMode,
    };

    #[test]
    fn toggle_does_not_change_state() {
        let state = FullscreenState::default();
        assert_eq!(
            state.toggle(&WINDOW_MODE),
            Some(FullscreenRequest::Enter(FullscreenMethod::WindowMode))
        );
        assert!(!state.is_active());
    }

    #[test]
    fn platform_report_flips_state() {
        let mut state = FullscreenState::default();
        assert!(state.on_platform_change(true));
        assert!(!state.on_platform_change(true));
        assert_eq!(
            state.toggle(&WINDOW_MODE),
            Some(FullscreenRequest::Exit(FullscreenMethod::WindowMode))
        );
    }

    #[test]
    fn exit_only_when_active() {
        let mut state = FullscreenState::default();
        assert_eq!(state.exit(&WINDOW_MODE), None);
        state.on_platform_change(true);
        assert!(state.exit(&WINDOW_MODE).is_some());
    }

    #[test]
    fn unavailable_platform_yields_no_request() {
        let caps = Capabilities {
            fullscreen: FullscreenMethod::Unavailable,
        };
        assert_eq!(FullscreenState::default().toggle(&caps), None);
    }
}
