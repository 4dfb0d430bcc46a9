// SPDX-License-Identifier: MPL-2.0
//! Platform capabilities, resolved once at startup.
//!
//! The window system may or may not grant exclusive fullscreen. Rather
//! than trying one request after another every time the user presses `f`,
//! the probe is queried once and the chosen method is stored in
//! [`Capabilities`] for the rest of the session.

pub mod fullscreen;

pub use fullscreen::{FullscreenRequest, FullscreenState};

/// Optional platform features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    /// Borderless window covering the whole monitor.
    ExclusiveFullscreen,
    /// Maximized decorated window.
    Maximize,
}

/// Answers which features the current platform offers.
pub trait PlatformProbe {
    fn supports(&self, feature: Feature) -> bool;
}

/// How a fullscreen toggle is carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenMethod {
    /// `window::Mode::Fullscreen` / `window::Mode::Windowed`.
    WindowMode,
    /// Maximize / restore the window.
    Maximize,
    /// Fullscreen requests are ignored.
    Unavailable,
}

/// Capabilities selected for this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub fullscreen: FullscreenMethod,
}

impl Capabilities {
    /// Picks the best available method for each capability.
    pub fn resolve(probe: &dyn PlatformProbe) -> Self {
        let fullscreen = if probe.supports(Feature::ExclusiveFullscreen) {
            FullscreenMethod::WindowMode
        } else if probe.supports(Feature::Maximize) {
            FullscreenMethod::Maximize
        } else {
            FullscreenMethod::Unavailable
        };

        tracing::debug!(?fullscreen, "resolved platform capabilities");
        Self { fullscreen }
    }
}

/// Probe for desktop window systems.
///
/// Exclusive fullscreen can be switched off in the `[fullscreen]` config
/// section, in which case toggling maximizes the window instead.
#[derive(Debug, Clone, Copy)]
pub struct DesktopProbe {
    pub fullscreen_enabled: bool,
}

impl PlatformProbe for DesktopProbe {
    fn supports(&self, feature: Feature) -> bool {
        match feature {
            Feature::ExclusiveFullscreen => self.fullscreen_enabled,
            Feature::Maximize => true,
        }
    }
}
