// SPDX-License-Identifier: MPL-2.0
//! Deck controller: turns viewer events into navigation, fit and surface
//! updates.
//!
//! The controller owns every piece of presenter state that is not a pure
//! widget concern. It never touches Iced directly: events come in through
//! [`DeckController::handle`] and everything that needs the runtime (decode
//! tasks, scroll operations, window mode requests) goes out as [`Effect`]s.
//!
//! All navigation, whatever its source, funnels through
//! [`NavigationState::go_to`] and then `transition`, which re-points the
//! surface and notifies listeners.

use crate::config::{
    Config, LayoutMode, ScrollSync, DEFAULT_RESIZE_DEBOUNCE_MS, DEFAULT_SCROLL_DEBOUNCE_MS,
    DEFAULT_SWIPE_THRESHOLD_PX, PROGRESS_BAR_HEIGHT, STRIP_GAP, STRIP_PADDING_FULLSCREEN,
    STRIP_PADDING_WINDOWED, TOOLBAR_HEIGHT,
};
use crate::deck::jump::JumpInput;
use crate::deck::{Deck, NavigationListener, NavigationState, ProgressMode, SlideChange};
use crate::error::Result;
use crate::input::{Action, Debouncer, KeyBindings, Swipe, SwipeRecognizer};
use crate::platform::{Capabilities, FullscreenMethod, FullscreenRequest, FullscreenState};
use crate::surface::{LoadPurpose, LoadRequest, SlideImage, SlideSurface};
use crate::ui::overlay::{Overlay, OverlayStack};
use crate::viewport::{Axis, StripLayout, ViewportFit, ZoomState, ZoomStep};
use iced::keyboard::{Key, Modifiers};
use iced::touch::Finger;
use iced::{Rectangle, Size};
use std::time::Instant;

/// Presenter settings derived from the configuration and CLI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub layout: LayoutMode,
    pub fit: ViewportFit,
    pub progress_mode: ProgressMode,
    pub zoom_step: ZoomStep,
    pub scroll_sync: ScrollSync,
    pub swipe_threshold: f32,
    pub scroll_debounce_ms: u64,
    pub resize_debounce_ms: u64,
    pub bindings: KeyBindings,
}

impl Settings {
    #[must_use]
    pub fn from_config(config: &Config, design: Size) -> Self {
        let display = &config.display;
        let input = &config.input;

        Self {
            layout: display.layout.unwrap_or_default(),
            fit: ViewportFit::new(
                design,
                display.fit_mode.unwrap_or_default(),
                display.allow_upscale.unwrap_or(false),
            ),
            progress_mode: display.progress_mode.unwrap_or_default(),
            zoom_step: display.zoom_step.map(ZoomStep::new).unwrap_or_default(),
            scroll_sync: display.scroll_sync.unwrap_or_default(),
            swipe_threshold: input.swipe_threshold.unwrap_or(DEFAULT_SWIPE_THRESHOLD_PX),
            scroll_debounce_ms: input.scroll_debounce_ms.unwrap_or(DEFAULT_SCROLL_DEBOUNCE_MS),
            resize_debounce_ms: input.resize_debounce_ms.unwrap_or(DEFAULT_RESIZE_DEBOUNCE_MS),
            bindings: KeyBindings::from_config(input),
        }
    }
}

/// Everything the viewer can report to the controller.
#[derive(Debug, Clone)]
pub enum Event {
    Key { key: Key, modifiers: Modifiers },
    Action(Action),
    GoTo(usize),
    OverviewSelected(usize),
    CloseOverlay(Overlay),
    JumpChanged(String),
    JumpSubmitted,
    ZoomChanged(f32),
    FingerPressed { finger: Finger, x: f32 },
    FingerLifted { finger: Finger, x: f32 },
    FingerLost,
    /// The strip scrolled; `viewport` is the visible area in content coordinates.
    Scrolled { viewport: Rectangle, at: Instant },
    Resized { window: Size, at: Instant },
    Tick(Instant),
    FullscreenChanged(bool),
    SlideLoaded {
        number: usize,
        purpose: LoadPurpose,
        result: Result<SlideImage>,
    },
}

/// Work for the application shell.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Decode a slide and report back with [`Event::SlideLoaded`].
    Load(LoadRequest),
    /// Snap the strip to a relative offset along `axis`.
    ScrollTo { axis: Axis, offset: f32 },
    Fullscreen(FullscreenRequest),
    /// Ask the window system which mode it is in and report it with
    /// [`Event::FullscreenChanged`]. Covers mode changes made outside the app.
    QueryFullscreen(FullscreenMethod),
    ToggleTheme,
}

/// Whether a transition should scroll the strip to the new slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Command,
    /// Startup and scroll sync: the strip is already where it should be.
    Passive,
}

/// Mediator between viewer events and presenter state.
pub struct DeckController<S: SlideSurface> {
    deck: Deck,
    navigation: NavigationState,
    surface: S,
    listeners: Vec<Box<dyn NavigationListener>>,
    settings: Settings,
    capabilities: Capabilities,
    fullscreen: FullscreenState,
    zoom: ZoomState,
    swipe: SwipeRecognizer,
    scroll_debounce: Debouncer,
    resize_debounce: Debouncer,
    overlays: OverlayStack,
    jump: JumpInput,
    window: Size,
    fit_scale: f32,
    scroll_viewport: Option<Rectangle>,
    highlighted: Option<usize>,
    /// Slide the strip was last scrolled to by the presenter itself.
    centered_on: Option<usize>,
    awaiting_initial_center: bool,
}

impl<S: SlideSurface> DeckController<S> {
    /// Creates a controller positioned on `start` (or slide 1 if `start` is
    /// outside the deck). Nothing is loaded until [`Self::start`].
    pub fn new(
        deck: Deck,
        surface: S,
        settings: Settings,
        capabilities: Capabilities,
        start: usize,
        window: Size,
    ) -> Self {
        let navigation = NavigationState::starting_at(deck.total_non_zero(), start);
        Self {
            navigation,
            surface,
            listeners: Vec::new(),
            capabilities,
            fullscreen: FullscreenState::default(),
            zoom: ZoomState::with_step(settings.zoom_step),
            swipe: SwipeRecognizer::new(settings.swipe_threshold),
            scroll_debounce: Debouncer::from_millis(settings.scroll_debounce_ms),
            resize_debounce: Debouncer::from_millis(settings.resize_debounce_ms),
            overlays: OverlayStack::default(),
            jump: JumpInput::default(),
            window,
            fit_scale: 1.0,
            scroll_viewport: None,
            highlighted: None,
            centered_on: None,
            awaiting_initial_center: settings.layout.is_strip(),
            settings,
            deck,
        }
    }

    pub fn add_listener(&mut self, listener: Box<dyn NavigationListener>) {
        self.listeners.push(listener);
    }

    /// Attaches the deck to the surface and shows the start slide.
    pub fn start(&mut self) -> Vec<Effect> {
        let mut effects: Vec<Effect> = self
            .surface
            .attach(&self.deck)
            .into_iter()
            .map(Effect::Load)
            .collect();

        self.refit();

        let current = self.navigation.current();
        let change = self.navigation.go_to(current);
        effects.extend(self.transition(change, Source::Passive));
        effects
    }

    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Key { key, modifiers } => {
                match self.settings.bindings.dispatch(&key, modifiers) {
                    Some(action) => self.perform(action),
                    None => Vec::new(),
                }
            }
            Event::Action(action) => self.perform(action),
            Event::GoTo(number) => {
                let change = self.navigation.go_to(number);
                self.transition(change, Source::Command)
            }
            Event::OverviewSelected(number) => {
                self.overlays.close(Overlay::Overview);
                let change = self.navigation.go_to(number);
                self.transition(change, Source::Command)
            }
            Event::CloseOverlay(overlay) => {
                self.overlays.close(overlay);
                Vec::new()
            }
            Event::JumpChanged(value) => {
                self.jump.on_changed(value);
                Vec::new()
            }
            Event::JumpSubmitted => match self.jump.submit(self.navigation.total()) {
                Some(number) => {
                    let change = self.navigation.go_to(number);
                    self.transition(change, Source::Command)
                }
                None => Vec::new(),
            },
            Event::ZoomChanged(percent) => {
                if self.zoom.set_percent(percent) {
                    self.rescale()
                } else {
                    Vec::new()
                }
            }
            Event::FingerPressed { finger, x } => {
                self.swipe.finger_pressed(finger, x);
                Vec::new()
            }
            Event::FingerLifted { finger, x } => match self.swipe.finger_lifted(finger, x) {
                Some(Swipe::Next) => self.perform(Action::Next),
                Some(Swipe::Previous) => self.perform(Action::Previous),
                None => Vec::new(),
            },
            Event::FingerLost => {
                self.swipe.finger_lost();
                Vec::new()
            }
            Event::Scrolled { viewport, at } => {
                if self.settings.layout.is_strip() {
                    self.scroll_viewport = Some(viewport);
                    self.scroll_debounce.schedule(at);
                }
                Vec::new()
            }
            Event::Resized { window, at } => {
                self.window = window;
                self.refit();
                if self.settings.layout.is_strip() {
                    self.resize_debounce.schedule(at);
                }
                match self.capabilities.fullscreen {
                    FullscreenMethod::Unavailable => Vec::new(),
                    method => vec![Effect::QueryFullscreen(method)],
                }
            }
            Event::Tick(now) => self.tick(now),
            Event::FullscreenChanged(active) => {
                if self.fullscreen.on_platform_change(active) {
                    self.refit();
                    if self.settings.layout.is_strip() {
                        self.resize_debounce.schedule(Instant::now());
                    }
                }
                Vec::new()
            }
            Event::SlideLoaded {
                number,
                purpose,
                result,
            } => self.slide_loaded(number, purpose, result),
        }
    }

    fn perform(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Previous => {
                let change = self.navigation.previous();
                self.transition(change, Source::Command)
            }
            Action::Next => {
                let change = self.navigation.next();
                self.transition(change, Source::Command)
            }
            Action::First => {
                let change = self.navigation.first();
                self.transition(change, Source::Command)
            }
            Action::Last => {
                let change = self.navigation.last();
                self.transition(change, Source::Command)
            }
            Action::ToggleFullscreen => self
                .fullscreen
                .toggle(&self.capabilities)
                .map(Effect::Fullscreen)
                .into_iter()
                .collect(),
            Action::ToggleTheme => vec![Effect::ToggleTheme],
            Action::TogglePrint => self.toggle_overlay(Overlay::Print),
            Action::ToggleOverview => self.toggle_overlay(Overlay::Overview),
            Action::ToggleHelp => self.toggle_overlay(Overlay::Help),
            Action::Escape => {
                if self.overlays.close_top().is_some() {
                    return Vec::new();
                }
                self.fullscreen
                    .exit(&self.capabilities)
                    .map(Effect::Fullscreen)
                    .into_iter()
                    .collect()
            }
            Action::ZoomIn => self.zoom_with(ZoomState::zoom_in),
            Action::ZoomOut => self.zoom_with(ZoomState::zoom_out),
            Action::ZoomReset => self.zoom_with(ZoomState::reset),
        }
    }

    fn toggle_overlay(&mut self, overlay: Overlay) -> Vec<Effect> {
        self.overlays.toggle(overlay);
        Vec::new()
    }

    fn zoom_with(&mut self, apply: fn(&mut ZoomState) -> bool) -> Vec<Effect> {
        if apply(&mut self.zoom) {
            self.rescale()
        } else {
            Vec::new()
        }
    }

    fn rescale(&mut self) -> Vec<Effect> {
        self.refit();
        self.center_current().into_iter().collect()
    }

    /// Re-points the surface after a successful transition.
    fn transition(&mut self, change: Option<SlideChange>, source: Source) -> Vec<Effect> {
        let Some(change) = change else {
            return Vec::new();
        };

        tracing::debug!(
            previous = change.previous,
            current = change.current,
            total = change.total,
            "slide changed"
        );

        for listener in &mut self.listeners {
            listener.slide_changed(&change);
        }

        self.highlighted = None;

        let mut effects = Vec::new();
        let path = self.deck.source().resolve(change.current);
        if let Some(request) = self.surface.show(change.current, path) {
            effects.push(Effect::Load(request));
        }
        effects.extend(
            self.surface
                .prefetch(&self.deck, change.current)
                .into_iter()
                .map(Effect::Load),
        );

        if source == Source::Command {
            // A scroll still waiting for its quiet period predates the command.
            self.scroll_debounce.cancel();
            if !self.awaiting_initial_center {
                effects.extend(self.center_current());
            }
        }
        effects
    }

    fn slide_loaded(
        &mut self,
        number: usize,
        purpose: LoadPurpose,
        result: Result<SlideImage>,
    ) -> Vec<Effect> {
        self.surface.finish_load(number, purpose, result);

        if self.awaiting_initial_center && self.surface.all_settled() {
            self.awaiting_initial_center = false;
            return self.center_current().into_iter().collect();
        }
        Vec::new()
    }

    fn tick(&mut self, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();

        if self.scroll_debounce.poll(now) {
            effects.extend(self.sync_scroll());
        }
        if self.resize_debounce.poll(now) {
            effects.extend(self.center_current());
        }
        effects
    }

    fn sync_scroll(&mut self) -> Vec<Effect> {
        let (Some(viewport), Some(layout)) = (self.scroll_viewport, self.strip_layout()) else {
            return Vec::new();
        };
        let Some(closest) = layout.closest_slide(viewport) else {
            return Vec::new();
        };

        let current = self.navigation.current();
        match self.settings.scroll_sync {
            ScrollSync::Navigate if closest != current => {
                // Near the ends the centering offset is clamped, so another
                // slide can end up closer to the middle than the one we
                // scrolled to. Keep it while it is still fully on screen.
                if self.centered_on == Some(current) && layout.is_fully_visible(current, viewport) {
                    return Vec::new();
                }
                self.centered_on = None;
                let change = self.navigation.go_to(closest);
                self.transition(change, Source::Passive)
            }
            ScrollSync::Navigate => Vec::new(),
            ScrollSync::Highlight => {
                self.highlighted = (closest != self.navigation.current()).then_some(closest);
                Vec::new()
            }
        }
    }

    fn center_current(&mut self) -> Option<Effect> {
        let layout = self.strip_layout()?;
        let current = self.navigation.current();
        let offset = layout.centering_offset(current, self.available_size())?;
        self.centered_on = Some(current);
        Some(Effect::ScrollTo {
            axis: layout.axis(),
            offset,
        })
    }

    fn refit(&mut self) {
        let mut available = self.available_size();
        if self.settings.layout.is_strip() {
            let padding = 2.0 * self.strip_padding();
            available = Size::new(available.width - padding, available.height - padding);
        }
        self.fit_scale = self.settings.fit.scale_for(available);
        let scale = self.scale();
        tracing::debug!(
            width = available.width,
            height = available.height,
            scale,
            "viewport refit"
        );
        self.surface.apply_scale(scale);
    }

    /// Area left for slides: the window minus the toolbar and progress bar,
    /// or the whole window in fullscreen.
    #[must_use]
    pub fn available_size(&self) -> Size {
        if self.fullscreen.is_active() {
            self.window
        } else {
            let chrome = TOOLBAR_HEIGHT + PROGRESS_BAR_HEIGHT;
            Size::new(self.window.width, (self.window.height - chrome).max(0.0))
        }
    }

    #[must_use]
    pub fn strip_padding(&self) -> f32 {
        if self.fullscreen.is_active() {
            STRIP_PADDING_FULLSCREEN
        } else {
            STRIP_PADDING_WINDOWED
        }
    }

    /// Strip geometry at the current scale; `None` in the single layout.
    #[must_use]
    pub fn strip_layout(&self) -> Option<StripLayout> {
        let axis = match self.settings.layout {
            LayoutMode::Single => return None,
            LayoutMode::Row => Axis::Horizontal,
            LayoutMode::Column => Axis::Vertical,
        };
        Some(StripLayout::new(
            axis,
            self.slide_size(),
            STRIP_GAP,
            self.strip_padding(),
            self.deck.total(),
        ))
    }

    /// Effective surface scale: fit scale times zoom.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.fit_scale * self.zoom.factor()
    }

    /// Size a slide is drawn at.
    #[must_use]
    pub fn slide_size(&self) -> Size {
        self.settings.fit.scaled_design(self.scale())
    }

    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.scroll_debounce.is_pending() || self.resize_debounce.is_pending()
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    #[must_use]
    pub fn overlays(&self) -> &OverlayStack {
        &self.overlays
    }

    #[must_use]
    pub fn jump(&self) -> &JumpInput {
        &self.jump
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_active()
    }

    /// Slide highlighted by scrolling in highlight mode.
    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.navigation.progress(self.settings.progress_mode)
    }
}

/// Logs every transition at `info`.
pub struct TraceListener;

impl NavigationListener for TraceListener {
    fn slide_changed(&mut self, change: &SlideChange) {
        tracing::info!(slide = change.current, total = change.total, "presenting slide");
    }
}
