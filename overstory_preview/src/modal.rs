// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard state for the fullscreen preview overlay.
//!
//! [`ModalInteractionController`] is independent of the drag engine. It only
//! tracks whether the overlay is open and the current zoom, and turns key
//! presses into [`ModalAction`]s for the caller to apply.
//!
//! While open:
//! - `Escape` closes the overlay.
//! - `+` / `=` zoom in by one step, `-` zooms out; zoom stays within
//!   [`ZoomConfig::min`]..=[`ZoomConfig::max`].
//! - `0` resets zoom to [`ZoomConfig::default_zoom`].
//!
//! While closed, the configured toggle key (default `m`) flips the surface
//! between normal and minimized.

use ui_events::keyboard::{Key, NamedKey};

/// Zoom limits and step for the overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Smallest zoom factor.
    pub min: f64,
    /// Largest zoom factor.
    pub max: f64,
    /// Amount added or removed per key press.
    pub step: f64,
    /// Zoom used on open and on reset.
    pub default_zoom: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min: 0.3,
            max: 1.5,
            step: 0.1,
            default_zoom: 0.8,
        }
    }
}

/// What a key press asks the caller to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ModalAction {
    /// The key means nothing in the current state.
    None,
    /// The overlay was closed.
    Close,
    /// Zoom changed to the contained value.
    Zoom(f64),
    /// Flip the surface size mode.
    ToggleSizeMode,
}

/// Open/closed and zoom state of the fullscreen overlay.
#[derive(Clone, Debug)]
pub struct ModalInteractionController {
    config: ZoomConfig,
    toggle_key: Key,
    open: bool,
    zoom: f64,
}

impl Default for ModalInteractionController {
    fn default() -> Self {
        Self::new(ZoomConfig::default(), Key::Character("m".into()))
    }
}

impl ModalInteractionController {
    /// Creates a closed overlay controller.
    #[must_use]
    pub fn new(config: ZoomConfig, toggle_key: Key) -> Self {
        Self {
            zoom: config.default_zoom,
            config,
            toggle_key,
            open: false,
        }
    }

    /// Returns `true` while the overlay is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Opens the overlay at the default zoom. Returns `false` if already open.
    pub fn open(&mut self) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        self.zoom = self.config.default_zoom;
        true
    }

    /// Closes the overlay. Returns `false` if already closed.
    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }

    /// Interprets a key press.
    pub fn handle_key(&mut self, key: &Key) -> ModalAction {
        if !self.open {
            return if *key == self.toggle_key {
                ModalAction::ToggleSizeMode
            } else {
                ModalAction::None
            };
        }
        match key {
            Key::Named(NamedKey::Escape) => {
                self.close();
                ModalAction::Close
            }
            Key::Character(c) => match c.as_str() {
                "+" | "=" => self.set_zoom(self.zoom + self.config.step),
                "-" => self.set_zoom(self.zoom - self.config.step),
                "0" => self.set_zoom(self.config.default_zoom),
                _ => ModalAction::None,
            },
            _ => ModalAction::None,
        }
    }

    fn set_zoom(&mut self, zoom: f64) -> ModalAction {
        // Round to hundredths so repeated steps do not accumulate drift.
        let zoom = ((zoom * 100.0).round() / 100.0).clamp(self.config.min, self.config.max);
        if zoom == self.zoom {
            return ModalAction::None;
        }
        self.zoom = zoom;
        ModalAction::Zoom(zoom)
    }
}
