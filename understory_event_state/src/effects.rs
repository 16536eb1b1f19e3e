// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ambient UI side effects held for the duration of a drag.
//!
//! While a surface is being dragged, hosts usually override process-wide
//! presentation state: the global cursor switches to a grabbing hand and text
//! selection is suppressed so the drag does not select page content. Those
//! overrides are a single shared resource and must never be left behind.
//!
//! The drag engine reaches them only through the [`AmbientEffects`] port and
//! holds them with an [`AmbientLease`]: acquiring applies the style, and every
//! exit path (drag end, disable, cancel, stop, drop) releases it. Release is
//! idempotent, so `clear` runs exactly once per acquisition.
//!
//! ```
//! use understory_event_state::effects::{AmbientEffects, AmbientLease, AmbientStyle};
//!
//! #[derive(Default)]
//! struct Counter { applied: u32, cleared: u32 }
//!
//! impl AmbientEffects for Counter {
//!     fn apply(&mut self, _style: &AmbientStyle) { self.applied += 1; }
//!     fn clear(&mut self) { self.cleared += 1; }
//! }
//!
//! let mut lease = AmbientLease::new(Counter::default());
//! assert!(lease.acquire(&AmbientStyle::default()));
//! assert!(!lease.acquire(&AmbientStyle::default()));
//! assert!(lease.release());
//! assert!(!lease.release());
//! assert_eq!((lease.port().applied, lease.port().cleared), (1, 1));
//! ```

use cursor_icon::CursorIcon;

/// Presentation overrides applied while dragging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AmbientStyle {
    /// Cursor to show everywhere while the drag is live.
    pub cursor: CursorIcon,
    /// Whether text selection should be suppressed.
    pub suppress_selection: bool,
}

impl Default for AmbientStyle {
    fn default() -> Self {
        Self {
            cursor: CursorIcon::Grabbing,
            suppress_selection: true,
        }
    }
}

/// Port through which the engine touches ambient UI state.
pub trait AmbientEffects {
    /// Applies `style` globally.
    fn apply(&mut self, style: &AmbientStyle);

    /// Restores the host's normal cursor and selection behavior.
    fn clear(&mut self);
}

impl AmbientEffects for () {
    fn apply(&mut self, _style: &AmbientStyle) {}

    fn clear(&mut self) {}
}

/// Scoped hold on an [`AmbientEffects`] port.
///
/// Dropping the lease releases it.
#[derive(Debug)]
pub struct AmbientLease<E: AmbientEffects> {
    port: E,
    held: bool,
}

impl<E: AmbientEffects> AmbientLease<E> {
    /// Wraps `port` without applying anything.
    pub fn new(port: E) -> Self {
        Self { port, held: false }
    }

    /// Applies `style` unless already held. Returns `true` if it was applied.
    pub fn acquire(&mut self, style: &AmbientStyle) -> bool {
        if self.held {
            return false;
        }
        self.port.apply(style);
        self.held = true;
        true
    }

    /// Clears the effects if held. Returns `true` if they were cleared.
    pub fn release(&mut self) -> bool {
        if !self.held {
            return false;
        }
        self.port.clear();
        self.held = false;
        true
    }

    /// Returns `true` while the effects are applied.
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Shared access to the port.
    #[must_use]
    pub fn port(&self) -> &E {
        &self.port
    }

    /// Exclusive access to the port.
    ///
    /// Changing ambient state directly through the port while the lease is
    /// held is the caller's responsibility.
    pub fn port_mut(&mut self) -> &mut E {
        &mut self.port
    }
}

impl<E: AmbientEffects> Drop for AmbientLease<E> {
    fn drop(&mut self) {
        self.release();
    }
}
