// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overstory_preview --heading-base-level=0

//! Overstory Preview: a floating, dockable preview surface.
//!
//! [`FloatingPreview`] composes the Understory kernels into one widget-level
//! state holder:
//!
//! - `understory_event_state` drives mouse/touch dragging and tells clicks
//!   apart from drags.
//! - `understory_dock` keeps the surface inside the viewport, docks released
//!   drags to the nearest corner and re-validates the position on resize or
//!   when the surface is minimized.
//! - [`modal`] handles keyboard input for the zoomable fullscreen overlay.
//! - [`deferred`] replaces ad-hoc timers with an explicit, cancellable slot.
//!
//! Rendering is left to the embedder: the content type is opaque, and every
//! visible change is reported as a [`PreviewEvent`].
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use overstory_preview::{FloatingPreview, PreviewConfig, PreviewEvent};
//! use understory_event_state::pointer::PointerInput;
//!
//! let mut preview = FloatingPreview::new(
//!     "https://example.com",
//!     (),
//!     Size::new(1000.0, 800.0),
//!     PreviewConfig::default(),
//! );
//! assert_eq!(preview.position(), Point::new(670.0, 10.0));
//!
//! // A quick tap opens the overlay once the click delay elapses.
//! preview.pointer(&PointerInput::mouse_down(Point::new(700.0, 50.0), 0));
//! preview.pointer(&PointerInput::mouse_up(Point::new(701.0, 50.0), 80));
//! preview.tick(180);
//! assert!(preview.is_fullscreen());
//! assert_eq!(preview.drain_events(), vec![PreviewEvent::FullscreenChanged(true)]);
//! ```

pub mod deferred;
pub mod modal;
mod preview;

pub use preview::{FloatingPreview, PreviewConfig, PreviewEvent};
