// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_dock --heading-base-level=0

//! Understory Dock: geometry for surfaces that float over a viewport.
//!
//! This crate provides small, headless helpers for keeping a rectangular
//! surface (a floating preview, a picture-in-picture panel, a detached
//! palette) inside a viewport and docking it to the viewport's corners:
//!
//! - [`clamp_to_viewport`]: bound a proposed top-left position so the surface
//!   stays fully visible.
//! - [`dock_corners`]: compute the four corner anchors for a given viewport,
//!   surface extent and margin.
//! - [`resolve_snap`]: pick the nearest corner within a snap threshold.
//! - [`ViewportReflowPolicy`]: keep a committed position valid when the
//!   viewport resizes or the surface switches between [`SizeMode`]s.
//!
//! It does **not** own the surface position. Callers keep the committed
//! position themselves and feed it through these helpers; the helpers return
//! the corrected values.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_dock::{CornerId, DEFAULT_SNAP_THRESHOLD, clamp_to_viewport, dock_corners, resolve_snap};
//!
//! let viewport = Size::new(1000.0, 800.0);
//! let extent = Size::new(320.0, 180.0);
//!
//! // A drag that went past the right edge is pulled back in.
//! let clamped = clamp_to_viewport(Point::new(900.0, 30.0), extent, viewport);
//! assert_eq!(clamped, Point::new(680.0, 30.0));
//!
//! // Releasing near the top-right anchor snaps onto it.
//! let corners = dock_corners(viewport, extent, 10.0);
//! let snapped = resolve_snap(Point::new(650.0, 30.0), &corners, DEFAULT_SNAP_THRESHOLD).unwrap();
//! assert_eq!(snapped.id, CornerId::TopRight);
//! assert_eq!(snapped.point, Point::new(670.0, 10.0));
//! ```
//!
//! All positions are top-left origins in viewport pixels.
//!
//! This crate is `no_std`.

#![no_std]

mod clamp;
mod corner;
mod error;
mod extent;
mod reflow;
mod snap;

pub use clamp::{checked_clamp, clamp_to_viewport, is_within_bounds, max_origin};
pub use corner::{Corner, CornerId, DEFAULT_CORNER_MARGIN, dock_corners};
pub use error::GeometryError;
pub use extent::{DockExtents, SizeMode};
pub use reflow::{Reflow, ViewportReflowPolicy};
pub use snap::{DEFAULT_SNAP_THRESHOLD, resolve_snap};
