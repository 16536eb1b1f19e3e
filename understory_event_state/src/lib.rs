// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: pointer gesture state for draggable UI surfaces.
//!
//! This crate provides small, focused state machines for interactions that
//! need tracking across several pointer events. Each module handles one
//! concern:
//!
//! - [`pointer`]: Normalized mouse and touch input shared by every other module
//! - [`gesture`]: Press → armed → dragging transitions with a distance threshold
//! - [`click`]: Click recognition with spatial/temporal tolerance
//! - [`effects`]: Scoped acquisition of ambient UI side effects (cursor, selection)
//! - [`controller`]: A drag controller that ties the above together and docks
//!   released surfaces to viewport corners via `understory_dock`
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: Each handles one specific interaction pattern
//! - **Stateful but simple**: Track just enough state to compute transitions
//! - **Integration-friendly**: Work with any windowing or event system
//! - **Host-owned state**: The surface position and flags live with the caller
//!
//! The crate does not assume any particular UI framework. Platform adapters
//! normalize their events into [`pointer::PointerInput`], and the controller
//! reports decisions through the [`controller::DragHost`] trait.
//!
//! ## Dragging a surface
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_event_state::controller::{DragConfig, DragController, DragHost, Release};
//! use understory_event_state::pointer::PointerInput;
//!
//! struct Preview {
//!     position: Point,
//!     released: Option<Release>,
//! }
//!
//! impl DragHost for Preview {
//!     fn position(&self) -> Point { self.position }
//!     fn extent(&self) -> Size { Size::new(320.0, 180.0) }
//!     fn viewport(&self) -> Size { Size::new(1000.0, 800.0) }
//!     fn set_position(&mut self, position: Point) { self.position = position; }
//!     fn released(&mut self, release: Release) { self.released = Some(release); }
//! }
//!
//! let mut preview = Preview { position: Point::new(300.0, 300.0), released: None };
//! let mut drag = DragController::new(DragConfig::default(), ());
//! drag.start();
//!
//! drag.handle(&PointerInput::mouse_down(Point::new(400.0, 350.0), 0), &mut preview);
//! drag.handle(&PointerInput::mouse_move(Point::new(450.0, 300.0), 16), &mut preview);
//! assert_eq!(preview.position, Point::new(350.0, 250.0));
//!
//! // Dropped near the top-right anchor: snaps onto it.
//! drag.handle(&PointerInput::mouse_move(Point::new(750.0, 70.0), 32), &mut preview);
//! drag.handle(&PointerInput::mouse_up(Point::new(750.0, 70.0), 48), &mut preview);
//! assert_eq!(preview.position, Point::new(670.0, 10.0));
//! assert!(preview.released.unwrap().was_dragging);
//! ```
//!
//! ## Recognizing a click
//!
//! A press that never travels past the drag threshold is reported as a click
//! when it is also short and stationary; hosts typically open a detail view
//! only for those.
//!
//! ```rust
//! use kurbo::Point;
//! use understory_event_state::click::ClickPolicy;
//!
//! let clicks = ClickPolicy::default();
//! assert!(clicks.is_click(Point::new(5.0, 5.0), Point::new(7.0, 6.0), 90));
//! ```
//!
//! ## Features
//!
//! - `std` (default): Forward `std` to Kurbo.
//! - `libm`: Use `libm` for Kurbo's float math in `no_std` builds.
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

pub mod click;
pub mod controller;
pub mod effects;
pub mod gesture;
pub mod pointer;
