// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click recognition with spatial and temporal tolerance.
//!
//! A press/release pair counts as a click when it is short and the pointer
//! ends near where it started. The drag engine only consults this for
//! contacts that never crossed the drag threshold.
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::click::ClickPolicy;
//!
//! let policy = ClickPolicy::default();
//! assert!(policy.is_click(Point::new(10.0, 10.0), Point::new(13.0, 14.0), 120));
//! assert!(!policy.is_click(Point::new(10.0, 10.0), Point::new(10.0, 10.0), 800));
//! ```

use kurbo::Point;

/// Default longest press, in milliseconds, that still counts as a click.
pub const DEFAULT_CLICK_MAX_DURATION_MS: u64 = 500;

/// Default largest press-to-release distance, in pixels, for a click.
pub const DEFAULT_CLICK_SLOP: f64 = 10.0;

/// Tolerances for recognizing a click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickPolicy {
    /// Presses lasting this long or longer are not clicks.
    pub max_duration_ms: u64,
    /// Releases farther than this from the press point are not clicks.
    pub slop: f64,
}

impl Default for ClickPolicy {
    fn default() -> Self {
        Self {
            max_duration_ms: DEFAULT_CLICK_MAX_DURATION_MS,
            slop: DEFAULT_CLICK_SLOP,
        }
    }
}

impl ClickPolicy {
    /// Returns `true` if a press at `down` released at `up` after `elapsed_ms` is a click.
    #[must_use]
    pub fn is_click(&self, down: Point, up: Point, elapsed_ms: u64) -> bool {
        elapsed_ms < self.max_duration_ms && down.distance(up) <= self.slop
    }
}
