// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture tracker: decide when a press becomes a drag.
//!
//! ## Usage
//!
//! 1) On press, call [`GestureTracker::press`] with the contact, pointer
//!    position and the surface origin at that moment. The tracker is now
//!    [`GesturePhase::Armed`].
//! 2) On each move, call [`GestureTracker::motion`]. Until the pointer leaves
//!    the drag threshold this reports [`Motion::Pending`]; the first move past
//!    it reports [`Motion::Started`], later ones [`Motion::Dragged`]. Both
//!    carry the proposed (unclamped) surface origin.
//! 3) On release, call [`GestureTracker::release`] to retrieve the finished
//!    gesture, or [`GestureTracker::reset`] to discard it.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::gesture::{GesturePhase, GestureTracker, Motion};
//! use understory_event_state::pointer::ContactId;
//!
//! let mut tracker = GestureTracker::default();
//! assert!(tracker.press(ContactId::Mouse, Point::new(10.0, 20.0), Point::new(100.0, 100.0), 0));
//!
//! // Jitter inside the threshold does not start a drag.
//! assert_eq!(tracker.motion(ContactId::Mouse, Point::new(13.0, 22.0)), Motion::Pending);
//! assert_eq!(tracker.phase(), GesturePhase::Armed);
//!
//! // Crossing it does; the proposed origin follows the pointer.
//! assert_eq!(
//!     tracker.motion(ContactId::Mouse, Point::new(30.0, 20.0)),
//!     Motion::Started(Point::new(120.0, 100.0))
//! );
//! assert_eq!(tracker.phase(), GesturePhase::Dragging);
//! ```

use kurbo::Point;

use crate::pointer::ContactId;

/// Default distance, in pixels, a press must travel before it becomes a drag.
pub const DEFAULT_DRAG_THRESHOLD: f64 = 5.0;

/// Coarse state of the tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// No contact is live.
    Idle,
    /// A contact is pressed but has not moved past the threshold.
    Armed,
    /// A contact is dragging.
    Dragging,
}

/// Per-contact record, alive from press to release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureState {
    /// Contact that owns this gesture.
    pub contact: ContactId,
    /// Pointer position at press time.
    pub start_point: Point,
    /// Surface origin at press time.
    pub start_origin: Point,
    /// Most recent pointer position.
    pub current_point: Point,
    /// Set once the pointer has travelled past the threshold.
    pub moved: bool,
    /// Set once the gesture is a drag.
    pub active: bool,
    /// Press timestamp, in milliseconds.
    pub pressed_at: u64,
}

impl GestureState {
    /// Surface origin implied by the current pointer position.
    #[must_use]
    pub fn proposed_origin(&self) -> Point {
        self.start_origin + (self.current_point - self.start_point)
    }
}

/// Result of feeding a move into the tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// No live gesture for this contact; the event is stale or foreign.
    Rejected,
    /// Still within the drag threshold.
    Pending,
    /// First move past the threshold, with the proposed origin.
    Started(Point),
    /// Subsequent drag move, with the proposed origin.
    Dragged(Point),
}

/// A gesture handed back on release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FinishedGesture {
    /// Final state, with `current_point` set to the release position.
    pub state: GestureState,
    /// Milliseconds between press and release.
    pub elapsed_ms: u64,
}

/// Tracks a single press-to-release gesture.
#[derive(Clone, Debug)]
pub struct GestureTracker {
    threshold: f64,
    state: Option<GestureState>,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_THRESHOLD)
    }
}

impl GestureTracker {
    /// Creates a tracker that starts dragging past `threshold` pixels.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            state: None,
        }
    }

    /// Returns the drag threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        match self.state {
            None => GesturePhase::Idle,
            Some(state) if state.active => GesturePhase::Dragging,
            Some(_) => GesturePhase::Armed,
        }
    }

    /// Returns the live gesture, if any.
    #[must_use]
    pub fn state(&self) -> Option<&GestureState> {
        self.state.as_ref()
    }

    /// Arms a new gesture.
    ///
    /// Returns `false` and leaves the live gesture untouched if one already
    /// exists.
    pub fn press(&mut self, contact: ContactId, point: Point, origin: Point, time_ms: u64) -> bool {
        if self.state.is_some() {
            return false;
        }
        self.state = Some(GestureState {
            contact,
            start_point: point,
            start_origin: origin,
            current_point: point,
            moved: false,
            active: false,
            pressed_at: time_ms,
        });
        true
    }

    /// Feeds a move for `contact`.
    pub fn motion(&mut self, contact: ContactId, point: Point) -> Motion {
        let threshold = self.threshold;
        let Some(state) = self.state.as_mut().filter(|s| s.contact == contact) else {
            return Motion::Rejected;
        };
        state.current_point = point;
        if state.active {
            return Motion::Dragged(state.proposed_origin());
        }
        if (point - state.start_point).hypot() <= threshold {
            return Motion::Pending;
        }
        state.moved = true;
        state.active = true;
        Motion::Started(state.proposed_origin())
    }

    /// Ends the gesture for `contact`, returning it.
    ///
    /// Returns `None` for stale or foreign releases.
    pub fn release(&mut self, contact: ContactId, point: Point, time_ms: u64) -> Option<FinishedGesture> {
        if self.state.is_none_or(|s| s.contact != contact) {
            return None;
        }
        let mut state = self.state.take()?;
        state.current_point = point;
        Some(FinishedGesture {
            elapsed_ms: time_ms.saturating_sub(state.pressed_at),
            state,
        })
    }

    /// Discards any live gesture, returning it.
    pub fn reset(&mut self) -> Option<GestureState> {
        self.state.take()
    }
}
