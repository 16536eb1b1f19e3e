// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized pointer input shared by mouse and touch sources.
//!
//! Platform adapters translate their native events into [`PointerInput`]
//! values. Mouse and touch end up in the same shape, so the drag engine
//! treats a touch release exactly like a mouse release.
//!
//! For touch input, the `contacts` field of [`InputSource::Touch`] is the number of touch
//! points active on the surface when the event fires. For a touch end this is
//! the number still down *after* the lifted contact, matching the way most
//! platforms report it.

use kurbo::Point;

/// Lifecycle phase of a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputPhase {
    /// Button pressed or finger down.
    Down,
    /// Pointer or finger moved.
    Move,
    /// Button released or finger lifted.
    Up,
    /// The platform aborted the contact (touch cancel, capture lost).
    Cancel,
}

/// Which device produced an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    /// The mouse (or any single-pointer device).
    Mouse,
    /// A touch point.
    Touch {
        /// Platform identifier for this touch point.
        id: u64,
        /// Touch points active on the surface; see the module docs.
        contacts: u32,
    },
}

impl InputSource {
    /// Identity of the contact that produced the event.
    #[must_use]
    pub const fn contact(self) -> ContactId {
        match self {
            Self::Mouse => ContactId::Mouse,
            Self::Touch { id, .. } => ContactId::Touch(id),
        }
    }

    /// Returns `true` for touch events that report more than one active contact.
    #[must_use]
    pub const fn is_multi_touch(self) -> bool {
        matches!(self, Self::Touch { contacts, .. } if contacts > 1)
    }
}

/// Identity of a single press-to-release lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactId {
    /// The mouse.
    Mouse,
    /// A touch point, by platform id.
    Touch(u64),
}

/// Pointer button associated with a press.
///
/// Touch contacts always report [`PointerButton::Primary`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerButton {
    /// Left button, pen tip, or finger.
    #[default]
    Primary,
    /// Right button.
    Secondary,
    /// Middle button.
    Auxiliary,
    /// Any other button.
    Other(u16),
}

/// What kind of element the pointer was over when it was pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PressTarget {
    /// The draggable surface itself.
    #[default]
    Surface,
    /// An interactive control inside (or equal to) the surface, such as a
    /// button. Presses here pass through to native handling untouched.
    Control,
}

/// A normalized pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    /// Event phase.
    pub phase: InputPhase,
    /// Producing device.
    pub source: InputSource,
    /// Button for presses; ignored for other phases.
    pub button: PointerButton,
    /// Position in viewport pixels.
    pub point: Point,
    /// Caller-provided timestamp in milliseconds.
    pub time_ms: u64,
    /// Element kind under the pointer at press time.
    pub target: PressTarget,
}

impl PointerInput {
    /// Creates an event with the primary button over the surface.
    #[must_use]
    pub fn new(phase: InputPhase, source: InputSource, point: Point, time_ms: u64) -> Self {
        Self {
            phase,
            source,
            button: PointerButton::Primary,
            point,
            time_ms,
            target: PressTarget::Surface,
        }
    }

    /// Mouse press with the primary button.
    #[must_use]
    pub fn mouse_down(point: Point, time_ms: u64) -> Self {
        Self::new(InputPhase::Down, InputSource::Mouse, point, time_ms)
    }

    /// Mouse move.
    #[must_use]
    pub fn mouse_move(point: Point, time_ms: u64) -> Self {
        Self::new(InputPhase::Move, InputSource::Mouse, point, time_ms)
    }

    /// Mouse release.
    #[must_use]
    pub fn mouse_up(point: Point, time_ms: u64) -> Self {
        Self::new(InputPhase::Up, InputSource::Mouse, point, time_ms)
    }

    /// Finger down; `contacts` includes this finger.
    #[must_use]
    pub fn touch_start(id: u64, contacts: u32, point: Point, time_ms: u64) -> Self {
        Self::new(InputPhase::Down, InputSource::Touch { id, contacts }, point, time_ms)
    }

    /// Finger moved.
    #[must_use]
    pub fn touch_move(id: u64, contacts: u32, point: Point, time_ms: u64) -> Self {
        Self::new(InputPhase::Move, InputSource::Touch { id, contacts }, point, time_ms)
    }

    /// Finger lifted; `remaining` excludes the lifted finger.
    #[must_use]
    pub fn touch_end(id: u64, remaining: u32, point: Point, time_ms: u64) -> Self {
        Self::new(
            InputPhase::Up,
            InputSource::Touch {
                id,
                contacts: remaining,
            },
            point,
            time_ms,
        )
    }

    /// Touch sequence aborted by the platform.
    #[must_use]
    pub fn touch_cancel(id: u64, point: Point, time_ms: u64) -> Self {
        Self::new(
            InputPhase::Cancel,
            InputSource::Touch { id, contacts: 0 },
            point,
            time_ms,
        )
    }

    /// Returns this event with a different button.
    #[must_use]
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    /// Returns this event marked as pressed on an interactive control.
    #[must_use]
    pub fn on_control(mut self) -> Self {
        self.target = PressTarget::Control;
        self
    }

    /// Identity of the contact that produced the event.
    #[must_use]
    pub fn contact(&self) -> ContactId {
        self.source.contact()
    }
}
