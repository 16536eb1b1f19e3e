// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag controller: move a docked surface with mouse or touch.
//!
//! [`DragController`] runs a [`GestureTracker`] over normalized
//! [`PointerInput`]s and reports everything it decides to a [`DragHost`].
//! The host owns the surface state (position, dragging flag); the controller
//! only proposes changes, so the host can veto or redirect any of them.
//!
//! ## Lifecycle of a contact
//!
//! - A primary press on the surface arms the tracker. Presses on
//!   [`PressTarget::Control`]s, non-primary buttons, multi-touch and presses
//!   while disabled or already tracking are ignored.
//! - Moves within the drag threshold do nothing. The first move past it
//!   acquires the ambient effects, calls [`DragHost::drag_started`] and
//!   [`DragHost::set_dragging`], then commits the first clamped position.
//! - Every later move commits a clamped position.
//! - On release of a drag the last committed position is snapped to the
//!   nearest corner (if close enough), dragging ends, the ambient effects are
//!   released and [`DragHost::drag_ended`] fires.
//! - Every release ends with [`DragHost::released`], whose
//!   [`Release::is_click`] is only `true` for short, stationary presses that
//!   never became drags.
//!
//! Disabling (or stopping) is an unconditional cancel: the live contact is
//! discarded, ambient effects are released, dragging is reported `false`, and
//! neither `drag_ended` nor `released` fires.

use kurbo::{Point, Size};
use understory_dock::{
    Corner, DEFAULT_CORNER_MARGIN, DEFAULT_SNAP_THRESHOLD, checked_clamp, dock_corners,
    resolve_snap,
};

use crate::click::ClickPolicy;
use crate::effects::{AmbientEffects, AmbientLease, AmbientStyle};
use crate::gesture::{DEFAULT_DRAG_THRESHOLD, GesturePhase, GestureState, GestureTracker, Motion};
use crate::pointer::{ContactId, InputPhase, PointerButton, PointerInput, PressTarget};

/// Tunables for [`DragController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragConfig {
    /// Distance a press must travel before it becomes a drag.
    pub drag_threshold: f64,
    /// Click recognition for presses that never became drags.
    pub click: ClickPolicy,
    /// Whether drag releases snap to viewport corners.
    pub snap_to_corners: bool,
    /// Snap radius around each corner anchor.
    pub snap_threshold: f64,
    /// Gap between corner anchors and the viewport edges.
    pub corner_margin: f64,
    /// Ambient style applied while dragging.
    pub ambient: AmbientStyle,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            click: ClickPolicy::default(),
            snap_to_corners: true,
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            corner_margin: DEFAULT_CORNER_MARGIN,
            ambient: AmbientStyle::default(),
        }
    }
}

/// Summary of a completed contact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Release {
    /// Contact that was released.
    pub contact: ContactId,
    /// Pointer position at release.
    pub point: Point,
    /// Whether the contact had become a drag.
    pub was_dragging: bool,
    /// Whether the pointer ever travelled past the drag threshold.
    pub moved: bool,
    /// Whether this release is a genuine click.
    pub is_click: bool,
    /// Milliseconds between press and release.
    pub elapsed_ms: u64,
}

/// Owner of the dragged surface.
///
/// Geometry is queried on every event and never cached by the controller.
/// All notification methods except [`set_position`](Self::set_position)
/// default to no-ops.
pub trait DragHost {
    /// Currently committed surface origin.
    fn position(&self) -> Point;

    /// Current surface extent.
    fn extent(&self) -> Size;

    /// Current viewport size.
    fn viewport(&self) -> Size;

    /// Commits a new surface origin.
    fn set_position(&mut self, position: Point);

    /// Dragging flag changed.
    fn set_dragging(&mut self, _dragging: bool) {}

    /// A contact crossed the drag threshold.
    fn drag_started(&mut self) {}

    /// A drag was released normally.
    fn drag_ended(&mut self) {}

    /// A drag release snapped onto `corner`.
    fn snapped(&mut self, _corner: Corner) {}

    /// A contact was released.
    fn released(&mut self, _release: Release) {}
}

/// Mouse/touch drag engine for a single surface.
#[derive(Debug)]
pub struct DragController<E: AmbientEffects> {
    config: DragConfig,
    tracker: GestureTracker,
    lease: AmbientLease<E>,
    listening: bool,
    disabled: bool,
    last_good: Option<Point>,
}

impl<E: AmbientEffects> DragController<E> {
    /// Creates a stopped controller that reaches ambient state through `effects`.
    pub fn new(config: DragConfig, effects: E) -> Self {
        Self {
            tracker: GestureTracker::new(config.drag_threshold),
            config,
            lease: AmbientLease::new(effects),
            listening: false,
            disabled: false,
            last_good: None,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Starts accepting input.
    pub fn start(&mut self) {
        self.listening = true;
    }

    /// Stops accepting input and discards any live contact.
    ///
    /// Safe to call repeatedly. No host notifications are sent, since the host
    /// may already be gone; ambient effects are still released.
    pub fn stop(&mut self) {
        if self.listening {
            log::debug!("drag: stop");
        }
        self.listening = false;
        self.tracker.reset();
        self.lease.release();
        self.last_good = None;
    }

    /// Returns `true` between [`start`](Self::start) and [`stop`](Self::stop).
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Enables or disables the controller.
    ///
    /// Disabling always resets to idle, even when already disabled.
    pub fn set_disabled(&mut self, disabled: bool, host: &mut impl DragHost) {
        self.disabled = disabled;
        if disabled {
            self.force_reset(host, "disabled");
        }
    }

    /// Returns `true` while disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Returns the tracker phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.tracker.phase()
    }

    /// Returns the live gesture, if any.
    #[must_use]
    pub fn gesture(&self) -> Option<&GestureState> {
        self.tracker.state()
    }

    /// Returns `true` while ambient effects are applied.
    #[must_use]
    pub fn holds_ambient_effects(&self) -> bool {
        self.lease.is_held()
    }

    /// Shared access to the ambient effects port.
    #[must_use]
    pub fn effects(&self) -> &E {
        self.lease.port()
    }

    /// Feeds one pointer event. Returns `true` if the event was consumed.
    pub fn handle(&mut self, input: &PointerInput, host: &mut impl DragHost) -> bool {
        if !self.listening {
            return false;
        }
        match input.phase {
            InputPhase::Down => self.press(input, host),
            InputPhase::Move => self.motion(input, host),
            InputPhase::Up => self.release(input, host),
            InputPhase::Cancel => self.cancel(input.contact(), host),
        }
    }

    /// Discards the contact `contact` as if the platform cancelled it.
    ///
    /// Unlike disabling, later presses are accepted.
    pub fn cancel(&mut self, contact: ContactId, host: &mut impl DragHost) -> bool {
        if self.tracker.state().is_none_or(|s| s.contact != contact) {
            return false;
        }
        self.force_reset(host, "cancelled");
        true
    }

    fn press(&mut self, input: &PointerInput, host: &mut impl DragHost) -> bool {
        if self.disabled
            || input.source.is_multi_touch()
            || input.button != PointerButton::Primary
            || input.target == PressTarget::Control
        {
            return false;
        }
        let origin = host.position();
        if !self
            .tracker
            .press(input.contact(), input.point, origin, input.time_ms)
        {
            return false;
        }
        log::debug!(
            "drag: armed {:?} at ({:.1},{:.1})",
            input.contact(),
            input.point.x,
            input.point.y
        );
        self.last_good = Some(origin);
        true
    }

    fn motion(&mut self, input: &PointerInput, host: &mut impl DragHost) -> bool {
        if self.disabled || input.source.is_multi_touch() {
            return false;
        }
        match self.tracker.motion(input.contact(), input.point) {
            Motion::Rejected => false,
            Motion::Pending => true,
            Motion::Started(proposed) => {
                log::debug!("drag: started {:?}", input.contact());
                self.lease.acquire(&self.config.ambient);
                host.drag_started();
                host.set_dragging(true);
                self.commit(proposed, host);
                true
            }
            Motion::Dragged(proposed) => {
                self.commit(proposed, host);
                true
            }
        }
    }

    fn release(&mut self, input: &PointerInput, host: &mut impl DragHost) -> bool {
        if self.disabled {
            return false;
        }
        let Some(finished) = self
            .tracker
            .release(input.contact(), input.point, input.time_ms)
        else {
            return false;
        };
        let state = finished.state;

        if state.active {
            if self.config.snap_to_corners {
                self.snap(host);
            }
            host.set_dragging(false);
            self.lease.release();
            host.drag_ended();
            log::debug!("drag: ended {:?}", state.contact);
        }

        let is_click = !state.active
            && self
                .config
                .click
                .is_click(state.start_point, input.point, finished.elapsed_ms);
        self.last_good = None;
        host.released(Release {
            contact: state.contact,
            point: input.point,
            was_dragging: state.active,
            moved: state.moved,
            is_click,
            elapsed_ms: finished.elapsed_ms,
        });
        true
    }

    fn snap(&mut self, host: &mut impl DragHost) {
        // The host may have moved the subject since the last commit.
        let position = host.position();
        let (extent, viewport) = (host.extent(), host.viewport());
        if checked_clamp(position, extent, viewport).is_err() {
            return;
        }
        let corners = dock_corners(viewport, extent, self.config.corner_margin);
        if let Some(corner) = resolve_snap(position, &corners, self.config.snap_threshold) {
            log::debug!("drag: snapped to {}", corner.id.name());
            self.last_good = Some(corner.point);
            host.set_position(corner.point);
            host.snapped(corner);
        }
    }

    fn commit(&mut self, proposed: Point, host: &mut impl DragHost) {
        match checked_clamp(proposed, host.extent(), host.viewport()) {
            Ok(position) => {
                log::trace!("drag: move to ({:.1},{:.1})", position.x, position.y);
                self.last_good = Some(position);
                host.set_position(position);
            }
            Err(err) => {
                log::warn!("drag: dropping frame: {err}");
                if let Some(position) = self.last_good {
                    host.set_position(position);
                }
            }
        }
    }

    fn force_reset(&mut self, host: &mut impl DragHost, why: &str) {
        if let Some(state) = self.tracker.reset() {
            log::debug!("drag: {why} {:?}", state.contact);
            if state.active {
                host.set_dragging(false);
            }
        }
        self.lease.release();
        self.last_good = None;
    }
}
