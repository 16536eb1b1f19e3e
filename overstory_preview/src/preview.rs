// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::mem;

use kurbo::{Point, Size};
use ui_events::keyboard::Key;
use understory_dock::{
    Corner, CornerId, DockExtents, GeometryError, Reflow, SizeMode, ViewportReflowPolicy,
};
use understory_event_state::controller::{DragConfig, DragController, DragHost, Release};
use understory_event_state::effects::AmbientEffects;
use understory_event_state::pointer::{InputPhase, PointerInput};

use crate::deferred::DeferredAction;
use crate::modal::{ModalAction, ModalInteractionController, ZoomConfig};

/// Configuration for [`FloatingPreview`].
#[derive(Clone, Debug)]
pub struct PreviewConfig {
    /// Drag engine tunables.
    pub drag: DragConfig,
    /// Overlay zoom limits.
    pub zoom: ZoomConfig,
    /// Surface size per mode.
    pub extents: DockExtents,
    /// Delay between a click and the overlay opening.
    pub open_delay_ms: u64,
    /// How long a "snapped to" notice stays visible.
    pub snap_feedback_ms: u64,
    /// Key that flips normal/minimized while the overlay is closed.
    pub toggle_key: Key,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            drag: DragConfig::default(),
            zoom: ZoomConfig::default(),
            extents: DockExtents::default(),
            open_delay_ms: 100,
            snap_feedback_ms: 2_000,
            toggle_key: Key::Character("m".into()),
        }
    }
}

/// A change the embedding UI should render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PreviewEvent {
    /// The committed surface origin changed.
    Moved(Point),
    /// The surface started or stopped being dragged.
    DraggingChanged(bool),
    /// A drag release docked at a corner; show transient feedback.
    Snapped(CornerId),
    /// The snap feedback should be hidden.
    SnapFeedbackExpired,
    /// The fullscreen overlay opened (`true`) or closed (`false`).
    FullscreenChanged(bool),
    /// Overlay zoom changed.
    ZoomChanged(f64),
    /// The surface switched size mode.
    SizeModeChanged(SizeMode),
}

/// Surface state the drag engine reports into.
#[derive(Debug)]
struct Subject {
    position: Point,
    mode: SizeMode,
    extents: DockExtents,
    viewport: Size,
    dragging: bool,
    hovered: bool,
    events: Vec<PreviewEvent>,
    release: Option<Release>,
    snapped: Option<Corner>,
}

impl Subject {
    fn apply(&mut self, reflow: Reflow) {
        if let Some(position) = reflow.corrected {
            self.set_position(position);
        }
    }
}

impl DragHost for Subject {
    fn position(&self) -> Point {
        self.position
    }

    fn extent(&self) -> Size {
        self.extents.extent(self.mode)
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn set_position(&mut self, position: Point) {
        if self.position != position {
            self.position = position;
            self.events.push(PreviewEvent::Moved(position));
        }
    }

    fn set_dragging(&mut self, dragging: bool) {
        if self.dragging != dragging {
            self.dragging = dragging;
            self.events.push(PreviewEvent::DraggingChanged(dragging));
        }
    }

    fn snapped(&mut self, corner: Corner) {
        self.snapped = Some(corner);
    }

    fn released(&mut self, release: Release) {
        self.release = Some(release);
    }
}

/// A draggable preview surface that docks to viewport corners and expands
/// into a zoomable fullscreen overlay.
///
/// `C` is the content shown inside the surface; the preview never looks at
/// it. `E` is the port for ambient cursor/selection overrides while dragging.
///
/// Time is supplied by the caller: pointer events carry their own timestamp,
/// and [`tick`](Self::tick) must be called with the current time so that
/// deferred work (opening the overlay after a click, hiding snap feedback)
/// can run.
#[derive(Debug)]
pub struct FloatingPreview<C, E: AmbientEffects> {
    config: PreviewConfig,
    content: C,
    subject: Subject,
    drag: DragController<E>,
    reflow: ViewportReflowPolicy,
    modal: ModalInteractionController,
    pending_open: DeferredAction<()>,
    snap_feedback: Option<CornerId>,
    feedback_timer: DeferredAction<CornerId>,
}

impl<C, E: AmbientEffects> FloatingPreview<C, E> {
    /// Creates a preview docked at the top-right corner of `viewport`.
    ///
    /// An invalid viewport is treated as empty until the next
    /// [`resize`](Self::resize).
    pub fn new(content: C, effects: E, viewport: Size, config: PreviewConfig) -> Self {
        let reflow = ViewportReflowPolicy::new(viewport, config.extents)
            .with_margin(config.drag.corner_margin);
        let start = reflow
            .corners()
            .into_iter()
            .find(|c| c.id == CornerId::TopRight)
            .map_or(Point::ZERO, |c| c.point);
        let mut drag = DragController::new(config.drag, effects);
        drag.start();
        Self {
            subject: Subject {
                position: start,
                mode: SizeMode::Normal,
                extents: config.extents,
                viewport: reflow.viewport(),
                dragging: false,
                hovered: false,
                events: Vec::new(),
                release: None,
                snapped: None,
            },
            modal: ModalInteractionController::new(config.zoom, config.toggle_key.clone()),
            config,
            content,
            drag,
            reflow,
            pending_open: DeferredAction::new(),
            snap_feedback: None,
            feedback_timer: DeferredAction::new(),
        }
    }

    /// Committed surface origin.
    #[must_use]
    pub fn position(&self) -> Point {
        self.subject.position
    }

    /// Current size mode.
    #[must_use]
    pub fn size_mode(&self) -> SizeMode {
        self.subject.mode
    }

    /// Current surface extent.
    #[must_use]
    pub fn extent(&self) -> Size {
        self.subject.extent()
    }

    /// Last accepted viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.subject.viewport
    }

    /// Corner anchors for the current viewport and extent.
    #[must_use]
    pub fn corners(&self) -> [Corner; 4] {
        self.reflow.corners()
    }

    /// Returns `true` while the surface is being dragged.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.subject.dragging
    }

    /// Returns `true` while the pointer hovers the surface.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.subject.hovered
    }

    /// Returns `true` while the fullscreen overlay is open.
    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.modal.is_open()
    }

    /// Returns `true` while a click is waiting to open the overlay.
    #[must_use]
    pub fn is_open_pending(&self) -> bool {
        self.pending_open.is_pending()
    }

    /// Overlay zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.modal.zoom()
    }

    /// Corner of the most recent snap, while its feedback is visible.
    #[must_use]
    pub fn snap_feedback(&self) -> Option<CornerId> {
        self.snap_feedback
    }

    /// The drag engine, for inspection.
    #[must_use]
    pub fn drag(&self) -> &DragController<E> {
        &self.drag
    }

    /// The content shown in the surface.
    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Mutable access to the content shown in the surface.
    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    /// Takes every event produced since the last call.
    pub fn drain_events(&mut self) -> Vec<PreviewEvent> {
        mem::take(&mut self.subject.events)
    }

    /// Feeds a pointer event to the drag engine. Returns `true` if consumed.
    ///
    /// A new press cancels an overlay open that is still waiting on its delay.
    pub fn pointer(&mut self, input: &PointerInput) -> bool {
        if input.phase == InputPhase::Down && self.pending_open.cancel_all().is_some() {
            log::debug!("preview: pending open cancelled by new press");
        }
        let handled = self.drag.handle(input, &mut self.subject);

        if let Some(corner) = self.subject.snapped.take() {
            self.snap_feedback = Some(corner.id);
            self.feedback_timer
                .schedule(corner.id, input.time_ms.saturating_add(self.config.snap_feedback_ms));
            self.subject.events.push(PreviewEvent::Snapped(corner.id));
        }
        if let Some(release) = self.subject.release.take() {
            if release.is_click && !self.modal.is_open() {
                self.pending_open
                    .schedule((), input.time_ms.saturating_add(self.config.open_delay_ms));
            }
        }
        handled
    }

    /// Updates hover state.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.subject.hovered = hovered;
    }

    /// Applies a new viewport size, moving the surface back inside if needed.
    pub fn resize(&mut self, viewport: Size) -> Result<(), GeometryError> {
        let reflow = self.reflow.resize(viewport, self.subject.position)?;
        self.subject.viewport = viewport;
        self.subject.apply(reflow);
        Ok(())
    }

    /// Switches between normal and minimized.
    pub fn set_size_mode(&mut self, mode: SizeMode) {
        if self.subject.mode == mode {
            return;
        }
        self.subject.mode = mode;
        let reflow = self.reflow.set_size_mode(mode, self.subject.position);
        self.subject.apply(reflow);
        self.subject.events.push(PreviewEvent::SizeModeChanged(mode));
    }

    /// Flips the size mode.
    pub fn toggle_size_mode(&mut self) {
        self.set_size_mode(self.subject.mode.toggled());
    }

    /// Handles a global key press.
    ///
    /// While the overlay is closed, keys are ignored during a drag or while
    /// the drag engine is disabled, so the extent never changes under a live
    /// gesture.
    pub fn key(&mut self, key: &Key) -> ModalAction {
        if !self.modal.is_open() && (self.subject.dragging || self.drag.is_disabled()) {
            return ModalAction::None;
        }
        let action = self.modal.handle_key(key);
        match action {
            ModalAction::None => {}
            ModalAction::Close => self.after_close(),
            ModalAction::Zoom(zoom) => self.subject.events.push(PreviewEvent::ZoomChanged(zoom)),
            ModalAction::ToggleSizeMode => self.toggle_size_mode(),
        }
        action
    }

    /// Opens the fullscreen overlay now, disabling dragging while it is open.
    pub fn open_fullscreen(&mut self) {
        self.pending_open.cancel_all();
        self.drag.set_disabled(true, &mut self.subject);
        if self.modal.open() {
            log::debug!("preview: fullscreen opened");
            self.subject.events.push(PreviewEvent::FullscreenChanged(true));
        }
    }

    /// Closes the fullscreen overlay.
    pub fn close_fullscreen(&mut self) {
        if self.modal.close() {
            self.after_close();
        }
    }

    /// Runs deferred work that is due at `now`.
    pub fn tick(&mut self, now: u64) {
        if self.pending_open.poll(now).is_some() {
            self.open_fullscreen();
        }
        if self.feedback_timer.poll(now).is_some() {
            self.snap_feedback = None;
            self.subject.events.push(PreviewEvent::SnapFeedbackExpired);
        }
    }

    /// Stops the drag engine and releases ambient effects.
    ///
    /// Call when the surface is torn down; dropping the preview does the same.
    pub fn teardown(&mut self) {
        self.pending_open.cancel_all();
        self.drag.stop();
        self.subject.set_dragging(false);
    }

    fn after_close(&mut self) {
        log::debug!("preview: fullscreen closed");
        // Forced cleanup: whatever was in flight when the overlay opened is gone.
        self.drag.set_disabled(true, &mut self.subject);
        self.drag.set_disabled(false, &mut self.subject);
        self.subject.set_dragging(false);
        self.subject.hovered = false;
        self.subject.events.push(PreviewEvent::FullscreenChanged(false));
    }
}
