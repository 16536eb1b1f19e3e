// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

use crate::clamp::{clamp_to_viewport, is_within_bounds, validate_size};
use crate::{Corner, DEFAULT_CORNER_MARGIN, DockExtents, GeometryError, SizeMode, dock_corners};

/// Outcome of a reflow pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reflow {
    /// Corner anchors for the current viewport and extent.
    pub corners: [Corner; 4],
    /// Replacement for the committed position, if it no longer fit.
    ///
    /// `None` means the committed position is still valid and should be left
    /// untouched.
    pub corrected: Option<Point>,
}

/// Keeps a committed surface position valid as the viewport or extent changes.
///
/// The policy remembers the last accepted viewport, the current [`SizeMode`]
/// and the [`DockExtents`]. Any change to these recomputes the corner anchors
/// and re-validates the committed position that the caller passes in. No
/// pointer gesture is involved; callers apply [`Reflow::corrected`] directly.
#[derive(Clone, Debug)]
pub struct ViewportReflowPolicy {
    viewport: Size,
    mode: SizeMode,
    extents: DockExtents,
    margin: f64,
    corners: [Corner; 4],
}

impl ViewportReflowPolicy {
    /// Creates a policy for `viewport` with the default corner margin.
    ///
    /// An invalid viewport is replaced by an empty one until the first
    /// successful [`resize`](Self::resize).
    #[must_use]
    pub fn new(viewport: Size, extents: DockExtents) -> Self {
        let viewport = if validate_size(viewport, "viewport").is_ok() {
            viewport
        } else {
            Size::ZERO
        };
        let mode = SizeMode::Normal;
        Self {
            viewport,
            mode,
            extents,
            margin: DEFAULT_CORNER_MARGIN,
            corners: dock_corners(viewport, extents.extent(mode), DEFAULT_CORNER_MARGIN),
        }
    }

    /// Sets the gap between docked anchors and the viewport edges.
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self.recompute_corners();
        self
    }

    /// Returns the last accepted viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Returns the current size mode.
    #[must_use]
    pub fn size_mode(&self) -> SizeMode {
        self.mode
    }

    /// Returns the extent for the current size mode.
    #[must_use]
    pub fn extent(&self) -> Size {
        self.extents.extent(self.mode)
    }

    /// Returns the corner margin.
    #[must_use]
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Returns the current corner anchors.
    #[must_use]
    pub fn corners(&self) -> [Corner; 4] {
        self.corners
    }

    /// Applies a new viewport size and re-validates `committed`.
    ///
    /// Rejects non-finite or negative sizes and keeps the previous viewport.
    pub fn resize(&mut self, viewport: Size, committed: Point) -> Result<Reflow, GeometryError> {
        validate_size(viewport, "viewport")?;
        self.viewport = viewport;
        self.recompute_corners();
        Ok(self.revalidate(committed))
    }

    /// Switches the size mode and re-validates `committed` for the new footprint.
    pub fn set_size_mode(&mut self, mode: SizeMode, committed: Point) -> Reflow {
        self.mode = mode;
        self.recompute_corners();
        self.revalidate(committed)
    }

    /// Replaces the per-mode extents and re-validates `committed`.
    pub fn set_extents(&mut self, extents: DockExtents, committed: Point) -> Reflow {
        self.extents = extents;
        self.recompute_corners();
        self.revalidate(committed)
    }

    fn recompute_corners(&mut self) {
        self.corners = dock_corners(self.viewport, self.extent(), self.margin);
    }

    fn revalidate(&self, committed: Point) -> Reflow {
        let extent = self.extent();
        let corrected = if is_within_bounds(committed, extent, self.viewport) {
            None
        } else {
            let fixed = clamp_to_viewport(committed, extent, self.viewport);
            log::debug!(
                "reflow: ({:.1},{:.1}) -> ({:.1},{:.1}) for viewport {:.0}x{:.0}",
                committed.x,
                committed.y,
                fixed.x,
                fixed.y,
                self.viewport.width,
                self.viewport.height
            );
            Some(fixed)
        };
        Reflow {
            corners: self.corners,
            corrected,
        }
    }
}
