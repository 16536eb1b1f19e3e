// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

use crate::clamp::clamp_to_viewport;

/// Default gap between a docked surface and the viewport edges, in pixels.
pub const DEFAULT_CORNER_MARGIN: f64 = 10.0;

/// Identifies one of the four viewport corners.
///
/// The declaration order is the enumeration order used for tie-breaking in
/// [`crate::resolve_snap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CornerId {
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}

impl CornerId {
    /// All corners in enumeration order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Kebab-case name, suitable for "snapped to top-right" style feedback.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }
}

/// A snap anchor: the top-left origin a surface takes when docked at `id`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Corner {
    /// Origin of the docked surface.
    pub point: Point,
    /// Which corner this anchor belongs to.
    pub id: CornerId,
}

/// Computes the four corner anchors for `extent` inside `viewport`.
///
/// Anchors sit `margin` pixels in from each edge. When the viewport is too
/// small to honor the margin, anchors are clamped so that each one is still a
/// valid position.
#[must_use]
pub fn dock_corners(viewport: Size, extent: Size, margin: f64) -> [Corner; 4] {
    let left = margin;
    let top = margin;
    let right = viewport.width - extent.width - margin;
    let bottom = viewport.height - extent.height - margin;

    CornerId::ALL.map(|id| {
        let raw = match id {
            CornerId::TopLeft => Point::new(left, top),
            CornerId::TopRight => Point::new(right, top),
            CornerId::BottomLeft => Point::new(left, bottom),
            CornerId::BottomRight => Point::new(right, bottom),
        };
        Corner {
            point: clamp_to_viewport(raw, extent, viewport),
            id,
        }
    })
}
