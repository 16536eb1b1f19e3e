// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

use crate::GeometryError;

/// Largest top-left origin that keeps `extent` fully inside `viewport`.
///
/// Each axis is floored at zero, so a surface larger than the viewport is
/// pinned to the origin rather than pushed to a negative coordinate.
#[must_use]
pub fn max_origin(extent: Size, viewport: Size) -> Point {
    Point::new(
        (viewport.width - extent.width).max(0.0),
        (viewport.height - extent.height).max(0.0),
    )
}

/// Bounds `proposed` so that a surface of size `extent` stays inside `viewport`.
///
/// Per axis this computes `max(0, min(proposed, viewport - extent))`. The
/// function is total and idempotent: clamping an already clamped point
/// returns it unchanged.
#[must_use]
pub fn clamp_to_viewport(proposed: Point, extent: Size, viewport: Size) -> Point {
    Point::new(
        proposed.x.min(viewport.width - extent.width).max(0.0),
        proposed.y.min(viewport.height - extent.height).max(0.0),
    )
}

/// Like [`clamp_to_viewport`], but rejects geometry that cannot be placed.
///
/// Negative proposed coordinates are fine (the pointer may leave past the
/// left or top edge); non-finite ones are not. Sizes must be finite and
/// non-negative.
pub fn checked_clamp(proposed: Point, extent: Size, viewport: Size) -> Result<Point, GeometryError> {
    validate_size(extent, "extent")?;
    validate_size(viewport, "viewport")?;
    if !proposed.is_finite() {
        return Err(GeometryError::NonFinitePoint);
    }
    Ok(clamp_to_viewport(proposed, extent, viewport))
}

/// Returns `true` if `point` is a valid committed origin for `extent` in `viewport`.
#[must_use]
pub fn is_within_bounds(point: Point, extent: Size, viewport: Size) -> bool {
    let max = max_origin(extent, viewport);
    (0.0..=max.x).contains(&point.x) && (0.0..=max.y).contains(&point.y)
}

pub(crate) fn validate_size(size: Size, what: &'static str) -> Result<(), GeometryError> {
    if size.is_finite() && size.width >= 0.0 && size.height >= 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidGeometry { what })
    }
}
