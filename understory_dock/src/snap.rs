// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::Corner;

/// Default snap radius, in pixels.
pub const DEFAULT_SNAP_THRESHOLD: f64 = 100.0;

/// Finds the corner nearest to `position` that lies strictly within `threshold`.
///
/// Distances are Euclidean. When two candidates are equally near, the one
/// that comes first in `corners` wins. Returns `None` when no corner
/// qualifies; callers should then keep the position as dragged.
#[must_use]
pub fn resolve_snap(position: Point, corners: &[Corner], threshold: f64) -> Option<Corner> {
    let mut best: Option<(f64, Corner)> = None;
    for corner in corners {
        let distance = position.distance(corner.point);
        if !distance.is_finite() || distance >= threshold {
            continue;
        }
        match best {
            Some((best_distance, _)) if best_distance <= distance => {}
            _ => best = Some((distance, *corner)),
        }
    }
    best.map(|(_, corner)| corner)
}
