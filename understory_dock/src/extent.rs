// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Discrete footprint of a docked surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub enum SizeMode {
    /// Full-size surface.
    #[default]
    Normal,
    /// Collapsed surface: same width, shorter height.
    Minimized,
}

impl SizeMode {
    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Minimized,
            Self::Minimized => Self::Normal,
        }
    }
}

/// Extents of a surface in each [`SizeMode`].
///
/// Both modes share one width; the minimized height never exceeds the normal
/// height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DockExtents {
    width: f64,
    normal_height: f64,
    minimized_height: f64,
}

impl DockExtents {
    /// Creates extents, clamping `minimized_height` to at most `normal_height`.
    #[must_use]
    pub fn new(width: f64, normal_height: f64, minimized_height: f64) -> Self {
        Self {
            width,
            normal_height,
            minimized_height: minimized_height.min(normal_height),
        }
    }

    /// Returns the extent for `mode`.
    #[must_use]
    pub fn extent(&self, mode: SizeMode) -> Size {
        match mode {
            SizeMode::Normal => Size::new(self.width, self.normal_height),
            SizeMode::Minimized => Size::new(self.width, self.minimized_height),
        }
    }
}

impl Default for DockExtents {
    /// A 320x180 preview that collapses to a 40px title strip.
    fn default() -> Self {
        Self::new(320.0, 180.0, 40.0)
    }
}
