// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item geometry and responsive breakpoints.

use kurbo::Rect;

/// Viewport widths (inclusive upper bounds, in CSS px) at which the visible
/// item count steps from 1 to 2 to 3.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoints {
    /// Widths up to and including this show one item.
    pub single_max: f64,
    /// Widths up to and including this (and above `single_max`) show two.
    pub double_max: f64,
}

impl Breakpoints {
    /// The stock breakpoints: ≤600 → 1, ≤900 → 2, otherwise 3.
    #[must_use]
    pub const fn web() -> Self {
        Self {
            single_max: 600.0,
            double_max: 900.0,
        }
    }

    /// Returns how many items fit a viewport of the given width.
    #[must_use]
    pub fn visible_count(&self, viewport_width: f64) -> usize {
        if viewport_width <= self.single_max {
            1
        } else if viewport_width <= self.double_max {
            2
        } else {
            3
        }
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::web()
    }
}

/// Returns the horizontal stride of one item: its rendered width plus the
/// inter-item gap.
///
/// An item with no bounds yields `0.0`, which the engine treats as "width
/// not yet known" and suspends drift. A zero-width item (e.g. an image that
/// has not loaded) still advances by the gap.
#[must_use]
pub fn item_stride(bounds: Option<Rect>, gap: f64) -> f64 {
    match bounds {
        Some(rect) if rect.width().is_finite() => rect.width().max(0.0) + gap,
        _ => 0.0,
    }
}
