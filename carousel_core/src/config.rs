// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration.

use crate::geometry::Breakpoints;
use crate::time::Duration;

/// Tunable constants for a [`Carousel`](crate::engine::Carousel).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Drift distance per frame, in px, before the multiplier is applied.
    pub base_speed: f64,
    /// Initial multiplier applied to `base_speed`.
    pub speed_multiplier: f64,
    /// Horizontal gap between items, added to each measured item width.
    pub item_gap: f64,
    /// Length of an eased slide transition.
    pub transition_duration: Duration,
    /// Quiet period a resize burst must observe before layout is recomputed.
    pub resize_debounce: Duration,
    /// Minimum horizontal swipe distance (exclusive) that navigates.
    pub swipe_threshold: f64,
    /// Viewport breakpoints for the visible item count.
    pub breakpoints: Breakpoints,
    /// Whether drift starts immediately.
    pub autoplay: bool,
}

impl CarouselConfig {
    /// Defaults matching the stock page styling: 1 px/frame drift, 10 px
    /// gaps, 500 ms transitions and a 250 ms resize debounce.
    #[must_use]
    pub const fn web() -> Self {
        Self {
            base_speed: 1.0,
            speed_multiplier: 1.0,
            item_gap: 10.0,
            transition_duration: Duration::from_millis(500),
            resize_debounce: Duration::from_millis(250),
            swipe_threshold: 50.0,
            breakpoints: Breakpoints::web(),
            autoplay: true,
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::web()
    }
}
