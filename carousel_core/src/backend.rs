// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator contract for platform integrations.
//!
//! The engine never touches a document directly. A backend provides:
//!
//! - **Render surface**: implements [`RenderSurface`]: the track that holds
//!   the items, reports their geometry and accepts horizontal offsets.
//!
//! - **Indicator strip**: implements [`IndicatorStrip`]: one indicator per
//!   logical item, exactly one active.
//!
//! - **Tick source**: delivers a [`FrameTick`] per display refresh to
//!   [`Carousel::tick`]. Like the timers, this is backend-specific and not
//!   abstracted by a trait because setup and teardown differ per platform.
//!
//! - **Input**: translates platform events into
//!   [`InputEvent`](crate::input::InputEvent)s for
//!   [`Carousel::handle_input`].
//!
//! # Frame loop pseudocode
//!
//! ```rust,ignore
//! let mut carousel = Carousel::new(surface, indicators, CarouselConfig::web())?;
//!
//! fn on_frame(tick: FrameTick) {
//!     // Fires due timers, then drifts and applies the offset.
//!     carousel.tick(tick);
//! }
//!
//! fn on_event(event: InputEvent) -> bool {
//!     // `true` means the host should suppress the default action.
//!     carousel.handle_input(event, now())
//! }
//! ```
//!
//! [`FrameTick`]: crate::timing::FrameTick
//! [`Carousel::tick`]: crate::engine::Carousel::tick
//! [`Carousel::handle_input`]: crate::engine::Carousel::handle_input

use kurbo::Rect;

use crate::time::Duration;

/// How an offset change should be presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    /// Jump to the offset in the same frame (drift, realignment).
    Instant,
    /// Animate to the offset with an ease-out curve over the given duration.
    Eased(Duration),
}

/// The visual track that holds the carousel items.
pub trait RenderSurface {
    /// Number of logical (original, non-duplicated) items.
    fn item_count(&self) -> usize;

    /// Appends one full duplicate of the original items after them so the
    /// track can drift past the last original without a visible seam.
    fn append_duplicate(&mut self);

    /// Rendered bounds of one item, or `None` if nothing can be measured.
    fn item_bounds(&self) -> Option<Rect>;

    /// Width of the viewport used for breakpoint selection.
    fn viewport_width(&self) -> f64;

    /// Moves the track to the horizontal offset `px` (always `<= 0`).
    fn set_offset(&mut self, px: f64, motion: Motion);

    /// Removes any easing left over from an [`Motion::Eased`] offset so that
    /// later instantaneous offsets are not animated.
    fn clear_easing(&mut self);

    /// Reflects the explicit play/pause state on the surface and its
    /// play/pause control, if any.
    fn set_paused(&mut self, paused: bool);
}

/// A row of indicators mirroring the current slide.
pub trait IndicatorStrip {
    /// Replaces all indicators with `count` fresh ones, `active` marked.
    fn build(&mut self, count: usize, active: usize);

    /// Marks `index` active and every other indicator inactive.
    fn set_active(&mut self, index: usize);
}

/// An absent strip ignores every update.
impl<T: IndicatorStrip> IndicatorStrip for Option<T> {
    fn build(&mut self, count: usize, active: usize) {
        if let Some(strip) = self {
            strip.build(count, active);
        }
    }

    fn set_active(&mut self, index: usize) {
        if let Some(strip) = self {
            strip.set_active(index);
        }
    }
}
