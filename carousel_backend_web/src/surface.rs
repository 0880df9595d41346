// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The DOM track.
//!
//! [`DomSurface`] implements [`RenderSurface`] over the track element that
//! holds the carousel items, moving it with a CSS `translateX` transform.

use carousel_core::backend::{Motion, RenderSurface};
use kurbo::Rect;
use web_sys::{Element, HtmlElement, Window};

/// CSS class toggled on the region and play/pause control while paused.
pub const PAUSED_CLASS: &str = "paused";

/// A [`RenderSurface`] backed by a track element and its children.
///
/// The children present when the surface is created are the logical items.
/// [`append_duplicate`](RenderSurface::append_duplicate) deep-clones them
/// after the originals.
pub struct DomSurface {
    window: Window,
    region: Element,
    track: HtmlElement,
    play_pause: Option<Element>,
    originals: Vec<Element>,
}

impl std::fmt::Debug for DomSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomSurface")
            .field("track", &"HtmlElement")
            .field("originals", &self.originals.len())
            .field("play_pause", &self.play_pause.is_some())
            .finish_non_exhaustive()
    }
}

impl DomSurface {
    /// Creates a surface over `track`, which lives inside `region`.
    ///
    /// `play_pause` is the optional control that mirrors the paused state.
    #[must_use]
    pub fn new(
        window: Window,
        region: Element,
        track: HtmlElement,
        play_pause: Option<Element>,
    ) -> Self {
        let children = track.children();
        let originals = (0..children.length())
            .filter_map(|i| children.item(i))
            .collect();
        Self {
            window,
            region,
            track,
            play_pause,
            originals,
        }
    }
}

/// The track's `transition` value for `motion`, e.g. `transform 0.5s ease-out`.
///
/// Instant motion yields an empty value, which removes any easing left over
/// from an earlier jump.
fn transition_css(motion: Motion) -> String {
    match motion {
        Motion::Instant => String::new(),
        Motion::Eased(duration) => format!("transform {}s ease-out", duration.as_secs_f64()),
    }
}

impl RenderSurface for DomSurface {
    fn item_count(&self) -> usize {
        self.originals.len()
    }

    fn append_duplicate(&mut self) {
        for item in &self.originals {
            if let Ok(clone) = item.clone_node_with_deep(true) {
                let _ = self.track.append_child(&clone);
            }
        }
    }

    fn item_bounds(&self) -> Option<Rect> {
        let first = self.originals.first()?;
        let r = first.get_bounding_client_rect();
        Some(Rect::new(r.left(), r.top(), r.right(), r.bottom()))
    }

    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0)
    }

    fn set_offset(&mut self, px: f64, motion: Motion) {
        let style = self.track.style();
        let _ = style.set_property("transition", &transition_css(motion));
        let _ = style.set_property("transform", &format!("translateX({px}px)"));
    }

    fn clear_easing(&mut self) {
        let _ = self.track.style().set_property("transition", "");
    }

    fn set_paused(&mut self, paused: bool) {
        if let Some(button) = &self.play_pause {
            let _ = button
                .class_list()
                .toggle_with_force(PAUSED_CLASS, paused);
        }
        let _ = self
            .region
            .class_list()
            .toggle_with_force(PAUSED_CLASS, paused);
    }
}
