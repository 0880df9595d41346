// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform-neutral input events and swipe recognition.

/// A key the carousel reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Previous slide.
    ArrowLeft,
    /// Next slide.
    ArrowRight,
    /// Toggle play/pause.
    Space,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            " " => Some(Self::Space),
            _ => None,
        }
    }
}

/// An event routed to [`Carousel::handle_input`](crate::engine::Carousel::handle_input).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// The previous-slide control was activated.
    Previous,
    /// The next-slide control was activated.
    Next,
    /// The play/pause control was activated.
    TogglePlayPause,
    /// An indicator was activated.
    GoTo(usize),
    /// The pointer entered the carousel region.
    HoverEnter,
    /// The pointer left the carousel region.
    HoverLeave,
    /// A touch began at the given client x.
    TouchStart(f64),
    /// The active touch moved to the given client x.
    TouchMove(f64),
    /// The active touch was released.
    TouchEnd,
    /// A key was pressed anywhere on the page.
    Key {
        /// The key.
        key: Key,
        /// Whether focus was inside the carousel region.
        focus_within: bool,
    },
    /// The viewport was resized.
    Resize,
}

/// Direction of a recognized swipe, in navigation terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Swipe {
    /// Leftward drag: show the next slide.
    Next,
    /// Rightward drag: show the previous slide.
    Previous,
}

/// Tracks one horizontal touch drag at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: f64,
    end_x: f64,
    dragging: bool,
}

impl SwipeTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            start_x: 0.0,
            end_x: 0.0,
            dragging: false,
        }
    }

    /// Begins a drag at `x`.
    pub fn start(&mut self, x: f64) {
        self.start_x = x;
        // A touch that never moves has no displacement.
        self.end_x = x;
        self.dragging = true;
    }

    /// Records the latest position of the active drag.
    pub fn move_to(&mut self, x: f64) {
        if self.dragging {
            self.end_x = x;
        }
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Ends the drag and classifies it.
    ///
    /// Returns `None` if no drag was active or if the net displacement does
    /// not exceed `threshold`.
    pub fn end(&mut self, threshold: f64) -> Option<Swipe> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;
        let diff = self.start_x - self.end_x;
        if diff > threshold {
            Some(Swipe::Next)
        } else if diff < -threshold {
            Some(Swipe::Previous)
        } else {
            None
        }
    }
}
