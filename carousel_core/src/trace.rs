// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the engine.
//!
//! This module provides a [`TraceSink`] trait with one method per engine
//! event. All method bodies default to no-ops, so implementing only the
//! events you care about is fine.
//!
//! [`Tracer`] owns an optional boxed [`TraceSink`]. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing and
//! [`Tracer::set_sink`] drops the sink immediately. When **on**, each method
//! performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use crate::input::Swipe;
use crate::time::{Duration, HostTime};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// What moved the current index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlideCause {
    /// Continuous drift crossed an item boundary.
    Drift,
    /// A discrete navigation request (button, indicator, key, swipe).
    Navigation,
}

/// What changed the play state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayCause {
    /// The explicit play/pause toggle.
    Toggle,
    /// The pointer entered the carousel.
    HoverEnter,
    /// The pointer left the carousel.
    HoverLeave,
}

/// Why a navigation request was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// Another transition is still running.
    InFlight,
    /// The requested slide is already current.
    AlreadyActive,
    /// The requested index is not below the item count.
    OutOfRange,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted once when the engine has measured its surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InitEvent {
    /// Number of logical items.
    pub item_count: usize,
    /// Measured item stride in px.
    pub item_width: f64,
    /// Visible count for the initial viewport.
    pub visible_count: usize,
}

/// Emitted whenever the current index changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlideChangeEvent {
    /// Previous index.
    pub from: usize,
    /// New index.
    pub to: usize,
    /// What caused the change.
    pub cause: SlideCause,
}

/// Emitted when an eased slide transition starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionBeginEvent {
    /// Target slide.
    pub index: usize,
    /// Target offset in px.
    pub offset: f64,
    /// Transition length.
    pub duration: Duration,
    /// Host time at which the transition started.
    pub at: HostTime,
}

/// Emitted when the transition timer fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransitionEndEvent {
    /// Slide the transition ended on.
    pub index: usize,
    /// Host time the timer was observed to fire.
    pub at: HostTime,
}

/// Emitted when drift completes a full cycle and resets to zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WrapEvent {
    /// Frame on which the wrap happened.
    pub frame_index: u64,
    /// Cycle length in px (`item_width * item_count`).
    pub cycle_width: f64,
}

/// Emitted when the play state flips.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlayStateEvent {
    /// Play state after the change.
    pub playing: bool,
    /// What caused the change.
    pub cause: PlayCause,
}

/// Emitted when a debounced resize is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutEvent {
    /// Visible count before the resize.
    pub old_visible: usize,
    /// Visible count after the resize.
    pub new_visible: usize,
    /// Re-measured item stride.
    pub item_width: f64,
    /// Whether the position was snapped to the current slide.
    pub realigned: bool,
}

/// Emitted when a navigation request is dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NavigationRejectedEvent {
    /// Requested slide.
    pub requested: usize,
    /// Current slide at the time of the request.
    pub current: usize,
    /// Why it was dropped.
    pub reason: RejectReason,
}

/// Emitted when a touch drag is recognized as a swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SwipeEvent {
    /// Recognized direction.
    pub swipe: Swipe,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the engine.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called once after initialization.
    fn on_init(&mut self, e: &InitEvent) {
        _ = e;
    }

    /// Called when the current index changes.
    fn on_slide_change(&mut self, e: &SlideChangeEvent) {
        _ = e;
    }

    /// Called when an eased transition starts.
    fn on_transition_begin(&mut self, e: &TransitionBeginEvent) {
        _ = e;
    }

    /// Called when an eased transition ends.
    fn on_transition_end(&mut self, e: &TransitionEndEvent) {
        _ = e;
    }

    /// Called when drift wraps to zero.
    fn on_wrap(&mut self, e: &WrapEvent) {
        _ = e;
    }

    /// Called when the play state flips.
    fn on_play_state(&mut self, e: &PlayStateEvent) {
        _ = e;
    }

    /// Called when a debounced resize is applied.
    fn on_layout(&mut self, e: &LayoutEvent) {
        _ = e;
    }

    /// Called when a navigation request is dropped.
    fn on_navigation_rejected(&mut self, e: &NavigationRejectedEvent) {
        _ = e;
    }

    /// Called when a swipe is recognized.
    fn on_swipe(&mut self, e: &SwipeEvent) {
        _ = e;
    }
}

/// Lets a caller keep a handle on a sink after handing it to an engine.
impl<T: TraceSink + ?Sized> TraceSink for Rc<RefCell<T>> {
    fn on_init(&mut self, e: &InitEvent) {
        self.borrow_mut().on_init(e);
    }

    fn on_slide_change(&mut self, e: &SlideChangeEvent) {
        self.borrow_mut().on_slide_change(e);
    }

    fn on_transition_begin(&mut self, e: &TransitionBeginEvent) {
        self.borrow_mut().on_transition_begin(e);
    }

    fn on_transition_end(&mut self, e: &TransitionEndEvent) {
        self.borrow_mut().on_transition_end(e);
    }

    fn on_wrap(&mut self, e: &WrapEvent) {
        self.borrow_mut().on_wrap(e);
    }

    fn on_play_state(&mut self, e: &PlayStateEvent) {
        self.borrow_mut().on_play_state(e);
    }

    fn on_layout(&mut self, e: &LayoutEvent) {
        self.borrow_mut().on_layout(e);
    }

    fn on_navigation_rejected(&mut self, e: &NavigationRejectedEvent) {
        self.borrow_mut().on_navigation_rejected(e);
    }

    fn on_swipe(&mut self, e: &SwipeEvent) {
        self.borrow_mut().on_swipe(e);
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Owner of an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
#[derive(Default)]
pub struct Tracer {
    #[cfg(feature = "trace")]
    sink: Option<Box<dyn TraceSink>>,
}

impl core::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl Tracer {
    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates a tracer that dispatches to `sink`.
    #[inline]
    #[must_use]
    pub fn new(sink: Box<dyn TraceSink>) -> Self {
        let mut tracer = Self::none();
        tracer.set_sink(sink);
        tracer
    }

    /// Installs `sink`, replacing any previous one.
    ///
    /// Without the `trace` feature the sink is dropped immediately.
    #[inline]
    pub fn set_sink(&mut self, sink: Box<dyn TraceSink>) {
        #[cfg(feature = "trace")]
        {
            self.sink = Some(sink);
        }
        #[cfg(not(feature = "trace"))]
        {
            drop(sink);
        }
    }

    /// Emits an [`InitEvent`].
    #[inline]
    pub fn init(&mut self, e: &InitEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_init(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SlideChangeEvent`].
    #[inline]
    pub fn slide_change(&mut self, e: &SlideChangeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_slide_change(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TransitionBeginEvent`].
    #[inline]
    pub fn transition_begin(&mut self, e: &TransitionBeginEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_transition_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TransitionEndEvent`].
    #[inline]
    pub fn transition_end(&mut self, e: &TransitionEndEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_transition_end(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`WrapEvent`].
    #[inline]
    pub fn wrap(&mut self, e: &WrapEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_wrap(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PlayStateEvent`].
    #[inline]
    pub fn play_state(&mut self, e: &PlayStateEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_play_state(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LayoutEvent`].
    #[inline]
    pub fn layout(&mut self, e: &LayoutEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layout(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`NavigationRejectedEvent`].
    #[inline]
    pub fn navigation_rejected(&mut self, e: &NavigationRejectedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_navigation_rejected(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SwipeEvent`].
    #[inline]
    pub fn swipe(&mut self, e: &SwipeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_swipe(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
