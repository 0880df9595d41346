// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps every event, in
//! order, as a [`RecordedEvent`]. Wrap it in `Rc<RefCell<_>>` to keep a
//! handle after installing it on an engine.

use carousel_core::trace::{
    InitEvent, LayoutEvent, NavigationRejectedEvent, PlayStateEvent, SlideChangeEvent, SwipeEvent,
    TraceSink, TransitionBeginEvent, TransitionEndEvent, WrapEvent,
};

/// A single recorded trace event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecordedEvent {
    /// See [`InitEvent`].
    Init(InitEvent),
    /// See [`SlideChangeEvent`].
    SlideChange(SlideChangeEvent),
    /// See [`TransitionBeginEvent`].
    TransitionBegin(TransitionBeginEvent),
    /// See [`TransitionEndEvent`].
    TransitionEnd(TransitionEndEvent),
    /// See [`WrapEvent`].
    Wrap(WrapEvent),
    /// See [`PlayStateEvent`].
    PlayState(PlayStateEvent),
    /// See [`LayoutEvent`].
    Layout(LayoutEvent),
    /// See [`NavigationRejectedEvent`].
    NavigationRejected(NavigationRejectedEvent),
    /// See [`SwipeEvent`].
    Swipe(SwipeEvent),
}

impl RecordedEvent {
    /// Short event name, as used by the pretty printer and JSON export.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Init(_) => "init",
            Self::SlideChange(_) => "slide",
            Self::TransitionBegin(_) => "transition-begin",
            Self::TransitionEnd(_) => "transition-end",
            Self::Wrap(_) => "wrap",
            Self::PlayState(_) => "play",
            Self::Layout(_) => "layout",
            Self::NavigationRejected(_) => "rejected",
            Self::Swipe(_) => "swipe",
        }
    }

    /// Delivers this event to another sink.
    pub fn replay(&self, sink: &mut dyn TraceSink) {
        match self {
            Self::Init(e) => sink.on_init(e),
            Self::SlideChange(e) => sink.on_slide_change(e),
            Self::TransitionBegin(e) => sink.on_transition_begin(e),
            Self::TransitionEnd(e) => sink.on_transition_end(e),
            Self::Wrap(e) => sink.on_wrap(e),
            Self::PlayState(e) => sink.on_play_state(e),
            Self::Layout(e) => sink.on_layout(e),
            Self::NavigationRejected(e) => sink.on_navigation_rejected(e),
            Self::Swipe(e) => sink.on_swipe(e),
        }
    }
}

/// A [`TraceSink`] that records events in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Discards everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TraceSink for RecorderSink {
    fn on_init(&mut self, e: &InitEvent) {
        self.events.push(RecordedEvent::Init(*e));
    }

    fn on_slide_change(&mut self, e: &SlideChangeEvent) {
        self.events.push(RecordedEvent::SlideChange(*e));
    }

    fn on_transition_begin(&mut self, e: &TransitionBeginEvent) {
        self.events.push(RecordedEvent::TransitionBegin(*e));
    }

    fn on_transition_end(&mut self, e: &TransitionEndEvent) {
        self.events.push(RecordedEvent::TransitionEnd(*e));
    }

    fn on_wrap(&mut self, e: &WrapEvent) {
        self.events.push(RecordedEvent::Wrap(*e));
    }

    fn on_play_state(&mut self, e: &PlayStateEvent) {
        self.events.push(RecordedEvent::PlayState(*e));
    }

    fn on_layout(&mut self, e: &LayoutEvent) {
        self.events.push(RecordedEvent::Layout(*e));
    }

    fn on_navigation_rejected(&mut self, e: &NavigationRejectedEvent) {
        self.events.push(RecordedEvent::NavigationRejected(*e));
    }

    fn on_swipe(&mut self, e: &SwipeEvent) {
        self.events.push(RecordedEvent::Swipe(*e));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
