// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Host times
//! are printed in milliseconds.

use std::io::Write;

use carousel_core::input::Swipe;
use carousel_core::time::HostTime;
use carousel_core::trace::{
    InitEvent, LayoutEvent, NavigationRejectedEvent, PlayCause, PlayStateEvent, RejectReason,
    SlideCause, SlideChangeEvent, SwipeEvent, TraceSink, TransitionBeginEvent,
    TransitionEndEvent, WrapEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn host_ms(t: HostTime) -> f64 {
    t.micros() as f64 / 1000.0
}

pub(crate) fn slide_cause_name(cause: SlideCause) -> &'static str {
    match cause {
        SlideCause::Drift => "drift",
        SlideCause::Navigation => "navigation",
    }
}

pub(crate) fn play_cause_name(cause: PlayCause) -> &'static str {
    match cause {
        PlayCause::Toggle => "toggle",
        PlayCause::HoverEnter => "hover-enter",
        PlayCause::HoverLeave => "hover-leave",
    }
}

pub(crate) fn reject_reason_name(reason: RejectReason) -> &'static str {
    match reason {
        RejectReason::InFlight => "in-flight",
        RejectReason::AlreadyActive => "already-active",
        RejectReason::OutOfRange => "out-of-range",
    }
}

pub(crate) fn swipe_name(swipe: Swipe) -> &'static str {
    match swipe {
        Swipe::Next => "next",
        Swipe::Previous => "previous",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_init(&mut self, e: &InitEvent) {
        let _ = writeln!(
            self.writer,
            "[init] items={} stride={:.1}px visible={}",
            e.item_count, e.item_width, e.visible_count,
        );
    }

    fn on_slide_change(&mut self, e: &SlideChangeEvent) {
        let _ = writeln!(
            self.writer,
            "[slide] {} -> {} ({})",
            e.from,
            e.to,
            slide_cause_name(e.cause),
        );
    }

    fn on_transition_begin(&mut self, e: &TransitionBeginEvent) {
        let _ = writeln!(
            self.writer,
            "[transition] begin index={} offset={:.1}px duration={}ms at={:.1}ms",
            e.index,
            e.offset,
            e.duration.as_millis(),
            host_ms(e.at),
        );
    }

    fn on_transition_end(&mut self, e: &TransitionEndEvent) {
        let _ = writeln!(
            self.writer,
            "[transition] end index={} at={:.1}ms",
            e.index,
            host_ms(e.at),
        );
    }

    fn on_wrap(&mut self, e: &WrapEvent) {
        let _ = writeln!(
            self.writer,
            "[wrap] frame={} cycle={:.1}px",
            e.frame_index, e.cycle_width,
        );
    }

    fn on_play_state(&mut self, e: &PlayStateEvent) {
        let _ = writeln!(
            self.writer,
            "[play] playing={} cause={}",
            e.playing,
            play_cause_name(e.cause),
        );
    }

    fn on_layout(&mut self, e: &LayoutEvent) {
        let _ = writeln!(
            self.writer,
            "[layout] visible {} -> {} stride={:.1}px realigned={}",
            e.old_visible, e.new_visible, e.item_width, e.realigned,
        );
    }

    fn on_navigation_rejected(&mut self, e: &NavigationRejectedEvent) {
        let _ = writeln!(
            self.writer,
            "[rejected] index={} current={} reason={}",
            e.requested,
            e.current,
            reject_reason_name(e.reason),
        );
    }

    fn on_swipe(&mut self, e: &SwipeEvent) {
        let _ = writeln!(self.writer, "[swipe] {}", swipe_name(e.swipe));
    }
}
