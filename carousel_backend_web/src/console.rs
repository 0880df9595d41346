// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trace output to the browser console.

use carousel_core::input::Swipe;
use carousel_core::trace::{
    InitEvent, LayoutEvent, NavigationRejectedEvent, PlayStateEvent, SlideChangeEvent, SwipeEvent,
    TraceSink, TransitionBeginEvent, TransitionEndEvent, WrapEvent,
};
use gloo::console;

/// A [`TraceSink`] that logs every engine event with `console.log`.
///
/// Events are only emitted when `carousel_core` is built with its `trace`
/// feature (this crate's `trace` feature forwards to it).
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl TraceSink for ConsoleSink {
    fn on_init(&mut self, e: &InitEvent) {
        console::log!(format!(
            "carousel: init items={} stride={}px visible={}",
            e.item_count, e.item_width, e.visible_count
        ));
    }

    fn on_slide_change(&mut self, e: &SlideChangeEvent) {
        console::log!(format!(
            "carousel: slide {} -> {} ({:?})",
            e.from, e.to, e.cause
        ));
    }

    fn on_transition_begin(&mut self, e: &TransitionBeginEvent) {
        console::log!(format!(
            "carousel: transition to {} offset={}px over {}ms",
            e.index,
            e.offset,
            e.duration.as_millis()
        ));
    }

    fn on_transition_end(&mut self, e: &TransitionEndEvent) {
        console::log!(format!("carousel: transition to {} done", e.index));
    }

    fn on_wrap(&mut self, e: &WrapEvent) {
        console::log!(format!(
            "carousel: wrapped at frame {} (cycle {}px)",
            e.frame_index, e.cycle_width
        ));
    }

    fn on_play_state(&mut self, e: &PlayStateEvent) {
        console::log!(format!(
            "carousel: playing={} ({:?})",
            e.playing, e.cause
        ));
    }

    fn on_layout(&mut self, e: &LayoutEvent) {
        console::log!(format!(
            "carousel: layout visible {} -> {} stride={}px realigned={}",
            e.old_visible, e.new_visible, e.item_width, e.realigned
        ));
    }

    fn on_navigation_rejected(&mut self, e: &NavigationRejectedEvent) {
        console::log!(format!(
            "carousel: ignored slide {} (current {}, {:?})",
            e.requested, e.current, e.reason
        ));
    }

    fn on_swipe(&mut self, e: &SwipeEvent) {
        let direction = match e.swipe {
            Swipe::Next => "next",
            Swipe::Previous => "previous",
        };
        console::log!(format!("carousel: swipe {direction}"));
    }
}
