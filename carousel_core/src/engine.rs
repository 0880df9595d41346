// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel state machine.
//!
//! [`Carousel`] drives a track of items through two superimposed motion
//! modes:
//!
//! - **Drift**: while playing, every [`tick`](Carousel::tick) moves the track
//!   left by `base_speed * speed_multiplier` px and applies the offset
//!   instantly. Once the offset reaches one full cycle
//!   (`item_width * item_count`) it resets to zero; the rendered track holds
//!   a duplicate of every item, so the reset is invisible.
//! - **Transitions**: [`go_to_slide`](Carousel::go_to_slide) snaps the track
//!   to a slide with an eased offset and suspends drift until the transition
//!   timer fires. Requests made while a transition is in flight are dropped,
//!   not queued.
//!
//! Drift keeps the current index in sync with the offset
//! (`floor(-position / item_width) mod item_count`), so after a transition
//! drift resumes from the slide that was jumped to.
//!
//! # Known limitation
//!
//! Hover-pause and explicit pause share one play flag. Unpausing explicitly
//! while hovering, then pausing again, still resumes playback when the
//! pointer leaves, because the hover latch was set on entry.

use alloc::boxed::Box;
use core::fmt;

use crate::backend::{IndicatorStrip, Motion, RenderSurface};
use crate::config::CarouselConfig;
use crate::error::InitError;
use crate::geometry::item_stride;
use crate::input::{InputEvent, Key, Swipe, SwipeTracker};
use crate::time::HostTime;
use crate::timer::{Timer, earliest};
use crate::timing::FrameTick;
use crate::trace::{
    InitEvent, LayoutEvent, NavigationRejectedEvent, PlayCause, PlayStateEvent, RejectReason,
    SlideCause, SlideChangeEvent, SwipeEvent, TraceSink, Tracer, TransitionBeginEvent,
    TransitionEndEvent, WrapEvent,
};

/// Observable engine state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineState {
    /// Horizontal track offset in px; always `<= 0`.
    pub position: f64,
    /// Current slide, in `[0, item_count)`.
    pub current_index: usize,
    /// Whether drift is running.
    pub is_playing: bool,
    /// Whether an eased transition is in flight (drift is suspended).
    pub is_transitioning: bool,
    /// Items that fit the viewport, per the configured breakpoints.
    ///
    /// Only consulted to detect layout changes on resize.
    pub visible_count: usize,
    /// Item stride (rendered width plus gap) in px; `0.0` if unmeasured.
    pub item_width: f64,
    /// Number of logical items.
    pub item_count: usize,
    /// Drift px per frame before the multiplier.
    pub base_speed: f64,
    /// Drift multiplier.
    pub speed_multiplier: f64,
}

impl EngineState {
    /// Drift px per frame.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.base_speed * self.speed_multiplier
    }

    /// Length of one full drift cycle in px.
    #[must_use]
    pub fn cycle_width(&self) -> f64 {
        self.item_width * self.item_count as f64
    }

    /// Offset that aligns `index` with the start of the viewport.
    #[must_use]
    pub fn slide_offset(&self, index: usize) -> f64 {
        -self.item_width * index as f64
    }

    /// Slide under the given drift offset.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "offset is non-positive and bounded by one cycle"
    )]
    fn index_at(&self, position: f64) -> usize {
        let raw = (-position / self.item_width) as usize;
        raw % self.item_count
    }
}

/// An auto-scrolling carousel bound to its render surface and indicators.
///
/// The engine is single-threaded and entirely driven by its caller: the
/// host delivers frame ticks, input events and the current time. Timers
/// (transition end, resize debounce) are plain deadlines fired from
/// [`advance`](Self::advance), which [`tick`](Self::tick) calls first.
pub struct Carousel<S, I> {
    surface: S,
    indicators: I,
    config: CarouselConfig,
    state: EngineState,
    was_playing_before_hover: bool,
    transition_timer: Timer,
    resize_timer: Timer,
    swipe: SwipeTracker,
    frame_index: u64,
    tracer: Tracer,
}

impl<S, I> fmt::Debug for Carousel<S, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("state", &self.state)
            .field("was_playing_before_hover", &self.was_playing_before_hover)
            .field("transition_timer", &self.transition_timer)
            .field("resize_timer", &self.resize_timer)
            .field("frame_index", &self.frame_index)
            .finish_non_exhaustive()
    }
}

impl<S: RenderSurface, I: IndicatorStrip> Carousel<S, I> {
    /// Creates a carousel without tracing.
    ///
    /// See [`with_tracer`](Self::with_tracer).
    pub fn new(surface: S, indicators: I, config: CarouselConfig) -> Result<Self, InitError> {
        Self::with_tracer(surface, indicators, config, Tracer::none())
    }

    /// Creates a carousel, preparing the surface and indicators.
    ///
    /// The surface is asked to append one duplicate of its items, the item
    /// stride and visible count are measured, and one indicator per item is
    /// built with the first active.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::EmptyContent`] if the surface has no items. The
    /// collaborators are left untouched in that case.
    pub fn with_tracer(
        mut surface: S,
        mut indicators: I,
        config: CarouselConfig,
        mut tracer: Tracer,
    ) -> Result<Self, InitError> {
        let item_count = surface.item_count();
        if item_count == 0 {
            return Err(InitError::EmptyContent);
        }

        surface.append_duplicate();
        let item_width = item_stride(surface.item_bounds(), config.item_gap);
        let visible_count = config.breakpoints.visible_count(surface.viewport_width());
        indicators.build(item_count, 0);
        if !config.autoplay {
            surface.set_paused(true);
        }

        tracer.init(&InitEvent {
            item_count,
            item_width,
            visible_count,
        });

        Ok(Self {
            surface,
            indicators,
            config,
            state: EngineState {
                position: 0.0,
                current_index: 0,
                is_playing: config.autoplay,
                is_transitioning: false,
                visible_count,
                item_width,
                item_count,
                base_speed: config.base_speed,
                speed_multiplier: sanitize_multiplier(config.speed_multiplier).unwrap_or(1.0),
            },
            was_playing_before_hover: false,
            transition_timer: Timer::new(),
            resize_timer: Timer::new(),
            swipe: SwipeTracker::new(),
            frame_index: 0,
            tracer,
        })
    }

    /// Installs a trace sink (effective only with the `trace` feature).
    pub fn set_trace_sink(&mut self, sink: Box<dyn TraceSink>) {
        self.tracer.set_sink(sink);
    }

    // -- frame loop --------------------------------------------------------

    /// Runs one frame: fires due timers, then advances drift.
    ///
    /// Drift is skipped while paused, while a transition is in flight, or
    /// while the item stride is unknown.
    pub fn tick(&mut self, tick: FrameTick) {
        self.frame_index = tick.frame_index;
        self.advance(tick.now);
        self.drift();
    }

    fn drift(&mut self) {
        let state = &mut self.state;
        if !state.is_playing || state.is_transitioning || state.item_width <= 0.0 {
            return;
        }

        state.position -= state.speed();
        let cycle_width = state.cycle_width();
        if -state.position >= cycle_width {
            state.position = 0.0;
            self.tracer.wrap(&WrapEvent {
                frame_index: self.frame_index,
                cycle_width,
            });
        }

        self.surface.set_offset(state.position, Motion::Instant);

        let index = state.index_at(state.position);
        if index != state.current_index {
            let from = state.current_index;
            state.current_index = index;
            self.indicators.set_active(index);
            self.tracer.slide_change(&SlideChangeEvent {
                from,
                to: index,
                cause: SlideCause::Drift,
            });
        }
    }

    /// Fires the transition and resize timers if they are due at `now`.
    pub fn advance(&mut self, now: HostTime) {
        if self.transition_timer.poll(now) {
            self.finish_transition(now);
        }
        if self.resize_timer.poll(now) {
            self.apply_layout();
        }
    }

    /// Earliest pending timer deadline, for hosts that schedule wake-ups.
    #[must_use]
    pub fn next_deadline(&self) -> Option<HostTime> {
        earliest(
            self.transition_timer.deadline(),
            self.resize_timer.deadline(),
        )
    }

    // -- navigation --------------------------------------------------------

    /// Starts an eased transition to `index`.
    ///
    /// Returns `false` (and changes nothing) if a transition is already in
    /// flight, `index` is already current, or `index` is out of range. On
    /// success the index, offset and indicators update immediately and drift
    /// stays suspended until the transition duration has elapsed.
    pub fn go_to_slide(&mut self, index: usize, now: HostTime) -> bool {
        let current = self.state.current_index;
        let rejected = if self.state.is_transitioning {
            Some(RejectReason::InFlight)
        } else if index == current {
            Some(RejectReason::AlreadyActive)
        } else if index >= self.state.item_count {
            Some(RejectReason::OutOfRange)
        } else {
            None
        };
        if let Some(reason) = rejected {
            self.tracer.navigation_rejected(&NavigationRejectedEvent {
                requested: index,
                current,
                reason,
            });
            return false;
        }

        let duration = self.config.transition_duration;
        self.state.is_transitioning = true;
        self.state.current_index = index;
        self.state.position = self.state.slide_offset(index);
        self.surface
            .set_offset(self.state.position, Motion::Eased(duration));
        self.transition_timer.arm(now, duration);
        self.indicators.set_active(index);

        self.tracer.slide_change(&SlideChangeEvent {
            from: current,
            to: index,
            cause: SlideCause::Navigation,
        });
        self.tracer.transition_begin(&TransitionBeginEvent {
            index,
            offset: self.state.position,
            duration,
            at: now,
        });
        true
    }

    /// Transitions to the following slide, wrapping to the first.
    pub fn next_slide(&mut self, now: HostTime) -> bool {
        let next = (self.state.current_index + 1) % self.state.item_count;
        self.go_to_slide(next, now)
    }

    /// Transitions to the preceding slide, wrapping to the last.
    pub fn previous_slide(&mut self, now: HostTime) -> bool {
        let n = self.state.item_count;
        let previous = (self.state.current_index + n - 1) % n;
        self.go_to_slide(previous, now)
    }

    fn finish_transition(&mut self, now: HostTime) {
        self.surface.clear_easing();
        self.state.is_transitioning = false;
        self.tracer.transition_end(&TransitionEndEvent {
            index: self.state.current_index,
            at: now,
        });
    }

    // -- play state --------------------------------------------------------

    /// Flips play/pause and reflects the paused state on the surface.
    pub fn toggle_play_pause(&mut self) {
        self.state.is_playing = !self.state.is_playing;
        self.surface.set_paused(!self.state.is_playing);
        self.tracer.play_state(&PlayStateEvent {
            playing: self.state.is_playing,
            cause: PlayCause::Toggle,
        });
    }

    /// Pauses drift while hovered, remembering whether it was playing.
    pub fn hover_enter(&mut self) {
        if self.state.is_playing {
            self.was_playing_before_hover = true;
            self.state.is_playing = false;
            self.tracer.play_state(&PlayStateEvent {
                playing: false,
                cause: PlayCause::HoverEnter,
            });
        }
    }

    /// Resumes drift if it was playing when the hover began.
    pub fn hover_leave(&mut self) {
        if self.was_playing_before_hover {
            self.state.is_playing = true;
            self.was_playing_before_hover = false;
            self.tracer.play_state(&PlayStateEvent {
                playing: true,
                cause: PlayCause::HoverLeave,
            });
        }
    }

    /// Sets the drift multiplier. Negative or non-finite values are ignored.
    pub fn set_speed_multiplier(&mut self, multiplier: f64) {
        if let Some(m) = sanitize_multiplier(multiplier) {
            self.state.speed_multiplier = m;
        }
    }

    // -- layout ------------------------------------------------------------

    /// Schedules a layout refresh after the resize debounce; every call
    /// restarts the quiet period.
    pub fn resize(&mut self, now: HostTime) {
        self.resize_timer.arm(now, self.config.resize_debounce);
    }

    fn apply_layout(&mut self) {
        let old_visible = self.state.visible_count;
        let new_visible = self
            .config
            .breakpoints
            .visible_count(self.surface.viewport_width());
        self.state.visible_count = new_visible;
        self.state.item_width = item_stride(self.surface.item_bounds(), self.config.item_gap);

        let realigned = old_visible != new_visible;
        if realigned {
            self.state.position = self.state.slide_offset(self.state.current_index);
            self.surface.set_offset(self.state.position, Motion::Instant);
        }

        self.tracer.layout(&LayoutEvent {
            old_visible,
            new_visible,
            item_width: self.state.item_width,
            realigned,
        });
    }

    // -- gestures and keys -------------------------------------------------

    /// Begins a touch drag at client x.
    pub fn touch_start(&mut self, x: f64) {
        self.swipe.start(x);
    }

    /// Updates the active touch drag.
    pub fn touch_move(&mut self, x: f64) {
        self.swipe.move_to(x);
    }

    /// Ends the touch drag; a swipe beyond the threshold navigates.
    ///
    /// Returns `true` if a navigation was started.
    pub fn touch_end(&mut self, now: HostTime) -> bool {
        let Some(swipe) = self.swipe.end(self.config.swipe_threshold) else {
            return false;
        };
        self.tracer.swipe(&SwipeEvent { swipe });
        match swipe {
            Swipe::Next => self.next_slide(now),
            Swipe::Previous => self.previous_slide(now),
        }
    }

    /// Handles a key press.
    ///
    /// Keys are ignored unless focus is within the carousel. Returns `true`
    /// if the key was consumed and its default action should be suppressed.
    pub fn key(&mut self, key: Key, focus_within: bool, now: HostTime) -> bool {
        if !focus_within {
            return false;
        }
        match key {
            Key::ArrowLeft => {
                self.previous_slide(now);
            }
            Key::ArrowRight => {
                self.next_slide(now);
            }
            Key::Space => self.toggle_play_pause(),
        }
        true
    }

    /// Routes an input event to the matching operation.
    ///
    /// Returns `true` if the host should suppress the event's default
    /// action.
    pub fn handle_input(&mut self, event: InputEvent, now: HostTime) -> bool {
        match event {
            InputEvent::Previous => {
                self.previous_slide(now);
            }
            InputEvent::Next => {
                self.next_slide(now);
            }
            InputEvent::TogglePlayPause => self.toggle_play_pause(),
            InputEvent::GoTo(index) => {
                self.go_to_slide(index, now);
            }
            InputEvent::HoverEnter => self.hover_enter(),
            InputEvent::HoverLeave => self.hover_leave(),
            InputEvent::TouchStart(x) => self.touch_start(x),
            InputEvent::TouchMove(x) => self.touch_move(x),
            InputEvent::TouchEnd => {
                self.touch_end(now);
            }
            InputEvent::Key { key, focus_within } => return self.key(key, focus_within, now),
            InputEvent::Resize => self.resize(now),
        }
        false
    }

    // -- accessors ---------------------------------------------------------

    /// Current engine state.
    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// The configuration the engine was created with.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// The render surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The indicator strip.
    #[must_use]
    pub fn indicators(&self) -> &I {
        &self.indicators
    }

    /// Tears the engine down, returning its collaborators.
    pub fn into_parts(self) -> (S, I) {
        (self.surface, self.indicators)
    }
}

fn sanitize_multiplier(m: f64) -> Option<f64> {
    (m.is_finite() && m >= 0.0).then_some(m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Breakpoints;
    use crate::time::Duration;
    use alloc::vec::Vec;
    use kurbo::Rect;

    /// Item rect of width 90; with the default 10 px gap the stride is 100.
    const ITEM: Rect = Rect::new(0.0, 0.0, 90.0, 60.0);
    const W: f64 = 100.0;

    #[derive(Debug)]
    struct FakeSurface {
        originals: usize,
        rendered: usize,
        bounds: Option<Rect>,
        viewport: f64,
        offsets: Vec<(f64, Motion)>,
        eased: bool,
        easing_cleared: usize,
        paused: bool,
    }

    impl FakeSurface {
        fn new(items: usize) -> Self {
            Self {
                originals: items,
                rendered: items,
                bounds: Some(ITEM),
                viewport: 1200.0,
                offsets: Vec::new(),
                eased: false,
                easing_cleared: 0,
                paused: false,
            }
        }

        fn last_offset(&self) -> Option<(f64, Motion)> {
            self.offsets.last().copied()
        }
    }

    impl RenderSurface for FakeSurface {
        fn item_count(&self) -> usize {
            self.originals
        }

        fn append_duplicate(&mut self) {
            self.rendered += self.originals;
        }

        fn item_bounds(&self) -> Option<Rect> {
            self.bounds
        }

        fn viewport_width(&self) -> f64 {
            self.viewport
        }

        fn set_offset(&mut self, px: f64, motion: Motion) {
            if matches!(motion, Motion::Eased(_)) {
                self.eased = true;
            }
            self.offsets.push((px, motion));
        }

        fn clear_easing(&mut self) {
            self.eased = false;
            self.easing_cleared += 1;
        }

        fn set_paused(&mut self, paused: bool) {
            self.paused = paused;
        }
    }

    #[derive(Debug, Default)]
    struct FakeStrip {
        count: usize,
        active: Option<usize>,
        updates: usize,
    }

    impl IndicatorStrip for FakeStrip {
        fn build(&mut self, count: usize, active: usize) {
            self.count = count;
            self.active = Some(active);
        }

        fn set_active(&mut self, index: usize) {
            self.active = Some(index);
            self.updates += 1;
        }
    }

    fn carousel(items: usize) -> Carousel<FakeSurface, FakeStrip> {
        Carousel::new(
            FakeSurface::new(items),
            FakeStrip::default(),
            CarouselConfig::web(),
        )
        .unwrap()
    }

    fn ms(ms: u64) -> HostTime {
        HostTime::from_millis(ms)
    }

    fn run_frames(c: &mut Carousel<FakeSurface, FakeStrip>, frames: u64) {
        for _ in 0..frames {
            let next = c.frame_index + 1;
            c.tick(FrameTick::new(ms(0), next));
        }
    }

    #[test]
    fn init_duplicates_items_and_builds_indicators() {
        for n in 1..=6 {
            let c = carousel(n);
            assert_eq!(c.surface().rendered, 2 * n, "originals plus one clone pass");
            assert_eq!(c.indicators().count, n);
            assert_eq!(c.indicators().active, Some(0));
            assert_eq!(c.state().item_width, W);
            assert_eq!(c.state().visible_count, 3);
            assert!(c.state().is_playing);
        }
    }

    #[test]
    fn empty_track_is_rejected() {
        let err = Carousel::new(
            FakeSurface::new(0),
            FakeStrip::default(),
            CarouselConfig::web(),
        )
        .unwrap_err();
        assert_eq!(err, InitError::EmptyContent);
    }

    #[test]
    fn missing_indicator_strip_is_a_no_op() {
        let mut c = Carousel::new(
            FakeSurface::new(3),
            None::<FakeStrip>,
            CarouselConfig::web(),
        )
        .unwrap();
        assert!(c.next_slide(ms(0)));
        assert_eq!(c.state().current_index, 1);
    }

    #[test]
    fn next_slide_cycles_through_all_items() {
        let n = 4;
        let mut c = carousel(n);
        let mut now = 0;
        for _ in 0..n {
            assert!(c.next_slide(ms(now)));
            now += 500;
            c.advance(ms(now));
        }
        assert_eq!(c.state().current_index, 0);
    }

    #[test]
    fn previous_slide_cycles_through_all_items() {
        let n = 5;
        let mut c = carousel(n);
        assert!(c.previous_slide(ms(0)));
        assert_eq!(c.state().current_index, n - 1, "wraps backwards");
        let mut now = 500;
        c.advance(ms(now));
        for _ in 1..n {
            assert!(c.previous_slide(ms(now)));
            now += 500;
            c.advance(ms(now));
        }
        assert_eq!(c.state().current_index, 0);
    }

    #[test]
    fn single_item_navigation_is_rejected() {
        let mut c = carousel(1);
        assert!(!c.next_slide(ms(0)));
        assert!(!c.previous_slide(ms(0)));
        assert!(!c.state().is_transitioning);
    }

    #[test]
    fn drift_is_monotonic_until_wrap() {
        let n = 3;
        let mut c = carousel(n);
        let cycle = W * 3.0;
        let mut last = c.state().position;
        for frame in 1..300 {
            c.tick(FrameTick::new(ms(0), frame));
            let p = c.state().position;
            assert!(p <= last, "position must not increase during drift");
            assert!(-p < cycle);
            last = p;
        }
        assert_eq!(c.state().position, -299.0);
        assert_eq!(c.state().current_index, 2);

        c.tick(FrameTick::new(ms(0), 300));
        assert_eq!(c.state().position, 0.0, "wraps exactly to zero");
        assert_eq!(c.state().current_index, 0);
        assert_eq!(c.surface().last_offset(), Some((0.0, Motion::Instant)));
    }

    #[test]
    fn drift_updates_indicators_on_boundaries_only() {
        let mut c = carousel(3);
        run_frames(&mut c, 99);
        assert_eq!(c.indicators().updates, 0);
        run_frames(&mut c, 1);
        assert_eq!(c.state().current_index, 1);
        assert_eq!(c.indicators().active, Some(1));
        assert_eq!(c.indicators().updates, 1);
    }

    #[test]
    fn drift_offsets_are_instant() {
        let mut c = carousel(2);
        run_frames(&mut c, 5);
        assert!(
            c.surface()
                .offsets
                .iter()
                .all(|&(_, m)| m == Motion::Instant)
        );
        assert_eq!(c.surface().offsets.len(), 5);
    }

    #[test]
    fn go_to_slide_scenario() {
        let mut c = carousel(5);
        assert!(c.go_to_slide(3, ms(1000)));
        assert_eq!(c.state().current_index, 3);
        assert_eq!(c.indicators().active, Some(3));
        assert_eq!(c.state().position, -3.0 * W);
        assert!(c.state().is_transitioning);
        assert_eq!(
            c.surface().last_offset(),
            Some((-300.0, Motion::Eased(Duration::from_millis(500))))
        );

        c.advance(ms(1499));
        assert!(c.state().is_transitioning);
        c.advance(ms(1500));
        assert!(!c.state().is_transitioning);
        assert!(!c.surface().eased, "easing removed after the transition");
        assert_eq!(c.surface().easing_cleared, 1);
    }

    #[test]
    fn go_to_slide_while_transitioning_is_a_no_op() {
        let mut c = carousel(5);
        assert!(c.go_to_slide(2, ms(0)));
        let before = *c.state();
        let offsets = c.surface().offsets.len();
        assert!(!c.go_to_slide(4, ms(100)));
        assert!(!c.next_slide(ms(100)));
        assert_eq!(*c.state(), before);
        assert_eq!(c.surface().offsets.len(), offsets);
        assert_eq!(c.next_deadline(), Some(ms(500)), "timer not re-armed");
    }

    #[test]
    fn go_to_current_or_out_of_range_is_rejected() {
        let mut c = carousel(3);
        assert!(!c.go_to_slide(0, ms(0)));
        assert!(!c.go_to_slide(3, ms(0)));
        assert!(!c.state().is_transitioning);
        assert!(c.surface().offsets.is_empty());
    }

    #[test]
    fn transition_suspends_drift() {
        let mut c = carousel(4);
        assert!(c.go_to_slide(2, ms(0)));
        c.tick(FrameTick::new(ms(16), 1));
        assert_eq!(c.state().position, -200.0, "no drift mid-transition");

        c.tick(FrameTick::new(ms(500), 2));
        assert!(!c.state().is_transitioning);
        assert_eq!(c.state().position, -201.0, "drift resumes from the slide");
        assert_eq!(c.state().current_index, 2);
    }

    #[test]
    fn toggle_pauses_drift_and_marks_surface() {
        let mut c = carousel(3);
        c.toggle_play_pause();
        assert!(!c.state().is_playing);
        assert!(c.surface().paused);
        run_frames(&mut c, 10);
        assert_eq!(c.state().position, 0.0);
        assert!(c.surface().offsets.is_empty());

        c.toggle_play_pause();
        assert!(c.state().is_playing);
        assert!(!c.surface().paused);
        run_frames(&mut c, 1);
        assert_eq!(c.state().position, -1.0);
    }

    #[test]
    fn autoplay_off_starts_paused() {
        let config = CarouselConfig {
            autoplay: false,
            ..CarouselConfig::web()
        };
        let c = Carousel::new(FakeSurface::new(3), FakeStrip::default(), config).unwrap();
        assert!(!c.state().is_playing);
        assert!(c.surface().paused);
    }

    #[test]
    fn hover_pauses_and_resumes_when_playing() {
        let mut c = carousel(3);
        c.hover_enter();
        assert!(!c.state().is_playing);
        assert!(!c.surface().paused, "hover does not toggle the paused look");
        c.hover_leave();
        assert!(c.state().is_playing);
    }

    #[test]
    fn hover_never_starts_playback() {
        let mut c = carousel(3);
        c.toggle_play_pause();
        c.hover_enter();
        assert!(!c.state().is_playing);
        c.hover_leave();
        assert!(!c.state().is_playing);
    }

    #[test]
    fn explicit_pause_during_hover_is_overridden_on_leave() {
        let mut c = carousel(3);
        c.hover_enter();
        c.toggle_play_pause();
        c.toggle_play_pause();
        assert!(!c.state().is_playing);
        c.hover_leave();
        assert!(c.state().is_playing, "hover latch wins");
    }

    #[test]
    fn swipe_past_threshold_navigates_once() {
        let mut c = carousel(5);
        c.touch_start(300.0);
        c.touch_move(270.0);
        c.touch_move(240.0);
        assert!(c.touch_end(ms(0)));
        assert_eq!(c.state().current_index, 1);
        assert_eq!(c.indicators().updates, 1);
        assert!(!c.touch_end(ms(10)), "release without a new touch");
    }

    #[test]
    fn short_swipe_is_ignored() {
        let mut c = carousel(5);
        c.touch_start(300.0);
        c.touch_move(270.0);
        assert!(!c.touch_end(ms(0)));
        assert_eq!(c.state().current_index, 0);
        assert!(!c.state().is_transitioning);
    }

    #[test]
    fn rightward_swipe_goes_back() {
        let mut c = carousel(5);
        c.touch_start(100.0);
        c.touch_move(200.0);
        assert!(c.touch_end(ms(0)));
        assert_eq!(c.state().current_index, 4);
    }

    #[test]
    fn keys_require_focus() {
        let mut c = carousel(3);
        assert!(!c.key(Key::ArrowRight, false, ms(0)));
        assert!(!c.key(Key::Space, false, ms(0)));
        assert_eq!(c.state().current_index, 0);
        assert!(c.state().is_playing);

        assert!(c.key(Key::ArrowRight, true, ms(0)));
        assert_eq!(c.state().current_index, 1);
        c.advance(ms(500));
        assert!(c.key(Key::ArrowLeft, true, ms(500)));
        assert_eq!(c.state().current_index, 0);
        assert!(c.key(Key::Space, true, ms(600)));
        assert!(!c.state().is_playing);
    }

    #[test]
    fn handle_input_routes_events() {
        let mut c = carousel(4);
        assert!(!c.handle_input(InputEvent::GoTo(2), ms(0)));
        assert_eq!(c.state().current_index, 2);
        c.advance(ms(500));
        assert!(!c.handle_input(InputEvent::Next, ms(500)));
        assert_eq!(c.state().current_index, 3);
        c.advance(ms(1000));
        c.handle_input(InputEvent::HoverEnter, ms(1000));
        assert!(!c.state().is_playing);
        c.handle_input(InputEvent::HoverLeave, ms(1000));
        assert!(c.state().is_playing);
        let consumed = c.handle_input(
            InputEvent::Key {
                key: Key::Space,
                focus_within: true,
            },
            ms(1000),
        );
        assert!(consumed);
        assert!(!c.state().is_playing);
        c.handle_input(InputEvent::Resize, ms(1000));
        assert_eq!(c.next_deadline(), Some(ms(1250)));
    }

    #[test]
    fn resize_across_breakpoint_realigns_instantly() {
        let mut c = carousel(5);
        assert!(c.go_to_slide(2, ms(0)));
        c.advance(ms(500));
        run_frames(&mut c, 30);
        assert_eq!(c.state().position, -230.0);

        c.surface.viewport = 500.0;
        c.resize(ms(1000));
        c.advance(ms(1249));
        assert_eq!(c.state().visible_count, 3, "still debouncing");

        c.advance(ms(1250));
        assert_eq!(c.state().visible_count, 1);
        assert_eq!(c.state().position, -2.0 * W);
        assert_eq!(c.surface().last_offset(), Some((-200.0, Motion::Instant)));
    }

    #[test]
    fn resize_within_breakpoint_only_remeasures() {
        let mut c = carousel(3);
        run_frames(&mut c, 42);
        c.surface.viewport = 1000.0;
        c.surface.bounds = Some(Rect::new(0.0, 0.0, 140.0, 60.0));
        let offsets = c.surface().offsets.len();
        c.resize(ms(0));
        c.advance(ms(250));
        assert_eq!(c.state().visible_count, 3);
        assert_eq!(c.state().item_width, 150.0);
        assert_eq!(c.state().position, -42.0, "no realignment");
        assert_eq!(c.surface().offsets.len(), offsets);
    }

    #[test]
    fn resize_burst_is_debounced() {
        let mut c = carousel(3);
        c.surface.viewport = 700.0;
        c.resize(ms(0));
        c.resize(ms(100));
        c.resize(ms(200));
        c.advance(ms(300));
        assert_eq!(c.state().visible_count, 3);
        assert_eq!(c.next_deadline(), Some(ms(450)));
        c.advance(ms(450));
        assert_eq!(c.state().visible_count, 2);
        assert_eq!(c.next_deadline(), None);
    }

    #[test]
    fn custom_breakpoints() {
        let config = CarouselConfig {
            breakpoints: Breakpoints {
                single_max: 400.0,
                double_max: 800.0,
            },
            ..CarouselConfig::web()
        };
        let mut surface = FakeSurface::new(3);
        surface.viewport = 500.0;
        let c = Carousel::new(surface, FakeStrip::default(), config).unwrap();
        assert_eq!(c.state().visible_count, 2);
    }

    #[test]
    fn unmeasured_items_suspend_drift() {
        let mut surface = FakeSurface::new(3);
        surface.bounds = None;
        let mut c = Carousel::new(surface, FakeStrip::default(), CarouselConfig::web()).unwrap();
        assert_eq!(c.state().item_width, 0.0);
        run_frames(&mut c, 10);
        assert_eq!(c.state().position, 0.0);
        assert!(c.surface().offsets.is_empty());
    }

    #[test]
    fn speed_multiplier_scales_drift() {
        let mut c = carousel(3);
        c.set_speed_multiplier(2.5);
        run_frames(&mut c, 4);
        assert_eq!(c.state().position, -10.0);
        c.set_speed_multiplier(f64::NAN);
        c.set_speed_multiplier(-1.0);
        assert_eq!(c.state().speed_multiplier, 2.5);
    }

    #[test]
    fn into_parts_returns_collaborators() {
        let c = carousel(2);
        let (surface, strip) = c.into_parts();
        assert_eq!(surface.rendered, 4);
        assert_eq!(strip.count, 2);
    }
}
