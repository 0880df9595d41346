// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wiring a carousel into a live page.
//!
//! [`mount`] finds the anchors, builds the engine over a [`DomSurface`] and
//! [`DomIndicators`], starts a [`RafLoop`] and registers the DOM listeners.
//! Everything it creates is owned by the returned [`Mount`].
//!
//! Timer deadlines are normally fired by the frame loop. A `setTimeout`
//! wake-up at [`Carousel::next_deadline`] covers the case where the browser
//! stops delivering frames (for example a hidden tab), so a transition or a
//! debounced resize still completes on time.

use std::cell::RefCell;
use std::rc::Rc;

use carousel_core::config::CarouselConfig;
use carousel_core::engine::{Carousel, EngineState};
use carousel_core::error::InitError;
use carousel_core::input::{InputEvent, Key};
use carousel_core::time::HostTime;
use gloo::console;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast as _;
use web_sys::{Document, Element, Event, HtmlElement, HtmlImageElement, KeyboardEvent, TouchEvent};

use crate::indicators::{DomIndicators, dot_index};
use crate::now;
use crate::raf::RafLoop;
use crate::surface::DomSurface;

/// Class added to an image's parent while the image failed to load.
pub const LOADING_CLASS: &str = "loading";

/// Alt text given to images that failed to load.
pub const UNAVAILABLE_ALT: &str = "Image unavailable";

/// CSS selectors used to locate the carousel anchors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selectors {
    /// The carousel region (required). Hover, touch and focus are tracked here.
    pub region: &'static str,
    /// The track holding the items (required).
    pub track: &'static str,
    /// Container for the indicator dots (optional).
    pub dots: &'static str,
    /// Previous-slide button (optional).
    pub previous: &'static str,
    /// Next-slide button (optional).
    pub next: &'static str,
    /// Play/pause button (optional).
    pub play_pause: &'static str,
}

impl Selectors {
    /// The class names used by the default page markup.
    #[must_use]
    pub const fn web() -> Self {
        Self {
            region: ".carousel",
            track: ".carousel-track",
            dots: ".carousel-dots",
            previous: ".carousel-btn-prev",
            next: ".carousel-btn-next",
            play_pause: ".carousel-play-pause",
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self::web()
    }
}

/// The engine as instantiated for the DOM.
pub type DomCarousel = Carousel<DomSurface, Option<DomIndicators>>;

type SharedCarousel = Rc<RefCell<DomCarousel>>;
type WakeupSlot = Rc<RefCell<Option<Timeout>>>;

/// A carousel running on the page.
///
/// Dropping a `Mount` (or calling [`unmount`](Self::unmount)) stops the frame
/// loop, removes every listener and cancels the pending wake-up. The track is
/// left where it was. Call [`forget`](Self::forget) to keep the carousel
/// running for the lifetime of the page.
pub struct Mount {
    carousel: SharedCarousel,
    raf: RafLoop,
    listeners: Vec<EventListener>,
    wakeup: WakeupSlot,
}

impl std::fmt::Debug for Mount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mount")
            .field("raf", &self.raf)
            .field("listeners", &self.listeners.len())
            .field("wakeup_pending", &self.wakeup.borrow().is_some())
            .finish_non_exhaustive()
    }
}

impl Mount {
    /// Returns a snapshot of the engine state.
    #[must_use]
    pub fn state(&self) -> EngineState {
        *self.carousel.borrow().state()
    }

    /// Routes an input event to the engine, as a DOM listener would.
    ///
    /// Returns `true` if the event was consumed.
    pub fn dispatch(&self, event: InputEvent) -> bool {
        dispatch(&self.carousel, &self.wakeup, event)
    }

    /// Scales the drift speed. Non-finite or negative values are ignored.
    pub fn set_speed_multiplier(&self, multiplier: f64) {
        self.carousel.borrow_mut().set_speed_multiplier(multiplier);
    }

    /// Stops the carousel and releases every handle it holds.
    pub fn unmount(mut self) {
        self.teardown();
    }

    /// Keeps the carousel running until the page unloads.
    pub fn forget(self) {
        std::mem::forget(self);
    }

    fn teardown(&mut self) {
        self.raf.stop();
        self.listeners.clear();
        self.wakeup.borrow_mut().take();
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Milliseconds until `deadline`, rounded up so the wake-up never fires
/// before the deadline is due.
fn wakeup_delay_ms(deadline: HostTime, now: HostTime) -> u32 {
    let micros = deadline.saturating_duration_since(now).micros();
    u32::try_from(micros.div_ceil(1000)).unwrap_or(u32::MAX)
}

/// Replaces any pending wake-up with one at the engine's next deadline.
fn schedule_wakeup(carousel: &SharedCarousel, slot: &WakeupSlot) {
    let deadline = carousel.borrow().next_deadline();
    let Some(deadline) = deadline else {
        slot.borrow_mut().take();
        return;
    };

    let carousel_cb = Rc::clone(carousel);
    let slot_cb = Rc::clone(slot);
    let timeout = Timeout::new(wakeup_delay_ms(deadline, now()), move || {
        carousel_cb.borrow_mut().advance(now());
        schedule_wakeup(&carousel_cb, &slot_cb);
    });
    *slot.borrow_mut() = Some(timeout);
}

fn dispatch(carousel: &SharedCarousel, slot: &WakeupSlot, event: InputEvent) -> bool {
    let consumed = carousel.borrow_mut().handle_input(event, now());
    schedule_wakeup(carousel, slot);
    consumed
}

fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

fn require(document: &Document, selector: &'static str) -> Result<Element, InitError> {
    query(document, selector).ok_or(InitError::MissingAnchor(selector))
}

/// Mounts a carousel on the current page.
///
/// The region and the track are required; a missing one is reported as
/// [`InitError::MissingAnchor`]. A track without children is reported as
/// [`InitError::EmptyContent`]. Both are also logged as console warnings.
/// The dots container and the buttons are optional.
pub fn mount(config: CarouselConfig, selectors: Selectors) -> Result<Mount, InitError> {
    mount_inner(config, &selectors).inspect_err(|err| {
        console::warn!(err.to_string());
    })
}

fn mount_inner(config: CarouselConfig, selectors: &Selectors) -> Result<Mount, InitError> {
    let window = web_sys::window().ok_or(InitError::MissingAnchor("window"))?;
    let document = window
        .document()
        .ok_or(InitError::MissingAnchor("document"))?;

    let region = require(&document, selectors.region)?;
    let track: HtmlElement = require(&document, selectors.track)?
        .dyn_into()
        .map_err(|_| InitError::MissingAnchor(selectors.track))?;
    let dots = query(&document, selectors.dots);
    let previous = query(&document, selectors.previous);
    let next = query(&document, selectors.next);
    let play_pause = query(&document, selectors.play_pause);

    let surface = DomSurface::new(window.clone(), region.clone(), track, play_pause.clone());
    let indicators = dots
        .clone()
        .map(|container| DomIndicators::new(document.clone(), container));

    let carousel = Carousel::new(surface, indicators, config)?;
    #[cfg(feature = "trace")]
    let carousel = {
        let mut carousel = carousel;
        carousel.set_trace_sink(Box::new(crate::ConsoleSink));
        carousel
    };
    let item_count = carousel.state().item_count;

    let carousel: SharedCarousel = Rc::new(RefCell::new(carousel));
    let wakeup: WakeupSlot = Rc::new(RefCell::new(None));
    let mut listeners = Vec::new();

    let on = |target: &Element, event_type: &'static str, input: InputEvent| {
        let carousel = Rc::clone(&carousel);
        let wakeup = Rc::clone(&wakeup);
        EventListener::new(target, event_type, move |_| {
            dispatch(&carousel, &wakeup, input);
        })
    };

    if let Some(button) = &previous {
        listeners.push(on(button, "click", InputEvent::Previous));
    }
    if let Some(button) = &next {
        listeners.push(on(button, "click", InputEvent::Next));
    }
    if let Some(button) = &play_pause {
        listeners.push(on(button, "click", InputEvent::TogglePlayPause));
    }
    listeners.push(on(&region, "mouseenter", InputEvent::HoverEnter));
    listeners.push(on(&region, "mouseleave", InputEvent::HoverLeave));

    if let Some(container) = &dots {
        let carousel = Rc::clone(&carousel);
        let wakeup = Rc::clone(&wakeup);
        listeners.push(EventListener::new(container, "click", move |event| {
            let index = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| dot_index(&el));
            if let Some(index) = index {
                dispatch(&carousel, &wakeup, InputEvent::GoTo(index));
            }
        }));
    }

    listeners.extend(touch_listeners(&region, &carousel, &wakeup));
    listeners.push(keyboard_listener(&document, &region, &carousel, &wakeup));

    {
        let carousel = Rc::clone(&carousel);
        let wakeup = Rc::clone(&wakeup);
        listeners.push(EventListener::new(&window, "resize", move |_| {
            dispatch(&carousel, &wakeup, InputEvent::Resize);
        }));
    }

    listeners.extend(image_listeners(&region));

    let raf = {
        let carousel = Rc::clone(&carousel);
        RafLoop::new(move |tick| carousel.borrow_mut().tick(tick))
    };
    raf.start();

    console::log!(format!("carousel: initialized with {item_count} items"));

    Ok(Mount {
        carousel,
        raf,
        listeners,
        wakeup,
    })
}

/// Client x of the first active touch.
fn first_touch_x(event: &Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some(f64::from(touch.client_x()))
}

fn touch_listeners(
    region: &Element,
    carousel: &SharedCarousel,
    wakeup: &WakeupSlot,
) -> [EventListener; 3] {
    let passive = EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: true,
    };
    let start = {
        let carousel = Rc::clone(carousel);
        let wakeup = Rc::clone(wakeup);
        EventListener::new_with_options(region, "touchstart", passive, move |event| {
            if let Some(x) = first_touch_x(event) {
                dispatch(&carousel, &wakeup, InputEvent::TouchStart(x));
            }
        })
    };
    let moved = {
        let carousel = Rc::clone(carousel);
        let wakeup = Rc::clone(wakeup);
        EventListener::new_with_options(region, "touchmove", passive, move |event| {
            if let Some(x) = first_touch_x(event) {
                dispatch(&carousel, &wakeup, InputEvent::TouchMove(x));
            }
        })
    };
    let end = {
        let carousel = Rc::clone(carousel);
        let wakeup = Rc::clone(wakeup);
        EventListener::new(region, "touchend", move |_| {
            dispatch(&carousel, &wakeup, InputEvent::TouchEnd);
        })
    };
    [start, moved, end]
}

fn keyboard_listener(
    document: &Document,
    region: &Element,
    carousel: &SharedCarousel,
    wakeup: &WakeupSlot,
) -> EventListener {
    let options = EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: false,
    };
    let region = region.clone();
    let carousel = Rc::clone(carousel);
    let wakeup = Rc::clone(wakeup);
    let doc = document.clone();
    EventListener::new_with_options(document, "keydown", options, move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let Some(key) = Key::from_dom_key(&event.key()) else {
            return;
        };
        let focus_within = doc
            .active_element()
            .is_some_and(|active| region.contains(Some(active.as_ref())));
        if dispatch(&carousel, &wakeup, InputEvent::Key { key, focus_within }) {
            event.prevent_default();
        }
    })
}

/// Marks broken images and restores them once they load.
fn image_listeners(region: &Element) -> Vec<EventListener> {
    let Ok(images) = region.query_selector_all("img") else {
        return Vec::new();
    };
    let mut listeners = Vec::new();
    for i in 0..images.length() {
        let Some(image) = images
            .item(i)
            .and_then(|node| node.dyn_into::<HtmlImageElement>().ok())
        else {
            continue;
        };

        let failed = image.clone();
        listeners.push(EventListener::new(&image, "error", move |_| {
            if let Some(parent) = failed.parent_element() {
                let _ = parent.class_list().add_1(LOADING_CLASS);
            }
            failed.set_alt(UNAVAILABLE_ALT);
        }));

        let loaded = image.clone();
        listeners.push(EventListener::new(&image, "load", move |_| {
            if let Some(parent) = loaded.parent_element() {
                let _ = parent.class_list().remove_1(LOADING_CLASS);
            }
        }));
    }
    listeners
}
