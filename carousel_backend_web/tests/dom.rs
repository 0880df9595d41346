// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-browser tests for the DOM backend.
//!
//! Run with `wasm-pack test --headless --chrome carousel_backend_web`. Each
//! test builds its own markup under a fresh root and removes it afterwards.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use carousel_backend_web::{
    ACTIVE_CLASS, DomSurface, LOADING_CLASS, PAUSED_CLASS, RafLoop, Selectors, UNAVAILABLE_ALT,
    dot_index, mount,
};
use carousel_core::backend::{Motion, RenderSurface};
use carousel_core::config::CarouselConfig;
use carousel_core::error::InitError;
use carousel_core::time::Duration;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

const SELECTORS: Selectors = Selectors {
    region: ".t-carousel",
    track: ".t-track",
    dots: ".t-dots",
    previous: ".t-prev",
    next: ".t-next",
    play_pause: ".t-play",
};

const THREE_ITEMS: &str = r#"
    <div class="t-carousel">
      <button class="t-play">Pause</button>
      <div class="t-track">
        <div class="t-item"><img alt="first"></div>
        <div class="t-item"><img alt="second"></div>
        <div class="t-item"><img alt="third"></div>
      </div>
      <div class="t-dots"></div>
    </div>
"#;

fn document() -> Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("tests run in a page")
}

/// Appends `html` to the body under a new root element.
fn fixture(html: &str) -> Element {
    let document = document();
    let root = document.create_element("div").expect("create root");
    root.set_inner_html(html);
    document
        .body()
        .expect("page has a body")
        .append_child(&root)
        .expect("attach root");
    root
}

fn find(root: &Element, selector: &str) -> Element {
    root.query_selector(selector)
        .expect("valid selector")
        .unwrap_or_else(|| panic!("{selector} is in the fixture"))
}

fn space_key() -> KeyboardEvent {
    let init = KeyboardEventInit::new();
    init.set_key(" ");
    init.set_bubbles(true);
    init.set_cancelable(true);
    KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("keyboard event")
}

#[wasm_bindgen_test]
fn missing_region_is_reported() {
    let root = fixture(r#"<div class="t-track"><div>a</div></div>"#);
    let err = mount(CarouselConfig::web(), SELECTORS).expect_err("no region on the page");
    assert_eq!(err, InitError::MissingAnchor(".t-carousel"), "region selector is named");
    root.remove();
}

#[wasm_bindgen_test]
fn missing_track_is_reported() {
    let root = fixture(r#"<div class="t-carousel"></div>"#);
    let err = mount(CarouselConfig::web(), SELECTORS).expect_err("no track on the page");
    assert_eq!(err, InitError::MissingAnchor(".t-track"), "track selector is named");
    root.remove();
}

#[wasm_bindgen_test]
fn empty_track_is_reported() {
    let root = fixture(r#"<div class="t-carousel"><div class="t-track"></div></div>"#);
    let err = mount(CarouselConfig::web(), SELECTORS).expect_err("track has no items");
    assert_eq!(err, InitError::EmptyContent, "empty track");
    root.remove();
}

#[wasm_bindgen_test]
fn mount_duplicates_items_and_builds_dots() {
    let root = fixture(THREE_ITEMS);
    let carousel = mount(CarouselConfig::web(), SELECTORS).expect("markup is complete");

    assert_eq!(carousel.state().item_count, 3, "logical items exclude clones");
    let track = find(&root, ".t-track");
    assert_eq!(track.children().length(), 6, "one duplicate set is appended");

    let dots = find(&root, ".t-dots").children();
    assert_eq!(dots.length(), 3, "one dot per item");
    let first = dots.item(0).expect("first dot");
    assert!(first.class_list().contains(ACTIVE_CLASS), "first dot starts active");
    assert_eq!(
        first.get_attribute("aria-label").as_deref(),
        Some("Go to image 1"),
        "dots are labelled one-based"
    );

    carousel.unmount();
    root.remove();
}

#[wasm_bindgen_test]
fn dot_click_navigates_to_its_slide() {
    let root = fixture(THREE_ITEMS);
    let carousel = mount(CarouselConfig::web(), SELECTORS).expect("markup is complete");

    let dots = find(&root, ".t-dots").children();
    let third = dots.item(2).expect("third dot");
    assert_eq!(dot_index(&third), Some(2), "dots carry their index");

    third
        .dyn_ref::<HtmlElement>()
        .expect("dots are html elements")
        .click();

    assert_eq!(carousel.state().current_index, 2, "click reaches the delegated listener");
    assert!(third.class_list().contains(ACTIVE_CLASS), "clicked dot is active");
    assert!(
        !dots.item(0).expect("first dot").class_list().contains(ACTIVE_CLASS),
        "previous dot is cleared"
    );

    carousel.unmount();
    root.remove();
}

#[wasm_bindgen_test]
fn dot_index_resolves_from_a_nested_target() {
    let root = fixture(r#"<div class="carousel-dot" data-index="4"><span>x</span></div>"#);
    let inner = find(&root, "span");
    assert_eq!(dot_index(&inner), Some(4), "closest dot is used");
    assert_eq!(dot_index(&root), None, "outside any dot");
    root.remove();
}

#[wasm_bindgen_test]
fn broken_image_is_marked_until_it_loads() {
    let root = fixture(THREE_ITEMS);
    let carousel = mount(CarouselConfig::web(), SELECTORS).expect("markup is complete");

    let image: web_sys::HtmlImageElement = find(&root, ".t-item img")
        .dyn_into()
        .expect("fixture item holds an img");
    let item = image.parent_element().expect("image has a parent");

    image
        .dispatch_event(&Event::new("error").expect("error event"))
        .expect("dispatch error");
    assert!(item.class_list().contains(LOADING_CLASS), "parent shows the placeholder");
    assert_eq!(image.alt(), UNAVAILABLE_ALT, "alt text is replaced");

    image
        .dispatch_event(&Event::new("load").expect("load event"))
        .expect("dispatch load");
    assert!(!item.class_list().contains(LOADING_CLASS), "placeholder is removed");

    carousel.unmount();
    root.remove();
}

#[wasm_bindgen_test]
fn space_is_only_claimed_with_focus_inside() {
    let root = fixture(THREE_ITEMS);
    let carousel = mount(CarouselConfig::web(), SELECTORS).expect("markup is complete");
    let document = document();

    let outside: HtmlElement = document
        .create_element("button")
        .expect("create button")
        .dyn_into()
        .expect("button is an html element");
    root.append_child(&outside).expect("attach outside button");
    outside.focus().expect("focus outside");

    let event = space_key();
    document.dispatch_event(&event).expect("dispatch keydown");
    assert!(!event.default_prevented(), "page keeps Space when focus is outside");
    assert!(carousel.state().is_playing, "playback is untouched");

    let play: HtmlElement = find(&root, ".t-play")
        .dyn_into()
        .expect("play button is an html element");
    play.focus().expect("focus inside");

    let event = space_key();
    document.dispatch_event(&event).expect("dispatch keydown");
    assert!(event.default_prevented(), "carousel claims Space when focused");
    assert!(!carousel.state().is_playing, "Space toggles playback");
    assert!(
        find(&root, ".t-carousel").class_list().contains(PAUSED_CLASS),
        "region reflects the paused state"
    );

    carousel.unmount();
    root.remove();
}

#[wasm_bindgen_test]
fn surface_drives_track_style_and_duplicates() {
    let root = fixture(
        r#"<div class="s-region"><div class="s-track"><div>a</div><div>b</div></div></div>"#,
    );
    let region = find(&root, ".s-region");
    let track: HtmlElement = find(&root, ".s-track")
        .dyn_into()
        .expect("track is an html element");
    let window = web_sys::window().expect("tests run in a window");
    let mut surface = DomSurface::new(window, region.clone(), track.clone(), None);

    assert_eq!(surface.item_count(), 2, "children at creation are the items");
    surface.append_duplicate();
    assert_eq!(track.children().length(), 4, "items are cloned once");
    assert_eq!(surface.item_count(), 2, "clones are not items");

    let style = track.style();
    surface.set_offset(-100.0, Motion::Eased(Duration::from_millis(500)));
    assert_eq!(
        style.get_property_value("transition").as_deref(),
        Ok("transform 0.5s ease-out"),
        "eased offsets animate"
    );
    assert_eq!(
        style.get_property_value("transform").as_deref(),
        Ok("translateX(-100px)"),
        "offset is a horizontal translation"
    );

    surface.set_offset(-40.0, Motion::Instant);
    assert_eq!(
        style.get_property_value("transition").as_deref(),
        Ok(""),
        "instant offsets drop the earlier easing"
    );
    assert_eq!(
        style.get_property_value("transform").as_deref(),
        Ok("translateX(-40px)"),
        "instant offset is applied"
    );

    surface.set_paused(true);
    assert!(region.class_list().contains(PAUSED_CLASS), "paused class is added");
    surface.set_paused(false);
    assert!(!region.class_list().contains(PAUSED_CLASS), "paused class is removed");

    root.remove();
}

#[wasm_bindgen_test(async)]
async fn starting_again_keeps_a_single_frame_loop() {
    let ticks = Rc::new(RefCell::new(Vec::new()));
    let raf = {
        let ticks = Rc::clone(&ticks);
        RafLoop::new(move |tick| ticks.borrow_mut().push(tick))
    };

    raf.start();
    raf.start();
    raf.start();
    TimeoutFuture::new(200).await;
    raf.stop();

    let seen = ticks.borrow().clone();
    assert!(!seen.is_empty(), "frames were delivered");
    for pair in seen.windows(2) {
        assert_eq!(
            pair[1].frame_index,
            pair[0].frame_index + 1,
            "frame indices are consecutive"
        );
        assert!(
            pair[0].now < pair[1].now,
            "a second loop would tick twice in the same frame"
        );
    }

    TimeoutFuture::new(100).await;
    assert_eq!(ticks.borrow().len(), seen.len(), "stop cancels the pending frame");
}
