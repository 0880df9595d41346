// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: mounts the carousel on the markup in `index.html`.
//!
//! Build with: `wasm-pack build --target web demos/web_carousel`
//!
//! Then serve `demos/web_carousel/` and open `index.html` in a browser. Build
//! with `--features trace` to log engine events to the console.

use carousel_backend_web::{Selectors, mount};
use carousel_core::config::CarouselConfig;
use wasm_bindgen::prelude::*;

/// Entry point, called automatically by `wasm_bindgen(start)`.
///
/// A page without the carousel markup gets a console warning and no
/// carousel; the rest of the page keeps working.
#[wasm_bindgen(start)]
pub fn main() {
    if let Ok(carousel) = mount(CarouselConfig::web(), Selectors::web()) {
        // There is no teardown on the web; keep it running with the page.
        carousel.forget();
    }
}
