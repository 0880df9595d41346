// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser backend for the carousel engine.
//!
//! This crate connects [`carousel_core`] to a live page:
//!
//! - [`RafLoop`]: `requestAnimationFrame` tick source
//! - [`DomSurface`]: the track, moved with a CSS `translateX` transform
//! - [`DomIndicators`]: one `div.carousel-dot` per item
//! - [`ConsoleSink`]: trace events to the browser console
//! - [`mount`]: finds the anchors by [`Selectors`], wires listeners and
//!   timers, and returns an owning [`Mount`] handle
//!
//! ```rust,ignore
//! use carousel_backend_web::{Selectors, mount};
//! use carousel_core::config::CarouselConfig;
//!
//! if let Ok(carousel) = mount(CarouselConfig::web(), Selectors::web()) {
//!     carousel.forget();
//! }
//! ```

mod console;
mod indicators;
mod mount;
mod raf;
mod surface;

pub use console::ConsoleSink;
pub use indicators::{ACTIVE_CLASS, DOT_CLASS, DomIndicators, dot_index};
pub use mount::{DomCarousel, LOADING_CLASS, Mount, Selectors, UNAVAILABLE_ALT, mount};
pub use raf::RafLoop;
pub use surface::{DomSurface, PAUSED_CLASS};

use carousel_core::time::HostTime;

/// Returns the current host time from `performance.now()`.
#[must_use]
pub fn now() -> HostTime {
    HostTime::from_millis_f64(raf::performance_now())
}
