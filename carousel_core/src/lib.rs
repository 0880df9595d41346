// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine for an auto-scrolling, snap-to-slide image carousel.
//!
//! `carousel_core` holds the state machine behind a horizontally drifting
//! carousel with discrete slide navigation. It is `no_std` compatible (with
//! `alloc`) and knows nothing about documents or browsers: platform backends
//! implement the collaborator traits and feed it frame ticks, input events
//! and the current time.
//!
//! # Architecture
//!
//! ```text
//!   Backend (tick source, input, timers)
//!       │                      │
//!       ▼                      ▼
//!   FrameTick ──► Carousel::tick()     InputEvent ──► Carousel::handle_input()
//!                     │                                   │
//!                     └──────────────┬────────────────────┘
//!                                    ▼
//!         RenderSurface::set_offset() + IndicatorStrip::set_active()
//! ```
//!
//! **[`engine`]**: The [`Carousel`](engine::Carousel) state machine: drift,
//! wraparound, eased transitions, hover/explicit pause, debounced resize,
//! swipe and keyboard navigation.
//!
//! **[`backend`]**: [`RenderSurface`](backend::RenderSurface) and
//! [`IndicatorStrip`](backend::IndicatorStrip), the traits a platform
//! implements.
//!
//! **[`input`]**: Platform-neutral input events and swipe recognition.
//!
//! **[`timer`]**: Owned one-shot deadlines for transitions and debouncing.
//!
//! **[`geometry`]**: Breakpoints and item stride measurement.
//!
//! **[`config`]**: [`CarouselConfig`](config::CarouselConfig) presets.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! engine instrumentation, with a zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
pub mod time;
pub mod timer;
pub mod timing;
pub mod trace;
