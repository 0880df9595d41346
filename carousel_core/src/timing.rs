// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame ticks delivered by a host's display-refresh source.

use crate::time::HostTime;

/// A frame opportunity delivered by the host (e.g. one
/// `requestAnimationFrame` callback).
///
/// The engine advances drift by one step per tick regardless of the time
/// between ticks; `now` is only used to fire expired timers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameTick {
    /// Host time when the tick was generated.
    pub now: HostTime,
    /// Monotonically increasing frame counter.
    pub frame_index: u64,
}

impl FrameTick {
    /// Creates a tick.
    #[inline]
    #[must_use]
    pub const fn new(now: HostTime, frame_index: u64) -> Self {
        Self { now, frame_index }
    }
}
