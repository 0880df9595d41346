// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON exporter.
//!
//! [`export`] writes recorded events as a JSON array, one object per event.
//! Every object carries a `"name"` (see [`RecordedEvent::name`]) and an
//! `"args"` object. Events that carry a host time also get a `"ts"` field in
//! microseconds.

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::pretty::{play_cause_name, reject_reason_name, slide_cause_name, swipe_name};
use crate::recorder::RecordedEvent;

/// Exports recorded events as a pretty-printed JSON array.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let values: Vec<Value> = events.iter().map(to_value).collect();
    serde_json::to_writer_pretty(writer, &values)?;
    Ok(())
}

fn to_value(event: &RecordedEvent) -> Value {
    let name = event.name();
    match event {
        RecordedEvent::Init(e) => json!({
            "name": name,
            "args": {
                "item_count": e.item_count,
                "item_width": e.item_width,
                "visible_count": e.visible_count,
            }
        }),
        RecordedEvent::SlideChange(e) => json!({
            "name": name,
            "args": {
                "from": e.from,
                "to": e.to,
                "cause": slide_cause_name(e.cause),
            }
        }),
        RecordedEvent::TransitionBegin(e) => json!({
            "name": name,
            "ts": e.at.micros(),
            "args": {
                "index": e.index,
                "offset": e.offset,
                "duration_ms": e.duration.as_millis(),
            }
        }),
        RecordedEvent::TransitionEnd(e) => json!({
            "name": name,
            "ts": e.at.micros(),
            "args": {
                "index": e.index,
            }
        }),
        RecordedEvent::Wrap(e) => json!({
            "name": name,
            "args": {
                "frame_index": e.frame_index,
                "cycle_width": e.cycle_width,
            }
        }),
        RecordedEvent::PlayState(e) => json!({
            "name": name,
            "args": {
                "playing": e.playing,
                "cause": play_cause_name(e.cause),
            }
        }),
        RecordedEvent::Layout(e) => json!({
            "name": name,
            "args": {
                "old_visible": e.old_visible,
                "new_visible": e.new_visible,
                "item_width": e.item_width,
                "realigned": e.realigned,
            }
        }),
        RecordedEvent::NavigationRejected(e) => json!({
            "name": name,
            "args": {
                "requested": e.requested,
                "current": e.current,
                "reason": reject_reason_name(e.reason),
            }
        }),
        RecordedEvent::Swipe(e) => json!({
            "name": name,
            "args": {
                "swipe": swipe_name(e.swipe),
            }
        }),
    }
}
