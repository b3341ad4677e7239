// Copyright 2026 the Anticline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of binary recordings.
//!
//! Decodes a buffer produced by
//! [`RecorderSink`](crate::recorder::RecorderSink) and writes one JSON
//! array of event objects, suitable for offline inspection or diffing
//! fold runs.

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::pretty::{orientation_name, strategy_name};
use crate::recorder::{RecordedEvent, decode};

fn event_value(event: &RecordedEvent) -> Value {
    match event {
        RecordedEvent::Configure(e) => json!({
            "event": "configure",
            "orientation": orientation_name(e.orientation),
            "anchor_factor": e.anchor_factor,
            "fold_count": e.fold_count,
        }),
        RecordedEvent::Solve(e) => json!({
            "event": "solve",
            "frame": e.frame_index,
            "fold_factor": e.fold_factor,
            "width": e.extent.width,
            "height": e.extent.height,
            "segments": e.segment_count,
            "should_draw": e.should_draw,
        }),
        RecordedEvent::Composite(e) => json!({
            "event": "composite",
            "frame": e.frame_index,
            "strategy": strategy_name(e.strategy),
            "drawn": e.segments_drawn,
        }),
    }
}

/// Decodes `bytes` and writes the events as a JSON array.
pub fn export(bytes: &[u8], writer: &mut impl Write) -> io::Result<()> {
    let events: Vec<Value> = decode(bytes).map(|e| event_value(&e)).collect();
    serde_json::to_writer_pretty(&mut *writer, &Value::Array(events)).map_err(io::Error::other)?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use anticline_core::backend::ContentStrategy;
    use anticline_core::fold::{Extent, Orientation};
    use anticline_core::trace::{CompositeEvent, ConfigureEvent, SolveEvent, TraceSink};

    use crate::recorder::RecorderSink;

    use super::*;

    #[test]
    fn exports_decoded_events_as_array() {
        let mut rec = RecorderSink::new();
        rec.on_configure(&ConfigureEvent {
            orientation: Orientation::Horizontal,
            anchor_factor: 0.5,
            fold_count: 4,
        });
        rec.on_solve(&SolveEvent {
            frame_index: 1,
            fold_factor: 0.25,
            extent: Extent::new(400, 200),
            segment_count: 4,
            should_draw: true,
        });
        rec.on_composite(&CompositeEvent {
            frame_index: 1,
            strategy: ContentStrategy::Snapshot,
            segments_drawn: 4,
        });

        let mut out = Vec::new();
        export(rec.as_bytes(), &mut out).unwrap();

        let parsed: Value = serde_json::from_slice(&out).unwrap();
        let events = parsed.as_array().unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0]["event"], "configure");
        assert_eq!(events[0]["orientation"], "horizontal");
        assert_eq!(events[1]["event"], "solve");
        assert_eq!(events[1]["fold_factor"], 0.25);
        assert_eq!(events[1]["width"], 400);
        assert_eq!(events[2]["event"], "composite");
        assert_eq!(events[2]["drawn"], 4);
    }

    #[test]
    fn empty_recording_exports_empty_array() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, Value::Array(Vec::new()));
    }
}
