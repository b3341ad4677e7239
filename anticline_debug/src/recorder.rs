// Copyright 2026 the Anticline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them
//! back as an iterator of [`RecordedEvent`].

use anticline_core::backend::ContentStrategy;
use anticline_core::fold::{Extent, Orientation};
use anticline_core::trace::{CompositeEvent, ConfigureEvent, SolveEvent, TraceSink};

// Event type discriminants.
const TAG_CONFIGURE: u8 = 1;
const TAG_SOLVE: u8 = 2;
const TAG_COMPOSITE: u8 = 3;

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_orientation(&mut self, o: Orientation) {
        self.write_u8(match o {
            Orientation::Horizontal => 0,
            Orientation::Vertical => 1,
        });
    }

    fn write_strategy(&mut self, s: ContentStrategy) {
        self.write_u8(match s {
            ContentStrategy::Snapshot => 0,
            ContentStrategy::LiveClip => 1,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_configure(&mut self, e: &ConfigureEvent) {
        self.write_u8(TAG_CONFIGURE);
        self.write_orientation(e.orientation);
        self.write_f64(e.anchor_factor);
        self.write_u32(e.fold_count);
    }

    fn on_solve(&mut self, e: &SolveEvent) {
        self.write_u8(TAG_SOLVE);
        self.write_u64(e.frame_index);
        self.write_f64(e.fold_factor);
        self.write_u32(e.extent.width);
        self.write_u32(e.extent.height);
        self.write_u32(e.segment_count);
        self.write_u8(u8::from(e.should_draw));
    }

    fn on_composite(&mut self, e: &CompositeEvent) {
        self.write_u8(TAG_COMPOSITE);
        self.write_u64(e.frame_index);
        self.write_strategy(e.strategy);
        self.write_u32(e.segments_drawn);
    }
}

/// A decoded event from a binary recording.
#[derive(Clone, Debug)]
pub enum RecordedEvent {
    /// A [`ConfigureEvent`].
    Configure(ConfigureEvent),
    /// A [`SolveEvent`].
    Solve(SolveEvent),
    /// A [`CompositeEvent`].
    Composite(CompositeEvent),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn read_u8(&mut self) -> Option<u8> {
        if self.remaining() < 1 {
            return None;
        }
        let v = self.data[self.pos];
        self.pos += 1;
        Some(v)
    }

    fn read_u32(&mut self) -> Option<u32> {
        if self.remaining() < 4 {
            return None;
        }
        let v = u32::from_le_bytes(self.data[self.pos..self.pos + 4].try_into().ok()?);
        self.pos += 4;
        Some(v)
    }

    fn read_u64(&mut self) -> Option<u64> {
        if self.remaining() < 8 {
            return None;
        }
        let v = u64::from_le_bytes(self.data[self.pos..self.pos + 8].try_into().ok()?);
        self.pos += 8;
        Some(v)
    }

    fn read_f64(&mut self) -> Option<f64> {
        self.read_u64().map(f64::from_bits)
    }

    fn read_orientation(&mut self) -> Option<Orientation> {
        Some(match self.read_u8()? {
            0 => Orientation::Horizontal,
            _ => Orientation::Vertical,
        })
    }

    fn read_strategy(&mut self) -> Option<ContentStrategy> {
        Some(match self.read_u8()? {
            0 => ContentStrategy::Snapshot,
            _ => ContentStrategy::LiveClip,
        })
    }

    fn decode_configure(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Configure(ConfigureEvent {
            orientation: self.read_orientation()?,
            anchor_factor: self.read_f64()?,
            fold_count: self.read_u32()?,
        }))
    }

    fn decode_solve(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Solve(SolveEvent {
            frame_index: self.read_u64()?,
            fold_factor: self.read_f64()?,
            extent: Extent::new(self.read_u32()?, self.read_u32()?),
            segment_count: self.read_u32()?,
            should_draw: self.read_u8()? != 0,
        }))
    }

    fn decode_composite(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Composite(CompositeEvent {
            frame_index: self.read_u64()?,
            strategy: self.read_strategy()?,
            segments_drawn: self.read_u32()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_CONFIGURE => self.decode_configure(),
            TAG_SOLVE => self.decode_solve(),
            TAG_COMPOSITE => self.decode_composite(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_solve() -> SolveEvent {
        SolveEvent {
            frame_index: 7,
            fold_factor: 0.375,
            extent: Extent::new(400, 200),
            segment_count: 4,
            should_draw: true,
        }
    }

    #[test]
    fn round_trip_configure() {
        let mut rec = RecorderSink::new();
        rec.on_configure(&ConfigureEvent {
            orientation: Orientation::Horizontal,
            anchor_factor: 2.2,
            fold_count: 2,
        });

        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(events.len(), 1);
        match &events[0] {
            RecordedEvent::Configure(e) => {
                assert_eq!(e.orientation, Orientation::Horizontal);
                assert_eq!(e.anchor_factor, 2.2);
                assert_eq!(e.fold_count, 2);
            }
            other => panic!("expected Configure, got {other:?}"),
        }
    }

    #[test]
    fn round_trip_solve() {
        let mut rec = RecorderSink::new();
        let orig = sample_solve();
        rec.on_solve(&orig);

        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(events.len(), 1);
        match &events[0] {
            RecordedEvent::Solve(e) => {
                assert_eq!(e.frame_index, orig.frame_index);
                assert_eq!(e.fold_factor, orig.fold_factor);
                assert_eq!(e.extent, orig.extent);
                assert_eq!(e.segment_count, orig.segment_count);
                assert_eq!(e.should_draw, orig.should_draw);
            }
            other => panic!("expected Solve, got {other:?}"),
        }
    }

    #[test]
    fn round_trip_composite() {
        let mut rec = RecorderSink::new();
        rec.on_composite(&CompositeEvent {
            frame_index: 9,
            strategy: ContentStrategy::LiveClip,
            segments_drawn: 3,
        });

        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(events.len(), 1);
        match &events[0] {
            RecordedEvent::Composite(e) => {
                assert_eq!(e.frame_index, 9);
                assert_eq!(e.strategy, ContentStrategy::LiveClip);
                assert_eq!(e.segments_drawn, 3);
            }
            other => panic!("expected Composite, got {other:?}"),
        }
    }

    #[test]
    fn round_trip_multiple_events() {
        let mut rec = RecorderSink::new();
        rec.on_configure(&ConfigureEvent {
            orientation: Orientation::Vertical,
            anchor_factor: 0.5,
            fold_count: 4,
        });
        rec.on_solve(&sample_solve());
        rec.on_composite(&CompositeEvent {
            frame_index: 7,
            strategy: ContentStrategy::Snapshot,
            segments_drawn: 4,
        });

        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], RecordedEvent::Configure(_)));
        assert!(matches!(events[1], RecordedEvent::Solve(_)));
        assert!(matches!(events[2], RecordedEvent::Composite(_)));
    }

    #[test]
    fn empty_buffer_decodes_to_nothing() {
        let events: Vec<_> = decode(&[]).collect();
        assert!(events.is_empty());
    }

    #[test]
    fn truncated_record_stops_iteration() {
        let mut rec = RecorderSink::new();
        rec.on_solve(&sample_solve());
        let bytes = rec.into_bytes();
        let events: Vec<_> = decode(&bytes[..bytes.len() - 2]).collect();
        assert!(events.is_empty());
    }
}
