// Copyright 2026 the Anticline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per
//! event to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use anticline_core::backend::ContentStrategy;
use anticline_core::fold::Orientation;
use anticline_core::trace::{CompositeEvent, ConfigureEvent, SolveEvent, TraceSink};

/// Writes human-readable trace lines to a [`Write`](std::io::Write)
/// destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

pub(crate) fn orientation_name(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Horizontal => "horizontal",
        Orientation::Vertical => "vertical",
    }
}

pub(crate) fn strategy_name(strategy: ContentStrategy) -> &'static str {
    match strategy {
        ContentStrategy::Snapshot => "snapshot",
        ContentStrategy::LiveClip => "live-clip",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_configure(&mut self, e: &ConfigureEvent) {
        let _ = writeln!(
            self.writer,
            "[configure] orientation={} anchor={} folds={}",
            orientation_name(e.orientation),
            e.anchor_factor,
            e.fold_count,
        );
    }

    fn on_solve(&mut self, e: &SolveEvent) {
        let _ = writeln!(
            self.writer,
            "[solve] frame={} factor={:.3} extent={}x{} segments={} draw={}",
            e.frame_index,
            e.fold_factor,
            e.extent.width,
            e.extent.height,
            e.segment_count,
            e.should_draw,
        );
    }

    fn on_composite(&mut self, e: &CompositeEvent) {
        let _ = writeln!(
            self.writer,
            "[composite] frame={} strategy={} drawn={}",
            e.frame_index,
            strategy_name(e.strategy),
            e.segments_drawn,
        );
    }
}
