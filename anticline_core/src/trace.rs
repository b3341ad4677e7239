// Copyright 2026 the Anticline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the fold loop.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! host loops call around configure/solve/composite. All method bodies
//! default to no-ops, so implementing only the events you care about is
//! fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.
//!
//! The engine does not emit events itself; the host owns the loop and
//! therefore the frame counter, so it constructs events around its own
//! engine calls (see the demo in `anticline_raster`).

use crate::backend::ContentStrategy;
use crate::fold::{Extent, Orientation};

/// Emitted when a fold configuration is applied.
#[derive(Clone, Copy, Debug)]
pub struct ConfigureEvent {
    /// Fold axis.
    pub orientation: Orientation,
    /// Crease anchor as a fraction of the fold-axis extent.
    pub anchor_factor: f64,
    /// Number of segments.
    pub fold_count: u32,
}

/// Emitted after a geometry solve.
#[derive(Clone, Copy, Debug)]
pub struct SolveEvent {
    /// Host frame counter.
    pub frame_index: u64,
    /// Fold factor the solve ran at.
    pub fold_factor: f64,
    /// Container extent the solve ran at.
    pub extent: Extent,
    /// Number of solved segments.
    pub segment_count: u32,
    /// Whether the solve produced drawable geometry.
    pub should_draw: bool,
}

/// Emitted after a composite pass.
#[derive(Clone, Copy, Debug)]
pub struct CompositeEvent {
    /// Host frame counter.
    pub frame_index: u64,
    /// Content strategy of the target surface.
    pub strategy: ContentStrategy,
    /// Number of segments drawn (0 when nothing was drawable).
    pub segments_drawn: u32,
}

/// Receives trace events from the fold loop.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a fold configuration is applied.
    fn on_configure(&mut self, e: &ConfigureEvent) {
        _ = e;
    }

    /// Called after a geometry solve.
    fn on_solve(&mut self, e: &SolveEvent) {
        _ = e;
    }

    /// Called after a composite pass.
    fn on_composite(&mut self, e: &CompositeEvent) {
        _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`ConfigureEvent`].
    #[inline]
    pub fn configure(&mut self, e: &ConfigureEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_configure(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SolveEvent`].
    #[inline]
    pub fn solve(&mut self, e: &SolveEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_solve(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`CompositeEvent`].
    #[inline]
    pub fn composite(&mut self, e: &CompositeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_composite(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}
