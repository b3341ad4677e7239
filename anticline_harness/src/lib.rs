// Copyright 2026 the Anticline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reusable fold sweep metrics for demos and tests.

#![no_std]

use anticline_core::fold::{Extent, FoldEngine, FoldListener};

/// A [`FoldListener`] that counts the edges it receives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecordingListener {
    /// Number of start-fold edges observed.
    pub start_folds: u32,
    /// Number of end-fold edges observed.
    pub end_folds: u32,
}

impl RecordingListener {
    /// Creates a listener with zeroed counters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            start_folds: 0,
            end_folds: 0,
        }
    }
}

impl FoldListener for RecordingListener {
    fn on_start_fold(&mut self) {
        self.start_folds += 1;
    }

    fn on_end_fold(&mut self) {
        self.end_folds += 1;
    }
}

/// A linear ramp of fold factors from 0 to 1 inclusive.
///
/// # Panics
///
/// Panics if `steps < 2` (a ramp needs both endpoints).
pub fn ramp(steps: u32) -> impl Iterator<Item = f64> {
    assert!(steps >= 2, "a ramp needs at least its two endpoints");
    let last = f64::from(steps - 1);
    (0..steps).map(move |step| f64::from(step) / last)
}

/// Aggregated result of [`sweep`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Frames driven.
    pub frames: u32,
    /// Frames that produced drawable geometry.
    pub drawn_frames: u32,
    /// Frames with nothing to draw (unprepared, fully folded, or
    /// degenerate).
    pub blank_frames: u32,
    /// Start-fold edges observed.
    pub start_folds: u32,
    /// End-fold edges observed.
    pub end_folds: u32,
    /// Redraw requests raised.
    pub redraws: u32,
}

/// Drives `engine` through a linear fold ramp at a fixed extent,
/// solving every frame and aggregating the outcome.
pub fn sweep(engine: &mut FoldEngine, extent: Extent, steps: u32) -> SweepReport {
    let mut listener = RecordingListener::new();
    let mut report = SweepReport::default();

    for factor in ramp(steps) {
        engine.set_fold_factor(factor);
        if engine.take_redraw_request() {
            report.redraws += 1;
        }
        let geometry = engine.solve(extent, &mut listener);
        report.frames += 1;
        if geometry.should_draw {
            report.drawn_frames += 1;
        } else {
            report.blank_frames += 1;
        }
    }

    report.start_folds = listener.start_folds;
    report.end_folds = listener.end_folds;
    report
}
