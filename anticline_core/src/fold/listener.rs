// Copyright 2026 the Anticline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host callbacks for fold edges.

/// Receives fold-edge notifications during [`solve`].
///
/// Both methods have default no-op implementations, so hosts only
/// override the edges they care about. The listener is passed to each
/// solve call rather than stored, so the engine holds no callback
/// ownership.
///
/// [`solve`]: super::FoldEngine::solve
pub trait FoldListener {
    /// Called when the fold factor leaves 0.
    fn on_start_fold(&mut self) {}

    /// Called when the fold factor reaches exactly 1 from a partly
    /// folded state.
    fn on_end_fold(&mut self) {}
}

/// A [`FoldListener`] that ignores all edges.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopListener;

impl FoldListener for NoopListener {}
