// Copyright 2026 the Anticline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fold engine: configuration, fold-factor state, and lazy solving.

use alloc::vec;
use alloc::vec::Vec;

use understory_dirty::{CycleHandling, DirtyTracker};

use crate::dirty;

use super::config::{ConfigError, Extent, FoldConfig, Orientation};
use super::listener::FoldListener;
use super::segment::{FoldGeometry, Segment};
use super::transition::{FoldEdge, FoldPhase, TransitionDetector};

// Dirty-tracker keys. Invalidation is per input, not per segment: every
// recompute rewrites all segments.
pub(crate) const INPUT_PARAMS: u32 = 0;
pub(crate) const INPUT_FACTOR: u32 = 1;
pub(crate) const INPUT_EXTENT: u32 = 2;

/// Computes fold geometry for one container.
///
/// The engine is not prepared until [`configure`](Self::configure)
/// succeeds; an unprepared engine solves to "draw nothing". All methods
/// run synchronously on the caller's thread and are not reentrant;
/// hosts must serialize fold-factor mutation with solving and
/// compositing.
#[derive(Debug)]
pub struct FoldEngine {
    pub(crate) config: FoldConfig,
    pub(crate) prepared: bool,
    pub(crate) fold_factor: f64,
    pub(crate) detector: TransitionDetector,
    pub(crate) last_extent: Option<Extent>,
    pub(crate) solved: bool,
    pub(crate) redraw_requested: bool,
    pub(crate) dirty: DirtyTracker<u32>,
    pub(crate) geometry: FoldGeometry,
}

impl Default for FoldEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FoldEngine {
    /// Creates an unprepared engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: FoldConfig::default(),
            prepared: false,
            fold_factor: 0.0,
            detector: TransitionDetector::new(),
            last_extent: None,
            solved: false,
            redraw_requested: false,
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            geometry: FoldGeometry::default(),
        }
    }

    // -- Configuration API --

    /// Applies a fold configuration, resetting the fold to the flat
    /// state.
    ///
    /// On error the previous configuration (and prepared state) stays in
    /// effect.
    pub fn configure(&mut self, config: FoldConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.apply_config(config);
        Ok(())
    }

    /// Changes the fold axis, re-preparing the fold if the value
    /// differs.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if orientation != self.config.orientation {
            self.apply_config(FoldConfig {
                orientation,
                ..self.config
            });
        }
    }

    /// Changes the anchor factor, re-preparing the fold if the value
    /// differs.
    pub fn set_anchor_factor(&mut self, anchor_factor: f64) -> Result<(), ConfigError> {
        if anchor_factor == self.config.anchor_factor {
            return Ok(());
        }
        self.configure(FoldConfig {
            anchor_factor,
            ..self.config
        })
    }

    /// Changes the fold count, re-preparing the fold if the value
    /// differs.
    pub fn set_fold_count(&mut self, fold_count: u32) -> Result<(), ConfigError> {
        if fold_count == self.config.fold_count {
            return Ok(());
        }
        self.configure(FoldConfig {
            fold_count,
            ..self.config
        })
    }

    /// Validated configurations pass through here; re-preparation always
    /// returns to the flat, freshly allocated state.
    fn apply_config(&mut self, config: FoldConfig) {
        self.config = config;
        self.fold_factor = 0.0;
        self.detector.reset();
        self.geometry = FoldGeometry {
            should_draw: false,
            draw_width: 0.0,
            draw_height: 0.0,
            segments: vec![Segment::default(); config.fold_count as usize],
        };
        self.solved = false;
        self.prepared = true;
        self.dirty.mark(INPUT_PARAMS, dirty::LAYOUT);
        self.redraw_requested = true;
    }

    // -- Fold factor --

    /// Sets the fold factor, clamped to `[0, 1]`.
    ///
    /// A changed value marks geometry dirty and raises a redraw request;
    /// setting the current value again is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `factor` is NaN (host contract violation).
    pub fn set_fold_factor(&mut self, factor: f64) {
        assert!(!factor.is_nan(), "fold factor must not be NaN");
        let clamped = factor.clamp(0.0, 1.0);
        if clamped != self.fold_factor {
            self.fold_factor = clamped;
            self.dirty.mark(INPUT_FACTOR, dirty::GEOMETRY);
            self.redraw_requested = true;
        }
    }

    /// Returns and clears the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        core::mem::take(&mut self.redraw_requested)
    }

    // -- Getters --

    /// Returns the current fold factor.
    #[inline]
    #[must_use]
    pub fn fold_factor(&self) -> f64 {
        self.fold_factor
    }

    /// Returns the configured orientation.
    #[inline]
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    /// Returns the configured anchor factor.
    #[inline]
    #[must_use]
    pub fn anchor_factor(&self) -> f64 {
        self.config.anchor_factor
    }

    /// Returns the configured fold count.
    #[inline]
    #[must_use]
    pub fn fold_count(&self) -> u32 {
        self.config.fold_count
    }

    /// Whether a configuration has been applied.
    #[inline]
    #[must_use]
    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    /// Returns the fold phase as of the last solve.
    #[inline]
    #[must_use]
    pub fn fold_phase(&self) -> FoldPhase {
        self.detector.phase()
    }

    /// Returns the most recently solved geometry.
    #[inline]
    #[must_use]
    pub fn geometry(&self) -> &FoldGeometry {
        &self.geometry
    }

    // -- Solving --

    /// Solves fold geometry for the given container extent.
    ///
    /// Fold edges crossed since the previous solve are reported through
    /// `listener` before anything else. When the engine is unprepared or
    /// fully folded the result has `should_draw == false` and geometry is
    /// left untouched. Otherwise the solve is lazy: if neither the
    /// configuration, the fold factor, nor the extent changed since the
    /// last solve, the cached geometry is returned without recomputation.
    ///
    /// The returned borrow is engine-owned and rewritten by the next
    /// solve; copy segments out to retain them.
    pub fn solve(&mut self, extent: Extent, listener: &mut dyn FoldListener) -> &FoldGeometry {
        if !self.prepared {
            self.geometry.should_draw = false;
            return &self.geometry;
        }

        match self.detector.observe(self.fold_factor) {
            Some(FoldEdge::StartFold) => listener.on_start_fold(),
            Some(FoldEdge::EndFold) => listener.on_end_fold(),
            None => {}
        }

        // Fully folded: nothing is visible, geometry stays stale.
        if self.fold_factor == 1.0 {
            self.geometry.should_draw = false;
            return &self.geometry;
        }

        if self.last_extent != Some(extent) {
            self.last_extent = Some(extent);
            self.dirty.mark(INPUT_EXTENT, dirty::GEOMETRY);
        }

        let layout: Vec<u32> = self.dirty.drain(dirty::LAYOUT).deterministic().run().collect();
        let geometry: Vec<u32> = self
            .dirty
            .drain(dirty::GEOMETRY)
            .deterministic()
            .run()
            .collect();
        if self.solved && layout.is_empty() && geometry.is_empty() {
            return &self.geometry;
        }

        self.recompute(extent);
        self.solved = true;
        &self.geometry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fold::NoopListener;

    fn horizontal(anchor: f64, count: u32) -> FoldConfig {
        FoldConfig {
            orientation: Orientation::Horizontal,
            anchor_factor: anchor,
            fold_count: count,
        }
    }

    #[test]
    fn unprepared_engine_solves_to_nothing() {
        let mut engine = FoldEngine::new();
        assert!(!engine.is_prepared());
        let geometry = engine.solve(Extent::new(100, 100), &mut NoopListener);
        assert!(!geometry.should_draw);
    }

    #[test]
    fn configure_prepares_and_resets() {
        let mut engine = FoldEngine::new();
        engine.set_fold_factor(0.0);
        engine.configure(horizontal(0.5, 4)).unwrap();
        assert!(engine.is_prepared());
        assert_eq!(engine.fold_factor(), 0.0);
        assert_eq!(engine.fold_count(), 4);
        assert_eq!(engine.geometry().segments.len(), 4);
    }

    #[test]
    fn invalid_configure_keeps_previous() {
        let mut engine = FoldEngine::new();
        engine.configure(horizontal(0.5, 4)).unwrap();
        let err = engine.configure(horizontal(0.5, 0)).unwrap_err();
        assert_eq!(err, ConfigError::ZeroFoldCount);
        assert!(engine.is_prepared());
        assert_eq!(engine.fold_count(), 4);
    }

    #[test]
    fn invalid_configure_leaves_engine_unprepared() {
        let mut engine = FoldEngine::new();
        assert!(engine.configure(horizontal(f64::NAN, 2)).is_err());
        assert!(!engine.is_prepared());
    }

    #[test]
    fn fold_factor_is_clamped() {
        let mut engine = FoldEngine::new();
        engine.configure(horizontal(0.5, 2)).unwrap();
        engine.set_fold_factor(1.5);
        assert_eq!(engine.fold_factor(), 1.0);
        engine.set_fold_factor(-0.5);
        assert_eq!(engine.fold_factor(), 0.0);
    }

    #[test]
    #[should_panic(expected = "fold factor must not be NaN")]
    fn nan_fold_factor_panics() {
        let mut engine = FoldEngine::new();
        engine.set_fold_factor(f64::NAN);
    }

    #[test]
    fn redraw_requested_once_per_change() {
        let mut engine = FoldEngine::new();
        engine.configure(horizontal(0.5, 2)).unwrap();
        let _ = engine.take_redraw_request();

        engine.set_fold_factor(0.25);
        assert!(engine.take_redraw_request());
        assert!(!engine.take_redraw_request());

        // Same value again: no new request.
        engine.set_fold_factor(0.25);
        assert!(!engine.take_redraw_request());
    }

    #[test]
    fn setters_reprepare_only_on_change() {
        let mut engine = FoldEngine::new();
        engine.configure(horizontal(0.5, 2)).unwrap();
        engine.set_fold_factor(0.5);

        // Unchanged values leave fold state alone.
        engine.set_anchor_factor(0.5).unwrap();
        engine.set_fold_count(2).unwrap();
        assert_eq!(engine.fold_factor(), 0.5);

        // A changed value re-prepares, returning to flat.
        engine.set_fold_count(3).unwrap();
        assert_eq!(engine.fold_factor(), 0.0);
        assert_eq!(engine.geometry().segments.len(), 3);
    }

    #[test]
    fn set_orientation_reprepares() {
        let mut engine = FoldEngine::new();
        engine.configure(horizontal(0.5, 2)).unwrap();
        engine.set_fold_factor(0.7);
        engine.set_orientation(Orientation::Vertical);
        assert_eq!(engine.orientation(), Orientation::Vertical);
        assert_eq!(engine.fold_factor(), 0.0);
    }

    #[test]
    fn set_fold_count_rejects_zero() {
        let mut engine = FoldEngine::new();
        engine.configure(horizontal(0.5, 2)).unwrap();
        assert_eq!(engine.set_fold_count(0), Err(ConfigError::ZeroFoldCount));
        assert_eq!(engine.fold_count(), 2);
    }

    #[test]
    fn fully_folded_draws_nothing() {
        let mut engine = FoldEngine::new();
        engine.configure(horizontal(0.5, 4)).unwrap();
        engine.set_fold_factor(1.0);
        let geometry = engine.solve(Extent::new(400, 200), &mut NoopListener);
        assert!(!geometry.should_draw);
    }

    #[test]
    fn solve_is_lazy_between_changes() {
        let mut engine = FoldEngine::new();
        engine.configure(horizontal(0.5, 4)).unwrap();
        let extent = Extent::new(400, 200);

        let _ = engine.solve(extent, &mut NoopListener);
        let first = engine.geometry().clone();

        // No mutation: the cached geometry is returned as-is.
        let again = engine.solve(extent, &mut NoopListener);
        assert_eq!(again.segments, first.segments);

        // A factor change recomputes.
        engine.set_fold_factor(0.5);
        let changed = engine.solve(extent, &mut NoopListener);
        assert_ne!(changed.segments, first.segments);
    }

    #[test]
    fn extent_change_triggers_recompute() {
        let mut engine = FoldEngine::new();
        engine.configure(horizontal(0.5, 2)).unwrap();

        let a = engine.solve(Extent::new(100, 50), &mut NoopListener).clone();
        let b = engine.solve(Extent::new(200, 50), &mut NoopListener).clone();
        assert_ne!(a.segments[0].src, b.segments[0].src);
    }

    struct CountingListener {
        starts: u32,
        ends: u32,
    }

    impl FoldListener for CountingListener {
        fn on_start_fold(&mut self) {
            self.starts += 1;
        }
        fn on_end_fold(&mut self) {
            self.ends += 1;
        }
    }

    #[test]
    fn fold_edges_fire_exactly_once() {
        let mut engine = FoldEngine::new();
        engine.configure(horizontal(0.5, 2)).unwrap();
        let extent = Extent::new(200, 100);
        let mut listener = CountingListener { starts: 0, ends: 0 };

        let _ = engine.solve(extent, &mut listener);
        assert_eq!((listener.starts, listener.ends), (0, 0));

        engine.set_fold_factor(0.3);
        let _ = engine.solve(extent, &mut listener);
        let _ = engine.solve(extent, &mut listener);
        assert_eq!((listener.starts, listener.ends), (1, 0));

        engine.set_fold_factor(0.6);
        let _ = engine.solve(extent, &mut listener);
        assert_eq!((listener.starts, listener.ends), (1, 0));

        engine.set_fold_factor(1.0);
        let _ = engine.solve(extent, &mut listener);
        let _ = engine.solve(extent, &mut listener);
        assert_eq!((listener.starts, listener.ends), (1, 1));

        // Back to flat and out again: a second start.
        engine.set_fold_factor(0.0);
        let _ = engine.solve(extent, &mut listener);
        engine.set_fold_factor(0.2);
        let _ = engine.solve(extent, &mut listener);
        assert_eq!((listener.starts, listener.ends), (2, 1));
    }
}
