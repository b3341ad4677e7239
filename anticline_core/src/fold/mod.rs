// Copyright 2026 the Anticline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fold engine data model and geometry solver.
//!
//! A *fold* slices a container into `fold_count` strips along one axis
//! and maps each strip onto a zig-zag of trapezoids pinned at an anchor
//! crease. The engine has three phases, each feeding the next:
//!
//! 1. **Configuration** — [`FoldEngine::configure`] validates a
//!    [`FoldConfig`], allocates segment storage, and resets the fold to
//!    the flat state.
//! 2. **Geometry solving** — [`FoldEngine::solve`] partitions the
//!    container, computes each segment's destination quad and projective
//!    transform, and assigns shadow paints. Solving is lazy: mutations
//!    mark [`dirty`](crate::dirty) channels and unchanged frames reuse
//!    the cached [`FoldGeometry`].
//! 3. **Compositing** — a driver (see `anticline_render`) walks the
//!    solved segments over a [`Surface`](crate::backend::Surface).
//!
//! Fold progress is a single clamped factor: 0 is flat, 1 is fully
//! folded and invisible. Crossings of those endpoints are reported as
//! [`FoldEdge`]s through a [`FoldListener`] passed to each solve.

mod config;
mod engine;
mod listener;
mod segment;
mod solve;
mod transition;

pub use config::{ConfigError, Extent, FoldConfig, Orientation};
pub use engine::FoldEngine;
pub use listener::{FoldListener, NoopListener};
pub use segment::{FoldGeometry, Segment};
pub use transition::{FoldEdge, FoldPhase, TransitionDetector};
