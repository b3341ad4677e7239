// Copyright 2026 the Anticline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fold geometry solver and segment model for accordion-fold compositing.
//!
//! `anticline_core` renders nothing itself. It owns the *geometry* of an
//! accordion fold: given a container extent and a continuous fold factor
//! (0 = flat, 1 = fully folded), it partitions the container into equal
//! strips along one axis and computes, per strip, a projective
//! quad-to-quad transform and a shadow paint. A host drives it from its
//! own render loop and applies the results through the [`Surface`]
//! contract.
//!
//! # Architecture
//!
//! ```text
//!   Host (layout + animation)
//!       │ configure / set_fold_factor
//!       ▼
//!   FoldEngine ──► solve(extent, listener) ──► FoldGeometry
//!                                                   │
//!                      ┌────────────────────────────┘
//!                      ▼
//!   FoldPlan (anticline_render) ──► composite() ──► Surface (backend)
//! ```
//!
//! **[`fold`]** — The engine: validated configuration, clamped fold
//! factor with redraw requests, the lazy geometry solver, and the
//! fold-edge transition detector.
//!
//! **[`transform`]** — Minimal column-major 3×3 projective transform with
//! quad-to-quad construction. Fold destinations are trapezoids, so an
//! affine map is not enough.
//!
//! **[`shadow`]** — Alternating solid/gradient shadow model.
//!
//! **[`dirty`]** — Invalidation channels via `understory_dirty`. Property
//! mutations mark a channel; `solve` drains them and recomputes only when
//! something was marked.
//!
//! **[`backend`]** — The [`Surface`] trait that drawing backends
//! implement, plus the snapshot-vs-live content capability switch.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types
//! for engine instrumentation, with zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).
//!
//! [`Surface`]: backend::Surface

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod dirty;
pub mod fold;
pub mod shadow;
pub mod trace;
pub mod transform;
