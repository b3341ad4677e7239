// Copyright 2026 the Anticline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! The engine uses multi-channel dirty tracking (via [`understory_dirty`])
//! to recompute fold geometry lazily: mutations mark a channel, and the
//! next [`solve`](crate::fold::FoldEngine::solve) drains all channels and
//! recomputes only if something was marked.
//!
//! # Channels
//!
//! - **[`LAYOUT`]** — A configuration was applied (orientation, anchor
//!   factor, or fold count changed). Segment storage is reallocated and
//!   the whole geometry recomputed.
//!
//! - **[`GEOMETRY`]** — The fold factor or the container extent changed.
//!   Source rects, destination quads, and transforms are recomputed.
//!   Shading (shadow alpha and gradient span) is routed through this
//!   channel too, so the same drain pass refreshes both; there is no
//!   mutation that changes shading without also moving geometry.
//!
//! Keys are input identifiers (see the engine), not per-segment indices:
//! every solve rewrites all segments, so invalidation is per-input, not
//! per-segment.

use understory_dirty::Channel;

/// Configuration applied — segment storage rebuilt, everything recomputed.
pub const LAYOUT: Channel = Channel::new(0);

/// Fold factor or container extent changed — geometry and shading
/// recomputed.
pub const GEOMETRY: Channel = Channel::new(1);
