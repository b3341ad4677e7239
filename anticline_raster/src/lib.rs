// Copyright 2026 the Anticline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Software reference backend for anticline.
//!
//! [`RasterSurface`] implements the
//! [`Surface`](anticline_core::backend::Surface) contract over an
//! [`image::RgbaImage`]. Segment transforms are projective, so drawing
//! inverse-maps every candidate device pixel back through the current
//! transform and samples the snapshot nearest-neighbor. Shadows blend
//! src-over with per-pixel coverage from the solid or gradient paint.
//!
//! This backend declares the snapshot content strategy: it *is* a bitmap
//! compositor, and has no child renderer to invoke under a clip.
//! Retained-mode hosts with a live canvas implement `Surface` themselves
//! and declare `LiveClip`.

mod surface;

pub use surface::RasterSurface;
