// Copyright 2026 the Anticline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Solved fold geometry.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::shadow::ShadowPaint;
use crate::transform::Transform2d;

/// One solved fold segment.
///
/// `src` is the segment's slice of the container in container
/// coordinates; `transform` maps the shared draw box
/// `(0,0)-(draw_width,draw_height)` onto the segment's destination quad.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Source slice of the container. Integer-valued coordinates.
    pub src: Rect,
    /// Draw-box-to-destination-quad projective transform.
    pub transform: Transform2d,
    /// Shadow overlay for this segment.
    pub shadow: ShadowPaint,
}

impl Default for Segment {
    fn default() -> Self {
        Self {
            src: Rect::ZERO,
            transform: Transform2d::IDENTITY,
            shadow: ShadowPaint::Solid { alpha: 0 },
        }
    }
}

/// The output of one geometry solve.
///
/// Owned by the engine and rewritten in place on every recompute; hosts
/// that need to retain segments across solves must copy them out (see
/// `FoldPlan` in `anticline_render`).
#[derive(Clone, Debug, Default)]
pub struct FoldGeometry {
    /// Whether anything should be drawn. False when unprepared, fully
    /// folded, or degenerate.
    pub should_draw: bool,
    /// Width of the per-segment draw box.
    pub draw_width: f64,
    /// Height of the per-segment draw box.
    pub draw_height: f64,
    /// Solved segments in fold order.
    pub segments: Vec<Segment>,
}

impl FoldGeometry {
    /// Returns the per-segment draw box as a rect at the origin.
    #[inline]
    #[must_use]
    pub fn draw_box(&self) -> Rect {
        Rect::new(0.0, 0.0, self.draw_width, self.draw_height)
    }
}
