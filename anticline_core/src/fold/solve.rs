// Copyright 2026 the Anticline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The geometry solver.
//!
//! Recomputation follows a fixed numeric policy; every coordinate that
//! lands on the pixel grid is rounded half-up, and segment partitioning
//! is round-then-remainder so the strips always tile the axis exactly.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use kurbo::{Point, Rect};

use crate::shadow::{SHADING_FACTOR, ShadowPaint, shadow_alpha};
use crate::transform::{Quad, Transform2d};

use super::config::Extent;
use super::engine::FoldEngine;

/// Rounds to the nearest integer, ties toward positive infinity.
#[inline]
fn round_px(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Rounds every corner coordinate of a quad onto the pixel grid.
fn round_quad(quad: Quad) -> Quad {
    Quad {
        pts: quad.pts.map(|p| Point::new(round_px(p.x), round_px(p.y))),
    }
}

impl FoldEngine {
    /// Rewrites `self.geometry` for the given extent.
    ///
    /// Aborts whole on degeneracy: if any segment's destination collapses
    /// along the fold axis, `should_draw` is cleared and the remaining
    /// segments are left unwritten.
    pub(crate) fn recompute(&mut self, extent: Extent) {
        let orientation = self.config.orientation;
        let horizontal = orientation.is_horizontal();
        let count = self.config.fold_count as usize;
        let count_f = f64::from(self.config.fold_count);
        let width = f64::from(extent.width);
        let height = f64::from(extent.height);
        let axis_extent = extent.along(orientation);

        let geometry = &mut self.geometry;
        geometry.should_draw = true;

        let delta = round_px(axis_extent / count_f);

        // Partition the axis; the last strip absorbs the rounding
        // remainder so the strips tile the axis exactly.
        for (x, segment) in geometry.segments.iter_mut().enumerate() {
            let start = x as f64 * delta;
            let len = if x + 1 == count {
                axis_extent - start
            } else {
                delta
            };
            segment.src = if horizontal {
                Rect::new(start, 0.0, start + len, height)
            } else {
                Rect::new(0.0, start, width, start + len)
            };
        }

        let (fold_max_w, fold_max_h) = if horizontal {
            (delta, height)
        } else {
            (width, delta)
        };

        let c_tf = 1.0 - self.fold_factor;
        let translated_distance = axis_extent * c_tf;
        let per_fold = round_px(translated_distance / count_f);

        // Odd fold counts can round `per_fold` past the strip extent;
        // the draw box takes whichever is larger.
        let draw_w = if fold_max_w < per_fold { per_fold } else { fold_max_w };
        let draw_h = if fold_max_h < per_fold { per_fold } else { fold_max_h };

        // Fixed-strength pseudo-perspective shrink of the cross axis.
        let scale_factor = 1.0 - 0.10 * (1.0 - self.fold_factor);

        let (scaled_w, scaled_h) = if horizontal {
            (draw_w, draw_h * scale_factor)
        } else {
            (draw_w * scale_factor, draw_h)
        };

        let top_scaled = (draw_h - scaled_h) / 2.0;
        let bottom_scaled = top_scaled + scaled_h;
        let left_scaled = (draw_w - scaled_w) / 2.0;
        let right_scaled = left_scaled + scaled_w;

        let anchor_point = self.config.anchor_factor * axis_extent;
        let axis_draw = if horizontal { draw_w } else { draw_h };
        let scaled_axis = if horizontal { scaled_w } else { scaled_h };
        // The fold along which the anchor point is located, as a
        // continuous index.
        let mid_fold = anchor_point / axis_draw;

        geometry.draw_width = draw_w;
        geometry.draw_height = draw_h;

        let draw_box = Rect::new(0.0, 0.0, draw_w, draw_h);
        let alpha = shadow_alpha(self.fold_factor);
        let span = SHADING_FACTOR * axis_draw;

        for x in 0..count {
            let xf = x as f64;
            let even = x % 2 == 0;

            // Fold-axis positions of the segment's near and far edges,
            // extrapolated from the anchor point.
            let near = if anchor_point > xf * axis_draw {
                anchor_point + (xf - mid_fold) * scaled_axis
            } else {
                anchor_point - (mid_fold - xf) * scaled_axis
            };
            let far = if anchor_point > (xf + 1.0) * axis_draw {
                anchor_point + (xf + 1.0 - mid_fold) * scaled_axis
            } else {
                anchor_point - (mid_fold - xf - 1.0) * scaled_axis
            };

            // Even segments keep the far cross edge at the draw-box
            // boundary and the near edge at the scaled boundary; odd
            // segments invert, producing the zig-zag.
            let quad = if horizontal {
                Quad {
                    pts: [
                        Point::new(near, if even { 0.0 } else { top_scaled }),
                        Point::new(far, if even { top_scaled } else { 0.0 }),
                        Point::new(far, if even { bottom_scaled } else { draw_h }),
                        Point::new(near, if even { draw_h } else { bottom_scaled }),
                    ],
                }
            } else {
                Quad {
                    pts: [
                        Point::new(if even { 0.0 } else { left_scaled }, near),
                        Point::new(if even { draw_w } else { right_scaled }, near),
                        Point::new(if even { right_scaled } else { draw_w }, far),
                        Point::new(if even { left_scaled } else { 0.0 }, far),
                    ],
                }
            };
            let quad = round_quad(quad);

            // A collapsed destination means the view is essentially
            // fully folded at this segment; nothing is drawn at all.
            let (near_r, far_r) = if horizontal {
                (quad.pts[0].x, quad.pts[1].x)
            } else {
                (quad.pts[0].y, quad.pts[2].y)
            };
            if far_r <= near_r {
                geometry.should_draw = false;
                return;
            }

            let Some(transform) = Transform2d::rect_to_quad(draw_box, quad) else {
                geometry.should_draw = false;
                return;
            };

            let segment = &mut geometry.segments[x];
            segment.transform = transform;
            segment.shadow = if even {
                ShadowPaint::Solid { alpha }
            } else {
                ShadowPaint::Gradient {
                    alpha,
                    axis: orientation,
                    span,
                }
            };
        }
    }
}
