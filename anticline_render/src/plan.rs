// Copyright 2026 the Anticline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fold plan: an ordered sequence of segment draw items for one frame.

use alloc::vec::Vec;

use kurbo::Rect;

use anticline_core::fold::{FoldGeometry, Orientation};
use anticline_core::shadow::ShadowPaint;
use anticline_core::transform::Transform2d;

/// A single segment draw command in the fold plan.
///
/// Items are produced in ascending segment order; the compositor must
/// preserve that order so overlapping segments resolve the same way on
/// every backend.
#[derive(Clone, Debug, PartialEq)]
pub struct FoldItem {
    /// Segment index this item originates from.
    pub index: u32,
    /// Source slice of the container content.
    pub src: Rect,
    /// Draw-box-to-destination projective transform.
    pub transform: Transform2d,
    /// Shadow overlay.
    pub shadow: ShadowPaint,
}

/// An ordered list of segment draw commands for a single frame.
///
/// Unlike the engine-owned geometry, a plan is a plain value the host may
/// retain, clone, or ship across layers of its renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FoldPlan {
    /// Fold axis the plan was solved under.
    pub orientation: Orientation,
    /// Width of the per-segment draw box.
    pub draw_width: f64,
    /// Height of the per-segment draw box.
    pub draw_height: f64,
    /// Draw items in ascending segment order. Empty when the solve
    /// produced nothing to draw.
    pub items: Vec<FoldItem>,
}

impl FoldPlan {
    /// Builds a plan from solved geometry.
    ///
    /// A geometry with `should_draw == false` yields an empty plan.
    #[must_use]
    pub fn build(orientation: Orientation, geometry: &FoldGeometry) -> Self {
        let mut plan = Self {
            orientation,
            ..Self::default()
        };
        plan.rebuild(orientation, geometry);
        plan
    }

    /// Like [`build`](Self::build), but reuses this plan's buffer.
    pub fn rebuild(&mut self, orientation: Orientation, geometry: &FoldGeometry) {
        self.orientation = orientation;
        self.draw_width = geometry.draw_width;
        self.draw_height = geometry.draw_height;
        self.items.clear();
        if !geometry.should_draw {
            return;
        }
        for (index, segment) in geometry.segments.iter().enumerate() {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "fold counts are u32 by construction"
            )]
            let index = index as u32;
            self.items.push(FoldItem {
                index,
                src: segment.src,
                transform: segment.transform,
                shadow: segment.shadow,
            });
        }
    }

    /// Clears the plan for reuse.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns whether the plan draws anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the per-segment draw box as a rect at the origin.
    #[inline]
    #[must_use]
    pub fn draw_box(&self) -> Rect {
        Rect::new(0.0, 0.0, self.draw_width, self.draw_height)
    }
}
