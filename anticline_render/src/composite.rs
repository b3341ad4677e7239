// Copyright 2026 the Anticline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The compositor driver.
//!
//! Walks a [`FoldPlan`] over a [`Surface`] in ascending segment order.
//! Every segment is fully bracketed by its own save/restore pair; no
//! surface-state mutation leaks from one segment into the next.

use kurbo::Rect;

use anticline_core::backend::{ContentStrategy, Surface};

use crate::plan::FoldPlan;

/// Composites a fold plan onto a surface, returning the number of
/// segments drawn.
///
/// For each item: save, concatenate the segment transform, draw the
/// content slice (by the surface's declared [`ContentStrategy`]), fill
/// the shadow over the draw box, restore. An empty plan draws nothing
/// and touches no surface state.
pub fn composite(plan: &FoldPlan, surface: &mut dyn Surface) -> u32 {
    let horizontal = plan.orientation.is_horizontal();
    let draw_box = plan.draw_box();
    let mut drawn = 0;

    for item in &plan.items {
        let slice = Rect::new(0.0, 0.0, item.src.width(), item.src.height());

        surface.save();
        surface.concat(&item.transform);

        match surface.strategy() {
            ContentStrategy::Snapshot => {
                surface.draw_snapshot(item.src, slice);
            }
            ContentStrategy::LiveClip => {
                // Clip to the slice, shift the content so this
                // segment's origin lands at (0, 0), render, shift back.
                surface.clip_rect(slice);
                let (dx, dy) = if horizontal {
                    (item.src.x0, 0.0)
                } else {
                    (0.0, item.src.y0)
                };
                surface.translate(-dx, -dy);
                surface.draw_content();
                surface.translate(dx, dy);
            }
        }

        surface.fill_shadow(draw_box, &item.shadow);
        surface.restore();
        drawn += 1;
    }

    drawn
}
