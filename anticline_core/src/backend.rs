// Copyright 2026 the Anticline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for drawing surfaces.
//!
//! The engine splits platform-specific drawing into *backend* crates.
//! Each backend provides a [`Surface`] implementation: a save/restore
//! stack, transform concatenation, and the handful of draw operations the
//! compositor driver needs. `anticline_raster` is the software reference
//! backend; retained-mode hosts (a widget tree with its own canvas)
//! implement the same trait over their native drawing context.
//!
//! # Content strategies
//!
//! Folding needs the container's rendered content twice per frame in
//! slices. Hosts differ in how they can provide it:
//!
//! - [`ContentStrategy::Snapshot`] — the host supplies a full-size
//!   pre-rendered image and the driver draws source-rect slices of it.
//!   This is the only correct path on hosts whose canvas state is not
//!   honored across repeated content draws.
//! - [`ContentStrategy::LiveClip`] — the host can re-render its content
//!   under a clip and translate, so continuously updating content (video,
//!   camera feeds) folds live.
//!
//! The strategy is a *capability* the surface declares, not a version
//! check; the compositor driver branches on it per segment.
//!
//! # Driver pseudocode
//!
//! A compositor pass over one solved fold looks like this:
//!
//! ```rust,ignore
//! for item in &plan.items {
//!     surface.save();
//!     surface.concat(&item.transform);
//!     match surface.strategy() {
//!         ContentStrategy::Snapshot => surface.draw_snapshot(item.src, dst),
//!         ContentStrategy::LiveClip => {
//!             surface.clip_rect(slice);
//!             surface.translate(-origin, 0.0);
//!             surface.draw_content();
//!             surface.translate(origin, 0.0);
//!         }
//!     }
//!     surface.fill_shadow(draw_box, &item.shadow);
//!     surface.restore();
//! }
//! ```

use kurbo::Rect;

use crate::shadow::ShadowPaint;
use crate::transform::Transform2d;

/// How a surface can supply the content being folded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentStrategy {
    /// Draw slices of a pre-rendered full-size snapshot.
    Snapshot,
    /// Re-render live content under a clip and translate.
    LiveClip,
}

/// A drawing surface a fold is composited onto.
///
/// Implementations must maintain a state stack: [`save`](Self::save)
/// pushes the current transform and clip, [`restore`](Self::restore) pops
/// them. The compositor driver brackets every segment in a save/restore
/// pair and never interleaves segment state.
pub trait Surface {
    /// Which content strategy this surface supports.
    fn strategy(&self) -> ContentStrategy;

    /// Pushes the current transform and clip onto the state stack.
    fn save(&mut self);

    /// Pops the most recently saved state.
    ///
    /// Implementations should treat an unbalanced restore as a caller
    /// contract violation.
    fn restore(&mut self);

    /// Concatenates `transform` onto the current transform (applied to
    /// subsequent local coordinates).
    fn concat(&mut self, transform: &Transform2d);

    /// Intersects the clip with `rect` in current local coordinates.
    fn clip_rect(&mut self, rect: Rect);

    /// Translates subsequent local coordinates by `(dx, dy)`.
    fn translate(&mut self, dx: f64, dy: f64);

    /// Draws the `src` rectangle of the snapshot into `dst` in local
    /// coordinates. Only called on [`ContentStrategy::Snapshot`]
    /// surfaces.
    fn draw_snapshot(&mut self, src: Rect, dst: Rect);

    /// Renders the live content at the current transform and clip. Only
    /// called on [`ContentStrategy::LiveClip`] surfaces.
    fn draw_content(&mut self);

    /// Fills `rect` in local coordinates with the given shadow paint.
    fn fill_shadow(&mut self, rect: Rect, paint: &ShadowPaint);
}
