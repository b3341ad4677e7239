// Copyright 2026 the Anticline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel-buffer `Surface` implementation.

use image::{Rgba, RgbaImage};
use kurbo::{Point, Rect};

use anticline_core::backend::{ContentStrategy, Surface};
use anticline_core::shadow::ShadowPaint;
use anticline_core::transform::{Quad, Transform2d};

/// One entry of the save/restore stack.
///
/// Clips are stored as `(inverse-of-transform-at-clip-time, rect)` so a
/// device point can be tested in the clip's own local space regardless of
/// transforms concatenated afterwards.
#[derive(Clone, Debug)]
struct State {
    transform: Transform2d,
    clips: Vec<(Transform2d, Rect)>,
}

impl State {
    fn new() -> Self {
        Self {
            transform: Transform2d::IDENTITY,
            clips: Vec::new(),
        }
    }
}

/// A software drawing surface over an RGBA pixel buffer.
///
/// Drawing inverse-maps candidate device pixels through the current
/// projective transform and samples nearest-neighbor, so arbitrary
/// quad destinations rasterize exactly; compositing is src-over.
#[derive(Debug)]
pub struct RasterSurface {
    target: RgbaImage,
    snapshot: Option<RgbaImage>,
    state: State,
    stack: Vec<State>,
}

impl RasterSurface {
    /// Creates a surface with a transparent target of the given size and
    /// no snapshot.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            target: RgbaImage::new(width, height),
            snapshot: None,
            state: State::new(),
            stack: Vec::new(),
        }
    }

    /// Attaches the full-size content snapshot slices are drawn from.
    #[must_use]
    pub fn with_snapshot(mut self, snapshot: RgbaImage) -> Self {
        self.snapshot = Some(snapshot);
        self
    }

    /// Returns the composited target.
    #[must_use]
    pub fn target(&self) -> &RgbaImage {
        &self.target
    }

    /// Consumes the surface and returns the composited target.
    #[must_use]
    pub fn into_target(self) -> RgbaImage {
        self.target
    }

    /// Device-space pixel bounds covered by `local` under the current
    /// transform, clamped to the target, or `None` when empty or
    /// non-finite.
    fn device_bounds(&self, local: Rect) -> Option<(u32, u32, u32, u32)> {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for p in Quad::from_rect(local).pts {
            let d = self.state.transform.apply(p);
            if !d.x.is_finite() || !d.y.is_finite() {
                return None;
            }
            min_x = min_x.min(d.x);
            min_y = min_y.min(d.y);
            max_x = max_x.max(d.x);
            max_y = max_y.max(d.y);
        }
        let x0 = min_x.floor().max(0.0);
        let y0 = min_y.floor().max(0.0);
        let x1 = max_x.ceil().min(f64::from(self.target.width()));
        let y1 = max_y.ceil().min(f64::from(self.target.height()));
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "bounds are clamped to the non-negative target extent"
        )]
        Some((x0 as u32, x1 as u32, y0 as u32, y1 as u32))
    }
}

/// Tests a device point against every recorded clip.
fn clip_allows(clips: &[(Transform2d, Rect)], device: Point) -> bool {
    clips.iter().all(|(inv, rect)| {
        let local = inv.apply(device);
        local.x >= rect.x0 && local.x < rect.x1 && local.y >= rect.y0 && local.y < rect.y1
    })
}

/// Maps a non-negative sample coordinate to a pixel index, or `None`
/// when it falls outside the image.
fn sample_index(v: f64, dim: u32) -> Option<u32> {
    if v < 0.0 {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "checked non-negative and bounded below u32::MAX by the image extent"
    )]
    let i = v as u32;
    (i < dim).then_some(i)
}

/// Src-over blend of one pixel.
#[expect(
    clippy::cast_possible_truncation,
    reason = "channel math stays within the u8 range"
)]
fn blend(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let a = u32::from(src.0[3]);
    if a == 0 {
        return;
    }
    if a == 255 {
        *dst = src;
        return;
    }
    let ia = 255 - a;
    for c in 0..3 {
        dst.0[c] = ((u32::from(src.0[c]) * a + u32::from(dst.0[c]) * ia + 127) / 255) as u8;
    }
    dst.0[3] = (a + u32::from(dst.0[3]) * ia / 255) as u8;
}

impl Surface for RasterSurface {
    fn strategy(&self) -> ContentStrategy {
        ContentStrategy::Snapshot
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        self.state = self.stack.pop().expect("unbalanced surface restore");
    }

    fn concat(&mut self, transform: &Transform2d) {
        self.state.transform = self.state.transform * *transform;
    }

    fn clip_rect(&mut self, rect: Rect) {
        match self.state.transform.inverse() {
            Some(inv) => self.state.clips.push((inv, rect)),
            // Degenerate transform: everything is clipped away.
            None => self.state.clips.push((Transform2d::IDENTITY, Rect::ZERO)),
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.state.transform = self.state.transform * Transform2d::from_translation(dx, dy);
    }

    fn draw_snapshot(&mut self, src: Rect, dst: Rect) {
        let snapshot = self
            .snapshot
            .as_ref()
            .expect("snapshot surface drawn without a snapshot");
        if src.width() <= 0.0 || src.height() <= 0.0 || dst.width() <= 0.0 || dst.height() <= 0.0 {
            return;
        }
        let Some(inv) = self.state.transform.inverse() else {
            return;
        };
        let Some((px0, px1, py0, py1)) = self.device_bounds(dst) else {
            return;
        };
        for py in py0..py1 {
            for px in px0..px1 {
                let device = Point::new(f64::from(px) + 0.5, f64::from(py) + 0.5);
                if !clip_allows(&self.state.clips, device) {
                    continue;
                }
                let local = inv.apply(device);
                if local.x < dst.x0 || local.x >= dst.x1 || local.y < dst.y0 || local.y >= dst.y1 {
                    continue;
                }
                let u = src.x0 + (local.x - dst.x0) * src.width() / dst.width();
                let v = src.y0 + (local.y - dst.y0) * src.height() / dst.height();
                let (Some(sx), Some(sy)) = (
                    sample_index(u, snapshot.width()),
                    sample_index(v, snapshot.height()),
                ) else {
                    continue;
                };
                let pixel = *snapshot.get_pixel(sx, sy);
                blend(self.target.get_pixel_mut(px, py), pixel);
            }
        }
    }

    fn draw_content(&mut self) {
        panic!("RasterSurface has no live content; it declares the snapshot strategy");
    }

    fn fill_shadow(&mut self, rect: Rect, paint: &ShadowPaint) {
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        let Some(inv) = self.state.transform.inverse() else {
            return;
        };
        let Some((px0, px1, py0, py1)) = self.device_bounds(rect) else {
            return;
        };
        let peak = f64::from(paint.alpha());
        for py in py0..py1 {
            for px in px0..px1 {
                let device = Point::new(f64::from(px) + 0.5, f64::from(py) + 0.5);
                if !clip_allows(&self.state.clips, device) {
                    continue;
                }
                let local = inv.apply(device);
                if local.x < rect.x0 || local.x >= rect.x1 || local.y < rect.y0 || local.y >= rect.y1
                {
                    continue;
                }
                let coverage = match paint {
                    ShadowPaint::Solid { .. } => peak,
                    ShadowPaint::Gradient { axis, span, .. } => {
                        if *span <= 0.0 {
                            peak
                        } else {
                            let d = if axis.is_horizontal() {
                                local.x
                            } else {
                                local.y
                            };
                            // Clamped gradient: full black before the
                            // origin, transparent past the span.
                            peak * (1.0 - d / span).clamp(0.0, 1.0)
                        }
                    }
                };
                #[expect(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    reason = "coverage is clamped within 0..=255"
                )]
                let a = (coverage + 0.5).floor().clamp(0.0, 255.0) as u8;
                if a == 0 {
                    continue;
                }
                blend(self.target.get_pixel_mut(px, py), Rgba([0, 0, 0, a]));
            }
        }
    }
}
