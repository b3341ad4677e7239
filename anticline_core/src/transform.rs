// Copyright 2026 the Anticline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal column-major 3×3 projective transform.
//!
//! This type covers the subset of planar projective maps that
//! `anticline_core` actually needs (identity, multiply, invert, point
//! mapping, 4-point quad correspondence) without pulling in a full
//! linear-algebra crate.
//!
//! A fold segment's destination is a trapezoid, so the rectangle-to-quad
//! mapping is genuinely projective; an affine matrix cannot express it.

use core::ops::Mul;

use kurbo::{Point, Rect};

/// The four corners of a quadrilateral, in order: top-left, top-right,
/// bottom-right, bottom-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad {
    /// Corner points in TL, TR, BR, BL order.
    pub pts: [Point; 4],
}

impl Quad {
    /// Creates a quad from the corners of an axis-aligned rectangle.
    #[inline]
    #[must_use]
    pub fn from_rect(r: Rect) -> Self {
        Self {
            pts: [
                Point::new(r.x0, r.y0),
                Point::new(r.x1, r.y0),
                Point::new(r.x1, r.y1),
                Point::new(r.x0, r.y1),
            ],
        }
    }

    /// Is every corner coordinate [finite](f64::is_finite)?
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.pts.iter().all(|p| p.x.is_finite() && p.y.is_finite())
    }
}

/// A column-major 3×3 projective transform stored as `[[f64; 3]; 3]`.
///
/// Each inner array is one *column* of the matrix. A point `(x, y)` maps
/// through the homogeneous product `[x', y', w'] = M · [x, y, 1]` followed
/// by the perspective divide `(x'/w', y'/w')`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2d {
    /// Three columns, each a 3-element array `[x, y, w]`.
    pub cols: [[f64; 3]; 3],
}

impl Transform2d {
    /// The 3×3 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Creates a transform from three column arrays.
    #[inline]
    #[must_use]
    pub const fn from_cols(col0: [f64; 3], col1: [f64; 3], col2: [f64; 3]) -> Self {
        Self {
            cols: [col0, col1, col2],
        }
    }

    /// Returns column `i` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `i >= 3`.
    #[inline]
    #[must_use]
    pub const fn col(self, i: usize) -> [f64; 3] {
        self.cols[i]
    }

    /// Creates a pure translation transform.
    #[inline]
    #[must_use]
    pub const fn from_translation(x: f64, y: f64) -> Self {
        Self {
            cols: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [x, y, 1.0]],
        }
    }

    /// Creates a non-uniform scale transform.
    #[inline]
    #[must_use]
    pub const fn from_scale(sx: f64, sy: f64) -> Self {
        Self {
            cols: [[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Maps a point through the transform, including the perspective
    /// divide.
    ///
    /// Points on the line at infinity (`w' == 0`) produce non-finite
    /// coordinates; callers that may hit this should check
    /// [`Point::is_finite`] on the result.
    #[inline]
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        let c = &self.cols;
        let x = c[0][0] * p.x + c[1][0] * p.y + c[2][0];
        let y = c[0][1] * p.x + c[1][1] * p.y + c[2][1];
        let w = c[0][2] * p.x + c[1][2] * p.y + c[2][2];
        Point::new(x / w, y / w)
    }

    /// Returns the determinant.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        let c = &self.cols;
        let (a, d, g) = (c[0][0], c[0][1], c[0][2]);
        let (b, e, h) = (c[1][0], c[1][1], c[1][2]);
        let (cc, f, i) = (c[2][0], c[2][1], c[2][2]);
        a * (e * i - f * h) - b * (d * i - f * g) + cc * (d * h - e * g)
    }

    /// Returns the inverse transform, or `None` if the matrix is
    /// singular or non-finite.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let c = &self.cols;
        let (a, d, g) = (c[0][0], c[0][1], c[0][2]);
        let (b, e, h) = (c[1][0], c[1][1], c[1][2]);
        let (cc, f, i) = (c[2][0], c[2][1], c[2][2]);
        // Adjugate over determinant. Row-major cofactors, written back
        // into column-major storage.
        let inv = Self {
            cols: [
                [
                    (e * i - f * h) / det,
                    (f * g - d * i) / det,
                    (d * h - e * g) / det,
                ],
                [
                    (cc * h - b * i) / det,
                    (a * i - cc * g) / det,
                    (b * g - a * h) / det,
                ],
                [
                    (b * f - cc * e) / det,
                    (cc * d - a * f) / det,
                    (a * e - b * d) / det,
                ],
            ],
        };
        inv.is_finite().then_some(inv)
    }

    /// Builds the projective map taking the unit square `(0,0)-(1,1)` to
    /// the given quad (corner-for-corner), or `None` if the quad is
    /// degenerate.
    #[must_use]
    pub fn square_to_quad(quad: Quad) -> Option<Self> {
        if !quad.is_finite() {
            return None;
        }
        let [p0, p1, p2, p3] = quad.pts;
        let sx = p0.x - p1.x + p2.x - p3.x;
        let sy = p0.y - p1.y + p2.y - p3.y;

        if sx == 0.0 && sy == 0.0 {
            // Parallelogram: the map is affine.
            return Some(Self::from_cols(
                [p1.x - p0.x, p1.y - p0.y, 0.0],
                [p3.x - p0.x, p3.y - p0.y, 0.0],
                [p0.x, p0.y, 1.0],
            ));
        }

        let dx1 = p1.x - p2.x;
        let dy1 = p1.y - p2.y;
        let dx2 = p3.x - p2.x;
        let dy2 = p3.y - p2.y;
        let den = dx1 * dy2 - dx2 * dy1;
        if den == 0.0 || !den.is_finite() {
            return None;
        }
        let g = (sx * dy2 - sy * dx2) / den;
        let h = (dx1 * sy - dy1 * sx) / den;
        let m = Self::from_cols(
            [p1.x - p0.x + g * p1.x, p1.y - p0.y + g * p1.y, g],
            [p3.x - p0.x + h * p3.x, p3.y - p0.y + h * p3.y, h],
            [p0.x, p0.y, 1.0],
        );
        m.is_finite().then_some(m)
    }

    /// Builds the projective map taking the corners of `src` to the
    /// corners of `dst` (TL→TL, TR→TR, BR→BR, BL→BL), or `None` if
    /// either shape is degenerate.
    #[must_use]
    pub fn rect_to_quad(src: Rect, dst: Quad) -> Option<Self> {
        let w = src.width();
        let h = src.height();
        if w == 0.0 || h == 0.0 {
            return None;
        }
        let to_unit = Self::from_scale(1.0 / w, 1.0 / h) * Self::from_translation(-src.x0, -src.y0);
        Some(Self::square_to_quad(dst)? * to_unit)
    }

    /// Builds the general 4-point correspondence taking the corners of
    /// `src` to the corners of `dst`, or `None` if either quad is
    /// degenerate.
    #[must_use]
    pub fn quad_to_quad(src: Quad, dst: Quad) -> Option<Self> {
        let src_map = Self::square_to_quad(src)?;
        Some(Self::square_to_quad(dst)? * src_map.inverse()?)
    }

    /// Is the map affine (no perspective component)?
    #[inline]
    #[must_use]
    pub fn is_affine(&self) -> bool {
        self.cols[0][2] == 0.0 && self.cols[1][2] == 0.0 && self.cols[2][2] == 1.0
    }

    /// Is this transform [finite](f64::is_finite)?
    #[inline]
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        let c = &self.cols;
        c[0][0].is_finite()
            && c[0][1].is_finite()
            && c[0][2].is_finite()
            && c[1][0].is_finite()
            && c[1][1].is_finite()
            && c[1][2].is_finite()
            && c[2][0].is_finite()
            && c[2][1].is_finite()
            && c[2][2].is_finite()
    }

    /// Is this transform [NaN](f64::is_nan)?
    #[inline]
    #[must_use]
    pub const fn is_nan(&self) -> bool {
        let c = &self.cols;
        c[0][0].is_nan()
            || c[0][1].is_nan()
            || c[0][2].is_nan()
            || c[1][0].is_nan()
            || c[1][1].is_nan()
            || c[1][2].is_nan()
            || c[2][0].is_nan()
            || c[2][1].is_nan()
            || c[2][2].is_nan()
    }
}

impl Default for Transform2d {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Transform2d {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let a = &self.cols;
        let b = &rhs.cols;
        let mut out = [[0.0_f64; 3]; 3];
        let mut j = 0;
        while j < 3 {
            let mut i = 0;
            while i < 3 {
                out[j][i] = a[0][i] * b[j][0] + a[1][i] * b[j][1] + a[2][i] * b[j][2];
                i += 1;
            }
            j += 1;
        }
        Self { cols: out }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(p: Point, q: Point) {
        let eps = 1e-9;
        assert!(
            (p.x - q.x).abs() < eps && (p.y - q.y).abs() < eps,
            "{p:?} != {q:?}"
        );
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(Transform2d::default(), Transform2d::IDENTITY);
    }

    #[test]
    fn identity_multiply() {
        let t = Transform2d::from_translation(1.0, 2.0);
        assert_eq!(Transform2d::IDENTITY * t, t);
        assert_eq!(t * Transform2d::IDENTITY, t);
    }

    #[test]
    fn translation_applies() {
        let t = Transform2d::from_translation(3.0, -4.0);
        assert_near(t.apply(Point::new(1.0, 1.0)), Point::new(4.0, -3.0));
    }

    #[test]
    fn scale_then_translate() {
        let s = Transform2d::from_scale(2.0, 2.0);
        let t = Transform2d::from_translation(3.0, 4.0);
        // Scale first, then translate: T * S.
        let combined = t * s;
        assert_near(combined.apply(Point::new(1.0, 1.0)), Point::new(5.0, 6.0));
    }

    #[test]
    fn inverse_round_trips() {
        let t = Transform2d::from_translation(5.0, 7.0) * Transform2d::from_scale(2.0, 3.0);
        let inv = t.inverse().unwrap();
        let p = Point::new(11.0, 13.0);
        assert_near(inv.apply(t.apply(p)), p);
    }

    #[test]
    fn singular_has_no_inverse() {
        let t = Transform2d::from_scale(0.0, 1.0);
        assert!(t.inverse().is_none());
    }

    #[test]
    fn square_to_quad_hits_corners() {
        let quad = Quad {
            pts: [
                Point::new(10.0, 0.0),
                Point::new(30.0, 5.0),
                Point::new(30.0, 25.0),
                Point::new(10.0, 40.0),
            ],
        };
        let m = Transform2d::square_to_quad(quad).unwrap();
        assert_near(m.apply(Point::new(0.0, 0.0)), quad.pts[0]);
        assert_near(m.apply(Point::new(1.0, 0.0)), quad.pts[1]);
        assert_near(m.apply(Point::new(1.0, 1.0)), quad.pts[2]);
        assert_near(m.apply(Point::new(0.0, 1.0)), quad.pts[3]);
    }

    #[test]
    fn parallelogram_destination_is_affine() {
        let quad = Quad {
            pts: [
                Point::new(1.0, 1.0),
                Point::new(5.0, 2.0),
                Point::new(6.0, 6.0),
                Point::new(2.0, 5.0),
            ],
        };
        let m = Transform2d::square_to_quad(quad).unwrap();
        assert!(m.is_affine());
    }

    #[test]
    fn trapezoid_destination_is_projective() {
        // Vertical left edge of full height, shrunk right edge: the shape
        // every even fold segment takes.
        let quad = Quad {
            pts: [
                Point::new(0.0, 0.0),
                Point::new(100.0, 10.0),
                Point::new(100.0, 90.0),
                Point::new(0.0, 100.0),
            ],
        };
        let m = Transform2d::square_to_quad(quad).unwrap();
        assert!(!m.is_affine());
    }

    #[test]
    fn rect_to_quad_hits_corners() {
        let src = Rect::new(0.0, 0.0, 100.0, 200.0);
        let dst = Quad {
            pts: [
                Point::new(5.0, 10.0),
                Point::new(95.0, 20.0),
                Point::new(95.0, 180.0),
                Point::new(5.0, 190.0),
            ],
        };
        let m = Transform2d::rect_to_quad(src, dst).unwrap();
        assert_near(m.apply(Point::new(0.0, 0.0)), dst.pts[0]);
        assert_near(m.apply(Point::new(100.0, 0.0)), dst.pts[1]);
        assert_near(m.apply(Point::new(100.0, 200.0)), dst.pts[2]);
        assert_near(m.apply(Point::new(0.0, 200.0)), dst.pts[3]);
    }

    #[test]
    fn rect_to_quad_identity_when_unmoved() {
        let src = Rect::new(0.0, 0.0, 50.0, 50.0);
        let m = Transform2d::rect_to_quad(src, Quad::from_rect(src)).unwrap();
        assert_near(m.apply(Point::new(25.0, 10.0)), Point::new(25.0, 10.0));
        assert!(m.is_affine());
    }

    #[test]
    fn quad_to_quad_general_correspondence() {
        let src = Quad {
            pts: [
                Point::new(0.0, 0.0),
                Point::new(10.0, 1.0),
                Point::new(9.0, 11.0),
                Point::new(-1.0, 10.0),
            ],
        };
        let dst = Quad {
            pts: [
                Point::new(3.0, 3.0),
                Point::new(20.0, 0.0),
                Point::new(22.0, 18.0),
                Point::new(1.0, 16.0),
            ],
        };
        let m = Transform2d::quad_to_quad(src, dst).unwrap();
        for i in 0..4 {
            assert_near(m.apply(src.pts[i]), dst.pts[i]);
        }
    }

    #[test]
    fn degenerate_quad_rejected() {
        // All four corners collinear.
        let quad = Quad {
            pts: [
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(2.0, 2.0),
                Point::new(3.0, 3.0),
            ],
        };
        assert!(Transform2d::quad_to_quad(quad, quad).is_none());
    }

    #[test]
    fn zero_extent_rect_rejected() {
        let src = Rect::new(0.0, 0.0, 0.0, 100.0);
        let dst = Quad::from_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(Transform2d::rect_to_quad(src, dst).is_none());
    }

    #[test]
    fn non_finite_quad_rejected() {
        let quad = Quad {
            pts: [
                Point::new(f64::NAN, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(0.0, 1.0),
            ],
        };
        assert!(Transform2d::square_to_quad(quad).is_none());
    }

    #[test]
    fn nan_detected() {
        let mut t = Transform2d::IDENTITY;
        t.cols[1][2] = f64::NAN;
        assert!(!t.is_finite());
        assert!(t.is_nan());
    }

    #[test]
    fn infinity_detected() {
        let mut t = Transform2d::IDENTITY;
        t.cols[2][0] = f64::INFINITY;
        assert!(!t.is_finite());
        assert!(!t.is_nan());
    }
}
