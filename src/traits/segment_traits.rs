// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::cmp::Ordering;

use crate::error::{ArrError, BboxError};
use crate::geometry::{Bbox2, Point2};
use crate::kernel::FilteredKernel;
use crate::traits::{ArrTraits, BoundaryCategory, CurveExtent, CurveFamily, LineEquation};

/// A bounded line segment. The endpoints are kept in the order given.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment2 {
    pub source: Point2,
    pub target: Point2,
}

impl Segment2 {
    pub fn new(source: Point2, target: Point2) -> Self {
        Self { source, target }
    }

    pub fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }
}

/// Traits for bounded segments.
#[derive(Debug, Default)]
pub struct SegmentTraits {
    kernel: FilteredKernel,
}

impl SegmentTraits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Endpoints in lexicographic order.
    pub fn ends(&self, c: &Segment2) -> (Point2, Point2) {
        match self.kernel.compare_xy(&c.source, &c.target) {
            Ordering::Greater => (c.target, c.source),
            _ => (c.source, c.target),
        }
    }
}

/// Shared by every family made of straight pieces: orders two pieces that
/// both leave their common point to the right.
pub(crate) fn compare_pieces_right(
    kernel: &FilteredKernel,
    (l1, r1, v1): (&Point2, &Point2, bool),
    (l2, r2, v2): (&Point2, &Point2, bool),
) -> Ordering {
    match (v1, v2) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // the piece turning counter-clockwise from the other is above it
        (false, false) => kernel.direction_orientation(l2, r2, l1, r1).to_ordering(),
    }
}

/// Orders two pieces that both arrive at their common point from the left.
pub(crate) fn compare_pieces_left(
    kernel: &FilteredKernel,
    (l1, r1, v1): (&Point2, &Point2, bool),
    (l2, r2, v2): (&Point2, &Point2, bool),
) -> Ordering {
    match (v1, v2) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => kernel.direction_orientation(l1, r1, l2, r2).to_ordering(),
    }
}

/// Position of `p` against a vertical piece spanning `[lo, hi]` in y.
pub(crate) fn compare_y_to_vertical(kernel: &FilteredKernel, p: &Point2, lo: &Point2, hi: &Point2) -> Ordering {
    if kernel.compare_y(p, lo) == Ordering::Less {
        Ordering::Less
    } else if kernel.compare_y(p, hi) == Ordering::Greater {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

pub(crate) fn validate_points(points: &[Point2]) -> Result<(), ArrError> {
    for p in points {
        Point2::try_new(p.x, p.y)?;
    }
    Ok(())
}

impl ArrTraits for SegmentTraits {
    type Point = Point2;
    type XCurve = Segment2;

    const BOUNDARY: BoundaryCategory = BoundaryCategory::NoBoundary;
    const FAMILY: CurveFamily = CurveFamily::Segment;

    fn kernel(&self) -> &FilteredKernel {
        &self.kernel
    }

    fn to_point2(&self, p: &Point2) -> Point2 {
        *p
    }

    fn from_point2(&self, p: Point2) -> Point2 {
        p
    }

    fn compare_x(&self, p: &Point2, q: &Point2) -> Ordering {
        self.kernel.compare_x(p, q)
    }

    fn compare_xy(&self, p: &Point2, q: &Point2) -> Ordering {
        self.kernel.compare_xy(p, q)
    }

    fn equal_curves(&self, c1: &Segment2, c2: &Segment2) -> bool {
        let (a1, b1) = self.ends(c1);
        let (a2, b2) = self.ends(c2);
        self.kernel.equal(&a1, &a2) && self.kernel.equal(&b1, &b2)
    }

    fn min_vertex(&self, c: &Segment2) -> Point2 {
        self.ends(c).0
    }

    fn max_vertex(&self, c: &Segment2) -> Point2 {
        self.ends(c).1
    }

    fn is_vertical(&self, c: &Segment2) -> bool {
        self.kernel.compare_x(&c.source, &c.target) == Ordering::Equal
    }

    fn compare_y_at_x(&self, p: &Point2, c: &Segment2) -> Ordering {
        let (l, r) = self.ends(c);
        if self.is_vertical(c) {
            return compare_y_to_vertical(&self.kernel, p, &l, &r);
        }
        self.kernel.compare_y_at_x_of_point(p, &l, &r)
    }

    fn compare_y_at_x_right(&self, c1: &Segment2, c2: &Segment2, _p: &Point2) -> Ordering {
        let (l1, r1) = self.ends(c1);
        let (l2, r2) = self.ends(c2);
        compare_pieces_right(
            &self.kernel,
            (&l1, &r1, self.is_vertical(c1)),
            (&l2, &r2, self.is_vertical(c2)),
        )
    }

    fn compare_y_at_x_left(&self, c1: &Segment2, c2: &Segment2, _p: &Point2) -> Ordering {
        let (l1, r1) = self.ends(c1);
        let (l2, r2) = self.ends(c2);
        compare_pieces_left(
            &self.kernel,
            (&l1, &r1, self.is_vertical(c1)),
            (&l2, &r2, self.is_vertical(c2)),
        )
    }

    fn compare_y_position(&self, c1: &Segment2, c2: &Segment2, p: &Point2) -> Ordering {
        self.kernel
            .compare_y_at_x_of_lines(p.x, &c1.source, &c1.target, &c2.source, &c2.target)
    }

    fn extent(&self, c: &Segment2) -> Result<CurveExtent, BboxError> {
        Ok(CurveExtent::Finite(Bbox2::from_points(&c.source, &c.target)))
    }

    fn sample(&self, c: &Segment2, _n: usize) -> Vec<Point2> {
        let (l, r) = self.ends(c);
        vec![l, r]
    }

    fn validate(&self, c: &Segment2) -> Result<(), ArrError> {
        validate_points(&[c.source, c.target])?;
        if self.kernel.equal(&c.source, &c.target) {
            return Err(ArrError::DegenerateCurve(format!(
                "segment endpoints coincide at {}",
                c.source
            )));
        }
        Ok(())
    }

    fn supporting_line(&self, c: &Segment2) -> Option<LineEquation> {
        let (l, r) = self.ends(c);
        Some(LineEquation::through(&l, &r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ends_are_lexicographic() {
        let t = SegmentTraits::new();
        let s = Segment2::from_coords(2.0, 0.0, 1.0, 5.0);
        assert_eq!(t.min_vertex(&s), Point2::new(1.0, 5.0));
        assert_eq!(t.max_vertex(&s), Point2::new(2.0, 0.0));
    }

    #[test]
    fn order_to_the_right_of_a_shared_point() {
        let t = SegmentTraits::new();
        let o = Point2::new(0.0, 0.0);
        let low = Segment2::from_coords(0.0, 0.0, 2.0, -1.0);
        let high = Segment2::from_coords(0.0, 0.0, 2.0, 1.0);
        let up = Segment2::from_coords(0.0, 0.0, 0.0, 3.0);
        assert_eq!(t.compare_y_at_x_right(&low, &high, &o), Ordering::Less);
        assert_eq!(t.compare_y_at_x_right(&up, &high, &o), Ordering::Greater);
    }

    #[test]
    fn order_to_the_left_of_a_shared_point() {
        let t = SegmentTraits::new();
        let o = Point2::new(0.0, 0.0);
        // y = x and y = -x, both arriving at the origin
        let rising = Segment2::from_coords(-1.0, -1.0, 0.0, 0.0);
        let falling = Segment2::from_coords(-1.0, 1.0, 0.0, 0.0);
        assert_eq!(t.compare_y_at_x_left(&rising, &falling, &o), Ordering::Less);
        assert_eq!(t.compare_y_at_x_left(&falling, &rising, &o), Ordering::Greater);
    }

    #[test]
    fn point_against_vertical_segment() {
        let t = SegmentTraits::new();
        let v = Segment2::from_coords(1.0, 0.0, 1.0, 2.0);
        assert_eq!(t.compare_y_at_x(&Point2::new(1.0, -1.0), &v), Ordering::Less);
        assert_eq!(t.compare_y_at_x(&Point2::new(1.0, 1.0), &v), Ordering::Equal);
        assert_eq!(t.compare_y_at_x(&Point2::new(1.0, 3.0), &v), Ordering::Greater);
    }

    #[test]
    fn degenerate_segment_is_rejected() {
        let t = SegmentTraits::new();
        let s = Segment2::from_coords(1.0, 1.0, 1.0, 1.0);
        assert!(matches!(t.validate(&s), Err(ArrError::DegenerateCurve(_))));
        let n = Segment2::from_coords(f64::NAN, 0.0, 1.0, 1.0);
        assert!(matches!(t.validate(&n), Err(ArrError::NonFiniteCoordinate { .. })));
    }
}
