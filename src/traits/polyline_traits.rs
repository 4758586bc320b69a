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

use smallvec::SmallVec;

use crate::error::{ArrError, BboxError};
use crate::geometry::{Bbox2, Point2};
use crate::kernel::FilteredKernel;
use crate::traits::segment_traits::{
    compare_pieces_left, compare_pieces_right, compare_y_to_vertical, validate_points,
};
use crate::traits::{ArrTraits, BoundaryCategory, CurveExtent, CurveFamily};

/// An x-monotone chain of segments.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub points: SmallVec<[Point2; 8]>,
}

impl Polyline {
    pub fn new<I: IntoIterator<Item = Point2>>(points: I) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct PolylineTraits {
    kernel: FilteredKernel,
}

impl PolylineTraits {
    pub fn new() -> Self {
        Self::default()
    }

    fn reversed(&self, c: &Polyline) -> bool {
        self.kernel.compare_xy(&c.points[0], &c.points[c.len() - 1]) == Ordering::Greater
    }

    /// Vertices from the min end to the max end.
    pub fn ordered(&self, c: &Polyline) -> Vec<Point2> {
        let mut pts = c.points.to_vec();
        if self.reversed(c) {
            pts.reverse();
        }
        pts
    }

    // Index `i` such that `pts[i].x <= p.x <= pts[i + 1].x`, preferring the
    // piece starting at `p.x` when `right` is set.
    fn piece_at(&self, pts: &[Point2], p: &Point2, right: bool) -> usize {
        let last = pts.len() - 2;
        let mut lo = 0;
        let mut hi = last;
        while lo < hi {
            let mid = (lo + hi).div_ceil(2);
            let c = self.kernel.compare_x(&pts[mid], p);
            let go_right = if right {
                c != Ordering::Greater
            } else {
                c == Ordering::Less
            };
            if go_right { lo = mid } else { hi = mid - 1 }
        }
        lo
    }

    fn is_vertical_chain(&self, pts: &[Point2]) -> bool {
        self.kernel.compare_x(&pts[0], &pts[pts.len() - 1]) == Ordering::Equal
    }
}

impl ArrTraits for PolylineTraits {
    type Point = Point2;
    type XCurve = Polyline;

    const BOUNDARY: BoundaryCategory = BoundaryCategory::NoBoundary;
    const FAMILY: CurveFamily = CurveFamily::Polyline;

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

    fn equal_curves(&self, c1: &Polyline, c2: &Polyline) -> bool {
        let a = self.ordered(c1);
        let b = self.ordered(c2);
        a.len() == b.len() && a.iter().zip(&b).all(|(p, q)| self.kernel.equal(p, q))
    }

    fn min_vertex(&self, c: &Polyline) -> Point2 {
        if self.reversed(c) { c.points[c.len() - 1] } else { c.points[0] }
    }

    fn max_vertex(&self, c: &Polyline) -> Point2 {
        if self.reversed(c) { c.points[0] } else { c.points[c.len() - 1] }
    }

    fn is_vertical(&self, c: &Polyline) -> bool {
        self.is_vertical_chain(&c.points)
    }

    fn compare_y_at_x(&self, p: &Point2, c: &Polyline) -> Ordering {
        let pts = self.ordered(c);
        if self.is_vertical_chain(&pts) {
            return compare_y_to_vertical(&self.kernel, p, &pts[0], &pts[pts.len() - 1]);
        }
        let i = self.piece_at(&pts, p, true);
        if self.kernel.compare_x(p, &pts[i]) == Ordering::Equal {
            return self.kernel.compare_y(p, &pts[i]);
        }
        self.kernel.compare_y_at_x_of_point(p, &pts[i], &pts[i + 1])
    }

    fn compare_y_at_x_right(&self, c1: &Polyline, c2: &Polyline, p: &Point2) -> Ordering {
        let a = self.ordered(c1);
        let b = self.ordered(c2);
        let i = self.piece_at(&a, p, true);
        let j = self.piece_at(&b, p, true);
        compare_pieces_right(
            &self.kernel,
            (&a[i], &a[i + 1], self.is_vertical_chain(&a)),
            (&b[j], &b[j + 1], self.is_vertical_chain(&b)),
        )
    }

    fn compare_y_at_x_left(&self, c1: &Polyline, c2: &Polyline, p: &Point2) -> Ordering {
        let a = self.ordered(c1);
        let b = self.ordered(c2);
        let i = self.piece_at(&a, p, false);
        let j = self.piece_at(&b, p, false);
        compare_pieces_left(
            &self.kernel,
            (&a[i], &a[i + 1], self.is_vertical_chain(&a)),
            (&b[j], &b[j + 1], self.is_vertical_chain(&b)),
        )
    }

    fn compare_y_position(&self, c1: &Polyline, c2: &Polyline, p: &Point2) -> Ordering {
        let a = self.ordered(c1);
        let b = self.ordered(c2);
        let i = self.piece_at(&a, p, true);
        let j = self.piece_at(&b, p, true);
        self.kernel
            .compare_y_at_x_of_lines(p.x, &a[i], &a[i + 1], &b[j], &b[j + 1])
    }

    fn extent(&self, c: &Polyline) -> Result<CurveExtent, BboxError> {
        let mut b = Bbox2::empty();
        for p in &c.points {
            b.include(p);
        }
        Ok(CurveExtent::Finite(b))
    }

    fn sample(&self, c: &Polyline, _n: usize) -> Vec<Point2> {
        self.ordered(c)
    }

    fn validate(&self, c: &Polyline) -> Result<(), ArrError> {
        if c.len() < 2 {
            return Err(ArrError::DegenerateCurve(format!(
                "polyline with {} vertices",
                c.len()
            )));
        }
        validate_points(&c.points)?;
        let first = self.kernel.compare_xy(&c.points[0], &c.points[1]);
        if first == Ordering::Equal {
            return Err(ArrError::DegenerateCurve("repeated polyline vertex".into()));
        }
        let vertical = self.is_vertical_chain(&c.points);
        for (i, w) in c.points.windows(2).enumerate() {
            if self.kernel.compare_xy(&w[0], &w[1]) != first {
                return Err(ArrError::NotXMonotone(i + 1));
            }
            // a vertical piece inside a non-vertical chain breaks x-monotonicity
            if !vertical && self.kernel.compare_x(&w[0], &w[1]) == Ordering::Equal {
                return Err(ArrError::NotXMonotone(i + 1));
            }
        }
        Ok(())
    }
}
