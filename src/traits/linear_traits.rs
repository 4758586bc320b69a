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
use crate::kernel::{FilteredKernel, Sign};
use crate::traits::segment_traits::{
    compare_pieces_left, compare_pieces_right, compare_y_to_vertical, validate_points,
};
use crate::traits::{
    ArrTraits, BoundaryCategory, CurveEnd, CurveExtent, CurveFamily, LineEquation, ParameterSpace,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinearKind {
    Segment,
    /// Starts at `source` and runs through `target` to infinity.
    Ray,
    /// Runs through both points, unbounded both ways.
    Line,
}

/// A segment, ray or line given by two distinct points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearCurve {
    pub kind: LinearKind,
    pub source: Point2,
    pub target: Point2,
}

impl LinearCurve {
    pub fn segment(source: Point2, target: Point2) -> Self {
        Self {
            kind: LinearKind::Segment,
            source,
            target,
        }
    }

    pub fn ray(source: Point2, through: Point2) -> Self {
        Self {
            kind: LinearKind::Ray,
            source,
            target: through,
        }
    }

    pub fn line(a: Point2, b: Point2) -> Self {
        Self {
            kind: LinearKind::Line,
            source: a,
            target: b,
        }
    }

    pub fn is_segment(&self) -> bool {
        self.kind == LinearKind::Segment
    }

    pub fn is_ray(&self) -> bool {
        self.kind == LinearKind::Ray
    }

    pub fn is_line(&self) -> bool {
        self.kind == LinearKind::Line
    }
}

/// Traits for segments, rays and lines. Ray and line ends reach the
/// unbounded parameter-space boundary.
#[derive(Debug, Default)]
pub struct LinearTraits {
    kernel: FilteredKernel,
}

impl LinearTraits {
    pub fn new() -> Self {
        Self::default()
    }

    /// The defining points ordered lexicographically.
    fn lr(&self, c: &LinearCurve) -> (Point2, Point2) {
        match self.kernel.compare_xy(&c.source, &c.target) {
            Ordering::Greater => (c.target, c.source),
            _ => (c.source, c.target),
        }
    }

    // The source of a ray is its min end when the ray points
    // lexicographically forward.
    fn ray_source_is_min(&self, c: &LinearCurve) -> bool {
        self.kernel.compare_xy(&c.source, &c.target) == Ordering::Less
    }

    fn slope_order(&self, c1: &LinearCurve, c2: &LinearCurve) -> Ordering {
        let (l1, r1) = self.lr(c1);
        let (l2, r2) = self.lr(c2);
        self.kernel.direction_orientation(&l2, &r2, &l1, &r1).to_ordering()
    }
}

impl ArrTraits for LinearTraits {
    type Point = Point2;
    type XCurve = LinearCurve;

    const BOUNDARY: BoundaryCategory = BoundaryCategory::Unbounded;
    const FAMILY: CurveFamily = CurveFamily::Linear;

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

    fn equal_curves(&self, c1: &LinearCurve, c2: &LinearCurve) -> bool {
        if c1.kind != c2.kind {
            return false;
        }
        match c1.kind {
            LinearKind::Segment => {
                let (a1, b1) = self.lr(c1);
                let (a2, b2) = self.lr(c2);
                self.kernel.equal(&a1, &a2) && self.kernel.equal(&b1, &b2)
            }
            LinearKind::Ray => {
                self.kernel.equal(&c1.source, &c2.source)
                    && self.kernel.collinear(&c1.source, &c1.target, &c2.target)
                    && self.ray_source_is_min(c1) == self.ray_source_is_min(c2)
            }
            LinearKind::Line => {
                self.kernel.collinear(&c1.source, &c1.target, &c2.source)
                    && self.kernel.collinear(&c1.source, &c1.target, &c2.target)
            }
        }
    }

    fn min_vertex(&self, c: &LinearCurve) -> Point2 {
        match c.kind {
            LinearKind::Segment => self.lr(c).0,
            LinearKind::Ray if self.ray_source_is_min(c) => c.source,
            _ => panic!("min end of {:?} lies at infinity", c.kind),
        }
    }

    fn max_vertex(&self, c: &LinearCurve) -> Point2 {
        match c.kind {
            LinearKind::Segment => self.lr(c).1,
            LinearKind::Ray if !self.ray_source_is_min(c) => c.source,
            _ => panic!("max end of {:?} lies at infinity", c.kind),
        }
    }

    fn is_vertical(&self, c: &LinearCurve) -> bool {
        self.kernel.compare_x(&c.source, &c.target) == Ordering::Equal
    }

    fn compare_y_at_x(&self, p: &Point2, c: &LinearCurve) -> Ordering {
        if !self.is_vertical(c) {
            return self.kernel.compare_y_at_x_of_point(p, &c.source, &c.target);
        }
        match c.kind {
            LinearKind::Segment => {
                let (lo, hi) = self.lr(c);
                compare_y_to_vertical(&self.kernel, p, &lo, &hi)
            }
            LinearKind::Ray => {
                let y = self.kernel.compare_y(p, &c.source);
                match (self.ray_source_is_min(c), y) {
                    (true, Ordering::Less) => Ordering::Less,
                    (false, Ordering::Greater) => Ordering::Greater,
                    _ => Ordering::Equal,
                }
            }
            LinearKind::Line => Ordering::Equal,
        }
    }

    fn compare_y_at_x_right(&self, c1: &LinearCurve, c2: &LinearCurve, _p: &Point2) -> Ordering {
        let (l1, r1) = self.lr(c1);
        let (l2, r2) = self.lr(c2);
        compare_pieces_right(
            &self.kernel,
            (&l1, &r1, self.is_vertical(c1)),
            (&l2, &r2, self.is_vertical(c2)),
        )
    }

    fn compare_y_at_x_left(&self, c1: &LinearCurve, c2: &LinearCurve, _p: &Point2) -> Ordering {
        let (l1, r1) = self.lr(c1);
        let (l2, r2) = self.lr(c2);
        compare_pieces_left(
            &self.kernel,
            (&l1, &r1, self.is_vertical(c1)),
            (&l2, &r2, self.is_vertical(c2)),
        )
    }

    fn compare_y_position(&self, c1: &LinearCurve, c2: &LinearCurve, p: &Point2) -> Ordering {
        self.kernel
            .compare_y_at_x_of_lines(p.x, &c1.source, &c1.target, &c2.source, &c2.target)
    }

    fn extent(&self, c: &LinearCurve) -> Result<CurveExtent, BboxError> {
        Ok(match c.kind {
            LinearKind::Segment => CurveExtent::Finite(Bbox2::from_points(&c.source, &c.target)),
            LinearKind::Ray => CurveExtent::Ray {
                source: c.source,
                dx: Sign::of_ordering(self.kernel.compare_x(&c.target, &c.source)),
                dy: Sign::of_ordering(self.kernel.compare_y(&c.target, &c.source)),
            },
            LinearKind::Line => CurveExtent::Line,
        })
    }

    fn sample(&self, c: &LinearCurve, _n: usize) -> Vec<Point2> {
        match c.kind {
            LinearKind::Segment => {
                let (l, r) = self.lr(c);
                vec![l, r]
            }
            LinearKind::Ray => vec![c.source],
            LinearKind::Line => Vec::new(),
        }
    }

    fn validate(&self, c: &LinearCurve) -> Result<(), ArrError> {
        validate_points(&[c.source, c.target])?;
        if self.kernel.equal(&c.source, &c.target) {
            return Err(ArrError::DegenerateCurve(format!(
                "{:?} defined by a repeated point {}",
                c.kind, c.source
            )));
        }
        Ok(())
    }

    fn supporting_line(&self, c: &LinearCurve) -> Option<LineEquation> {
        let (l, r) = self.lr(c);
        Some(LineEquation::through(&l, &r))
    }

    fn parameter_space_in_x(&self, c: &LinearCurve, end: CurveEnd) -> ParameterSpace {
        if self.is_bounded(c, end) || self.is_vertical(c) {
            return ParameterSpace::Interior;
        }
        match end {
            CurveEnd::Min => ParameterSpace::Left,
            CurveEnd::Max => ParameterSpace::Right,
        }
    }

    fn parameter_space_in_y(&self, c: &LinearCurve, end: CurveEnd) -> ParameterSpace {
        if self.is_bounded(c, end) || !self.is_vertical(c) {
            return ParameterSpace::Interior;
        }
        match end {
            CurveEnd::Min => ParameterSpace::Bottom,
            CurveEnd::Max => ParameterSpace::Top,
        }
    }

    fn point_parameter_space_in_x(&self, _p: &Point2) -> ParameterSpace {
        ParameterSpace::Interior
    }

    fn point_parameter_space_in_y(&self, _p: &Point2) -> ParameterSpace {
        ParameterSpace::Interior
    }

    fn compare_x_point_near_boundary(&self, p: &Point2, c: &LinearCurve, _end: CurveEnd) -> Ordering {
        assert!(self.is_vertical(c), "curve end on the bottom or top boundary must be vertical");
        self.kernel.compare_x(p, &c.source)
    }

    fn compare_x_near_boundary(
        &self,
        c1: &LinearCurve,
        _end1: CurveEnd,
        c2: &LinearCurve,
        _end2: CurveEnd,
    ) -> Ordering {
        assert!(
            self.is_vertical(c1) && self.is_vertical(c2),
            "curve ends on the bottom or top boundary must be vertical"
        );
        self.kernel.compare_x(&c1.source, &c2.source)
    }

    fn compare_y_near_boundary(&self, c1: &LinearCurve, c2: &LinearCurve, end: CurveEnd) -> Ordering {
        // toward +inf the steeper line is above, toward -inf below
        let slopes = self.slope_order(c1, c2);
        if slopes != Ordering::Equal {
            return match end {
                CurveEnd::Max => slopes,
                CurveEnd::Min => slopes.reverse(),
            };
        }
        self.kernel
            .compare_y_at_x_of_lines(0.0, &c1.source, &c1.target, &c2.source, &c2.target)
    }

    fn is_bounded(&self, c: &LinearCurve, end: CurveEnd) -> bool {
        match c.kind {
            LinearKind::Segment => true,
            LinearKind::Line => false,
            LinearKind::Ray => self.ray_source_is_min(c) == (end == CurveEnd::Min),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn ray_ends() {
        let t = LinearTraits::new();
        let right = LinearCurve::ray(p(1.0, 1.0), p(2.0, 1.0));
        assert!(t.is_bounded(&right, CurveEnd::Min));
        assert!(!t.is_bounded(&right, CurveEnd::Max));
        assert_eq!(t.min_vertex(&right), p(1.0, 1.0));
        assert_eq!(t.parameter_space_in_x(&right, CurveEnd::Max), ParameterSpace::Right);

        let down = LinearCurve::ray(p(0.0, 0.0), p(0.0, -1.0));
        assert!(t.is_bounded(&down, CurveEnd::Max));
        assert_eq!(t.parameter_space_in_y(&down, CurveEnd::Min), ParameterSpace::Bottom);
        assert_eq!(t.parameter_space_in_x(&down, CurveEnd::Min), ParameterSpace::Interior);
    }

    #[test]
    fn lines_near_the_side_boundaries() {
        let t = LinearTraits::new();
        let flat = LinearCurve::line(p(0.0, 0.0), p(1.0, 0.0));
        let steep = LinearCurve::line(p(0.0, 0.0), p(1.0, 2.0));
        assert_eq!(t.compare_y_near_boundary(&steep, &flat, CurveEnd::Max), Ordering::Greater);
        assert_eq!(t.compare_y_near_boundary(&steep, &flat, CurveEnd::Min), Ordering::Less);

        let above = LinearCurve::line(p(5.0, 1.0), p(7.0, 1.0));
        assert_eq!(t.compare_y_near_boundary(&above, &flat, CurveEnd::Min), Ordering::Greater);
    }

    #[test]
    fn ray_extent_signs() {
        let t = LinearTraits::new();
        let r = LinearCurve::ray(p(1.0, 2.0), p(0.0, 2.0));
        assert_eq!(
            t.extent(&r),
            Ok(CurveExtent::Ray {
                source: p(1.0, 2.0),
                dx: Sign::Negative,
                dy: Sign::Zero
            })
        );
    }

    #[test]
    #[should_panic(expected = "lies at infinity")]
    fn line_has_no_min_vertex() {
        let t = LinearTraits::new();
        t.min_vertex(&LinearCurve::line(p(0.0, 0.0), p(1.0, 1.0)));
    }
}
