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

//! Curve-geometry collaborators.
//!
//! An arrangement never looks inside a curve: every geometric decision it
//! makes goes through an [`ArrTraits`] implementation, which in turn routes
//! its own decisions through a [`FilteredKernel`].

pub mod insertion;
pub mod linear_traits;
pub mod polyline_traits;
pub mod segment_traits;

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::error::{ArrError, BboxError};
use crate::geometry::{Bbox2, Point2};
use crate::kernel::{FilteredKernel, Sign};

pub use insertion::{ExCurve, ExPoint, InsertionTraits};
pub use linear_traits::{LinearCurve, LinearTraits};
pub use polyline_traits::{Polyline, PolylineTraits};
pub use segment_traits::{Segment2, SegmentTraits};

/// What kind of boundary the curves of a family can reach.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryCategory {
    /// Every curve end is a finite point.
    NoBoundary,
    /// Curve ends may lie on a closed boundary of the parameter space.
    Bounded,
    /// Curve ends may go to infinity.
    Unbounded,
}

/// The closed set of curve families an arrangement can be built over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveFamily {
    Segment,
    Polyline,
    Conic,
    Bezier,
    Algebraic,
    RationalFunction,
    Linear,
}

impl CurveFamily {
    /// Families whose faces have a closed polygon boundary; the others are
    /// painted by flood fill.
    pub fn has_polygon_faces(self) -> bool {
        matches!(
            self,
            CurveFamily::Segment | CurveFamily::Polyline | CurveFamily::Linear
        )
    }
}

/// Position of a curve end or vertex relative to the parameter-space
/// boundary. In x only `Left`, `Interior` and `Right` occur; in y only
/// `Bottom`, `Interior` and `Top`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParameterSpace {
    Left,
    Right,
    Bottom,
    Top,
    Interior,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveEnd {
    Min,
    Max,
}

/// Result of bounding a curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CurveExtent {
    Finite(Bbox2),
    /// Unbounded in one direction, from `source`; the signs are those of the
    /// direction components.
    Ray { source: Point2, dx: Sign, dy: Sign },
    /// Unbounded in both directions.
    Line,
}

/// A line `dx * y = dy * x + c`, with `(dx, dy)` running from the min end of
/// the curve toward its max end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineEquation {
    pub dx: f64,
    pub dy: f64,
    pub c: f64,
}

impl LineEquation {
    pub fn through(p: &Point2, q: &Point2) -> Self {
        let dx = q.x - p.x;
        let dy = q.y - p.y;
        LineEquation {
            dx,
            dy,
            c: dx * p.y - dy * p.x,
        }
    }

    pub fn reversed(&self) -> Self {
        LineEquation {
            dx: -self.dx,
            dy: -self.dy,
            c: -self.c,
        }
    }

    pub fn y_at_x(&self, x: f64) -> f64 {
        (self.dy / self.dx) * x + self.c / self.dx
    }

    pub fn x_at_y(&self, y: f64) -> f64 {
        (self.dx / self.dy) * y - self.c / self.dy
    }

    pub fn is_mostly_horizontal(&self) -> bool {
        self.dx.abs() > self.dy.abs()
    }
}

/// The curve-geometry collaborator of an arrangement.
///
/// `XCurve` values are x-monotone. The boundary operations only make sense
/// for families that can reach the parameter-space boundary; their default
/// bodies abort.
pub trait ArrTraits {
    type Point: Clone + Debug;
    type XCurve: Clone + Debug;

    const BOUNDARY: BoundaryCategory;
    const FAMILY: CurveFamily;

    fn kernel(&self) -> &FilteredKernel;

    /// Approximate coordinates, for display and viewport math.
    fn to_point2(&self, p: &Self::Point) -> Point2;

    /// A point at the given scene coordinates, for queries coming from a
    /// viewport.
    fn from_point2(&self, p: Point2) -> Self::Point;

    fn compare_x(&self, p: &Self::Point, q: &Self::Point) -> Ordering;
    fn compare_xy(&self, p: &Self::Point, q: &Self::Point) -> Ordering;

    fn equal_points(&self, p: &Self::Point, q: &Self::Point) -> bool {
        self.compare_xy(p, q) == Ordering::Equal
    }

    fn equal_curves(&self, c1: &Self::XCurve, c2: &Self::XCurve) -> bool;

    /// Lexicographically smaller end. Only valid for a bounded end.
    fn min_vertex(&self, c: &Self::XCurve) -> Self::Point;
    /// Lexicographically larger end. Only valid for a bounded end.
    fn max_vertex(&self, c: &Self::XCurve) -> Self::Point;

    fn is_vertical(&self, c: &Self::XCurve) -> bool;

    /// Position of `p` relative to `c`; `p.x` must lie in the x-range of `c`.
    fn compare_y_at_x(&self, p: &Self::Point, c: &Self::XCurve) -> Ordering;

    /// Order of two curves immediately to the right of a common point `p`.
    fn compare_y_at_x_right(&self, c1: &Self::XCurve, c2: &Self::XCurve, p: &Self::Point) -> Ordering;

    /// Order of two curves immediately to the left of a common point `p`.
    fn compare_y_at_x_left(&self, c1: &Self::XCurve, c2: &Self::XCurve, p: &Self::Point) -> Ordering;

    /// Heights of two non-vertical curves at the abscissa of `p`, which lies
    /// in both x-ranges.
    fn compare_y_position(&self, c1: &Self::XCurve, c2: &Self::XCurve, p: &Self::Point) -> Ordering;

    fn extent(&self, c: &Self::XCurve) -> Result<CurveExtent, BboxError>;

    /// Points approximating the finite part of `c`, from its min end to its
    /// max end. `n` is a resolution hint for curved families.
    fn sample(&self, c: &Self::XCurve, n: usize) -> Vec<Point2>;

    /// Rejects curves the family cannot insert.
    fn validate(&self, c: &Self::XCurve) -> Result<(), ArrError>;

    fn validate_point(&self, p: &Self::Point) -> Result<(), ArrError> {
        let q = self.to_point2(p);
        Point2::try_new(q.x, q.y).map(|_| ())
    }

    /// Supporting line, for linear families.
    fn supporting_line(&self, _c: &Self::XCurve) -> Option<LineEquation> {
        None
    }

    fn parameter_space_in_x(&self, _c: &Self::XCurve, _end: CurveEnd) -> ParameterSpace {
        panic!("{:?} traits: parameter_space_in_x is not supported", Self::FAMILY)
    }

    fn parameter_space_in_y(&self, _c: &Self::XCurve, _end: CurveEnd) -> ParameterSpace {
        panic!("{:?} traits: parameter_space_in_y is not supported", Self::FAMILY)
    }

    fn point_parameter_space_in_x(&self, _p: &Self::Point) -> ParameterSpace {
        panic!("{:?} traits: parameter_space_in_x is not supported", Self::FAMILY)
    }

    fn point_parameter_space_in_y(&self, _p: &Self::Point) -> ParameterSpace {
        panic!("{:?} traits: parameter_space_in_y is not supported", Self::FAMILY)
    }

    /// Compares the x of `p` with the x of a curve end lying on the bottom or
    /// top boundary.
    fn compare_x_point_near_boundary(&self, _p: &Self::Point, _c: &Self::XCurve, _end: CurveEnd) -> Ordering {
        panic!("{:?} traits: compare_x_near_boundary is not supported", Self::FAMILY)
    }

    /// Compares two curve ends on the same bottom or top boundary.
    fn compare_x_near_boundary(
        &self,
        _c1: &Self::XCurve,
        _end1: CurveEnd,
        _c2: &Self::XCurve,
        _end2: CurveEnd,
    ) -> Ordering {
        panic!("{:?} traits: compare_x_near_boundary is not supported", Self::FAMILY)
    }

    /// Compares two curve ends on the same left or right boundary.
    fn compare_y_near_boundary(&self, _c1: &Self::XCurve, _c2: &Self::XCurve, _end: CurveEnd) -> Ordering {
        panic!("{:?} traits: compare_y_near_boundary is not supported", Self::FAMILY)
    }

    fn compare_y_on_identification(&self, _p: &Self::Point, _q: &Self::Point) -> Ordering {
        panic!("{:?} traits: compare_y_on_identification is not supported", Self::FAMILY)
    }

    fn is_bounded(&self, _c: &Self::XCurve, _end: CurveEnd) -> bool {
        panic!("{:?} traits: is_bounded is not supported", Self::FAMILY)
    }

    /// Parameter space of a curve end in x and y, resolved by boundary
    /// category: ends of a family without boundary are always interior.
    fn end_space(&self, c: &Self::XCurve, end: CurveEnd) -> (ParameterSpace, ParameterSpace) {
        match Self::BOUNDARY {
            BoundaryCategory::NoBoundary => (ParameterSpace::Interior, ParameterSpace::Interior),
            _ => (
                self.parameter_space_in_x(c, end),
                self.parameter_space_in_y(c, end),
            ),
        }
    }

    fn end_is_finite(&self, c: &Self::XCurve, end: CurveEnd) -> bool {
        match Self::BOUNDARY {
            BoundaryCategory::Unbounded => self.is_bounded(c, end),
            _ => true,
        }
    }

    /// The finite point of a curve end, if it has one.
    fn end_point(&self, c: &Self::XCurve, end: CurveEnd) -> Option<Self::Point> {
        if !self.end_is_finite(c, end) {
            return None;
        }
        Some(match end {
            CurveEnd::Min => self.min_vertex(c),
            CurveEnd::Max => self.max_vertex(c),
        })
    }

    /// Compares the x of `p` with the x of a curve end, finite or not.
    fn compare_x_with_end(&self, p: &Self::Point, c: &Self::XCurve, end: CurveEnd) -> Ordering {
        if let Some(q) = self.end_point(c, end) {
            return self.compare_x(p, &q);
        }
        match self.end_space(c, end) {
            (ParameterSpace::Left, _) => Ordering::Greater,
            (ParameterSpace::Right, _) => Ordering::Less,
            _ => self.compare_x_point_near_boundary(p, c, end),
        }
    }
}
