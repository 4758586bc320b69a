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

use std::cell::RefCell;
use std::cmp::Ordering;

use crate::geometry::{Point2, WeightedPoint2};
use crate::kernel::adaptive_filter::{AdaptiveFilter, FilterStats};
use crate::kernel::predicates::{
    CompareCoord, CompareYAtXOfLines, DirectionOrientation, InSmallestOrthogonalCircle,
    Orientation, PowerTest, PowerTestDegenerate, SideOfOrientedCircle,
};
use crate::kernel::sign::Sign;

/// Filter context: one adaptive filter per predicate.
///
/// The filters live in `RefCell`s so the kernel can be shared by `&`
/// between the curve traits and the arrangement. That makes the kernel
/// `Send` but not `Sync`; give each thread its own instance.
#[derive(Debug, Default)]
pub struct FilteredKernel {
    orientation: RefCell<AdaptiveFilter<Orientation>>,
    compare_x: RefCell<AdaptiveFilter<CompareCoord>>,
    compare_y: RefCell<AdaptiveFilter<CompareCoord>>,
    direction: RefCell<AdaptiveFilter<DirectionOrientation>>,
    y_at_x: RefCell<AdaptiveFilter<CompareYAtXOfLines>>,
    circle: RefCell<AdaptiveFilter<SideOfOrientedCircle>>,
    orthogonal_circle: RefCell<AdaptiveFilter<InSmallestOrthogonalCircle>>,
    power: RefCell<AdaptiveFilter<PowerTest>>,
    power_degenerate: RefCell<AdaptiveFilter<PowerTestDegenerate>>,
}

impl FilteredKernel {
    pub fn new() -> Self {
        Self::default()
    }

    /// `Positive` if `p, q, r` make a left turn.
    pub fn orientation(&self, p: &Point2, q: &Point2, r: &Point2) -> Sign {
        self.orientation
            .borrow_mut()
            .evaluate(&[p.x, p.y, q.x, q.y, r.x, r.y])
    }

    pub fn collinear(&self, p: &Point2, q: &Point2, r: &Point2) -> bool {
        self.orientation(p, q, r).is_zero()
    }

    pub fn compare_x(&self, p: &Point2, q: &Point2) -> Ordering {
        self.compare_x_coord(p.x, q.x)
    }

    pub fn compare_y(&self, p: &Point2, q: &Point2) -> Ordering {
        self.compare_y_coord(p.y, q.y)
    }

    pub fn compare_x_coord(&self, a: f64, b: f64) -> Ordering {
        self.compare_x.borrow_mut().evaluate(&[a, b]).to_ordering()
    }

    pub fn compare_y_coord(&self, a: f64, b: f64) -> Ordering {
        self.compare_y.borrow_mut().evaluate(&[a, b]).to_ordering()
    }

    /// Lexicographic comparison. Each coordinate goes through its own
    /// adaptive filter, and y is only compared once x is decided equal.
    pub fn compare_xy(&self, p: &Point2, q: &Point2) -> Ordering {
        match self.compare_x(p, q) {
            Ordering::Equal => self.compare_y(p, q),
            o => o,
        }
    }

    pub fn equal(&self, p: &Point2, q: &Point2) -> bool {
        self.compare_xy(p, q) == Ordering::Equal
    }

    /// Sign of the cross product of the directions `q1 - p1` and `q2 - p2`.
    pub fn direction_orientation(&self, p1: &Point2, q1: &Point2, p2: &Point2, q2: &Point2) -> Sign {
        self.direction
            .borrow_mut()
            .evaluate(&[p1.x, p1.y, q1.x, q1.y, p2.x, p2.y, q2.x, q2.y])
    }

    /// Compares, at abscissa `x`, the line through `p1, q1` with the line
    /// through `p2, q2`. Both lines must be non-vertical.
    pub fn compare_y_at_x_of_lines(
        &self,
        x: f64,
        p1: &Point2,
        q1: &Point2,
        p2: &Point2,
        q2: &Point2,
    ) -> Ordering {
        let (a1, b1) = left_to_right(p1, q1);
        let (a2, b2) = left_to_right(p2, q2);
        self.y_at_x
            .borrow_mut()
            .evaluate(&[x, a1.x, a1.y, b1.x, b1.y, a2.x, a2.y, b2.x, b2.y])
            .to_ordering()
    }

    /// Compares the height of `p` with the line through `a, b` at `p.x`.
    pub fn compare_y_at_x_of_point(&self, p: &Point2, a: &Point2, b: &Point2) -> Ordering {
        let (l, r) = left_to_right(a, b);
        // orientation(l, r, p) > 0 means p is above the line
        match self.orientation(l, r, p) {
            Sign::Positive => Ordering::Greater,
            Sign::Zero => Ordering::Equal,
            Sign::Negative => Ordering::Less,
        }
    }

    /// `Positive` if `t` lies inside the circle through `p, q, r`, taken
    /// counter-clockwise.
    pub fn side_of_oriented_circle(&self, p: &Point2, q: &Point2, r: &Point2, t: &Point2) -> Sign {
        self.circle
            .borrow_mut()
            .evaluate(&[p.x, p.y, q.x, q.y, r.x, r.y, t.x, t.y])
    }

    pub fn in_smallest_orthogonal_circle(
        &self,
        p: &WeightedPoint2,
        q: &WeightedPoint2,
        t: &WeightedPoint2,
    ) -> Sign {
        let mut args = [0.0; 9];
        args[0..3].copy_from_slice(&p.coords());
        args[3..6].copy_from_slice(&q.coords());
        args[6..9].copy_from_slice(&t.coords());
        self.orthogonal_circle.borrow_mut().evaluate(&args)
    }

    pub fn power_test(
        &self,
        p: &WeightedPoint2,
        q: &WeightedPoint2,
        r: &WeightedPoint2,
        t: &WeightedPoint2,
    ) -> Sign {
        let mut args = [0.0; 12];
        args[0..3].copy_from_slice(&p.coords());
        args[3..6].copy_from_slice(&q.coords());
        args[6..9].copy_from_slice(&r.coords());
        args[9..12].copy_from_slice(&t.coords());
        self.power.borrow_mut().evaluate(&args)
    }

    /// Power test for collinear `p, q, t`.
    pub fn power_test_degenerate(&self, p: &WeightedPoint2, q: &WeightedPoint2, t: &WeightedPoint2) -> Sign {
        let mut args = [0.0; 9];
        args[0..3].copy_from_slice(&p.coords());
        args[3..6].copy_from_slice(&q.coords());
        args[6..9].copy_from_slice(&t.coords());
        self.power_degenerate.borrow_mut().evaluate(&args)
    }

    /// Per-predicate counters, keyed by predicate name.
    pub fn stats(&self) -> Vec<(&'static str, FilterStats)> {
        vec![
            ("orientation_2", self.orientation.borrow().stats()),
            ("compare_x_2", self.compare_x.borrow().stats()),
            ("compare_y_2", self.compare_y.borrow().stats()),
            ("direction_orientation_2", self.direction.borrow().stats()),
            ("compare_y_at_x_of_lines_2", self.y_at_x.borrow().stats()),
            ("side_of_oriented_circle_2", self.circle.borrow().stats()),
            (
                "in_smallest_orthogonal_circle_2",
                self.orthogonal_circle.borrow().stats(),
            ),
            ("power_test_2", self.power.borrow().stats()),
            ("power_test_degenerate_2", self.power_degenerate.borrow().stats()),
        ]
    }

    pub fn orientation_stats(&self) -> FilterStats {
        self.orientation.borrow().stats()
    }
}

// Orders a non-vertical point pair by x; x coordinates of doubles compare
// exactly, no filter needed.
fn left_to_right<'a>(p: &'a Point2, q: &'a Point2) -> (&'a Point2, &'a Point2) {
    assert!(p.x != q.x, "vertical line passed to a y-at-x comparison");
    if p.x < q.x { (p, q) } else { (q, p) }
}
