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

//! Predicate bodies shared by the fast, calibration and exact paths.
//!
//! Each body is written once, generically over [`FilterScalar`], and
//! reports every sign it needs through a [`SignOracle`] slot. Arguments are
//! flat `f64` coordinate lists in the order documented on each type.

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

use crate::kernel::adaptive_filter::SignOracle;
use crate::kernel::sign::{Sign, Uncertain};
use crate::numeric::FilterScalar;

/// A predicate that can run under a static adaptive filter.
pub trait FilteredPredicate {
    const NAME: &'static str;
    /// Number of `f64` arguments.
    const ARITY: usize;
    /// Number of distinct sign tests, one epsilon each.
    const SLOTS: usize;
    type Output: Copy + Debug;

    fn eval<T, S>(a: &[T], s: &mut S) -> Result<Self::Output, Uncertain>
    where
        T: FilterScalar,
        S: SignOracle<T>,
        for<'x> &'x T: Add<&'x T, Output = T> + Sub<&'x T, Output = T> + Mul<&'x T, Output = T>;
}

#[inline]
fn det2x2<T>(a00: &T, a01: &T, a10: &T, a11: &T) -> T
where
    for<'x> &'x T: Sub<&'x T, Output = T> + Mul<&'x T, Output = T>,
{
    &(a00 * a11) - &(a10 * a01)
}

#[allow(clippy::too_many_arguments)]
fn det3x3<T>(a00: &T, a01: &T, a02: &T, a10: &T, a11: &T, a12: &T, a20: &T, a21: &T, a22: &T) -> T
where
    for<'x> &'x T: Add<&'x T, Output = T> + Sub<&'x T, Output = T> + Mul<&'x T, Output = T>,
{
    let m0 = det2x2(a11, a12, a21, a22);
    let m1 = det2x2(a10, a12, a20, a22);
    let m2 = det2x2(a10, a11, a20, a21);
    &(&(a00 * &m0) - &(a01 * &m1)) + &(a02 * &m2)
}

/// Orientation of three points `[px, py, qx, qy, rx, ry]`.
/// `Positive` when `p, q, r` turn left.
#[derive(Clone, Copy, Debug)]
pub struct Orientation;

impl FilteredPredicate for Orientation {
    const NAME: &'static str = "orientation_2";
    const ARITY: usize = 6;
    const SLOTS: usize = 1;
    type Output = Sign;

    fn eval<T, S>(a: &[T], s: &mut S) -> Result<Sign, Uncertain>
    where
        T: FilterScalar,
        S: SignOracle<T>,
        for<'x> &'x T: Add<&'x T, Output = T> + Sub<&'x T, Output = T> + Mul<&'x T, Output = T>,
    {
        let qpx = &a[2] - &a[0];
        let qpy = &a[3] - &a[1];
        let rpx = &a[4] - &a[0];
        let rpy = &a[5] - &a[1];
        s.sign(0, &det2x2(&qpx, &qpy, &rpx, &rpy))
    }
}

/// Comparison of two coordinates `[a, b]`; `Negative` when `a < b`.
#[derive(Clone, Copy, Debug)]
pub struct CompareCoord;

impl FilteredPredicate for CompareCoord {
    const NAME: &'static str = "compare_coord";
    const ARITY: usize = 2;
    const SLOTS: usize = 1;
    type Output = Sign;

    fn eval<T, S>(a: &[T], s: &mut S) -> Result<Sign, Uncertain>
    where
        T: FilterScalar,
        S: SignOracle<T>,
        for<'x> &'x T: Add<&'x T, Output = T> + Sub<&'x T, Output = T> + Mul<&'x T, Output = T>,
    {
        s.sign(0, &(&a[0] - &a[1]))
    }
}

/// Orientation of two direction vectors given as point pairs
/// `[p1x, p1y, q1x, q1y, p2x, p2y, q2x, q2y]`: the sign of the cross product
/// `(q1 - p1) x (q2 - p2)`.
#[derive(Clone, Copy, Debug)]
pub struct DirectionOrientation;

impl FilteredPredicate for DirectionOrientation {
    const NAME: &'static str = "direction_orientation_2";
    const ARITY: usize = 8;
    const SLOTS: usize = 1;
    type Output = Sign;

    fn eval<T, S>(a: &[T], s: &mut S) -> Result<Sign, Uncertain>
    where
        T: FilterScalar,
        S: SignOracle<T>,
        for<'x> &'x T: Add<&'x T, Output = T> + Sub<&'x T, Output = T> + Mul<&'x T, Output = T>,
    {
        let d1x = &a[2] - &a[0];
        let d1y = &a[3] - &a[1];
        let d2x = &a[6] - &a[4];
        let d2y = &a[7] - &a[5];
        s.sign(0, &det2x2(&d1x, &d1y, &d2x, &d2y))
    }
}

/// Compares the heights at `x` of two non-vertical lines, each through a
/// point pair with strictly increasing x:
/// `[x, p1x, p1y, q1x, q1y, p2x, p2y, q2x, q2y]`.
///
/// The heights are compared scaled by both (positive) run lengths, so the
/// body stays division free.
#[derive(Clone, Copy, Debug)]
pub struct CompareYAtXOfLines;

impl FilteredPredicate for CompareYAtXOfLines {
    const NAME: &'static str = "compare_y_at_x_of_lines_2";
    const ARITY: usize = 9;
    const SLOTS: usize = 1;
    type Output = Sign;

    fn eval<T, S>(a: &[T], s: &mut S) -> Result<Sign, Uncertain>
    where
        T: FilterScalar,
        S: SignOracle<T>,
        for<'x> &'x T: Add<&'x T, Output = T> + Sub<&'x T, Output = T> + Mul<&'x T, Output = T>,
    {
        let x = &a[0];
        let dx1 = &a[3] - &a[1];
        let dy1 = &a[4] - &a[2];
        let dx2 = &a[7] - &a[5];
        let dy2 = &a[8] - &a[6];
        // y_i * dx_i
        let y1 = &(&a[2] * &dx1) + &(&(x - &a[1]) * &dy1);
        let y2 = &(&a[6] * &dx2) + &(&(x - &a[5]) * &dy2);
        s.sign(0, &(&(&y1 * &dx2) - &(&y2 * &dx1)))
    }
}

/// Side of `t` with respect to the oriented circle through `p, q, r`:
/// `[px, py, qx, qy, rx, ry, tx, ty]`. `Positive` is inside a
/// counter-clockwise circle.
#[derive(Clone, Copy, Debug)]
pub struct SideOfOrientedCircle;

impl FilteredPredicate for SideOfOrientedCircle {
    const NAME: &'static str = "side_of_oriented_circle_2";
    const ARITY: usize = 8;
    const SLOTS: usize = 1;
    type Output = Sign;

    fn eval<T, S>(a: &[T], s: &mut S) -> Result<Sign, Uncertain>
    where
        T: FilterScalar,
        S: SignOracle<T>,
        for<'x> &'x T: Add<&'x T, Output = T> + Sub<&'x T, Output = T> + Mul<&'x T, Output = T>,
    {
        let qpx = &a[2] - &a[0];
        let qpy = &a[3] - &a[1];
        let rpx = &a[4] - &a[0];
        let rpy = &a[5] - &a[1];
        let tpx = &a[6] - &a[0];
        let tpy = &a[7] - &a[1];
        let qp2 = &qpx.square() + &qpy.square();
        let rp2 = &rpx.square() + &rpy.square();
        let tp2 = &tpx.square() + &tpy.square();
        let det = det3x3(&qpx, &qpy, &qp2, &rpx, &rpy, &rp2, &tpx, &tpy, &tp2);
        // the lifted 4x4 determinant is the negated 3x3 one after translating p to the origin
        Ok(-s.sign(0, &det)?)
    }
}

/// Side of the weighted point `t` with respect to the smallest circle
/// orthogonal to the weighted points `p` and `q`:
/// `[px, py, pw, qx, qy, qw, tx, ty, tw]`.
#[derive(Clone, Copy, Debug)]
pub struct InSmallestOrthogonalCircle;

impl FilteredPredicate for InSmallestOrthogonalCircle {
    const NAME: &'static str = "in_smallest_orthogonal_circle_2";
    const ARITY: usize = 9;
    const SLOTS: usize = 1;
    type Output = Sign;

    fn eval<T, S>(a: &[T], s: &mut S) -> Result<Sign, Uncertain>
    where
        T: FilterScalar,
        S: SignOracle<T>,
        for<'x> &'x T: Add<&'x T, Output = T> + Sub<&'x T, Output = T> + Mul<&'x T, Output = T>,
    {
        let (px, py, pw) = (&a[0], &a[1], &a[2]);
        let (qx, qy, qw) = (&a[3], &a[4], &a[5]);
        let (tx, ty, tw) = (&a[6], &a[7], &a[8]);
        let dpx = px - qx;
        let dpy = py - qy;
        let dtx = tx - qx;
        let dty = ty - qy;
        let dpz = &dpx.square() + &dpy.square();
        let lhs = &(&(&(&dtx.square() + &dty.square()) - tw) + qw) * &dpz;
        let rhs = &(&(&dpz - pw) + qw) * &(&(&dpx * &dtx) + &(&dpy * &dty));
        s.sign(0, &(&lhs - &rhs))
    }
}

/// Power test of the weighted point `t` against the power circle of the
/// weighted points `p, q, r`:
/// `[px, py, pw, qx, qy, qw, rx, ry, rw, tx, ty, tw]`.
#[derive(Clone, Copy, Debug)]
pub struct PowerTest;

impl FilteredPredicate for PowerTest {
    const NAME: &'static str = "power_test_2";
    const ARITY: usize = 12;
    const SLOTS: usize = 1;
    type Output = Sign;

    fn eval<T, S>(a: &[T], s: &mut S) -> Result<Sign, Uncertain>
    where
        T: FilterScalar,
        S: SignOracle<T>,
        for<'x> &'x T: Add<&'x T, Output = T> + Sub<&'x T, Output = T> + Mul<&'x T, Output = T>,
    {
        let (tx, ty, tw) = (&a[9], &a[10], &a[11]);
        let lift = |i: usize| {
            let dx = &a[i] - tx;
            let dy = &a[i + 1] - ty;
            let dz = &(&(&dx.square() + &dy.square()) - &a[i + 2]) + tw;
            (dx, dy, dz)
        };
        let (dpx, dpy, dpz) = lift(0);
        let (dqx, dqy, dqz) = lift(3);
        let (drx, dry, drz) = lift(6);
        s.sign(0, &det3x3(&dpx, &dpy, &dpz, &dqx, &dqy, &dqz, &drx, &dry, &drz))
    }
}

/// Power test of `t` against the power segment of `p` and `q` when the
/// three weighted points are collinear: `[px, py, pw, qx, qy, qw, tx, ty, tw]`.
///
/// The points are projected on the x axis, or on the y axis when `p` and
/// `q` share an x; the result is the product of the projection order and a
/// 2x2 determinant. Four sign tests, two per branch.
#[derive(Clone, Copy, Debug)]
pub struct PowerTestDegenerate;

impl FilteredPredicate for PowerTestDegenerate {
    const NAME: &'static str = "power_test_degenerate_2";
    const ARITY: usize = 9;
    const SLOTS: usize = 4;
    type Output = Sign;

    fn eval<T, S>(a: &[T], s: &mut S) -> Result<Sign, Uncertain>
    where
        T: FilterScalar,
        S: SignOracle<T>,
        for<'x> &'x T: Add<&'x T, Output = T> + Sub<&'x T, Output = T> + Mul<&'x T, Output = T>,
    {
        let (px, py, pw) = (&a[0], &a[1], &a[2]);
        let (qx, qy, qw) = (&a[3], &a[4], &a[5]);
        let (tx, ty, tw) = (&a[6], &a[7], &a[8]);
        let dpx = px - tx;
        let dpy = py - ty;
        let dqx = qx - tx;
        let dqy = qy - ty;
        let dpz = &(&(&dpx.square() + &dpy.square()) - pw) + tw;
        let dqz = &(&(&dqx.square() + &dqy.square()) - qw) + tw;

        let cmpx = s.sign(0, &(px - qx))?;
        if cmpx != Sign::Zero {
            let det = s.sign(1, &det2x2(&dpx, &dpz, &dqx, &dqz))?;
            return Ok(cmpx * det);
        }
        let cmpy = s.sign(2, &(py - qy))?;
        let det = s.sign(3, &det2x2(&dpy, &dpz, &dqy, &dqz))?;
        Ok(cmpy * det)
    }
}
