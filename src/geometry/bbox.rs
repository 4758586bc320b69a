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

use std::ops::{Add, AddAssign};

use crate::geometry::Point2;
use crate::kernel::Sign;

/// Axis-aligned box accumulator.
///
/// An unbounded contribution never stores a true infinity: it saturates the
/// affected sides at `±MAX_COORD`. The empty box is the inverted
/// `(+inf, +inf, -inf, -inf)`, the identity of `+`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bbox2 {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl Default for Bbox2 {
    fn default() -> Self {
        Self::empty()
    }
}

impl Bbox2 {
    /// Sentinel magnitude of an unbounded side.
    pub const MAX_COORD: f64 = f64::MAX;
    /// Largest magnitude a display rectangle may reach.
    pub const DISPLAY_LIMIT: f64 = f64::MAX / 4.0;

    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    pub fn empty() -> Self {
        Self::new(f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY)
    }

    /// The maximal capped box.
    pub fn unbounded() -> Self {
        Self::new(
            -Self::MAX_COORD,
            -Self::MAX_COORD,
            Self::MAX_COORD,
            Self::MAX_COORD,
        )
    }

    pub fn from_point(p: &Point2) -> Self {
        Self::new(p.x, p.y, p.x, p.y)
    }

    pub fn from_points(a: &Point2, b: &Point2) -> Self {
        Self::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    /// Box of a ray from `source` whose direction has the given component
    /// signs: each side the ray runs toward is capped at `±MAX_COORD`, a zero
    /// component keeps the source coordinate.
    pub fn ray(source: &Point2, dx: Sign, dy: Sign) -> Self {
        let (xmin, xmax) = match dx {
            Sign::Positive => (source.x, Self::MAX_COORD),
            Sign::Negative => (-Self::MAX_COORD, source.x),
            Sign::Zero => (source.x, source.x),
        };
        let (ymin, ymax) = match dy {
            Sign::Positive => (source.y, Self::MAX_COORD),
            Sign::Negative => (-Self::MAX_COORD, source.y),
            Sign::Zero => (source.y, source.y),
        };
        Self::new(xmin, ymin, xmax, ymax)
    }

    pub fn is_empty(&self) -> bool {
        self.xmin > self.xmax || self.ymin > self.ymax
    }

    pub fn is_unbounded(&self) -> bool {
        self.xmin <= -Self::MAX_COORD
            || self.ymin <= -Self::MAX_COORD
            || self.xmax >= Self::MAX_COORD
            || self.ymax >= Self::MAX_COORD
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    pub fn center(&self) -> Point2 {
        Point2::new(
            self.xmin / 2.0 + self.xmax / 2.0,
            self.ymin / 2.0 + self.ymax / 2.0,
        )
    }

    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }

    pub fn include(&mut self, p: &Point2) {
        *self += Self::from_point(p);
    }

    pub fn intersects(&self, other: &Bbox2) -> bool {
        !(self.xmax < other.xmin
            || other.xmax < self.xmin
            || self.ymax < other.ymin
            || other.ymax < self.ymin)
    }

    /// Rectangle safe to hand to a renderer: every side is clamped to
    /// `±DISPLAY_LIMIT` and an empty box collapses to the zero rectangle.
    pub fn display_rect(&self) -> Bbox2 {
        if self.is_empty() {
            return Bbox2::new(0.0, 0.0, 0.0, 0.0);
        }
        let clamp = |v: f64| v.clamp(-Self::DISPLAY_LIMIT, Self::DISPLAY_LIMIT);
        Bbox2::new(
            clamp(self.xmin),
            clamp(self.ymin),
            clamp(self.xmax),
            clamp(self.ymax),
        )
    }
}

impl Add for Bbox2 {
    type Output = Bbox2;
    fn add(mut self, rhs: Bbox2) -> Bbox2 {
        self += rhs;
        self
    }
}

impl AddAssign for Bbox2 {
    fn add_assign(&mut self, rhs: Bbox2) {
        self.xmin = self.xmin.min(rhs.xmin);
        self.ymin = self.ymin.min(rhs.ymin);
        self.xmax = self.xmax.max(rhs.xmax);
        self.ymax = self.ymax.max(rhs.ymax);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_the_identity() {
        let b = Bbox2::new(0.0, 1.0, 2.0, 3.0);
        assert_eq!(Bbox2::empty() + b, b);
        assert!(Bbox2::empty().is_empty());
    }

    #[test]
    fn ray_box_is_capped_on_its_side_only() {
        let b = Bbox2::ray(&Point2::new(1.0, 2.0), Sign::Positive, Sign::Negative);
        assert_eq!(b, Bbox2::new(1.0, -Bbox2::MAX_COORD, Bbox2::MAX_COORD, 2.0));
        assert!(b.is_unbounded());
    }

    #[test]
    fn display_rect_clamps_and_collapses() {
        let r = Bbox2::unbounded().display_rect();
        assert_eq!(r.xmax, Bbox2::DISPLAY_LIMIT);
        assert_eq!(r.ymin, -Bbox2::DISPLAY_LIMIT);
        assert!(r.width().is_finite());
        assert_eq!(Bbox2::empty().display_rect(), Bbox2::new(0.0, 0.0, 0.0, 0.0));
    }
}
