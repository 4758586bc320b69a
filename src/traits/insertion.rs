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

use crate::arrangement::{Arrangement, HalfEdgeDirection};
use crate::traits::{ArrTraits, BoundaryCategory, CurveEnd, ParameterSpace};

/// A curve that may already be present in an arrangement.
#[derive(Clone, Debug)]
pub struct ExCurve<C> {
    base: C,
    /// Right-to-left half-edge carrying the curve.
    halfedge: Option<usize>,
    overlap: bool,
}

impl<C> ExCurve<C> {
    pub fn new(base: C) -> Self {
        Self {
            base,
            halfedge: None,
            overlap: false,
        }
    }

    pub fn base(&self) -> &C {
        &self.base
    }

    /// Replaces the geometry; the old half-edge no longer describes it.
    pub fn set_base(&mut self, base: C) {
        self.base = base;
        self.halfedge = None;
    }

    pub fn halfedge(&self) -> Option<usize> {
        self.halfedge
    }

    pub fn is_overlapping(&self) -> bool {
        self.overlap
    }

    /// Marks the curve as the common part of two input curves.
    pub fn set_overlapping(&mut self) {
        self.overlap = true;
    }

    pub fn into_base(self) -> C {
        self.base
    }
}

/// A point that may coincide with an arrangement vertex.
#[derive(Clone, Debug)]
pub struct ExPoint<P> {
    base: P,
    vertex: Option<usize>,
}

impl<P> ExPoint<P> {
    pub fn plain(base: P) -> Self {
        Self { base, vertex: None }
    }

    pub fn with_vertex(base: P, vertex: usize) -> Self {
        Self {
            base,
            vertex: Some(vertex),
        }
    }

    pub fn base(&self) -> &P {
        &self.base
    }

    pub fn vertex(&self) -> Option<usize> {
        self.vertex
    }

    pub fn into_base(self) -> P {
        self.base
    }
}

/// Curve operations over [`ExCurve`]s and [`ExPoint`]s that reuse the
/// topology of an existing arrangement.
pub struct InsertionTraits<'a, Tr: ArrTraits> {
    arr: &'a Arrangement<Tr>,
}

impl<'a, Tr: ArrTraits> InsertionTraits<'a, Tr> {
    pub fn new(arr: &'a Arrangement<Tr>) -> Self {
        Self { arr }
    }

    fn base(&self) -> &'a Tr {
        self.arr.traits()
    }

    /// Attaches `h`, which must run right to left, to `c`.
    pub fn set_halfedge(&self, c: &mut ExCurve<Tr::XCurve>, h: usize) {
        assert_eq!(
            self.arr.half_edge(h).direction,
            HalfEdgeDirection::RightToLeft,
            "half-edge {h} attached to a curve runs left to right"
        );
        c.halfedge = Some(h);
    }

    // Keeps `v` as the vertex of `p` unless the curve is an overlap whose
    // end is at infinity or drifted away from the stored point.
    fn annotate(&self, c: &ExCurve<Tr::XCurve>, p: Tr::Point, v: usize) -> ExPoint<Tr::Point> {
        if c.overlap {
            match &self.arr.vertex(v).point {
                Some(stored) if self.base().equal_points(stored, &p) => {}
                _ => return ExPoint::plain(p),
            }
        }
        ExPoint::with_vertex(p, v)
    }

    pub fn min_vertex(&self, c: &ExCurve<Tr::XCurve>) -> ExPoint<Tr::Point> {
        let p = self.base().min_vertex(&c.base);
        match c.halfedge {
            // right to left: the target is the left end
            Some(h) => self.annotate(c, p, self.arr.target(h)),
            None => ExPoint::plain(p),
        }
    }

    pub fn max_vertex(&self, c: &ExCurve<Tr::XCurve>) -> ExPoint<Tr::Point> {
        let p = self.base().max_vertex(&c.base);
        match c.halfedge {
            Some(h) => self.annotate(c, p, self.arr.source(h)),
            None => ExPoint::plain(p),
        }
    }

    pub fn compare_xy(&self, p: &ExPoint<Tr::Point>, q: &ExPoint<Tr::Point>) -> Ordering {
        if p.vertex.is_some() && p.vertex == q.vertex {
            return Ordering::Equal;
        }
        self.base().compare_xy(&p.base, &q.base)
    }

    pub fn compare_x(&self, p: &ExPoint<Tr::Point>, q: &ExPoint<Tr::Point>) -> Ordering {
        self.base().compare_x(&p.base, &q.base)
    }

    pub fn equal_points(&self, p: &ExPoint<Tr::Point>, q: &ExPoint<Tr::Point>) -> bool {
        self.compare_xy(p, q) == Ordering::Equal
    }

    pub fn equal_curves(&self, c1: &ExCurve<Tr::XCurve>, c2: &ExCurve<Tr::XCurve>) -> bool {
        self.base().equal_curves(&c1.base, &c2.base)
    }

    pub fn is_vertical(&self, c: &ExCurve<Tr::XCurve>) -> bool {
        self.base().is_vertical(&c.base)
    }

    pub fn compare_y_at_x(&self, p: &ExPoint<Tr::Point>, c: &ExCurve<Tr::XCurve>) -> Ordering {
        self.base().compare_y_at_x(&p.base, &c.base)
    }

    pub fn compare_y_at_x_right(
        &self,
        c1: &ExCurve<Tr::XCurve>,
        c2: &ExCurve<Tr::XCurve>,
        p: &ExPoint<Tr::Point>,
    ) -> Ordering {
        self.base().compare_y_at_x_right(&c1.base, &c2.base, &p.base)
    }

    pub fn compare_y_at_x_left(
        &self,
        c1: &ExCurve<Tr::XCurve>,
        c2: &ExCurve<Tr::XCurve>,
        p: &ExPoint<Tr::Point>,
    ) -> Ordering {
        self.base().compare_y_at_x_left(&c1.base, &c2.base, &p.base)
    }

    pub fn parameter_space_in_x(&self, c: &ExCurve<Tr::XCurve>, end: CurveEnd) -> ParameterSpace {
        match Tr::BOUNDARY {
            BoundaryCategory::NoBoundary => ParameterSpace::Interior,
            _ => self.base().parameter_space_in_x(&c.base, end),
        }
    }

    pub fn parameter_space_in_y(&self, c: &ExCurve<Tr::XCurve>, end: CurveEnd) -> ParameterSpace {
        match Tr::BOUNDARY {
            BoundaryCategory::NoBoundary => ParameterSpace::Interior,
            _ => self.base().parameter_space_in_y(&c.base, end),
        }
    }

    pub fn compare_x_point_near_boundary(
        &self,
        p: &ExPoint<Tr::Point>,
        c: &ExCurve<Tr::XCurve>,
        end: CurveEnd,
    ) -> Ordering {
        assert!(
            Tr::BOUNDARY != BoundaryCategory::NoBoundary,
            "compare_x_near_boundary on {:?} curves, which never reach the boundary",
            Tr::FAMILY
        );
        self.base().compare_x_point_near_boundary(&p.base, &c.base, end)
    }

    pub fn compare_x_near_boundary(
        &self,
        c1: &ExCurve<Tr::XCurve>,
        end1: CurveEnd,
        c2: &ExCurve<Tr::XCurve>,
        end2: CurveEnd,
    ) -> Ordering {
        assert!(
            Tr::BOUNDARY != BoundaryCategory::NoBoundary,
            "compare_x_near_boundary on {:?} curves, which never reach the boundary",
            Tr::FAMILY
        );
        self.base().compare_x_near_boundary(&c1.base, end1, &c2.base, end2)
    }

    pub fn compare_y_near_boundary(
        &self,
        c1: &ExCurve<Tr::XCurve>,
        c2: &ExCurve<Tr::XCurve>,
        end: CurveEnd,
    ) -> Ordering {
        assert!(
            Tr::BOUNDARY != BoundaryCategory::NoBoundary,
            "compare_y_near_boundary on {:?} curves, which never reach the boundary",
            Tr::FAMILY
        );
        self.base().compare_y_near_boundary(&c1.base, &c2.base, end)
    }

    pub fn compare_y_on_identification(&self, p: &ExPoint<Tr::Point>, q: &ExPoint<Tr::Point>) -> Ordering {
        assert!(
            Tr::BOUNDARY == BoundaryCategory::Bounded,
            "compare_y_on_identification on {:?} curves, which have no identified sides",
            Tr::FAMILY
        );
        self.base().compare_y_on_identification(&p.base, &q.base)
    }

    pub fn is_bounded(&self, c: &ExCurve<Tr::XCurve>, end: CurveEnd) -> bool {
        match Tr::BOUNDARY {
            BoundaryCategory::Unbounded => self.base().is_bounded(&c.base, end),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point2;
    use crate::traits::{LinearCurve, LinearTraits, Segment2, SegmentTraits};

    fn square() -> Arrangement<SegmentTraits> {
        let p = [(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)];
        let curves = (0..4)
            .map(|i| {
                let (a, b) = (p[i], p[(i + 1) % 4]);
                Segment2::from_coords(a.0, a.1, b.0, b.1)
            })
            .collect();
        Arrangement::from_curves(SegmentTraits::new(), curves, Vec::new()).unwrap()
    }

    fn attached(arr: &Arrangement<SegmentTraits>, ins: &InsertionTraits<'_, SegmentTraits>, i: usize) -> ExCurve<Segment2> {
        let mut c = ExCurve::new(arr.curves()[i]);
        ins.set_halfedge(&mut c, arr.twin(arr.curve_half_edge(i)));
        c
    }

    #[test]
    fn ends_carry_their_vertices() {
        let arr = square();
        let ins = InsertionTraits::new(&arr);
        let c = attached(&arr, &ins, 0);
        let l = ins.min_vertex(&c);
        let r = ins.max_vertex(&c);
        assert_eq!(*l.base(), Point2::new(0.0, 0.0));
        assert_eq!(*r.base(), Point2::new(2.0, 0.0));
        assert_eq!(arr.vertex_point2(l.vertex().unwrap()), Some(Point2::new(0.0, 0.0)));
        assert_eq!(arr.vertex_point2(r.vertex().unwrap()), Some(Point2::new(2.0, 0.0)));
    }

    #[test]
    fn shared_vertex_compares_equal() {
        let arr = square();
        let ins = InsertionTraits::new(&arr);
        let bottom = attached(&arr, &ins, 0);
        let right = attached(&arr, &ins, 1);
        let a = ins.max_vertex(&bottom);
        let b = ins.min_vertex(&right);
        assert_eq!(a.vertex(), b.vertex());
        assert_eq!(ins.compare_xy(&a, &b), Ordering::Equal);
        // a plain point still compares numerically
        let plain = ExPoint::plain(Point2::new(2.0, 0.0));
        assert!(ins.equal_points(&a, &plain));
        assert_eq!(ins.compare_xy(&plain, &ins.min_vertex(&bottom)), Ordering::Greater);
    }

    #[test]
    fn drifted_overlap_end_drops_its_vertex() {
        let arr = square();
        let ins = InsertionTraits::new(&arr);
        let mut c = attached(&arr, &ins, 0);
        c.set_overlapping();
        assert!(ins.min_vertex(&c).vertex().is_some());

        // same half-edge, geometry nudged off the stored vertex
        c.base = Segment2::from_coords(1e-9, 0.0, 2.0, 0.0);
        assert!(ins.min_vertex(&c).vertex().is_none());
        assert!(ins.max_vertex(&c).vertex().is_some());
    }

    #[test]
    fn only_overlaps_drop_vertices_at_infinity() {
        let ray = LinearCurve::ray(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
        let arr = Arrangement::from_curves(LinearTraits::new(), vec![ray], Vec::new()).unwrap();
        let ins = InsertionTraits::new(&arr);
        let h = arr.twin(arr.curve_half_edge(0));
        let far = arr.source(h);
        assert!(arr.vertex(far).is_at_open_boundary());

        // a bounded piece riding on the ray's half-edge
        let mut c = ExCurve::new(LinearCurve::segment(Point2::new(0.0, 0.0), Point2::new(5.0, 0.0)));
        ins.set_halfedge(&mut c, h);
        assert_eq!(ins.max_vertex(&c).vertex(), Some(far));
        c.set_overlapping();
        assert_eq!(ins.max_vertex(&c).vertex(), None);
        assert_eq!(ins.min_vertex(&c).vertex(), Some(arr.target(h)));
    }

    #[test]
    fn new_base_clears_halfedge() {
        let arr = square();
        let ins = InsertionTraits::new(&arr);
        let mut c = attached(&arr, &ins, 0);
        assert!(c.halfedge().is_some());
        c.set_base(Segment2::from_coords(0.0, 0.0, 1.0, 0.0));
        assert!(c.halfedge().is_none());
    }

    #[test]
    #[should_panic(expected = "runs left to right")]
    fn left_to_right_halfedge_is_rejected() {
        let arr = square();
        let ins = InsertionTraits::new(&arr);
        let mut c = ExCurve::new(arr.curves()[0]);
        ins.set_halfedge(&mut c, arr.curve_half_edge(0));
    }

    #[test]
    fn segments_are_interior_and_bounded() {
        let arr = square();
        let ins = InsertionTraits::new(&arr);
        let c = ExCurve::new(arr.curves()[0]);
        assert_eq!(ins.parameter_space_in_x(&c, CurveEnd::Min), ParameterSpace::Interior);
        assert!(ins.is_bounded(&c, CurveEnd::Max));
    }

    #[test]
    #[should_panic(expected = "never reach the boundary")]
    fn near_boundary_comparison_fails_without_boundary() {
        let arr = square();
        let ins = InsertionTraits::new(&arr);
        let c = ExCurve::new(arr.curves()[0]);
        ins.compare_y_near_boundary(&c, &c, CurveEnd::Min);
    }

    #[test]
    fn unbounded_ends_pass_through() {
        let arr = Arrangement::new(LinearTraits::new());
        let ins = InsertionTraits::new(&arr);
        let ray = ExCurve::new(LinearCurve::ray(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)));
        assert!(ins.is_bounded(&ray, CurveEnd::Min));
        assert!(!ins.is_bounded(&ray, CurveEnd::Max));
        assert_eq!(ins.parameter_space_in_x(&ray, CurveEnd::Max), ParameterSpace::Right);
    }

    #[test]
    #[should_panic(expected = "no identified sides")]
    fn identification_needs_a_bounded_family() {
        let arr = Arrangement::new(LinearTraits::new());
        let ins = InsertionTraits::new(&arr);
        let p = ExPoint::plain(Point2::new(0.0, 0.0));
        ins.compare_y_on_identification(&p, &p);
    }
}
