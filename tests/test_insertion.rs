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

use planar_arr::arrangement::Arrangement;
use planar_arr::error::ArrError;
use planar_arr::geometry::Point2;
use planar_arr::query::LocateResult;
use planar_arr::traits::{
    CurveEnd, ExCurve, ExPoint, InsertionTraits, LinearCurve, LinearTraits, ParameterSpace, Polyline, PolylineTraits,
    Segment2, SegmentTraits,
};

fn pl(points: &[(f64, f64)]) -> Polyline {
    Polyline::new(points.iter().map(|&(x, y)| Point2::new(x, y)))
}

fn attach<'a, Tr: planar_arr::traits::ArrTraits>(
    arr: &Arrangement<Tr>,
    ins: &InsertionTraits<'a, Tr>,
    i: usize,
) -> ExCurve<Tr::XCurve> {
    let mut c = ExCurve::new(arr.curves()[i].clone());
    ins.set_halfedge(&mut c, arr.twin(arr.curve_half_edge(i)));
    c
}

#[test]
fn inserted_curves_reuse_existing_vertices() {
    let mut arr = Arrangement::from_curves(
        SegmentTraits::new(),
        vec![Segment2::from_coords(0.0, 0.0, 2.0, 0.0)],
        Vec::new(),
    )
    .unwrap();
    assert_eq!(arr.finite_vertices().count(), 2);

    arr.insert_curves(vec![
        Segment2::from_coords(2.0, 0.0, 2.0, 2.0),
        Segment2::from_coords(2.0, 2.0, 0.0, 0.0),
    ])
    .unwrap();
    arr.validate();
    assert_eq!(arr.finite_vertices().count(), 3);
    assert_eq!(arr.num_edges(), 3);
    assert_eq!(arr.num_faces(), 3);
    assert!(matches!(arr.locate(&Point2::new(1.5, 0.5)), LocateResult::Face(f) if !arr.face(f).is_unbounded()));
}

#[test]
fn rejected_insertion_leaves_the_arrangement_intact() {
    let mut arr = Arrangement::from_curves(
        SegmentTraits::new(),
        vec![Segment2::from_coords(0.0, 0.0, 2.0, 0.0)],
        Vec::new(),
    )
    .unwrap();
    let before = arr.num_half_edges();
    let err = arr
        .insert_curves(vec![
            Segment2::from_coords(0.0, 1.0, 1.0, 1.0),
            Segment2::from_coords(f64::NAN, 0.0, 1.0, 1.0),
        ])
        .unwrap_err();
    assert!(matches!(err, ArrError::NonFiniteCoordinate { .. }));
    assert_eq!(arr.num_half_edges(), before);
    assert_eq!(arr.num_edges(), 1);
}

#[test]
fn wrapped_ends_share_vertices_after_rebuild() {
    let mut arr = Arrangement::from_curves(
        SegmentTraits::new(),
        vec![Segment2::from_coords(0.0, 0.0, 2.0, 0.0)],
        Vec::new(),
    )
    .unwrap();
    arr.insert_curves(vec![Segment2::from_coords(0.0, 0.0, 2.0, 2.0)]).unwrap();

    let ins = InsertionTraits::new(&arr);
    let flat = attach(&arr, &ins, 0);
    let diagonal = attach(&arr, &ins, 1);
    let a = ins.min_vertex(&flat);
    let b = ins.min_vertex(&diagonal);
    assert!(a.vertex().is_some());
    assert_eq!(a.vertex(), b.vertex());
    assert!(ins.equal_points(&a, &b));
    assert_eq!(ins.compare_y_at_x_right(&flat, &diagonal, &a), Ordering::Less);

    // no half-edge, no shortcut: the comparison falls back to the geometry
    let loose = ExCurve::new(Segment2::from_coords(0.0, 0.0, 1.0, 5.0));
    let c = ins.min_vertex(&loose);
    assert_eq!(c.vertex(), None);
    assert_eq!(ins.compare_xy(&a, &c), Ordering::Equal);
    assert_eq!(ins.compare_xy(&ins.max_vertex(&flat), &c), Ordering::Greater);
}

#[test]
fn polyline_faces_keep_every_subcurve_point() {
    let upper = pl(&[(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 2.0), (4.0, 0.0)]);
    // given right to left; the traits reorder it
    let lower = pl(&[(4.0, 0.0), (2.0, -1.0), (0.0, 0.0)]);
    let arr = Arrangement::from_curves(PolylineTraits::new(), vec![upper, lower], Vec::new()).unwrap();
    arr.validate();
    assert_eq!(arr.num_faces(), 3);

    let inside = match arr.locate(&Point2::new(2.0, 0.0)) {
        LocateResult::Face(f) => f,
        other => panic!("expected a face, got {other:?}"),
    };
    let pts = arr.traverse_outer_boundary(inside);
    assert_eq!(pts.len(), 6);
    for (x, y) in [(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 2.0), (4.0, 0.0), (2.0, -1.0)] {
        assert!(pts.contains(&Point2::new(x, y)), "missing ({x}, {y})");
    }

    // the notch between the two peaks is outside
    let notch = arr.locate(&Point2::new(2.0, 1.5));
    assert!(matches!(notch, LocateResult::Face(f) if arr.face(f).is_unbounded()));
}

#[test]
fn non_monotone_polyline_is_rejected() {
    let bent = pl(&[(0.0, 0.0), (2.0, 1.0), (1.0, 2.0)]);
    let err = Arrangement::from_curves(PolylineTraits::new(), vec![bent], Vec::new()).unwrap_err();
    assert_eq!(err, ArrError::NotXMonotone(2));
}

#[test]
fn ray_ends_dispatch_to_the_boundary() {
    let arr = Arrangement::from_curves(
        LinearTraits::new(),
        vec![LinearCurve::ray(Point2::new(1.0, 1.0), Point2::new(1.0, 5.0))],
        Vec::new(),
    )
    .unwrap();
    let ins = InsertionTraits::new(&arr);
    let ray = attach(&arr, &ins, 0);
    assert!(ins.is_vertical(&ray));
    assert!(ins.is_bounded(&ray, CurveEnd::Min));
    assert!(!ins.is_bounded(&ray, CurveEnd::Max));
    assert_eq!(ins.parameter_space_in_y(&ray, CurveEnd::Max), ParameterSpace::Top);
    assert_eq!(ins.parameter_space_in_x(&ray, CurveEnd::Max), ParameterSpace::Interior);

    let p = ExPoint::plain(Point2::new(0.0, 100.0));
    assert_eq!(ins.compare_x_point_near_boundary(&p, &ray, CurveEnd::Max), Ordering::Less);
    let src = ins.min_vertex(&ray);
    assert_eq!(arr.vertex_point2(src.vertex().unwrap()), Some(Point2::new(1.0, 1.0)));
}
