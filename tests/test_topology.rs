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

use planar_arr::arrangement::{Arrangement, FICTITIOUS_FACE};
use planar_arr::geometry::Point2;
use planar_arr::query::LocateResult;
use planar_arr::traits::{LinearCurve, LinearTraits, Segment2, SegmentTraits};

fn square(x0: f64, y0: f64, side: f64) -> Vec<Segment2> {
    let p = [(x0, y0), (x0 + side, y0), (x0 + side, y0 + side), (x0, y0 + side)];
    (0..4)
        .map(|i| {
            let (a, b) = (p[i], p[(i + 1) % 4]);
            Segment2::from_coords(a.0, a.1, b.0, b.1)
        })
        .collect()
}

fn nested_squares() -> Arrangement<SegmentTraits> {
    let mut curves = square(0.0, 0.0, 10.0);
    curves.extend(square(3.0, 3.0, 3.0));
    let points = vec![Point2::new(4.0, 4.0), Point2::new(8.0, 8.0)];
    Arrangement::from_curves(SegmentTraits::new(), curves, points).unwrap()
}

fn face_at<Tr: planar_arr::traits::ArrTraits<Point = Point2>>(arr: &Arrangement<Tr>, x: f64, y: f64) -> usize {
    match arr.locate(&Point2::new(x, y)) {
        LocateResult::Face(f) => f,
        other => panic!("({x}, {y}) is not inside a face: {other:?}"),
    }
}

#[test]
fn nested_squares_face_structure() {
    let arr = nested_squares();
    arr.validate();
    // fictitious, unbounded, ring between the squares, inner square
    assert_eq!(arr.num_faces(), 4);
    assert_eq!(arr.num_edges(), 8);

    let ring = face_at(&arr, 1.0, 1.0);
    let inner = face_at(&arr, 5.0, 5.0);
    let outside = face_at(&arr, 20.0, 20.0);
    assert_ne!(ring, inner);
    assert!(arr.face(outside).is_unbounded());
    assert!(!arr.face(ring).is_unbounded());

    assert_eq!(arr.holes(ring).count(), 1);
    assert_eq!(arr.holes(inner).count(), 0);
    assert_eq!(arr.holes(outside).count(), 1);
    assert_eq!(arr.holes(FICTITIOUS_FACE).count(), 1);
    assert!(arr.outer_ccb(FICTITIOUS_FACE).is_none());

    assert_eq!(arr.face(inner).isolated_vertices, vec![arr.point_vertex(0)]);
    assert_eq!(arr.face(ring).isolated_vertices, vec![arr.point_vertex(1)]);
}

#[test]
fn hole_boundary_borders_the_enclosing_face() {
    let arr = nested_squares();
    let ring = face_at(&arr, 1.0, 1.0);
    let inner = face_at(&arr, 5.0, 5.0);
    let hole: Vec<usize> = arr.holes(ring).next().unwrap().collect();
    assert_eq!(hole.len(), 4);
    for h in hole {
        assert_eq!(arr.incident_face(h), ring);
        assert_eq!(arr.incident_face(arr.twin(h)), inner);
    }
}

#[test]
fn every_ccb_closes_on_its_start() {
    let arr = nested_squares();
    for h in 0..arr.num_half_edges() {
        let cycle: Vec<usize> = arr.ccb(h).collect();
        assert_eq!(cycle[0], h);
        let face = arr.incident_face(h);
        assert!(cycle.iter().all(|&e| arr.incident_face(e) == face));
        assert_eq!(arr.next(*cycle.last().unwrap()), h);
        for w in cycle.windows(2) {
            assert_eq!(arr.target(w[0]), arr.source(w[1]));
        }
    }
}

#[test]
fn antenna_test_is_symmetric() {
    let mut curves = square(0.0, 0.0, 4.0);
    curves.push(Segment2::from_coords(0.0, 4.0, 2.0, 2.0));
    curves.push(Segment2::from_coords(10.0, 10.0, 12.0, 11.0));
    let arr = Arrangement::from_curves(SegmentTraits::new(), curves, Vec::new()).unwrap();
    arr.validate();
    let mut antennas = 0;
    for h in 0..arr.num_half_edges() {
        assert_eq!(arr.is_antenna(h), arr.is_antenna(arr.twin(h)));
        if arr.is_antenna(h) {
            antennas += 1;
        }
    }
    // the spike into the square and the floating segment, both sides each
    assert_eq!(antennas, 4);
}

#[test]
fn enclosing_faces_are_visited_first() {
    let mut arr = nested_squares();
    let ring = face_at(&arr, 1.0, 1.0);
    let inner = face_at(&arr, 5.0, 5.0);
    let mut order = Vec::new();
    arr.visit_connected_faces(FICTITIOUS_FACE, |_, f| order.push(f));
    assert_eq!(order.len(), arr.num_faces());
    let pos = |f: usize| order.iter().position(|&g| g == f).unwrap();
    assert!(pos(ring) < pos(inner));
    assert_eq!(order[0], FICTITIOUS_FACE);
}

#[test]
fn insert_then_remove_restores_the_faces() {
    let mut arr = Arrangement::from_curves(SegmentTraits::new(), square(0.0, 0.0, 2.0), Vec::new()).unwrap();
    assert_eq!(arr.num_faces(), 3);

    arr.insert_curves(vec![Segment2::from_coords(0.0, 0.0, 2.0, 2.0)]).unwrap();
    arr.validate();
    assert_eq!(arr.num_faces(), 4);
    assert_eq!(arr.num_vertices(), 4 + 4);
    assert_ne!(face_at(&arr, 1.5, 0.5), face_at(&arr, 0.5, 1.5));

    let removed = arr.remove_curve(4).unwrap();
    assert_eq!(removed, Segment2::from_coords(0.0, 0.0, 2.0, 2.0));
    arr.validate();
    assert_eq!(arr.num_faces(), 3);
    assert_eq!(face_at(&arr, 1.5, 0.5), face_at(&arr, 0.5, 1.5));
}

#[test]
fn parallel_lines_split_the_plane() {
    let lines = vec![
        LinearCurve::line(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)),
        LinearCurve::line(Point2::new(0.0, 1.0), Point2::new(1.0, 1.0)),
    ];
    let arr = Arrangement::from_curves(LinearTraits::new(), lines, Vec::new()).unwrap();
    arr.validate();
    // four corners and one vertex at infinity per line end
    assert_eq!(arr.num_vertices(), 8);
    assert_eq!(arr.num_faces(), 4);
    let (below, between, above) = (face_at(&arr, 0.0, -1.0), face_at(&arr, 0.0, 0.5), face_at(&arr, 0.0, 2.0));
    assert!(below != between && between != above && below != above);
    for f in [below, between, above] {
        assert!(arr.face(f).is_unbounded());
        assert!(arr.face(f).outer_ccb.is_some());
    }
}

#[test]
fn rays_from_one_point_make_a_wedge() {
    let o = Point2::new(0.0, 0.0);
    let rays = vec![
        LinearCurve::ray(o, Point2::new(1.0, 1.0)),
        LinearCurve::ray(o, Point2::new(1.0, -1.0)),
    ];
    let arr = Arrangement::from_curves(LinearTraits::new(), rays, Vec::new()).unwrap();
    arr.validate();
    assert_eq!(arr.num_faces(), 3);
    let wedge = face_at(&arr, 5.0, 0.0);
    let rest = face_at(&arr, -5.0, 0.0);
    assert_ne!(wedge, rest);
    assert_eq!(face_at(&arr, 1.0, 3.0), rest);
    assert_eq!(face_at(&arr, 1.0, -3.0), rest);
}
