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

use crate::arrangement::Arrangement;
use crate::traits::{ArrTraits, CurveEnd, ParameterSpace};

/// Feature of an arrangement found by a query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocateResult {
    /// Strictly inside a face.
    Face(usize),
    /// On the interior of an edge. For point location this is the
    /// right-to-left half-edge; a ray shot upward reports the half-edge
    /// facing the ray from below, one shot downward the one facing it from
    /// above.
    Halfedge(usize),
    Vertex(usize),
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Shoot {
    Up,
    Down,
}

impl<Tr: ArrTraits> Arrangement<Tr> {
    /// Naive point location: tests every vertex and edge, then finds the
    /// containing face.
    pub fn locate(&self, p: &Tr::Point) -> LocateResult {
        let tr = &self.traits;
        for (v, q) in self.finite_vertices() {
            if tr.equal_points(p, q) {
                return LocateResult::Vertex(v);
            }
        }
        for (i, c) in self.curves.iter().enumerate() {
            if self.in_x_range(p, i) && tr.compare_y_at_x(p, c) == Ordering::Equal {
                return LocateResult::Halfedge(self.twin(self.curve_half_edge[i]));
            }
        }
        LocateResult::Face(self.face_left_above(p))
    }

    /// First feature strictly above `p` on the vertical line through it.
    pub fn ray_shoot_up(&self, p: &Tr::Point) -> LocateResult {
        self.shoot(p, Shoot::Up)
    }

    /// First feature strictly below `p` on the vertical line through it.
    pub fn ray_shoot_down(&self, p: &Tr::Point) -> LocateResult {
        self.shoot(p, Shoot::Down)
    }

    // `p.x` inside the closed x-range of curve `i`; for a vertical curve,
    // on its line.
    fn in_x_range(&self, p: &Tr::Point, i: usize) -> bool {
        let c = &self.curves[i];
        let tr = &self.traits;
        tr.compare_x_with_end(p, c, CurveEnd::Min) != Ordering::Less
            && tr.compare_x_with_end(p, c, CurveEnd::Max) != Ordering::Greater
    }

    fn shoot(&self, p: &Tr::Point, dir: Shoot) -> LocateResult {
        let tr = &self.traits;
        // positions of features hit by the ray relative to `p`
        let ahead = match dir {
            Shoot::Up => Ordering::Less,
            Shoot::Down => Ordering::Greater,
        };

        let mut vertex: Option<usize> = None;
        for (v, q) in self.finite_vertices() {
            if tr.compare_x(p, q) != Ordering::Equal || tr.compare_xy(p, q) != ahead {
                continue;
            }
            let nearer = match vertex {
                None => true,
                Some(w) => self.vertices[w]
                    .point
                    .as_ref()
                    .is_some_and(|r| tr.compare_xy(q, r) == ahead),
            };
            if nearer {
                vertex = Some(v);
            }
        }

        let mut curve: Option<usize> = None;
        for (i, c) in self.curves.iter().enumerate() {
            if tr.is_vertical(c)
                || tr.compare_x_with_end(p, c, CurveEnd::Min) != Ordering::Greater
                || tr.compare_x_with_end(p, c, CurveEnd::Max) != Ordering::Less
                || tr.compare_y_at_x(p, c) != ahead
            {
                continue;
            }
            curve = match curve {
                Some(j) if tr.compare_y_position(c, &self.curves[j], p) != ahead => Some(j),
                _ => Some(i),
            };
        }

        match (vertex, curve) {
            (Some(v), Some(i)) => {
                let q = self.vertices[v].point.as_ref();
                match q.map(|q| tr.compare_y_at_x(q, &self.curves[i])) {
                    Some(o) if o == ahead => LocateResult::Vertex(v),
                    _ => self.hit_curve(i, dir),
                }
            }
            (Some(v), None) => LocateResult::Vertex(v),
            (None, Some(i)) => self.hit_curve(i, dir),
            (None, None) => {
                let side = match dir {
                    Shoot::Up => ParameterSpace::Top,
                    Shoot::Down => ParameterSpace::Bottom,
                };
                LocateResult::Face(self.frame_face(p, side))
            }
        }
    }

    fn hit_curve(&self, i: usize, dir: Shoot) -> LocateResult {
        let l2r = self.curve_half_edge[i];
        LocateResult::Halfedge(match dir {
            // the face below a curve lies left of its right-to-left half-edge
            Shoot::Up => self.twin(l2r),
            Shoot::Down => l2r,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point2;
    use crate::traits::{Segment2, SegmentTraits};

    fn square_with_point() -> Arrangement<SegmentTraits> {
        let p = [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
        let curves = (0..4)
            .map(|i| {
                let (a, b) = (p[i], p[(i + 1) % 4]);
                Segment2::from_coords(a.0, a.1, b.0, b.1)
            })
            .collect();
        let points = vec![Point2::new(2.0, 2.0)];
        Arrangement::from_curves(SegmentTraits::new(), curves, points).unwrap()
    }

    #[test]
    fn locate_distinguishes_features() {
        let arr = square_with_point();
        let inside = arr.vertex(arr.point_vertex(0)).isolated_in.unwrap();

        assert_eq!(arr.locate(&Point2::new(2.0, 2.0)), LocateResult::Vertex(arr.point_vertex(0)));
        assert_eq!(arr.locate(&Point2::new(1.0, 1.0)), LocateResult::Face(inside));
        match arr.locate(&Point2::new(2.0, 0.0)) {
            LocateResult::Halfedge(h) => assert_eq!(arr.curve_of(h), Some(&arr.curves()[0])),
            other => panic!("expected the bottom edge, got {other:?}"),
        }
        match arr.locate(&Point2::new(9.0, 1.0)) {
            LocateResult::Face(f) => assert!(arr.face(f).is_unbounded()),
            other => panic!("expected the outer face, got {other:?}"),
        }
        assert!(matches!(arr.locate(&Point2::new(0.0, 4.0)), LocateResult::Vertex(_)));
    }

    #[test]
    fn rays_hit_nearest_feature() {
        let arr = square_with_point();
        // straight up from below the isolated point
        assert_eq!(
            arr.ray_shoot_up(&Point2::new(2.0, 1.0)),
            LocateResult::Vertex(arr.point_vertex(0))
        );
        match arr.ray_shoot_up(&Point2::new(1.0, 1.0)) {
            LocateResult::Halfedge(h) => {
                assert_eq!(arr.curve_of(h), Some(&arr.curves()[2]));
                // the half-edge faces the inside of the square
                assert!(!arr.face(arr.incident_face(h)).is_unbounded());
            }
            other => panic!("expected the top edge, got {other:?}"),
        }
        match arr.ray_shoot_down(&Point2::new(1.0, 1.0)) {
            LocateResult::Halfedge(h) => {
                assert_eq!(arr.curve_of(h), Some(&arr.curves()[0]));
                assert!(!arr.face(arr.incident_face(h)).is_unbounded());
            }
            other => panic!("expected the bottom edge, got {other:?}"),
        }
        match arr.ray_shoot_up(&Point2::new(1.0, 5.0)) {
            LocateResult::Face(f) => assert!(arr.face(f).is_unbounded()),
            other => panic!("expected the outer face, got {other:?}"),
        }
        // along the left side, the corner vertex comes first
        assert!(matches!(arr.ray_shoot_up(&Point2::new(0.0, -1.0)), LocateResult::Vertex(_)));
    }
}
