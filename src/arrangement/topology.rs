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

use crate::arrangement::{Arrangement, HalfEdgeDirection};
use crate::geometry::Point2;
use crate::traits::ArrTraits;

/// Resolution hint passed to [`ArrTraits::sample`] when a face boundary is
/// turned into a polygon.
pub const BOUNDARY_SAMPLES: usize = 64;

/// Circulator over a connected component of a face boundary, following
/// `next` from a starting half-edge until it comes back.
#[derive(Clone)]
pub struct Ccb<'a, Tr: ArrTraits> {
    arr: &'a Arrangement<Tr>,
    start: usize,
    current: Option<usize>,
}

impl<'a, Tr: ArrTraits> Ccb<'a, Tr> {
    pub fn start(&self) -> usize {
        self.start
    }

    /// Rewinds to the starting half-edge.
    pub fn restart(&mut self) {
        self.current = Some(self.start);
    }
}

impl<Tr: ArrTraits> Iterator for Ccb<'_, Tr> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let h = self.current?;
        let n = self.arr.next(h);
        self.current = (n != self.start).then_some(n);
        Some(h)
    }
}

impl<Tr: ArrTraits> Arrangement<Tr> {
    pub fn ccb(&self, h: usize) -> Ccb<'_, Tr> {
        Ccb {
            arr: self,
            start: h,
            current: Some(h),
        }
    }

    pub fn outer_ccb(&self, f: usize) -> Option<Ccb<'_, Tr>> {
        self.faces[f].outer_ccb.map(|h| self.ccb(h))
    }

    pub fn holes(&self, f: usize) -> impl Iterator<Item = Ccb<'_, Tr>> {
        self.faces[f].holes.iter().map(|&h| self.ccb(h))
    }

    /// Both sides of the edge bound the same face.
    pub fn is_antenna(&self, h: usize) -> bool {
        self.incident_face(h) == self.incident_face(self.twin(h))
    }

    /// Points of the outer boundary of face `f` in boundary order, leaving
    /// out antennas and the frame. Each curve contributes its points from
    /// the source to the target of its half-edge; junction points appear
    /// once and the polygon is not explicitly closed.
    pub fn traverse_outer_boundary(&self, f: usize) -> Vec<Point2> {
        let mut pts: Vec<Point2> = Vec::new();
        let Some(ccb) = self.outer_ccb(f) else {
            return pts;
        };
        for h in ccb {
            if self.is_fictitious(h) || self.is_antenna(h) {
                continue;
            }
            let Some(curve) = self.curve_of(h) else {
                continue;
            };
            let mut piece = self.traits.sample(curve, BOUNDARY_SAMPLES);
            if self.half_edges[h].direction == HalfEdgeDirection::RightToLeft {
                piece.reverse();
            }
            let skip = match (pts.last(), piece.first()) {
                (Some(a), Some(b)) => usize::from(a == b),
                _ => 0,
            };
            pts.extend(piece.into_iter().skip(skip));
        }
        if pts.len() > 1 && pts.first() == pts.last() {
            pts.pop();
        }
        pts
    }

    /// Clears the visited flag of every face.
    pub fn reset_visited(&mut self) {
        for face in &mut self.faces {
            face.visited = false;
        }
    }

    /// Calls `visit` once on every face reachable from `start` by crossing
    /// edges of hole and outer boundaries. Visited flags are reset first.
    pub fn visit_connected_faces(&mut self, start: usize, mut visit: impl FnMut(&Self, usize)) {
        self.reset_visited();
        let mut stack = vec![start];
        while let Some(f) = stack.pop() {
            if self.faces[f].visited {
                continue;
            }
            self.faces[f].visited = true;
            visit(self, f);

            let face = &self.faces[f];
            let boundaries = face.outer_ccb.iter().chain(face.holes.iter());
            for &h in boundaries {
                for e in self.ccb(h) {
                    let g = self.incident_face(self.twin(e));
                    if !self.faces[g].visited {
                        stack.push(g);
                    }
                }
            }
        }
    }

    /// Aborts on a malformed half-edge structure.
    pub fn validate(&self) {
        let nh = self.half_edges.len();
        for (h, he) in self.half_edges.iter().enumerate() {
            assert!(
                he.twin < nh && he.next < nh && he.prev < nh,
                "half-edge {h} is dangling"
            );
            assert_eq!(self.half_edges[he.twin].twin, h, "twin of half-edge {h} does not point back");
            assert_ne!(he.twin, h, "half-edge {h} is its own twin");
            assert_eq!(self.half_edges[he.next].prev, h, "prev of next({h}) is not {h}");
            assert_eq!(self.half_edges[he.prev].next, h, "next of prev({h}) is not {h}");
            assert_eq!(
                self.source(he.next),
                he.vertex,
                "half-edge {h} and its successor do not meet"
            );
            assert!(he.face < self.faces.len(), "half-edge {h} has no face");
            assert_eq!(
                self.half_edges[he.next].face, he.face,
                "half-edge {h} and its successor bound different faces"
            );
            assert_eq!(
                self.half_edges[he.twin].direction,
                he.direction.opposite(),
                "half-edge {h} and its twin share a direction"
            );
        }
        for (v, vx) in self.vertices.iter().enumerate() {
            if let Some(h) = vx.half_edge {
                assert_eq!(self.target(h), v, "incident half-edge of vertex {v} ends elsewhere");
            }
        }
        for (f, face) in self.faces.iter().enumerate() {
            for &h in face.outer_ccb.iter().chain(face.holes.iter()) {
                assert_eq!(self.incident_face(h), f, "boundary of face {f} lists a foreign half-edge");
            }
            for &v in &face.isolated_vertices {
                assert!(self.vertices[v].is_isolated(), "isolated vertex {v} of face {f} has edges");
            }
        }
        for (c, &h) in self.curve_half_edge.iter().enumerate() {
            assert_eq!(
                self.half_edges[h].direction,
                HalfEdgeDirection::LeftToRight,
                "curve {c} is attached to a right-to-left half-edge"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrangement::FICTITIOUS_FACE;
    use crate::traits::{Segment2, SegmentTraits};

    fn seg(a: (f64, f64), b: (f64, f64)) -> Segment2 {
        Segment2::from_coords(a.0, a.1, b.0, b.1)
    }

    fn triangle_with_tail() -> Arrangement<SegmentTraits> {
        let curves = vec![
            seg((0.0, 0.0), (4.0, 0.0)),
            seg((4.0, 0.0), (2.0, 3.0)),
            seg((2.0, 3.0), (0.0, 0.0)),
            // antenna into the triangle
            seg((2.0, 3.0), (2.0, 1.0)),
        ];
        Arrangement::from_curves(SegmentTraits::new(), curves, Vec::new()).unwrap()
    }

    fn bounded_face(arr: &Arrangement<SegmentTraits>) -> usize {
        arr.face_indices().find(|&f| !arr.face(f).is_unbounded()).unwrap()
    }

    #[test]
    fn ccb_circulator_restarts() {
        let arr = triangle_with_tail();
        let f = bounded_face(&arr);
        let mut ccb = arr.outer_ccb(f).unwrap();
        let first: Vec<usize> = ccb.by_ref().collect();
        // three sides plus both sides of the antenna
        assert_eq!(first.len(), 5);
        ccb.restart();
        assert_eq!(ccb.collect::<Vec<_>>(), first);
    }

    #[test]
    fn outer_boundary_skips_antenna() {
        let arr = triangle_with_tail();
        let f = bounded_face(&arr);
        let pts = arr.traverse_outer_boundary(f);
        assert_eq!(pts.len(), 3);
        for p in [Point2::new(0.0, 0.0), Point2::new(4.0, 0.0), Point2::new(2.0, 3.0)] {
            assert!(pts.contains(&p));
        }
        let antennas = arr.outer_ccb(f).unwrap().filter(|&h| arr.is_antenna(h)).count();
        assert_eq!(antennas, 2);
    }

    #[test]
    fn every_face_visited_once() {
        let mut arr = triangle_with_tail();
        arr.validate();
        let mut seen = Vec::new();
        arr.visit_connected_faces(FICTITIOUS_FACE, |_, f| seen.push(f));
        seen.sort_unstable();
        assert_eq!(seen, (0..arr.num_faces()).collect::<Vec<_>>());

        // a second pass starts from clean flags
        let mut again = 0;
        arr.visit_connected_faces(FICTITIOUS_FACE, |_, _| again += 1);
        assert_eq!(again, arr.num_faces());
    }
}
