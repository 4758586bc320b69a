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
use crate::geometry::{Bbox2, Point2};
use crate::traits::{ArrTraits, LineEquation, ParameterSpace};

impl<Tr: ArrTraits> Arrangement<Tr> {
    /// A polygon standing in for an unbounded face of a linear arrangement,
    /// clipped against the viewport `rect`. Boundary edges that run off to
    /// infinity are cut at one viewport extent beyond the rectangle, and
    /// frame corners passed by the boundary become the corners of that
    /// enlarged rectangle.
    ///
    /// Panics if the face is bounded by curves without a supporting line.
    pub fn unbounded_face_boundary(&self, f: usize, rect: &Bbox2) -> Vec<Point2> {
        let edges: Vec<usize> = self
            .outer_ccb(f)
            .map(|ccb| ccb.filter(|&h| !self.is_fictitious(h) && !self.is_antenna(h)).collect())
            .unwrap_or_default();

        match edges.as_slice() {
            [] => vec![
                Point2::new(rect.xmin, rect.ymin),
                Point2::new(rect.xmax, rect.ymin),
                Point2::new(rect.xmax, rect.ymax),
                Point2::new(rect.xmin, rect.ymax),
            ],
            [h] => self.half_plane(*h, rect),
            _ => {
                let mut pts = Vec::with_capacity(edges.len() * 2 + 4);
                for h in self.ccb(edges[0]) {
                    if !self.is_fictitious(h) {
                        if !self.is_antenna(h) {
                            self.project_end(h, self.source(h), rect, &mut pts);
                            self.project_end(h, self.target(h), rect, &mut pts);
                        }
                    } else if let Some(corner) = self.far_corner(self.target(h), rect) {
                        pts.push(corner);
                    }
                }
                pts.dedup();
                if pts.len() > 1 && pts.first() == pts.last() {
                    pts.pop();
                }
                pts
            }
        }
    }

    fn line_of(&self, h: usize) -> LineEquation {
        let curve = self.curve_of(h);
        match curve.and_then(|c| self.traits.supporting_line(c)) {
            Some(line) => line,
            None => panic!("{:?} curves have no supporting line", Tr::FAMILY),
        }
    }

    // The viewport part on the left of the only boundary edge.
    fn half_plane(&self, h: usize, rect: &Bbox2) -> Vec<Point2> {
        let mut line = self.line_of(h);
        if self.half_edges[h].direction == HalfEdgeDirection::RightToLeft {
            line = line.reversed();
        }
        // the left normal of `line` is (-dy, dx)
        if line.is_mostly_horizontal() {
            let y = if line.dx > 0.0 { rect.ymax } else { rect.ymin };
            vec![
                Point2::new(rect.xmin, line.y_at_x(rect.xmin)),
                Point2::new(rect.xmax, line.y_at_x(rect.xmax)),
                Point2::new(rect.xmax, y),
                Point2::new(rect.xmin, y),
            ]
        } else {
            let x = if line.dy > 0.0 { rect.xmin } else { rect.xmax };
            vec![
                Point2::new(line.x_at_y(rect.ymin), rect.ymin),
                Point2::new(line.x_at_y(rect.ymax), rect.ymax),
                Point2::new(x, rect.ymax),
                Point2::new(x, rect.ymin),
            ]
        }
    }

    fn far_corner(&self, v: usize, rect: &Bbox2) -> Option<Point2> {
        let vx = &self.vertices[v];
        let x = match vx.ps_x {
            ParameterSpace::Left => rect.xmin - rect.width(),
            ParameterSpace::Right => rect.xmax + rect.width(),
            _ => return None,
        };
        let y = match vx.ps_y {
            ParameterSpace::Bottom => rect.ymin - rect.height(),
            ParameterSpace::Top => rect.ymax + rect.height(),
            _ => return None,
        };
        Some(Point2::new(x, y))
    }

    fn points_toward(&self, line: LineEquation, v: usize) -> LineEquation {
        let vx = &self.vertices[v];
        let away = (vx.ps_x == ParameterSpace::Left && line.dx > 0.0)
            || (vx.ps_x == ParameterSpace::Right && line.dx < 0.0)
            || (vx.ps_y == ParameterSpace::Bottom && line.dy > 0.0)
            || (vx.ps_y == ParameterSpace::Top && line.dy < 0.0);
        if away { line.reversed() } else { line }
    }

    // Pushes the end `v` of half-edge `h`: the vertex itself when it is
    // finite and near, otherwise the point of the supporting line one
    // viewport extent past the rectangle in the direction of `v`.
    fn project_end(&self, h: usize, v: usize, rect: &Bbox2, pts: &mut Vec<Point2>) {
        let mut line = self.line_of(h);
        if self.half_edges[h].direction == HalfEdgeDirection::RightToLeft {
            line = line.reversed();
        }
        let (src, tgt) = (self.source(h), self.target(h));
        let line = if self.vertices[v].is_at_open_boundary() {
            self.points_toward(line, v)
        } else if self.vertices[tgt].is_at_open_boundary() {
            self.points_toward(line, tgt)
        } else if self.vertices[src].is_at_open_boundary() {
            self.points_toward(line, src).reversed()
        } else {
            line
        };
        let near = self.vertex_point2(v);

        if line.is_mostly_horizontal() {
            let x = if line.dx > 0.0 {
                rect.xmax + rect.width()
            } else {
                rect.xmin - rect.width()
            };
            if let Some(p) = near
                && ((line.dx > 0.0 && p.x < x) || (line.dx < 0.0 && p.x > x))
            {
                pts.push(p);
                return;
            }
            pts.push(Point2::new(x, line.y_at_x(x)));
        } else {
            let y = if line.dy > 0.0 {
                rect.ymax + rect.height()
            } else {
                rect.ymin - rect.height()
            };
            if let Some(p) = near
                && ((line.dy > 0.0 && p.y < y) || (line.dy < 0.0 && p.y > y))
            {
                pts.push(p);
                return;
            }
            pts.push(Point2::new(line.x_at_y(y), y));
        }
    }
}
