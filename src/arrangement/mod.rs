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

//! Arena half-edge structure of a planar arrangement.
//!
//! Vertices, half-edges and faces live in flat vectors and refer to each
//! other by index. Every arrangement is closed by a parameter-space frame:
//! four corner vertices at infinity, one vertex at infinity per unbounded
//! curve end, and fictitious half-edges chaining them counter-clockwise.
//! Face 0 is the fictitious face outside the frame.

pub mod builder;
pub mod face;
pub mod half_edge;
pub mod topology;
pub mod unbounded;
pub mod vertex;

pub use face::Face;
pub use half_edge::{HalfEdge, HalfEdgeDirection};
pub use topology::Ccb;
pub use vertex::Vertex;

use crate::geometry::Point2;
use crate::render::Rgba;
use crate::traits::ArrTraits;

/// Index of the fictitious face.
pub const FICTITIOUS_FACE: usize = 0;

#[derive(Debug)]
pub struct Arrangement<Tr: ArrTraits> {
    pub(crate) traits: Tr,
    pub(crate) curves: Vec<Tr::XCurve>,
    pub(crate) points: Vec<Tr::Point>,
    pub(crate) vertices: Vec<Vertex<Tr::Point>>,
    pub(crate) half_edges: Vec<HalfEdge>,
    pub(crate) faces: Vec<Face>,
    /// Left-to-right half-edge of each curve.
    pub(crate) curve_half_edge: Vec<usize>,
    /// Vertex of each isolated input point.
    pub(crate) point_vertex: Vec<usize>,
}

impl<Tr: ArrTraits> Arrangement<Tr> {
    /// An arrangement with no curves: the frame and one unbounded face.
    pub fn new(traits: Tr) -> Self {
        match Self::from_curves(traits, Vec::new(), Vec::new()) {
            Ok(arr) => arr,
            Err(e) => unreachable!("empty arrangement rejected: {e}"),
        }
    }

    pub fn traits(&self) -> &Tr {
        &self.traits
    }

    pub fn curves(&self) -> &[Tr::XCurve] {
        &self.curves
    }

    pub fn isolated_points(&self) -> &[Tr::Point] {
        &self.points
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_half_edges(&self) -> usize {
        self.half_edges.len()
    }

    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Edges carrying a curve, i.e. not part of the frame.
    pub fn num_edges(&self) -> usize {
        self.curves.len()
    }

    pub fn vertex(&self, v: usize) -> &Vertex<Tr::Point> {
        &self.vertices[v]
    }

    pub fn half_edge(&self, h: usize) -> &HalfEdge {
        &self.half_edges[h]
    }

    pub fn face(&self, f: usize) -> &Face {
        &self.faces[f]
    }

    pub fn face_mut(&mut self, f: usize) -> &mut Face {
        &mut self.faces[f]
    }

    pub fn set_face_color(&mut self, f: usize, color: Rgba) {
        self.faces[f].color = color;
    }

    pub fn target(&self, h: usize) -> usize {
        self.half_edges[h].vertex
    }

    pub fn source(&self, h: usize) -> usize {
        self.half_edges[self.half_edges[h].twin].vertex
    }

    pub fn twin(&self, h: usize) -> usize {
        self.half_edges[h].twin
    }

    pub fn next(&self, h: usize) -> usize {
        self.half_edges[h].next
    }

    pub fn prev(&self, h: usize) -> usize {
        self.half_edges[h].prev
    }

    pub fn incident_face(&self, h: usize) -> usize {
        self.half_edges[h].face
    }

    pub fn is_fictitious(&self, h: usize) -> bool {
        self.half_edges[h].is_fictitious()
    }

    pub fn curve_of(&self, h: usize) -> Option<&Tr::XCurve> {
        self.half_edges[h].curve.map(|c| &self.curves[c])
    }

    /// The left-to-right half-edge of curve `c`.
    pub fn curve_half_edge(&self, c: usize) -> usize {
        self.curve_half_edge[c]
    }

    /// Vertex of the `i`-th isolated input point.
    pub fn point_vertex(&self, i: usize) -> usize {
        self.point_vertex[i]
    }

    /// Approximate location of a finite vertex.
    pub fn vertex_point2(&self, v: usize) -> Option<Point2> {
        self.vertices[v].point.as_ref().map(|p| self.traits.to_point2(p))
    }

    pub fn faces_iter(&self) -> impl Iterator<Item = (usize, &Face)> {
        self.faces.iter().enumerate()
    }

    /// Indices of the faces inside the frame.
    pub fn face_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.faces.len()).filter(|&f| !self.faces[f].fictitious)
    }

    /// Finite vertices.
    pub fn finite_vertices(&self) -> impl Iterator<Item = (usize, &Tr::Point)> {
        self.vertices
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.point.as_ref().map(|p| (i, p)))
    }

    /// Half-edges leaving `v`, counter-clockwise.
    pub fn outgoing(&self, v: usize) -> Vec<usize> {
        let Some(first_in) = self.vertices[v].half_edge else {
            return Vec::new();
        };
        let start = self.twin(first_in);
        let mut out = vec![start];
        // counter-clockwise rotation of an outgoing half-edge is twin(prev(e))
        let mut e = self.twin(self.prev(start));
        while e != start {
            out.push(e);
            e = self.twin(self.prev(e));
        }
        out
    }

    pub fn degree(&self, v: usize) -> usize {
        self.outgoing(v).len()
    }
}
