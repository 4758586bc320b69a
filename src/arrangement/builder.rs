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

use tracing::{debug, instrument};

use crate::arrangement::{Arrangement, FICTITIOUS_FACE, Face, HalfEdge, HalfEdgeDirection, Vertex};
use crate::error::ArrError;
use crate::traits::{ArrTraits, BoundaryCategory, CurveEnd, ExCurve, ExPoint, InsertionTraits, ParameterSpace};

/// What a finite vertex was merged from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EndRef {
    Curve(usize, CurveEnd),
    Point(usize),
}

/// Finite vertices after merging equal curve ends and isolated points.
#[derive(Debug)]
pub(crate) struct MergedEnds<P> {
    pub points: Vec<P>,
    pub curve_ends: Vec<[Option<usize>; 2]>,
    pub point_vertex: Vec<usize>,
}

/// Sorts the entries lexicographically with `cmp` and gives equal points a
/// single vertex, in sorted order.
pub(crate) fn merge_ends<P: Clone>(
    mut entries: Vec<(P, EndRef)>,
    num_curves: usize,
    num_points: usize,
    cmp: impl Fn(&P, &P) -> Ordering,
) -> MergedEnds<P> {
    entries.sort_by(|a, b| cmp(&a.0, &b.0));
    let mut merged = MergedEnds {
        points: Vec::new(),
        curve_ends: vec![[None, None]; num_curves],
        point_vertex: vec![usize::MAX; num_points],
    };
    for (i, (p, r)) in entries.iter().enumerate() {
        if i == 0 || cmp(&entries[i - 1].0, p) != Ordering::Equal {
            merged.points.push(p.clone());
        }
        let v = merged.points.len() - 1;
        match *r {
            EndRef::Curve(c, CurveEnd::Min) => merged.curve_ends[c][0] = Some(v),
            EndRef::Curve(c, CurveEnd::Max) => merged.curve_ends[c][1] = Some(v),
            EndRef::Point(j) => merged.point_vertex[j] = v,
        }
    }
    merged
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Bottom,
    Right,
    Top,
    Left,
}

// Compass buckets of half-edges leaving a vertex at infinity, in
// counter-clockwise order.
const EAST: u8 = 0;
const NORTH: u8 = 1;
const WEST: u8 = 2;
const SOUTH: u8 = 3;

/// Per-half-edge bookkeeping that only lives during construction.
struct Scratch {
    /// `Some(side)` for frame half-edges; `inner` tells which of the pair
    /// faces into the frame.
    frame: Vec<Option<(Side, bool)>>,
    /// Curve end owning each vertex at infinity.
    boundary_end: Vec<Option<(usize, CurveEnd)>>,
    /// Position of each half-edge in its source's counter-clockwise list.
    position: Vec<usize>,
    cycle: Vec<usize>,
}

impl<Tr: ArrTraits> Arrangement<Tr> {
    /// Builds the arrangement of pairwise interior-disjoint x-monotone curves
    /// and isolated points. Curves may share endpoints; isolated points may
    /// coincide with curve ends but must not lie in a curve's interior.
    #[instrument(skip_all, fields(curves = curves.len(), points = points.len()))]
    pub fn from_curves(traits: Tr, curves: Vec<Tr::XCurve>, points: Vec<Tr::Point>) -> Result<Self, ArrError> {
        for c in &curves {
            traits.validate(c)?;
        }
        for p in &points {
            traits.validate_point(p)?;
        }

        let mut entries = Vec::with_capacity(curves.len() * 2 + points.len());
        for (i, c) in curves.iter().enumerate() {
            for end in [CurveEnd::Min, CurveEnd::Max] {
                if let Some(p) = traits.end_point(c, end) {
                    entries.push((p, EndRef::Curve(i, end)));
                }
            }
        }
        for (j, p) in points.iter().enumerate() {
            entries.push((p.clone(), EndRef::Point(j)));
        }
        let merged = merge_ends(entries, curves.len(), points.len(), |a, b| traits.compare_xy(a, b));
        let mut arr = Arrangement {
            traits,
            curves,
            points,
            vertices: Vec::new(),
            half_edges: Vec::new(),
            faces: Vec::new(),
            curve_half_edge: Vec::new(),
            point_vertex: Vec::new(),
        };
        arr.assemble(merged);
        Ok(arr)
    }

    /// Adds curves and rebuilds the topology. Ends of the curves already
    /// present are merged through their half-edges, so two ends known to
    /// share a vertex are never compared numerically. Face colours are
    /// reset. On error the arrangement is left unchanged.
    #[instrument(skip_all, fields(curves = new_curves.len()))]
    pub fn insert_curves(&mut self, new_curves: Vec<Tr::XCurve>) -> Result<(), ArrError> {
        for c in &new_curves {
            self.traits.validate(c)?;
        }
        let kept: Vec<usize> = (0..self.curves.len()).collect();
        self.rebuild(&kept, new_curves);
        Ok(())
    }

    /// Removes curve `index` and rebuilds the topology; the remaining curves
    /// keep their order. Face colours are reset.
    pub fn remove_curve(&mut self, index: usize) -> Result<Tr::XCurve, ArrError> {
        if index >= self.curves.len() {
            return Err(ArrError::UnknownCurve(index));
        }
        let removed = self.curves[index].clone();
        let kept: Vec<usize> = (0..self.curves.len()).filter(|&i| i != index).collect();
        self.rebuild(&kept, Vec::new());
        Ok(removed)
    }

    fn rebuild(&mut self, kept: &[usize], new_curves: Vec<Tr::XCurve>) {
        let merged = {
            let ins = InsertionTraits::new(self);
            let mut ex: Vec<ExCurve<Tr::XCurve>> = kept
                .iter()
                .map(|&i| {
                    let mut xc = ExCurve::new(self.curves[i].clone());
                    ins.set_halfedge(&mut xc, self.twin(self.curve_half_edge[i]));
                    xc
                })
                .collect();
            ex.extend(new_curves.iter().cloned().map(ExCurve::new));

            let mut entries: Vec<(ExPoint<Tr::Point>, EndRef)> = Vec::new();
            for (i, xc) in ex.iter().enumerate() {
                for end in [CurveEnd::Min, CurveEnd::Max] {
                    if !ins.is_bounded(xc, end) {
                        continue;
                    }
                    let p = match end {
                        CurveEnd::Min => ins.min_vertex(xc),
                        CurveEnd::Max => ins.max_vertex(xc),
                    };
                    entries.push((p, EndRef::Curve(i, end)));
                }
            }
            for (j, p) in self.points.iter().enumerate() {
                entries.push((
                    ExPoint::with_vertex(p.clone(), self.point_vertex[j]),
                    EndRef::Point(j),
                ));
            }
            let m = merge_ends(entries, ex.len(), self.points.len(), |a, b| ins.compare_xy(a, b));
            MergedEnds {
                points: m.points.into_iter().map(ExPoint::into_base).collect(),
                curve_ends: m.curve_ends,
                point_vertex: m.point_vertex,
            }
        };

        let mut next: Vec<Tr::XCurve> = Vec::with_capacity(kept.len() + new_curves.len());
        next.extend(kept.iter().map(|&i| self.curves[i].clone()));
        next.extend(new_curves);
        self.curves = next;
        self.assemble(merged);
    }

    // Replaces the topology with the one of the current curves, given their
    // merged finite ends.
    fn assemble(&mut self, merged: MergedEnds<Tr::Point>) {
        let MergedEnds {
            points: vertex_points,
            curve_ends,
            point_vertex,
        } = merged;
        self.vertices = vertex_points.into_iter().map(Vertex::finite).collect();
        self.half_edges.clear();
        self.faces.clear();
        self.curve_half_edge.clear();
        self.point_vertex = point_vertex;

        let mut scratch = Scratch {
            frame: Vec::new(),
            boundary_end: vec![None; self.vertices.len()],
            position: Vec::new(),
            cycle: Vec::new(),
        };
        let ends = self.create_boundary_vertices(&curve_ends, &mut scratch);
        self.create_curve_edges(&ends, &mut scratch);
        self.create_frame(&mut scratch);
        self.link_around_vertices(&mut scratch);
        self.trace_faces(&mut scratch);

        debug!(
            vertices = self.vertices.len(),
            edges = self.curves.len(),
            faces = self.faces.len() - 1,
            "arrangement built"
        );
    }

    // Creates one vertex at infinity per unbounded curve end plus the four
    // corners, and returns the vertex of every curve end.
    fn create_boundary_vertices(
        &mut self,
        curve_ends: &[[Option<usize>; 2]],
        scratch: &mut Scratch,
    ) -> Vec<[usize; 2]> {
        let mut ends = Vec::with_capacity(curve_ends.len());
        for (i, ce) in curve_ends.iter().enumerate() {
            let mut pair = [usize::MAX; 2];
            for (k, end) in [CurveEnd::Min, CurveEnd::Max].into_iter().enumerate() {
                pair[k] = match ce[k] {
                    Some(v) => v,
                    None => {
                        let (ps_x, ps_y) = self.traits.end_space(&self.curves[i], end);
                        self.vertices.push(Vertex::at_infinity(ps_x, ps_y));
                        scratch.boundary_end.push(Some((i, end)));
                        self.vertices.len() - 1
                    }
                };
            }
            ends.push(pair);
        }
        for (ps_x, ps_y) in [
            (ParameterSpace::Left, ParameterSpace::Bottom),
            (ParameterSpace::Right, ParameterSpace::Bottom),
            (ParameterSpace::Right, ParameterSpace::Top),
            (ParameterSpace::Left, ParameterSpace::Top),
        ] {
            self.vertices.push(Vertex::at_infinity(ps_x, ps_y));
            scratch.boundary_end.push(None);
        }
        ends
    }

    fn push_pair(
        &mut self,
        scratch: &mut Scratch,
        from: usize,
        to: usize,
        direction: HalfEdgeDirection,
        curve: Option<usize>,
    ) -> usize {
        let h = self.half_edges.len();
        self.half_edges.push(HalfEdge::new(to, direction, curve));
        self.half_edges.push(HalfEdge::new(from, direction.opposite(), curve));
        self.half_edges[h].twin = h + 1;
        self.half_edges[h + 1].twin = h;
        scratch.frame.push(None);
        scratch.frame.push(None);
        h
    }

    fn create_curve_edges(&mut self, ends: &[[usize; 2]], scratch: &mut Scratch) {
        for (i, &[u, w]) in ends.iter().enumerate() {
            let h = self.push_pair(scratch, u, w, HalfEdgeDirection::LeftToRight, Some(i));
            self.curve_half_edge.push(h);
        }
    }

    // Chains the vertices at infinity counter-clockwise:
    // bottom-left, bottom side, bottom-right, right side, top-right, top side,
    // top-left, left side.
    fn create_frame(&mut self, scratch: &mut Scratch) {
        let n = self.vertices.len();
        let (bl, br, tr, tl) = (n - 4, n - 3, n - 2, n - 1);

        let mut bottom = Vec::new();
        let mut right = Vec::new();
        let mut top = Vec::new();
        let mut left = Vec::new();
        for v in 0..n - 4 {
            let Some((c, end)) = scratch.boundary_end[v] else {
                continue;
            };
            let vx = &self.vertices[v];
            match (vx.ps_x, vx.ps_y) {
                (ParameterSpace::Left, _) => left.push((v, c, end)),
                (ParameterSpace::Right, _) => right.push((v, c, end)),
                (_, ParameterSpace::Bottom) => bottom.push((v, c, end)),
                (_, ParameterSpace::Top) => top.push((v, c, end)),
                _ => panic!("curve end {end:?} of curve {c} is unbounded but interior"),
            }
        }
        if !(bottom.is_empty() && right.is_empty() && top.is_empty() && left.is_empty()) {
            assert!(
                Tr::BOUNDARY == BoundaryCategory::Unbounded,
                "{:?} traits produced a curve end at infinity",
                Tr::FAMILY
            );
        }

        let (traits, curves) = (&self.traits, &self.curves);
        bottom.sort_by(|a, b| traits.compare_x_near_boundary(&curves[a.1], a.2, &curves[b.1], b.2));
        right.sort_by(|a, b| traits.compare_y_near_boundary(&curves[a.1], &curves[b.1], CurveEnd::Max));
        top.sort_by(|a, b| traits.compare_x_near_boundary(&curves[b.1], b.2, &curves[a.1], a.2));
        left.sort_by(|a, b| traits.compare_y_near_boundary(&curves[b.1], &curves[a.1], CurveEnd::Min));

        let mut ring: Vec<(usize, Side)> = Vec::new();
        ring.push((bl, Side::Bottom));
        ring.extend(bottom.iter().map(|e| (e.0, Side::Bottom)));
        ring.push((br, Side::Right));
        ring.extend(right.iter().map(|e| (e.0, Side::Right)));
        ring.push((tr, Side::Top));
        ring.extend(top.iter().map(|e| (e.0, Side::Top)));
        ring.push((tl, Side::Left));
        ring.extend(left.iter().map(|e| (e.0, Side::Left)));

        for k in 0..ring.len() {
            let (a, side) = ring[k];
            let (b, _) = ring[(k + 1) % ring.len()];
            let direction = match side {
                Side::Bottom | Side::Right => HalfEdgeDirection::LeftToRight,
                Side::Top | Side::Left => HalfEdgeDirection::RightToLeft,
            };
            let h = self.push_pair(scratch, a, b, direction, None);
            scratch.frame[h] = Some((side, true));
            scratch.frame[h + 1] = Some((side, false));
        }
    }

    fn compass(&self, scratch: &Scratch, e: usize) -> u8 {
        if let Some((side, inner)) = scratch.frame[e] {
            return match (side, inner) {
                (Side::Bottom, true) | (Side::Top, false) => EAST,
                (Side::Right, true) | (Side::Left, false) => NORTH,
                (Side::Top, true) | (Side::Bottom, false) => WEST,
                (Side::Left, true) | (Side::Right, false) => SOUTH,
            };
        }
        let v = &self.vertices[self.source(e)];
        match (v.ps_x, v.ps_y) {
            (ParameterSpace::Left, _) => EAST,
            (ParameterSpace::Right, _) => WEST,
            (_, ParameterSpace::Bottom) => NORTH,
            _ => SOUTH,
        }
    }

    // Counter-clockwise class of a curve half-edge leaving a finite vertex:
    // rightward, upward, leftward, downward.
    fn class(&self, e: usize) -> u8 {
        let he = &self.half_edges[e];
        let vertical = he.curve.is_some_and(|c| self.traits.is_vertical(&self.curves[c]));
        match (he.direction, vertical) {
            (HalfEdgeDirection::LeftToRight, false) => 0,
            (HalfEdgeDirection::LeftToRight, true) => 1,
            (HalfEdgeDirection::RightToLeft, false) => 2,
            (HalfEdgeDirection::RightToLeft, true) => 3,
        }
    }

    fn compare_around(&self, p: &Tr::Point, a: usize, b: usize) -> Ordering {
        let (ca, cb) = (self.class(a), self.class(b));
        if ca != cb {
            return ca.cmp(&cb);
        }
        let (Some(c1), Some(c2)) = (self.curve_of(a), self.curve_of(b)) else {
            unreachable!("frame half-edge at a finite vertex");
        };
        match ca {
            0 => self.traits.compare_y_at_x_right(c1, c2, p),
            2 => self.traits.compare_y_at_x_left(c2, c1, p),
            _ => Ordering::Equal,
        }
    }

    fn link_around_vertices(&mut self, scratch: &mut Scratch) {
        let mut out: Vec<Vec<usize>> = vec![Vec::new(); self.vertices.len()];
        for h in 0..self.half_edges.len() {
            out[self.source(h)].push(h);
        }

        scratch.position = vec![usize::MAX; self.half_edges.len()];
        for (v, list) in out.iter_mut().enumerate() {
            match &self.vertices[v].point {
                Some(p) => list.sort_by(|&a, &b| self.compare_around(p, a, b)),
                None => list.sort_by_key(|&e| self.compass(scratch, e)),
            }
            let k = list.len();
            for (i, &e) in list.iter().enumerate() {
                scratch.position[e] = i;
                let incoming = self.half_edges[e].twin;
                let cw = list[(i + k - 1) % k];
                self.half_edges[incoming].next = cw;
                self.half_edges[cw].prev = incoming;
            }
            if let Some(&e) = list.first() {
                self.vertices[v].half_edge = Some(self.half_edges[e].twin);
            }
        }
    }

    fn trace_faces(&mut self, scratch: &mut Scratch) {
        let n = self.half_edges.len();
        scratch.cycle = vec![usize::MAX; n];
        let mut cycles: Vec<Vec<usize>> = Vec::new();
        for start in 0..n {
            if scratch.cycle[start] != usize::MAX {
                continue;
            }
            let id = cycles.len();
            let mut members = Vec::new();
            let mut h = start;
            loop {
                assert!(
                    scratch.cycle[h] == usize::MAX,
                    "half-edge {h} reached twice while tracing a boundary cycle"
                );
                scratch.cycle[h] = id;
                members.push(h);
                h = self.half_edges[h].next;
                if h == start {
                    break;
                }
            }
            cycles.push(members);
        }

        self.faces.push(Face {
            unbounded: true,
            fictitious: true,
            ..Face::default()
        });

        let mut holes: Vec<(usize, usize)> = Vec::new(); // (cycle, lowest vertex)
        for (id, members) in cycles.iter().enumerate() {
            let frame = members.iter().find_map(|&h| scratch.frame[h]);
            match frame {
                Some((_, false)) => {
                    self.faces[FICTITIOUS_FACE].holes.push(members[0]);
                    self.assign_cycle(members, FICTITIOUS_FACE);
                }
                Some((_, true)) => {
                    let f = self.push_face(members[0], true);
                    self.assign_cycle(members, f);
                }
                None => {
                    let vmin = self.lowest_target(members);
                    if self.is_outer_cycle(members, vmin, scratch) {
                        let f = self.push_face(members[0], false);
                        self.assign_cycle(members, f);
                    } else {
                        holes.push((id, vmin));
                    }
                }
            }
        }

        // Every component hit by the upward ray of another lies strictly to
        // its left, so processing lowest vertices in order resolves each hit
        // against an already assigned cycle.
        let isolated: Vec<usize> = (0..self.vertices.len())
            .filter(|&v| self.vertices[v].half_edge.is_none() && self.vertices[v].point.is_some())
            .collect();
        let mut pending: Vec<(Option<usize>, usize)> = holes
            .iter()
            .map(|&(c, v)| (Some(c), v))
            .chain(isolated.iter().map(|&v| (None, v)))
            .collect();
        pending.sort_by(|a, b| self.compare_vertices(a.1, b.1));

        for (cycle, v) in pending {
            let f = self.containing_face(v);
            match cycle {
                Some(c) => {
                    self.faces[f].holes.push(cycles[c][0]);
                    self.assign_cycle(&cycles[c], f);
                }
                None => {
                    self.faces[f].isolated_vertices.push(v);
                    self.vertices[v].isolated_in = Some(f);
                }
            }
        }
    }

    fn push_face(&mut self, outer: usize, unbounded: bool) -> usize {
        self.faces.push(Face {
            outer_ccb: Some(outer),
            unbounded,
            ..Face::default()
        });
        self.faces.len() - 1
    }

    fn assign_cycle(&mut self, members: &[usize], f: usize) {
        for &h in members {
            self.half_edges[h].face = f;
        }
    }

    fn compare_vertices(&self, a: usize, b: usize) -> Ordering {
        match (&self.vertices[a].point, &self.vertices[b].point) {
            (Some(p), Some(q)) => self.traits.compare_xy(p, q),
            _ => panic!("vertex at infinity in a bounded boundary cycle"),
        }
    }

    fn lowest_target(&self, members: &[usize]) -> usize {
        let mut best = self.target(members[0]);
        for &h in &members[1..] {
            let v = self.target(h);
            if self.compare_vertices(v, best) == Ordering::Less {
                best = v;
            }
        }
        best
    }

    // At its lowest vertex an outer boundary keeps its face in the sector
    // between the outgoing and the reversed incoming half-edge, which cannot
    // reach westward. A hole's face wraps around the vertex instead.
    fn is_outer_cycle(&self, members: &[usize], vmin: usize, scratch: &Scratch) -> bool {
        members
            .iter()
            .filter(|&&h| self.target(h) == vmin)
            .all(|&h| scratch.position[self.next(h)] < scratch.position[self.twin(h)])
    }

    /// Face containing the component whose lowest vertex is `v`.
    fn containing_face(&self, v: usize) -> usize {
        match &self.vertices[v].point {
            Some(p) => self.face_left_above(p),
            None => unreachable!("isolated component starts at infinity"),
        }
    }

    /// The face just left of `p` and below the first curve above it: shoots
    /// upward from an abscissa infinitesimally smaller than that of `p`.
    /// Curves starting at or right of `p` are never hit, so `p` may be the
    /// lowest vertex of a component whose face is not known yet.
    pub(crate) fn face_left_above(&self, p: &Tr::Point) -> usize {
        let tr = &self.traits;
        let mut best: Option<usize> = None;
        for (i, c) in self.curves.iter().enumerate() {
            if tr.is_vertical(c)
                || tr.compare_x_with_end(p, c, CurveEnd::Min) != Ordering::Greater
                || tr.compare_x_with_end(p, c, CurveEnd::Max) == Ordering::Greater
                || tr.compare_y_at_x(p, c) != Ordering::Less
            {
                continue;
            }
            best = match best {
                None => Some(i),
                Some(j) => {
                    let cj = &self.curves[j];
                    let below = match tr.compare_y_position(c, cj, p) {
                        // both end at one point above `p`; order them just left of it
                        Ordering::Equal => tr.compare_y_at_x_left(c, cj, &tr.max_vertex(c)),
                        o => o,
                    };
                    if below == Ordering::Less { Some(i) } else { Some(j) }
                }
            };
        }
        match best {
            Some(i) => self.half_edges[self.twin(self.curve_half_edge[i])].face,
            None => self.frame_face(p, ParameterSpace::Top),
        }
    }

    /// Face behind the top (or bottom) side of the frame at the abscissa of
    /// `p`, taken just left of any vertex at that abscissa.
    pub(crate) fn frame_face(&self, p: &Tr::Point, side: ParameterSpace) -> usize {
        // inner frame half-edges run leftward along the top, rightward along the bottom
        let inner = match side {
            ParameterSpace::Top => HalfEdgeDirection::RightToLeft,
            _ => HalfEdgeDirection::LeftToRight,
        };
        for (h, he) in self.half_edges.iter().enumerate() {
            if !he.is_fictitious() || he.direction != inner {
                continue;
            }
            let (src, tgt) = (self.source(h), self.target(h));
            if self.vertices[src].ps_y != side || self.vertices[tgt].ps_y != side {
                continue;
            }
            let (lo, hi) = match inner {
                HalfEdgeDirection::RightToLeft => (tgt, src),
                HalfEdgeDirection::LeftToRight => (src, tgt),
            };
            if self.frame_x_order(p, lo) == Ordering::Greater && self.frame_x_order(p, hi) != Ordering::Greater {
                return he.face;
            }
        }
        unreachable!("the frame spans every abscissa")
    }

    // x-order of `p` against a vertex on the bottom or top of the frame.
    fn frame_x_order(&self, p: &Tr::Point, v: usize) -> Ordering {
        match self.vertices[v].ps_x {
            ParameterSpace::Left => return Ordering::Greater,
            ParameterSpace::Right => return Ordering::Less,
            _ => {}
        }
        for e in self.outgoing(v) {
            if let Some(c) = self.half_edges[e].curve {
                let end = if self.source(self.curve_half_edge[c]) == v {
                    CurveEnd::Min
                } else {
                    CurveEnd::Max
                };
                return self.traits.compare_x_point_near_boundary(p, &self.curves[c], end);
            }
        }
        unreachable!("vertex {v} on the frame carries no curve end")
    }
}
