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

/// Orientation of a half-edge relative to the lexicographic order of its
/// curve's ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HalfEdgeDirection {
    LeftToRight,
    RightToLeft,
}

impl HalfEdgeDirection {
    pub fn opposite(self) -> Self {
        match self {
            HalfEdgeDirection::LeftToRight => HalfEdgeDirection::RightToLeft,
            HalfEdgeDirection::RightToLeft => HalfEdgeDirection::LeftToRight,
        }
    }
}

#[derive(Clone, Debug)]
pub struct HalfEdge {
    pub vertex: usize, // target vertex
    pub face: usize,   // face on the left
    pub next: usize,
    pub prev: usize,
    pub twin: usize,
    pub direction: HalfEdgeDirection,
    pub curve: Option<usize>, // None on the parameter-space frame
}

impl HalfEdge {
    pub fn new(vertex: usize, direction: HalfEdgeDirection, curve: Option<usize>) -> Self {
        Self {
            vertex,
            face: usize::MAX,
            next: usize::MAX,
            prev: usize::MAX,
            twin: usize::MAX,
            direction,
            curve,
        }
    }

    /// Part of the frame that closes unbounded faces.
    pub fn is_fictitious(&self) -> bool {
        self.curve.is_none()
    }
}
