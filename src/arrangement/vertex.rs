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

use crate::traits::ParameterSpace;

#[derive(Clone, Debug)]
pub struct Vertex<P> {
    /// `None` for a vertex at infinity.
    pub point: Option<P>,
    pub ps_x: ParameterSpace,
    pub ps_y: ParameterSpace,
    /// An incoming half-edge, `None` for an isolated vertex.
    pub half_edge: Option<usize>,
    /// Containing face of an isolated vertex.
    pub isolated_in: Option<usize>,
}

impl<P> Vertex<P> {
    pub fn finite(point: P) -> Self {
        Self {
            point: Some(point),
            ps_x: ParameterSpace::Interior,
            ps_y: ParameterSpace::Interior,
            half_edge: None,
            isolated_in: None,
        }
    }

    pub fn at_infinity(ps_x: ParameterSpace, ps_y: ParameterSpace) -> Self {
        Self {
            point: None,
            ps_x,
            ps_y,
            half_edge: None,
            isolated_in: None,
        }
    }

    pub fn is_at_open_boundary(&self) -> bool {
        self.point.is_none()
    }

    pub fn is_isolated(&self) -> bool {
        self.half_edge.is_none()
    }
}
