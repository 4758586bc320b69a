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

use thiserror::Error;

/// Rejected input to arrangement construction and the view layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ArrError {
    #[error("non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },

    #[error("degenerate curve: {0}")]
    DegenerateCurve(String),

    #[error("curve is not x-monotone at vertex {0}")]
    NotXMonotone(usize),

    #[error("no curve with index {0}")]
    UnknownCurve(usize),

    #[error("pixel buffer is empty ({width}x{height})")]
    EmptyBuffer { width: usize, height: usize },
}

/// Failure of a curve family to produce a bounding box.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BboxError {
    #[error("zero resultant while bounding the curve")]
    ZeroResultant,

    #[error("bounding box undefined: {0}")]
    Degenerate(String),
}
