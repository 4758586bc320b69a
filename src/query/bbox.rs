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

use tracing::warn;

use crate::arrangement::Arrangement;
use crate::geometry::Bbox2;
use crate::traits::{ArrTraits, CurveExtent, CurveFamily};

/// Union of the bounding boxes of all curves.
///
/// Rays contribute the box of their quadrant and lines the whole capped box.
/// A curve whose box cannot be computed makes the result the capped box;
/// the failure is logged and not returned. Rational-function arrangements
/// are treated as unbounded without looking at their curves.
pub fn accumulate_bbox<Tr: ArrTraits>(arr: &Arrangement<Tr>) -> Bbox2 {
    if Tr::FAMILY == CurveFamily::RationalFunction {
        return Bbox2::unbounded();
    }
    let mut bb = Bbox2::empty();
    for (i, c) in arr.curves().iter().enumerate() {
        match arr.traits().extent(c) {
            Ok(CurveExtent::Finite(b)) => bb += b,
            Ok(CurveExtent::Ray { source, dx, dy }) => bb += Bbox2::ray(&source, dx, dy),
            Ok(CurveExtent::Line) => return Bbox2::unbounded(),
            Err(e) => {
                warn!(curve = i, family = ?Tr::FAMILY, error = %e, "curve bbox failed, using the capped box");
                return Bbox2::unbounded();
            }
        }
    }
    bb
}
