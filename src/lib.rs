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

//! Planar arrangements of x-monotone curves: filtered exact predicates, a
//! half-edge structure with unbounded faces, point location and vertical
//! ray shooting, and face painting by polygon or flood fill.

pub mod arrangement;
pub mod error;
pub mod geometry;
pub mod kernel;
pub mod numeric;
pub mod query;
pub mod render;
pub mod traits;
pub mod view;

pub use arrangement::{Arrangement, FICTITIOUS_FACE};
pub use error::{ArrError, BboxError};
pub use geometry::{Bbox2, Point2};
pub use query::{LocateResult, accumulate_bbox};
pub use traits::{ArrTraits, CurveFamily, LinearCurve, LinearTraits, Polyline, PolylineTraits, Segment2, SegmentTraits};
pub use view::{ArrangementView, ModelObserver};
