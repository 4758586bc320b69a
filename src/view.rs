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

//! Model owner for interactive use: wraps an arrangement, keeps the derived
//! bounding box and vertex points current and tells observers when the
//! model changes.

use crate::arrangement::Arrangement;
use crate::error::ArrError;
use crate::geometry::{Bbox2, Point2};
use crate::query::{LocateResult, accumulate_bbox};
use crate::render::{
    FillConfig, Painter, PixelBuffer, ViewTransform, ViewportConfig, paint_faces, paint_with_flood_fill,
};
use crate::traits::ArrTraits;

/// Receives a notification after every change to the model.
pub trait ModelObserver {
    fn model_changed(&mut self, bbox: &Bbox2, points: &[Point2]);
}

pub struct ArrangementView<Tr: ArrTraits> {
    arr: Arrangement<Tr>,
    bbox: Bbox2,
    points: Vec<Point2>,
    observers: Vec<Box<dyn ModelObserver>>,
}

impl<Tr: ArrTraits> ArrangementView<Tr> {
    pub fn new(arr: Arrangement<Tr>) -> Self {
        let mut view = Self {
            arr,
            bbox: Bbox2::empty(),
            points: Vec::new(),
            observers: Vec::new(),
        };
        view.refresh();
        view
    }

    pub fn arrangement(&self) -> &Arrangement<Tr> {
        &self.arr
    }

    /// Direct access for edits the view cannot see, such as face colours.
    /// Call [`ArrangementView::model_changed`] after changing geometry.
    pub fn arrangement_mut(&mut self) -> &mut Arrangement<Tr> {
        &mut self.arr
    }

    pub fn add_observer(&mut self, observer: Box<dyn ModelObserver>) {
        self.observers.push(observer);
    }

    pub fn insert_curves(&mut self, curves: Vec<Tr::XCurve>) -> Result<(), ArrError> {
        self.arr.insert_curves(curves)?;
        self.model_changed();
        Ok(())
    }

    pub fn remove_curve(&mut self, index: usize) -> Result<Tr::XCurve, ArrError> {
        let removed = self.arr.remove_curve(index)?;
        self.model_changed();
        Ok(removed)
    }

    /// Recomputes the cached bounding box and points and notifies every
    /// observer.
    pub fn model_changed(&mut self) {
        self.refresh();
        for o in &mut self.observers {
            o.model_changed(&self.bbox, &self.points);
        }
    }

    fn refresh(&mut self) {
        self.bbox = accumulate_bbox(&self.arr);
        self.points = self
            .arr
            .finite_vertices()
            .map(|(_, p)| self.arr.traits().to_point2(p))
            .collect();
    }

    /// The accumulated bounding box, possibly capped at `±Bbox2::MAX_COORD`.
    pub fn bbox(&self) -> Bbox2 {
        self.bbox
    }

    /// The bounding box clamped for display.
    pub fn bounding_rect(&self) -> Bbox2 {
        self.bbox.display_rect()
    }

    /// Approximate locations of all finite vertices.
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn locate(&self, p: Point2) -> LocateResult {
        self.arr.locate(&self.arr.traits().from_point2(p))
    }

    pub fn ray_shoot_up(&self, p: Point2) -> LocateResult {
        self.arr.ray_shoot_up(&self.arr.traits().from_point2(p))
    }

    pub fn ray_shoot_down(&self, p: Point2) -> LocateResult {
        self.arr.ray_shoot_down(&self.arr.traits().from_point2(p))
    }

    /// Paints all faces, as polygons when the family allows it and by flood
    /// fill into `buf` otherwise.
    pub fn paint<P: Painter, V: ViewTransform>(
        &mut self,
        painter: &mut P,
        view: &V,
        buf: &mut PixelBuffer,
        viewport: &ViewportConfig,
        fill: &FillConfig,
    ) {
        if Tr::FAMILY.has_polygon_faces() {
            paint_faces(&mut self.arr, painter, viewport);
        } else {
            paint_with_flood_fill(&self.arr, painter, view, buf, fill, viewport.samples_per_curve);
        }
    }
}
