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

use crate::geometry::{Bbox2, Point2};

/// Maps scene coordinates to device pixels and back.
pub trait ViewTransform {
    fn to_device(&self, p: &Point2) -> Point2;
    fn to_scene(&self, p: &Point2) -> Point2;

    /// Scene rectangle covered by a `width` x `height` device.
    fn scene_rect(&self, width: usize, height: usize) -> Bbox2 {
        let a = self.to_scene(&Point2::new(0.0, 0.0));
        let b = self.to_scene(&Point2::new(width as f64, height as f64));
        Bbox2::from_points(&a, &b)
    }
}

/// Axis-aligned scale and offset, `device = scene * scale + offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineView {
    pub scale_x: f64,
    pub scale_y: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl AffineView {
    /// Fits `scene` onto a `width` x `height` device with the scene's y axis
    /// pointing up, i.e. `scene.ymax` maps to device row 0.
    pub fn fit(scene: &Bbox2, width: usize, height: usize) -> Self {
        let scale_x = width as f64 / scene.width();
        let scale_y = -(height as f64) / scene.height();
        Self {
            scale_x,
            scale_y,
            offset_x: -scene.xmin * scale_x,
            offset_y: -scene.ymax * scale_y,
        }
    }
}

impl ViewTransform for AffineView {
    fn to_device(&self, p: &Point2) -> Point2 {
        Point2::new(p.x * self.scale_x + self.offset_x, p.y * self.scale_y + self.offset_y)
    }

    fn to_scene(&self, p: &Point2) -> Point2 {
        Point2::new(
            (p.x - self.offset_x) / self.scale_x,
            (p.y - self.offset_y) / self.scale_y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_flips_y() {
        let v = AffineView::fit(&Bbox2::new(-1.0, -1.0, 1.0, 1.0), 200, 100);
        assert_eq!(v.to_device(&Point2::new(-1.0, 1.0)), Point2::new(0.0, 0.0));
        assert_eq!(v.to_device(&Point2::new(1.0, -1.0)), Point2::new(200.0, 100.0));
        assert_eq!(v.to_scene(&Point2::new(100.0, 50.0)), Point2::new(0.0, 0.0));
        assert_eq!(v.scene_rect(200, 100), Bbox2::new(-1.0, -1.0, 1.0, 1.0));
    }
}
