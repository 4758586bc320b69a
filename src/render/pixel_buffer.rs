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

use crate::error::ArrError;
use crate::geometry::Point2;
use crate::render::Rgba;

/// Row-major image, row 0 at the top.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<Rgba>,
}

impl PixelBuffer {
    /// A buffer of unpainted pixels.
    pub fn new(width: usize, height: usize) -> Result<Self, ArrError> {
        if width == 0 || height == 0 {
            return Err(ArrError::EmptyBuffer { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![Rgba::INVALID; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, c: Rgba) {
        self.data[y * self.width + x] = c;
    }

    pub fn row(&self, y: usize) -> &[Rgba] {
        &self.data[y * self.width..(y + 1) * self.width]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [Rgba] {
        &mut self.data[y * self.width..(y + 1) * self.width]
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.data
    }

    pub fn fill(&mut self, c: Rgba) {
        self.data.fill(c);
    }

    /// Paints a frame `margin` pixels wide along all four edges.
    pub fn draw_frame(&mut self, margin: usize, c: Rgba) {
        let (w, h) = (self.width, self.height);
        for i in 0..margin.min(h) {
            self.row_mut(i).fill(c);
            self.row_mut(h - 1 - i).fill(c);
        }
        for y in 0..h {
            for i in 0..margin.min(w) {
                self.set(i, y, c);
                self.set(w - 1 - i, y, c);
            }
        }
    }

    /// True if every pixel of the square of half-size `r` around `(x, y)`
    /// is unpainted. The square must lie inside the buffer.
    pub fn is_clear_around(&self, x: usize, y: usize, r: usize) -> bool {
        (y - r..=y + r).all(|yy| self.row(yy)[x - r..=x + r].iter().all(|c| !c.is_valid()))
    }

    /// Rasterizes the segment between two device points, clipped to the
    /// buffer.
    pub fn draw_line(&mut self, a: Point2, b: Point2, c: Rgba) {
        let Some((a, b)) = self.clip(a, b) else {
            return;
        };
        let (mut x0, mut y0) = (a.x.round() as i64, a.y.round() as i64);
        let (x1, y1) = (b.x.round() as i64, b.y.round() as i64);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.plot(x0, y0, c);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    pub fn draw_polyline(&mut self, points: &[Point2], c: Rgba) {
        match points {
            [] => {}
            [p] => self.plot(p.x.round() as i64, p.y.round() as i64, c),
            _ => {
                for w in points.windows(2) {
                    self.draw_line(w[0], w[1], c);
                }
            }
        }
    }

    fn plot(&mut self, x: i64, y: i64, c: Rgba) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.set(x as usize, y as usize, c);
        }
    }

    // Liang-Barsky clip against the pixel-centre rectangle.
    fn clip(&self, a: Point2, b: Point2) -> Option<(Point2, Point2)> {
        if !a.is_finite() || !b.is_finite() {
            return None;
        }
        let (xmax, ymax) = ((self.width - 1) as f64, (self.height - 1) as f64);
        let (dx, dy) = (b.x - a.x, b.y - a.y);
        let mut t0: f64 = 0.0;
        let mut t1: f64 = 1.0;
        for (p, q) in [(-dx, a.x), (dx, xmax - a.x), (-dy, a.y), (dy, ymax - a.y)] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let t = q / p;
            if p < 0.0 {
                t0 = t0.max(t);
            } else {
                t1 = t1.min(t);
            }
            if t0 > t1 {
                return None;
            }
        }
        Some((a.lerp(&b, t0), a.lerp(&b, t1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_is_rejected() {
        assert_eq!(
            PixelBuffer::new(0, 3),
            Err(ArrError::EmptyBuffer { width: 0, height: 3 })
        );
    }

    #[test]
    fn frame_covers_margins() {
        let mut b = PixelBuffer::new(6, 5).unwrap();
        b.draw_frame(2, Rgba::WHITE);
        let painted = b.pixels().iter().filter(|c| c.is_valid()).count();
        // only the 2x1 centre stays clear
        assert_eq!(painted, 30 - 2);
        assert!(!b.get(2, 2).is_valid());
        assert!(!b.get(3, 2).is_valid());
    }

    #[test]
    fn lines_are_clipped() {
        let mut b = PixelBuffer::new(10, 10).unwrap();
        let red = Rgba::rgb(255, 0, 0);
        b.draw_line(Point2::new(-100.0, 5.0), Point2::new(100.0, 5.0), red);
        assert!((0..10).all(|x| b.get(x, 5) == red));
        assert_eq!(b.pixels().iter().filter(|c| c.is_valid()).count(), 10);

        b.draw_line(Point2::new(20.0, 20.0), Point2::new(30.0, 40.0), red);
        assert_eq!(b.pixels().iter().filter(|c| c.is_valid()).count(), 10);
    }

    #[test]
    fn diagonal_line_is_connected() {
        let mut b = PixelBuffer::new(8, 8).unwrap();
        b.draw_line(Point2::new(0.0, 0.0), Point2::new(7.0, 7.0), Rgba::WHITE);
        assert!((0..8).all(|i| b.get(i, i).is_valid()));
    }

    #[test]
    fn guard_block() {
        let mut b = PixelBuffer::new(7, 7).unwrap();
        assert!(b.is_clear_around(3, 3, 2));
        b.set(5, 1, Rgba::WHITE);
        assert!(!b.is_clear_around(3, 3, 2));
        assert!(b.is_clear_around(3, 3, 1));
    }
}
