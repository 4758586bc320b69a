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

use crate::render::{PixelBuffer, Rgba};

/// A filled run `left..=right` on row `y`, reached from a row in direction
/// `-dy` whose scanned range was `prev_left..=prev_right`.
#[derive(Clone, Copy, Debug)]
struct FillLine {
    y: i64,
    left: i64,
    right: i64,
    prev_left: i64,
    prev_right: i64,
    dy: i64,
}

/// Scanline flood fill with an explicit work stack. The stack is kept
/// between calls so repeated fills reuse its allocation.
#[derive(Debug, Default)]
pub struct FloodFill {
    stack: Vec<FillLine>,
}

impl FloodFill {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recolours the 4-connected region of pixels sharing the colour of
    /// `(x, y)`. Returns the number of pixels painted; filling a region with
    /// its own colour paints nothing.
    pub fn fill(&mut self, buf: &mut PixelBuffer, x: usize, y: usize, color: Rgba) -> usize {
        let old = buf.get(x, y);
        if old == color {
            return 0;
        }
        self.stack.clear();
        let (w, h) = (buf.width() as i64, buf.height() as i64);
        let mut painted = 0;

        let (x, y) = (x as i64, y as i64);
        let (left, right) = extend_run(buf, old, color, x, y, &mut painted);
        // an empty previous range on the right makes the first pop scan the
        // whole run in both directions
        self.stack.push(FillLine {
            y,
            left,
            right,
            prev_left: right + 1,
            prev_right: right,
            dy: 1,
        });

        while let Some(line) = self.stack.pop() {
            let FillLine {
                y,
                left,
                right,
                prev_left,
                prev_right,
                dy,
            } = line;
            self.scan(buf, old, color, (w, h), (left, right), y + dy, dy, &mut painted);
            // parts of this run that stick out past the row it came from
            self.scan(buf, old, color, (w, h), (prev_right + 1, right), y - dy, -dy, &mut painted);
            self.scan(buf, old, color, (w, h), (left, prev_left - 1), y - dy, -dy, &mut painted);
        }
        painted
    }

    // Fills every run of `old` pixels on row `y` touching `lo..=hi` and
    // queues each one.
    #[allow(clippy::too_many_arguments)]
    fn scan(
        &mut self,
        buf: &mut PixelBuffer,
        old: Rgba,
        color: Rgba,
        (w, h): (i64, i64),
        (lo, hi): (i64, i64),
        y: i64,
        dy: i64,
        painted: &mut usize,
    ) {
        if y < 0 || y >= h {
            return;
        }
        let mut i = lo.max(0);
        let hi = hi.min(w - 1);
        while i <= hi {
            if buf.get(i as usize, y as usize) == old {
                let (left, right) = extend_run(buf, old, color, i, y, painted);
                self.stack.push(FillLine {
                    y,
                    left,
                    right,
                    prev_left: lo,
                    prev_right: hi,
                    dy,
                });
                i = right + 1;
            }
            i += 1;
        }
    }
}

// Paints the maximal run of `old` pixels through `(x, y)`.
fn extend_run(buf: &mut PixelBuffer, old: Rgba, color: Rgba, x: i64, y: i64, painted: &mut usize) -> (i64, i64) {
    let row = buf.row_mut(y as usize);
    let mut left = x as usize;
    let mut right = x as usize;
    while left > 0 && row[left - 1] == old {
        left -= 1;
    }
    while right + 1 < row.len() && row[right + 1] == old {
        right += 1;
    }
    row[left..=right].fill(color);
    *painted += right - left + 1;
    (left as i64, right as i64)
}
