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

//! Painting collaborators: colours, an owned pixel buffer, scene/device
//! transforms, scanline flood fill and face painting.

pub mod face_painter;
pub mod flood_fill;
pub mod pixel_buffer;
pub mod transform;

use std::fmt;

use crate::geometry::{Bbox2, Point2};

pub use face_painter::{paint_edges, paint_faces, paint_with_flood_fill};
pub use flood_fill::FloodFill;
pub use pixel_buffer::PixelBuffer;
pub use transform::{AffineView, ViewTransform};

/// Packed `0xAARRGGBB` colour. Zero, fully transparent black, marks an
/// unpainted pixel and a face without a colour.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgba(pub u32);

impl Rgba {
    pub const INVALID: Rgba = Rgba(0);
    pub const WHITE: Rgba = Rgba(0xFFFF_FFFF);
    pub const BLUE: Rgba = Rgba(0xFF00_00FF);

    /// Opaque colour from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba(0xFF00_0000 | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }

    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }
}

impl fmt::Debug for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// The drawing surface faces are painted onto.
pub trait Painter {
    fn fill_polygon(&mut self, points: &[Point2], color: Rgba);
    fn fill_rect(&mut self, rect: &Bbox2, color: Rgba);
    /// Blits `image` at the device origin.
    fn draw_image(&mut self, image: &PixelBuffer);
}

/// Tunables of flood-fill painting.
#[derive(Clone, Debug)]
pub struct FillConfig {
    /// Width in pixels of the frame painted around the buffer so fills can
    /// never leak past its edge.
    pub margin: usize,
    /// A pixel seeds a fill only if every pixel within this distance (in
    /// both axes) is unpainted.
    pub guard_radius: usize,
    pub border_color: Rgba,
    pub edge_color: Rgba,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            margin: 2,
            guard_radius: 2,
            border_color: Rgba::WHITE,
            edge_color: Rgba::BLUE,
        }
    }
}

/// The finite part of the scene shown to the user.
#[derive(Clone, Debug)]
pub struct ViewportConfig {
    pub rect: Bbox2,
    /// Resolution hint for sampling curved edges.
    pub samples_per_curve: usize,
}

impl ViewportConfig {
    pub fn new(rect: Bbox2) -> Self {
        Self { rect, ..Self::default() }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            rect: Bbox2::new(-100.0, -100.0, 100.0, 100.0),
            samples_per_curve: 64,
        }
    }
}
