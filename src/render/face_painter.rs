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

use tracing::{debug, instrument};

use crate::arrangement::{Arrangement, FICTITIOUS_FACE};
use crate::geometry::{Bbox2, Point2};
use crate::query::LocateResult;
use crate::render::{FillConfig, FloodFill, Painter, PixelBuffer, Rgba, ViewTransform, ViewportConfig};
use crate::traits::{ArrTraits, BoundaryCategory, CurveEnd, CurveFamily};

/// Paints every face as a polygon in its colour, enclosing faces before the
/// faces in their holes. Bounded faces use their outer boundary; unbounded
/// faces of linear arrangements are clipped to the viewport, other
/// unbounded faces cover the whole viewport.
///
/// Only for families whose faces have polygon boundaries.
pub fn paint_faces<Tr: ArrTraits, P: Painter>(arr: &mut Arrangement<Tr>, painter: &mut P, viewport: &ViewportConfig) {
    assert!(
        Tr::FAMILY.has_polygon_faces(),
        "{:?} faces have no polygon boundary; paint them by flood fill",
        Tr::FAMILY
    );
    arr.visit_connected_faces(FICTITIOUS_FACE, |arr, f| {
        let face = arr.face(f);
        if face.fictitious {
            return;
        }
        if !face.is_unbounded() {
            painter.fill_polygon(&arr.traverse_outer_boundary(f), face.color);
        } else if Tr::FAMILY == CurveFamily::Linear {
            painter.fill_polygon(&arr.unbounded_face_boundary(f, &viewport.rect), face.color);
        } else {
            painter.fill_rect(&viewport.rect, face.color);
        }
    });
}

/// Rasterizes every curve into `buf`. Curve ends at infinity are extended
/// along the supporting line past the scene rectangle the buffer shows.
pub fn paint_edges<Tr: ArrTraits, V: ViewTransform>(
    arr: &Arrangement<Tr>,
    buf: &mut PixelBuffer,
    view: &V,
    color: Rgba,
    samples: usize,
) {
    let rect = view.scene_rect(buf.width(), buf.height());
    for c in arr.curves() {
        let device: Vec<Point2> = edge_points(arr.traits(), c, &rect, samples)
            .iter()
            .map(|p| view.to_device(p))
            .collect();
        buf.draw_polyline(&device, color);
    }
}

fn edge_points<Tr: ArrTraits>(tr: &Tr, c: &Tr::XCurve, rect: &Bbox2, samples: usize) -> Vec<Point2> {
    let mut pts = tr.sample(c, samples);
    if Tr::BOUNDARY != BoundaryCategory::Unbounded {
        return pts;
    }
    let min_open = !tr.is_bounded(c, CurveEnd::Min);
    let max_open = !tr.is_bounded(c, CurveEnd::Max);
    if !(min_open || max_open) {
        return pts;
    }
    let Some(line) = tr.supporting_line(c) else {
        return pts;
    };
    let norm = line.dx.hypot(line.dy);
    let (ux, uy) = (line.dx / norm, line.dy / norm);
    let center = rect.center();
    let anchor = if line.is_mostly_horizontal() {
        Point2::new(center.x, line.y_at_x(center.x))
    } else {
        Point2::new(line.x_at_y(center.y), center.y)
    };
    let reach = |from: &Point2| (from.x - center.x).hypot(from.y - center.y) + rect.width() + rect.height();
    let (first, last) = (pts.first().copied().unwrap_or(anchor), pts.last().copied().unwrap_or(anchor));
    if min_open {
        let d = reach(&first);
        pts.insert(0, Point2::new(first.x - ux * d, first.y - uy * d));
    }
    if max_open {
        let d = reach(&last);
        pts.push(Point2::new(last.x + ux * d, last.y + uy * d));
    }
    pts
}

/// Paints faces whose boundaries are not polygons: frames the buffer,
/// rasterizes the edges, then seeds a flood fill at every pixel whose guard
/// block is still unpainted, in the colour of the face found there. The
/// finished buffer is handed to `painter`. Returns the number of fills.
#[instrument(skip_all, fields(width = buf.width(), height = buf.height()))]
pub fn paint_with_flood_fill<Tr: ArrTraits, V: ViewTransform, P: Painter>(
    arr: &Arrangement<Tr>,
    painter: &mut P,
    view: &V,
    buf: &mut PixelBuffer,
    config: &FillConfig,
    samples: usize,
) -> usize {
    buf.fill(Rgba::INVALID);
    buf.draw_frame(config.margin, config.border_color);
    paint_edges(arr, buf, view, config.edge_color, samples);

    let (w, h) = (buf.width(), buf.height());
    let guard = config.guard_radius;
    let inset = config.margin + guard;
    let mut flood = FloodFill::new();
    let mut seeds = 0;
    for y in inset..h.saturating_sub(inset + 1) {
        for x in inset..w.saturating_sub(inset + 1) {
            if !buf.is_clear_around(x, y, guard) {
                continue;
            }
            let scene = view.to_scene(&Point2::new(x as f64, y as f64));
            let face = match arr.locate(&arr.traits().from_point2(scene)) {
                LocateResult::Face(f) => f,
                LocateResult::Halfedge(e) => arr.incident_face(e),
                LocateResult::Vertex(_) => continue,
            };
            let color = arr.face(face).color;
            if !color.is_valid() {
                continue;
            }
            flood.fill(buf, x, y, color);
            seeds += 1;
        }
    }
    debug!(seeds, "flood fill done");
    painter.draw_image(buf);
    seeds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::AffineView;
    use crate::traits::{Segment2, SegmentTraits};

    #[derive(Default)]
    struct Recorder {
        polygons: Vec<(Vec<Point2>, Rgba)>,
        rects: Vec<Rgba>,
        images: usize,
    }

    impl Painter for Recorder {
        fn fill_polygon(&mut self, points: &[Point2], color: Rgba) {
            self.polygons.push((points.to_vec(), color));
        }
        fn fill_rect(&mut self, _rect: &Bbox2, color: Rgba) {
            self.rects.push(color);
        }
        fn draw_image(&mut self, _image: &PixelBuffer) {
            self.images += 1;
        }
    }

    const RED: Rgba = Rgba::rgb(255, 0, 0);
    const GREEN: Rgba = Rgba::rgb(0, 255, 0);

    fn colored_square() -> Arrangement<SegmentTraits> {
        let p = [(-5.0, -5.0), (5.0, -5.0), (5.0, 5.0), (-5.0, 5.0)];
        let curves = (0..4)
            .map(|i| {
                let (a, b) = (p[i], p[(i + 1) % 4]);
                Segment2::from_coords(a.0, a.1, b.0, b.1)
            })
            .collect();
        let mut arr = Arrangement::from_curves(SegmentTraits::new(), curves, Vec::new()).unwrap();
        let faces: Vec<usize> = arr.face_indices().collect();
        for f in faces {
            let c = if arr.face(f).is_unbounded() { GREEN } else { RED };
            arr.set_face_color(f, c);
        }
        arr
    }

    #[test]
    fn outer_face_painted_before_inner() {
        let mut arr = colored_square();
        let mut rec = Recorder::default();
        paint_faces(&mut arr, &mut rec, &ViewportConfig::default());
        assert_eq!(rec.rects, vec![GREEN]);
        assert_eq!(rec.polygons.len(), 1);
        assert_eq!(rec.polygons[0].0.len(), 4);
        assert_eq!(rec.polygons[0].1, RED);
    }

    #[test]
    fn flood_fill_colors_each_face() {
        let arr = colored_square();
        let view = AffineView::fit(&Bbox2::new(-10.0, -10.0, 10.0, 10.0), 40, 40);
        let mut buf = PixelBuffer::new(40, 40).unwrap();
        let mut rec = Recorder::default();
        let seeds = paint_with_flood_fill(&arr, &mut rec, &view, &mut buf, &FillConfig::default(), 8);
        assert_eq!(seeds, 2);
        assert_eq!(rec.images, 1);
        assert_eq!(buf.get(0, 0), Rgba::WHITE);
        assert_eq!(buf.get(20, 20), RED);
        assert_eq!(buf.get(5, 5), GREEN);
        assert_eq!(buf.get(10, 20), Rgba::BLUE);
        assert!(buf.pixels().iter().all(|c| c.is_valid()));
    }
}
