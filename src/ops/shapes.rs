// ============================================================================
// SHAPES: a small drawing surface over an RGBA image
// ============================================================================
//
// Every primitive is rasterized from a signed distance field (negative =
// inside) with a one-pixel smoothstep for anti-aliasing, then blended
// source-over onto the target so translucent colors darken/tint what is
// already there.

use image::{Rgba, RgbaImage};
use rayon::prelude::*;

use super::composite::blend_over;

/// Axis-aligned bounding box `[x0, y0, x1, y1]` in canvas pixels.
pub type BBox = [f32; 4];

// ============================================================================
// SDF functions: return signed distance (negative = inside)
// ============================================================================

/// SDF for a box centred at origin with half-extents (hx, hy).
#[inline]
fn sdf_box(px: f32, py: f32, hx: f32, hy: f32) -> f32 {
    let dx = px.abs() - hx;
    let dy = py.abs() - hy;
    let outside = (dx.max(0.0) * dx.max(0.0) + dy.max(0.0) * dy.max(0.0)).sqrt();
    let inside = dx.max(dy).min(0.0);
    outside + inside
}

/// SDF for an ellipse (approximation).
#[inline]
fn sdf_ellipse(px: f32, py: f32, rx: f32, ry: f32) -> f32 {
    // Normalise point to circle space
    let nx = px / rx;
    let ny = py / ry;
    let len = (nx * nx + ny * ny).sqrt();
    if len < 1e-8 {
        return -rx.min(ry);
    }
    let scale = (rx * rx * ny * ny + ry * ry * nx * nx).sqrt() / (rx * ry * len);
    (len - 1.0) / scale
}

/// Unsigned distance to a line segment.
#[inline]
fn sdf_line_segment(px: f32, py: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let dx = bx - ax;
    let dy = by - ay;
    let len2 = dx * dx + dy * dy;
    let t = if len2 < 1e-12 {
        0.0
    } else {
        (((px - ax) * dx + (py - ay) * dy) / len2).clamp(0.0, 1.0)
    };
    let cx = ax + t * dx;
    let cy = ay + t * dy;
    ((px - cx) * (px - cx) + (py - cy) * (py - cy)).sqrt()
}

/// Smoothstep between edge0 and edge1.
#[inline]
fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Coverage of the filled interior for a signed distance `d`.
#[inline]
fn fill_coverage(d: f32) -> f32 {
    smoothstep(0.5, -0.5, d)
}

/// Coverage of an outline band lying just inside the shape edge.
#[inline]
fn inner_band_coverage(d: f32, width: f32) -> f32 {
    let half = width * 0.5;
    smoothstep(0.5, -0.5, (d + half).abs() - half)
}

/// Sort the corners so x0 <= x1 and y0 <= y1.
fn normalise(bbox: BBox) -> BBox {
    [
        bbox[0].min(bbox[2]),
        bbox[1].min(bbox[3]),
        bbox[0].max(bbox[2]),
        bbox[1].max(bbox[3]),
    ]
}

/// Mutable drawing handle bound to one image.
pub struct Draw<'a> {
    img: &'a mut RgbaImage,
    /// Ignore ink alpha, as drawing on an RGB canvas does.
    opaque_ink: bool,
}

impl<'a> Draw<'a> {
    pub fn new(img: &'a mut RgbaImage) -> Self {
        Self { img, opaque_ink: false }
    }

    /// Surface that treats the image as RGB: every color lands at full
    /// alpha, so `(0,0,0,80)` paints solid black.
    pub fn rgb(img: &'a mut RgbaImage) -> Self {
        Self { img, opaque_ink: true }
    }

    /// Ellipse inscribed in `bbox`. The outline is `width` pixels thick and
    /// sits inside the box; it is drawn over the fill.
    pub fn ellipse(&mut self, bbox: BBox, fill: Option<Rgba<u8>>, outline: Option<Rgba<u8>>, width: f32) {
        let [x0, y0, x1, y1] = normalise(bbox);
        let (cx, cy) = ((x0 + x1) * 0.5, (y0 + y1) * 0.5);
        let (rx, ry) = ((x1 - x0) * 0.5, (y1 - y0) * 0.5);
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let bounds = [x0, y0, x1, y1];
        if let Some(color) = fill {
            self.paint(bounds, color, |px, py| fill_coverage(sdf_ellipse(px - cx, py - cy, rx, ry)));
        }
        if let Some(color) = outline
            && width >= 1.0
        {
            self.paint(bounds, color, |px, py| {
                inner_band_coverage(sdf_ellipse(px - cx, py - cy, rx, ry), width)
            });
        }
    }

    /// Rectangle covering `bbox`, same fill/outline conventions as [`Draw::ellipse`].
    pub fn rectangle(&mut self, bbox: BBox, fill: Option<Rgba<u8>>, outline: Option<Rgba<u8>>, width: f32) {
        let [x0, y0, x1, y1] = normalise(bbox);
        let (cx, cy) = ((x0 + x1) * 0.5, (y0 + y1) * 0.5);
        let (hx, hy) = ((x1 - x0) * 0.5, (y1 - y0) * 0.5);
        let bounds = [x0, y0, x1, y1];
        if let Some(color) = fill {
            self.paint(bounds, color, |px, py| fill_coverage(sdf_box(px - cx, py - cy, hx, hy)));
        }
        if let Some(color) = outline
            && width >= 1.0
        {
            self.paint(bounds, color, |px, py| {
                inner_band_coverage(sdf_box(px - cx, py - cy, hx, hy), width)
            });
        }
    }

    /// Straight segment `width` pixels thick.
    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgba<u8>, width: f32) {
        if width < 1.0 {
            return;
        }
        let half = width * 0.5;
        let bounds = [
            from.0.min(to.0) - half,
            from.1.min(to.1) - half,
            from.0.max(to.0) + half,
            from.1.max(to.1) + half,
        ];
        self.paint(bounds, color, |px, py| {
            fill_coverage(sdf_line_segment(px, py, from.0, from.1, to.0, to.1) - half)
        });
    }

    /// Outline band of the ellipse in `bbox`, limited to angles between
    /// `start_deg` and `end_deg`. Angles run clockwise from 3 o'clock, so
    /// `0..180` is the lower half.
    pub fn arc(&mut self, bbox: BBox, start_deg: f32, end_deg: f32, color: Rgba<u8>, width: f32) {
        let [x0, y0, x1, y1] = normalise(bbox);
        let (cx, cy) = ((x0 + x1) * 0.5, (y0 + y1) * 0.5);
        let (rx, ry) = ((x1 - x0) * 0.5, (y1 - y0) * 0.5);
        if rx <= 0.0 || ry <= 0.0 || width < 1.0 {
            return;
        }
        let sweep = end_deg - start_deg;
        if sweep <= 0.0 {
            return;
        }
        let start = start_deg.rem_euclid(360.0);
        let end = start + sweep;

        self.paint([x0, y0, x1, y1], color, |px, py| {
            let (lx, ly) = (px - cx, py - cy);
            if sweep < 360.0 {
                let angle = ly.atan2(lx).to_degrees().rem_euclid(360.0);
                let inside = (angle >= start && angle <= end) || angle + 360.0 <= end;
                if !inside {
                    return 0.0;
                }
            }
            inner_band_coverage(sdf_ellipse(lx, ly, rx, ry), width)
        });
    }

    /// Blend `color` over every pixel in `bounds` (padded by one pixel for
    /// anti-aliasing) using the coverage returned for its center.
    fn paint(&mut self, bounds: BBox, color: Rgba<u8>, coverage: impl Fn(f32, f32) -> f32 + Sync) {
        let (w, h) = (self.img.width() as i64, self.img.height() as i64);
        let x0 = ((bounds[0] - 1.0).floor() as i64).max(0);
        let y0 = ((bounds[1] - 1.0).floor() as i64).max(0);
        let x1 = ((bounds[2] + 1.0).ceil() as i64).min(w);
        let y1 = ((bounds[3] + 1.0).ceil() as i64).min(h);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let color = if self.opaque_ink {
            Rgba([color[0], color[1], color[2], 255])
        } else {
            color
        };
        let stride = w as usize * 4;
        self.img
            .par_chunks_mut(stride)
            .enumerate()
            .skip(y0 as usize)
            .take((y1 - y0) as usize)
            .for_each(|(y, row)| {
                let py = y as f32 + 0.5;
                for x in x0 as usize..x1 as usize {
                    let cov = coverage(x as f32 + 0.5, py);
                    if cov > 0.001 {
                        blend_over(&mut row[x * 4..x * 4 + 4], color, cov);
                    }
                }
            });
    }
}
