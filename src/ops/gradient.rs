// ============================================================================
// GRADIENTS: radial and linear ramps built from intensity masks
// ============================================================================

use image::{GrayImage, Rgba, RgbaImage};
use rayon::prelude::*;

use super::composite::fill_masked;

/// Center of the canvas, as a fraction of width/height.
pub const DEFAULT_CENTER_OFFSET: (f64, f64) = (0.5, 0.5);

/// Exponent of the radial falloff; < 1 keeps the core bright for longer.
const RADIAL_FALLOFF: f64 = 0.7;

/// Axis a linear gradient runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Vertical,
    Horizontal,
}

impl Direction {
    /// Exactly `"vertical"` selects [`Direction::Vertical`]; anything else,
    /// other casings included, silently falls back to horizontal.
    pub fn parse(s: &str) -> Self {
        if s == "vertical" {
            Direction::Vertical
        } else {
            Direction::Horizontal
        }
    }
}

/// Radial intensity mask: 255 at the center point, falling off with
/// `1 - (dist / max_dist)^0.7` and saturating to 0 past `max_dist`, where
/// `max_dist` is the half-diagonal of the canvas.
pub fn radial_mask(width: u32, height: u32, center_offset: (f64, f64)) -> GrayImage {
    let mut mask = GrayImage::new(width, height);
    if width == 0 || height == 0 {
        return mask;
    }

    let w = width as f64;
    let h = height as f64;
    let cx = center_offset.0 * w;
    let cy = center_offset.1 * h;
    let max_dist = ((w * 0.5).powi(2) + (h * 0.5).powi(2)).sqrt();

    mask.par_chunks_mut(width as usize).enumerate().for_each(|(y, row)| {
        let dy = y as f64 - cy;
        for (x, v) in row.iter_mut().enumerate() {
            let dx = x as f64 - cx;
            let dist = (dx * dx + dy * dy).sqrt();
            let factor = (1.0 - (dist / max_dist).powf(RADIAL_FALLOFF)).max(0.0);
            *v = (255.0 * factor) as u8;
        }
    });
    mask
}

/// Linear ramp mask: `255 * y / height` (vertical) or `255 * x / width`.
pub fn linear_mask(width: u32, height: u32, direction: Direction) -> GrayImage {
    let mut mask = GrayImage::new(width, height);
    if width == 0 || height == 0 {
        return mask;
    }

    mask.par_chunks_mut(width as usize).enumerate().for_each(|(y, row)| {
        for (x, v) in row.iter_mut().enumerate() {
            let factor = match direction {
                Direction::Vertical => y as f64 / height as f64,
                Direction::Horizontal => x as f64 / width as f64,
            };
            *v = (255.0 * factor) as u8;
        }
    });
    mask
}

/// Radial gradient from `center_color` at `center_offset` to `edge_color`.
///
/// All four channels blend, so a transparent `edge_color` produces a layer
/// whose own alpha can serve as its paste mask.
pub fn create_radial_gradient(
    width: u32,
    height: u32,
    center_color: Rgba<u8>,
    edge_color: Rgba<u8>,
    center_offset: (f64, f64),
) -> RgbaImage {
    let mut out = RgbaImage::from_pixel(width, height, edge_color);
    let mask = radial_mask(width, height, center_offset);
    fill_masked(&mut out, center_color, &mask);
    out
}

/// Linear gradient: `end_color` pasted over `start_color` through a ramp.
pub fn create_linear_gradient(
    width: u32,
    height: u32,
    start_color: Rgba<u8>,
    end_color: Rgba<u8>,
    direction: Direction,
) -> RgbaImage {
    let mut out = RgbaImage::from_pixel(width, height, start_color);
    let mask = linear_mask(width, height, direction);
    fill_masked(&mut out, end_color, &mask);
    out
}
