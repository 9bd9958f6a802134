// ============================================================================
// COMPOSITING: mask-driven blending of layers onto a base image
// ============================================================================

use image::{GrayImage, Rgba, RgbaImage};
use rayon::prelude::*;

/// `(top * m + base * (255 - m)) / 255`, rounded.
#[inline]
pub(crate) fn mix(base: u8, top: u8, m: u8) -> u8 {
    let m = m as u32;
    ((top as u32 * m + base as u32 * (255 - m) + 127) / 255) as u8
}

/// Straight-alpha source-over of `color` at `coverage` onto one pixel.
#[inline]
pub(crate) fn blend_over(dst: &mut [u8], color: Rgba<u8>, coverage: f32) {
    let sa = color[3] as f32 / 255.0 * coverage;
    if sa <= 0.001 {
        return;
    }
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    for c in 0..3 {
        let v = (color[c] as f32 * sa + dst[c] as f32 * da * (1.0 - sa)) / out_a;
        dst[c] = v.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
}

/// Blend a flat color into `base` with per-pixel opacity taken from `mask`.
/// All four channels are blended. `mask` must match `base` in size.
pub fn fill_masked(base: &mut RgbaImage, color: Rgba<u8>, mask: &GrayImage) {
    debug_assert_eq!(base.dimensions(), mask.dimensions());
    let w = base.width() as usize;
    if w == 0 || base.height() == 0 {
        return;
    }
    let mask_raw = mask.as_raw();

    base.par_chunks_mut(w * 4).enumerate().for_each(|(y, row)| {
        let mask_row = &mask_raw[y * w..(y + 1) * w];
        for (px, &m) in row.chunks_exact_mut(4).zip(mask_row) {
            for c in 0..4 {
                px[c] = mix(px[c], color[c], m);
            }
        }
    });
}

/// Blend the color of `layer` into `base` at `(x, y)` using `mask` (same size
/// as `layer`) for opacity. The base alpha is left as is, so an opaque base
/// stays opaque. Pixels falling outside `base` are clipped.
pub fn paste_masked(base: &mut RgbaImage, layer: &RgbaImage, x: i64, y: i64, mask: &GrayImage) {
    debug_assert_eq!(layer.dimensions(), mask.dimensions());
    let (bw, bh) = (base.width() as i64, base.height() as i64);
    let (lw, lh) = (layer.width() as i64, layer.height() as i64);

    // Clip the layer rect against the base.
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + lw).min(bw);
    let y1 = (y + lh).min(bh);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    let stride = bw as usize * 4;
    let layer_raw = layer.as_raw();
    let mask_raw = mask.as_raw();

    base.par_chunks_mut(stride)
        .enumerate()
        .skip(y0 as usize)
        .take((y1 - y0) as usize)
        .for_each(|(by, row)| {
            let ly = (by as i64 - y) as usize;
            for bx in x0..x1 {
                let lx = (bx - x) as usize;
                let m = mask_raw[ly * lw as usize + lx];
                if m == 0 {
                    continue;
                }
                let src = (ly * lw as usize + lx) * 4;
                let dst = bx as usize * 4;
                for c in 0..3 {
                    row[dst + c] = mix(row[dst + c], layer_raw[src + c], m);
                }
            }
        });
}

/// Paste `layer` using its own alpha channel as the transparency mask.
pub fn paste_with_alpha(base: &mut RgbaImage, layer: &RgbaImage, x: i64, y: i64) {
    let alpha = alpha_channel(layer);
    paste_masked(base, layer, x, y, &alpha);
}

/// Source-over composite of `layer` onto `base` at the origin. Unlike
/// [`paste_with_alpha`], the base alpha is never reduced.
pub fn composite_over(base: &mut RgbaImage, layer: &RgbaImage) {
    let w = base.width().min(layer.width()) as usize;
    let h = base.height().min(layer.height()) as usize;
    if w == 0 || h == 0 {
        return;
    }
    let base_stride = base.width() as usize * 4;
    let layer_stride = layer.width() as usize * 4;
    let layer_raw = layer.as_raw();

    base.par_chunks_mut(base_stride).take(h).enumerate().for_each(|(y, row)| {
        let src_row = &layer_raw[y * layer_stride..y * layer_stride + w * 4];
        for (x, src) in src_row.chunks_exact(4).enumerate() {
            if src[3] == 0 {
                continue;
            }
            let color = Rgba([src[0], src[1], src[2], src[3]]);
            blend_over(&mut row[x * 4..x * 4 + 4], color, 1.0);
        }
    });
}

/// Extract the alpha channel as a single-channel mask.
pub fn alpha_channel(img: &RgbaImage) -> GrayImage {
    let raw: Vec<u8> = img.as_raw().chunks_exact(4).map(|px| px[3]).collect();
    GrayImage::from_raw(img.width(), img.height(), raw)
        .unwrap_or_else(|| GrayImage::new(img.width(), img.height()))
}
