// ============================================================================
// GLOSS: translucent diagonal sheen, fading out toward the right edge
// ============================================================================

use image::{Rgba, RgbaImage};

use super::composite::composite_over;
use super::shapes::Draw;

/// Peak alpha of the leftmost sheen line.
const GLOSS_MAX_ALPHA: f32 = 30.0;
/// Horizontal spacing between sheen lines.
const GLOSS_STEP: usize = 4;

/// Build the sheen overlay on its own transparent layer.
pub fn gloss_overlay(width: u32, height: u32) -> RgbaImage {
    let mut overlay = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
    {
        let mut draw = Draw::new(&mut overlay);
        for i in (0..width).step_by(GLOSS_STEP) {
            let alpha = (GLOSS_MAX_ALPHA * (1.0 - i as f32 / width as f32)) as u8;
            if alpha == 0 {
                continue;
            }
            draw.line(
                (i as f32, 0.0),
                ((i + height) as f32, height as f32),
                Rgba([255, 255, 255, alpha]),
                1.0,
            );
        }
    }
    overlay
}

/// Composite the sheen onto a copy of `image`.
pub fn add_gloss_effect(image: &RgbaImage) -> RgbaImage {
    let overlay = gloss_overlay(image.width(), image.height());
    let mut result = image.clone();
    composite_over(&mut result, &overlay);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_alpha_fades_left_to_right() {
        let overlay = gloss_overlay(200, 100);
        // Sample just below the top of the first and of a late line.
        let left = overlay.get_pixel(0, 0)[3];
        let right = overlay.get_pixel(160, 0)[3];
        assert!(left > right, "left {} right {}", left, right);
        assert!(left <= 30);
    }

    #[test]
    fn gloss_lightens_but_keeps_size() {
        let img = RgbaImage::from_pixel(64, 64, Rgba([20, 15, 10, 255]));
        let out = add_gloss_effect(&img);
        assert_eq!(out.dimensions(), img.dimensions());
        assert!(out.get_pixel(10, 10)[0] >= 20);
        assert!(out.pixels().any(|p| p[0] > 20));
        assert!(out.pixels().all(|p| p[3] == 255));
    }
}
