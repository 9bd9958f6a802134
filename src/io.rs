use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::{self, FilterType};
use image::{ColorType, DynamicImage, ImageEncoder, ImageError, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

// ============================================================================
// PNG OUTPUT
// ============================================================================

/// Channel layout written to disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PngLayout {
    /// Alpha dropped; for fully opaque artwork.
    Rgb,
    Rgba,
}

/// Encode `image` as PNG at `path` with maximum compression.
pub fn encode_png(image: &RgbaImage, path: &Path, layout: PngLayout) -> Result<(), ImageError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(&mut writer, CompressionType::Best, PngFilter::Adaptive);

    match layout {
        PngLayout::Rgb => {
            let rgb_image = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
            encoder.write_image(
                rgb_image.as_raw(),
                rgb_image.width(),
                rgb_image.height(),
                ColorType::Rgb8,
            )?;
        }
        PngLayout::Rgba => {
            encoder.write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)?;
        }
    }

    Ok(())
}

/// High-quality square downscale (Lanczos3).
pub fn resize_square(image: &RgbaImage, size: u32) -> RgbaImage {
    imageops::resize(image, size, size, FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn rgb_png_round_trips_dimensions_and_color() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flat.png");
        let img = RgbaImage::from_pixel(7, 5, Rgba([20, 15, 10, 255]));
        encode_png(&img, &path, PngLayout::Rgb).unwrap();

        let back = image::open(&path).unwrap();
        assert_eq!(back.color(), ColorType::Rgb8);
        let back = back.to_rgba8();
        assert_eq!(back.dimensions(), (7, 5));
        assert_eq!(*back.get_pixel(3, 2), Rgba([20, 15, 10, 255]));
    }

    #[test]
    fn resize_square_hits_exact_size() {
        let img = RgbaImage::from_pixel(100, 100, Rgba([1, 2, 3, 255]));
        assert_eq!(resize_square(&img, 16).dimensions(), (16, 16));
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("x.png");
        let img = RgbaImage::new(2, 2);
        assert!(matches!(encode_png(&img, &path, PngLayout::Rgba), Err(ImageError::IoError(_))));
    }
}
