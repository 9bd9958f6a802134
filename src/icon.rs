// ============================================================================
// ICON PIPELINE: compose the app icon and export every size
// ============================================================================

use image::{ImageError, RgbaImage};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::color::{BACKGROUND, GLOW_CENTER, GLOW_EDGE};
use crate::io::{PngLayout, encode_png, resize_square};
use crate::ops::composite::paste_with_alpha;
use crate::ops::filters::gaussian_blur;
use crate::ops::gloss::add_gloss_effect;
use crate::ops::gradient::{DEFAULT_CENTER_OFFSET, create_radial_gradient};
use crate::ops::microphone::draw_microphone_shiny;
use crate::ops::shapes::Draw;
use crate::{log_err, log_info, log_warn};

pub const DEFAULT_CANVAS_SIZE: u32 = 1024;
pub const DEFAULT_BASE_NAME: &str = "AppIcon";
pub const DEFAULT_SIZES: [u32; 6] = [16, 32, 64, 128, 256, 512];
pub const DEFAULT_BLUR_SIGMA: f32 = 30.0;
pub const DEFAULT_GLOW_LAYERS: u32 = 5;

/// Largest glow layer as a fraction of the canvas; each further layer
/// shrinks by `GLOW_SHRINK`.
const GLOW_START: f64 = 0.6;
const GLOW_SHRINK: f64 = 0.1;

#[derive(Clone, Debug)]
pub struct IconConfig {
    pub canvas_size: u32,
    pub output_dir: PathBuf,
    pub base_name: String,
    pub sizes: Vec<u32>,
    pub blur_sigma: f32,
    pub glow_layers: u32,
    /// Apply the diagonal sheen overlay. Off in the stock pipeline.
    pub gloss: bool,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
            output_dir: PathBuf::from("."),
            base_name: DEFAULT_BASE_NAME.to_string(),
            sizes: DEFAULT_SIZES.to_vec(),
            blur_sigma: DEFAULT_BLUR_SIGMA,
            glow_layers: DEFAULT_GLOW_LAYERS,
            gloss: false,
        }
    }
}

impl IconConfig {
    pub fn master_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.png", self.base_name))
    }

    pub fn sized_path(&self, size: u32) -> PathBuf {
        self.output_dir
            .join(format!("{}_{}x{}.png", self.base_name, size, size))
    }
}

#[derive(Debug)]
pub enum IconError {
    Io { path: PathBuf, source: std::io::Error },
    Image { path: PathBuf, source: ImageError },
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            IconError::Image { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for IconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IconError::Io { source, .. } => Some(source),
            IconError::Image { source, .. } => Some(source),
        }
    }
}

/// Files written by one [`generate`] run, master first.
#[derive(Debug, Default)]
pub struct IconReport {
    pub written: Vec<PathBuf>,
}

/// Side length of glow layer `i`, truncated like the canvas math it mirrors.
pub fn glow_size(canvas: u32, i: u32) -> i64 {
    (canvas as f64 * (GLOW_START - i as f64 * GLOW_SHRINK)) as i64
}

/// Build the full-resolution icon in memory.
pub fn compose(config: &IconConfig) -> RgbaImage {
    let size = config.canvas_size;
    let mut background = RgbaImage::from_pixel(size, size, BACKGROUND);

    for i in 0..config.glow_layers {
        let glow = glow_size(size, i);
        if glow <= 0 {
            continue;
        }
        let offset = (size as i64 - glow).div_euclid(2);
        let layer = create_radial_gradient(
            glow as u32,
            glow as u32,
            GLOW_CENTER,
            GLOW_EDGE,
            DEFAULT_CENTER_OFFSET,
        );
        let layer = gaussian_blur(&layer, config.blur_sigma);
        paste_with_alpha(&mut background, &layer, offset, offset);
        log_info!("glow layer {} ({}px) at offset {}", i, glow, offset);
    }

    {
        let mut draw = Draw::rgb(&mut background);
        let center = size as f32 / 2.0;
        draw_microphone_shiny(&mut draw, center, center, 1.0);
    }

    if config.gloss {
        log_info!("applying gloss overlay");
        background = add_gloss_effect(&background);
    }

    background
}

/// Compose the icon, then write the master PNG and one PNG per size.
///
/// Stops at the first failure; files already written stay on disk.
/// `on_written` is called after each file lands.
pub fn generate(config: &IconConfig, mut on_written: impl FnMut(&Path)) -> Result<IconReport, IconError> {
    let mut report = IconReport::default();

    std::fs::create_dir_all(&config.output_dir).map_err(|source| IconError::Io {
        path: config.output_dir.clone(),
        source,
    })?;

    let icon = compose(config);

    let master = config.master_path();
    save(&icon, &master)?;
    on_written(master.as_path());
    report.written.push(master);

    for &s in &config.sizes {
        if s == 0 {
            log_warn!("skipping zero icon size");
            continue;
        }
        let resized = resize_square(&icon, s);
        let path = config.sized_path(s);
        save(&resized, &path)?;
        on_written(path.as_path());
        report.written.push(path);
    }

    Ok(report)
}

fn save(img: &RgbaImage, path: &Path) -> Result<(), IconError> {
    encode_png(img, path, PngLayout::Rgb).map_err(|source| {
        log_err!("failed to write {}: {}", path.display(), source);
        IconError::Image {
            path: path.to_path_buf(),
            source,
        }
    })?;
    log_info!("wrote {} ({}x{})", path.display(), img.width(), img.height());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glow_sizes_shrink_by_a_tenth_of_the_canvas() {
        let sizes: Vec<i64> = (0..5).map(|i| glow_size(1024, i)).collect();
        assert_eq!(sizes, vec![614, 512, 409, 307, 204]);
        assert!(glow_size(1024, 6) <= 0);
    }

    #[test]
    fn default_paths_follow_naming_scheme() {
        let cfg = IconConfig::default();
        assert_eq!(cfg.master_path(), PathBuf::from("./AppIcon.png"));
        assert_eq!(cfg.sized_path(32), PathBuf::from("./AppIcon_32x32.png"));
    }

    #[test]
    fn composed_icon_is_opaque_with_glowing_center() {
        let icon = compose(&IconConfig::default());
        assert_eq!(icon.dimensions(), (1024, 1024));
        assert!(icon.pixels().all(|p| p[3] == 255));
        // Corners stay the plain background; the glow warms the area beside the mic.
        assert_eq!(*icon.get_pixel(0, 0), BACKGROUND);
        let beside_mic = icon.get_pixel(300, 400);
        assert!(beside_mic[0] > BACKGROUND[0]);
    }
}
