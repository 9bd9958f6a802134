// ============================================================================
// COLOR HELPERS: hex parsing and the icon palette
// ============================================================================

use image::{Rgb, Rgba};
use std::fmt;

/// Dark brown-black canvas fill.
pub const BACKGROUND: Rgba<u8> = Rgba([20, 15, 10, 255]);
/// Glow layer colors: opaque warm center fading to a transparent gold edge.
pub const GLOW_CENTER: Rgba<u8> = Rgba([255, 200, 80, 255]);
pub const GLOW_EDGE: Rgba<u8> = Rgba([255, 180, 50, 0]);

// Gold palette used by the microphone illustration.
pub const GOLD_DARK: Rgba<u8> = Rgba([139, 90, 43, 255]);
pub const GOLD_MEDIUM: Rgba<u8> = Rgba([212, 175, 55, 255]);
pub const GOLD_LIGHT: Rgba<u8> = Rgba([255, 215, 0, 255]);
pub const GOLD_HIGHLIGHT: Rgba<u8> = Rgba([255, 255, 200, 255]);
pub const SHADOW: Rgba<u8> = Rgba([0, 0, 0, 80]);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorError {
    pub input: String,
    pub reason: &'static str,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid hex color {:?}: {}", self.input, self.reason)
    }
}

impl std::error::Error for ColorError {}

/// Parse `#RRGGBB` (leading `#`s are optional) into an RGB triple.
/// Characters after the sixth hex digit are ignored.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb<u8>, ColorError> {
    let err = |reason| ColorError { input: hex.to_string(), reason };
    let digits = hex.trim_start_matches('#');
    let bytes = digits.as_bytes();
    if bytes.len() < 6 {
        return Err(err("expected six hex digits"));
    }
    if !bytes[..6].iter().all(u8::is_ascii_hexdigit) {
        return Err(err("non-hex digit"));
    }

    let mut rgb = [0u8; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        let hi = hex_value(bytes[i * 2]);
        let lo = hex_value(bytes[i * 2 + 1]);
        *channel = hi << 4 | lo;
    }
    Ok(Rgb(rgb))
}

#[inline]
fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        _ => b - b'A' + 10,
    }
}

/// Opaque RGBA from an RGB triple.
pub fn opaque(rgb: Rgb<u8>) -> Rgba<u8> {
    Rgba([rgb[0], rgb[1], rgb[2], 255])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_hash() {
        assert_eq!(hex_to_rgb("#FF00AA"), Ok(Rgb([255, 0, 170])));
        assert_eq!(hex_to_rgb("##FF00AA"), Ok(Rgb([255, 0, 170])));
    }

    #[test]
    fn parses_hex_without_hash_and_lowercase() {
        assert_eq!(hex_to_rgb("d4af37"), Ok(Rgb([212, 175, 55])));
    }

    #[test]
    fn rejects_short_and_garbage_input() {
        assert!(hex_to_rgb("#FFF").is_err());
        assert!(hex_to_rgb("#GG0000").is_err());
        assert!(hex_to_rgb("").is_err());
    }

    #[test]
    fn opaque_sets_full_alpha() {
        assert_eq!(opaque(Rgb([1, 2, 3])), Rgba([1, 2, 3, 255]));
    }
}
