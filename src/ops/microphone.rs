// ============================================================================
// MICROPHONE ILLUSTRATION: gold studio mic with mesh, U-stand and base
// ============================================================================

use crate::color::{GOLD_DARK, GOLD_HIGHLIGHT, GOLD_LIGHT, GOLD_MEDIUM, SHADOW};
use crate::ops::shapes::Draw;

/// Mesh lines drawn across the body in each direction.
const MESH_LINES: u32 = 5;

/// Draw the shiny gold microphone anchored at `(center_x, center_y)`.
///
/// `scale` is accepted for API symmetry but currently has no effect: the
/// illustration is always drawn at 1.0, sized for a 1024px canvas.
pub fn draw_microphone_shiny(draw: &mut Draw<'_>, center_x: f32, center_y: f32, scale: f32) {
    let _ = scale;
    let scale = 1.0_f32;
    // Stroke widths are whole pixels.
    let stroke = |w: f32| (w * scale).trunc();

    // ===== Body =====
    let body_w = 220.0 * scale;
    let body_h = 380.0 * scale;
    let body_x = center_x - body_w / 2.0;
    let body_y = center_y - body_h / 2.0 - 80.0 * scale;

    let shadow_offset = 10.0 * scale;
    draw.ellipse(
        [
            body_x + shadow_offset,
            body_y + shadow_offset,
            body_x + body_w + shadow_offset,
            body_y + body_h + shadow_offset,
        ],
        Some(SHADOW),
        None,
        0.0,
    );

    // Top cap
    draw.ellipse(
        [body_x, body_y, body_x + body_w, body_y + body_h * 0.25],
        Some(GOLD_LIGHT),
        Some(GOLD_DARK),
        stroke(8.0),
    );
    // Bottom cap
    draw.ellipse(
        [body_x, body_y + body_h * 0.75, body_x + body_w, body_y + body_h],
        Some(GOLD_DARK),
        Some(GOLD_DARK),
        stroke(8.0),
    );
    // Barrel
    draw.rectangle(
        [body_x, body_y + body_h * 0.125, body_x + body_w, body_y + body_h * 0.875],
        Some(GOLD_MEDIUM),
        None,
        0.0,
    );

    // Highlight
    draw.line(
        (body_x + 20.0 * scale, body_y + 30.0 * scale),
        (body_x + body_w - 20.0 * scale, body_y + 30.0 * scale),
        GOLD_HIGHLIGHT,
        stroke(6.0),
    );

    // Mesh grille
    let mesh_step_y = body_h * 0.55 / (MESH_LINES + 1) as f32;
    for i in 1..=MESH_LINES {
        let y = body_y + body_h * 0.2 + mesh_step_y * i as f32;
        draw.line(
            (body_x + 15.0 * scale, y),
            (body_x + body_w - 15.0 * scale, y),
            GOLD_DARK,
            stroke(3.0),
        );
    }
    let mesh_step_x = body_w * 0.7 / (MESH_LINES + 1) as f32;
    for i in 1..=MESH_LINES {
        let x = body_x + body_w * 0.15 + mesh_step_x * i as f32;
        draw.line(
            (x, body_y + body_h * 0.2),
            (x, body_y + body_h * 0.75),
            GOLD_DARK,
            stroke(3.0),
        );
    }

    // ===== Stand =====
    let stand_w = 140.0 * scale;
    let stand_h = 120.0 * scale;
    let stand_x = center_x - stand_w / 2.0;
    let stand_y = body_y + body_h;

    // U-shaped cradle
    draw.arc(
        [
            stand_x - 20.0 * scale,
            stand_y,
            stand_x + stand_w + 20.0 * scale,
            stand_y + stand_h * 2.0,
        ],
        0.0,
        180.0,
        GOLD_MEDIUM,
        stroke(20.0),
    );

    // Crossbar
    draw.rectangle(
        [
            center_x - 60.0 * scale,
            stand_y + stand_h * 0.8,
            center_x + 60.0 * scale,
            stand_y + stand_h,
        ],
        Some(GOLD_MEDIUM),
        Some(GOLD_DARK),
        stroke(4.0),
    );

    // ===== Base =====
    let base_w = 200.0 * scale;
    let base_h = 30.0 * scale;
    let base_x = center_x - base_w / 2.0;
    let base_y = stand_y + stand_h * 1.5;

    draw.ellipse(
        [base_x, base_y, base_x + base_w, base_y + base_h],
        Some(GOLD_DARK),
        Some(GOLD_MEDIUM),
        stroke(4.0),
    );

    // Decorative ring
    draw.ellipse(
        [
            base_x + 20.0 * scale,
            base_y + 5.0 * scale,
            base_x + base_w - 20.0 * scale,
            base_y + base_h - 5.0 * scale,
        ],
        None,
        Some(GOLD_LIGHT),
        stroke(2.0),
    );
}
