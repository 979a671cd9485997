// Screen-fixed overlay: title, readout, corner brackets, radar minimap,
// pointer crosshair and the optional scanline banding.

use super::SceneView;
use crate::constants::*;
use crate::surface::{Paint, Rgba, Surface, TextAlign};
use glam::Vec2;

const BRACKET_INSET: f32 = 10.0;
const BRACKET_ARM: f32 = 20.0;
const CROSSHAIR_ARM: f32 = 12.0;
const RADAR_MARGIN: Vec2 = Vec2::new(70.0, 90.0);

pub fn draw_hud(surface: &mut impl Surface, view: &SceneView<'_>) {
    let accent = view.theme.accent;
    let b = view.bounds;

    surface.set_alpha(0.5);
    surface.fill_text(
        "VR CLASSROOM // ZONE A7",
        Vec2::new(20.0, 30.0),
        10.0,
        TextAlign::Start,
        accent,
    );
    surface.fill_text(
        &readout(view.theme.id.name(), view.time),
        Vec2::new(20.0, 48.0),
        10.0,
        TextAlign::Start,
        accent,
    );

    surface.set_alpha(0.3);
    surface.set_line_width(1.0);
    let (i, a) = (BRACKET_INSET, BRACKET_ARM + BRACKET_INSET);
    let brackets = [
        [Vec2::new(i, a), Vec2::new(i, i), Vec2::new(a, i)],
        [Vec2::new(b.x - a, i), Vec2::new(b.x - i, i), Vec2::new(b.x - i, a)],
        [Vec2::new(i, b.y - a), Vec2::new(i, b.y - i), Vec2::new(a, b.y - i)],
        [
            Vec2::new(b.x - a, b.y - i),
            Vec2::new(b.x - i, b.y - i),
            Vec2::new(b.x - i, b.y - a),
        ],
    ];
    for corner in &brackets {
        surface.stroke_polyline(corner, false, accent);
    }
    surface.set_alpha(1.0);

    draw_radar(surface, view);

    if let Some(p) = view.pointer_screen {
        surface.set_alpha(0.15);
        surface.set_line_width(0.5);
        let h = Paint::Solid(accent);
        surface.stroke_line(p - Vec2::X * CROSSHAIR_ARM, p + Vec2::X * CROSSHAIR_ARM, &h);
        surface.stroke_line(p - Vec2::Y * CROSSHAIR_ARM, p + Vec2::Y * CROSSHAIR_ARM, &h);
        surface.set_alpha(1.0);
    }
}

/// Second HUD line, e.g. `ENV: SPACE  |  T: 12.3s`.
pub fn readout(theme_name: &str, time: f32) -> String {
    format!("ENV: {}  |  T: {:.1}s", theme_name.to_ascii_uppercase(), time)
}

/// Minimap position of a scene point, relative to canvas bounds.
pub fn radar_blip(center: Vec2, point: Vec2, bounds: Vec2) -> Vec2 {
    let rel = point / bounds.max(Vec2::ONE) - Vec2::splat(0.5);
    center + rel * RADAR_RADIUS * 2.0 * 0.8
}

fn draw_radar(surface: &mut impl Surface, view: &SceneView<'_>) {
    let accent = view.theme.accent;
    let c = view.bounds - RADAR_MARGIN;
    let r = RADAR_RADIUS;

    surface.fill_circle(c, r, Rgba::new(0, 0, 0, 0.3));
    surface.set_alpha(0.2);
    surface.set_line_width(1.0);
    surface.stroke_circle(c, r, accent);

    surface.set_alpha(0.1);
    let solid = Paint::Solid(accent);
    surface.stroke_line(c - Vec2::X * r, c + Vec2::X * r, &solid);
    surface.stroke_line(c - Vec2::Y * r, c + Vec2::Y * r, &solid);

    let sweep = view.time * RADAR_SWEEP_PER_SEC;
    surface.set_alpha(0.4);
    surface.set_line_width(1.5);
    surface.stroke_line(c, c + Vec2::new(sweep.cos(), sweep.sin()) * r, &solid);

    surface.set_alpha(0.6);
    for o in view.objects {
        let blip = radar_blip(c, o.displayed_position(view.time), view.bounds);
        surface.fill_circle(blip, 1.5, o.color);
    }
    surface.set_alpha(1.0);
}

pub fn draw_scanlines(surface: &mut impl Surface, bounds: Vec2) {
    let band = Paint::Solid(Rgba::new(0, 0, 0, 0.03));
    let mut y = 0.0;
    while y < bounds.y {
        surface.fill_rect(Vec2::new(0.0, y), Vec2::new(bounds.x, 1.0), &band);
        y += SCANLINE_PITCH_PX;
    }
}
