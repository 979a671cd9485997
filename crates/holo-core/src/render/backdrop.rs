// Layers behind the objects: theme gradient, per-environment decoration,
// transition flash, perspective grid and data streams.

use super::SceneView;
use crate::constants::THEME_FLASH_ALPHA;
use crate::scene::{DataStream, Nebula};
use crate::surface::{Gradient, Paint, Rgba, Surface};
use crate::theme::ThemeId;
use glam::Vec2;

const STAR_COUNT: usize = 60;
const CAUSTIC_RAYS: usize = 8;
const BUBBLES: usize = 15;
const BONDS: usize = 20;
const GRID_ROWS: usize = 15;
const GRID_RAYS: i32 = 8;
const HORIZON: f32 = 0.35;

/// Stable pseudo-random in [0, 1] from an index, for layouts that must not
/// change between frames.
#[inline]
fn hash01(i: f32, a: f32, b: f32) -> f32 {
    (i * a + b).sin() * 0.5 + 0.5
}

pub fn draw_background(surface: &mut impl Surface, view: &SceneView<'_>) {
    let b = view.bounds;
    let bg = Gradient::radial(
        b * 0.5,
        b.x * 0.7,
        &[
            (0.0, view.theme.background_inner),
            (1.0, view.theme.background_outer),
        ],
    );
    surface.fill_rect(Vec2::ZERO, b, &bg.into());
}

pub fn draw_environment(surface: &mut impl Surface, view: &SceneView<'_>) {
    match view.theme.id {
        ThemeId::Classroom => {}
        ThemeId::Space => {
            draw_stars(surface, view.bounds, view.time);
            draw_nebulae(surface, view.nebulae);
        }
        ThemeId::Ocean => draw_ocean(surface, view.bounds, view.time),
        ThemeId::Molecular => draw_bonds(surface, view.bounds, view.time),
    }
}

fn draw_stars(surface: &mut impl Surface, b: Vec2, t: f32) {
    for i in 0..STAR_COUNT {
        let fi = i as f32;
        let p = Vec2::new(hash01(fi, 127.1, 311.7) * b.x, hash01(fi, 269.5, 183.3) * b.y);
        let twinkle = (t * 2.0 + fi).sin() * 0.3 + 0.7;
        surface.set_alpha(twinkle * 0.6);
        surface.fill_circle(p, 0.5 + fi.sin() * 0.5, Rgba::WHITE);
    }
    surface.set_alpha(1.0);
}

fn draw_nebulae(surface: &mut impl Surface, nebulae: &[Nebula]) {
    for n in nebulae {
        let glow = Gradient::radial(
            n.center,
            n.radius,
            &[(0.0, n.color), (1.0, Rgba::TRANSPARENT)],
        );
        surface.fill_rect(
            n.center - Vec2::splat(n.radius),
            Vec2::splat(n.radius * 2.0),
            &glow.into(),
        );
    }
}

fn draw_ocean(surface: &mut impl Surface, b: Vec2, t: f32) {
    let ray = Rgba::new(0, 180, 200, 0.04);
    for i in 0..CAUSTIC_RAYS {
        let fi = i as f32;
        let x = b.x * (0.1 + (fi / CAUSTIC_RAYS as f32) * 0.8) + (t * 0.3 + fi * 2.0).sin() * 30.0;
        let g = Gradient::linear(
            Vec2::new(x, 0.0),
            Vec2::new(x + 20.0, b.y),
            &[
                (0.0, ray),
                (0.5, ray.with_alpha(0.01)),
                (1.0, Rgba::TRANSPARENT),
            ],
        );
        surface.fill_rect(Vec2::new(x - 15.0, 0.0), Vec2::new(30.0, b.y), &g.into());
    }
    surface.set_line_width(0.5);
    for i in 0..BUBBLES {
        let fi = i as f32;
        let bx = hash01(fi, 73.1, 127.7) * b.x;
        let rise = (t * 0.05 * (1.0 + fi * 0.1) + hash01(fi, 45.3, 0.0)).rem_euclid(1.0) * b.y;
        surface.stroke_circle(
            Vec2::new(bx, b.y - rise),
            2.0 + (i % 4) as f32,
            Rgba::new(0, 200, 220, 0.15),
        );
    }
}

fn draw_bonds(surface: &mut impl Surface, b: Vec2, t: f32) {
    let bond = Rgba::new(0, 255, 136, 0.04);
    let atom = Rgba::new(0, 255, 136, 0.08);
    surface.set_line_width(1.0);
    for i in 0..BONDS {
        let fi = i as f32;
        let a = Vec2::new(
            hash01(fi, 57.3, 91.1) * b.x,
            ((fi * 43.7 + 127.3).cos() * 0.5 + 0.5) * b.y,
        );
        let phase = t * 0.5 + fi;
        let end = a + Vec2::new(phase.cos(), phase.sin()) * 60.0;
        surface.stroke_line(a, end, &Paint::Solid(bond));
        surface.fill_circle(a, 4.0, atom);
        surface.fill_circle(end, 3.0, atom);
    }
}

pub fn draw_transition_flash(surface: &mut impl Surface, bounds: Vec2, intensity: f32) {
    if intensity > 0.0 {
        let flash = Rgba::WHITE.with_alpha(intensity * THEME_FLASH_ALPHA);
        surface.fill_rect(Vec2::ZERO, bounds, &flash.into());
    }
}

pub fn draw_grid(surface: &mut impl Surface, view: &SceneView<'_>) {
    let b = view.bounds;
    let cx = b.x / 2.0;
    let horizon = b.y * HORIZON;
    let grid = Paint::Solid(view.theme.grid);
    surface.set_line_width(0.5);

    for i in 0..=GRID_ROWS {
        let t = i as f32 / GRID_ROWS as f32;
        let y = horizon + (b.y - horizon) * t;
        let spread = (1.0 - t * 0.3) * b.x * 0.6;
        surface.stroke_line(Vec2::new(cx - spread, y), Vec2::new(cx + spread, y), &grid);
    }
    for i in -GRID_RAYS..=GRID_RAYS {
        let bottom = cx + i as f32 * (b.x / 12.0);
        surface.stroke_line(Vec2::new(cx, horizon), Vec2::new(bottom, b.y), &grid);
    }

    if view.theme.id == ThemeId::Classroom {
        let max_r = b.x * 0.4;
        surface.set_line_width(1.0);
        for r in 0..3 {
            let radius = (view.time * 0.3 + r as f32 * 0.33).rem_euclid(1.0) * max_r;
            let alpha = (1.0 - radius / max_r.max(1.0)) * 0.08;
            surface.stroke_ellipse(
                Vec2::new(cx, b.y * 0.75),
                Vec2::new(radius, radius * 0.2),
                0.0,
                Rgba::new(0, 240, 255, alpha),
            );
        }
    }
}

pub fn draw_streams(surface: &mut impl Surface, streams: &[DataStream]) {
    surface.set_line_width(1.0);
    for s in streams {
        let tail = Vec2::new(s.offset - s.length, s.y);
        let head = Vec2::new(s.offset, s.y);
        let g = Gradient::linear(
            tail,
            head,
            &[
                (0.0, Rgba::TRANSPARENT),
                (0.5, s.color),
                (1.0, Rgba::TRANSPARENT),
            ],
        );
        surface.set_alpha(s.opacity);
        surface.stroke_line(tail, head, &g.into());
    }
    surface.set_alpha(1.0);
}

#[cfg(test)]
mod tests {
    use super::hash01;

    #[test]
    fn hash_is_stable_and_in_unit_range() {
        for i in 0..100 {
            let v = hash01(i as f32, 127.1, 311.7);
            assert!((0.0..=1.0).contains(&v));
            assert_eq!(v, hash01(i as f32, 127.1, 311.7));
        }
    }
}
