// Vector outlines per shape kind, in object-local coordinates centred on the
// origin and unrotated. The renderer positions, rotates and scales them.

use crate::scene::ShapeKind;
use crate::surface::{Rgba, Surface};
use glam::Vec2;
use smallvec::{smallvec, SmallVec};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

pub type Points = SmallVec<[Vec2; 32]>;

#[derive(Clone, Debug, PartialEq)]
pub enum Stroke {
    Polyline { points: Points, closed: bool },
    Ellipse { center: Vec2, radii: Vec2, rotation: f32 },
}

pub type Outline = SmallVec<[Stroke; 6]>;

const HELIX_TURN: f32 = 4.0 * PI;
const HELIX_STEP: f32 = 0.1;

fn segment(a: Vec2, b: Vec2) -> Stroke {
    Stroke::Polyline {
        points: smallvec![a, b],
        closed: false,
    }
}

fn ellipse(radii: Vec2, rotation: f32) -> Stroke {
    Stroke::Ellipse {
        center: Vec2::ZERO,
        radii,
        rotation,
    }
}

fn rect(min: Vec2, size: f32) -> Stroke {
    Stroke::Polyline {
        points: smallvec![
            min,
            min + Vec2::new(size, 0.0),
            min + Vec2::splat(size),
            min + Vec2::new(0.0, size),
        ],
        closed: true,
    }
}

/// Vertical sine strand used by the helix and both DNA backbones.
fn strand(radius: f32, height: f32, phase: f32) -> Stroke {
    let steps = (HELIX_TURN / HELIX_STEP).ceil() as usize;
    let points = (0..steps)
        .map(|i| {
            let t = i as f32 * HELIX_STEP;
            Vec2::new((t + phase).cos() * radius, (t / HELIX_TURN - 0.5) * height)
        })
        .collect();
    Stroke::Polyline {
        points,
        closed: false,
    }
}

pub fn outline(kind: ShapeKind, s: f32) -> Outline {
    let h = s / 2.0;
    match kind {
        ShapeKind::Cube => {
            let d = s * 0.3;
            let back = Vec2::new(d, -d);
            let corners = [
                Vec2::new(-h, -h),
                Vec2::new(h, -h),
                Vec2::new(-h, h),
                Vec2::new(h, h),
            ];
            let mut out: Outline = smallvec![rect(Vec2::splat(-h), s), rect(Vec2::splat(-h) + back, s)];
            out.extend(corners.iter().map(|&c| segment(c, c + back)));
            out
        }
        ShapeKind::Sphere => smallvec![
            ellipse(Vec2::splat(h), 0.0),
            ellipse(Vec2::new(h, s / 5.0), 0.0),
            ellipse(Vec2::new(s / 5.0, h), 0.0),
        ],
        ShapeKind::Pyramid => {
            let ph = s * 0.4;
            smallvec![
                Stroke::Polyline {
                    points: smallvec![Vec2::new(0.0, -ph), Vec2::new(-h, ph), Vec2::new(h, ph)],
                    closed: true,
                },
                segment(Vec2::new(0.0, -ph), Vec2::new(0.0, ph)),
            ]
        }
        ShapeKind::Ring => smallvec![
            ellipse(Vec2::new(h, s / 4.0), 0.0),
            ellipse(Vec2::new(s / 3.0, s / 6.0), 0.0),
        ],
        ShapeKind::Helix => smallvec![strand(s / 3.0, s, 0.0)],
        ShapeKind::Torus => smallvec![
            ellipse(Vec2::new(h, s / 3.0), 0.0),
            ellipse(Vec2::new(h, s / 3.0 * 0.8), 0.5),
            ellipse(Vec2::new(s / 4.0, s / 6.0), 0.0),
        ],
        ShapeKind::Star => {
            let points = (0..10)
                .map(|i| {
                    let r = if i % 2 == 0 { h } else { s / 5.0 };
                    let a = (i as f32 / 10.0) * TAU - FRAC_PI_2;
                    Vec2::new(a.cos() * r, a.sin() * r)
                })
                .collect();
            smallvec![Stroke::Polyline {
                points,
                closed: true
            }]
        }
        ShapeKind::Dna => {
            let height = s * 1.2;
            let r = s / 3.0;
            let mut out: Outline = smallvec![strand(r, height, 0.0), strand(r, height, PI)];
            out.extend((0..8).map(|i| {
                let t = i as f32 * FRAC_PI_2;
                let y = (t / HELIX_TURN - 0.5) * height;
                segment(Vec2::new(t.cos() * r, y), Vec2::new((t + PI).cos() * r, y))
            }));
            out
        }
        ShapeKind::Avatar => {
            let shoulders = (0..=12)
                .map(|i| {
                    let a = PI + (i as f32 / 12.0) * PI;
                    Vec2::new(a.cos() * s * 0.35, h + a.sin() * s * 0.35)
                })
                .collect();
            smallvec![
                Stroke::Ellipse {
                    center: Vec2::new(0.0, -s * 0.2),
                    radii: Vec2::splat(s * 0.18),
                    rotation: 0.0,
                },
                Stroke::Polyline {
                    points: shoulders,
                    closed: false,
                },
            ]
        }
        ShapeKind::Particle => {
            let r = s / 6.0;
            smallvec![
                ellipse(Vec2::splat(r), 0.0),
                segment(Vec2::new(-h, 0.0), Vec2::new(-r * 1.5, 0.0)),
                segment(Vec2::new(r * 1.5, 0.0), Vec2::new(h, 0.0)),
                segment(Vec2::new(0.0, -h), Vec2::new(0.0, -r * 1.5)),
                segment(Vec2::new(0.0, r * 1.5), Vec2::new(0.0, h)),
            ]
        }
    }
}

pub fn stroke_outline(surface: &mut impl Surface, outline: &Outline, color: Rgba) {
    for stroke in outline {
        match stroke {
            Stroke::Polyline { points, closed } => surface.stroke_polyline(points, *closed, color),
            Stroke::Ellipse {
                center,
                radii,
                rotation,
            } => surface.stroke_ellipse(*center, *radii, *rotation, color),
        }
    }
}
