// Ambient scene furniture: particles, data streams, nebulae and avatars.
// None of these are pickable; they are created at scene setup and only
// replaced when the scene is rebuilt.

use crate::constants::*;
use crate::surface::Rgba;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    /// px per simulated second; negative y rises.
    pub velocity: Vec2,
    pub twinkle: f32,
    pub size: f32,
    pub color: Rgba,
    pub opacity: f32,
}

impl Particle {
    pub fn random(bounds: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            position: Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y),
            velocity: Vec2::new(
                (rng.gen::<f32>() - 0.5) * PARTICLE_DRIFT_SPAN,
                -(PARTICLE_RISE_MIN + rng.gen::<f32>() * PARTICLE_RISE_SPAN),
            ),
            twinkle: rng.gen::<f32>() * TAU,
            size: rng.gen::<f32>() * PARTICLE_SIZE_MAX,
            color: Rgba::from_array(NEON_PALETTE[rng.gen_range(0..5)]),
            opacity: 0.15 + rng.gen::<f32>() * 0.4,
        }
    }

    /// Opacity after twinkle modulation.
    pub fn alpha(&self) -> f32 {
        ((self.twinkle.sin() * 0.3 + 0.7) * self.opacity).clamp(0.0, 1.0)
    }
}

/// Thin horizontal gradient segment sliding across the upper canvas.
#[derive(Clone, Debug)]
pub struct DataStream {
    pub y: f32,
    pub length: f32,
    /// px per simulated second.
    pub speed: f32,
    /// x of the leading end.
    pub offset: f32,
    pub color: Rgba,
    pub opacity: f32,
}

impl DataStream {
    pub fn random(bounds: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            y: bounds.y * 0.1 + rng.gen::<f32>() * bounds.y * 0.3,
            length: 40.0 + rng.gen::<f32>() * 120.0,
            speed: STREAM_SPEED_MIN + rng.gen::<f32>() * STREAM_SPEED_SPAN,
            offset: rng.gen::<f32>() * bounds.x,
            color: Rgba::from_array(NEON_PALETTE[rng.gen_range(0..3)]),
            opacity: 0.1 + rng.gen::<f32>() * 0.15,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Nebula {
    pub center: Vec2,
    pub radius: f32,
    pub color: Rgba,
    /// Horizontal px per simulated second.
    pub drift: f32,
}

impl Nebula {
    pub fn random(bounds: Vec2, rng: &mut impl Rng) -> Self {
        const TINTS: [Rgba; 4] = [
            Rgba::new(176, 0, 255, 0.03),
            Rgba::new(0, 240, 255, 0.03),
            Rgba::new(255, 0, 110, 0.02),
            Rgba::new(0, 255, 136, 0.02),
        ];
        Self {
            center: Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y),
            radius: 60.0 + rng.gen::<f32>() * 140.0,
            color: TINTS[rng.gen_range(0..TINTS.len())],
            drift: (rng.gen::<f32>() - 0.5) * 12.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AvatarFigure {
    pub anchor: Vec2,
    pub label: &'static str,
    pub bob_phase: f32,
    pub bob_speed: f32,
    pub color: Rgba,
    pub active: bool,
    pub shows_focus: bool,
}

impl AvatarFigure {
    /// Vertical bob at simulated time `time`.
    pub fn position(&self, time: f32) -> Vec2 {
        let bob = (time * self.bob_speed + self.bob_phase).sin() * AVATAR_BOB_PX;
        self.anchor + Vec2::new(0.0, bob)
    }
}

/// Seat `i` of `count` on the ellipse around the lower middle of the canvas.
pub fn avatar_seat(i: usize, count: usize, bounds: Vec2) -> Vec2 {
    let angle = (i as f32 / count.max(1) as f32) * TAU + AVATAR_RING_START;
    Vec2::new(
        bounds.x * 0.5 + angle.cos() * bounds.x * 0.32,
        bounds.y * 0.75 + angle.sin() * bounds.y * 0.08,
    )
}

pub fn seat_avatars(count: usize, bounds: Vec2, rng: &mut impl Rng) -> Vec<AvatarFigure> {
    (0..count)
        .map(|i| AvatarFigure {
            anchor: avatar_seat(i, count, bounds),
            label: AVATAR_NAMES[i % AVATAR_NAMES.len()],
            bob_phase: rng.gen::<f32>() * TAU,
            bob_speed: 0.8 + rng.gen::<f32>() * 0.5,
            color: Rgba::from_array(NEON_PALETTE[i % NEON_PALETTE.len()]),
            active: rng.gen::<f32>() > 0.3,
            shows_focus: rng.gen::<f32>() > 0.5,
        })
        .collect()
}

/// Index of the point nearest to `from`, with its distance.
///
/// Linear scan; `None` for an empty slice.
pub fn nearest(points: impl IntoIterator<Item = Vec2>, from: Vec2) -> Option<(usize, f32)> {
    let mut best = None::<(usize, f32)>;
    for (i, p) in points.into_iter().enumerate() {
        let d = p.distance(from);
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((i, d)),
        }
    }
    best
}
