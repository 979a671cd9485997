//! Hero "brain": pulsing nodes in a lobed ring, proximity connections and
//! signals that travel along them and light up the node they reach.
//!
//! Shares [`Clock`], [`InputTracker`] and [`Surface`] with the classroom
//! engine and runs under the same frame loop.

use crate::clock::Clock;
use crate::constants::*;
use crate::engine::CanvasSize;
use crate::input::InputTracker;
use crate::surface::{Paint, Rgba, Surface};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

const CYAN: Rgba = Rgba::rgb(0, 240, 255);
const VIOLET: Rgba = Rgba::rgb(176, 0, 255);
const GREEN: Rgba = Rgba::rgb(0, 255, 136);

#[derive(Clone, Debug)]
pub struct BrainNode {
    pub base: Vec2,
    /// Base position leaned toward the pointer.
    pub position: Vec2,
    pub radius: f32,
    /// Radians per simulated second.
    pub pulse_speed: f32,
    pub pulse_phase: f32,
    pub color: Rgba,
    pub activated_at: Option<f32>,
}

impl BrainNode {
    pub fn pulse(&self, time: f32) -> f32 {
        (time * self.pulse_speed + self.pulse_phase).sin() * 0.3 + 0.7
    }

    /// Activation glow in `[0, 1]`, fading over half a second.
    pub fn glow(&self, time: f32) -> f32 {
        self.activated_at
            .map(|t0| (1.0 - (time - t0) * BRAIN_GLOW_DECAY_PER_SEC).clamp(0.0, 1.0))
            .unwrap_or(0.0)
    }
}

#[derive(Clone, Debug)]
pub struct Connection {
    pub from: usize,
    pub to: usize,
    pub distance: f32,
    pub max_distance: f32,
    /// Progress of an in-flight signal along the edge, in `[0, 1)`.
    pub signal: Option<f32>,
    /// Edge fractions per simulated second.
    pub signal_speed: f32,
}

impl Connection {
    pub fn alpha(&self) -> f32 {
        (1.0 - self.distance / self.max_distance) * 0.15
    }
}

pub struct BrainScene {
    size: CanvasSize,
    rng: StdRng,
    clock: Clock,
    input: InputTracker,
    nodes: Vec<BrainNode>,
    connections: Vec<Connection>,
}

impl BrainScene {
    pub fn new(size: CanvasSize, seed: u64) -> Self {
        let mut scene = Self {
            size,
            rng: StdRng::seed_from_u64(seed),
            clock: Clock::new(),
            input: InputTracker::default(),
            nodes: Vec::new(),
            connections: Vec::new(),
        };
        scene.layout();
        log::info!(
            "[brain] nodes={} connections={}",
            scene.nodes.len(),
            scene.connections.len()
        );
        scene
    }

    fn layout(&mut self) {
        let b = self.size.bounds();
        let c = b * 0.5;
        let radius = b.min_element() * 0.38;
        let rng = &mut self.rng;
        self.nodes.clear();

        for i in 0..BRAIN_RING_NODES {
            let angle = (i as f32 / BRAIN_RING_NODES as f32) * TAU;
            let r = radius * (0.5 + rng.gen::<f32>() * 0.5);
            let lobe = 1.0 + 0.15 * (angle * 2.0).sin();
            let base = c + Vec2::new(angle.cos() * r * lobe, angle.sin() * r * lobe * 0.85);
            let color = if rng.gen::<f32>() > 0.5 {
                CYAN
            } else if rng.gen::<f32>() > 0.5 {
                VIOLET
            } else {
                GREEN
            };
            self.nodes.push(BrainNode {
                base,
                position: base,
                radius: 1.5 + rng.gen::<f32>() * 2.5,
                pulse_speed: 1.2 + rng.gen::<f32>() * 1.8,
                pulse_phase: rng.gen::<f32>() * TAU,
                color,
                activated_at: None,
            });
        }
        for _ in 0..BRAIN_INNER_NODES {
            let angle = rng.gen::<f32>() * TAU;
            let r = radius * (0.1 + rng.gen::<f32>() * 0.3);
            let base = c + Vec2::new(angle.cos(), angle.sin()) * r;
            self.nodes.push(BrainNode {
                base,
                position: base,
                radius: 1.0 + rng.gen::<f32>() * 2.0,
                pulse_speed: 0.9 + rng.gen::<f32>() * 1.2,
                pulse_phase: rng.gen::<f32>() * TAU,
                color: CYAN,
                activated_at: None,
            });
        }

        let max_distance = b.min_element() * 0.25;
        self.connections.clear();
        for i in 0..self.nodes.len() {
            for j in (i + 1)..self.nodes.len() {
                let distance = self.nodes[i].base.distance(self.nodes[j].base);
                if distance < max_distance {
                    self.connections.push(Connection {
                        from: i,
                        to: j,
                        distance,
                        max_distance,
                        signal: None,
                        signal_speed: 0.6 + rng.gen::<f32>() * 1.2,
                    });
                }
            }
        }
    }

    /// Resize and lay the nodes out again for the new bounds.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = CanvasSize::new(width, height);
        self.layout();
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.clock.set_paused(paused);
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.input.move_to(Vec2::new(x, y));
    }

    pub fn on_pointer_leave(&mut self) {
        self.input.leave();
    }

    /// Launch a signal from the start of connection `index`.
    pub fn fire_signal(&mut self, index: usize) {
        if let Some(c) = self.connections.get_mut(index) {
            c.signal = Some(0.0);
        }
    }

    pub fn update(&mut self, wall_dt: f32) {
        let sim_dt = self.clock.tick(wall_dt);
        let time = self.clock.elapsed();

        if sim_dt > 0.0 && !self.connections.is_empty() {
            let chance = 1.0 - (-BRAIN_SIGNALS_PER_SEC * sim_dt).exp();
            if self.rng.gen::<f32>() < chance {
                let i = self.rng.gen_range(0..self.connections.len());
                self.fire_signal(i);
            }
        }

        for c in &mut self.connections {
            let Some(progress) = c.signal else { continue };
            let next = progress + c.signal_speed * sim_dt;
            if next >= 1.0 {
                c.signal = None;
                self.nodes[c.to].activated_at = Some(time);
            } else {
                c.signal = Some(next);
            }
        }

        let pointer = self.input.is_inside().then(|| self.input.position());
        for n in &mut self.nodes {
            if n.glow(time) <= 0.0 {
                n.activated_at = None;
            }
            n.position = match pointer {
                Some(p) => {
                    let toward = p - n.base;
                    let influence = (1.0 - toward.length() / BRAIN_POINTER_RADIUS).max(0.0);
                    n.base + toward * influence * BRAIN_POINTER_PULL
                }
                None => n.base,
            };
        }
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        let time = self.clock.elapsed();

        surface.set_line_width(0.5);
        for c in &self.connections {
            let (a, b) = (self.nodes[c.from].position, self.nodes[c.to].position);
            surface.stroke_line(a, b, &Paint::Solid(CYAN.with_alpha(c.alpha())));
            if let Some(progress) = c.signal {
                surface.set_glow(8.0, CYAN);
                surface.fill_circle(a.lerp(b, progress), 2.0, CYAN);
                surface.set_glow(0.0, CYAN);
            }
        }

        for n in &self.nodes {
            let pulse = n.pulse(time);
            let glow = n.glow(time);
            surface.set_alpha((0.4 + pulse * 0.3 + glow * 0.3).min(1.0));
            if glow > 0.0 {
                surface.set_glow(15.0, n.color);
            }
            surface.fill_circle(n.position, n.radius * pulse + glow * 3.0, n.color);
            surface.set_glow(0.0, n.color);
        }
        surface.set_alpha(1.0);
    }

    pub fn nodes(&self) -> &[BrainNode] {
        &self.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn active_signals(&self) -> usize {
        self.connections.iter().filter(|c| c.signal.is_some()).count()
    }

    pub fn elapsed_seconds(&self) -> f32 {
        self.clock.elapsed()
    }
}
