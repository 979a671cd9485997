//! Per-frame state transitions.
//!
//! Every function here is a pure step of `(sim_dt, simulated time, input)`
//! over the state it is handed: with `sim_dt == 0` (paused) nothing that
//! depends on time moves. Dragging is input, not time, so it stays live.

use crate::constants::*;
use crate::scene::{DataStream, Nebula, ObjectId, Particle, SceneObjectStore};
use glam::Vec2;
use std::f32::consts::TAU;

/// Active drag: which object follows the pointer, and where the pointer is
/// in scene coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drag {
    pub target: ObjectId,
    pub pointer: Vec2,
}

pub fn update_objects(store: &mut SceneObjectStore, sim_dt: f32, time: f32, drag: Option<Drag>) {
    for obj in store.iter_mut() {
        if sim_dt > 0.0 {
            obj.rotation = (obj.rotation + obj.spin * sim_dt).rem_euclid(TAU);
        }

        if let Some(s) = obj.spawn_scale {
            let grown = (s + SCALE_IN_RATE_PER_SEC * sim_dt).clamp(0.0, 1.0);
            obj.spawn_scale = if grown >= 1.0 { None } else { Some(grown) };
        }

        if obj.selected && obj.selection_glow(time) <= 0.0 {
            obj.selected = false;
        }

        // Rewrite the anchor so the displayed position lands exactly on the
        // pointer; releasing then leaves the object where it was dropped.
        if let Some(d) = drag.filter(|d| d.target == obj.id) {
            obj.anchor = Vec2::new(d.pointer.x, d.pointer.y - obj.float_offset(time));
        }
    }
}

pub fn update_particles(particles: &mut [Particle], sim_dt: f32, bounds: Vec2) {
    if sim_dt <= 0.0 {
        return;
    }
    let w = bounds.x.max(1.0);
    let h = bounds.y.max(1.0);
    for p in particles {
        p.position += p.velocity * sim_dt;
        p.position.x = p.position.x.rem_euclid(w);
        p.position.y = p.position.y.rem_euclid(h);
        p.twinkle = (p.twinkle + TWINKLE_RATE_PER_SEC * sim_dt).rem_euclid(TAU);
    }
}

pub fn update_streams(streams: &mut [DataStream], sim_dt: f32, width: f32) {
    if sim_dt <= 0.0 {
        return;
    }
    for s in streams {
        s.offset += s.speed * sim_dt;
        if s.offset > width + s.length {
            s.offset = -s.length;
        }
    }
}

pub fn update_nebulae(nebulae: &mut [Nebula], sim_dt: f32, width: f32) {
    if sim_dt <= 0.0 {
        return;
    }
    for n in nebulae {
        n.center.x += n.drift * sim_dt;
        if n.center.x > width + n.radius {
            n.center.x = -n.radius;
        } else if n.center.x < -n.radius {
            n.center.x = width + n.radius;
        }
    }
}

/// Linear decay toward 0 used by the theme transition flash.
#[inline]
pub fn decay(value: f32, rate_per_sec: f32, dt: f32) -> f32 {
    (value - rate_per_sec * dt.max(0.0)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{DecorativeObject, Origin, ShapeKind};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn store_with_one(origin: Origin) -> (SceneObjectStore, ObjectId) {
        let mut rng = StdRng::seed_from_u64(7);
        let mut store = SceneObjectStore::new();
        let id = ObjectId(1);
        store.add(DecorativeObject::random(
            id,
            ShapeKind::Star,
            Vec2::new(100.0, 100.0),
            origin,
            &mut rng,
        ));
        (store, id)
    }

    #[test]
    fn rotation_stays_wrapped() {
        let (mut store, id) = store_with_one(Origin::Seeded);
        for i in 0..1000 {
            update_objects(&mut store, 0.1, i as f32 * 0.1, None);
        }
        let r = store.get(id).map(|o| o.rotation).unwrap_or(-1.0);
        assert!((0.0..TAU).contains(&r), "rotation {r}");
    }

    #[test]
    fn drag_puts_displayed_position_on_pointer() {
        let (mut store, id) = store_with_one(Origin::Seeded);
        let pointer = Vec2::new(321.0, 45.0);
        let t = 2.5;
        update_objects(&mut store, 0.016, t, Some(Drag { target: id, pointer }));
        let obj = store.get(id).expect("object");
        assert!(obj.displayed_position(t).distance(pointer) < 1e-3);
    }

    #[test]
    fn streams_wrap_after_leaving_the_right_edge() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut streams = vec![DataStream::random(Vec2::new(200.0, 100.0), &mut rng)];
        streams[0].offset = 200.0 + streams[0].length - 1.0;
        update_streams(&mut streams, 1.0, 200.0);
        assert_eq!(streams[0].offset, -streams[0].length);
    }

    #[test]
    fn particles_wrap_on_every_edge() {
        let mut rng = StdRng::seed_from_u64(11);
        let bounds = Vec2::new(200.0, 100.0);
        let starts = [
            (Vec2::new(199.5, 0.5), Vec2::new(10.0, 0.0)),
            (Vec2::new(0.5, 50.0), Vec2::new(-10.0, 0.0)),
            (Vec2::new(100.0, 99.5), Vec2::new(0.0, 10.0)),
            (Vec2::new(100.0, 0.5), Vec2::new(0.0, -10.0)),
        ];
        let mut particles: Vec<Particle> = starts
            .iter()
            .map(|&(position, velocity)| {
                let mut p = Particle::random(bounds, &mut rng);
                p.position = position;
                p.velocity = velocity;
                p
            })
            .collect();

        update_particles(&mut particles, 0.1, bounds);

        for p in &particles {
            assert!((0.0..bounds.x).contains(&p.position.x), "x {}", p.position.x);
            assert!((0.0..bounds.y).contains(&p.position.y), "y {}", p.position.y);
        }
        assert!((particles[0].position.x - 0.5).abs() < 1e-3);
        assert!((particles[1].position.x - 199.5).abs() < 1e-3);
        assert!((particles[2].position.y - 0.5).abs() < 1e-3);
        assert!((particles[3].position.y - 99.5).abs() < 1e-3);
    }

    #[test]
    fn paused_step_leaves_particles_alone() {
        let mut rng = StdRng::seed_from_u64(12);
        let bounds = Vec2::new(200.0, 100.0);
        let mut particles = vec![Particle::random(bounds, &mut rng)];
        let before = particles[0].position;
        update_particles(&mut particles, 0.0, bounds);
        assert_eq!(particles[0].position, before);
    }

    #[test]
    fn decay_floors_at_zero() {
        assert_eq!(decay(1.0, 2.0, 0.25), 0.5);
        assert_eq!(decay(0.1, 2.0, 1.0), 0.0);
        assert_eq!(decay(0.5, 2.0, -1.0), 0.5);
    }
}
