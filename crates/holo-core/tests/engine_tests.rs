// Host-side tests for the classroom engine: lifecycle, scene mutation,
// camera, picking and dragging.

mod common;

use glam::Vec2;
use holo_core::{CanvasSize, Engine, ObjectId, SceneParams, ShapeKind, ThemeId};

fn engine_with(params: SceneParams) -> Engine {
    Engine::with_params(CanvasSize::new(800.0, 600.0), ThemeId::Classroom, params)
}

fn engine() -> Engine {
    engine_with(SceneParams::default())
}

fn tick(engine: &mut Engine, seconds: f32, dt: f32) {
    let steps = (seconds / dt).round() as usize;
    for _ in 0..steps {
        engine.update(dt);
    }
}

#[test]
fn default_scene_is_populated() {
    let e = engine();
    assert_eq!(e.object_count(), 10);
    assert_eq!(e.spawned_count(), 0);
    assert_eq!(e.particle_count(), 80);
    assert_eq!(e.avatars().len(), 6);
    assert_eq!(e.avatars()[0].label, "AX-7");
    assert!(!e.is_running());
}

#[test]
fn same_seed_builds_same_scene() {
    let a = engine();
    let b = engine();
    let pa: Vec<Vec2> = a.objects().iter().map(|o| o.anchor).collect();
    let pb: Vec<Vec2> = b.objects().iter().map(|o| o.anchor).collect();
    assert_eq!(pa, pb);
}

#[test]
fn clear_spawned_keeps_seeded_objects() {
    let mut e = engine_with(SceneParams {
        seeded_objects: 4,
        ..SceneParams::default()
    });
    e.spawn(ShapeKind::Cube, None);
    e.spawn(ShapeKind::Helix, Some(Vec2::new(100.0, 100.0)));
    assert_eq!(e.object_count(), 6);
    assert_eq!(e.spawned_count(), 2);

    assert_eq!(e.clear_spawned(), 2);
    assert_eq!(e.object_count(), 4);
    assert_eq!(e.spawned_count(), 0);
}

#[test]
fn spawn_cap_evicts_oldest_spawned() {
    let mut e = engine_with(SceneParams {
        seeded_objects: 2,
        max_spawned: 3,
        ..SceneParams::default()
    });
    let ids: Vec<ObjectId> = (0..4).map(|_| e.spawn(ShapeKind::Ring, None)).collect();
    assert_eq!(e.spawned_count(), 3);
    assert_eq!(e.object_count(), 5);
    assert!(e.object(ids[0]).is_none());
    assert!(ids[1..].iter().all(|&id| e.object(id).is_some()));
}

#[test]
fn zoom_is_clamped_and_stepped() {
    let mut e = engine();
    e.set_zoom(5.0);
    assert_eq!(e.zoom(), 2.0);
    e.set_zoom(-1.0);
    assert_eq!(e.zoom(), 0.5);
    e.zoom_out();
    assert_eq!(e.zoom(), 0.5);
    e.set_zoom(1.0);
    e.zoom_in();
    assert!((e.zoom() - 1.15).abs() < 1e-6);
}

#[test]
fn theme_change_flashes_then_fades() {
    let mut e = engine();
    e.start();
    e.set_theme_by_name("space");
    assert_eq!(e.theme().id, ThemeId::Space);
    assert_eq!(e.transition_intensity(), 1.0);
    tick(&mut e, 0.5, 0.125);
    assert_eq!(e.transition_intensity(), 0.0);
}

#[test]
fn unknown_theme_falls_back_to_classroom() {
    let mut e = engine();
    e.set_theme(ThemeId::Ocean);
    e.set_theme_by_name("volcano");
    assert_eq!(e.theme().id, ThemeId::Classroom);
}

#[test]
fn pause_freezes_rotation_and_time() {
    let mut e = engine();
    e.start();
    tick(&mut e, 0.5, 0.016);
    e.set_paused(true);
    let before: Vec<f32> = e.objects().iter().map(|o| o.rotation).collect();
    let elapsed = e.elapsed_seconds();
    tick(&mut e, 5.0, 0.016);
    let after: Vec<f32> = e.objects().iter().map(|o| o.rotation).collect();
    assert_eq!(before, after);
    assert_eq!(e.elapsed_seconds(), elapsed);

    e.set_paused(false);
    tick(&mut e, 0.1, 0.016);
    assert!(e.elapsed_seconds() > elapsed);
}

#[test]
fn pause_freezes_particles_float_and_scale_in() {
    let mut e = engine();
    e.start();
    tick(&mut e, 0.48, 0.016);
    let id = e.spawn(ShapeKind::Torus, Some(Vec2::new(300.0, 300.0)));
    tick(&mut e, 0.1, 0.016);
    e.set_paused(true);

    let particles: Vec<Vec2> = e.particles().iter().map(|p| p.position).collect();
    let t = e.elapsed_seconds();
    let obj = e.objects().get(id).cloned().expect("spawned");
    assert!(obj.spawn_scale.is_some());

    tick(&mut e, 5.0, 0.016);

    let after: Vec<Vec2> = e.particles().iter().map(|p| p.position).collect();
    assert_eq!(particles, after);
    assert_eq!(e.elapsed_seconds(), t);
    let now = e.objects().get(id).expect("spawned");
    assert_eq!(now.float_offset(e.elapsed_seconds()), obj.float_offset(t));
    assert_eq!(now.spawn_scale, obj.spawn_scale);
    assert_eq!(now.displayed_position(t), obj.displayed_position(t));
}

#[test]
fn restart_drops_a_stale_theme_flash() {
    let mut e = engine();
    e.start();
    e.set_theme(ThemeId::Space);
    assert!(e.transition_intensity() > 0.0);
    e.stop();
    tick(&mut e, 1.0, 0.016);
    assert!(e.transition_intensity() > 0.0);
    e.start();
    assert_eq!(e.transition_intensity(), 0.0);
}

#[test]
fn stopped_engine_does_not_advance() {
    let mut e = engine();
    assert_eq!(e.update(0.016), 0.0);
    let mut rec = common::Recorder::new();
    assert!(!e.frame(0.016, &mut rec));
    assert!(rec.calls.is_empty());
    assert_eq!(e.elapsed_seconds(), 0.0);

    e.start();
    assert!(e.frame(0.016, &mut rec));
    assert!(!rec.calls.is_empty());
    e.stop();
    assert!(!e.is_running());
}

#[test]
fn float_offset_depends_only_on_time() {
    let e = engine();
    for o in e.objects() {
        assert_eq!(o.float_offset(3.25), o.float_offset(3.25));
        assert!(o.float_offset(3.25).abs() <= 10.0);
        assert_eq!(o.displayed_position(1.5).x, o.anchor.x);
    }
}

#[test]
fn spawned_objects_scale_in_monotonically() {
    let mut e = engine();
    e.start();
    let id = e.spawn(ShapeKind::Pyramid, None);
    assert_eq!(e.object(id).map(|o| o.scale()), Some(0.0));

    let mut last = 0.0;
    for _ in 0..40 {
        e.update(0.016);
        let s = e.object(id).map(|o| o.scale()).unwrap_or(-1.0);
        assert!(s >= last, "scale went from {last} to {s}");
        assert!((0.0..=1.0).contains(&s));
        last = s;
    }
    assert_eq!(last, 1.0);
    assert!(e.object(id).is_some_and(|o| o.spawn_scale.is_none()));
}

#[test]
fn topmost_object_wins_the_click() {
    let mut e = engine();
    e.clear_all();
    let at = Vec2::new(300.0, 300.0);
    let _below = e.spawn(ShapeKind::Cube, Some(at));
    let above = e.spawn(ShapeKind::Sphere, Some(at));
    assert_eq!(e.on_click(at.x, at.y), Some(above));
    assert!(e.object(above).is_some_and(|o| o.selected));
    assert_eq!(e.on_click(20.0, 20.0), None);
}

#[test]
fn picking_follows_the_zoomed_view() {
    let mut e = engine();
    e.clear_all();
    let id = e.spawn(ShapeKind::Torus, Some(Vec2::new(600.0, 300.0)));
    e.set_zoom(2.0);

    let bounds = e.size().bounds();
    let drawn = e
        .object(id)
        .map(|o| e.camera().scene_to_screen(o.displayed_position(0.0), bounds))
        .unwrap_or(Vec2::ZERO);
    assert!((drawn.x - 800.0).abs() < 1e-3);

    // The unzoomed spot maps to scene x = 500, well outside the object.
    assert_eq!(e.on_click(600.0, 300.0), None);
    assert_eq!(e.on_click(drawn.x, drawn.y), Some(id));
}

#[test]
fn pointer_position_stays_in_canvas_pixels() {
    let mut e = engine();
    e.set_zoom(2.0);
    e.on_pointer_move(640.0, 360.0);
    assert_eq!(e.pointer_position(), Vec2::new(640.0, 360.0));
    e.on_pointer_move(f32::NAN, 10.0);
    assert_eq!(e.pointer_position(), Vec2::new(640.0, 360.0));
}

#[test]
fn selection_glow_fades_out() {
    let mut e = engine();
    e.clear_all();
    let at = Vec2::new(400.0, 200.0);
    let id = e.spawn(ShapeKind::Star, Some(at));
    e.start();
    assert_eq!(e.on_click(at.x, at.y), Some(id));
    tick(&mut e, 1.0, 0.02);
    assert!(e.object(id).is_some_and(|o| !o.selected));
}

#[test]
fn dragged_object_sits_under_the_pointer() {
    let mut e = engine();
    e.clear_all();
    e.start();
    let id = e.spawn(ShapeKind::Dna, Some(Vec2::new(200.0, 200.0)));
    e.on_pointer_down(200.0, 200.0);
    assert_eq!(e.drag_target(), Some(id));

    e.on_pointer_move(320.0, 260.0);
    e.update(0.016);
    let t = e.elapsed_seconds();
    let shown = e.object(id).map(|o| o.displayed_position(t)).unwrap_or(Vec2::ZERO);
    assert!(shown.distance(Vec2::new(320.0, 260.0)) < 1e-3, "{shown}");

    e.on_pointer_up();
    assert_eq!(e.drag_target(), None);
    e.update(0.016);
    let anchor = e.object(id).map(|o| o.anchor.x).unwrap_or(0.0);
    assert!((anchor - 320.0).abs() < 1e-3);
}

#[test]
fn clearing_drops_a_dangling_drag() {
    let mut e = engine();
    e.clear_all();
    e.spawn(ShapeKind::Avatar, Some(Vec2::new(100.0, 100.0)));
    e.on_pointer_down(100.0, 100.0);
    assert!(e.drag_target().is_some());
    e.clear_spawned();
    assert_eq!(e.drag_target(), None);
}

#[test]
fn status_queries() {
    let mut e = engine();
    assert_eq!(e.load_estimate(), 20 + 10 * 3 + 15);
    e.set_particles_visible(false);
    assert_eq!(e.particle_count(), 0);
    assert_eq!(e.load_estimate(), 50);
    for _ in 0..30 {
        e.spawn(ShapeKind::Cube, None);
    }
    assert_eq!(e.load_estimate(), 95);

    e.start();
    tick(&mut e, 1.0, 1.0 / 30.0);
    assert!((e.current_fps() - 30.0).abs() <= 1.0);
    assert!(e.session_progress() > 0.0 && e.session_progress() < 1.0);
}
