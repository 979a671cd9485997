//! Frame renderer for the classroom scene.
//!
//! [`draw_scene`] is a pure function of the [`SceneView`] it is given: the
//! same view produces the same sequence of surface calls. Layer order is
//! background, environment, transition flash, then (inside the camera
//! transform) grid, data streams, objects, avatars and particles, and finally
//! the screen-fixed HUD and scanlines.

pub mod backdrop;
pub mod hud;
pub mod shapes;

use crate::ambient::nearest;
use crate::camera::CameraState;
use crate::constants::*;
use crate::scene::{AvatarFigure, DataStream, DecorativeObject, Nebula, Particle};
use crate::surface::{Paint, Surface, TextAlign};
use crate::theme::EnvironmentTheme;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Toggles {
    pub grid: bool,
    pub particles: bool,
    pub scanlines: bool,
}

impl Default for Toggles {
    fn default() -> Self {
        Self {
            grid: true,
            particles: true,
            scanlines: false,
        }
    }
}

/// Borrowed snapshot of everything one frame draws.
pub struct SceneView<'a> {
    pub bounds: Vec2,
    /// Simulated time the frame is drawn at.
    pub time: f32,
    pub theme: &'a EnvironmentTheme,
    pub transition: f32,
    pub camera: &'a CameraState,
    pub toggles: Toggles,
    pub objects: &'a [DecorativeObject],
    pub particles: &'a [Particle],
    pub streams: &'a [DataStream],
    pub nebulae: &'a [Nebula],
    pub avatars: &'a [AvatarFigure],
    /// Pointer in canvas coordinates, if over the canvas.
    pub pointer_screen: Option<Vec2>,
    /// The same pointer mapped into scene coordinates.
    pub pointer_scene: Option<Vec2>,
}

pub fn draw_scene(surface: &mut impl Surface, view: &SceneView<'_>) {
    backdrop::draw_background(surface, view);
    backdrop::draw_environment(surface, view);
    backdrop::draw_transition_flash(surface, view.bounds, view.transition);

    surface.save();
    view.camera.apply(surface, view.bounds);
    if view.toggles.grid {
        backdrop::draw_grid(surface, view);
    }
    backdrop::draw_streams(surface, view.streams);
    for obj in view.objects {
        draw_object(surface, obj, view.time, view.pointer_scene);
    }
    draw_avatars(surface, view);
    if view.toggles.particles {
        draw_particles(surface, view.particles);
    }
    surface.restore();

    hud::draw_hud(surface, view);
    if view.toggles.scanlines {
        hud::draw_scanlines(surface, view.bounds);
    }
}

/// Stroke width, alpha and glow blur for an object given its selection glow
/// and the pointer distance.
pub fn object_style(selection: f32, pointer_distance: Option<f32>) -> (f32, f32, f32) {
    let mut width = 1.5 + selection * 2.0;
    let mut alpha = 0.7 + selection * 0.3;
    let blur = 15.0 + selection * 25.0;
    if let Some(d) = pointer_distance.filter(|&d| d < PROXIMITY_RADIUS) {
        let near = 1.0 - d / PROXIMITY_RADIUS;
        alpha = (0.7 + near * 0.3).min(1.0).max(alpha);
        width += near * 1.5;
    }
    (width, alpha, blur)
}

pub fn draw_object(
    surface: &mut impl Surface,
    obj: &DecorativeObject,
    time: f32,
    pointer: Option<Vec2>,
) {
    let at = obj.displayed_position(time);
    let distance = pointer.map(|p| p.distance(at));
    let (width, alpha, blur) = object_style(obj.selection_glow(time), distance);

    surface.save();
    surface.translate(at);
    let scale = obj.scale();
    if scale < 1.0 {
        surface.scale(scale);
    }
    surface.rotate(obj.rotation);
    surface.set_glow(blur, obj.color);
    surface.set_line_width(width);
    surface.set_alpha(alpha);
    shapes::stroke_outline(surface, &shapes::outline(obj.kind, obj.size), obj.color);
    surface.restore();

    if distance.is_some_and(|d| d < LABEL_RADIUS) {
        surface.set_alpha(0.6);
        surface.fill_text(
            &obj.label(),
            at - Vec2::new(0.0, obj.size / 2.0 + 12.0),
            9.0,
            TextAlign::Center,
            obj.color,
        );
        surface.set_alpha(1.0);
    }
}

/// Nearest object to an avatar, if close enough to draw a focus line.
pub fn focus_target(
    avatar_at: Vec2,
    objects: &[DecorativeObject],
    time: f32,
    max_distance: f32,
) -> Option<Vec2> {
    let positions = objects.iter().map(|o| o.displayed_position(time));
    let (i, d) = nearest(positions, avatar_at)?;
    (d < max_distance).then(|| objects[i].displayed_position(time))
}

fn draw_avatars(surface: &mut impl Surface, view: &SceneView<'_>) {
    for av in view.avatars {
        let at = av.position(view.time);
        let head = at - Vec2::new(0.0, 10.0);
        let dim = |on: f32, off: f32| if av.active { on } else { off };

        surface.set_glow(8.0, av.color);
        surface.set_alpha(dim(0.3, 0.1));
        surface.fill_circle(at, 8.0, av.color);
        surface.set_alpha(dim(0.5, 0.15));
        surface.fill_circle(head, 5.0, av.color);
        surface.set_glow(0.0, av.color);

        surface.set_alpha(dim(0.4, 0.15));
        surface.fill_text(
            av.label,
            at + Vec2::new(0.0, 18.0),
            7.0,
            TextAlign::Center,
            av.color,
        );

        if av.active && av.shows_focus {
            if let Some(target) = focus_target(at, view.objects, view.time, view.bounds.x * 0.5) {
                surface.set_alpha(0.06);
                surface.set_line_width(0.5);
                surface.set_line_dash(&[4.0, 4.0]);
                surface.stroke_line(head, target, &Paint::Solid(av.color));
                surface.set_line_dash(&[]);
            }
        }
        surface.set_alpha(1.0);
    }
}

fn draw_particles(surface: &mut impl Surface, particles: &[Particle]) {
    for p in particles {
        surface.set_alpha(p.alpha());
        surface.fill_circle(p.position, p.size, p.color);
    }
    surface.set_alpha(1.0);
}
