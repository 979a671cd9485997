//! 2D camera: zoom about the canvas centre plus an optional auto-orbit sway.
//!
//! The renderer applies [`CameraState::apply`] around the grid, object and
//! particle layers only; the HUD stays screen-fixed. Pointer input goes through
//! [`CameraState::screen_to_scene`] so picking agrees with what is drawn.

use crate::constants::*;
use crate::surface::Surface;
use glam::Vec2;

#[derive(Clone, Debug)]
pub struct CameraState {
    zoom: f32,
    pub auto_orbit: bool,
    pub orbit_angle: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            auto_orbit: false,
            orbit_angle: 0.0,
        }
    }
}

impl CameraState {
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set zoom, clamped into `[ZOOM_MIN, ZOOM_MAX]`. NaN resets to 1.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = if zoom.is_nan() {
            1.0
        } else {
            zoom.clamp(ZOOM_MIN, ZOOM_MAX)
        };
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    /// Advance the orbit angle when auto-orbit is on.
    pub fn advance(&mut self, sim_dt: f32) {
        if self.auto_orbit {
            self.orbit_angle += sim_dt * ORBIT_RATE_PER_SEC;
        }
    }

    /// Horizontal sway applied after zoom, bounded by `ORBIT_SHIFT_PX`.
    pub fn orbit_shift(&self) -> f32 {
        if self.auto_orbit {
            self.orbit_angle.sin() * ORBIT_SHIFT_PX
        } else {
            0.0
        }
    }

    pub fn scene_to_screen(&self, p: Vec2, bounds: Vec2) -> Vec2 {
        let c = bounds * 0.5;
        (p + Vec2::new(self.orbit_shift(), 0.0) - c) * self.zoom + c
    }

    pub fn screen_to_scene(&self, p: Vec2, bounds: Vec2) -> Vec2 {
        let c = bounds * 0.5;
        (p - c) / self.zoom + c - Vec2::new(self.orbit_shift(), 0.0)
    }

    /// Push the camera transform onto `surface`; the caller restores.
    pub fn apply(&self, surface: &mut impl Surface, bounds: Vec2) {
        let c = bounds * 0.5;
        if self.zoom != 1.0 {
            surface.translate(c);
            surface.scale(self.zoom);
            surface.translate(-c);
        }
        let shift = self.orbit_shift();
        if shift != 0.0 {
            surface.translate(Vec2::new(shift, 0.0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_is_clamped() {
        let mut cam = CameraState::default();
        cam.set_zoom(5.0);
        assert_eq!(cam.zoom(), 2.0);
        cam.set_zoom(-1.0);
        assert_eq!(cam.zoom(), 0.5);
        cam.set_zoom(f32::NAN);
        assert_eq!(cam.zoom(), 1.0);
        for _ in 0..50 {
            cam.zoom_in();
        }
        assert_eq!(cam.zoom(), ZOOM_MAX);
    }

    #[test]
    fn screen_scene_mapping_round_trips() {
        let mut cam = CameraState::default();
        cam.set_zoom(1.6);
        cam.auto_orbit = true;
        cam.advance(2.0);
        let bounds = Vec2::new(800.0, 600.0);
        let p = Vec2::new(123.0, 456.0);
        let back = cam.screen_to_scene(cam.scene_to_screen(p, bounds), bounds);
        assert!(back.distance(p) < 1e-3);
    }

    #[test]
    fn orbit_only_moves_when_enabled() {
        let mut cam = CameraState::default();
        cam.advance(10.0);
        assert_eq!(cam.orbit_angle, 0.0);
        assert_eq!(cam.orbit_shift(), 0.0);
        cam.auto_orbit = true;
        cam.advance(1.0);
        assert!(cam.orbit_angle > 0.0);
        assert!(cam.orbit_shift().abs() <= ORBIT_SHIFT_PX);
    }
}
