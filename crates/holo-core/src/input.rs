use crate::scene::{DecorativeObject, ObjectId};
use glam::Vec2;

/// Last known pointer state in canvas-local coordinates.
#[derive(Default, Clone, Copy, Debug)]
pub struct InputTracker {
    position: Vec2,
    pressed: bool,
    inside: bool,
}

impl InputTracker {
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// False until the first move and after the pointer leaves the canvas.
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    pub fn move_to(&mut self, position: Vec2) {
        if position.is_finite() {
            self.position = position;
            self.inside = true;
        }
    }

    pub fn press(&mut self, position: Vec2) {
        self.move_to(position);
        self.pressed = true;
    }

    pub fn release(&mut self) {
        self.pressed = false;
    }

    pub fn leave(&mut self) {
        self.pressed = false;
        self.inside = false;
    }
}

/// Topmost object whose displayed position at `time` lies within its size
/// of `point`. Later-inserted objects win ties because they draw on top.
#[inline]
pub fn pick(objects: &[DecorativeObject], point: Vec2, time: f32) -> Option<ObjectId> {
    objects
        .iter()
        .rev()
        .find(|o| o.hit_test(point, time))
        .map(|o| o.id)
}
