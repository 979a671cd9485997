// Recording surface shared by the host-side tests.

#![allow(dead_code)]

use glam::Vec2;
use holo_core::{Paint, Rgba, Surface, TextAlign};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Save,
    Restore,
    Translate(Vec2),
    Scale(f32),
    Rotate(f32),
    Alpha(f32),
    LineWidth(f32),
    Dash(Vec<f32>),
    Glow(f32),
    Line(Vec2, Vec2),
    Polyline(usize, bool),
    Ellipse(Vec2, Vec2),
    FillCircle(Vec2, f32, Rgba),
    FillRect(Vec2, Vec2, Paint),
    Text(String, Vec2),
}

/// Records every call along with the save/restore depth it happened at.
#[derive(Default)]
pub struct Recorder {
    pub calls: Vec<(usize, Call)>,
    depth: usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, call: Call) {
        self.calls.push((self.depth, call));
    }

    pub fn texts(&self) -> Vec<(usize, String)> {
        self.calls
            .iter()
            .filter_map(|(d, c)| match c {
                Call::Text(s, _) => Some((*d, s.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn position(&self, pred: impl Fn(&Call) -> bool) -> Option<usize> {
        self.calls.iter().position(|(_, c)| pred(c))
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|(_, c)| pred(c)).count()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Surface for Recorder {
    fn save(&mut self) {
        self.push(Call::Save);
        self.depth += 1;
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.push(Call::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.push(Call::Translate(offset));
    }

    fn scale(&mut self, factor: f32) {
        self.push(Call::Scale(factor));
    }

    fn rotate(&mut self, radians: f32) {
        self.push(Call::Rotate(radians));
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.push(Call::Alpha(alpha));
    }

    fn set_line_width(&mut self, width: f32) {
        self.push(Call::LineWidth(width));
    }

    fn set_line_dash(&mut self, dash: &[f32]) {
        self.push(Call::Dash(dash.to_vec()));
    }

    fn set_glow(&mut self, blur: f32, _color: Rgba) {
        self.push(Call::Glow(blur));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, _paint: &Paint) {
        self.push(Call::Line(from, to));
    }

    fn stroke_polyline(&mut self, points: &[Vec2], closed: bool, _color: Rgba) {
        self.push(Call::Polyline(points.len(), closed));
    }

    fn stroke_ellipse(&mut self, center: Vec2, radii: Vec2, _rotation: f32, _color: Rgba) {
        self.push(Call::Ellipse(center, radii));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.push(Call::FillCircle(center, radius, color));
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: &Paint) {
        self.push(Call::FillRect(origin, size, paint.clone()));
    }

    fn fill_text(&mut self, text: &str, at: Vec2, _size_px: f32, _align: TextAlign, _color: Rgba) {
        self.push(Call::Text(text.to_string(), at));
    }
}
