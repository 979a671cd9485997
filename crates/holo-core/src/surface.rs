//! Backend-agnostic immediate-mode drawing surface.
//!
//! The renderer only talks to [`Surface`]; the web frontend implements it on
//! top of `CanvasRenderingContext2d`, tests implement it with a recorder.
//! State setters (alpha, line width, glow, dash, transforms) persist until the
//! matching `restore`, mirroring the canvas 2D model.

use glam::Vec2;
use smallvec::SmallVec;

/// Straight-alpha sRGB color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub const fn from_array(c: [u8; 3]) -> Self {
        Self::rgb(c[0], c[1], c[2])
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba()` form understood by canvas style setters.
    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

pub type Stops = SmallVec<[ColorStop; 4]>;

#[derive(Clone, Debug, PartialEq)]
pub enum Gradient {
    Linear {
        from: Vec2,
        to: Vec2,
        stops: Stops,
    },
    Radial {
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        stops: Stops,
    },
}

impl Gradient {
    pub fn linear(from: Vec2, to: Vec2, stops: &[(f32, Rgba)]) -> Self {
        Gradient::Linear {
            from,
            to,
            stops: collect_stops(stops),
        }
    }

    pub fn radial(center: Vec2, outer_radius: f32, stops: &[(f32, Rgba)]) -> Self {
        Gradient::Radial {
            center,
            inner_radius: 0.0,
            outer_radius,
            stops: collect_stops(stops),
        }
    }

    pub fn stops(&self) -> &[ColorStop] {
        match self {
            Gradient::Linear { stops, .. } | Gradient::Radial { stops, .. } => stops,
        }
    }
}

fn collect_stops(stops: &[(f32, Rgba)]) -> Stops {
    stops
        .iter()
        .map(|&(offset, color)| ColorStop {
            offset: offset.clamp(0.0, 1.0),
            color,
        })
        .collect()
}

/// Fill or stroke source.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Gradient(Gradient),
}

impl From<Rgba> for Paint {
    fn from(c: Rgba) -> Self {
        Paint::Solid(c)
    }
}

impl From<Gradient> for Paint {
    fn from(g: Gradient) -> Self {
        Paint::Gradient(g)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
}

pub trait Surface {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn scale(&mut self, factor: f32);
    fn rotate(&mut self, radians: f32);

    fn set_alpha(&mut self, alpha: f32);
    fn set_line_width(&mut self, width: f32);
    fn set_line_dash(&mut self, dash: &[f32]);
    /// Soft shadow around subsequent strokes and fills; `blur` of 0 disables it.
    fn set_glow(&mut self, blur: f32, color: Rgba);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, paint: &Paint);
    fn stroke_polyline(&mut self, points: &[Vec2], closed: bool, color: Rgba);
    fn stroke_ellipse(&mut self, center: Vec2, radii: Vec2, rotation: f32, color: Rgba);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.stroke_ellipse(center, Vec2::splat(radius), 0.0, color);
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: &Paint);
    fn fill_text(&mut self, text: &str, at: Vec2, size_px: f32, align: TextAlign, color: Rgba);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_form_and_alpha_clamp() {
        assert_eq!(Rgba::rgb(0, 240, 255).to_css(), "rgba(0, 240, 255, 1)");
        assert_eq!(Rgba::WHITE.with_alpha(3.0).a, 1.0);
        assert_eq!(Rgba::WHITE.with_alpha(-1.0).a, 0.0);
    }

    #[test]
    fn gradient_stops_are_clamped() {
        let g = Gradient::linear(Vec2::ZERO, Vec2::X, &[(-0.5, Rgba::BLACK), (1.5, Rgba::WHITE)]);
        let offsets: Vec<f32> = g.stops().iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 1.0]);
    }
}
