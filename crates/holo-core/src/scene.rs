//! Decorative objects and the insertion-ordered store that owns them.

use crate::constants::*;
use crate::surface::Rgba;
use fnv::FnvHashMap;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;
use std::fmt;
use std::str::FromStr;

pub use crate::ambient::{AvatarFigure, DataStream, Nebula, Particle};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ShapeKind {
    #[default]
    Cube,
    Sphere,
    Pyramid,
    Ring,
    Helix,
    Torus,
    Star,
    Dna,
    Avatar,
    Particle,
}

/// Shapes used for the seeded scene, cycled in this order.
pub const SEED_SHAPES: [ShapeKind; 8] = [
    ShapeKind::Cube,
    ShapeKind::Sphere,
    ShapeKind::Pyramid,
    ShapeKind::Ring,
    ShapeKind::Helix,
    ShapeKind::Torus,
    ShapeKind::Star,
    ShapeKind::Dna,
];

pub const ALL_SHAPES: [ShapeKind; 10] = [
    ShapeKind::Cube,
    ShapeKind::Sphere,
    ShapeKind::Pyramid,
    ShapeKind::Ring,
    ShapeKind::Helix,
    ShapeKind::Torus,
    ShapeKind::Star,
    ShapeKind::Dna,
    ShapeKind::Avatar,
    ShapeKind::Particle,
];

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Cube => "cube",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Pyramid => "pyramid",
            ShapeKind::Ring => "ring",
            ShapeKind::Helix => "helix",
            ShapeKind::Torus => "torus",
            ShapeKind::Star => "star",
            ShapeKind::Dna => "dna",
            ShapeKind::Avatar => "avatar",
            ShapeKind::Particle => "particle",
        }
    }

    /// Parse a shape name; unknown names draw as a cube.
    pub fn parse_lossy(name: &str) -> ShapeKind {
        name.parse().unwrap_or_else(|e| {
            log::warn!("{e}; drawing a cube");
            ShapeKind::Cube
        })
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = crate::UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        ALL_SHAPES
            .into_iter()
            .find(|k| k.name() == lowered)
            .ok_or_else(|| crate::UnknownName::Shape(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Seeded,
    Spawned,
}

#[derive(Clone, Debug)]
pub struct DecorativeObject {
    pub id: ObjectId,
    pub kind: ShapeKind,
    pub origin: Origin,
    /// Rest position before the float offset.
    pub anchor: Vec2,
    pub size: f32,
    /// Radians, kept in `[0, TAU)`.
    pub rotation: f32,
    /// Radians per simulated second.
    pub spin: f32,
    pub color: Rgba,
    pub phase: f32,
    pub float_speed: f32,
    pub selected: bool,
    pub select_time: f32,
    /// `Some` while growing in after a spawn; always within `[0, 1]`.
    pub spawn_scale: Option<f32>,
}

impl DecorativeObject {
    /// Build an object with randomized size, spin, phase and color.
    pub fn random(
        id: ObjectId,
        kind: ShapeKind,
        anchor: Vec2,
        origin: Origin,
        rng: &mut impl Rng,
    ) -> Self {
        let color = NEON_PALETTE[rng.gen_range(0..5)];
        let spawn_scale = match origin {
            Origin::Spawned => Some(0.0),
            Origin::Seeded => None,
        };
        Self {
            id,
            kind,
            origin,
            anchor,
            size: OBJECT_SIZE_MIN + rng.gen::<f32>() * OBJECT_SIZE_SPAN,
            rotation: rng.gen::<f32>() * TAU,
            spin: SPIN_MIN_PER_SEC + rng.gen::<f32>() * SPIN_SPAN_PER_SEC,
            color: Rgba::from_array(color),
            phase: rng.gen::<f32>() * TAU,
            float_speed: FLOAT_SPEED_MIN + rng.gen::<f32>() * FLOAT_SPEED_SPAN,
            selected: false,
            select_time: 0.0,
            spawn_scale,
        }
    }

    /// Vertical float term at simulated time `time`.
    #[inline]
    pub fn float_offset(&self, time: f32) -> f32 {
        FLOAT_AMPLITUDE * (time * self.float_speed + self.phase).sin()
    }

    /// Where the object is drawn (and clicked) at simulated time `time`.
    ///
    /// Renderer, picker, radar and avatar focus all go through this.
    #[inline]
    pub fn displayed_position(&self, time: f32) -> Vec2 {
        Vec2::new(self.anchor.x, self.anchor.y + self.float_offset(time))
    }

    /// Selection glow in `[0, 1]` at simulated time `time`.
    pub fn selection_glow(&self, time: f32) -> f32 {
        if !self.selected {
            return 0.0;
        }
        (1.0 - (time - self.select_time) * SELECT_GLOW_DECAY_PER_SEC).clamp(0.0, 1.0)
    }

    /// Render scale from the spawn animation, 1 once fully grown.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.spawn_scale.unwrap_or(1.0)
    }

    pub fn hit_test(&self, point: Vec2, time: f32) -> bool {
        self.displayed_position(time).distance(point) < self.size
    }

    pub fn label(&self) -> String {
        self.kind.name().to_ascii_uppercase()
    }
}

/// Insertion-ordered owner of every decorative object.
///
/// Iteration order is draw order: later objects are drawn on top.
#[derive(Debug, Default)]
pub struct SceneObjectStore {
    objects: Vec<DecorativeObject>,
    index: FnvHashMap<ObjectId, usize>,
}

impl SceneObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, object: DecorativeObject) {
        self.index.insert(object.id, self.objects.len());
        self.objects.push(object);
    }

    pub fn remove_by_id(&mut self, id: ObjectId) -> Option<DecorativeObject> {
        let i = self.index.remove(&id)?;
        let removed = self.objects.remove(i);
        self.reindex();
        Some(removed)
    }

    pub fn remove_all(&mut self) {
        self.objects.clear();
        self.index.clear();
    }

    /// Keep objects matching `keep`; returns how many were removed.
    pub fn retain(&mut self, keep: impl FnMut(&DecorativeObject) -> bool) -> usize {
        let before = self.objects.len();
        self.objects.retain(keep);
        self.reindex();
        before - self.objects.len()
    }

    pub fn get(&self, id: ObjectId) -> Option<&DecorativeObject> {
        self.index.get(&id).map(|&i| &self.objects[i])
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut DecorativeObject> {
        let i = *self.index.get(&id)?;
        self.objects.get_mut(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DecorativeObject> {
        self.objects.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, DecorativeObject> {
        self.objects.iter_mut()
    }

    pub fn as_slice(&self) -> &[DecorativeObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (i, o) in self.objects.iter().enumerate() {
            self.index.insert(o.id, i);
        }
    }
}

impl<'a> IntoIterator for &'a SceneObjectStore {
    type Item = &'a DecorativeObject;
    type IntoIter = std::slice::Iter<'a, DecorativeObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
