//! Procedural animation engine behind the holographic classroom and hero
//! brain canvases.
//!
//! Nothing in this crate touches a platform API: time comes in as deltas,
//! pointer input as canvas-local coordinates, and every frame is drawn
//! through the [`Surface`] trait.

pub mod ambient;
pub mod animate;
pub mod brain;
pub mod camera;
pub mod clock;
pub mod constants;
pub mod engine;
pub mod frame_loop;
pub mod input;
pub mod render;
pub mod scene;
pub mod surface;
pub mod theme;

pub use brain::BrainScene;
pub use camera::CameraState;
pub use clock::{Clock, FpsMeter};
pub use engine::{CanvasSize, Engine, SceneParams};
pub use frame_loop::{FrameLoop, FrameScheduler, LoopState};
pub use input::{pick, InputTracker};
pub use scene::{
    AvatarFigure, DataStream, DecorativeObject, Nebula, ObjectId, Origin, Particle,
    SceneObjectStore, ShapeKind,
};
pub use surface::{Gradient, Paint, Rgba, Surface, TextAlign};
pub use theme::{EnvironmentTheme, ThemeId};

/// A shape or theme name that matches nothing known.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnknownName {
    #[error("unknown shape kind `{0}`")]
    Shape(String),
    #[error("unknown environment theme `{0}`")]
    Theme(String),
}
