//! The classroom engine: owns every piece of scene state and exposes the
//! lifecycle, scene, camera, input and query surface used by a host.

use crate::ambient::{avatar_seat, seat_avatars};
use crate::animate::{self, Drag};
use crate::camera::CameraState;
use crate::clock::{Clock, FpsMeter};
use crate::constants::*;
use crate::input::{pick, InputTracker};
use crate::render::{self, SceneView, Toggles};
use crate::scene::{
    AvatarFigure, DataStream, DecorativeObject, Nebula, ObjectId, Origin, Particle,
    SceneObjectStore, ShapeKind, SEED_SHAPES,
};
use crate::surface::Surface;
use crate::theme::{EnvironmentTheme, ThemeId};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Size as a vector, never smaller than one pixel on either axis.
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width, self.height).max(Vec2::ONE)
    }
}

/// Per-instance scene population and limits.
#[derive(Clone, Debug)]
pub struct SceneParams {
    pub seed: u64,
    pub seeded_objects: usize,
    pub particles: usize,
    pub avatars: usize,
    pub streams: usize,
    pub nebulae: usize,
    /// Spawning past this evicts the oldest spawned object.
    pub max_spawned: usize,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            seed: 42,
            seeded_objects: 10,
            particles: 80,
            avatars: 6,
            streams: 12,
            nebulae: 5,
            max_spawned: 48,
        }
    }
}

pub struct Engine {
    size: CanvasSize,
    params: SceneParams,
    rng: StdRng,
    clock: Clock,
    fps: FpsMeter,
    running: bool,
    session: f32,
    next_id: u64,
    objects: SceneObjectStore,
    particles: Vec<Particle>,
    streams: Vec<DataStream>,
    nebulae: Vec<Nebula>,
    avatars: Vec<AvatarFigure>,
    input: InputTracker,
    drag: Option<ObjectId>,
    camera: CameraState,
    theme: ThemeId,
    transition: f32,
    toggles: Toggles,
}

impl Engine {
    pub fn create(size: CanvasSize, theme: ThemeId) -> Self {
        Self::with_params(size, theme, SceneParams::default())
    }

    pub fn with_params(size: CanvasSize, theme: ThemeId, params: SceneParams) -> Self {
        let mut engine = Self {
            size,
            rng: StdRng::seed_from_u64(params.seed),
            params,
            clock: Clock::new(),
            fps: FpsMeter::new(FPS_WINDOW_SEC),
            running: false,
            session: 0.0,
            next_id: 1,
            objects: SceneObjectStore::new(),
            particles: Vec::new(),
            streams: Vec::new(),
            nebulae: Vec::new(),
            avatars: Vec::new(),
            input: InputTracker::default(),
            drag: None,
            camera: CameraState::default(),
            theme,
            transition: 0.0,
            toggles: Toggles::default(),
        };
        engine.rebuild_scene();
        log::info!(
            "[engine] {}x{} theme={} objects={} particles={}",
            size.width,
            size.height,
            theme,
            engine.objects.len(),
            engine.particles.len()
        );
        engine
    }

    /// Replace every object, particle, stream, nebula and avatar with a fresh
    /// seeded set laid out for the current size.
    pub fn rebuild_scene(&mut self) {
        let b = self.size.bounds();
        self.objects.remove_all();
        self.drag = None;
        for i in 0..self.params.seeded_objects {
            let at = Vec2::new(
                b.x * 0.15 + self.rng.gen::<f32>() * b.x * 0.7,
                b.y * 0.15 + self.rng.gen::<f32>() * b.y * 0.55,
            );
            self.insert(SEED_SHAPES[i % SEED_SHAPES.len()], at, Origin::Seeded);
        }
        let rng = &mut self.rng;
        self.particles = (0..self.params.particles)
            .map(|_| Particle::random(b, &mut *rng))
            .collect();
        self.streams = (0..self.params.streams)
            .map(|_| DataStream::random(b, &mut *rng))
            .collect();
        self.nebulae = (0..self.params.nebulae)
            .map(|_| Nebula::random(b, &mut *rng))
            .collect();
        self.avatars = seat_avatars(self.params.avatars, b, rng);
    }

    fn insert(&mut self, kind: ShapeKind, at: Vec2, origin: Origin) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        let obj = DecorativeObject::random(id, kind, at, origin, &mut self.rng);
        self.objects.add(obj);
        id
    }

    // ---------------- Lifecycle ----------------

    /// Enter Running. The session timer restarts and any theme flash left
    /// over from before a stop is dropped.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.session = 0.0;
            self.transition = 0.0;
            log::info!("[engine] start");
        }
    }

    pub fn stop(&mut self) {
        if self.running {
            log::info!("[engine] stop");
        }
        self.running = false;
        self.drag = None;
        self.input.release();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = CanvasSize::new(width, height);
        let b = self.size.bounds();
        let count = self.avatars.len();
        for (i, av) in self.avatars.iter_mut().enumerate() {
            av.anchor = avatar_seat(i, count, b);
        }
        log::debug!("[engine] resize {width}x{height}");
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.clock.set_paused(paused);
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    // ---------------- Scene mutation ----------------

    /// Spawn an object, at `position` or at a random spot in the middle of
    /// the canvas. Evicts the oldest spawned object when at the cap.
    pub fn spawn(&mut self, kind: ShapeKind, position: Option<Vec2>) -> ObjectId {
        while self.params.max_spawned > 0 && self.spawned_count() >= self.params.max_spawned {
            let oldest = self
                .objects
                .iter()
                .find(|o| o.origin == Origin::Spawned)
                .map(|o| o.id);
            match oldest {
                Some(id) => {
                    self.remove(id);
                }
                None => break,
            }
        }
        let b = self.size.bounds();
        let at = position.filter(|p| p.is_finite()).unwrap_or_else(|| {
            Vec2::new(
                b.x * 0.3 + self.rng.gen::<f32>() * b.x * 0.4,
                b.y * 0.2 + self.rng.gen::<f32>() * b.y * 0.4,
            )
        });
        let id = self.insert(kind, at, Origin::Spawned);
        log::info!("[spawn] {kind} {id} at ({:.0}, {:.0})", at.x, at.y);
        id
    }

    /// Remove every spawned object, leaving the seeded scene untouched.
    pub fn clear_spawned(&mut self) -> usize {
        let removed = self.objects.retain(|o| o.origin == Origin::Seeded);
        self.forget_missing_drag();
        log::info!("[spawn] cleared {removed}");
        removed
    }

    pub fn clear_all(&mut self) {
        self.objects.remove_all();
        self.drag = None;
    }

    pub fn remove(&mut self, id: ObjectId) -> bool {
        let removed = self.objects.remove_by_id(id).is_some();
        self.forget_missing_drag();
        removed
    }

    fn forget_missing_drag(&mut self) {
        if self.drag.is_some_and(|id| self.objects.get(id).is_none()) {
            self.drag = None;
        }
    }

    pub fn set_theme(&mut self, theme: ThemeId) {
        self.theme = theme;
        self.transition = 1.0;
        log::info!("[theme] {}", theme.theme().title);
    }

    pub fn set_theme_by_name(&mut self, name: &str) {
        self.set_theme(ThemeId::parse_lossy(name));
    }

    // ---------------- Camera and toggles ----------------

    pub fn set_zoom(&mut self, zoom: f32) {
        self.camera.set_zoom(zoom);
    }

    pub fn zoom_in(&mut self) {
        self.camera.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.camera.zoom_out();
    }

    pub fn set_auto_orbit(&mut self, on: bool) {
        self.camera.auto_orbit = on;
    }

    pub fn auto_orbit(&self) -> bool {
        self.camera.auto_orbit
    }

    pub fn set_grid_visible(&mut self, on: bool) {
        self.toggles.grid = on;
    }

    pub fn set_particles_visible(&mut self, on: bool) {
        self.toggles.particles = on;
    }

    pub fn set_scanlines_visible(&mut self, on: bool) {
        self.toggles.scanlines = on;
    }

    pub fn toggles(&self) -> Toggles {
        self.toggles
    }

    // ---------------- Input ----------------

    fn to_scene(&self, screen: Vec2) -> Vec2 {
        self.camera.screen_to_scene(screen, self.size.bounds())
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.input.move_to(Vec2::new(x, y));
    }

    /// Press the pointer; the topmost object under it becomes the drag target.
    pub fn on_pointer_down(&mut self, x: f32, y: f32) {
        let at = Vec2::new(x, y);
        self.input.press(at);
        self.drag = pick(self.objects.as_slice(), self.to_scene(at), self.clock.elapsed());
        if let Some(id) = self.drag {
            log::debug!("[pointer] begin drag {id}");
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.input.release();
        if let Some(id) = self.drag.take() {
            log::debug!("[pointer] end drag {id}");
        }
    }

    pub fn on_pointer_leave(&mut self) {
        self.input.leave();
        self.drag = None;
    }

    /// Select the topmost object under the point; its glow restarts.
    pub fn on_click(&mut self, x: f32, y: f32) -> Option<ObjectId> {
        let now = self.clock.elapsed();
        let id = pick(self.objects.as_slice(), self.to_scene(Vec2::new(x, y)), now)?;
        if let Some(obj) = self.objects.get_mut(id) {
            obj.selected = true;
            obj.select_time = now;
        }
        Some(id)
    }

    // ---------------- Per frame ----------------

    /// Tick the clock and advance all animated state. Returns the simulated
    /// delta; nothing happens while stopped.
    pub fn update(&mut self, wall_dt: f32) -> f32 {
        if !self.running {
            return 0.0;
        }
        self.fps.record(wall_dt);
        let sim_dt = self.clock.tick(wall_dt);
        let time = self.clock.elapsed();
        self.session += sim_dt;
        self.transition = animate::decay(self.transition, THEME_TRANSITION_DECAY_PER_SEC, wall_dt);

        self.camera.advance(sim_dt);
        let drag = self.drag.map(|target| Drag {
            target,
            pointer: self.to_scene(self.input.position()),
        });
        let b = self.size.bounds();
        animate::update_objects(&mut self.objects, sim_dt, time, drag);
        animate::update_particles(&mut self.particles, sim_dt, b);
        animate::update_streams(&mut self.streams, sim_dt, b.x);
        animate::update_nebulae(&mut self.nebulae, sim_dt, b.x);
        sim_dt
    }

    /// Draw the current state. Uses the same simulated time as picking.
    pub fn draw(&self, surface: &mut impl Surface) {
        let pointer = self.input.is_inside().then(|| self.input.position());
        let view = SceneView {
            bounds: self.size.bounds(),
            time: self.clock.elapsed(),
            theme: self.theme.theme(),
            transition: self.transition,
            camera: &self.camera,
            toggles: self.toggles,
            objects: self.objects.as_slice(),
            particles: &self.particles,
            streams: &self.streams,
            nebulae: &self.nebulae,
            avatars: &self.avatars,
            pointer_screen: pointer,
            pointer_scene: pointer.map(|p| self.to_scene(p)),
        };
        render::draw_scene(surface, &view);
    }

    /// One full frame: tick, update, draw. Skipped while stopped.
    pub fn frame(&mut self, wall_dt: f32, surface: &mut impl Surface) -> bool {
        if !self.running {
            return false;
        }
        self.update(wall_dt);
        self.draw(surface);
        true
    }

    // ---------------- Queries ----------------

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn spawned_count(&self) -> usize {
        self.objects
            .iter()
            .filter(|o| o.origin == Origin::Spawned)
            .count()
    }

    /// Particles currently shown; 0 when particles are hidden.
    pub fn particle_count(&self) -> usize {
        if self.toggles.particles {
            self.particles.len()
        } else {
            0
        }
    }

    pub fn current_fps(&self) -> f32 {
        self.fps.fps()
    }

    pub fn elapsed_seconds(&self) -> f32 {
        self.clock.elapsed()
    }

    /// Seconds of unpaused running since the last start.
    pub fn session_seconds(&self) -> f32 {
        self.session
    }

    /// Position within the repeating session timeline, in `[0, 1)`.
    pub fn session_progress(&self) -> f32 {
        self.session.rem_euclid(SESSION_LENGTH_SEC) / SESSION_LENGTH_SEC
    }

    /// Simulated GPU load percentage for the status display.
    pub fn load_estimate(&self) -> u32 {
        let particles = if self.toggles.particles { 15 } else { 0 };
        (20 + self.objects.len() as u32 * 3 + particles).min(95)
    }

    pub fn theme(&self) -> &'static EnvironmentTheme {
        self.theme.theme()
    }

    pub fn transition_intensity(&self) -> f32 {
        self.transition
    }

    pub fn zoom(&self) -> f32 {
        self.camera.zoom()
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// Last pointer position in canvas pixels, before the camera mapping.
    pub fn pointer_position(&self) -> Vec2 {
        self.input.position()
    }

    pub fn drag_target(&self) -> Option<ObjectId> {
        self.drag
    }

    pub fn objects(&self) -> &SceneObjectStore {
        &self.objects
    }

    pub fn object(&self, id: ObjectId) -> Option<&DecorativeObject> {
        self.objects.get(id)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn avatars(&self) -> &[AvatarFigure] {
        &self.avatars
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }
}
