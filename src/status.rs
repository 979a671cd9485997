use crate::constants::*;
use crate::dom;
use crate::format;
use glam::Vec2;
use holo_core::{EnvironmentTheme, Engine};
use web_sys as web;

/// Writes engine queries into the classroom's status readouts.
pub struct StatusPanel {
    document: web::Document,
    since_refresh: f32,
}

impl StatusPanel {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            since_refresh: 0.0,
        }
    }

    /// Per-frame update: the timeline every frame, the counters and fps on
    /// the refresh interval.
    pub fn tick(&mut self, wall_dt: f32, engine: &Engine) {
        self.show_timeline(engine);
        self.since_refresh += wall_dt;
        if self.since_refresh >= STATUS_REFRESH_SEC {
            self.since_refresh = 0.0;
            self.show_counts(engine);
            let d = &self.document;
            dom::set_text(d, FPS_ID, &format!("{:.0}", engine.current_fps()));
            dom::set_text(d, LOAD_ID, &format::percent(engine.load_estimate()));
        }
    }

    pub fn show_counts(&self, engine: &Engine) {
        let d = &self.document;
        dom::set_text(d, OBJ_COUNT_ID, &engine.object_count().to_string());
        dom::set_text(d, PARTICLE_COUNT_ID, &engine.particle_count().to_string());
    }

    pub fn show_theme(&self, theme: &EnvironmentTheme) {
        dom::set_text(&self.document, ENV_NAME_ID, theme.title);
    }

    pub fn show_pointer(&self, p: Vec2) {
        dom::set_text(&self.document, MOUSE_POS_ID, &format::pointer_text(p));
    }

    fn show_timeline(&self, engine: &Engine) {
        let d = &self.document;
        let session = engine.session_seconds();
        dom::set_width(d, TIMELINE_BAR_ID, &format::bar_width(engine.session_progress()));
        dom::set_text(
            d,
            TIMELINE_LABEL_ID,
            &format::short_clock(session.rem_euclid(holo_core::constants::SESSION_LENGTH_SEC)),
        );
        dom::set_text(d, ELAPSED_ID, &format::long_clock(session));
    }
}
