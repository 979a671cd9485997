/// Page wiring constants: element ids, selectors and display limits.
///
/// Engine tuning lives in `holo_core::constants`; this module only holds what
/// the web front end needs to find and size its canvases.
// Canvas element ids
pub const VR_CANVAS_ID: &str = "vr-canvas";
pub const BRAIN_CANVAS_ID: &str = "hero-brain-canvas";

// Backing store scale is capped to keep fill cost bounded on dense screens
pub const DPR_CAP: f64 = 2.0;

// Fraction of the classroom canvas that must be visible for it to animate
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

// Seconds between refreshes of the counter/fps/load readouts
pub const STATUS_REFRESH_SEC: f32 = 0.5;

pub const BRAIN_SEED: u64 = 7;

pub const FONT_FAMILY: &str = "\"JetBrains Mono\", monospace";

// Control selectors and ids
pub const ENV_BUTTON_SELECTOR: &str = ".vr-env-btn";
pub const SPAWN_BUTTON_SELECTOR: &str = ".vr-spawn-btn";
pub const ACTIVE_CLASS: &str = "active";
pub const CLEAR_BUTTON_ID: &str = "vr-clear-objects";
pub const ORBIT_BUTTON_ID: &str = "vr-orbit-toggle";
pub const ZOOM_IN_BUTTON_ID: &str = "vr-zoom-in";
pub const ZOOM_OUT_BUTTON_ID: &str = "vr-zoom-out";
pub const GRID_BUTTON_ID: &str = "vr-grid-toggle";
pub const PARTICLES_BUTTON_ID: &str = "vr-particles-toggle";
pub const SCANLINES_BUTTON_ID: &str = "vr-scanlines-toggle";
pub const PLAY_PAUSE_BUTTON_ID: &str = "vr-play-pause";

// Status readouts
pub const OBJ_COUNT_ID: &str = "vr-obj-count";
pub const PARTICLE_COUNT_ID: &str = "vr-particle-count";
pub const FPS_ID: &str = "vr-fps";
pub const LOAD_ID: &str = "vr-gpu";
pub const ENV_NAME_ID: &str = "vr-env-name";
pub const TIMELINE_BAR_ID: &str = "vr-timeline-bar";
pub const TIMELINE_LABEL_ID: &str = "vr-timeline-label";
pub const ELAPSED_ID: &str = "vr-elapsed";
pub const MOUSE_POS_ID: &str = "vr-mouse-pos";
