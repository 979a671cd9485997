// Shared animation and layout tuning constants used by the classroom engine,
// the hero brain and the web frontend.

use std::f32::consts::TAU;

// Object float and growth
pub const FLOAT_AMPLITUDE: f32 = 10.0; // px of vertical bob for every object
pub const FLOAT_SPEED_MIN: f32 = 0.5;
pub const FLOAT_SPEED_SPAN: f32 = 1.0;
pub const SCALE_IN_RATE_PER_SEC: f32 = 3.0; // spawned objects reach full size in 1/3 s
pub const SELECT_GLOW_DECAY_PER_SEC: f32 = 1.5; // glow fades out in ~0.67 s

// Object sizing and spin (rad per simulated second)
pub const OBJECT_SIZE_MIN: f32 = 22.0;
pub const OBJECT_SIZE_SPAN: f32 = 38.0;
pub const SPIN_MIN_PER_SEC: f32 = 0.3;
pub const SPIN_SPAN_PER_SEC: f32 = 1.2;

// Pointer interaction radii (px)
pub const PROXIMITY_RADIUS: f32 = 80.0;
pub const LABEL_RADIUS: f32 = 60.0;

// Environment transition flash, decays on wall time
pub const THEME_TRANSITION_DECAY_PER_SEC: f32 = 2.0;
pub const THEME_FLASH_ALPHA: f32 = 0.15;

// Camera
pub const ZOOM_MIN: f32 = 0.5;
pub const ZOOM_MAX: f32 = 2.0;
pub const ZOOM_STEP: f32 = 0.15;
pub const ORBIT_RATE_PER_SEC: f32 = 0.3;
pub const ORBIT_SHIFT_PX: f32 = 20.0;

// Particles
pub const PARTICLE_RISE_MIN: f32 = 9.0; // px per simulated second
pub const PARTICLE_RISE_SPAN: f32 = 30.0;
pub const PARTICLE_DRIFT_SPAN: f32 = 18.0;
pub const PARTICLE_SIZE_MAX: f32 = 2.5;
pub const TWINKLE_RATE_PER_SEC: f32 = 3.0;

// Data streams
pub const STREAM_SPEED_MIN: f32 = 60.0;
pub const STREAM_SPEED_SPAN: f32 = 180.0;

// Avatars
pub const AVATAR_NAMES: [&str; 6] = ["AX-7", "QZ-3", "NR-9", "LM-2", "PK-5", "VR-1"];
pub const AVATAR_BOB_PX: f32 = 3.0;
pub const AVATAR_RING_START: f32 = TAU / 8.0;

// Frame loop
pub const MAX_FRAME_DELTA_SEC: f32 = 0.1; // long stalls (tab switch) count as one short frame
pub const FPS_WINDOW_SEC: f32 = 0.5;
pub const SESSION_LENGTH_SEC: f32 = 120.0;

// HUD
pub const RADAR_RADIUS: f32 = 40.0;
pub const RADAR_SWEEP_PER_SEC: f32 = 2.0;
pub const SCANLINE_PITCH_PX: f32 = 3.0;

// Hero brain
pub const BRAIN_RING_NODES: usize = 60;
pub const BRAIN_INNER_NODES: usize = 20;
pub const BRAIN_SIGNALS_PER_SEC: f32 = 1.8;
pub const BRAIN_GLOW_DECAY_PER_SEC: f32 = 2.0;
pub const BRAIN_POINTER_RADIUS: f32 = 150.0;
pub const BRAIN_POINTER_PULL: f32 = 0.1;

// Default palette shared by objects, particles and streams
pub const NEON_PALETTE: [[u8; 3]; 6] = [
    [0, 240, 255],   // cyan
    [176, 0, 255],   // violet
    [0, 255, 136],   // green
    [255, 0, 110],   // pink
    [255, 215, 0],   // gold
    [255, 136, 0],   // orange
];
