// Text for the status readouts.

use glam::Vec2;

/// Whole-second clock as `M:SS`, e.g. `1:05`.
pub fn short_clock(seconds: f32) -> String {
    let s = seconds.max(0.0).floor() as u32;
    format!("{}:{:02}", s / 60, s % 60)
}

/// Whole-second clock as `MM:SS`, e.g. `01:05`.
pub fn long_clock(seconds: f32) -> String {
    let s = seconds.max(0.0).floor() as u32;
    format!("{:02}:{:02}", s / 60, s % 60)
}

pub fn pointer_text(p: Vec2) -> String {
    format!("{}, {}", p.x.round() as i32, p.y.round() as i32)
}

pub fn percent(value: u32) -> String {
    format!("{value}%")
}

/// CSS width for a progress fraction in `[0, 1]`.
pub fn bar_width(progress: f32) -> String {
    format!("{:.2}%", (progress * 100.0).clamp(0.0, 100.0))
}
