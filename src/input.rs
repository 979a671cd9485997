use super::constants::DPR_CAP;
use glam::Vec2;

// ---------------- Sizing ----------------

/// Device pixel ratio used for the backing store: at most `DPR_CAP`, and 1
/// when the browser reports something unusable.
#[inline]
pub fn capped_dpr(dpr: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 {
        dpr.min(DPR_CAP)
    } else {
        1.0
    }
}

/// Backing store size in device pixels for a CSS size, never below 1x1.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let px = |css: f64| (css.max(0.0) * dpr).round() as u32;
    (px(css_width).max(1), px(css_height).max(1))
}

// ---------------- Pointer ----------------

/// Pointer position in canvas CSS pixels from client coordinates and the
/// canvas bounding rect origin. The engine works in CSS pixels; the surface
/// applies the device pixel ratio.
#[inline]
pub fn pointer_local(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Vec2 {
    Vec2::new((client_x - rect_left) as f32, (client_y - rect_top) as f32)
}
