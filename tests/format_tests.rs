// Host-side tests for status readout formatting.

mod format {
    include!("../src/format.rs");
}

use format::*;
use glam::Vec2;

#[test]
fn clocks_pad_seconds() {
    assert_eq!(short_clock(0.0), "0:00");
    assert_eq!(short_clock(65.9), "1:05");
    assert_eq!(long_clock(65.9), "01:05");
    assert_eq!(long_clock(3599.0), "59:59");
}

#[test]
fn negative_time_reads_as_zero() {
    assert_eq!(short_clock(-3.0), "0:00");
    assert_eq!(long_clock(-3.0), "00:00");
}

#[test]
fn pointer_and_load_text() {
    assert_eq!(pointer_text(Vec2::new(12.4, 99.6)), "12, 100");
    assert_eq!(percent(95), "95%");
}

#[test]
fn bar_width_is_clamped() {
    assert_eq!(bar_width(0.5), "50.00%");
    assert_eq!(bar_width(1.5), "100.00%");
    assert_eq!(bar_width(-0.1), "0.00%");
}
