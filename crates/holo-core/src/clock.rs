//! Simulated time source.
//!
//! Every time-based motion formula reads [`Clock::elapsed`] rather than a
//! frame counter, so what is on screen depends only on simulated time and
//! each object's phase offset, never on the display refresh rate.

#[derive(Clone, Debug, Default)]
pub struct Clock {
    elapsed: f32,
    paused: bool,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by a wall-clock delta and return the simulated delta.
    ///
    /// Returns 0 while paused. Negative or non-finite deltas are ignored.
    pub fn tick(&mut self, wall_dt: f32) -> f32 {
        if self.paused || !wall_dt.is_finite() || wall_dt <= 0.0 {
            return 0.0;
        }
        self.elapsed += wall_dt;
        wall_dt
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

/// Frames-per-second meter averaged over a fixed window of wall time.
#[derive(Clone, Debug)]
pub struct FpsMeter {
    window_sec: f32,
    frames: u32,
    accum: f32,
    fps: f32,
}

impl FpsMeter {
    pub fn new(window_sec: f32) -> Self {
        Self {
            window_sec,
            frames: 0,
            accum: 0.0,
            fps: 60.0,
        }
    }

    pub fn record(&mut self, wall_dt: f32) {
        self.frames += 1;
        self.accum += wall_dt.max(0.0);
        if self.accum >= self.window_sec {
            self.fps = (self.frames as f32 / self.accum).round();
            self.frames = 0;
            self.accum = 0.0;
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paused_clock_returns_zero_and_holds_time() {
        let mut clock = Clock::new();
        assert_eq!(clock.tick(0.5), 0.5);
        clock.set_paused(true);
        for _ in 0..10 {
            assert_eq!(clock.tick(0.5), 0.0);
        }
        assert_eq!(clock.elapsed(), 0.5);
        clock.set_paused(false);
        assert_eq!(clock.tick(0.25), 0.25);
        assert_eq!(clock.elapsed(), 0.75);
    }

    #[test]
    fn bad_deltas_do_not_move_time() {
        let mut clock = Clock::new();
        assert_eq!(clock.tick(-1.0), 0.0);
        assert_eq!(clock.tick(f32::NAN), 0.0);
        assert_eq!(clock.tick(f32::INFINITY), 0.0);
        assert_eq!(clock.elapsed(), 0.0);
    }

    #[test]
    fn fps_meter_averages_over_window() {
        let mut meter = FpsMeter::new(0.5);
        for _ in 0..16 {
            meter.record(1.0 / 30.0);
        }
        assert!((meter.fps() - 30.0).abs() <= 1.0, "fps {}", meter.fps());
    }
}
