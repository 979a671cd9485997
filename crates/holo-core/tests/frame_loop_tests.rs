// Host-side tests for the Running/Stopped frame loop with a fake scheduler.

use holo_core::constants::MAX_FRAME_DELTA_SEC;
use holo_core::{FrameLoop, FrameScheduler, LoopState};
use instant::{Duration, Instant};

#[derive(Default)]
struct FakeScheduler {
    next: u32,
    requested: Vec<u32>,
    cancelled: Vec<u32>,
}

impl FrameScheduler for FakeScheduler {
    type Handle = u32;

    fn request_frame(&mut self) -> Option<u32> {
        self.next += 1;
        self.requested.push(self.next);
        Some(self.next)
    }

    fn cancel_frame(&mut self, handle: u32) {
        self.cancelled.push(handle);
    }
}

#[test]
fn starts_stopped_with_nothing_scheduled() {
    let lp = FrameLoop::new(FakeScheduler::default());
    assert_eq!(lp.state(), LoopState::Stopped);
    assert!(!lp.has_pending_frame());
    assert!(lp.scheduler().requested.is_empty());
}

#[test]
fn start_is_idempotent() {
    let mut lp = FrameLoop::new(FakeScheduler::default());
    lp.start();
    lp.start();
    assert!(lp.is_running());
    assert_eq!(lp.scheduler().requested, vec![1]);
}

#[test]
fn each_frame_schedules_the_next() {
    let mut lp = FrameLoop::new(FakeScheduler::default());
    lp.start();
    let t0 = Instant::now();
    let mut deltas = Vec::new();
    assert!(lp.run_frame(t0, |dt| deltas.push(dt)));
    assert!(lp.run_frame(t0 + Duration::from_millis(16), |dt| deltas.push(dt)));
    assert_eq!(deltas[0], 0.0);
    assert!((deltas[1] - 0.016).abs() < 1e-4);
    assert_eq!(lp.scheduler().requested, vec![1, 2, 3]);
}

#[test]
fn long_gaps_are_clamped() {
    let mut lp = FrameLoop::new(FakeScheduler::default());
    lp.start();
    let t0 = Instant::now();
    lp.run_frame(t0, |_| {});
    let mut dt = 0.0;
    lp.run_frame(t0 + Duration::from_secs(3), |d| dt = d);
    assert_eq!(dt, MAX_FRAME_DELTA_SEC);
}

#[test]
fn no_frame_runs_after_stop() {
    let mut lp = FrameLoop::new(FakeScheduler::default());
    lp.start();
    let t0 = Instant::now();
    lp.run_frame(t0, |_| {});
    lp.stop();
    assert!(!lp.has_pending_frame());
    assert_eq!(lp.scheduler().cancelled, vec![2]);

    // A callback that was already in flight when stop ran.
    let mut ran = false;
    assert!(!lp.run_frame(t0 + Duration::from_millis(16), |_| ran = true));
    assert!(!ran);
    assert_eq!(lp.scheduler().requested.len(), 2);
}

#[test]
fn stop_is_safe_from_any_state() {
    let mut lp = FrameLoop::new(FakeScheduler::default());
    lp.stop();
    lp.stop();
    assert_eq!(lp.state(), LoopState::Stopped);
    assert!(lp.scheduler().cancelled.is_empty());

    lp.start();
    lp.stop();
    lp.start();
    assert!(lp.is_running());
    assert_eq!(lp.scheduler().cancelled, vec![1]);
    assert_eq!(lp.scheduler().requested, vec![1, 2]);
}

#[test]
fn restart_resets_the_delta() {
    let mut lp = FrameLoop::new(FakeScheduler::default());
    lp.start();
    let t0 = Instant::now();
    lp.run_frame(t0, |_| {});
    lp.stop();
    lp.start();
    let mut dt = -1.0;
    lp.run_frame(t0 + Duration::from_millis(50), |d| dt = d);
    assert_eq!(dt, 0.0);
}
