//! Running/Stopped frame loop driven by a host scheduler.
//!
//! The host (requestAnimationFrame on the web) owns the actual callback and
//! forwards each firing to [`FrameLoop::run_frame`]. The loop decides whether
//! the frame runs and whether another one gets scheduled.

use crate::constants::MAX_FRAME_DELTA_SEC;
use instant::Instant;

/// Host hook for scheduling the next display refresh.
pub trait FrameScheduler {
    type Handle: Copy;

    /// Request one callback at the next refresh. `None` if the host cannot.
    fn request_frame(&mut self) -> Option<Self::Handle>;
    fn cancel_frame(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    state: LoopState,
    pending: Option<S::Handle>,
    last_frame: Option<Instant>,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            state: LoopState::Stopped,
            pending: None,
            last_frame: None,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Enter Running and schedule the first frame. No-op when already running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        log::info!("[loop] start");
        self.state = LoopState::Running;
        self.last_frame = None;
        self.pending = self.scheduler.request_frame();
    }

    /// Enter Stopped and cancel any scheduled frame. Safe from any state.
    pub fn stop(&mut self) {
        if let Some(h) = self.pending.take() {
            self.scheduler.cancel_frame(h);
        }
        if self.is_running() {
            log::info!("[loop] stop");
        }
        self.state = LoopState::Stopped;
    }

    /// Handle a scheduled frame firing at `now`.
    ///
    /// Runs `body` with the clamped wall delta since the previous frame (0 for
    /// the first frame after a start), then schedules the next frame if the
    /// loop is still running. Returns false when the frame was skipped.
    pub fn run_frame(&mut self, now: Instant, body: impl FnOnce(f32)) -> bool {
        self.pending = None;
        if !self.is_running() {
            return false;
        }
        let dt = match self.last_frame {
            Some(prev) if now > prev => (now - prev).as_secs_f32().min(MAX_FRAME_DELTA_SEC),
            _ => 0.0,
        };
        self.last_frame = Some(now);
        body(dt);
        if self.is_running() {
            self.pending = self.scheduler.request_frame();
        }
        true
    }
}
