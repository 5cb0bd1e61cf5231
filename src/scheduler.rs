/// Frame scheduler — owns the start/stop lifecycle of the render loop.
///
/// The host drives `tick` with real `Instant`s and paces itself with
/// `frame_sleep`; tests drive it with fabricated instants.  After `stop`
/// returns, `tick` yields `None` until a fresh `start` — no callback can
/// fire against a torn-down surface.

use std::time::{Duration, Instant};

/// Upper bound on a single frame delta.  A stalled terminal (suspend,
/// window drag) must not teleport the simulations when ticks resume.
pub const MAX_DELTA: Duration = Duration::from_millis(250);

#[derive(Debug)]
pub struct FrameScheduler {
    running: bool,
    last_tick: Option<Instant>,
    frame_budget: Duration,
}

impl FrameScheduler {
    /// A stopped scheduler with the given per-frame time budget.
    pub fn new(frame_budget: Duration) -> Self {
        FrameScheduler {
            running: false,
            last_tick: None,
            frame_budget,
        }
    }

    /// Arm the scheduler.  The first accepted tick reports a zero delta.
    pub fn start(&mut self) {
        self.running = true;
        self.last_tick = None;
    }

    /// Disarm the scheduler.  Every subsequent `tick` returns `None` until
    /// `start` is called again.
    pub fn stop(&mut self) {
        self.running = false;
        self.last_tick = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Accept one tick at `now`.  Returns the elapsed time since the
    /// previously accepted tick (clamped to `MAX_DELTA`), or `None` when
    /// the scheduler is stopped.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        if !self.running {
            return None;
        }
        let dt = match self.last_tick {
            Some(prev) => now.saturating_duration_since(prev).min(MAX_DELTA),
            None => Duration::ZERO,
        };
        self.last_tick = Some(now);
        Some(dt)
    }

    /// How long the host should sleep to keep this frame within budget.
    pub fn frame_sleep(&self, frame_start: Instant) -> Duration {
        self.frame_budget
            .saturating_sub(frame_start.elapsed())
    }
}
