use std::time::Instant;

/// Source of monotonic timestamps
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Production clock backed by `Instant::now`
#[derive(Clone, Copy, Debug, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Measures a single start/stop interval
#[derive(Debug, Clone, Default)]
pub struct Timer<C: Clock = MonotonicClock> {
    clock: C,
    started_at: Option<Instant>,
    stopped_at: Option<Instant>,
    running: bool,
}

impl Timer {
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock)
    }
}

impl<C: Clock> Timer<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            started_at: None,
            stopped_at: None,
            running: false,
        }
    }

    /// Begin a fresh interval, discarding any previous one
    pub fn start(&mut self) {
        self.started_at = Some(self.clock.now());
        self.stopped_at = None;
        self.running = true;
    }

    /// Freeze the interval; no-op unless running
    pub fn stop(&mut self) {
        if self.running {
            self.stopped_at = Some(self.clock.now());
            self.running = false;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed_seconds(&self) -> f64 {
        let end = if self.running {
            Some(self.clock.now())
        } else {
            self.stopped_at
        };

        match (self.started_at, end) {
            (Some(start), Some(end)) => end.saturating_duration_since(start).as_secs_f64(),
            _ => 0.0,
        }
    }
}
