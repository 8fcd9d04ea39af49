//! Match timer
//!
//! Wall-clock based: the host samples it on its own interval, independent of
//! the physics tick rate.

use std::time::Duration;

/// Source of wall-clock time in milliseconds
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Accumulates running time across start/stop spans
#[derive(Debug, Clone, Copy, Default)]
pub struct ElapsedTimer {
    accumulated_ms: f64,
    started_at: Option<f64>,
}

impl ElapsedTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now_ms: f64) {
        if self.started_at.is_none() {
            self.started_at = Some(now_ms);
        }
    }

    pub fn stop(&mut self, now_ms: f64) {
        if let Some(started) = self.started_at.take() {
            self.accumulated_ms += (now_ms - started).max(0.0);
        }
    }

    pub fn reset(&mut self) {
        self.accumulated_ms = 0.0;
        self.started_at = None;
    }

    pub fn elapsed(&self, now_ms: f64) -> Duration {
        let running = self
            .started_at
            .map(|started| (now_ms - started).max(0.0))
            .unwrap_or(0.0);
        Duration::from_secs_f64((self.accumulated_ms + running) / 1000.0)
    }
}

/// Format as `MM:SS.D` (tenths truncated)
pub fn format_elapsed(elapsed: Duration) -> String {
    let tenths = elapsed.as_millis() / 100;
    let minutes = tenths / 600;
    let seconds = (tenths / 10) % 60;
    format!("{:02}:{:02}.{}", minutes, seconds, tenths % 10)
}
