use game_core::Clock;
use web_sys::Performance;

/// `performance.now()`, falling back to `Date.now()` where the page has no
/// performance timeline
pub struct PerformanceClock {
    performance: Option<Performance>,
}

impl PerformanceClock {
    pub fn new() -> Self {
        Self {
            performance: web_sys::window().and_then(|w| w.performance()),
        }
    }
}

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        match &self.performance {
            Some(performance) => performance.now(),
            None => js_sys::Date::now(),
        }
    }
}
