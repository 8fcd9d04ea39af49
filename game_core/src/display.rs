//! Output seams between the simulation and the host page

use crate::{Ball, HistoryRecord, Paddle};

/// Draws one frame. Calls arrive in a fixed order:
/// `clear`, `draw_center_line`, left paddle, right paddle, `draw_ball`.
pub trait Renderer {
    fn clear(&mut self);
    fn draw_center_line(&mut self);
    fn draw_paddle(&mut self, paddle: &Paddle);
    fn draw_ball(&mut self, ball: &Ball);
}

/// Page widgets around the playfield. Everything except the scoreboard is
/// optional, so the defaults do nothing.
pub trait Display {
    fn set_scores(&mut self, left: u32, right: u32);

    fn set_elapsed(&mut self, _formatted: &str) {}

    /// Called after every appended record. An empty slice hides the region.
    fn render_history(&mut self, _records: &[HistoryRecord]) {}

    /// Difficulty and name inputs are locked while a match runs
    fn set_inputs_enabled(&mut self, _enabled: bool) {}

    /// Synchronous end-of-match notice
    fn show_summary(&mut self, _record: &HistoryRecord) {}
}
