use glam::Vec2;

use crate::{Config, Side};

/// Playfield geometry. Origin is the top-left corner, y grows downwards.
#[derive(Debug, Clone, Copy)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
    pub paddle_margin: f32,
}

impl GameMap {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.playfield_width,
            height: config.playfield_height,
            paddle_margin: config.paddle_margin,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Ball serve position
    pub fn ball_spawn(&self) -> Vec2 {
        self.center()
    }

    /// Left edge of the paddle on the given side
    pub fn paddle_x(&self, side: Side, paddle_width: f32) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.width - self.paddle_margin - paddle_width,
        }
    }

    /// Top edge of a vertically centered paddle
    pub fn paddle_spawn_y(&self, paddle_height: f32) -> f32 {
        self.height / 2.0 - paddle_height / 2.0
    }

    /// Clamp a paddle's top edge so the paddle stays inside the playfield
    pub fn clamp_paddle_y(&self, y: f32, paddle_height: f32) -> f32 {
        y.clamp(0.0, (self.height - paddle_height).max(0.0))
    }
}
