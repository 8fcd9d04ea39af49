use glam::Vec2;

/// Side of the playfield. The left paddle is the player, the right one the AI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal direction a ball travels to reach this side
    pub fn direction(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // Left edge
    pub y: f32, // Top edge (clamped to playfield)
    pub width: f32,
    pub height: f32,
    pub dy: f32, // Displacement during the last move, transferred as spin
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            side,
            x,
            y,
            width,
            height,
            dy: 0.0,
        }
    }

    /// Strict vertical overlap with a point
    pub fn spans_y(&self, y: f32) -> bool {
        y > self.y && y < self.y + self.height
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // Center
    pub vel: Vec2, // Displacement per tick
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Serve from `center` towards `direction` (+1 right, -1 left) with a
    /// vertical speed drawn uniformly from `[-speed, speed]`
    pub fn reset(&mut self, center: Vec2, direction: f32, speed: f32, rng: &mut crate::GameRng) {
        use rand::Rng;

        self.pos = center;
        let dy = if speed > 0.0 {
            rng.0.gen_range(-speed..=speed)
        } else {
            0.0
        };
        self.vel = Vec2::new(speed * direction.signum(), dy);
    }
}
