/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield (canvas pixels, y grows downwards)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_MARGIN: f32 = 20.0;

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const SPIN_FACTOR: f32 = 0.2; // Share of paddle dy added to ball dy on hit

    // Difficulty speeds, per tick (paddle, ball)
    pub const EASY_SPEEDS: (f32, f32) = (4.0, 3.0);
    pub const MEDIUM_SPEEDS: (f32, f32) = (6.0, 5.0);
    pub const HARD_SPEEDS: (f32, f32) = (9.0, 7.0);

    // Score
    pub const WIN_SCORE: u32 = 5; // First to 5 wins

    // Timer
    pub const TIMER_INTERVAL_MS: u32 = 100;

    // Labels
    pub const DEFAULT_PLAYER_NAME: &'static str = "Player";
    pub const OPPONENT_LABEL: &'static str = "AI";
}
