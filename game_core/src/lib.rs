pub mod components;
pub mod config;
pub mod display;
pub mod fsm;
pub mod history;
pub mod map;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;
pub mod timer;

pub use components::*;
pub use config::*;
pub use display::*;
pub use fsm::*;
pub use history::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use session::*;
pub use timer::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one physics tick: integrate, walls, left paddle, right paddle, scoring.
///
/// Only the ball is mutated. Serving after a point and score bookkeeping are
/// left to the caller.
pub fn advance(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    events: &mut Events,
) -> CollisionOutcome {
    // Clear events at start of tick
    events.clear();

    // 1. Move ball
    move_ball(world);

    // 2. Top/bottom walls
    check_wall_collisions(world, map, events);

    // 3. Paddles (left, then right)
    check_paddle_collisions(world, config, events);

    // 4. Check scoring (ball exited playfield)
    check_scoring(world, map, events)
}

/// Serve the ball from the center. `direction` is +1 (right) or -1 (left).
pub fn reset_ball(
    world: &mut World,
    map: &GameMap,
    direction: f32,
    ball_speed: f32,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(map.ball_spawn(), direction, ball_speed, rng);
    }
}

/// Helper to create a paddle entity
pub fn create_paddle(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    side: Side,
    y: f32,
) -> hecs::Entity {
    let x = map.paddle_x(side, config.paddle_width);
    world.spawn((Paddle::new(
        side,
        x,
        y,
        config.paddle_width,
        config.paddle_height,
    ),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2, radius: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, radius),))
}
