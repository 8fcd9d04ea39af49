use crate::{Ball, Config, Events, GameMap, Paddle, Side};
use hecs::World;

/// Bounce the ball off the top and bottom walls
pub fn check_wall_collisions(world: &mut World, map: &GameMap, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y - ball.radius < 0.0 {
            ball.pos.y = ball.radius;
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
        if ball.pos.y + ball.radius > map.height {
            ball.pos.y = map.height - ball.radius;
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Reflect the ball off the paddles, left first then right.
///
/// Each paddle is tested independently against the ball's current position,
/// so at extreme speeds both may resolve in the same tick.
pub fn check_paddle_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddles first so the ball can be borrowed mutably
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            let overlaps_x = match paddle.side {
                Side::Left => ball.pos.x - ball.radius < paddle.x + paddle.width,
                Side::Right => ball.pos.x + ball.radius > paddle.x,
            };

            if overlaps_x && paddle.spans_y(ball.pos.y) {
                // Push the ball out to the paddle face so it cannot stick
                ball.pos.x = match paddle.side {
                    Side::Left => paddle.x + paddle.width + ball.radius,
                    Side::Right => paddle.x - ball.radius,
                };
                ball.vel.x = -ball.vel.x;
                ball.vel.y += paddle.dy * config.spin_factor;
                events.ball_hit_paddle = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Ball, Config, Events, GameMap};
    use glam::Vec2;

    fn setup_world() -> (hecs::World, Config, GameMap, Events) {
        let world = hecs::World::new();
        let config = Config::new();
        let map = GameMap::new(&config);
        let events = Events::new();
        (world, config, map, events)
    }

    fn only_ball(world: &hecs::World) -> Ball {
        let mut query = world.query::<&Ball>();
        let (_e, ball) = query.iter().next().expect("ball should exist");
        *ball
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, map, mut events) = setup_world();
        create_ball(
            &mut world,
            Vec2::new(400.0, 4.0),
            Vec2::new(5.0, -3.0),
            config.ball_radius,
        );

        check_wall_collisions(&mut world, &map, &mut events);

        let ball = only_ball(&world);
        assert_eq!(ball.pos.y, config.ball_radius, "Ball is clamped to the wall");
        assert_eq!(ball.vel.y, 3.0, "Ball should bounce down");
        assert_eq!(ball.vel.x, 5.0, "X velocity should be unchanged");
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, map, mut events) = setup_world();
        create_ball(
            &mut world,
            Vec2::new(400.0, map.height - 2.0),
            Vec2::new(-5.0, 4.0),
            config.ball_radius,
        );

        check_wall_collisions(&mut world, &map, &mut events);

        let ball = only_ball(&world);
        assert_eq!(ball.pos.y, map.height - config.ball_radius);
        assert_eq!(ball.vel.y, -4.0, "Ball should bounce up");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_no_wall_bounce_in_open_field() {
        let (mut world, config, map, mut events) = setup_world();
        create_ball(
            &mut world,
            Vec2::new(400.0, 250.0),
            Vec2::new(5.0, 4.0),
            config.ball_radius,
        );

        check_wall_collisions(&mut world, &map, &mut events);

        assert_eq!(only_ball(&world).vel.y, 4.0);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_left_paddle_reflects_exactly() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, &map, &config, Side::Left, 200.0);
        let paddle_x = map.paddle_x(Side::Left, config.paddle_width);

        create_ball(
            &mut world,
            Vec2::new(paddle_x + config.paddle_width + 5.0, 240.0),
            Vec2::new(-5.0, 1.0),
            config.ball_radius,
        );

        check_paddle_collisions(&mut world, &config, &mut events);

        let ball = only_ball(&world);
        assert_eq!(ball.vel.x, 5.0, "dx should be negated, magnitude kept");
        assert_eq!(
            ball.pos.x,
            paddle_x + config.paddle_width + config.ball_radius,
            "Ball should sit exactly on the paddle face"
        );
        assert_eq!(ball.vel.y, 1.0, "Still paddle adds no spin");
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_right_paddle_reflects_exactly() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, &map, &config, Side::Right, 200.0);
        let paddle_x = map.paddle_x(Side::Right, config.paddle_width);

        create_ball(
            &mut world,
            Vec2::new(paddle_x - 4.0, 260.0),
            Vec2::new(7.0, 0.0),
            config.ball_radius,
        );

        check_paddle_collisions(&mut world, &config, &mut events);

        let ball = only_ball(&world);
        assert_eq!(ball.vel.x, -7.0);
        assert_eq!(ball.pos.x, paddle_x - config.ball_radius);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_paddle_motion_adds_spin() {
        let (mut world, config, map, mut events) = setup_world();
        let paddle = create_paddle(&mut world, &map, &config, Side::Left, 200.0);
        world
            .get::<&mut Paddle>(paddle)
            .expect("paddle should exist")
            .dy = 10.0;

        create_ball(
            &mut world,
            Vec2::new(35.0, 240.0),
            Vec2::new(-5.0, 1.0),
            config.ball_radius,
        );

        check_paddle_collisions(&mut world, &config, &mut events);

        let ball = only_ball(&world);
        assert!((ball.vel.y - 3.0).abs() < 1e-5, "dy gains paddle.dy * 0.2");
    }

    #[test]
    fn test_ball_outside_paddle_span_passes() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, &map, &config, Side::Left, 200.0);

        // Level with the paddle face horizontally but below it
        create_ball(
            &mut world,
            Vec2::new(35.0, 300.0),
            Vec2::new(-5.0, 0.0),
            config.ball_radius,
        );

        check_paddle_collisions(&mut world, &config, &mut events);

        assert_eq!(only_ball(&world).vel.x, -5.0);
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_paddle_edge_is_not_a_hit() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, &map, &config, Side::Left, 200.0);

        create_ball(
            &mut world,
            Vec2::new(35.0, 200.0),
            Vec2::new(-5.0, 0.0),
            config.ball_radius,
        );

        check_paddle_collisions(&mut world, &config, &mut events);

        assert!(!events.ball_hit_paddle, "Overlap test is strict");
    }

    #[test]
    fn test_paddles_never_move() {
        let (mut world, config, map, mut events) = setup_world();
        let left = create_paddle(&mut world, &map, &config, Side::Left, 200.0);
        create_ball(
            &mut world,
            Vec2::new(35.0, 240.0),
            Vec2::new(-5.0, 0.0),
            config.ball_radius,
        );

        check_wall_collisions(&mut world, &map, &mut events);
        check_paddle_collisions(&mut world, &config, &mut events);

        let paddle = *world.get::<&Paddle>(left).expect("paddle should exist");
        assert_eq!(paddle.y, 200.0);
        assert_eq!(paddle.dy, 0.0);
    }
}
