use crate::{Ball, GameMap, Paddle, Side};
use hecs::World;

/// Drive the right paddle towards the ball.
///
/// Proportional tracking capped at `paddle_speed` per tick, no prediction and
/// no reaction delay. The speed cap is the only difficulty lever.
pub fn step_ai(world: &mut World, paddle_speed: f32, map: &GameMap) {
    let ball_y = match world.query::<&Ball>().iter().next() {
        Some((_e, ball)) => ball.pos.y,
        None => return,
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Right {
            continue;
        }

        let target = ball_y - paddle.height / 2.0;
        let diff = target - paddle.y;
        paddle.dy = ai_velocity(diff, paddle_speed);
        paddle.y = map.clamp_paddle_y(paddle.y + paddle.dy, paddle.height);
    }
}

/// `sign(diff) * min(speed, |diff|)`
fn ai_velocity(diff: f32, paddle_speed: f32) -> f32 {
    if diff == 0.0 {
        0.0
    } else {
        diff.signum() * paddle_speed.min(diff.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Config};
    use glam::Vec2;

    fn setup(ball_y: f32, paddle_y: f32) -> (World, GameMap, hecs::Entity) {
        let config = Config::new();
        let map = GameMap::new(&config);
        let mut world = World::new();
        let paddle = create_paddle(&mut world, &map, &config, Side::Right, paddle_y);
        create_ball(
            &mut world,
            Vec2::new(400.0, ball_y),
            Vec2::new(5.0, 0.0),
            config.ball_radius,
        );
        (world, map, paddle)
    }

    fn paddle(world: &World, entity: hecs::Entity) -> Paddle {
        *world.get::<&Paddle>(entity).expect("paddle should exist")
    }

    #[test]
    fn test_ai_moves_at_capped_speed() {
        let (mut world, map, entity) = setup(400.0, 100.0);

        step_ai(&mut world, 6.0, &map);

        let p = paddle(&world, entity);
        assert_eq!(p.dy, 6.0, "Far target moves at full speed");
        assert_eq!(p.y, 106.0);
    }

    #[test]
    fn test_ai_closes_small_gap_exactly() {
        // target = 250 - 40 = 210, paddle at 207 -> diff 3
        let (mut world, map, entity) = setup(250.0, 207.0);

        step_ai(&mut world, 6.0, &map);

        let p = paddle(&world, entity);
        assert_eq!(p.dy, 3.0);
        assert_eq!(p.y, 210.0, "Paddle centers on the ball without overshoot");
    }

    #[test]
    fn test_ai_moves_up() {
        let (mut world, map, entity) = setup(50.0, 300.0);

        step_ai(&mut world, 9.0, &map);

        let p = paddle(&world, entity);
        assert_eq!(p.dy, -9.0);
        assert_eq!(p.y, 291.0);
    }

    #[test]
    fn test_ai_is_clamped_to_playfield() {
        let (mut world, map, entity) = setup(12.0, 2.0);

        step_ai(&mut world, 9.0, &map);

        let p = paddle(&world, entity);
        assert_eq!(p.y, 0.0, "Paddle never leaves the playfield");
        assert!(p.dy.abs() <= 9.0);
    }

    #[test]
    fn test_ai_ignores_left_paddle() {
        let config = Config::new();
        let map = GameMap::new(&config);
        let mut world = World::new();
        let left = create_paddle(&mut world, &map, &config, Side::Left, 100.0);
        create_ball(&mut world, Vec2::new(400.0, 450.0), Vec2::ZERO, config.ball_radius);

        step_ai(&mut world, 6.0, &map);

        assert_eq!(paddle(&world, left).y, 100.0);
    }

    #[test]
    fn test_ai_velocity_bound() {
        for diff in [-100.0, -6.5, -1.0, 0.0, 0.25, 6.0, 42.0] {
            assert!(ai_velocity(diff, 6.0).abs() <= 6.0);
        }
        assert_eq!(ai_velocity(0.0, 6.0), 0.0);
    }
}
