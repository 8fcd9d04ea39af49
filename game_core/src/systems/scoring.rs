use crate::{Ball, CollisionOutcome, Events, GameMap, Side};
use hecs::World;

/// Check if the ball left the playfield. At most one side scores per call.
pub fn check_scoring(world: &World, map: &GameMap, events: &mut Events) -> CollisionOutcome {
    let mut outcome = CollisionOutcome::NoScore;

    for (_entity, ball) in world.query::<&Ball>().iter() {
        if ball.pos.x - ball.radius < 0.0 {
            // Ball exited the left edge: right player scores
            events.right_scored = true;
            outcome = CollisionOutcome::ScoredBy(Side::Right);
        } else if ball.pos.x + ball.radius > map.width {
            events.left_scored = true;
            outcome = CollisionOutcome::ScoredBy(Side::Left);
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Config, Events, GameMap};
    use glam::Vec2;

    fn setup_world() -> (hecs::World, Config, GameMap, Events) {
        let config = Config::new();
        let map = GameMap::new(&config);
        (hecs::World::new(), config, map, Events::new())
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, map, mut events) = setup_world();
        create_ball(
            &mut world,
            Vec2::new(5.0, 250.0),
            Vec2::new(-5.0, 0.0),
            config.ball_radius,
        );

        let outcome = check_scoring(&mut world, &map, &mut events);

        assert_eq!(outcome, CollisionOutcome::ScoredBy(Side::Right));
        assert!(events.right_scored, "Should trigger right_scored event");
        assert!(!events.left_scored);
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, map, mut events) = setup_world();
        create_ball(
            &mut world,
            Vec2::new(map.width - 5.0, 250.0),
            Vec2::new(5.0, 0.0),
            config.ball_radius,
        );

        let outcome = check_scoring(&mut world, &map, &mut events);

        assert_eq!(outcome, CollisionOutcome::ScoredBy(Side::Left));
        assert!(events.left_scored);
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, map, mut events) = setup_world();
        create_ball(
            &mut world,
            Vec2::new(400.0, 250.0),
            Vec2::new(5.0, 4.0),
            config.ball_radius,
        );

        let outcome = check_scoring(&mut world, &map, &mut events);

        assert_eq!(outcome, CollisionOutcome::NoScore);
        assert!(!events.left_scored && !events.right_scored, "No scoring events");
    }

    #[test]
    fn test_scoring_does_not_move_ball() {
        let (mut world, config, map, mut events) = setup_world();
        create_ball(
            &mut world,
            Vec2::new(-3.0, 250.0),
            Vec2::new(-5.0, 0.0),
            config.ball_radius,
        );

        check_scoring(&mut world, &map, &mut events);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(-3.0, 250.0), "Serving is the caller's job");
        }
    }

    #[test]
    fn test_single_outcome_on_tiny_playfield() {
        // A ball wider than the playfield overlaps both edges at once
        let (mut world, _config, mut map, mut events) = setup_world();
        map.width = 10.0;
        create_ball(&mut world, Vec2::new(5.0, 250.0), Vec2::ZERO, 10.0);

        let outcome = check_scoring(&mut world, &map, &mut events);

        assert_eq!(outcome, CollisionOutcome::ScoredBy(Side::Right));
        assert!(!(events.left_scored && events.right_scored));
    }
}
