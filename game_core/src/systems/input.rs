use crate::{GameMap, Paddle, Side};
use hecs::World;

/// Center the left paddle on `desired_center_y`, clamped to the playfield.
///
/// The applied displacement is kept in `dy` and transferred as spin on the
/// next paddle hit.
pub fn set_left_paddle_target(world: &mut World, map: &GameMap, desired_center_y: f32) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Left {
            continue;
        }

        let new_y = map.clamp_paddle_y(desired_center_y - paddle.height / 2.0, paddle.height);
        paddle.dy = new_y - paddle.y;
        paddle.y = new_y;
    }
}
