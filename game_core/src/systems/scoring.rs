use crate::{respawn_ball, Ball, Config, Events, GameMap, GameRng, Paddle, Side};
use hecs::World;

/// Check if ball crossed a goal line (scoring)
///
/// Left edge at or past 0 scores for the right side; right edge at or past
/// the arena width scores for the left side. At most one side scores per
/// tick, and the ball is replaced with a freshly served one.
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) {
    let ball = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| *ball);
    let Some(ball) = ball else {
        return; // No ball in world
    };

    // The side whose goal line the ball crossed concedes
    let conceded = if ball.left() <= 0.0 {
        Side::Left
    } else if ball.right() >= map.width {
        Side::Right
    } else {
        return;
    };
    let scorer = conceded.opponent();

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == scorer {
            paddle.score += 1;
            log::debug!("{} scores, now {}", scorer, paddle.score);
        }
    }

    match scorer {
        Side::Left => events.left_scored = true,
        Side::Right => events.right_scored = true,
    }

    respawn_ball(world, config, rng);
}
