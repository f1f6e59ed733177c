use crate::{Ball, Controller, GameMap, Paddle, PaddleIntent};
use hecs::World;

/// Apply this tick's keyboard intent to keyboard-driven paddles
pub fn apply_input(world: &mut World, input: PaddleIntent) {
    for (_entity, (intent, controller)) in world.query_mut::<(&mut PaddleIntent, &Controller)>() {
        if *controller == Controller::Keyboard {
            *intent = input;
        }
    }
}

/// Snap ball-tracking paddles to the ball's vertical center
///
/// No reaction delay and no error: the tracking side never misses a ball
/// it can reach.
pub fn track_ball(world: &mut World, map: &GameMap) {
    let ball_y = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.y);
    let Some(ball_y) = ball_y else {
        return;
    };

    for (_entity, (paddle, controller)) in world.query_mut::<(&mut Paddle, &Controller)>() {
        if *controller == Controller::TrackBall {
            paddle.track(ball_y, map);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{spawn_paddle, Config, Side};
    use glam::Vec2;

    #[test]
    fn test_apply_input_only_touches_keyboard_paddles() {
        let mut world = World::new();
        let config = Config::new();
        let left = spawn_paddle(&mut world, Side::Left, &config);
        let right = spawn_paddle(&mut world, Side::Right, &config);

        apply_input(&mut world, PaddleIntent { dir: -1 });

        assert_eq!(world.get::<&PaddleIntent>(right).expect("right").dir, -1);
        assert_eq!(world.get::<&PaddleIntent>(left).expect("left").dir, 0);
    }

    #[test]
    fn test_track_ball_centers_left_paddle() {
        let mut world = World::new();
        let config = Config::new();
        let map = GameMap::from_config(&config);
        let left = spawn_paddle(&mut world, Side::Left, &config);
        world.spawn((Ball::new(Vec2::new(250.0, 100.0), Vec2::ZERO, 10.0),));

        track_ball(&mut world, &map);

        assert_eq!(world.get::<&Paddle>(left).expect("left").pos.y, 100.0);
    }

    #[test]
    fn test_track_ball_clamps_to_screen() {
        let mut world = World::new();
        let config = Config::new();
        let map = GameMap::from_config(&config);
        let left = spawn_paddle(&mut world, Side::Left, &config);
        world.spawn((Ball::new(Vec2::new(250.0, 296.0), Vec2::ZERO, 10.0),));

        track_ball(&mut world, &map);

        let paddle = *world.get::<&Paddle>(left).expect("left");
        assert_eq!(paddle.bottom(), map.height);
    }

    #[test]
    fn test_track_ball_leaves_keyboard_paddle_alone() {
        let mut world = World::new();
        let config = Config::new();
        let map = GameMap::from_config(&config);
        let right = spawn_paddle(&mut world, Side::Right, &config);
        world.spawn((Ball::new(Vec2::new(250.0, 40.0), Vec2::ZERO, 10.0),));

        track_ball(&mut world, &map);

        assert_eq!(world.get::<&Paddle>(right).expect("right").pos.y, 150.0);
    }
}
