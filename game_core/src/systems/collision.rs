use crate::{Ball, Config, Events, Paddle};
use hecs::World;

/// Check ball collisions with paddles
///
/// Paddles are tested left then right. A ball overlapping both in the same
/// tick gets both bounces applied in sequence.
pub fn bounce_off_paddles(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if ball.bounce_off(paddle, config.bounce_scale) {
                events.ball_hit_paddle = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{spawn_paddle, Side};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Events) {
        (World::new(), Config::new(), Events::new())
    }

    fn ball(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .expect("ball exists")
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (mut world, config, mut events) = setup_world();
        spawn_paddle(&mut world, Side::Left, &config);
        world.spawn((Ball::new(
            Vec2::new(7.0, 150.0),
            Vec2::new(-3.0, 3.0),
            config.ball_size,
        ),));

        bounce_off_paddles(&mut world, &config, &mut events);

        let ball = ball(&world);
        assert!(ball.vel.x > 0.0, "Ball should bounce right off left paddle");
        assert!(events.ball_hit_paddle, "Should trigger ball_hit_paddle event");
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (mut world, config, mut events) = setup_world();
        spawn_paddle(&mut world, Side::Right, &config);
        world.spawn((Ball::new(
            Vec2::new(493.0, 150.0),
            Vec2::new(3.0, -3.0),
            config.ball_size,
        ),));

        bounce_off_paddles(&mut world, &config, &mut events);

        let ball = ball(&world);
        assert!(ball.vel.x < 0.0, "Ball should bounce left off right paddle");
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_bounce_scales_and_deflects() {
        let (mut world, config, mut events) = setup_world();
        spawn_paddle(&mut world, Side::Right, &config);

        // Strike 20px below paddle center on a 60px paddle
        let (vx, vy) = (4.0_f32, -2.0_f32);
        let strike_y = 150.0 + 20.0;
        world.spawn((Ball::new(
            Vec2::new(493.0, strike_y),
            Vec2::new(vx, vy),
            config.ball_size,
        ),));

        bounce_off_paddles(&mut world, &config, &mut events);

        let offset = (strike_y - 150.0) / (config.paddle_height / 2.0);
        let ball = ball(&world);
        let expected = Vec2::new(-vx * 1.1, vy * 1.1 + offset);
        assert!(
            (ball.vel - expected).length() < 1e-4,
            "Expected {:?}, got {:?}",
            expected,
            ball.vel
        );
    }

    #[test]
    fn test_speed_grows_every_hit() {
        let (mut world, config, mut events) = setup_world();
        spawn_paddle(&mut world, Side::Right, &config);
        world.spawn((Ball::new(
            Vec2::new(493.0, 150.0),
            Vec2::new(3.0, 0.0),
            config.ball_size,
        ),));

        // Ball parked inside the paddle bounces every tick
        let mut last_speed = 3.0;
        for _ in 0..5 {
            bounce_off_paddles(&mut world, &config, &mut events);
            let speed = ball(&world).vel.length();
            assert!(speed > last_speed, "Speed is never capped");
            last_speed = speed;
        }
    }

    #[test]
    fn test_no_collision_in_open_space() {
        let (mut world, config, mut events) = setup_world();
        spawn_paddle(&mut world, Side::Left, &config);
        spawn_paddle(&mut world, Side::Right, &config);
        world.spawn((Ball::new(
            Vec2::new(250.0, 150.0),
            Vec2::new(3.0, 3.0),
            config.ball_size,
        ),));

        bounce_off_paddles(&mut world, &config, &mut events);

        assert_eq!(ball(&world).vel, Vec2::new(3.0, 3.0));
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_overlapping_both_paddles_compounds() {
        // Arena narrow enough for one ball to touch both paddles
        let config = Config {
            screen_width: 20.0,
            ..Config::new()
        };
        let mut world = World::new();
        let mut events = Events::new();
        spawn_paddle(&mut world, Side::Left, &config);
        spawn_paddle(&mut world, Side::Right, &config);
        world.spawn((Ball::new(
            Vec2::new(10.0, 150.0),
            Vec2::new(2.0, 0.0),
            config.ball_size + 2.0,
        ),));

        bounce_off_paddles(&mut world, &config, &mut events);

        // Flipped twice, scaled twice
        let vel = ball(&world).vel;
        assert!((vel.x - 2.0 * 1.1 * 1.1).abs() < 1e-4);
        assert!(vel.y.abs() < 1e-6);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, mut events) = setup_world();
        spawn_paddle(&mut world, Side::Left, &config);

        bounce_off_paddles(&mut world, &config, &mut events);

        assert!(!events.ball_hit_paddle);
    }
}
