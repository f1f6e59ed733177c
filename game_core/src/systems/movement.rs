use crate::{Ball, Controller, Events, GameMap, Paddle, PaddleIntent};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, map: &GameMap) {
    for (_entity, (paddle, intent, controller)) in
        world.query_mut::<(&mut Paddle, &PaddleIntent, &Controller)>()
    {
        if *controller == Controller::Keyboard {
            paddle.move_dir(intent.dir, map);
        }
    }
}

/// Move ball one tick and reflect off top/bottom walls
pub fn move_ball(world: &mut World, map: &GameMap, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.advance(1.0, map) {
            events.ball_hit_wall = true;
        }
    }
}
