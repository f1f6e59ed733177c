use hecs::{Entity, World};

use crate::{Ball, Config, Controller, GameError, GameRng, Paddle, PaddleIntent, ScoreDisplay, Side};

/// Spawn a fresh ball entity at the arena center
pub fn spawn_ball(world: &mut World, config: &Config, rng: &mut GameRng) -> Entity {
    world.spawn((Ball::spawn(config, rng),))
}

/// Replace every ball in the world with a freshly served one.
///
/// The old entities are despawned rather than reset, so no velocity or
/// position carries over from the previous rally.
pub fn respawn_ball(world: &mut World, config: &Config, rng: &mut GameRng) -> Entity {
    let stale: Vec<Entity> = world.query::<&Ball>().iter().map(|(e, _)| e).collect();
    for entity in stale {
        world.despawn(entity).ok();
    }

    let entity = spawn_ball(world, config, rng);
    log::debug!("ball respawned as {:?}", entity);
    entity
}

/// Spawn a paddle flush against `side`'s edge with score 0
pub fn spawn_paddle(world: &mut World, side: Side, config: &Config) -> Entity {
    world.spawn((
        Paddle::new(side, config),
        PaddleIntent::new(),
        Controller::for_side(side),
        ScoreDisplay::new(side, config),
    ))
}

/// Spawn a paddle from a side name (`"left"` or `"right"`)
pub fn spawn_paddle_named(
    world: &mut World,
    side: &str,
    config: &Config,
) -> Result<Entity, GameError> {
    let side: Side = side.parse()?;
    Ok(spawn_paddle(world, side, config))
}
