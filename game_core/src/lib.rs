pub mod components;
pub mod config;
pub mod error;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use systems::*;

use hecs::World;

/// Everything the simulation owns: world entities plus the resources the
/// systems read and write each tick.
pub struct GameState {
    pub world: World,
    pub map: GameMap,
    pub config: Config,
    pub events: Events,
    pub rng: GameRng,
    pub tick: u64,
}

impl GameState {
    /// Build a new game: both paddles at center, ball served from center
    pub fn new(config: Config, mut rng: GameRng) -> Result<Self, GameError> {
        config.validate()?;

        let map = GameMap::from_config(&config);
        let mut world = World::new();
        spawn_paddle(&mut world, Side::Left, &config);
        spawn_paddle(&mut world, Side::Right, &config);
        spawn_ball(&mut world, &config, &mut rng);

        Ok(Self {
            world,
            map,
            config,
            events: Events::new(),
            rng,
            tick: 0,
        })
    }

    /// The ball currently in play
    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }

    pub fn score(&self) -> Score {
        let mut score = Score::default();
        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Left => score.left = paddle.score,
                Side::Right => score.right = paddle.score,
            }
        }
        score
    }

    /// Paddles with their score displays, left first
    pub fn scoreboard(&self) -> Vec<(Paddle, ScoreDisplay)> {
        let mut rows: Vec<(Paddle, ScoreDisplay)> = self
            .world
            .query::<(&Paddle, &ScoreDisplay)>()
            .iter()
            .map(|(_e, (paddle, display))| (*paddle, *display))
            .collect();
        rows.sort_by_key(|(paddle, _)| paddle.side);
        rows
    }
}

/// Run one tick of the Pong simulation
///
/// Order: keyboard input, paddle movement, ball movement and wall bounces,
/// paddle bounces, scoring, then ball tracking so the tracking paddle sits
/// on the ball that exists when the tick ends.
pub fn step(state: &mut GameState, input: PaddleIntent) {
    let GameState {
        world,
        map,
        config,
        events,
        rng,
        tick,
    } = state;

    // Clear events at start of tick
    events.clear();

    // 1. Keyboard intent -> paddle movement
    apply_input(world, input);
    move_paddles(world, map);

    // 2. Move ball (walls reflect)
    move_ball(world, map, events);

    // 3. Ball vs paddles
    bounce_off_paddles(world, config, events);

    // 4. Goal lines
    check_scoring(world, map, config, rng, events);

    // 5. Tracking paddle follows the ball
    track_ball(world, map);

    *tick += 1;
}
