use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use rand::Rng;

use crate::{Aabb, Config, GameError, GameMap, GameRng, Rgb};

/// Which goal line a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl FromStr for Side {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            other => Err(GameError::InvalidSide(other.to_string())),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Ball component - a square with sub-pixel position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // center
    pub vel: Vec2, // pixels per tick
    pub size: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    /// Fresh ball at the arena center moving diagonally.
    ///
    /// Each velocity component is `±ball_speed_initial`, signs drawn
    /// independently.
    pub fn spawn(config: &Config, rng: &mut GameRng) -> Self {
        let speed = config.ball_speed_initial;
        let sign_x = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let sign_y = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };

        Self::new(
            GameMap::from_config(config).ball_spawn(),
            Vec2::new(sign_x * speed, sign_y * speed),
            config.ball_size,
        )
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(self.size))
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.size / 2.0
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size / 2.0
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.size / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size / 2.0
    }

    /// Move by `ticks` worth of velocity and reflect off the top/bottom walls.
    ///
    /// Left and right edges are goal lines, not walls; nothing is clamped
    /// horizontally. Returns true if a wall was hit.
    pub fn advance(&mut self, ticks: f32, map: &GameMap) -> bool {
        self.pos += self.vel * ticks;

        let half = self.size / 2.0;
        if self.bottom() > map.height {
            self.pos.y = map.height - half;
            self.vel.y = -self.vel.y;
            true
        } else if self.top() < 0.0 {
            self.pos.y = half;
            self.vel.y = -self.vel.y;
            true
        } else {
            false
        }
    }

    /// Bounce off `paddle` if the two rectangles overlap.
    ///
    /// The horizontal component flips, both components scale by
    /// `bounce_scale`, then the strike offset (-1 at the top edge, +1 at the
    /// bottom) is added to the vertical component. No direction check is
    /// made, so a ball still overlapping next tick bounces again.
    pub fn bounce_off(&mut self, paddle: &Paddle, bounce_scale: f32) -> bool {
        if !self.aabb().intersects(&paddle.aabb()) {
            return false;
        }

        let offset = (self.pos.y - paddle.pos.y) / (paddle.size.y / 2.0);
        let bounced = Vec2::new(-self.vel.x, self.vel.y) * bounce_scale;
        self.vel = Vec2::new(bounced.x, bounced.y + offset);
        true
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2, // center
    pub size: Vec2,
    pub speed: f32, // pixels per tick
    pub score: u32,
}

impl Paddle {
    /// Paddle flush against its goal line, vertically centered, score 0
    pub fn new(side: Side, config: &Config) -> Self {
        let map = GameMap::from_config(config);
        Self {
            side,
            pos: map.paddle_spawn(side, config.paddle_width),
            size: Vec2::new(config.paddle_width, config.paddle_height),
            speed: config.paddle_speed,
            score: 0,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.pos, self.size)
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Step one tick in `dir` (-1 up, 1 down), staying on screen
    pub fn move_dir(&mut self, dir: i8, map: &GameMap) {
        if dir != 0 {
            self.pos.y += dir.signum() as f32 * self.speed;
            self.pos.y = map.clamp_y(self.pos.y, self.size.y / 2.0);
        }
    }

    /// Center on `y`, staying on screen
    pub fn track(&mut self, y: f32, map: &GameMap) {
        self.pos.y = map.clamp_y(y, self.size.y / 2.0);
    }
}

/// How a paddle is driven each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    /// Follows [`PaddleIntent`] from the keyboard
    Keyboard,
    /// Snaps its center to the ball every tick
    TrackBall,
}

impl Controller {
    /// The right paddle is the player's; the left one follows the ball
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Left => Controller::TrackBall,
            Side::Right => Controller::Keyboard,
        }
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Combine held keys. Holding both cancels out.
    pub fn from_keys(up: bool, down: bool) -> Self {
        Self {
            dir: down as i8 - up as i8,
        }
    }
}

/// Where and how a paddle's score is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreDisplay {
    pub anchor: Vec2, // center of the score text box
    pub color: Rgb,
}

impl ScoreDisplay {
    pub fn new(side: Side, config: &Config) -> Self {
        // Fifteenths of the screen: 2/15 across for left, 13/15 for right.
        let column = match side {
            Side::Left => 2.0,
            Side::Right => 13.0,
        };
        let fifteenth_w = (config.screen_width / 15.0).floor();
        let fifteenth_h = (config.screen_height / 15.0).floor();
        Self {
            anchor: Vec2::new(fifteenth_w * column, fifteenth_h),
            color: config.score_color,
        }
    }
}
