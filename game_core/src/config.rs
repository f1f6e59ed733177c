use serde::Deserialize;

use crate::{GameError, Params};

/// RGB color, 0-255 per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    pub const RED: Rgb = Rgb(255, 0, 0);

    /// Normalized RGBA for GPU tints
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
            1.0,
        ]
    }
}

/// Game configuration
///
/// Every tunable field is listed here. Missing fields in a config file fall
/// back to [`Config::default`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_size: f32,
    pub ball_speed_initial: f32,
    pub bounce_scale: f32,
    pub score_size: f32,
    pub foreground: Rgb,
    pub background: Rgb,
    pub score_color: Rgb,
    pub message_color: Rgb,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed_initial: Params::INITIAL_SPEED,
            bounce_scale: Params::BOUNCE_SCALE,
            score_size: Params::SCORE_SIZE,
            foreground: Rgb::WHITE,
            background: Rgb::BLACK,
            score_color: Rgb::BLUE,
            message_color: Rgb::RED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject values that cannot produce a playable arena
    pub fn validate(&self) -> Result<(), GameError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_size", self.ball_size),
            ("ball_speed_initial", self.ball_speed_initial),
            ("bounce_scale", self.bounce_scale),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(GameError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        if self.paddle_height > self.screen_height {
            return Err(GameError::InvalidConfig(format!(
                "paddle_height {} exceeds screen_height {}",
                self.paddle_height, self.screen_height
            )));
        }
        if self.ball_size > self.screen_height {
            return Err(GameError::InvalidConfig(format!(
                "ball_size {} exceeds screen_height {}",
                self.ball_size, self.screen_height
            )));
        }
        // Both paddles plus a ball must fit between the goal lines.
        if self.paddle_width * 2.0 + self.ball_size >= self.screen_width {
            return Err(GameError::InvalidConfig(format!(
                "screen_width {} too narrow for paddles and ball",
                self.screen_width
            )));
        }

        Ok(())
    }
}
