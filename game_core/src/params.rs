/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (logical pixels)
    pub const SCREEN_WIDTH: f32 = 500.0;
    pub const SCREEN_HEIGHT: f32 = 300.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 5.0;
    pub const PADDLE_HEIGHT: f32 = Self::SCREEN_HEIGHT / 5.0;
    pub const PADDLE_SPEED: f32 = 5.0; // pixels per tick

    // Ball
    pub const BALL_SIZE: f32 = 10.0;
    pub const INITIAL_SPEED: f32 = 3.0; // per axis, pixels per tick
    pub const BOUNCE_SCALE: f32 = 1.1; // Multiply velocity on paddle hit

    // Score text box
    pub const SCORE_SIZE: f32 = 30.0; // min(width, height) / 10

    // Loop
    pub const TICK_RATE: u32 = 60;
}
