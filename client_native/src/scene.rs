//! Per-frame instance list built from the game state

use glam::Vec2;

use crate::font::{text_instances, GLYPH_HEIGHT};
use crate::fsm::FsmState;
use crate::renderer::resources::InstanceData;
use crate::simulation::LocalGame;

pub const START_MESSAGE: &str = "PRESS ANY KEY";
const DIVIDER_WIDTH: f32 = 2.0;
const MESSAGE_PIXEL: f32 = 3.0;

/// Everything on screen this frame, back to front
pub fn build_scene(game: &LocalGame) -> Vec<InstanceData> {
    let state = &game.state;
    let config = &state.config;
    let foreground = config.foreground.to_rgba();
    let mut instances = Vec::with_capacity(64);

    // Center divider
    instances.push(InstanceData::rect(
        state.map.center(),
        Vec2::new(DIVIDER_WIDTH, state.map.height),
        foreground,
    ));

    if let Some(ball) = state.ball() {
        instances.push(InstanceData::rect(ball.pos, Vec2::splat(ball.size), foreground));
    }

    // Paddles and their scores
    let pixel = score_pixel(config.score_size);
    for (paddle, display) in state.scoreboard() {
        instances.push(InstanceData::rect(paddle.pos, paddle.size, foreground));

        let top_left = text_box_origin(display.anchor, config.score_size);
        instances.extend(text_instances(
            &paddle.score.to_string(),
            top_left,
            pixel,
            display.color.to_rgba(),
        ));
    }

    if game.fsm_state() == FsmState::Idle {
        let anchor = Vec2::new(config.screen_width / 4.0, config.screen_height / 3.0);
        let top_left = text_box_origin(anchor, config.score_size);
        instances.extend(text_instances(
            START_MESSAGE,
            top_left,
            MESSAGE_PIXEL,
            config.message_color.to_rgba(),
        ));
    }

    instances
}

/// Text starts at the top-left of a `box_size` square centered on `anchor`
fn text_box_origin(anchor: Vec2, box_size: f32) -> Vec2 {
    anchor - Vec2::splat(box_size / 2.0)
}

/// Glyph pixel size so a digit is roughly `score_size` tall
fn score_pixel(score_size: f32) -> f32 {
    (score_size / GLYPH_HEIGHT as f32).floor().max(1.0)
}
