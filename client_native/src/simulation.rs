use game_core::{step, Config, GameError, GameRng, GameState, Score};

use crate::fsm::{FsmState, GameAction, GameFsm};
use crate::input::{GameKey, HeldKeys};

/// A local game: simulation state plus the loop state machine and held keys
pub struct LocalGame {
    pub state: GameState,
    pub fsm: GameFsm,
    held: HeldKeys,
}

impl LocalGame {
    pub fn new(config: Config, rng: GameRng) -> Result<Self, GameError> {
        Ok(Self {
            state: GameState::new(config, rng)?,
            fsm: GameFsm::new(),
            held: HeldKeys::default(),
        })
    }

    pub fn fsm_state(&self) -> FsmState {
        self.fsm.state()
    }

    /// Forget held keys; their releases go to whichever window has focus
    pub fn focus_lost(&mut self) {
        self.held = HeldKeys::default();
    }

    /// Key press. Any key leaves the start screen; Escape quits.
    pub fn key_pressed(&mut self, key: GameKey) {
        self.held.update(key, true);

        match self.fsm.state() {
            FsmState::Idle => {
                self.fsm.transition(GameAction::Start);
            }
            _ if key == GameKey::Quit => {
                self.fsm.transition(GameAction::Quit);
            }
            _ => {}
        }
    }

    /// Key release. Pause and resume fire on release.
    pub fn key_released(&mut self, key: GameKey) {
        self.held.update(key, false);

        match key {
            GameKey::Pause => {
                self.fsm.transition(GameAction::Pause);
            }
            GameKey::Resume => {
                self.fsm.transition(GameAction::Resume);
            }
            _ => {}
        }
    }

    pub fn window_closed(&mut self) {
        self.fsm.transition(GameAction::WindowClosed);
    }

    /// Advance one tick if running. Returns whether the simulation moved.
    pub fn tick(&mut self) -> bool {
        if !self.fsm.is_running() {
            return false;
        }

        step(&mut self.state, self.held.intent());

        if self.state.events.scored() {
            let score = self.score();
            log::info!("score {} - {}", score.left, score.right);
        }
        true
    }

    pub fn score(&self) -> Score {
        self.state.score()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Side;

    fn new_game() -> LocalGame {
        LocalGame::new(Config::new(), GameRng::new(8)).expect("valid config")
    }

    #[test]
    fn test_idle_does_not_tick() {
        let mut game = new_game();
        let ball = game.state.ball();

        assert!(!game.tick());
        assert_eq!(game.state.ball(), ball);
        assert_eq!(game.state.tick, 0);
    }

    #[test]
    fn test_any_key_starts() {
        let mut game = new_game();
        game.key_pressed(GameKey::Other);
        assert_eq!(game.fsm_state(), FsmState::Running);
        assert!(game.tick());
        assert_eq!(game.state.tick, 1);
    }

    #[test]
    fn test_escape_on_start_screen_starts_instead_of_quitting() {
        let mut game = new_game();
        game.key_pressed(GameKey::Quit);
        assert_eq!(game.fsm_state(), FsmState::Running);

        game.key_pressed(GameKey::Quit);
        assert_eq!(game.fsm_state(), FsmState::Terminated);
    }

    #[test]
    fn test_pause_freezes_everything() {
        let mut game = new_game();
        game.key_pressed(GameKey::Other);
        game.tick();

        game.key_pressed(GameKey::Pause);
        game.key_released(GameKey::Pause);
        assert_eq!(game.fsm_state(), FsmState::Paused);

        let ball = game.state.ball();
        let paddle = game.state.paddle(Side::Right);
        let tick = game.state.tick;
        game.key_pressed(GameKey::Down);
        for _ in 0..10 {
            assert!(!game.tick());
        }
        assert_eq!(game.state.ball(), ball);
        assert_eq!(game.state.paddle(Side::Right), paddle);
        assert_eq!(game.state.tick, tick);

        game.key_released(GameKey::Resume);
        assert_eq!(game.fsm_state(), FsmState::Running);
        assert!(game.tick());
    }

    #[test]
    fn test_held_down_moves_right_paddle() {
        let mut game = new_game();
        game.key_pressed(GameKey::Down);
        let start = game.state.paddle(Side::Right).expect("right").pos.y;

        game.tick();

        let speed = game.state.config.paddle_speed;
        assert_eq!(
            game.state.paddle(Side::Right).expect("right").pos.y,
            start + speed
        );

        game.key_released(GameKey::Down);
        game.tick();
        assert_eq!(
            game.state.paddle(Side::Right).expect("right").pos.y,
            start + speed
        );
    }

    #[test]
    fn test_focus_loss_releases_held_keys() {
        let mut game = new_game();
        game.key_pressed(GameKey::Down);
        game.tick();
        let y = game.state.paddle(Side::Right).expect("right").pos.y;

        // Release happens while another window has focus
        game.focus_lost();
        game.tick();

        assert_eq!(game.state.paddle(Side::Right).expect("right").pos.y, y);
        assert_eq!(game.fsm_state(), FsmState::Running);
    }

    #[test]
    fn test_window_closed_terminates_from_idle() {
        let mut game = new_game();
        game.window_closed();
        assert!(game.fsm.is_terminated());
        assert!(!game.tick());
    }
}
