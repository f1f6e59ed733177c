//! Game State Machine
//!
//! `Idle → Running → (Paused ⇄ Running)* → Terminated`

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsmState {
    /// Start screen, waiting for any key
    Idle,
    Running,
    Paused,
    Terminated,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    Pause,
    Resume,
    Quit,
    /// The window is going away; valid from every state
    WindowClosed,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: FsmState,
    pub to_state: FsmState,
    pub action: GameAction,
}

/// Game Finite State Machine
#[derive(Debug)]
pub struct GameFsm {
    state: FsmState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: FsmState::Idle,
        }
    }

    /// Get current state
    pub fn state(&self) -> FsmState {
        self.state
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            log::info!("{:?} --{:?}--> {:?}", from_state, action, next_state);
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: GameAction) -> Option<FsmState> {
        match (self.state, action) {
            // Closing the window ends everything
            (FsmState::Terminated, _) => None,
            (_, GameAction::WindowClosed) => Some(FsmState::Terminated),

            // From Idle
            (FsmState::Idle, GameAction::Start) => Some(FsmState::Running),

            // From Running
            (FsmState::Running, GameAction::Pause) => Some(FsmState::Paused),
            (FsmState::Running, GameAction::Quit) => Some(FsmState::Terminated),

            // From Paused
            (FsmState::Paused, GameAction::Resume) => Some(FsmState::Running),
            (FsmState::Paused, GameAction::Quit) => Some(FsmState::Terminated),

            // Invalid transition
            _ => None,
        }
    }

    /// Check if the simulation should advance this tick
    pub fn is_running(&self) -> bool {
        self.state == FsmState::Running
    }

    pub fn is_terminated(&self) -> bool {
        self.state == FsmState::Terminated
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = GameFsm::new();
        assert_eq!(fsm.state(), FsmState::Idle);
        assert!(!fsm.is_running());
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::Start);
        assert!(result.success);
        assert_eq!(result.from_state, FsmState::Idle);
        assert_eq!(result.to_state, FsmState::Running);
        assert!(fsm.is_running());
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::Pause);
        assert!(!result.success);
        assert_eq!(fsm.state(), FsmState::Idle);
    }

    #[test]
    fn test_quit_ignored_while_idle() {
        let mut fsm = GameFsm::new();
        assert!(!fsm.transition(GameAction::Quit).success);
        assert_eq!(fsm.state(), FsmState::Idle);
    }

    #[test]
    fn test_pause_resume_flow() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        fsm.transition(GameAction::Pause);
        assert_eq!(fsm.state(), FsmState::Paused);
        assert!(!fsm.is_running());

        // Pausing twice does nothing
        assert!(!fsm.transition(GameAction::Pause).success);

        fsm.transition(GameAction::Resume);
        assert_eq!(fsm.state(), FsmState::Running);
    }

    #[test]
    fn test_quit_from_running_and_paused() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        fsm.transition(GameAction::Quit);
        assert!(fsm.is_terminated());

        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        fsm.transition(GameAction::Pause);
        fsm.transition(GameAction::Quit);
        assert!(fsm.is_terminated());
    }

    #[test]
    fn test_window_close_from_any_state() {
        for setup in [
            &[][..],
            &[GameAction::Start][..],
            &[GameAction::Start, GameAction::Pause][..],
        ] {
            let mut fsm = GameFsm::new();
            for action in setup {
                fsm.transition(*action);
            }
            assert!(fsm.transition(GameAction::WindowClosed).success);
            assert!(fsm.is_terminated());
        }
    }

    #[test]
    fn test_terminated_is_final() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::WindowClosed);
        for action in [
            GameAction::Start,
            GameAction::Resume,
            GameAction::WindowClosed,
        ] {
            assert!(!fsm.transition(action).success);
        }
        assert!(fsm.is_terminated());
    }
}
