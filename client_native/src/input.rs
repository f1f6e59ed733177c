//! Keyboard input handling

use game_core::PaddleIntent;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    Up,
    Down,
    Pause,
    Resume,
    Quit,
    /// Anything else; still starts the game from the start screen
    Other,
}

/// Map a physical key to a game key
pub fn map_key(key: PhysicalKey) -> GameKey {
    match key {
        PhysicalKey::Code(KeyCode::ArrowUp) => GameKey::Up,
        PhysicalKey::Code(KeyCode::ArrowDown) => GameKey::Down,
        PhysicalKey::Code(KeyCode::KeyP) => GameKey::Pause,
        PhysicalKey::Code(KeyCode::KeyC) => GameKey::Resume,
        PhysicalKey::Code(KeyCode::Escape) => GameKey::Quit,
        _ => GameKey::Other,
    }
}

/// Movement keys currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
}

impl HeldKeys {
    /// Track press/release of the movement keys; others are ignored
    pub fn update(&mut self, key: GameKey, pressed: bool) {
        match key {
            GameKey::Up => self.up = pressed,
            GameKey::Down => self.down = pressed,
            _ => {}
        }
    }

    pub fn intent(&self) -> PaddleIntent {
        PaddleIntent::from_keys(self.up, self.down)
    }
}
