pub mod app;
pub mod camera;
pub mod font;
pub mod fsm;
pub mod input;
pub mod mesh;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod simulation;

pub use app::App;
pub use fsm::{FsmState, GameAction, GameFsm};
pub use settings::load_config;
pub use simulation::LocalGame;
