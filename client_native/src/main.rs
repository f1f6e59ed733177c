use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use client_native::{load_config, App, LocalGame};
use game_core::{Config, GameRng};
use winit::event_loop::EventLoop;

/// Single-player Pong: arrows move the right paddle, P pauses, C resumes
#[derive(Parser, Debug)]
#[command(name = "pong", version, about)]
struct Cli {
    /// Seed for ball serves; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file overriding board size, speeds and colors
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::new(),
    };
    let rng = match cli.seed {
        Some(seed) => {
            log::info!("Using seed {seed}");
            GameRng::new(seed)
        }
        None => GameRng::from_entropy(),
    };

    let game = LocalGame::new(config, rng)?;
    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(game);
    event_loop.run_app(&mut app).context("Event loop error")?;

    app.into_result()
}
