//! Window and event loop glue

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use game_core::Params;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

use crate::input::map_key;
use crate::renderer::Renderer;
use crate::scene::build_scene;
use crate::simulation::LocalGame;

pub struct App {
    game: LocalGame,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    tick_period: Duration,
    next_tick: Instant,
    tick_due: bool,
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(game: LocalGame) -> Self {
        Self {
            game,
            window: None,
            renderer: None,
            tick_period: Duration::from_secs(1) / Params::TICK_RATE,
            next_tick: Instant::now(),
            tick_due: false,
            error: None,
        }
    }

    /// Startup failure recorded while the loop was running, if any
    pub fn into_result(self) -> anyhow::Result<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let config = &self.game.state.config;
        let attributes = Window::default_attributes()
            .with_title("Pong")
            .with_inner_size(LogicalSize::new(config.screen_width, config.screen_height))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("Failed to create window")?,
        );
        log::info!(
            "Window created: {}x{}",
            config.screen_width,
            config.screen_height
        );

        let renderer = pollster::block_on(Renderer::new(window.clone(), config))?;
        self.renderer = Some(renderer);
        self.window = Some(window);
        Ok(())
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        let instances = build_scene(&self.game);

        match renderer.draw(&instances) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(err) => log::warn!("Dropped frame: {err:?}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.create_window(event_loop) {
            log::error!("Startup failed: {err:#}");
            self.error = Some(err);
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.game.fsm.is_running() {
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        }

        let now = Instant::now();
        if now >= self.next_tick {
            self.tick_due = true;
            self.next_tick += self.tick_period;
            // Skip ahead instead of replaying missed ticks after a stall
            if self.next_tick < now {
                self.next_tick = now + self.tick_period;
            }
            self.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_tick));
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.game.window_closed();
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
            }

            WindowEvent::Focused(false) => self.game.focus_lost(),

            WindowEvent::KeyboardInput { event, .. } if !event.repeat => {
                let before = self.game.fsm_state();
                let key = map_key(event.physical_key);
                match event.state {
                    ElementState::Pressed => self.game.key_pressed(key),
                    ElementState::Released => self.game.key_released(key),
                }

                if self.game.fsm.is_terminated() {
                    event_loop.exit();
                } else if self.game.fsm_state() != before {
                    self.next_tick = Instant::now();
                    self.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                if self.tick_due {
                    self.tick_due = false;
                    self.game.tick();
                }
                self.render(event_loop);
            }

            _ => {}
        }
    }
}
