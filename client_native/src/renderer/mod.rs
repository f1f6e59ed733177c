pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use std::sync::Arc;

use game_core::Config;
use wgpu::*;
use winit::window::Window;

use crate::camera::Camera;
use crate::mesh::{create_rectangle, Mesh};
use resources::{GameBuffers, InstanceData};

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub camera: Camera,
    pub clear_color: Color,

    pub main_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: GameBuffers,
    pub quad: Mesh,
}

impl Renderer {
    /// Set up the GPU for a window showing a board of `config` size
    pub async fn new(window: Arc<Window>, config: &Config) -> anyhow::Result<Self> {
        let ctx = init::init_wgpu(window).await?;
        let camera = Camera::orthographic(config.screen_width, config.screen_height);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);
        let quad = create_rectangle(&ctx.device);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            camera,
            clear_color: clear_color(config),
            main_pipeline: pipes.main_pipeline,
            camera_bind_group,
            buffers,
            quad,
        })
    }

    /// The camera stays on the logical board; only the surface follows the window
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.size = (width, height);
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.reconfigure();
    }

    pub fn reconfigure(&self) {
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn draw(&mut self, instances: &[InstanceData]) -> Result<(), SurfaceError> {
        draw::draw_frame(self, instances)
    }
}

/// Background color of the board
pub fn clear_color(config: &Config) -> Color {
    let [r, g, b, a] = config.background.to_rgba();
    Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}
