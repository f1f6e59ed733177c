use wgpu::*;

use super::resources::InstanceData;
use super::Renderer;

pub fn draw_frame(renderer: &mut Renderer, instances: &[InstanceData]) -> Result<(), SurfaceError> {
    let output = renderer.surface.get_current_texture()?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    update_buffers(renderer, instances);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(renderer.clear_color),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass, instances.len() as u32);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn update_buffers(renderer: &mut Renderer, instances: &[InstanceData]) {
    renderer.buffers.ensure_capacity(&renderer.device, instances.len());
    if !instances.is_empty() {
        renderer
            .queue
            .write_buffer(&renderer.buffers.instances, 0, bytemuck::cast_slice(instances));
    }
}

fn draw_objects(renderer: &Renderer, pass: &mut RenderPass, count: u32) {
    if count == 0 {
        return;
    }
    pass.set_pipeline(&renderer.main_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

    let mesh = &renderer.quad;
    pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
    pass.set_vertex_buffer(1, renderer.buffers.instances.slice(..));
    pass.set_index_buffer(mesh.index_buffer.slice(..), IndexFormat::Uint16);
    pass.draw_indexed(0..mesh.index_count, 0, 0..count);
}
