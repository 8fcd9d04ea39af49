use super::resources::{MAX_CIRCLE_INSTANCES, MAX_RECT_INSTANCES};
use super::GpuRenderer;
use wgpu::*;

pub fn draw_frame(renderer: &mut GpuRenderer) -> Result<(), String> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            // Reconfigure and skip this frame; the next one draws normally
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            return Ok(());
        }
        Err(e) => return Err(format!("Failed to get current texture: {:?}", e)),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    let (rect_count, circle_count) = update_buffers(renderer);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color::BLACK),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass, rect_count, circle_count);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

/// Upload the collected instances, returning how many of each were written
fn update_buffers(renderer: &GpuRenderer) -> (u32, u32) {
    let rects = &renderer.rects[..renderer.rects.len().min(MAX_RECT_INSTANCES)];
    let circles = &renderer.circles[..renderer.circles.len().min(MAX_CIRCLE_INSTANCES)];

    if !rects.is_empty() {
        renderer
            .queue
            .write_buffer(&renderer.buffers.rects, 0, bytemuck::cast_slice(rects));
    }
    if !circles.is_empty() {
        renderer
            .queue
            .write_buffer(&renderer.buffers.circles, 0, bytemuck::cast_slice(circles));
    }

    (rects.len() as u32, circles.len() as u32)
}

fn draw_objects(
    renderer: &GpuRenderer,
    pass: &mut RenderPass<'_>,
    rect_count: u32,
    circle_count: u32,
) {
    pass.set_pipeline(&renderer.main_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

    // Rects (center line, paddles)
    if rect_count > 0 {
        pass.set_vertex_buffer(0, renderer.meshes.0.vertex_buffer.slice(..));
        pass.set_index_buffer(renderer.meshes.0.index_buffer.slice(..), IndexFormat::Uint16);
        pass.set_vertex_buffer(1, renderer.buffers.rects.slice(..));
        pass.draw_indexed(0..renderer.meshes.0.index_count, 0, 0..rect_count);
    }

    // Circle (Ball)
    if circle_count > 0 {
        pass.set_vertex_buffer(0, renderer.meshes.1.vertex_buffer.slice(..));
        pass.set_index_buffer(renderer.meshes.1.index_buffer.slice(..), IndexFormat::Uint16);
        pass.set_vertex_buffer(1, renderer.buffers.circles.slice(..));
        pass.draw_indexed(0..renderer.meshes.1.index_count, 0, 0..circle_count);
    }
}
