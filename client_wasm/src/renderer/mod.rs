pub mod draw;
#[cfg(target_arch = "wasm32")]
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::mesh::Mesh;
use game_core::{Ball, Paddle};
use resources::{GameBuffers, InstanceData};
use wgpu::*;

/// WebGPU backend for the session's draw calls. Instances are collected
/// between `clear` and `present` and submitted in one pass.
pub struct GpuRenderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,

    pub main_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,
    pub buffers: GameBuffers,
    pub meshes: (Mesh, Mesh), // rect, circle

    playfield: (f32, f32),
    rects: Vec<InstanceData>,
    circles: Vec<InstanceData>,
}

impl GpuRenderer {
    #[cfg(target_arch = "wasm32")]
    pub async fn new(
        canvas: web_sys::HtmlCanvasElement,
        playfield_width: f32,
        playfield_height: f32,
    ) -> Result<Self, String> {
        use crate::camera::Camera;
        use crate::mesh::{create_circle, create_rectangle};

        let ctx = init::init_gpu(canvas).await?;
        let camera = Camera::orthographic(playfield_width, playfield_height);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipeline(&ctx.device, ctx.surface_config.format);

        // Meshes
        let rect_mesh = create_rectangle(&ctx.device);
        let circle_mesh = create_circle(&ctx.device, 32);

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
            surface_config: ctx.surface_config,
            main_pipeline: pipes.main_pipeline,
            camera_bind_group,
            buffers,
            meshes: (rect_mesh, circle_mesh),
            playfield: (playfield_width, playfield_height),
            rects: Vec::with_capacity(resources::MAX_RECT_INSTANCES),
            circles: Vec::with_capacity(resources::MAX_CIRCLE_INSTANCES),
        })
    }

    /// Submit the collected instances to the canvas
    pub fn present(&mut self) -> Result<(), String> {
        draw::draw_frame(self)
    }
}

impl game_core::Renderer for GpuRenderer {
    fn clear(&mut self) {
        self.rects.clear();
        self.circles.clear();
    }

    fn draw_center_line(&mut self) {
        let (width, height) = self.playfield;
        self.rects.extend(resources::center_line(width, height));
    }

    fn draw_paddle(&mut self, paddle: &Paddle) {
        self.rects.push(InstanceData::paddle(paddle));
    }

    fn draw_ball(&mut self, ball: &Ball) {
        self.circles.push(InstanceData::ball(ball));
    }
}
