use crate::camera::{Camera, CameraUniform};
use game_core::{Ball, Paddle};
use wgpu::util::DeviceExt;
use wgpu::*;

pub const MAX_RECT_INSTANCES: usize = 64;
pub const MAX_CIRCLE_INSTANCES: usize = 4;

const DASH_LENGTH: f32 = 10.0;
const DASH_GAP: f32 = 10.0;
const CENTER_LINE_WIDTH: f32 = 2.0;

pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // center x, center y, size x, size y
    pub tint: [f32; 4],      // rgba
}

impl InstanceData {
    /// Axis-aligned box given by its top-left corner
    pub fn rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            transform: [x + width / 2.0, y + height / 2.0, width, height],
            tint: WHITE,
        }
    }

    pub fn paddle(paddle: &Paddle) -> Self {
        Self::rect(paddle.x, paddle.y, paddle.width, paddle.height)
    }

    pub fn ball(ball: &Ball) -> Self {
        let diameter = ball.radius * 2.0;
        Self {
            transform: [ball.pos.x, ball.pos.y, diameter, diameter],
            tint: WHITE,
        }
    }
}

/// Dashes down the middle of the playfield: 10 on, 10 off, starting at the top
pub fn center_line(width: f32, height: f32) -> Vec<InstanceData> {
    let x = width / 2.0 - CENTER_LINE_WIDTH / 2.0;
    let mut dashes = Vec::new();
    let mut y = 0.0;
    while y < height {
        let length = DASH_LENGTH.min(height - y);
        dashes.push(InstanceData::rect(x, y, CENTER_LINE_WIDTH, length));
        y += DASH_LENGTH + DASH_GAP;
    }
    dashes
}

pub struct GameBuffers {
    pub camera: Buffer,
    pub rects: Buffer,
    pub circles: Buffer,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    // Camera buffer
    let camera_uniform = CameraUniform::from_camera(camera);
    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    // Instance buffers
    let instance_size = std::mem::size_of::<InstanceData>() as u64;

    let rects = device.create_buffer(&BufferDescriptor {
        label: Some("Rect Instance Buffer"),
        size: instance_size * MAX_RECT_INSTANCES as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let circles = device.create_buffer(&BufferDescriptor {
        label: Some("Circle Instance Buffer"),
        size: instance_size * MAX_CIRCLE_INSTANCES as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    GameBuffers {
        camera: camera_buffer,
        rects,
        circles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Side;
    use glam::Vec2;

    #[test]
    fn test_center_line_dashes() {
        let dashes = center_line(800.0, 500.0);
        assert_eq!(dashes.len(), 25);
        assert_eq!(dashes[0], InstanceData::rect(399.0, 0.0, 2.0, 10.0));
        assert_eq!(dashes[1].transform[1], 25.0, "second dash starts after a 10 unit gap");
        assert!(dashes.len() + 2 <= MAX_RECT_INSTANCES);
    }

    #[test]
    fn test_last_dash_is_clipped_to_height() {
        let dashes = center_line(100.0, 45.0);
        let last = dashes.last().unwrap();
        assert_eq!(last.transform[3], 5.0);
    }

    #[test]
    fn test_instances_are_centered() {
        let paddle = Paddle::new(Side::Left, 20.0, 210.0, 12.0, 80.0);
        assert_eq!(InstanceData::paddle(&paddle).transform, [26.0, 250.0, 12.0, 80.0]);

        let ball = Ball::new(Vec2::new(400.0, 250.0), Vec2::ZERO, 10.0);
        assert_eq!(InstanceData::ball(&ball).transform, [400.0, 250.0, 20.0, 20.0]);
    }
}
