//! Camera for the playfield
//!
//! Orthographic, y-down: one world unit is one playfield unit and (0, 0) is
//! the top-left corner, matching the simulation's coordinates.

use glam::Mat4;

pub struct Camera {
    pub projection: Mat4,
}

impl Camera {
    pub fn orthographic(width: f32, height: f32) -> Self {
        // top = 0, bottom = height flips y so it grows downwards
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);
        Self { projection }
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.projection.to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}
