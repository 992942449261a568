//! Camera for the 2D viewer
//!
//! Simulation state is projected to pixels on the CPU in `f64`, so the camera
//! only has to map window pixels (origin top-left, y down) to clip space.

use glam::{Mat4, Vec2};

/// 2D orthographic camera over window pixels
#[derive(Debug, Clone)]
pub struct Camera2D {
    pub size: Vec2,
}

impl Camera2D {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Vec2::new(width.max(1) as f32, height.max(1) as f32),
        }
    }

    /// Get the view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        Mat4::orthographic_rh(0.0, self.size.x, self.size.y, 0.0, -1.0, 1.0)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = Vec2::new(width.max(1) as f32, height.max(1) as f32);
    }
}

/// Camera uniform data for shaders
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn from_camera_2d(camera: &Camera2D) -> Self {
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn corners_map_to_clip_space() {
        let camera = Camera2D::new(1200, 900);
        let m = camera.view_projection();

        let top_left = m * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((top_left.x + 1.0).abs() < 1e-6);
        assert!((top_left.y - 1.0).abs() < 1e-6);

        let bottom_right = m * Vec4::new(1200.0, 900.0, 0.0, 1.0);
        assert!((bottom_right.x - 1.0).abs() < 1e-6);
        assert!((bottom_right.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn zero_sized_window_is_clamped() {
        let mut camera = Camera2D::new(0, 0);
        assert_eq!(camera.size, Vec2::ONE);
        camera.resize(800, 0);
        assert_eq!(camera.size, Vec2::new(800.0, 1.0));
    }
}
