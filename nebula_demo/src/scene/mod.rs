//! Hardcoded demo scenes.
//!
//! Each scene owns its vertex/index data and a pipeline specialized for
//! one effect. Per-frame state (rotation angles, elapsed time) lives in
//! the scene and is pushed into the effect before every draw.

use std::f32::consts::PI;

use glam::{Mat4, Vec3};

use nebula_soft_renderer::nebula::buffer::{DepthBuffer, Framebuffer};
use nebula_soft_renderer::nebula::{Result, Texture};
use nebula_soft_renderer::nebula_warn;

use crate::input::InputState;

mod color_cube;
mod face_color_cube;
mod position_color_cube;
mod skinned_cube;
mod wavy_plane;

pub use color_cube::ColorCubeScene;
pub use face_color_cube::FaceColorCubeScene;
pub use position_color_cube::PositionColorCubeScene;
pub use skinned_cube::SkinnedCubeScene;
pub use wavy_plane::WavyPlaneScene;

// ===== SCENE CONTRACT =====

/// One displayable demo: geometry plus a specialized pipeline.
pub trait Scene {
    fn name(&self) -> &'static str;

    /// Advance rotation angles (and time, where the effect uses it) and
    /// push the resulting model transform into the effect.
    fn update(&mut self, dt: f32, input: &InputState);

    /// Render one frame into the caller's buffers.
    fn draw(&mut self, framebuffer: &mut Framebuffer, depth_buffer: &mut DepthBuffer);
}

/// Build the scene selected on the command line.
///
/// Unknown names fall back to the color cube. The texture is consumed
/// by the textured scenes and dropped by the rest.
pub fn create(name: &str, texture: Texture) -> Result<Box<dyn Scene>> {
    Ok(match name {
        "color-cube" => Box::new(ColorCubeScene::new()?),
        "face-color-cube" => Box::new(FaceColorCubeScene::new()?),
        "position-color-cube" => Box::new(PositionColorCubeScene::new()?),
        "skinned-cube" => Box::new(SkinnedCubeScene::new(texture)?),
        "wavy-plane" => Box::new(WavyPlaneScene::new(texture)?),
        other => {
            nebula_warn!(
                "nebula_demo::scene",
                "Unknown scene '{}', falling back to color-cube",
                other
            );
            Box::new(ColorCubeScene::new()?)
        }
    })
}

// ===== SHARED SPIN STATE =====

/// Rotation angles advanced by the held Q/W/E keys.
pub(crate) struct Spin {
    theta_x: f32,
    theta_y: f32,
    theta_z: f32,
}

impl Spin {
    /// Radians per second while a rotation key is held.
    const ANGULAR_SPEED: f32 = PI / 10.0;

    pub(crate) fn new() -> Self {
        Self {
            theta_x: 0.0,
            theta_y: 0.0,
            theta_z: 0.0,
        }
    }

    pub(crate) fn advance(&mut self, dt: f32, input: &InputState) {
        let dtheta = Self::ANGULAR_SPEED * dt;
        if input.rotate_x_held {
            self.theta_x = wrap_angle(self.theta_x + dtheta);
        }
        if input.rotate_y_held {
            self.theta_y = wrap_angle(self.theta_y + dtheta);
        }
        if input.rotate_z_held {
            self.theta_z = wrap_angle(self.theta_z + dtheta);
        }
    }

    /// Object-to-view transform: rotate about x, then y, then z, then
    /// push the object 2 units down the view axis.
    pub(crate) fn model(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -2.0))
            * Mat4::from_rotation_z(self.theta_z)
            * Mat4::from_rotation_y(self.theta_y)
            * Mat4::from_rotation_x(self.theta_x)
    }
}

/// Wrap an angle into the range (-pi, pi].
fn wrap_angle(angle: f32) -> f32 {
    let modded = angle % (2.0 * PI);
    if modded > PI {
        modded - 2.0 * PI
    } else {
        modded
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
