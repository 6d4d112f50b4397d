//! Unit tests for scene/mod.rs

use std::f32::consts::PI;

use super::*;
use crate::texture_io::checkerboard;

// ============================================================================
// Angle wrapping
// ============================================================================

#[test]
fn test_wrap_angle_passes_small_angles_through() {
    assert_eq!(wrap_angle(0.5), 0.5);
    assert_eq!(wrap_angle(0.0), 0.0);
}

#[test]
fn test_wrap_angle_folds_past_pi() {
    let wrapped = wrap_angle(PI + 0.1);
    assert!((wrapped - (-PI + 0.1)).abs() < 1e-5);
}

#[test]
fn test_wrap_angle_removes_full_turns() {
    let wrapped = wrap_angle(2.0 * PI + 0.25);
    assert!((wrapped - 0.25).abs() < 1e-5);
}

// ============================================================================
// Spin state
// ============================================================================

#[test]
fn test_spin_only_advances_held_axes() {
    let mut spin = Spin::new();
    let input = InputState {
        rotate_y_held: true,
        ..InputState::default()
    };

    spin.advance(1.0 / 60.0, &input);

    assert_eq!(spin.theta_x, 0.0);
    assert!(spin.theta_y > 0.0);
    assert_eq!(spin.theta_z, 0.0);
}

#[test]
fn test_spin_model_translates_down_the_view_axis() {
    let spin = Spin::new();
    let placed = spin.model().transform_point3(glam::Vec3::ZERO);
    assert_eq!(placed, glam::Vec3::new(0.0, 0.0, -2.0));
}

// ============================================================================
// Scene construction and rendering
// ============================================================================

#[test]
fn test_unknown_scene_name_falls_back_to_color_cube() {
    let texture = checkerboard(16, 16, 4).unwrap();
    let scene = create("no-such-scene", texture).unwrap();
    assert_eq!(scene.name(), "color-cube");
}

#[test]
fn test_every_scene_renders_visible_pixels() {
    let names = [
        "color-cube",
        "face-color-cube",
        "position-color-cube",
        "skinned-cube",
        "wavy-plane",
    ];

    for name in names {
        let texture = checkerboard(16, 16, 4).unwrap();
        let mut scene = create(name, texture).unwrap();
        assert_eq!(scene.name(), name);

        let mut framebuffer = Framebuffer::new(64, 64);
        let mut depth_buffer = DepthBuffer::new(64, 64);

        scene.update(1.0 / 60.0, &InputState::default());
        scene.draw(&mut framebuffer, &mut depth_buffer);

        let covered = framebuffer.pixels().iter().filter(|&&p| p != 0).count();
        assert!(covered > 0, "scene '{}' rendered nothing", name);
    }
}
