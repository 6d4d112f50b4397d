//! Unit tests for wavy.rs

use glam::{Mat4, Vec2, Vec3};

use crate::effect::{ModelTransform, VertexStage};

use super::*;

#[test]
fn test_displacement_matches_formula() {
    let mut stage = WavyVertexStage::new();
    stage.set_time(1.25);
    let v = UvVertex::new(Vec3::new(0.3, 0.0, 0.0), Vec2::new(0.1, 0.9));
    let out = stage.run(&v);

    let expected_y = stage.amplitude
        * (1.25 * stage.scroll_frequency + 0.3 * stage.wave_frequency).sin();
    assert!((out.position.y - expected_y).abs() < 1e-6);
    assert_eq!(out.position.x, 0.3);
    // Texture coordinates carried through
    assert_eq!(out.uv, Vec2::new(0.1, 0.9));
}

#[test]
fn test_displacement_uses_world_space_x() {
    // The wave phase reads the post-model-transform x coordinate
    let mut stage = WavyVertexStage::new();
    stage.set_model(Mat4::from_translation(Vec3::new(0.5, 0.0, 0.0)));
    stage.set_time(0.0);
    let out = stage.run(&UvVertex::new(Vec3::ZERO, Vec2::ZERO));

    let expected_y = stage.amplitude * (0.5 * stage.wave_frequency).sin();
    assert!((out.position.y - expected_y).abs() < 1e-6);
}

#[test]
fn test_zero_amplitude_is_plain_transform() {
    let mut stage = WavyVertexStage::new();
    stage.amplitude = 0.0;
    stage.set_time(3.0);
    let out = stage.run(&UvVertex::new(Vec3::new(1.0, 2.0, 3.0), Vec2::ZERO));
    assert_eq!(out.position, Vec3::new(1.0, 2.0, 3.0));
}
