//! Unit tests for vertex_color.rs

use glam::Vec3;

use crate::effect::FragmentStage;

use super::*;

#[test]
fn test_fragment_stage_packs_interpolated_color() {
    let stage = ColorFragmentStage;
    let v = ColorVertex::new(Vec3::ZERO, Vec3::new(1.0, 0.5, 0.0));
    let packed = stage.run(&v);
    assert_eq!(packed >> 16 & 0xFF, 255);
    assert_eq!(packed >> 8 & 0xFF, 127);
    assert_eq!(packed & 0xFF, 0);
}

#[test]
fn test_color_participates_in_algebra() {
    let a = ColorVertex::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.0));
    let b = ColorVertex::new(Vec3::ONE, Vec3::new(1.0, 1.0, 1.0));
    let mid = a + (b - a) * 0.5;
    assert!((mid.color - Vec3::splat(0.5)).length() < 1e-6);
    assert!((mid.position - Vec3::splat(0.5)).length() < 1e-6);
}

#[test]
fn test_copy_attributes_skips_position() {
    use crate::geometry::CopyAttributes;
    let src = ColorVertex::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.1, 0.2, 0.3));
    let mut dst = ColorVertex::default();
    dst.copy_attributes_from(&src);
    assert_eq!(dst.color, src.color);
    assert_eq!(dst.position, Vec3::ZERO);
}
