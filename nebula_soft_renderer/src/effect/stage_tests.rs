//! Unit tests for stage.rs
//!
//! Tests the default stages and the color packing helper using the
//! concrete vertex shapes from the effect modules.

use glam::{Mat4, Vec2, Vec3};

use crate::effect::texture_effect::UvVertex;
use crate::geometry::Vertex;

use super::*;

// ============================================================================
// Default vertex stage
// ============================================================================

#[test]
fn test_default_vertex_stage_identity_model() {
    let stage = DefaultVertexStage::<UvVertex>::new();
    let v = UvVertex::new(Vec3::new(1.0, 2.0, 3.0), Vec2::new(0.25, 0.75));
    let out = stage.run(&v);
    assert_eq!(out.position(), v.position());
    assert_eq!(out.uv, v.uv);
}

#[test]
fn test_default_vertex_stage_applies_model_matrix() {
    let mut stage = DefaultVertexStage::<UvVertex>::new();
    stage.set_model(Mat4::from_translation(Vec3::new(0.0, 0.0, -2.0)));
    let v = UvVertex::new(Vec3::new(0.5, -0.5, 0.0), Vec2::new(1.0, 0.0));
    let out = stage.run(&v);
    assert_eq!(out.position(), Vec3::new(0.5, -0.5, -2.0));
    // Attributes pass through untouched
    assert_eq!(out.uv, Vec2::new(1.0, 0.0));
}

// ============================================================================
// Default geometry stage
// ============================================================================

#[test]
fn test_default_geometry_stage_is_identity() {
    let stage = DefaultGeometryStage::<UvVertex>::new();
    let a = UvVertex::new(Vec3::X, Vec2::ZERO);
    let b = UvVertex::new(Vec3::Y, Vec2::X);
    let c = UvVertex::new(Vec3::Z, Vec2::Y);
    let tri = stage.run(&a, &b, &c, 7);
    assert_eq!(tri.v0, a);
    assert_eq!(tri.v1, b);
    assert_eq!(tri.v2, c);
}

// ============================================================================
// Color packing
// ============================================================================

#[test]
fn test_pack_unit_rgb_channels() {
    assert_eq!(pack_unit_rgb(Vec3::new(1.0, 0.0, 0.0)), 0xFF0000);
    assert_eq!(pack_unit_rgb(Vec3::new(0.0, 1.0, 0.0)), 0x00FF00);
    assert_eq!(pack_unit_rgb(Vec3::new(0.0, 0.0, 1.0)), 0x0000FF);
    assert_eq!(pack_unit_rgb(Vec3::ZERO), 0);
}

#[test]
fn test_pack_unit_rgb_saturates_overshoot() {
    // Interpolation overshoot must not bleed into neighboring channels
    let packed = pack_unit_rgb(Vec3::new(1.2, -0.1, 0.5));
    assert_eq!(packed >> 16 & 0xFF, 255);
    assert_eq!(packed >> 8 & 0xFF, 0);
}
