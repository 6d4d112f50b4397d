//! Unit tests for texture_effect.rs

use glam::{Vec2, Vec3};

use crate::effect::FragmentStage;
use crate::error::Error;
use crate::texture::Texture;

use super::*;

fn solid_texture(color: [u8; 3]) -> Texture {
    let texels = color.iter().copied().cycle().take(2 * 2 * 3).collect();
    Texture::from_decoded_bytes(2, 2, 3, texels).unwrap()
}

#[test]
fn test_fragment_stage_samples_bound_texture() {
    let mut stage = TextureFragmentStage::new(false);
    stage.bind_texture(solid_texture([10, 20, 30]));
    let v = UvVertex::new(Vec3::ZERO, Vec2::new(0.5, 0.5));
    assert_eq!(stage.run(&v), 10 << 16 | 20 << 8 | 30);
}

#[test]
fn test_ensure_bound_reports_missing_texture() {
    let stage = TextureFragmentStage::new(true);
    assert_eq!(stage.ensure_bound().unwrap_err(), Error::TextureNotBound);
}

#[test]
fn test_ensure_bound_passes_after_bind() {
    let mut stage = TextureFragmentStage::new(true);
    stage.bind_texture(solid_texture([1, 2, 3]));
    assert!(stage.ensure_bound().is_ok());
}

#[test]
#[should_panic(expected = "no texture bound")]
fn test_sampling_unbound_texture_panics() {
    let stage = TextureFragmentStage::new(false);
    stage.run(&UvVertex::default());
}
