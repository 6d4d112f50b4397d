//! Unit tests for texture.rs

use crate::error::Error;

use super::*;

/// 2x2 RGB texture with four distinct texels:
/// (0,0) red, (1,0) green, (0,1) blue, (1,1) white
fn checker_2x2() -> Texture {
    let texels = vec![
        255, 0, 0, /* */ 0, 255, 0, //
        0, 0, 255, /* */ 255, 255, 255,
    ];
    Texture::from_decoded_bytes(2, 2, 3, texels).unwrap()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_from_decoded_bytes_validates_length() {
    let err = Texture::from_decoded_bytes(2, 2, 3, vec![0; 11]).unwrap_err();
    assert_eq!(err, Error::InvalidTextureData { expected: 12, actual: 11 });
}

#[test]
fn test_from_decoded_bytes_rejects_two_channels() {
    let err = Texture::from_decoded_bytes(2, 2, 2, vec![0; 8]).unwrap_err();
    assert!(matches!(err, Error::InvalidTextureData { .. }));
}

#[test]
fn test_four_channel_source_reads_rgb() {
    // First three bytes of each texel are R, G, B regardless of stride
    let texels = vec![
        10, 20, 30, 99, /* */ 40, 50, 60, 99, //
        70, 80, 90, 99, /* */ 11, 12, 13, 99,
    ];
    let tex = Texture::from_decoded_bytes(2, 2, 4, texels).unwrap();
    assert_eq!(tex.sample(0.0, 0.0, false), 10 << 16 | 20 << 8 | 30);
    assert_eq!(tex.sample(0.9, 0.9, false), 11 << 16 | 12 << 8 | 13);
}

// ============================================================================
// Clamp sampling
// ============================================================================

#[test]
fn test_clamp_inside_range() {
    let tex = checker_2x2();
    assert_eq!(tex.sample(0.0, 0.0, false), 0xFF0000);
    assert_eq!(tex.sample(0.6, 0.0, false), 0x00FF00);
    assert_eq!(tex.sample(0.0, 0.6, false), 0x0000FF);
}

#[test]
fn test_clamp_above_one_hits_last_texel() {
    let tex = checker_2x2();
    // u = 1.5 -> x = 3, clamped to width - 1 = 1
    assert_eq!(tex.sample(1.5, 0.0, false), 0x00FF00);
    assert_eq!(tex.sample(1.5, 1.5, false), 0xFFFFFF);
}

#[test]
fn test_clamp_below_zero_hits_first_texel() {
    let tex = checker_2x2();
    assert_eq!(tex.sample(-0.5, -0.5, false), 0xFF0000);
}

// ============================================================================
// Wrap sampling (modulo width - 1, preserved reference behavior)
// ============================================================================

#[test]
fn test_wrap_above_one_uses_dimension_minus_one_modulo() {
    let tex = checker_2x2();
    // u = 1.5 -> x = fmod(3.0, width - 1 = 1) = 0, NOT width - 1
    assert_eq!(tex.sample(1.5, 0.0, true), 0xFF0000);
}

#[test]
fn test_wrap_and_clamp_disagree_past_one() {
    let tex = checker_2x2();
    let wrapped = tex.sample(1.5, 0.0, true);
    let clamped = tex.sample(1.5, 0.0, false);
    assert_ne!(wrapped, clamped);
}

#[test]
fn test_wrap_inside_unit_square() {
    let tex = checker_2x2();
    // 0.6 * 2 = 1.2 -> fmod(1.2, 1) = 0.2 -> texel 0: wrap bias strikes
    // even inside [0, 1] for the last texel column
    assert_eq!(tex.sample(0.6, 0.0, true), 0xFF0000);
}
