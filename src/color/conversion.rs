//! RGBA to HSV conversion
//!
//! Thin wrapper over the `palette` crate producing the percentage scaling
//! the classifier windows are calibrated against:
//! - hue in degrees [0, 360)
//! - saturation and value in percent [0, 100]
//! - alpha normalized to [0, 1]
//!
//! Total and deterministic; byte inputs are always in range by construction.

use palette::{FromColor, Hsv, Srgb};

/// One classified sample on the HSV percentage scale
///
/// Derived per pixel during a scan, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsvSample {
    /// Hue in degrees [0, 360)
    pub hue: f32,
    /// Saturation in percent [0, 100]
    pub saturation: f32,
    /// Value in percent [0, 100]
    pub value: f32,
    /// Alpha in [0, 1]
    pub alpha: f32,
}

/// Convert one RGBA8 pixel to an [`HsvSample`]
pub fn rgba_to_hsv(r: u8, g: u8, b: u8, a: u8) -> HsvSample {
    let srgb = Srgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
    let hsv = Hsv::from_color(srgb);

    HsvSample {
        hue: hsv.hue.into_positive_degrees(),
        saturation: hsv.saturation * 100.0,
        value: hsv.value * 100.0,
        alpha: a as f32 / 255.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        let red = rgba_to_hsv(255, 0, 0, 255);
        assert!(red.hue.abs() < 0.5);
        assert!((red.saturation - 100.0).abs() < 0.5);
        assert!((red.value - 100.0).abs() < 0.5);

        let green = rgba_to_hsv(0, 255, 0, 255);
        assert!((green.hue - 120.0).abs() < 0.5);

        let blue = rgba_to_hsv(0, 0, 255, 255);
        assert!((blue.hue - 240.0).abs() < 0.5);
    }

    #[test]
    fn test_gray_has_zero_saturation() {
        for v in [0u8, 17, 64, 127, 200, 255] {
            let sample = rgba_to_hsv(v, v, v, 255);
            assert!(sample.saturation.abs() < 0.001, "gray {v} not desaturated");
            assert!((sample.value - v as f32 / 255.0 * 100.0).abs() < 0.5);
        }
    }

    #[test]
    fn test_output_ranges_over_sampled_cube() {
        for r in (0..=255u16).step_by(51) {
            for g in (0..=255u16).step_by(51) {
                for b in (0..=255u16).step_by(51) {
                    let s = rgba_to_hsv(r as u8, g as u8, b as u8, 255);
                    assert!((0.0..360.0).contains(&s.hue), "hue {} out of range", s.hue);
                    assert!((0.0..=100.0).contains(&s.saturation));
                    assert!((0.0..=100.0).contains(&s.value));
                }
            }
        }
    }

    #[test]
    fn test_alpha_normalization() {
        assert!((rgba_to_hsv(0, 0, 0, 0).alpha - 0.0).abs() < f32::EPSILON);
        assert!((rgba_to_hsv(0, 0, 0, 255).alpha - 1.0).abs() < f32::EPSILON);
        assert!((rgba_to_hsv(0, 0, 0, 128).alpha - 128.0 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_secondary_hue() {
        // Cyan sits at 180 degrees
        let cyan = rgba_to_hsv(0, 255, 255, 255);
        assert!((cyan.hue - 180.0).abs() < 0.5);
    }
}
