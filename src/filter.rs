//! Per-pixel color boost applied to the scan strip
//!
//! Reproduces the preview-path color controls ahead of classification:
//! saturation mix away from per-pixel luma, additive brightness, contrast
//! stretch around mid-gray, then clamp to the displayable range. Pure and
//! stateless; alpha passes through untouched.
//!
//! Algorithm tag: `algo-color-controls-boost`

use serde::{Deserialize, Serialize};

use crate::constants::filter;

/// Rec.601 luma weights used for the saturation mix
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Brightness/contrast/saturation boost parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorBoost {
    /// Additive offset on normalized channels
    pub brightness: f32,
    /// Multiplier around 0.5
    pub contrast: f32,
    /// Multiplier on the distance from per-pixel luma
    pub saturation: f32,
}

impl Default for ColorBoost {
    fn default() -> Self {
        Self {
            brightness: filter::BRIGHTNESS_OFFSET,
            contrast: filter::CONTRAST_FACTOR,
            saturation: filter::SATURATION_FACTOR,
        }
    }
}

impl ColorBoost {
    /// The identity boost: output equals input
    pub fn identity() -> Self {
        Self {
            brightness: 0.0,
            contrast: 1.0,
            saturation: 1.0,
        }
    }

    /// Apply the boost to one RGBA8 pixel
    pub fn apply(&self, rgba: [u8; 4]) -> [u8; 4] {
        let r = rgba[0] as f32 / 255.0;
        let g = rgba[1] as f32 / 255.0;
        let b = rgba[2] as f32 / 255.0;

        // Saturation first, matching the preview filter's stage order
        let luma = LUMA_R * r + LUMA_G * g + LUMA_B * b;
        let sat = |c: f32| luma + (c - luma) * self.saturation;
        let (r, g, b) = (sat(r), sat(g), sat(b));

        let bright = |c: f32| c + self.brightness;
        let (r, g, b) = (bright(r), bright(g), bright(b));

        let contrast = |c: f32| (c - 0.5) * self.contrast + 0.5;
        let (r, g, b) = (contrast(r), contrast(g), contrast(b));

        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [quantize(r), quantize(g), quantize(b), rgba[3]]
    }
}
