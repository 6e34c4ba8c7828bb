//! Vertical edge detection along the scan strip
//!
//! Independent of band classification: reduces the region's midline to a
//! Rec.601 luma profile and reports every interior position where the
//! absolute first difference exceeds the threshold. No clustering is
//! performed, so one physical edge spread over several noisy pixels may
//! report each of them.
//!
//! Algorithm tag: `algo-midline-gradient-edges`

use crate::buffer::PixelBuffer;
use crate::constants::edges;
use crate::geometry::PixelRect;

/// Rec.601 luma weights for the grayscale reduction
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Threshold-based 1-D gradient edge detector
#[derive(Debug, Clone, Copy)]
pub struct EdgeDetector {
    threshold: u8,
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeDetector {
    /// Create a detector with the shipped gradient threshold
    pub fn new() -> Self {
        Self {
            threshold: edges::GRADIENT_THRESHOLD,
        }
    }

    /// Create a detector with a custom threshold on the 8-bit scale
    pub fn with_threshold(threshold: u8) -> Self {
        Self { threshold }
    }

    /// Detect edges along the center row of `region`
    ///
    /// Positions are x offsets relative to the region's left edge, strictly
    /// ascending. Regions narrower than two pixels have no interior
    /// positions and yield an empty result.
    pub fn detect(&self, buffer: &PixelBuffer<'_>, region: &PixelRect) -> Vec<usize> {
        let row = region.center_row();
        let mut intensity = Vec::with_capacity(region.width);

        for x in region.x..region.x + region.width {
            let Some(rgba) = buffer.pixel(x, row) else {
                break;
            };
            intensity.push(luma(rgba));
        }

        self.detect_in_profile(&intensity)
    }

    /// Detect edges in a precomputed 1-D intensity profile
    pub fn detect_in_profile(&self, intensity: &[u8]) -> Vec<usize> {
        let mut positions = Vec::new();

        for x in 1..intensity.len() {
            let step = (intensity[x] as i16 - intensity[x - 1] as i16).unsigned_abs();
            if step > self.threshold as u16 {
                positions.push(x);
            }
        }

        positions
    }
}

/// Rec.601 luma of one RGBA pixel, rounded to the 8-bit scale
fn luma(rgba: [u8; 4]) -> u8 {
    let value = LUMA_R * rgba[0] as f32 + LUMA_G * rgba[1] as f32 + LUMA_B * rgba[2] as f32;
    value.round().min(255.0) as u8
}
