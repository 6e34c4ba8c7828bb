//! Display-to-buffer region mapping
//!
//! The preview UI draws the scan strip at a fixed logical size; the capture
//! buffer arrives at full sensor resolution. This module scales the logical
//! strip into buffer coordinates and applies the fractional re-crop that
//! keeps the central portion of the strip (resistor body, not lead wires).
//!
//! Algorithm tag: `algo-display-rect-mapping`

use serde::{Deserialize, Serialize};

use crate::constants::geometry;
use crate::error::{Result, ScanError};

/// Logical geometry of the preview as shown to the user
///
/// All values are display units. Invariant: the scan rectangle lies fully
/// inside the display bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayGeometry {
    /// Logical preview size
    pub display_width: f64,
    pub display_height: f64,

    /// Scan strip drawn within the preview
    pub scan_x: f64,
    pub scan_y: f64,
    pub scan_width: f64,
    pub scan_height: f64,

    /// Fractional re-crop of the mapped strip width
    pub crop_start_fraction: f64,
    pub crop_width_fraction: f64,
}

impl Default for DisplayGeometry {
    fn default() -> Self {
        Self {
            display_width: geometry::DISPLAY_WIDTH,
            display_height: geometry::DISPLAY_HEIGHT,
            scan_x: geometry::SCAN_RECT_X,
            scan_y: geometry::SCAN_RECT_Y,
            scan_width: geometry::SCAN_RECT_WIDTH,
            scan_height: geometry::SCAN_RECT_HEIGHT,
            crop_start_fraction: geometry::CROP_START_FRACTION,
            crop_width_fraction: geometry::CROP_WIDTH_FRACTION,
        }
    }
}

/// Integer rectangle in buffer pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl PixelRect {
    /// Vertical center row of the rectangle
    pub fn center_row(&self) -> usize {
        self.y + self.height / 2
    }
}

/// Map the logical scan rectangle into buffer pixel coordinates
///
/// Scales the strip by `buffer / display` per axis, then re-crops the width
/// to `[x + w*start_frac, x + w*(start_frac + width_frac))` with y and
/// height unchanged.
///
/// # Errors
///
/// Returns `ScanError::InvalidGeometry` if the resulting width or height is
/// zero, or the rectangle violates the buffer bounds
/// (`x + w <= buffer_width`, `y + h < buffer_height`).
pub fn map_region(
    geometry: &DisplayGeometry,
    buffer_width: usize,
    buffer_height: usize,
) -> Result<PixelRect> {
    if geometry.display_width <= 0.0 || geometry.display_height <= 0.0 {
        return Err(ScanError::geometry("display size must be positive"));
    }

    let scale_x = buffer_width as f64 / geometry.display_width;
    let scale_y = buffer_height as f64 / geometry.display_height;

    let x = geometry.scan_x * scale_x;
    let y = geometry.scan_y * scale_y;
    let w = geometry.scan_width * scale_x;
    let h = geometry.scan_height * scale_y;

    // Fractional re-crop on the width only
    let cropped_x = x + w * geometry.crop_start_fraction;
    let cropped_w = w * geometry.crop_width_fraction;

    if x < 0.0 || y < 0.0 {
        return Err(ScanError::geometry(format!(
            "scan origin ({x:.1}, {y:.1}) is negative"
        )));
    }

    let rect = PixelRect {
        x: cropped_x.round() as usize,
        y: y.round() as usize,
        width: cropped_w.round() as usize,
        height: h.round() as usize,
    };

    if rect.width == 0 || rect.height == 0 {
        return Err(ScanError::geometry(format!(
            "mapped region has degenerate size {}x{}",
            rect.width, rect.height
        )));
    }

    if rect.x + rect.width > buffer_width {
        return Err(ScanError::geometry(format!(
            "region right edge {} exceeds buffer width {}",
            rect.x + rect.width,
            buffer_width
        )));
    }

    if rect.y + rect.height >= buffer_height {
        return Err(ScanError::geometry(format!(
            "region bottom edge {} exceeds buffer height {}",
            rect.y + rect.height,
            buffer_height
        )));
    }

    Ok(rect)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uncropped(geometry: DisplayGeometry) -> DisplayGeometry {
        DisplayGeometry {
            crop_start_fraction: 0.0,
            crop_width_fraction: 1.0,
            ..geometry
        }
    }

    #[test]
    fn test_map_region_scales_by_buffer_ratio() {
        // Display 300x200 with strip (2,95) 296x10 onto a 1200x800 buffer
        let geometry = uncropped(DisplayGeometry::default());
        let rect = map_region(&geometry, 1200, 800).unwrap();

        assert_eq!(
            rect,
            PixelRect {
                x: 8,
                y: 380,
                width: 1184,
                height: 40
            }
        );
    }

    #[test]
    fn test_map_region_applies_fractional_crop() {
        let geometry = DisplayGeometry {
            crop_start_fraction: 0.25,
            crop_width_fraction: 0.5,
            ..uncropped(DisplayGeometry::default())
        };
        let rect = map_region(&geometry, 1200, 800).unwrap();

        // Uncropped strip is x=8 w=1184; keep the central half
        assert_eq!(rect.x, 8 + 296);
        assert_eq!(rect.width, 592);
        assert_eq!(rect.y, 380);
        assert_eq!(rect.height, 40);
    }

    #[test]
    fn test_map_region_rejects_degenerate_width() {
        let geometry = DisplayGeometry {
            crop_width_fraction: 0.0,
            ..DisplayGeometry::default()
        };
        let err = map_region(&geometry, 1200, 800).unwrap_err();
        assert!(matches!(err, ScanError::InvalidGeometry { .. }));
    }

    #[test]
    fn test_map_region_rejects_out_of_bounds() {
        let geometry = DisplayGeometry {
            scan_x: 200.0,
            scan_width: 150.0,
            ..uncropped(DisplayGeometry::default())
        };
        // 200 + 150 overruns the 300-unit display once scaled
        let err = map_region(&geometry, 1200, 800).unwrap_err();
        assert!(matches!(err, ScanError::InvalidGeometry { .. }));
    }

    #[test]
    fn test_map_region_rejects_strip_touching_bottom() {
        let geometry = DisplayGeometry {
            scan_y: 190.0,
            scan_height: 10.0,
            ..uncropped(DisplayGeometry::default())
        };
        let err = map_region(&geometry, 1200, 800).unwrap_err();
        assert!(matches!(err, ScanError::InvalidGeometry { .. }));
    }

    #[test]
    fn test_map_region_identity_scale() {
        let geometry = uncropped(DisplayGeometry::default());
        let rect = map_region(&geometry, 300, 200).unwrap();
        assert_eq!(
            rect,
            PixelRect {
                x: 2,
                y: 95,
                width: 296,
                height: 10
            }
        );
    }

    #[test]
    fn test_center_row() {
        let rect = PixelRect {
            x: 0,
            y: 380,
            width: 100,
            height: 40
        };
        assert_eq!(rect.center_row(), 400);

        let thin = PixelRect {
            x: 0,
            y: 426,
            width: 100,
            height: 1
        };
        assert_eq!(thin.center_row(), 426);
    }
}
