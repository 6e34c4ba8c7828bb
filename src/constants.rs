//! Calibration constants and reference values for band scanning
//!
//! This module contains compile-time defaults for the scan geometry, the
//! classifier windows, and the filter stage, matching the calibration the
//! app ships with. Runtime overrides go through [`crate::ScanConfig`].

/// Display-space scan geometry as presented to the user
///
/// The preview frame is always rendered at a fixed logical size with a thin
/// scan strip drawn across its vertical center; these are the logical units
/// the region mapper scales up to full sensor resolution.
pub mod geometry {
    /// Logical width of the preview frame (display units)
    pub const DISPLAY_WIDTH: f64 = 300.0;

    /// Logical height of the preview frame (display units)
    pub const DISPLAY_HEIGHT: f64 = 200.0;

    /// Scan strip origin within the preview frame
    pub const SCAN_RECT_X: f64 = 2.0;
    pub const SCAN_RECT_Y: f64 = 95.0;

    /// Scan strip size within the preview frame
    pub const SCAN_RECT_WIDTH: f64 = 296.0;
    pub const SCAN_RECT_HEIGHT: f64 = 10.0;

    /// Fractional re-crop of the mapped strip width, keeping the central
    /// portion where the resistor body sits and dropping the lead wires
    pub const CROP_START_FRACTION: f64 = 0.20;
    pub const CROP_WIDTH_FRACTION: f64 = 0.60;
}

/// Classifier thresholds on the HSV percentage scale
///
/// Hue in degrees [0,360), saturation and value in percent [0,100].
pub mod classifier {
    /// Achromatic white rule: low saturation, high value
    pub const WHITE_MAX_SATURATION: f32 = 10.0;
    pub const WHITE_MIN_VALUE: f32 = 80.0;

    /// Achromatic black rule: low value, checked after the white rule
    pub const BLACK_MAX_VALUE: f32 = 20.0;

    /// Chromatic windows as (hue_min, hue_max, sat_min, sat_max, val_min, val_max)
    pub const BROWN_WINDOW: (f32, f32, f32, f32, f32, f32) = (20.0, 30.0, 50.0, 100.0, 30.0, 60.0);
    pub const RED_WINDOW: (f32, f32, f32, f32, f32, f32) = (0.0, 10.0, 80.0, 100.0, 50.0, 100.0);
    pub const ORANGE_WINDOW: (f32, f32, f32, f32, f32, f32) = (30.0, 40.0, 80.0, 100.0, 50.0, 100.0);
    pub const YELLOW_WINDOW: (f32, f32, f32, f32, f32, f32) = (50.0, 60.0, 80.0, 100.0, 60.0, 100.0);
    pub const GREEN_WINDOW: (f32, f32, f32, f32, f32, f32) = (90.0, 140.0, 60.0, 100.0, 30.0, 90.0);
    pub const BLUE_WINDOW: (f32, f32, f32, f32, f32, f32) = (200.0, 240.0, 50.0, 100.0, 30.0, 100.0);
    pub const VIOLET_WINDOW: (f32, f32, f32, f32, f32, f32) = (270.0, 325.0, 50.0, 100.0, 30.0, 100.0);
}

/// Color-boost filter applied to the scan strip before classification
///
/// Matches the preview-path color controls: a saturation push to separate
/// band hues from the resistor body, a small brightness lift, and a contrast
/// stretch around mid-gray.
pub mod filter {
    /// Additive brightness offset on normalized channels
    pub const BRIGHTNESS_OFFSET: f32 = 0.2;

    /// Contrast multiplier around 0.5
    pub const CONTRAST_FACTOR: f32 = 1.5;

    /// Saturation multiplier (mix away from per-pixel luma)
    pub const SATURATION_FACTOR: f32 = 2.0;
}

/// Edge detection parameters
pub mod edges {
    /// Minimum absolute intensity step (8-bit scale) reported as an edge
    pub const GRADIENT_THRESHOLD: u8 = 50;
}
