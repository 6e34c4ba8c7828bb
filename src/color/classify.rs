//! HSV window classification of band colors
//!
//! Resistor bands use a small closed palette, so classification is a table
//! of coarse HSV windows evaluated in priority order rather than RGB
//! distance: coarse windows tolerate camera noise and lighting variance.
//! Rules overlap, so evaluation order is part of the contract:
//!
//! 1. achromatic white (low saturation, high value)
//! 2. achromatic black (low value)
//! 3. chromatic windows, first match wins
//! 4. configurable fallback symbol
//!
//! Algorithm tag: `algo-hsv-window-classification`

use serde::{Deserialize, Serialize};

use crate::color::conversion::HsvSample;
use crate::constants::classifier;

/// Resistor band color symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorSymbol {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Gray,
    White,
}

/// One chromatic classification rule: closed HSV intervals plus the symbol
/// they map to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HsvWindow {
    pub symbol: ColorSymbol,
    pub hue_min: f32,
    pub hue_max: f32,
    pub sat_min: f32,
    pub sat_max: f32,
    pub val_min: f32,
    pub val_max: f32,
}

impl HsvWindow {
    pub fn new(
        symbol: ColorSymbol,
        hue: (f32, f32),
        sat: (f32, f32),
        val: (f32, f32),
    ) -> Self {
        Self {
            symbol,
            hue_min: hue.0,
            hue_max: hue.1,
            sat_min: sat.0,
            sat_max: sat.1,
            val_min: val.0,
            val_max: val.1,
        }
    }

    fn from_tuple(symbol: ColorSymbol, w: (f32, f32, f32, f32, f32, f32)) -> Self {
        Self::new(symbol, (w.0, w.1), (w.2, w.3), (w.4, w.5))
    }

    /// Closed-interval containment on all three axes
    pub fn contains(&self, sample: &HsvSample) -> bool {
        sample.hue >= self.hue_min
            && sample.hue <= self.hue_max
            && sample.saturation >= self.sat_min
            && sample.saturation <= self.sat_max
            && sample.value >= self.val_min
            && sample.value <= self.val_max
    }
}

/// Table-driven band color classifier
///
/// Total function: every sample maps to exactly one symbol, with the
/// fallback covering the unpartitioned remainder of HSV space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorClassifier {
    /// Achromatic white rule thresholds
    pub white_max_saturation: f32,
    pub white_min_value: f32,

    /// Achromatic black rule threshold
    pub black_max_value: f32,

    /// Chromatic windows in evaluation order
    pub windows: Vec<HsvWindow>,

    /// Symbol returned when no rule matches
    pub fallback: ColorSymbol,
}

impl Default for ColorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorClassifier {
    /// Create a classifier with the shipped calibration windows
    pub fn new() -> Self {
        Self {
            white_max_saturation: classifier::WHITE_MAX_SATURATION,
            white_min_value: classifier::WHITE_MIN_VALUE,
            black_max_value: classifier::BLACK_MAX_VALUE,
            windows: vec![
                HsvWindow::from_tuple(ColorSymbol::Brown, classifier::BROWN_WINDOW),
                HsvWindow::from_tuple(ColorSymbol::Red, classifier::RED_WINDOW),
                HsvWindow::from_tuple(ColorSymbol::Orange, classifier::ORANGE_WINDOW),
                HsvWindow::from_tuple(ColorSymbol::Yellow, classifier::YELLOW_WINDOW),
                HsvWindow::from_tuple(ColorSymbol::Green, classifier::GREEN_WINDOW),
                HsvWindow::from_tuple(ColorSymbol::Blue, classifier::BLUE_WINDOW),
                HsvWindow::from_tuple(ColorSymbol::Violet, classifier::VIOLET_WINDOW),
            ],
            fallback: ColorSymbol::White,
        }
    }

    /// Classify one HSV sample into a band color symbol
    pub fn classify(&self, sample: &HsvSample) -> ColorSymbol {
        // White before black so a washed-out dark pixel is not swallowed by
        // the value rule
        if sample.saturation <= self.white_max_saturation && sample.value >= self.white_min_value {
            return ColorSymbol::White;
        }

        if sample.value < self.black_max_value {
            return ColorSymbol::Black;
        }

        for window in &self.windows {
            if window.contains(sample) {
                return window.symbol;
            }
        }

        self.fallback
    }
}
