//! Configuration structures for the band-scan pipeline
//!
//! All tunable parameters live here, organized by stage: scan geometry,
//! the filter stage, the classifier window table, and edge detection. The
//! whole structure serializes to JSON so field calibration against real
//! resistors never requires touching scan logic.
//!
//! ```no_run
//! use scan_bands::ScanConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ScanConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use the shipped calibration
//! let config = ScanConfig::default_calibration_0();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::color::ColorClassifier;
use crate::constants::edges;
use crate::filter::ColorBoost;
use crate::geometry::DisplayGeometry;

/// Complete pipeline configuration for one scan setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Display geometry and fractional crop
    pub geometry: DisplayGeometry,

    /// Color boost ahead of classification; `None` disables the stage
    pub boost: Option<ColorBoost>,

    /// Classifier thresholds and window table
    pub classifier: ColorClassifier,

    /// Edge detection settings
    pub edge_detection: EdgeConfig,
}

/// Edge detection parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig {
    /// Run the edge detector alongside band scanning
    pub enabled: bool,

    /// Minimum absolute intensity step (8-bit scale) reported as an edge
    pub threshold: u8,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: edges::GRADIENT_THRESHOLD,
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::default_calibration_0()
    }
}

impl ScanConfig {
    /// The calibration the app ships with: 300x200 preview, centered strip,
    /// color boost on, edge detection on
    pub fn default_calibration_0() -> Self {
        Self {
            geometry: DisplayGeometry::default(),
            boost: Some(ColorBoost::default()),
            classifier: ColorClassifier::new(),
            edge_detection: EdgeConfig::default(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
