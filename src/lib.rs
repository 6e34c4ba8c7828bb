//! # Scan Bands
//!
//! A Rust crate for reading resistor color bands from captured camera frames.
//!
//! This library provides the portable scanning engine behind a mobile
//! resistor reader:
//! - Mapping the on-screen scan strip into full-resolution buffer coordinates
//! - Boosting brightness/contrast/saturation ahead of classification
//! - Classifying each pixel of the strip into a band color symbol
//! - Collapsing runs into an ordered band sequence
//! - Independently detecting vertical intensity edges along the strip
//!
//! Camera capture, permissions, and on-screen overlay rendering are the
//! caller's concern; the engine consumes one already-decoded RGBA8 frame per
//! call and holds no state between calls.
//!
//! ## Example
//!
//! ```rust
//! use scan_bands::{scan_frame, PixelBuffer, ScanConfig};
//!
//! let data = vec![255u8; 1200 * 800 * 4];
//! let buffer = PixelBuffer::from_raw(1200, 800, &data)?;
//! let result = scan_frame(&buffer, &ScanConfig::default_calibration_0())?;
//! println!("bands: {:?}, edges: {}", result.bands, result.edges.len());
//! # Ok::<(), scan_bands::ScanError>(())
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod buffer;
pub mod color;
pub mod config;
pub mod constants;
pub mod detection;
pub mod error;
pub mod filter;
pub mod geometry;

pub use buffer::PixelBuffer;
pub use color::{rgba_to_hsv, ColorClassifier, ColorSymbol, HsvSample, HsvWindow};
pub use config::{EdgeConfig, ScanConfig};
pub use detection::{BandScanner, EdgeDetector};
pub use error::{Result, ScanError};
pub use filter::ColorBoost;
pub use geometry::{map_region, DisplayGeometry, PixelRect};

/// Complete scan result for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameScan {
    /// Band colors in left-to-right order, adjacent duplicates collapsed
    pub bands: Vec<ColorSymbol>,
    /// Edge positions relative to the region's left edge, ascending; empty
    /// when edge detection is disabled
    pub edges: Vec<usize>,
    /// The buffer-space region that was scanned
    pub region: PixelRect,
}

/// Scan one captured frame for resistor color bands
///
/// Runs the full pipeline with named stages: map the display-space scan
/// strip into buffer coordinates, apply the configured color boost, classify
/// the strip's center row into a collapsed band sequence, and detect
/// intensity edges along the same row.
///
/// # Errors
///
/// Returns `ScanError::InvalidGeometry` when the mapped region is degenerate
/// or falls outside the buffer. The failure is local to this frame; callers
/// skip the result and scan the next capture.
pub fn scan_frame(buffer: &PixelBuffer<'_>, config: &ScanConfig) -> Result<FrameScan> {
    let region = map_region(&config.geometry, buffer.width(), buffer.height())?;
    debug!(
        x = region.x,
        y = region.y,
        width = region.width,
        height = region.height,
        "scan_frame mapped region"
    );

    let mut scanner = BandScanner::with_classifier(config.classifier.clone());
    if let Some(boost) = config.boost {
        scanner = scanner.with_boost(boost);
    }
    let bands = scanner.scan_row(buffer, &region);

    let edges = if config.edge_detection.enabled {
        EdgeDetector::with_threshold(config.edge_detection.threshold).detect(buffer, &region)
    } else {
        Vec::new()
    };

    debug!(bands = bands.len(), edges = edges.len(), "scan_frame complete");

    Ok(FrameScan {
        bands,
        edges,
        region,
    })
}
