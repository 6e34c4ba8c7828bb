//! Row scanning with run-length collapse
//!
//! Walks the vertical-center row of the mapped region left to right,
//! classifies each pixel, and appends a symbol only when it differs from the
//! previous one. A scan crossing k band boundaries therefore yields k+1
//! symbols (fewer when classification flickers). Single-pixel noise flips
//! are not debounced here; bands are wide enough at calibration geometry
//! that transient pixels have not mattered in practice.
//!
//! Algorithm tag: `algo-row-run-collapse`

use crate::buffer::PixelBuffer;
use crate::color::{rgba_to_hsv, ColorClassifier, ColorSymbol};
use crate::filter::ColorBoost;
use crate::geometry::PixelRect;

/// Row scanner producing deduplicated band sequences
///
/// Holds the classifier table and an optional color boost applied per pixel
/// before conversion. No state is carried between calls.
#[derive(Debug, Clone, Default)]
pub struct BandScanner {
    classifier: ColorClassifier,
    boost: Option<ColorBoost>,
}

impl BandScanner {
    /// Create a scanner with the shipped classifier and no filter stage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scanner with a custom classifier table
    pub fn with_classifier(classifier: ColorClassifier) -> Self {
        Self {
            classifier,
            boost: None,
        }
    }

    /// Enable the per-pixel color boost ahead of classification
    pub fn with_boost(mut self, boost: ColorBoost) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Scan the region's center row and collapse runs into a band sequence
    ///
    /// The caller guarantees `region` lies inside `buffer` (the region
    /// mapper's bounds check); a region of width 0 yields an empty sequence.
    /// Pure over its inputs: the same buffer and region always produce the
    /// same sequence.
    pub fn scan_row(&self, buffer: &PixelBuffer<'_>, region: &PixelRect) -> Vec<ColorSymbol> {
        let row = region.center_row();
        let mut bands: Vec<ColorSymbol> = Vec::new();

        for x in region.x..region.x + region.width {
            let Some(rgba) = buffer.pixel(x, row) else {
                break;
            };
            let rgba = match &self.boost {
                Some(boost) => boost.apply(rgba),
                None => rgba,
            };

            let sample = rgba_to_hsv(rgba[0], rgba[1], rgba[2], rgba[3]);
            let symbol = self.classifier.classify(&sample);

            if bands.last() != Some(&symbol) {
                bands.push(symbol);
            }
        }

        bands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Single-row RGBA buffer from a list of (rgb, run_length) spans
    fn row_buffer(spans: &[([u8; 3], usize)]) -> Vec<u8> {
        let mut data = Vec::new();
        for (rgb, len) in spans {
            for _ in 0..*len {
                data.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
            }
        }
        data
    }

    fn full_width_rect(width: usize) -> PixelRect {
        PixelRect {
            x: 0,
            y: 0,
            width,
            height: 1,
        }
    }

    #[test]
    fn test_scan_collapses_runs() {
        // Red body, white band, red body: 300 px total
        let data = row_buffer(&[([200, 30, 30], 100), ([255, 255, 255], 51), ([200, 30, 30], 149)]);
        let buffer = PixelBuffer::from_raw(300, 1, &data).unwrap();

        let bands = BandScanner::new().scan_row(&buffer, &full_width_rect(300));
        assert_eq!(
            bands,
            vec![ColorSymbol::Red, ColorSymbol::White, ColorSymbol::Red]
        );
    }

    #[test]
    fn test_no_consecutive_duplicates() {
        let data = row_buffer(&[
            ([200, 30, 30], 20),
            ([255, 255, 255], 5),
            ([200, 30, 30], 20),
            ([20, 20, 20], 10),
            ([200, 30, 30], 20),
        ]);
        let buffer = PixelBuffer::from_raw(75, 1, &data).unwrap();

        let bands = BandScanner::new().scan_row(&buffer, &full_width_rect(75));
        for pair in bands.windows(2) {
            assert_ne!(pair[0], pair[1], "consecutive duplicates in {bands:?}");
        }
        assert_eq!(bands.len(), 5);
    }

    #[test]
    fn test_zero_width_region_is_empty() {
        let data = row_buffer(&[([200, 30, 30], 10)]);
        let buffer = PixelBuffer::from_raw(10, 1, &data).unwrap();

        let bands = BandScanner::new().scan_row(&buffer, &full_width_rect(0));
        assert!(bands.is_empty());
    }

    #[test]
    fn test_scan_is_idempotent() {
        let data = row_buffer(&[([200, 30, 30], 40), ([255, 255, 255], 20), ([30, 30, 200], 40)]);
        let buffer = PixelBuffer::from_raw(100, 1, &data).unwrap();
        let scanner = BandScanner::new();
        let rect = full_width_rect(100);

        assert_eq!(scanner.scan_row(&buffer, &rect), scanner.scan_row(&buffer, &rect));
    }

    #[test]
    fn test_scan_uses_region_center_row() {
        // 3 rows: white / red / white; only the middle row is red
        let mut data = Vec::new();
        for rgb in [[255u8, 255, 255], [200, 30, 30], [255, 255, 255]] {
            for _ in 0..10 {
                data.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
            }
        }
        let buffer = PixelBuffer::from_raw(10, 3, &data).unwrap();
        let rect = PixelRect {
            x: 0,
            y: 0,
            width: 10,
            height: 3,
        };

        let bands = BandScanner::new().scan_row(&buffer, &rect);
        assert_eq!(bands, vec![ColorSymbol::Red]);
    }

    #[test]
    fn test_single_pixel_flip_produces_new_entry() {
        // Documented behavior: no debouncing of one-pixel flicker
        let data = row_buffer(&[([200, 30, 30], 10), ([255, 255, 255], 1), ([200, 30, 30], 10)]);
        let buffer = PixelBuffer::from_raw(21, 1, &data).unwrap();

        let bands = BandScanner::new().scan_row(&buffer, &full_width_rect(21));
        assert_eq!(bands.len(), 3);
    }

    #[test]
    fn test_scan_with_boost_keeps_band_identity() {
        let data = row_buffer(&[([200, 30, 30], 100), ([255, 255, 255], 51), ([200, 30, 30], 149)]);
        let buffer = PixelBuffer::from_raw(300, 1, &data).unwrap();

        let scanner = BandScanner::new().with_boost(ColorBoost::default());
        let bands = scanner.scan_row(&buffer, &full_width_rect(300));
        assert_eq!(
            bands,
            vec![ColorSymbol::Red, ColorSymbol::White, ColorSymbol::Red]
        );
    }
}
