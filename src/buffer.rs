//! Borrowed RGBA8 frame view
//!
//! The engine never owns frame memory: the camera layer hands in a decoded
//! RGBA8 byte slice for the duration of one scan call and keeps ownership.
//! Row-major, top-left origin, 4 bytes per pixel.

use crate::error::{Result, ScanError};

/// Bytes per RGBA8 pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// Immutable view over a decoded RGBA8 frame
///
/// Invariant: `data.len() == width * height * 4`, checked at construction.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    width: usize,
    height: usize,
    data: &'a [u8],
}

impl<'a> PixelBuffer<'a> {
    /// Create a view over raw RGBA8 bytes
    ///
    /// # Errors
    ///
    /// Returns `ScanError::BufferSizeMismatch` if the slice length does not
    /// equal `width * height * 4`.
    pub fn from_raw(width: usize, height: usize, data: &'a [u8]) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .ok_or(ScanError::BufferSizeMismatch {
                expected: usize::MAX,
                actual: data.len(),
            })?;

        if data.len() != expected {
            return Err(ScanError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// RGBA channels of the pixel at (x, y)
    ///
    /// Returns `None` when the coordinate is outside the frame.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * BYTES_PER_PIXEL;
        let px = &self.data[idx..idx + BYTES_PER_PIXEL];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Byte slice of one full pixel row
    pub fn row(&self, y: usize) -> &'a [u8] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.width * BYTES_PER_PIXEL;
        &self.data[start..start + self.width * BYTES_PER_PIXEL]
    }
}
