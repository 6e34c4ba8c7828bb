//! Error types for the scan_bands library

use thiserror::Error;

/// Result type alias for scan_bands operations
pub type Result<T> = std::result::Result<T, ScanError>;

/// Error types for band-scan operations
///
/// Classification and edge detection are total functions and never fail;
/// everything that can go wrong is geometry or buffer construction, and all
/// of it is recoverable per frame.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// Mapped scan region has non-positive size or falls outside the buffer
    #[error("Invalid scan geometry: {reason}")]
    InvalidGeometry { reason: String },

    /// Pixel buffer byte length does not match width x height x 4
    #[error("Buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}

impl ScanError {
    /// Create an invalid-geometry error with context
    pub fn geometry(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            reason: reason.into(),
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// Every scan error is local to one frame; the caller skips publishing a
    /// result and waits for the next capture.
    pub fn is_recoverable(&self) -> bool {
        true
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ScanError::InvalidGeometry { .. } => {
                "Scan area does not fit the captured frame. Please re-align the camera."
                    .to_string()
            }
            ScanError::BufferSizeMismatch { .. } => {
                "Captured frame could not be read. Please try scanning again.".to_string()
            }
        }
    }
}
