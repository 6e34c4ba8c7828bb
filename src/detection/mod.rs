//! Band-sequence extraction and edge detection over the scan strip

pub mod bands;
pub mod edges;

pub use bands::BandScanner;
pub use edges::EdgeDetector;
