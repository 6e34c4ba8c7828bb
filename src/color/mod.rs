//! Color conversion and band classification

pub mod classify;
pub mod conversion;

pub use classify::{ColorClassifier, ColorSymbol, HsvWindow};
pub use conversion::{rgba_to_hsv, HsvSample};
