//! Error types for the pairwise-ap library.

use thiserror::Error;

/// Result type for pairwise-ap operations.
pub type Result<T> = std::result::Result<T, EvalError>;

/// Error types that can occur while evaluating paired boxes.
#[derive(Error, Debug)]
pub enum EvalError {
    /// Error during JSON parsing or serialization.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error during I/O operations.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error while decoding or encoding a frame image.
    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),

    /// Box coordinates violate `xtl < xbr` and `ytl < ybr`, or are not finite.
    #[error("Invalid bounding box: {0}")]
    InvalidBox(String),

    /// Input that leaves the metric undefined, such as an empty ground-truth sequence.
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Ground-truth and prediction sequences differ in length under strict pairing.
    #[error("Length mismatch: {ground_truths} ground truths vs {predictions} predictions")]
    LengthMismatch {
        ground_truths: usize,
        predictions: usize,
    },

    /// IoU threshold outside [0.0, 1.0] or not finite.
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),
}
