//! # pairwise-ap
//!
//! Object-detection evaluation over a pre-paired sequence of ground-truth and
//! predicted bounding boxes.
//!
//! This library provides:
//! - **IoU** (Intersection over Union) between two axis-aligned boxes
//! - **AP** (Average Precision) of a paired sequence at an IoU threshold
//! - The per-pair match sequence and its precision-recall curve
//! - AP sweeps over several IoU thresholds
//! - A frame overlay helper for eyeballing boxes on sampled images
//!
//! Pairing is positional: `ground_truths[i]` is only ever compared against
//! `predictions[i]`. No assignment between boxes is performed.
//!
//! ## Quick Start
//!
//! ```rust
//! use pairwise_ap::{compute_average_precision, compute_iou, BoundingBox};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let gt = BoundingBox::new(0.0, 0.0, 2.0, 2.0)?;
//! let pred = BoundingBox::new(1.0, 0.0, 3.0, 2.0)?;
//! println!("IoU: {:.4}", compute_iou(&gt, &pred));
//!
//! let ap = compute_average_precision(0.3, &[gt], &[pred])?;
//! assert_eq!(ap, 1.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Input format
//!
//! [`loader`] reads paired sequences from JSON. Boxes are corner coordinates
//! with y growing downward, given as objects or 4-element arrays:
//!
//! ```json
//! {
//!   "ground_truths": [{"xtl": 0, "ytl": 0, "xbr": 10, "ybr": 10}],
//!   "predictions": [[1, 1, 10, 10]]
//! }
//! ```

pub mod config;
pub mod error;
pub mod evaluator;
pub mod loader;
pub mod metrics;
pub mod threshold;
pub mod types;
pub mod visualize;

// Re-export commonly used types and functions
pub use config::{ApConfig, LastPair, Pairing};
pub use error::{EvalError, Result};
pub use evaluator::{evaluate, evaluate_across_thresholds, PairEvaluation, ThresholdSweep};
pub use loader::{load_pairs_from_file, load_pairs_from_str};
pub use metrics::{compute_average_precision, compute_average_precision_with, compute_iou};
pub use types::{BoundingBox, PairedBoxes, PrecisionRecallPoint};
