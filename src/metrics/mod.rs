//! Metrics calculation modules for paired box evaluation.

pub mod ap;
pub mod iou;
pub mod precision_recall;

pub use ap::{
    average_precision_from_matches, compute_average_precision, compute_average_precision_with,
};
pub use iou::{compute_iou, iou_matrix, pairwise_ious};
pub use precision_recall::{match_sequence, precision_recall_curve};

use crate::config::Pairing;
use crate::error::{EvalError, Result};
use tracing::warn;

/// Number of positional pairs to evaluate for sequences of the given lengths.
pub(crate) fn paired_len(
    ground_truths: usize,
    predictions: usize,
    pairing: Pairing,
) -> Result<usize> {
    if ground_truths == predictions {
        return Ok(ground_truths);
    }
    match pairing {
        Pairing::Strict => Err(EvalError::LengthMismatch {
            ground_truths,
            predictions,
        }),
        Pairing::Truncate => {
            let len = ground_truths.min(predictions);
            warn!(ground_truths, predictions, len, "truncating paired sequences to shorter length");
            Ok(len)
        }
    }
}
