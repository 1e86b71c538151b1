//! Match sequences and the precision-recall curve they induce.

use crate::config::{validate_threshold, Pairing};
use crate::error::{EvalError, Result};
use crate::metrics::iou::pairwise_ious;
use crate::types::{BoundingBox, PrecisionRecallPoint};

/// Threshold the IoU of every positional pair.
///
/// Entry `i` is `true` iff `compute_iou(&ground_truths[i], &predictions[i]) >= threshold`.
///
/// # Errors
///
/// Returns an error if the threshold is not in [0.0, 1.0], or if the
/// sequences differ in length under [`Pairing::Strict`].
pub fn match_sequence(
    threshold: f64,
    ground_truths: &[BoundingBox],
    predictions: &[BoundingBox],
    pairing: Pairing,
) -> Result<Vec<bool>> {
    validate_threshold(threshold)?;
    Ok(pairwise_ious(ground_truths, predictions, pairing)?
        .into_iter()
        .map(|iou| iou >= threshold)
        .collect())
}

/// Calculate the precision-recall curve of a match sequence in one cumulative pass.
///
/// Point `i` (0-based) describes the prefix of length `i + 1`:
/// precision is the matched fraction of that prefix and recall is the matched
/// count over `num_ground_truth`.
///
/// # Errors
///
/// - [`EvalError::DegenerateInput`] if `num_ground_truth` is zero
/// - [`EvalError::LengthMismatch`] if `matches` is longer than `num_ground_truth`,
///   which would push recall above 1
///
/// # Example
///
/// ```
/// use pairwise_ap::metrics::precision_recall::precision_recall_curve;
///
/// let curve = precision_recall_curve(&[true, false, true], 4).unwrap();
/// assert_eq!(curve[1].precision, 0.5);
/// assert_eq!(curve[2].recall, 0.5);
/// ```
pub fn precision_recall_curve(
    matches: &[bool],
    num_ground_truth: usize,
) -> Result<Vec<PrecisionRecallPoint>> {
    check_recall_denominator(matches.len(), num_ground_truth)?;

    let mut curve = Vec::with_capacity(matches.len());
    let mut tp = 0usize;

    for (i, &is_match) in matches.iter().enumerate() {
        if is_match {
            tp += 1;
        }
        let rank = i + 1;

        curve.push(PrecisionRecallPoint {
            rank,
            precision: tp as f64 / rank as f64,
            recall: tp as f64 / num_ground_truth as f64,
        });
    }

    Ok(curve)
}

/// Recall is a fraction of all ground truths, so every match needs one.
pub(crate) fn check_recall_denominator(num_matches: usize, num_ground_truth: usize) -> Result<()> {
    if num_ground_truth == 0 {
        return Err(EvalError::DegenerateInput(
            "recall is undefined without ground-truth boxes".to_string(),
        ));
    }
    if num_matches > num_ground_truth {
        return Err(EvalError::LengthMismatch {
            ground_truths: num_ground_truth,
            predictions: num_matches,
        });
    }
    Ok(())
}
