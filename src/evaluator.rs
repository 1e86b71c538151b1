//! Full evaluation of a paired box sequence.

use crate::config::ApConfig;
use crate::error::{EvalError, Result};
use crate::metrics::ap::{average_precision_from_matches, ensure_ground_truth};
use crate::metrics::iou::pairwise_ious;
use crate::metrics::precision_recall::precision_recall_curve;
use crate::types::{BoundingBox, PrecisionRecallPoint};
use serde::Serialize;
use tracing::debug;

/// Everything derived from one paired sequence at one IoU threshold.
#[derive(Debug, Clone, Serialize)]
pub struct PairEvaluation {
    pub iou_threshold: f64,
    /// IoU of each evaluated pair, in input order.
    pub ious: Vec<f64>,
    /// Whether each pair's IoU reached the threshold.
    pub matches: Vec<bool>,
    pub curve: Vec<PrecisionRecallPoint>,
    pub average_precision: f64,
    /// Mean IoU over the evaluated pairs, 0.0 if none were evaluated.
    pub mean_iou: f64,
    pub true_positives: usize,
    pub num_ground_truth: usize,
}

/// AP of one sequence at several IoU thresholds.
#[derive(Debug, Clone, Serialize)]
pub struct ThresholdSweep {
    /// `(threshold, ap)` in the order the thresholds were given.
    pub ap_per_threshold: Vec<(f64, f64)>,
    /// Mean of the per-threshold AP values.
    pub mean_ap: f64,
}

/// Evaluate a paired sequence, keeping the intermediate IoUs, matches and curve.
///
/// # Errors
///
/// Same as [`crate::metrics::ap::compute_average_precision_with`].
///
/// # Example
///
/// ```
/// use pairwise_ap::config::ApConfig;
/// use pairwise_ap::evaluator::evaluate;
/// use pairwise_ap::types::BoundingBox;
///
/// let gts = vec![BoundingBox::new(0.0, 0.0, 2.0, 2.0).unwrap()];
/// let preds = vec![BoundingBox::new(1.0, 0.0, 3.0, 2.0).unwrap()];
/// let report = evaluate(&ApConfig::with_threshold(0.3), &gts, &preds).unwrap();
/// assert_eq!(report.matches, vec![true]);
/// assert_eq!(report.average_precision, 1.0);
/// ```
pub fn evaluate(
    config: &ApConfig,
    ground_truths: &[BoundingBox],
    predictions: &[BoundingBox],
) -> Result<PairEvaluation> {
    config.validate()?;
    ensure_ground_truth(ground_truths)?;

    let ious = pairwise_ious(ground_truths, predictions, config.pairing)?;
    let matches: Vec<bool> = ious.iter().map(|&iou| iou >= config.iou_threshold).collect();
    let num_ground_truth = ground_truths.len();

    let average_precision =
        average_precision_from_matches(&matches, num_ground_truth, config.last_pair)?;
    let curve = precision_recall_curve(&matches, num_ground_truth)?;
    let true_positives = matches.iter().filter(|&&m| m).count();
    let mean_iou = if ious.is_empty() {
        0.0
    } else {
        ious.iter().sum::<f64>() / ious.len() as f64
    };

    debug!(
        threshold = config.iou_threshold,
        pairs = ious.len(),
        true_positives,
        average_precision,
        mean_iou,
        "evaluated paired sequence"
    );

    Ok(PairEvaluation {
        iou_threshold: config.iou_threshold,
        ious,
        matches,
        curve,
        average_precision,
        mean_iou,
        true_positives,
        num_ground_truth,
    })
}

/// Compute AP at each threshold in `thresholds`, reusing one IoU pass.
///
/// `config.iou_threshold` is ignored; pairing and loop-bound policies apply.
///
/// # Errors
///
/// Returns [`EvalError::DegenerateInput`] if `thresholds` or `ground_truths`
/// is empty, and [`EvalError::InvalidThreshold`] if any threshold is out of range.
pub fn evaluate_across_thresholds(
    config: &ApConfig,
    thresholds: &[f64],
    ground_truths: &[BoundingBox],
    predictions: &[BoundingBox],
) -> Result<ThresholdSweep> {
    if thresholds.is_empty() {
        return Err(EvalError::DegenerateInput(
            "at least one IoU threshold is required".to_string(),
        ));
    }
    for &threshold in thresholds {
        crate::config::validate_threshold(threshold)?;
    }
    ensure_ground_truth(ground_truths)?;

    let ious = pairwise_ious(ground_truths, predictions, config.pairing)?;

    let mut ap_per_threshold = Vec::with_capacity(thresholds.len());
    for &threshold in thresholds {
        let matches: Vec<bool> = ious.iter().map(|&iou| iou >= threshold).collect();
        let ap = average_precision_from_matches(&matches, ground_truths.len(), config.last_pair)?;
        ap_per_threshold.push((threshold, ap));
    }

    let mean_ap =
        ap_per_threshold.iter().map(|&(_, ap)| ap).sum::<f64>() / ap_per_threshold.len() as f64;
    debug!(thresholds = thresholds.len(), mean_ap, "swept IoU thresholds");

    Ok(ThresholdSweep {
        ap_per_threshold,
        mean_ap,
    })
}
