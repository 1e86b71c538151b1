//! Average Precision (AP) over a pre-paired box sequence.

use crate::config::{ApConfig, LastPair};
use crate::error::{EvalError, Result};
use crate::metrics::precision_recall::{
    check_recall_denominator, match_sequence, precision_recall_curve,
};
use crate::types::BoundingBox;
use tracing::debug;

/// Calculate Average Precision with default pairing and loop-bound policies.
///
/// Each `ground_truths[i]` is compared against `predictions[i]`; the pair
/// matches when its IoU is at least `threshold`. AP is the right Riemann sum
/// `Σ (recall(i) - recall(i-1)) * precision(i)` over the prefixes of that
/// match sequence, with `recall(0) = 0`.
///
/// # Errors
///
/// - [`EvalError::DegenerateInput`] if `ground_truths` is empty
/// - [`EvalError::LengthMismatch`] if the sequences differ in length
/// - [`EvalError::InvalidThreshold`] if `threshold` is not in [0.0, 1.0]
///
/// # Example
///
/// ```
/// use pairwise_ap::metrics::ap::compute_average_precision;
/// use pairwise_ap::types::BoundingBox;
///
/// let gts = vec![
///     BoundingBox::new(0.0, 0.0, 10.0, 10.0).unwrap(),
///     BoundingBox::new(20.0, 20.0, 30.0, 30.0).unwrap(),
/// ];
/// let preds = vec![
///     BoundingBox::new(0.0, 0.0, 10.0, 10.0).unwrap(),
///     BoundingBox::new(50.0, 50.0, 60.0, 60.0).unwrap(),
/// ];
/// let ap = compute_average_precision(0.5, &gts, &preds).unwrap();
/// assert!((ap - 0.5).abs() < 1e-12);
/// ```
pub fn compute_average_precision(
    threshold: f64,
    ground_truths: &[BoundingBox],
    predictions: &[BoundingBox],
) -> Result<f64> {
    compute_average_precision_with(&ApConfig::with_threshold(threshold), ground_truths, predictions)
}

/// Calculate Average Precision using every setting from `config`.
pub fn compute_average_precision_with(
    config: &ApConfig,
    ground_truths: &[BoundingBox],
    predictions: &[BoundingBox],
) -> Result<f64> {
    ensure_ground_truth(ground_truths)?;
    let matches = match_sequence(config.iou_threshold, ground_truths, predictions, config.pairing)?;
    let ap = average_precision_from_matches(&matches, ground_truths.len(), config.last_pair)?;

    debug!(
        threshold = config.iou_threshold,
        pairs = matches.len(),
        ground_truths = ground_truths.len(),
        ap,
        "computed average precision"
    );
    Ok(ap)
}

/// Integrate precision over recall deltas for an existing match sequence.
///
/// # Errors
///
/// Returns [`EvalError::DegenerateInput`] if `num_ground_truth` is zero, and
/// [`EvalError::LengthMismatch`] if `matches` is longer than `num_ground_truth`.
///
/// # Example
///
/// ```
/// use pairwise_ap::config::LastPair;
/// use pairwise_ap::metrics::ap::average_precision_from_matches;
///
/// let ap = average_precision_from_matches(&[true, false, true], 3, LastPair::Include).unwrap();
/// // 1/3 * 1 + 0 * 1/2 + 1/3 * 2/3
/// assert!((ap - 5.0 / 9.0).abs() < 1e-12);
/// ```
pub fn average_precision_from_matches(
    matches: &[bool],
    num_ground_truth: usize,
    last_pair: LastPair,
) -> Result<f64> {
    check_recall_denominator(matches.len(), num_ground_truth)?;

    let upper = match last_pair {
        LastPair::Include => matches.len(),
        LastPair::Exclude => matches.len().saturating_sub(1),
    };

    let mut ap = 0.0;
    let mut previous_recall = 0.0;
    for point in precision_recall_curve(&matches[..upper], num_ground_truth)? {
        ap += (point.recall - previous_recall) * point.precision;
        previous_recall = point.recall;
    }

    Ok(ap)
}

pub(crate) fn ensure_ground_truth(ground_truths: &[BoundingBox]) -> Result<()> {
    if ground_truths.is_empty() {
        return Err(EvalError::DegenerateInput(
            "ground-truth sequence must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Pairing;

    fn bbox(xtl: f64, ytl: f64, xbr: f64, ybr: f64) -> BoundingBox {
        BoundingBox::new(xtl, ytl, xbr, ybr).unwrap()
    }

    fn row(n: usize) -> Vec<BoundingBox> {
        (0..n)
            .map(|i| {
                let x = i as f64 * 20.0;
                bbox(x, 0.0, x + 10.0, 10.0)
            })
            .collect()
    }

    #[test]
    fn test_perfect_sequence() {
        let gts = row(5);
        let ap = compute_average_precision(0.5, &gts, &gts).unwrap();
        assert!((ap - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_no_matches() {
        let gts = row(4);
        let preds: Vec<BoundingBox> = gts
            .iter()
            .map(|b| bbox(b.xtl(), 100.0, b.xbr(), 110.0))
            .collect();
        let ap = compute_average_precision(0.5, &gts, &preds).unwrap();
        assert_eq!(ap, 0.0);
    }

    #[test]
    fn test_empty_ground_truth() {
        let preds = row(2);
        assert!(matches!(
            compute_average_precision(0.5, &[], &preds),
            Err(EvalError::DegenerateInput(_))
        ));
        assert!(matches!(
            compute_average_precision(0.5, &[], &[]),
            Err(EvalError::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_length_mismatch_is_strict_by_default() {
        let gts = row(3);
        let preds = row(2);
        assert!(matches!(
            compute_average_precision(0.5, &gts, &preds),
            Err(EvalError::LengthMismatch { ground_truths: 3, predictions: 2 })
        ));
    }

    #[test]
    fn test_truncate_keeps_full_ground_truth_denominator() {
        let gts = row(4);
        let preds = row(2);
        let config = ApConfig {
            pairing: Pairing::Truncate,
            ..ApConfig::default()
        };
        let ap = compute_average_precision_with(&config, &gts, &preds).unwrap();
        // Two matches out of four ground truths, both at precision 1
        assert!((ap - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_single_element_include() {
        let gts = row(1);
        let ap = compute_average_precision(0.5, &gts, &gts).unwrap();
        assert_eq!(ap, 1.0);
    }

    #[test]
    fn test_single_element_exclude() {
        let gts = row(1);
        let config = ApConfig {
            last_pair: LastPair::Exclude,
            ..ApConfig::default()
        };
        let ap = compute_average_precision_with(&config, &gts, &gts).unwrap();
        assert_eq!(ap, 0.0);
    }

    #[test]
    fn test_exclude_drops_final_prefix() {
        let matches = [true, true, true, true];
        let include = average_precision_from_matches(&matches, 4, LastPair::Include).unwrap();
        let exclude = average_precision_from_matches(&matches, 4, LastPair::Exclude).unwrap();
        assert!((include - 1.0).abs() < 1e-12);
        assert!((exclude - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_mixed_sequence() {
        // precision at matched ranks: 1/1, 2/3, 3/5
        let matches = [true, false, true, false, true];
        let ap = average_precision_from_matches(&matches, 5, LastPair::Include).unwrap();
        let expected = (1.0 + 2.0 / 3.0 + 3.0 / 5.0) / 5.0;
        assert!((ap - expected).abs() < 1e-12);
    }

    #[test]
    fn test_zero_ground_truth_count() {
        assert!(matches!(
            average_precision_from_matches(&[true], 0, LastPair::Include),
            Err(EvalError::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_more_matches_than_ground_truths() {
        for last_pair in [LastPair::Include, LastPair::Exclude] {
            assert!(matches!(
                average_precision_from_matches(&[true, true, true], 1, last_pair),
                Err(EvalError::LengthMismatch { ground_truths: 1, predictions: 3 })
            ));
        }
        // Fewer matches than ground truths is the truncated case and stays valid
        let ap = average_precision_from_matches(&[true], 3, LastPair::Include).unwrap();
        assert!((ap - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_threshold() {
        let gts = row(2);
        assert!(matches!(
            compute_average_precision(-0.5, &gts, &gts),
            Err(EvalError::InvalidThreshold(_))
        ));
    }
}
