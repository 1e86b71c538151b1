//! IoU threshold ranges for sweeps.

use crate::config::validate_threshold;
use crate::error::{EvalError, Result};

/// Generate a range of threshold values for evaluation.
///
/// # Arguments
///
/// * `start` - Starting threshold value (inclusive)
/// * `end` - Ending threshold value (inclusive)
/// * `steps` - Number of threshold values to generate
///
/// # Returns
///
/// Returns a vector of evenly-spaced threshold values.
///
/// # Example
///
/// ```
/// use pairwise_ap::threshold::generate_threshold_range;
///
/// let thresholds = generate_threshold_range(0.0, 1.0, 11).unwrap();
/// assert_eq!(thresholds.len(), 11);
/// assert_eq!(thresholds[0], 0.0);
/// assert_eq!(thresholds[10], 1.0);
/// ```
pub fn generate_threshold_range(start: f64, end: f64, steps: usize) -> Result<Vec<f64>> {
    if steps == 0 {
        return Err(EvalError::InvalidThreshold(
            "Number of steps must be greater than 0".to_string(),
        ));
    }

    validate_threshold(start)?;
    validate_threshold(end)?;

    if start > end {
        return Err(EvalError::InvalidThreshold(format!(
            "Start threshold ({}) must be <= end threshold ({})",
            start, end
        )));
    }

    if steps == 1 {
        return Ok(vec![start]);
    }

    let step_size = (end - start) / (steps - 1) as f64;
    Ok((0..steps)
        .map(|i| if i == steps - 1 { end } else { start + step_size * i as f64 })
        .collect())
}

/// The ten COCO IoU thresholds 0.50:0.05:0.95.
///
/// Each value is a single correctly rounded division, so `0.7` is exactly the
/// literal `0.7` rather than an accumulated sum.
pub fn coco_iou_thresholds() -> Vec<f64> {
    (10..20).map(|i| f64::from(i) / 20.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_threshold_range() {
        let thresholds = generate_threshold_range(0.0, 1.0, 11).unwrap();
        assert_eq!(thresholds.len(), 11);
        assert!((thresholds[0] - 0.0).abs() < 1e-10);
        assert!((thresholds[10] - 1.0).abs() < 1e-10);
        assert!((thresholds[5] - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_single_step() {
        assert_eq!(generate_threshold_range(0.3, 0.9, 1).unwrap(), vec![0.3]);
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(generate_threshold_range(0.0, 1.0, 0).is_err());
        assert!(generate_threshold_range(0.8, 0.2, 3).is_err());
        assert!(generate_threshold_range(-0.1, 0.5, 3).is_err());
        assert!(generate_threshold_range(0.1, 1.5, 3).is_err());
    }

    #[test]
    fn test_coco_thresholds() {
        let thresholds = coco_iou_thresholds();
        assert_eq!(thresholds.len(), 10);
        let expected = [0.5, 0.55, 0.6, 0.65, 0.7, 0.75, 0.8, 0.85, 0.9, 0.95];
        assert_eq!(thresholds, expected);
    }
}
