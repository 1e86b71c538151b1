//! Intersection over Union (IoU) calculation.

use crate::config::Pairing;
use crate::error::Result;
use crate::metrics::paired_len;
use crate::types::BoundingBox;

/// Calculate the Intersection over Union (IoU) between two bounding boxes.
///
/// IoU is defined as the area of intersection divided by the area of union.
/// Boxes that are disjoint, or that only touch along an edge or at a corner,
/// have an IoU of exactly `0.0`.
///
/// # Arguments
///
/// * `bbox1` - First bounding box
/// * `bbox2` - Second bounding box
///
/// # Returns
///
/// Returns a value between 0.0 (no overlap) and 1.0 (perfect overlap).
///
/// # Panics
///
/// Panics if the result falls outside [0.0, 1.0], which can only happen
/// through a bug in the geometry below.
///
/// # Example
///
/// ```
/// use pairwise_ap::metrics::iou::compute_iou;
/// use pairwise_ap::types::BoundingBox;
///
/// let bbox1 = BoundingBox::new(0.0, 0.0, 2.0, 2.0).unwrap();
/// let bbox2 = BoundingBox::new(1.0, 0.0, 3.0, 2.0).unwrap();
/// let iou = compute_iou(&bbox1, &bbox2);
/// assert!((iou - 1.0 / 3.0).abs() < 1e-12);
/// ```
pub fn compute_iou(bbox1: &BoundingBox, bbox2: &BoundingBox) -> f64 {
    // Calculate intersection coordinates
    let x_left = bbox1.xtl().max(bbox2.xtl());
    let y_top = bbox1.ytl().max(bbox2.ytl());
    let x_right = bbox1.xbr().min(bbox2.xbr());
    let y_bottom = bbox1.ybr().min(bbox2.ybr());

    // If there's no intersection
    if x_right < x_left || y_bottom < y_top {
        return 0.0;
    }

    let intersection_area = (x_right - x_left) * (y_bottom - y_top);

    // Both areas are strictly positive, so the union is too.
    let union_area = bbox1.area() + bbox2.area() - intersection_area;
    let iou = intersection_area / union_area;

    assert!(
        (0.0..=1.0).contains(&iou),
        "IoU {iou} outside [0, 1] for {bbox1:?} and {bbox2:?}"
    );
    iou
}

/// Calculate IoU matrix between two sets of bounding boxes.
///
/// Returns a 2D vector where `result[i][j]` is the IoU between `bboxes1[i]` and `bboxes2[j]`.
pub fn iou_matrix(bboxes1: &[BoundingBox], bboxes2: &[BoundingBox]) -> Vec<Vec<f64>> {
    bboxes1
        .iter()
        .map(|bbox1| {
            bboxes2
                .iter()
                .map(|bbox2| compute_iou(bbox1, bbox2))
                .collect()
        })
        .collect()
}

/// Calculate the IoU of every positional pair `(ground_truths[i], predictions[i])`.
///
/// # Errors
///
/// Returns [`crate::EvalError::LengthMismatch`] under [`Pairing::Strict`] when
/// the sequences differ in length. Under [`Pairing::Truncate`] the result has
/// the length of the shorter sequence.
pub fn pairwise_ious(
    ground_truths: &[BoundingBox],
    predictions: &[BoundingBox],
    pairing: Pairing,
) -> Result<Vec<f64>> {
    let len = paired_len(ground_truths.len(), predictions.len(), pairing)?;
    Ok(ground_truths[..len]
        .iter()
        .zip(&predictions[..len])
        .map(|(gt, pred)| compute_iou(gt, pred))
        .collect())
}
