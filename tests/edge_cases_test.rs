//! Comprehensive edge case and boundary condition tests.

use pairwise_ap::config::{ApConfig, LastPair};
use pairwise_ap::metrics::{compute_average_precision, compute_average_precision_with, compute_iou};
use pairwise_ap::error::EvalError;
use pairwise_ap::types::{BoundingBox, MAX_AREA};

fn create_bbox(xtl: f64, ytl: f64, xbr: f64, ybr: f64) -> BoundingBox {
    BoundingBox::new(xtl, ytl, xbr, ybr).unwrap()
}

fn exclude_last() -> ApConfig {
    ApConfig {
        last_pair: LastPair::Exclude,
        ..ApConfig::default()
    }
}

// ============================================================================
// IOU EDGE CASES
// ============================================================================

#[test]
fn test_disjoint_boxes() {
    let b1 = create_bbox(0.0, 0.0, 1.0, 1.0);
    let b2 = create_bbox(5.0, 5.0, 6.0, 6.0);
    assert_eq!(compute_iou(&b1, &b2), 0.0);
}

#[test]
fn test_touching_vertical_edge() {
    let b1 = create_bbox(0.0, 0.0, 1.0, 1.0);
    let b2 = create_bbox(1.0, 0.0, 2.0, 1.0);
    assert_eq!(compute_iou(&b1, &b2), 0.0);
    assert_eq!(compute_iou(&b2, &b1), 0.0);
}

#[test]
fn test_touching_horizontal_edge() {
    let b1 = create_bbox(0.0, 0.0, 1.0, 1.0);
    let b2 = create_bbox(0.0, 1.0, 1.0, 2.0);
    assert_eq!(compute_iou(&b1, &b2), 0.0);
}

#[test]
fn test_touching_corner() {
    let b1 = create_bbox(0.0, 0.0, 1.0, 1.0);
    let b2 = create_bbox(1.0, 1.0, 2.0, 2.0);
    assert_eq!(compute_iou(&b1, &b2), 0.0);
}

#[test]
fn test_half_shifted_boxes_one_third() {
    let b1 = create_bbox(0.0, 0.0, 2.0, 2.0);
    let b2 = create_bbox(1.0, 0.0, 3.0, 2.0);
    assert!((compute_iou(&b1, &b2) - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_overlap_in_x_only() {
    // Overlapping x ranges but separated y ranges
    let b1 = create_bbox(0.0, 0.0, 10.0, 10.0);
    let b2 = create_bbox(5.0, 20.0, 15.0, 30.0);
    assert_eq!(compute_iou(&b1, &b2), 0.0);
}

#[test]
fn test_negative_coordinates() {
    let b1 = create_bbox(-10.0, -10.0, 0.0, 0.0);
    let b2 = create_bbox(-5.0, -10.0, 5.0, 0.0);
    assert!((compute_iou(&b1, &b2) - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_tiny_and_huge_boxes() {
    let tiny = create_bbox(0.0, 0.0, 1e-6, 1e-6);
    let huge = create_bbox(0.0, 0.0, 1e6, 1e6);
    let iou = compute_iou(&tiny, &huge);
    assert!(iou > 0.0 && iou < 1e-20);
}

#[test]
fn test_extreme_extents_rejected_instead_of_panicking() {
    for (xbr, ybr) in [(1e200, 1e200), (1e-200, 1e-200), (f64::MAX, 1.0)] {
        assert!(
            matches!(BoundingBox::new(0.0, 0.0, xbr, ybr), Err(EvalError::InvalidBox(_))),
            "({}, {}) should be rejected",
            xbr,
            ybr
        );
    }
}

#[test]
fn test_extreme_valid_boxes_self_iou() {
    let largest = create_bbox(0.0, 0.0, MAX_AREA, 1.0);
    let half_width = create_bbox(0.0, 0.0, MAX_AREA / 2.0, 1.0);
    let small = create_bbox(0.0, 0.0, 1e-150, 1e-150);

    assert_eq!(compute_iou(&largest, &largest), 1.0);
    assert_eq!(compute_iou(&small, &small), 1.0);
    assert!((compute_iou(&largest, &half_width) - 0.5).abs() < 1e-12);

    let ap = compute_average_precision(0.5, &[small, largest], &[small, largest]).unwrap();
    assert!((ap - 1.0).abs() < 1e-10);
}

// ============================================================================
// LAST PAIR BOUNDARY
// ============================================================================

#[test]
fn test_single_match_include() {
    let gts = vec![create_bbox(0.0, 0.0, 1.0, 1.0)];
    assert_eq!(compute_average_precision(0.5, &gts, &gts).unwrap(), 1.0);
}

#[test]
fn test_single_match_exclude() {
    let gts = vec![create_bbox(0.0, 0.0, 1.0, 1.0)];
    assert_eq!(compute_average_precision_with(&exclude_last(), &gts, &gts).unwrap(), 0.0);
}

#[test]
fn test_single_miss() {
    let gts = vec![create_bbox(0.0, 0.0, 1.0, 1.0)];
    let preds = vec![create_bbox(3.0, 3.0, 4.0, 4.0)];
    assert_eq!(compute_average_precision(0.5, &gts, &preds).unwrap(), 0.0);
    assert_eq!(compute_average_precision_with(&exclude_last(), &gts, &preds).unwrap(), 0.0);
}

#[test]
fn test_only_last_pair_matches() {
    let gts = vec![
        create_bbox(0.0, 0.0, 1.0, 1.0),
        create_bbox(2.0, 0.0, 3.0, 1.0),
        create_bbox(4.0, 0.0, 5.0, 1.0),
    ];
    let preds = vec![
        create_bbox(0.0, 5.0, 1.0, 6.0),
        create_bbox(2.0, 5.0, 3.0, 6.0),
        create_bbox(4.0, 0.0, 5.0, 1.0),
    ];

    // Include: 1/3 recall gained at precision 1/3
    let include = compute_average_precision(0.5, &gts, &preds).unwrap();
    assert!((include - 1.0 / 9.0).abs() < 1e-12);

    // Exclude never reaches the match
    let exclude = compute_average_precision_with(&exclude_last(), &gts, &preds).unwrap();
    assert_eq!(exclude, 0.0);
}

#[test]
fn test_threshold_equal_to_iou_matches() {
    let gts = vec![create_bbox(0.0, 0.0, 2.0, 2.0)];
    let preds = vec![create_bbox(0.0, 0.0, 2.0, 1.0)];
    assert_eq!(compute_average_precision(0.5, &gts, &preds).unwrap(), 1.0);
}

#[test]
fn test_threshold_zero_matches_disjoint_pairs() {
    let gts = vec![create_bbox(0.0, 0.0, 1.0, 1.0)];
    let preds = vec![create_bbox(9.0, 9.0, 10.0, 10.0)];
    assert_eq!(compute_average_precision(0.0, &gts, &preds).unwrap(), 1.0);
}

#[test]
fn test_large_sequence() {
    let gts: Vec<BoundingBox> = (0..10_000)
        .map(|i| {
            let x = (i % 100) as f64 * 10.0;
            let y = (i / 100) as f64 * 10.0;
            create_bbox(x, y, x + 8.0, y + 8.0)
        })
        .collect();
    let ap = compute_average_precision(0.5, &gts, &gts).unwrap();
    assert!((ap - 1.0).abs() < 1e-9);
}
