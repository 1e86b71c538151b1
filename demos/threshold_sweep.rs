//! AP across the COCO IoU thresholds, under both last-pair policies.

use pairwise_ap::threshold::coco_iou_thresholds;
use pairwise_ap::{evaluate_across_thresholds, ApConfig, BoundingBox, LastPair};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ground_truths: Vec<BoundingBox> = (0..8)
        .map(|i| {
            let x = i as f64 * 100.0;
            BoundingBox::new(x, 0.0, x + 50.0, 50.0)
        })
        .collect::<Result<_, _>>()?;
    // Predictions drift further from their ground truth as the index grows
    let predictions: Vec<BoundingBox> = (0..8)
        .map(|i| {
            let x = i as f64 * 100.0 + i as f64 * 3.0;
            BoundingBox::new(x, 0.0, x + 50.0, 50.0)
        })
        .collect::<Result<_, _>>()?;

    let thresholds = coco_iou_thresholds();
    for last_pair in [LastPair::Include, LastPair::Exclude] {
        let config = ApConfig {
            last_pair,
            ..ApConfig::default()
        };
        let sweep = evaluate_across_thresholds(&config, &thresholds, &ground_truths, &predictions)?;

        println!("last pair: {:?}", last_pair);
        for (threshold, ap) in &sweep.ap_per_threshold {
            println!("   AP@{:.2}: {:.4}", threshold, ap);
        }
        println!("   mean AP: {:.4}\n", sweep.mean_ap);
    }

    Ok(())
}
