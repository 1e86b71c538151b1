//! Basic evaluation example demonstrating core functionality.

use pairwise_ap::{
    compute_average_precision, compute_iou, evaluate, load_pairs_from_str, ApConfig, BoundingBox,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Paired Box Evaluation Example ===\n");

    // Example 1: IoU Calculation
    println!("1. IoU Calculation");
    let bbox1 = BoundingBox::new(0.0, 0.0, 2.0, 2.0)?;
    let bbox2 = BoundingBox::new(1.0, 0.0, 3.0, 2.0)?;
    println!("   IoU between half-shifted boxes: {:.4}", compute_iou(&bbox1, &bbox2));
    match BoundingBox::new(2.0, 0.0, 1.0, 1.0) {
        Ok(_) => println!("   unexpected: inverted box accepted"),
        Err(e) => println!("   Inverted box rejected: {}", e),
    }
    println!();

    // Example 2: Load a paired sequence
    println!("2. Loading Paired Boxes");
    let pairs = load_pairs_from_str(
        r#"{
            "ground_truths": [[0, 0, 10, 10], [20, 0, 30, 10], [40, 0, 50, 10]],
            "predictions": [[0, 0, 10, 10], [25, 0, 35, 10], [40, 0, 50, 8]]
        }"#,
    )?;
    println!("   Loaded {} pairs", pairs.ground_truths.len());
    println!();

    // Example 3: Average Precision
    println!("3. Average Precision");
    let ap = compute_average_precision(0.5, &pairs.ground_truths, &pairs.predictions)?;
    println!("   AP@0.5: {:.4}", ap);
    println!();

    // Example 4: Full report
    println!("4. Evaluation Report");
    let report = evaluate(&ApConfig::default(), &pairs.ground_truths, &pairs.predictions)?;
    for (i, (iou, matched)) in report.ious.iter().zip(&report.matches).enumerate() {
        println!("   pair {}: IoU {:.4} {}", i, iou, if *matched { "match" } else { "miss" });
    }
    for point in &report.curve {
        println!(
            "   rank {}: precision {:.4} recall {:.4}",
            point.rank, point.precision, point.recall
        );
    }
    println!("   mean IoU: {:.4}", report.mean_iou);

    Ok(())
}
