//! JSON loading utilities for paired box sequences.

use crate::error::{EvalError, Result};
use crate::types::PairedBoxes;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a paired box sequence from a JSON file.
///
/// The file holds `ground_truths` and `predictions` arrays. Each box is either
/// `{"xtl": .., "ytl": .., "xbr": .., "ybr": ..}` or `[xtl, ytl, xbr, ybr]`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, if any box is
/// invalid, or if there are no ground-truth boxes.
///
/// # Example
///
/// ```no_run
/// use pairwise_ap::loader::load_pairs_from_file;
///
/// let pairs = load_pairs_from_file("pairs.json").unwrap();
/// println!("Loaded {} ground truths", pairs.ground_truths.len());
/// ```
pub fn load_pairs_from_file<P: AsRef<Path>>(path: P) -> Result<PairedBoxes> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let pairs: PairedBoxes = serde_json::from_reader(reader)?;

    validate_pairs(&pairs)?;

    Ok(pairs)
}

/// Load a paired box sequence from a JSON string.
///
/// # Example
///
/// ```
/// use pairwise_ap::loader::load_pairs_from_str;
///
/// let json = r#"{
///     "ground_truths": [[0, 0, 10, 10]],
///     "predictions": [{"xtl": 1, "ytl": 1, "xbr": 10, "ybr": 10}]
/// }"#;
/// let pairs = load_pairs_from_str(json).unwrap();
/// assert_eq!(pairs.predictions.len(), 1);
/// ```
pub fn load_pairs_from_str(json_str: &str) -> Result<PairedBoxes> {
    let pairs: PairedBoxes = serde_json::from_str(json_str)?;
    validate_pairs(&pairs)?;
    Ok(pairs)
}

/// Box coordinates are already checked during deserialization; only the
/// sequence-level requirement is left.
fn validate_pairs(pairs: &PairedBoxes) -> Result<()> {
    if pairs.ground_truths.is_empty() {
        return Err(EvalError::DegenerateInput(
            "file must contain at least one ground-truth box".to_string(),
        ));
    }
    Ok(())
}
