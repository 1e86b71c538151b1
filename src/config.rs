//! Evaluation settings and their JSON loading.

use crate::error::{EvalError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// IoU threshold used when none is configured.
pub const DEFAULT_IOU_THRESHOLD: f64 = 0.5;

/// How ground-truth and prediction sequences of different lengths are paired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pairing {
    /// Reject sequences of different lengths.
    #[default]
    Strict,
    /// Pair up to the length of the shorter sequence.
    Truncate,
}

/// Whether the last pair of the match sequence contributes to the AP sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LastPair {
    /// Sum over every prefix `1..=n`.
    #[default]
    Include,
    /// Sum over prefixes `1..n`, leaving out the final pair.
    Exclude,
}

/// Settings for an Average Precision computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApConfig {
    /// A pair matches when its IoU is at least this value.
    pub iou_threshold: f64,
    pub pairing: Pairing,
    pub last_pair: LastPair,
}

impl Default for ApConfig {
    fn default() -> Self {
        Self {
            iou_threshold: DEFAULT_IOU_THRESHOLD,
            pairing: Pairing::default(),
            last_pair: LastPair::default(),
        }
    }
}

impl ApConfig {
    /// Create a config with the given threshold and default policies.
    pub fn with_threshold(iou_threshold: f64) -> Self {
        Self {
            iou_threshold,
            ..Self::default()
        }
    }

    /// Check that the configured threshold is usable.
    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.iou_threshold)
    }
}

/// Validate that a threshold is finite and in the valid range [0.0, 1.0].
pub fn validate_threshold(threshold: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(EvalError::InvalidThreshold(format!(
            "Threshold must be between 0.0 and 1.0, got {}",
            threshold
        )));
    }
    Ok(())
}

/// Load an [`ApConfig`] from a JSON file. Missing fields take their defaults.
///
/// # Example
///
/// ```no_run
/// use pairwise_ap::config::load_config_from_file;
///
/// let config = load_config_from_file("ap.json").unwrap();
/// println!("threshold: {}", config.iou_threshold);
/// ```
pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> Result<ApConfig> {
    let file = File::open(path)?;
    let config: ApConfig = serde_json::from_reader(BufReader::new(file))?;
    config.validate()?;
    Ok(config)
}

/// Load an [`ApConfig`] from a JSON string.
///
/// ```
/// use pairwise_ap::config::{load_config_from_str, LastPair, Pairing};
///
/// let config = load_config_from_str(r#"{"iou_threshold": 0.75, "pairing": "truncate"}"#).unwrap();
/// assert_eq!(config.iou_threshold, 0.75);
/// assert_eq!(config.pairing, Pairing::Truncate);
/// assert_eq!(config.last_pair, LastPair::Include);
/// ```
pub fn load_config_from_str(json_str: &str) -> Result<ApConfig> {
    let config: ApConfig = serde_json::from_str(json_str)?;
    config.validate()?;
    Ok(config)
}
