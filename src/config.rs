use std::path::Path;

use serde::Deserialize;

use crate::error::PatternError;

/// Tunable parameters for alignment, classification, and scoring.
///
/// The defaults are calibrated to the normalized feature-distance scale in
/// `[0, 1]` produced by [`crate::features::FeatureVector::distance`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Optional path to a user-supplied JSON feature table; the built-in
    /// inventory is used when absent.
    pub feature_table_path: Option<String>,
    /// Fixed cost of one insertion or deletion in the alignment. A
    /// substitution unfolds into a deletion plus an insertion only when the
    /// pair's feature distance exceeds twice this constant.
    pub indel_penalty: f64,
    /// Bonus subtracted from position-matching pairs during resolution of
    /// equal-length clusters (clamped at zero).
    pub position_match_bonus: f64,
    /// A lone substitution at or above this distance is too ambiguous for a
    /// direct label and defers to the resolver as `substitution_other`.
    pub clear_substitution_threshold: f64,
    pub quantifier: QuantifierWeights,
}

impl AnalyzerConfig {
    pub const DEFAULT_INDEL_PENALTY: f64 = 0.2;
    pub const DEFAULT_POSITION_MATCH_BONUS: f64 = 0.1;
    pub const DEFAULT_CLEAR_SUBSTITUTION_THRESHOLD: f64 = 0.25;

    pub fn load(path: &Path) -> Result<Self, PatternError> {
        let data =
            std::fs::read_to_string(path).map_err(|e| PatternError::io("read analyzer config", e))?;
        serde_json::from_str(&data).map_err(|e| PatternError::json("parse analyzer config", e))
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            feature_table_path: None,
            indel_penalty: Self::DEFAULT_INDEL_PENALTY,
            position_match_bonus: Self::DEFAULT_POSITION_MATCH_BONUS,
            clear_substitution_threshold: Self::DEFAULT_CLEAR_SUBSTITUTION_THRESHOLD,
            quantifier: QuantifierWeights::default(),
        }
    }
}

/// Weights for converting labels to severity scores.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct QuantifierWeights {
    pub full_correct: f64,
    pub full_deletion: f64,
    pub full_substitution: f64,
    pub correct_segment: f64,
    pub substitution_segment: f64,
    pub epenthesis_penalty: f64,
}

impl Default for QuantifierWeights {
    fn default() -> Self {
        Self {
            full_correct: 1.0,
            full_deletion: 0.0,
            full_substitution: 0.6,
            correct_segment: 1.0,
            substitution_segment: 0.6,
            epenthesis_penalty: -0.3,
        }
    }
}
