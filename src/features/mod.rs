use std::collections::HashMap;
use std::path::Path;

use crate::analysis::segmentation::base_form;
use crate::error::PatternError;

mod builtin;

/// Number of articulatory features tracked per segment.
pub const FEATURE_COUNT: usize = 20;

/// Feature names, in vector order. Ternary values: -1 (minus), 0 (unspecified),
/// +1 (plus).
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "syl", "son", "cons", "cont", "delrel", "lat", "nas", "strid", "voi", "sg", "cg", "ant",
    "cor", "distr", "lab", "hi", "lo", "back", "round", "tense",
];

/// Articulatory feature vector for one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureVector {
    values: [i8; FEATURE_COUNT],
}

impl FeatureVector {
    pub fn new(values: [i8; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    pub fn value(&self, feature: &str) -> Option<i8> {
        FEATURE_NAMES
            .iter()
            .position(|&name| name == feature)
            .map(|idx| self.values[idx])
    }

    /// Vowels and other syllabic segments carry `[+syl]`.
    pub fn is_syllabic(&self) -> bool {
        self.values[0] > 0
    }

    pub fn is_consonant(&self) -> bool {
        !self.is_syllabic()
    }

    /// Normalized articulatory dissimilarity in `[0, 1]`.
    ///
    /// Each feature contributes half the absolute difference of its ternary
    /// values, so a plus/minus flip counts 1 and a flip against an unspecified
    /// value counts 0.5, divided by the feature count.
    pub fn distance(&self, other: &FeatureVector) -> f64 {
        let raw: i32 = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(&a, &b)| (a as i32 - b as i32).abs())
            .sum();
        raw as f64 / (2 * FEATURE_COUNT) as f64
    }
}

/// Source of segment feature vectors and the distance metric between them.
///
/// Loaded once and read-only thereafter; implementations must be safe to share
/// across rows of a dataset run.
pub trait FeatureProvider: Send + Sync {
    /// Feature vector for one segment, or `None` when the segment is unknown.
    fn features_of(&self, segment: &str) -> Option<FeatureVector>;

    fn distance(&self, a: &FeatureVector, b: &FeatureVector) -> f64 {
        a.distance(b)
    }
}

/// In-memory segment-to-features table.
pub struct FeatureTable {
    rows: HashMap<String, FeatureVector>,
}

impl FeatureTable {
    /// Built-in table covering the common IPA consonant and vowel inventory.
    pub fn builtin() -> Self {
        let rows = builtin::SEGMENTS
            .iter()
            .map(|&(segment, values)| (segment.to_string(), FeatureVector::new(values)))
            .collect();
        Self { rows }
    }

    /// Load a user-supplied table from a JSON map of segment to feature values.
    /// Every row must carry exactly [`FEATURE_COUNT`] ternary values.
    pub fn load(path: &Path) -> Result<Self, PatternError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| PatternError::io("read feature table", e))?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, PatternError> {
        let raw: HashMap<String, Vec<i8>> =
            serde_json::from_str(data).map_err(|e| PatternError::json("parse feature table", e))?;

        let mut rows = HashMap::with_capacity(raw.len());
        for (segment, values) in raw {
            let values: [i8; FEATURE_COUNT] = values.try_into().map_err(|_| {
                PatternError::invalid_input(format!(
                    "feature table row {segment:?} must have {FEATURE_COUNT} values"
                ))
            })?;
            if values.iter().any(|&v| !(-1..=1).contains(&v)) {
                return Err(PatternError::invalid_input(format!(
                    "feature table row {segment:?} has a value outside -1..=1"
                )));
            }
            rows.insert(segment, FeatureVector::new(values));
        }
        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FeatureProvider for FeatureTable {
    fn features_of(&self, segment: &str) -> Option<FeatureVector> {
        if let Some(&features) = self.rows.get(segment) {
            return Some(features);
        }
        // Diacritics modulate rather than replace the base articulation, so a
        // decorated segment missing from the table falls back to its base.
        let base = base_form(segment);
        if base != segment {
            return self.rows.get(&base).copied();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_common_inventory() {
        let table = FeatureTable::builtin();
        for segment in ["p", "t", "k", "s", "ʃ", "m", "n", "æ", "ɪ", "ə", "w"] {
            assert!(table.features_of(segment).is_some(), "missing {segment}");
        }
        assert!(table.features_of("7").is_none());
    }

    #[test]
    fn distance_is_zero_on_self_and_symmetric() {
        let table = FeatureTable::builtin();
        let t = table.features_of("t").unwrap();
        let p = table.features_of("p").unwrap();
        assert_eq!(t.distance(&t), 0.0);
        assert!(t.distance(&p) > 0.0);
        assert_eq!(t.distance(&p), p.distance(&t));
    }

    #[test]
    fn consonant_vowel_distance_exceeds_within_class_distance() {
        let table = FeatureTable::builtin();
        let t = table.features_of("t").unwrap();
        let d = table.features_of("d").unwrap();
        let ae = table.features_of("æ").unwrap();
        assert!(t.distance(&ae) > t.distance(&d));
    }

    #[test]
    fn syllabic_flag_separates_vowels_from_consonants() {
        let table = FeatureTable::builtin();
        assert!(table.features_of("æ").unwrap().is_syllabic());
        assert!(table.features_of("ə").unwrap().is_syllabic());
        assert!(table.features_of("k").unwrap().is_consonant());
        assert!(table.features_of("l").unwrap().is_consonant());
    }

    #[test]
    fn decorated_segment_falls_back_to_base() {
        let table = FeatureTable::builtin();
        let plain = table.features_of("t").unwrap();
        let aspirated = table.features_of("tʰ").unwrap();
        assert_eq!(plain, aspirated);
    }

    #[test]
    fn from_json_validates_row_shape() {
        let ok = r#"{"q": [-1,-1,1,-1,-1,-1,-1,-1,-1,-1,-1,-1,-1,0,-1,1,-1,1,-1,0]}"#;
        let table = FeatureTable::from_json(ok).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.features_of("q").is_some());

        let short = r#"{"q": [1, 0, -1]}"#;
        assert!(FeatureTable::from_json(short).is_err());

        let out_of_range = r#"{"q": [-2,-1,1,-1,-1,-1,-1,-1,-1,-1,-1,-1,-1,0,-1,1,-1,1,-1,0]}"#;
        assert!(FeatureTable::from_json(out_of_range).is_err());
    }

    #[test]
    fn value_lookup_by_feature_name() {
        let table = FeatureTable::builtin();
        let n = table.features_of("n").unwrap();
        assert_eq!(n.value("nas"), Some(1));
        assert_eq!(n.value("syl"), Some(-1));
        assert_eq!(n.value("no_such_feature"), None);
    }
}
