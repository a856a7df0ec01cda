use crate::analysis::classifier::ClassifierInput;
use crate::analysis::{quantifier, resolver};
use crate::config::AnalyzerConfig;
use crate::error::PatternError;
use crate::features::FeatureProvider;
use crate::label::{ErrorBase, ErrorLabel};
use crate::pipeline::traits::{PairAligner, PatternClassifier, Segmenter};
use crate::types::{RefinementAlignment, Transcription};

/// Labels error patterns for target/actual IPA transcription pairs.
///
/// Holds the feature provider and pipeline stages behind trait objects; every
/// analysis call is pure with respect to the analyzer, so one instance can
/// serve a whole dataset run.
pub struct ErrorPatternAnalyzer {
    features: Box<dyn FeatureProvider>,
    segmenter: Box<dyn Segmenter>,
    aligner: Box<dyn PairAligner>,
    classifier: Box<dyn PatternClassifier>,
    config: AnalyzerConfig,
}

pub(crate) struct AnalyzerParts {
    pub features: Box<dyn FeatureProvider>,
    pub segmenter: Box<dyn Segmenter>,
    pub aligner: Box<dyn PairAligner>,
    pub classifier: Box<dyn PatternClassifier>,
    pub config: AnalyzerConfig,
}

impl ErrorPatternAnalyzer {
    pub(crate) fn from_parts(parts: AnalyzerParts) -> Self {
        Self {
            features: parts.features,
            segmenter: parts.segmenter,
            aligner: parts.aligner,
            classifier: parts.classifier,
            config: parts.config,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn features(&self) -> &dyn FeatureProvider {
        self.features.as_ref()
    }

    /// Label the error pattern of one transcription pair.
    ///
    /// A segment the feature provider cannot score yields an `undetermined`
    /// label rather than an error, so a batch run keeps going; a transcription
    /// that does not segment at all is a recoverable per-row error.
    pub fn error_pattern(&self, target: &str, actual: &str) -> Result<ErrorLabel, PatternError> {
        let target = target.trim();
        if target.is_empty() {
            return Err(PatternError::invalid_input("target transcription is empty"));
        }
        let actual = normalize_actual(actual);
        if marks_deletion(&actual) {
            return Ok(ErrorLabel::base(ErrorBase::Deletion));
        }

        let target = self.segmenter.segment(target)?;
        let actual = self.segmenter.segment(&actual)?;

        let Some(target_syllabic) = self.syllabicity(&target) else {
            return Ok(ErrorLabel::undetermined());
        };
        if self.syllabicity(&actual).is_none() {
            return Ok(ErrorLabel::undetermined());
        }

        let alignment = self.aligner.align(
            &target,
            &actual,
            self.features.as_ref(),
            self.config.indel_penalty,
        )?;
        Ok(self.classifier.classify(&ClassifierInput {
            alignment: &alignment,
            target_syllabic: &target_syllabic,
            clear_substitution_threshold: self.config.clear_substitution_threshold,
        }))
    }

    /// Second-pass refinement of an `_other` label.
    ///
    /// Non-`_other` input passes through untouched; so do `_other` categories
    /// the resolver does not cover, and pairs with unscorable segments.
    pub fn error_pattern_resolver(
        &self,
        target: &str,
        actual: &str,
        label: &ErrorLabel,
    ) -> Result<(ErrorLabel, RefinementAlignment), PatternError> {
        if !label.is_other() {
            return Ok((label.clone(), Vec::new()));
        }

        let target = self.segmenter.segment(target.trim())?;
        let actual = self.segmenter.segment(&normalize_actual(actual))?;
        if self.syllabicity(&target).is_none() || self.syllabicity(&actual).is_none() {
            tracing::warn!(%label, "unscorable segment, leaving coarse label in place");
            return Ok((label.clone(), Vec::new()));
        }

        resolver::resolve(
            &target,
            &actual,
            label,
            self.features.as_ref(),
            &self.config,
        )
    }

    /// Severity score for a label, using the configured weights.
    pub fn error_quantifier(&self, label: &ErrorLabel) -> Result<f64, PatternError> {
        quantifier::quantify(label, &self.config.quantifier)
    }

    /// Per-segment syllabicity, or `None` when any segment is unknown to the
    /// feature provider.
    fn syllabicity(&self, transcription: &Transcription) -> Option<Vec<bool>> {
        transcription
            .iter()
            .map(|seg| match self.features.features_of(seg.as_str()) {
                Some(features) => Some(features.is_syllabic()),
                None => {
                    tracing::warn!(segment = seg.as_str(), "feature provider cannot score segment");
                    None
                }
            })
            .collect()
    }
}

/// Transcription workarounds inherited from the source datasets: a
/// superscript schwa counts as a full schwa for epenthesis detection.
fn normalize_actual(actual: &str) -> String {
    actual.trim().replace('ᵊ', "ə")
}

/// Empty-production markers used by transcribers ("∅") and spreadsheet
/// exports ("nan").
fn marks_deletion(actual: &str) -> bool {
    actual.is_empty() || actual == "∅" || actual.eq_ignore_ascii_case("nan")
}
