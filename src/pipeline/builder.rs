use std::path::Path;

use crate::config::AnalyzerConfig;
use crate::error::PatternError;
use crate::features::{FeatureProvider, FeatureTable};
use crate::pipeline::defaults::{DiacriticSegmenter, FeatureDistanceAligner, RuleClassifier};
use crate::pipeline::runtime::{AnalyzerParts, ErrorPatternAnalyzer};
use crate::pipeline::traits::{PairAligner, PatternClassifier, Segmenter};

pub struct AnalyzerBuilder {
    config: AnalyzerConfig,
    features: Option<Box<dyn FeatureProvider>>,
    segmenter: Option<Box<dyn Segmenter>>,
    aligner: Option<Box<dyn PairAligner>>,
    classifier: Option<Box<dyn PatternClassifier>>,
}

impl AnalyzerBuilder {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            features: None,
            segmenter: None,
            aligner: None,
            classifier: None,
        }
    }

    pub fn with_features(mut self, features: Box<dyn FeatureProvider>) -> Self {
        self.features = Some(features);
        self
    }

    pub fn with_segmenter(mut self, segmenter: Box<dyn Segmenter>) -> Self {
        self.segmenter = Some(segmenter);
        self
    }

    pub fn with_aligner(mut self, aligner: Box<dyn PairAligner>) -> Self {
        self.aligner = Some(aligner);
        self
    }

    pub fn with_classifier(mut self, classifier: Box<dyn PatternClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn build(self) -> Result<ErrorPatternAnalyzer, PatternError> {
        let features: Box<dyn FeatureProvider> = if let Some(features) = self.features {
            features
        } else if let Some(path) = &self.config.feature_table_path {
            Box::new(FeatureTable::load(Path::new(path))?)
        } else {
            Box::new(FeatureTable::builtin())
        };

        Ok(ErrorPatternAnalyzer::from_parts(AnalyzerParts {
            features,
            segmenter: self.segmenter.unwrap_or_else(|| Box::new(DiacriticSegmenter)),
            aligner: self.aligner.unwrap_or_else(|| Box::new(FeatureDistanceAligner)),
            classifier: self.classifier.unwrap_or_else(|| Box::new(RuleClassifier)),
            config: self.config,
        }))
    }
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureVector;

    struct EmptyProvider;

    impl FeatureProvider for EmptyProvider {
        fn features_of(&self, _segment: &str) -> Option<FeatureVector> {
            None
        }
    }

    #[test]
    fn default_build_uses_builtin_table() {
        let analyzer = AnalyzerBuilder::default().build().unwrap();
        let label = analyzer.error_pattern("kæt", "kæt").unwrap();
        assert_eq!(label.to_string(), "correct");
    }

    #[test]
    fn injected_provider_is_used() {
        let analyzer = AnalyzerBuilder::default()
            .with_features(Box::new(EmptyProvider))
            .build()
            .unwrap();
        // Every segment is unknown to the provider, so nothing can be scored.
        let label = analyzer.error_pattern("kæt", "kæt").unwrap();
        assert_eq!(label.to_string(), "undetermined");
    }

    #[test]
    fn missing_feature_table_path_fails_build() {
        let config = AnalyzerConfig {
            feature_table_path: Some("/no/such/feature_table.json".to_string()),
            ..AnalyzerConfig::default()
        };
        assert!(AnalyzerBuilder::new(config).build().is_err());
    }
}
