use crate::analysis::classifier::{classify, ClassifierInput};
use crate::analysis::segmentation::segment_transcription;
use crate::error::PatternError;
use crate::features::FeatureProvider;
use crate::label::ErrorLabel;
use crate::pipeline::traits::{PairAligner, PatternClassifier, Segmenter};
use crate::types::{Alignment, Transcription};

pub struct DiacriticSegmenter;

impl Segmenter for DiacriticSegmenter {
    fn segment(&self, transcription: &str) -> Result<Transcription, PatternError> {
        segment_transcription(transcription)
    }
}

pub struct FeatureDistanceAligner;

impl PairAligner for FeatureDistanceAligner {
    fn align(
        &self,
        target: &Transcription,
        actual: &Transcription,
        features: &dyn FeatureProvider,
        indel_penalty: f64,
    ) -> Result<Alignment, PatternError> {
        crate::analysis::alignment::align(target, actual, features, indel_penalty)
    }
}

pub struct RuleClassifier;

impl PatternClassifier for RuleClassifier {
    fn classify(&self, input: &ClassifierInput<'_>) -> ErrorLabel {
        classify(input)
    }
}
