use crate::analysis::classifier::ClassifierInput;
use crate::error::PatternError;
use crate::features::FeatureProvider;
use crate::label::ErrorLabel;
use crate::types::{Alignment, Transcription};

pub trait Segmenter: Send + Sync {
    fn segment(&self, transcription: &str) -> Result<Transcription, PatternError>;
}

pub trait PairAligner: Send + Sync {
    fn align(
        &self,
        target: &Transcription,
        actual: &Transcription,
        features: &dyn FeatureProvider,
        indel_penalty: f64,
    ) -> Result<Alignment, PatternError>;
}

pub trait PatternClassifier: Send + Sync {
    fn classify(&self, input: &ClassifierInput<'_>) -> ErrorLabel;
}
