pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod label;
pub mod pipeline;
pub mod types;

pub use config::{AnalyzerConfig, QuantifierWeights};
pub use error::PatternError;
pub use features::{FeatureProvider, FeatureTable, FeatureVector};
pub use label::{ErrorBase, ErrorLabel, MemberOutcome, SyllablePosition};
pub use pipeline::builder::AnalyzerBuilder;
pub use pipeline::runtime::ErrorPatternAnalyzer;
pub use pipeline::traits::{PairAligner, PatternClassifier, Segmenter};
pub use types::{Alignment, AlignmentPair, RefinementAlignment, RefinementPair, Segment, Transcription};
