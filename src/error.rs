use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("unrecognized character {character:?} at offset {offset} in transcription {transcription:?}")]
    Segmentation {
        transcription: String,
        character: char,
        offset: usize,
    },
    #[error("no feature vector for segment {segment:?}")]
    UnknownSegment { segment: String },
    #[error("unknown error-pattern label {label:?}")]
    UnknownLabel { label: String },
    #[error("I/O error while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON parse error while {context}: {source}")]
    Json {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl PatternError {
    pub(crate) fn segmentation(transcription: &str, character: char, offset: usize) -> Self {
        Self::Segmentation {
            transcription: transcription.to_string(),
            character,
            offset,
        }
    }

    pub(crate) fn unknown_segment(segment: impl Into<String>) -> Self {
        Self::UnknownSegment {
            segment: segment.into(),
        }
    }

    pub(crate) fn unknown_label(label: impl Into<String>) -> Self {
        Self::UnknownLabel {
            label: label.into(),
        }
    }

    pub(crate) fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }

    pub(crate) fn json(context: &'static str, source: serde_json::Error) -> Self {
        Self::Json { context, source }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
