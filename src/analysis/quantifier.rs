use crate::config::QuantifierWeights;
use crate::error::PatternError;
use crate::label::{ErrorBase, ErrorLabel, MemberOutcome};

/// Severity score for one error-pattern label.
///
/// Whole-word categories read straight from the weight table; cluster labels
/// allocate the score across members (a present member contributes
/// `correct_segment / n`, a substituted one `substitution_segment / n`, a
/// deleted one nothing). A label outside the produced vocabulary is an
/// [`PatternError::UnknownLabel`], never a silent zero.
pub fn quantify(label: &ErrorLabel, weights: &QuantifierWeights) -> Result<f64, PatternError> {
    let score = match label.kind() {
        ErrorBase::Correct if !label.is_other() && label.members().is_empty() => {
            weights.full_correct
        }
        ErrorBase::Undetermined if !label.is_other() && label.members().is_empty() => 0.0,
        ErrorBase::Other => 0.0,
        ErrorBase::Deletion if !label.is_other() && label.members().is_empty() => {
            weights.full_deletion
        }
        ErrorBase::Substitution if label.is_other() => weights.full_substitution,
        ErrorBase::Epenthesis if label.is_other() => {
            weights.full_correct + weights.epenthesis_penalty
        }
        ErrorBase::Reduction if label.is_other() => 0.0,
        base @ (ErrorBase::Substitution | ErrorBase::Epenthesis | ErrorBase::Reduction) => {
            per_member_score(base, label, weights)
        }
        _ => return Err(PatternError::unknown_label(label.to_string())),
    };
    Ok(score)
}

fn per_member_score(base: ErrorBase, label: &ErrorLabel, weights: &QuantifierWeights) -> f64 {
    if label.members().is_empty() {
        return match base {
            ErrorBase::Substitution => weights.full_substitution,
            ErrorBase::Epenthesis => weights.full_correct + weights.epenthesis_penalty,
            _ => weights.full_deletion,
        };
    }

    let mut score = if base == ErrorBase::Epenthesis {
        weights.epenthesis_penalty
    } else {
        0.0
    };
    let n = label.members().len() as f64;
    for &(_, outcome) in label.members() {
        score += match outcome {
            MemberOutcome::Present => weights.correct_segment / n,
            MemberOutcome::Substituted => weights.substitution_segment / n,
            MemberOutcome::Deleted => 0.0,
        };
    }
    score
}
