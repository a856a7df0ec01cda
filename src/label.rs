use std::fmt;
use std::str::FromStr;

use crate::error::PatternError;

/// Base category of an error-pattern label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorBase {
    Correct,
    Deletion,
    Epenthesis,
    Substitution,
    Reduction,
    Other,
    Undetermined,
}

impl ErrorBase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Deletion => "deletion",
            Self::Epenthesis => "epenthesis",
            Self::Substitution => "substitution",
            Self::Reduction => "reduction",
            Self::Other => "other",
            Self::Undetermined => "undetermined",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "correct" => Self::Correct,
            "deletion" => Self::Deletion,
            "epenthesis" => Self::Epenthesis,
            "substitution" => Self::Substitution,
            "reduction" => Self::Reduction,
            "other" => Self::Other,
            "undetermined" => Self::Undetermined,
            _ => return None,
        })
    }
}

/// Syllable position of a deleted consonant within the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyllablePosition {
    Initial,
    Medial,
    Final,
}

impl SyllablePosition {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Medial => "medial",
            Self::Final => "final",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "initial" => Self::Initial,
            "medial" => Self::Medial,
            "final" => Self::Final,
            _ => return None,
        })
    }
}

/// Outcome of one cluster member, suffixed as `C{n}pres` / `C{n}sub` /
/// `C{n}del` where `n` is the 1-based consonant index in the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MemberOutcome {
    Present,
    Substituted,
    Deleted,
}

impl MemberOutcome {
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Present => "pres",
            Self::Substituted => "sub",
            Self::Deleted => "del",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "pres" => Self::Present,
            "sub" => Self::Substituted,
            "del" => Self::Deleted,
            _ => return None,
        })
    }
}

/// Categorical error-pattern label.
///
/// String form follows the original label grammar used in published datasets:
/// `substitution-C1pres-C2sub`, `deletion-final`, `epenthesis_other`, ….
/// Member suffixes render in sorted order so labels compare stably as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorLabel {
    base: ErrorBase,
    other: bool,
    position: Option<SyllablePosition>,
    members: Vec<(u8, MemberOutcome)>,
}

impl ErrorLabel {
    pub fn correct() -> Self {
        Self::base(ErrorBase::Correct)
    }

    pub fn undetermined() -> Self {
        Self::base(ErrorBase::Undetermined)
    }

    /// Bare base label with no qualifiers.
    pub fn base(base: ErrorBase) -> Self {
        Self {
            base,
            other: false,
            position: None,
            members: Vec::new(),
        }
    }

    /// `<base>_other` catch-all. The `other` base itself never doubles up.
    pub fn other(base: ErrorBase) -> Self {
        Self {
            base,
            other: base != ErrorBase::Other,
            position: None,
            members: Vec::new(),
        }
    }

    /// Deletion sub-typed by syllable position.
    pub fn deletion_at(position: SyllablePosition) -> Self {
        Self {
            base: ErrorBase::Deletion,
            other: false,
            position: Some(position),
            members: Vec::new(),
        }
    }

    /// Base label with per-cluster-member outcomes (1-based consonant indices).
    pub fn with_members(base: ErrorBase, mut members: Vec<(u8, MemberOutcome)>) -> Self {
        members.sort_by_key(|&(index, outcome)| (index, outcome.suffix()));
        Self {
            base,
            other: false,
            position: None,
            members,
        }
    }

    pub fn kind(&self) -> ErrorBase {
        self.base
    }

    pub fn is_other(&self) -> bool {
        self.other || self.base == ErrorBase::Other
    }

    pub fn members(&self) -> &[(u8, MemberOutcome)] {
        &self.members
    }
}

impl fmt::Display for ErrorLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base.as_str())?;
        if self.other {
            return f.write_str("_other");
        }
        if let Some(position) = self.position {
            write!(f, "-{}", position.as_str())?;
        }
        for &(index, outcome) in &self.members {
            write!(f, "-C{index}{}", outcome.suffix())?;
        }
        Ok(())
    }
}

impl FromStr for ErrorLabel {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (head, qualifiers) = match s.split_once('-') {
            Some((head, rest)) => (head, Some(rest)),
            None => (s, None),
        };

        let (base_str, other) = match head.strip_suffix("_other") {
            Some(base_str) => (base_str, true),
            None => (head, false),
        };
        let base = ErrorBase::parse(base_str).ok_or_else(|| PatternError::unknown_label(s))?;
        if other && qualifiers.is_some() {
            return Err(PatternError::unknown_label(s));
        }

        let mut label = if other {
            Self::other(base)
        } else {
            Self::base(base)
        };
        let Some(qualifiers) = qualifiers else {
            return Ok(label);
        };

        let mut members = Vec::new();
        for qualifier in qualifiers.split('-') {
            if let Some(position) = SyllablePosition::parse(qualifier) {
                if label.position.is_some() {
                    return Err(PatternError::unknown_label(s));
                }
                label.position = Some(position);
                continue;
            }
            let member = qualifier
                .strip_prefix('C')
                .and_then(|rest| {
                    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
                    let index: u8 = digits.parse().ok()?;
                    let outcome = MemberOutcome::parse(&rest[digits.len()..])?;
                    Some((index, outcome))
                })
                .ok_or_else(|| PatternError::unknown_label(s))?;
            members.push(member);
        }
        members.sort_by_key(|&(index, outcome)| (index, outcome.suffix()));
        label.members = members;
        Ok(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_bare_bases() {
        assert_eq!(ErrorLabel::correct().to_string(), "correct");
        assert_eq!(ErrorLabel::base(ErrorBase::Deletion).to_string(), "deletion");
        assert_eq!(ErrorLabel::undetermined().to_string(), "undetermined");
    }

    #[test]
    fn display_other_suffix() {
        assert_eq!(
            ErrorLabel::other(ErrorBase::Substitution).to_string(),
            "substitution_other"
        );
        assert_eq!(
            ErrorLabel::other(ErrorBase::Epenthesis).to_string(),
            "epenthesis_other"
        );
        // The catch-all base never renders as "other_other".
        assert_eq!(ErrorLabel::other(ErrorBase::Other).to_string(), "other");
    }

    #[test]
    fn display_deletion_position() {
        assert_eq!(
            ErrorLabel::deletion_at(SyllablePosition::Final).to_string(),
            "deletion-final"
        );
    }

    #[test]
    fn member_suffixes_sort_by_index() {
        let label = ErrorLabel::with_members(
            ErrorBase::Reduction,
            vec![
                (2, MemberOutcome::Present),
                (1, MemberOutcome::Deleted),
            ],
        );
        assert_eq!(label.to_string(), "reduction-C1del-C2pres");
    }

    #[test]
    fn parse_round_trips() {
        for text in [
            "correct",
            "deletion",
            "deletion-final",
            "epenthesis",
            "epenthesis_other",
            "substitution",
            "substitution-C2sub",
            "substitution_other",
            "substitution-C1pres-C2sub",
            "reduction-C1del-C2pres",
            "reduction_other",
            "other",
            "undetermined",
        ] {
            let label: ErrorLabel = text.parse().expect(text);
            assert_eq!(label.to_string(), text);
        }
    }

    #[test]
    fn parse_rejects_unknown_labels() {
        for text in ["", "fronting", "substitution-C2", "substitution-X1sub", "deletion-final-initial"] {
            assert!(text.parse::<ErrorLabel>().is_err(), "{text:?} should not parse");
        }
    }

    #[test]
    fn is_other_covers_catch_all_base() {
        assert!(ErrorLabel::other(ErrorBase::Substitution).is_other());
        assert!(ErrorLabel::other(ErrorBase::Other).is_other());
        assert!(!ErrorLabel::correct().is_other());
        assert!(!ErrorLabel::base(ErrorBase::Substitution).is_other());
    }
}
