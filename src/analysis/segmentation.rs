use crate::error::PatternError;
use crate::types::{Segment, Transcription};

/// Combining and modifier characters that attach to the preceding base phone.
///
/// Unicode block coverage follows the diacritic inventory observed in clinical
/// Phon exports: combining marks (plus the extended/supplement/symbol blocks),
/// spacing modifier letters, superscripts/subscripts, and a handful of ad-hoc
/// annotation characters.
pub(crate) fn is_diacritic(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}'
            | '\u{1AB0}'..='\u{1AFF}'
            | '\u{1DC0}'..='\u{1DFF}'
            | '\u{20D0}'..='\u{20FF}'
            | '\u{02B0}'..='\u{02FF}'
            | '\u{2070}'..='\u{209F}')
        || matches!(c, 'ᴸ' | 'ᵇ' | ':' | '<' | '←' | '=' | '\'' | '‚' | 'ᵊ')
}

/// Tie bars bind the following base phone into the current segment (affricates
/// and double articulations).
fn is_tie_bar(c: char) -> bool {
    matches!(c, '\u{0361}' | '\u{035C}')
}

fn is_base_phone(c: char) -> bool {
    c.is_alphabetic() && !is_diacritic(c)
}

/// Segment string with all diacritics removed.
pub fn base_form(segment: &str) -> String {
    segment.chars().filter(|&c| !is_diacritic(c)).collect()
}

/// Split an IPA transcription into phonemic segments.
///
/// A segment is one base phone plus any immediately following diacritics; a
/// tie bar additionally pulls the next base phone into the same segment. Any
/// character that is neither a base phone nor a diacritic, or a diacritic
/// with no base to attach to, is a recoverable [`PatternError::Segmentation`].
pub fn segment_transcription(raw: &str) -> Result<Transcription, PatternError> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut join_next = false;

    for (offset, c) in raw.char_indices() {
        if is_base_phone(c) {
            if !current.is_empty() && !join_next {
                segments.push(Segment::new(std::mem::take(&mut current)));
            }
            current.push(c);
            join_next = false;
            continue;
        }
        if is_diacritic(c) {
            if current.is_empty() {
                return Err(PatternError::segmentation(raw, c, offset));
            }
            current.push(c);
            if is_tie_bar(c) {
                join_next = true;
            }
            continue;
        }
        return Err(PatternError::segmentation(raw, c, offset));
    }

    if !current.is_empty() {
        segments.push(Segment::new(current));
    }
    Ok(Transcription::new(segments))
}
