use std::fmt;

/// One phonemic unit: a base IPA symbol plus any attached diacritics.
///
/// Segments are immutable string tokens; the segmenter guarantees that a
/// diacritic never stands alone as a segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment(String);

impl Segment {
    pub(crate) fn new(token: String) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered sequence of segments, insertion order = pronunciation order.
/// Immutable after segmentation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transcription {
    segments: Vec<Segment>,
}

impl Transcription {
    pub(crate) fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }
}

impl fmt::Display for Transcription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for seg in &self.segments {
            f.write_str(seg.as_str())?;
        }
        Ok(())
    }
}

/// One column of an alignment. A `None` on the target side is an insertion,
/// a `None` on the actual side is a deletion.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentPair {
    pub target: Option<Segment>,
    pub actual: Option<Segment>,
    /// Feature distance between the two segments; `None` when either side is
    /// a gap (the pair is not comparable).
    pub distance: Option<f64>,
}

impl AlignmentPair {
    pub fn is_identity(&self) -> bool {
        match (&self.target, &self.actual) {
            (Some(t), Some(a)) => t == a && self.distance == Some(0.0),
            _ => false,
        }
    }

    pub fn is_insertion(&self) -> bool {
        self.target.is_none() && self.actual.is_some()
    }

    pub fn is_deletion(&self) -> bool {
        self.target.is_some() && self.actual.is_none()
    }

    pub fn is_substitution(&self) -> bool {
        self.target.is_some() && self.actual.is_some() && !self.is_identity()
    }
}

/// Ordered alignment covering both transcriptions end to end: every target
/// and every actual segment appears in exactly one pair.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Alignment {
    pub pairs: Vec<AlignmentPair>,
}

impl Alignment {
    /// Number of target segments covered by the alignment.
    pub fn target_len(&self) -> usize {
        self.pairs.iter().filter(|p| p.target.is_some()).count()
    }

    /// Number of actual segments covered by the alignment.
    pub fn actual_len(&self) -> usize {
        self.pairs.iter().filter(|p| p.actual.is_some()).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AlignmentPair> {
        self.pairs.iter()
    }
}

/// One refined pairing emitted by the resolver: both sides are concrete
/// segments (no gaps) with their feature distance.
#[derive(Debug, Clone, PartialEq)]
pub struct RefinementPair {
    pub target: Segment,
    pub actual: Segment,
    pub distance: f64,
}

/// Ordered refinement pairs restricted to the ambiguous region of an
/// `_other` pattern.
pub type RefinementAlignment = Vec<RefinementPair>;

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(s: &str) -> Segment {
        Segment::new(s.to_string())
    }

    #[test]
    fn alignment_pair_kinds() {
        let identity = AlignmentPair {
            target: Some(seg("k")),
            actual: Some(seg("k")),
            distance: Some(0.0),
        };
        assert!(identity.is_identity());
        assert!(!identity.is_substitution());

        let substitution = AlignmentPair {
            target: Some(seg("t")),
            actual: Some(seg("p")),
            distance: Some(0.2),
        };
        assert!(substitution.is_substitution());

        let insertion = AlignmentPair {
            target: None,
            actual: Some(seg("s")),
            distance: None,
        };
        assert!(insertion.is_insertion());
        assert!(!insertion.is_deletion());

        let deletion = AlignmentPair {
            target: Some(seg("t")),
            actual: None,
            distance: None,
        };
        assert!(deletion.is_deletion());
    }

    #[test]
    fn alignment_side_counts() {
        let alignment = Alignment {
            pairs: vec![
                AlignmentPair {
                    target: Some(seg("k")),
                    actual: Some(seg("k")),
                    distance: Some(0.0),
                },
                AlignmentPair {
                    target: Some(seg("t")),
                    actual: None,
                    distance: None,
                },
                AlignmentPair {
                    target: None,
                    actual: Some(seg("s")),
                    distance: None,
                },
            ],
        };
        assert_eq!(alignment.target_len(), 2);
        assert_eq!(alignment.actual_len(), 2);
    }

    #[test]
    fn transcription_display_concatenates_segments() {
        let t = Transcription::new(vec![seg("k"), seg("æ"), seg("tʰ")]);
        assert_eq!(t.to_string(), "kætʰ");
        assert_eq!(t.len(), 3);
    }
}
