use crate::error::PatternError;
use crate::features::{FeatureProvider, FeatureVector};
use crate::types::{Alignment, AlignmentPair, Segment, Transcription};

/// Tolerance for comparing accumulated float costs during traceback.
const COST_EPS: f64 = 1e-9;

/// Resolve every segment of a transcription to its feature vector, failing on
/// the first segment the provider cannot score.
pub(crate) fn resolve_features(
    transcription: &Transcription,
    features: &dyn FeatureProvider,
) -> Result<Vec<FeatureVector>, PatternError> {
    transcription
        .iter()
        .map(|seg| {
            features
                .features_of(seg.as_str())
                .ok_or_else(|| PatternError::unknown_segment(seg.as_str()))
        })
        .collect()
}

/// Minimum-cost alignment of two segment sequences.
///
/// Standard edit-distance dynamic programming over an explicit cost matrix:
/// substitution costs the pair's feature distance, insertion and deletion cost
/// the fixed `indel_penalty`. On cost ties the traceback prefers the diagonal
/// so untouched word edges align positionally.
pub fn align(
    target: &Transcription,
    actual: &Transcription,
    features: &dyn FeatureProvider,
    indel_penalty: f64,
) -> Result<Alignment, PatternError> {
    let t_fts = resolve_features(target, features)?;
    let a_fts = resolve_features(actual, features)?;
    Ok(align_with_features(
        target.segments(),
        &t_fts,
        actual.segments(),
        &a_fts,
        features,
        indel_penalty,
    ))
}

pub(crate) fn align_with_features(
    target: &[Segment],
    target_features: &[FeatureVector],
    actual: &[Segment],
    actual_features: &[FeatureVector],
    features: &dyn FeatureProvider,
    indel_penalty: f64,
) -> Alignment {
    let n = target.len();
    let m = actual.len();

    let mut cost = vec![vec![0.0f64; m + 1]; n + 1];
    for i in 1..=n {
        cost[i][0] = cost[i - 1][0] + indel_penalty;
    }
    for j in 1..=m {
        cost[0][j] = cost[0][j - 1] + indel_penalty;
    }
    for i in 1..=n {
        for j in 1..=m {
            let substitute =
                cost[i - 1][j - 1] + features.distance(&target_features[i - 1], &actual_features[j - 1]);
            let delete = cost[i - 1][j] + indel_penalty;
            let insert = cost[i][j - 1] + indel_penalty;
            cost[i][j] = substitute.min(delete).min(insert);
        }
    }

    let mut pairs = Vec::with_capacity(n.max(m));
    let mut i = n;
    let mut j = m;
    while i > 0 || j > 0 {
        if i > 0 && j > 0 {
            let distance = features.distance(&target_features[i - 1], &actual_features[j - 1]);
            if (cost[i][j] - (cost[i - 1][j - 1] + distance)).abs() < COST_EPS {
                pairs.push(AlignmentPair {
                    target: Some(target[i - 1].clone()),
                    actual: Some(actual[j - 1].clone()),
                    distance: Some(distance),
                });
                i -= 1;
                j -= 1;
                continue;
            }
        }
        if i > 0 && (cost[i][j] - (cost[i - 1][j] + indel_penalty)).abs() < COST_EPS {
            pairs.push(AlignmentPair {
                target: Some(target[i - 1].clone()),
                actual: None,
                distance: None,
            });
            i -= 1;
            continue;
        }
        debug_assert!(j > 0, "traceback must consume at least one side");
        pairs.push(AlignmentPair {
            target: None,
            actual: Some(actual[j - 1].clone()),
            distance: None,
        });
        j -= 1;
    }
    pairs.reverse();
    Alignment { pairs }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::segmentation::segment_transcription;
    use crate::config::AnalyzerConfig;
    use crate::features::FeatureTable;

    fn aligned(target: &str, actual: &str) -> Alignment {
        let table = FeatureTable::builtin();
        let t = segment_transcription(target).unwrap();
        let a = segment_transcription(actual).unwrap();
        align(&t, &a, &table, AnalyzerConfig::DEFAULT_INDEL_PENALTY).unwrap()
    }

    fn assert_complete(alignment: &Alignment, target: &str, actual: &str) {
        let t_len = segment_transcription(target).unwrap().len();
        let a_len = segment_transcription(actual).unwrap().len();
        assert_eq!(alignment.target_len(), t_len, "target coverage for {target}/{actual}");
        assert_eq!(alignment.actual_len(), a_len, "actual coverage for {target}/{actual}");
    }

    #[test]
    fn identical_transcriptions_align_as_identities() {
        let alignment = aligned("kæt", "kæt");
        assert_eq!(alignment.pairs.len(), 3);
        assert!(alignment.iter().all(AlignmentPair::is_identity));
    }

    #[test]
    fn empty_actual_is_all_deletions() {
        let alignment = aligned("st", "");
        assert_eq!(alignment.pairs.len(), 2);
        assert!(alignment.iter().all(AlignmentPair::is_deletion));
    }

    #[test]
    fn empty_target_is_all_insertions() {
        let alignment = aligned("", "st");
        assert_eq!(alignment.pairs.len(), 2);
        assert!(alignment.iter().all(AlignmentPair::is_insertion));
    }

    #[test]
    fn inserted_segment_becomes_a_gap_pair() {
        let alignment = aligned("kæt", "kæst");
        let insertions: Vec<_> = alignment.iter().filter(|p| p.is_insertion()).collect();
        assert_eq!(insertions.len(), 1);
        assert_eq!(insertions[0].actual.as_ref().unwrap().as_str(), "s");
        assert_eq!(alignment.iter().filter(|p| p.is_identity()).count(), 3);
        assert_complete(&alignment, "kæt", "kæst");
    }

    #[test]
    fn dropped_final_consonant_becomes_a_deletion() {
        let alignment = aligned("kæt", "kæ");
        let deletions: Vec<_> = alignment.iter().filter(|p| p.is_deletion()).collect();
        assert_eq!(deletions.len(), 1);
        assert_eq!(deletions[0].target.as_ref().unwrap().as_str(), "t");
        assert_complete(&alignment, "kæt", "kæ");
    }

    #[test]
    fn equal_length_mismatch_aligns_positionally() {
        let alignment = aligned("kæt", "kæp");
        assert_eq!(alignment.pairs.len(), 3);
        let last = &alignment.pairs[2];
        assert_eq!(last.target.as_ref().unwrap().as_str(), "t");
        assert_eq!(last.actual.as_ref().unwrap().as_str(), "p");
        assert!(last.distance.unwrap() > 0.0);
    }

    #[test]
    fn tie_break_keeps_suffix_on_the_diagonal() {
        // Deleting either "t" costs the same; the diagonal preference pins the
        // surviving segment to the word edge.
        let alignment = aligned("tt", "t");
        assert!(alignment.pairs[0].is_deletion());
        assert!(alignment.pairs[1].is_identity());
    }

    #[test]
    fn dissimilar_pair_prefers_gaps_over_substitution() {
        // k vs æ is more dissimilar than a deletion plus an insertion, so the
        // aligner should not force the substitution.
        let table = FeatureTable::builtin();
        let k = table.features_of("k").unwrap();
        let ae = table.features_of("æ").unwrap();
        assert!(k.distance(&ae) > 2.0 * AnalyzerConfig::DEFAULT_INDEL_PENALTY);

        let alignment = aligned("k", "æ");
        assert_eq!(alignment.iter().filter(|p| p.is_deletion()).count(), 1);
        assert_eq!(alignment.iter().filter(|p| p.is_insertion()).count(), 1);
    }

    #[test]
    fn coverage_holds_across_length_mismatches() {
        for (target, actual) in [
            ("plænt", "plɪmp"),
            ("st", "sət"),
            ("kæt", "æ"),
            ("spɹɪŋ", "pɪŋ"),
        ] {
            let alignment = aligned(target, actual);
            assert_complete(&alignment, target, actual);
        }
    }
}
