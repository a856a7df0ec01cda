use std::ops::Range;

use crate::label::{ErrorBase, ErrorLabel, MemberOutcome, SyllablePosition};
use crate::types::{Alignment, AlignmentPair};

/// Everything the decision procedure looks at: the alignment plus the
/// syllabicity of each target segment (for consonant-cluster structure).
pub struct ClassifierInput<'a> {
    pub alignment: &'a Alignment,
    pub target_syllabic: &'a [bool],
    /// A lone substitution at or above this feature distance defers to the
    /// resolver as `substitution_other`.
    pub clear_substitution_threshold: f64,
}

type RuleFn = fn(&ClassifierInput) -> Option<ErrorLabel>;

struct Rule {
    name: &'static str,
    apply: RuleFn,
}

/// Decision procedure as an explicit priority-ordered rule list; the first
/// rule to produce a label wins.
const RULES: [Rule; 7] = [
    Rule { name: "correct", apply: rule_correct },
    Rule { name: "whole_deletion", apply: rule_whole_deletion },
    Rule { name: "epenthesis", apply: rule_epenthesis },
    Rule { name: "singleton_deletion", apply: rule_singleton_deletion },
    Rule { name: "cluster_errors", apply: rule_cluster_errors },
    Rule { name: "single_substitution", apply: rule_single_substitution },
    Rule { name: "fallback_other", apply: rule_fallback_other },
];

/// Label one aligned transcription pair. Pure function of its input.
pub fn classify(input: &ClassifierInput) -> ErrorLabel {
    for rule in &RULES {
        if let Some(label) = (rule.apply)(input) {
            tracing::debug!(rule = rule.name, label = %label, "classifier rule matched");
            return label;
        }
    }
    // The fallback rule always produces a label.
    unreachable!("fallback_other did not fire")
}

fn rule_correct(input: &ClassifierInput) -> Option<ErrorLabel> {
    input
        .alignment
        .iter()
        .all(AlignmentPair::is_identity)
        .then(ErrorLabel::correct)
}

fn rule_whole_deletion(input: &ClassifierInput) -> Option<ErrorLabel> {
    (!input.alignment.pairs.is_empty() && input.alignment.iter().all(AlignmentPair::is_deletion))
        .then(|| ErrorLabel::base(ErrorBase::Deletion))
}

fn rule_epenthesis(input: &ClassifierInput) -> Option<ErrorLabel> {
    let mut insertions = 0usize;
    for pair in input.alignment.iter() {
        if pair.is_insertion() {
            insertions += 1;
        } else if !pair.is_identity() {
            return None;
        }
    }
    (insertions == 1).then(|| ErrorLabel::base(ErrorBase::Epenthesis))
}

fn rule_singleton_deletion(input: &ClassifierInput) -> Option<ErrorLabel> {
    let mut deleted_index = None;
    for (pair, target_index) in with_target_indices(input.alignment) {
        if pair.is_deletion() {
            if deleted_index.is_some() {
                return None;
            }
            deleted_index = target_index;
        } else if !pair.is_identity() {
            return None;
        }
    }

    let index = deleted_index?;
    if input.target_syllabic.get(index).copied().unwrap_or(false) {
        // Vowel deletions fall through to the catch-all.
        return None;
    }
    // Cluster members are the cluster rule's concern.
    if cluster_of(&target_clusters(input.target_syllabic), index).is_some() {
        return None;
    }

    let position = if index == 0 {
        SyllablePosition::Initial
    } else if index + 1 == input.target_syllabic.len() {
        SyllablePosition::Final
    } else {
        SyllablePosition::Medial
    };
    Some(ErrorLabel::deletion_at(position))
}

fn rule_cluster_errors(input: &ClassifierInput) -> Option<ErrorLabel> {
    let clusters = target_clusters(input.target_syllabic);
    let mut affected_cluster: Option<Range<usize>> = None;
    let mut non_identity = 0usize;
    let mut any_deletion = false;

    for (pair, target_index) in with_target_indices(input.alignment) {
        if pair.is_identity() {
            continue;
        }
        non_identity += 1;
        // Insertions carry no target position, so they cannot be attributed
        // to a cluster member.
        let index = target_index?;
        let cluster = cluster_of(&clusters, index)?.clone();
        match &affected_cluster {
            Some(current) if *current != cluster => return None,
            _ => affected_cluster = Some(cluster),
        }
        any_deletion |= pair.is_deletion();
    }

    let cluster = affected_cluster?;
    if non_identity < 2 && !any_deletion {
        return None;
    }

    let mut members = Vec::with_capacity(cluster.len());
    for (pair, target_index) in with_target_indices(input.alignment) {
        let Some(index) = target_index else { continue };
        if !cluster.contains(&index) {
            continue;
        }
        let outcome = if pair.is_identity() {
            MemberOutcome::Present
        } else if pair.is_deletion() {
            MemberOutcome::Deleted
        } else {
            MemberOutcome::Substituted
        };
        members.push((consonant_number(input.target_syllabic, index), outcome));
    }

    let base = if any_deletion {
        ErrorBase::Reduction
    } else {
        ErrorBase::Substitution
    };
    Some(ErrorLabel::with_members(base, members))
}

fn rule_single_substitution(input: &ClassifierInput) -> Option<ErrorLabel> {
    let mut substitution = None;
    for (pair, target_index) in with_target_indices(input.alignment) {
        if pair.is_substitution() {
            if substitution.is_some() {
                return None;
            }
            substitution = Some((target_index?, pair.distance?));
        } else if !pair.is_identity() {
            return None;
        }
    }

    let (index, distance) = substitution?;
    if input.target_syllabic.get(index).copied().unwrap_or(false) {
        // Vowel substitution carries no consonant sub-type.
        return Some(ErrorLabel::base(ErrorBase::Substitution));
    }
    if distance >= input.clear_substitution_threshold {
        return Some(ErrorLabel::other(ErrorBase::Substitution));
    }
    Some(ErrorLabel::with_members(
        ErrorBase::Substitution,
        vec![(consonant_number(input.target_syllabic, index), MemberOutcome::Substituted)],
    ))
}

fn rule_fallback_other(input: &ClassifierInput) -> Option<ErrorLabel> {
    let mut insertions = 0usize;
    let mut deletions = 0usize;
    let mut substitutions = 0usize;
    for pair in input.alignment.iter() {
        if pair.is_insertion() {
            insertions += 1;
        } else if pair.is_deletion() {
            deletions += 1;
        } else if pair.is_substitution() {
            substitutions += 1;
        }
    }

    let base = if insertions > deletions && insertions > substitutions {
        ErrorBase::Epenthesis
    } else if deletions > insertions && deletions > substitutions {
        ErrorBase::Reduction
    } else if substitutions > insertions && substitutions > deletions {
        ErrorBase::Substitution
    } else {
        ErrorBase::Other
    };
    Some(ErrorLabel::other(base))
}

/// Pairs annotated with the index of their target-side segment.
fn with_target_indices(
    alignment: &Alignment,
) -> impl Iterator<Item = (&AlignmentPair, Option<usize>)> {
    let mut next_index = 0usize;
    alignment.iter().map(move |pair| {
        let index = pair.target.is_some().then(|| {
            let index = next_index;
            next_index += 1;
            index
        });
        (pair, index)
    })
}

/// Maximal runs of two or more adjacent consonants in the target.
fn target_clusters(target_syllabic: &[bool]) -> Vec<Range<usize>> {
    let mut clusters = Vec::new();
    let mut start = None;
    for (i, &syllabic) in target_syllabic.iter().enumerate() {
        if !syllabic {
            start.get_or_insert(i);
            continue;
        }
        if let Some(s) = start.take() {
            if i - s >= 2 {
                clusters.push(s..i);
            }
        }
    }
    if let Some(s) = start {
        if target_syllabic.len() - s >= 2 {
            clusters.push(s..target_syllabic.len());
        }
    }
    clusters
}

fn cluster_of(clusters: &[Range<usize>], index: usize) -> Option<&Range<usize>> {
    clusters.iter().find(|cluster| cluster.contains(&index))
}

/// 1-based index of a target segment among the target's consonants.
fn consonant_number(target_syllabic: &[bool], index: usize) -> u8 {
    target_syllabic[..=index]
        .iter()
        .filter(|&&syllabic| !syllabic)
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::alignment::align;
    use crate::analysis::segmentation::segment_transcription;
    use crate::config::AnalyzerConfig;
    use crate::features::{FeatureProvider, FeatureTable};

    fn label_for(target: &str, actual: &str) -> String {
        let table = FeatureTable::builtin();
        let config = AnalyzerConfig::default();
        let t = segment_transcription(target).unwrap();
        let a = segment_transcription(actual).unwrap();
        let alignment = align(&t, &a, &table, config.indel_penalty).unwrap();
        let target_syllabic: Vec<bool> = t
            .iter()
            .map(|seg| table.features_of(seg.as_str()).unwrap().is_syllabic())
            .collect();
        classify(&ClassifierInput {
            alignment: &alignment,
            target_syllabic: &target_syllabic,
            clear_substitution_threshold: config.clear_substitution_threshold,
        })
        .to_string()
    }

    #[test]
    fn identity_is_correct() {
        assert_eq!(label_for("kæt", "kæt"), "correct");
        assert_eq!(label_for("spɹɪŋ", "spɹɪŋ"), "correct");
    }

    #[test]
    fn single_insertion_is_epenthesis() {
        assert_eq!(label_for("kæt", "kæst"), "epenthesis");
        assert_eq!(label_for("st", "sət"), "epenthesis");
    }

    #[test]
    fn single_consonant_deletion_reports_position() {
        assert_eq!(label_for("kæt", "kæ"), "deletion-final");
        assert_eq!(label_for("kæt", "æt"), "deletion-initial");
        assert_eq!(label_for("kætə", "kæə"), "deletion-medial");
    }

    #[test]
    fn final_consonant_substitution_is_c2_sub() {
        assert_eq!(label_for("kæt", "kæp"), "substitution-C2sub");
    }

    #[test]
    fn vowel_substitution_has_no_member_subtype() {
        assert_eq!(label_for("kæt", "kɪt"), "substitution");
    }

    #[test]
    fn cluster_member_deletion_is_reduction() {
        assert_eq!(label_for("st", "t"), "reduction-C1del-C2pres");
        assert_eq!(label_for("st", "s"), "reduction-C1pres-C2del");
    }

    #[test]
    fn double_cluster_substitution_names_both_members() {
        // f and b replace both members of the cluster.
        assert_eq!(label_for("sp", "fb"), "substitution-C1sub-C2sub");
    }

    #[test]
    fn single_cluster_substitution_names_one_member() {
        assert_eq!(label_for("pl", "bl"), "substitution-C1sub");
    }

    #[test]
    fn empty_actual_side_is_plain_deletion() {
        let table = FeatureTable::builtin();
        let config = AnalyzerConfig::default();
        let t = segment_transcription("st").unwrap();
        let a = segment_transcription("").unwrap();
        let alignment = align(&t, &a, &table, config.indel_penalty).unwrap();
        let target_syllabic = vec![false, false];
        let label = classify(&ClassifierInput {
            alignment: &alignment,
            target_syllabic: &target_syllabic,
            clear_substitution_threshold: config.clear_substitution_threshold,
        });
        assert_eq!(label.to_string(), "deletion");
    }

    #[test]
    fn mixed_errors_fall_back_to_other() {
        // Three substitutions spanning vowel and cluster defer to the resolver.
        assert_eq!(label_for("plænt", "plɪmp"), "substitution_other");
    }

    #[test]
    fn target_cluster_detection() {
        // k æ t: no cluster.
        assert!(target_clusters(&[false, true, false]).is_empty());
        // s t ɑ: one initial cluster.
        assert_eq!(target_clusters(&[false, false, true]), vec![0..2]);
        // p l æ n t: clusters at both edges.
        assert_eq!(
            target_clusters(&[false, false, true, false, false]),
            vec![0..2, 3..5]
        );
    }

    #[test]
    fn consonant_numbering_skips_vowels() {
        let syllabic = [false, true, false];
        assert_eq!(consonant_number(&syllabic, 0), 1);
        assert_eq!(consonant_number(&syllabic, 2), 2);
    }
}
