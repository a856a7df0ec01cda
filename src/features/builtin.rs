//! Built-in articulatory feature rows for the common IPA inventory.
//!
//! Value order matches [`super::FEATURE_NAMES`]:
//! syl son cons cont delrel lat nas strid voi sg cg ant cor distr lab hi lo back round tense

use super::FEATURE_COUNT;

pub(super) const SEGMENTS: &[(&str, [i8; FEATURE_COUNT])] = &[
    // Oral stops
    ("p", [-1, -1, 1, -1, -1, -1, -1, -1, -1, -1, -1, 1, -1, 0, 1, -1, -1, -1, -1, 0]),
    ("b", [-1, -1, 1, -1, -1, -1, -1, -1, 1, -1, -1, 1, -1, 0, 1, -1, -1, -1, -1, 0]),
    ("t", [-1, -1, 1, -1, -1, -1, -1, -1, -1, -1, -1, 1, 1, -1, -1, -1, -1, -1, -1, 0]),
    ("d", [-1, -1, 1, -1, -1, -1, -1, -1, 1, -1, -1, 1, 1, -1, -1, -1, -1, -1, -1, 0]),
    ("k", [-1, -1, 1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 0, -1, 1, -1, 1, -1, 0]),
    ("ɡ", [-1, -1, 1, -1, -1, -1, -1, -1, 1, -1, -1, -1, -1, 0, -1, 1, -1, 1, -1, 0]),
    // ASCII g appears in clinical transcriptions interchangeably with ɡ.
    ("g", [-1, -1, 1, -1, -1, -1, -1, -1, 1, -1, -1, -1, -1, 0, -1, 1, -1, 1, -1, 0]),
    ("ʔ", [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 1, -1, -1, 0, -1, -1, -1, -1, -1, 0]),
    // Nasals
    ("m", [-1, 1, 1, -1, -1, -1, 1, -1, 1, -1, -1, 1, -1, 0, 1, -1, -1, -1, -1, 0]),
    ("n", [-1, 1, 1, -1, -1, -1, 1, -1, 1, -1, -1, 1, 1, -1, -1, -1, -1, -1, -1, 0]),
    ("ɲ", [-1, 1, 1, -1, -1, -1, 1, -1, 1, -1, -1, -1, 1, 1, -1, 1, -1, -1, -1, 0]),
    ("ŋ", [-1, 1, 1, -1, -1, -1, 1, -1, 1, -1, -1, -1, -1, 0, -1, 1, -1, 1, -1, 0]),
    // Fricatives
    ("f", [-1, -1, 1, 1, -1, -1, -1, 1, -1, -1, -1, 1, -1, 0, 1, -1, -1, -1, -1, 0]),
    ("v", [-1, -1, 1, 1, -1, -1, -1, 1, 1, -1, -1, 1, -1, 0, 1, -1, -1, -1, -1, 0]),
    ("θ", [-1, -1, 1, 1, -1, -1, -1, -1, -1, -1, -1, 1, 1, 1, -1, -1, -1, -1, -1, 0]),
    ("ð", [-1, -1, 1, 1, -1, -1, -1, -1, 1, -1, -1, 1, 1, 1, -1, -1, -1, -1, -1, 0]),
    ("s", [-1, -1, 1, 1, -1, -1, -1, 1, -1, -1, -1, 1, 1, -1, -1, -1, -1, -1, -1, 0]),
    ("z", [-1, -1, 1, 1, -1, -1, -1, 1, 1, -1, -1, 1, 1, -1, -1, -1, -1, -1, -1, 0]),
    ("ʃ", [-1, -1, 1, 1, -1, -1, -1, 1, -1, -1, -1, -1, 1, 1, -1, 1, -1, -1, -1, 0]),
    ("ʒ", [-1, -1, 1, 1, -1, -1, -1, 1, 1, -1, -1, -1, 1, 1, -1, 1, -1, -1, -1, 0]),
    ("x", [-1, -1, 1, 1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 0, -1, 1, -1, 1, -1, 0]),
    ("h", [-1, -1, -1, 1, -1, -1, -1, -1, -1, 1, -1, -1, -1, 0, -1, -1, -1, -1, -1, 0]),
    // Affricates (tie-bar and plain digraph spellings)
    ("t͡ʃ", [-1, -1, 1, -1, 1, -1, -1, 1, -1, -1, -1, -1, 1, 1, -1, 1, -1, -1, -1, 0]),
    ("d͡ʒ", [-1, -1, 1, -1, 1, -1, -1, 1, 1, -1, -1, -1, 1, 1, -1, 1, -1, -1, -1, 0]),
    ("tʃ", [-1, -1, 1, -1, 1, -1, -1, 1, -1, -1, -1, -1, 1, 1, -1, 1, -1, -1, -1, 0]),
    ("dʒ", [-1, -1, 1, -1, 1, -1, -1, 1, 1, -1, -1, -1, 1, 1, -1, 1, -1, -1, -1, 0]),
    // Liquids and glides
    ("l", [-1, 1, 1, 1, -1, 1, -1, -1, 1, -1, -1, 1, 1, -1, -1, -1, -1, -1, -1, 0]),
    ("r", [-1, 1, 1, 1, -1, -1, -1, -1, 1, -1, -1, 1, 1, -1, -1, -1, -1, -1, -1, 0]),
    ("ɹ", [-1, 1, 1, 1, -1, -1, -1, -1, 1, -1, -1, 1, 1, -1, -1, -1, -1, -1, -1, 0]),
    ("j", [-1, 1, -1, 1, -1, -1, -1, -1, 1, -1, -1, -1, -1, 0, -1, 1, -1, -1, -1, 1]),
    ("w", [-1, 1, -1, 1, -1, -1, -1, -1, 1, -1, -1, -1, -1, 0, 1, 1, -1, 1, 1, 1]),
    // Vowels
    ("i", [1, 1, -1, 1, -1, -1, -1, -1, 1, -1, -1, -1, -1, 0, -1, 1, -1, -1, -1, 1]),
    ("ɪ", [1, 1, -1, 1, -1, -1, -1, -1, 1, -1, -1, -1, -1, 0, -1, 1, -1, -1, -1, -1]),
    ("e", [1, 1, -1, 1, -1, -1, -1, -1, 1, -1, -1, -1, -1, 0, -1, -1, -1, -1, -1, 1]),
    ("ɛ", [1, 1, -1, 1, -1, -1, -1, -1, 1, -1, -1, -1, -1, 0, -1, -1, -1, -1, -1, -1]),
    ("æ", [1, 1, -1, 1, -1, -1, -1, -1, 1, -1, -1, -1, -1, 0, -1, -1, 1, -1, -1, -1]),
    ("a", [1, 1, -1, 1, -1, -1, -1, -1, 1, -1, -1, -1, -1, 0, -1, -1, 1, -1, -1, 0]),
    ("ɑ", [1, 1, -1, 1, -1, -1, -1, -1, 1, -1, -1, -1, -1, 0, -1, -1, 1, 1, -1, 0]),
    ("ɔ", [1, 1, -1, 1, -1, -1, -1, -1, 1, -1, -1, -1, -1, 0, -1, -1, -1, 1, 1, -1]),
    ("o", [1, 1, -1, 1, -1, -1, -1, -1, 1, -1, -1, -1, -1, 0, -1, -1, -1, 1, 1, 1]),
    ("ʊ", [1, 1, -1, 1, -1, -1, -1, -1, 1, -1, -1, -1, -1, 0, -1, 1, -1, 1, 1, -1]),
    ("u", [1, 1, -1, 1, -1, -1, -1, -1, 1, -1, -1, -1, -1, 0, -1, 1, -1, 1, 1, 1]),
    ("ʌ", [1, 1, -1, 1, -1, -1, -1, -1, 1, -1, -1, -1, -1, 0, -1, -1, -1, 1, -1, -1]),
    ("ə", [1, 1, -1, 1, -1, -1, -1, -1, 1, -1, -1, -1, -1, 0, -1, -1, -1, 0, -1, -1]),
];
