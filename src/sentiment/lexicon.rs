//! Sentiment lexicon.
//!
//! A [`Lexicon`] holds three kinds of words:
//!
//! - opinion words with a polarity and subjectivity,
//! - modifiers (intensifiers and diminishers) that scale the next opinion word,
//! - negations that flip an opinion word appearing shortly after them.
//!
//! The built-in English table is loaded once per process.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

/// Polarity and subjectivity of a single opinion word.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl LexiconEntry {
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        LexiconEntry {
            polarity,
            subjectivity,
        }
    }
}

// (word, polarity, subjectivity)
const ENGLISH_OPINION_WORDS: &[(&str, f64, f64)] = &[
    // positive
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("brilliant", 0.9, 1.0),
    ("calm", 0.3, 0.75),
    ("clean", 0.37, 0.69),
    ("cool", 0.35, 0.65),
    ("delighted", 0.7, 0.9),
    ("delightful", 1.0, 1.0),
    ("easy", 0.43, 0.83),
    ("elegant", 0.5, 1.0),
    ("enjoy", 0.4, 0.5),
    ("enjoyed", 0.5, 0.6),
    ("excellent", 1.0, 1.0),
    ("excited", 0.375, 0.75),
    ("exciting", 0.3, 0.8),
    ("fantastic", 0.4, 0.9),
    ("favorite", 0.5, 1.0),
    ("favourite", 0.5, 1.0),
    ("fine", 0.42, 0.5),
    ("friendly", 0.375, 0.5),
    ("fun", 0.3, 0.2),
    ("glad", 0.5, 1.0),
    ("good", 0.7, 0.6),
    ("grateful", 0.6, 0.8),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("helpful", 0.5, 0.4),
    ("impressive", 1.0, 1.0),
    ("incredible", 0.9, 0.9),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("lovely", 0.5, 0.75),
    ("loves", 0.5, 0.6),
    ("nice", 0.6, 1.0),
    ("outstanding", 0.5, 0.675),
    ("perfect", 1.0, 1.0),
    ("pleasant", 0.73, 0.97),
    ("pleased", 0.5, 1.0),
    ("positive", 0.23, 0.55),
    ("recommend", 0.4, 0.5),
    ("remarkable", 0.75, 0.75),
    ("satisfied", 0.5, 1.0),
    ("smooth", 0.4, 0.7),
    ("successful", 0.75, 0.95),
    ("superb", 1.0, 1.0),
    ("thanks", 0.2, 0.2),
    ("useful", 0.3, 0.1),
    ("valuable", 0.5, 0.6),
    ("wonderful", 1.0, 1.0),
    // negative
    ("afraid", -0.6, 0.9),
    ("angry", -0.5, 1.0),
    ("annoyed", -0.7, 0.8),
    ("annoying", -0.8, 0.9),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("boring", -1.0, 1.0),
    ("broken", -0.4, 0.4),
    ("buggy", -0.5, 0.6),
    ("confusing", -0.3, 0.7),
    ("difficult", -0.5, 1.0),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("disgusting", -1.0, 1.0),
    ("dreadful", -1.0, 1.0),
    ("dull", -0.3, 0.6),
    ("failed", -0.5, 0.3),
    ("failure", -0.3, 0.3),
    ("frustrated", -0.7, 0.8),
    ("frustrating", -0.4, 0.7),
    ("hate", -0.8, 0.9),
    ("hated", -0.9, 0.7),
    ("horrible", -1.0, 1.0),
    ("lousy", -0.6, 0.9),
    ("mediocre", -0.4, 0.8),
    ("miserable", -1.0, 1.0),
    ("mess", -0.4, 0.5),
    ("nasty", -1.0, 1.0),
    ("painful", -0.7, 0.9),
    ("pathetic", -1.0, 1.0),
    ("poor", -0.4, 0.6),
    ("regret", -0.5, 0.6),
    ("rude", -0.3, 0.7),
    ("sad", -0.5, 1.0),
    ("scary", -0.5, 1.0),
    ("sick", -0.71, 0.86),
    ("slow", -0.3, 0.39),
    ("sorry", -0.5, 1.0),
    ("stupid", -0.8, 1.0),
    ("terrible", -1.0, 1.0),
    ("ugly", -0.7, 1.0),
    ("unfortunately", -0.5, 1.0),
    ("unhappy", -0.6, 0.9),
    ("upset", -0.5, 0.8),
    ("useless", -0.5, 0.2),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.9),
];

// (word, multiplier); > 1.0 intensifies, < 1.0 diminishes
const ENGLISH_MODIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.5),
    ("barely", 0.4),
    ("completely", 1.4),
    ("deeply", 1.3),
    ("especially", 1.2),
    ("extremely", 1.5),
    ("fairly", 0.8),
    ("highly", 1.3),
    ("incredibly", 1.4),
    ("kinda", 0.7),
    ("mildly", 0.6),
    ("quite", 1.1),
    ("rather", 0.9),
    ("really", 1.2),
    ("remarkably", 1.3),
    ("slightly", 0.5),
    ("somewhat", 0.7),
    ("super", 1.3),
    ("totally", 1.3),
    ("truly", 1.3),
    ("utterly", 1.5),
    ("very", 1.3),
];

const ENGLISH_NEGATIONS: &[&str] = &[
    "cannot", "hardly", "neither", "never", "no", "nobody", "none", "nor", "not", "nothing",
    "without",
];

static ENGLISH: LazyLock<Arc<Lexicon>> = LazyLock::new(|| {
    let mut lexicon = Lexicon::new();
    for &(word, polarity, subjectivity) in ENGLISH_OPINION_WORDS {
        lexicon.insert_opinion(word, LexiconEntry::new(polarity, subjectivity));
    }
    for &(word, multiplier) in ENGLISH_MODIFIERS {
        lexicon.insert_modifier(word, multiplier);
    }
    for &word in ENGLISH_NEGATIONS {
        lexicon.insert_negation(word);
    }
    Arc::new(lexicon)
});

/// A word table for lexicon-based sentiment scoring.
///
/// Lookups expect lowercased words with ASCII apostrophes.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    opinions: HashMap<String, LexiconEntry>,
    modifiers: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English lexicon, shared by every scorer in the process.
    pub fn english() -> Arc<Lexicon> {
        Arc::clone(&ENGLISH)
    }

    pub fn insert_opinion<S: Into<String>>(&mut self, word: S, entry: LexiconEntry) {
        self.opinions.insert(word.into(), entry);
    }

    pub fn insert_modifier<S: Into<String>>(&mut self, word: S, multiplier: f64) {
        self.modifiers.insert(word.into(), multiplier);
    }

    pub fn insert_negation<S: Into<String>>(&mut self, word: S) {
        self.negations.insert(word.into());
    }

    /// Look up an opinion word.
    pub fn opinion(&self, word: &str) -> Option<LexiconEntry> {
        self.opinions.get(word).copied()
    }

    /// Look up the multiplier of an intensifier or diminisher.
    pub fn modifier(&self, word: &str) -> Option<f64> {
        self.modifiers.get(word).copied()
    }

    /// Whether the word negates the opinion that follows it.
    ///
    /// Any contraction ending in "n't" counts as a negation.
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word) || word.ends_with("n't")
    }

    /// Number of opinion words.
    pub fn len(&self) -> usize {
        self.opinions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opinions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_lexicon_is_populated() {
        let lexicon = Lexicon::english();

        assert_eq!(lexicon.len(), ENGLISH_OPINION_WORDS.len());
        assert_eq!(lexicon.opinion("good"), Some(LexiconEntry::new(0.7, 0.6)));
        assert_eq!(lexicon.modifier("very"), Some(1.3));
        assert!(lexicon.is_negation("not"));
        assert!(lexicon.opinion("table").is_none());
    }

    #[test]
    fn test_english_lexicon_is_shared() {
        let a = Lexicon::english();
        let b = Lexicon::english();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_entries_are_in_range() {
        for &(word, polarity, subjectivity) in ENGLISH_OPINION_WORDS {
            assert!((-1.0..=1.0).contains(&polarity), "{word}");
            assert!((0.0..=1.0).contains(&subjectivity), "{word}");
        }
    }

    #[test]
    fn test_contracted_negations() {
        let lexicon = Lexicon::new();
        assert!(lexicon.is_negation("don't"));
        assert!(lexicon.is_negation("isn't"));
        assert!(!lexicon.is_negation("it's"));
    }
}
