//! Lexicon-averaging sentiment scorer.
//!
//! Each opinion word found in the text contributes one assessment. A modifier
//! directly before an opinion word scales it, and a negation up to
//! [`NEGATION_WINDOW`] tokens before it flips and halves its polarity. The
//! text's polarity and subjectivity are the means over all assessments.

use std::sync::Arc;

use super::lexicon::{Lexicon, LexiconEntry};
use super::{Scorer, Sentiment};
use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token_filter::{ApostropheFilter, LowercaseFilter};
use crate::analysis::tokenizer::RegexTokenizer;
use crate::error::Result;

/// How many tokens a negation reaches forward.
pub const NEGATION_WINDOW: usize = 3;

/// Polarity factor applied to a negated opinion word.
pub const NEGATION_FACTOR: f64 = -0.5;

/// The built-in lexicon scorer.
///
/// # Examples
///
/// ```
/// use sentix::sentiment::{PatternScorer, Scorer};
///
/// let scorer = PatternScorer::new().unwrap();
/// let sentiment = scorer.score("What a wonderful day").unwrap();
/// assert!(sentiment.polarity > 0.5);
/// ```
#[derive(Clone, Debug)]
pub struct PatternScorer {
    analyzer: PipelineAnalyzer,
    lexicon: Arc<Lexicon>,
}

impl PatternScorer {
    /// Create a scorer backed by the built-in English lexicon.
    pub fn new() -> Result<Self> {
        Self::with_lexicon(Lexicon::english())
    }

    /// Create a scorer backed by a custom lexicon.
    pub fn with_lexicon(lexicon: Arc<Lexicon>) -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::words_with_contractions()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(ApostropheFilter::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("sentiment");

        Ok(PatternScorer { analyzer, lexicon })
    }

    /// Get the lexicon used by this scorer.
    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    fn assess(&self, words: &[String]) -> Vec<LexiconEntry> {
        let mut assessments = Vec::new();
        let mut multiplier = 1.0;
        // tokens since the last negation, if one is still in reach
        let mut negation_distance: Option<usize> = None;

        for word in words {
            negation_distance = negation_distance
                .map(|distance| distance + 1)
                .filter(|&distance| distance <= NEGATION_WINDOW);

            if self.lexicon.is_negation(word) {
                negation_distance = Some(0);
                multiplier = 1.0;
            } else if let Some(factor) = self.lexicon.modifier(word) {
                multiplier *= factor;
            } else if let Some(entry) = self.lexicon.opinion(word) {
                let mut polarity = entry.polarity * multiplier;
                if negation_distance.take().is_some() {
                    polarity *= NEGATION_FACTOR;
                }
                assessments.push(LexiconEntry::new(
                    polarity,
                    entry.subjectivity * multiplier,
                ));
                multiplier = 1.0;
            } else {
                multiplier = 1.0;
            }
        }

        assessments
    }
}

impl Scorer for PatternScorer {
    fn score(&self, text: &str) -> Result<Sentiment> {
        let words: Vec<String> = self.analyzer.analyze(text)?.map(|t| t.text).collect();
        let assessments = self.assess(&words);

        if assessments.is_empty() {
            return Ok(Sentiment::neutral());
        }

        let count = assessments.len() as f64;
        let polarity = assessments.iter().map(|a| a.polarity).sum::<f64>() / count;
        let subjectivity = assessments.iter().map(|a| a.subjectivity).sum::<f64>() / count;

        Ok(Sentiment::new(
            polarity.clamp(-1.0, 1.0),
            subjectivity.clamp(0.0, 1.0),
        ))
    }

    fn name(&self) -> &'static str {
        "pattern"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> PatternScorer {
        PatternScorer::new().unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_text_without_opinions_is_neutral() {
        let sentiment = scorer()
            .score("The table is sitting in the middle of the room.")
            .unwrap();

        assert_eq!(sentiment, Sentiment::neutral());
    }

    #[test]
    fn test_single_opinion_word() {
        let sentiment = scorer().score("This is good").unwrap();

        assert!(approx(sentiment.polarity, 0.7));
        assert!(approx(sentiment.subjectivity, 0.6));
    }

    #[test]
    fn test_scores_are_averaged() {
        // good (0.7, 0.6) and bad (-0.7, 0.67)
        let sentiment = scorer().score("good food, bad service").unwrap();

        assert!(approx(sentiment.polarity, 0.0));
        assert!(approx(sentiment.subjectivity, 0.635));
    }

    #[test]
    fn test_intensifier_scales_next_word() {
        let sentiment = scorer().score("very good").unwrap();

        assert!(approx(sentiment.polarity, 0.91));
        assert!(approx(sentiment.subjectivity, 0.78));
    }

    #[test]
    fn test_intensifier_only_reaches_next_word() {
        let sentiment = scorer().score("very nice good").unwrap();

        // nice is intensified (0.78 polarity), good is not (0.7)
        assert!(approx(sentiment.polarity, (0.6 * 1.3 + 0.7) / 2.0));
    }

    #[test]
    fn test_diminisher() {
        let sentiment = scorer().score("slightly bad").unwrap();
        assert!(approx(sentiment.polarity, -0.35));
    }

    #[test]
    fn test_negation_flips_and_halves() {
        let sentiment = scorer().score("This is not good").unwrap();
        assert!(approx(sentiment.polarity, -0.35));

        let sentiment = scorer().score("It wasn't bad at all").unwrap();
        assert!(approx(sentiment.polarity, 0.35));
    }

    #[test]
    fn test_typographic_contraction_negates() {
        let sentiment = scorer().score("I don\u{2019}t love it").unwrap();
        assert!(approx(sentiment.polarity, -0.25));
    }

    #[test]
    fn test_negation_window() {
        // third token after "not" is still in reach
        let negated = scorer().score("not at all good").unwrap();
        assert!(approx(negated.polarity, -0.35));

        // fourth token after "not" is out of reach
        let plain = scorer().score("not in any way good").unwrap();
        assert!(approx(plain.polarity, 0.7));
    }

    #[test]
    fn test_negation_applies_once() {
        let sentiment = scorer().score("not good good").unwrap();
        assert!(approx(sentiment.polarity, (-0.35 + 0.7) / 2.0));
    }

    #[test]
    fn test_results_are_clamped() {
        let sentiment = scorer().score("absolutely utterly excellent").unwrap();

        assert_eq!(sentiment.polarity, 1.0);
        assert_eq!(sentiment.subjectivity, 1.0);
    }

    #[test]
    fn test_custom_lexicon() {
        let mut lexicon = Lexicon::new();
        lexicon.insert_opinion("rad", LexiconEntry::new(0.9, 0.4));
        let scorer = PatternScorer::with_lexicon(Arc::new(lexicon)).unwrap();

        let sentiment = scorer.score("Totally RAD").unwrap();
        assert!(approx(sentiment.polarity, 0.9));
    }

    #[test]
    fn test_deterministic() {
        let text = "I absolutely love this project! It's brilliant.";
        assert_eq!(scorer().score(text).unwrap(), scorer().score(text).unwrap());
    }
}
