//! Stop-word voting language detector.

use std::sync::Arc;

use super::profile::{LanguageProfile, builtin_profiles};
use super::script::dominant_script;
use super::LanguageDetector;
use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token_filter::{ApostropheFilter, LowercaseFilter};
use crate::analysis::tokenizer::UnicodeWordTokenizer;
use crate::error::{Result, SentixError};

/// Fewest stop words a Latin-script text needs before its language is reported.
pub const MIN_STOP_WORD_HITS: usize = 2;

/// Smallest share of the words that must be stop words of the winning language.
pub const MIN_STOP_WORD_RATIO: f64 = 0.2;

/// Detects the language of a text.
///
/// Text written mostly in a non-Latin script is identified by its script.
/// Latin-script text is identified by counting stop words of each profile;
/// the language with the unique highest count wins, provided it has at least
/// [`MIN_STOP_WORD_HITS`] hits covering [`MIN_STOP_WORD_RATIO`] of the words.
/// Anything weaker, or a tie at the top, is reported as undetectable.
///
/// # Examples
///
/// ```
/// use sentix::language::{LanguageDetector, StopwordDetector};
///
/// let detector = StopwordDetector::new();
/// assert_eq!(detector.detect("Das ist ein sehr schönes Haus").unwrap(), "de");
/// ```
#[derive(Clone, Debug)]
pub struct StopwordDetector {
    analyzer: PipelineAnalyzer,
    profiles: Arc<[LanguageProfile]>,
}

impl StopwordDetector {
    /// Create a detector over the built-in profiles.
    pub fn new() -> Self {
        Self::with_profiles(builtin_profiles().to_vec())
    }

    /// Create a detector over custom profiles.
    ///
    /// Profile order only matters for reporting; ties are never resolved by
    /// order.
    pub fn with_profiles(profiles: Vec<LanguageProfile>) -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(ApostropheFilter::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("language");

        StopwordDetector {
            analyzer,
            profiles: profiles.into(),
        }
    }

    /// Stop-word hits per profile, in profile order.
    pub fn votes(&self, text: &str) -> Result<Vec<(&str, usize)>> {
        let words = self.words(text)?;
        Ok(self.tally(&words))
    }

    fn words(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyzer.analyze(text)?.map(|t| t.text).collect())
    }

    fn tally(&self, words: &[String]) -> Vec<(&str, usize)> {
        self.profiles
            .iter()
            .map(|profile| {
                let hits = words.iter().filter(|w| profile.contains(w)).count();
                (profile.code(), hits)
            })
            .collect()
    }
}

impl Default for StopwordDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector for StopwordDetector {
    fn detect(&self, text: &str) -> Result<String> {
        let script = dominant_script(text)
            .ok_or_else(|| SentixError::detection("no alphabetic characters"))?;
        if let Some(code) = script.language() {
            return Ok(code.to_string());
        }

        let words = self.words(text)?;
        let votes = self.tally(&words);
        let best = votes.iter().map(|&(_, hits)| hits).max().unwrap_or(0);
        if best == 0 {
            return Err(SentixError::detection("no language features found"));
        }
        let share = best as f64 / words.len() as f64;
        if best < MIN_STOP_WORD_HITS || share < MIN_STOP_WORD_RATIO {
            return Err(SentixError::detection(format!(
                "too little evidence: {best} stop words in {} words",
                words.len()
            )));
        }

        let mut leaders = votes.iter().filter(|&&(_, hits)| hits == best);
        match (leaders.next(), leaders.next()) {
            (Some(&(code, _)), None) => Ok(code.to_string()),
            _ => Err(SentixError::detection(format!(
                "ambiguous text: several languages with {best} stop words"
            ))),
        }
    }

    fn name(&self) -> &'static str {
        "stopword"
    }
}
