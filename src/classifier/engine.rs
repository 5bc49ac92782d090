//! The analysis classifier.

use std::sync::Arc;

use log::debug;

use super::result::{AnalysisOutcome, AnalysisResult, Category, ErrorResult};
use super::{ClassifierConfig, EMPTY_INPUT_MESSAGE, gauge_rotation, round_to};
use crate::error::{Result, SentixError};
use crate::language::{ENGLISH, LanguageDetector, StopwordDetector};
use crate::sentiment::{PatternScorer, Scorer};

/// Classifies text by sentiment.
///
/// The classifier holds no mutable state; one instance can serve any number
/// of concurrent callers.
///
/// # Examples
///
/// ```
/// use sentix::classifier::{AnalysisClassifier, Category};
///
/// let classifier = AnalysisClassifier::with_defaults().unwrap();
/// let outcome = classifier.analyze("What a wonderful day!").unwrap();
///
/// assert_eq!(outcome.result().unwrap().category, Category::Positive);
/// ```
#[derive(Clone)]
pub struct AnalysisClassifier {
    scorer: Arc<dyn Scorer>,
    detector: Arc<dyn LanguageDetector>,
    config: ClassifierConfig,
}

impl AnalysisClassifier {
    /// Create a classifier from a scorer and a language detector.
    pub fn new(
        scorer: Arc<dyn Scorer>,
        detector: Arc<dyn LanguageDetector>,
        config: ClassifierConfig,
    ) -> Self {
        AnalysisClassifier {
            scorer,
            detector,
            config,
        }
    }

    /// Create a classifier with the built-in scorer and detector.
    pub fn with_defaults() -> Result<Self> {
        Self::with_config(ClassifierConfig::default())
    }

    /// Create a classifier with the built-in scorer and detector.
    pub fn with_config(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(
            Arc::new(PatternScorer::new()?),
            Arc::new(StopwordDetector::new()),
            config,
        ))
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Analyze a text.
    ///
    /// Empty or whitespace-only input yields [`AnalysisOutcome::Rejected`].
    /// A scorer failure is returned as `Err`; detector failures never are.
    pub fn analyze(&self, text: &str) -> Result<AnalysisOutcome> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("rejecting empty input");
            return Ok(AnalysisOutcome::Rejected(ErrorResult::new(
                EMPTY_INPUT_MESSAGE,
            )));
        }

        let sentiment = self.scorer.score(text)?;
        if !sentiment.polarity.is_finite() || !sentiment.subjectivity.is_finite() {
            return Err(SentixError::scoring(format!(
                "{} scorer returned a non-finite value: {sentiment:?}",
                self.scorer.name()
            )));
        }
        let polarity = sentiment.polarity.clamp(-1.0, 1.0);
        let subjectivity = sentiment.subjectivity.clamp(0.0, 1.0);

        let is_english = self.is_english(trimmed, text);
        let category = Category::from_polarity(polarity);

        debug!(
            "analyzed {} chars: polarity={polarity:.4} subjectivity={subjectivity:.4} \
             category={category} is_english={is_english}",
            trimmed.chars().count()
        );

        Ok(AnalysisOutcome::Analyzed(AnalysisResult {
            score: round_to(polarity, self.config.precision),
            subjectivity: round_to(subjectivity, self.config.precision),
            category,
            color: category.color(),
            rotation: gauge_rotation(polarity),
            is_english,
        }))
    }

    /// Decide whether the text is English.
    ///
    /// Short inputs are not sent to the detector at all; detector errors
    /// count as English.
    fn is_english(&self, trimmed: &str, text: &str) -> bool {
        if trimmed.chars().count() <= self.config.min_detection_chars {
            return true;
        }

        match self.detector.detect(text) {
            Ok(code) => code == ENGLISH,
            Err(e) => {
                debug!("{} detector gave up: {e}", self.detector.name());
                true
            }
        }
    }
}

impl std::fmt::Debug for AnalysisClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisClassifier")
            .field("scorer", &self.scorer.name())
            .field("detector", &self.detector.name())
            .field("config", &self.config)
            .finish()
    }
}
