//! Sentiment classification.
//!
//! [`AnalysisClassifier`] turns raw text into an [`AnalysisOutcome`]: it
//! validates the input, asks the injected [`Scorer`](crate::sentiment::Scorer)
//! for polarity and subjectivity, asks the injected
//! [`LanguageDetector`](crate::language::LanguageDetector) whether the text is
//! English, and maps polarity onto a category, a color and a gauge angle.

pub mod engine;
pub mod result;

pub use engine::AnalysisClassifier;
pub use result::*;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SentixError};

/// Polarity above which text is positive.
pub const POSITIVE_THRESHOLD: f64 = 0.15;

/// Polarity below which text is negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.15;

/// Gauge angle at polarity 1.0.
pub const MAX_ROTATION_DEGREES: f64 = 90.0;

/// Message returned for empty or whitespace-only input.
pub const EMPTY_INPUT_MESSAGE: &str = "Input text is empty or invalid.";

/// Largest supported number of decimal places.
pub const MAX_PRECISION: u32 = 10;

/// Configuration for [`AnalysisClassifier`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Trimmed inputs must be longer than this many characters before the
    /// language detector is consulted.
    pub min_detection_chars: usize,
    /// Decimal places kept in `score` and `subjectivity`.
    pub precision: u32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_detection_chars: 10,
            precision: 3,
        }
    }
}

impl ClassifierConfig {
    /// Check that the configuration can be used.
    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(SentixError::config(format!(
                "precision must be at most {MAX_PRECISION}, got {}",
                self.precision
            )));
        }
        Ok(())
    }
}

/// Map polarity to the gauge needle angle in degrees.
///
/// The mapping is linear: -1.0 is -90°, 0.0 is 0° and 1.0 is 90°.
pub fn gauge_rotation(polarity: f64) -> f64 {
    polarity * MAX_ROTATION_DEGREES
}

/// Round to a number of decimal places, halves away from zero.
///
/// Rounding works on the binary value, so a decimal literal that looks like a
/// tie (0.1235) may sit slightly below or above it.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClassifierConfig::default();

        assert_eq!(config.min_detection_chars, 10);
        assert_eq!(config.precision, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_precision() {
        let config = ClassifierConfig {
            precision: 11,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SentixError::Config(_))));
    }

    #[test]
    fn test_config_partial_json() {
        let config: ClassifierConfig = serde_json::from_str(r#"{"precision": 2}"#).unwrap();

        assert_eq!(config.precision, 2);
        assert_eq!(config.min_detection_chars, 10);
    }

    #[test]
    fn test_gauge_rotation() {
        assert_eq!(gauge_rotation(0.0), 0.0);
        assert_eq!(gauge_rotation(1.0), 90.0);
        assert_eq!(gauge_rotation(-1.0), -90.0);
        assert_eq!(gauge_rotation(0.5), 45.0);
        assert_eq!(gauge_rotation(-0.25), -22.5);
    }

    #[test]
    fn test_gauge_rotation_preserves_sign_and_bounds() {
        for step in -100..=100 {
            let polarity = step as f64 / 100.0;
            let rotation = gauge_rotation(polarity);

            assert!(rotation.signum() == polarity.signum(), "{polarity}");
            assert!(rotation.abs() <= 90.0);
            assert_eq!(rotation == 0.0, polarity == 0.0);
        }
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.123456, 3), 0.123);
        assert_eq!(round_to(-0.98765, 3), -0.988);
        assert_eq!(round_to(1.0, 3), 1.0);
        assert_eq!(round_to(0.5, 0), 1.0);
    }

    #[test]
    fn test_round_to_ties_go_away_from_zero() {
        // 0.0625 is exact in binary, so these are true ties
        assert_eq!(round_to(0.0625, 3), 0.063);
        assert_eq!(round_to(-0.0625, 3), -0.063);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }
}
