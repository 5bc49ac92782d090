//! Result types produced by the classifier.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};

/// Three-way sentiment label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Positive,
    Negative,
    Neutral,
}

impl Category {
    /// Categorize a polarity value.
    ///
    /// Both thresholds are strict: exactly 0.15 and exactly -0.15 are
    /// [`Category::Neutral`].
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            Category::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            Category::Negative
        } else {
            Category::Neutral
        }
    }

    /// The UI color that goes with this category.
    pub fn color(self) -> Color {
        match self {
            Category::Positive => Color::Green,
            Category::Negative => Color::Red,
            Category::Neutral => Color::Gray,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Positive => "Positive",
            Category::Negative => "Negative",
            Category::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UI color hint, one per [`Category`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Red,
    Gray,
}

impl Color {
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Red => "red",
            Color::Gray => "gray",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A successful analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Rounded polarity in [-1.0, 1.0].
    pub score: f64,
    /// Rounded subjectivity in [0.0, 1.0].
    pub subjectivity: f64,
    pub category: Category,
    pub color: Color,
    /// Gauge needle angle in degrees, [-90.0, 90.0].
    pub rotation: f64,
    /// False only when the detector confidently reported another language.
    pub is_english: bool,
}

/// A rejected analysis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
}

impl ErrorResult {
    pub fn new<S: Into<String>>(message: S) -> Self {
        ErrorResult {
            error: message.into(),
        }
    }
}

/// Either an [`AnalysisResult`] or an [`ErrorResult`], never both.
///
/// Serializes to the bare fields of whichever side is present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Analyzed(AnalysisResult),
    Rejected(ErrorResult),
}

impl AnalysisOutcome {
    pub fn is_analyzed(&self) -> bool {
        matches!(self, AnalysisOutcome::Analyzed(_))
    }

    /// The analysis result, if the input was accepted.
    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            AnalysisOutcome::Analyzed(result) => Some(result),
            AnalysisOutcome::Rejected(_) => None,
        }
    }

    /// The rejection message, if the input was rejected.
    pub fn error(&self) -> Option<&str> {
        match self {
            AnalysisOutcome::Analyzed(_) => None,
            AnalysisOutcome::Rejected(rejection) => Some(&rejection.error),
        }
    }
}
