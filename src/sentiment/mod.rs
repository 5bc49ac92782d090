//! Sentiment scoring.
//!
//! The classifier only sees the [`Scorer`] capability; [`PatternScorer`] is
//! the built-in lexicon implementation used by the server and the CLI.

pub mod lexicon;
pub mod pattern;

pub use lexicon::{Lexicon, LexiconEntry};
pub use pattern::PatternScorer;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Raw output of a scorer, before any rounding or categorization.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// -1.0 (most negative) to 1.0 (most positive).
    pub polarity: f64,
    /// 0.0 (fully objective) to 1.0 (fully subjective).
    pub subjectivity: f64,
}

impl Sentiment {
    /// Create a new sentiment value.
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Sentiment {
            polarity,
            subjectivity,
        }
    }

    /// The sentiment of text that carries no opinion at all.
    pub fn neutral() -> Self {
        Sentiment::new(0.0, 0.0)
    }
}

/// Trait for polarity/subjectivity scorers.
///
/// Implementations must be deterministic for a given input and total over
/// non-empty strings. An `Err` is treated as an internal fault by callers.
pub trait Scorer: Send + Sync {
    /// Score the given text.
    fn score(&self, text: &str) -> Result<Sentiment>;

    /// Get the name of this scorer (for logging).
    fn name(&self) -> &'static str;
}
