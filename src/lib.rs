//! # Sentix
//!
//! Sentiment analysis for short texts.
//!
//! Given a piece of text, Sentix reports
//!
//! - a polarity score in [-1, 1] and a subjectivity score in [0, 1],
//! - a Positive / Negative / Neutral category with a matching UI color,
//! - a gauge needle angle in [-90°, 90°],
//! - whether the text looks like English.
//!
//! The scoring and language detection back ends are pluggable through the
//! [`sentiment::Scorer`] and [`language::LanguageDetector`] traits; the crate
//! ships lexicon-based implementations of both, an HTTP server with a small
//! dashboard, and a command line front end.
//!
//! ```
//! use sentix::prelude::*;
//!
//! let classifier = AnalysisClassifier::with_defaults().unwrap();
//! let outcome = classifier.analyze("This is a horrible experience.").unwrap();
//! let result = outcome.result().unwrap();
//!
//! assert_eq!(result.category, Category::Negative);
//! assert_eq!(result.color, Color::Red);
//! ```

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod language;
pub mod sentiment;
pub mod server;

pub mod prelude {
    pub use crate::classifier::{
        AnalysisClassifier, AnalysisOutcome, AnalysisResult, Category, ClassifierConfig, Color,
        ErrorResult,
    };
    pub use crate::config::ServerConfig;
    pub use crate::error::{Result, SentixError};
    pub use crate::language::{LanguageDetector, StopwordDetector};
    pub use crate::sentiment::{PatternScorer, Scorer, Sentiment};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
