//! Language detection.
//!
//! The classifier only depends on the [`LanguageDetector`] capability. The
//! built-in [`StopwordDetector`] combines a writing-system pass with
//! stop-word voting over a handful of Latin-script languages.

pub mod profile;
pub mod script;
pub mod stopword;

pub use profile::LanguageProfile;
pub use script::Script;
pub use stopword::StopwordDetector;

use crate::error::Result;

/// ISO 639-1 code reported for English text.
pub const ENGLISH: &str = "en";

/// Trait for language detectors.
///
/// `detect` returns an ISO 639-1 language code. Any `Err` means the detector
/// could not decide; callers are expected to treat that as "unknown" rather
/// than as a failure of the surrounding operation.
pub trait LanguageDetector: Send + Sync {
    /// Detect the language of the given text.
    fn detect(&self, text: &str) -> Result<String>;

    /// Get the name of this detector (for logging).
    fn name(&self) -> &'static str;
}

/// Build the built-in language profiles.
///
/// Profiles are created lazily on first use; calling this once at startup
/// moves that cost out of the first request.
pub fn warm_up() {
    let profiles = profile::builtin_profiles();
    log::debug!("loaded {} language profiles", profiles.len());
}
