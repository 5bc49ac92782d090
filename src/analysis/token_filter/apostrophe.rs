//! Apostrophe normalization filter.
//!
//! Typographic apostrophes (`’`, `‘`, `ʼ`) are rewritten to the ASCII `'` so
//! that "don’t" and "don't" look up the same lexicon entry.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

const TYPOGRAPHIC_APOSTROPHES: [char; 3] = ['\u{2019}', '\u{2018}', '\u{02BC}'];

/// A filter that normalizes apostrophe variants inside tokens.
#[derive(Clone, Debug, Default)]
pub struct ApostropheFilter;

impl ApostropheFilter {
    /// Create a new apostrophe filter.
    pub fn new() -> Self {
        ApostropheFilter
    }
}

impl Filter for ApostropheFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|token| {
            if token.text.contains(&TYPOGRAPHIC_APOSTROPHES[..]) {
                let normalized = token.text.replace(&TYPOGRAPHIC_APOSTROPHES[..], "'");
                token.with_text(normalized)
            } else {
                token
            }
        })))
    }

    fn name(&self) -> &'static str {
        "apostrophe"
    }
}
