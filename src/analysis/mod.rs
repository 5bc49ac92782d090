//! Text analysis module for Sentix.
//!
//! This module provides the tokenization and filtering pipeline shared by the
//! built-in sentiment scorer and language detector.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
