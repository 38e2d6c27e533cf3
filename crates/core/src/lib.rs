//! Core types for vaccine side-effect (VSED) scoring
//!
//! This crate provides the foundational pieces shared by the scorer and the
//! command-line tool:
//!
//! - **Vocabularies**: the closed set of evaluation vocabularies (full, CUI, long-tail)
//! - **Lexicon**: the three symptom sets, loaded once and passed by reference
//! - **Configuration**: lexicon locations and output preferences
//! - **Error handling**: unified error types
//!

pub mod config;
pub mod error;
pub mod lexicon;
pub mod vocabulary;

// Re-export main types for convenience
pub use config::{Config, LexiconConfig, OutputConfig, OutputFormat};
pub use error::{Error, Result, ResultExt};
pub use lexicon::{normalize_mention, Lexicon};
pub use vocabulary::{PerVocabulary, Vocabulary};
