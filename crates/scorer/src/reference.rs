//! Scorer inputs

use serde::{Deserialize, Serialize};
use vsed_core::normalize_mention;

/// Gold annotation of one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    /// Document identifier
    pub vid: i32,
    /// Gold symptoms as stored, possibly repeated
    pub symptoms: Vec<String>,
}

impl ReferenceRecord {
    pub fn new<S: Into<String>>(vid: i32, symptoms: impl IntoIterator<Item = S>) -> Self {
        Self {
            vid,
            symptoms: symptoms.into_iter().map(Into::into).collect(),
        }
    }
}

/// A prediction string together with its normalized comma-separated mentions
///
/// The raw text is kept because true positives are found by substring search
/// in it, while the normalized mentions only drive the predicted-positive count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedPrediction<'a> {
    pub raw: &'a str,
    pub mentions: Vec<String>,
}

impl<'a> PreparedPrediction<'a> {
    pub fn new(raw: &'a str) -> Self {
        let mentions = raw.trim().split(',').map(normalize_mention).collect();
        Self { raw, mentions }
    }
}
