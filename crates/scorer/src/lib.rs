//! Scoring of model-generated symptom lists against gold annotations.
//!
//! This crate provides:
//! - [`Scorer`], which pairs predictions with reference records and computes
//!   macro- and micro-averaged precision, recall and F1 per vocabulary
//! - [`ScoreReport`], the per-vocabulary result with JSON and markdown output
//! - [`ReferenceRecord`], the gold annotation of one document

pub mod accumulator;
pub mod reference;
pub mod report;
pub mod scorer;

pub use accumulator::{f1_score, VocabularyAccumulator};
pub use reference::{PreparedPrediction, ReferenceRecord};
pub use report::{ScoreReport, VocabularyScores};
pub use scorer::{compute, Scorer};
