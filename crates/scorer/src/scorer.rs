//! Scoring of predictions against reference records

use crate::accumulator::VocabularyAccumulator;
use crate::reference::{PreparedPrediction, ReferenceRecord};
use crate::report::ScoreReport;
use tracing::{debug, info};
use vsed_core::{Error, Lexicon, PerVocabulary, Result, Vocabulary};

/// Scores symptom predictions against a fixed lexicon
///
/// The lexicon is borrowed for the lifetime of the scorer and never modified,
/// so one lexicon can back any number of scoring calls.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Scorer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Computes macro and micro precision, recall and F1 for every vocabulary
    ///
    /// The i-th prediction is paired with the i-th reference record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if:
    /// - `predictions` and `references` differ in length
    /// - some reference has no gold symptom in the full vocabulary
    pub fn compute<P: AsRef<str>>(
        &self,
        predictions: &[P],
        references: &[ReferenceRecord],
    ) -> Result<ScoreReport> {
        if predictions.len() != references.len() {
            return Err(Error::validation(format!(
                "got {} predictions for {} references",
                predictions.len(),
                references.len()
            )));
        }

        info!("Scoring {} documents", predictions.len());

        let mut accumulators = PerVocabulary::<VocabularyAccumulator>::default();
        for (prediction, reference) in predictions.iter().zip(references) {
            let prediction = PreparedPrediction::new(prediction.as_ref());
            for vocabulary in Vocabulary::ALL {
                let counted = accumulators[vocabulary].observe(
                    self.lexicon.vocabulary(vocabulary),
                    &reference.symptoms,
                    &prediction,
                );
                if !counted {
                    debug!(
                        "Document {} has no gold symptoms in the {vocabulary} vocabulary",
                        reference.vid
                    );
                }
            }
        }

        let covered = accumulators.full.n_target_doc;
        if covered != predictions.len() {
            let first_uncovered = references
                .iter()
                .find(|reference| {
                    !reference
                        .symptoms
                        .iter()
                        .any(|symptom| self.lexicon.contains(Vocabulary::Full, symptom))
                })
                .map(|reference| reference.vid);
            return Err(Error::validation(format!(
                "{} of {} documents have no gold symptom in the full vocabulary (first: vid {})",
                predictions.len() - covered,
                predictions.len(),
                first_uncovered.map_or_else(|| "unknown".to_string(), |vid| vid.to_string())
            )));
        }

        let scores = accumulators.map(|vocabulary, acc| {
            let scores = acc.finalize();
            info!(
                "{vocabulary}: {} docs, macro P/R/F1 {:.4}/{:.4}/{:.4}, micro P/R/F1 {:.4}/{:.4}/{:.4}",
                scores.n_target_doc,
                scores.macro_precision,
                scores.macro_recall,
                scores.macro_f1,
                scores.micro_precision,
                scores.micro_recall,
                scores.micro_f1
            );
            scores
        });

        Ok(ScoreReport::new(scores))
    }
}

/// Scores `predictions` against `references` with `lexicon`
pub fn compute<P: AsRef<str>>(
    lexicon: &Lexicon,
    predictions: &[P],
    references: &[ReferenceRecord],
) -> Result<ScoreReport> {
    Scorer::new(lexicon).compute(predictions, references)
}
