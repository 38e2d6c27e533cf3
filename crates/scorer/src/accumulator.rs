//! Per-vocabulary running totals

use crate::reference::PreparedPrediction;
use crate::report::VocabularyScores;
use std::collections::HashSet;

/// Harmonic mean of precision and recall, 0 when both are 0
pub fn f1_score(precision: f64, recall: f64) -> f64 {
    if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Running totals for one vocabulary over one scoring call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VocabularyAccumulator {
    pub global_tp: usize,
    pub global_n_true: usize,
    pub global_n_pos: usize,
    /// Sum of per-document precision
    pub macro_p: f64,
    /// Sum of per-document recall
    pub macro_r: f64,
    /// Documents with at least one in-vocabulary gold symptom
    pub n_target_doc: usize,
}

impl VocabularyAccumulator {
    /// Adds one document to the totals
    ///
    /// Returns `false`, leaving the totals untouched, when none of the gold
    /// symptoms belong to `vocabulary`.
    pub fn observe(
        &mut self,
        vocabulary: &HashSet<String>,
        gold: &[String],
        prediction: &PreparedPrediction<'_>,
    ) -> bool {
        // Repeated gold symptoms are counted each time.
        let gold_in_vocabulary: Vec<&str> = gold
            .iter()
            .map(String::as_str)
            .filter(|symptom| vocabulary.contains(*symptom))
            .collect();
        if gold_in_vocabulary.is_empty() {
            return false;
        }

        let local_n_true = gold_in_vocabulary.len();
        self.n_target_doc += 1;
        self.global_n_true += local_n_true;

        let local_n_pos = prediction
            .mentions
            .iter()
            .filter(|mention| vocabulary.contains(mention.as_str()))
            .count();
        self.global_n_pos += local_n_pos;

        // Credit comes from substring search in the raw text, not from the mentions.
        let local_tp = gold_in_vocabulary
            .iter()
            .filter(|symptom| prediction.raw.contains(*symptom))
            .count();
        self.global_tp += local_tp;

        self.macro_p += ratio(local_tp, local_n_pos);
        self.macro_r += ratio(local_tp, local_n_true);
        true
    }

    /// Derives the macro and micro rates from the totals
    pub fn finalize(self) -> VocabularyScores {
        let macro_precision = if self.n_target_doc > 0 {
            self.macro_p / self.n_target_doc as f64
        } else {
            0.0
        };
        let macro_recall = if self.n_target_doc > 0 {
            self.macro_r / self.n_target_doc as f64
        } else {
            0.0
        };
        let micro_precision = ratio(self.global_tp, self.global_n_pos);
        let micro_recall = ratio(self.global_tp, self.global_n_true);

        VocabularyScores {
            global_tp: self.global_tp,
            global_n_true: self.global_n_true,
            global_n_pos: self.global_n_pos,
            macro_p: self.macro_p,
            macro_r: self.macro_r,
            n_target_doc: self.n_target_doc,
            macro_precision,
            macro_recall,
            macro_f1: f1_score(macro_precision, macro_recall),
            micro_precision,
            micro_recall,
            micro_f1: f1_score(micro_precision, micro_recall),
        }
    }
}
