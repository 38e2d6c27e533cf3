//! Score reports

use serde::{Deserialize, Serialize};
use vsed_core::{PerVocabulary, Vocabulary};

/// Final totals and derived rates for one vocabulary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VocabularyScores {
    pub global_tp: usize,
    pub global_n_true: usize,
    pub global_n_pos: usize,
    pub macro_p: f64,
    pub macro_r: f64,
    pub n_target_doc: usize,
    pub macro_precision: f64,
    pub macro_recall: f64,
    pub macro_f1: f64,
    pub micro_precision: f64,
    pub micro_recall: f64,
    pub micro_f1: f64,
}

/// Scores for every vocabulary, serialized as `{"full": .., "cui": .., "longtail": ..}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreReport {
    scores: PerVocabulary<VocabularyScores>,
}

impl ScoreReport {
    pub fn new(scores: PerVocabulary<VocabularyScores>) -> Self {
        Self { scores }
    }

    pub fn get(&self, vocabulary: Vocabulary) -> &VocabularyScores {
        &self.scores[vocabulary]
    }

    /// Iterates the vocabularies in report order
    pub fn iter(&self) -> impl Iterator<Item = (Vocabulary, &VocabularyScores)> {
        self.scores.iter()
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    /// Format as markdown table.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::from(
            "| Vocabulary | Docs | Macro P | Macro R | Macro F1 | Micro P | Micro R | Micro F1 |\n\
             |------------|------|---------|---------|----------|---------|---------|----------|",
        );
        for (vocabulary, s) in self.iter() {
            out.push_str(&format!(
                "\n| {vocabulary} | {} | {:.1}% | {:.1}% | {:.1}% | {:.1}% | {:.1}% | {:.1}% |",
                s.n_target_doc,
                s.macro_precision * 100.0,
                s.macro_recall * 100.0,
                s.macro_f1 * 100.0,
                s.micro_precision * 100.0,
                s.micro_recall * 100.0,
                s.micro_f1 * 100.0,
            ));
        }
        out
    }
}

impl std::ops::Index<Vocabulary> for ScoreReport {
    type Output = VocabularyScores;

    fn index(&self, vocabulary: Vocabulary) -> &VocabularyScores {
        self.get(vocabulary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> ScoreReport {
        ScoreReport::new(PerVocabulary::from_fn(|v| VocabularyScores {
            n_target_doc: match v {
                Vocabulary::Full => 3,
                Vocabulary::Cui => 2,
                Vocabulary::Longtail => 0,
            },
            macro_precision: 0.5,
            ..VocabularyScores::default()
        }))
    }

    #[test]
    fn test_json_keys_follow_vocabulary_names() {
        let json: serde_json::Value = serde_json::from_str(&report().to_json(false).unwrap()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(json["full"]["n_target_doc"], 3);
        assert_eq!(json["cui"]["macro_precision"], 0.5);
        assert_eq!(json["longtail"]["micro_f1"], 0.0);
    }

    #[test]
    fn test_markdown_lists_vocabularies_in_order() {
        let markdown = report().to_markdown();
        let rows: Vec<&str> = markdown.lines().skip(2).collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("| full | 3 | 50.0% |"));
        assert!(rows[1].starts_with("| cui | 2 |"));
        assert!(rows[2].starts_with("| longtail | 0 | 50.0% |"));
    }
}
