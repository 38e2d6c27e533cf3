//! Symptom lexicons
//!
//! A [`Lexicon`] holds the three vocabularies a scoring run evaluates against.
//! It is built once, either from in-memory sets or from the tab-separated
//! lexicon files, and then handed to the scorer by reference.
//!
//! # File layout
//!
//! Every file starts with a header row, which is skipped.
//!
//! | File      | Columns                                   | Key column |
//! |-----------|-------------------------------------------|------------|
//! | full      | `id  normalized  original  extra`         | 1          |
//! | long-tail | `id  normalized  original  extra`         | 1          |
//! | CUI       | `id  original  normalized  cui  extra`    | 2          |
//!
//! CUI rows with three or fewer columns, not counting surrounding whitespace,
//! are malformed and are discarded. An empty trailing field still counts
//! towards the five CUI columns.

use crate::config::LexiconConfig;
use crate::error::{Error, Result, ResultExt};
use crate::vocabulary::{PerVocabulary, Vocabulary};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

const SYMPTOM_COLUMNS: usize = 4;
const CUI_COLUMNS: usize = 5;
const CUI_MIN_COLUMNS: usize = 4;

/// The three symptom vocabularies used for scoring
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    vocabularies: PerVocabulary<HashSet<String>>,
}

impl Lexicon {
    /// Builds a lexicon from already-normalized symptom sets
    ///
    /// Every set must be non-empty.
    pub fn from_sets(
        full: HashSet<String>,
        cui: HashSet<String>,
        longtail: HashSet<String>,
    ) -> Result<Self> {
        let lexicon = Self {
            vocabularies: PerVocabulary {
                full,
                cui,
                longtail,
            },
        };
        lexicon.ensure_non_empty()?;
        Ok(lexicon)
    }

    /// Reads the three lexicon files named by `config`
    pub fn load(config: &LexiconConfig) -> Result<Self> {
        let full_path = config.path_for(Vocabulary::Full);
        let full = read_symptom_file(&full_path)?;

        let longtail_path = config.path_for(Vocabulary::Longtail);
        let longtail = read_symptom_file(&longtail_path)?;

        let cui_path = config.path_for(Vocabulary::Cui);
        let cui = read_cui_file(&cui_path)?;

        let lexicon = Self {
            vocabularies: PerVocabulary {
                full,
                cui,
                longtail,
            },
        };
        lexicon.ensure_non_empty()?;

        info!(
            "Loaded lexicon: {} full, {} cui, {} longtail symptoms",
            lexicon.len(Vocabulary::Full),
            lexicon.len(Vocabulary::Cui),
            lexicon.len(Vocabulary::Longtail)
        );
        Ok(lexicon)
    }

    /// Symptom set of `vocabulary`
    pub fn vocabulary(&self, vocabulary: Vocabulary) -> &HashSet<String> {
        &self.vocabularies[vocabulary]
    }

    pub fn contains(&self, vocabulary: Vocabulary, symptom: &str) -> bool {
        self.vocabularies[vocabulary].contains(symptom)
    }

    pub fn len(&self, vocabulary: Vocabulary) -> usize {
        self.vocabularies[vocabulary].len()
    }

    pub fn is_empty(&self, vocabulary: Vocabulary) -> bool {
        self.vocabularies[vocabulary].is_empty()
    }

    fn ensure_non_empty(&self) -> Result<()> {
        for vocabulary in Vocabulary::ALL {
            if self.is_empty(vocabulary) {
                return Err(Error::config(format!(
                    "the '{vocabulary}' vocabulary contains no symptoms"
                )));
            }
        }
        Ok(())
    }
}

/// Normalizes a predicted symptom mention to lexicon key form
///
/// Trims surrounding whitespace, lowercases, and drops spaces.
pub fn normalize_mention(mention: &str) -> String {
    mention.trim().to_lowercase().replace(' ', "")
}

fn read_lexicon_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).context(format!(
        "Failed to read lexicon file {}",
        path.display()
    ))
}

/// Data rows of a lexicon file with their 1-based line numbers
fn data_rows(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .skip(1)
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}

fn read_symptom_file(path: &Path) -> Result<HashSet<String>> {
    let content = read_lexicon_file(path)?;
    parse_symptom_rows(&content, &path.display().to_string())
}

fn parse_symptom_rows(content: &str, file: &str) -> Result<HashSet<String>> {
    let mut keys = HashSet::new();

    for (line_no, line) in data_rows(content) {
        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() != SYMPTOM_COLUMNS {
            return Err(Error::parse(
                file,
                format!(
                    "line {line_no}: expected {SYMPTOM_COLUMNS} columns, found {}",
                    columns.len()
                ),
            ));
        }
        keys.insert(columns[1].to_string());
    }

    debug!("Read {} symptoms from {file}", keys.len());
    Ok(keys)
}

fn read_cui_file(path: &Path) -> Result<HashSet<String>> {
    let content = read_lexicon_file(path)?;
    parse_cui_rows(&content, &path.display().to_string())
}

fn parse_cui_rows(content: &str, file: &str) -> Result<HashSet<String>> {
    let mut keys = HashSet::new();
    let mut discarded = 0usize;

    for (line_no, line) in data_rows(content) {
        // Short rows are judged on the trimmed line, fields come from the raw one.
        if line.trim().split('\t').count() < CUI_MIN_COLUMNS {
            debug!("Discarding malformed row at {file}:{line_no}");
            discarded += 1;
            continue;
        }
        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() != CUI_COLUMNS {
            return Err(Error::parse(
                file,
                format!(
                    "line {line_no}: expected {CUI_COLUMNS} columns, found {}",
                    columns.len()
                ),
            ));
        }
        keys.insert(columns[2].to_string());
    }

    if discarded > 0 {
        warn!("Discarded {discarded} malformed rows from {file}");
    }
    debug!("Read {} CUI-mapped symptoms from {file}", keys.len());
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_mention() {
        assert_eq!(normalize_mention("  Sore Arm "), "sorearm");
        assert_eq!(normalize_mention("FEVER"), "fever");
        assert_eq!(normalize_mention(""), "");
    }

    #[test]
    fn test_from_sets_rejects_empty_vocabulary() {
        let result = Lexicon::from_sets(set(&["fever"]), HashSet::new(), set(&["rash"]));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("cui"), "unexpected error: {err}");
    }

    #[test]
    fn test_parse_symptom_rows_skips_header() {
        let content = "id\tsymptom\toriginal\tcount\n\
                       1\tfever\tFever\t10\n\
                       2\tsorearm\tSore arm\t3\n";
        let parsed = parse_symptom_rows(content, "symptoms.tsv").unwrap();

        assert_eq!(parsed, set(&["fever", "sorearm"]));
        assert!(!parsed.contains("symptom"));
    }

    #[test]
    fn test_parse_symptom_rows_rejects_wrong_column_count() {
        let content = "header\n1\tfever\tFever\n";
        let err = parse_symptom_rows(content, "symptoms.tsv").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_parse_cui_rows_discards_short_rows() {
        let content = "id\toriginal\tnormalized\tcui\textra\n\
                       1\tHigh temperature\tfever\tC0015967\tx\n\
                       2\tbroken\trow\n\
                       3\tRash\trash\tC0015230\ty\n";
        let keys = parse_cui_rows(content, "symptoms_cui.tsv").unwrap();
        assert_eq!(keys, set(&["fever", "rash"]));
    }

    #[test]
    fn test_parse_cui_rows_rejects_four_columns() {
        let content = "header\n1\tRash\trash\tC0015230\n";
        assert!(parse_cui_rows(content, "symptoms_cui.tsv").is_err());
    }

    #[test]
    fn test_parse_cui_rows_accepts_empty_trailing_field() {
        let content = "id\toriginal\tnormalized\tcui\textra\n\
                       1\tRash\trash\tC0015230\t\n";
        let keys = parse_cui_rows(content, "symptoms_cui.tsv").unwrap();
        assert_eq!(keys, set(&["rash"]));
    }

    #[test]
    fn test_parse_cui_rows_discards_row_short_after_trimming() {
        let content = "header\n1\tRash\trash\t\t\n";
        let keys = parse_cui_rows(content, "symptoms_cui.tsv").unwrap();
        assert!(keys.is_empty());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let content = "header\n1\tfever\tFever\t1\n\n";
        let parsed = parse_symptom_rows(content, "symptoms.tsv").unwrap();
        assert_eq!(parsed.len(), 1);
    }
}
