//! The closed set of evaluation vocabularies
//!
//! Every scoring run evaluates the same predictions against three symptom
//! vocabularies. [`Vocabulary`] names them and [`PerVocabulary`] holds exactly
//! one value per vocabulary, so per-vocabulary state never needs a dynamic map.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use strum_macros::{AsRefStr, Display, EnumString};

/// Evaluation vocabulary
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Vocabulary {
    /// Every symptom in the lexicon
    Full,
    /// Symptoms mapped to a concept unique identifier
    Cui,
    /// Rare symptoms
    Longtail,
}

impl Vocabulary {
    /// All vocabularies, in report order
    pub const ALL: [Vocabulary; 3] = [Vocabulary::Full, Vocabulary::Cui, Vocabulary::Longtail];
}

/// One value per [`Vocabulary`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerVocabulary<T> {
    pub full: T,
    pub cui: T,
    pub longtail: T,
}

impl<T> PerVocabulary<T> {
    /// Builds a value for each vocabulary from `f`
    pub fn from_fn(mut f: impl FnMut(Vocabulary) -> T) -> Self {
        Self {
            full: f(Vocabulary::Full),
            cui: f(Vocabulary::Cui),
            longtail: f(Vocabulary::Longtail),
        }
    }

    pub fn get(&self, vocabulary: Vocabulary) -> &T {
        match vocabulary {
            Vocabulary::Full => &self.full,
            Vocabulary::Cui => &self.cui,
            Vocabulary::Longtail => &self.longtail,
        }
    }

    pub fn get_mut(&mut self, vocabulary: Vocabulary) -> &mut T {
        match vocabulary {
            Vocabulary::Full => &mut self.full,
            Vocabulary::Cui => &mut self.cui,
            Vocabulary::Longtail => &mut self.longtail,
        }
    }

    /// Iterates `(vocabulary, value)` pairs in [`Vocabulary::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Vocabulary, &T)> {
        Vocabulary::ALL.into_iter().map(move |v| (v, self.get(v)))
    }

    /// Applies `f` to every value, keeping the vocabulary association
    pub fn map<U>(self, mut f: impl FnMut(Vocabulary, T) -> U) -> PerVocabulary<U> {
        PerVocabulary {
            full: f(Vocabulary::Full, self.full),
            cui: f(Vocabulary::Cui, self.cui),
            longtail: f(Vocabulary::Longtail, self.longtail),
        }
    }
}

impl<T> Index<Vocabulary> for PerVocabulary<T> {
    type Output = T;

    fn index(&self, vocabulary: Vocabulary) -> &T {
        self.get(vocabulary)
    }
}

impl<T> IndexMut<Vocabulary> for PerVocabulary<T> {
    fn index_mut(&mut self, vocabulary: Vocabulary) -> &mut T {
        self.get_mut(vocabulary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_vocabulary_names_round_trip_through_strum() {
        for vocabulary in Vocabulary::ALL {
            let name = vocabulary.to_string();
            assert_eq!(Vocabulary::from_str(&name).unwrap(), vocabulary);
        }
        assert_eq!(Vocabulary::Longtail.as_ref(), "longtail");
        assert!(Vocabulary::from_str("rare").is_err());
    }

    #[test]
    fn test_per_vocabulary_indexing_and_order() {
        let mut counts = PerVocabulary::from_fn(|v| v.as_ref().len());
        assert_eq!(counts[Vocabulary::Full], 4);
        assert_eq!(counts[Vocabulary::Cui], 3);

        counts[Vocabulary::Longtail] += 1;
        let order: Vec<_> = counts.iter().map(|(v, n)| (v, *n)).collect();
        assert_eq!(
            order,
            vec![
                (Vocabulary::Full, 4),
                (Vocabulary::Cui, 3),
                (Vocabulary::Longtail, 9)
            ]
        );
    }

    #[test]
    fn test_per_vocabulary_serializes_as_named_map() {
        let values = PerVocabulary::from_fn(|v| v == Vocabulary::Cui);
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"full": false, "cui": true, "longtail": false})
        );
    }
}
