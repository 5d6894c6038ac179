use std::{
    collections::{BTreeMap, HashMap, HashSet},
    num::NonZeroUsize,
};

use super::tokenize;

/// A bidirectional mapping between words and dense column indices.
///
/// Indices are assigned in ascending lexicographic order of the word, so the same training
/// corpus always yields the same vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    index: HashMap<String, usize>,
    words: Vec<String>,
}

impl Vocabulary {
    /// Builds a vocabulary from the training messages.
    ///
    /// # Arguments
    /// * `messages` - The training texts.
    /// * `min_df` - Minimum number of distinct messages a word must appear in to be kept.
    ///
    /// # Returns
    /// The vocabulary of every word whose document frequency is at least `min_df`.
    pub fn build<'a, I>(messages: I, min_df: NonZeroUsize) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut doc_freq: HashMap<String, usize> = HashMap::new();

        for message in messages {
            let distinct: HashSet<String> = tokenize(message).into_iter().collect();
            for word in distinct {
                *doc_freq.entry(word).or_insert(0) += 1;
            }
        }

        let mut words: Vec<String> = doc_freq
            .into_iter()
            .filter(|(_, count)| *count >= min_df.get())
            .map(|(word, _)| word)
            .collect();
        words.sort_unstable();

        Self::from_sorted(words)
    }

    fn from_sorted(words: Vec<String>) -> Self {
        let index = words
            .iter()
            .enumerate()
            .map(|(i, word)| (word.clone(), i))
            .collect();

        Self { index, words }
    }

    /// Returns the column of `word`, if it is in the vocabulary.
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// Returns the word at column `index`.
    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the word to index mapping, sorted by word.
    pub fn to_map(&self) -> BTreeMap<&str, usize> {
        self.words
            .iter()
            .enumerate()
            .map(|(i, word)| (word.as_str(), i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn indices_follow_lexicographic_order() {
        let vocab = Vocabulary::build(["free money now", "free entry win", "call me now"], nz(1));

        let expected = ["call", "entry", "free", "me", "money", "now", "win"];
        assert_eq!(vocab.len(), expected.len());
        for (i, word) in expected.iter().enumerate() {
            assert_eq!(vocab.index_of(word), Some(i), "word {word}");
            assert_eq!(vocab.word(i), Some(*word));
        }
    }

    #[test]
    fn counts_messages_not_occurrences() {
        let messages = ["win win win win win", "win", "hello there", "hello"];
        let vocab = Vocabulary::build(messages, nz(2));

        assert_eq!(vocab.words(), &["hello".to_string(), "win".to_string()]);

        let vocab = Vocabulary::build(messages, nz(3));
        assert!(vocab.is_empty());
    }

    #[test]
    fn every_word_meets_min_df() {
        let messages = [
            "Free entry now",
            "free tickets",
            "are you free now",
            "see you now",
            "call me",
            "you there?",
        ];
        for min_df in 1..=4 {
            let vocab = Vocabulary::build(messages, nz(min_df));
            for word in vocab.words() {
                let df = messages
                    .iter()
                    .filter(|m| tokenize(m).iter().any(|w| w == word))
                    .count();
                assert!(df >= min_df, "{word} has df {df} < {min_df}");
            }
        }
    }

    #[test]
    fn to_map_inverts_word_lookup() {
        let vocab = Vocabulary::build(["b a", "c"], nz(1));
        let map = vocab.to_map();

        assert_eq!(map.len(), 3);
        for (word, index) in map {
            assert_eq!(vocab.word(index), Some(word));
        }
        assert_eq!(vocab.index_of("missing"), None);
        assert_eq!(vocab.word(3), None);
    }
}
