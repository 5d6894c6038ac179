use ndarray::{s, Array2, ArrayView1};

use super::{tokenize, Vocabulary};

/// Word-count matrix of shape `(messages, vocabulary)`.
///
/// Cell `(i, j)` holds how many times vocabulary word `j` occurs in message `i`. The matrix is
/// never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureMatrix {
    counts: Array2<u32>,
}

impl FeatureMatrix {
    /// Builds the count matrix of `messages` over a fixed vocabulary.
    ///
    /// Words outside the vocabulary are ignored.
    pub fn build<'a, I>(vocab: &Vocabulary, messages: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let messages: Vec<&str> = messages.into_iter().collect();
        let mut counts = Array2::zeros((messages.len(), vocab.len()));

        for (i, message) in messages.iter().enumerate() {
            for word in tokenize(message) {
                if let Some(j) = vocab.index_of(&word) {
                    counts[[i, j]] += 1;
                }
            }
        }

        Self { counts }
    }

    /// Wraps an existing count matrix.
    pub fn from_counts(counts: Array2<u32>) -> Self {
        Self { counts }
    }

    pub fn nrows(&self) -> usize {
        self.counts.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.counts.ncols()
    }

    pub fn row(&self, i: usize) -> ArrayView1<'_, u32> {
        self.counts.row(i)
    }

    /// Returns the counts as floating point values.
    pub fn to_f64(&self) -> Array2<f64> {
        self.counts.mapv(f64::from)
    }

    /// Returns a 0/1 presence matrix: 1 wherever the word occurs at least once.
    pub fn binarized(&self) -> Array2<f64> {
        self.counts.mapv(|c| if c > 0 { 1.0 } else { 0.0 })
    }

    /// Returns the first `rows` rows (or all of them if there are fewer).
    pub fn head(&self, rows: usize) -> Array2<u32> {
        let rows = rows.min(self.nrows());
        self.counts.slice(s![..rows, ..]).to_owned()
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;

    const TRAIN: [&str; 3] = ["free money now", "free entry win", "call me now"];

    fn vocab() -> Vocabulary {
        Vocabulary::build(TRAIN, NonZeroUsize::new(1).unwrap())
    }

    #[test]
    fn row_counts_vocabulary_words() {
        let matrix = FeatureMatrix::build(&vocab(), TRAIN);

        assert_eq!(matrix.nrows(), 3);
        assert_eq!(matrix.ncols(), 7);
        assert_eq!(matrix.row(0).to_vec(), vec![0, 0, 1, 0, 1, 1, 0]);
    }

    #[test]
    fn repeated_words_add_up_and_unknown_words_are_dropped() {
        let matrix = FeatureMatrix::build(&vocab(), ["FREE free lunch, call call call"]);

        assert_eq!(matrix.row(0).to_vec(), vec![3, 0, 2, 0, 0, 0, 0]);
    }

    #[test]
    fn building_twice_is_identical() {
        let vocab = vocab();
        let messages = ["now now free", "", "me and you", "win a call"];

        assert_eq!(
            FeatureMatrix::build(&vocab, messages),
            FeatureMatrix::build(&vocab, messages)
        );
    }

    #[test]
    fn empty_vocabulary_gives_zero_columns() {
        let vocab = Vocabulary::build(TRAIN, NonZeroUsize::new(10).unwrap());
        let matrix = FeatureMatrix::build(&vocab, TRAIN);

        assert_eq!(matrix.nrows(), 3);
        assert_eq!(matrix.ncols(), 0);
    }

    #[test]
    fn head_and_binarized() {
        let matrix = FeatureMatrix::build(&vocab(), ["now now", "call", "win"]);

        assert_eq!(matrix.head(2).nrows(), 2);
        assert_eq!(matrix.head(10).nrows(), 3);
        assert_eq!(matrix.binarized()[[0, 5]], 1.0);
        assert_eq!(matrix.to_f64()[[0, 5]], 2.0);
    }
}
