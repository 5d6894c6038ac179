//! Multinomial Naive Bayes over word counts.

use std::{fs, path::Path};

use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::{
    classifier::Classifier,
    data::{Label, Labels},
    text::{FeatureMatrix, Vocabulary},
    Result, SpamErr,
};

/// A fitted multinomial Naive Bayes model.
///
/// Holds the spam prior and, for every vocabulary word, its Laplace-smoothed probability under
/// each class together with the natural log of that probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaiveBayes {
    prior_spam: f64,
    phi_spam: Array1<f64>,
    phi_ham: Array1<f64>,
    log_phi_spam: Array1<f64>,
    log_phi_ham: Array1<f64>,
}

impl NaiveBayes {
    /// Fits the model to a training matrix and its labels.
    ///
    /// # Arguments
    /// * `x` - Word counts of the training messages.
    /// * `y` - Labels aligned with the rows of `x`.
    ///
    /// # Errors
    /// * `SpamErr::SizeMismatch` if `x` and `y` have a different number of messages.
    /// * `SpamErr::EmptyDataset` if there are no training messages.
    /// * `SpamErr::EmptyClass` if either class has no messages.
    pub fn fit(x: &FeatureMatrix, y: &Labels) -> Result<Self> {
        if x.nrows() != y.len() {
            return Err(SpamErr::SizeMismatch {
                a: "feature rows",
                b: "labels",
                got: x.nrows(),
                expected: y.len(),
            });
        }

        if y.is_empty() {
            return Err(SpamErr::EmptyDataset { what: "training" });
        }

        let n = y.len();
        let spam = y.count(Label::Spam);
        if spam == 0 {
            return Err(SpamErr::EmptyClass { label: Label::Spam });
        }
        if spam == n {
            return Err(SpamErr::EmptyClass { label: Label::Ham });
        }

        let counts = x.to_f64();
        let mut spam_counts = Array1::<f64>::zeros(x.ncols());
        let mut ham_counts = Array1::<f64>::zeros(x.ncols());

        for (row, label) in counts.rows().into_iter().zip(y.iter()) {
            match label {
                Label::Spam => spam_counts += &row,
                Label::Ham => ham_counts += &row,
            }
        }

        let phi_spam = smoothed(spam_counts.view());
        let phi_ham = smoothed(ham_counts.view());

        Ok(Self {
            prior_spam: spam as f64 / n as f64,
            log_phi_spam: phi_spam.ln(),
            log_phi_ham: phi_ham.ln(),
            phi_spam,
            phi_ham,
        })
    }

    /// Returns the prior probability of `label`.
    pub fn prior(&self, label: Label) -> f64 {
        match label {
            Label::Spam => self.prior_spam,
            Label::Ham => 1.0 - self.prior_spam,
        }
    }

    /// Returns the smoothed probability of vocabulary word `j` given `label`.
    pub fn word_probability(&self, label: Label, j: usize) -> Option<f64> {
        self.phi(label).get(j).copied()
    }

    /// Returns the number of vocabulary words the model was fitted on.
    pub fn num_words(&self) -> usize {
        self.phi_spam.len()
    }

    fn phi(&self, label: Label) -> &Array1<f64> {
        match label {
            Label::Spam => &self.phi_spam,
            Label::Ham => &self.phi_ham,
        }
    }

    /// Computes the joint log-likelihood of every message under each class.
    ///
    /// # Returns
    /// `(spam, ham)` scores, one entry per row of `x`.
    pub fn log_likelihoods(&self, x: &FeatureMatrix) -> Result<(Array1<f64>, Array1<f64>)> {
        if x.ncols() != self.num_words() {
            return Err(SpamErr::SizeMismatch {
                a: "feature columns",
                b: "model vocabulary",
                got: x.ncols(),
                expected: self.num_words(),
            });
        }

        let counts = x.to_f64();
        let spam = counts.dot(&self.log_phi_spam) + self.prior(Label::Spam).ln();
        let ham = counts.dot(&self.log_phi_ham) + self.prior(Label::Ham).ln();
        Ok((spam, ham))
    }

    /// Ranks the vocabulary by how much more likely each word is under spam than under ham.
    ///
    /// The score of word `j` is `log P(j | spam) - log P(j | ham)`. Words with equal scores keep
    /// their vocabulary order.
    ///
    /// # Returns
    /// The `k` highest scoring words, most indicative first.
    pub fn top_indicative_words(&self, vocab: &Vocabulary, k: usize) -> Result<Vec<String>> {
        if vocab.len() != self.num_words() {
            return Err(SpamErr::SizeMismatch {
                a: "vocabulary",
                b: "model vocabulary",
                got: vocab.len(),
                expected: self.num_words(),
            });
        }

        let scores = &self.log_phi_spam - &self.log_phi_ham;
        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

        Ok(order
            .into_iter()
            .take(k)
            .filter_map(|j| vocab.word(j).map(str::to_string))
            .collect())
    }

    /// Writes the model as JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string(self)?;
        fs::write(path, json).map_err(|e| SpamErr::io(path, e))
    }

    /// Reads a model written by `save`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| SpamErr::io(path, e))?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// Laplace smoothing: `(count + 1) / (total + |V|)`.
fn smoothed(counts: ArrayView1<f64>) -> Array1<f64> {
    let denom = counts.sum() + counts.len() as f64;
    counts.mapv(|c| (c + 1.0) / denom)
}

impl Classifier for NaiveBayes {
    /// Labels a message spam only if its spam score is strictly greater; ties go to ham.
    fn predict(&self, x: &FeatureMatrix) -> Result<Labels> {
        let (spam, ham) = self.log_likelihoods(x)?;
        let labels = spam.iter().zip(&ham).map(|(s, h)| {
            if s > h {
                Label::Spam
            } else {
                Label::Ham
            }
        });

        Ok(Labels::from_labels(labels))
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use ndarray::array;

    use super::*;
    use crate::metrics::{accuracy, majority_baseline};

    const TRAIN: [&str; 3] = ["free money now", "free entry win", "call me now"];

    fn labels(values: &[u8]) -> Labels {
        Labels::from_vec(values.to_vec()).unwrap()
    }

    fn fitted() -> (Vocabulary, FeatureMatrix, NaiveBayes) {
        let vocab = Vocabulary::build(TRAIN, NonZeroUsize::new(1).unwrap());
        let x = FeatureMatrix::build(&vocab, TRAIN);
        let model = NaiveBayes::fit(&x, &labels(&[1, 1, 0])).unwrap();
        (vocab, x, model)
    }

    #[test]
    fn priors_sum_to_one() {
        let (_, _, model) = fitted();

        assert_eq!(model.prior(Label::Spam), 2.0 / 3.0);
        assert_eq!(model.prior(Label::Spam) + model.prior(Label::Ham), 1.0);
    }

    #[test]
    fn smoothing_matches_hand_computation() {
        let (vocab, _, model) = fitted();
        let free = vocab.index_of("free").unwrap();
        let call = vocab.index_of("call").unwrap();

        // spam holds 6 words, ham holds 3, |V| = 7
        assert!((model.word_probability(Label::Spam, free).unwrap() - 3.0 / 13.0).abs() < 1e-12);
        assert!((model.word_probability(Label::Ham, free).unwrap() - 1.0 / 10.0).abs() < 1e-12);
        assert!((model.word_probability(Label::Spam, call).unwrap() - 1.0 / 13.0).abs() < 1e-12);
        assert!((model.word_probability(Label::Ham, call).unwrap() - 2.0 / 10.0).abs() < 1e-12);
    }

    #[test]
    fn probabilities_are_strictly_between_zero_and_one() {
        let (vocab, _, model) = fitted();

        for label in [Label::Spam, Label::Ham] {
            let total: f64 = (0..vocab.len())
                .map(|j| model.word_probability(label, j).unwrap())
                .inspect(|&p| assert!(p > 0.0 && p < 1.0, "{label}: {p}"))
                .sum();
            assert!((total - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn free_ranks_above_shared_words() {
        let (vocab, _, model) = fitted();
        let top = model.top_indicative_words(&vocab, 7).unwrap();

        assert_eq!(top.len(), 7);
        assert_eq!(top[0], "free");
        let pos = |w: &str| top.iter().position(|t| t == w).unwrap();
        assert!(pos("free") < pos("now"));
        // entry, money and win score the same, so they keep vocabulary order
        assert_eq!(&top[1..4], &["entry", "money", "win"]);
        assert_eq!(model.top_indicative_words(&vocab, 2).unwrap(), vec!["free", "entry"]);
    }

    #[test]
    fn classifies_by_log_likelihood() {
        let (vocab, _, model) = fitted();
        let x = FeatureMatrix::build(&vocab, ["free free win", "call me", "nothing known"]);

        let predicted = model.predict(&x).unwrap();
        // the last message has no known words, so the spam prior (2/3) decides
        assert_eq!(predicted.as_slice(), &[1, 0, 1]);
    }

    #[test]
    fn ties_go_to_ham() {
        let x = FeatureMatrix::from_counts(array![[1, 0], [0, 1]]);
        let model = NaiveBayes::fit(&x, &labels(&[1, 0])).unwrap();

        let equal = FeatureMatrix::from_counts(array![[1, 1], [0, 0]]);
        assert_eq!(model.predict(&equal).unwrap().as_slice(), &[0, 0]);
    }

    #[test]
    fn empty_vocabulary_predicts_majority_prior() {
        let x = FeatureMatrix::from_counts(ndarray::Array2::zeros((3, 0)));
        let model = NaiveBayes::fit(&x, &labels(&[0, 0, 1])).unwrap();

        assert_eq!(model.num_words(), 0);
        assert_eq!(model.predict(&x).unwrap().as_slice(), &[0, 0, 0]);
    }

    #[test]
    fn training_accuracy_beats_majority_baseline() {
        let train = [
            "free prize call now",
            "win free cash now",
            "claim your free prize",
            "urgent win cash",
            "are we still on for lunch",
            "see you at home",
            "call me when you are free",
            "lunch at noon?",
            "ok see you soon",
            "home now",
        ];
        let y = labels(&[1, 1, 1, 1, 0, 0, 0, 0, 0, 0]);
        let vocab = Vocabulary::build(train, NonZeroUsize::new(1).unwrap());
        let x = FeatureMatrix::build(&vocab, train);
        let model = NaiveBayes::fit(&x, &y).unwrap();

        let acc = accuracy(&model.predict(&x).unwrap(), &y).unwrap();
        assert!(acc >= majority_baseline(&y), "accuracy {acc}");
    }

    #[test]
    fn fit_rejects_missing_class() {
        let x = FeatureMatrix::from_counts(array![[1, 0], [0, 1]]);

        assert!(matches!(
            NaiveBayes::fit(&x, &labels(&[0, 0])),
            Err(SpamErr::EmptyClass { label: Label::Spam })
        ));
        assert!(matches!(
            NaiveBayes::fit(&x, &labels(&[1, 1])),
            Err(SpamErr::EmptyClass { label: Label::Ham })
        ));
    }

    #[test]
    fn fit_rejects_misaligned_or_empty_input() {
        let x = FeatureMatrix::from_counts(array![[1, 0], [0, 1]]);
        assert!(matches!(
            NaiveBayes::fit(&x, &labels(&[0, 1, 1])),
            Err(SpamErr::SizeMismatch { .. })
        ));

        let empty = FeatureMatrix::from_counts(ndarray::Array2::zeros((0, 2)));
        assert!(matches!(
            NaiveBayes::fit(&empty, &labels(&[])),
            Err(SpamErr::EmptyDataset { .. })
        ));
    }

    #[test]
    fn predict_rejects_wrong_width() {
        let (_, _, model) = fitted();
        let x = FeatureMatrix::from_counts(array![[1, 0]]);

        assert!(matches!(model.predict(&x), Err(SpamErr::SizeMismatch { .. })));
    }

    #[test]
    fn save_and_load_keep_predictions() {
        let (_, x, model) = fitted();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");

        model.save(&path).unwrap();
        let loaded = NaiveBayes::load(&path).unwrap();

        assert_eq!(model.predict(&x).unwrap(), loaded.predict(&x).unwrap());
    }
}
