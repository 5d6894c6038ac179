use log::{info, warn};
use ndarray::Array2;

use crate::{
    classifier::Classifier,
    config::PipelineConfig,
    data::{texts, Labels, Message, Splits},
    metrics::accuracy,
    naive_bayes::NaiveBayes,
    svm::{select_radius, RadiusSelection},
    text::{FeatureMatrix, Vocabulary},
    Result,
};

/// Everything a run produces.
#[derive(Debug, Clone)]
pub struct Report {
    pub vocabulary: Vocabulary,
    /// The first rows of the training matrix.
    pub sample_matrix: Array2<u32>,
    pub naive_bayes: NaiveBayes,
    /// Naive Bayes labels for the test split, in message order.
    pub nb_predictions: Labels,
    pub nb_accuracy: f64,
    pub top_words: Vec<String>,
    pub radius_selection: RadiusSelection,
    pub svm_accuracy: f64,
}

/// Word counts and labels of one split.
struct Encoded {
    x: FeatureMatrix,
    y: Labels,
}

impl Encoded {
    fn new(vocab: &Vocabulary, messages: &[Message]) -> Self {
        Self {
            x: FeatureMatrix::build(vocab, texts(messages)),
            y: Labels::from_messages(messages),
        }
    }
}

/// Builds the vocabulary on the training split, fits Naive Bayes and the SVM, and evaluates both
/// on the test split.
///
/// # Errors
/// Fails if the config is invalid, the training split lacks a class, or any model can't be fitted.
pub fn run(config: &PipelineConfig, splits: &Splits) -> Result<Report> {
    config.validate()?;

    let vocabulary = Vocabulary::build(texts(&splits.train), config.min_df);
    info!(
        "vocabulary has {} words (min_df = {})",
        vocabulary.len(),
        config.min_df
    );
    if vocabulary.is_empty() {
        warn!("empty vocabulary, every message will get the same label");
    }

    let train = Encoded::new(&vocabulary, &splits.train);
    let val = Encoded::new(&vocabulary, &splits.val);
    let test = Encoded::new(&vocabulary, &splits.test);
    info!(
        "feature matrices: train {}x{}, val {}x{}, test {}x{}",
        train.x.nrows(),
        train.x.ncols(),
        val.x.nrows(),
        val.x.ncols(),
        test.x.nrows(),
        test.x.ncols()
    );

    let naive_bayes = NaiveBayes::fit(&train.x, &train.y)?;
    let nb_predictions = naive_bayes.predict(&test.x)?;
    let nb_accuracy = accuracy(&nb_predictions, &test.y)?;
    info!("naive bayes test accuracy: {nb_accuracy:.4}");

    let top_words = naive_bayes.top_indicative_words(&vocabulary, config.top_k)?;
    info!("top {} indicative words: {top_words:?}", config.top_k);

    let radius_selection = select_radius(
        (&train.x, &train.y),
        (&val.x, &val.y),
        &config.radii,
        &config.svm,
    )?;
    info!(
        "selected svm radius {} (validation accuracy {:.4})",
        radius_selection.best.radius, radius_selection.best.accuracy
    );

    let svm_accuracy = accuracy(&radius_selection.model.predict(&test.x)?, &test.y)?;
    info!("svm test accuracy: {svm_accuracy:.4}");

    Ok(Report {
        sample_matrix: train.x.head(config.sample_rows),
        vocabulary,
        naive_bayes,
        nb_predictions,
        nb_accuracy,
        top_words,
        radius_selection,
        svm_accuracy,
    })
}
