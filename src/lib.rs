//! SMS spam classification with bag-of-words features.
//!
//! A vocabulary is built from the training messages, every split is turned into a word-count
//! matrix over it, and two classifiers are fitted on the training matrix: a multinomial Naive
//! Bayes with Laplace smoothing, and a Gaussian kernel SVM whose radius is chosen on the
//! validation split.

pub mod artifacts;
pub mod classifier;
pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod naive_bayes;
pub mod pipeline;
pub mod svm;
pub mod text;

pub use classifier::Classifier;
pub use config::{PipelineConfig, SvmConfig};
pub use error::{Result, SpamErr};
pub use naive_bayes::NaiveBayes;
pub use pipeline::{run, Report};
