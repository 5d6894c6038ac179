use crate::{data::Labels, text::FeatureMatrix, Result};

/// A fitted binary classifier over word-count features.
///
/// Implementations are read-only after fitting; predicting never changes the model.
pub trait Classifier {
    /// Predicts one label per row of `x`.
    ///
    /// # Errors
    /// Returns `SpamErr::SizeMismatch` if `x` doesn't have as many columns as the model was
    /// fitted with.
    fn predict(&self, x: &FeatureMatrix) -> Result<Labels>;
}
