use crate::{
    data::{Label, Labels},
    Result, SpamErr,
};

/// Fraction of predictions that match the true labels.
///
/// # Returns
/// The accuracy in `[0, 1]`, `0.0` for empty inputs, or an error if the lengths differ.
pub fn accuracy(predicted: &Labels, truth: &Labels) -> Result<f64> {
    if predicted.len() != truth.len() {
        return Err(SpamErr::SizeMismatch {
            a: "predictions",
            b: "labels",
            got: predicted.len(),
            expected: truth.len(),
        });
    }

    if truth.is_empty() {
        return Ok(0.0);
    }

    let hits = predicted
        .as_slice()
        .iter()
        .zip(truth.as_slice())
        .filter(|(p, t)| p == t)
        .count();

    Ok(hits as f64 / truth.len() as f64)
}

/// Accuracy of always predicting the most frequent class of `labels` on `labels` itself.
pub fn majority_baseline(labels: &Labels) -> f64 {
    if labels.is_empty() {
        return 0.0;
    }

    let spam = labels.count(Label::Spam);
    let majority = spam.max(labels.len() - spam);
    majority as f64 / labels.len() as f64
}
