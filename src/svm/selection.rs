use log::debug;
use serde::Serialize;

use super::Svm;
use crate::{
    classifier::Classifier, config::SvmConfig, data::Labels, metrics::accuracy,
    text::FeatureMatrix, Result, SpamErr,
};

/// Validation accuracy reached by one radius candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadiusScore {
    pub radius: f64,
    pub accuracy: f64,
}

/// Outcome of a radius search.
#[derive(Debug, Clone)]
pub struct RadiusSelection {
    /// The winning candidate.
    pub best: RadiusScore,
    /// Every candidate in the order it was tried.
    pub scores: Vec<RadiusScore>,
    /// The model fitted with the winning radius.
    pub model: Svm,
}

/// Returns the index of the candidate with the highest accuracy; on ties the earliest one wins.
pub fn best_candidate(scores: &[RadiusScore]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, score) in scores.iter().enumerate() {
        match best {
            Some(b) if scores[b].accuracy >= score.accuracy => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Picks the kernel radius that maximizes accuracy on the validation set.
///
/// One model is fitted per candidate on the training set; the model of the winner is kept so it
/// can be evaluated on the test set without refitting.
///
/// # Arguments
/// * `train` - Training features and labels.
/// * `val` - Validation features and labels.
/// * `radii` - The candidates, in order of preference on ties.
/// * `config` - Solver settings shared by every fit.
///
/// # Errors
/// `SpamErr::NoRadiusCandidates` if `radii` is empty, or any error from fitting and predicting.
pub fn select_radius(
    train: (&FeatureMatrix, &Labels),
    val: (&FeatureMatrix, &Labels),
    radii: &[f64],
    config: &SvmConfig,
) -> Result<RadiusSelection> {
    let (train_x, train_y) = train;
    let (val_x, val_y) = val;

    let mut scores = Vec::with_capacity(radii.len());
    let mut models = Vec::with_capacity(radii.len());

    for &radius in radii {
        let model = Svm::fit(train_x, train_y, radius, config)?;
        let score = RadiusScore {
            radius,
            accuracy: accuracy(&model.predict(val_x)?, val_y)?,
        };
        debug!("radius {radius}: validation accuracy {:.4}", score.accuracy);

        scores.push(score);
        models.push(model);
    }

    let i = best_candidate(&scores).ok_or(SpamErr::NoRadiusCandidates)?;
    Ok(RadiusSelection {
        best: scores[i],
        model: models.swap_remove(i),
        scores,
    })
}
