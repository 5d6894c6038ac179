use ndarray::{Array1, Array2};
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::GaussianKernel;
use crate::{
    classifier::Classifier,
    config::SvmConfig,
    data::{Label, Labels},
    text::FeatureMatrix,
    Result, SpamErr,
};

/// A kernel SVM fitted on word presence features.
///
/// The decision value of a message `x` is `sum_i K(x, x_i) * alpha_i` over the training
/// messages `x_i`; positive values are spam.
#[derive(Debug, Clone)]
pub struct Svm {
    kernel: GaussianKernel,
    support: Array2<f64>,
    alpha: Array1<f64>,
}

impl Svm {
    /// Fits the SVM with stochastic sub-gradient descent on the regularized hinge loss.
    ///
    /// Each step picks a training message with a RNG seeded from `config`, so the same inputs
    /// always produce the same model. The returned coefficients are the average over all steps.
    ///
    /// # Arguments
    /// * `x` - Word counts of the training messages; only presence is used.
    /// * `y` - Labels aligned with the rows of `x`.
    /// * `radius` - The kernel radius.
    /// * `config` - Solver settings.
    ///
    /// # Errors
    /// * `SpamErr::InvalidRadius` if `radius` isn't positive and finite.
    /// * `SpamErr::SizeMismatch` if `x` and `y` have a different number of messages.
    /// * `SpamErr::EmptyDataset` if there are no training messages.
    pub fn fit(x: &FeatureMatrix, y: &Labels, radius: f64, config: &SvmConfig) -> Result<Self> {
        let kernel = GaussianKernel::new(radius)?;

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
        let signs: Array1<f64> = y
            .iter()
            .map(|label| match label {
                Label::Spam => 1.0,
                Label::Ham => -1.0,
            })
            .collect();

        let support = x.binarized();
        let k = kernel.matrix(support.view(), support.view());
        let lambda = config.regularization / n as f64;

        let mut alpha = Array1::<f64>::zeros(n);
        let mut alpha_sum = Array1::<f64>::zeros(n);
        let mut rng = StdRng::seed_from_u64(config.seed);
        let steps = config.passes.get() * n;

        for t in 0..steps {
            let i = rng.random_range(0..n);
            // K is symmetric, so row i doubles as column i
            let k_i = k.row(i);
            let margin = signs[i] * k_i.dot(&alpha);

            let mut grad = &k_i * (n as f64 * lambda * alpha[i]);
            if margin < 1.0 {
                grad.scaled_add(-signs[i], &k_i);
            }

            alpha.scaled_add(-1.0 / ((t + 1) as f64).sqrt(), &grad);
            alpha_sum += &alpha;
        }

        Ok(Self {
            kernel,
            support,
            alpha: alpha_sum / steps as f64,
        })
    }

    pub fn radius(&self) -> f64 {
        self.kernel.radius()
    }

    /// Computes the signed decision value of every row of `x`.
    pub fn decision_function(&self, x: &FeatureMatrix) -> Result<Array1<f64>> {
        if x.ncols() != self.support.ncols() {
            return Err(SpamErr::SizeMismatch {
                a: "feature columns",
                b: "model vocabulary",
                got: x.ncols(),
                expected: self.support.ncols(),
            });
        }

        let presence = x.binarized();
        let k = self.kernel.matrix(presence.view(), self.support.view());
        Ok(k.dot(&self.alpha))
    }
}

impl Classifier for Svm {
    fn predict(&self, x: &FeatureMatrix) -> Result<Labels> {
        let scores = self.decision_function(x)?;
        let labels = scores.iter().map(|&s| {
            if s > 0.0 {
                Label::Spam
            } else {
                Label::Ham
            }
        });

        Ok(Labels::from_labels(labels))
    }
}
