use std::{fs, num::NonZeroUsize, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Result, SpamErr};

const DEFAULT_MIN_DF: NonZeroUsize = NonZeroUsize::new(5).unwrap();
const DEFAULT_PASSES: NonZeroUsize = NonZeroUsize::new(10).unwrap();

/// Settings of a full train/evaluate run.
///
/// Every field has a default, so a JSON config only needs the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Minimum number of training messages a word must appear in to enter the vocabulary.
    pub min_df: NonZeroUsize,
    /// Number of indicative words to report.
    pub top_k: usize,
    /// Number of training matrix rows kept in the sample artifact.
    pub sample_rows: usize,
    /// Kernel radii tried during SVM model selection, in order.
    pub radii: Vec<f64>,
    pub svm: SvmConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_df: DEFAULT_MIN_DF,
            top_k: 5,
            sample_rows: 100,
            radii: vec![0.01, 0.1, 1.0, 10.0],
            svm: SvmConfig::default(),
        }
    }
}

/// Solver settings of the kernel SVM.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvmConfig {
    /// Seed of the sample picking RNG.
    pub seed: u64,
    /// Number of passes over the training set; the solver takes `passes * n` steps.
    pub passes: NonZeroUsize,
    /// Regularization strength, divided by the training set size before use.
    pub regularization: f64,
}

impl Default for SvmConfig {
    fn default() -> Self {
        Self {
            seed: 123,
            passes: DEFAULT_PASSES,
            regularization: 1.0 / 64.0,
        }
    }
}

impl PipelineConfig {
    /// Reads a config from a JSON file and validates it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| SpamErr::io(path, e))?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the values serde can't.
    ///
    /// # Errors
    /// `SpamErr::InvalidConfig` if there are no radii, a radius isn't positive and finite, or the
    /// regularization isn't positive and finite.
    pub fn validate(&self) -> Result<()> {
        if self.radii.is_empty() {
            return Err(SpamErr::InvalidConfig(
                "at least one kernel radius is required".into(),
            ));
        }

        if let Some(r) = self.radii.iter().find(|r| !(r.is_finite() && **r > 0.0)) {
            return Err(SpamErr::InvalidConfig(format!(
                "kernel radius must be positive and finite, got {r}"
            )));
        }

        let reg = self.svm.regularization;
        if !(reg.is_finite() && reg > 0.0) {
            return Err(SpamErr::InvalidConfig(format!(
                "svm regularization must be positive and finite, got {reg}"
            )));
        }

        Ok(())
    }
}
