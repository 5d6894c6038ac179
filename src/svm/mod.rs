//! Gaussian kernel SVM and kernel radius selection.

mod kernel;
mod model;
mod selection;

pub use kernel::GaussianKernel;
pub use model::Svm;
pub use selection::{best_candidate, select_radius, RadiusScore, RadiusSelection};
