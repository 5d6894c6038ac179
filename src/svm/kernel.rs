use ndarray::{Array1, Array2, ArrayView2, Axis};

use crate::{Result, SpamErr};

/// Radial basis kernel `exp(-||a - b||^2 / (2 r^2))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianKernel {
    radius: f64,
}

impl GaussianKernel {
    /// Returns a new `GaussianKernel`.
    ///
    /// # Errors
    /// `SpamErr::InvalidRadius` unless `radius` is positive and finite.
    pub fn new(radius: f64) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SpamErr::InvalidRadius { radius });
        }

        Ok(Self { radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Evaluates the kernel between every row of `a` and every row of `b`.
    ///
    /// # Returns
    /// A matrix of shape `(a.nrows(), b.nrows())`.
    pub fn matrix(&self, a: ArrayView2<f64>, b: ArrayView2<f64>) -> Array2<f64> {
        let sq_a = squared_norms(a);
        let sq_b = squared_norms(b);
        let gram = a.dot(&b.t());
        let scale = 2.0 * self.radius * self.radius;

        Array2::from_shape_fn(gram.dim(), |(i, j)| {
            // rounding can push the distance slightly below zero
            let dist = (sq_a[i] + sq_b[j] - 2.0 * gram[[i, j]]).max(0.0);
            (-dist / scale).exp()
        })
    }
}

fn squared_norms(x: ArrayView2<f64>) -> Array1<f64> {
    x.map_axis(Axis(1), |row| row.dot(&row))
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn rejects_non_positive_radius() {
        assert!(GaussianKernel::new(1.0).is_ok());
        for r in [0.0, -1.0, f64::INFINITY, f64::NAN] {
            assert!(matches!(
                GaussianKernel::new(r),
                Err(SpamErr::InvalidRadius { .. })
            ));
        }
    }

    #[test]
    fn matches_closed_form() {
        let kernel = GaussianKernel::new(1.0).unwrap();
        let a = array![[0.0, 0.0], [1.0, 1.0]];
        let b = array![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]];

        let k = kernel.matrix(a.view(), b.view());
        assert_eq!(k.dim(), (2, 3));

        let expected = array![
            [1.0, (-0.5f64).exp(), (-1.0f64).exp()],
            [(-1.0f64).exp(), (-0.5f64).exp(), 1.0]
        ];
        for (got, want) in k.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-12, "{got} != {want}");
        }
    }

    #[test]
    fn wider_radius_means_more_similar() {
        let a = array![[0.0, 0.0]];
        let b = array![[1.0, 1.0]];

        let narrow = GaussianKernel::new(0.1).unwrap().matrix(a.view(), b.view());
        let wide = GaussianKernel::new(10.0).unwrap().matrix(a.view(), b.view());
        assert!(narrow[[0, 0]] < wide[[0, 0]]);
    }
}
