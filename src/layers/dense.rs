use ndarray::prelude::*;
use ndarray_rand::rand_distr::Normal;
use ndarray_rand::RandomExt;
use rand::Rng;

use crate::error::{Error, Result};

/// A fully connected layer computing `x · W + b`.
///
/// Weights have shape `(input_dim, output_dim)`, biases are a single row
/// broadcast across the batch. The layer owns its parameters and the
/// transient state of one training step: the input cached by `forward`
/// and the gradients produced by `backward`. Both are consumed by the
/// stage that needs them, so repeating a stage without re-running its
/// predecessor is an error rather than a silent reuse of stale data.
#[derive(Debug)]
pub struct Dense {
    weights: Array2<f32>,
    biases: Array2<f32>,
    cache: Option<Array2<f32>>,
    grad_weights: Option<Array2<f32>>,
    grad_biases: Option<Array2<f32>>,
}

impl Dense {
    /// Create a layer with He-initialized weights and zero biases.
    ///
    /// Weights are drawn from a zero-mean Gaussian with variance
    /// `2 / input_dim`, which suits ReLU-following layers. The RNG is
    /// passed in rather than taken from a process-wide source; seed it
    /// (`StdRng::seed_from_u64`) for reproducible runs.
    pub fn new<R: Rng + ?Sized>(input_dim: usize, output_dim: usize, rng: &mut R) -> Self {
        let stddev = (2.0 / input_dim as f32).sqrt();
        let dist = Normal::new(0.0, stddev).expect("stddev is positive for any input_dim >= 1");
        Dense {
            weights: Array::random_using((input_dim, output_dim), dist, rng),
            biases: Array2::zeros((1, output_dim)),
            cache: None,
            grad_weights: None,
            grad_biases: None,
        }
    }

    pub fn weights(&self) -> ArrayView2<'_, f32> {
        self.weights.view()
    }

    pub fn biases(&self) -> ArrayView2<'_, f32> {
        self.biases.view()
    }

    /// Mutable access to the weights, for hand-built or loaded models.
    pub fn weights_mut(&mut self) -> ArrayViewMut2<'_, f32> {
        self.weights.view_mut()
    }

    pub fn biases_mut(&mut self) -> ArrayViewMut2<'_, f32> {
        self.biases.view_mut()
    }

    /// `x · W + b`, caching `x` for the next `backward`.
    pub fn forward(&mut self, x: ArrayView2<'_, f32>) -> Result<Array2<f32>> {
        if x.ncols() != self.weights.nrows() {
            return Err(Error::DimensionMismatch {
                layer: "Dense",
                call: "forward",
                expected: (x.nrows(), self.weights.nrows()),
                found: x.dim(),
            });
        }
        let y = x.dot(&self.weights) + &self.biases;
        self.cache = Some(x.to_owned());
        Ok(y)
    }

    /// Store `dW = xᵀ · grad` and `db = column sums of grad`, and return
    /// `grad · Wᵀ` for the preceding layer.
    ///
    /// Consumes the cached input, so a second `backward` needs a new
    /// `forward` first.
    pub fn backward(&mut self, grad: ArrayView2<'_, f32>) -> Result<Array2<f32>> {
        let x = self.cache.take().ok_or(Error::OutOfOrder {
            layer: "Dense",
            call: "backward",
            requires: "forward",
        })?;
        if grad.dim() != (x.nrows(), self.weights.ncols()) {
            return Err(Error::DimensionMismatch {
                layer: "Dense",
                call: "backward",
                expected: (x.nrows(), self.weights.ncols()),
                found: grad.dim(),
            });
        }
        self.grad_weights = Some(x.t().dot(&grad));
        self.grad_biases = Some(grad.sum_axis(Axis(0)).insert_axis(Axis(0)));
        Ok(grad.dot(&self.weights.t()))
    }

    /// `W -= lr · dW`, `b -= lr · db`, in place.
    ///
    /// Consumes the gradients from the last `backward`; calling `update`
    /// twice in a row fails rather than re-applying a stale gradient.
    pub fn update(&mut self, learning_rate: f32) -> Result<()> {
        let (dw, db) = match (self.grad_weights.take(), self.grad_biases.take()) {
            (Some(dw), Some(db)) => (dw, db),
            _ => {
                return Err(Error::OutOfOrder {
                    layer: "Dense",
                    call: "update",
                    requires: "backward",
                })
            }
        };
        self.weights.scaled_add(-learning_rate, &dw);
        self.biases.scaled_add(-learning_rate, &db);
        Ok(())
    }
}
