use log::info;
use ndarray::prelude::*;

use crate::error::Error;
use crate::loss::mse;
use crate::network::Network;
use crate::Result;

/// Mini-batch gradient descent over a fixed epoch count.
///
/// The gradient fed into the network each step is the raw residual
/// `predictions - batch_y`, without the conventional `2 / batch_size`
/// factor of the MSE derivative. The missing constant folds into the
/// effective learning rate; keep that in mind when porting
/// hyperparameters from other implementations.
#[derive(Debug, Clone)]
pub struct Trainer {
    pub epochs: usize,
    pub batch_size: usize,
    pub learning_rate: f32,
    pub verbose: bool,
}

impl Default for Trainer {
    fn default() -> Self {
        Trainer {
            epochs: 1000,
            batch_size: 32,
            learning_rate: 0.1,
            verbose: false,
        }
    }
}

impl Trainer {
    /// Train `net` on `(x, y)` for the configured number of epochs.
    ///
    /// Batches are contiguous row slices of the training set; the last
    /// batch of an epoch may be short. With `verbose` set, every 100th
    /// epoch recomputes full-dataset predictions and reports the MSE
    /// through the `log` facade.
    ///
    /// There are no numeric-health checks: if training diverges, the
    /// NaN/Inf shows up in the loss and predictions, not as an error.
    pub fn fit(
        &self,
        net: &mut Network,
        x: ArrayView2<'_, f32>,
        y: ArrayView2<'_, f32>,
    ) -> Result<()> {
        assert!(self.batch_size > 0, "batch_size must be positive");
        let m = x.nrows();
        if y.nrows() != m {
            return Err(Error::DimensionMismatch {
                layer: "Trainer",
                call: "fit",
                expected: (m, y.ncols()),
                found: y.dim(),
            });
        }

        for epoch in 0..self.epochs {
            let mut i = 0;
            while i < m {
                let end = (i + self.batch_size).min(m);
                let batch_x = x.slice(s![i..end, ..]);
                let batch_y = y.slice(s![i..end, ..]);

                let predictions = net.forward(batch_x)?;
                let grad = &predictions - &batch_y;
                net.backward(grad.view())?;
                net.update(self.learning_rate)?;

                i = end;
            }

            if self.verbose && epoch % 100 == 0 {
                let predictions = net.forward(x)?;
                info!("epoch {epoch}: mse = {:.4}", mse(y, predictions.view()));
            }
        }
        Ok(())
    }

    /// Class prediction: the index of the largest value in each output
    /// row.
    ///
    /// No softmax is applied; the final layer's output is taken as class
    /// scores as-is. Ties resolve to the lowest index.
    pub fn predict(&self, net: &mut Network, x: ArrayView2<'_, f32>) -> Result<Array1<usize>> {
        let out = net.forward(x)?;
        Ok(out
            .rows()
            .into_iter()
            .map(|row| {
                let mut best = 0;
                for (j, &v) in row.iter().enumerate() {
                    if v > row[best] {
                        best = j;
                    }
                }
                best
            })
            .collect())
    }
}
