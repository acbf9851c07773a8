use ndarray::prelude::*;
use ndarray::Zip;

use crate::error::{Error, Result};

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Rectified linear unit: elementwise `max(0, x)`.
#[derive(Debug, Default)]
pub struct Relu {
    cache: Option<Array2<f32>>,
}

impl Relu {
    pub fn new() -> Self {
        Relu::default()
    }

    pub fn forward(&mut self, x: ArrayView2<'_, f32>) -> Result<Array2<f32>> {
        let y = x.mapv(|v| v.max(0.0));
        self.cache = Some(x.to_owned());
        Ok(y)
    }

    /// Passes the gradient through where the cached input was positive.
    /// At exactly zero the sub-gradient is taken to be 0.
    pub fn backward(&mut self, grad: ArrayView2<'_, f32>) -> Result<Array2<f32>> {
        let x = self.cache.take().ok_or(Error::OutOfOrder {
            layer: "Relu",
            call: "backward",
            requires: "forward",
        })?;
        if grad.dim() != x.dim() {
            return Err(Error::DimensionMismatch {
                layer: "Relu",
                call: "backward",
                expected: x.dim(),
                found: grad.dim(),
            });
        }
        Ok(Zip::from(&x)
            .and(grad)
            .map_collect(|&x, &g| if x > 0.0 { g } else { 0.0 }))
    }
}

/// The logistic function, elementwise `1 / (1 + e^{-x})`.
#[derive(Debug, Default)]
pub struct Sigmoid {
    cache: Option<Array2<f32>>,
}

impl Sigmoid {
    pub fn new() -> Self {
        Sigmoid::default()
    }

    pub fn forward(&mut self, x: ArrayView2<'_, f32>) -> Result<Array2<f32>> {
        let y = x.mapv(sigmoid);
        self.cache = Some(x.to_owned());
        Ok(y)
    }

    /// `grad * s * (1 - s)`, with `s` recomputed from the cached input
    /// rather than saved from `forward`. Equivalent as long as each
    /// `backward` is preceded by its own `forward`, which the cache
    /// consumption enforces.
    pub fn backward(&mut self, grad: ArrayView2<'_, f32>) -> Result<Array2<f32>> {
        let x = self.cache.take().ok_or(Error::OutOfOrder {
            layer: "Sigmoid",
            call: "backward",
            requires: "forward",
        })?;
        if grad.dim() != x.dim() {
            return Err(Error::DimensionMismatch {
                layer: "Sigmoid",
                call: "backward",
                expected: x.dim(),
                found: grad.dim(),
            });
        }
        Ok(Zip::from(&x).and(grad).map_collect(|&x, &g| {
            let s = sigmoid(x);
            g * s * (1.0 - s)
        }))
    }
}
