//! The layer variants and their shared capability surface.
//!
//! Every layer is a batch-in, batch-out transform that can push a loss
//! gradient back through itself. Axis 0 is always the mini-batch axis.
//! Each layer caches what its own `backward` needs during `forward`, so
//! the three calls are coupled: `forward`, then `backward`, then (for
//! layers with parameters) `update`. Calls out of that order fail with
//! [`Error::OutOfOrder`](crate::Error::OutOfOrder) instead of silently
//! reusing stale state.

mod activation;
mod dense;

pub use activation::{Relu, Sigmoid};
pub use dense::Dense;

use ndarray::prelude::*;

use crate::Result;

/// A closed set of layer variants. Dispatch is a plain `match`, so the
/// full set of behaviors is auditable here.
#[derive(Debug)]
pub enum Layer {
    Dense(Dense),
    Relu(Relu),
    Sigmoid(Sigmoid),
}

impl Layer {
    /// Compute this layer's output for a `(batch, width)` input, caching
    /// whatever `backward` will need.
    pub fn forward(&mut self, x: ArrayView2<'_, f32>) -> Result<Array2<f32>> {
        match self {
            Layer::Dense(layer) => layer.forward(x),
            Layer::Relu(layer) => layer.forward(x),
            Layer::Sigmoid(layer) => layer.forward(x),
        }
    }

    /// Given ∂L/∂output for the batch last seen by `forward`, store any
    /// parameter gradients and return ∂L/∂input.
    pub fn backward(&mut self, grad: ArrayView2<'_, f32>) -> Result<Array2<f32>> {
        match self {
            Layer::Dense(layer) => layer.backward(grad),
            Layer::Relu(layer) => layer.backward(grad),
            Layer::Sigmoid(layer) => layer.backward(grad),
        }
    }

    /// Apply the parameter gradients stored by the last `backward`.
    /// A no-op for activations, which have no parameters.
    pub fn update(&mut self, learning_rate: f32) -> Result<()> {
        match self {
            Layer::Dense(layer) => layer.update(learning_rate),
            Layer::Relu(_) | Layer::Sigmoid(_) => Ok(()),
        }
    }
}

impl From<Dense> for Layer {
    fn from(layer: Dense) -> Self {
        Layer::Dense(layer)
    }
}

impl From<Relu> for Layer {
    fn from(layer: Relu) -> Self {
        Layer::Relu(layer)
    }
}

impl From<Sigmoid> for Layer {
    fn from(layer: Sigmoid) -> Self {
        Layer::Sigmoid(layer)
    }
}
