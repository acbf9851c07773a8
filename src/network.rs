use ndarray::prelude::*;

use crate::layers::Layer;
use crate::Result;

/// An ordered stack of layers.
///
/// `forward` runs the layers in sequence order, `backward` in reverse.
/// The network owns its layers exclusively; the `&mut` receivers rule
/// out sharing one network across threads mid-step, which the per-layer
/// caches could not survive.
#[derive(Debug, Default)]
pub struct Network {
    layers: Vec<Layer>,
}

impl Network {
    pub fn new() -> Self {
        Network::default()
    }

    /// Append a layer. Widths of consecutive layers are not checked
    /// here; a mismatched stack errors on the first `forward`.
    pub fn add(&mut self, layer: impl Into<Layer>) {
        self.layers.push(layer.into());
    }

    /// Thread a batch through every layer in order and return the final
    /// output.
    pub fn forward(&mut self, x: ArrayView2<'_, f32>) -> Result<Array2<f32>> {
        let mut out = x.to_owned();
        for layer in &mut self.layers {
            out = layer.forward(out.view())?;
        }
        Ok(out)
    }

    /// Thread a loss gradient through every layer in reverse order.
    /// Parameter gradients stay inside the layers that own them.
    pub fn backward(&mut self, grad: ArrayView2<'_, f32>) -> Result<()> {
        let mut grad = grad.to_owned();
        for layer in self.layers.iter_mut().rev() {
            grad = layer.backward(grad.view())?;
        }
        Ok(())
    }

    /// Have every layer apply its stored gradients. Each layer only
    /// touches its own state, so the traversal order does not matter.
    pub fn update(&mut self, learning_rate: f32) -> Result<()> {
        for layer in &mut self.layers {
            layer.update(learning_rate)?;
        }
        Ok(())
    }
}
