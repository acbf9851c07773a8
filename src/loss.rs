//! Loss functions.

use ndarray::prelude::*;

/// Mean squared error between targets `y` and predictions `yh`.
pub fn mse(y: ArrayView2<'_, f32>, yh: ArrayView2<'_, f32>) -> f32 {
    let diff = &yh - &y;
    diff.mapv(|d| d * d).mean().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mse_of_known_values() {
        let y = array![[0.0f32, 1.0], [1.0, 0.0]];
        let yh = array![[0.0f32, 0.5], [0.5, 0.0]];
        assert!((mse(y.view(), yh.view()) - 0.125).abs() < 1e-6);
    }

    #[test]
    fn mse_is_zero_for_exact_predictions() {
        let y = array![[0.25f32], [0.75]];
        assert_eq!(mse(y.view(), y.view()), 0.0);
    }
}
