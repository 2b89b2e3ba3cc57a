//! Parameter initialization for the LSTM projections
//!
//! The default scheme draws every weight and bias from
//! `U(-1/√output_size, 1/√output_size)`. It is provisional: any Burn
//! [`Initializer`] can be passed through [`LstmCellConfig`](crate::cells::LstmCellConfig)
//! or applied later with [`LstmCell::reset_parameters`](crate::cells::LstmCell::reset_parameters).

use burn::nn::{Initializer, Linear, LinearConfig};
use burn::tensor::backend::Backend;

/// Uniform initializer scaled by the output width.
///
/// # Arguments
/// * `output_size` - Width of the hidden/cell state, must be non-zero
pub fn uniform_fan_out(output_size: usize) -> Initializer {
    let bound = 1.0 / (output_size as f64).sqrt();
    Initializer::Uniform {
        min: -bound,
        max: bound,
    }
}

/// Build one affine projection `d_input -> 4 * output_size`.
pub(crate) fn gate_projection<B: Backend>(
    d_input: usize,
    output_size: usize,
    bias: bool,
    initializer: &Initializer,
    device: &B::Device,
) -> Linear<B> {
    LinearConfig::new(d_input, 4 * output_size)
        .with_bias(bias)
        .with_initializer(initializer.clone())
        .init(device)
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray<f32>;

    #[test]
    fn test_uniform_fan_out_bounds() {
        match uniform_fan_out(4) {
            Initializer::Uniform { min, max } => {
                assert!((min + 0.5).abs() < 1e-12);
                assert!((max - 0.5).abs() < 1e-12);
            }
            other => panic!("unexpected initializer: {:?}", other),
        }
    }

    #[test]
    fn test_gate_projection_weights_within_bounds() {
        let device = Default::default();
        let init = uniform_fan_out(16);
        let linear = gate_projection::<TestBackend>(8, 16, true, &init, &device);

        assert_eq!(linear.weight.val().dims(), [8, 64]);

        let weights = linear.weight.val().into_data().to_vec::<f32>().unwrap();
        assert!(weights.iter().all(|w| w.abs() <= 0.25 + 1e-6));

        let bias = linear
            .bias
            .as_ref()
            .expect("bias requested")
            .val()
            .into_data()
            .to_vec::<f32>()
            .unwrap();
        assert_eq!(bias.len(), 64);
        assert!(bias.iter().all(|b| b.abs() <= 0.25 + 1e-6));
    }

    #[test]
    fn test_gate_projection_without_bias() {
        let device = Default::default();
        let linear =
            gate_projection::<TestBackend>(3, 2, false, &Initializer::Zeros, &device);
        assert!(linear.bias.is_none());
    }
}
