use burn::config::Config;
use burn::module::Module;
use burn::nn::{Initializer, Linear};
use burn::tensor::activation;
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

use super::state::LstmState;
use crate::error::CellError;
use crate::init::{gate_projection, uniform_fan_out};

/// Configuration for [`LstmCell`]
#[derive(Config, Debug)]
pub struct LstmCellConfig {
    /// Size of the input features
    pub input_size: usize,
    /// Size of the output (hidden) and cell state
    pub output_size: usize,
    /// Whether both projections carry a bias
    #[config(default = true)]
    pub bias: bool,
    /// Weight initializer, `None` selects [`uniform_fan_out`]
    pub initializer: Option<Initializer>,
}

impl LstmCellConfig {
    /// Initialize a new LSTM cell
    ///
    /// # Errors
    /// [`CellError::InvalidConfig`] if either size is zero.
    pub fn init<B: Backend>(&self, device: &B::Device) -> crate::error::Result<LstmCell<B>> {
        if self.input_size == 0 {
            return Err(CellError::InvalidConfig("input_size must be positive".into()));
        }
        if self.output_size == 0 {
            return Err(CellError::InvalidConfig("output_size must be positive".into()));
        }

        let initializer = self
            .initializer
            .clone()
            .unwrap_or_else(|| uniform_fan_out(self.output_size));

        tracing::debug!(
            input_size = self.input_size,
            output_size = self.output_size,
            bias = self.bias,
            "initializing lstm cell"
        );

        Ok(LstmCell {
            input_size: self.input_size,
            output_size: self.output_size,
            proj_x: gate_projection(
                self.input_size,
                self.output_size,
                self.bias,
                &initializer,
                device,
            ),
            proj_h: gate_projection(
                self.output_size,
                self.output_size,
                self.bias,
                &initializer,
                device,
            ),
        })
    }
}

/// Activated gates and candidate pre-activation of one timestep
///
/// All tensors have shape `[batch_size, output_size]`.
#[derive(Clone, Debug)]
pub struct LstmGates<B: Backend> {
    /// Candidate cell value before `tanh`
    pub candidate: Tensor<B, 2>,
    pub input_gate: Tensor<B, 2>,
    pub forget_gate: Tensor<B, 2>,
    pub output_gate: Tensor<B, 2>,
}

/// Single-timestep LSTM cell
///
/// Implements the recurrence (Graves' notation, `a` before and `b` after activation):
/// - a = W_x @ x + b_x + W_h @ h + b_h
/// - [a_c | a_gates] = a, widths (output_size, 3 * output_size)
/// - [i | f | o] = sigmoid(a_gates)
/// - c' = i * tanh(a_c) + f * c
/// - h' = o * tanh(c')
///
/// The cell itself is stateless; state is threaded through [`LstmCell::forward`]
/// or held by a [`StatefulLstmCell`](super::StatefulLstmCell).
#[derive(Module, Debug)]
pub struct LstmCell<B: Backend> {
    input_size: usize,
    output_size: usize,
    proj_x: Linear<B>, // Maps input to 4 * output_size
    proj_h: Linear<B>, // Maps previous output to 4 * output_size
}

impl<B: Backend> LstmCell<B> {
    /// Create a new LSTM cell with the default initialization and bias enabled
    ///
    /// # Errors
    /// [`CellError::InvalidConfig`] if either size is zero.
    pub fn new(
        input_size: usize,
        output_size: usize,
        device: &B::Device,
    ) -> crate::error::Result<Self> {
        LstmCellConfig::new(input_size, output_size).init(device)
    }

    /// Get the input size
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Get the output size
    pub fn output_size(&self) -> usize {
        self.output_size
    }

    /// Whether the projections carry a bias
    pub fn has_bias(&self) -> bool {
        self.proj_x.bias.is_some()
    }

    /// Input projection, `input_size -> 4 * output_size`
    pub fn proj_x(&self) -> &Linear<B> {
        &self.proj_x
    }

    /// Recurrent projection, `output_size -> 4 * output_size`
    pub fn proj_h(&self) -> &Linear<B> {
        &self.proj_h
    }

    /// Device holding the cell parameters
    pub fn device(&self) -> B::Device {
        self.proj_x.weight.device()
    }

    /// Re-draw every weight and bias with `initializer`
    pub fn reset_parameters(&mut self, initializer: &Initializer) {
        let device = self.device();
        let bias = self.has_bias();

        tracing::debug!(output_size = self.output_size, ?initializer, "resetting parameters");

        self.proj_x =
            gate_projection(self.input_size, self.output_size, bias, initializer, &device);
        self.proj_h =
            gate_projection(self.output_size, self.output_size, bias, initializer, &device);
    }

    /// Compute the gates for one timestep
    ///
    /// # Arguments
    /// * `input` - Input tensor of shape `[batch_size, input_size]`
    /// * `prev_output` - Previous output of shape `[batch_size, output_size]`
    pub fn gates(&self, input: Tensor<B, 2>, prev_output: Tensor<B, 2>) -> LstmGates<B> {
        let a = self.proj_x.forward(input) + self.proj_h.forward(prev_output);

        let candidate = a.clone().narrow(1, 0, self.output_size);
        let gates = activation::sigmoid(a.narrow(1, self.output_size, 3 * self.output_size));

        // Fixed order: input, forget, output
        let chunks = gates.chunk(3, 1);

        LstmGates {
            candidate,
            input_gate: chunks[0].clone(),
            forget_gate: chunks[1].clone(),
            output_gate: chunks[2].clone(),
        }
    }

    /// Perform one timestep
    ///
    /// # Arguments
    /// * `input` - Input tensor of shape `[batch_size, input_size]`
    /// * `state` - Previous state, each tensor of shape `[batch_size, output_size]`
    ///
    /// # Returns
    /// The new state; its `output` is the value exposed to callers.
    pub fn forward(&self, input: Tensor<B, 2>, state: LstmState<B>) -> LstmState<B> {
        let LstmState {
            output: prev_output,
            cell: prev_cell,
        } = state;

        let LstmGates {
            candidate,
            input_gate,
            forget_gate,
            output_gate,
        } = self.gates(input, prev_output);

        // c' = i * tanh(a_c) + f * c
        let cell = input_gate * candidate.tanh() + forget_gate * prev_cell;

        // h' = o * tanh(c')
        let output = output_gate * cell.clone().tanh();

        LstmState { output, cell }
    }
}
