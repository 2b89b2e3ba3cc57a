//! Recurrent state carried between timesteps

use burn::tensor::backend::Backend;
use burn::tensor::{Tensor, TensorData};
use serde::{Deserialize, Serialize};

use crate::error::{CellError, Result};

/// Hidden/cell state of an LSTM cell
///
/// Both tensors have shape `[batch_size, output_size]`.
#[derive(Clone, Debug)]
pub struct LstmState<B: Backend> {
    /// Previous output (hidden) value
    pub output: Tensor<B, 2>,
    /// Previous cell value, never returned by a step
    pub cell: Tensor<B, 2>,
}

impl<B: Backend> LstmState<B> {
    pub fn new(output: Tensor<B, 2>, cell: Tensor<B, 2>) -> Self {
        Self { output, cell }
    }

    /// Zero state of shape `[batch_size, output_size]`
    pub fn zeros(batch_size: usize, output_size: usize, device: &B::Device) -> Self {
        Self {
            output: Tensor::zeros([batch_size, output_size], device),
            cell: Tensor::zeros([batch_size, output_size], device),
        }
    }

    pub fn batch_size(&self) -> usize {
        self.output.dims()[0]
    }

    pub fn output_size(&self) -> usize {
        self.output.dims()[1]
    }

    /// Detach the state from the computational graph
    pub fn detach(self) -> Self {
        Self {
            output: self.output.detach(),
            cell: self.cell.detach(),
        }
    }

    /// Copy the state into a host-side snapshot
    pub fn to_snapshot(&self) -> Result<StateSnapshot> {
        let [batch_size, output_size] = self.output.dims();
        Ok(StateSnapshot {
            batch_size,
            output_size,
            output: read_values(&self.output)?,
            cell: read_values(&self.cell)?,
        })
    }

    /// Rebuild a state from a snapshot, checking it against `output_size`
    pub fn from_snapshot(
        snapshot: &StateSnapshot,
        output_size: usize,
        device: &B::Device,
    ) -> Result<Self> {
        let expected_len = snapshot.batch_size.checked_mul(output_size);
        let mismatch = || CellError::SnapshotMismatch {
            expected_output_size: output_size,
            actual_output_size: snapshot.output_size,
            expected_len: expected_len.unwrap_or(usize::MAX),
            output_len: snapshot.output.len(),
            cell_len: snapshot.cell.len(),
        };

        let Some(expected_len) = expected_len else {
            return Err(mismatch());
        };
        if snapshot.output_size != output_size
            || snapshot.batch_size == 0
            || snapshot.output.len() != expected_len
            || snapshot.cell.len() != expected_len
        {
            return Err(mismatch());
        }

        let shape = [snapshot.batch_size, output_size];
        Ok(Self {
            output: Tensor::from_data(TensorData::new(snapshot.output.clone(), shape), device),
            cell: Tensor::from_data(TensorData::new(snapshot.cell.clone(), shape), device),
        })
    }
}

// Widened to f64 so every float backend round-trips exactly
fn read_values<B: Backend>(tensor: &Tensor<B, 2>) -> Result<Vec<f64>> {
    tensor
        .to_data()
        .convert::<f64>()
        .to_vec::<f64>()
        .map_err(|err| CellError::Data(format!("{:?}", err)))
}

/// Host-side copy of an [`LstmState`], row-major
///
/// Values are stored as `f64`, which holds any backend float element exactly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub batch_size: usize,
    pub output_size: usize,
    pub output: Vec<f64>,
    pub cell: Vec<f64>,
}

/// Lifecycle of the state held by a stateful cell
#[derive(Clone, Debug)]
pub enum StateSlot<B: Backend> {
    /// Constructed, `reset_state` not called yet
    Uninitialized,
    /// State allocated and carried between steps
    Ready(LstmState<B>),
}

impl<B: Backend> Default for StateSlot<B> {
    fn default() -> Self {
        StateSlot::Uninitialized
    }
}

impl<B: Backend> StateSlot<B> {
    pub fn is_ready(&self) -> bool {
        matches!(self, StateSlot::Ready(_))
    }

    pub fn as_ready(&self) -> Result<&LstmState<B>> {
        match self {
            StateSlot::Ready(state) => Ok(state),
            StateSlot::Uninitialized => Err(CellError::StateNotReady),
        }
    }
}
