//! LSTM cell that carries its own state between calls
//!
//! [`StatefulLstmCell`] wraps an [`LstmCell`] with a [`StateSlot`]. The slot
//! starts out [`StateSlot::Uninitialized`]; [`StatefulLstmCell::reset_state`]
//! (or [`StatefulLstmCell::restore`]) moves it to [`StateSlot::Ready`], and
//! every [`StatefulLstmCell::step`] replaces the carried state in place.

use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

use super::lstm_cell::LstmCell;
use super::state::{LstmState, StateSlot, StateSnapshot};
use crate::error::{CellError, Result};

#[derive(Debug)]
pub struct StatefulLstmCell<B: Backend> {
    cell: LstmCell<B>,
    slot: StateSlot<B>,
    steps_since_reset: usize,
}

impl<B: Backend> StatefulLstmCell<B> {
    /// Wrap a cell; state must be reset before the first step
    pub fn new(cell: LstmCell<B>) -> Self {
        Self {
            cell,
            slot: StateSlot::Uninitialized,
            steps_since_reset: 0,
        }
    }

    pub fn cell(&self) -> &LstmCell<B> {
        &self.cell
    }

    /// Mutable access to the parameters, e.g. for `reset_parameters`
    pub fn cell_mut(&mut self) -> &mut LstmCell<B> {
        &mut self.cell
    }

    pub fn into_inner(self) -> LstmCell<B> {
        self.cell
    }

    pub fn is_ready(&self) -> bool {
        self.slot.is_ready()
    }

    /// Carried state, `None` before the first reset
    pub fn state(&self) -> Option<&LstmState<B>> {
        self.slot.as_ready().ok()
    }

    pub fn steps_since_reset(&self) -> usize {
        self.steps_since_reset
    }

    /// Start a new sequence with zero state of shape `[1, output_size]`
    pub fn reset_state(&mut self) {
        self.allocate_state(1);
    }

    /// Start a new sequence with zero state of shape `[batch_size, output_size]`
    ///
    /// # Errors
    /// [`CellError::InvalidConfig`] if `batch_size` is zero; the carried state is left untouched.
    pub fn reset_state_batched(&mut self, batch_size: usize) -> Result<()> {
        if batch_size == 0 {
            return Err(CellError::InvalidConfig("batch_size must be positive".into()));
        }
        self.allocate_state(batch_size);
        Ok(())
    }

    fn allocate_state(&mut self, batch_size: usize) {
        let output_size = self.cell.output_size();
        tracing::debug!(batch_size, output_size, "resetting lstm state");

        let device = self.cell.device();
        self.slot = StateSlot::Ready(LstmState::zeros(batch_size, output_size, &device));
        self.steps_since_reset = 0;
    }

    /// Feed one timestep
    ///
    /// # Arguments
    /// * `input` - Input tensor of shape `[batch_size, input_size]`
    ///
    /// # Returns
    /// The new output of shape `[batch_size, output_size]`. The new cell value is
    /// kept for the next step only.
    ///
    /// # Errors
    /// [`CellError::StateNotReady`] if the state was never reset.
    pub fn step(&mut self, input: Tensor<B, 2>) -> Result<Tensor<B, 2>> {
        let state = match &self.slot {
            StateSlot::Ready(state) => state.clone(),
            StateSlot::Uninitialized => {
                tracing::warn!("step called before reset_state");
                return Err(CellError::StateNotReady);
            }
        };

        tracing::trace!(step = self.steps_since_reset, "lstm step");

        let next = self.cell.forward(input, state);
        let output = next.output.clone();

        self.slot = StateSlot::Ready(next);
        self.steps_since_reset += 1;

        Ok(output)
    }

    /// Cut the carried state from the autodiff graph
    pub fn detach_state(&mut self) {
        if let StateSlot::Ready(state) = std::mem::take(&mut self.slot) {
            self.slot = StateSlot::Ready(state.detach());
        }
    }

    /// Copy the carried state to the host, `None` before the first reset
    pub fn snapshot(&self) -> Result<Option<StateSnapshot>> {
        self.state().map(LstmState::to_snapshot).transpose()
    }

    /// Resume from a snapshot taken on a cell of the same output size
    ///
    /// # Errors
    /// [`CellError::SnapshotMismatch`] if the snapshot does not fit this cell.
    pub fn restore(&mut self, snapshot: &StateSnapshot) -> Result<()> {
        let device = self.cell.device();
        let state = LstmState::from_snapshot(snapshot, self.cell.output_size(), &device)?;

        tracing::debug!(
            batch_size = snapshot.batch_size,
            output_size = snapshot.output_size,
            "restoring lstm state"
        );

        self.slot = StateSlot::Ready(state);
        self.steps_since_reset = 0;
        Ok(())
    }
}
