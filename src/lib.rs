//! # lstm-step - Single-Timestep LSTM Cell (Rust)
//!
//! An LSTM cell that consumes one timestep at a time and carries its
//! hidden/cell state between calls, built on the Burn framework.
//!
//! ## Features
//!
//! - **Pure recurrence**: [`LstmCell::forward`](cells::LstmCell::forward) takes and returns an explicit state
//! - **Stateful stepping**: [`StatefulLstmCell`](cells::StatefulLstmCell) with a typed reset/step lifecycle
//! - **Swappable initialization**: any Burn `Initializer`, uniform fan-out by default
//! - **Snapshots**: carried state can be copied out and restored
//!
//! ## Quick Start
//!
//! ```rust
//! use burn::backend::NdArray;
//! use burn::tensor::Tensor;
//! use lstm_step::prelude::*;
//!
//! type Backend = NdArray<f32>;
//! let device = Default::default();
//!
//! let cell = LstmCell::<Backend>::new(3, 2, &device).unwrap();
//! let mut cell = StatefulLstmCell::new(cell);
//!
//! cell.reset_state();
//! let x = Tensor::<Backend, 2>::from_floats([[1.0, 0.0, -1.0]], &device);
//! let h = cell.step(x).unwrap();
//!
//! assert_eq!(h.dims(), [1, 2]);
//! ```

pub mod cells;
pub mod error;
pub mod init;

pub mod prelude {
    pub use crate::cells::{
        LstmCell, LstmCellConfig, LstmGates, LstmState, StateSnapshot, StatefulLstmCell,
    };
    pub use crate::error::{CellError, Result};
    pub use crate::init::uniform_fan_out;
}
