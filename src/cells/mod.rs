//! # Single-Timestep LSTM Cell
//!
//! This module provides an LSTM cell that processes one timestep at a time.
//! Two ways of driving it are available:
//!
//! | Type | State handling | Use Case |
//! |------|----------------|----------|
//! | [`LstmCell`] | Passed in and returned by [`LstmCell::forward`] | Custom loops, training code |
//! | [`StatefulLstmCell`] | Held internally, see [`StatefulLstmCell::step`] | Streaming one input at a time |
//!
//! ## Recurrence
//!
//! ```text
//! a       = proj_x(x) + proj_h(h)
//! i, f, o = σ(a[:, n..4n]) split in three
//! c'      = i × tanh(a[:, 0..n]) + f × c
//! h'      = o × tanh(c')
//! ```
//!
//! where `n = output_size`. Only `h'` is returned to callers; `c'` is carried.
//!
//! ## State Lifecycle
//!
//! ```text
//! Uninitialized --reset_state/restore--> Ready --step--> Ready
//!                                        Ready --reset_state--> Ready
//! ```
//!
//! Stepping an `Uninitialized` cell fails with
//! [`CellError::StateNotReady`](crate::error::CellError::StateNotReady).
//!
//! ## Tensor Shapes
//!
//! | Tensor | Shape | Description |
//! |--------|-------|-------------|
//! | `input` | `[batch, input_size]` | One timestep |
//! | `state.output` | `[batch, output_size]` | Previous output |
//! | `state.cell` | `[batch, output_size]` | Previous cell value |
//!
//! `reset_state` allocates a batch of one.
//!
//! ## Example
//!
//! ```ignore
//! use lstm_step::cells::{LstmCell, StatefulLstmCell};
//! use burn::tensor::Tensor;
//!
//! let device = Default::default();
//! let mut cell = StatefulLstmCell::new(LstmCell::<Backend>::new(3, 2, &device)?);
//!
//! cell.reset_state();
//! let x: Tensor<Backend, 2> = Tensor::from_floats([[1.0, 0.0, -1.0]], &device);
//! let h = cell.step(x)?; // [1, 2]
//! ```

pub mod lstm_cell;
pub mod state;
pub mod stateful;

pub use lstm_cell::{LstmCell, LstmCellConfig, LstmGates};
pub use state::{LstmState, StateSlot, StateSnapshot};
pub use stateful::StatefulLstmCell;
