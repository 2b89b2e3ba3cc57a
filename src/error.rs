use thiserror::Error;

/// Errors raised by the LSTM cell and its state lifecycle
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CellError {
    #[error("cell state is not initialized: call reset_state before stepping")]
    StateNotReady,
    #[error("invalid cell configuration: {0}")]
    InvalidConfig(String),
    #[error(
        "snapshot mismatch: expected output_size {expected_output_size} with {expected_len} values per tensor, got output_size {actual_output_size} with output={output_len}, cell={cell_len}"
    )]
    SnapshotMismatch {
        expected_output_size: usize,
        actual_output_size: usize,
        expected_len: usize,
        output_len: usize,
        cell_len: usize,
    },
    #[error("failed to read tensor data: {0}")]
    Data(String),
}

pub type Result<T> = std::result::Result<T, CellError>;
