//! Step an LSTM cell through a short sequence
//!
//! Demonstrates the reset/step lifecycle, snapshots and the
//! state-not-ready error. Run with `RUST_LOG=debug` to see the cell's logs.

use burn::backend::NdArray;
use burn::tensor::Tensor;
use lstm_step::prelude::*;
use tracing_subscriber::EnvFilter;

type Backend = NdArray<f32>;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== lstm-step Example ===\n");

    let device = Default::default();
    let cell = LstmCellConfig::new(3, 2).init::<Backend>(&device)?;
    let mut cell = StatefulLstmCell::new(cell);

    // Stepping before a reset is a usage error
    let x = Tensor::<Backend, 2>::from_floats([[1.0, 0.0, -1.0]], &device);
    match cell.step(x.clone()) {
        Err(err) => println!("Before reset: {}", err),
        Ok(_) => unreachable!("state was never reset"),
    }
    println!();

    println!("Stepping through a sequence:");
    cell.reset_state();
    let sequence = [[1.0, 0.0, -1.0], [0.0, 1.0, 0.0], [0.5, 0.5, 0.5]];
    for (t, row) in sequence.iter().enumerate() {
        let input = Tensor::<Backend, 2>::from_floats([*row], &device);
        let output = cell.step(input)?;
        println!("  t={}  input={:?}  output={}", t, row, output);
    }
    println!();

    let snapshot = cell.snapshot()?.expect("state was reset");
    println!("Carried state after {} steps:", cell.steps_since_reset());
    println!("  output: {:?}", snapshot.output);
    println!("  cell:   {:?}", snapshot.cell);
    println!();

    println!("Resetting clears history:");
    cell.reset_state();
    let first = cell.step(x.clone())?;
    cell.reset_state();
    let again = cell.step(x)?;
    println!("  first:  {}", first);
    println!("  again:  {}", again);

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
