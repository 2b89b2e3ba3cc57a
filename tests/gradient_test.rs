//! Gradient flow through the LSTM projections

use burn::backend::{Autodiff, NdArray};
use burn::tensor::{Distribution, Tensor};
use lstm_step::cells::{LstmCell, StatefulLstmCell};

type Backend = Autodiff<NdArray<f32>>;

#[test]
fn test_gradients_reach_both_projections() {
    let device = Default::default();
    let mut cell = StatefulLstmCell::new(LstmCell::<Backend>::new(3, 2, &device).unwrap());
    cell.reset_state();

    let x1 = Tensor::<Backend, 2>::from_floats([[1.0, 0.0, -1.0]], &device);
    let x2 = Tensor::<Backend, 2>::from_floats([[0.0, 1.0, 0.0]], &device);

    cell.step(x1).unwrap();
    let output = cell.step(x2).unwrap();
    let grads = output.sum().backward();

    let proj_x_grad = cell
        .cell()
        .proj_x()
        .weight
        .grad(&grads)
        .expect("input projection should receive a gradient");
    assert_eq!(proj_x_grad.dims(), [3, 8]);
    assert!(proj_x_grad.abs().sum().into_scalar() > 0.0);

    let proj_h_grad = cell
        .cell()
        .proj_h()
        .weight
        .grad(&grads)
        .expect("recurrent projection should receive a gradient");
    assert_eq!(proj_h_grad.dims(), [2, 8]);
    assert!(proj_h_grad.abs().sum().into_scalar() > 0.0);
}

#[test]
fn test_detached_state_still_steps() {
    let device = Default::default();
    let mut cell = StatefulLstmCell::new(LstmCell::<Backend>::new(4, 3, &device).unwrap());
    cell.reset_state();

    for _ in 0..3 {
        let input =
            Tensor::<Backend, 2>::random([1, 4], Distribution::Uniform(-1.0, 1.0), &device);
        cell.step(input).unwrap();
        cell.detach_state();
    }

    let output = cell
        .step(Tensor::<Backend, 2>::ones([1, 4], &device))
        .unwrap();
    let grads = output.sum().backward();

    assert!(cell.cell().proj_x().weight.grad(&grads).is_some());
    assert_eq!(cell.steps_since_reset(), 4);
}
