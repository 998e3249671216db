use super::*;

#[test]
fn test_activation_layer_forward_backward_sigmoid() {
    let mut layer = ActivationLayer::sigmoid();

    let output = layer.forward(&[0.0, 1000.0]).unwrap();
    assert_abs_diff_eq!(output[0], 0.5);
    assert_eq!(output[1], 1.0);

    // Derivative is taken at the cached raw input
    let grad = layer.backward(&[2.0, 1.0], 0.1).unwrap();
    assert_abs_diff_eq!(grad[0], 0.5);
    assert_abs_diff_eq!(grad[1], 0.0);
}

#[test]
fn test_activation_layer_relu_gates_gradient() {
    let mut layer = ActivationLayer::relu();
    let output = layer.forward(&[-1.0, 0.0, 2.0]).unwrap();
    assert_eq!(output, vec![0.0, 0.0, 2.0]);

    let grad = layer.backward(&[3.0, 3.0, 3.0], 0.1).unwrap();
    assert_eq!(grad, vec![0.0, 0.0, 3.0]);
}

#[test]
fn test_activation_layer_backward_without_forward() {
    let mut layer = ActivationLayer::tanh();
    let result = layer.backward(&[1.0], 0.1);
    assert!(matches!(result, Err(ModelError::ProcessingError(_))));
}

#[test]
fn test_activation_layer_backward_consumes_cache() {
    let mut layer = ActivationLayer::relu();
    layer.forward(&[1.0]).unwrap();
    layer.backward(&[1.0], 0.1).unwrap();

    let result = layer.backward(&[1.0], 0.1);
    assert!(matches!(result, Err(ModelError::ProcessingError(_))));
}

#[test]
fn test_activation_layer_gradient_length_mismatch() {
    let mut layer = ActivationLayer::sigmoid();
    layer.forward(&[0.1, 0.2]).unwrap();
    let result = layer.backward(&[1.0], 0.1);
    assert!(matches!(result, Err(ModelError::InputValidationError(_))));
}

#[test]
fn test_activation_layer_metadata() {
    let layer = ActivationLayer::leaky_relu(0.3);
    assert_eq!(layer.layer_type(), "LeakyReLU");
    assert_eq!(layer.activation(), Activation::LeakyReLU { alpha: 0.3 });
    assert_eq!(layer.param_count(), TrainingParameters::NoTrainable);
    assert_eq!(layer.input_size(), None);
    assert!(matches!(layer.get_weights(), LayerWeight::Empty));
}

#[test]
fn test_activation_layer_duplicate_keeps_cache() {
    let mut layer = ActivationLayer::sigmoid();
    layer.forward(&[0.0, 2.0]).unwrap();

    let mut copy = layer.duplicate();
    let grad_copy = copy.backward(&[1.0, 1.0], 0.1).unwrap();

    // The original cache survives the copy's backward pass
    let grad_original = layer.backward(&[1.0, 1.0], 0.1).unwrap();
    assert_eq!(grad_copy, grad_original);
    assert_abs_diff_eq!(grad_copy[0], 0.25);
}
