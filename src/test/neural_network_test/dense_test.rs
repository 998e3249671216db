use super::*;

fn fixed_dense() -> Dense {
    Dense::from_weights(array![[1.0, 2.0], [3.0, 4.0]], array![0.5, -0.5]).unwrap()
}

#[test]
fn test_dense_forward_known_weights() {
    let mut dense = fixed_dense();
    let output = dense.forward(&[1.0, 1.0]).unwrap();
    assert_abs_diff_eq!(output[0], 3.5);
    assert_abs_diff_eq!(output[1], 6.5);
}

#[test]
fn test_dense_forward_rejects_wrong_length() {
    let mut dense = fixed_dense();
    let result = dense.forward(&[1.0, 2.0, 3.0]);
    assert!(matches!(result, Err(ModelError::InputValidationError(_))));
}

#[test]
fn test_dense_backward_plain_gradient_descent() {
    let mut dense = fixed_dense();
    dense.forward(&[1.0, 1.0]).unwrap();

    let grad_input = dense.backward(&[1.0, 0.0], 0.1).unwrap();

    // Propagated with the pre-update weights: W^T * g
    assert_abs_diff_eq!(grad_input[0], 1.0);
    assert_abs_diff_eq!(grad_input[1], 2.0);

    let expected_weights = array![[0.9, 1.9], [3.0, 4.0]];
    for (w, e) in dense.weights().iter().zip(expected_weights.iter()) {
        assert_abs_diff_eq!(*w, *e, epsilon = 1e-12);
    }
    assert_abs_diff_eq!(dense.bias()[0], 0.4, epsilon = 1e-12);
    assert_abs_diff_eq!(dense.bias()[1], -0.5, epsilon = 1e-12);
}

#[test]
fn test_dense_backward_without_forward() {
    let mut dense = fixed_dense();
    let result = dense.backward(&[1.0, 0.0], 0.1);
    assert!(matches!(result, Err(ModelError::ProcessingError(_))));
}

#[test]
fn test_dense_backward_gradient_length_mismatch() {
    let mut dense = fixed_dense();
    dense.forward(&[1.0, 1.0]).unwrap();
    let result = dense.backward(&[1.0], 0.1);
    assert!(matches!(result, Err(ModelError::InputValidationError(_))));
}

#[test]
fn test_dense_optimizer_overrides_learning_rate() {
    let mut with_optimizer = fixed_dense();
    with_optimizer.set_optimizer(&SGD::new(0.1, 0.0).unwrap());
    assert!(with_optimizer.has_optimizer());

    let mut plain = fixed_dense();

    with_optimizer.forward(&[1.0, 1.0]).unwrap();
    plain.forward(&[1.0, 1.0]).unwrap();

    // The learning rate argument is ignored once an optimizer is attached
    with_optimizer.backward(&[1.0, 0.0], 100.0).unwrap();
    plain.backward(&[1.0, 0.0], 0.1).unwrap();

    for (a, b) in with_optimizer.weights().iter().zip(plain.weights().iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
    }
    for (a, b) in with_optimizer.bias().iter().zip(plain.bias().iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
    }
}

#[test]
fn test_dense_non_square_optimizer_matches_plain_update() {
    let weights = array![[0.1, 0.2, 0.3], [-0.4, 0.5, -0.6]];
    let bias = array![0.0, 1.0];
    let mut with_optimizer = Dense::from_weights(weights.clone(), bias.clone()).unwrap();
    with_optimizer.set_optimizer(&SGD::new(0.1, 0.0).unwrap());
    let mut plain = Dense::from_weights(weights, bias).unwrap();

    let input = [1.0, 2.0, 3.0];
    with_optimizer.forward(&input).unwrap();
    plain.forward(&input).unwrap();

    let grad_a = with_optimizer.backward(&[1.0, -1.0], 100.0).unwrap();
    let grad_b = plain.backward(&[1.0, -1.0], 0.1).unwrap();
    assert_eq!(grad_a, grad_b);

    // W -= 0.1 * (g ⊗ x), row-major
    let expected = array![[0.0, 0.0, 0.0], [-0.3, 0.7, -0.3]];
    for ((a, b), e) in with_optimizer
        .weights()
        .iter()
        .zip(plain.weights().iter())
        .zip(expected.iter())
    {
        assert_abs_diff_eq!(*a, *e, epsilon = 1e-12);
        assert_abs_diff_eq!(*b, *e, epsilon = 1e-12);
    }
    assert_abs_diff_eq!(with_optimizer.bias()[0], -0.1, epsilon = 1e-12);
    assert_abs_diff_eq!(with_optimizer.bias()[1], 1.1, epsilon = 1e-12);
}

#[test]
fn test_dense_set_optimizer_gives_independent_copies() {
    let mut dense = Dense::from_weights(Array2::zeros((2, 3)), Array1::zeros(2)).unwrap();
    dense.set_optimizer(&SGD::new(0.1, 0.5).unwrap());

    assert_eq!(dense.weight_optimizer().map(|o| o.optimizer_type()), Some("SGD"));
    assert_eq!(dense.bias_optimizer().map(|o| o.optimizer_type()), Some("SGD"));

    dense.forward(&[1.0, 2.0, 3.0]).unwrap();
    dense.backward(&[1.0, -1.0], 0.1).unwrap();

    // A zero-gradient step moves parameters by momentum * velocity, exposing
    // the velocity each optimizer holds. Each one is sized to its own vector.
    let mut weight_optimizer = dense.weight_optimizer().unwrap().duplicate();
    let mut flat_weights = vec![0.0; 6];
    weight_optimizer.update(&mut flat_weights, &[0.0; 6]).unwrap();
    let expected_weights = [-0.05, -0.1, -0.15, 0.05, 0.1, 0.15];
    for (w, e) in flat_weights.iter().zip(expected_weights.iter()) {
        assert_abs_diff_eq!(*w, *e, epsilon = 1e-12);
    }

    let mut bias_optimizer = dense.bias_optimizer().unwrap().duplicate();
    let mut bias = vec![0.0; 2];
    bias_optimizer.update(&mut bias, &[0.0; 2]).unwrap();
    assert_abs_diff_eq!(bias[0], -0.05, epsilon = 1e-12);
    assert_abs_diff_eq!(bias[1], 0.05, epsilon = 1e-12);
}

#[test]
fn test_dense_rejects_invalid_shapes() {
    assert!(matches!(
        Dense::new(0, 3),
        Err(ModelError::InputValidationError(_))
    ));
    assert!(matches!(
        Dense::from_weights(Array2::zeros((2, 3)), Array1::zeros(3)),
        Err(ModelError::InputValidationError(_))
    ));

    let mut dense = fixed_dense();
    let result = dense.set_weights(Array2::zeros((3, 2)), Array1::zeros(3));
    assert!(matches!(result, Err(ModelError::InputValidationError(_))));
}

#[test]
fn test_dense_seeded_initialization() {
    let mut rng_a = StdRng::seed_from_u64(3);
    let mut rng_b = StdRng::seed_from_u64(3);
    let a = Dense::with_rng(4, 2, &mut rng_a).unwrap();
    let b = Dense::with_rng(4, 2, &mut rng_b).unwrap();

    assert_eq!(a.weights(), b.weights());
    assert_eq!(a.bias(), b.bias());
    assert!(a.weights().iter().all(|w| (-1.0..=1.0).contains(w)));
}

#[test]
fn test_dense_metadata() {
    let dense = Dense::new(3, 5).unwrap();
    assert_eq!(dense.layer_type(), "Dense");
    assert_eq!(dense.output_shape(), "(None, 5)");
    assert_eq!(dense.param_count(), TrainingParameters::Trainable(20));
    assert_eq!(dense.input_size(), Some(3));
    assert_eq!(dense.output_size(), Some(5));
    assert_eq!(dense.get_input_size(), 3);
    assert_eq!(dense.get_output_size(), 5);
}

#[test]
fn test_dense_duplicate_is_independent() {
    let mut original = fixed_dense();
    let mut copy = original.duplicate();

    original.forward(&[1.0, 1.0]).unwrap();
    original.backward(&[1.0, 1.0], 0.5).unwrap();

    let copy_output = copy.forward(&[1.0, 1.0]).unwrap();
    assert_abs_diff_eq!(copy_output[0], 3.5);
    assert_abs_diff_eq!(copy_output[1], 6.5);
}
