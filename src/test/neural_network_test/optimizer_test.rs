use super::*;

#[test]
fn test_sgd_new_validation() {
    assert!(SGD::new(0.01, 0.9).is_ok());
    assert!(SGD::new(0.0, 0.9).is_err());
    assert!(SGD::new(-0.1, 0.0).is_err());
    assert!(SGD::new(f64::NAN, 0.0).is_err());
    assert!(SGD::new(0.1, 1.0).is_err());
    assert!(SGD::new(0.1, -0.5).is_err());
}

#[test]
fn test_sgd_without_momentum_is_plain_gradient_descent() {
    let mut sgd = SGD::new(0.5, 0.0).unwrap();
    let mut weights = vec![1.0, -1.0, 0.0];
    let gradients = [0.2, -0.4, 1.0];

    sgd.update(&mut weights, &gradients).unwrap();
    assert_abs_diff_eq!(weights[0], 0.9, epsilon = 1e-12);
    assert_abs_diff_eq!(weights[1], -0.8, epsilon = 1e-12);
    assert_abs_diff_eq!(weights[2], -0.5, epsilon = 1e-12);

    sgd.update(&mut weights, &gradients).unwrap();
    assert_abs_diff_eq!(weights[0], 0.8, epsilon = 1e-12);
}

#[test]
fn test_sgd_momentum_accumulates_velocity() {
    let mut sgd = SGD::new(0.1, 0.9).unwrap();
    let mut weights = vec![0.0];

    sgd.update(&mut weights, &[1.0]).unwrap();
    assert_abs_diff_eq!(sgd.velocity()[0], -0.1, epsilon = 1e-12);
    assert_abs_diff_eq!(weights[0], -0.1, epsilon = 1e-12);

    sgd.update(&mut weights, &[1.0]).unwrap();
    assert_abs_diff_eq!(sgd.velocity()[0], -0.19, epsilon = 1e-12);
    assert_abs_diff_eq!(weights[0], -0.29, epsilon = 1e-12);
}

#[test]
fn test_sgd_length_mismatch() {
    let mut sgd = SGD::new(0.1, 0.0).unwrap();
    let mut weights = vec![0.0, 0.0];
    let result = sgd.update(&mut weights, &[1.0]);
    assert!(matches!(result, Err(ModelError::InputValidationError(_))));
    assert_eq!(weights, vec![0.0, 0.0]);
}

#[test]
fn test_adam_new_validation() {
    assert!(Adam::new(0.001, 0.9, 0.999, 1e-8).is_ok());
    assert!(Adam::new(0.0, 0.9, 0.999, 1e-8).is_err());
    assert!(Adam::new(0.001, 1.0, 0.999, 1e-8).is_err());
    assert!(Adam::new(0.001, 0.9, -0.1, 1e-8).is_err());
    assert!(Adam::new(0.001, 0.9, 0.999, 0.0).is_err());
    assert!(Adam::new(f64::INFINITY, 0.9, 0.999, 1e-8).is_err());
}

#[test]
fn test_adam_first_step() {
    let mut adam = Adam::new(0.1, 0.9, 0.999, 1e-8).unwrap();
    let mut weights = vec![1.0];

    adam.update(&mut weights, &[0.5]).unwrap();

    // m_hat = g and v_hat = g^2 after one step, so the step is ~learning_rate
    assert_eq!(adam.timestep(), 1);
    assert_relative_eq!(adam.first_moment()[0], 0.05, epsilon = 1e-12);
    assert_relative_eq!(adam.second_moment()[0], 0.00025, epsilon = 1e-12);
    assert_abs_diff_eq!(weights[0], 0.9, epsilon = 1e-6);
}

#[test]
fn test_adam_positive_gradients_decrease_weights() {
    let mut adam = Adam::default();
    let mut weights = vec![0.5, -0.5, 2.0];
    let gradients = [0.1, 0.1, 0.1];

    for step in 1..=5 {
        let before = weights.clone();
        adam.update(&mut weights, &gradients).unwrap();
        assert_eq!(adam.timestep(), step);
        for (after, before) in weights.iter().zip(&before) {
            assert!(after < before);
        }
    }
}

#[test]
fn test_optimizer_duplicate_copies_state() {
    let mut adam = Adam::with_learning_rate(0.01).unwrap();
    let mut weights = vec![1.0, 1.0];
    adam.update(&mut weights, &[0.3, -0.3]).unwrap();

    let boxed: Box<dyn Optimizer> = Box::new(adam.clone());
    let mut copy = boxed.clone();

    let mut weights_a = weights.clone();
    let mut weights_b = weights.clone();
    adam.update(&mut weights_a, &[0.3, -0.3]).unwrap();
    copy.update(&mut weights_b, &[0.3, -0.3]).unwrap();

    assert_eq!(weights_a, weights_b);
    assert_eq!(copy.optimizer_type(), "Adam");
    assert_abs_diff_eq!(copy.learning_rate(), 0.01);
}
