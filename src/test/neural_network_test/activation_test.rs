use super::*;

#[test]
fn test_activation_apply() {
    assert_abs_diff_eq!(Activation::Sigmoid.apply(0.0), 0.5);
    assert_eq!(Activation::ReLU.apply(-1.0), 0.0);
    assert_eq!(Activation::ReLU.apply(2.0), 2.0);
    assert_abs_diff_eq!(
        Activation::LeakyReLU { alpha: 0.2 }.apply(-1.0),
        -0.2,
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(Activation::Tanh.apply(0.5), 0.5_f64.tanh());
}

#[test]
fn test_activation_derivative_on_raw_input() {
    assert_abs_diff_eq!(Activation::Sigmoid.derivative(0.0), 0.25);
    assert_eq!(Activation::ReLU.derivative(0.0), 0.0);
    assert_eq!(Activation::ReLU.derivative(0.3), 1.0);
    assert_eq!(Activation::leaky_relu().derivative(-4.0), 0.01);
    assert_abs_diff_eq!(Activation::Tanh.derivative(0.0), 1.0);
}

#[test]
fn test_activation_names() {
    assert_eq!(Activation::Sigmoid.name(), "Sigmoid");
    assert_eq!(Activation::ReLU.name(), "ReLU");
    assert_eq!(Activation::leaky_relu().name(), "LeakyReLU");
    assert_eq!(Activation::Tanh.name(), "Tanh");
}

#[test]
fn test_activation_serde_tag() {
    let json = serde_json::to_string(&Activation::LeakyReLU { alpha: 0.05 }).unwrap();
    assert!(json.contains("\"kind\":\"LeakyReLU\""));

    let parsed: Activation = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, Activation::LeakyReLU { alpha: 0.05 });
}
