use crate::math;
use serde::{Deserialize, Serialize};

/// Activation function enum, supporting Sigmoid, ReLU, LeakyReLU and Tanh
///
/// Each variant binds an element-wise nonlinearity to its derivative. Both are
/// evaluated on the raw (pre-activation) input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Activation {
    Sigmoid,
    ReLU,
    LeakyReLU { alpha: f64 },
    Tanh,
}

impl Activation {
    /// Leaky ReLU with the default slope of 0.01.
    pub fn leaky_relu() -> Self {
        Activation::LeakyReLU {
            alpha: math::DEFAULT_LEAKY_RELU_ALPHA,
        }
    }

    /// Forward application of the activation function to a single value
    ///
    /// # Parameters
    ///
    /// * `x` - Raw input value
    ///
    /// # Returns
    ///
    /// * `f64` - Activated value
    pub fn apply(&self, x: f64) -> f64 {
        match *self {
            Activation::Sigmoid => math::sigmoid(x),
            Activation::ReLU => math::relu(x),
            Activation::LeakyReLU { alpha } => math::leaky_relu(x, alpha),
            Activation::Tanh => math::tanh(x),
        }
    }

    /// Derivative of the activation function at the raw input `x`
    ///
    /// # Parameters
    ///
    /// * `x` - Raw input value that was fed to [`Activation::apply`]
    ///
    /// # Returns
    ///
    /// * `f64` - Value of the derivative
    pub fn derivative(&self, x: f64) -> f64 {
        match *self {
            Activation::Sigmoid => math::sigmoid_derivative(x),
            Activation::ReLU => math::relu_derivative(x),
            Activation::LeakyReLU { alpha } => math::leaky_relu_derivative(x, alpha),
            Activation::Tanh => math::tanh_derivative(x),
        }
    }

    /// Name used as the layer type of an activation layer
    pub fn name(&self) -> &'static str {
        match self {
            Activation::Sigmoid => "Sigmoid",
            Activation::ReLU => "ReLU",
            Activation::LeakyReLU { .. } => "LeakyReLU",
            Activation::Tanh => "Tanh",
        }
    }
}
