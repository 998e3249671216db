/// Error types returned by network construction, training, sampling and persistence.
///
/// - `ModelError` - shape mismatches, invalid hyperparameters, missing configuration,
///   backward passes without a forward pass and sampling from an under-filled buffer
/// - `IoError` - file system and JSON failures while saving, loading or reading configuration
pub mod error;

/// Scalar activation functions, their derivatives and weight initialization helpers.
///
/// # Functions
/// - `sigmoid` / `sigmoid_derivative` - Logistic function, saturating for large |x|
/// - `relu` / `relu_derivative` - Rectified linear unit
/// - `leaky_relu` / `leaky_relu_derivative` - ReLU with a small negative slope
/// - `tanh` / `tanh_derivative` - Hyperbolic tangent
/// - `softmax` - Numerically stable in-place softmax over a slice
/// - `random_weight` - Uniform sample from the weight initialization range
///
/// # Example
/// ```rust
/// use neuralnet::math::{relu, sigmoid, sigmoid_derivative};
///
/// assert_eq!(sigmoid(0.0), 0.5);
/// assert_eq!(sigmoid_derivative(0.0), 0.25);
/// assert_eq!(relu(-3.0), 0.0);
/// ```
pub mod math;

/// A minimal feed-forward neural network engine.
///
/// # Components
/// - **Layers**: `Dense` (fully connected) and `ActivationLayer` (element-wise activation)
/// - **Loss functions**: `MeanSquaredError`
/// - **Optimizers**: `SGD` with momentum and `Adam`
/// - **Network**: an ordered layer stack with per-sample training, evaluation,
///   a summary table and JSON persistence
///
/// Layers, loss functions and optimizers are trait objects (`Layer`, `LossFunction`,
/// `Optimizer`); every one of them can be deep-copied through `duplicate`, which also
/// makes `Box<dyn Layer>` and friends `Clone`.
///
/// # Examples
/// ```rust
/// use neuralnet::neural_network::*;
///
/// let mut network = Network::new();
/// network
///     .add_layer(Dense::new(4, 8).unwrap())
///     .add_layer(ActivationLayer::relu())
///     .add_layer(Dense::new(8, 1).unwrap())
///     .set_loss(MeanSquaredError::new());
///
/// network.set_optimizer(&Adam::with_learning_rate(0.01).unwrap());
/// network.summary();
///
/// let inputs = vec![vec![1.0, 0.0, 0.5, 0.2]];
/// let targets = vec![vec![1.0]];
/// network.train(&inputs, &targets, 10, 0.01).unwrap();
///
/// let prediction = network.predict(&inputs[0]).unwrap();
/// assert_eq!(prediction.len(), 1);
/// ```
pub mod neural_network;

/// Fixed-capacity experience replay buffer for reinforcement learning.
pub mod replay_buffer;

/// Serde-backed description of a training run (epochs, learning rate, optimizer, progress bar).
pub mod config;

/// A convenience module that re-exports the most commonly used types and traits from this crate.
///
/// # Examples
/// ```rust
/// use neuralnet::prelude::*;
///
/// let mut network = Network::new();
/// network
///     .add_layer(Dense::new(2, 1).unwrap())
///     .set_loss(MeanSquaredError::new());
/// ```
pub mod prelude;
