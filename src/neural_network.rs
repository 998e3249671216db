/// Module that contains activation function implementations
pub mod activation;
/// Module that contains neural network layer implementations
pub mod layer;
/// Module that contains loss function implementations
pub mod loss_function;
/// Module that contains the layer stack orchestrating forward and backward passes
pub mod network;
/// Module that contains the traits shared by layers, loss functions and optimizers
pub mod neural_network_trait;
/// Module that contains optimization algorithms for neural network training
pub mod optimizer;

pub use activation::*;
pub use layer::*;
pub use loss_function::*;
pub use network::*;
pub use optimizer::*;

pub use crate::error::{IoError, ModelError};
pub use neural_network_trait::{Layer, LossFunction, Optimizer};
